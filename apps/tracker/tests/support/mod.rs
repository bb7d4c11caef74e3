#![allow(dead_code)]

pub mod app_builder;
pub mod auth;
pub mod factory;
