mod entries;
mod profile;
