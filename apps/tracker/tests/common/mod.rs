#![allow(dead_code)]

// Logging is auto-installed for every test binary that declares `mod common`.
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}
