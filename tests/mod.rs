//! # Integration tests
//!
//! Integration tests completely external from the crate. All code written in this module could be
//! written by an external user of the crate.
mod properties;

/// Show the crate's diagnostics while testing, set `RUST_LOG=trace` to see them.
fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
