//! Behavioral specs for the `fv` binary.
//!
//! Each spec runs the built binary against fixture logs in a temp directory.

#[path = "specs/prelude.rs"]
mod prelude;

#[path = "specs/cli"]
mod cli {
    mod help;
    mod list;
    mod show;
}
