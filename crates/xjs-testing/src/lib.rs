//! Testing infrastructure for xjs integration tests.
//!
//! - `TestWorld`: isolated temp directory to run the binary in
//! - `fixtures`: the sample status reports shipped with `xjs-schema`

pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
