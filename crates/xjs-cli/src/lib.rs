// NOTE: xjs Architecture Rationale
//
// Why build the whole graph before rendering?
// - The controller timestamp is only known after every `since` was seen
// - Filters prune machines from what the surviving units reference
// - Revision notes need one batched lookup across all applications
//
// Why tones instead of colors in the view models?
// - The same rows serve plain output, colored output and tests
// - Color choice stays a renderer concern

mod args;
mod commands;
pub mod config;
pub mod logging;
pub mod lookup;
pub mod presentation;
pub mod types;

pub use args::{Cli, FilterArgs, SectionArgs};
pub use commands::run;
