//! # Presentation Layer
//!
//! Turns the built status graph into tables on stdout.
//!
//! ```text
//! [ Controllers ] --> [ Presenters ] --> [ ViewModels ] --> [ Renderer ] --> stdout
//!   (domain graph)     (row builders)     (cells + tone)     (tabled + ANSI)
//! ```
//!
//! * `view_models`: cells carry raw display text plus an optional semantic
//!   [`xjs_types::Tone`]. No ANSI codes live here, so the same rows render
//!   plain or colored.
//! * `presenters`: one module per table. Ordering, leader markers,
//!   subordinate indentation and the controller/model prefix columns are
//!   decided here.
//! * `renderers`: paints tones with `owo-colors` and lays tables out with
//!   `tabled`; also prints the JSON form of the graph.

pub mod presenters;
pub mod renderers;
pub mod view_models;

pub use presenters::{DisplayOptions, present_status};
pub use renderers::{ConsoleRenderer, paint};
pub use view_models::{CellViewModel, StatusViewModel, TableViewModel};
