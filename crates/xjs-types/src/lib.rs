pub mod domain;
pub mod error;
pub mod tone;
mod util;

pub use domain::*;
pub use error::{Error, Result};
pub use tone::Tone;
pub use util::*;
