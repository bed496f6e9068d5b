// Engine: builds the status graph from parsed documents and post-processes it
// (filtering, revision annotation) ahead of presentation.

pub mod builder;
pub mod error;
pub mod filter;
pub mod revisions;

pub use builder::{build_controller, load_controller};
pub use error::{Error, Result};
pub use filter::{
    FilterOptions, apply_filters, filter_applications, filter_dictionary, filter_models,
    filter_units, reset_machines,
};
pub use revisions::{RevisionLookup, RevisionTable, annotate_revisions, collect_charm_ids};

use std::path::Path;
use xjs_types::Controller;

/// Load every report, one controller each, stopping at the first failure
pub fn load_controllers<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<Controller>> {
    paths
        .iter()
        .map(|path| load_controller(path.as_ref()))
        .collect()
}
