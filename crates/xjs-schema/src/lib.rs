// Error types
pub mod error;

// Raw document layout
pub mod schema;

// Schema variant detection and adapters
pub mod shapes;

// Charm reference decomposition
pub mod charm;

pub mod hardware;

// Entity construction
pub mod normalize;

// Document loading
pub mod io;

pub use charm::{CharmRef, latest_revision_from_upgrade};
pub use error::{Error, Result};
pub use hardware::parse_hardware;
pub use io::{DocumentFormat, load_document, parse_document};
pub use normalize::{
    application_from, controller_from, machine_from, model_from, subordinate_from, unit_from,
};
pub use schema::StatusDocument;
