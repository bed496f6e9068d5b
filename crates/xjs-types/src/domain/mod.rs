mod application;
mod controller;
mod machine;
mod model;
mod relation;
mod status;
mod unit;

pub use application::{Application, DEFAULT_CHARM_ORIGIN, UNKNOWN_REVISION};
pub use controller::Controller;
pub use machine::{Container, Hardware, Machine, MachineCore, NetworkInterface};
pub use model::{MeterStatus, Model};
pub use relation::{Relation, RelationPeer};
pub use status::{NOT_AVAILABLE, StatusInfo};
pub use unit::{
    MachineKind, PENDING, Placement, SubordinateLink, SubordinateUnit, Unit, UnitCore,
    classify_machine_id,
};
