use super::status::StatusInfo;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Shown for a unit that has no address or machine yet
pub const PENDING: &str = "PENDING";

static CONTAINER_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+/(lxc|lxd|kvm)/\d+$").unwrap());

/// Which registry a raw machine id belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MachineKind {
    Machine,
    Container,
}

/// `"0/lxd/2"` is a container, anything else a bare machine
pub fn classify_machine_id(machine_id: &str) -> MachineKind {
    if CONTAINER_ID_REGEX.is_match(machine_id) {
        MachineKind::Container
    } else {
        MachineKind::Machine
    }
}

/// Resolved host of a unit, by name into the owning model's registries
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum Placement {
    Machine(String),
    Container(String),
}

impl Placement {
    pub fn name(&self) -> &str {
        match self {
            Placement::Machine(name) | Placement::Container(name) => name,
        }
    }
}

/// Fields shared by principal and subordinate units
#[derive(Debug, Clone, Serialize)]
pub struct UnitCore {
    pub name: String,
    pub workload: StatusInfo,
    pub agent: StatusInfo,
    pub agent_version: String,
    pub public_address: String,
    pub open_ports: Vec<String>,
    pub leader: bool,
    notes: Vec<String>,
}

impl UnitCore {
    pub fn new(name: impl Into<String>, workload: StatusInfo, agent: StatusInfo) -> Self {
        Self {
            name: name.into(),
            workload,
            agent,
            agent_version: super::status::NOT_AVAILABLE.to_string(),
            public_address: PENDING.to_string(),
            open_ports: Vec::new(),
            leader: false,
            notes: Vec::new(),
        }
    }

    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    pub fn add_note(&mut self, note: impl Into<String>) {
        self.notes.push(note.into());
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Unit {
    #[serde(flatten)]
    pub core: UnitCore,
    /// Owning application name
    pub application: String,
    /// Machine id as written in the document
    pub machine_id: Option<String>,
    /// `None` until the unit is assigned a machine the model knows about
    pub placement: Option<Placement>,
    subordinates: BTreeMap<String, SubordinateUnit>,
}

impl Unit {
    pub fn new(core: UnitCore, application: impl Into<String>) -> Self {
        Self {
            core,
            application: application.into(),
            machine_id: None,
            placement: None,
            subordinates: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.core.name
    }

    pub fn add_subordinate(&mut self, subordinate: SubordinateUnit) {
        self.subordinates
            .insert(subordinate.core.name.clone(), subordinate);
    }

    pub fn subordinates(&self) -> impl Iterator<Item = &SubordinateUnit> {
        self.subordinates.values()
    }

    pub fn subordinates_mut(&mut self) -> &mut BTreeMap<String, SubordinateUnit> {
        &mut self.subordinates
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SubordinateUnit {
    #[serde(flatten)]
    pub core: UnitCore,
    pub upgrading_from: Option<String>,
    /// Principal unit hosting this subordinate
    pub unit: String,
    /// Application this subordinate is a unit of, once linked
    pub application: Option<String>,
}

impl SubordinateUnit {
    pub fn new(core: UnitCore, unit: impl Into<String>) -> Self {
        Self {
            core,
            upgrading_from: None,
            unit: unit.into(),
            application: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.core.name
    }
}

/// Back-reference kept by a subordinate application for each of its units
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubordinateLink {
    pub principal: String,
    /// Application of the principal unit
    pub principal_application: String,
    pub placement: Option<Placement>,
}
