use super::status::{NOT_AVAILABLE, StatusInfo};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Hardware characteristics from the `key=value key=value` string
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Hardware(BTreeMap<String, String>);

impl Hardware {
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Attribute value, or an empty string when absent
    pub fn get(&self, key: &str) -> &str {
        self.0.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn arch(&self) -> &str {
        self.get("arch")
    }

    pub fn cores(&self) -> &str {
        self.get("cores")
    }

    pub fn mem(&self) -> &str {
        self.get("mem")
    }

    pub fn root_disk(&self) -> &str {
        self.get("root-disk")
    }

    pub fn availability_zone(&self) -> &str {
        self.get("availability-zone")
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkInterface {
    pub name: String,
    /// Machine or container carrying the interface
    pub owner: String,
    pub ip_addresses: Vec<String>,
    pub mac_address: String,
    pub up: bool,
    pub space: Option<String>,
    pub gateway: Option<String>,
    notes: Vec<String>,
}

impl NetworkInterface {
    pub fn new(name: impl Into<String>, owner: impl Into<String>, mac_address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            owner: owner.into(),
            ip_addresses: Vec::new(),
            mac_address: mac_address.into(),
            up: false,
            space: None,
            gateway: None,
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

/// Fields shared by machines and containers
#[derive(Debug, Clone, Serialize)]
pub struct MachineCore {
    pub name: String,
    pub agent: StatusInfo,
    pub agent_version: String,
    pub dns_name: String,
    pub ip_addresses: Vec<String>,
    pub instance_id: String,
    pub machine_status: StatusInfo,
    pub series: String,
    pub constraints: String,
    pub hardware: Hardware,
    notes: Vec<String>,
    interfaces: BTreeMap<String, NetworkInterface>,
}

impl MachineCore {
    pub fn new(name: impl Into<String>, instance_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            agent: StatusInfo::default(),
            agent_version: NOT_AVAILABLE.to_string(),
            dns_name: String::new(),
            ip_addresses: Vec::new(),
            instance_id: instance_id.into(),
            machine_status: StatusInfo::default(),
            series: NOT_AVAILABLE.to_string(),
            constraints: String::new(),
            hardware: Hardware::default(),
            notes: Vec::new(),
            interfaces: BTreeMap::new(),
        }
    }

    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    pub fn add_note(&mut self, note: impl Into<String>) {
        self.notes.push(note.into());
    }

    pub fn add_interface(&mut self, interface: NetworkInterface) {
        self.interfaces.insert(interface.name.clone(), interface);
    }

    pub fn interfaces(&self) -> impl Iterator<Item = &NetworkInterface> {
        self.interfaces.values()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Machine {
    #[serde(flatten)]
    pub core: MachineCore,
    /// Names of hosted containers, resolved through the model's container registry
    containers: BTreeSet<String>,
}

impl Machine {
    pub fn new(core: MachineCore) -> Self {
        Self {
            core,
            containers: BTreeSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.core.name
    }

    pub fn add_container(&mut self, name: impl Into<String>) {
        self.containers.insert(name.into());
    }

    pub fn containers(&self) -> impl Iterator<Item = &str> {
        self.containers.iter().map(String::as_str)
    }

    pub fn has_container(&self, name: &str) -> bool {
        self.containers.contains(name)
    }

    /// Drop container names for which `keep` returns false
    pub fn retain_containers(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.containers.retain(|name| keep(name));
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Container {
    #[serde(flatten)]
    pub core: MachineCore,
    /// Host machine name
    pub machine: String,
}

impl Container {
    pub fn new(core: MachineCore, machine: impl Into<String>) -> Self {
        Self {
            core,
            machine: machine.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.core.name
    }
}
