use super::application::Application;
use super::machine::{Container, Machine};
use super::relation::Relation;
use super::status::{NOT_AVAILABLE, StatusInfo};
use super::unit::{MachineKind, Placement, SubordinateLink, classify_machine_id};
use crate::util::strip_unit_suffix;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeterStatus {
    pub color: String,
    pub message: String,
}

/// One deployment scope. Owns every application, machine, container and
/// relation in it; everything else refers to those by name.
#[derive(Debug, Clone, Serialize)]
pub struct Model {
    pub name: String,
    pub model_type: String,
    pub controller: String,
    pub cloud: String,
    pub region: Option<String>,
    pub version: String,
    pub status: StatusInfo,
    pub sla: String,
    pub meter: Option<MeterStatus>,
    applications: BTreeMap<String, Application>,
    machines: BTreeMap<String, Machine>,
    containers: BTreeMap<String, Container>,
    relations: BTreeMap<String, Vec<Relation>>,
}

impl Model {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model_type: NOT_AVAILABLE.to_string(),
            controller: NOT_AVAILABLE.to_string(),
            cloud: NOT_AVAILABLE.to_string(),
            region: None,
            version: NOT_AVAILABLE.to_string(),
            status: StatusInfo::default(),
            sla: NOT_AVAILABLE.to_string(),
            meter: None,
            applications: BTreeMap::new(),
            machines: BTreeMap::new(),
            containers: BTreeMap::new(),
            relations: BTreeMap::new(),
        }
    }

    /// `cloud/region`, or just the cloud when no region is known
    pub fn cloud_region(&self) -> String {
        match &self.region {
            Some(region) => format!("{}/{}", self.cloud, region),
            None => self.cloud.clone(),
        }
    }

    // --- Applications ---

    pub fn add_application(&mut self, application: Application) {
        self.applications
            .insert(application.name.clone(), application);
    }

    pub fn get_application(&self, name: &str) -> Option<&Application> {
        self.applications.get(name)
    }

    pub fn get_application_mut(&mut self, name: &str) -> Option<&mut Application> {
        self.applications.get_mut(name)
    }

    pub fn applications(&self) -> impl Iterator<Item = &Application> {
        self.applications.values()
    }

    pub fn applications_mut(&mut self) -> &mut BTreeMap<String, Application> {
        &mut self.applications
    }

    // --- Machines and containers ---

    pub fn add_machine(&mut self, machine: Machine) {
        self.machines.insert(machine.core.name.clone(), machine);
    }

    pub fn get_machine(&self, name: &str) -> Option<&Machine> {
        self.machines.get(name)
    }

    pub fn machines(&self) -> impl Iterator<Item = &Machine> {
        self.machines.values()
    }

    pub fn machines_mut(&mut self) -> &mut BTreeMap<String, Machine> {
        &mut self.machines
    }

    pub fn add_container(&mut self, container: Container) {
        self.containers
            .insert(container.core.name.clone(), container);
    }

    pub fn get_container(&self, name: &str) -> Option<&Container> {
        self.containers.get(name)
    }

    pub fn containers(&self) -> impl Iterator<Item = &Container> {
        self.containers.values()
    }

    pub fn containers_mut(&mut self) -> &mut BTreeMap<String, Container> {
        &mut self.containers
    }

    /// Resolve a unit's raw machine id against the registry its shape
    /// selects. `None` when nothing by that name is registered.
    pub fn resolve_placement(&self, machine_id: &str) -> Option<Placement> {
        match classify_machine_id(machine_id) {
            MachineKind::Container => self
                .get_container(machine_id)
                .map(|c| Placement::Container(c.core.name.clone())),
            MachineKind::Machine => self
                .get_machine(machine_id)
                .map(|m| Placement::Machine(m.core.name.clone())),
        }
    }

    // --- Relations ---

    /// Store a relation under its endpoint name unless that endpoint already
    /// pairs the same two applications. Returns whether it was stored.
    pub fn add_relation(&mut self, relation: Relation) -> bool {
        let entries = self.relations.entry(relation.name.clone()).or_default();
        let duplicate = entries
            .iter()
            .any(|existing| existing.pairs(&relation.application, relation.partner_name()));

        if duplicate {
            return false;
        }
        entries.push(relation);
        true
    }

    /// Relation on endpoint `name` between `a` and `b`, in either order
    pub fn get_relation(&self, name: &str, a: &str, b: &str) -> Option<&Relation> {
        self.relations
            .get(name)?
            .iter()
            .find(|relation| relation.pairs(a, b))
    }

    pub fn relations(&self) -> impl Iterator<Item = &Relation> {
        self.relations.values().flatten()
    }

    pub fn relations_mut(&mut self) -> &mut BTreeMap<String, Vec<Relation>> {
        &mut self.relations
    }

    // --- Subordinates ---

    /// Attach every subordinate unit to the application it is a unit of.
    ///
    /// The application is found by stripping the unit number from the
    /// subordinate's own name, so `ntp/3` on `mysql/0` belongs to `ntp`.
    /// Subordinates whose application is absent stay unlinked. A subordinate
    /// upgrading from a charm other than its application's gets a note.
    pub fn link_subordinates(&mut self) {
        let mut links: Vec<(String, String, String, SubordinateLink)> = Vec::new();

        for app in self.applications.values() {
            for unit in app.units() {
                for sub in unit.subordinates() {
                    let parent = strip_unit_suffix(sub.name());
                    if !self.applications.contains_key(parent) {
                        continue;
                    }
                    links.push((
                        parent.to_string(),
                        sub.name().to_string(),
                        app.name.clone(),
                        SubordinateLink {
                            principal: unit.name().to_string(),
                            principal_application: app.name.clone(),
                            placement: unit.placement.clone(),
                        },
                    ));
                }
            }
        }

        for (parent, sub_name, host_app, link) in links {
            let principal = link.principal.clone();
            let parent_charm = self
                .applications
                .get(&parent)
                .map(|app| app.charm.clone())
                .unwrap_or_default();

            if let Some(unit) = self
                .applications
                .get_mut(&host_app)
                .and_then(|app| app.units_mut().get_mut(&principal))
                && let Some(sub) = unit.subordinates_mut().get_mut(&sub_name)
            {
                sub.application = Some(parent.clone());
                if let Some(from) = sub.upgrading_from.clone()
                    && from != parent_charm
                {
                    sub.core.add_note(format!("Upgrading from {}", from));
                }
            }

            if let Some(app) = self.applications.get_mut(&parent) {
                app.register_subordinate(sub_name, link);
            }
        }
    }
}
