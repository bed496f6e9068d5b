use super::status::{NOT_AVAILABLE, StatusInfo};
use super::unit::{SubordinateLink, Unit};
use serde::Serialize;
use std::collections::BTreeMap;

/// Charm origin meaning "the public charm store"
pub const DEFAULT_CHARM_ORIGIN: &str = "jujucharms";

/// Sentinel for "latest charm revision not known"
pub const UNKNOWN_REVISION: i64 = -1;

#[derive(Debug, Clone, Serialize)]
pub struct Application {
    pub name: String,
    /// Charm reference exactly as the document spelled it
    pub charm: String,
    pub series: String,
    pub os: String,
    pub version: String,
    pub charm_origin: String,
    pub charm_name: String,
    pub charm_rev: i64,
    pub charm_latest_rev: i64,
    /// Canonical store id used for revision lookups; empty for local charms
    pub charm_id: String,
    pub exposed: bool,
    pub status: StatusInfo,
    /// Endpoint name -> related application names, as found in the document
    pub relations: BTreeMap<String, Vec<String>>,
    pub endpoint_bindings: BTreeMap<String, String>,
    notes: Vec<String>,
    units: BTreeMap<String, Unit>,
    subordinates: BTreeMap<String, SubordinateLink>,
    placeholder: bool,
    revisions_annotated: bool,
}

impl Application {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            charm: String::new(),
            series: NOT_AVAILABLE.to_string(),
            os: NOT_AVAILABLE.to_string(),
            version: NOT_AVAILABLE.to_string(),
            charm_origin: DEFAULT_CHARM_ORIGIN.to_string(),
            charm_name: String::new(),
            charm_rev: 0,
            charm_latest_rev: UNKNOWN_REVISION,
            charm_id: String::new(),
            exposed: false,
            status: StatusInfo::default(),
            relations: BTreeMap::new(),
            endpoint_bindings: BTreeMap::new(),
            notes: Vec::new(),
            units: BTreeMap::new(),
            subordinates: BTreeMap::new(),
            placeholder: false,
            revisions_annotated: false,
        }
    }

    /// Stand-in for a relation partner the document does not describe
    pub fn placeholder(name: impl Into<String>) -> Self {
        let mut app = Self::new(name);
        app.placeholder = true;
        app
    }

    pub fn is_placeholder(&self) -> bool {
        self.placeholder
    }

    pub fn is_from_store(&self) -> bool {
        self.charm_origin == DEFAULT_CHARM_ORIGIN
    }

    /// Number of principal units
    pub fn scale(&self) -> usize {
        self.units.len()
    }

    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    pub fn add_note(&mut self, note: impl Into<String>) {
        self.notes.push(note.into());
    }

    pub fn add_unit(&mut self, unit: Unit) {
        self.units.insert(unit.core.name.clone(), unit);
    }

    pub fn get_unit(&self, name: &str) -> Option<&Unit> {
        self.units.get(name)
    }

    pub fn units(&self) -> impl Iterator<Item = &Unit> {
        self.units.values()
    }

    pub fn units_mut(&mut self) -> &mut BTreeMap<String, Unit> {
        &mut self.units
    }

    /// Record a subordinate unit (hosted by another application's unit)
    /// as belonging to this application.
    pub fn register_subordinate(&mut self, name: impl Into<String>, link: SubordinateLink) {
        self.subordinates.insert(name.into(), link);
    }

    pub fn subordinates(&self) -> &BTreeMap<String, SubordinateLink> {
        &self.subordinates
    }

    pub fn subordinates_mut(&mut self) -> &mut BTreeMap<String, SubordinateLink> {
        &mut self.subordinates
    }

    /// Settle `charm_latest_rev` and derive the revision notes.
    ///
    /// `looked_up` is the revision reported by an external lookup, if one ran.
    /// Runs at most once per application; later calls are ignored.
    pub fn apply_latest_revision(&mut self, looked_up: Option<i64>) {
        if self.revisions_annotated {
            return;
        }
        self.revisions_annotated = true;

        if let Some(revision) = looked_up
            && revision > self.charm_latest_rev
        {
            self.charm_latest_rev = revision;
        }

        if self.charm_latest_rev == UNKNOWN_REVISION {
            return;
        }

        if self.charm_latest_rev > self.charm_rev {
            let note = format!("Revision {} Available", self.charm_latest_rev);
            self.add_note(note);
        } else if self.charm_latest_rev < self.charm_rev {
            self.add_note("Using Non-Stable Rev");
        }
    }
}
