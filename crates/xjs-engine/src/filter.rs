use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;
use xjs_types::{Controller, Model, Placement};

/// Name-substring filters; `None` keeps everything
#[derive(Debug, Clone, Default)]
pub struct FilterOptions {
    pub model: Option<String>,
    pub application: Option<String>,
    pub unit: Option<String>,
}

impl FilterOptions {
    pub fn is_empty(&self) -> bool {
        self.model.is_none() && self.application.is_none() && self.unit.is_none()
    }
}

/// Keep entries whose key contains `substring` (case-sensitive)
pub fn filter_dictionary<V>(map: &mut BTreeMap<String, V>, substring: &str) {
    map.retain(|name, _| name.contains(substring));
}

pub fn filter_models(controller: &mut Controller, substring: &str) {
    filter_dictionary(controller.models_mut(), substring);
}

/// Keep matching applications plus the principal applications hosting
/// their subordinate units, then narrow machines to what the survivors use.
pub fn filter_applications(model: &mut Model, substring: &str) {
    let mut keep: BTreeSet<String> = BTreeSet::new();

    for app in model.applications().filter(|app| app.name.contains(substring)) {
        keep.insert(app.name.clone());
        for link in app.subordinates().values() {
            if keep.insert(link.principal_application.clone()) {
                debug!(
                    application = %link.principal_application,
                    subordinate = %app.name,
                    "keeping principal application"
                );
            }
        }
    }

    model.applications_mut().retain(|name, _| keep.contains(name));
    model.relations_mut().retain(|_, relations| {
        relations.retain(|r| keep.contains(&r.application) || keep.contains(r.partner_name()));
        !relations.is_empty()
    });

    reset_machines(model);
}

/// Keep principal units whose name contains `substring`
pub fn filter_units(model: &mut Model, substring: &str) {
    for app in model.applications_mut().values_mut() {
        filter_dictionary(app.units_mut(), substring);
    }
}

/// Recompute visible machines and containers from the remaining units and
/// subordinate units. A container keeps its host machine visible, and each
/// machine forgets containers that are no longer visible.
pub fn reset_machines(model: &mut Model) {
    let mut machines: BTreeSet<String> = BTreeSet::new();
    let mut containers: BTreeSet<String> = BTreeSet::new();

    for app in model.applications() {
        let placements = app
            .units()
            .map(|unit| unit.placement.as_ref())
            .chain(app.subordinates().values().map(|link| link.placement.as_ref()));

        for placement in placements.flatten() {
            match placement {
                Placement::Machine(name) => {
                    machines.insert(name.clone());
                }
                Placement::Container(name) => {
                    containers.insert(name.clone());
                    if let Some(container) = model.get_container(name) {
                        machines.insert(container.machine.clone());
                    }
                }
            }
        }
    }

    model.machines_mut().retain(|name, _| machines.contains(name));
    model.containers_mut().retain(|name, _| containers.contains(name));
    for machine in model.machines_mut().values_mut() {
        machine.retain_containers(|name| containers.contains(name));
    }

    debug!(
        model = %model.name,
        machines = machines.len(),
        containers = containers.len(),
        "reset machines"
    );
}

/// Apply every configured filter to every controller
pub fn apply_filters(controllers: &mut [Controller], options: &FilterOptions) {
    for controller in controllers.iter_mut() {
        if let Some(substring) = &options.model {
            filter_models(controller, substring);
        }
        for model in controller.models_mut().values_mut() {
            if let Some(substring) = &options.application {
                filter_applications(model, substring);
            }
            if let Some(substring) = &options.unit {
                filter_units(model, substring);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_dictionary_is_case_sensitive_substring() {
        let mut map: BTreeMap<String, u8> = ["mysql", "mysql-router", "MySQL", "keystone"]
            .into_iter()
            .map(|k| (k.to_string(), 0))
            .collect();

        filter_dictionary(&mut map, "mysql");

        let keys: Vec<_> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, ["mysql", "mysql-router"]);
    }

    #[test]
    fn test_empty_options() {
        assert!(FilterOptions::default().is_empty());
        let options = FilterOptions {
            unit: Some("/0".to_string()),
            ..Default::default()
        };
        assert!(!options.is_empty());
    }
}
