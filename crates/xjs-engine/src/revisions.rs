use crate::Result;
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, warn};
use xjs_types::Controller;

/// Latest published revision per charm store id
pub type RevisionTable = BTreeMap<String, i64>;

/// Source of latest charm revisions, asked once per run with every id
pub trait RevisionLookup {
    fn latest_revisions(&self, ids: &[String]) -> Result<RevisionTable>;
}

/// Distinct non-empty store ids across all controllers, sorted
pub fn collect_charm_ids(controllers: &[Controller]) -> Vec<String> {
    let ids: BTreeSet<&str> = controllers
        .iter()
        .flat_map(|controller| controller.models())
        .flat_map(|model| model.applications())
        .map(|app| app.charm_id.as_str())
        .filter(|id| !id.is_empty())
        .collect();

    ids.into_iter().map(str::to_string).collect()
}

/// Settle latest revisions and revision notes on every application.
///
/// With a lookup, the looked-up revision raises whatever the document's
/// `can-upgrade-to` said. A failing lookup is logged and ignored.
pub fn annotate_revisions(controllers: &mut [Controller], lookup: Option<&dyn RevisionLookup>) {
    let table = lookup.and_then(|lookup| {
        let ids = collect_charm_ids(controllers);
        if ids.is_empty() {
            return None;
        }
        debug!(ids = ids.len(), "looking up latest charm revisions");
        match lookup.latest_revisions(&ids) {
            Ok(table) => Some(table),
            Err(err) => {
                warn!(error = %err, "charm revision lookup failed; revision notes use document data only");
                None
            }
        }
    });

    for controller in controllers.iter_mut() {
        for model in controller.models_mut().values_mut() {
            for app in model.applications_mut().values_mut() {
                let looked_up = table
                    .as_ref()
                    .and_then(|table| table.get(&app.charm_id))
                    .copied();
                app.apply_latest_revision(looked_up);
            }
        }
    }
}
