use crate::Result;
use std::path::Path;
use tracing::{debug, info};
use xjs_schema::{
    StatusDocument, application_from, controller_from, load_document, machine_from, model_from,
    unit_from,
};
use xjs_types::{Controller, Model, NOT_AVAILABLE, Relation};

/// Build the whole graph of one status document.
///
/// `source` names the controller when the document does not (1.x reports
/// carry no controller at all).
pub fn build_controller(doc: &StatusDocument, source: &str) -> Result<Controller> {
    let mut controller = controller_from(doc)?;
    if controller.name == NOT_AVAILABLE {
        controller.name = source.to_string();
    }

    let model = build_model(doc, &mut controller)?;
    controller.add_model(model);

    info!(
        controller = %controller.name,
        models = controller.model_count(),
        timestamp_provided = controller.timestamp_provided(),
        "built controller"
    );
    Ok(controller)
}

/// Load a status report and build its graph; the file stem names a
/// controller the report does not name.
pub fn load_controller(path: &Path) -> Result<Controller> {
    let doc = load_document(path)?;
    let source = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "status".to_string());
    build_controller(&doc, &source)
}

fn build_model(doc: &StatusDocument, controller: &mut Controller) -> Result<Model> {
    let mut model = model_from(doc, controller)?;

    // Machines first: units are placed by lookup
    for (name, raw) in &doc.machines {
        let (machine, containers) = machine_from(name.as_str(), raw, controller)?;
        for container in containers {
            model.add_container(container);
        }
        model.add_machine(machine);
    }

    let applications = doc.applications.as_ref().or(doc.services.as_ref());
    for (name, raw) in applications.into_iter().flatten() {
        let mut app = application_from(name, raw, controller)?;
        for (unit_name, raw_unit) in &raw.units {
            let unit = unit_from(unit_name, raw_unit, name, &model, controller)?;
            app.add_unit(unit);
        }
        model.add_application(app);
    }

    model.link_subordinates();
    wire_relations(&mut model);

    Ok(model)
}

/// Pair every endpoint listed by every application, once per pair
fn wire_relations(model: &mut Model) {
    let mut relations = Vec::new();
    for app in model.applications() {
        for (endpoint, partners) in &app.relations {
            for partner in partners {
                relations.push(Relation::new(model, endpoint, partner, &app.name));
            }
        }
    }

    for relation in relations {
        if relation.partner.is_placeholder() {
            debug!(
                endpoint = %relation.name,
                partner = relation.partner_name(),
                "relation partner not in document"
            );
        }
        model.add_relation(relation);
    }
}
