use super::{DisplayOptions, Prefix, notes, scopes};
use crate::presentation::view_models::{CellViewModel, RowViewModel, TableViewModel};
use crate::types::Section;
use xjs_types::Application;
use xjs_types::tone::{origin_tone, revision_tone, scale_tone, workload_tone};

const COLUMNS: [&str; 10] = [
    "App", "Version", "Status", "Scale", "Charm", "Store", "Rev", "OS", "Series", "Notes",
];

pub fn present_applications(
    controllers: &[xjs_types::Controller],
    prefix: Prefix,
    options: DisplayOptions,
) -> TableViewModel {
    let mut table = prefix.table(Section::Application, &COLUMNS);

    for (controller, model) in scopes(controllers) {
        for app in model.applications() {
            if options.hide_scale_zero && app.scale() == 0 {
                continue;
            }
            let row = prefix.row(controller, model, application_row(app));
            table.rows.push(row);
        }
    }

    table
}

fn application_row(app: &Application) -> RowViewModel {
    let scale = app.scale();

    vec![
        CellViewModel::plain(&app.name),
        CellViewModel::plain(&app.version),
        CellViewModel::toned(&app.status.current, workload_tone(&app.status.current)),
        CellViewModel::toned(scale.to_string(), scale_tone(scale)),
        CellViewModel::plain(&app.charm_name),
        CellViewModel::toned(&app.charm_origin, origin_tone(app.is_from_store())),
        CellViewModel::toned(
            app.charm_rev.to_string(),
            revision_tone(app.charm_rev, app.charm_latest_rev),
        ),
        CellViewModel::plain(&app.os),
        CellViewModel::plain(&app.series),
        notes(app.notes()),
    ]
}
