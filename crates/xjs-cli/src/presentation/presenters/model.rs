use crate::presentation::view_models::{CellViewModel, RowViewModel, TableViewModel};
use crate::types::Section;
use xjs_types::tone::{meter_tone, model_status_tone, model_version_tone};
use xjs_types::{Controller, Model, format_instant};

pub const TIMESTAMP_WARNING: &str = "WARNING: Guessing at the controller timestamp";

const COLUMNS: [&str; 9] = [
    "Model",
    "Controller",
    "Cloud/Region",
    "Version",
    "SLA",
    "Timestamp",
    "Model-Status",
    "Meter-Status",
    "Message",
];

/// One row per model. The table already names controller and model, so it
/// never takes prefix columns.
pub fn present_models(controllers: &[Controller]) -> TableViewModel {
    let mut table = TableViewModel::new(Section::Model, &COLUMNS);
    for controller in controllers {
        for model in controller.models() {
            table.rows.push(model_row(controller, model));
        }
    }
    table
}

fn model_row(controller: &Controller, model: &Model) -> RowViewModel {
    let (meter, meter_message) = match &model.meter {
        Some(meter) => (
            CellViewModel::toned(&meter.color, meter_tone(&meter.color)),
            CellViewModel::plain(&meter.message),
        ),
        None => (CellViewModel::empty(), CellViewModel::empty()),
    };

    vec![
        CellViewModel::plain(&model.name),
        CellViewModel::plain(&model.controller),
        CellViewModel::plain(model.cloud_region()),
        CellViewModel::toned(&model.version, model_version_tone(&model.version)),
        CellViewModel::plain(&model.sla),
        CellViewModel::plain(format_instant(&controller.timestamp())),
        CellViewModel::toned(
            &model.status.current,
            model_status_tone(&model.status.current),
        ),
        meter,
        meter_message,
    ]
}

#[cfg(test)]
mod tests {
    use super::super::test_support::load;
    use super::*;
    use xjs_types::Tone;

    #[test]
    fn test_model_row() {
        let table = present_models(&[load("status_2x.yaml")]);
        insta::assert_snapshot!(
            table.plain_rows()[0].join(" | "),
            @"openstack | maas-controller | maas/default | 2.5.1 | unsupported | 20 Jan 2019 09:30:12Z | available | green | all good"
        );
        assert_eq!(table.rows[0][3].tone, Some(Tone::Good));
        assert_eq!(table.rows[0][7].tone, Some(Tone::Good));
    }

    #[test]
    fn test_model_without_meter_leaves_columns_blank() {
        let table = present_models(&[load("status.json")]);
        let rows = table.plain_rows();
        let row = &rows[0];
        assert_eq!(row.len(), COLUMNS.len());
        assert_eq!(&row[7..], ["", ""]);
    }
}
