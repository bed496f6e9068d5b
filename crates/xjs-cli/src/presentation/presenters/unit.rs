use super::{DisplayOptions, Prefix, notes, scopes};
use crate::presentation::view_models::{CellViewModel, RowViewModel, TableViewModel};
use crate::types::Section;
use xjs_types::tone::{unit_agent_tone, workload_tone};
use tracing::debug;
use xjs_types::{Controller, PENDING, SubordinateUnit, Unit, UnitCore, natural_cmp};

const COLUMNS: [&str; 8] = [
    "Unit",
    "Workload",
    "Agent",
    "Machine",
    "Public address",
    "Ports",
    "Message",
    "Notes",
];

/// Principal units per application, each followed by its subordinates
pub fn present_units(
    controllers: &[Controller],
    prefix: Prefix,
    options: DisplayOptions,
) -> TableViewModel {
    let mut table = prefix.table(Section::Unit, &COLUMNS);

    for (controller, model) in scopes(controllers) {
        for app in model.applications() {
            let mut units: Vec<&Unit> = app.units().collect();
            units.sort_by(|a, b| natural_cmp(a.name(), b.name()));

            for unit in units {
                table
                    .rows
                    .push(prefix.row(controller, model, unit_row(unit)));

                if options.hide_subordinates {
                    continue;
                }
                let mut subordinates: Vec<&SubordinateUnit> = unit.subordinates().collect();
                subordinates.sort_by(|a, b| natural_cmp(a.name(), b.name()));
                for sub in subordinates {
                    table
                        .rows
                        .push(prefix.row(controller, model, subordinate_row(sub)));
                }
            }
        }
    }

    table
}

/// Where a principal unit runs; `PENDING` until it has a machine the model knows
fn machine_cell(unit: &Unit) -> String {
    match &unit.placement {
        Some(placement) => placement.name().to_string(),
        None => {
            if let Some(machine_id) = &unit.machine_id {
                debug!(unit = %unit.name(), machine = %machine_id, "unresolved machine shown as pending");
            }
            PENDING.to_string()
        }
    }
}

fn unit_name(core: &UnitCore, indent: &str) -> String {
    let leader = if core.leader { "*" } else { "" };
    format!("{}{}{}", indent, core.name, leader)
}

fn core_cells(core: &UnitCore, name: String, machine: String) -> RowViewModel {
    vec![
        CellViewModel::plain(name),
        CellViewModel::toned(
            &core.workload.current,
            workload_tone(&core.workload.current),
        ),
        CellViewModel::toned(&core.agent.current, unit_agent_tone(&core.agent.current)),
        CellViewModel::plain(machine),
        CellViewModel::plain(&core.public_address),
        CellViewModel::plain(core.open_ports.join(",")),
        CellViewModel::plain(&core.workload.message),
        notes(core.notes()),
    ]
}

fn unit_row(unit: &Unit) -> RowViewModel {
    core_cells(&unit.core, unit_name(&unit.core, ""), machine_cell(unit))
}

fn subordinate_row(sub: &SubordinateUnit) -> RowViewModel {
    core_cells(&sub.core, unit_name(&sub.core, "  "), String::new())
}

#[cfg(test)]
mod tests {
    use super::super::test_support::load;
    use super::*;
    use xjs_types::Tone;

    fn rows(table: &TableViewModel) -> Vec<String> {
        table
            .plain_rows()
            .iter()
            .map(|r| r.join(" | ").trim_end().to_string())
            .collect()
    }

    #[test]
    fn test_unit_rows_with_subordinates() {
        let table = present_units(
            &[load("status_2x.yaml")],
            Prefix::default(),
            DisplayOptions::default(),
        );
        insta::assert_snapshot!(rows(&table).join("\n"), @r"
        keystone/0* | blocked | idle | 1/lxd/0 | 10.5.0.21 | 5000/tcp | Missing relations |
          ntp/1 | active | executing |  | 10.5.0.21 |  | Ready | Upgrading from cs:ntp-24
        mysql/0* | active | idle | 0/lxd/0 | 10.5.0.20 | 3306/tcp | Unit is ready |
          ntp/0* | active | idle |  | 10.5.0.20 |  | Ready |
        ");
    }

    #[test]
    fn test_hide_subordinates() {
        let table = present_units(
            &[load("status_2x.yaml")],
            Prefix::default(),
            DisplayOptions {
                hide_subordinates: true,
                ..Default::default()
            },
        );
        let names: Vec<_> = table.plain_rows().iter().map(|r| r[0]).collect();
        assert_eq!(names, ["keystone/0*", "mysql/0*"]);
    }

    #[test]
    fn test_unit_without_machine_is_pending() {
        let table = present_units(
            &[load("status.json")],
            Prefix::default(),
            DisplayOptions::default(),
        );
        let row = &table.rows[0];
        assert_eq!(row[0].text, "postgresql/0*");
        assert_eq!(row[3].text, PENDING);
        assert_eq!(row[1].tone, Some(Tone::Good));
        assert_eq!(row[2].tone, Some(Tone::Good));
    }

    #[test]
    fn test_unit_on_unknown_machine_is_pending() {
        let mut controller = load("status_2x.yaml");
        let model = controller.models_mut().get_mut("openstack").unwrap();
        let unit = model
            .applications_mut()
            .get_mut("mysql")
            .and_then(|app| app.units_mut().get_mut("mysql/0"))
            .unwrap();
        unit.machine_id = Some("4".to_string());
        unit.placement = None;

        let table = present_units(&[controller], Prefix::default(), DisplayOptions::default());
        let row = table
            .plain_rows()
            .into_iter()
            .find(|r| r[0] == "mysql/0*")
            .map(|r| r[3].to_string())
            .unwrap();
        assert_eq!(row, PENDING);
    }
}
