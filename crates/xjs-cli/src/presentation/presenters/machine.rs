use super::{Prefix, notes, scopes};
use crate::presentation::view_models::{CellViewModel, RowViewModel, TableViewModel};
use crate::types::Section;
use xjs_types::tone::{container_message_tone, machine_agent_tone, machine_status_tone};
use xjs_types::{Container, Controller, Machine, MachineCore, Model, natural_cmp};

const COLUMNS: [&str; 12] = [
    "Machine", "Agent", "Status", "DNS", "Inst id", "Series", "AZ", "Arch", "Cores", "Memory",
    "Message", "Notes",
];

/// Visible machines in natural order, each paired with its visible containers
pub(super) fn machine_tree(model: &Model) -> Vec<(&Machine, Vec<&Container>)> {
    let mut machines: Vec<&Machine> = model.machines().collect();
    machines.sort_by(|a, b| natural_cmp(a.name(), b.name()));

    machines
        .into_iter()
        .map(|machine| {
            let mut containers: Vec<&Container> = machine
                .containers()
                .filter_map(|name| model.get_container(name))
                .collect();
            containers.sort_by(|a, b| natural_cmp(a.name(), b.name()));
            (machine, containers)
        })
        .collect()
}

pub fn present_machines(controllers: &[Controller], prefix: Prefix) -> TableViewModel {
    let mut table = prefix.table(Section::Machine, &COLUMNS);

    for (controller, model) in scopes(controllers) {
        for (machine, containers) in machine_tree(model) {
            table
                .rows
                .push(prefix.row(controller, model, machine_row(machine)));
            for container in containers {
                table
                    .rows
                    .push(prefix.row(controller, model, container_row(container)));
            }
        }
    }

    table
}

fn status_cells(core: &MachineCore) -> RowViewModel {
    vec![
        CellViewModel::plain(&core.name),
        CellViewModel::toned(&core.agent.current, machine_agent_tone(&core.agent.current)),
        CellViewModel::toned(
            &core.machine_status.current,
            machine_status_tone(&core.machine_status.current),
        ),
        CellViewModel::plain(&core.dns_name),
        CellViewModel::plain(&core.instance_id),
        CellViewModel::plain(&core.series),
    ]
}

fn machine_row(machine: &Machine) -> RowViewModel {
    let core = &machine.core;
    let hardware = &core.hardware;
    let mut row = status_cells(core);
    row.extend([
        CellViewModel::plain(hardware.availability_zone()),
        CellViewModel::plain(hardware.arch()),
        CellViewModel::plain(hardware.cores()),
        CellViewModel::plain(hardware.mem()),
        CellViewModel::plain(&core.machine_status.message),
        notes(core.notes()),
    ]);
    row
}

/// Containers leave the hardware columns blank
fn container_row(container: &Container) -> RowViewModel {
    let core = &container.core;
    let message = &core.machine_status.message;
    let mut row = status_cells(core);
    row.extend([
        CellViewModel::empty(),
        CellViewModel::empty(),
        CellViewModel::empty(),
        CellViewModel::empty(),
        CellViewModel::toned(message, container_message_tone(message)),
        notes(core.notes()),
    ]);
    row
}

#[cfg(test)]
mod tests {
    use super::super::test_support::load;
    use super::*;
    use xjs_types::Tone;

    #[test]
    fn test_machines_followed_by_their_containers() {
        let table = present_machines(&[load("status_2x.yaml")], Prefix::default());
        let rows: Vec<String> = table
            .plain_rows()
            .iter()
            .map(|r| r.join(" | ").trim_end().to_string())
            .collect();
        insta::assert_snapshot!(rows.join("\n"), @r"
        0 | started | running | 10.5.0.10 | node-a1 | bionic | zone1 | amd64 | 8 | 32768M | Deployed |
        0/lxd/0 | started | running | 10.5.0.20 | juju-1a2b3c-0-lxd-0 | bionic |  |  |  |  | Container started |
        1 | started | running | 10.5.0.11 | node-b2 | bionic | zone2 | amd64 | 4 | 16384M | Deployed |
        1/lxd/0 | started | running | 10.5.0.21 | juju-1a2b3c-1-lxd-0 | bionic |  |  |  |  | Container started |
        2 | pending | pending |  | pending | bionic |  |  |  |  | Deploying |
        ");
    }

    #[test]
    fn test_machine_tones() {
        let table = present_machines(&[load("status_2x.yaml")], Prefix::default());
        let container = &table.rows[1];
        assert_eq!(container[10].tone, Some(Tone::Good));
        let pending = &table.rows[4];
        assert_eq!(pending[1].tone, Some(Tone::Pending));
        assert_eq!(pending[2].tone, Some(Tone::Warning));
    }

    #[test]
    fn test_natural_machine_order() {
        let mut names = ["10", "2", "1"];
        names.sort_by(|a, b| natural_cmp(a, b));
        assert_eq!(names, ["1", "2", "10"]);
    }
}
