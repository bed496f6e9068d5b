use super::machine::machine_tree;
use super::{Prefix, notes, scopes};
use crate::presentation::view_models::{CellViewModel, RowViewModel, TableViewModel};
use crate::types::Section;
use xjs_types::tone::interface_tone;
use xjs_types::{Controller, MachineCore, NetworkInterface};

const COLUMNS: [&str; 8] = [
    "Machine", "Interface", "IP", "MAC", "Gateway", "Space", "Up", "Notes",
];

/// Interfaces of every visible machine and container, in machine-table order
pub fn present_network(controllers: &[Controller], prefix: Prefix) -> TableViewModel {
    let mut table = prefix.table(Section::Network, &COLUMNS);

    for (controller, model) in scopes(controllers) {
        for (machine, containers) in machine_tree(model) {
            let hosts = std::iter::once(&machine.core).chain(containers.iter().map(|c| &c.core));
            for core in hosts {
                for row in interface_rows(core) {
                    table.rows.push(prefix.row(controller, model, row));
                }
            }
        }
    }

    table
}

fn interface_rows(core: &MachineCore) -> impl Iterator<Item = RowViewModel> + '_ {
    core.interfaces().map(interface_row)
}

fn interface_row(iface: &NetworkInterface) -> RowViewModel {
    vec![
        CellViewModel::plain(&iface.owner),
        CellViewModel::plain(&iface.name),
        CellViewModel::plain(iface.ip_addresses.join(",")),
        CellViewModel::plain(&iface.mac_address),
        CellViewModel::plain(iface.gateway.clone().unwrap_or_default()),
        CellViewModel::plain(iface.space.clone().unwrap_or_default()),
        CellViewModel::toned(iface.up.to_string(), interface_tone(iface.up)),
        notes(iface.notes()),
    ]
}
