use super::{Prefix, scopes};
use crate::presentation::view_models::{CellViewModel, RowViewModel, TableViewModel};
use crate::types::Section;
use xjs_types::{Controller, Relation};

const COLUMNS: [&str; 2] = ["Application A", "Application B"];

pub fn present_relations(controllers: &[Controller], prefix: Prefix) -> TableViewModel {
    let mut table = prefix.table(Section::Relation, &COLUMNS);

    for (controller, model) in scopes(controllers) {
        for relation in model.relations() {
            table
                .rows
                .push(prefix.row(controller, model, relation_row(relation)));
        }
    }

    table
}

fn relation_row(relation: &Relation) -> RowViewModel {
    vec![
        CellViewModel::plain(format!("{}:{}", relation.application, relation.name)),
        CellViewModel::plain(format!("{}:{}", relation.partner_name(), relation.name)),
    ]
}
