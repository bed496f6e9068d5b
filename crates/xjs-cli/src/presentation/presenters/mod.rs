mod application;
mod machine;
mod model;
mod network;
mod relation;
mod unit;

use crate::presentation::view_models::{
    CellViewModel, RowViewModel, StatusViewModel, TableViewModel,
};
use crate::types::Section;
use xjs_types::{Controller, Model};

pub use application::present_applications;
pub use machine::present_machines;
pub use model::{TIMESTAMP_WARNING, present_models};
pub use network::present_network;
pub use relation::present_relations;
pub use unit::present_units;

/// Row-hiding switches that do not change the graph itself
#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayOptions {
    pub hide_scale_zero: bool,
    pub hide_subordinates: bool,
}

/// Leading identity columns, added when one table mixes entities from
/// several controllers or models
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Prefix {
    pub controller: bool,
    pub model: bool,
}

impl Prefix {
    pub fn for_controllers(controllers: &[Controller]) -> Self {
        let models: usize = controllers.iter().map(Controller::model_count).sum();
        Self {
            controller: controllers.len() > 1,
            model: models > 1,
        }
    }

    fn table(&self, section: Section, columns: &[&str]) -> TableViewModel {
        let mut all: Vec<&str> = Vec::with_capacity(columns.len() + 2);
        if self.controller {
            all.push("Controller");
        }
        if self.model {
            all.push("Model");
        }
        all.extend_from_slice(columns);
        TableViewModel::new(section, &all)
    }

    fn row(&self, controller: &Controller, model: &Model, cells: RowViewModel) -> RowViewModel {
        let mut row = Vec::with_capacity(cells.len() + 2);
        if self.controller {
            row.push(CellViewModel::plain(&controller.name));
        }
        if self.model {
            row.push(CellViewModel::plain(&model.name));
        }
        row.extend(cells);
        row
    }
}

/// Every (controller, model) pair in display order
fn scopes(controllers: &[Controller]) -> impl Iterator<Item = (&Controller, &Model)> {
    controllers
        .iter()
        .flat_map(|controller| controller.models().map(move |model| (controller, model)))
}

fn notes(notes: &[String]) -> CellViewModel {
    CellViewModel::plain(notes.join(", "))
}

/// Build the tables for `sections`, in the order given
pub fn present_status(
    controllers: &[Controller],
    sections: &[Section],
    options: DisplayOptions,
) -> StatusViewModel {
    let prefix = Prefix::for_controllers(controllers);
    let mut status = StatusViewModel::default();

    if sections.contains(&Section::Model) {
        for controller in controllers.iter().filter(|c| !c.timestamp_provided()) {
            let warning = if prefix.controller {
                format!("{} ({})", TIMESTAMP_WARNING, controller.name)
            } else {
                TIMESTAMP_WARNING.to_string()
            };
            status.warnings.push(warning);
        }
    }

    for section in sections {
        let table = match section {
            Section::Model => present_models(controllers),
            Section::Application => present_applications(controllers, prefix, options),
            Section::Unit => present_units(controllers, prefix, options),
            Section::Machine => present_machines(controllers, prefix),
            Section::Network => present_network(controllers, prefix),
            Section::Relation => present_relations(controllers, prefix),
        };
        status.tables.push(table);
    }

    status
}

#[cfg(test)]
pub(crate) mod test_support {
    use xjs_types::Controller;

    pub fn load(sample: &str) -> Controller {
        xjs_engine::load_controller(&xjs_testing::fixtures::sample_path(sample)).unwrap()
    }
}
