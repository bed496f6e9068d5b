use super::args::Cli;
use crate::config::Config;
use crate::logging;
use crate::lookup::CharmStoreClient;
use crate::presentation::{ConsoleRenderer, DisplayOptions, present_status};
use crate::types::OutputFormat;
use anyhow::{Result, bail};
use is_terminal::IsTerminal;
use tracing::{debug, info, warn};
use xjs_engine::{RevisionLookup, annotate_revisions, apply_filters, load_controllers};

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let inputs = cli.inputs();
    if inputs.is_empty() {
        bail!("no status report given (pass FILE or --input FILE)");
    }

    let config = Config::load(cli.config.as_deref())?;
    debug!(?config, "configuration loaded");

    let mut controllers = load_controllers(&inputs)?;
    info!(controllers = controllers.len(), "status reports loaded");

    let filters = cli.filters.to_options();
    if !filters.is_empty() {
        apply_filters(&mut controllers, &filters);
    }

    let client = if cli.lookup_revisions || config.revision_lookup.enabled {
        match CharmStoreClient::from_config(&config.revision_lookup) {
            Ok(client) => Some(client),
            Err(err) => {
                warn!(error = %err, "revision lookup disabled");
                None
            }
        }
    } else {
        None
    };
    annotate_revisions(
        &mut controllers,
        client.as_ref().map(|c| c as &dyn RevisionLookup),
    );

    let color_mode = cli.color.unwrap_or(config.color);
    let renderer = ConsoleRenderer::new(color_mode.enabled(std::io::stdout().is_terminal()));

    match cli.format {
        OutputFormat::Json => renderer.print_json(&controllers),
        OutputFormat::Plain => {
            let options = DisplayOptions {
                hide_scale_zero: cli.hide_scale_zero || config.hide_scale_zero,
                hide_subordinates: cli.hide_subordinates || config.hide_subordinates,
            };
            let status = present_status(&controllers, &cli.sections.resolve(), options);
            renderer.print_status(&status)
        }
    }
}
