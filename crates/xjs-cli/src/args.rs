use crate::types::{ColorMode, LogLevel, OutputFormat, Section};
use clap::{Args, Parser};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "xjs")]
#[command(about = "View saved Juju status reports as colorized tables", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Status reports (YAML or JSON); one controller per file
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    #[arg(short = 'i', long = "input", value_name = "FILE", help = "Status report to read (repeatable)")]
    pub input: Vec<PathBuf>,

    #[command(flatten)]
    pub sections: SectionArgs,

    #[arg(short = 'z', long, help = "Hide applications with no units")]
    pub hide_scale_zero: bool,

    #[arg(short = 's', long, help = "Hide subordinate unit rows")]
    pub hide_subordinates: bool,

    #[command(flatten)]
    pub filters: FilterArgs,

    #[arg(long, value_name = "WHEN")]
    pub color: Option<ColorMode>,

    #[arg(long, help = "Ask the charm store for the latest charm revisions")]
    pub lookup_revisions: bool,

    #[arg(long, default_value = "plain")]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn")]
    pub log_level: LogLevel,

    #[arg(long, value_name = "PATH", help = "Configuration file (default: XJS_CONFIG or the user config dir)")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Positional files first, then `--input` ones
    pub fn inputs(&self) -> Vec<PathBuf> {
        self.files.iter().chain(&self.input).cloned().collect()
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct SectionArgs {
    #[arg(short = 'M', long = "model", help = "Show the model table")]
    pub model: bool,

    #[arg(short = 'a', long = "applications", help = "Show the application table")]
    pub applications: bool,

    #[arg(short = 'u', long = "units", help = "Show the unit table")]
    pub units: bool,

    #[arg(short = 'm', long = "machines", help = "Show the machine table")]
    pub machines: bool,

    #[arg(short = 'n', long = "network", help = "Show the network interface table")]
    pub network: bool,

    #[arg(short = 'r', long = "relations", help = "Show the relation table")]
    pub relations: bool,
}

impl SectionArgs {
    /// Selected sections in display order; all of them when none was asked for
    pub fn resolve(&self) -> Vec<Section> {
        let flags = [
            (self.model, Section::Model),
            (self.applications, Section::Application),
            (self.units, Section::Unit),
            (self.machines, Section::Machine),
            (self.network, Section::Network),
            (self.relations, Section::Relation),
        ];

        let selected: Vec<Section> = flags
            .into_iter()
            .filter_map(|(on, section)| on.then_some(section))
            .collect();

        if selected.is_empty() {
            Section::ALL.to_vec()
        } else {
            selected
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    #[arg(long, value_name = "S", help = "Keep models whose name contains S")]
    pub filter_model: Option<String>,

    #[arg(long, value_name = "S", help = "Keep applications whose name contains S")]
    pub filter_app: Option<String>,

    #[arg(long, value_name = "S", help = "Keep units whose name contains S")]
    pub filter_unit: Option<String>,
}

impl FilterArgs {
    pub fn to_options(&self) -> xjs_engine::FilterOptions {
        xjs_engine::FilterOptions {
            model: self.filter_model.clone(),
            application: self.filter_app.clone(),
            unit: self.filter_unit.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_section_flag_selects_all() {
        let cli = Cli::parse_from(["xjs", "status.yaml"]);
        assert_eq!(cli.sections.resolve(), Section::ALL.to_vec());
    }

    #[test]
    fn test_section_flags_keep_display_order() {
        let cli = Cli::parse_from(["xjs", "-r", "-u", "-M", "status.yaml"]);
        assert_eq!(
            cli.sections.resolve(),
            [Section::Model, Section::Unit, Section::Relation]
        );
    }

    #[test]
    fn test_inputs_merge_positional_and_flag() {
        let cli = Cli::parse_from(["xjs", "a.yaml", "-i", "b.json", "c.yaml"]);
        let names: Vec<_> = cli
            .inputs()
            .into_iter()
            .map(|p| p.display().to_string())
            .collect();
        assert_eq!(names, ["a.yaml", "c.yaml", "b.json"]);
    }

    #[test]
    fn test_filters_map_to_options() {
        let cli = Cli::parse_from(["xjs", "--filter-app", "mysql", "s.yaml"]);
        let options = cli.filters.to_options();
        assert_eq!(options.application.as_deref(), Some("mysql"));
        assert!(options.model.is_none());
    }
}
