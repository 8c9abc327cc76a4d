use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Open the dashboard (default)
    #[command(alias = "tui")]
    Ui,

    /// Print the derived dashboard metrics as JSON
    #[command(alias = "raw")]
    Snapshot {
        /// Single-line output
        #[arg(short, long)]
        compact: bool,
    },

    /// Show or manage the config file
    Config {
        /// Print the config file path
        #[arg(long)]
        path: bool,

        /// Reset the config file to defaults
        #[arg(long)]
        reset: bool,

        /// Open the config file in $EDITOR
        #[arg(short, long)]
        edit: bool,
    },
}

/// Baby comfort monitor demo dashboard
#[derive(Debug, Parser)]
#[command(name = "cradle", version, verbatim_doc_comment)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Appearance mode (auto, dark, light)
    #[arg(short, long, global = true)]
    pub appearance: Option<String>,

    /// Theme id, overriding the config file
    #[arg(short, long, global = true)]
    pub theme: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_opens_dashboard() {
        let cli = Cli::try_parse_from(["cradle"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.theme.is_none());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["cradle", "snapshot", "--compact", "--theme", "nursery"])
            .unwrap();
        assert!(matches!(cli.command, Some(Commands::Snapshot { compact: true })));
        assert_eq!(cli.theme.as_deref(), Some("nursery"));
    }

    #[test]
    fn test_config_flags() {
        let cli = Cli::try_parse_from(["cradle", "config", "--path"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Config {
                path: true,
                reset: false,
                edit: false
            })
        ));
    }

    #[test]
    fn test_log_level_flag() {
        let cli = Cli::try_parse_from(["cradle", "--log-level", "debug"]).unwrap();
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
    }
}
