use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::common::config::DEFAULT_SRC_DIR;

/// applist — Generate O_C and Hemisphere app list
#[derive(Parser, Debug)]
#[command(
    name = "applist",
    version,
    about = "Generate O_C and Hemisphere app list",
    long_about = "Scans OC_apps.cpp and hemisphere_config.h for DECLARE_APP registrations\n\
                  and prints the app names as markdown lists.",
    after_help = "EXAMPLES:\n  \
        applist                                Scan ./software/src/\n  \
        applist --src firmware/src             Scan another source tree\n  \
        applist --format json                  Machine-readable output\n  \
        applist --config applist.toml          Custom files, labels or marker"
)]
pub struct Cli {
    /// Main src path (where OC_apps.cpp and hemisphere_config.h are located)
    #[arg(long, value_name = "PATH", default_value = DEFAULT_SRC_DIR)]
    pub src: PathBuf,

    /// TOML file overriding the extraction rules
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "markdown")]
    pub format: OutputFormat,

    /// Verbose output (logs to stderr)
    #[arg(long, short)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Markdown,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["applist"]).unwrap();
        assert_eq!(cli.src, PathBuf::from("./software/src/"));
        assert_eq!(cli.config, None);
        assert_eq!(cli.format, OutputFormat::Markdown);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_src_override() {
        let cli = Cli::try_parse_from(["applist", "--src", "/tmp/fw/src"]).unwrap();
        assert_eq!(cli.src, PathBuf::from("/tmp/fw/src"));
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Cli::try_parse_from(["applist", "--bogus"]).is_err());
        assert!(Cli::try_parse_from(["applist", "extra"]).is_err());
        assert!(Cli::try_parse_from(["applist", "--src"]).is_err());
    }

    #[test]
    fn test_format_values() {
        let cli = Cli::try_parse_from(["applist", "--format", "json"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(Cli::try_parse_from(["applist", "--format", "yaml"]).is_err());
    }
}
