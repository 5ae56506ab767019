use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::io::logging::level_for_verbosity;
use crate::model::{Locale, Overrides};

#[derive(Parser, Debug)]
#[command(name = "tasks", about = concat!("[x] tasks v", env!("CARGO_PKG_VERSION"), " - a to-do list that lives as long as your terminal"), version)]
pub struct Cli {
    /// TOML config file (colors, locale, logging)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Language of the prompts
    #[arg(long, value_enum)]
    pub locale: Option<Locale>,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// More log detail (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Command-line values that override the config file
    pub fn overrides(&self, configured_level: &str) -> Overrides {
        Overrides {
            locale: self.locale,
            log_file: self.log_file.clone(),
            log_level: (self.verbose > 0)
                .then(|| level_for_verbosity(self.verbose, configured_level)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_args() {
        let cli = Cli::try_parse_from(["tasks"]).unwrap();
        assert_eq!(cli.config, None);
        assert_eq!(cli.locale, None);
        assert_eq!(cli.verbose, 0);
        let o = cli.overrides("info");
        assert_eq!(o.log_level, None);
    }

    #[test]
    fn all_flags() {
        let cli = Cli::try_parse_from([
            "tasks",
            "--config",
            "my.toml",
            "--locale",
            "en",
            "--log-file",
            "/tmp/t.log",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("my.toml")));
        assert_eq!(cli.locale, Some(Locale::En));
        let o = cli.overrides("info");
        assert_eq!(o.log_level.as_deref(), Some("trace"));
        assert_eq!(o.log_file, Some(PathBuf::from("/tmp/t.log")));
    }

    #[test]
    fn unknown_locale_rejected() {
        assert!(Cli::try_parse_from(["tasks", "--locale", "fr"]).is_err());
    }

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
