use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::{
    coverage::scan_coverage,
    errors::{ContentConfigError, ContentConfigResult},
    loader::{self, ConfigFormat},
};

/// Default configuration file, resolved against the working directory
pub const DEFAULT_CONFIG_FILE: &str = "tailwind.config.json";

/// Tailwind Content Configuration Tool
///
/// Loads the declarative content configuration of a Tailwind build and checks
/// which template files its glob patterns reach.
///
/// ## Configuration
/// ```json
/// {
///   "content": ["./templates/**/*.html", "./app/templates/**/*.html"],
///   "theme": { "extend": {} },
///   "plugins": []
/// }
/// ```
///
/// ## Environment Variables
/// - `RUST_LOG`: Controls logging verbosity (trace, debug, info, warn, error)
#[derive(Parser, Debug, Clone)]
#[command(name = "content-config")]
#[command(about = "Load and check Tailwind content configuration documents")]
#[command(version)]
#[command(
    long_about = "Loads a Tailwind content configuration written as JSON or YAML. \nValidates its glob patterns and reports which template files they match."
)]
pub struct Cli {
    /// Configuration file to load (.json, .yaml or .yml)
    #[arg(
        short,
        long,
        global = true,
        value_name = "FILE",
        default_value = DEFAULT_CONFIG_FILE
    )]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Validate the configuration and print a summary
    Check,
    /// Print the normalised configuration document
    Show {
        /// Output format
        #[arg(short, long, default_value_t = ConfigFormat::Json)]
        format: ConfigFormat,
    },
    /// List the template files matched by the content patterns
    Files {
        /// Directory the patterns are resolved against
        #[arg(short, long, value_name = "DIRECTORY", default_value = ".")]
        root: PathBuf,
    },
}

impl Cli {
    /// Execute the parsed command, writing results to stdout and warnings to stderr
    pub async fn run(self) -> ContentConfigResult<()> {
        let config = loader::load_from_file(&self.config)?;

        match self.command {
            Command::Check => {
                println!(
                    "{}: {} content pattern(s), {} theme extension(s), {} plugin(s)",
                    self.config.display(),
                    config.content_patterns().len(),
                    config.theme_extensions().len(),
                    config.plugins().len()
                );
                if !config.has_coverage() {
                    eprintln!("warning: content pattern list is empty; no files will be scanned");
                }
            }
            Command::Show { format } => {
                let text = loader::to_string(&config, format)?;
                print!("{}", text);
                if !text.ends_with('\n') {
                    println!();
                }
            }
            Command::Files { root } => {
                let root = root
                    .canonicalize()
                    .map_err(|e| ContentConfigError::scan_root(&root, e))?;
                let report = scan_coverage(&config, &root).await?;

                for file in report.files() {
                    println!("{}", file);
                }
                for pattern in report.unmatched_patterns() {
                    eprintln!("warning: pattern '{}' matched no files", pattern);
                }
                if report.is_empty() {
                    eprintln!(
                        "warning: no template files matched under {}",
                        root.display()
                    );
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    /// Test the clap definition is consistent
    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    /// Test default config file and format
    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["content-config", "check"]);
        assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG_FILE));
        assert!(matches!(cli.command, Command::Check));

        let cli = Cli::parse_from(["content-config", "show"]);
        assert!(matches!(
            cli.command,
            Command::Show {
                format: ConfigFormat::Json
            }
        ));
    }

    /// Test --config is accepted after the subcommand
    #[test]
    fn test_global_config_flag_after_subcommand() {
        let cli = Cli::parse_from([
            "content-config",
            "files",
            "--config",
            "site/tw.yaml",
            "-r",
            "site",
        ]);
        assert_eq!(cli.config, PathBuf::from("site/tw.yaml"));
        match cli.command {
            Command::Files { root } => assert_eq!(root, PathBuf::from("site")),
            other => panic!("unexpected command {:?}", other),
        }
    }

    /// Test output format parsing
    #[test]
    fn test_show_format_parsing() {
        let cli = Cli::parse_from(["content-config", "show", "--format", "yaml"]);
        assert!(matches!(
            cli.command,
            Command::Show {
                format: ConfigFormat::Yaml
            }
        ));

        assert!(Cli::try_parse_from(["content-config", "show", "--format", "toml"]).is_err());
    }
}
