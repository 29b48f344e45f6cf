//! erc CLI — run electrical rule checks against a design snapshot and
//! render the resulting report.

#![warn(missing_docs)]

use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use erc_model::{Design, Options};

/// Checks a design snapshot for electrical rule violations.
#[derive(Parser, Debug)]
#[command(name = "erc", version, about = "Electrical rule check engine")]
pub struct Cli {
    /// Path to a design snapshot JSON file.
    pub design: PathBuf,

    /// Path to an `erc.toml` options file. If omitted, default options apply.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format for the report.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Suppress the status line printed before checking.
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable ERC002 voltage tolerance checks, overriding `erc.toml`.
    #[arg(long)]
    pub no_strict_voltage: bool,

    /// Override the total current budget (ERC010/ERC011), in milliamps.
    #[arg(long)]
    pub max_current: Option<i64>,
}

/// Report output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable terminal output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

fn main() {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(2);
        }
    }
}

/// Loads the design and options, runs the engine, and renders the report.
///
/// Returns `0` if the report passed, `1` if it contains errors.
fn run(cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    if !cli.quiet {
        eprintln!("   Checking {}", cli.design.display());
    }

    let design_json = std::fs::read_to_string(&cli.design)?;
    let design: Design = serde_json::from_str(&design_json)?;

    let options = match &cli.config {
        Some(path) => {
            let content = std::fs::read_to_string(path)?;
            erc_config::load_options_from_str(&content)?
        }
        None => Options::default(),
    };
    let options = merge_cli_overrides(options, cli);

    let report = erc::run_erc(&design, &options);

    match cli.format {
        ReportFormat::Text => println!("{}", erc_report::format_report(&report)),
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(if report.passed { 0 } else { 1 })
}

/// Merges CLI override flags onto options already loaded from
/// `erc.toml` (or defaults). CLI flags always win — the same
/// override-precedence idiom the lint pipeline uses for its own
/// rule-selection flags.
fn merge_cli_overrides(mut options: Options, cli: &Cli) -> Options {
    if cli.no_strict_voltage {
        options.strict_voltage_checks = false;
    }
    if let Some(max_current) = cli.max_current {
        options.max_total_current_ma = max_current;
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    #[test]
    fn parse_defaults() {
        let cli = Cli::parse_from(["erc", "design.json"]);
        assert_eq!(cli.design, PathBuf::from("design.json"));
        assert!(cli.config.is_none());
        assert_eq!(cli.format, ReportFormat::Text);
        assert!(!cli.quiet);
        assert!(!cli.no_strict_voltage);
        assert!(cli.max_current.is_none());
    }

    #[test]
    fn parse_json_format_and_config() {
        let cli = Cli::parse_from([
            "erc",
            "design.json",
            "--format",
            "json",
            "--config",
            "erc.toml",
        ]);
        assert_eq!(cli.format, ReportFormat::Json);
        assert_eq!(cli.config.as_deref(), Some(Path::new("erc.toml")));
    }

    #[test]
    fn parse_override_flags() {
        let cli = Cli::parse_from([
            "erc",
            "design.json",
            "--no-strict-voltage",
            "--max-current",
            "2500",
        ]);
        assert!(cli.no_strict_voltage);
        assert_eq!(cli.max_current, Some(2500));
    }

    #[test]
    fn merge_overrides_neither_flag_set_keeps_loaded_options() {
        let cli = Cli::parse_from(["erc", "design.json"]);
        let merged = merge_cli_overrides(Options::default(), &cli);
        assert_eq!(merged, Options::default());
    }

    #[test]
    fn merge_no_strict_voltage_overrides_config_file_value() {
        let cli = Cli::parse_from(["erc", "design.json", "--no-strict-voltage"]);
        let mut loaded = Options::default();
        loaded.strict_voltage_checks = true;
        let merged = merge_cli_overrides(loaded, &cli);
        assert!(!merged.strict_voltage_checks);
    }

    #[test]
    fn merge_max_current_overrides_config_file_value() {
        let cli = Cli::parse_from(["erc", "design.json", "--max-current", "3000"]);
        let mut loaded = Options::default();
        loaded.max_total_current_ma = 1000;
        let merged = merge_cli_overrides(loaded, &cli);
        assert_eq!(merged.max_total_current_ma, 3000);
    }

    fn write_design(dir: &Path, json: &str) -> PathBuf {
        let path = dir.join("design.json");
        fs::write(&path, json).unwrap();
        path
    }

    #[test]
    fn empty_design_passes_and_exits_zero() {
        let tmp = TempDir::new().unwrap();
        let design = write_design(tmp.path(), r#"{"modules":[],"connections":[]}"#);
        let cli = Cli {
            design,
            config: None,
            format: ReportFormat::Text,
            quiet: true,
            no_strict_voltage: false,
            max_current: None,
        };
        assert_eq!(run(&cli).unwrap(), 0);
    }

    #[test]
    fn floating_pin_is_a_warning_and_still_exits_zero() {
        let tmp = TempDir::new().unwrap();
        let json = r#"{
            "modules": [{
                "id": "A",
                "name": "A",
                "is_motor_or_servo": false,
                "pins": [{"id": "A.1", "name": "A.1", "pin_type": "signal-input", "enabled": true}]
            }],
            "connections": []
        }"#;
        let design = write_design(tmp.path(), json);
        let cli = Cli {
            design,
            config: None,
            format: ReportFormat::Json,
            quiet: true,
            no_strict_voltage: false,
            max_current: None,
        };
        assert_eq!(run(&cli).unwrap(), 0);
    }

    #[test]
    fn mismatched_pin_connection_is_an_error_and_exits_one() {
        let tmp = TempDir::new().unwrap();
        let json = r#"{
            "modules": [
                {
                    "id": "A",
                    "name": "A",
                    "is_motor_or_servo": false,
                    "pins": [{"id": "A.1", "name": "A.1", "pin_type": "power", "enabled": true}]
                },
                {
                    "id": "B",
                    "name": "B",
                    "is_motor_or_servo": false,
                    "pins": [{"id": "B.1", "name": "B.1", "pin_type": "signal-input", "enabled": true}]
                }
            ],
            "connections": [
                {"id": "C1", "from": "A.1", "to": "B.1", "kind": "signal"}
            ]
        }"#;
        let design = write_design(tmp.path(), json);
        let cli = Cli {
            design,
            config: None,
            format: ReportFormat::Text,
            quiet: true,
            no_strict_voltage: false,
            max_current: None,
        };
        assert_eq!(run(&cli).unwrap(), 1);
    }

    #[test]
    fn config_file_disables_a_rule() {
        let tmp = TempDir::new().unwrap();
        let design = write_design(
            tmp.path(),
            r#"{
                "modules": [{
                    "id": "A",
                    "name": "A",
                    "max_current_ma": 5000,
                    "is_motor_or_servo": false,
                    "pins": []
                }],
                "connections": []
            }"#,
        );
        let config_path = tmp.path().join("erc.toml");
        fs::write(&config_path, "check_current_budget = false\n").unwrap();

        let cli = Cli {
            design,
            config: Some(config_path),
            format: ReportFormat::Text,
            quiet: true,
            no_strict_voltage: false,
            max_current: None,
        };
        assert_eq!(run(&cli).unwrap(), 0);
    }

    #[test]
    fn max_current_flag_raises_the_budget_without_a_config_file() {
        let tmp = TempDir::new().unwrap();
        let design = write_design(
            tmp.path(),
            r#"{
                "modules": [{
                    "id": "A",
                    "name": "A",
                    "max_current_ma": 1500,
                    "is_motor_or_servo": false,
                    "pins": []
                }],
                "connections": []
            }"#,
        );

        let cli = Cli {
            design: design.clone(),
            config: None,
            format: ReportFormat::Text,
            quiet: true,
            no_strict_voltage: false,
            max_current: None,
        };
        assert_eq!(run(&cli).unwrap(), 1);

        let cli = Cli {
            design,
            config: None,
            format: ReportFormat::Text,
            quiet: true,
            no_strict_voltage: false,
            max_current: Some(2000),
        };
        assert_eq!(run(&cli).unwrap(), 0);
    }

    #[test]
    fn missing_design_file_errors() {
        let cli = Cli {
            design: PathBuf::from("/nonexistent/design.json"),
            config: None,
            format: ReportFormat::Text,
            quiet: true,
            no_strict_voltage: false,
            max_current: None,
        };
        assert!(run(&cli).is_err());
    }

    #[test]
    fn malformed_json_errors() {
        let tmp = TempDir::new().unwrap();
        let design = write_design(tmp.path(), "not json");
        let cli = Cli {
            design,
            config: None,
            format: ReportFormat::Text,
            quiet: true,
            no_strict_voltage: false,
            max_current: None,
        };
        assert!(run(&cli).is_err());
    }
}
