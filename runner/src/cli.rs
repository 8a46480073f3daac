//! Command-line interface

use crate::config::{apply_overrides, load_config, Overrides};
use clap::{Arg, ArgAction, ArgMatches, Command};
use fnref_scenarios::{catalog, Harness, ScenarioGroup};
use std::io::Write;
use std::path::PathBuf;

/// Build the `fnref` command
#[must_use]
pub fn build_cli() -> Command {
    Command::new("fnref")
        .version(fnref_scenarios::VERSION)
        .about("Callable-contract scenario runner")
        .subcommand_required(true)
        .subcommand(Command::new("list").about("List scenarios by group"))
        .subcommand(
            Command::new("run")
                .about("Run scenarios")
                .arg(
                    Arg::new("filter")
                        .long("filter")
                        .help("Only run scenarios whose name contains this text"),
                )
                .arg(
                    Arg::new("stop-on-failure")
                        .long("stop-on-failure")
                        .action(ArgAction::SetTrue)
                        .help("Stop after the first failed scenario"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .value_parser(clap::value_parser!(PathBuf))
                        .help("Path to TOML configuration"),
                ),
        )
}

/// Execute parsed arguments, writing to `out`; returns the process exit code
pub fn execute(matches: &ArgMatches, out: &mut impl Write) -> anyhow::Result<i32> {
    match matches.subcommand() {
        Some(("list", _)) => {
            let scenarios = catalog();
            for group in ScenarioGroup::ALL {
                writeln!(out, "{group}")?;
                for scenario in scenarios.iter().filter(|s| s.group == group) {
                    writeln!(out, "  {}", scenario.name)?;
                }
            }
            Ok(0)
        }
        Some(("run", args)) => {
            let file_config = load_config(args.get_one::<PathBuf>("config").map(PathBuf::as_path))?;
            let config = apply_overrides(
                file_config,
                Overrides {
                    filter: args.get_one::<String>("filter").cloned(),
                    stop_on_first_failure: args.get_flag("stop-on-failure"),
                },
            );
            tracing::info!("Running scenarios with {:?}", config);

            let report = Harness::new(config).run(&catalog());
            if args.get_flag("json") {
                writeln!(out, "{}", report.to_json()?)?;
            } else {
                write!(out, "{}", report.generate_text())?;
            }
            if report.records.is_empty() {
                tracing::warn!("No scenario matched the configuration");
                return Ok(1);
            }
            Ok(if report.passed() { 0 } else { 1 })
        }
        _ => Ok(2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run_args(args: &[&str]) -> (i32, String) {
        let matches = build_cli().try_get_matches_from(args).unwrap();
        let mut out = Vec::new();
        let code = execute(&matches, &mut out).unwrap();
        (code, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_list_prints_groups() {
        let (code, out) = run_args(&["fnref", "list"]);
        assert_eq!(code, 0);
        assert!(out.contains("construction\n  numeric_forms\n"));
        assert!(out.contains("auxiliary\n"));
    }

    #[test]
    fn test_run_all_passes() {
        let (code, out) = run_args(&["fnref", "run"]);
        assert_eq!(code, 0, "{out}");
        assert!(out.contains("Failed: 0"));
    }

    #[test]
    fn test_run_filtered_json() {
        let (code, out) = run_args(&["fnref", "run", "--filter", "constructor", "--json"]);
        assert_eq!(code, 0);
        assert!(out.contains("\"constructor::two_argument\""));
        assert!(!out.contains("binding::"));
    }

    #[test]
    fn test_run_with_unmatched_filter_fails() {
        let (code, out) = run_args(&["fnref", "run", "--filter", "no_such_scenario"]);
        assert_eq!(code, 1);
        assert!(out.contains("Passed: 0  Failed: 0  Not run: 12"));
    }

    #[test]
    fn test_missing_subcommand_rejected() {
        assert!(build_cli().try_get_matches_from(["fnref"]).is_err());
    }
}
