//! entrypoint for uasniff-cli

#![cfg_attr(docsrs, feature(doc_cfg))]

use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing::level_filters::LevelFilter;

pub mod cmd;
use self::cmd::{check, list, report};

pub mod trace;

#[derive(Debug, Parser)]
#[command(name = "uasniff")]
#[command(bin_name = "uasniff")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmds: CliCommands,
}

#[derive(Debug, Subcommand)]
enum CliCommands {
    Report(report::CliCommandReport),
    Check(check::CliCommandCheck),
    List(list::CliCommandList),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = trace::init_tracing(LevelFilter::WARN) {
        eprintln!("🚩 failed to init tracing: {err}");
    }

    let mut stdout = std::io::stdout().lock();
    match match cli.cmds {
        CliCommands::Report(cfg) => report::run(cfg, &mut stdout),
        CliCommands::Check(cfg) => check::run(cfg, &mut stdout),
        CliCommands::List(cfg) => list::run(cfg, &mut stdout),
    } {
        Ok(code) => code,
        Err(err) => {
            eprintln!("🚩 exit with error: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parse_check() {
        let cli = Cli::try_parse_from(["uasniff", "check", "chrome", "ie8-or-below", "--any"])
            .unwrap();
        let CliCommands::Check(cfg) = cli.cmds else {
            panic!("expected check command");
        };
        assert_eq!(
            cfg.checks,
            vec![
                uasniff::UserAgentCheck::Chrome,
                uasniff::UserAgentCheck::IE8OrBelow
            ]
        );
        assert!(cfg.any);
    }

    #[test]
    fn test_cli_parse_check_invalid() {
        assert!(Cli::try_parse_from(["uasniff", "check", "netscape"]).is_err());
        assert!(Cli::try_parse_from(["uasniff", "check"]).is_err());
    }
}
