//! uasniff check command

use super::{AppNameArgs, build_sniffer};
use clap::Args;
use std::{io::Write, process::ExitCode};
use uasniff::{
    UserAgentCheck,
    error::{BoxError, ErrorContext as _},
};

#[derive(Debug, Args)]
/// check whether a User-Agent matches one or more checks
///
/// Exits with status 0 on a match and 1 otherwise.
pub struct CliCommandCheck {
    #[arg(required = true)]
    /// the checks to evaluate (see `uasniff list`)
    pub(crate) checks: Vec<UserAgentCheck>,

    #[arg(long, short = 'u')]
    /// the User-Agent to sniff (defaults to the `HTTP_USER_AGENT` env var)
    ua: Option<String>,

    #[command(flatten)]
    app_name: AppNameArgs,

    #[arg(long, short = 'a')]
    /// succeed if any check matches, instead of requiring all of them to match
    pub(crate) any: bool,
}

/// run the uasniff check command
pub fn run(cfg: CliCommandCheck, w: &mut impl Write) -> Result<ExitCode, BoxError> {
    Ok(if evaluate(cfg, w)? {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Evaluate the checks, writing one result line per check.
fn evaluate(cfg: CliCommandCheck, w: &mut impl Write) -> Result<bool, BoxError> {
    let sniffer = build_sniffer(cfg.ua, cfg.app_name);

    let mut matched = 0;
    for check in &cfg.checks {
        let ok = sniffer.check(*check);
        tracing::trace!(%check, ok, "user agent check evaluated");
        if ok {
            matched += 1;
        }
        writeln!(w, "{check}: {ok}").with_context(|| format!("write result of {check}"))?;
    }

    Ok(if cfg.any {
        matched > 0
    } else {
        matched == cfg.checks.len()
    })
}
