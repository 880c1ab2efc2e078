//! uasniff list command

use clap::Args;
use std::{io::Write, process::ExitCode};
use uasniff::{
    UserAgentCheck,
    error::{BoxError, ErrorContext as _},
};

#[derive(Debug, Args)]
/// list the names of all available checks
pub struct CliCommandList {}

/// run the uasniff list command
pub fn run(_cfg: CliCommandList, w: &mut impl Write) -> Result<ExitCode, BoxError> {
    for check in UserAgentCheck::ALL {
        writeln!(w, "{check}").context("write check name")?;
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_all_checks() {
        let mut out = Vec::new();
        run(CliCommandList {}, &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.lines().count(), UserAgentCheck::ALL.len());
        assert_eq!(out.lines().next(), Some("chrome"));
        assert!(out.lines().any(|line| line == "ie8-or-below"));
    }
}
