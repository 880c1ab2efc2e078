//! uasniff report command

use super::{AppNameArgs, build_sniffer};
use clap::Args;
use std::{io::Write, process::ExitCode};
use uasniff::error::{BoxError, ErrorContext as _};

#[derive(Debug, Args)]
/// print the outcome of all checks for a User-Agent as json
pub struct CliCommandReport {
    /// the User-Agent to sniff (defaults to the `HTTP_USER_AGENT` env var)
    ua: Option<String>,

    #[command(flatten)]
    app_name: AppNameArgs,

    #[arg(long, short = 'p')]
    /// pretty print the json report
    pretty: bool,
}

/// run the uasniff report command
pub fn run(cfg: CliCommandReport, w: &mut impl Write) -> Result<ExitCode, BoxError> {
    let report = build_sniffer(cfg.ua, cfg.app_name).report();

    let result = if cfg.pretty {
        serde_json::to_writer_pretty(&mut *w, &report)
    } else {
        serde_json::to_writer(&mut *w, &report)
    };
    result.context("write json report")?;
    writeln!(w).context("write json report")?;

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_writes_json_line() {
        let mut out = Vec::new();
        run(
            CliCommandReport {
                ua: Some("Mozilla/5.0 (iPad; CPU OS 16_6 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/16.6 Mobile/15E148 Safari/604.1".to_owned()),
                app_name: AppNameArgs::default(),
                pretty: false,
            },
            &mut out,
        )
        .unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.ends_with('\n'));
        assert_eq!(out.lines().count(), 1);

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["ipad"], true);
        assert_eq!(value["tablet"], true);
        assert_eq!(value["mobile"], false);
        assert_eq!(value["app_name"], "Netscape");
    }
}
