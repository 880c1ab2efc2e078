use clap::Args;
use uasniff::UserAgentSniffer;

pub mod check;
pub mod list;
pub mod report;

#[derive(Debug, Clone, Default, Args)]
/// where to get the browser product name from
pub struct AppNameArgs {
    #[arg(long, short = 'n')]
    /// the browser product name (legacy `appName`) used by the IE checks
    ///
    /// Derived from the User-Agent when not given,
    /// unless the `UASNIFF_APP_NAME` environment variable is set.
    pub app_name: Option<String>,
}

/// Create the [`UserAgentSniffer`] for a command.
///
/// Without an explicit User-Agent the ambient one
/// from the environment (`HTTP_USER_AGENT`) is used.
pub fn build_sniffer(ua: Option<String>, args: AppNameArgs) -> UserAgentSniffer {
    let sniffer = match ua {
        Some(ua) => {
            tracing::debug!(ua = %ua, "sniff user agent from cli argument");
            let sniffer = UserAgentSniffer::new(ua);
            match std::env::var(uasniff::APP_NAME_ENV_KEY) {
                Ok(app_name) => sniffer.with_app_name(app_name),
                Err(_) => sniffer,
            }
        }
        None => {
            tracing::debug!("sniff user agent from environment");
            UserAgentSniffer::from_env()
        }
    };
    match args.app_name {
        Some(app_name) => sniffer.with_app_name(app_name),
        None => sniffer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_sniffer_app_name_flag_wins() {
        let sniffer = build_sniffer(
            Some("Mozilla/4.0 (compatible; MSIE 8.0; Windows NT 6.1)".to_owned()),
            AppNameArgs {
                app_name: Some("Netscape".to_owned()),
            },
        );
        assert!(!sniffer.is_ie());
    }
}
