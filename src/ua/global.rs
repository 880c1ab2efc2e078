use super::UserAgentSniffer;
use std::sync::OnceLock;

/// Environment variable holding the `User-Agent` of the current request,
/// as set by CGI-style hosting environments.
pub const USER_AGENT_ENV_KEY: &str = "HTTP_USER_AGENT";

/// Environment variable holding the browser product name,
/// used by [`UserAgentSniffer::is_ie`] when present.
pub const APP_NAME_ENV_KEY: &str = "UASNIFF_APP_NAME";

static GLOBAL_USER_AGENT_SNIFFER: OnceLock<UserAgentSniffer> = OnceLock::new();

impl UserAgentSniffer {
    /// Create a [`UserAgentSniffer`] from the hosting environment.
    ///
    /// The header is read from [`USER_AGENT_ENV_KEY`] and the browser product
    /// name from [`APP_NAME_ENV_KEY`]. Absent (or non-unicode) values count as
    /// not supplied: an empty header and a derived product name.
    #[must_use]
    pub fn from_env() -> Self {
        let header = std::env::var(USER_AGENT_ENV_KEY).unwrap_or_default();
        let sniffer = Self::new(header);
        match std::env::var(APP_NAME_ENV_KEY) {
            Ok(app_name) => sniffer.with_app_name(app_name),
            Err(_) => sniffer,
        }
    }
}

/// Get the global [`UserAgentSniffer`].
///
/// This is a shared once-time init sniffer, created in a lazy fashion
/// using [`UserAgentSniffer::from_env`] unless it was set explicitly before first use.
///
/// Use [`init_global_sniffer`] or [`try_init_global_sniffer`] to supply the
/// global [`UserAgentSniffer`]. This has to be done as early as possible,
/// as it fails if the global sniffer was already initialised (e.g. using the default).
pub fn global_sniffer() -> UserAgentSniffer {
    GLOBAL_USER_AGENT_SNIFFER
        .get_or_init(default_init_global_sniffer)
        .clone()
}

fn default_init_global_sniffer() -> UserAgentSniffer {
    let sniffer = UserAgentSniffer::from_env();
    tracing::debug!(
        ua = sniffer.header_str(),
        app_name = sniffer.app_name(),
        "global user agent sniffer initialised from env"
    );
    sniffer
}

/// Initialises the global [`UserAgentSniffer`].
///
/// # Panics
///
/// Panics in case the global [`UserAgentSniffer`] was already set.
/// Use [`try_init_global_sniffer`] in case you wish to handle this more gracefully.
#[expect(clippy::panic)]
pub fn init_global_sniffer(sniffer: UserAgentSniffer) {
    if try_init_global_sniffer(sniffer).is_err() {
        panic!("global user agent sniffer already set");
    }
}

/// Tries to initialise the global [`UserAgentSniffer`].
///
/// This returns the input [`UserAgentSniffer`] back,
/// in case the global [`UserAgentSniffer`] was already set.
pub fn try_init_global_sniffer(sniffer: UserAgentSniffer) -> Result<(), UserAgentSniffer> {
    tracing::debug!(
        ua = sniffer.header_str(),
        app_name = sniffer.app_name(),
        "initialise global user agent sniffer"
    );
    GLOBAL_USER_AGENT_SNIFFER.set(sniffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    // The global sniffer is process-wide, so all assertions about it
    // live in a single test.
    #[test]
    fn test_global_sniffer_init_once() {
        let iphone = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_4 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Mobile/15E148 Safari/604.1";
        try_init_global_sniffer(UserAgentSniffer::new(iphone)).unwrap();

        let ua = global_sniffer();
        assert_eq!(ua.header_str(), iphone);
        assert!(ua.is_iphone());
        assert!(ua.is_mobile());
        assert!(ua.is_safari());

        let rejected = try_init_global_sniffer(UserAgentSniffer::new("other")).unwrap_err();
        assert_eq!(rejected.header_str(), "other");
        assert_eq!(global_sniffer().header_str(), iphone);
    }
}
