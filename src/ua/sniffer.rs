use super::{
    UserAgentCheck, UserAgentReport,
    patterns::{self, anchor_not_followed_by, parse_float_prefix},
};
use std::{convert::Infallible, fmt, str::FromStr, sync::Arc};

/// Browser product name advertised by Internet Explorer (up to and including IE10).
pub const IE_APP_NAME: &str = "Microsoft Internet Explorer";

/// Browser product name advertised by all other browsers.
pub const DEFAULT_APP_NAME: &str = "Netscape";

/// Value returned by [`UserAgentSniffer::ie_version`] when no version is known.
pub const UNKNOWN_IE_VERSION: f64 = -1.0;

/// User Agent (UA) sniffer.
///
/// Captures a `User-Agent` (header) value once and answers
/// yes/no questions about it, such as [`is_chrome`] or [`is_tablet`].
/// All predicates are pure: the same sniffer always gives the same answers.
///
/// See [the module level documentation](crate) for more information.
///
/// [`is_chrome`]: UserAgentSniffer::is_chrome
/// [`is_tablet`]: UserAgentSniffer::is_tablet
#[derive(Debug, Clone)]
pub struct UserAgentSniffer {
    header: Arc<str>,
    app_name: Arc<str>,
}

impl UserAgentSniffer {
    /// Create a new [`UserAgentSniffer`] from a `User-Agent` (header) value.
    ///
    /// The browser product name (used by [`is_ie`](Self::is_ie)) is derived from the header,
    /// use [`with_app_name`](Self::with_app_name) to supply it explicitly.
    pub fn new(header: impl Into<Arc<str>>) -> Self {
        let header = header.into();
        let app_name = derive_app_name(&header);
        tracing::trace!(ua = %header, app_name, "user agent sniffer created");
        Self {
            header,
            app_name: app_name.into(),
        }
    }

    /// Overwrite the browser product name used by [`is_ie`](Self::is_ie).
    #[must_use]
    pub fn with_app_name(mut self, app_name: impl Into<Arc<str>>) -> Self {
        self.app_name = app_name.into();
        self
    }

    /// Overwrite the browser product name used by [`is_ie`](Self::is_ie).
    pub fn set_app_name(&mut self, app_name: impl Into<Arc<str>>) -> &mut Self {
        self.app_name = app_name.into();
        self
    }

    /// returns the `User-Agent` (header) value used by the [`UserAgentSniffer`].
    #[must_use]
    pub fn header_str(&self) -> &str {
        &self.header
    }

    /// returns the complete `User-Agent` value verbatim.
    ///
    /// Alias of [`header_str`](Self::header_str).
    #[must_use]
    pub fn whoami(&self) -> &str {
        &self.header
    }

    /// returns the browser product name, either supplied or derived from the header.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Return true if the browser is Chrome or compatible.
    #[must_use]
    pub fn is_chrome(&self) -> bool {
        patterns::CHROME.is_match(&self.header)
    }

    /// Return true if the browser is Firefox.
    #[must_use]
    pub fn is_firefox(&self) -> bool {
        patterns::FIREFOX.is_match(&self.header)
    }

    /// Return true if the browser is using the Gecko engine.
    ///
    /// This is a better way to identify Firefox and other browsers
    /// built on XulRunner than [`is_firefox`](Self::is_firefox).
    #[must_use]
    pub fn is_gecko(&self) -> bool {
        anchor_not_followed_by(
            &self.header,
            &patterns::GECKO_ANCHOR,
            &patterns::GECKO_FORBIDDEN,
            Some(&*patterns::GECKO_TAIL),
        )
    }

    /// Return true if the browser is Internet Explorer.
    ///
    /// Unlike all other predicates this one looks at the
    /// [browser product name](Self::app_name) and not at the header.
    #[must_use]
    pub fn is_ie(&self) -> bool {
        *self.app_name == *IE_APP_NAME
    }

    /// Return the version of Internet Explorer,
    /// or [`UNKNOWN_IE_VERSION`] if the browser is not IE or advertises no version.
    #[must_use]
    pub fn ie_version(&self) -> f64 {
        self.ie_version_checked().unwrap_or(UNKNOWN_IE_VERSION)
    }

    /// Return the version of Internet Explorer, if known.
    #[must_use]
    pub fn ie_version_checked(&self) -> Option<f64> {
        if !self.is_ie() {
            return None;
        }
        patterns::IE_VERSION
            .captures(&self.header)
            .and_then(|caps| caps.get(1))
            .and_then(|m| parse_float_prefix(m.as_str()))
    }

    /// Return true if the browser is Internet Explorer 8.
    #[must_use]
    #[expect(clippy::float_cmp)]
    pub fn is_ie8(&self) -> bool {
        self.is_ie() && self.ie_version() == 8.0
    }

    /// Return true if the browser is Internet Explorer 8 or older.
    ///
    /// An IE header without version token counts as older.
    #[must_use]
    pub fn is_ie8_or_below(&self) -> bool {
        self.is_ie() && self.ie_version() <= 8.0
    }

    /// Return true if the browser is running on a Kindle.
    #[must_use]
    pub fn is_kindle(&self) -> bool {
        patterns::KINDLE.is_match(&self.header)
    }

    /// Return true if the browser is running on a BlackBerry.
    #[must_use]
    pub fn is_blackberry(&self) -> bool {
        patterns::BLACKBERRY.is_match(&self.header)
    }

    /// Return true if the browser is running on a mobile device.
    #[must_use]
    pub fn is_mobile(&self) -> bool {
        patterns::MOBILE.is_match(&self.header)
    }

    /// Return true if the browser is running on a Windows Phone.
    #[must_use]
    pub fn is_ie_mobile(&self) -> bool {
        patterns::IE_MOBILE.is_match(&self.header)
    }

    /// Return true if the browser is Opera (Presto engine).
    #[must_use]
    pub fn is_opera(&self) -> bool {
        patterns::OPERA.is_match(&self.header)
    }

    /// Return true if the browser is Safari.
    #[must_use]
    pub fn is_safari(&self) -> bool {
        anchor_not_followed_by(
            &self.header,
            &patterns::SAFARI_ANCHOR,
            &patterns::SAFARI_FORBIDDEN,
            Some(&*patterns::SAFARI_TAIL),
        )
    }

    /// Return true if the browser is running on a tablet.
    ///
    /// Android phones advertise "mobile" after the "Android" token,
    /// Android tablets do not.
    #[must_use]
    pub fn is_tablet(&self) -> bool {
        patterns::IPAD.is_match(&self.header)
            || anchor_not_followed_by(
                &self.header,
                &patterns::TABLET_ANDROID,
                &patterns::TABLET_FORBIDDEN,
                None,
            )
    }

    /// Return true if the browser is running on an iPad.
    #[must_use]
    pub fn is_ipad(&self) -> bool {
        patterns::IPAD.is_match(&self.header)
    }

    /// Return true if the browser is running on an iPhone.
    #[must_use]
    pub fn is_iphone(&self) -> bool {
        patterns::IPHONE.is_match(&self.header)
    }

    /// Return true if the browser is running on a TV.
    #[must_use]
    pub fn is_tv(&self) -> bool {
        patterns::TV.is_match(&self.header)
    }

    /// Return true if the browser is using the WebKit engine.
    #[must_use]
    pub fn is_webkit(&self) -> bool {
        patterns::WEBKIT.is_match(&self.header)
    }

    /// Evaluate the predicate named by the given [`UserAgentCheck`].
    #[must_use]
    pub fn check(&self, check: UserAgentCheck) -> bool {
        match check {
            UserAgentCheck::Chrome => self.is_chrome(),
            UserAgentCheck::Firefox => self.is_firefox(),
            UserAgentCheck::Gecko => self.is_gecko(),
            UserAgentCheck::IE => self.is_ie(),
            UserAgentCheck::IE8 => self.is_ie8(),
            UserAgentCheck::IE8OrBelow => self.is_ie8_or_below(),
            UserAgentCheck::Kindle => self.is_kindle(),
            UserAgentCheck::BlackBerry => self.is_blackberry(),
            UserAgentCheck::Mobile => self.is_mobile(),
            UserAgentCheck::IEMobile => self.is_ie_mobile(),
            UserAgentCheck::Opera => self.is_opera(),
            UserAgentCheck::Safari => self.is_safari(),
            UserAgentCheck::Tablet => self.is_tablet(),
            UserAgentCheck::IPad => self.is_ipad(),
            UserAgentCheck::IPhone => self.is_iphone(),
            UserAgentCheck::TV => self.is_tv(),
            UserAgentCheck::WebKit => self.is_webkit(),
        }
    }

    /// Iterate over all [`UserAgentCheck`]s that hold for this header.
    pub fn matching_checks(&self) -> impl Iterator<Item = UserAgentCheck> + '_ {
        UserAgentCheck::ALL
            .iter()
            .copied()
            .filter(|check| self.check(*check))
    }

    /// Take a snapshot of all predicates.
    #[must_use]
    pub fn report(&self) -> UserAgentReport {
        UserAgentReport {
            ua: self.header.to_string(),
            app_name: self.app_name.to_string(),
            ie_version: self.ie_version_checked(),
            chrome: self.is_chrome(),
            firefox: self.is_firefox(),
            gecko: self.is_gecko(),
            ie: self.is_ie(),
            ie8: self.is_ie8(),
            ie8_or_below: self.is_ie8_or_below(),
            kindle: self.is_kindle(),
            blackberry: self.is_blackberry(),
            mobile: self.is_mobile(),
            ie_mobile: self.is_ie_mobile(),
            opera: self.is_opera(),
            safari: self.is_safari(),
            tablet: self.is_tablet(),
            ipad: self.is_ipad(),
            iphone: self.is_iphone(),
            tv: self.is_tv(),
            webkit: self.is_webkit(),
        }
    }
}

impl Default for UserAgentSniffer {
    fn default() -> Self {
        Self::new("")
    }
}

impl fmt::Display for UserAgentSniffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.header)
    }
}

impl FromStr for UserAgentSniffer {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

/// The browser product name a browser would advertise for this header.
fn derive_app_name(header: &str) -> &'static str {
    if header.contains("MSIE ") {
        IE_APP_NAME
    } else {
        DEFAULT_APP_NAME
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHROME_MACOS: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

    #[test]
    fn test_sniffer_new() {
        let ua = UserAgentSniffer::new(CHROME_MACOS);
        assert_eq!(ua.header_str(), CHROME_MACOS);
        assert_eq!(ua.whoami(), CHROME_MACOS);
        assert_eq!(ua.app_name(), DEFAULT_APP_NAME);
        assert!(ua.is_chrome());
        assert!(ua.is_webkit());
        assert!(!ua.is_safari());
        assert!(!ua.is_firefox());
        assert!(!ua.is_gecko());
        assert!(!ua.is_ie());
    }

    #[test]
    fn test_sniffer_parse() {
        let ua: UserAgentSniffer = CHROME_MACOS.parse().unwrap();
        assert_eq!(ua.header_str(), CHROME_MACOS);
        assert!(ua.is_chrome());
    }

    #[test]
    fn test_sniffer_display() {
        let ua: UserAgentSniffer = CHROME_MACOS.parse().unwrap();
        assert_eq!(ua.to_string(), CHROME_MACOS);
    }

    #[test]
    fn test_sniffer_default_is_empty() {
        let ua = UserAgentSniffer::default();
        assert_eq!(ua.header_str(), "");
        assert_eq!(ua.matching_checks().count(), 0);
        assert_eq!(ua.ie_version(), UNKNOWN_IE_VERSION);
    }

    #[test]
    fn test_derived_app_name() {
        let ua = UserAgentSniffer::new("Mozilla/4.0 (compatible; MSIE 7.0; Windows NT 6.0)");
        assert_eq!(ua.app_name(), IE_APP_NAME);
        assert!(ua.is_ie());
        assert_eq!(ua.ie_version(), 7.0);

        // the version token is case-sensitive, so is the derivation
        let ua = UserAgentSniffer::new("Mozilla/4.0 (compatible; msie 7.0; Windows NT 6.0)");
        assert_eq!(ua.app_name(), DEFAULT_APP_NAME);
        assert!(!ua.is_ie());
    }

    #[test]
    fn test_app_name_overwrite() {
        let mut ua = UserAgentSniffer::new("Mozilla/4.0 (compatible; MSIE 8.0; Windows NT 5.1)")
            .with_app_name("Netscape");
        assert!(!ua.is_ie());
        assert!(!ua.is_ie8());
        assert_eq!(ua.ie_version(), UNKNOWN_IE_VERSION);
        assert_eq!(ua.ie_version_checked(), None);

        ua.set_app_name(IE_APP_NAME);
        assert!(ua.is_ie());
        assert!(ua.is_ie8());
        assert!(ua.is_ie8_or_below());
        assert_eq!(ua.ie_version_checked(), Some(8.0));

        // app name comparison is exact
        ua.set_app_name("microsoft internet explorer");
        assert!(!ua.is_ie());
    }

    #[test]
    fn test_ie_without_version_token_is_ie8_or_below() {
        let ua = UserAgentSniffer::new("SomethingElse/1.0").with_app_name(IE_APP_NAME);
        assert!(ua.is_ie());
        assert_eq!(ua.ie_version(), UNKNOWN_IE_VERSION);
        assert!(!ua.is_ie8());
        assert!(ua.is_ie8_or_below());
    }

    #[test]
    fn test_check_dispatch_matches_predicates() {
        let ua = UserAgentSniffer::new(CHROME_MACOS);
        let matching: Vec<_> = ua.matching_checks().collect();
        assert_eq!(matching, vec![UserAgentCheck::Chrome, UserAgentCheck::WebKit]);
        for check in UserAgentCheck::ALL {
            assert_eq!(
                ua.check(*check),
                matching.contains(check),
                "check: {check}"
            );
        }
    }
}
