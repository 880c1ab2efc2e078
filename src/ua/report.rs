use serde::{Deserialize, Serialize};

/// Snapshot of all predicates of a [`UserAgentSniffer`].
///
/// Created using [`UserAgentSniffer::report`].
///
/// [`UserAgentSniffer`]: super::UserAgentSniffer
/// [`UserAgentSniffer::report`]: super::UserAgentSniffer::report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAgentReport {
    /// The `User-Agent` (header) value verbatim.
    pub ua: String,
    /// The browser product name used for the IE checks.
    pub app_name: String,
    /// The Internet Explorer version, if known.
    pub ie_version: Option<f64>,
    pub chrome: bool,
    pub firefox: bool,
    pub gecko: bool,
    pub ie: bool,
    pub ie8: bool,
    pub ie8_or_below: bool,
    pub kindle: bool,
    pub blackberry: bool,
    pub mobile: bool,
    pub ie_mobile: bool,
    pub opera: bool,
    pub safari: bool,
    pub tablet: bool,
    pub ipad: bool,
    pub iphone: bool,
    pub tv: bool,
    pub webkit: bool,
}

#[cfg(test)]
mod tests {
    use crate::UserAgentSniffer;

    #[test]
    fn test_report_json() {
        let report = UserAgentSniffer::new(
            "Mozilla/4.0 (compatible; MSIE 6.0; Windows NT 5.1; SV1)",
        )
        .report();

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(
            value["ua"],
            "Mozilla/4.0 (compatible; MSIE 6.0; Windows NT 5.1; SV1)"
        );
        assert_eq!(value["app_name"], "Microsoft Internet Explorer");
        assert_eq!(value["ie_version"], 6.0);
        assert_eq!(value["ie"], true);
        assert_eq!(value["ie8"], false);
        assert_eq!(value["ie8_or_below"], true);
        assert_eq!(value["chrome"], false);
        assert_eq!(value["webkit"], false);
    }

    #[test]
    fn test_report_json_empty() {
        let report = UserAgentSniffer::new("").report();
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["ua"], "");
        assert!(value["ie_version"].is_null());
        let json = serde_json::to_string(&report).unwrap();
        assert!(!json.contains("true"));
        assert_eq!(serde_json::from_str::<super::UserAgentReport>(&json).unwrap(), report);
    }
}
