use crate::error::OpaqueError;
use serde::{Deserialize, Deserializer, Serialize};
use std::{fmt, str::FromStr};

/// Names one of the predicates of a [`UserAgentSniffer`].
///
/// [`UserAgentSniffer`]: super::UserAgentSniffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserAgentCheck {
    /// Chrome or compatible browser
    Chrome,
    /// Firefox browser
    Firefox,
    /// Gecko rendering engine
    Gecko,
    /// Internet Explorer
    IE,
    /// Internet Explorer 8
    IE8,
    /// Internet Explorer 8 or older
    IE8OrBelow,
    /// Kindle (Silk) device
    Kindle,
    /// BlackBerry device
    BlackBerry,
    /// Mobile device
    Mobile,
    /// Windows Phone
    IEMobile,
    /// Opera (Presto engine)
    Opera,
    /// Safari browser
    Safari,
    /// Tablet device
    Tablet,
    /// iPad
    IPad,
    /// iPhone
    IPhone,
    /// TV device
    TV,
    /// WebKit rendering engine
    WebKit,
}

impl UserAgentCheck {
    /// All checks, in declaration order.
    pub const ALL: &'static [Self] = &[
        Self::Chrome,
        Self::Firefox,
        Self::Gecko,
        Self::IE,
        Self::IE8,
        Self::IE8OrBelow,
        Self::Kindle,
        Self::BlackBerry,
        Self::Mobile,
        Self::IEMobile,
        Self::Opera,
        Self::Safari,
        Self::Tablet,
        Self::IPad,
        Self::IPhone,
        Self::TV,
        Self::WebKit,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Chrome => "chrome",
            Self::Firefox => "firefox",
            Self::Gecko => "gecko",
            Self::IE => "ie",
            Self::IE8 => "ie8",
            Self::IE8OrBelow => "ie8-or-below",
            Self::Kindle => "kindle",
            Self::BlackBerry => "blackberry",
            Self::Mobile => "mobile",
            Self::IEMobile => "ie-mobile",
            Self::Opera => "opera",
            Self::Safari => "safari",
            Self::Tablet => "tablet",
            Self::IPad => "ipad",
            Self::IPhone => "iphone",
            Self::TV => "tv",
            Self::WebKit => "webkit",
        }
    }
}

impl fmt::Display for UserAgentCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserAgentCheck {
    type Err = OpaqueError;

    /// Parse a check name, ignoring ASCII case as well as `-` and `_` separators,
    /// so `IE8OrBelow`, `ie8-or-below` and `ie8_or_below` are all accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match name.as_str() {
            "chrome" => Ok(Self::Chrome),
            "firefox" => Ok(Self::Firefox),
            "gecko" => Ok(Self::Gecko),
            "ie" => Ok(Self::IE),
            "ie8" => Ok(Self::IE8),
            "ie8orbelow" => Ok(Self::IE8OrBelow),
            "kindle" => Ok(Self::Kindle),
            "blackberry" => Ok(Self::BlackBerry),
            "mobile" => Ok(Self::Mobile),
            "iemobile" => Ok(Self::IEMobile),
            "opera" => Ok(Self::Opera),
            "safari" => Ok(Self::Safari),
            "tablet" => Ok(Self::Tablet),
            "ipad" => Ok(Self::IPad),
            "iphone" => Ok(Self::IPhone),
            "tv" => Ok(Self::TV),
            "webkit" => Ok(Self::WebKit),
            _ => Err(OpaqueError::from_display(format!(
                "invalid user agent check: {s}"
            ))),
        }
    }
}

impl Serialize for UserAgentCheck {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for UserAgentCheck {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse::<Self>().map_err(serde::de::Error::custom)
    }
}
