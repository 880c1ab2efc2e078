//! Compiled user-agent patterns.
//!
//! Patterns are written in the classic browser-sniffing notation and
//! compiled once, on first use, with the semantics they have always had
//! in browsers rather than the unicode-aware defaults of the `regex` crate:
//!
//! - case-insensitive matching folds ASCII letters only (`K` is not `k`);
//! - `\W` is any character but `[0-9A-Za-z_]`;
//! - `.` never crosses a line terminator (`\n`, `\r`, `U+2028`, `U+2029`).
//!
//! The `regex` crate has no lookaround, so patterns of the shape
//! `anchor(?!.*forbidden).*tail` are evaluated in two steps, see [`anchor_not_followed_by`].

use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

const NON_WORD: &str = r"(?u-i:[^0-9A-Za-z_])";
const ANY_BUT_LINE_TERMINATOR: &str = r"(?u-i:[^\n\r\x{2028}\x{2029}])";
const LINE_TERMINATORS: [char; 4] = ['\n', '\r', '\u{2028}', '\u{2029}'];

/// Rewrite `\W` and bare `.` (outside character classes) to their legacy forms.
fn expand_legacy_classes(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut chars = pattern.chars();
    let mut in_class = false;
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some('W') if !in_class => out.push_str(NON_WORD),
                Some(escaped) => {
                    out.push('\\');
                    out.push(escaped);
                }
                None => out.push('\\'),
            },
            '[' => {
                in_class = true;
                out.push(c);
            }
            ']' => {
                in_class = false;
                out.push(c);
            }
            '.' if !in_class => out.push_str(ANY_BUT_LINE_TERMINATOR),
            _ => out.push(c),
        }
    }
    out
}

/// Compile a static pattern in ASCII mode, expanding `\W` and `.`.
///
/// # Panics
///
/// Panics if the pattern is invalid, which for the static patterns
/// in this module is a programming error caught by the unit tests.
#[expect(clippy::expect_used)]
fn compile(pattern: &str, case_insensitive: bool) -> Regex {
    RegexBuilder::new(&expand_legacy_classes(pattern))
        .unicode(false)
        .case_insensitive(case_insensitive)
        .build()
        .expect("valid static user-agent pattern")
}

fn ignore_case(pattern: &str) -> Regex {
    compile(pattern, true)
}

macro_rules! ua_pattern {
    ($($(#[$m:meta])* $name:ident => $pattern:literal),+ $(,)?) => {
        $(
            $(#[$m])*
            pub(super) static $name: LazyLock<Regex> = LazyLock::new(|| ignore_case($pattern));
        )+
    };
}

ua_pattern! {
    CHROME => r"webkit\W.*(chrome|chromium)\W",
    FIREFOX => r"mozilla.*\Wfirefox\W",
    KINDLE => r"\W(kindle|silk)\W",
    BLACKBERRY => r"\W(BlackBerry)\W",
    MOBILE => r"(iphone|ipod|(android.*?mobile)|blackberry|nokia|opera mobi)",
    IE_MOBILE => r"(IEMobile)",
    OPERA => r"opera.*\Wpresto\W",
    IPAD => r"(ipad)",
    IPHONE => r"(iphone)",
    TV => r"googletv|sonydtv",
    WEBKIT => r"webkit\W",

    /// `mozilla(?!.*webkit).*\Wgecko\W`
    GECKO_ANCHOR => r"mozilla",
    GECKO_FORBIDDEN => r"webkit",
    GECKO_TAIL => r"\A.*\Wgecko\W",

    /// `webkit\W(?!.*chrome).*safari\W`
    SAFARI_ANCHOR => r"webkit\W",
    SAFARI_FORBIDDEN => r"chrome",
    SAFARI_TAIL => r"\A.*safari\W",

    /// `android(?!.*mobile)`
    TABLET_ANDROID => r"android",
    TABLET_FORBIDDEN => r"mobile",
}

/// The version token of Internet Explorer. Case-sensitive.
pub(super) static IE_VERSION: LazyLock<Regex> =
    LazyLock::new(|| compile(r"MSIE ([0-9]{1,}[\.0-9]{0,})", false));

/// Evaluates `anchor(?!.*forbidden).*tail`.
///
/// True if any match of `anchor` ends at a position from where
/// `forbidden` does not occur before the next line terminator,
/// and the `\A`-anchored `tail` matches.
/// The tail sees the full remainder: its own `\W` may match a line terminator.
/// Use `None` as `tail` for a bare negative lookahead (`anchor(?!.*forbidden)`).
pub(super) fn anchor_not_followed_by(
    ua: &str,
    anchor: &Regex,
    forbidden: &Regex,
    tail: Option<&Regex>,
) -> bool {
    anchor.find_iter(ua).any(|m| {
        let rest = &ua[m.end()..];
        !forbidden.is_match(line_rest(rest)) && tail.is_none_or(|tail| tail.is_match(rest))
    })
}

fn line_rest(s: &str) -> &str {
    match s.find(LINE_TERMINATORS) {
        Some(end) => &s[..end],
        None => s,
    }
}

/// Parse the longest `digits[.digits]` prefix of `s` as a float,
/// the way a browser's `parseFloat` reads a version such as `8.0b` or `7..1`.
pub(super) fn parse_float_prefix(s: &str) -> Option<f64> {
    let int_len = s.bytes().take_while(u8::is_ascii_digit).count();
    if int_len == 0 {
        return None;
    }

    let mut end = int_len;
    if s.as_bytes().get(end) == Some(&b'.') {
        let frac_len = s[end + 1..].bytes().take_while(u8::is_ascii_digit).count();
        if frac_len > 0 {
            end += 1 + frac_len;
        }
    }

    s[..end].parse().ok()
}
