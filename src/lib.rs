//! User Agent (UA) sniffing.
//!
//! This crate answers yes/no questions about a `User-Agent` (header) value,
//! such as "is this Chrome", "is this a tablet" or "is this Internet Explorer 8 or below",
//! using [`UserAgentSniffer`]:
//!
//! ```
//! use uasniff::UserAgentSniffer;
//!
//! let ua = UserAgentSniffer::new(
//!     "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 \
//!      (KHTML, like Gecko) Chrome/124.0.6367.82 Mobile Safari/537.36",
//! );
//! assert!(ua.is_chrome());
//! assert!(ua.is_mobile());
//! assert!(!ua.is_tablet());
//! assert!(!ua.is_safari());
//! ```
//!
//! The header is captured once and never changes. Every predicate is a
//! case-insensitive pattern test against it, except [`UserAgentSniffer::is_ie`],
//! which compares the browser product name (the legacy `appName`) with
//! `"Microsoft Internet Explorer"`. That name is derived from the header
//! unless supplied with [`UserAgentSniffer::with_app_name`].
//!
//! # Ambient User Agent
//!
//! A process that serves a single request (e.g. a CGI script) can use
//! [`global_sniffer`], which is initialised once from the `HTTP_USER_AGENT`
//! environment variable, or from a value supplied via [`try_init_global_sniffer`].
//!
//! # Remarks
//!
//! We detect only a fixed list of browser and device categories,
//! see [`UserAgentCheck`] for all of them. This crate does not parse
//! User Agents into structured data and does not try to: the patterns
//! are the classic sniffing patterns and are meant to be kept as is.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(test, allow(clippy::float_cmp))]

pub mod error;

mod ua;
pub use ua::*;
