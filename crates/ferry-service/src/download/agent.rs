//! User-agent parsing for download display records.

use serde::Serialize;

/// Browser and platform names derived from a `User-Agent` header.
///
/// Unknown parts are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClientInfo {
    /// Browser name, e.g. `"Firefox"`.
    pub browser: String,
    /// Platform name, e.g. `"Linux"`.
    pub platform: String,
}

/// Parses raw user-agent strings. Never fails; unrecognised input yields
/// an empty [`ClientInfo`].
pub trait UserAgentParser: Send + Sync + std::fmt::Debug {
    /// Parse a raw `User-Agent` value.
    fn parse(&self, raw: &str) -> ClientInfo;
}

/// [`UserAgentParser`] backed by the woothee project's rule set.
#[derive(Debug, Clone, Copy, Default)]
pub struct WootheeParser;

const UNKNOWN: &str = "UNKNOWN";

fn known(value: &str) -> String {
    if value == UNKNOWN {
        String::new()
    } else {
        value.to_string()
    }
}

impl UserAgentParser for WootheeParser {
    fn parse(&self, raw: &str) -> ClientInfo {
        if raw.trim().is_empty() {
            return ClientInfo::default();
        }
        match woothee::parser::Parser::new().parse(raw) {
            Some(result) => ClientInfo {
                browser: known(result.name),
                platform: known(result.os),
            },
            None => ClientInfo::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_desktop_browser() {
        let info = WootheeParser.parse(
            "Mozilla/5.0 (X11; Linux x86_64; rv:121.0) Gecko/20100101 Firefox/121.0",
        );
        assert_eq!(info.browser, "Firefox");
        assert_eq!(info.platform, "Linux");
    }

    #[test]
    fn test_garbage_degrades_to_empty() {
        assert_eq!(WootheeParser.parse(""), ClientInfo::default());
        let info = WootheeParser.parse("xyzzy");
        assert!(info.browser.is_empty());
        assert!(info.platform.is_empty());
    }
}
