//! Site definitions and source detection.
//!
//! - [`SourceId`] - Closed set of supported bookmaker sources
//! - [`SiteDefinition`] - Static per-source configuration (name, domain, selectors)
//! - [`SiteRegistry`] - Lookup by source id or page host

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ExtractError;

/// Identifier of a supported bookmaker source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SourceId {
    /// Parions Sport En Ligne (market tables).
    ParisSport,
    /// Betclic (three-way grouped buttons).
    Betclic,
    /// PMU (selector-driven generic layout).
    Pmu,
    /// Unibet (selector-driven generic layout).
    Unibet,
    /// PIWIXchange betting exchange (embedded frame).
    Piwixchange,
}

impl SourceId {
    /// All sources in table order.
    pub const ALL: [SourceId; 5] = [
        SourceId::ParisSport,
        SourceId::Betclic,
        SourceId::Pmu,
        SourceId::Unibet,
        SourceId::Piwixchange,
    ];

    /// Stable string identifier used in requests and config keys.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            SourceId::ParisSport => "parisSport",
            SourceId::Betclic => "betclic",
            SourceId::Pmu => "pmu",
            SourceId::Unibet => "unibet",
            SourceId::Piwixchange => "piwixchange",
        }
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceId {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SourceId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| ExtractError::UnknownSource {
                source_id: s.to_string(),
            })
    }
}

/// Structural selectors an adapter uses to locate events and prices.
///
/// The first four mirror the site table; the optional ones are only read by
/// the generic variant (and by the exchange variant for kickoff/competition).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selectors {
    pub events: String,
    pub event_name: String,
    pub odds: String,
    #[serde(default)]
    pub odds_container: Option<String>,
    #[serde(default)]
    pub competition: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

/// Static, read-only definition of one supported source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteDefinition {
    pub id: SourceId,
    /// Human display name, used as the per-source key in merged output.
    pub name: String,
    /// Domain substring used for host detection.
    pub domain: String,
    /// Additional mirror domains serving the same site.
    #[serde(default)]
    pub mirrors: Vec<String>,
    /// Prefix for relative event links.
    #[serde(default)]
    pub base_url: Option<String>,
    pub selectors: Selectors,
}

impl SiteDefinition {
    /// True when `host` belongs to this site.
    #[must_use]
    pub fn matches_host(&self, host: &str) -> bool {
        host.contains(self.domain.as_str()) || self.mirrors.iter().any(|m| host.contains(m.as_str()))
    }

    /// Resolve a possibly relative event link against the site base URL.
    #[must_use]
    pub fn absolute_url(&self, href: &str) -> String {
        match &self.base_url {
            Some(base) if href.starts_with('/') => format!("{}{href}", base.trim_end_matches('/')),
            _ => href.to_string(),
        }
    }
}

fn selectors(events: &str, event_name: &str, odds: &str, container: Option<&str>) -> Selectors {
    Selectors {
        events: events.into(),
        event_name: event_name.into(),
        odds: odds.into(),
        odds_container: container.map(Into::into),
        competition: None,
        date: None,
        link: None,
    }
}

/// Built-in definitions for every [`SourceId`].
#[must_use]
pub fn builtin_definitions() -> Vec<SiteDefinition> {
    vec![
        SiteDefinition {
            id: SourceId::ParisSport,
            name: "PSEL".into(),
            domain: "parionssport.fdj.fr".into(),
            mirrors: Vec::new(),
            base_url: Some("https://www.enligne.parionssport.fdj.fr".into()),
            selectors: selectors(
                "psel-event-live.psel-event, psel-event-main.psel-event, .psel-event",
                ".psel-opponent__name",
                "psel-outcome button",
                None,
            ),
        },
        SiteDefinition {
            id: SourceId::Betclic,
            name: "Betclic".into(),
            domain: "betclic.fr".into(),
            mirrors: Vec::new(),
            base_url: None,
            selectors: selectors(
                "sports-events-event-card",
                ".scoreboard_contestantLabel",
                ".btn.is-odd",
                Some(".market_odds"),
            ),
        },
        SiteDefinition {
            id: SourceId::Pmu,
            name: "PMU".into(),
            domain: "pmu.fr".into(),
            mirrors: Vec::new(),
            base_url: None,
            selectors: Selectors {
                link: Some("a[href]".into()),
                ..selectors(".race-card", ".race-title", ".cote", Some(".cotes-group"))
            },
        },
        SiteDefinition {
            id: SourceId::Unibet,
            name: "Unibet".into(),
            domain: "unibet.fr".into(),
            mirrors: Vec::new(),
            base_url: None,
            selectors: Selectors {
                link: Some("a[href]".into()),
                ..selectors("[data-event-id]", ".event-title", ".odds-btn", Some(".odds-container"))
            },
        },
        SiteDefinition {
            id: SourceId::Piwixchange,
            name: "PIWIXchange".into(),
            domain: "piwi247.com".into(),
            mirrors: vec!["piwi88.com".into(), "piwi365.com".into(), "piwi99.com".into()],
            base_url: None,
            selectors: selectors(
                ".biab_group-markets-table-row",
                ".biab_market-title-team-names p",
                ".betContentContainer",
                Some("[class*=\"betContent__wrapper\"]"),
            ),
        },
    ]
}

/// Process-wide table of site definitions.
#[derive(Debug, Clone)]
pub struct SiteRegistry {
    sites: Vec<SiteDefinition>,
}

impl SiteRegistry {
    /// Create a registry over the given definitions.
    pub fn new(sites: Vec<SiteDefinition>) -> Self {
        Self { sites }
    }

    /// Registry holding the built-in definitions.
    pub fn builtin() -> Self {
        Self::new(builtin_definitions())
    }

    /// Look up a definition by source id.
    #[must_use]
    pub fn get(&self, id: SourceId) -> Option<&SiteDefinition> {
        self.sites.iter().find(|s| s.id == id)
    }

    /// Mutable access for configuration overrides.
    pub fn get_mut(&mut self, id: SourceId) -> Option<&mut SiteDefinition> {
        self.sites.iter_mut().find(|s| s.id == id)
    }

    /// Resolve a page host to its site definition.
    #[must_use]
    pub fn detect(&self, host: &str) -> Option<&SiteDefinition> {
        let host = host.to_ascii_lowercase();
        self.sites.iter().find(|s| s.matches_host(&host))
    }

    /// Resolve a full page URL, or a bare host, to its site definition.
    #[must_use]
    pub fn detect_url(&self, page: &str) -> Option<&SiteDefinition> {
        match Url::parse(page) {
            Ok(url) => url.host_str().and_then(|host| self.detect(host)),
            Err(_) => self.detect(page),
        }
    }

    /// Iterate all definitions.
    pub fn iter(&self) -> impl Iterator<Item = &SiteDefinition> {
        self.sites.iter()
    }
}

impl Default for SiteRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_id_round_trips_through_str() {
        for id in SourceId::ALL {
            assert_eq!(id.as_str().parse::<SourceId>().unwrap(), id);
        }
        assert!(matches!(
            "bwin".parse::<SourceId>(),
            Err(ExtractError::UnknownSource { .. })
        ));
    }

    #[test]
    fn detect_matches_domain_substring() {
        let registry = SiteRegistry::builtin();
        let site = registry.detect("www.enligne.parionssport.fdj.fr").unwrap();
        assert_eq!(site.id, SourceId::ParisSport);
        assert!(registry.detect("example.com").is_none());
    }

    #[test]
    fn detect_covers_exchange_mirrors() {
        let registry = SiteRegistry::builtin();
        assert_eq!(
            registry.detect("www.piwi365.com").map(|s| s.id),
            Some(SourceId::Piwixchange)
        );
    }

    #[test]
    fn detect_url_uses_host_only() {
        let registry = SiteRegistry::builtin();
        let site = registry
            .detect_url("https://www.betclic.fr/football-s1/ligue-1-c4")
            .unwrap();
        assert_eq!(site.name, "Betclic");
        assert!(registry.detect_url("https://example.com/?ref=betclic.fr").is_none());
    }

    #[test]
    fn absolute_url_prefixes_relative_links_only() {
        let registry = SiteRegistry::builtin();
        let psel = registry.get(SourceId::ParisSport).unwrap();
        assert_eq!(
            psel.absolute_url("/paris-football/1/2"),
            "https://www.enligne.parionssport.fdj.fr/paris-football/1/2"
        );
        assert_eq!(psel.absolute_url("https://x.y/z"), "https://x.y/z");
    }
}
