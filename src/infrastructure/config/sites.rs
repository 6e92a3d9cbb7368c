//! Per-source overrides of the built-in site table.
//!
//! ```toml
//! [sites.betclic]
//! domain = "betclic.com"
//!
//! [sites.unibet.selectors]
//! odds = ".price-button"
//! ```

use serde::Deserialize;

use crate::domain::{Selectors, SiteDefinition};
use crate::error::ConfigError;
use crate::port::outbound::document::compile;

/// Optional replacements for a site's selectors.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SelectorOverride {
    pub events: Option<String>,
    pub event_name: Option<String>,
    pub odds: Option<String>,
    pub odds_container: Option<String>,
    pub competition: Option<String>,
    pub date: Option<String>,
    pub link: Option<String>,
}

impl SelectorOverride {
    fn apply(&self, selectors: &mut Selectors) {
        let replace = |slot: &mut String, value: &Option<String>| {
            if let Some(v) = value {
                slot.clone_from(v);
            }
        };
        replace(&mut selectors.events, &self.events);
        replace(&mut selectors.event_name, &self.event_name);
        replace(&mut selectors.odds, &self.odds);
        for (slot, value) in [
            (&mut selectors.odds_container, &self.odds_container),
            (&mut selectors.competition, &self.competition),
            (&mut selectors.date, &self.date),
            (&mut selectors.link, &self.link),
        ] {
            if value.is_some() {
                slot.clone_from(value);
            }
        }
    }

    fn values(&self) -> impl Iterator<Item = &str> {
        [
            &self.events,
            &self.event_name,
            &self.odds,
            &self.odds_container,
            &self.competition,
            &self.date,
            &self.link,
        ]
        .into_iter()
        .filter_map(|v| v.as_deref())
    }
}

/// Optional replacements for one site definition.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteOverride {
    pub name: Option<String>,
    pub domain: Option<String>,
    pub mirrors: Option<Vec<String>>,
    pub base_url: Option<String>,
    #[serde(default)]
    pub selectors: SelectorOverride,
}

impl SiteOverride {
    /// Overwrite every field set here on `site`.
    pub fn apply(&self, site: &mut SiteDefinition) {
        if let Some(name) = &self.name {
            site.name.clone_from(name);
        }
        if let Some(domain) = &self.domain {
            site.domain.clone_from(domain);
        }
        if let Some(mirrors) = &self.mirrors {
            site.mirrors.clone_from(mirrors);
        }
        if self.base_url.is_some() {
            site.base_url.clone_from(&self.base_url);
        }
        self.selectors.apply(&mut site.selectors);
    }

    pub(crate) fn validate(&self, id: &str) -> Result<(), ConfigError> {
        let blank = |v: &Option<String>| v.as_deref().is_some_and(|s| s.trim().is_empty());
        if blank(&self.name) || blank(&self.domain) {
            return Err(ConfigError::InvalidValue {
                field: "sites",
                reason: format!("{id}: name and domain must not be empty"),
            });
        }
        for selector in self.selectors.values() {
            compile(selector).map_err(|err| ConfigError::InvalidValue {
                field: "sites",
                reason: format!("{id}: {err}"),
            })?;
        }
        Ok(())
    }
}
