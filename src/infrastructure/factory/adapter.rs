//! Source adapter factory.
//!
//! Maps a source id to its layout variant. The exchange source additionally
//! needs a frame channel; without one its construction fails explicitly
//! rather than yielding an adapter that can never return data.

use std::sync::Arc;

use tracing::debug;

use crate::adapter::outbound::exchange::ExchangeAdapter;
use crate::adapter::outbound::frame::FrameBridge;
use crate::adapter::outbound::generic::GenericAdapter;
use crate::adapter::outbound::grouped::GroupedButtonAdapter;
use crate::adapter::outbound::table::MarketTableAdapter;
use crate::domain::{DateTimeNormalizer, SiteDefinition, SourceId};
use crate::error::ExtractError;
use crate::infrastructure::config::bridge::BridgeConfig;
use crate::port::outbound::frame::FrameChannel;
use crate::port::outbound::source::SourceAdapter;

/// Builds [`SourceAdapter`] instances.
#[derive(Clone, Default)]
pub struct AdapterFactory {
    dates: DateTimeNormalizer,
    bridge: BridgeConfig,
    frame: Option<Arc<dyn FrameChannel>>,
}

impl AdapterFactory {
    pub fn new(bridge: BridgeConfig) -> Self {
        Self {
            bridge,
            ..Self::default()
        }
    }

    /// Use `dates` for every adapter built from here on.
    #[must_use]
    pub fn with_dates(mut self, dates: DateTimeNormalizer) -> Self {
        self.dates = dates;
        self
    }

    /// Channel to the embedded frame used by the exchange source.
    #[must_use]
    pub fn with_frame(mut self, channel: Arc<dyn FrameChannel>) -> Self {
        self.frame = Some(channel);
        self
    }

    /// Create the adapter for `source_id` over `site`.
    ///
    /// # Errors
    ///
    /// [`ExtractError::UnknownSource`] for an unrecognized id,
    /// [`ExtractError::InvalidSelector`] when the definition carries a broken
    /// selector, [`ExtractError::MissingFrameChannel`] for the exchange source
    /// when no frame channel was supplied.
    pub fn create(&self, source_id: &str, site: &SiteDefinition) -> Result<Box<dyn SourceAdapter>, ExtractError> {
        let id: SourceId = source_id.parse()?;
        debug!(source = %id, name = %site.name, "creating adapter");
        let site = site.clone();
        let adapter: Box<dyn SourceAdapter> = match id {
            SourceId::ParisSport => Box::new(MarketTableAdapter::new(site, self.dates)?),
            SourceId::Betclic => Box::new(GroupedButtonAdapter::new(site, self.dates)?),
            SourceId::Pmu | SourceId::Unibet => Box::new(GenericAdapter::new(site, self.dates)?),
            SourceId::Piwixchange => {
                let channel = self.frame.clone().ok_or_else(|| ExtractError::MissingFrameChannel {
                    source_id: id.to_string(),
                })?;
                let bridge = FrameBridge::new(channel, self.bridge.timeout(), self.bridge.source_tag.clone());
                Box::new(ExchangeAdapter::new(site, self.dates, bridge)?)
            }
        };
        Ok(adapter)
    }

    /// Create the adapter matching the definition's own id.
    ///
    /// # Errors
    ///
    /// Same as [`AdapterFactory::create`].
    pub fn create_for(&self, site: &SiteDefinition) -> Result<Box<dyn SourceAdapter>, ExtractError> {
        self.create(site.id.as_str(), site)
    }
}

impl std::fmt::Debug for AdapterFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdapterFactory")
            .field("bridge", &self.bridge)
            .field("frame", &self.frame.is_some())
            .finish_non_exhaustive()
    }
}
