use crate::core::{BrushWindow, DomainValue};

use super::{AxisConfig, AxisDomain, AxisDomainBuilder, TickLabelMeasure};

/// Hit/miss metrics of an [`AxisDomainCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AxisDomainCacheStats {
    pub hits: u64,
    pub misses: u64,
}

#[derive(Debug, Clone, PartialEq)]
struct AxisDomainCacheKey {
    data_revision: u64,
    window: Option<BrushWindow>,
    config: AxisConfig,
    range: (f64, f64),
}

#[derive(Debug)]
struct AxisDomainCacheEntry {
    key: AxisDomainCacheKey,
    domain: AxisDomain,
}

/// Keeps the last built [`AxisDomain`].
///
/// The key is the caller's data revision plus window, config and range.
/// The label measure is not part of the key; call
/// [`AxisDomainCache::invalidate`] after changing it.
#[derive(Debug, Default)]
pub struct AxisDomainCache {
    entry: Option<AxisDomainCacheEntry>,
    hits: u64,
    misses: u64,
}

impl AxisDomainCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_build(
        &mut self,
        data_revision: u64,
        values: &[DomainValue],
        window: Option<BrushWindow>,
        config: &AxisConfig,
        range: (f64, f64),
        measure: &dyn TickLabelMeasure,
    ) -> &AxisDomain {
        let key = AxisDomainCacheKey {
            data_revision,
            window,
            config: config.clone(),
            range,
        };

        let entry = match self.entry.take() {
            Some(entry) if entry.key == key => {
                self.hits = self.hits.saturating_add(1);
                entry
            }
            _ => {
                self.misses = self.misses.saturating_add(1);
                let domain = AxisDomainBuilder::build(values, window, config, range, measure);
                AxisDomainCacheEntry { key, domain }
            }
        };
        &self.entry.insert(entry).domain
    }

    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    #[must_use]
    pub fn stats(&self) -> AxisDomainCacheStats {
        AxisDomainCacheStats {
            hits: self.hits,
            misses: self.misses,
        }
    }
}
