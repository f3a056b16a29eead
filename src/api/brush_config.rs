use serde::{Deserialize, Serialize};

use crate::core::BrushPadding;
use crate::error::{BrushError, BrushResult};

pub const DEFAULT_LEAVE_TIMEOUT_MS: u64 = 1_000;
pub const DEFAULT_LABEL_OFFSET_PX: f64 = 5.0;

/// Host-configurable brush behavior.
///
/// Serializable so hosts can persist brush setup next to their chart config.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrushConfig {
    /// Index stride that dragged boundaries snap to.
    pub gap: usize,
    /// Keep index labels visible without hover, focus or drag.
    pub always_show_text: bool,
    /// Delay before a drag ends after the pointer leaves the brush.
    pub leave_timeout_ms: u64,
    pub padding: BrushPadding,
    /// Horizontal distance between a traveller and its index label.
    pub label_offset_px: f64,
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            gap: 1,
            always_show_text: false,
            leave_timeout_ms: DEFAULT_LEAVE_TIMEOUT_MS,
            padding: BrushPadding::default(),
            label_offset_px: DEFAULT_LABEL_OFFSET_PX,
        }
    }
}

impl BrushConfig {
    #[must_use]
    pub fn with_gap(mut self, gap: usize) -> Self {
        self.gap = gap;
        self
    }

    #[must_use]
    pub fn with_always_show_text(mut self, always_show_text: bool) -> Self {
        self.always_show_text = always_show_text;
        self
    }

    #[must_use]
    pub fn with_leave_timeout_ms(mut self, leave_timeout_ms: u64) -> Self {
        self.leave_timeout_ms = leave_timeout_ms;
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding: BrushPadding) -> Self {
        self.padding = padding;
        self
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> BrushResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| BrushError::InvalidConfig(format!("failed to serialize brush config: {e}")))
    }

    /// Deserializes and validates config from JSON.
    pub fn from_json_str(input: &str) -> BrushResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| BrushError::InvalidConfig(format!("failed to parse brush config: {e}")))?;
        super::brush_validation::validate_brush_config(config)
    }
}
