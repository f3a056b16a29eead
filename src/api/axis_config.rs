use serde::{Deserialize, Serialize};

use crate::core::DomainBoundInput;
use crate::error::{BrushError, BrushResult};

pub const DEFAULT_MIN_TICK_GAP_PX: f64 = 5.0;

/// Value space of an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AxisKind {
    Number,
    #[default]
    Category,
}

/// Density policy applied after ticks are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TickInterval {
    /// Keep every `(n + 1)`-th tick; `Every(0)` keeps all of them.
    Every(usize),
    PreserveStart,
    #[default]
    PreserveEnd,
    PreserveStartEnd,
    EquidistantPreserveStart,
}

/// Where category slots sit inside their pixel range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum OrdinalPlacement {
    /// Slots on exact points, first and last on the range ends.
    #[default]
    Point,
    /// Slots are bands; ticks point at band centers.
    Band {
        padding_inner: f64,
        padding_outer: f64,
    },
}

/// Axis domain and tick policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisConfig {
    pub kind: AxisKind,
    /// Desired tick count. Numeric axes default to 5; category axes emit
    /// one tick per value unless a valid count below the value count is set.
    pub tick_count: Option<f64>,
    pub interval: TickInterval,
    /// Minimum pixel distance between neighbouring labels.
    pub min_tick_gap: f64,
    pub allow_decimals: bool,
    pub allow_duplicated_category: bool,
    /// `[lower, upper]` bounds for numeric axes.
    pub domain: Option<[DomainBoundInput; 2]>,
    pub placement: OrdinalPlacement,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            kind: AxisKind::default(),
            tick_count: None,
            interval: TickInterval::default(),
            min_tick_gap: DEFAULT_MIN_TICK_GAP_PX,
            allow_decimals: true,
            allow_duplicated_category: true,
            domain: None,
            placement: OrdinalPlacement::default(),
        }
    }
}

impl AxisConfig {
    #[must_use]
    pub fn number() -> Self {
        Self {
            kind: AxisKind::Number,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn category() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_tick_count(mut self, tick_count: f64) -> Self {
        self.tick_count = Some(tick_count);
        self
    }

    #[must_use]
    pub fn with_interval(mut self, interval: TickInterval) -> Self {
        self.interval = interval;
        self
    }

    #[must_use]
    pub fn with_min_tick_gap(mut self, min_tick_gap: f64) -> Self {
        self.min_tick_gap = min_tick_gap;
        self
    }

    #[must_use]
    pub fn with_allow_decimals(mut self, allow_decimals: bool) -> Self {
        self.allow_decimals = allow_decimals;
        self
    }

    #[must_use]
    pub fn with_allow_duplicated_category(mut self, allow: bool) -> Self {
        self.allow_duplicated_category = allow;
        self
    }

    #[must_use]
    pub fn with_domain(
        mut self,
        lower: impl Into<DomainBoundInput>,
        upper: impl Into<DomainBoundInput>,
    ) -> Self {
        self.domain = Some([lower.into(), upper.into()]);
        self
    }

    #[must_use]
    pub fn with_placement(mut self, placement: OrdinalPlacement) -> Self {
        self.placement = placement;
        self
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> BrushResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| BrushError::InvalidConfig(format!("failed to serialize axis config: {e}")))
    }

    /// Deserializes and validates config from JSON.
    pub fn from_json_str(input: &str) -> BrushResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| BrushError::InvalidConfig(format!("failed to parse axis config: {e}")))?;
        super::axis_validation::validate_axis_config(&config)?;
        Ok(config)
    }

    /// Numeric tick count, falling back to the default for unusable or
    /// oversized values.
    #[must_use]
    pub(super) fn numeric_tick_count(&self) -> usize {
        self.valid_tick_count()
            .filter(|count| *count <= crate::core::MAX_TICK_COUNT)
            .unwrap_or(crate::core::DEFAULT_TICK_COUNT)
    }

    /// Finite count of at least one, truncated to an integer.
    #[must_use]
    pub(super) fn valid_tick_count(&self) -> Option<usize> {
        self.tick_count
            .filter(|count| count.is_finite() && *count >= 1.0)
            .map(|count| count.floor() as usize)
    }
}
