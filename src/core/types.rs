use serde::{Deserialize, Serialize};

use crate::error::{BrushError, BrushResult};

/// Position of one record in the source data array.
pub type DataIndex = usize;

pub const DEFAULT_TRAVELLER_WIDTH: f64 = 5.0;

/// Pixel box of the brush track as supplied by layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrushGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default = "default_traveller_width")]
    pub traveller_width: f64,
}

fn default_traveller_width() -> f64 {
    DEFAULT_TRAVELLER_WIDTH
}

impl BrushGeometry {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            traveller_width: DEFAULT_TRAVELLER_WIDTH,
        }
    }

    #[must_use]
    pub fn with_traveller_width(mut self, traveller_width: f64) -> Self {
        self.traveller_width = traveller_width;
        self
    }

    /// Returns `true` when the box can host a brush at all.
    #[must_use]
    pub fn is_renderable(self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.traveller_width.is_finite()
            && self.width > 0.0
            && self.height > 0.0
            && self.traveller_width >= 0.0
    }

    /// Same check as [`Self::is_renderable`], reported as an error.
    pub fn validate(self) -> BrushResult<Self> {
        if self.is_renderable() {
            return Ok(self);
        }
        Err(BrushError::InvalidGeometry {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        })
    }

    /// Left edge of the traveller track.
    #[must_use]
    pub fn track_start(self) -> f64 {
        self.x
    }

    /// Right-most position a traveller's left edge may take.
    #[must_use]
    pub fn track_end(self) -> f64 {
        self.x + self.width - self.traveller_width
    }

    #[must_use]
    pub fn center_y(self) -> f64 {
        self.y + self.height / 2.0
    }

    /// Box left after removing `padding`, used for content drawn inside the track.
    #[must_use]
    pub fn inset(self, padding: BrushPadding) -> Self {
        Self {
            x: self.x + padding.left,
            y: self.y + padding.top,
            width: (self.width - padding.left - padding.right).max(0.0),
            height: (self.height - padding.top - padding.bottom).max(0.0),
            traveller_width: self.traveller_width,
        }
    }
}

/// Inset box around the brush track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrushPadding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl BrushPadding {
    #[must_use]
    pub fn uniform(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    #[must_use]
    pub(crate) fn is_valid(self) -> bool {
        [self.top, self.right, self.bottom, self.left]
            .iter()
            .all(|side| side.is_finite() && *side >= 0.0)
    }
}

impl Default for BrushPadding {
    fn default() -> Self {
        Self::uniform(1.0)
    }
}

/// Selected index window.
///
/// `start_index` may be greater than `end_index`; consumers that draw or
/// slice data use [`Self::min_index`] and [`Self::max_index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BrushWindow {
    pub start_index: DataIndex,
    pub end_index: DataIndex,
}

impl BrushWindow {
    #[must_use]
    pub fn new(start_index: DataIndex, end_index: DataIndex) -> Self {
        Self {
            start_index,
            end_index,
        }
    }

    /// Window spanning every record, or `None` for empty data.
    #[must_use]
    pub fn full(data_len: usize) -> Option<Self> {
        data_len.checked_sub(1).map(|last| Self::new(0, last))
    }

    #[must_use]
    pub fn is_reversed(self) -> bool {
        self.start_index > self.end_index
    }

    #[must_use]
    pub fn min_index(self) -> DataIndex {
        self.start_index.min(self.end_index)
    }

    #[must_use]
    pub fn max_index(self) -> DataIndex {
        self.start_index.max(self.end_index)
    }

    /// Number of records covered, both ends inclusive.
    #[must_use]
    pub fn record_count(self) -> usize {
        self.max_index() - self.min_index() + 1
    }

    #[must_use]
    pub fn contains(self, index: DataIndex) -> bool {
        index >= self.min_index() && index <= self.max_index()
    }

    /// Clamps both ends to `[0, data_len - 1]`, keeping the orientation.
    #[must_use]
    pub fn clamped(self, data_len: usize) -> Option<Self> {
        let last = data_len.checked_sub(1)?;
        Some(Self::new(self.start_index.min(last), self.end_index.min(last)))
    }
}
