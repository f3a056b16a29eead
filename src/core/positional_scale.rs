use std::sync::Arc;

use crate::core::index_locator::{locate_index, range_to_indices};
use crate::core::types::{BrushWindow, DataIndex};

/// Discrete scale placing `len` ordinal slots across a pixel range.
///
/// Band placement follows the usual inner/outer padding model with centered
/// alignment. A point scale is the band scale with `padding_inner = 1`, so its
/// bandwidth is zero and the first/last points sit on the range ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrdinalScale {
    len: usize,
    origin: f64,
    step: f64,
    bandwidth: f64,
    reversed: bool,
}

impl OrdinalScale {
    #[must_use]
    pub fn point(len: usize, range_start: f64, range_end: f64) -> Self {
        Self::with_padding(len, range_start, range_end, 1.0, 0.0)
    }

    #[must_use]
    pub fn band(
        len: usize,
        range_start: f64,
        range_end: f64,
        padding_inner: f64,
        padding_outer: f64,
    ) -> Self {
        Self::with_padding(len, range_start, range_end, padding_inner, padding_outer)
    }

    fn with_padding(
        len: usize,
        range_start: f64,
        range_end: f64,
        padding_inner: f64,
        padding_outer: f64,
    ) -> Self {
        let padding_inner = sanitize_padding(padding_inner).min(1.0);
        let padding_outer = sanitize_padding(padding_outer);
        let reversed = range_end < range_start;
        let (low, high) = if reversed {
            (range_end, range_start)
        } else {
            (range_start, range_end)
        };

        let n = len as f64;
        let step = (high - low) / (n - padding_inner + 2.0 * padding_outer).max(1.0);
        let origin = low + (high - low - step * (n - padding_inner)) * 0.5;

        Self {
            len,
            origin,
            step,
            bandwidth: step * (1.0 - padding_inner),
            reversed,
        }
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn step(self) -> f64 {
        self.step
    }

    #[must_use]
    pub fn bandwidth(self) -> f64 {
        self.bandwidth
    }

    /// Left edge of slot `index`, or `None` outside the domain.
    #[must_use]
    pub fn position(self, index: usize) -> Option<f64> {
        if index >= self.len {
            return None;
        }
        let slot = if self.reversed {
            self.len - 1 - index
        } else {
            index
        };
        Some(self.origin + self.step * slot as f64)
    }

    /// Positions of every slot in domain order.
    #[must_use]
    pub fn positions(self) -> Vec<f64> {
        (0..self.len).filter_map(|index| self.position(index)).collect()
    }
}

fn sanitize_padding(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

/// Materialized, index-aligned traveller coordinates.
///
/// Cloning shares the underlying buffer; a table is never patched, only
/// replaced by building a new [`PositionalScale`].
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateTable {
    coordinates: Arc<[f64]>,
}

impl CoordinateTable {
    fn from_positions(positions: Vec<f64>) -> Option<Self> {
        if positions.is_empty() {
            return None;
        }
        Some(Self {
            coordinates: positions.into(),
        })
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.coordinates
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: DataIndex) -> Option<f64> {
        self.coordinates.get(index).copied()
    }

    #[must_use]
    pub fn last_index(&self) -> DataIndex {
        self.coordinates.len().saturating_sub(1)
    }

    /// Index whose coordinate equals `x` exactly.
    #[must_use]
    pub fn exact_index_of(&self, x: f64) -> Option<DataIndex> {
        self.coordinates.iter().position(|value| *value == x)
    }

    /// Nearest index at or below `x`; see [`locate_index`].
    #[must_use]
    pub fn locate(&self, x: f64) -> DataIndex {
        locate_index(&self.coordinates, x).unwrap_or(0)
    }

    /// Gap-snapped window covered by two traveller coordinates.
    #[must_use]
    pub fn range_to_indices(&self, x_a: f64, x_b: f64, gap: usize) -> BrushWindow {
        range_to_indices(&self.coordinates, x_a, x_b, gap, self.last_index())
    }

    /// Shares the same buffer (no copy) when both tables come from one build.
    #[must_use]
    pub fn shares_buffer_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.coordinates, &other.coordinates)
    }
}

/// Point scale spreading `data_length` records over the traveller track.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionalScale {
    scale: OrdinalScale,
    table: CoordinateTable,
    inputs: PositionalScaleInputs,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct PositionalScaleInputs {
    data_length: usize,
    pixel_start: f64,
    pixel_width: f64,
    handle_width: f64,
}

impl PositionalScale {
    /// Builds the scale for `[pixel_start, pixel_start + pixel_width - handle_width]`.
    ///
    /// Returns `None` for empty data, non-finite geometry, a negative handle
    /// width, or a track no wider than the handle.
    #[must_use]
    pub fn build(
        data_length: usize,
        pixel_start: f64,
        pixel_width: f64,
        handle_width: f64,
    ) -> Option<Self> {
        if data_length == 0
            || !pixel_start.is_finite()
            || !pixel_width.is_finite()
            || !handle_width.is_finite()
            || handle_width < 0.0
            || pixel_width <= handle_width
        {
            return None;
        }

        let range_end = pixel_start + pixel_width - handle_width;
        let scale = OrdinalScale::point(data_length, pixel_start, range_end);
        let table = CoordinateTable::from_positions(scale.positions())?;
        Some(Self {
            scale,
            table,
            inputs: PositionalScaleInputs {
                data_length,
                pixel_start,
                pixel_width,
                handle_width,
            },
        })
    }

    /// Whether a scale built from these inputs would be identical to `self`.
    #[must_use]
    pub fn is_built_from(
        &self,
        data_length: usize,
        pixel_start: f64,
        pixel_width: f64,
        handle_width: f64,
    ) -> bool {
        self.inputs
            == PositionalScaleInputs {
                data_length,
                pixel_start,
                pixel_width,
                handle_width,
            }
    }

    #[must_use]
    pub fn coordinate_at(&self, index: DataIndex) -> Option<f64> {
        self.table.get(index)
    }

    #[must_use]
    pub fn coordinate_table(&self) -> &CoordinateTable {
        &self.table
    }

    #[must_use]
    pub fn data_length(&self) -> usize {
        self.inputs.data_length
    }

    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        (
            self.inputs.pixel_start,
            self.inputs.pixel_start + self.inputs.pixel_width - self.inputs.handle_width,
        )
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.scale.step()
    }
}
