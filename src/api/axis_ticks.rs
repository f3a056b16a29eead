use serde::{Deserialize, Serialize};

use crate::core::{DataIndex, DomainValue};

use super::{TickInterval, TickLabelMeasure};

/// One candidate or selected tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub value: DomainValue,
    /// Pixel position of the tick, `label_offset` included.
    pub coordinate: f64,
    /// Source record for category ticks, tick ordinal for numeric ticks.
    pub index: DataIndex,
    /// Shift from the slot start to the tick (half a band for band scales).
    pub label_offset: f64,
    /// Label center; edge labels may be pulled inside the axis range.
    pub label_coordinate: f64,
}

impl AxisTick {
    #[must_use]
    pub fn new(value: DomainValue, coordinate: f64, index: DataIndex, label_offset: f64) -> Self {
        Self {
            value,
            coordinate,
            index,
            label_offset,
            label_coordinate: coordinate,
        }
    }
}

/// Picks which ticks receive a label under an interval policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSelector {
    pub interval: TickInterval,
    pub min_tick_gap: f64,
    /// Pixel range of the axis; labels must fit inside it.
    pub range: (f64, f64),
}

impl TickSelector {
    #[must_use]
    pub fn new(interval: TickInterval, min_tick_gap: f64, range: (f64, f64)) -> Self {
        Self {
            interval,
            min_tick_gap,
            range,
        }
    }

    /// Filters `ticks` (in domain order) down to the labelled subset.
    #[must_use]
    pub fn select(&self, ticks: &[AxisTick], measure: &dyn TickLabelMeasure) -> Vec<AxisTick> {
        if ticks.is_empty() {
            return Vec::new();
        }
        if let TickInterval::Every(skip) = self.interval {
            return ticks
                .iter()
                .step_by(skip.saturating_add(1))
                .cloned()
                .collect();
        }
        if !self.range.0.is_finite() || !self.range.1.is_finite() {
            return ticks.to_vec();
        }

        let sizes: Vec<f64> = ticks
            .iter()
            .map(|tick| {
                let size = measure.label_size(&tick.value, tick.index);
                if size.is_finite() { size.max(0.0) } else { 0.0 }
            })
            .collect();
        let layout = EdgeLayout::new(ticks, self.range, self.min_tick_gap);

        let placed = match self.interval {
            TickInterval::PreserveStart => layout.walk_from_start(ticks, &sizes, false),
            TickInterval::PreserveStartEnd => layout.walk_from_start(ticks, &sizes, true),
            TickInterval::PreserveEnd => layout.walk_from_end(ticks, &sizes),
            TickInterval::EquidistantPreserveStart => layout.equidistant(ticks, &sizes),
            TickInterval::Every(_) => return ticks.to_vec(),
        };

        ticks
            .iter()
            .zip(placed)
            .filter_map(|(tick, label_coordinate)| {
                label_coordinate.map(|label_coordinate| AxisTick {
                    label_coordinate,
                    ..tick.clone()
                })
            })
            .collect()
    }
}

/// Walk state shared by the proximity policies.
///
/// `sign` is +1 when coordinates grow with the domain and -1 otherwise;
/// `start`/`end` are the range edges in walking order.
struct EdgeLayout {
    sign: f64,
    start: f64,
    end: f64,
    min_gap: f64,
}

impl EdgeLayout {
    fn new(ticks: &[AxisTick], range: (f64, f64), min_gap: f64) -> Self {
        let sign = match ticks {
            [first, second, ..] if second.coordinate < first.coordinate => -1.0,
            _ => 1.0,
        };
        let (low, high) = (range.0.min(range.1), range.0.max(range.1));
        let (start, end) = if sign > 0.0 { (low, high) } else { (high, low) };
        Self {
            sign,
            start,
            end,
            min_gap: if min_gap.is_finite() { min_gap.max(0.0) } else { 0.0 },
        }
    }

    fn fits(&self, position: f64, size: f64, start: f64, end: f64) -> bool {
        let sign = self.sign;
        sign * (position - sign * size / 2.0 - start) >= 0.0
            && sign * (position + sign * size / 2.0 - end) <= 0.0
    }

    /// Label position of the first tick, pulled inside the start edge.
    fn head_position(&self, coordinate: f64, size: f64) -> f64 {
        let overflow = self.sign * (coordinate - self.sign * size / 2.0 - self.start);
        if overflow < 0.0 {
            coordinate - overflow * self.sign
        } else {
            coordinate
        }
    }

    /// Label position of the last tick, pulled inside the end edge.
    fn tail_position(&self, coordinate: f64, size: f64) -> f64 {
        let overflow = self.sign * (coordinate + self.sign * size / 2.0 - self.end);
        if overflow > 0.0 {
            coordinate - overflow * self.sign
        } else {
            coordinate
        }
    }

    fn walk_from_start(&self, ticks: &[AxisTick], sizes: &[f64], keep_tail: bool) -> Vec<Option<f64>> {
        let len = ticks.len();
        let mut placed = vec![None; len];
        let mut start = self.start;
        let mut end = self.end;

        let count = if keep_tail && len > 1 {
            let size = sizes[len - 1];
            let position = self.tail_position(ticks[len - 1].coordinate, size);
            placed[len - 1] = Some(position);
            end = position - self.sign * (size / 2.0 + self.min_gap);
            len - 1
        } else {
            len
        };

        for index in 0..count {
            let size = sizes[index];
            let position = if index == 0 {
                self.head_position(ticks[index].coordinate, size)
            } else {
                ticks[index].coordinate
            };
            if index == 0 || self.fits(position, size, start, end) {
                start = position + self.sign * (size / 2.0 + self.min_gap);
                placed[index] = Some(position);
            }
        }
        placed
    }

    fn walk_from_end(&self, ticks: &[AxisTick], sizes: &[f64]) -> Vec<Option<f64>> {
        let len = ticks.len();
        let mut placed = vec![None; len];
        let mut end = self.end;

        for index in (0..len).rev() {
            let size = sizes[index];
            let position = if index == len - 1 {
                self.tail_position(ticks[index].coordinate, size)
            } else {
                ticks[index].coordinate
            };
            if index == len - 1 || self.fits(position, size, self.start, end) {
                end = position - self.sign * (size / 2.0 + self.min_gap);
                placed[index] = Some(position);
            }
        }
        placed
    }

    /// Every `step`-th tick from the first, with one step sized to fit the
    /// widest label plus the minimum gap.
    fn equidistant(&self, ticks: &[AxisTick], sizes: &[f64]) -> Vec<Option<f64>> {
        let step = match ticks {
            [first, second, ..] => {
                let spacing = (second.coordinate - first.coordinate).abs();
                let required = sizes.iter().copied().fold(0.0_f64, f64::max) + self.min_gap;
                if spacing > 0.0 && spacing.is_finite() {
                    ((required / spacing).ceil() as usize).max(1)
                } else {
                    1
                }
            }
            _ => 1,
        };
        ticks
            .iter()
            .enumerate()
            .map(|(index, tick)| (index % step == 0).then_some(tick.coordinate))
            .collect()
    }
}
