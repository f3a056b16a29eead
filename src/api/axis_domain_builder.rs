use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::{
    BrushWindow, CategoricalDomain, DomainValue, LinearScale, OrdinalScale, fixed_domain_tick_values,
    nice_tick_values, resolve_numeric_domain,
};

use super::{AxisConfig, AxisKind, AxisTick, OrdinalPlacement, TickLabelMeasure, TickSelector};

/// Domain values of the visible window and the ticks chosen to label them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AxisDomain {
    /// `[min, max]` for numeric axes; category values or record indices otherwise.
    pub values: Vec<DomainValue>,
    /// Every generated tick before interval filtering.
    pub candidates: Vec<AxisTick>,
    pub ticks: Vec<AxisTick>,
}

impl AxisDomain {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Recomputes an [`AxisDomain`] from scratch.
#[derive(Debug, Default, Clone, Copy)]
pub struct AxisDomainBuilder;

impl AxisDomainBuilder {
    /// Builds the domain of `values` restricted to `window` over `range`.
    ///
    /// A `None` window covers the whole array; reversed windows cover
    /// `min..=max`. Windows past the data are clamped.
    #[must_use]
    pub fn build(
        values: &[DomainValue],
        window: Option<BrushWindow>,
        config: &AxisConfig,
        range: (f64, f64),
        measure: &dyn TickLabelMeasure,
    ) -> AxisDomain {
        let (offset, visible) = match window {
            Some(window) => match window.clamped(values.len()) {
                Some(window) => (
                    window.min_index(),
                    &values[window.min_index()..=window.max_index()],
                ),
                None => return AxisDomain::default(),
            },
            None => (0, values),
        };

        let (domain_values, candidates) = match config.kind {
            AxisKind::Number => numeric_candidates(visible, config, range),
            AxisKind::Category => categorical_candidates(visible, offset, config, range),
        };
        let ticks = TickSelector::new(config.interval, config.min_tick_gap, range)
            .select(&candidates, measure);

        AxisDomain {
            values: domain_values,
            candidates,
            ticks,
        }
    }
}

fn numeric_candidates(
    visible: &[DomainValue],
    config: &AxisConfig,
    range: (f64, f64),
) -> (Vec<DomainValue>, Vec<AxisTick>) {
    let Some(domain) = resolve_numeric_domain(visible, config.domain.as_ref()) else {
        return (Vec::new(), Vec::new());
    };

    let count = config.numeric_tick_count();
    let tick_values = if domain.auto {
        nice_tick_values(domain.min, domain.max, count, config.allow_decimals)
    } else {
        fixed_domain_tick_values(domain.min, domain.max, count, config.allow_decimals)
    };

    let (min, max) = if domain.auto {
        tick_values
            .iter()
            .copied()
            .fold((domain.min, domain.max), |(min, max), value| {
                (min.min(value), max.max(value))
            })
    } else {
        (domain.min, domain.max)
    };

    let scale = match LinearScale::new((min, max), range) {
        Ok(scale) => scale,
        Err(err) => {
            warn!(error = %err, "skipping numeric axis ticks");
            return (vec![DomainValue::number(min), DomainValue::number(max)], Vec::new());
        }
    };

    let ticks = tick_values
        .into_iter()
        .enumerate()
        .map(|(ordinal, value)| {
            AxisTick::new(DomainValue::number(value), scale.domain_to_pixel(value), ordinal, 0.0)
        })
        .collect();
    (vec![DomainValue::number(min), DomainValue::number(max)], ticks)
}

fn categorical_candidates(
    visible: &[DomainValue],
    offset: usize,
    config: &AxisConfig,
    range: (f64, f64),
) -> (Vec<DomainValue>, Vec<AxisTick>) {
    let domain = CategoricalDomain::from_values(visible, config.allow_duplicated_category);
    let scale = match config.placement {
        OrdinalPlacement::Point => OrdinalScale::point(domain.len(), range.0, range.1),
        OrdinalPlacement::Band {
            padding_inner,
            padding_outer,
        } => OrdinalScale::band(domain.len(), range.0, range.1, padding_inner, padding_outer),
    };
    let label_offset = scale.bandwidth() / 2.0;

    let ticks = sampled_slots(domain.len(), config.valid_tick_count())
        .into_iter()
        .filter_map(|slot| {
            let value = domain.label_value(slot, visible)?.clone();
            let record = domain.source_index(slot)?;
            let coordinate = scale.position(slot)? + label_offset;
            Some(AxisTick::new(value, coordinate, offset + record, label_offset))
        })
        .collect();
    (domain.domain_values(), ticks)
}

/// `target` evenly spaced slots out of `len`, always with the first and last.
fn sampled_slots(len: usize, target: Option<usize>) -> Vec<usize> {
    let target = match target {
        Some(target) if target < len => target,
        _ => return (0..len).collect(),
    };
    if target == 1 {
        return vec![0];
    }

    let last = len - 1;
    let mut slots: Vec<usize> = Vec::with_capacity(target);
    for step in 0..target {
        let ratio = step as f64 / (target - 1) as f64;
        let slot = ((ratio * last as f64).round() as usize).min(last);
        if slots.last() != Some(&slot) {
            slots.push(slot);
        }
    }
    slots
}

#[cfg(test)]
mod tests {
    use super::sampled_slots;

    #[test]
    fn sampling_keeps_both_ends() {
        assert_eq!(sampled_slots(10, Some(4)), vec![0, 3, 6, 9]);
        assert_eq!(sampled_slots(5, Some(2)), vec![0, 4]);
        assert_eq!(sampled_slots(5, Some(1)), vec![0]);
    }

    #[test]
    fn unusable_targets_keep_every_slot() {
        assert_eq!(sampled_slots(3, None), vec![0, 1, 2]);
        assert_eq!(sampled_slots(3, Some(3)), vec![0, 1, 2]);
        assert_eq!(sampled_slots(3, Some(7)), vec![0, 1, 2]);
    }
}
