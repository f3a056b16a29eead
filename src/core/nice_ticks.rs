//! Human-friendly numeric tick generation.
//!
//! Steps are computed in `Decimal` so values such as `0.05` or `45` come out
//! exact instead of accumulating binary floating point error.

use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};

pub const DEFAULT_TICK_COUNT: usize = 5;
/// Upper bound on ticks produced by any generator in this module.
pub const MAX_TICK_COUNT: usize = 10_000;

const MAX_STEP_CORRECTIONS: u32 = 64;

/// Evenly spaced "round" ticks covering `[min, max]`.
///
/// The returned ticks may extend past the input extent; callers widen the
/// axis domain to the first/last tick. `min == max` yields a single tick,
/// infinite bounds yield the bounds themselves, and `min > max` yields the
/// ticks in descending order.
#[must_use]
pub fn nice_tick_values(min: f64, max: f64, tick_count: usize, allow_decimals: bool) -> Vec<f64> {
    let Some((low, high)) = ordered_extent(min, max) else {
        return Vec::new();
    };
    if let Some(ticks) = degenerate_ticks(low, high) {
        return oriented(ticks, min > max);
    }

    let count = tick_count.clamp(2, MAX_TICK_COUNT);
    let ticks = decimal_nice_ticks(low, high, count, allow_decimals)
        .unwrap_or_else(|| evenly_spaced_ticks(low, high, count));
    oriented(ticks, min > max)
}

/// Round-step ticks that start exactly at `min` and always end at `max`.
#[must_use]
pub fn fixed_domain_tick_values(
    min: f64,
    max: f64,
    tick_count: usize,
    allow_decimals: bool,
) -> Vec<f64> {
    let Some((low, high)) = ordered_extent(min, max) else {
        return Vec::new();
    };
    if let Some(ticks) = degenerate_ticks(low, high) {
        return oriented(ticks, min > max);
    }

    let count = tick_count.clamp(2, MAX_TICK_COUNT);
    let ticks = decimal_fixed_domain_ticks(low, high, count, allow_decimals)
        .unwrap_or_else(|| evenly_spaced_ticks(low, high, count));
    oriented(ticks, min > max)
}

/// Plain linear subdivision used when decimal arithmetic is out of range.
///
/// At most [`MAX_TICK_COUNT`] values are produced.
#[must_use]
pub fn evenly_spaced_ticks(start: f64, end: f64, tick_count: usize) -> Vec<f64> {
    let tick_count = tick_count.min(MAX_TICK_COUNT);
    if tick_count == 0 {
        return Vec::new();
    }
    if tick_count == 1 {
        return vec![start];
    }

    let span = end - start;
    let denominator = (tick_count - 1) as f64;
    (0..tick_count)
        .map(|index| start + span * (index as f64) / denominator)
        .collect()
}

fn ordered_extent(min: f64, max: f64) -> Option<(f64, f64)> {
    if min.is_nan() || max.is_nan() {
        return None;
    }
    Some((min.min(max), min.max(max)))
}

fn degenerate_ticks(low: f64, high: f64) -> Option<Vec<f64>> {
    if low == high {
        return Some(vec![low]);
    }
    if low.is_infinite() || high.is_infinite() {
        return Some(vec![low, high]);
    }
    None
}

fn oriented(mut ticks: Vec<f64>, descending: bool) -> Vec<f64> {
    if descending {
        ticks.reverse();
    }
    ticks
}

fn decimal_nice_ticks(low: f64, high: f64, count: usize, allow_decimals: bool) -> Option<Vec<f64>> {
    let min = Decimal::from_f64(low)?;
    let max = Decimal::from_f64(high)?;
    let (step, tick_min, tick_max) = calculate_step(min, max, count, allow_decimals)?;
    let end = tick_max.checked_add(step.checked_mul(Decimal::new(1, 1))?)?;
    to_f64_ticks(range_step(tick_min, end, step)?)
}

fn decimal_fixed_domain_ticks(
    low: f64,
    high: f64,
    count: usize,
    allow_decimals: bool,
) -> Option<Vec<f64>> {
    let min = Decimal::from_f64(low)?;
    let max = Decimal::from_f64(high)?;
    let rough = max
        .checked_sub(min)?
        .checked_div(Decimal::from(count - 1))?;
    let step = format_step(rough, allow_decimals, 0)?;
    if step.is_zero() {
        return None;
    }
    let stop = max.checked_sub(step.checked_mul(Decimal::new(99, 2))?)?;
    let mut ticks = to_f64_ticks(range_step(min, stop, step)?)?;
    ticks.push(high);
    Some(ticks)
}

fn calculate_step(
    min: Decimal,
    max: Decimal,
    tick_count: usize,
    allow_decimals: bool,
) -> Option<(Decimal, Decimal, Decimal)> {
    let target = i64::try_from(tick_count).ok()?;
    let rough = max
        .checked_sub(min)?
        .checked_div(Decimal::from(tick_count - 1))?;

    for correction in 0..MAX_STEP_CORRECTIONS {
        let step = format_step(rough, allow_decimals, correction)?;
        if step.is_zero() {
            return None;
        }

        let middle = if min <= Decimal::ZERO && max >= Decimal::ZERO {
            Decimal::ZERO
        } else {
            let middle = min.checked_add(max)? / Decimal::TWO;
            middle - middle % step
        };

        let mut below = (middle.checked_sub(min)? / step).ceil().to_i64()?;
        let mut above = (max.checked_sub(middle)? / step).ceil().to_i64()?;
        let scale_count = below + above + 1;
        if scale_count > target {
            continue;
        }
        if scale_count < target {
            if max > Decimal::ZERO {
                above += target - scale_count;
            } else {
                below += target - scale_count;
            }
        }

        let tick_min = middle.checked_sub(Decimal::from(below).checked_mul(step)?)?;
        let tick_max = middle.checked_add(Decimal::from(above).checked_mul(step)?)?;
        return Some((step, tick_min, tick_max));
    }

    None
}

/// Rounds a raw step up to 1/20 (or 1/10 for single-digit steps) of its
/// decimal magnitude, plus `correction` extra increments.
fn format_step(rough: Decimal, allow_decimals: bool, correction: u32) -> Option<Decimal> {
    if rough <= Decimal::ZERO {
        return Some(Decimal::ZERO);
    }

    let digits = digit_count(rough.to_f64()?);
    let magnitude = power_of_ten(digits)?;
    let ratio = rough.checked_div(magnitude)?;
    let ratio_scale = if digits == 1 {
        Decimal::new(1, 1)
    } else {
        Decimal::new(5, 2)
    };
    let amended = (ratio.checked_div(ratio_scale)?.ceil() + Decimal::from(correction))
        .checked_mul(ratio_scale)?;
    let step = amended.checked_mul(magnitude)?;

    Some(if allow_decimals { step } else { step.ceil() })
}

fn digit_count(value: f64) -> i32 {
    if value == 0.0 {
        return 1;
    }
    value.abs().log10().floor() as i32 + 1
}

fn power_of_ten(exponent: i32) -> Option<Decimal> {
    if exponent >= 0 {
        let mut value = Decimal::ONE;
        for _ in 0..exponent {
            value = value.checked_mul(Decimal::TEN)?;
        }
        return Some(value);
    }

    let scale = exponent.unsigned_abs();
    (scale <= 28).then(|| Decimal::new(1, scale))
}

fn range_step(start: Decimal, end: Decimal, step: Decimal) -> Option<Vec<Decimal>> {
    let mut values = Vec::new();
    let mut value = start;
    while value < end {
        if values.len() >= MAX_TICK_COUNT {
            return None;
        }
        values.push(value);
        value = value.checked_add(step)?;
    }
    Some(values)
}

fn to_f64_ticks(values: Vec<Decimal>) -> Option<Vec<f64>> {
    values.into_iter().map(|value| value.to_f64()).collect()
}
