use crate::error::{BrushError, BrushResult};

use super::{AxisConfig, OrdinalPlacement};

/// Rejects settings no axis can render with.
///
/// `tick_count` and `domain` are not checked here: unusable values there
/// degrade to defaults when the domain is built.
pub(super) fn validate_axis_config(config: &AxisConfig) -> BrushResult<()> {
    if !config.min_tick_gap.is_finite() || config.min_tick_gap < 0.0 {
        return Err(BrushError::InvalidConfig(
            "axis min tick gap must be finite and >= 0".to_owned(),
        ));
    }
    if let OrdinalPlacement::Band {
        padding_inner,
        padding_outer,
    } = config.placement
    {
        if !(0.0..=1.0).contains(&padding_inner) {
            return Err(BrushError::InvalidConfig(
                "band inner padding must be in [0, 1]".to_owned(),
            ));
        }
        if !padding_outer.is_finite() || padding_outer < 0.0 {
            return Err(BrushError::InvalidConfig(
                "band outer padding must be finite and >= 0".to_owned(),
            ));
        }
    }
    Ok(())
}
