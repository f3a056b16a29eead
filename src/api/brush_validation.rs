use crate::error::{BrushError, BrushResult};

use super::BrushConfig;

pub(super) fn validate_brush_config(config: BrushConfig) -> BrushResult<BrushConfig> {
    if config.gap == 0 {
        return Err(BrushError::InvalidConfig(
            "brush gap must be >= 1".to_owned(),
        ));
    }
    if !config.padding.is_valid() {
        return Err(BrushError::InvalidConfig(
            "brush padding must be finite and >= 0".to_owned(),
        ));
    }
    if !config.label_offset_px.is_finite() || config.label_offset_px < 0.0 {
        return Err(BrushError::InvalidConfig(
            "brush label offset must be finite and >= 0".to_owned(),
        ));
    }
    Ok(config)
}
