use crate::core::{DataIndex, DomainValue};

use super::TickFormatter;

pub const DEFAULT_LABEL_FONT_SIZE_PX: f64 = 12.0;

/// Pixel extent of a tick label along the axis.
pub trait TickLabelMeasure {
    fn label_size(&self, value: &DomainValue, index: DataIndex) -> f64;
}

impl<F> TickLabelMeasure for F
where
    F: Fn(&DomainValue, DataIndex) -> f64,
{
    fn label_size(&self, value: &DomainValue, index: DataIndex) -> f64 {
        self(value, index)
    }
}

/// Backend-independent width estimate of the raw label text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimatedLabelWidth {
    pub font_size_px: f64,
}

impl Default for EstimatedLabelWidth {
    fn default() -> Self {
        Self {
            font_size_px: DEFAULT_LABEL_FONT_SIZE_PX,
        }
    }
}

impl TickLabelMeasure for EstimatedLabelWidth {
    fn label_size(&self, value: &DomainValue, _index: DataIndex) -> f64 {
        estimate_label_text_width_px(&value.to_string(), self.font_size_px)
    }
}

/// Estimates the width of the text a [`TickFormatter`] would produce.
pub struct FormattedLabelWidth<'a> {
    pub formatter: &'a dyn TickFormatter,
    pub font_size_px: f64,
}

impl TickLabelMeasure for FormattedLabelWidth<'_> {
    fn label_size(&self, value: &DomainValue, index: DataIndex) -> f64 {
        let text = self.formatter.format(value, index);
        estimate_label_text_width_px(&text, self.font_size_px)
    }
}

#[must_use]
pub fn estimate_label_text_width_px(text: &str, font_size_px: f64) -> f64 {
    let units = text.chars().fold(0.0, |acc, ch| {
        acc + match ch {
            '0'..='9' => 0.62,
            '.' | ',' => 0.34,
            '-' | '+' | '%' => 0.42,
            ' ' => 0.33,
            _ => 0.58,
        }
    });
    (units * font_size_px).max(font_size_px)
}
