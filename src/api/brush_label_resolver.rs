use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::interaction::{BrushRegion, TravellerId};

use super::{BrushController, TickFormatter};

/// Horizontal text anchor of a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelAnchor {
    Start,
    End,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrushLabel {
    pub index: usize,
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub anchor: LabelAnchor,
}

/// Index labels drawn beside the left-most and right-most travellers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrushLabels {
    pub left: BrushLabel,
    pub right: BrushLabel,
}

/// Draggable body between the travellers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlideExtent {
    pub x: f64,
    pub width: f64,
}

impl BrushController {
    pub fn enter(&mut self, region: BrushRegion) {
        if self.core.runtime.unmounted {
            return;
        }
        trace!(?region, "brush region entered");
        self.core.runtime.interaction.set_text_active(true);
        self.sync_text_visibility();
    }

    pub fn leave(&mut self, region: BrushRegion) {
        if self.core.runtime.unmounted {
            return;
        }
        trace!(?region, "brush region left");
        self.core.runtime.interaction.set_text_active(false);
        self.sync_text_visibility();
    }

    pub fn focus(&mut self, id: TravellerId) {
        if self.core.runtime.unmounted {
            return;
        }
        self.core.runtime.interaction.focus(id);
        self.sync_text_visibility();
    }

    pub fn blur(&mut self, id: TravellerId) {
        if self.core.runtime.unmounted {
            return;
        }
        self.core.runtime.interaction.blur(id);
        self.sync_text_visibility();
    }

    /// Hovered, focused, dragging, or forced on by config.
    #[must_use]
    pub fn labels_visible(&self) -> bool {
        self.core
            .runtime
            .interaction
            .labels_visible(self.core.config.always_show_text)
    }

    /// Labels for the window's lower and upper records, when visible.
    #[must_use]
    pub fn labels(&self, formatter: &dyn TickFormatter) -> Option<BrushLabels> {
        if !self.labels_visible() {
            return None;
        }
        let window = self.core.model.window?;
        let travellers = self.core.model.travellers?;
        let values = &self.core.model.values;
        let geometry = self.core.model.geometry;
        let offset = self.core.config.label_offset_px;
        let y = geometry.center_y();

        let left_index = window.min_index();
        let right_index = window.max_index();
        let left = BrushLabel {
            index: left_index,
            text: formatter.format(values.get(left_index)?, left_index),
            x: travellers.left() - offset,
            y,
            anchor: LabelAnchor::End,
        };
        let right = BrushLabel {
            index: right_index,
            text: formatter.format(values.get(right_index)?, right_index),
            x: travellers.right() + geometry.traveller_width + offset,
            y,
            anchor: LabelAnchor::Start,
        };
        Some(BrushLabels { left, right })
    }

    /// Body between the travellers' inner edges.
    #[must_use]
    pub fn slide_extent(&self) -> Option<SlideExtent> {
        let travellers = self.core.model.travellers?;
        let traveller_width = self.core.model.geometry.traveller_width;
        Some(SlideExtent {
            x: travellers.left() + traveller_width,
            width: ((travellers.end_x - travellers.start_x).abs() - traveller_width).max(0.0),
        })
    }
}
