use tracing::trace;

use crate::extensions::BrushEvent;
use crate::interaction::{BrushKey, TravellerId};

use super::BrushController;

impl BrushController {
    /// Steps the focused traveller to the neighbouring coordinate.
    ///
    /// Moves that would cross or meet the other traveller, leave the table,
    /// or arrive mid-drag are refused. Returns `true` when a change was
    /// committed and emitted.
    pub fn key_down(&mut self, key: BrushKey) -> bool {
        if self.core.runtime.unmounted || self.is_dragging() {
            return false;
        }
        let (Some(id), Some(direction)) =
            (self.core.runtime.interaction.focused(), key.direction())
        else {
            return false;
        };
        let (Some(scale), Some(mut travellers)) =
            (&self.core.model.scale, self.core.model.travellers)
        else {
            return false;
        };

        let table = scale.coordinate_table();
        let current = travellers.get(id);
        let base = match table.exact_index_of(current) {
            Some(index) => index,
            // Off-table after a pointer drag: the lower neighbour counts as
            // one step to the left.
            None if direction < 0 => table.locate(current) + 1,
            None => table.locate(current),
        };
        let Some(target) = base.checked_add_signed(direction) else {
            return false;
        };
        let Some(next_x) = table.get(target) else {
            return false;
        };

        let blocked = match id {
            TravellerId::Start => next_x >= travellers.end_x,
            TravellerId::End => next_x <= travellers.start_x,
        };
        if blocked {
            return false;
        }

        travellers.set(id, next_x);
        let gap = self.core.config.gap;
        let window = table.range_to_indices(travellers.start_x, travellers.end_x, gap);
        self.core.model.travellers = Some(travellers);
        trace!(?id, index = target, "traveller stepped by keyboard");

        self.core.model.window = Some(window);
        self.emit(BrushEvent::Changed(window));
        true
    }
}
