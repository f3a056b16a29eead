pub mod domain;
pub mod index_locator;
pub mod linear_scale;
pub mod nice_ticks;
pub mod positional_scale;
pub mod types;

pub use domain::{
    CategoricalDomain, DomainBound, DomainBoundInput, DomainValue, NumericDomain,
    resolve_numeric_domain,
};
pub use index_locator::{locate_index, range_to_indices};
pub use linear_scale::LinearScale;
pub use nice_ticks::{
    DEFAULT_TICK_COUNT, MAX_TICK_COUNT, evenly_spaced_ticks, fixed_domain_tick_values,
    nice_tick_values,
};
pub use positional_scale::{CoordinateTable, OrdinalScale, PositionalScale};
pub use types::{BrushGeometry, BrushPadding, BrushWindow, DataIndex, DEFAULT_TRAVELLER_WIDTH};
