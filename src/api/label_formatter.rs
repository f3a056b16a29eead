use crate::core::{DataIndex, DomainValue};

/// Maps a record's value to display text.
///
/// Implemented for any `Fn(&DomainValue, DataIndex) -> String`, so hosts can
/// pass closures directly.
pub trait TickFormatter {
    fn format(&self, value: &DomainValue, index: DataIndex) -> String;
}

impl<F> TickFormatter for F
where
    F: Fn(&DomainValue, DataIndex) -> String,
{
    fn format(&self, value: &DomainValue, index: DataIndex) -> String {
        self(value, index)
    }
}

/// Formats the raw value with its `Display` impl.
#[derive(Debug, Default, Clone, Copy)]
pub struct RawValueFormatter;

impl TickFormatter for RawValueFormatter {
    fn format(&self, value: &DomainValue, _index: DataIndex) -> String {
        value.to_string()
    }
}
