use std::fmt;

use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::types::DataIndex;

/// One axis value: a number or a category label.
///
/// Numbers use total ordering so values can be hashed and deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DomainValue {
    Number(OrderedFloat<f64>),
    Category(String),
}

impl DomainValue {
    #[must_use]
    pub fn number(value: f64) -> Self {
        Self::Number(OrderedFloat(value))
    }

    #[must_use]
    pub fn category(label: impl Into<String>) -> Self {
        Self::Category(label.into())
    }

    /// Finite numeric reading of the value; numeric-looking categories parse.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        let value = match self {
            Self::Number(value) => value.into_inner(),
            Self::Category(label) => label.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }
}

impl fmt::Display for DomainValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{}", value.into_inner()),
            Self::Category(label) => f.write_str(label),
        }
    }
}

impl From<f64> for DomainValue {
    fn from(value: f64) -> Self {
        Self::number(value)
    }
}

impl From<&str> for DomainValue {
    fn from(value: &str) -> Self {
        Self::category(value)
    }
}

impl From<String> for DomainValue {
    fn from(value: String) -> Self {
        Self::Category(value)
    }
}

/// Parsed numeric domain bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DomainBound {
    /// Data extent, widened to the generated nice ticks.
    Auto,
    DataMin,
    DataMax,
    /// `dataMin - offset`
    DataMinMinus(f64),
    /// `dataMax + offset`
    DataMaxPlus(f64),
    Value(f64),
}

impl DomainBound {
    /// Parses `auto`, `dataMin`, `dataMax`, `dataMin - n`, `dataMax + n` or a
    /// plain number. Anything else is `None`.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        match input {
            "auto" => return Some(Self::Auto),
            "dataMin" => return Some(Self::DataMin),
            "dataMax" => return Some(Self::DataMax),
            _ => {}
        }

        if let Some(rest) = input.strip_prefix("dataMin") {
            return parse_offset(rest, '-').map(Self::DataMinMinus);
        }
        if let Some(rest) = input.strip_prefix("dataMax") {
            return parse_offset(rest, '+').map(Self::DataMaxPlus);
        }

        input
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .map(Self::Value)
    }

    fn resolve(self, data_min: f64, data_max: f64) -> f64 {
        match self {
            Self::DataMin => data_min,
            Self::DataMax => data_max,
            Self::DataMinMinus(offset) => data_min - offset,
            Self::DataMaxPlus(offset) => data_max + offset,
            Self::Value(value) => value,
            // Callers substitute the positional data bound before resolving.
            Self::Auto => data_min,
        }
    }
}

fn parse_offset(rest: &str, operator: char) -> Option<f64> {
    let amount = rest.trim_start().strip_prefix(operator)?.trim();
    if amount.is_empty() || !amount.chars().all(|ch| ch.is_ascii_digit() || ch == '.') {
        return None;
    }
    amount.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Raw bound as written in configuration: a number or an expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DomainBoundInput {
    Number(f64),
    Expression(String),
}

impl DomainBoundInput {
    /// `None` when the input cannot be understood.
    #[must_use]
    pub fn parse(&self) -> Option<DomainBound> {
        match self {
            Self::Number(value) if value.is_finite() => Some(DomainBound::Value(*value)),
            Self::Number(_) => None,
            Self::Expression(text) => DomainBound::parse(text),
        }
    }
}

impl From<f64> for DomainBoundInput {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for DomainBoundInput {
    fn from(value: &str) -> Self {
        Self::Expression(value.to_owned())
    }
}

/// Resolved numeric extent for a number axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericDomain {
    pub min: f64,
    pub max: f64,
    /// At least one side is `auto`, so nice ticks may widen the extent.
    pub auto: bool,
}

/// Resolves `[min, max]` from the values and optional bound inputs.
///
/// Unparseable bounds fall back to the matching data bound. A resolved
/// extent with `min > max` is discarded in favour of the data extent.
/// Returns `None` when neither the data nor the bounds yield numbers.
#[must_use]
pub fn resolve_numeric_domain(
    values: &[DomainValue],
    bounds: Option<&[DomainBoundInput; 2]>,
) -> Option<NumericDomain> {
    let data_extent = values
        .iter()
        .filter_map(DomainValue::as_number)
        .fold(None, |extent: Option<(f64, f64)>, value| match extent {
            Some((min, max)) => Some((min.min(value), max.max(value))),
            None => Some((value, value)),
        });

    let (lower, upper) = match bounds {
        Some([lower, upper]) => (
            lower.parse().unwrap_or(DomainBound::DataMin),
            upper.parse().unwrap_or(DomainBound::DataMax),
        ),
        None => (DomainBound::Auto, DomainBound::Auto),
    };
    let auto = lower == DomainBound::Auto || upper == DomainBound::Auto;

    let Some((data_min, data_max)) = data_extent else {
        return match (lower, upper) {
            (DomainBound::Value(min), DomainBound::Value(max)) if min <= max => {
                Some(NumericDomain {
                    min,
                    max,
                    auto: false,
                })
            }
            _ => None,
        };
    };

    let min = match lower {
        DomainBound::Auto => data_min,
        bound => bound.resolve(data_min, data_max),
    };
    let max = match upper {
        DomainBound::Auto => data_max,
        bound => bound.resolve(data_min, data_max),
    };

    if !min.is_finite() || !max.is_finite() || min > max {
        return Some(NumericDomain {
            min: data_min,
            max: data_max,
            auto,
        });
    }

    Some(NumericDomain { min, max, auto })
}

/// Category axis domain.
#[derive(Debug, Clone, PartialEq)]
pub enum CategoricalDomain {
    /// One slot per record; the domain is the index range `0..len`.
    Indexed { len: usize },
    /// Distinct values in first-occurrence order, each with the position of
    /// its first record.
    Distinct(Vec<(DomainValue, DataIndex)>),
}

impl CategoricalDomain {
    #[must_use]
    pub fn from_values(values: &[DomainValue], allow_duplicated_category: bool) -> Self {
        if allow_duplicated_category {
            return Self::Indexed { len: values.len() };
        }
        let mut first_seen: IndexMap<&DomainValue, DataIndex> = IndexMap::new();
        for (index, value) in values.iter().enumerate() {
            first_seen.entry(value).or_insert(index);
        }
        Self::Distinct(
            first_seen
                .into_iter()
                .map(|(value, index)| (value.clone(), index))
                .collect(),
        )
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Indexed { len } => *len,
            Self::Distinct(entries) => entries.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Domain entries themselves (indices for the indexed form).
    #[must_use]
    pub fn domain_values(&self) -> Vec<DomainValue> {
        match self {
            Self::Indexed { len } => (0..*len).map(|index| DomainValue::number(index as f64)).collect(),
            Self::Distinct(entries) => entries.iter().map(|(value, _)| value.clone()).collect(),
        }
    }

    /// Value shown for slot `slot`; indexed domains look up the source record.
    #[must_use]
    pub fn label_value<'a>(
        &'a self,
        slot: usize,
        source: &'a [DomainValue],
    ) -> Option<&'a DomainValue> {
        match self {
            Self::Indexed { .. } => source.get(slot),
            Self::Distinct(entries) => entries.get(slot).map(|(value, _)| value),
        }
    }

    /// Source record behind slot `slot`.
    #[must_use]
    pub fn source_index(&self, slot: usize) -> Option<DataIndex> {
        match self {
            Self::Indexed { len } => (slot < *len).then_some(slot),
            Self::Distinct(entries) => entries.get(slot).map(|(_, index)| *index),
        }
    }
}
