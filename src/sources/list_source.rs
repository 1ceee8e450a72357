// ============================================================================
// List Source
// In-memory sequence of already-typed numbers or strings
// ============================================================================

use crate::interfaces::{InputSource, SourceError, TokenStream};
use rust_decimal::Decimal;
use std::fmt;

/// One element of a [`ListSource`]
#[derive(Debug, Clone, PartialEq)]
pub enum ListValue {
    Integer(i64),
    Float(f64),
    Decimal(Decimal),
    Text(String),
}

impl fmt::Display for ListValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListValue::Integer(n) => write!(f, "{}", n),
            // Debug keeps the fractional point (`2.0`) and switches to
            // exponent form for very large or small magnitudes
            ListValue::Float(x) => write!(f, "{:?}", x),
            ListValue::Decimal(d) => write!(f, "{}", d),
            ListValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ListValue {
    fn from(value: i64) -> Self {
        ListValue::Integer(value)
    }
}

impl From<i32> for ListValue {
    fn from(value: i32) -> Self {
        ListValue::Integer(value.into())
    }
}

impl From<f64> for ListValue {
    fn from(value: f64) -> Self {
        ListValue::Float(value)
    }
}

impl From<Decimal> for ListValue {
    fn from(value: Decimal) -> Self {
        ListValue::Decimal(value)
    }
}

impl From<String> for ListValue {
    fn from(value: String) -> Self {
        ListValue::Text(value)
    }
}

impl From<&str> for ListValue {
    fn from(value: &str) -> Self {
        ListValue::Text(value.to_string())
    }
}

/// Source backed by an ordered in-memory list.
///
/// Tokens are the elements stringified in order; the list can be read any
/// number of times.
#[derive(Debug, Clone, Default)]
pub struct ListSource {
    values: Vec<ListValue>,
}

impl ListSource {
    pub fn new<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<ListValue>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl InputSource for ListSource {
    fn name(&self) -> &str {
        "ListSource"
    }

    fn validate_source(&self) -> Result<(), String> {
        if self.values.is_empty() {
            return Err("List is empty".to_string());
        }
        Ok(())
    }

    fn read(&self) -> Result<TokenStream<'_>, SourceError> {
        Ok(Box::new(
            self.values
                .iter()
                .map(|value| Ok::<_, SourceError>(value.to_string())),
        ))
    }
}
