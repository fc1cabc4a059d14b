//! Named, typed parameters.
//!
//! A [`Param`] is what a clause binds next to its SQL text: the placeholder name as it
//! appears in the text (e.g. `@userName`), a [`ParamValue`] and a [`ParamType`] tag.
//! Clauses only look at the name; the value and type are carried for the caller that
//! eventually binds them to a database call.
//!
//! Typed predicate helpers build parameters through the [`SqlValue`] capability trait.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Type tag of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamType {
    Bool,
    Int16,
    Int32,
    Int64,
    Float32,
    Float64,
    Decimal,
    Text,
    Uuid,
    Date,
    Time,
    DateTime,
    DateTimeUtc,
    Binary,
    Json,
    /// Untyped SQL `NULL`.
    Null,
}

/// Value carried by a parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Null,
    Bool(bool),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
    #[cfg(feature = "rust_decimal")]
    Decimal(rust_decimal::Decimal),
    Text(String),
    Uuid(Uuid),
    Date(NaiveDate),
    Time(NaiveTime),
    DateTime(NaiveDateTime),
    DateTimeUtc(DateTime<Utc>),
    Binary(Vec<u8>),
    Json(serde_json::Value),
}

impl ParamValue {
    /// Type tag matching this value.
    pub fn param_type(&self) -> ParamType {
        match self {
            Self::Null => ParamType::Null,
            Self::Bool(_) => ParamType::Bool,
            Self::Int16(_) => ParamType::Int16,
            Self::Int32(_) => ParamType::Int32,
            Self::Int64(_) => ParamType::Int64,
            Self::Float32(_) => ParamType::Float32,
            Self::Float64(_) => ParamType::Float64,
            #[cfg(feature = "rust_decimal")]
            Self::Decimal(_) => ParamType::Decimal,
            Self::Text(_) => ParamType::Text,
            Self::Uuid(_) => ParamType::Uuid,
            Self::Date(_) => ParamType::Date,
            Self::Time(_) => ParamType::Time,
            Self::DateTime(_) => ParamType::DateTime,
            Self::DateTimeUtc(_) => ParamType::DateTimeUtc,
            Self::Binary(_) => ParamType::Binary,
            Self::Json(_) => ParamType::Json,
        }
    }

    /// Check if this is SQL `NULL`.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Borrow the text value, if this is a text parameter.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// A named, typed value bound to a clause.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Param {
    name: String,
    value: ParamValue,
    #[serde(rename = "type")]
    ty: ParamType,
}

impl Param {
    /// Create a parameter, deriving the type tag from the value.
    pub fn new(name: impl Into<String>, value: ParamValue) -> Self {
        let ty = value.param_type();
        Self {
            name: name.into(),
            value,
            ty,
        }
    }

    /// Create a parameter with an explicit type tag.
    ///
    /// Useful for typed `NULL`s or when a dialect maps one Rust type onto several
    /// database types.
    pub fn with_type(name: impl Into<String>, value: ParamValue, ty: ParamType) -> Self {
        Self {
            name: name.into(),
            value,
            ty,
        }
    }

    /// Create a typed SQL `NULL`.
    pub fn null(name: impl Into<String>, ty: ParamType) -> Self {
        Self::with_type(name, ParamValue::Null, ty)
    }

    /// Placeholder name as it appears in SQL text.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Bound value.
    pub fn value(&self) -> &ParamValue {
        &self.value
    }

    /// Type tag.
    pub fn param_type(&self) -> ParamType {
        self.ty
    }

    /// Split into `(name, value)`.
    pub fn into_parts(self) -> (String, ParamValue) {
        (self.name, self.value)
    }
}

/// A Rust value that can be bound as a [`Param`].
///
/// Implemented for the scalar types the typed predicate helpers accept.
pub trait SqlValue {
    /// Type tag used for parameters built from this type.
    fn param_type() -> ParamType;

    /// Convert into a parameter value.
    fn into_value(self) -> ParamValue;

    /// Build a parameter named `name` holding this value.
    fn to_param(self, name: impl Into<String>) -> Param
    where
        Self: Sized,
    {
        Param::with_type(name, self.into_value(), Self::param_type())
    }
}

/// Implement [`SqlValue`] for types that map directly onto a [`ParamValue`] variant.
macro_rules! impl_sql_value {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl SqlValue for $ty {
                fn param_type() -> ParamType {
                    ParamType::$variant
                }

                fn into_value(self) -> ParamValue {
                    ParamValue::$variant(self.into())
                }
            }
        )*
    };
}

impl_sql_value! {
    bool => Bool,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    f32 => Float32,
    f64 => Float64,
    String => Text,
    &str => Text,
    Uuid => Uuid,
    NaiveDate => Date,
    NaiveTime => Time,
    NaiveDateTime => DateTime,
    DateTime<Utc> => DateTimeUtc,
    Vec<u8> => Binary,
    &[u8] => Binary,
    serde_json::Value => Json,
}

#[cfg(feature = "rust_decimal")]
impl_sql_value! {
    rust_decimal::Decimal => Decimal,
}

impl<T: SqlValue + Clone> SqlValue for &T {
    fn param_type() -> ParamType {
        T::param_type()
    }

    fn into_value(self) -> ParamValue {
        self.clone().into_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_param_carries_name_value_and_type() {
        let p = 7i32.to_param("@x1");
        assert_eq!(p.name(), "@x1");
        assert_eq!(p.value(), &ParamValue::Int32(7));
        assert_eq!(p.param_type(), ParamType::Int32);

        let p = "abc".to_param("@s");
        assert_eq!(p.value().as_str(), Some("abc"));
        assert_eq!(p.param_type(), ParamType::Text);
    }

    #[test]
    fn typed_null_keeps_its_tag() {
        let p = Param::null("@n", ParamType::Uuid);
        assert!(p.value().is_null());
        assert_eq!(p.param_type(), ParamType::Uuid);
        assert_eq!(ParamValue::Null.param_type(), ParamType::Null);
    }

    #[test]
    fn serializes_as_flat_json() {
        let p = Param::new("@id", ParamValue::Int64(42));
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "@id", "value": 42, "type": "int64" })
        );
    }

    #[test]
    fn reference_values_clone_through() {
        let id = Uuid::nil();
        let p = (&id).to_param("@id");
        assert_eq!(p.value(), &ParamValue::Uuid(id));
    }
}
