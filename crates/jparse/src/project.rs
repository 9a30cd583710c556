//! Projection of parsed objects onto plain Rust structs.
//!
//! A type opts in by implementing [`Record`], usually through the
//! [`record!`](crate::record) macro, which lists the fields to fill. Each
//! listed field is matched against the object's keys without regard to case;
//! the first matching key supplies the value. Fields with no matching key keep
//! their `Default` value, and keys matching no field are ignored.
//!
//! ```
//! #[derive(Default, Debug, PartialEq)]
//! struct Dog {
//!     name: String,
//!     age: f64,
//!     good: bool,
//! }
//!
//! jparse::record!(Dog { name, age, good as "IsGoodBoy" });
//!
//! let value = jparse::parse(r#"{"Name": "Javvy", "Age": 4, "IsGoodBoy": true, "Toys": []}"#)?;
//! let dog: Dog = jparse::project(&value)?;
//! assert_eq!(dog, Dog { name: "Javvy".into(), age: 4.0, good: true });
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use thiserror::Error;

use crate::value::{Map, Value};

/// Why a value could not be projected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProjectionError {
    /// Projection starts from an object.
    #[error("expected an object")]
    NotAnObject,
    /// A key matched a field but its value has the wrong shape.
    #[error("field `{field}`: expected {expected}")]
    TypeMismatch {
        /// The field being filled.
        field: &'static str,
        /// What the field accepts.
        expected: &'static str,
    },
}

/// A struct whose fields can be filled from an object.
pub trait Record: Default {
    /// Names matched against object keys, ignoring case.
    const FIELDS: &'static [&'static str];

    /// Stores `value` into the field named `field`, one of [`Record::FIELDS`].
    ///
    /// # Errors
    ///
    /// Returns [`ProjectionError::TypeMismatch`] if `value` does not convert
    /// to the field's type.
    fn set_field(&mut self, field: &'static str, value: &Value) -> Result<(), ProjectionError>;
}

/// Conversion of a single value into a field type.
pub trait FromValue: Sized {
    /// Describes the accepted values in error messages.
    const EXPECTED: &'static str;

    /// Converts `value`, or `None` if it has the wrong shape.
    fn from_value(value: &Value) -> Option<Self>;
}

impl FromValue for Value {
    const EXPECTED: &'static str = "any value";

    fn from_value(value: &Value) -> Option<Self> {
        Some(value.clone())
    }
}

impl FromValue for bool {
    const EXPECTED: &'static str = "a boolean";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

impl FromValue for f64 {
    const EXPECTED: &'static str = "a number";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_f64()
    }
}

impl FromValue for i64 {
    const EXPECTED: &'static str = "an integer";

    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    fn from_value(value: &Value) -> Option<Self> {
        let n = value.as_f64()?;
        // 2^63 is the first value past `i64::MAX` that an `f64` can hold.
        let in_range = n >= i64::MIN as f64 && n < -(i64::MIN as f64);
        (n.fract() == 0.0 && in_range).then_some(n as i64)
    }
}

impl FromValue for String {
    const EXPECTED: &'static str = "a string";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_str().map(Into::into)
    }
}

impl FromValue for Map {
    const EXPECTED: &'static str = "an object";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_object().cloned()
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    const EXPECTED: &'static str = "an array";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_array()?.iter().map(T::from_value).collect()
    }
}

/// `null` becomes `None`; anything else must convert to `T`.
impl<T: FromValue> FromValue for Option<T> {
    const EXPECTED: &'static str = T::EXPECTED;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null => Some(None),
            other => T::from_value(other).map(Some),
        }
    }
}

/// Converts `value` for `field`, for use in [`Record::set_field`].
///
/// # Errors
///
/// Returns [`ProjectionError::TypeMismatch`] if the value has the wrong shape.
pub fn convert<T: FromValue>(field: &'static str, value: &Value) -> Result<T, ProjectionError> {
    T::from_value(value).ok_or(ProjectionError::TypeMismatch {
        field,
        expected: T::EXPECTED,
    })
}

/// Fills a `T` from an object value.
///
/// # Errors
///
/// Returns [`ProjectionError::NotAnObject`] unless `value` is an object, and
/// propagates conversion failures from [`Record::set_field`].
pub fn project<T: Record>(value: &Value) -> Result<T, ProjectionError> {
    let map = value.as_object().ok_or(ProjectionError::NotAnObject)?;
    let mut record = T::default();
    for &field in T::FIELDS {
        if let Some((_, value)) = map.iter().find(|(key, _)| same_name(key, field)) {
            record.set_field(field, value)?;
        }
    }
    Ok(record)
}

fn same_name(key: &str, field: &str) -> bool {
    key.chars()
        .flat_map(char::to_lowercase)
        .eq(field.chars().flat_map(char::to_lowercase))
}

/// Implements [`Record`] for a struct by listing its fields.
///
/// A field is matched by its own name unless renamed with `as "Key"`. Every
/// field type must implement [`FromValue`]. The struct itself gets a
/// [`FromValue`] impl too, so records nest inside other records.
///
/// ```
/// #[derive(Default)]
/// struct Point {
///     x: f64,
///     y: f64,
///     label: Option<String>,
/// }
///
/// jparse::record!(Point { x, y, label as "name" });
/// ```
#[macro_export]
macro_rules! record {
    ($ty:ty { $( $field:ident $(as $name:literal)? ),* $(,)? }) => {
        impl $crate::Record for $ty {
            const FIELDS: &'static [&'static str] = &[$( $crate::__record_field_name!($field $(, $name)?) ),*];

            fn set_field(
                &mut self,
                field: &'static str,
                value: &$crate::Value,
            ) -> ::core::result::Result<(), $crate::ProjectionError> {
                $(
                    if field == $crate::__record_field_name!($field $(, $name)?) {
                        self.$field = $crate::convert(field, value)?;
                        return ::core::result::Result::Ok(());
                    }
                )*
                ::core::result::Result::Ok(())
            }
        }

        impl $crate::FromValue for $ty {
            const EXPECTED: &'static str = "an object";

            fn from_value(value: &$crate::Value) -> ::core::option::Option<Self> {
                $crate::project(value).ok()
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __record_field_name {
    ($field:ident) => {
        stringify!($field)
    };
    ($field:ident, $name:literal) => {
        $name
    };
}
