//! Runtime reflection model.
//!
//! [`Reflect`] exposes the dynamic kind of a field value as a [`Value`], which
//! the conversion rules then dispatch on.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use std::sync::Arc;

use chrono::{DateTime, FixedOffset, TimeZone};

use crate::ScalarKind;

/// Dynamic view of a field value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    /// Text.
    String(&'a str),
    /// 64-bit signed integer.
    Int64(i64),
    /// 64-bit float.
    Float64(f64),
    /// Boolean.
    Bool(bool),
    /// Timestamp, normalized to its fixed offset.
    Time(DateTime<FixedOffset>),
    /// Optional value; `None` when absent.
    Pointer(Option<Box<Value<'a>>>),
    /// Ordered sequence of values.
    Sequence(Vec<Value<'a>>),
    /// Any other type, by name.
    Opaque(&'static str),
}

impl Value<'_> {
    /// The scalar kind of this value, if it is a scalar.
    #[must_use]
    pub const fn scalar_kind(&self) -> Option<ScalarKind> {
        match self {
            Self::String(_) => Some(ScalarKind::String),
            Self::Int64(_) => Some(ScalarKind::Int64),
            Self::Float64(_) => Some(ScalarKind::Float64),
            Self::Bool(_) => Some(ScalarKind::Bool),
            Self::Time(_) => Some(ScalarKind::Time),
            Self::Pointer(_) | Self::Sequence(_) | Self::Opaque(_) => None,
        }
    }

    /// Name of this value's kind.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Pointer(_) => "option",
            Self::Sequence(_) => "sequence",
            Self::Opaque(name) => *name,
            scalar => match scalar.scalar_kind() {
                Some(kind) => kind.name(),
                None => "unknown",
            },
        }
    }
}

/// Types whose values can be inspected at runtime.
///
/// Implemented for the supported field types, and for common unsupported
/// ones which reflect as [`Value::Opaque`]. Implement it on your own type to
/// let it appear (and be rejected) in a [`crate::Record`].
pub trait Reflect {
    /// The dynamic view of this value.
    fn reflect(&self) -> Value<'_>;
}

impl Reflect for String {
    fn reflect(&self) -> Value<'_> {
        Value::String(self)
    }
}

impl Reflect for str {
    fn reflect(&self) -> Value<'_> {
        Value::String(self)
    }
}

impl Reflect for Cow<'_, str> {
    fn reflect(&self) -> Value<'_> {
        Value::String(self)
    }
}

impl Reflect for i64 {
    fn reflect(&self) -> Value<'_> {
        Value::Int64(*self)
    }
}

impl Reflect for f64 {
    fn reflect(&self) -> Value<'_> {
        Value::Float64(*self)
    }
}

impl Reflect for bool {
    fn reflect(&self) -> Value<'_> {
        Value::Bool(*self)
    }
}

impl<Tz: TimeZone> Reflect for DateTime<Tz> {
    fn reflect(&self) -> Value<'_> {
        Value::Time(self.fixed_offset())
    }
}

impl<T: Reflect> Reflect for Option<T> {
    fn reflect(&self) -> Value<'_> {
        Value::Pointer(self.as_ref().map(|value| Box::new(value.reflect())))
    }
}

impl<T: Reflect> Reflect for [T] {
    fn reflect(&self) -> Value<'_> {
        Value::Sequence(self.iter().map(Reflect::reflect).collect())
    }
}

impl<T: Reflect> Reflect for Vec<T> {
    fn reflect(&self) -> Value<'_> {
        self.as_slice().reflect()
    }
}

impl<T: Reflect, const N: usize> Reflect for [T; N] {
    fn reflect(&self) -> Value<'_> {
        self.as_slice().reflect()
    }
}

// References and owning smart pointers are never absent: they reflect as
// their target.
macro_rules! reflect_transparent {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<T: Reflect + ?Sized> Reflect for $ty {
                fn reflect(&self) -> Value<'_> {
                    (**self).reflect()
                }
            }
        )*
    };
}

reflect_transparent!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);

macro_rules! reflect_opaque {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Reflect for $ty {
                fn reflect(&self) -> Value<'_> {
                    Value::Opaque(std::any::type_name::<$ty>())
                }
            }
        )*
    };
}

reflect_opaque!(i8, i16, i32, i128, isize, u8, u16, u32, u64, u128, usize, f32, char, ());
reflect_opaque!(std::time::Duration, std::time::SystemTime);
reflect_opaque!(chrono::NaiveDate, chrono::NaiveTime, chrono::NaiveDateTime);

impl<K, V, S> Reflect for HashMap<K, V, S> {
    fn reflect(&self) -> Value<'_> {
        Value::Opaque("HashMap")
    }
}

impl<K, V> Reflect for BTreeMap<K, V> {
    fn reflect(&self) -> Value<'_> {
        Value::Opaque("BTreeMap")
    }
}
