//! Support code for `#[derive(Record)]`.
//!
//! A tagged field reflects through [`ReflectField`] when its type implements
//! [`Reflect`]. Method resolution only reaches [`OpaqueField`], one reference
//! further, when it does not, so those fields are rejected at conversion
//! time instead of failing to compile.

use std::any::type_name;

use crate::{FieldRef, Reflect};

/// A tagged field before its reflection is picked.
pub struct TaggedField<'a, T: ?Sized> {
    /// The field name.
    pub name: &'static str,
    /// The raw `taqc` tag.
    pub tag: &'static str,
    /// The field value.
    pub value: &'a T,
}

/// Field types implementing [`Reflect`].
pub trait ReflectField<'a> {
    /// The field as seen by the converter.
    fn field_ref(&self) -> FieldRef<'a>;
}

impl<'a, T: Reflect + 'a> ReflectField<'a> for TaggedField<'a, T> {
    fn field_ref(&self) -> FieldRef<'a> {
        FieldRef::tagged(self.name, self.tag, self.value)
    }
}

/// Any other field type.
pub trait OpaqueField<'a> {
    /// The field as seen by the converter.
    fn field_ref(&self) -> FieldRef<'a>;
}

impl<'a, T: ?Sized> OpaqueField<'a> for &TaggedField<'a, T> {
    fn field_ref(&self) -> FieldRef<'a> {
        FieldRef::opaque(self.name, self.tag, type_name::<T>())
    }
}
