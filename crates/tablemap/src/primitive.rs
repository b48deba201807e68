use tablemap_core::schema::ValueType;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::time::SystemTime;

/// A Rust type that can be stored in a single column.
pub trait Primitive {
    fn value_type() -> ValueType;
}

macro_rules! impl_primitive {
    ( $( $ty:ty => $variant:ident, )* ) => {
        $(
            impl Primitive for $ty {
                fn value_type() -> ValueType {
                    ValueType::$variant
                }
            }
        )*
    };
}

impl_primitive! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    f32 => F32,
    f64 => F64,
    String => Text,
    uuid::Uuid => Uuid,
    SystemTime => Timestamp,
    Vec<u8> => Blob,
    Box<[u8]> => Blob,
}

impl<T: Primitive> Primitive for Option<T> {
    fn value_type() -> ValueType {
        ValueType::optional(T::value_type())
    }
}

impl<T: Primitive> Primitive for HashSet<T> {
    fn value_type() -> ValueType {
        ValueType::set(T::value_type())
    }
}

impl<T: Primitive> Primitive for BTreeSet<T> {
    fn value_type() -> ValueType {
        ValueType::set(T::value_type())
    }
}

impl<K: Primitive, V: Primitive> Primitive for HashMap<K, V> {
    fn value_type() -> ValueType {
        ValueType::map(K::value_type(), V::value_type())
    }
}

impl<K: Primitive, V: Primitive> Primitive for BTreeMap<K, V> {
    fn value_type() -> ValueType {
        ValueType::map(K::value_type(), V::value_type())
    }
}

/// Lists of anything but bytes. `Vec<u8>` is a blob.
macro_rules! impl_list {
    ( $( $item:ty, )* ) => {
        $(
            impl Primitive for Vec<$item> {
                fn value_type() -> ValueType {
                    ValueType::list(<$item as Primitive>::value_type())
                }
            }
        )*
    };
}

impl_list! {
    bool,
    i16,
    i32,
    i64,
    f32,
    f64,
    String,
    uuid::Uuid,
    SystemTime,
}
