//! [`Validate`] implementations for leaf and wrapper types.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::{FieldPath, Validate};

macro_rules! unset_when_default {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Validate for $ty {
                fn first_unset(&self) -> Option<FieldPath> {
                    (*self == <$ty>::default()).then(FieldPath::root)
                }
            }
        )*
    };
}

unset_when_default!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, bool, char,
    String, PathBuf, Duration,
);

impl Validate for str {
    fn first_unset(&self) -> Option<FieldPath> {
        self.is_empty().then(FieldPath::root)
    }
}

impl Validate for Path {
    fn first_unset(&self) -> Option<FieldPath> {
        self.as_os_str().is_empty().then(FieldPath::root)
    }
}

impl<T: Validate + ?Sized> Validate for &T {
    fn first_unset(&self) -> Option<FieldPath> {
        (**self).first_unset()
    }
}

impl<T: Validate + ?Sized> Validate for Box<T> {
    fn first_unset(&self) -> Option<FieldPath> {
        (**self).first_unset()
    }
}

// `None` is the zero value; `Some` defers to the wrapped value.
impl<T: Validate> Validate for Option<T> {
    fn first_unset(&self) -> Option<FieldPath> {
        self.as_ref()
            .map_or_else(|| Some(FieldPath::root()), Validate::first_unset)
    }
}

// Collections are leaves: only emptiness is checked.
impl<T> Validate for Vec<T> {
    fn first_unset(&self) -> Option<FieldPath> {
        self.is_empty().then(FieldPath::root)
    }
}

impl<T> Validate for VecDeque<T> {
    fn first_unset(&self) -> Option<FieldPath> {
        self.is_empty().then(FieldPath::root)
    }
}

impl<K, V, S> Validate for HashMap<K, V, S> {
    fn first_unset(&self) -> Option<FieldPath> {
        self.is_empty().then(FieldPath::root)
    }
}

impl<K, V> Validate for BTreeMap<K, V> {
    fn first_unset(&self) -> Option<FieldPath> {
        self.is_empty().then(FieldPath::root)
    }
}

impl<T, S> Validate for HashSet<T, S> {
    fn first_unset(&self) -> Option<FieldPath> {
        self.is_empty().then(FieldPath::root)
    }
}

impl<T> Validate for BTreeSet<T> {
    fn first_unset(&self) -> Option<FieldPath> {
        self.is_empty().then(FieldPath::root)
    }
}
