//! Recursive detection of fields left at their default value.
//!
//! Records implement [`Validate`] through `#[derive(Validate)]`, which walks
//! the fields depth-first in declaration order and stops at the first unset
//! leaf. Leaf types (strings, numbers, collections, ...) implement the trait
//! by comparing themselves with their default value.

mod field_path;
mod leaves;

pub use field_path::FieldPath;

use crate::{SettingsError, SettingsResult};

/// Capability of reporting the first field still holding its default value.
pub trait Validate {
    /// Returns the path of the first unset field, or `None` when every field
    /// is set.
    ///
    /// Leaf values return [`FieldPath::root`] when they are unset.
    fn first_unset(&self) -> Option<FieldPath>;

    /// Returns `true` when no field is unset.
    fn is_complete(&self) -> bool {
        self.first_unset().is_none()
    }
}

/// Checks that every field of `value` holds a non-default value.
///
/// # Errors
///
/// Returns [`SettingsError::Incomplete`] naming the first unset field in
/// depth-first declaration order.
///
/// # Examples
///
/// ```rust
/// use strict_settings::{Validate, validate};
///
/// #[derive(Validate)]
/// struct Remote {
///     host: String,
///     port: u16,
/// }
///
/// let remote = Remote { host: String::new(), port: 8080 };
/// let err = validate(&remote).expect_err("host is empty");
/// assert_eq!(err.to_string(), "field 'host' in the configuration must not be empty");
/// ```
pub fn validate<T>(value: &T) -> SettingsResult<()>
where
    T: Validate + ?Sized,
{
    value.first_unset().map_or(Ok(()), |field| {
        tracing::error!(%field, "configuration field must not be empty");
        Err(SettingsError::Incomplete { field })
    })
}

#[cfg(test)]
mod tests;
