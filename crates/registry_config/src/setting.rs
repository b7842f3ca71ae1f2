//! Three-state setting type for optional registry configuration values.
//!
//! A registry setting is either left unset or carries an explicit value.
//! For booleans this keeps "not specified" apart from an explicit `false`,
//! which the completion rules rely on: an unset declared value falls back to
//! the remote descriptor, an explicit one never does.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A value that is either explicitly set or left unspecified.
///
/// # Examples
///
/// ```rust
/// use registry_config::Setting;
///
/// let declared: Setting<bool> = Setting::Unset;
/// let remote = Setting::Value(true);
/// assert_eq!(declared.or(remote), Setting::Value(true));
///
/// // An explicit `false` is a real value and is never replaced.
/// let declared = Setting::Value(false);
/// assert_eq!(declared.or(Setting::Value(true)), Setting::Value(false));
/// ```
///
/// # Serialized Format
///
/// An unset value is written as an absent key (or `null`), a set value as
/// the plain value:
/// ```toml
/// extension-catalogs-included = true
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Setting<T> {
    /// No value was specified.
    #[default]
    Unset,

    /// An explicit value.
    Value(T),
}

impl<T> Setting<T> {
    /// Returns `true` if an explicit value is present.
    pub fn is_set(&self) -> bool {
        matches!(self, Setting::Value(_))
    }

    /// Returns `true` if no value was specified.
    pub fn is_unset(&self) -> bool {
        !self.is_set()
    }

    /// Returns this setting if it is set, otherwise `fallback`.
    pub fn or(self, fallback: Setting<T>) -> Setting<T> {
        match self {
            Setting::Value(_) => self,
            Setting::Unset => fallback,
        }
    }

    /// Get a reference to the explicit value, if any.
    pub fn get(&self) -> Option<&T> {
        match self {
            Setting::Value(value) => Some(value),
            Setting::Unset => None,
        }
    }

    /// Converts into a plain `Option`.
    pub fn into_option(self) -> Option<T> {
        self.into()
    }

    /// Returns the explicit value or `default`.
    ///
    /// This is where a configuration consumer applies its own default; the
    /// completion step never does.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Setting::Value(value) => value,
            Setting::Unset => default,
        }
    }

    /// Map the value using a function, keeping an unset setting unset.
    pub fn map<U, F>(self, f: F) -> Setting<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Setting::Value(value) => Setting::Value(f(value)),
            Setting::Unset => Setting::Unset,
        }
    }
}

impl<T> From<Option<T>> for Setting<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Setting::Value(value),
            None => Setting::Unset,
        }
    }
}

impl<T> From<Setting<T>> for Option<T> {
    fn from(setting: Setting<T>) -> Self {
        match setting {
            Setting::Value(value) => Some(value),
            Setting::Unset => None,
        }
    }
}

impl<T> From<T> for Setting<T> {
    fn from(value: T) -> Self {
        Setting::Value(value)
    }
}

impl<T: Serialize> Serialize for Setting<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Setting::Value(value) => serializer.serialize_some(value),
            Setting::Unset => serializer.serialize_none(),
        }
    }
}

// Absent keys are handled by `#[serde(default)]` on the containing field;
// an explicit `null` deserializes to `Unset` as well.
impl<'de, T> Deserialize<'de> for Setting<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Setting::from)
    }
}

#[cfg(test)]
#[path = "setting_tests.rs"]
mod tests;
