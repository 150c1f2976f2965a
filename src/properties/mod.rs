//! Property Model - typed, partially populated property records.
//!
//! Records are decoded from an untyped [`PropertyMap`] handed over by the
//! template front end. Every field is optional: absence means "unset", not
//! zero. Decoding is permissive by default: a key holding a value of the
//! wrong type leaves the field absent and records a [`DecodeDiagnostic`].
//!
//! Records combine with [`RawProperties::merge`], a right-biased field-wise
//! union. Nested groups merge independently with the same rule.

mod common;
mod gesture;
mod layout;
mod text;

pub use common::CoreProperties;
pub use gesture::GestureProperties;
pub use layout::LayoutProperties;
pub use text::{TextFieldProperties, TextProperties, TextStyleProperties};

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::PropertyError;

/// Untyped property input: string keys to arbitrary JSON values.
pub type PropertyMap = serde_json::Map<String, Value>;

/// How a [`PropertyMap`] is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodeMode {
    /// Mismatched values become absent fields.
    #[default]
    Permissive,
    /// The first mismatched value is an error.
    Strict,
}

/// A key that was present but could not be decoded into its field type.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodeDiagnostic {
    pub key: String,
    pub expected: &'static str,
    pub found: String,
}

impl From<DecodeDiagnostic> for PropertyError {
    fn from(diagnostic: DecodeDiagnostic) -> Self {
        PropertyError::TypeMismatch {
            key: diagnostic.key,
            expected: diagnostic.expected,
            found: diagnostic.found,
        }
    }
}

/// Diagnostics collected during one decode.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnostics(Vec<DecodeDiagnostic>);

impl Diagnostics {
    pub fn push(&mut self, diagnostic: DecodeDiagnostic) {
        self.0.push(diagnostic);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DecodeDiagnostic> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<DecodeDiagnostic> {
        self.0
    }
}

/// A property record decodable from a [`PropertyMap`] and mergeable with
/// another record of the same type.
pub trait RawProperties: Default + Sized {
    /// Decode every field, collecting mismatches into `diagnostics`.
    fn decode(raw: &PropertyMap, diagnostics: &mut Diagnostics) -> Self;

    /// Overwrite each field of `self` with `other`'s value where `other` has one.
    fn merge(&mut self, other: &Self);

    /// Permissive decode. Mismatches are logged and dropped.
    fn from_raw(raw: &PropertyMap) -> Self {
        let mut diagnostics = Diagnostics::default();
        let properties = Self::decode(raw, &mut diagnostics);
        for diagnostic in diagnostics.iter() {
            tracing::trace!(
                key = %diagnostic.key,
                expected = diagnostic.expected,
                found = %diagnostic.found,
                "ignoring mismatched property"
            );
        }
        properties
    }

    /// Strict decode. The first mismatch is returned as an error.
    fn try_from_raw(raw: &PropertyMap) -> Result<Self, PropertyError> {
        let mut diagnostics = Diagnostics::default();
        let properties = Self::decode(raw, &mut diagnostics);
        match diagnostics.into_vec().into_iter().next() {
            Some(diagnostic) => Err(diagnostic.into()),
            None => Ok(properties),
        }
    }

    /// Decode with the given mode.
    fn decode_with(raw: &PropertyMap, mode: DecodeMode) -> Result<Self, PropertyError> {
        match mode {
            DecodeMode::Permissive => Ok(Self::from_raw(raw)),
            DecodeMode::Strict => Self::try_from_raw(raw),
        }
    }

    /// `self` merged with `other`, leaving `self` untouched.
    fn merged(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        let mut result = self.clone();
        result.merge(other);
        result
    }
}

/// Look up `key` and decode it as `T`.
///
/// Missing keys and JSON `null` are absent without a diagnostic.
pub(crate) fn cast<T: DeserializeOwned>(
    raw: &PropertyMap,
    key: &str,
    diagnostics: &mut Diagnostics,
) -> Option<T> {
    let value = raw.get(key)?;
    if value.is_null() {
        return None;
    }

    match T::deserialize(value) {
        Ok(decoded) => Some(decoded),
        Err(_) => {
            diagnostics.push(DecodeDiagnostic {
                key: key.to_string(),
                expected: short_type_name::<T>(),
                found: describe(value),
            });
            None
        }
    }
}

/// Right-biased merge of a single optional field.
pub(crate) fn merge_field<T: Clone>(target: &mut Option<T>, other: &Option<T>) {
    if let Some(value) = other {
        *target = Some(value.clone());
    }
}

fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("bool {b}"),
        Value::Number(n) => format!("number {n}"),
        Value::String(s) => format!("string {s:?}"),
        Value::Array(items) => format!("array of {}", items.len()),
        Value::Object(_) => "object".to_string(),
    }
}
