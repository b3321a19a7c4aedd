//! Coded values: one selected concept of a code system plus element metadata.
//!
//! A [`CodedValue`] is always valid for its system: the only ways to obtain one
//! go through [`CodedValueBuilder::build`] (or the typed [`CodedValue::of`]),
//! which resolve raw strings against the system and fail with [`UnknownCode`]
//! instead of producing a partial value.
//!
//! ```rust
//! use atrius_fhir_codes::{CodedValue, Extension};
//! use atrius_fhir_codes::systems::PUBLICATION_STATUS;
//!
//! let status: CodedValue = CodedValue::builder(&PUBLICATION_STATUS)
//!     .id("status-1")
//!     .value("active")
//!     .build()?;
//! assert_eq!(status.code(), Some("active"));
//!
//! let retired = status.to_builder().value("retired").build()?;
//! assert_ne!(retired, status);
//! assert!(CodedValue::<Extension>::new(&PUBLICATION_STATUS, "Active").is_err());
//! # Ok::<(), atrius_fhir_codes::UnknownCode>(())
//! ```

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Serialize, Serializer};

use crate::code_system::{CodeEnum, CodeSystem, Concept};
use crate::element::{Code, serialize_parts};
use crate::error::{LookupKind, UnknownCode};
use crate::extension::Extension;

/// One occurrence of a code system value inside a document.
///
/// Equality is structural over the owning system, the identifier, the
/// extensions and the wire-string. The hash is computed on first use and
/// cached.
pub struct CodedValue<E = Extension> {
    system: &'static CodeSystem,
    id: Option<String>,
    extension: Vec<E>,
    position: Option<usize>,
    // 0 means "not computed yet"; a value that really hashes to 0 is just
    // recomputed on every call.
    hash: AtomicU64,
}

impl<E> CodedValue<E> {
    pub fn builder(system: &'static CodeSystem) -> CodedValueBuilder<E> {
        CodedValueBuilder {
            system,
            id: None,
            extension: Vec::new(),
            value: None,
        }
    }

    /// Coded value holding `code` and no metadata.
    ///
    /// # Errors
    /// [`UnknownCode`] if `code` is not a wire-string of `system`.
    pub fn new(system: &'static CodeSystem, code: &str) -> Result<Self, UnknownCode> {
        let position = system.locate(code, LookupKind::Code)?;
        Ok(Self::from_parts(system, None, Vec::new(), Some(position)))
    }

    /// Like [`new`](Self::new) but matches according to the system's
    /// [`LookupPolicy`](crate::LookupPolicy).
    pub fn parse(system: &'static CodeSystem, input: &str) -> Result<Self, UnknownCode> {
        let position = system.locate(input, system.policy().into())?;
        Ok(Self::from_parts(system, None, Vec::new(), Some(position)))
    }

    /// Coded value with no selected code, id or extensions.
    pub fn empty(system: &'static CodeSystem) -> Self {
        Self::from_parts(system, None, Vec::new(), None)
    }

    /// Typed constructor; cannot fail.
    pub fn of<T: CodeEnum>(value: T) -> Self {
        Self::from_parts(T::system(), None, Vec::new(), Some(value.ordinal()))
    }

    /// Narrow an untyped `code` primitive, validating its value against `system`.
    pub fn from_code_element(system: &'static CodeSystem, code: Code<E>) -> Result<Self, UnknownCode> {
        let position = match code.value.as_deref() {
            Some(value) => Some(system.locate(value, LookupKind::Code)?),
            None => None,
        };
        Ok(Self::from_parts(
            system,
            code.id,
            code.extension.unwrap_or_default(),
            position,
        ))
    }

    fn from_parts(
        system: &'static CodeSystem,
        id: Option<String>,
        extension: Vec<E>,
        position: Option<usize>,
    ) -> Self {
        CodedValue {
            system,
            id,
            extension,
            position,
            hash: AtomicU64::new(0),
        }
    }

    pub fn system(&self) -> &'static CodeSystem {
        self.system
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn extension(&self) -> &[E] {
        &self.extension
    }

    /// The selected concept, if a value is present.
    pub fn concept(&self) -> Option<&'static Concept> {
        self.position.map(|i| self.system.concept_at(i))
    }

    /// The selected wire-string, if a value is present.
    pub fn code(&self) -> Option<&'static str> {
        self.concept().map(|c| c.code)
    }

    pub fn display(&self) -> Option<&'static str> {
        self.concept().and_then(|c| c.display)
    }

    pub fn has_value(&self) -> bool {
        self.position.is_some()
    }

    /// Returns `true` if no value, id, or extensions are present.
    pub fn is_empty(&self) -> bool {
        self.position.is_none() && self.id.is_none() && self.extension.is_empty()
    }

    /// The selected value as the typed enum of its system.
    ///
    /// `None` when no value is selected or `T` is not generated from this
    /// system's table. Another table at the same URL does not count.
    pub fn value_as<T: CodeEnum>(&self) -> Option<T> {
        if !std::ptr::eq(T::system(), self.system) {
            return None;
        }
        self.code().and_then(|code| T::from_code(code).ok())
    }

    /// Split into the untyped primitive, dropping the system binding.
    pub fn into_code(self) -> Code<E> {
        let code = self.code().map(str::to_string);
        Code {
            id: self.id,
            extension: if self.extension.is_empty() {
                None
            } else {
                Some(self.extension)
            },
            value: code,
        }
    }
}

impl<E: Clone> CodedValue<E> {
    /// Builder pre-populated with this value's fields.
    pub fn to_builder(&self) -> CodedValueBuilder<E> {
        CodedValueBuilder {
            system: self.system,
            id: self.id.clone(),
            extension: self.extension.clone(),
            value: self.position.map(PendingValue::Resolved),
        }
    }

    /// Widen into the untyped `code` primitive.
    pub fn to_code(&self) -> Code<E> {
        self.clone().into_code()
    }
}

impl<E: Hash> CodedValue<E> {
    /// Structural hash, computed once and cached.
    ///
    /// Concurrent first calls may each compute it; they store the same value.
    pub fn hash_code(&self) -> u64 {
        let cached = self.hash.load(Ordering::Relaxed);
        if cached != 0 {
            return cached;
        }
        let computed = self.compute_hash();
        self.hash.store(computed, Ordering::Relaxed);
        computed
    }

    fn compute_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.system.url().hash(&mut hasher);
        self.id.hash(&mut hasher);
        self.extension.hash(&mut hasher);
        self.code().hash(&mut hasher);
        hasher.finish()
    }
}

impl<E: PartialEq> PartialEq for CodedValue<E> {
    fn eq(&self, other: &Self) -> bool {
        self.system.url() == other.system.url()
            && self.id == other.id
            && self.extension == other.extension
            && self.code() == other.code()
    }
}

impl<E: Eq> Eq for CodedValue<E> {}

impl<E: Hash> Hash for CodedValue<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl<E: Clone> Clone for CodedValue<E> {
    fn clone(&self) -> Self {
        CodedValue {
            system: self.system,
            id: self.id.clone(),
            extension: self.extension.clone(),
            position: self.position,
            hash: AtomicU64::new(self.hash.load(Ordering::Relaxed)),
        }
    }
}

impl<E: fmt::Debug> fmt::Debug for CodedValue<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodedValue")
            .field("system", &self.system.url())
            .field("id", &self.id)
            .field("extension", &self.extension)
            .field("code", &self.code())
            .finish()
    }
}

impl<E> fmt::Display for CodedValue<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code().unwrap_or_default())
    }
}

impl<E: Serialize> Serialize for CodedValue<E> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let extension = if self.extension.is_empty() {
            None
        } else {
            Some(self.extension.as_slice())
        };
        serialize_parts(serializer, self.id(), extension, self.code())
    }
}

#[derive(Debug, Clone)]
enum PendingValue {
    Resolved(usize),
    Raw(String),
}

/// Accumulates the fields of a [`CodedValue`]; validation happens in [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct CodedValueBuilder<E = Extension> {
    system: &'static CodeSystem,
    id: Option<String>,
    extension: Vec<E>,
    value: Option<PendingValue>,
}

impl<E> CodedValueBuilder<E> {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn clear_id(mut self) -> Self {
        self.id = None;
        self
    }

    /// Append one extension.
    pub fn extension(mut self, extension: E) -> Self {
        self.extension.push(extension);
        self
    }

    /// Replace all extensions.
    pub fn extensions(mut self, extensions: impl IntoIterator<Item = E>) -> Self {
        self.extension = extensions.into_iter().collect();
        self
    }

    /// Select a value by wire-string; resolved when the value is built.
    pub fn value(mut self, code: impl Into<String>) -> Self {
        self.value = Some(PendingValue::Raw(code.into()));
        self
    }

    /// Select a typed value.
    ///
    /// A value from any other table, including one registered under the same
    /// URL, is kept as its wire-string and must then exist in this builder's
    /// system too.
    pub fn value_enum<T: CodeEnum>(mut self, value: T) -> Self {
        self.value = if std::ptr::eq(T::system(), self.system) {
            Some(PendingValue::Resolved(value.ordinal()))
        } else {
            Some(PendingValue::Raw(value.as_code().to_string()))
        };
        self
    }

    pub fn clear_value(mut self) -> Self {
        self.value = None;
        self
    }

    /// Validate and freeze.
    ///
    /// # Errors
    /// [`UnknownCode`] if a raw value is not a wire-string of the system.
    pub fn build(self) -> Result<CodedValue<E>, UnknownCode> {
        let position = match self.value {
            None => None,
            Some(PendingValue::Resolved(i)) => Some(i),
            Some(PendingValue::Raw(code)) => Some(self.system.locate(&code, LookupKind::Code)?),
        };
        Ok(CodedValue::from_parts(
            self.system,
            self.id,
            self.extension,
            position,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::{HttpVerb, NameUse, HTTP_VERB, NAME_USE};
    use serde_json::json;

    #[test]
    fn builder_validates_raw_values() {
        let value: CodedValue = CodedValue::builder(&HTTP_VERB).value("PATCH").build().unwrap();
        assert_eq!(value.code(), Some("PATCH"));
        assert_eq!(value.value_as::<HttpVerb>(), Some(HttpVerb::Patch));

        let err = CodedValue::<Extension>::builder(&HTTP_VERB)
            .value("patch")
            .build()
            .unwrap_err();
        assert_eq!(err.input, "patch");
        assert_eq!(err.system, "http://hl7.org/fhir/http-verb");
    }

    #[test]
    fn value_enum_from_another_system_falls_back_to_wire_string() {
        // NameUse has "temp"/"old"; HttpVerb has neither.
        let err = CodedValue::<Extension>::builder(&HTTP_VERB)
            .value_enum(NameUse::Temp)
            .build()
            .unwrap_err();
        assert_eq!(err.input, "temp");

        let ok: CodedValue = CodedValue::builder(&NAME_USE)
            .value_enum(NameUse::Maiden)
            .build()
            .unwrap();
        assert_eq!(ok, CodedValue::of(NameUse::Maiden));
    }

    #[test]
    fn value_as_rejects_other_systems() {
        let value: CodedValue = CodedValue::of(HttpVerb::Get);
        assert_eq!(value.value_as::<NameUse>(), None);
        assert_eq!(CodedValue::<Extension>::empty(&HTTP_VERB).value_as::<HttpVerb>(), None);
    }

    #[test]
    fn clone_keeps_cached_hash() {
        let value: CodedValue = CodedValue::of(HttpVerb::Delete);
        let hash = value.hash_code();
        let copy = value.clone();
        assert_eq!(copy.hash.load(Ordering::Relaxed), hash);
        assert_eq!(copy, value);
    }

    #[test]
    fn code_widening_round_trip() {
        let value: CodedValue = CodedValue::builder(&NAME_USE)
            .id("n1")
            .extension(Extension::marker("urn:flag"))
            .value("official")
            .build()
            .unwrap();
        let code = value.to_code();
        assert_eq!(code.value.as_deref(), Some("official"));
        assert_eq!(CodedValue::from_code_element(&NAME_USE, code).unwrap(), value);

        let bad: Code = Code::from_value("OFFICIAL".to_string());
        assert!(CodedValue::from_code_element(&NAME_USE, bad).is_err());
    }

    #[test]
    fn serializes_in_element_form() {
        let bare: CodedValue = CodedValue::of(HttpVerb::Put);
        assert_eq!(serde_json::to_value(&bare).unwrap(), json!("PUT"));

        let with_id: CodedValue = bare.to_builder().id("v").build().unwrap();
        assert_eq!(
            serde_json::to_value(&with_id).unwrap(),
            json!({"id": "v", "value": "PUT"})
        );

        let empty: CodedValue = CodedValue::empty(&HTTP_VERB);
        assert_eq!(serde_json::to_value(&empty).unwrap(), json!(null));
        assert!(empty.is_empty());
        assert_eq!(empty.to_string(), "");
    }

    #[test]
    fn debug_shows_code_not_cache() {
        let value: CodedValue = CodedValue::of(HttpVerb::Head);
        let rendered = format!("{value:?}");
        assert!(rendered.contains("\"HEAD\""));
        assert!(!rendered.contains("hash"));
    }
}
