//! # Atrius FHIR Codes
//!
//! Closed FHIR code systems and the coded values built from them.
//!
//! A [`CodeSystem`] is a static, ordered table of [`Concept`]s declared with
//! [`code_system!`]. Each declaration also produces a fieldless enum
//! implementing [`CodeEnum`] for typed access. A [`CodedValue`] is the FHIR
//! `code` element bound to one system: an optional member plus the element's
//! `id` and extensions, built through [`CodedValueBuilder`] and validated
//! eagerly. Every failed lookup is reported as an [`UnknownCode`].
//!
//! ```rust
//! use atrius_fhir_codes::systems::{NAME_USE, NameUse};
//! use atrius_fhir_codes::{CodedValue, Extension};
//!
//! let value: CodedValue = CodedValue::builder(&NAME_USE)
//!     .value("official")
//!     .build()
//!     .unwrap();
//! assert_eq!(value.value_as::<NameUse>(), Some(NameUse::Official));
//! assert!(CodedValue::<Extension>::new(&NAME_USE, "Official").is_err());
//! ```

#[macro_use]
mod macros;

mod code_system;
mod coded_value;
mod element;
mod error;
mod extension;
mod registry;
mod seed;
pub mod systems;

pub use code_system::{CodeEnum, CodeSystem, Concept, LookupPolicy};
pub use coded_value::{CodedValue, CodedValueBuilder};
pub use element::{Code, Element};
pub use error::{LookupKind, RegistryError, UnknownCode};
pub use extension::Extension;
pub use registry::{Registry, registry};
pub use seed::CodedValueSeed;

/// Support items for code generated by [`code_system!`]. Not public API.
#[doc(hidden)]
pub mod __private {
    pub use serde;

    use serde::de::{self, Deserialize, Deserializer};

    use crate::CodeEnum;

    pub fn deserialize_code_enum<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: CodeEnum,
        D: Deserializer<'de>,
    {
        let code = String::deserialize(deserializer)?;
        T::from_code(&code).map_err(de::Error::custom)
    }
}
