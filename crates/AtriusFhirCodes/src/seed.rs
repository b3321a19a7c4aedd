//! Deserialization that validates coded values against their system.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, DeserializeSeed, Deserializer};
use serde::Deserialize;

use crate::code_system::CodeSystem;
use crate::coded_value::CodedValue;
use crate::element::Code;
use crate::extension::Extension;

/// Deserializes a [`CodedValue`] bound to a code system known only at runtime.
///
/// Accepts the same forms as [`Element`](crate::Element): a bare string, an
/// object with `id`/`extension`/`value`, or `null`. An unknown wire-string is
/// reported through the deserializer's error type.
///
/// ```rust
/// use serde::de::DeserializeSeed;
/// use atrius_fhir_codes::{CodedValueSeed, Extension, systems::NAME_USE};
///
/// let mut de = serde_json::Deserializer::from_str(r#"{"id": "n1", "value": "maiden"}"#);
/// let value = CodedValueSeed::<Extension>::new(&NAME_USE).deserialize(&mut de).unwrap();
/// assert_eq!(value.code(), Some("maiden"));
/// assert_eq!(value.id(), Some("n1"));
/// ```
pub struct CodedValueSeed<E = Extension> {
    system: &'static CodeSystem,
    marker: PhantomData<fn() -> E>,
}

impl<E> CodedValueSeed<E> {
    pub fn new(system: &'static CodeSystem) -> Self {
        CodedValueSeed {
            system,
            marker: PhantomData,
        }
    }
}

impl<E> Clone for CodedValueSeed<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for CodedValueSeed<E> {}

impl<E> fmt::Debug for CodedValueSeed<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CodedValueSeed").field(&self.system.url()).finish()
    }
}

impl<'de, E> DeserializeSeed<'de> for CodedValueSeed<E>
where
    E: Deserialize<'de>,
{
    type Value = CodedValue<E>;

    fn deserialize<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = Code::<E>::deserialize(deserializer)?;
        CodedValue::from_code_element(self.system, code).map_err(de::Error::custom)
    }
}

impl<E> CodedValue<E> {
    /// Read a coded value of `system` from a JSON value.
    pub fn from_json(
        system: &'static CodeSystem,
        json: &serde_json::Value,
    ) -> Result<Self, serde_json::Error>
    where
        E: for<'de> Deserialize<'de>,
    {
        CodedValueSeed::new(system).deserialize(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::{BINDING_STRENGTH, SLICING_RULES};
    use serde_json::json;

    #[test]
    fn reads_bare_and_object_forms() {
        let bare: CodedValue = CodedValue::from_json(&SLICING_RULES, &json!("openAtEnd")).unwrap();
        assert_eq!(bare.code(), Some("openAtEnd"));

        let object: CodedValue = CodedValue::from_json(
            &SLICING_RULES,
            &json!({"extension": [{"url": "urn:x", "valueBoolean": true}]}),
        )
        .unwrap();
        assert!(!object.has_value());
        assert_eq!(object.extension().len(), 1);
    }

    #[test]
    fn unknown_codes_fail_deserialization() {
        let err = CodedValue::<Extension>::from_json(&BINDING_STRENGTH, &json!("Required"))
            .unwrap_err();
        assert!(err.to_string().contains("unknown code 'Required'"));
    }

    #[test]
    fn seeds_work_inside_sequences() {
        struct Many(CodedValueSeed);

        impl<'de> DeserializeSeed<'de> for Many {
            type Value = Vec<CodedValue>;

            fn deserialize<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                struct SeqVisitor(CodedValueSeed);

                impl<'de> de::Visitor<'de> for SeqVisitor {
                    type Value = Vec<CodedValue>;

                    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                        f.write_str("a list of codes")
                    }

                    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
                    where
                        A: de::SeqAccess<'de>,
                    {
                        let mut out = Vec::new();
                        while let Some(value) = seq.next_element_seed(self.0)? {
                            out.push(value);
                        }
                        Ok(out)
                    }
                }

                deserializer.deserialize_seq(SeqVisitor(self.0))
            }
        }

        let values = Many(CodedValueSeed::new(&BINDING_STRENGTH))
            .deserialize(&json!(["required", "example"]))
            .unwrap();
        assert_eq!(values.len(), 2);
        assert_eq!(values[1].code(), Some("example"));
    }
}
