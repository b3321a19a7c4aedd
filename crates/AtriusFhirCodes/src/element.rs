//! FHIR primitive elements and their bare/object/null wire forms.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, IntoDeserializer, MapAccess, Visitor};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::extension::Extension;

/// Untyped FHIR `code` primitive: a string value with optional id and extensions.
///
/// A [`CodedValue`](crate::CodedValue) widens into this type with
/// [`to_code`](crate::CodedValue::to_code) and is narrowed back, with
/// validation, by [`CodedValue::from_code_element`](crate::CodedValue::from_code_element).
pub type Code<E = Extension> = Element<String, E>;

/// A FHIR primitive together with its element metadata.
///
/// On the wire a primitive is either the bare value (`"active"`), an object
/// carrying `id`, `extension` and/or `value`, or `null`. Serialization picks
/// the bare form whenever there is no `id` and no extension list.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct Element<V, E = Extension> {
    pub id: Option<String>,
    pub extension: Option<Vec<E>>,
    pub value: Option<V>,
}

impl<V, E> Default for Element<V, E> {
    fn default() -> Self {
        Element {
            id: None,
            extension: None,
            value: None,
        }
    }
}

impl<V, E> Element<V, E> {
    /// Element holding only a value.
    pub fn from_value(value: V) -> Self {
        Element {
            id: None,
            extension: None,
            value: Some(value),
        }
    }

    /// Returns `true` if no value, id, or extensions are present.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.value.is_none() && self.id.is_none() && self.extension.is_none()
    }
}

#[derive(Deserialize)]
#[serde(field_identifier, rename_all = "lowercase")]
enum Field {
    Id,
    Extension,
    Value,
    #[serde(other)]
    Unknown,
}

struct ElementVisitor<V, E>(PhantomData<fn() -> (V, E)>);

fn primitive<'de, V, E, D>(deserializer: D) -> Result<Element<V, E>, D::Error>
where
    V: Deserialize<'de>,
    D: Deserializer<'de>,
{
    V::deserialize(deserializer).map(Element::from_value)
}

impl<'de, V, E> Visitor<'de> for ElementVisitor<V, E>
where
    V: Deserialize<'de>,
    E: Deserialize<'de>,
{
    type Value = Element<V, E>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a primitive value, an element object, or null")
    }

    fn visit_bool<Er: de::Error>(self, v: bool) -> Result<Self::Value, Er> {
        primitive(v.into_deserializer())
    }

    fn visit_i64<Er: de::Error>(self, v: i64) -> Result<Self::Value, Er> {
        primitive(v.into_deserializer())
    }

    fn visit_u64<Er: de::Error>(self, v: u64) -> Result<Self::Value, Er> {
        primitive(v.into_deserializer())
    }

    fn visit_f64<Er: de::Error>(self, v: f64) -> Result<Self::Value, Er> {
        primitive(v.into_deserializer())
    }

    fn visit_str<Er: de::Error>(self, v: &str) -> Result<Self::Value, Er> {
        primitive(v.into_deserializer())
    }

    fn visit_borrowed_str<Er: de::Error>(self, v: &'de str) -> Result<Self::Value, Er> {
        primitive(de::value::BorrowedStrDeserializer::new(v))
    }

    fn visit_string<Er: de::Error>(self, v: String) -> Result<Self::Value, Er> {
        primitive(v.into_deserializer())
    }

    fn visit_none<Er: de::Error>(self) -> Result<Self::Value, Er> {
        Ok(Element::default())
    }

    fn visit_unit<Er: de::Error>(self) -> Result<Self::Value, Er> {
        Ok(Element::default())
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut element = Element::default();
        while let Some(field) = map.next_key::<Field>()? {
            match field {
                Field::Id if element.id.is_some() => return Err(de::Error::duplicate_field("id")),
                Field::Id => element.id = Some(map.next_value()?),
                Field::Extension if element.extension.is_some() => {
                    return Err(de::Error::duplicate_field("extension"));
                }
                Field::Extension => element.extension = Some(map.next_value()?),
                Field::Value if element.value.is_some() => {
                    return Err(de::Error::duplicate_field("value"));
                }
                Field::Value => element.value = Some(map.next_value()?),
                Field::Unknown => {
                    map.next_value::<de::IgnoredAny>()?;
                }
            }
        }
        Ok(element)
    }
}

impl<'de, V, E> Deserialize<'de> for Element<V, E>
where
    V: Deserialize<'de>,
    E: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ElementVisitor(PhantomData))
    }
}

impl<V, E> Serialize for Element<V, E>
where
    V: Serialize,
    E: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_parts(
            serializer,
            self.id.as_deref(),
            self.extension.as_deref(),
            self.value.as_ref(),
        )
    }
}

/// Shared wire form for [`Element`] and [`CodedValue`](crate::CodedValue).
pub(crate) fn serialize_parts<S, V, E>(
    serializer: S,
    id: Option<&str>,
    extension: Option<&[E]>,
    value: Option<&V>,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    V: Serialize + ?Sized,
    E: Serialize,
{
    if id.is_none() && extension.is_none() {
        return match value {
            Some(val) => val.serialize(serializer),
            None => serializer.serialize_none(),
        };
    }

    let len = usize::from(id.is_some()) + usize::from(extension.is_some()) + usize::from(value.is_some());
    let mut state = serializer.serialize_struct("Element", len)?;
    if let Some(id) = id {
        state.serialize_field("id", id)?;
    }
    if let Some(extension) = extension {
        state.serialize_field("extension", extension)?;
    }
    if let Some(value) = value {
        state.serialize_field("value", value)?;
    }
    state.end()
}
