use atrius_fhir_codes::systems::{ADMINISTRATIVE_GENDER, AdministrativeGender, REQUEST_PRIORITY};
use atrius_fhir_codes::{Code, CodedValue, CodedValueSeed, Extension};
use serde::de::DeserializeSeed;
use serde_json::json;

#[test]
fn typed_enums_serialize_as_wire_strings() {
    assert_eq!(serde_json::to_value(AdministrativeGender::Female).unwrap(), json!("female"));
    let parsed: Vec<AdministrativeGender> = serde_json::from_value(json!(["male", "unknown"])).unwrap();
    assert_eq!(parsed, [AdministrativeGender::Male, AdministrativeGender::Unknown]);
    assert!(serde_json::from_value::<AdministrativeGender>(json!("Male")).is_err());
}

#[test]
fn coded_value_matches_primitive_element_shape() {
    let value: CodedValue = CodedValue::builder(&REQUEST_PRIORITY)
        .id("p1")
        .extension(Extension::new(
            "http://example.org/fhir/StructureDefinition/reason",
            "valueString",
            json!("sepsis"),
        ))
        .value("stat")
        .build()
        .unwrap();

    let wire = serde_json::to_value(&value).unwrap();
    assert_eq!(
        wire,
        json!({
            "id": "p1",
            "extension": [{
                "url": "http://example.org/fhir/StructureDefinition/reason",
                "valueString": "sepsis"
            }],
            "value": "stat"
        })
    );

    // The untyped element serializes the same way.
    assert_eq!(serde_json::to_value(value.to_code()).unwrap(), wire);
    assert_eq!(CodedValue::<Extension>::from_json(&REQUEST_PRIORITY, &wire).unwrap(), value);
}

#[test]
fn seed_reads_from_a_streaming_deserializer() {
    let mut de = serde_json::Deserializer::from_str(r#"{"extension": [{"url": "urn:x"}]}"#);
    let value = CodedValueSeed::<Extension>::new(&ADMINISTRATIVE_GENDER)
        .deserialize(&mut de)
        .unwrap();
    assert!(!value.has_value());
    assert_eq!(value.extension()[0].url, "urn:x");
}

#[test]
fn narrowing_rejects_values_outside_the_system() {
    let code: Code = serde_json::from_value(json!({"id": "g", "value": "F"})).unwrap();
    let err = CodedValue::from_code_element(&ADMINISTRATIVE_GENDER, code).unwrap_err();
    assert_eq!(err.input, "F");
}
