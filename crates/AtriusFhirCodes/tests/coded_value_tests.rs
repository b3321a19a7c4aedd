use atrius_fhir_codes::systems::{HTTP_VERB, HttpVerb};
use atrius_fhir_codes::{CodeEnum, CodedValue, Extension, LookupKind, Registry, code_system};
use serde_json::json;

code_system! {
    /// Minimal two-state system.
    pub enum Status => static STATUS {
        id: "status",
        url: "urn:test:status",
        concepts: {
            Active = "active",
            Cancelled = "cancelled",
        }
    }
}

code_system! {
    /// Local table reusing the http-verb URL with lowercase and extra codes.
    pub enum LowerVerb => static LOWER_VERB {
        id: "lower-verb",
        url: "http://hl7.org/fhir/http-verb",
        concepts: {
            Get = "get",
            Extra1 = "x1",
            Extra2 = "x2",
            Extra3 = "x3",
            Extra4 = "x4",
            Extra5 = "x5",
            Extra6 = "x6",
        }
    }
}

type Value = CodedValue<Extension>;

#[test]
fn build_accepts_exact_wire_string() {
    let value = Value::builder(&STATUS).value("active").build().unwrap();
    assert_eq!(value.code(), Some("active"));
    assert_eq!(value.value_as::<Status>(), Some(Status::Active));
}

#[test]
fn build_is_case_sensitive() {
    let err = Value::builder(&STATUS).value("ACTIVE").build().unwrap_err();
    assert_eq!(err.input, "ACTIVE");
    assert_eq!(err.kind, LookupKind::Code);
    assert_eq!(err.system, "urn:test:status");

    assert!(Value::builder(&STATUS).value("unknown").build().is_err());
    assert!(Value::builder(&STATUS).value("").build().is_err());
}

#[test]
fn copy_with_modification() {
    let original = Value::builder(&STATUS)
        .id("id1")
        .extensions(Vec::new())
        .value("active")
        .build()
        .unwrap();

    let modified = original.to_builder().value("cancelled").build().unwrap();
    let expected = Value::builder(&STATUS)
        .id("id1")
        .extensions(Vec::new())
        .value("cancelled")
        .build()
        .unwrap();

    assert_eq!(modified, expected);
    assert_eq!(modified.hash_code(), expected.hash_code());
    assert_ne!(modified, original);
}

#[test]
fn to_builder_round_trip_is_identity() {
    let values = [
        Value::empty(&STATUS),
        Value::of(Status::Cancelled),
        Value::builder(&STATUS).id("x").build().unwrap(),
        Value::builder(&STATUS)
            .extension(Extension::new("urn:note", "valueString", json!("late")))
            .value_enum(Status::Active)
            .build()
            .unwrap(),
    ];
    for value in &values {
        assert_eq!(&value.to_builder().build().unwrap(), value);
    }
}

#[test]
fn absent_value_is_success_not_failure() {
    let value = Value::builder(&STATUS).id("pending").build().unwrap();
    assert!(!value.has_value());
    assert_eq!(value.code(), None);
    assert_eq!(value.id(), Some("pending"));
    assert!(!value.is_empty());

    let cleared = Value::of(Status::Active).to_builder().clear_value().build().unwrap();
    assert_eq!(cleared, Value::empty(&STATUS));
}

#[test]
fn each_component_participates_in_equality() {
    let base = || {
        Value::builder(&STATUS)
            .id("a")
            .extension(Extension::marker("urn:flag"))
            .value("active")
    };
    let reference = base().build().unwrap();
    assert_eq!(base().build().unwrap(), reference);
    assert_eq!(base().build().unwrap().hash_code(), reference.hash_code());

    let other_id = base().id("b").build().unwrap();
    let no_id = base().clear_id().build().unwrap();
    let other_ext = base()
        .extensions([Extension::marker("urn:other")])
        .build()
        .unwrap();
    let other_code = base().value("cancelled").build().unwrap();

    for changed in [other_id, no_id, other_ext, other_code] {
        assert_ne!(changed, reference);
    }
}

#[test]
fn extension_order_is_significant() {
    let a = Extension::marker("urn:a");
    let b = Extension::marker("urn:b");
    let ab = Value::builder(&STATUS).extension(a.clone()).extension(b.clone()).build().unwrap();
    let ba = Value::builder(&STATUS).extension(b).extension(a).build().unwrap();
    assert_ne!(ab, ba);
    assert_eq!(ab.extension().len(), 2);
}

#[test]
fn parse_follows_policy_and_new_matches_codes() {
    assert_eq!(Value::parse(&STATUS, "cancelled").unwrap(), Value::of(Status::Cancelled));
    assert!(Value::parse(&STATUS, "Cancelled").is_err());
    assert!(Value::new(&STATUS, "Active").is_err());
    assert_eq!(Status::from_symbolic_name("Active").unwrap(), Status::Active);
}

#[test]
fn usable_as_hash_set_key() {
    use std::collections::HashSet;

    let mut set = HashSet::new();
    set.insert(Value::of(Status::Active));
    set.insert(Value::new(&STATUS, "active").unwrap());
    set.insert(Value::of(Status::Cancelled));
    assert_eq!(set.len(), 2);
    assert!(set.contains(&Value::builder(&STATUS).value("cancelled").build().unwrap()));
}

#[test]
fn value_enum_from_a_table_sharing_the_url_is_checked_by_wire_string() {
    let err = Value::builder(&HTTP_VERB)
        .value_enum(LowerVerb::Get)
        .build()
        .unwrap_err();
    assert_eq!(err.input, "get");
    assert_eq!(err.system, "http://hl7.org/fhir/http-verb");

    // Ordinal 6 is past the end of the six-entry http-verb table.
    let err = Value::builder(&HTTP_VERB)
        .value_enum(LowerVerb::Extra6)
        .build()
        .unwrap_err();
    assert_eq!(err.input, "x6");

    let own = Value::builder(&LOWER_VERB)
        .value_enum(LowerVerb::Extra6)
        .build()
        .unwrap();
    assert_eq!(own.code(), Some("x6"));
}

#[test]
fn value_as_requires_the_same_table() {
    let get = Value::of(HttpVerb::Get);
    assert_eq!(get.value_as::<LowerVerb>(), None);
    assert_eq!(get.value_as::<HttpVerb>(), Some(HttpVerb::Get));

    let lower = Value::of(LowerVerb::Get);
    assert_eq!(lower.value_as::<HttpVerb>(), None);
    assert_ne!(lower, Value::new(&LOWER_VERB, "x1").unwrap());
}

#[test]
fn registering_a_shared_url_drops_the_displaced_keys() {
    let mut registry = Registry::new();
    registry.register(&STATUS);
    registry.register(&LOWER_VERB);
    registry.register(&HTTP_VERB);

    assert_eq!(registry.len(), 2);
    assert_eq!(registry.iter().count(), 2);
    assert!(std::ptr::eq(
        registry.get("http://hl7.org/fhir/http-verb").unwrap(),
        &HTTP_VERB
    ));
    assert!(registry.get("lower-verb").is_none());
    assert!(registry.lookup("status", "active").is_ok());
}
