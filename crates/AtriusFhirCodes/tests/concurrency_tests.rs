use std::thread;

use atrius_fhir_codes::systems::{ISSUE_TYPE, IssueType};
use atrius_fhir_codes::{CodeEnum, CodedValue, Extension, registry};

#[test]
fn concurrent_first_hash_agrees() {
    let value: CodedValue = CodedValue::builder(&ISSUE_TYPE)
        .id("issue-1")
        .extension(Extension::marker("urn:flag"))
        .value("business-rule")
        .build()
        .unwrap();
    // A rebuilt copy starts with an empty cache.
    let expected = value.to_builder().build().unwrap().hash_code();

    let shared = &value;
    let hashes: Vec<u64> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(move || shared.hash_code()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(hashes.iter().all(|&h| h == expected));
    assert_eq!(value.hash_code(), expected);
}

#[test]
fn shared_tables_are_read_concurrently() {
    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for value in IssueType::ALL {
                    assert_eq!(ISSUE_TYPE.lookup(value.as_code()).unwrap().name, value.name());
                    assert!(registry().get("issue-type").is_some());
                }
            });
        }
    });
}
