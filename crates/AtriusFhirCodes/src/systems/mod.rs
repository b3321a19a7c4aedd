//! Built-in FHIR R4B code systems.
//!
//! Every system lives at `http://hl7.org/fhir/<id>` and is listed in
//! [`BUILTIN`], which seeds the process-wide [`registry`](crate::registry).

use crate::code_system::CodeSystem;

mod administrative;
mod clinical;
mod conformance;
mod documents;
mod foundation;
mod workflow;

pub use administrative::*;
pub use clinical::*;
pub use conformance::*;
pub use documents::*;
pub use foundation::*;
pub use workflow::*;

/// FHIR release the built-in tables were taken from.
pub const FHIR_VERSION: &str = "4.3.0";

/// All built-in code systems, grouped by area.
pub static BUILTIN: &[&CodeSystem] = &[
    // foundation
    &BUNDLE_TYPE,
    &HTTP_VERB,
    &SEARCH_ENTRY_MODE,
    &NARRATIVE_STATUS,
    &PUBLICATION_STATUS,
    &ISSUE_SEVERITY,
    &ISSUE_TYPE,
    &LINK_TYPE,
    &QUANTITY_COMPARATOR,
    // conformance
    &SLICING_RULES,
    &DISCRIMINATOR_TYPE,
    &BINDING_STRENGTH,
    &PROPERTY_REPRESENTATION,
    &AGGREGATION_MODE,
    &CONSTRAINT_SEVERITY,
    &STRUCTURE_DEFINITION_KIND,
    &TYPE_DERIVATION_RULE,
    &EXTENSION_CONTEXT_TYPE,
    &SEARCH_PARAM_TYPE,
    &RESTFUL_CAPABILITY_MODE,
    &RESTFUL_INTERACTION,
    &CONDITIONAL_DELETE_STATUS,
    &REFERENCE_HANDLING_POLICY,
    &RESOURCE_VERSION_POLICY,
    // administrative
    &ADMINISTRATIVE_GENDER,
    &NAME_USE,
    &ADDRESS_USE,
    &ADDRESS_TYPE,
    &CONTACT_POINT_SYSTEM,
    &CONTACT_POINT_USE,
    &IDENTIFIER_USE,
    &PARTICIPATION_STATUS,
    &PARTICIPANT_REQUIRED,
    &APPOINTMENT_STATUS,
    &ENCOUNTER_STATUS,
    &ACCOUNT_STATUS,
    &DAYS_OF_WEEK,
    // clinical
    &ADVERSE_EVENT_ACTUALITY,
    &ALLERGY_INTOLERANCE_CATEGORY,
    &ALLERGY_INTOLERANCE_CRITICALITY,
    &ALLERGY_INTOLERANCE_TYPE,
    &ALLERGY_INTOLERANCE_SEVERITY,
    &OBSERVATION_STATUS,
    &DIAGNOSTIC_REPORT_STATUS,
    &REQUEST_STATUS,
    &REQUEST_INTENT,
    &REQUEST_PRIORITY,
    &EVENT_STATUS,
    // workflow
    &ACTION_PARTICIPANT_TYPE,
    &ACTION_CONDITION_KIND,
    &ACTION_GROUPING_BEHAVIOR,
    &ACTION_SELECTION_BEHAVIOR,
    &ACTION_REQUIRED_BEHAVIOR,
    &ACTION_PRECHECK_BEHAVIOR,
    &ACTION_CARDINALITY_BEHAVIOR,
    &ACTION_RELATIONSHIP_TYPE,
    // documents
    &DOCUMENT_RELATIONSHIP_TYPE,
    &DOCUMENT_REFERENCE_STATUS,
    &COMPOSITION_STATUS,
    &COMPOSITION_ATTESTATION_MODE,
    &DOCUMENT_MODE,
    &NOTE_TYPE,
];
