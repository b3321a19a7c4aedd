//! Document code systems: compositions, document references, messaging notes.

code_system! {
    /// The type of relationship between documents.
    pub enum DocumentRelationshipType => static DOCUMENT_RELATIONSHIP_TYPE {
        id: "document-relationship-type",
        url: "http://hl7.org/fhir/document-relationship-type",
        version: "4.3.0",
        concepts: {
            /// This document logically replaces or supersedes the target document.
            Replaces = "replaces": "Replaces",
            /// This document was generated by transforming the target document
            /// (e.g. format or language conversion).
            Transforms = "transforms": "Transforms",
            Signs = "signs": "Signs",
            Appends = "appends": "Appends",
        }
    }
}

code_system! {
    /// The status of the document reference.
    pub enum DocumentReferenceStatus => static DOCUMENT_REFERENCE_STATUS {
        id: "document-reference-status",
        url: "http://hl7.org/fhir/document-reference-status",
        version: "4.3.0",
        concepts: {
            Current = "current": "Current",
            Superseded = "superseded": "Superseded",
            EnteredInError = "entered-in-error": "Entered in Error",
        }
    }
}

code_system! {
    /// The workflow/clinical status of the composition.
    pub enum CompositionStatus => static COMPOSITION_STATUS {
        id: "composition-status",
        url: "http://hl7.org/fhir/composition-status",
        version: "4.3.0",
        concepts: {
            Preliminary = "preliminary": "Preliminary",
            Final = "final": "Final",
            Amended = "amended": "Amended",
            EnteredInError = "entered-in-error": "Entered in Error",
        }
    }
}

code_system! {
    /// The way in which a person authenticated a composition.
    pub enum CompositionAttestationMode => static COMPOSITION_ATTESTATION_MODE {
        id: "composition-attestation-mode",
        url: "http://hl7.org/fhir/composition-attestation-mode",
        version: "4.3.0",
        concepts: {
            Personal = "personal": "Personal",
            Professional = "professional": "Professional",
            Legal = "legal": "Legal",
            Official = "official": "Official",
        }
    }
}

code_system! {
    pub enum DocumentMode => static DOCUMENT_MODE {
        id: "document-mode",
        url: "http://hl7.org/fhir/document-mode",
        version: "4.3.0",
        concepts: {
            Producer = "producer": "Producer",
            Consumer = "consumer": "Consumer",
        }
    }
}

code_system! {
    /// The presentation types of notes.
    pub enum NoteType => static NOTE_TYPE {
        id: "note-type",
        url: "http://hl7.org/fhir/note-type",
        version: "4.3.0",
        concepts: {
            Display = "display": "Display",
            Print = "print": "Print (Form)",
            Printoper = "printoper": "Print (Operator)",
        }
    }
}
