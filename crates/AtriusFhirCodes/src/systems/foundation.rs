//! Infrastructure code systems: bundles, HTTP, narrative, operation outcomes.

code_system! {
    /// Indicates the purpose of a bundle - how it is intended to be used.
    pub enum BundleType => static BUNDLE_TYPE {
        id: "bundle-type",
        url: "http://hl7.org/fhir/bundle-type",
        version: "4.3.0",
        concepts: {
            Document = "document": "Document",
            Message = "message": "Message",
            Transaction = "transaction": "Transaction",
            TransactionResponse = "transaction-response": "Transaction Response",
            Batch = "batch": "Batch",
            BatchResponse = "batch-response": "Batch Response",
            History = "history": "History List",
            Searchset = "searchset": "Search Results",
            Collection = "collection": "Collection",
        }
    }
}

code_system! {
    /// HTTP verbs (in the HTTP command line). See the HTTP RFC for details.
    pub enum HttpVerb => static HTTP_VERB {
        id: "http-verb",
        url: "http://hl7.org/fhir/http-verb",
        version: "4.3.0",
        concepts: {
            Get = "GET",
            Head = "HEAD",
            Post = "POST",
            Put = "PUT",
            Delete = "DELETE",
            Patch = "PATCH",
        }
    }
}

code_system! {
    /// Why an entry is in the result set - whether it's included as a match
    /// or because of an _include requirement, or to convey information or
    /// warning information about the search process.
    pub enum SearchEntryMode => static SEARCH_ENTRY_MODE {
        id: "search-entry-mode",
        url: "http://hl7.org/fhir/search-entry-mode",
        version: "4.3.0",
        concepts: {
            Match = "match": "Match",
            Include = "include": "Include",
            Outcome = "outcome": "Outcome",
        }
    }
}

code_system! {
    /// The status of a resource narrative.
    pub enum NarrativeStatus => static NARRATIVE_STATUS {
        id: "narrative-status",
        url: "http://hl7.org/fhir/narrative-status",
        version: "4.3.0",
        concepts: {
            /// The contents of the narrative are entirely generated from the
            /// core elements in the content.
            Generated = "generated": "Generated",
            Extensions = "extensions": "Extensions",
            Additional = "additional": "Additional",
            /// The contents of the narrative are some equivalent of "No human-readable text provided in this case".
            Empty = "empty": "Empty",
        }
    }
}

code_system! {
    /// The lifecycle status of an artifact.
    pub enum PublicationStatus => static PUBLICATION_STATUS {
        id: "publication-status",
        url: "http://hl7.org/fhir/publication-status",
        version: "4.3.0",
        concepts: {
            Draft = "draft": "Draft",
            Active = "active": "Active",
            Retired = "retired": "Retired",
            Unknown = "unknown": "Unknown",
        }
    }
}

code_system! {
    /// How the issue affects the success of the action.
    pub enum IssueSeverity => static ISSUE_SEVERITY {
        id: "issue-severity",
        url: "http://hl7.org/fhir/issue-severity",
        version: "4.3.0",
        concepts: {
            Fatal = "fatal": "Fatal",
            Error = "error": "Error",
            Warning = "warning": "Warning",
            Information = "information": "Information",
        }
    }
}

code_system! {
    /// A code that describes the type of issue.
    pub enum IssueType => static ISSUE_TYPE {
        id: "issue-type",
        url: "http://hl7.org/fhir/issue-type",
        version: "4.3.0",
        concepts: {
            Invalid = "invalid": "Invalid Content",
            Structure = "structure": "Structural Issue",
            Required = "required": "Required element missing",
            Value = "value": "Element value invalid",
            Invariant = "invariant": "Validation rule failed",
            Security = "security": "Security Problem",
            Login = "login": "Login Required",
            Unknown = "unknown": "Unknown User",
            Expired = "expired": "Session Expired",
            Forbidden = "forbidden": "Forbidden",
            Suppressed = "suppressed": "Information Suppressed",
            Processing = "processing": "Processing Failure",
            NotSupported = "not-supported": "Content not supported",
            Duplicate = "duplicate": "Duplicate",
            MultipleMatches = "multiple-matches": "Multiple Matches",
            NotFound = "not-found": "Not Found",
            Deleted = "deleted": "Deleted",
            TooLong = "too-long": "Content Too Long",
            CodeInvalid = "code-invalid": "Invalid Code",
            Extension = "extension": "Unacceptable Extension",
            TooCostly = "too-costly": "Operation Too Costly",
            BusinessRule = "business-rule": "Business Rule Violation",
            Conflict = "conflict": "Edit Version Conflict",
            Transient = "transient": "Transient Issue",
            LockError = "lock-error": "Lock Error",
            NoStore = "no-store": "No Store Available",
            Exception = "exception": "Exception",
            Timeout = "timeout": "Timeout",
            Incomplete = "incomplete": "Incomplete Results",
            Throttled = "throttled": "Throttled",
            Informational = "informational": "Informational Note",
        }
    }
}

code_system! {
    /// The type of link between this patient resource and another patient resource.
    pub enum LinkType => static LINK_TYPE {
        id: "link-type",
        url: "http://hl7.org/fhir/link-type",
        version: "4.3.0",
        concepts: {
            ReplacedBy = "replaced-by": "Replaced-by",
            Replaces = "replaces": "Replaces",
            Refer = "refer": "Refer",
            Seealso = "seealso": "See also",
        }
    }
}

code_system! {
    /// How the Quantity should be understood and represented.
    pub enum QuantityComparator => static QUANTITY_COMPARATOR {
        id: "quantity-comparator",
        url: "http://hl7.org/fhir/quantity-comparator",
        version: "4.3.0",
        concepts: {
            LessThan = "<": "Less than",
            LessOrEqual = "<=": "Less or Equal to",
            GreaterOrEqual = ">=": "Greater or Equal to",
            GreaterThan = ">": "Greater than",
        }
    }
}
