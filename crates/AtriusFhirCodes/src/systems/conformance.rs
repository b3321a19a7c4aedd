//! Conformance code systems: profiling, bindings, search and capabilities.

code_system! {
    /// How slices are interpreted when evaluating an instance.
    pub enum SlicingRules => static SLICING_RULES {
        id: "resource-slicing-rules",
        url: "http://hl7.org/fhir/resource-slicing-rules",
        version: "4.3.0",
        concepts: {
            /// No additional content is allowed other than that described by
            /// the slices in this profile.
            Closed = "closed": "Closed",
            Open = "open": "Open",
            /// Additional content is allowed, but only at the end of the list.
            OpenAtEnd = "openAtEnd": "Open at End",
        }
    }
}

code_system! {
    /// How an element value is interpreted when discrimination is evaluated.
    pub enum DiscriminatorType => static DISCRIMINATOR_TYPE {
        id: "discriminator-type",
        url: "http://hl7.org/fhir/discriminator-type",
        version: "4.3.0",
        concepts: {
            Value = "value",
            Exists = "exists",
            Pattern = "pattern",
            Type = "type",
            Profile = "profile",
        }
    }
}

code_system! {
    /// Indication of the degree of conformance expectations associated with a binding.
    pub enum BindingStrength => static BINDING_STRENGTH {
        id: "binding-strength",
        url: "http://hl7.org/fhir/binding-strength",
        version: "4.3.0",
        concepts: {
            Required = "required": "Required",
            Extensible = "extensible": "Extensible",
            Preferred = "preferred": "Preferred",
            Example = "example": "Example",
        }
    }
}

code_system! {
    /// How a property is represented when serialized.
    pub enum PropertyRepresentation => static PROPERTY_REPRESENTATION {
        id: "property-representation",
        url: "http://hl7.org/fhir/property-representation",
        version: "4.3.0",
        concepts: {
            XmlAttr = "xmlAttr": "XML Attribute",
            XmlText = "xmlText": "XML Text",
            TypeAttr = "typeAttr": "Type Attribute",
            CdaText = "cdaText": "CDA Text Format",
            Xhtml = "xhtml": "XHTML",
        }
    }
}

code_system! {
    /// How resource references can be aggregated.
    pub enum AggregationMode => static AGGREGATION_MODE {
        id: "resource-aggregation-mode",
        url: "http://hl7.org/fhir/resource-aggregation-mode",
        version: "4.3.0",
        concepts: {
            Contained = "contained",
            Referenced = "referenced",
            Bundled = "bundled",
        }
    }
}

code_system! {
    pub enum ConstraintSeverity => static CONSTRAINT_SEVERITY {
        id: "constraint-severity",
        url: "http://hl7.org/fhir/constraint-severity",
        version: "4.3.0",
        concepts: {
            Error = "error",
            Warning = "warning",
        }
    }
}

code_system! {
    /// Defines the type of structure that a definition is describing.
    pub enum StructureDefinitionKind => static STRUCTURE_DEFINITION_KIND {
        id: "structure-definition-kind",
        url: "http://hl7.org/fhir/structure-definition-kind",
        version: "4.3.0",
        concepts: {
            PrimitiveType = "primitive-type": "Primitive Data Type",
            ComplexType = "complex-type": "Complex Data Type",
            Resource = "resource": "Resource",
            Logical = "logical": "Logical",
        }
    }
}

code_system! {
    /// How a type relates to its baseDefinition.
    pub enum TypeDerivationRule => static TYPE_DERIVATION_RULE {
        id: "type-derivation-rule",
        url: "http://hl7.org/fhir/type-derivation-rule",
        version: "4.3.0",
        concepts: {
            Specialization = "specialization",
            Constraint = "constraint",
        }
    }
}

code_system! {
    /// How an extension context is interpreted.
    pub enum ExtensionContextType => static EXTENSION_CONTEXT_TYPE {
        id: "extension-context-type",
        url: "http://hl7.org/fhir/extension-context-type",
        version: "4.3.0",
        concepts: {
            Fhirpath = "fhirpath": "FHIRPath",
            Element = "element": "Element ID",
            Extension = "extension": "Extension URL",
        }
    }
}

code_system! {
    /// Data types allowed to be used for search parameters.
    pub enum SearchParamType => static SEARCH_PARAM_TYPE {
        id: "search-param-type",
        url: "http://hl7.org/fhir/search-param-type",
        version: "4.3.0",
        concepts: {
            Number = "number",
            Date = "date",
            String = "string",
            Token = "token",
            Reference = "reference",
            Composite = "composite",
            Quantity = "quantity",
            Uri = "uri",
            Special = "special",
        }
    }
}

code_system! {
    /// The mode of a RESTful capability statement.
    pub enum RestfulCapabilityMode => static RESTFUL_CAPABILITY_MODE {
        id: "restful-capability-mode",
        url: "http://hl7.org/fhir/restful-capability-mode",
        version: "4.3.0",
        concepts: {
            Client = "client": "Client",
            Server = "server": "Server",
        }
    }
}

code_system! {
    /// Interactions of the FHIR RESTful API. Covers both the type-level and
    /// the system-level interaction value sets.
    pub enum RestfulInteraction => static RESTFUL_INTERACTION {
        id: "restful-interaction",
        url: "http://hl7.org/fhir/restful-interaction",
        version: "4.3.0",
        concepts: {
            Read = "read",
            Vread = "vread",
            Update = "update",
            Patch = "patch",
            Delete = "delete",
            History = "history",
            HistoryInstance = "history-instance",
            HistoryType = "history-type",
            HistorySystem = "history-system",
            Create = "create",
            Search = "search",
            SearchType = "search-type",
            SearchSystem = "search-system",
            Capabilities = "capabilities",
            Transaction = "transaction",
            Batch = "batch",
            Operation = "operation",
        }
    }
}

code_system! {
    /// A code that indicates how the server supports conditional delete.
    pub enum ConditionalDeleteStatus => static CONDITIONAL_DELETE_STATUS {
        id: "conditional-delete-status",
        url: "http://hl7.org/fhir/conditional-delete-status",
        version: "4.3.0",
        concepts: {
            NotSupported = "not-supported": "Not Supported",
            Single = "single": "Single Deletes Supported",
            Multiple = "multiple": "Multiple Deletes Supported",
        }
    }
}

code_system! {
    /// A set of flags that defines how references are supported.
    pub enum ReferenceHandlingPolicy => static REFERENCE_HANDLING_POLICY {
        id: "reference-handling-policy",
        url: "http://hl7.org/fhir/reference-handling-policy",
        version: "4.3.0",
        concepts: {
            Literal = "literal",
            Logical = "logical",
            Resolves = "resolves",
            Enforced = "enforced",
            Local = "local",
        }
    }
}

code_system! {
    /// How the system supports versioning for a resource.
    pub enum ResourceVersionPolicy => static RESOURCE_VERSION_POLICY {
        id: "versioning-policy",
        url: "http://hl7.org/fhir/versioning-policy",
        version: "4.3.0",
        concepts: {
            NoVersion = "no-version": "No VersionId Support",
            Versioned = "versioned": "Versioned",
            VersionedUpdate = "versioned-update": "VersionId tracked fully",
        }
    }
}
