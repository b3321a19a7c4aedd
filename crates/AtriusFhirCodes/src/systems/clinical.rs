//! Clinical code systems: adverse events, allergies, observations, requests and events.

code_system! {
    /// Overall nature of the adverse event, e.g. real or potential.
    pub enum AdverseEventActuality => static ADVERSE_EVENT_ACTUALITY {
        id: "adverse-event-actuality",
        url: "http://hl7.org/fhir/adverse-event-actuality",
        version: "4.3.0",
        concepts: {
            /// The adverse event actually happened regardless of whether anyone was affected or harmed.
            Actual = "actual": "Adverse Event",
            /// A potential adverse event.
            Potential = "potential": "Potential Adverse Event",
        }
    }
}

code_system! {
    /// Category of an identified substance associated with allergies or intolerances.
    pub enum AllergyIntoleranceCategory => static ALLERGY_INTOLERANCE_CATEGORY {
        id: "allergy-intolerance-category",
        url: "http://hl7.org/fhir/allergy-intolerance-category",
        version: "4.3.0",
        concepts: {
            Food = "food": "Food",
            Medication = "medication": "Medication",
            Environment = "environment": "Environment",
            Biologic = "biologic": "Biologic",
        }
    }
}

code_system! {
    /// Estimate of the potential clinical harm, or seriousness, of a reaction to an identified substance.
    pub enum AllergyIntoleranceCriticality => static ALLERGY_INTOLERANCE_CRITICALITY {
        id: "allergy-intolerance-criticality",
        url: "http://hl7.org/fhir/allergy-intolerance-criticality",
        version: "4.3.0",
        concepts: {
            Low = "low": "Low Risk",
            High = "high": "High Risk",
            UnableToAssess = "unable-to-assess": "Unable to Assess Risk",
        }
    }
}

code_system! {
    pub enum AllergyIntoleranceType => static ALLERGY_INTOLERANCE_TYPE {
        id: "allergy-intolerance-type",
        url: "http://hl7.org/fhir/allergy-intolerance-type",
        version: "4.3.0",
        concepts: {
            Allergy = "allergy": "Allergy",
            Intolerance = "intolerance": "Intolerance",
        }
    }
}

code_system! {
    /// Clinical assessment of the severity of a reaction event as a whole.
    pub enum AllergyIntoleranceSeverity => static ALLERGY_INTOLERANCE_SEVERITY {
        id: "reaction-event-severity",
        url: "http://hl7.org/fhir/reaction-event-severity",
        version: "4.3.0",
        concepts: {
            Mild = "mild": "Mild",
            Moderate = "moderate": "Moderate",
            Severe = "severe": "Severe",
        }
    }
}

code_system! {
    /// Codes providing the status of an observation.
    pub enum ObservationStatus => static OBSERVATION_STATUS {
        id: "observation-status",
        url: "http://hl7.org/fhir/observation-status",
        version: "4.3.0",
        concepts: {
            Registered = "registered": "Registered",
            Preliminary = "preliminary": "Preliminary",
            Final = "final": "Final",
            Amended = "amended": "Amended",
            Corrected = "corrected": "Corrected",
            Cancelled = "cancelled": "Cancelled",
            EnteredInError = "entered-in-error": "Entered in Error",
            Unknown = "unknown": "Unknown",
        }
    }
}

code_system! {
    /// The status of the diagnostic report.
    pub enum DiagnosticReportStatus => static DIAGNOSTIC_REPORT_STATUS {
        id: "diagnostic-report-status",
        url: "http://hl7.org/fhir/diagnostic-report-status",
        version: "4.3.0",
        concepts: {
            Registered = "registered",
            Partial = "partial",
            Preliminary = "preliminary",
            Final = "final",
            Amended = "amended",
            Corrected = "corrected",
            Appended = "appended",
            Cancelled = "cancelled",
            EnteredInError = "entered-in-error",
            Unknown = "unknown",
        }
    }
}

code_system! {
    /// Codes identifying the lifecycle stage of a request.
    pub enum RequestStatus => static REQUEST_STATUS {
        id: "request-status",
        url: "http://hl7.org/fhir/request-status",
        version: "4.3.0",
        concepts: {
            Draft = "draft": "Draft",
            Active = "active": "Active",
            OnHold = "on-hold": "On Hold",
            Revoked = "revoked": "Revoked",
            Completed = "completed": "Completed",
            EnteredInError = "entered-in-error": "Entered in Error",
            Unknown = "unknown": "Unknown",
        }
    }
}

code_system! {
    /// Codes indicating the degree of authority/intentionality associated with a request.
    pub enum RequestIntent => static REQUEST_INTENT {
        id: "request-intent",
        url: "http://hl7.org/fhir/request-intent",
        version: "4.3.0",
        concepts: {
            Proposal = "proposal": "Proposal",
            Plan = "plan": "Plan",
            Directive = "directive": "Directive",
            Order = "order": "Order",
            OriginalOrder = "original-order": "Original Order",
            ReflexOrder = "reflex-order": "Reflex Order",
            FillerOrder = "filler-order": "Filler Order",
            InstanceOrder = "instance-order": "Instance Order",
            Option = "option": "Option",
        }
    }
}

code_system! {
    pub enum RequestPriority => static REQUEST_PRIORITY {
        id: "request-priority",
        url: "http://hl7.org/fhir/request-priority",
        version: "4.3.0",
        concepts: {
            Routine = "routine": "Routine",
            Urgent = "urgent": "Urgent",
            Asap = "asap": "ASAP",
            Stat = "stat": "STAT",
        }
    }
}

code_system! {
    /// Codes identifying the lifecycle stage of an event.
    pub enum EventStatus => static EVENT_STATUS {
        id: "event-status",
        url: "http://hl7.org/fhir/event-status",
        version: "4.3.0",
        concepts: {
            Preparation = "preparation": "Preparation",
            InProgress = "in-progress": "In Progress",
            NotDone = "not-done": "Not Done",
            OnHold = "on-hold": "On Hold",
            Stopped = "stopped": "Stopped",
            Completed = "completed": "Completed",
            EnteredInError = "entered-in-error": "Entered in Error",
            Unknown = "unknown": "Unknown",
        }
    }
}
