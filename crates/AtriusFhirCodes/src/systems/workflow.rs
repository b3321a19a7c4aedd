//! Definitional and workflow code systems used by PlanDefinition and RequestGroup actions.

code_system! {
    /// The type of participant for the action.
    pub enum ActionParticipantType => static ACTION_PARTICIPANT_TYPE {
        id: "action-participant-type",
        url: "http://hl7.org/fhir/action-participant-type",
        version: "4.3.0",
        concepts: {
            Patient = "patient": "Patient",
            Practitioner = "practitioner": "Practitioner",
            RelatedPerson = "related-person": "Related Person",
            Device = "device": "Device",
        }
    }
}

code_system! {
    /// Defines the kinds of conditions that can appear on actions.
    pub enum ActionConditionKind => static ACTION_CONDITION_KIND {
        id: "action-condition-kind",
        url: "http://hl7.org/fhir/action-condition-kind",
        version: "4.3.0",
        concepts: {
            Applicability = "applicability": "Applicability",
            Start = "start": "Start",
            Stop = "stop": "Stop",
        }
    }
}

code_system! {
    /// Defines organization behavior of a group.
    pub enum ActionGroupingBehavior => static ACTION_GROUPING_BEHAVIOR {
        id: "action-grouping-behavior",
        url: "http://hl7.org/fhir/action-grouping-behavior",
        version: "4.3.0",
        concepts: {
            VisualGroup = "visual-group": "Visual Group",
            LogicalGroup = "logical-group": "Logical Group",
            SentenceGroup = "sentence-group": "Sentence Group",
        }
    }
}

code_system! {
    /// Defines selection behavior of a group.
    pub enum ActionSelectionBehavior => static ACTION_SELECTION_BEHAVIOR {
        id: "action-selection-behavior",
        url: "http://hl7.org/fhir/action-selection-behavior",
        version: "4.3.0",
        concepts: {
            Any = "any": "Any",
            All = "all": "All",
            AllOrNone = "all-or-none": "All Or None",
            ExactlyOne = "exactly-one": "Exactly One",
            AtMostOne = "at-most-one": "At Most One",
            OneOrMore = "one-or-more": "One Or More",
        }
    }
}

code_system! {
    /// Defines expectations around whether an action or action group is required.
    pub enum ActionRequiredBehavior => static ACTION_REQUIRED_BEHAVIOR {
        id: "action-required-behavior",
        url: "http://hl7.org/fhir/action-required-behavior",
        version: "4.3.0",
        concepts: {
            Must = "must": "Must",
            Could = "could": "Could",
            MustUnlessDocumented = "must-unless-documented": "Must Unless Documented",
        }
    }
}

code_system! {
    pub enum ActionPrecheckBehavior => static ACTION_PRECHECK_BEHAVIOR {
        id: "action-precheck-behavior",
        url: "http://hl7.org/fhir/action-precheck-behavior",
        version: "4.3.0",
        concepts: {
            Yes = "yes": "Yes",
            No = "no": "No",
        }
    }
}

code_system! {
    /// Defines behavior for an action or a group for how many times that
    /// item may be repeated.
    pub enum ActionCardinalityBehavior => static ACTION_CARDINALITY_BEHAVIOR {
        id: "action-cardinality-behavior",
        url: "http://hl7.org/fhir/action-cardinality-behavior",
        version: "4.3.0",
        concepts: {
            Single = "single": "Single",
            Multiple = "multiple": "Multiple",
        }
    }
}

code_system! {
    /// Defines the types of relationships between actions.
    pub enum ActionRelationshipType => static ACTION_RELATIONSHIP_TYPE {
        id: "action-relationship-type",
        url: "http://hl7.org/fhir/action-relationship-type",
        version: "4.3.0",
        concepts: {
            BeforeStart = "before-start": "Before Start",
            Before = "before": "Before",
            BeforeEnd = "before-end": "Before End",
            ConcurrentWithStart = "concurrent-with-start": "Concurrent With Start",
            Concurrent = "concurrent": "Concurrent",
            ConcurrentWithEnd = "concurrent-with-end": "Concurrent With End",
            AfterStart = "after-start": "After Start",
            After = "after": "After",
            AfterEnd = "after-end": "After End",
        }
    }
}
