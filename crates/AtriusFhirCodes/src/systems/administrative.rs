//! Administrative code systems: demographics, contact details, scheduling, encounters.

code_system! {
    /// The gender of a person used for administrative purposes.
    pub enum AdministrativeGender => static ADMINISTRATIVE_GENDER {
        id: "administrative-gender",
        url: "http://hl7.org/fhir/administrative-gender",
        version: "4.3.0",
        concepts: {
            Male = "male": "Male",
            Female = "female": "Female",
            Other = "other": "Other",
            Unknown = "unknown": "Unknown",
        }
    }
}

code_system! {
    /// The use of a human name.
    pub enum NameUse => static NAME_USE {
        id: "name-use",
        url: "http://hl7.org/fhir/name-use",
        version: "4.3.0",
        concepts: {
            Usual = "usual": "Usual",
            Official = "official": "Official",
            Temp = "temp": "Temp",
            Nickname = "nickname": "Nickname",
            Anonymous = "anonymous": "Anonymous",
            Old = "old": "Old",
            /// A name used prior to changing name because of marriage.
            Maiden = "maiden": "Name changed for Marriage",
        }
    }
}

code_system! {
    /// The use of an address.
    pub enum AddressUse => static ADDRESS_USE {
        id: "address-use",
        url: "http://hl7.org/fhir/address-use",
        version: "4.3.0",
        concepts: {
            Home = "home": "Home",
            Work = "work": "Work",
            Temp = "temp": "Temporary",
            Old = "old": "Old / Incorrect",
            Billing = "billing": "Billing",
        }
    }
}

code_system! {
    /// The type of an address (physical / postal).
    pub enum AddressType => static ADDRESS_TYPE {
        id: "address-type",
        url: "http://hl7.org/fhir/address-type",
        version: "4.3.0",
        concepts: {
            Postal = "postal": "Postal",
            Physical = "physical": "Physical",
            Both = "both": "Postal & Physical",
        }
    }
}

code_system! {
    /// Telecommunications form for contact point.
    pub enum ContactPointSystem => static CONTACT_POINT_SYSTEM {
        id: "contact-point-system",
        url: "http://hl7.org/fhir/contact-point-system",
        version: "4.3.0",
        concepts: {
            Phone = "phone",
            Fax = "fax",
            Email = "email",
            Pager = "pager",
            Url = "url",
            Sms = "sms",
            Other = "other",
        }
    }
}

code_system! {
    pub enum ContactPointUse => static CONTACT_POINT_USE {
        id: "contact-point-use",
        url: "http://hl7.org/fhir/contact-point-use",
        version: "4.3.0",
        concepts: {
            Home = "home",
            Work = "work",
            Temp = "temp",
            Old = "old",
            Mobile = "mobile",
        }
    }
}

code_system! {
    /// Identifies the purpose for this identifier, if known.
    pub enum IdentifierUse => static IDENTIFIER_USE {
        id: "identifier-use",
        url: "http://hl7.org/fhir/identifier-use",
        version: "4.3.0",
        concepts: {
            Usual = "usual": "Usual",
            Official = "official": "Official",
            Temp = "temp": "Temp",
            Secondary = "secondary": "Secondary",
            Old = "old": "Old",
        }
    }
}

code_system! {
    /// The Participation status of an appointment.
    pub enum ParticipationStatus => static PARTICIPATION_STATUS {
        id: "participationstatus",
        url: "http://hl7.org/fhir/participationstatus",
        version: "4.3.0",
        concepts: {
            Accepted = "accepted": "Accepted",
            Declined = "declined": "Declined",
            Tentative = "tentative": "Tentative",
            NeedsAction = "needs-action": "Needs Action",
        }
    }
}

code_system! {
    /// Is the Participant required to attend the appointment.
    pub enum ParticipantRequired => static PARTICIPANT_REQUIRED {
        id: "participantrequired",
        url: "http://hl7.org/fhir/participantrequired",
        version: "4.3.0",
        concepts: {
            Required = "required": "Required",
            Optional = "optional": "Optional",
            InformationOnly = "information-only": "Information Only",
        }
    }
}

code_system! {
    /// The free/busy status of an appointment.
    pub enum AppointmentStatus => static APPOINTMENT_STATUS {
        id: "appointmentstatus",
        url: "http://hl7.org/fhir/appointmentstatus",
        version: "4.3.0",
        concepts: {
            Proposed = "proposed": "Proposed",
            Pending = "pending": "Pending",
            Booked = "booked": "Booked",
            Arrived = "arrived": "Arrived",
            Fulfilled = "fulfilled": "Fulfilled",
            Cancelled = "cancelled": "Cancelled",
            Noshow = "noshow": "No Show",
            EnteredInError = "entered-in-error": "Entered in error",
            CheckedIn = "checked-in": "Checked In",
            Waitlist = "waitlist": "Waitlisted",
        }
    }
}

code_system! {
    /// Current state of the encounter.
    pub enum EncounterStatus => static ENCOUNTER_STATUS {
        id: "encounter-status",
        url: "http://hl7.org/fhir/encounter-status",
        version: "4.3.0",
        concepts: {
            Planned = "planned": "Planned",
            Arrived = "arrived": "Arrived",
            Triaged = "triaged": "Triaged",
            InProgress = "in-progress": "In Progress",
            Onleave = "onleave": "On Leave",
            Finished = "finished": "Finished",
            Cancelled = "cancelled": "Cancelled",
            EnteredInError = "entered-in-error": "Entered in Error",
            Unknown = "unknown": "Unknown",
        }
    }
}

code_system! {
    /// Indicates whether the account is available to be used.
    pub enum AccountStatus => static ACCOUNT_STATUS {
        id: "account-status",
        url: "http://hl7.org/fhir/account-status",
        version: "4.3.0",
        concepts: {
            Active = "active": "Active",
            Inactive = "inactive": "Inactive",
            EnteredInError = "entered-in-error": "Entered in error",
            OnHold = "on-hold": "On Hold",
            Unknown = "unknown": "Unknown",
        }
    }
}

code_system! {
    /// The days of the week.
    pub enum DaysOfWeek => static DAYS_OF_WEEK {
        id: "days-of-week",
        url: "http://hl7.org/fhir/days-of-week",
        version: "4.3.0",
        concepts: {
            Mon = "mon": "Monday",
            Tue = "tue": "Tuesday",
            Wed = "wed": "Wednesday",
            Thu = "thu": "Thursday",
            Fri = "fri": "Friday",
            Sat = "sat": "Saturday",
            Sun = "sun": "Sunday",
        }
    }
}
