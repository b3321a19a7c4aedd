/// Declare a closed code system.
///
/// Emits a `static` [`CodeSystem`](crate::CodeSystem) holding the concept
/// table and a fieldless enum with one variant per concept, implementing
/// [`CodeEnum`](crate::CodeEnum), `Display`, `FromStr`, `TryFrom<&str>` and
/// serde as the wire-string.
///
/// ```rust
/// use atrius_fhir_codes::{code_system, CodeEnum};
///
/// code_system! {
///     /// Status of a task.
///     pub enum TaskState => static TASK_STATE {
///         id: "task-state",
///         url: "urn:example:task-state",
///         concepts: {
///             Active = "active",
///             EnteredInError = "entered-in-error": "Entered in Error",
///         }
///     }
/// }
///
/// assert_eq!(TaskState::EnteredInError.as_code(), "entered-in-error");
/// assert_eq!(TASK_STATE.lookup("active").unwrap().name, "Active");
/// assert!("ACTIVE".parse::<TaskState>().is_err());
/// ```
///
/// `version:` and `policy:` (`Code` or `SymbolicName`, default `Code`) are
/// optional and go between `url:` and `concepts:`. A concept may carry a
/// display label after a colon.
#[macro_export]
macro_rules! code_system {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident => static $system:ident {
            id: $id:literal,
            url: $url:literal,
            $(version: $version:literal,)?
            $(policy: $policy:ident,)?
            concepts: {
                $(
                    $(#[$vmeta:meta])*
                    $variant:ident = $code:literal $(: $display:literal)?
                ),+ $(,)?
            } $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        #[doc = concat!("Concept table of [`", stringify!($name), "`] (`", $url, "`).")]
        $vis static $system: $crate::CodeSystem = $crate::CodeSystem::new(
            stringify!($name),
            $id,
            $url,
            $crate::__code_system_opt!($($version)?),
            $crate::__code_system_policy!($($policy)?),
            {
                const CONCEPTS: &[$crate::Concept] = &[
                    $(
                        $crate::Concept::new(
                            stringify!($variant),
                            $code,
                            $crate::__code_system_opt!($($display)?),
                        ),
                    )+
                ];
                CONCEPTS
            },
        );

        impl $crate::CodeEnum for $name {
            const ALL: &'static [Self] = &[$($name::$variant,)+];

            fn system() -> &'static $crate::CodeSystem {
                &$system
            }

            fn ordinal(self) -> usize {
                self as usize
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str($crate::CodeEnum::as_code(*self))
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::UnknownCode;

            fn from_str(s: &str) -> ::core::result::Result<Self, $crate::UnknownCode> {
                <Self as $crate::CodeEnum>::resolve(s)
            }
        }

        impl ::core::convert::TryFrom<&str> for $name {
            type Error = $crate::UnknownCode;

            fn try_from(s: &str) -> ::core::result::Result<Self, $crate::UnknownCode> {
                <Self as $crate::CodeEnum>::from_code(s)
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                serializer.serialize_str($crate::CodeEnum::as_code(*self))
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                $crate::__private::deserialize_code_enum(deserializer)
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __code_system_opt {
    () => {
        ::core::option::Option::None
    };
    ($value:literal) => {
        ::core::option::Option::Some($value)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __code_system_policy {
    () => {
        $crate::LookupPolicy::Code
    };
    ($policy:ident) => {
        $crate::LookupPolicy::$policy
    };
}

#[cfg(test)]
mod tests {
    use crate::{CodeEnum, LookupKind};

    code_system! {
        /// Two-state system used by the macro tests.
        pub enum Toggle => static TOGGLE {
            id: "toggle",
            url: "urn:test:toggle",
            version: "0.1",
            concepts: {
                /// Switched on.
                On = "on": "On",
                Off = "off",
            }
        }
    }

    code_system! {
        enum Answer => static ANSWER {
            id: "answer",
            url: "urn:test:answer",
            policy: SymbolicName,
            concepts: {
                Yes = "Y",
                No = "N",
                NotApplicable = "N/A",
            }
        }
    }

    #[test]
    fn generated_table_matches_variants() {
        assert_eq!(Toggle::ALL, &[Toggle::On, Toggle::Off]);
        assert_eq!(TOGGLE.len(), 2);
        assert_eq!(TOGGLE.name(), "Toggle");
        assert_eq!(TOGGLE.version(), Some("0.1"));
        for value in Toggle::ALL {
            assert_eq!(TOGGLE.concepts()[value.ordinal()].code, value.as_code());
        }
        assert_eq!(Toggle::On.display(), Some("On"));
        assert_eq!(Toggle::Off.display(), None);
        assert_eq!(Toggle::Off.name(), "Off");
    }

    #[test]
    fn parsing_paths() {
        assert_eq!("on".parse::<Toggle>().unwrap(), Toggle::On);
        assert_eq!(Toggle::try_from("off").unwrap(), Toggle::Off);
        assert_eq!(Toggle::from_symbolic_name("Off").unwrap(), Toggle::Off);
        assert!("On".parse::<Toggle>().is_err());

        // FromStr follows the symbolic-name policy, TryFrom always uses the wire-string.
        assert_eq!("NotApplicable".parse::<Answer>().unwrap(), Answer::NotApplicable);
        let err = "N/A".parse::<Answer>().unwrap_err();
        assert_eq!(err.kind, LookupKind::SymbolicName);
        assert_eq!(Answer::try_from("N/A").unwrap(), Answer::NotApplicable);
    }

    #[test]
    fn display_and_serde_use_wire_string() {
        assert_eq!(Answer::NotApplicable.to_string(), "N/A");
        assert_eq!(serde_json::to_string(&Answer::Yes).unwrap(), "\"Y\"");
        let parsed: Toggle = serde_json::from_str("\"off\"").unwrap();
        assert_eq!(parsed, Toggle::Off);
        let err = serde_json::from_str::<Toggle>("\"OFF\"").unwrap_err();
        assert!(err.to_string().contains("unknown code 'OFF'"));
    }
}
