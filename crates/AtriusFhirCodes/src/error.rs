//! Error types for code system lookups.
//!
//! Resolving a string against a closed code system has exactly one failure
//! mode, [`UnknownCode`]. It is raised synchronously wherever a lookup or a
//! coded value construction happens and is never replaced by a default.

use std::fmt;

use thiserror::Error;

/// Which name of a permitted value a lookup matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupKind {
    /// The wire-string exchanged in serialized documents (e.g. `entered-in-error`).
    Code,
    /// The symbolic constant name of the value (e.g. `EnteredInError`).
    SymbolicName,
}

impl fmt::Display for LookupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupKind::Code => f.write_str("code"),
            LookupKind::SymbolicName => f.write_str("symbolic name"),
        }
    }
}

/// A candidate string did not match any permitted value of a code system.
///
/// Matching is exact: case-sensitive, without trimming or normalization.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{input}' in code system {system}")]
pub struct UnknownCode {
    /// Canonical URL of the code system the lookup ran against.
    pub system: &'static str,
    /// The rejected input, verbatim.
    pub input: String,
    /// Whether the input was matched as a wire-string or a symbolic name.
    pub kind: LookupKind,
}

impl UnknownCode {
    pub(crate) fn new(system: &'static str, input: &str, kind: LookupKind) -> Self {
        tracing::trace!(system, input, %kind, "code system lookup failed");
        UnknownCode {
            system,
            input: input.to_string(),
            kind,
        }
    }
}

/// Errors from lookups that first have to find the code system by key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// No registered code system has this URL, id or name.
    #[error("unknown code system '{0}'")]
    UnknownSystem(String),

    /// The code system was found but the code is not one of its values.
    #[error(transparent)]
    UnknownCode(#[from] UnknownCode),
}
