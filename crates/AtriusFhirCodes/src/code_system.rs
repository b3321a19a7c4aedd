//! Closed code system definitions.
//!
//! A [`CodeSystem`] is static, immutable data: an ordered table of
//! [`Concept`]s, each pairing a symbolic name with the wire-string used in
//! serialized documents. Systems are normally declared with the
//! [`code_system!`](crate::code_system) macro, which also emits a fieldless
//! enum implementing [`CodeEnum`] for typed access.
//!
//! Two lookup paths exist and are kept separate:
//! - [`CodeSystem::lookup`] matches the wire-string (`"entered-in-error"`)
//! - [`CodeSystem::from_symbolic_name`] matches the constant name (`"EnteredInError"`)
//!
//! [`CodeSystem::resolve`] picks one of them according to the system's
//! [`LookupPolicy`]. Both fail with the same [`UnknownCode`] error.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::OnceLock;

use crate::error::{LookupKind, UnknownCode};

/// Systems with more concepts than this get a hashed index on first lookup.
const LINEAR_SCAN_LIMIT: usize = 16;

/// Which name `resolve`-style parsing matches against for a code system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LookupPolicy {
    /// Match the wire-string.
    #[default]
    Code,
    /// Match the symbolic constant name.
    SymbolicName,
}

/// One permitted value of a code system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Concept {
    /// Symbolic constant name, unique within the system.
    pub name: &'static str,
    /// Wire-string, unique within the system.
    pub code: &'static str,
    /// Optional human readable label.
    pub display: Option<&'static str>,
}

impl Concept {
    pub const fn new(name: &'static str, code: &'static str, display: Option<&'static str>) -> Self {
        Concept {
            name,
            code,
            display,
        }
    }
}

/// A named, closed set of permitted values.
pub struct CodeSystem {
    name: &'static str,
    id: &'static str,
    url: &'static str,
    version: Option<&'static str>,
    policy: LookupPolicy,
    concepts: &'static [Concept],
    index: OnceLock<HashMap<&'static str, usize>>,
}

impl CodeSystem {
    /// Declare a code system. Usable in `static` items.
    pub const fn new(
        name: &'static str,
        id: &'static str,
        url: &'static str,
        version: Option<&'static str>,
        policy: LookupPolicy,
        concepts: &'static [Concept],
    ) -> Self {
        CodeSystem {
            name,
            id,
            url,
            version,
            policy,
            concepts,
            index: OnceLock::new(),
        }
    }

    /// Type-style name of the system, e.g. `HttpVerb`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// FHIR CodeSystem id, e.g. `http-verb`.
    pub fn id(&self) -> &'static str {
        self.id
    }

    /// Canonical URL, e.g. `http://hl7.org/fhir/http-verb`.
    pub fn url(&self) -> &'static str {
        self.url
    }

    pub fn version(&self) -> Option<&'static str> {
        self.version
    }

    pub fn policy(&self) -> LookupPolicy {
        self.policy
    }

    /// Permitted values in declaration order.
    pub fn concepts(&self) -> &'static [Concept] {
        self.concepts
    }

    /// Wire-strings in declaration order.
    pub fn codes(&self) -> impl Iterator<Item = &'static str> + use<> {
        let concepts: &'static [Concept] = self.concepts;
        concepts.iter().map(|c| c.code)
    }

    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }

    /// Position of the concept whose wire-string is exactly `code`.
    pub fn position(&self, code: &str) -> Option<usize> {
        if self.concepts.len() <= LINEAR_SCAN_LIMIT {
            return self.concepts.iter().position(|c| c.code == code);
        }
        self.index().get(code).copied()
    }

    /// Position of the concept whose symbolic name is exactly `name`.
    pub fn position_of_name(&self, name: &str) -> Option<usize> {
        self.concepts.iter().position(|c| c.name == name)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.position(code).is_some()
    }

    /// Resolve a wire-string to its concept.
    ///
    /// # Errors
    /// [`UnknownCode`] when no concept has exactly this wire-string.
    pub fn lookup(&self, code: &str) -> Result<&'static Concept, UnknownCode> {
        self.locate(code, LookupKind::Code)
            .map(|i| self.concept_at(i))
    }

    /// Resolve a symbolic constant name to its concept.
    ///
    /// # Errors
    /// [`UnknownCode`] (with [`LookupKind::SymbolicName`]) when no concept has this name.
    pub fn from_symbolic_name(&self, name: &str) -> Result<&'static Concept, UnknownCode> {
        self.locate(name, LookupKind::SymbolicName)
            .map(|i| self.concept_at(i))
    }

    /// Resolve `input` using this system's [`LookupPolicy`].
    pub fn resolve(&self, input: &str) -> Result<&'static Concept, UnknownCode> {
        self.locate(input, self.policy.into())
            .map(|i| self.concept_at(i))
    }

    /// Display label for a wire-string, if the system defines one.
    pub fn display(&self, code: &str) -> Option<&'static str> {
        self.position(code).and_then(|i| self.concepts[i].display)
    }

    pub(crate) fn concept_at(&self, position: usize) -> &'static Concept {
        let concepts: &'static [Concept] = self.concepts;
        &concepts[position]
    }

    pub(crate) fn locate(&self, input: &str, kind: LookupKind) -> Result<usize, UnknownCode> {
        let found = match kind {
            LookupKind::Code => self.position(input),
            LookupKind::SymbolicName => self.position_of_name(input),
        };
        found.ok_or_else(|| UnknownCode::new(self.url, input, kind))
    }

    fn index(&self) -> &HashMap<&'static str, usize> {
        self.index.get_or_init(|| {
            tracing::debug!(
                system = self.url,
                concepts = self.concepts.len(),
                "building code index"
            );
            self.concepts
                .iter()
                .enumerate()
                .map(|(i, c)| (c.code, i))
                .collect()
        })
    }
}

impl From<LookupPolicy> for LookupKind {
    fn from(policy: LookupPolicy) -> Self {
        match policy {
            LookupPolicy::Code => LookupKind::Code,
            LookupPolicy::SymbolicName => LookupKind::SymbolicName,
        }
    }
}

impl fmt::Debug for CodeSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodeSystem")
            .field("name", &self.name)
            .field("url", &self.url)
            .field("version", &self.version)
            .field("policy", &self.policy)
            .field("concepts", &self.concepts.len())
            .finish_non_exhaustive()
    }
}

impl fmt::Display for CodeSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.url)
    }
}

/// Typed view of a code system: a fieldless enum whose variants are the
/// system's concepts, in declaration order.
///
/// Implemented by the [`code_system!`](crate::code_system) macro; not meant
/// to be implemented by hand.
pub trait CodeEnum: Copy + Eq + Hash + fmt::Debug + 'static {
    /// Every variant, in the same order as [`CodeSystem::concepts`].
    const ALL: &'static [Self];

    fn system() -> &'static CodeSystem;

    /// Position of this variant in the system's concept table.
    fn ordinal(self) -> usize;

    fn concept(self) -> &'static Concept {
        &Self::system().concepts()[self.ordinal()]
    }

    /// Wire-string of this value.
    fn as_code(self) -> &'static str {
        self.concept().code
    }

    /// Symbolic constant name of this value.
    fn name(self) -> &'static str {
        self.concept().name
    }

    fn display(self) -> Option<&'static str> {
        self.concept().display
    }

    fn from_code(code: &str) -> Result<Self, UnknownCode> {
        Self::system()
            .locate(code, LookupKind::Code)
            .map(|i| Self::ALL[i])
    }

    fn from_symbolic_name(name: &str) -> Result<Self, UnknownCode> {
        Self::system()
            .locate(name, LookupKind::SymbolicName)
            .map(|i| Self::ALL[i])
    }

    /// Parse using the system's [`LookupPolicy`]; this is what `FromStr` does.
    fn resolve(input: &str) -> Result<Self, UnknownCode> {
        let system = Self::system();
        system
            .locate(input, system.policy().into())
            .map(|i| Self::ALL[i])
    }
}
