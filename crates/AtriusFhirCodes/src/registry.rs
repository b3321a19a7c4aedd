//! Lookup of code systems by canonical URL, id or name.
//!
//! The process-wide [`registry()`] holds every built-in system and is built
//! once on first access. Callers that need additional systems build their
//! own [`Registry`] with [`Registry::builtin`] and [`Registry::register`].

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::code_system::{CodeSystem, Concept};
use crate::error::RegistryError;
use crate::systems;

static BUILTIN: Lazy<Registry> = Lazy::new(Registry::builtin);

/// The registry of built-in code systems.
pub fn registry() -> &'static Registry {
    &BUILTIN
}

/// Code systems indexed by canonical URL, with secondary id and name keys.
#[derive(Debug, Default)]
pub struct Registry {
    by_url: HashMap<&'static str, &'static CodeSystem>,
    by_id: HashMap<&'static str, &'static str>,
    by_name: HashMap<&'static str, &'static str>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every system in [`systems::BUILTIN`].
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for system in systems::BUILTIN {
            registry.register(*system);
        }
        tracing::debug!(systems = registry.len(), "built-in code system registry ready");
        registry
    }

    /// Add a system, returning the one previously registered under its URL.
    pub fn register(&mut self, system: &'static CodeSystem) -> Option<&'static CodeSystem> {
        let displaced = self.by_url.insert(system.url(), system);
        if let Some(previous) = displaced {
            tracing::warn!(
                url = system.url(),
                previous = previous.name(),
                replacement = system.name(),
                "code system URL registered twice"
            );
            self.by_id.retain(|_, url| *url != previous.url());
            self.by_name.retain(|_, url| *url != previous.url());
        }
        for (key, previous) in [
            ("id", self.by_id.insert(system.id(), system.url())),
            ("name", self.by_name.insert(system.name(), system.url())),
        ] {
            if let Some(previous) = previous.filter(|url| *url != system.url()) {
                tracing::warn!(
                    key,
                    previous,
                    replacement = system.url(),
                    "code system {key} now resolves to a different URL"
                );
            }
        }
        displaced
    }

    pub fn by_url(&self, url: &str) -> Option<&'static CodeSystem> {
        self.by_url.get(url).copied()
    }

    /// Find a system by canonical URL, then FHIR id, then name.
    pub fn get(&self, key: &str) -> Option<&'static CodeSystem> {
        self.by_url(key)
            .or_else(|| self.by_id.get(key).and_then(|url| self.by_url(url)))
            .or_else(|| self.by_name.get(key).and_then(|url| self.by_url(url)))
    }

    /// Resolve `code` in the system identified by `key`.
    pub fn lookup(&self, key: &str, code: &str) -> Result<&'static Concept, RegistryError> {
        let system = self
            .get(key)
            .ok_or_else(|| RegistryError::UnknownSystem(key.to_string()))?;
        Ok(system.lookup(code)?)
    }

    /// Every registered system, ordered by name and then URL.
    ///
    /// Systems whose id or name was taken over by a later registration are
    /// still listed; they stay reachable by URL.
    pub fn iter(&self) -> impl Iterator<Item = &'static CodeSystem> + '_ {
        let mut systems: Vec<_> = self.by_url.values().copied().collect();
        systems.sort_by_key(|system| (system.name(), system.url()));
        systems.into_iter()
    }

    pub fn len(&self) -> usize {
        self.by_url.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_url.is_empty()
    }
}
