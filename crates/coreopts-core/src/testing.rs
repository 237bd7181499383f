//! Scripted host for tests.
//!
//! [`ScriptedHost`] answers queries from a fixed script and keeps an owned
//! snapshot of every registration, so assertions can run after the
//! session's buffers are gone.

use crate::host::{HostEnvironment, Registration};
use crate::lifecycle::{AllocError, Lifecycle};
use crate::model::Catalog;
use crate::translate::DefinitionV1;

/// Owned copy of a v1 record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedDefinition {
    pub key: String,
    pub desc: Option<String>,
    pub info: Option<String>,
    pub default_value: Option<String>,
    /// `(value, label)` pairs in registration order.
    pub values: Vec<(String, Option<String>)>,
}

impl From<&DefinitionV1<'_, '_>> for RecordedDefinition {
    fn from(def: &DefinitionV1<'_, '_>) -> Self {
        Self {
            key: def.key.into(),
            desc: def.desc.map(String::from),
            info: def.info.map(String::from),
            default_value: def.default_value.map(String::from),
            values: def
                .values
                .iter()
                .map(|c| (c.value.into(), c.label.map(String::from)))
                .collect(),
        }
    }
}

/// A catalog handed over by reference: its address and keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCatalog {
    pub address: usize,
    pub keys: Vec<String>,
}

impl RecordedCatalog {
    fn new(catalog: &Catalog<'_>) -> Self {
        Self {
            address: std::ptr::from_ref(catalog).addr(),
            keys: catalog.keys().map(str::to_owned).collect(),
        }
    }

    /// Whether the host was handed `catalog` itself rather than a copy.
    #[must_use]
    pub fn is(&self, catalog: &Catalog<'_>) -> bool {
        self.address == std::ptr::from_ref(catalog).addr()
    }
}

/// Owned snapshot of one [`Registration`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedRegistration {
    /// `(key, descriptor)` pairs.
    Variables(Vec<(String, String)>),
    OptionsV1 {
        us: Vec<RecordedDefinition>,
        local: Option<Vec<RecordedDefinition>>,
        localized: bool,
    },
    OptionsV2 {
        us: RecordedCatalog,
        local: Option<RecordedCatalog>,
        localized: bool,
    },
}

impl From<&Registration<'_>> for RecordedRegistration {
    fn from(registration: &Registration<'_>) -> Self {
        let flat = |defs: &[DefinitionV1<'_, '_>]| -> Vec<RecordedDefinition> {
            defs.iter().map(RecordedDefinition::from).collect()
        };
        match *registration {
            Registration::Variables(vars) => Self::Variables(
                vars.iter()
                    .map(|v| (v.key.into(), v.value.into()))
                    .collect(),
            ),
            Registration::OptionsV1(us) => Self::OptionsV1 {
                us: flat(us),
                local: None,
                localized: false,
            },
            Registration::OptionsV1Intl { us, local } => Self::OptionsV1 {
                us: flat(us),
                local: local.map(flat),
                localized: true,
            },
            Registration::OptionsV2(us) => Self::OptionsV2 {
                us: RecordedCatalog::new(us),
                local: None,
                localized: false,
            },
            Registration::OptionsV2Intl { us, local } => Self::OptionsV2 {
                us: RecordedCatalog::new(us),
                local: local.map(RecordedCatalog::new),
                localized: true,
            },
        }
    }
}

/// A host that answers from a script and records what it is given.
#[derive(Debug, Clone)]
pub struct ScriptedHost {
    version: Option<u32>,
    language: Option<u32>,
    answer: bool,
    version_queries: usize,
    language_queries: usize,
    registrations: Vec<RecordedRegistration>,
}

impl Default for ScriptedHost {
    fn default() -> Self {
        Self {
            version: None,
            language: None,
            answer: true,
            version_queries: 0,
            language_queries: 0,
            registrations: Vec::new(),
        }
    }
}

impl ScriptedHost {
    /// A host that knows no version or language and accepts registrations.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer to the version query.
    #[must_use]
    pub fn with_version(mut self, version: Option<u32>) -> Self {
        self.version = version;
        self
    }

    /// Answer to the language query.
    #[must_use]
    pub fn with_language(mut self, language: Option<u32>) -> Self {
        self.language = language;
        self
    }

    /// Answer to every registration.
    #[must_use]
    pub fn with_answer(mut self, answer: bool) -> Self {
        self.answer = answer;
        self
    }

    #[must_use]
    pub fn version_queries(&self) -> usize {
        self.version_queries
    }

    #[must_use]
    pub fn language_queries(&self) -> usize {
        self.language_queries
    }

    /// Every registration received, oldest first.
    #[must_use]
    pub fn registrations(&self) -> &[RecordedRegistration] {
        &self.registrations
    }

    #[must_use]
    pub fn last_registration(&self) -> Option<&RecordedRegistration> {
        self.registrations.last()
    }
}

impl HostEnvironment for ScriptedHost {
    fn core_options_version(&mut self) -> Option<u32> {
        self.version_queries += 1;
        self.version
    }

    fn language(&mut self) -> Option<u32> {
        self.language_queries += 1;
        self.language
    }

    fn register(
        &mut self,
        _lifecycle: &Lifecycle,
        registration: &Registration<'_>,
    ) -> Result<bool, AllocError> {
        self.registrations.push(registration.into());
        Ok(self.answer)
    }
}
