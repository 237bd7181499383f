#![forbid(unsafe_code)]

//! Fixtures and helpers shared by the end-to-end suites in `tests/`.
//!
//! - [`fixtures`]: a small catalog set exercising every model feature
//!   (categories, untitled options, missing defaults, partial translations).
//! - [`HostProfile`]: the host answers the suites sweep over.
//! - [`E2eLogger`]: optional JSONL trace of each case, enabled by
//!   `COREOPTS_E2E_LOG`.

pub mod fixtures;
mod jsonl;

pub use jsonl::E2eLogger;

use coreopts_core::testing::ScriptedHost;
use coreopts_core::{CoreOptions, Language, NegotiationOutcome, OptionsConfig};

/// One combination of host answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostProfile {
    pub version: Option<u32>,
    pub language: Option<u32>,
}

impl HostProfile {
    pub const fn new(version: Option<u32>, language: Option<u32>) -> Self {
        Self { version, language }
    }

    /// A fresh scripted host answering as this profile.
    pub fn host(&self) -> ScriptedHost {
        ScriptedHost::new()
            .with_version(self.version)
            .with_language(self.language)
    }

    /// Short label for logs and assertion messages.
    pub fn label(&self) -> String {
        let version = self.version.map_or_else(|| "none".to_owned(), |v| v.to_string());
        let language = match self.language {
            None => "none".to_owned(),
            Some(raw) => Language::from_raw(raw).map_or_else(|| format!("#{raw}"), |l| l.tag().to_owned()),
        };
        format!("v={version},lang={language}")
    }
}

/// Every version answer crossed with a spread of language answers.
pub fn host_matrix() -> Vec<HostProfile> {
    const VERSIONS: [Option<u32>; 5] = [None, Some(0), Some(1), Some(2), Some(9)];
    let languages = [
        None,
        Some(Language::English.id()),
        Some(Language::French.id()),
        Some(Language::German.id()),
        Some(Language::Japanese.id()),
        Some(Language::COUNT as u32),
        Some(u32::MAX),
    ];
    VERSIONS
        .iter()
        .flat_map(|&version| {
            languages
                .iter()
                .map(move |&language| HostProfile::new(version, language))
        })
        .collect()
}

/// Run one negotiation against `profile`, returning the outcome and the host.
pub fn negotiate_once(options: &CoreOptions<'_>, profile: HostProfile) -> (NegotiationOutcome, ScriptedHost) {
    let mut host = profile.host();
    let outcome = options.set_core_options(&mut host);
    (outcome, host)
}

/// Buffers an unconstrained negotiation acquires for `profile`.
pub fn acquisitions(options: &CoreOptions<'_>, profile: HostProfile) -> usize {
    let unlimited = CoreOptions::new(
        options.catalogs(),
        options.config().allocation_limit(None),
    );
    match unlimited {
        Ok(options) => negotiate_once(&options, profile).0.lifecycle.acquired,
        Err(_) => 0,
    }
}

/// `config` with a different allocation limit, for limit sweeps.
pub fn with_limit(options: &CoreOptions<'_>, limit: usize) -> OptionsConfig {
    options.config().allocation_limit(Some(limit))
}
