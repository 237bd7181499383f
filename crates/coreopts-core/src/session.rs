//! One negotiation from capability query to registration.
//!
//! # Flow
//!
//! 1. Ask the host for its schema version (no answer means v0).
//! 2. For v1/v2 with localization on, ask for the user's language and pick
//!    the translation, if one is registered.
//! 3. Translate for the negotiated schema inside a [`scope`], register, and
//!    let the scope release every buffer before returning.
//!
//! Nothing escapes as an error: the caller always gets a
//! [`NegotiationOutcome`] describing what happened.

use tracing::{debug, debug_span, info, warn};

use crate::config::OptionsConfig;
use crate::host::{HostEnvironment, Registration};
use crate::language::{CatalogSet, Language, LanguageResolver};
use crate::lifecycle::{Lifecycle, LifecycleReport, scope};
use crate::model::Catalog;
use crate::translate::{Stage, TranslateError, descriptors_v0, flatten_v1, variables_v0};
use crate::validate::{CatalogError, ValidationMode, validate_set};
use crate::version::{NegotiatedVersion, negotiate};

/// What became of the registration call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationStatus {
    /// The host was called and gave `answer`.
    Registered { answer: bool },
    /// Translation failed before the host was called.
    Skipped(TranslateError),
}

/// Result of [`CoreOptions::set_core_options`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NegotiationOutcome {
    /// Schema the host was served.
    pub version: NegotiatedVersion,
    /// Language the host reported, if it was asked and knew.
    pub language: Option<Language>,
    /// Whether a translated catalog accompanied the base catalog.
    pub localized: bool,
    /// Registration result.
    pub status: RegistrationStatus,
    /// Whether the host groups options by category (v2 only).
    pub categories_supported: bool,
    /// Buffer ledger for the call.
    pub lifecycle: LifecycleReport,
}

impl NegotiationOutcome {
    /// Whether the host received a registration.
    #[must_use]
    pub const fn registered(&self) -> bool {
        matches!(self.status, RegistrationStatus::Registered { .. })
    }
}

/// A validated catalog set plus the configuration to serve it with.
#[derive(Debug, Clone, Copy)]
pub struct CoreOptions<'a> {
    catalogs: &'a CatalogSet<'a>,
    config: OptionsConfig,
}

impl<'a> CoreOptions<'a> {
    /// Check `catalogs` according to `config.validation`.
    ///
    /// # Errors
    ///
    /// In strict mode, the first defect found. Lenient mode logs the defect
    /// and accepts the set.
    pub fn new(catalogs: &'a CatalogSet<'a>, config: OptionsConfig) -> Result<Self, CatalogError> {
        match (validate_set(catalogs), config.validation) {
            (Ok(()), _) => {}
            (Err(err), ValidationMode::Strict) => return Err(err),
            (Err(err), ValidationMode::Lenient) => {
                warn!(error = %err, "accepting defective catalog in lenient mode");
            }
        }
        Ok(Self { catalogs, config })
    }

    /// The catalogs being served.
    #[must_use]
    pub const fn catalogs(&self) -> &'a CatalogSet<'a> {
        self.catalogs
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &OptionsConfig {
        &self.config
    }

    /// Language lookups over the served catalogs.
    #[must_use]
    pub const fn resolver(&self) -> LanguageResolver<'a> {
        LanguageResolver::new(self.catalogs)
    }

    /// Negotiate with `host` and register the options once.
    pub fn set_core_options<H: HostEnvironment + ?Sized>(&self, host: &mut H) -> NegotiationOutcome {
        let span = debug_span!("core_options");
        let _guard = span.enter();

        let version = negotiate(host);
        let language = if self.config.localization_enabled() && version.supports_localization() {
            query_language(host)
        } else {
            None
        };
        let local = self.resolver().localized(language);

        let (result, lifecycle) = scope(self.config.allocation_limit, |lc| match version {
            NegotiatedVersion::V2 => self.register_v2(lc, host, local),
            NegotiatedVersion::V1 => self.register_v1(lc, host, local),
            NegotiatedVersion::V0 => self.register_v0(lc, host),
        });

        let status = match result {
            Ok(answer) => {
                info!(%version, answer, localized = local.is_some(), "core options registered");
                RegistrationStatus::Registered { answer }
            }
            Err(err) => {
                warn!(error = %err, cause = %err.source, "core options not registered");
                RegistrationStatus::Skipped(err)
            }
        };
        NegotiationOutcome {
            version,
            language,
            localized: local.is_some(),
            status,
            categories_supported: version.supports_categories()
                && matches!(status, RegistrationStatus::Registered { answer: true }),
            lifecycle,
        }
    }

    fn register_v2<H: HostEnvironment + ?Sized>(
        &self,
        lifecycle: &Lifecycle,
        host: &mut H,
        local: Option<&Catalog<'_>>,
    ) -> Result<bool, TranslateError> {
        let us = self.catalogs.base();
        let registration = if self.config.localization_enabled() {
            Registration::OptionsV2Intl { us, local }
        } else {
            Registration::OptionsV2(us)
        };
        hand_over(host, lifecycle, &registration)
    }

    fn register_v1<H: HostEnvironment + ?Sized>(
        &self,
        lifecycle: &Lifecycle,
        host: &mut H,
        local: Option<&Catalog<'_>>,
    ) -> Result<bool, TranslateError> {
        let us = flatten_v1(lifecycle, self.catalogs.base())?;
        let local = local.map(|catalog| flatten_v1(lifecycle, catalog)).transpose()?;
        let registration = if self.config.localization_enabled() {
            Registration::OptionsV1Intl {
                us: us.as_slice(),
                local: local.as_ref().map(|l| l.as_slice()),
            }
        } else {
            Registration::OptionsV1(us.as_slice())
        };
        debug!(
            local_options = local.as_ref().map_or(0, |l| l.len()),
            "flattened catalog"
        );
        hand_over(host, lifecycle, &registration)
    }

    fn register_v0<H: HostEnvironment + ?Sized>(
        &self,
        lifecycle: &Lifecycle,
        host: &mut H,
    ) -> Result<bool, TranslateError> {
        let base = self.catalogs.base();
        let descriptors = descriptors_v0(lifecycle, base)?;
        let variables = variables_v0(lifecycle, base, &descriptors)?;
        debug!(
            variables = variables.len(),
            bytes = variables.iter().map(|v| v.value.len()).sum::<usize>(),
            "built descriptors"
        );
        hand_over(host, lifecycle, &Registration::Variables(variables.as_slice()))
    }
}

fn hand_over<H: HostEnvironment + ?Sized>(
    host: &mut H,
    lifecycle: &Lifecycle,
    registration: &Registration<'_>,
) -> Result<bool, TranslateError> {
    debug!(
        version = %registration.version(),
        kind = registration.kind(),
        localized = registration.is_localized(),
        options = registration.option_count(),
        "registering"
    );
    host.register(lifecycle, registration)
        .map_err(|source| TranslateError {
            version: registration.version(),
            stage: Stage::HostTable,
            source,
        })
}

fn query_language<H: HostEnvironment + ?Sized>(host: &mut H) -> Option<Language> {
    let raw = host.language();
    let language = raw.and_then(Language::from_raw);
    debug!(raw = ?raw, language = language.map(Language::tag), "resolved host language");
    language
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::AllocError;
    use crate::model::{Category, Choice, OptionDefinition};
    use crate::testing::{RecordedRegistration, ScriptedHost};

    const ONOFF: &[Choice<'static>] = &[
        Choice::labeled(c"enabled", c"On"),
        Choice::labeled(c"disabled", c"Off"),
    ];
    const ONOFF_FR: &[Choice<'static>] = &[Choice::labeled(c"enabled", c"Oui")];
    const DEFS: &[OptionDefinition<'static>] = &[
        OptionDefinition::new(c"blend", c"Frame Blending", ONOFF, c"disabled").in_category(c"video"),
        OptionDefinition::new(c"turbo", c"Turbo", ONOFF, c"enabled"),
    ];
    const DEFS_FR: &[OptionDefinition<'static>] =
        &[OptionDefinition::bare(c"blend", ONOFF_FR).with_display_name(c"Fusion")];
    const CATS: &[Category<'static>] = &[Category::new(c"video", c"Video")];
    static BASE: Catalog<'static> = Catalog::new(CATS, DEFS);
    static FR: Catalog<'static> = Catalog::new(&[], DEFS_FR);
    static SET: CatalogSet<'static> = CatalogSet::new(&BASE).with_translation(Language::French, &FR);

    const BAD_DEFS: &[OptionDefinition<'static>] =
        &[OptionDefinition::new(c"blend", c"Frame Blending", ONOFF, c"sometimes")];
    static BAD: Catalog<'static> = Catalog::new(&[], BAD_DEFS);
    static BAD_SET: CatalogSet<'static> = CatalogSet::new(&BAD);

    fn options(localization: bool) -> CoreOptions<'static> {
        CoreOptions::new(&SET, OptionsConfig::new().localization(localization)).unwrap()
    }

    #[test]
    fn strict_rejects_and_lenient_accepts() {
        let err = CoreOptions::new(&BAD_SET, OptionsConfig::new()).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownDefault { .. }));
        let lenient = OptionsConfig::new().validation(ValidationMode::Lenient);
        assert!(CoreOptions::new(&BAD_SET, lenient).is_ok());
    }

    #[test]
    #[cfg(feature = "langextra")]
    fn v2_passes_canonical_catalogs() {
        let mut host = ScriptedHost::new()
            .with_version(Some(2))
            .with_language(Some(Language::French.id()));
        let outcome = options(true).set_core_options(&mut host);

        assert_eq!(outcome.version, NegotiatedVersion::V2);
        assert_eq!(outcome.language, Some(Language::French));
        assert!(outcome.localized);
        assert!(outcome.categories_supported);
        assert_eq!(outcome.lifecycle, LifecycleReport::default());
        match host.last_registration() {
            Some(RecordedRegistration::OptionsV2 { us, local, localized }) => {
                assert!(*localized);
                assert!(us.is(&BASE));
                assert!(local.as_ref().is_some_and(|l| l.is(&FR)));
            }
            other => panic!("unexpected registration {other:?}"),
        }
    }

    #[test]
    fn v2_category_answer_comes_from_host() {
        let mut host = ScriptedHost::new().with_version(Some(3)).with_answer(false);
        let outcome = options(true).set_core_options(&mut host);
        assert!(outcome.registered());
        assert!(!outcome.categories_supported);
    }

    #[test]
    fn v1_never_reports_categories() {
        let mut host = ScriptedHost::new().with_version(Some(1));
        let outcome = options(true).set_core_options(&mut host);
        assert_eq!(outcome.status, RegistrationStatus::Registered { answer: true });
        assert!(!outcome.categories_supported);
        // base table + one value array per option
        assert_eq!(outcome.lifecycle.acquired, 3);
        assert!(outcome.lifecycle.is_balanced());
    }

    #[test]
    #[cfg(feature = "langextra")]
    fn v1_with_translation_flattens_both() {
        let mut host = ScriptedHost::new()
            .with_version(Some(1))
            .with_language(Some(Language::French.id()));
        let outcome = options(true).set_core_options(&mut host);
        assert_eq!(outcome.lifecycle.acquired, 5);
        match host.last_registration() {
            Some(RecordedRegistration::OptionsV1 { us, local, localized }) => {
                assert!(*localized);
                assert_eq!(us.len(), 2);
                let local = local.as_ref().unwrap();
                assert_eq!(local[0].desc.as_deref(), Some("Fusion"));
            }
            other => panic!("unexpected registration {other:?}"),
        }
    }

    #[test]
    fn v0_never_asks_for_language() {
        let mut host = ScriptedHost::new()
            .with_version(None)
            .with_language(Some(Language::French.id()));
        let outcome = options(true).set_core_options(&mut host);
        assert_eq!(outcome.version, NegotiatedVersion::V0);
        assert_eq!(outcome.language, None);
        assert_eq!(host.language_queries(), 0);
        match host.last_registration() {
            Some(RecordedRegistration::Variables(vars)) => {
                assert_eq!(
                    vars[0],
                    ("blend".to_owned(), "Frame Blending; disabled|enabled".to_owned())
                );
            }
            other => panic!("unexpected registration {other:?}"),
        }
    }

    #[test]
    fn localization_off_skips_language_query() {
        let mut host = ScriptedHost::new()
            .with_version(Some(2))
            .with_language(Some(Language::French.id()));
        let outcome = options(false).set_core_options(&mut host);
        assert_eq!(host.language_queries(), 0);
        assert!(!outcome.localized);
        assert!(matches!(
            host.last_registration(),
            Some(RecordedRegistration::OptionsV2 { localized: false, local: None, .. })
        ));
    }

    #[test]
    fn allocation_failure_skips_registration() {
        let config = OptionsConfig::new().allocation_limit(Some(2));
        let options = CoreOptions::new(&SET, config).unwrap();
        let mut host = ScriptedHost::new().with_version(Some(1));
        let outcome = options.set_core_options(&mut host);

        assert!(!outcome.registered());
        match outcome.status {
            RegistrationStatus::Skipped(err) => assert_eq!(err.stage, Stage::ValueTable),
            RegistrationStatus::Registered { .. } => panic!("registered despite limit"),
        }
        assert!(host.registrations().is_empty());
        assert_eq!(outcome.lifecycle.acquired, 2);
        assert!(outcome.lifecycle.is_balanced());
    }

    /// Host that copies the base table into its own layout before answering.
    struct CopyingHost {
        version: Option<u32>,
        copied: usize,
    }

    impl HostEnvironment for CopyingHost {
        fn core_options_version(&mut self) -> Option<u32> {
            self.version
        }

        fn language(&mut self) -> Option<u32> {
            None
        }

        fn register(
            &mut self,
            lifecycle: &Lifecycle,
            registration: &Registration<'_>,
        ) -> Result<bool, AllocError> {
            let mut table = lifecycle.vec(registration.option_count() + 1)?;
            for i in 0..registration.option_count() {
                table.push(i)?;
            }
            self.copied = table.len();
            Ok(true)
        }
    }

    #[test]
    fn host_tables_are_counted() {
        let mut host = CopyingHost {
            version: Some(2),
            copied: 0,
        };
        let outcome = options(true).set_core_options(&mut host);
        assert!(outcome.registered());
        assert_eq!(host.copied, 2);
        assert_eq!(outcome.lifecycle.acquired, 1);
        assert!(outcome.lifecycle.is_balanced());
    }

    #[test]
    fn host_table_failure_skips_registration() {
        let config = OptionsConfig::new().allocation_limit(Some(0));
        let options = CoreOptions::new(&SET, config).unwrap();
        let mut host = CopyingHost {
            version: Some(2),
            copied: 0,
        };
        let outcome = options.set_core_options(&mut host);
        let RegistrationStatus::Skipped(err) = outcome.status else {
            panic!("registered despite limit");
        };
        assert_eq!(err.stage, Stage::HostTable);
        assert_eq!(err.version, NegotiatedVersion::V2);
        assert_eq!(err.to_string(), "v2 translation failed at host table");
        assert_eq!(host.copied, 0);
        assert!(!outcome.categories_supported);
        assert!(outcome.lifecycle.is_balanced());
    }

    #[test]
    #[cfg(not(feature = "langextra"))]
    fn localization_needs_langextra() {
        let mut config = OptionsConfig::new();
        config.localization = true;
        let options = CoreOptions::new(&SET, config).unwrap();
        let mut host = ScriptedHost::new()
            .with_version(Some(2))
            .with_language(Some(Language::French.id()));
        let outcome = options.set_core_options(&mut host);
        assert_eq!(host.language_queries(), 0);
        assert!(!outcome.localized);
        assert!(matches!(
            host.last_registration(),
            Some(RecordedRegistration::OptionsV2 { localized: false, local: None, .. })
        ));
    }
}
