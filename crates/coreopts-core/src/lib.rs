#![forbid(unsafe_code)]

//! Core-option negotiation and schema translation.
//!
//! # Role
//! A core describes its user-adjustable settings once, as a [`Catalog`] per
//! language. Hosts speak one of three incompatible core-options schemas;
//! this crate asks the host which one, picks the user's translation, and
//! registers the catalog in the shape the host expects.
//!
//! # Primary responsibilities
//! - **Model**: [`Choice`], [`OptionDefinition`], [`Category`], [`Catalog`],
//!   all spelled in [`Text`] so the host reads them in place.
//! - **Languages**: [`CatalogSet`] and [`LanguageResolver`] with per-key fallback.
//! - **Validation**: [`CatalogError`] checks run when a [`CoreOptions`] is built.
//! - **Negotiation**: [`negotiate`] maps the host's answer to a [`NegotiatedVersion`].
//! - **Translation**: v1 records and v0 descriptors in [`translate`].
//! - **Lifecycle**: every translation buffer is tracked and released per call.
//!
//! # Example
//!
//! ```
//! use coreopts_core::{
//!     AllocError, Catalog, CatalogSet, Choice, CoreOptions, HostEnvironment, Lifecycle,
//!     OptionDefinition, OptionsConfig, Registration,
//! };
//!
//! const ONOFF: &[Choice<'static>] = &[Choice::new(c"enabled"), Choice::new(c"disabled")];
//! const DEFS: &[OptionDefinition<'static>] =
//!     &[OptionDefinition::new(c"turbo", c"Turbo", ONOFF, c"disabled")];
//! static BASE: Catalog<'static> = Catalog::new(&[], DEFS);
//! static SET: CatalogSet<'static> = CatalogSet::new(&BASE);
//!
//! struct LegacyHost(Vec<String>);
//!
//! impl HostEnvironment for LegacyHost {
//!     fn core_options_version(&mut self) -> Option<u32> {
//!         None
//!     }
//!     fn language(&mut self) -> Option<u32> {
//!         None
//!     }
//!     fn register(
//!         &mut self,
//!         _lifecycle: &Lifecycle,
//!         registration: &Registration<'_>,
//!     ) -> Result<bool, AllocError> {
//!         if let Registration::Variables(vars) = registration {
//!             self.0.extend(vars.iter().map(|v| format!("{}={}", v.key, v.value)));
//!         }
//!         Ok(true)
//!     }
//! }
//!
//! let options = CoreOptions::new(&SET, OptionsConfig::default()).unwrap();
//! let mut host = LegacyHost(Vec::new());
//! let outcome = options.set_core_options(&mut host);
//! assert!(outcome.registered());
//! assert!(outcome.lifecycle.is_balanced());
//! assert_eq!(host.0, ["turbo=Turbo; disabled|enabled"]);
//! ```

pub mod config;
pub mod host;
pub mod language;
pub mod lifecycle;
#[cfg(feature = "tracing-json")]
pub mod logging;
pub mod model;
pub mod session;
#[cfg(any(test, feature = "test-helpers"))]
pub mod testing;
pub mod translate;
pub mod validate;
pub mod version;

pub use config::OptionsConfig;
pub use host::{HostEnvironment, Registration};
pub use language::{CatalogSet, Language, LanguageCoverage, LanguageResolver, ResolvedDefinition};
pub use lifecycle::{AllocError, Lifecycle, LifecycleReport, Tracked, scope};
pub use model::{Catalog, Category, Choice, OptionDefinition, Text};
pub use session::{CoreOptions, NegotiationOutcome, RegistrationStatus};
pub use translate::{DefinitionV1, Stage, TranslateError, Variable};
pub use validate::{CatalogError, MAX_CHOICES, ValidationMode};
pub use version::{NegotiatedVersion, negotiate};
