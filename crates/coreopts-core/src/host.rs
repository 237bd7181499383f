//! Host environment interface.
//!
//! The host answers two queries and accepts one registration per session.
//! Implementations range from the libretro environment callback (in the FFI
//! crate) to scripted fakes in tests.

use crate::lifecycle::{AllocError, Lifecycle};
use crate::model::{Catalog, Text};
use crate::translate::{DefinitionV1, Variable};
use crate::version::NegotiatedVersion;

/// One registration call, shaped for the negotiated schema.
///
/// Everything borrowed here lives until `register` returns and no longer.
#[derive(Debug, Clone, Copy)]
pub enum Registration<'r> {
    /// v0: `key -> "text; default|other|..."` pairs.
    Variables(&'r [Variable<'r>]),
    /// v1 without localization.
    OptionsV1(&'r [DefinitionV1<'r, 'r>]),
    /// v1 with an optional translated array.
    OptionsV1Intl {
        us: &'r [DefinitionV1<'r, 'r>],
        local: Option<&'r [DefinitionV1<'r, 'r>]>,
    },
    /// v2 without localization.
    OptionsV2(&'r Catalog<'r>),
    /// v2 with an optional translated catalog.
    OptionsV2Intl {
        us: &'r Catalog<'r>,
        local: Option<&'r Catalog<'r>>,
    },
}

impl Registration<'_> {
    /// Schema this registration targets.
    #[must_use]
    pub const fn version(&self) -> NegotiatedVersion {
        match self {
            Self::Variables(_) => NegotiatedVersion::V0,
            Self::OptionsV1(_) | Self::OptionsV1Intl { .. } => NegotiatedVersion::V1,
            Self::OptionsV2(_) | Self::OptionsV2Intl { .. } => NegotiatedVersion::V2,
        }
    }

    /// Whether the registration uses the localized form (even with no
    /// translation attached).
    #[must_use]
    pub const fn is_localized(&self) -> bool {
        matches!(self, Self::OptionsV1Intl { .. } | Self::OptionsV2Intl { .. })
    }

    /// Short name for logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Variables(_) => "variables",
            Self::OptionsV1(_) => "options_v1",
            Self::OptionsV1Intl { .. } => "options_v1_intl",
            Self::OptionsV2(_) => "options_v2",
            Self::OptionsV2Intl { .. } => "options_v2_intl",
        }
    }

    /// Number of options registered in the base table.
    #[must_use]
    pub fn option_count(&self) -> usize {
        match self {
            Self::Variables(vars) => vars.len(),
            Self::OptionsV1(us) | Self::OptionsV1Intl { us, .. } => us.len(),
            Self::OptionsV2(us) | Self::OptionsV2Intl { us, .. } => us.len(),
        }
    }
}

/// The environment a core registers its options with.
pub trait HostEnvironment {
    /// Highest core-options schema the host supports, or `None` when it
    /// cannot say.
    fn core_options_version(&mut self) -> Option<u32>;

    /// The user's language id, or `None` when the host cannot say.
    fn language(&mut self) -> Option<u32>;

    /// Hand the options over.
    ///
    /// For v2 registrations the answer is whether the host groups options by
    /// category; for older schemas it is whether the host accepted the call.
    ///
    /// Any table the host side needs in its own layout is acquired from
    /// `lifecycle`, so it is counted and released with the session's other
    /// buffers.
    ///
    /// # Errors
    ///
    /// Returns the [`AllocError`] of a table that could not be acquired; the
    /// host was not called.
    fn register(
        &mut self,
        lifecycle: &Lifecycle,
        registration: &Registration<'_>,
    ) -> Result<bool, AllocError>;
}

impl<H: HostEnvironment + ?Sized> HostEnvironment for &mut H {
    fn core_options_version(&mut self) -> Option<u32> {
        (**self).core_options_version()
    }

    fn language(&mut self) -> Option<u32> {
        (**self).language()
    }

    fn register(
        &mut self,
        lifecycle: &Lifecycle,
        registration: &Registration<'_>,
    ) -> Result<bool, AllocError> {
        (**self).register(lifecycle, registration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Choice, OptionDefinition};

    const ONOFF: &[Choice<'static>] = &[Choice::new(c"enabled"), Choice::new(c"disabled")];
    const DEFS: &[OptionDefinition<'static>] = &[
        OptionDefinition::new(c"a", c"A", ONOFF, c"enabled"),
        OptionDefinition::new(c"b", c"B", ONOFF, c"disabled"),
    ];
    static CATALOG: Catalog<'static> = Catalog::new(&[], DEFS);

    #[test]
    fn registration_shape_queries() {
        let v2 = Registration::OptionsV2Intl {
            us: &CATALOG,
            local: None,
        };
        assert_eq!(v2.version(), NegotiatedVersion::V2);
        assert!(v2.is_localized());
        assert_eq!(v2.kind(), "options_v2_intl");
        assert_eq!(v2.option_count(), 2);

        let vars = [Variable {
            key: Text::new(c"a"),
            value: Text::new(c"A; enabled|disabled"),
        }];
        let v0 = Registration::Variables(&vars);
        assert_eq!(v0.version(), NegotiatedVersion::V0);
        assert!(!v0.is_localized());
        assert_eq!(v0.option_count(), 1);
    }
}
