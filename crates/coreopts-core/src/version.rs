//! Schema-version negotiation.

use std::fmt;

use tracing::debug;

use crate::host::HostEnvironment;

/// Core-options schema a host accepts.
///
/// Every raw answer maps to exactly one version: no answer is `V0`, and
/// anything past 2 is served the newest schema this crate knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NegotiatedVersion {
    /// Flat `key -> "text; a|b|c"` variables.
    V0,
    /// Definition records with per-value labels, optionally localized.
    V1,
    /// Categorized definitions handed over as-is, optionally localized.
    V2,
}

impl NegotiatedVersion {
    /// Map the host's answer to the capability query.
    #[must_use]
    pub const fn from_raw(raw: Option<u32>) -> Self {
        match raw {
            None | Some(0) => Self::V0,
            Some(1) => Self::V1,
            Some(_) => Self::V2,
        }
    }

    /// Schema number.
    #[must_use]
    pub const fn number(self) -> u32 {
        match self {
            Self::V0 => 0,
            Self::V1 => 1,
            Self::V2 => 2,
        }
    }

    /// Whether the schema can carry a translated catalog.
    #[must_use]
    pub const fn supports_localization(self) -> bool {
        !matches!(self, Self::V0)
    }

    /// Whether the schema can carry categories.
    #[must_use]
    pub const fn supports_categories(self) -> bool {
        matches!(self, Self::V2)
    }
}

impl fmt::Display for NegotiatedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.number())
    }
}

/// Ask the host which schema it speaks.
///
/// Never fails: a host that cannot answer is treated as a v0 host.
pub fn negotiate<H: HostEnvironment + ?Sized>(host: &mut H) -> NegotiatedVersion {
    let raw = host.core_options_version();
    let version = NegotiatedVersion::from_raw(raw);
    debug!(raw = ?raw, %version, "negotiated core options version");
    version
}
