#![forbid(unsafe_code)]

//! Core options of the Handy Lynx core.
//!
//! [`CATALOGS`] is the process-wide language table: the English base
//! catalog plus the translations compiled in with the `langextra` feature.
//! Hand it to [`coreopts_core::CoreOptions`] to register the options.

pub mod intl;
pub mod us;

use coreopts_core::{CatalogError, CatalogSet, CoreOptions, OptionsConfig};
#[cfg(feature = "langextra")]
use coreopts_core::Language;

/// Option keys as the core reads them back from the host.
pub mod keys {
    use std::ffi::CStr;

    pub const REFRESH_RATE: &CStr = c"handy_refresh_rate";
    pub const ROTATION: &CStr = c"handy_rot";
    /// Present only with the `xrgb8888` feature.
    pub const COLOR_DEPTH: &CStr = c"handy_gfx_colors";
    pub const FRAMESKIP: &CStr = c"handy_frameskip";
    pub const FRAMESKIP_THRESHOLD: &CStr = c"handy_frameskip_threshold";
    pub const CROP_SIDE: &CStr = c"handy_crop_side";
    pub const CROP_TOP: &CStr = c"handy_crop_top";
    pub const OVERCLOCK: &CStr = c"handy_overclock";
    pub const LCD_GHOSTING: &CStr = c"handy_lcd_ghosting";
    pub const MASTER_VOLUME: &CStr = c"handy_master_volume";
    pub const LOWPASS_FILTER: &CStr = c"handy_lowpass_filter";

    /// `key` as the `&str` catalog lookups take.
    ///
    /// # Panics
    ///
    /// If `key` is not UTF-8; every key above is ASCII.
    #[must_use]
    pub const fn name(key: &'static CStr) -> &'static str {
        coreopts_core::Text::new(key).as_str()
    }
}

/// Every compiled-in catalog.
#[cfg(feature = "langextra")]
pub static CATALOGS: CatalogSet<'static> = CatalogSet::new(&us::US)
    .with_translation(Language::French, &intl::FR)
    .with_translation(Language::Spanish, &intl::ES)
    .with_translation(Language::German, &intl::DE);

/// Every compiled-in catalog.
#[cfg(not(feature = "langextra"))]
pub static CATALOGS: CatalogSet<'static> = CatalogSet::new(&us::US);

/// [`CATALOGS`] ready to register.
///
/// # Errors
///
/// Only in strict mode, and only if the compiled-in tables are defective.
pub fn core_options(config: OptionsConfig) -> Result<CoreOptions<'static>, CatalogError> {
    CoreOptions::new(&CATALOGS, config)
}
