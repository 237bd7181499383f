#![deny(unsafe_op_in_unsafe_fn)]

//! libretro entry point for the Handy core options.
//!
//! `libretro_set_core_options` is meant to be called from
//! `retro_set_environment`: it negotiates the core-options schema with the
//! frontend and registers the compiled-in catalog once.
//!
//! # Safety model
//! All `unsafe` lives in this crate: the callback wrapper ([`host`]) and the
//! exported functions below. Catalog handling stays in safe code.

pub mod abi;
pub mod host;
pub mod marshal;
pub mod mirror;

use std::panic::{AssertUnwindSafe, catch_unwind};

use coreopts_core::{NegotiationOutcome, OptionsConfig};
use tracing::warn;

pub use abi::RetroEnvironment;
pub use host::CallbackHost;

#[cfg(feature = "logging")]
fn init_logging() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        coreopts_core::logging::init_from_env();
    });
}

/// Register the compiled-in catalog through `environ` with `config`.
///
/// Returns `None` when the catalog fails validation under `config`.
///
/// # Safety
///
/// See [`CallbackHost::new`].
pub unsafe fn set_core_options_with(
    environ: RetroEnvironment,
    config: OptionsConfig,
) -> Option<NegotiationOutcome> {
    #[cfg(feature = "logging")]
    init_logging();

    let options = match coreopts_catalog::core_options(config) {
        Ok(options) => options,
        Err(err) => {
            warn!(error = %err, "core option catalog rejected");
            return None;
        }
    };
    // SAFETY: forwarded from the caller.
    let mut host = unsafe { CallbackHost::new(environ) };
    Some(options.set_core_options(&mut host))
}

/// Negotiate and register core options with the frontend.
///
/// Writes whether the frontend groups options by category to
/// `categories_supported` (`false` for pre-v2 frontends or on failure).
/// Does nothing if either argument is null.
///
/// # Safety
///
/// `environ_cb` must be a libretro environment callback and
/// `categories_supported`, if non-null, must be valid for writes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn libretro_set_core_options(
    environ_cb: Option<RetroEnvironment>,
    categories_supported: *mut bool,
) {
    let Some(environ_cb) = environ_cb else {
        return;
    };
    if categories_supported.is_null() {
        return;
    }
    // SAFETY: checked non-null; the caller guarantees it is writable.
    unsafe { categories_supported.write(false) };

    let outcome = catch_unwind(AssertUnwindSafe(|| {
        // SAFETY: the caller guarantees `environ_cb` is an environment callback.
        unsafe { set_core_options_with(environ_cb, OptionsConfig::from_env()) }
    }));
    let supported = match outcome {
        Ok(Some(outcome)) => outcome.categories_supported,
        Ok(None) => false,
        Err(_) => {
            warn!("panic while registering core options");
            false
        }
    };
    // SAFETY: as above.
    unsafe { categories_supported.write(supported) };
}
