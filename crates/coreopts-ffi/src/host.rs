//! [`HostEnvironment`] over the libretro environment callback.

use std::ffi::{c_uint, c_void};
use std::ptr;

use coreopts_core::{AllocError, Catalog, HostEnvironment, Lifecycle, Registration};
use tracing::{trace, warn};

use crate::abi::{
    RETRO_ENVIRONMENT_GET_CORE_OPTIONS_VERSION, RETRO_ENVIRONMENT_GET_LANGUAGE,
    RETRO_ENVIRONMENT_SET_CORE_OPTIONS, RETRO_ENVIRONMENT_SET_CORE_OPTIONS_INTL,
    RETRO_ENVIRONMENT_SET_CORE_OPTIONS_V2, RETRO_ENVIRONMENT_SET_CORE_OPTIONS_V2_INTL,
    RETRO_ENVIRONMENT_SET_VARIABLES, RetroCoreOptionsIntl, RetroCoreOptionsV2, RetroCoreOptionsV2Intl,
    RetroEnvironment,
};
use crate::marshal::{self, MarshalError, OptionsV2};
use crate::mirror::{self, StaticCatalog};

/// A frontend reached through its environment callback.
#[derive(Debug, Clone, Copy)]
pub struct CallbackHost {
    environ: RetroEnvironment,
}

impl CallbackHost {
    /// Wrap `environ`.
    ///
    /// # Safety
    ///
    /// `environ` must follow the libretro environment contract for every
    /// command this type issues. It may write only through the out-parameter
    /// of a `GET_*` command. Registration tables are read-only (v2 tables of
    /// the shipped catalogs are `static`) and must not be referenced after
    /// the call returns.
    pub unsafe fn new(environ: RetroEnvironment) -> Self {
        Self { environ }
    }

    fn call(&mut self, cmd: c_uint, data: *mut c_void) -> bool {
        // SAFETY: `new`'s contract covers every command issued here, and
        // `data` points at a live value of the layout `cmd` expects.
        let answer = unsafe { (self.environ)(cmd, data) };
        trace!(cmd, answer, "environment call");
        answer
    }

    fn query_uint(&mut self, cmd: c_uint) -> Option<u32> {
        let mut value: c_uint = 0;
        self.call(cmd, ptr::from_mut(&mut value).cast())
            .then_some(value)
    }

    fn try_register(
        &mut self,
        lifecycle: &Lifecycle,
        registration: &Registration<'_>,
    ) -> Result<bool, MarshalError> {
        let answer = match *registration {
            Registration::Variables(vars) => {
                let mut table = marshal::variables(lifecycle, vars)?;
                self.call(RETRO_ENVIRONMENT_SET_VARIABLES, table.as_mut_ptr().cast())
            }
            Registration::OptionsV1(us) => {
                let mut table = marshal::definitions_v1(lifecycle, us)?;
                self.call(RETRO_ENVIRONMENT_SET_CORE_OPTIONS, table.as_mut_ptr().cast())
            }
            Registration::OptionsV1Intl { us, local } => {
                let mut us = marshal::definitions_v1(lifecycle, us)?;
                let mut local = local
                    .map(|local| marshal::definitions_v1(lifecycle, local))
                    .transpose()?;
                let mut intl = RetroCoreOptionsIntl {
                    us: us.as_mut_ptr(),
                    local: local.as_mut().map_or(ptr::null_mut(), |l| l.as_mut_ptr()),
                };
                self.call(
                    RETRO_ENVIRONMENT_SET_CORE_OPTIONS_INTL,
                    ptr::from_mut(&mut intl).cast(),
                )
            }
            Registration::OptionsV2(us) => {
                let mut table = V2Table::new(lifecycle, us)?;
                let mut header = table.header();
                self.call(
                    RETRO_ENVIRONMENT_SET_CORE_OPTIONS_V2,
                    ptr::from_mut(&mut header).cast(),
                )
            }
            Registration::OptionsV2Intl { us, local } => {
                let mut us = V2Table::new(lifecycle, us)?;
                let mut local = local
                    .map(|local| V2Table::new(lifecycle, local))
                    .transpose()?;
                let mut us_header = us.header();
                let mut local_header = local.as_mut().map(V2Table::header);
                let mut intl = RetroCoreOptionsV2Intl {
                    us: ptr::from_mut(&mut us_header),
                    local: local_header.as_mut().map_or(ptr::null_mut(), ptr::from_mut),
                };
                self.call(
                    RETRO_ENVIRONMENT_SET_CORE_OPTIONS_V2_INTL,
                    ptr::from_mut(&mut intl).cast(),
                )
            }
        };
        Ok(answer)
    }
}

/// v2 tables for one catalog: the static mirror of a shipped catalog, or a
/// table built for this call.
enum V2Table<'l> {
    Static(&'static StaticCatalog),
    Built(OptionsV2<'l>),
}

impl<'l> V2Table<'l> {
    fn new(lifecycle: &'l Lifecycle, catalog: &Catalog<'_>) -> Result<Self, MarshalError> {
        match mirror::find(catalog) {
            Some(tables) => Ok(Self::Static(tables)),
            None => Ok(Self::Built(OptionsV2::new(lifecycle, catalog)?)),
        }
    }

    fn header(&mut self) -> RetroCoreOptionsV2 {
        match self {
            Self::Static(tables) => tables.header(),
            Self::Built(table) => table.header(),
        }
    }
}

impl HostEnvironment for CallbackHost {
    fn core_options_version(&mut self) -> Option<u32> {
        self.query_uint(RETRO_ENVIRONMENT_GET_CORE_OPTIONS_VERSION)
    }

    fn language(&mut self) -> Option<u32> {
        self.query_uint(RETRO_ENVIRONMENT_GET_LANGUAGE)
    }

    fn register(
        &mut self,
        lifecycle: &Lifecycle,
        registration: &Registration<'_>,
    ) -> Result<bool, AllocError> {
        match self.try_register(lifecycle, registration) {
            Ok(answer) => Ok(answer),
            Err(MarshalError::Alloc(err)) => Err(err),
            Err(err) => {
                warn!(error = %err, kind = registration.kind(), "cannot marshal core options");
                Ok(false)
            }
        }
    }
}
