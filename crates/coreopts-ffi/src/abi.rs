//! libretro core-options ABI.
//!
//! Layouts mirror `libretro.h`. Every array handed to the frontend ends with
//! an all-null entry.

use std::ffi::{c_char, c_uint, c_void};
use std::ptr;

/// The frontend's environment callback.
pub type RetroEnvironment = unsafe extern "C" fn(cmd: c_uint, data: *mut c_void) -> bool;

pub const RETRO_ENVIRONMENT_SET_VARIABLES: c_uint = 16;
pub const RETRO_ENVIRONMENT_GET_LANGUAGE: c_uint = 39;
pub const RETRO_ENVIRONMENT_GET_CORE_OPTIONS_VERSION: c_uint = 52;
pub const RETRO_ENVIRONMENT_SET_CORE_OPTIONS: c_uint = 53;
pub const RETRO_ENVIRONMENT_SET_CORE_OPTIONS_INTL: c_uint = 54;
pub const RETRO_ENVIRONMENT_SET_CORE_OPTIONS_V2: c_uint = 67;
pub const RETRO_ENVIRONMENT_SET_CORE_OPTIONS_V2_INTL: c_uint = 68;

/// Value slots per option, terminator included.
pub const RETRO_NUM_CORE_OPTION_VALUES_MAX: usize = 128;

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct RetroVariable {
    pub key: *const c_char,
    pub value: *const c_char,
}

impl RetroVariable {
    pub const NULL: Self = Self {
        key: ptr::null(),
        value: ptr::null(),
    };
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct RetroCoreOptionValue {
    pub value: *const c_char,
    pub label: *const c_char,
}

impl RetroCoreOptionValue {
    pub const NULL: Self = Self {
        value: ptr::null(),
        label: ptr::null(),
    };
}

/// v1 option record.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct RetroCoreOptionDefinition {
    pub key: *const c_char,
    pub desc: *const c_char,
    pub info: *const c_char,
    pub values: [RetroCoreOptionValue; RETRO_NUM_CORE_OPTION_VALUES_MAX],
    pub default_value: *const c_char,
}

impl RetroCoreOptionDefinition {
    pub const NULL: Self = Self {
        key: ptr::null(),
        desc: ptr::null(),
        info: ptr::null(),
        values: [RetroCoreOptionValue::NULL; RETRO_NUM_CORE_OPTION_VALUES_MAX],
        default_value: ptr::null(),
    };
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct RetroCoreOptionsIntl {
    pub us: *mut RetroCoreOptionDefinition,
    pub local: *mut RetroCoreOptionDefinition,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct RetroCoreOptionV2Category {
    pub key: *const c_char,
    pub desc: *const c_char,
    pub info: *const c_char,
}

impl RetroCoreOptionV2Category {
    pub const NULL: Self = Self {
        key: ptr::null(),
        desc: ptr::null(),
        info: ptr::null(),
    };
}

/// v2 option record.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct RetroCoreOptionV2Definition {
    pub key: *const c_char,
    pub desc: *const c_char,
    pub desc_categorized: *const c_char,
    pub info: *const c_char,
    pub info_categorized: *const c_char,
    pub category_key: *const c_char,
    pub values: [RetroCoreOptionValue; RETRO_NUM_CORE_OPTION_VALUES_MAX],
    pub default_value: *const c_char,
}

impl RetroCoreOptionV2Definition {
    pub const NULL: Self = Self {
        key: ptr::null(),
        desc: ptr::null(),
        desc_categorized: ptr::null(),
        info: ptr::null(),
        info_categorized: ptr::null(),
        category_key: ptr::null(),
        values: [RetroCoreOptionValue::NULL; RETRO_NUM_CORE_OPTION_VALUES_MAX],
        default_value: ptr::null(),
    };
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct RetroCoreOptionsV2 {
    pub categories: *mut RetroCoreOptionV2Category,
    pub definitions: *mut RetroCoreOptionV2Definition,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct RetroCoreOptionsV2Intl {
    pub us: *mut RetroCoreOptionsV2,
    pub local: *mut RetroCoreOptionsV2,
}
