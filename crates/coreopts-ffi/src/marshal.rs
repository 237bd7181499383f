//! Registration tables in C layout.
//!
//! Catalog text is already NUL-terminated ([`Text`]), so the tables built
//! here hold pointers into the catalog and into the session's descriptor
//! buffers; no string is copied. The tables themselves are acquired from the
//! session's [`Lifecycle`] and must outlive the environment call, nothing
//! longer.
//!
//! Shipped catalogs registered with v2 frontends skip this module entirely:
//! see [`crate::mirror`].

use std::ffi::c_char;
use std::ptr;

use coreopts_core::{AllocError, Catalog, Choice, DefinitionV1, Lifecycle, Text, Tracked, Variable};
use thiserror::Error;

use crate::abi::{
    RETRO_NUM_CORE_OPTION_VALUES_MAX, RetroCoreOptionDefinition, RetroCoreOptionV2Category,
    RetroCoreOptionV2Definition, RetroCoreOptionValue, RetroCoreOptionsV2, RetroVariable,
};

/// A registration that cannot be expressed in the C layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarshalError {
    #[error("cannot acquire registration table: {0}")]
    Alloc(#[from] AllocError),
    #[error("option '{key}' has {count} values; the frontend holds at most {max}")]
    TooManyValues { key: String, count: usize, max: usize },
}

/// Pointer to `text`, or null when absent.
pub(crate) const fn text_ptr(text: Option<Text<'_>>) -> *const c_char {
    match text {
        Some(text) => text.as_ptr(),
        None => ptr::null(),
    }
}

fn values(
    key: Text<'_>,
    choices: &[Choice<'_>],
) -> Result<[RetroCoreOptionValue; RETRO_NUM_CORE_OPTION_VALUES_MAX], MarshalError> {
    // One slot stays null as the terminator.
    if choices.len() >= RETRO_NUM_CORE_OPTION_VALUES_MAX {
        return Err(MarshalError::TooManyValues {
            key: key.into(),
            count: choices.len(),
            max: RETRO_NUM_CORE_OPTION_VALUES_MAX - 1,
        });
    }
    let mut out = [RetroCoreOptionValue::NULL; RETRO_NUM_CORE_OPTION_VALUES_MAX];
    for (slot, choice) in out.iter_mut().zip(choices) {
        *slot = RetroCoreOptionValue {
            value: choice.value.as_ptr(),
            label: text_ptr(choice.label),
        };
    }
    Ok(out)
}

/// Null-terminated v0 variable array.
///
/// # Errors
///
/// [`MarshalError::Alloc`] when the table cannot be acquired.
pub fn variables<'l>(
    lifecycle: &'l Lifecycle,
    vars: &[Variable<'_>],
) -> Result<Tracked<'l, Vec<RetroVariable>>, MarshalError> {
    let mut out = lifecycle.vec(vars.len() + 1)?;
    for var in vars {
        out.push(RetroVariable {
            key: var.key.as_ptr(),
            value: var.value.as_ptr(),
        })?;
    }
    out.push(RetroVariable::NULL)?;
    Ok(out)
}

/// Null-terminated v1 definition array.
///
/// # Errors
///
/// [`MarshalError::Alloc`] when the table cannot be acquired, or
/// [`MarshalError::TooManyValues`] for an option the layout cannot hold.
pub fn definitions_v1<'l>(
    lifecycle: &'l Lifecycle,
    defs: &[DefinitionV1<'_, '_>],
) -> Result<Tracked<'l, Vec<RetroCoreOptionDefinition>>, MarshalError> {
    let mut out = lifecycle.vec(defs.len() + 1)?;
    for def in defs {
        out.push(RetroCoreOptionDefinition {
            key: def.key.as_ptr(),
            desc: text_ptr(def.desc),
            info: text_ptr(def.info),
            values: values(def.key, &def.values)?,
            default_value: text_ptr(def.default_value),
        })?;
    }
    out.push(RetroCoreOptionDefinition::NULL)?;
    Ok(out)
}

/// A v2 catalog laid out for a frontend, for catalogs without a static
/// mirror.
#[derive(Debug)]
pub struct OptionsV2<'l> {
    categories: Tracked<'l, Vec<RetroCoreOptionV2Category>>,
    definitions: Tracked<'l, Vec<RetroCoreOptionV2Definition>>,
}

impl<'l> OptionsV2<'l> {
    /// Lay out `catalog`.
    ///
    /// # Errors
    ///
    /// As for [`definitions_v1`].
    pub fn new(lifecycle: &'l Lifecycle, catalog: &Catalog<'_>) -> Result<Self, MarshalError> {
        let mut categories = lifecycle.vec(catalog.categories.len() + 1)?;
        for cat in catalog.categories {
            categories.push(RetroCoreOptionV2Category {
                key: cat.key.as_ptr(),
                desc: cat.display_name.as_ptr(),
                info: text_ptr(cat.description),
            })?;
        }
        categories.push(RetroCoreOptionV2Category::NULL)?;

        let mut definitions = lifecycle.vec(catalog.len() + 1)?;
        for def in catalog.definitions {
            definitions.push(RetroCoreOptionV2Definition {
                key: def.key.as_ptr(),
                desc: text_ptr(def.display_name),
                desc_categorized: text_ptr(def.display_name_categorized),
                info: text_ptr(def.description),
                info_categorized: text_ptr(def.description_categorized),
                category_key: text_ptr(def.category),
                values: values(def.key, def.choices)?,
                default_value: text_ptr(def.default_value),
            })?;
        }
        definitions.push(RetroCoreOptionV2Definition::NULL)?;

        Ok(Self {
            categories,
            definitions,
        })
    }

    /// Header pointing into this table; valid while `self` lives.
    pub fn header(&mut self) -> RetroCoreOptionsV2 {
        RetroCoreOptionsV2 {
            categories: self.categories.as_mut_ptr(),
            definitions: self.definitions.as_mut_ptr(),
        }
    }
}
