//! Compile-time C layout of the shipped catalogs.
//!
//! A v2 frontend takes the catalog as written, so the shipped catalogs are
//! laid out once, by the compiler, in statics spelled from the catalog
//! statics. Registering them acquires nothing and builds nothing at run
//! time: every session hands the frontend the same tables.

use std::ptr;

use coreopts_catalog::{intl, us};
use coreopts_core::{Catalog, Choice};

use crate::abi::{
    RETRO_NUM_CORE_OPTION_VALUES_MAX, RetroCoreOptionV2Category, RetroCoreOptionV2Definition,
    RetroCoreOptionValue, RetroCoreOptionsV2,
};
use crate::marshal::text_ptr;

/// Static storage for tables of raw pointers.
#[repr(transparent)]
struct Frozen<T>(T);

// SAFETY: the tables are never written after initialization and point only
// at immutable `'static` catalog text.
unsafe impl<T> Sync for Frozen<T> {}

/// A shipped catalog and its v2 tables.
#[derive(Debug)]
pub struct StaticCatalog {
    catalog: &'static Catalog<'static>,
    categories: &'static [RetroCoreOptionV2Category],
    definitions: &'static [RetroCoreOptionV2Definition],
}

// SAFETY: as for `Frozen`; the slices borrow `Frozen` statics.
unsafe impl Sync for StaticCatalog {}

impl StaticCatalog {
    /// The catalog these tables describe.
    #[must_use]
    pub const fn catalog(&self) -> &'static Catalog<'static> {
        self.catalog
    }

    /// The null-terminated definition table.
    #[must_use]
    pub const fn definitions(&self) -> &'static [RetroCoreOptionV2Definition] {
        self.definitions
    }

    /// Header for a v2 registration.
    ///
    /// The pointers are mutable only because the C struct says so; the
    /// frontend must treat them as read-only.
    #[must_use]
    pub const fn header(&self) -> RetroCoreOptionsV2 {
        RetroCoreOptionsV2 {
            categories: self.categories.as_ptr().cast_mut(),
            definitions: self.definitions.as_ptr().cast_mut(),
        }
    }
}

const fn values(choices: &[Choice<'static>]) -> [RetroCoreOptionValue; RETRO_NUM_CORE_OPTION_VALUES_MAX] {
    assert!(
        choices.len() < RETRO_NUM_CORE_OPTION_VALUES_MAX,
        "option has more values than a frontend table holds"
    );
    let mut out = [RetroCoreOptionValue::NULL; RETRO_NUM_CORE_OPTION_VALUES_MAX];
    let mut i = 0;
    while i < choices.len() {
        out[i] = RetroCoreOptionValue {
            value: choices[i].value.as_ptr(),
            label: text_ptr(choices[i].label),
        };
        i += 1;
    }
    out
}

const fn categories<const N: usize>(catalog: &'static Catalog<'static>) -> [RetroCoreOptionV2Category; N] {
    assert!(catalog.categories.len() + 1 == N, "category table size mismatch");
    let mut out = [RetroCoreOptionV2Category::NULL; N];
    let mut i = 0;
    while i < catalog.categories.len() {
        let cat = &catalog.categories[i];
        out[i] = RetroCoreOptionV2Category {
            key: cat.key.as_ptr(),
            desc: cat.display_name.as_ptr(),
            info: text_ptr(cat.description),
        };
        i += 1;
    }
    out
}

const fn definitions<const N: usize>(
    catalog: &'static Catalog<'static>,
) -> [RetroCoreOptionV2Definition; N] {
    assert!(catalog.definitions.len() + 1 == N, "definition table size mismatch");
    let mut out = [RetroCoreOptionV2Definition::NULL; N];
    let mut i = 0;
    while i < catalog.definitions.len() {
        let def = &catalog.definitions[i];
        out[i] = RetroCoreOptionV2Definition {
            key: def.key.as_ptr(),
            desc: text_ptr(def.display_name),
            desc_categorized: text_ptr(def.display_name_categorized),
            info: text_ptr(def.description),
            info_categorized: text_ptr(def.description_categorized),
            category_key: text_ptr(def.category),
            values: values(def.choices),
            default_value: text_ptr(def.default_value),
        };
        i += 1;
    }
    out
}

/// Lay out `$catalog`, whose tables hold `$definitions` options and
/// `$categories` categories.
macro_rules! static_catalog {
    ($catalog:expr, definitions = $definitions:expr, categories = $categories:expr $(,)?) => {{
        static CATEGORIES: Frozen<[RetroCoreOptionV2Category; $categories + 1]> =
            Frozen(categories($catalog));
        static DEFINITIONS: Frozen<[RetroCoreOptionV2Definition; $definitions + 1]> =
            Frozen(definitions($catalog));
        StaticCatalog {
            catalog: $catalog,
            categories: &CATEGORIES.0,
            definitions: &DEFINITIONS.0,
        }
    }};
}

static US: StaticCatalog = static_catalog!(&us::US, definitions = us::DEFINITIONS.len(), categories = 0);
#[cfg(feature = "langextra")]
static FR: StaticCatalog =
    static_catalog!(&intl::FR, definitions = intl::DEFINITIONS_FR.len(), categories = 0);
#[cfg(feature = "langextra")]
static DE: StaticCatalog =
    static_catalog!(&intl::DE, definitions = intl::DEFINITIONS_DE.len(), categories = 0);
#[cfg(feature = "langextra")]
static ES: StaticCatalog =
    static_catalog!(&intl::ES, definitions = intl::DEFINITIONS_ES.len(), categories = 0);

static STATIC_CATALOGS: &[&StaticCatalog] = &[
    &US,
    #[cfg(feature = "langextra")]
    &FR,
    #[cfg(feature = "langextra")]
    &DE,
    #[cfg(feature = "langextra")]
    &ES,
];

/// The static tables of `catalog`, if it is one of the shipped catalogs.
///
/// Matches by address: an equal catalog elsewhere in memory has no mirror.
#[must_use]
pub fn find(catalog: &Catalog<'_>) -> Option<&'static StaticCatalog> {
    STATIC_CATALOGS
        .iter()
        .copied()
        .find(|mirror| ptr::eq(mirror.catalog, catalog))
}

#[cfg(test)]
mod tests {
    use super::*;
    use coreopts_catalog::CATALOGS;
    use coreopts_core::{Language, Text};
    use std::ffi::{CStr, c_char};

    #[test]
    fn shipped_catalogs_have_mirrors() {
        let base = find(CATALOGS.base()).unwrap();
        assert!(ptr::eq(base.catalog(), &us::US));
        for language in CATALOGS.translated_languages() {
            let local = CATALOGS.translation(language).unwrap();
            assert!(find(local).is_some(), "{}", language.tag());
        }
        assert_eq!(
            CATALOGS.translation(Language::French).is_some(),
            cfg!(feature = "langextra")
        );
    }

    #[test]
    fn copies_of_a_catalog_have_no_mirror() {
        let copy = us::US;
        assert!(find(&copy).is_none());
        assert!(find(&Catalog::EMPTY).is_none());
    }

    fn spelled(ptr: *const c_char, text: Option<Text<'_>>) -> bool {
        match text {
            // SAFETY: mirror pointers are null or aim at static C strings.
            Some(text) => !ptr.is_null() && unsafe { CStr::from_ptr(ptr) } == text.as_c_str(),
            None => ptr.is_null(),
        }
    }

    #[test]
    fn tables_spell_the_catalog() {
        let mirror = find(&us::US).unwrap();
        let defs = mirror.definitions();
        assert_eq!(defs.len(), us::US.len() + 1);
        for (row, def) in defs.iter().zip(us::US.definitions) {
            assert!(spelled(row.key, Some(def.key)), "{}", def.key);
            assert!(spelled(row.desc, def.display_name), "{}", def.key);
            assert!(spelled(row.desc_categorized, def.display_name_categorized));
            assert!(spelled(row.info, def.description), "{}", def.key);
            assert!(spelled(row.category_key, def.category));
            assert!(spelled(row.default_value, def.default_value), "{}", def.key);
            for (slot, choice) in row.values.iter().zip(def.choices) {
                assert!(spelled(slot.value, Some(choice.value)), "{}", def.key);
                assert!(spelled(slot.label, choice.label), "{}", def.key);
            }
            assert!(row.values[def.choices.len()].value.is_null());
        }
        assert!(defs[us::US.len()].key.is_null());

        let header = mirror.header();
        assert_eq!(header.definitions.cast_const(), defs.as_ptr());
        // SAFETY: the category table holds at least its terminator.
        assert!(unsafe { (*header.categories).key }.is_null());
    }
}
