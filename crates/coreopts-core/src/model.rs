//! Canonical option model shared by every schema version.
//!
//! All types borrow their strings as [`Text`], which is both a `&str` and a
//! NUL-terminated C string. A whole catalog can therefore live in a
//! `static` and be handed to the host without copying a single byte.
//! Catalogs built at runtime (tests, tooling) borrow from owned
//! `CString`s instead.
//!
//! # Invariants
//!
//! 1. **Stable keys**: `OptionDefinition::key` is never translated; it is the
//!    join column between the base catalog and every translation.
//! 2. **Display order**: `choices` order is the order shown to the user and
//!    the order the first-choice default fallback uses.
//! 3. **Effective default**: a missing `default_value` means the first
//!    choice; a `default_value` that names no choice is a catalog defect
//!    (see [`crate::validate`]).

use std::ffi::{CStr, c_char};
use std::fmt;
use std::ops::Deref;
use std::str::Utf8Error;

/// Catalog text: UTF-8 that is also NUL-terminated.
///
/// Built from C string literals (`c"..."`), so the same bytes serve Rust
/// lookups and the host's `const char *` fields.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Text<'a> {
    c: &'a CStr,
    s: &'a str,
}

impl<'a> Text<'a> {
    /// The empty string.
    pub const EMPTY: Text<'static> = Text::new(c"");

    /// Wrap a C string.
    ///
    /// # Panics
    ///
    /// Panics if `c` is not valid UTF-8. In a `static` or `const` this is a
    /// compile error.
    #[must_use]
    pub const fn new(c: &'a CStr) -> Self {
        match c.to_str() {
            Ok(s) => Self { c, s },
            Err(_) => panic!("catalog text must be UTF-8"),
        }
    }

    /// Wrap a C string, rejecting invalid UTF-8.
    ///
    /// # Errors
    ///
    /// Returns the UTF-8 error of `c`.
    pub fn try_new(c: &'a CStr) -> Result<Self, Utf8Error> {
        Ok(Self { c, s: c.to_str()? })
    }

    /// View `s` as text when it ends with its only NUL byte.
    #[must_use]
    pub fn from_str_with_nul(s: &'a str) -> Option<Self> {
        let c = CStr::from_bytes_with_nul(s.as_bytes()).ok()?;
        Some(Self {
            c,
            s: &s[..s.len() - 1],
        })
    }

    /// The text without its terminator.
    #[must_use]
    pub const fn as_str(self) -> &'a str {
        self.s
    }

    /// The text as a C string.
    #[must_use]
    pub const fn as_c_str(self) -> &'a CStr {
        self.c
    }

    /// Pointer to the NUL-terminated bytes, valid for `'a`.
    #[must_use]
    pub const fn as_ptr(self) -> *const c_char {
        self.c.as_ptr()
    }
}

impl Deref for Text<'_> {
    type Target = str;

    fn deref(&self) -> &str {
        self.s
    }
}

impl fmt::Display for Text<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.s)
    }
}

impl fmt::Debug for Text<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.s, f)
    }
}

impl PartialEq<str> for Text<'_> {
    fn eq(&self, other: &str) -> bool {
        self.s == other
    }
}

impl PartialEq<&str> for Text<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.s == *other
    }
}

impl From<Text<'_>> for String {
    fn from(text: Text<'_>) -> Self {
        text.s.to_owned()
    }
}

/// One selectable value of an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Choice<'a> {
    /// Stable value stored by the host and reported back to the core.
    pub value: Text<'a>,
    /// Display text. `None` means the host shows `value` as-is.
    pub label: Option<Text<'a>>,
}

impl<'a> Choice<'a> {
    /// A choice displayed by its raw value.
    #[must_use]
    pub const fn new(value: &'a CStr) -> Self {
        Self {
            value: Text::new(value),
            label: None,
        }
    }

    /// A choice with separate display text.
    #[must_use]
    pub const fn labeled(value: &'a CStr, label: &'a CStr) -> Self {
        Self {
            value: Text::new(value),
            label: Some(Text::new(label)),
        }
    }

    /// Text the host displays for this choice.
    #[must_use]
    pub fn display(&self) -> &'a str {
        self.label.unwrap_or(self.value).as_str()
    }
}

/// Organizational group for options (v2 hosts only).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category<'a> {
    /// Unique identifier referenced by [`OptionDefinition::category`].
    pub key: Text<'a>,
    /// Group title.
    pub display_name: Text<'a>,
    /// Optional group description.
    pub description: Option<Text<'a>>,
}

impl<'a> Category<'a> {
    /// Create a category without a description.
    #[must_use]
    pub const fn new(key: &'a CStr, display_name: &'a CStr) -> Self {
        Self {
            key: Text::new(key),
            display_name: Text::new(display_name),
            description: None,
        }
    }

    /// Attach a description.
    #[must_use]
    pub const fn with_description(mut self, description: &'a CStr) -> Self {
        self.description = Some(Text::new(description));
        self
    }
}

/// One user-adjustable setting.
///
/// Display fields are optional because translated catalogs may leave any of
/// them untranslated; the base catalog must provide `display_name`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionDefinition<'a> {
    /// Stable identifier, identical across languages.
    pub key: Text<'a>,
    /// Title shown by the host.
    pub display_name: Option<Text<'a>>,
    /// Shorter title used when the host groups options by category.
    pub display_name_categorized: Option<Text<'a>>,
    /// Help text.
    pub description: Option<Text<'a>>,
    /// Help text used when the host groups options by category.
    pub description_categorized: Option<Text<'a>>,
    /// Key of the owning [`Category`], if any.
    pub category: Option<Text<'a>>,
    /// Selectable values in display order.
    pub choices: &'a [Choice<'a>],
    /// Value of the default choice. `None` selects the first choice.
    pub default_value: Option<Text<'a>>,
}

impl<'a> OptionDefinition<'a> {
    /// Create a definition with a title, choices, and default.
    #[must_use]
    pub const fn new(
        key: &'a CStr,
        display_name: &'a CStr,
        choices: &'a [Choice<'a>],
        default_value: &'a CStr,
    ) -> Self {
        Self {
            key: Text::new(key),
            display_name: Some(Text::new(display_name)),
            display_name_categorized: None,
            description: None,
            description_categorized: None,
            category: None,
            choices,
            default_value: Some(Text::new(default_value)),
        }
    }

    /// A definition carrying nothing but its key and choices.
    ///
    /// Translations start from this and fill in the fields they translate.
    #[must_use]
    pub const fn bare(key: &'a CStr, choices: &'a [Choice<'a>]) -> Self {
        Self {
            key: Text::new(key),
            display_name: None,
            display_name_categorized: None,
            description: None,
            description_categorized: None,
            category: None,
            choices,
            default_value: None,
        }
    }

    /// Set the title.
    #[must_use]
    pub const fn with_display_name(mut self, display_name: &'a CStr) -> Self {
        self.display_name = Some(Text::new(display_name));
        self
    }

    /// Set the categorized title.
    #[must_use]
    pub const fn with_display_name_categorized(mut self, display_name: &'a CStr) -> Self {
        self.display_name_categorized = Some(Text::new(display_name));
        self
    }

    /// Set the help text.
    #[must_use]
    pub const fn with_description(mut self, description: &'a CStr) -> Self {
        self.description = Some(Text::new(description));
        self
    }

    /// Set the categorized help text.
    #[must_use]
    pub const fn with_description_categorized(mut self, description: &'a CStr) -> Self {
        self.description_categorized = Some(Text::new(description));
        self
    }

    /// Place the option in a category.
    #[must_use]
    pub const fn in_category(mut self, category: &'a CStr) -> Self {
        self.category = Some(Text::new(category));
        self
    }

    /// Set the default value.
    #[must_use]
    pub const fn with_default(mut self, default_value: &'a CStr) -> Self {
        self.default_value = Some(Text::new(default_value));
        self
    }

    /// Position of the declared default among `choices`.
    ///
    /// Returns `Some(0)` when no default is declared and the option has
    /// choices, and `None` when the declared default matches no choice.
    #[must_use]
    pub fn default_index(&self) -> Option<usize> {
        match self.default_value {
            Some(default) => self.choices.iter().position(|c| c.value == default),
            None if self.choices.is_empty() => None,
            None => Some(0),
        }
    }

    /// The choice a fresh configuration starts from.
    #[must_use]
    pub fn effective_default(&self) -> Option<&Choice<'a>> {
        self.default_index().and_then(|i| self.choices.get(i))
    }

    /// Look up a choice by value.
    #[must_use]
    pub fn choice(&self, value: &str) -> Option<&Choice<'a>> {
        self.choices.iter().find(|c| c.value.as_str() == value)
    }
}

/// Every option and category for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Catalog<'a> {
    /// Option groups, in display order.
    pub categories: &'a [Category<'a>],
    /// Options, in display order.
    pub definitions: &'a [OptionDefinition<'a>],
}

impl<'a> Catalog<'a> {
    /// A catalog with no entries.
    pub const EMPTY: Catalog<'static> = Catalog {
        categories: &[],
        definitions: &[],
    };

    /// Create a catalog from its tables.
    #[must_use]
    pub const fn new(
        categories: &'a [Category<'a>],
        definitions: &'a [OptionDefinition<'a>],
    ) -> Self {
        Self {
            categories,
            definitions,
        }
    }

    /// Number of option definitions.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Whether the catalog defines no options.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Find an option by key.
    #[must_use]
    pub fn definition(&self, key: &str) -> Option<&OptionDefinition<'a>> {
        self.definitions.iter().find(|d| d.key.as_str() == key)
    }

    /// Find a category by key.
    #[must_use]
    pub fn category(&self, key: &str) -> Option<&Category<'a>> {
        self.categories.iter().find(|c| c.key.as_str() == key)
    }

    /// Keys in display order.
    pub fn keys(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.definitions.iter().map(|d| d.key.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RATE: &[Choice<'static>] = &[
        Choice::labeled(c"50", c"50Hz"),
        Choice::labeled(c"60", c"60Hz"),
        Choice::labeled(c"75", c"75Hz"),
    ];

    #[test]
    fn text_is_str_and_c_string() {
        const ON: Text<'static> = Text::new(c"enabled");
        assert_eq!(ON.as_str(), "enabled");
        assert_eq!(ON, "enabled");
        assert_eq!(ON.as_c_str().to_bytes_with_nul(), b"enabled\0");
        assert_eq!(ON.len(), 7);
        assert_eq!(ON.to_string(), "enabled");
        assert_eq!(format!("{ON:?}"), "\"enabled\"");
        assert!(Text::EMPTY.is_empty());
    }

    #[test]
    fn text_borrows_nul_terminated_strings() {
        let owned = String::from("Volume Level; 100|0\0");
        let text = Text::from_str_with_nul(&owned).unwrap();
        assert_eq!(text, "Volume Level; 100|0");
        assert!(std::ptr::eq(text.as_ptr().cast::<u8>(), owned.as_ptr()));
        assert!(Text::from_str_with_nul("no terminator").is_none());
        assert!(Text::from_str_with_nul("inner\0nul\0").is_none());
    }

    #[test]
    fn text_rejects_invalid_utf8_at_runtime() {
        let bad = std::ffi::CString::new(vec![0xff, 0xfe]).unwrap();
        assert!(Text::try_new(&bad).is_err());
        assert_eq!(Text::try_new(c"ok").map(Text::as_str), Ok("ok"));
    }

    #[test]
    fn choice_display_falls_back_to_value() {
        assert_eq!(Choice::new(c"disabled").display(), "disabled");
        assert_eq!(Choice::labeled(c"auto", c"Auto").display(), "Auto");
    }

    #[test]
    fn default_index_finds_declared_default() {
        let def = OptionDefinition::new(c"rate", c"Rate", RATE, c"75");
        assert_eq!(def.default_index(), Some(2));
        assert_eq!(def.effective_default().map(|c| c.value.as_str()), Some("75"));
    }

    #[test]
    fn missing_default_selects_first_choice() {
        let def = OptionDefinition::bare(c"rate", RATE);
        assert_eq!(def.default_index(), Some(0));
    }

    #[test]
    fn unknown_default_has_no_index() {
        let def = OptionDefinition::new(c"rate", c"Rate", RATE, c"90");
        assert_eq!(def.default_index(), None);
        assert!(def.effective_default().is_none());
    }

    #[test]
    fn no_choices_means_no_default() {
        let def = OptionDefinition::bare(c"empty", &[]);
        assert_eq!(def.default_index(), None);
    }

    #[test]
    fn builders_compose_in_const_context() {
        const DEF: OptionDefinition<'static> = OptionDefinition::new(c"rate", c"Rate", RATE, c"60")
            .with_description(c"Refresh rate.")
            .in_category(c"video");
        assert_eq!(DEF.description.map(Text::as_str), Some("Refresh rate."));
        assert_eq!(DEF.category.map(Text::as_str), Some("video"));
        assert_eq!(DEF.choice("60").and_then(|c| c.label).map(Text::as_str), Some("60Hz"));
    }

    #[test]
    fn catalog_lookup() {
        let defs = [OptionDefinition::new(c"rate", c"Rate", RATE, c"60")];
        let cats = [Category::new(c"video", c"Video").with_description(c"Picture")];
        let catalog = Catalog::new(&cats, &defs);
        assert_eq!(catalog.len(), 1);
        assert!(catalog.definition("rate").is_some());
        assert!(catalog.definition("missing").is_none());
        let video = catalog.category("video").and_then(|c| c.description);
        assert_eq!(video.map(Text::as_str), Some("Picture"));
        assert_eq!(catalog.keys().collect::<Vec<_>>(), vec!["rate"]);
        assert!(Catalog::EMPTY.is_empty());
    }
}
