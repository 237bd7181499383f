//! Language table and per-language catalog resolution.
//!
//! # Invariants
//!
//! 1. **Base always resolves**: [`LanguageResolver::resolve`] never returns
//!    "no catalog"; every miss lands on the base catalog.
//! 2. **Entry-by-entry fallback**: a translation may omit whole options or
//!    individual fields; [`LanguageResolver::definition`] fills each gap from
//!    the base entry for the same key.
//! 3. **Read-only**: a [`CatalogSet`] is built in a `static` and never
//!    mutated, so sharing it needs no synchronization.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Host reports no language | Query unsupported | Base catalog |
//! | Unknown language id | Id beyond the table | Base catalog |
//! | Language without table | Slot left empty | Base catalog |
//! | Key missing from translation | Partial translation | Base entry |

use crate::model::{Catalog, Choice, OptionDefinition, Text};

/// Host language identifiers, numbered as the host reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u32)]
pub enum Language {
    English = 0,
    Japanese = 1,
    French = 2,
    Spanish = 3,
    German = 4,
    Italian = 5,
    Dutch = 6,
    PortugueseBrazil = 7,
    PortuguesePortugal = 8,
    Russian = 9,
    Korean = 10,
    ChineseTraditional = 11,
    ChineseSimplified = 12,
    Esperanto = 13,
    Polish = 14,
    Vietnamese = 15,
    Arabic = 16,
    Greek = 17,
    Turkish = 18,
    Slovak = 19,
    Persian = 20,
    Hebrew = 21,
    Asturian = 22,
    Finnish = 23,
    Indonesian = 24,
    Swedish = 25,
    Ukrainian = 26,
}

impl Language {
    /// Number of known languages.
    pub const COUNT: usize = 27;

    /// The language every catalog set is anchored on.
    pub const BASE: Self = Self::English;

    /// Every language, ordered by host id.
    pub const ALL: [Self; Self::COUNT] = [
        Self::English,
        Self::Japanese,
        Self::French,
        Self::Spanish,
        Self::German,
        Self::Italian,
        Self::Dutch,
        Self::PortugueseBrazil,
        Self::PortuguesePortugal,
        Self::Russian,
        Self::Korean,
        Self::ChineseTraditional,
        Self::ChineseSimplified,
        Self::Esperanto,
        Self::Polish,
        Self::Vietnamese,
        Self::Arabic,
        Self::Greek,
        Self::Turkish,
        Self::Slovak,
        Self::Persian,
        Self::Hebrew,
        Self::Asturian,
        Self::Finnish,
        Self::Indonesian,
        Self::Swedish,
        Self::Ukrainian,
    ];

    /// Map a raw host id. Ids past the table are unknown.
    #[must_use]
    pub fn from_raw(raw: u32) -> Option<Self> {
        usize::try_from(raw)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    /// Raw host id.
    #[must_use]
    pub const fn id(self) -> u32 {
        self as u32
    }

    /// Short tag used in logs and diagnostics.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Japanese => "ja",
            Self::French => "fr",
            Self::Spanish => "es",
            Self::German => "de",
            Self::Italian => "it",
            Self::Dutch => "nl",
            Self::PortugueseBrazil => "pt_br",
            Self::PortuguesePortugal => "pt_pt",
            Self::Russian => "ru",
            Self::Korean => "ko",
            Self::ChineseTraditional => "cht",
            Self::ChineseSimplified => "chs",
            Self::Esperanto => "eo",
            Self::Polish => "pl",
            Self::Vietnamese => "vn",
            Self::Arabic => "ar",
            Self::Greek => "el",
            Self::Turkish => "tr",
            Self::Slovak => "sk",
            Self::Persian => "fa",
            Self::Hebrew => "he",
            Self::Asturian => "ast",
            Self::Finnish => "fi",
            Self::Indonesian => "id",
            Self::Swedish => "sv",
            Self::Ukrainian => "uk",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// The base catalog plus one optional translation per language.
#[derive(Debug, Clone, Copy)]
pub struct CatalogSet<'a> {
    base: &'a Catalog<'a>,
    translations: [Option<&'a Catalog<'a>>; Language::COUNT],
}

impl<'a> CatalogSet<'a> {
    /// A set with only the base catalog.
    #[must_use]
    pub const fn new(base: &'a Catalog<'a>) -> Self {
        Self {
            base,
            translations: [None; Language::COUNT],
        }
    }

    /// Register a translation. Registering the base language is ignored:
    /// the base slot is fixed at construction.
    #[must_use]
    pub const fn with_translation(mut self, language: Language, catalog: &'a Catalog<'a>) -> Self {
        if !matches!(language, Language::English) {
            self.translations[language.index()] = Some(catalog);
        }
        self
    }

    /// The base-language catalog.
    #[must_use]
    pub const fn base(&self) -> &'a Catalog<'a> {
        self.base
    }

    /// Translation registered for `language`, if any.
    #[must_use]
    pub const fn translation(&self, language: Language) -> Option<&'a Catalog<'a>> {
        self.translations[language.index()]
    }

    /// Languages with a registered translation, in id order.
    pub fn translated_languages(&self) -> impl Iterator<Item = Language> + '_ {
        Language::ALL
            .into_iter()
            .filter(|lang| self.translations[lang.index()].is_some())
    }
}

/// An option with every display field resolved through the fallback chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDefinition<'a> {
    /// Stable key.
    pub key: &'a str,
    /// Title, translated when available.
    pub display_name: Option<&'a str>,
    /// Categorized title, translated when available.
    pub display_name_categorized: Option<&'a str>,
    /// Help text, translated when available.
    pub description: Option<&'a str>,
    /// Categorized help text, translated when available.
    pub description_categorized: Option<&'a str>,
    /// Category key from the base entry.
    pub category: Option<&'a str>,
    /// Base choices with labels translated where the translation has them.
    pub choices: Vec<Choice<'a>>,
    /// Default value from the base entry.
    pub default_value: Option<&'a str>,
    /// Whether any field came from the translation.
    pub translated: bool,
}

/// How much of the base catalog a language covers.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageCoverage<'a> {
    /// The language measured.
    pub language: Language,
    /// Base keys present in the language's own table.
    pub present: usize,
    /// Base keys absent from the language's own table, in base order.
    pub missing: Vec<&'a str>,
    /// `present` as a percentage of the base key count (0.0–100.0).
    pub coverage_percent: f32,
}

/// Lookups against a [`CatalogSet`].
#[derive(Debug, Clone, Copy)]
pub struct LanguageResolver<'a> {
    set: &'a CatalogSet<'a>,
}

impl<'a> LanguageResolver<'a> {
    /// Create a resolver over a catalog set.
    #[must_use]
    pub const fn new(set: &'a CatalogSet<'a>) -> Self {
        Self { set }
    }

    /// Catalog to present for `requested`, falling back to base.
    #[must_use]
    pub fn resolve(&self, requested: Option<Language>) -> &'a Catalog<'a> {
        self.localized(requested).unwrap_or(self.set.base)
    }

    /// Translation for `requested`, or `None` wherever [`Self::resolve`]
    /// would fall back to base.
    #[must_use]
    pub fn localized(&self, requested: Option<Language>) -> Option<&'a Catalog<'a>> {
        match requested {
            None | Some(Language::English) => None,
            Some(lang) => self.set.translation(lang),
        }
    }

    /// Resolve one option field by field.
    ///
    /// Structural data (choice values, default, category) always comes from
    /// the base entry; display text comes from the translation when it has
    /// it. Returns `None` for keys the base catalog does not define.
    #[must_use]
    pub fn definition(&self, requested: Option<Language>, key: &str) -> Option<ResolvedDefinition<'a>> {
        let base = self.set.base.definition(key)?;
        let local = self
            .localized(requested)
            .and_then(|catalog| catalog.definition(key));
        Some(merge_definition(base, local))
    }

    /// Coverage of the base keys by `language`'s own table.
    #[must_use]
    pub fn coverage(&self, language: Language) -> LanguageCoverage<'a> {
        let base = self.set.base;
        let total = base.len();
        let missing: Vec<&'a str> = match language {
            Language::English => Vec::new(),
            lang => match self.set.translation(lang) {
                Some(local) => base
                    .keys()
                    .filter(|key| local.definition(key).is_none())
                    .collect(),
                None => base.keys().collect(),
            },
        };
        let present = total.saturating_sub(missing.len());
        #[allow(clippy::cast_precision_loss)]
        let coverage_percent = if total == 0 {
            100.0
        } else {
            (present as f32 / total as f32) * 100.0
        };
        LanguageCoverage {
            language,
            present,
            missing,
            coverage_percent,
        }
    }
}

fn merge_definition<'a>(
    base: &OptionDefinition<'a>,
    local: Option<&OptionDefinition<'a>>,
) -> ResolvedDefinition<'a> {
    let pick = |field: fn(&OptionDefinition<'a>) -> Option<Text<'a>>| {
        local.and_then(field).or_else(|| field(base)).map(Text::as_str)
    };
    let mut translated = false;
    let choices = base
        .choices
        .iter()
        .map(|choice| {
            let label = local
                .and_then(|l| l.choice(choice.value.as_str()))
                .and_then(|c| c.label);
            match label {
                Some(label) => {
                    translated = true;
                    Choice {
                        value: choice.value,
                        label: Some(label),
                    }
                }
                None => *choice,
            }
        })
        .collect();
    if let Some(local) = local {
        translated |= local.display_name.is_some()
            || local.display_name_categorized.is_some()
            || local.description.is_some()
            || local.description_categorized.is_some();
    }
    ResolvedDefinition {
        key: base.key.as_str(),
        display_name: pick(|d| d.display_name),
        display_name_categorized: pick(|d| d.display_name_categorized),
        description: pick(|d| d.description),
        description_categorized: pick(|d| d.description_categorized),
        category: base.category.map(Text::as_str),
        choices,
        default_value: base.default_value.map(Text::as_str),
        translated,
    }
}
