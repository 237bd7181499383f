//! Catalog authoring checks.
//!
//! Hosts trust the catalog blindly: a default that names no choice, or a
//! translated key the base does not know, silently changes what the user
//! sees. These checks run once when a [`crate::CoreOptions`] is built.
//!
//! # Failure Modes
//!
//! | Mode | Condition | Behavior |
//! |------|-----------|----------|
//! | `Strict` | Any defect | Construction fails with the first [`CatalogError`] |
//! | `Lenient` | Any defect | Construction succeeds; defects are logged at `warn` and translated degraded |

use std::collections::HashSet;

use thiserror::Error;

use crate::language::{CatalogSet, Language};
use crate::model::{Catalog, OptionDefinition};

/// Most values a single option may carry. The host's fixed value tables
/// hold this many entries including the null terminator.
pub const MAX_CHOICES: usize = 128;

/// How catalog defects are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    /// Reject defective catalogs at construction.
    #[default]
    Strict,
    /// Accept them and degrade the way legacy hosts expect.
    Lenient,
}

impl ValidationMode {
    /// Parse a mode name (`strict` / `lenient`, case-insensitive).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "strict" => Some(Self::Strict),
            "lenient" => Some(Self::Lenient),
            _ => None,
        }
    }
}

/// A defect in a catalog or catalog set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Two definitions share a key.
    #[error("[{language}] duplicate option key '{key}'")]
    DuplicateKey { language: &'static str, key: String },
    /// Two categories share a key.
    #[error("[{language}] duplicate category key '{key}'")]
    DuplicateCategory { language: &'static str, key: String },
    /// Two choices of one option share a value.
    #[error("[{language}] option '{key}' lists value '{value}' twice")]
    DuplicateChoice {
        language: &'static str,
        key: String,
        value: String,
    },
    /// The option has nothing to choose from.
    #[error("[{language}] option '{key}' has no choices")]
    NoChoices { language: &'static str, key: String },
    /// The option carries more values than the host can hold.
    #[error("[{language}] option '{key}' has {count} choices (max {max})")]
    TooManyChoices {
        language: &'static str,
        key: String,
        count: usize,
        max: usize,
    },
    /// The declared default matches no choice.
    #[error("[{language}] option '{key}' defaults to '{default}', which is not one of its choices")]
    UnknownDefault {
        language: &'static str,
        key: String,
        default: String,
    },
    /// The option points at a category the catalog does not define.
    #[error("[{language}] option '{key}' references unknown category '{category}'")]
    UnknownCategory {
        language: &'static str,
        key: String,
        category: String,
    },
    /// A base definition has no title.
    #[error("[{language}] option '{key}' has no display name")]
    MissingDisplayName { language: &'static str, key: String },
    /// A translation defines a key the base catalog does not.
    #[error("[{language}] translated option '{key}' does not exist in the base catalog")]
    UnknownTranslatedKey { language: &'static str, key: String },
    /// A translation lists a value its base option does not.
    #[error("[{language}] translated option '{key}' lists value '{value}' unknown to the base catalog")]
    UnknownTranslatedChoice {
        language: &'static str,
        key: String,
        value: String,
    },
}

/// Check the base catalog and every registered translation.
///
/// # Errors
///
/// Returns the first [`CatalogError`] found, base catalog first, then
/// translations in language-id order.
pub fn validate_set(set: &CatalogSet<'_>) -> Result<(), CatalogError> {
    let base = set.base();
    validate_base(base)?;
    for language in set.translated_languages() {
        if let Some(local) = set.translation(language) {
            validate_translation(base, local, language)?;
        }
    }
    Ok(())
}

/// Check a complete base-language catalog.
///
/// # Errors
///
/// Returns the first [`CatalogError`] found, in catalog order.
pub fn validate_base(catalog: &Catalog<'_>) -> Result<(), CatalogError> {
    let language = Language::BASE.tag();
    check_category_keys(catalog, language)?;
    let mut keys = HashSet::with_capacity(catalog.len());
    for def in catalog.definitions {
        if !keys.insert(def.key.as_str()) {
            return Err(CatalogError::DuplicateKey {
                language,
                key: def.key.to_string(),
            });
        }
        if def.display_name.is_none() {
            return Err(CatalogError::MissingDisplayName {
                language,
                key: def.key.to_string(),
            });
        }
        check_choices(def, language)?;
        if let Some(category) = def.category {
            if catalog.category(category.as_str()).is_none() {
                return Err(CatalogError::UnknownCategory {
                    language,
                    key: def.key.to_string(),
                    category: category.to_string(),
                });
            }
        }
    }
    Ok(())
}

/// Check a (possibly partial) translation against its base catalog.
///
/// # Errors
///
/// Returns the first [`CatalogError`] found, in translation order.
pub fn validate_translation(
    base: &Catalog<'_>,
    local: &Catalog<'_>,
    language: Language,
) -> Result<(), CatalogError> {
    let tag = language.tag();
    check_category_keys(local, tag)?;
    let mut keys = HashSet::with_capacity(local.len());
    for def in local.definitions {
        if !keys.insert(def.key.as_str()) {
            return Err(CatalogError::DuplicateKey {
                language: tag,
                key: def.key.to_string(),
            });
        }
        let Some(base_def) = base.definition(def.key.as_str()) else {
            return Err(CatalogError::UnknownTranslatedKey {
                language: tag,
                key: def.key.to_string(),
            });
        };
        if let Some(choice) = def
            .choices
            .iter()
            .find(|c| base_def.choice(c.value.as_str()).is_none())
        {
            return Err(CatalogError::UnknownTranslatedChoice {
                language: tag,
                key: def.key.to_string(),
                value: choice.value.to_string(),
            });
        }
        // A translation may carry an empty choice list (labels untranslated),
        // but anything it does list must be well formed.
        if !def.choices.is_empty() {
            check_choices(def, tag)?;
        }
    }
    Ok(())
}

fn check_category_keys(catalog: &Catalog<'_>, language: &'static str) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(catalog.categories.len());
    for category in catalog.categories {
        if !seen.insert(category.key.as_str()) {
            return Err(CatalogError::DuplicateCategory {
                language,
                key: category.key.to_string(),
            });
        }
    }
    Ok(())
}

fn check_choices(def: &OptionDefinition<'_>, language: &'static str) -> Result<(), CatalogError> {
    if def.choices.is_empty() {
        return Err(CatalogError::NoChoices {
            language,
            key: def.key.to_string(),
        });
    }
    // One slot of the host table is the terminator.
    if def.choices.len() >= MAX_CHOICES {
        return Err(CatalogError::TooManyChoices {
            language,
            key: def.key.to_string(),
            count: def.choices.len(),
            max: MAX_CHOICES - 1,
        });
    }
    let mut values = HashSet::with_capacity(def.choices.len());
    for choice in def.choices {
        if !values.insert(choice.value) {
            return Err(CatalogError::DuplicateChoice {
                language,
                key: def.key.to_string(),
                value: choice.value.to_string(),
            });
        }
    }
    match def.default_value {
        Some(default) if def.default_index().is_none() => Err(CatalogError::UnknownDefault {
            language,
            key: def.key.to_string(),
            default: default.to_string(),
        }),
        _ => Ok(()),
    }
}
