//! Catalog translation for the pre-v2 schemas.
//!
//! v2 hosts take the canonical catalog as-is, so nothing here runs for them.
//! v1 hosts need flat definition records with their own value arrays; v0
//! hosts need one pre-joined descriptor string per option. Every buffer is
//! acquired from the session's [`Lifecycle`] and reserved at its final size.
//!
//! # Descriptor format
//!
//! ```text
//! <display name>; <default>|<other 1>|<other 2>|...
//! ```
//!
//! The default comes first, the remaining values follow in display order.
//! An option without a display name or without choices registers an empty
//! descriptor. Registered descriptors carry a trailing NUL inside their
//! buffer so the host can read them in place.

use std::fmt;

use thiserror::Error;
use tracing::warn;

use crate::lifecycle::{AllocError, Lifecycle, Tracked};
use crate::model::{Catalog, Choice, OptionDefinition, Text};
use crate::version::NegotiatedVersion;

/// One v0 registration entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Variable<'a> {
    /// Option key.
    pub key: Text<'a>,
    /// Descriptor string, empty when the option has nothing to show.
    pub value: Text<'a>,
}

/// One v1 registration record.
///
/// Strings alias the canonical catalog; only the value array is new.
#[derive(Debug)]
pub struct DefinitionV1<'l, 'a> {
    pub key: Text<'a>,
    pub desc: Option<Text<'a>>,
    pub info: Option<Text<'a>>,
    pub default_value: Option<Text<'a>>,
    pub values: Tracked<'l, Vec<Choice<'a>>>,
}

/// A flattened v1 catalog.
pub type FlatOptions<'l, 'a> = Tracked<'l, Vec<DefinitionV1<'l, 'a>>>;

/// Per-option v0 descriptors, `None` where the option registers empty.
pub type Descriptors<'l> = Tracked<'l, Vec<Option<Tracked<'l, String>>>>;

/// Which buffer a translation path was acquiring when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// The v1 record array.
    DefinitionTable,
    /// A v1 record's value array.
    ValueTable,
    /// The v0 descriptor table.
    DescriptorTable,
    /// A v0 descriptor string.
    Descriptor,
    /// The v0 variable array.
    VariableTable,
    /// The host-facing copy of a registration table.
    HostTable,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::DefinitionTable => "definition table",
            Self::ValueTable => "value table",
            Self::DescriptorTable => "descriptor table",
            Self::Descriptor => "descriptor",
            Self::VariableTable => "variable table",
            Self::HostTable => "host table",
        })
    }
}

/// A translation path ran out of buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{version} translation failed at {stage}")]
pub struct TranslateError {
    /// Path that failed.
    pub version: NegotiatedVersion,
    /// Buffer being acquired or written.
    pub stage: Stage,
    /// Underlying failure.
    #[source]
    pub source: AllocError,
}

impl TranslateError {
    fn at(version: NegotiatedVersion, stage: Stage) -> impl Fn(AllocError) -> Self {
        move |source| Self {
            version,
            stage,
            source,
        }
    }
}

/// Map one canonical definition onto the v1 record shape.
///
/// Categories and categorized text have no v1 counterpart and are dropped.
pub fn to_v1<'l, 'a>(
    def: &OptionDefinition<'a>,
    values: Tracked<'l, Vec<Choice<'a>>>,
) -> DefinitionV1<'l, 'a> {
    DefinitionV1 {
        key: def.key,
        desc: def.display_name,
        info: def.description,
        default_value: def.default_value,
        values,
    }
}

/// Flatten a catalog for a v1 host.
///
/// # Errors
///
/// Fails on the first buffer that cannot be acquired; everything acquired
/// so far is released on return.
pub fn flatten_v1<'l, 'a>(
    lifecycle: &'l Lifecycle,
    catalog: &Catalog<'a>,
) -> Result<FlatOptions<'l, 'a>, TranslateError> {
    let table = TranslateError::at(NegotiatedVersion::V1, Stage::DefinitionTable);
    let value_table = TranslateError::at(NegotiatedVersion::V1, Stage::ValueTable);

    let mut defs = lifecycle.vec(catalog.len()).map_err(&table)?;
    for def in catalog.definitions {
        let mut values = lifecycle.vec(def.choices.len()).map_err(&value_table)?;
        for choice in def.choices {
            values.push(*choice).map_err(&value_table)?;
        }
        defs.push(to_v1(def, values)).map_err(&table)?;
    }
    Ok(defs)
}

/// How one descriptor is laid out.
#[derive(Debug, Clone, Copy)]
struct DescriptorPlan<'a> {
    text: Text<'a>,
    choices: &'a [Choice<'a>],
    anchor: usize,
}

impl<'a> DescriptorPlan<'a> {
    fn new(def: &OptionDefinition<'a>) -> Option<Self> {
        let text = def.display_name?;
        if def.choices.is_empty() {
            return None;
        }
        let anchor = match def.default_index() {
            Some(index) => index,
            None => {
                warn!(
                    key = def.key.as_str(),
                    default = def.default_value.map_or("", Text::as_str),
                    "default value is not among the choices; using the first choice"
                );
                0
            }
        };
        Some(Self {
            text,
            choices: def.choices,
            anchor,
        })
    }

    /// Exact byte length: text, `"; "`, every value, one `|` per non-default value.
    fn len(&self) -> usize {
        let values: usize = self.choices.iter().map(|c| c.value.len()).sum();
        self.text.len() + 2 + values + (self.choices.len() - 1)
    }

    fn pieces(self) -> impl Iterator<Item = &'a str> {
        let anchor = self.anchor;
        let others = self
            .choices
            .iter()
            .enumerate()
            .filter(move |(i, _)| *i != anchor)
            .flat_map(|(_, c)| ["|", c.value.as_str()]);
        [self.text.as_str(), "; ", self.choices[anchor].value.as_str()]
            .into_iter()
            .chain(others)
    }
}

/// The v0 descriptor for one option, or `None` when it registers empty.
#[must_use]
pub fn descriptor(def: &OptionDefinition<'_>) -> Option<String> {
    let plan = DescriptorPlan::new(def)?;
    let mut out = String::with_capacity(plan.len());
    for piece in plan.pieces() {
        out.push_str(piece);
    }
    Some(out)
}

/// Exact length of [`descriptor`]'s output.
#[must_use]
pub fn descriptor_len(def: &OptionDefinition<'_>) -> Option<usize> {
    DescriptorPlan::new(def).map(|plan| plan.len())
}

fn write_descriptor<'l>(
    lifecycle: &'l Lifecycle,
    def: &OptionDefinition<'_>,
) -> Result<Option<Tracked<'l, String>>, AllocError> {
    let Some(plan) = DescriptorPlan::new(def) else {
        return Ok(None);
    };
    let mut buf = lifecycle.string(plan.len() + 1)?;
    for piece in plan.pieces() {
        buf.push_str(piece)?;
    }
    buf.push_str("\0")?;
    Ok(Some(buf))
}

/// Build every v0 descriptor of a catalog, in catalog order.
///
/// # Errors
///
/// Fails on the first buffer that cannot be acquired.
pub fn descriptors_v0<'l>(
    lifecycle: &'l Lifecycle,
    catalog: &Catalog<'_>,
) -> Result<Descriptors<'l>, TranslateError> {
    let table = TranslateError::at(NegotiatedVersion::V0, Stage::DescriptorTable);
    let item = TranslateError::at(NegotiatedVersion::V0, Stage::Descriptor);

    let mut descriptors = lifecycle.vec(catalog.len()).map_err(&table)?;
    for def in catalog.definitions {
        let desc = write_descriptor(lifecycle, def).map_err(&item)?;
        descriptors.push(desc).map_err(&table)?;
    }
    Ok(descriptors)
}

/// Pair each key with its descriptor.
///
/// # Errors
///
/// Fails when the variable array cannot be acquired.
pub fn variables_v0<'l, 'd>(
    lifecycle: &'l Lifecycle,
    catalog: &Catalog<'d>,
    descriptors: &'d [Option<Tracked<'_, String>>],
) -> Result<Tracked<'l, Vec<Variable<'d>>>, TranslateError> {
    let table = TranslateError::at(NegotiatedVersion::V0, Stage::VariableTable);

    let mut vars = lifecycle.vec(catalog.len()).map_err(&table)?;
    for (def, desc) in catalog.definitions.iter().zip(descriptors) {
        let value = match desc {
            Some(desc) => Text::from_str_with_nul(desc.as_str()).unwrap_or_else(|| {
                warn!(key = def.key.as_str(), "descriptor is not NUL-terminated; registering it empty");
                Text::EMPTY
            }),
            None => Text::EMPTY,
        };
        vars.push(Variable {
            key: def.key,
            value,
        })
        .map_err(&table)?;
    }
    Ok(vars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::scope;
    use crate::model::Category;
    use proptest::prelude::*;
    use std::ffi::CString;

    const PICK: &[Choice<'static>] = &[
        Choice::labeled(c"a", c"Alpha"),
        Choice::labeled(c"b", c"Beta"),
        Choice::new(c"c"),
    ];
    const DEFS: &[OptionDefinition<'static>] = &[
        OptionDefinition::new(c"pick", c"Pick one", PICK, c"b")
            .with_description(c"Choose.")
            .with_display_name_categorized(c"Pick")
            .in_category(c"misc"),
        OptionDefinition::bare(c"untitled", PICK),
        OptionDefinition::new(c"empty", c"Empty", &[], c"x"),
    ];
    const CATS: &[Category<'static>] = &[Category::new(c"misc", c"Misc")];
    static CATALOG: Catalog<'static> = Catalog::new(CATS, DEFS);

    #[test]
    fn descriptor_puts_default_first() {
        assert_eq!(descriptor(&DEFS[0]).as_deref(), Some("Pick one; b|a|c"));
        assert_eq!(descriptor_len(&DEFS[0]), Some("Pick one; b|a|c".len()));
    }

    #[test]
    fn descriptor_without_text_or_choices_is_empty() {
        assert_eq!(descriptor(&DEFS[1]), None);
        assert_eq!(descriptor(&DEFS[2]), None);
    }

    #[test]
    fn unknown_default_anchors_on_first_choice() {
        let def = OptionDefinition::new(c"pick", c"Pick one", PICK, c"z");
        assert_eq!(descriptor(&def).as_deref(), Some("Pick one; a|b|c"));
    }

    #[test]
    fn single_choice_has_no_separator() {
        let only = [Choice::new(c"on")];
        let def = OptionDefinition::new(c"k", c"Title", &only, c"on");
        assert_eq!(descriptor(&def).as_deref(), Some("Title; on"));
        assert_eq!(descriptor_len(&def), Some(9));
    }

    #[test]
    fn v0_variables_pair_keys_with_descriptors() {
        let (vars, report) = scope(None, |lc| {
            let descs = descriptors_v0(lc, &CATALOG).unwrap();
            let vars = variables_v0(lc, &CATALOG, &descs).unwrap();
            vars.iter()
                .map(|v| (String::from(v.key), String::from(v.value)))
                .collect::<Vec<_>>()
        });
        assert_eq!(
            vars,
            vec![
                ("pick".to_owned(), "Pick one; b|a|c".to_owned()),
                ("untitled".to_owned(), String::new()),
                ("empty".to_owned(), String::new()),
            ]
        );
        // table + one descriptor + variable array
        assert_eq!(report.acquired, 3);
        assert!(report.is_balanced());
    }

    #[test]
    fn v0_variables_point_into_terminated_descriptors() {
        scope(None, |lc| {
            let descs = descriptors_v0(lc, &CATALOG).unwrap();
            let stored = descs[0].as_ref().unwrap();
            assert_eq!(stored.as_str(), "Pick one; b|a|c\0");
            assert_eq!(stored.capacity(), descriptor_len(&DEFS[0]).unwrap() + 1);

            let vars = variables_v0(lc, &CATALOG, &descs).unwrap();
            assert_eq!(vars[0].value.as_ptr().cast::<u8>(), stored.as_ptr());
            assert_eq!(vars[0].value.as_c_str().to_bytes(), b"Pick one; b|a|c");
            assert_eq!(vars[0].key.as_ptr(), DEFS[0].key.as_ptr());
            assert_eq!(vars[1].value, Text::EMPTY);
        });
    }

    #[test]
    fn v1_drops_category_fields() {
        let ((), report) = scope(None, |lc| {
            let flat = flatten_v1(lc, &CATALOG).unwrap();
            assert_eq!(flat.len(), 3);
            let pick = &flat[0];
            assert_eq!(pick.key, "pick");
            assert_eq!(pick.desc.map(Text::as_str), Some("Pick one"));
            assert_eq!(pick.info.map(Text::as_str), Some("Choose."));
            assert_eq!(pick.default_value.map(Text::as_str), Some("b"));
            assert_eq!(pick.values.as_slice(), PICK);
            assert!(flat[2].values.is_empty());
        });
        assert_eq!(report.acquired, 4);
        assert!(report.is_balanced());
    }

    #[test]
    fn v1_values_alias_canonical_strings() {
        scope(None, |lc| {
            let flat = flatten_v1(lc, &CATALOG).unwrap();
            let canonical = &CATALOG.definitions[0];
            assert_eq!(flat[0].key.as_ptr(), canonical.key.as_ptr());
            assert_eq!(flat[0].values[0].value.as_ptr(), canonical.choices[0].value.as_ptr());
        });
    }

    #[test]
    fn failure_reports_stage() {
        let (err, report) = scope(Some(1), |lc| flatten_v1(lc, &CATALOG).map(|_| ()));
        let err = err.unwrap_err();
        assert_eq!(err.version, NegotiatedVersion::V1);
        assert_eq!(err.stage, Stage::ValueTable);
        assert_eq!(err.to_string(), "v1 translation failed at value table");
        assert!(report.is_balanced());

        let (err, _) = scope(Some(1), |lc| descriptors_v0(lc, &CATALOG).map(|_| ()));
        assert_eq!(err.unwrap_err().stage, Stage::Descriptor);
    }

    fn c_strings(values: &[String]) -> Vec<CString> {
        values.iter().map(|v| CString::new(v.as_str()).unwrap()).collect()
    }

    fn choice_values() -> impl Strategy<Value = Vec<String>> {
        prop::collection::hash_set("[a-z0-9]{1,6}", 1..12)
            .prop_map(|set| set.into_iter().collect::<Vec<_>>())
    }

    proptest! {
        #[test]
        fn descriptor_layout(
            text in "[A-Za-z ]{1,20}",
            values in choice_values(),
            pick in any::<prop::sample::Index>(),
        ) {
            let owned = c_strings(&values);
            let title = CString::new(text.as_str()).unwrap();
            let choices: Vec<Choice<'_>> = owned.iter().map(|v| Choice::new(v)).collect();
            let default = pick.index(choices.len());
            let def = OptionDefinition::new(c"k", &title, &choices, &owned[default]);

            let out = descriptor(&def).unwrap();
            prop_assert_eq!(Some(out.len()), descriptor_len(&def));

            let (head, tail) = out.split_once("; ").unwrap();
            prop_assert_eq!(head, text.as_str());
            let listed: Vec<&str> = tail.split('|').collect();
            prop_assert_eq!(listed[0], values[default].as_str());
            let rest: Vec<&str> = values
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != default)
                .map(|(_, v)| v.as_str())
                .collect();
            prop_assert_eq!(&listed[1..], rest.as_slice());
        }

        #[test]
        fn v1_records_mirror_definitions(
            options in prop::collection::vec((choice_values(), any::<bool>()), 0..8),
        ) {
            let owned: Vec<Vec<CString>> = options.iter().map(|(values, _)| c_strings(values)).collect();
            let choice_sets: Vec<Vec<Choice<'_>>> = owned
                .iter()
                .map(|values| values.iter().map(|v| Choice::labeled(v, c"label")).collect())
                .collect();
            let keys: Vec<CString> = (0..options.len())
                .map(|i| CString::new(format!("opt_{i}")).unwrap())
                .collect();
            let defs: Vec<OptionDefinition<'_>> = options
                .iter()
                .zip(&choice_sets)
                .zip(&keys)
                .zip(&owned)
                .map(|((((_, described), choices), key), values)| {
                    let def = OptionDefinition::new(key, c"Name", choices, &values[0]);
                    if *described { def.with_description(c"Info") } else { def }
                })
                .collect();
            let catalog = Catalog::new(&[], &defs);

            let (checked, report) = scope(None, |lc| {
                let flat = flatten_v1(lc, &catalog).unwrap();
                flat.len() == defs.len()
                    && flat.iter().zip(&defs).all(|(rec, def)| {
                        rec.key == def.key
                            && rec.desc == def.display_name
                            && rec.info == def.description
                            && rec.default_value == def.default_value
                            && rec.values.as_slice() == def.choices
                    })
            });
            prop_assert!(checked);
            prop_assert_eq!(report.acquired, defs.len() + 1);
            prop_assert!(report.is_balanced());
        }

        #[test]
        fn v0_balances_under_any_limit(limit in 0usize..8) {
            let (_, report) = scope(Some(limit), |lc| {
                let descs = descriptors_v0(lc, &CATALOG)?;
                variables_v0(lc, &CATALOG, &descs).map(|vars| vars.len())
            });
            prop_assert!(report.is_balanced());
            prop_assert!(report.acquired <= limit);
        }
    }
}
