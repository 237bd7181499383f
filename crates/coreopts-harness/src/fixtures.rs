//! Catalog fixtures.
//!
//! [`MIXED`] covers what the shipped catalog does not: categories,
//! categorized text, and an option relying on the first-choice default.
//! [`DEFECTIVE`] only loads in lenient mode: one option defaults to a value
//! it does not offer and another has no title.

use coreopts_core::{Catalog, CatalogSet, Category, Choice, Language, OptionDefinition};

const SPEEDS: &[Choice<'static>] = &[
    Choice::labeled(c"slow", c"Slow"),
    Choice::labeled(c"normal", c"Normal"),
    Choice::labeled(c"fast", c"Fast"),
];

const ONOFF: &[Choice<'static>] = &[
    Choice::labeled(c"enabled", c"Enabled"),
    Choice::labeled(c"disabled", c"Disabled"),
];

const PALETTES: &[Choice<'static>] = &[
    Choice::new(c"grey"),
    Choice::new(c"amber"),
    Choice::new(c"green"),
];

const CATEGORIES: &[Category<'static>] = &[
    Category::new(c"system", c"System").with_description(c"Emulated hardware."),
    Category::new(c"video", c"Video"),
];

const DEFINITIONS: &[OptionDefinition<'static>] = &[
    OptionDefinition::new(c"fx_speed", c"Emulation Speed", SPEEDS, c"normal")
        .with_display_name_categorized(c"Speed")
        .with_description(c"How fast the emulated CPU runs.")
        .with_description_categorized(c"CPU speed.")
        .in_category(c"system"),
    OptionDefinition::new(c"fx_blend", c"Frame Blending", ONOFF, c"disabled").in_category(c"video"),
    OptionDefinition::bare(c"fx_palette", PALETTES).with_display_name(c"Palette"),
];

/// Base catalog of [`MIXED`].
pub static MIXED_BASE: Catalog<'static> = Catalog::new(CATEGORIES, DEFINITIONS);

const SPEEDS_FR: &[Choice<'static>] = &[
    Choice::labeled(c"slow", c"Lent"),
    Choice::labeled(c"fast", c"Rapide"),
];

const CATEGORIES_FR: &[Category<'static>] = &[Category::new(c"system", c"Système")];

const DEFINITIONS_FR: &[OptionDefinition<'static>] = &[
    OptionDefinition::bare(c"fx_speed", SPEEDS_FR)
        .with_display_name(c"Vitesse d'émulation")
        .with_display_name_categorized(c"Vitesse"),
    OptionDefinition::bare(c"fx_palette", &[]).with_description(c"Couleurs de l'écran."),
];

/// French half of [`MIXED`]: two of three options, partly translated.
pub static MIXED_FR: Catalog<'static> = Catalog::new(CATEGORIES_FR, DEFINITIONS_FR);

/// Fixture set with a French translation.
pub static MIXED: CatalogSet<'static> =
    CatalogSet::new(&MIXED_BASE).with_translation(Language::French, &MIXED_FR);

const DEFECTIVE_DEFINITIONS: &[OptionDefinition<'static>] = &[
    OptionDefinition::new(c"fx_speed", c"Emulation Speed", SPEEDS, c"ludicrous"),
    OptionDefinition::new(c"fx_blend", c"Frame Blending", ONOFF, c"disabled"),
    OptionDefinition::bare(c"fx_hidden", ONOFF).with_default(c"enabled"),
];

static DEFECTIVE_BASE: Catalog<'static> = Catalog::new(&[], DEFECTIVE_DEFINITIONS);

/// A set with an unknown default and an untitled option.
pub static DEFECTIVE: CatalogSet<'static> = CatalogSet::new(&DEFECTIVE_BASE);
