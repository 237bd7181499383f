//! Partial translations.
//!
//! Each table lists only what it translates. Keys it omits, and any field
//! or choice label left out of a listed key, are shown from [`crate::us::US`].

use coreopts_core::{Catalog, Choice, OptionDefinition};

use crate::keys;

const ROTATIONS_FR: &[Choice<'static>] = &[
    Choice::labeled(c"None", c"Désactivé"),
    Choice::labeled(c"270", c"Gauche"),
    Choice::labeled(c"180", c"Bas"),
    Choice::labeled(c"90", c"Droite"),
];

const FRAMESKIP_MODES_FR: &[Choice<'static>] = &[
    Choice::labeled(c"disabled", c"Désactivé"),
    Choice::labeled(c"manual", c"Manuel"),
];

const GHOSTING_FR: &[Choice<'static>] = &[
    Choice::labeled(c"disabled", c"Désactivé"),
    Choice::labeled(c"2frames", c"2 images"),
    Choice::labeled(c"3frames", c"3 images"),
    Choice::labeled(c"4frames", c"4 images"),
];

/// French definitions, wrapped by [`FR`].
pub const DEFINITIONS_FR: &[OptionDefinition<'static>] = &[
    OptionDefinition::bare(keys::REFRESH_RATE, &[])
        .with_display_name(c"Fréquence de rafraîchissement vidéo"),
    OptionDefinition::bare(keys::ROTATION, ROTATIONS_FR)
        .with_display_name(c"Rotation de l'affichage")
        .with_description(
            c"Faire pivoter l'écran de la console virtuelle pour afficher correctement les jeux orientés 'portrait' sur un écran conventionnel (paysage).",
        ),
    #[cfg(feature = "xrgb8888")]
    OptionDefinition::bare(keys::COLOR_DEPTH, &[])
        .with_display_name(c"Profondeur des couleurs (Redémarrage requis)"),
    OptionDefinition::bare(keys::FRAMESKIP, FRAMESKIP_MODES_FR).with_display_name(c"Saut d'images"),
    OptionDefinition::bare(keys::LCD_GHOSTING, GHOSTING_FR)
        .with_display_name(c"Filtre d'images fantômes LCD"),
    OptionDefinition::bare(keys::MASTER_VOLUME, &[]).with_display_name(c"Niveau du volume"),
];

/// French.
pub static FR: Catalog<'static> = Catalog::new(&[], DEFINITIONS_FR);

const ROTATIONS_DE: &[Choice<'static>] = &[
    Choice::labeled(c"None", c"Deaktiviert"),
    Choice::labeled(c"270", c"Links"),
    Choice::labeled(c"180", c"Unten"),
    Choice::labeled(c"90", c"Rechts"),
];

/// German definitions, wrapped by [`DE`].
pub const DEFINITIONS_DE: &[OptionDefinition<'static>] = &[
    OptionDefinition::bare(keys::REFRESH_RATE, &[])
        .with_display_name(c"Video-Bildwiederholfrequenz"),
    OptionDefinition::bare(keys::ROTATION, ROTATIONS_DE).with_display_name(c"Bildschirmdrehung"),
    OptionDefinition::bare(keys::OVERCLOCK, &[])
        .with_display_name(c"CPU-Übertaktungsfaktor")
        .with_description(
            c"Höhere Werte können Verlangsamungen in Spielen verringern. WARNUNG: Kann Grafikfehler und Abstürze verursachen.",
        ),
    OptionDefinition::bare(keys::MASTER_VOLUME, &[]).with_display_name(c"Lautstärke"),
];

/// German.
pub static DE: Catalog<'static> = Catalog::new(&[], DEFINITIONS_DE);

const FRAMESKIP_MODES_ES: &[Choice<'static>] = &[
    Choice::labeled(c"disabled", c"Desactivado"),
    Choice::labeled(c"auto", c"Automático"),
];

/// Spanish definitions, wrapped by [`ES`].
pub const DEFINITIONS_ES: &[OptionDefinition<'static>] = &[
    OptionDefinition::bare(keys::REFRESH_RATE, &[])
        .with_display_name(c"Frecuencia de actualización de vídeo"),
    OptionDefinition::bare(keys::FRAMESKIP, FRAMESKIP_MODES_ES)
        .with_display_name(c"Omisión de fotogramas"),
    OptionDefinition::bare(keys::CROP_SIDE, &[])
        .with_display_name(c"Recortar bordes izquierdo y derecho"),
    OptionDefinition::bare(keys::CROP_TOP, &[])
        .with_display_name(c"Recortar bordes superior e inferior"),
];

/// Spanish.
pub static ES: Catalog<'static> = Catalog::new(&[], DEFINITIONS_ES);
