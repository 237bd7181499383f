//! Base (English) option table.
//!
//! This table is complete and authoritative: every translation is checked
//! against it, and any key or label a translation omits is shown from here.

use coreopts_core::{Catalog, Choice, OptionDefinition};

use crate::keys;

const REFRESH_RATES: &[Choice<'static>] = &[
    Choice::labeled(c"50", c"50Hz"),
    Choice::labeled(c"60", c"60Hz"),
    Choice::labeled(c"75", c"75Hz"),
    Choice::labeled(c"100", c"100Hz"),
    Choice::labeled(c"120", c"120Hz"),
];

const ROTATIONS: &[Choice<'static>] = &[
    Choice::labeled(c"Auto", c"Auto"),
    Choice::labeled(c"None", c"Disabled"),
    Choice::labeled(c"270", c"Left"),
    Choice::labeled(c"180", c"Bottom"),
    Choice::labeled(c"90", c"Right"),
];

#[cfg(feature = "xrgb8888")]
const COLOR_DEPTHS: &[Choice<'static>] = &[
    Choice::labeled(c"16bit", c"Thousands (16-bit)"),
    Choice::labeled(c"24bit", c"Millions (24-bit)"),
];

const FRAMESKIP_MODES: &[Choice<'static>] = &[
    Choice::new(c"disabled"),
    Choice::labeled(c"auto", c"Auto"),
    Choice::labeled(c"manual", c"Manual"),
];

const FRAMESKIP_THRESHOLDS: &[Choice<'static>] = &[
    Choice::new(c"15"),
    Choice::new(c"18"),
    Choice::new(c"21"),
    Choice::new(c"24"),
    Choice::new(c"27"),
    Choice::new(c"30"),
    Choice::new(c"33"),
    Choice::new(c"36"),
    Choice::new(c"39"),
    Choice::new(c"42"),
    Choice::new(c"45"),
    Choice::new(c"48"),
    Choice::new(c"51"),
    Choice::new(c"54"),
    Choice::new(c"57"),
    Choice::new(c"60"),
];

const CROP_SIDE: &[Choice<'static>] = &[
    Choice::new(c"disabled"),
    Choice::new(c"2"),
    Choice::new(c"4"),
    Choice::new(c"6"),
    Choice::new(c"8"),
    Choice::new(c"10"),
    Choice::new(c"12"),
    Choice::new(c"14"),
    Choice::new(c"16"),
    Choice::new(c"18"),
    Choice::new(c"20"),
    Choice::new(c"22"),
    Choice::new(c"24"),
    Choice::new(c"26"),
    Choice::new(c"28"),
];

const CROP_TOP: &[Choice<'static>] = &[
    Choice::new(c"disabled"),
    Choice::new(c"2"),
    Choice::new(c"4"),
    Choice::new(c"6"),
    Choice::new(c"8"),
    Choice::new(c"10"),
    Choice::new(c"12"),
    Choice::new(c"14"),
    Choice::new(c"16"),
    Choice::new(c"18"),
    Choice::new(c"20"),
    Choice::new(c"22"),
    Choice::new(c"24"),
    Choice::new(c"26"),
    Choice::new(c"28"),
    Choice::new(c"30"),
    Choice::new(c"32"),
    Choice::new(c"34"),
    Choice::new(c"36"),
    Choice::new(c"38"),
    Choice::new(c"40"),
    Choice::new(c"42"),
    Choice::new(c"44"),
    Choice::new(c"46"),
    Choice::new(c"48"),
    Choice::new(c"50"),
    Choice::new(c"52"),
    Choice::new(c"54"),
    Choice::new(c"56"),
    Choice::new(c"58"),
    Choice::new(c"60"),
    Choice::new(c"62"),
];

const OVERCLOCK: &[Choice<'static>] = &[
    Choice::new(c"1"),
    Choice::new(c"2"),
    Choice::new(c"3"),
    Choice::new(c"4"),
    Choice::new(c"5"),
    Choice::new(c"6"),
    Choice::new(c"7"),
    Choice::new(c"8"),
    Choice::new(c"9"),
    Choice::new(c"10"),
    Choice::new(c"20"),
    Choice::new(c"30"),
    Choice::new(c"40"),
    Choice::new(c"50"),
];

const GHOSTING: &[Choice<'static>] = &[
    Choice::new(c"disabled"),
    Choice::labeled(c"2frames", c"2 Frames"),
    Choice::labeled(c"3frames", c"3 Frames"),
    Choice::labeled(c"4frames", c"4 Frames"),
];

/// Master volume from 0% to 200% in two-percent steps.
///
/// A host value table holds at most 127 values, so the 201 one-percent
/// steps of earlier releases cannot be registered. A saved configuration
/// holding an odd level such as `101` no longer names a listed value, and
/// the host resets that entry to the default `100`.
const VOLUME_LEVELS: &[Choice<'static>] = &[
    Choice::labeled(c"0", c"0%"),
    Choice::labeled(c"2", c"2%"),
    Choice::labeled(c"4", c"4%"),
    Choice::labeled(c"6", c"6%"),
    Choice::labeled(c"8", c"8%"),
    Choice::labeled(c"10", c"10%"),
    Choice::labeled(c"12", c"12%"),
    Choice::labeled(c"14", c"14%"),
    Choice::labeled(c"16", c"16%"),
    Choice::labeled(c"18", c"18%"),
    Choice::labeled(c"20", c"20%"),
    Choice::labeled(c"22", c"22%"),
    Choice::labeled(c"24", c"24%"),
    Choice::labeled(c"26", c"26%"),
    Choice::labeled(c"28", c"28%"),
    Choice::labeled(c"30", c"30%"),
    Choice::labeled(c"32", c"32%"),
    Choice::labeled(c"34", c"34%"),
    Choice::labeled(c"36", c"36%"),
    Choice::labeled(c"38", c"38%"),
    Choice::labeled(c"40", c"40%"),
    Choice::labeled(c"42", c"42%"),
    Choice::labeled(c"44", c"44%"),
    Choice::labeled(c"46", c"46%"),
    Choice::labeled(c"48", c"48%"),
    Choice::labeled(c"50", c"50%"),
    Choice::labeled(c"52", c"52%"),
    Choice::labeled(c"54", c"54%"),
    Choice::labeled(c"56", c"56%"),
    Choice::labeled(c"58", c"58%"),
    Choice::labeled(c"60", c"60%"),
    Choice::labeled(c"62", c"62%"),
    Choice::labeled(c"64", c"64%"),
    Choice::labeled(c"66", c"66%"),
    Choice::labeled(c"68", c"68%"),
    Choice::labeled(c"70", c"70%"),
    Choice::labeled(c"72", c"72%"),
    Choice::labeled(c"74", c"74%"),
    Choice::labeled(c"76", c"76%"),
    Choice::labeled(c"78", c"78%"),
    Choice::labeled(c"80", c"80%"),
    Choice::labeled(c"82", c"82%"),
    Choice::labeled(c"84", c"84%"),
    Choice::labeled(c"86", c"86%"),
    Choice::labeled(c"88", c"88%"),
    Choice::labeled(c"90", c"90%"),
    Choice::labeled(c"92", c"92%"),
    Choice::labeled(c"94", c"94%"),
    Choice::labeled(c"96", c"96%"),
    Choice::labeled(c"98", c"98%"),
    Choice::labeled(c"100", c"100%"),
    Choice::labeled(c"102", c"102%"),
    Choice::labeled(c"104", c"104%"),
    Choice::labeled(c"106", c"106%"),
    Choice::labeled(c"108", c"108%"),
    Choice::labeled(c"110", c"110%"),
    Choice::labeled(c"112", c"112%"),
    Choice::labeled(c"114", c"114%"),
    Choice::labeled(c"116", c"116%"),
    Choice::labeled(c"118", c"118%"),
    Choice::labeled(c"120", c"120%"),
    Choice::labeled(c"122", c"122%"),
    Choice::labeled(c"124", c"124%"),
    Choice::labeled(c"126", c"126%"),
    Choice::labeled(c"128", c"128%"),
    Choice::labeled(c"130", c"130%"),
    Choice::labeled(c"132", c"132%"),
    Choice::labeled(c"134", c"134%"),
    Choice::labeled(c"136", c"136%"),
    Choice::labeled(c"138", c"138%"),
    Choice::labeled(c"140", c"140%"),
    Choice::labeled(c"142", c"142%"),
    Choice::labeled(c"144", c"144%"),
    Choice::labeled(c"146", c"146%"),
    Choice::labeled(c"148", c"148%"),
    Choice::labeled(c"150", c"150%"),
    Choice::labeled(c"152", c"152%"),
    Choice::labeled(c"154", c"154%"),
    Choice::labeled(c"156", c"156%"),
    Choice::labeled(c"158", c"158%"),
    Choice::labeled(c"160", c"160%"),
    Choice::labeled(c"162", c"162%"),
    Choice::labeled(c"164", c"164%"),
    Choice::labeled(c"166", c"166%"),
    Choice::labeled(c"168", c"168%"),
    Choice::labeled(c"170", c"170%"),
    Choice::labeled(c"172", c"172%"),
    Choice::labeled(c"174", c"174%"),
    Choice::labeled(c"176", c"176%"),
    Choice::labeled(c"178", c"178%"),
    Choice::labeled(c"180", c"180%"),
    Choice::labeled(c"182", c"182%"),
    Choice::labeled(c"184", c"184%"),
    Choice::labeled(c"186", c"186%"),
    Choice::labeled(c"188", c"188%"),
    Choice::labeled(c"190", c"190%"),
    Choice::labeled(c"192", c"192%"),
    Choice::labeled(c"194", c"194%"),
    Choice::labeled(c"196", c"196%"),
    Choice::labeled(c"198", c"198%"),
    Choice::labeled(c"200", c"200%"),
];

const LOWPASS_LEVELS: &[Choice<'static>] = &[
    Choice::labeled(c"0", c"0%"),
    Choice::labeled(c"1", c"1%"),
    Choice::labeled(c"2", c"2%"),
    Choice::labeled(c"3", c"3%"),
    Choice::labeled(c"4", c"4%"),
    Choice::labeled(c"5", c"5%"),
    Choice::labeled(c"6", c"6%"),
    Choice::labeled(c"7", c"7%"),
    Choice::labeled(c"8", c"8%"),
    Choice::labeled(c"9", c"9%"),
    Choice::labeled(c"10", c"10%"),
    Choice::labeled(c"11", c"11%"),
    Choice::labeled(c"12", c"12%"),
    Choice::labeled(c"13", c"13%"),
    Choice::labeled(c"14", c"14%"),
    Choice::labeled(c"15", c"15%"),
    Choice::labeled(c"16", c"16%"),
    Choice::labeled(c"17", c"17%"),
    Choice::labeled(c"18", c"18%"),
    Choice::labeled(c"19", c"19%"),
    Choice::labeled(c"20", c"20%"),
    Choice::labeled(c"21", c"21%"),
    Choice::labeled(c"22", c"22%"),
    Choice::labeled(c"23", c"23%"),
    Choice::labeled(c"24", c"24%"),
    Choice::labeled(c"25", c"25%"),
    Choice::labeled(c"26", c"26%"),
    Choice::labeled(c"27", c"27%"),
    Choice::labeled(c"28", c"28%"),
    Choice::labeled(c"29", c"29%"),
    Choice::labeled(c"30", c"30%"),
    Choice::labeled(c"31", c"31%"),
    Choice::labeled(c"32", c"32%"),
    Choice::labeled(c"33", c"33%"),
    Choice::labeled(c"34", c"34%"),
    Choice::labeled(c"35", c"35%"),
    Choice::labeled(c"36", c"36%"),
    Choice::labeled(c"37", c"37%"),
    Choice::labeled(c"38", c"38%"),
    Choice::labeled(c"39", c"39%"),
    Choice::labeled(c"40", c"40%"),
    Choice::labeled(c"41", c"41%"),
    Choice::labeled(c"42", c"42%"),
    Choice::labeled(c"43", c"43%"),
    Choice::labeled(c"44", c"44%"),
    Choice::labeled(c"45", c"45%"),
    Choice::labeled(c"46", c"46%"),
    Choice::labeled(c"47", c"47%"),
    Choice::labeled(c"48", c"48%"),
    Choice::labeled(c"49", c"49%"),
    Choice::labeled(c"50", c"50%"),
    Choice::labeled(c"51", c"51%"),
    Choice::labeled(c"52", c"52%"),
    Choice::labeled(c"53", c"53%"),
    Choice::labeled(c"54", c"54%"),
    Choice::labeled(c"55", c"55%"),
    Choice::labeled(c"56", c"56%"),
    Choice::labeled(c"57", c"57%"),
    Choice::labeled(c"58", c"58%"),
    Choice::labeled(c"59", c"59%"),
    Choice::labeled(c"60", c"60%"),
    Choice::labeled(c"61", c"61%"),
    Choice::labeled(c"62", c"62%"),
    Choice::labeled(c"63", c"63%"),
    Choice::labeled(c"64", c"64%"),
    Choice::labeled(c"65", c"65%"),
    Choice::labeled(c"66", c"66%"),
    Choice::labeled(c"67", c"67%"),
    Choice::labeled(c"68", c"68%"),
    Choice::labeled(c"69", c"69%"),
    Choice::labeled(c"70", c"70%"),
    Choice::labeled(c"71", c"71%"),
    Choice::labeled(c"72", c"72%"),
    Choice::labeled(c"73", c"73%"),
    Choice::labeled(c"74", c"74%"),
    Choice::labeled(c"75", c"75%"),
    Choice::labeled(c"76", c"76%"),
    Choice::labeled(c"77", c"77%"),
    Choice::labeled(c"78", c"78%"),
    Choice::labeled(c"79", c"79%"),
    Choice::labeled(c"80", c"80%"),
    Choice::labeled(c"81", c"81%"),
    Choice::labeled(c"82", c"82%"),
    Choice::labeled(c"83", c"83%"),
    Choice::labeled(c"84", c"84%"),
    Choice::labeled(c"85", c"85%"),
    Choice::labeled(c"86", c"86%"),
    Choice::labeled(c"87", c"87%"),
    Choice::labeled(c"88", c"88%"),
    Choice::labeled(c"89", c"89%"),
    Choice::labeled(c"90", c"90%"),
    Choice::labeled(c"91", c"91%"),
    Choice::labeled(c"92", c"92%"),
    Choice::labeled(c"93", c"93%"),
    Choice::labeled(c"94", c"94%"),
    Choice::labeled(c"95", c"95%"),
    Choice::labeled(c"96", c"96%"),
    Choice::labeled(c"97", c"97%"),
    Choice::labeled(c"98", c"98%"),
    Choice::labeled(c"99", c"99%"),
];

/// Base definitions in registration order.
pub const DEFINITIONS: &[OptionDefinition<'static>] = &[
    OptionDefinition::new(keys::REFRESH_RATE, c"Video Refresh Rate", REFRESH_RATES, c"75")
        .with_description(
            c"Set video update frequency. Internally, the Lynx renders at a variable rate from 0 to 75Hz. Frames that occur between video update events will be dropped. Higher rates may increase video smoothness (depending on actual game frame rate) but can cause tearing on 60Hz displays.",
        ),
    OptionDefinition::new(keys::ROTATION, c"Display Rotation", ROTATIONS, c"Auto").with_description(
        c"Rotate the virtual console screen to achieve the correct layout of 'portrait' oriented games on a conventional (landscape) display.",
    ),
    #[cfg(feature = "xrgb8888")]
    OptionDefinition::new(
        keys::COLOR_DEPTH,
        c"Color Depth (Restart Required)",
        COLOR_DEPTHS,
        c"24bit",
    )
    .with_description(
        c"Specify number of colors to display on-screen. 24-bit significantly increases performance overheads and is not available on all platforms.",
    ),
    OptionDefinition::new(keys::FRAMESKIP, c"Frameskip", FRAMESKIP_MODES, c"disabled").with_description(
        c"Skip frames to avoid audio buffer under-run (crackling). Improves performance at the expense of visual smoothness. 'Auto' skips frames when advised by the frontend. 'Manual' utilizes the 'Frameskip Threshold (%)' setting.",
    ),
    OptionDefinition::new(
        keys::FRAMESKIP_THRESHOLD,
        c"Frameskip Threshold (%)",
        FRAMESKIP_THRESHOLDS,
        c"33",
    )
    .with_description(
        c"When 'Frameskip' is set to 'Manual', specifies the audio buffer occupancy threshold (percentage) below which frames will be skipped. Higher values reduce the risk of crackling by causing frames to be dropped more frequently.",
    ),
    OptionDefinition::new(keys::CROP_SIDE, c"Border Crop Left - Right", CROP_SIDE, c"disabled")
        .with_description(c"Crop left and right sides of border."),
    OptionDefinition::new(keys::CROP_TOP, c"Border Crop Top - Bottom", CROP_TOP, c"disabled")
        .with_description(c"Crop top and bottom sides of border."),
    OptionDefinition::new(keys::OVERCLOCK, c"CPU Overclock Multiplier", OVERCLOCK, c"1").with_description(
        c"Higher values can reduce slowdowns in games. WARNING: Can cause glitches and crashes.",
    ),
    OptionDefinition::new(keys::LCD_GHOSTING, c"LCD Ghosting Filter", GHOSTING, c"disabled").with_description(
        c"Apply an image 'ghosting' effect by blending multiple successive video frames. Mimics the display characteristics of the Lynx's LCD panel and helps to smooth the appearance of low frame rate games. Higher frame counts improve the effect at the expense of increased performance overheads.",
    ),
    OptionDefinition::new(keys::MASTER_VOLUME, c"Volume Level", VOLUME_LEVELS, c"100"),
    OptionDefinition::new(keys::LOWPASS_FILTER, c"Lowpass Filter", LOWPASS_LEVELS, c"0"),
];

/// The base catalog. It defines no categories.
pub static US: Catalog<'static> = Catalog::new(&[], DEFINITIONS);
