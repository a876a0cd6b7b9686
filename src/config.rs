use std::path::PathBuf;

const DEFAULT_ICON_PATH: &str = "dashboard/public/logo.png";
const DEFAULT_OUTPUT_PATH: &str = "dashboard/public/logo-composite.png";

// Rounded faces first, then broad-coverage fallbacks
const DEFAULT_FONT_CANDIDATES: [&str; 4] = [
    "/System/Library/Fonts/SFNSRounded.ttf",
    "/System/Library/Fonts/SFCompactRounded.ttf",
    "/Library/Fonts/Arial Unicode.ttf",
    "/System/Library/Fonts/Helvetica.ttc",
];

/// How the icon is turned before it stands in for the letter "C".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rotation {
    None,
    #[default]
    Clockwise90,
    CounterClockwise90,
    Half,
}

/// Composition settings. The binaries always run with `Default`, which holds
/// the fixed paths; other values are for library callers and tests.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposerConfig {
    pub icon_path: PathBuf,
    pub output_path: PathBuf,
    pub font_candidates: Vec<PathBuf>,
    pub font_index: u32,
    pub gap_ratio: f32,
    pub text_color: [u8; 4],
    pub letter_rotation: Rotation,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            icon_path: PathBuf::from(DEFAULT_ICON_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            font_candidates: DEFAULT_FONT_CANDIDATES.iter().map(PathBuf::from).collect(),
            font_index: 0,
            gap_ratio: 0.1,
            text_color: [255, 255, 255, 255],
            letter_rotation: Rotation::Clockwise90,
        }
    }
}
