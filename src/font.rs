//! Font selection and text rasterization.
//!
//! Text is measured by its ink box: the union of the pixel bounding boxes of
//! every laid-out glyph. Drawing puts the left edge of that box at the
//! requested x and centres the font's ascender/descender span on `mid_y`.

use image::{Pixel, Rgba, RgbaImage};
use rusttype::{point, Font, Point, Rect, Scale};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ComposeError;

/// Face tried when the configured face of a collection does not parse. With
/// the default `font_index` of 0 there is no second attempt.
pub const FALLBACK_FACE_INDEX: u32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextExtent {
    pub width: u32,
    pub height: u32,
    /// Horizontal distance from the pen origin to the first inked pixel.
    pub ink_left: i32,
}

pub trait TextRenderer {
    fn measure(&self, text: &str) -> TextExtent;

    fn draw(&self, canvas: &mut RgbaImage, text: &str, x: i32, mid_y: f32, color: Rgba<u8>);
}

/// Returns the first candidate that exists on disk.
pub fn select_font(candidates: &[PathBuf]) -> Result<PathBuf, ComposeError> {
    for candidate in candidates {
        if candidate.exists() {
            return Ok(candidate.clone());
        }
        log::debug!("Font candidate missing: {}", candidate.display());
    }

    Err(ComposeError::NoFont {
        candidates: candidates.to_vec(),
    })
}

pub struct FontFace {
    font: Font<'static>,
    path: PathBuf,
    size_px: f32,
    scale: Scale,
}

impl FontFace {
    pub fn load(path: &Path, size_px: f32, face_index: u32) -> Result<Self, ComposeError> {
        let data = fs::read(path).map_err(|e| ComposeError::FontLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_bytes(data, path, size_px, face_index)
    }

    pub fn from_bytes(
        data: Vec<u8>,
        path: &Path,
        size_px: f32,
        face_index: u32,
    ) -> Result<Self, ComposeError> {
        let font = match Font::try_from_vec_and_index(data.clone(), face_index) {
            Some(font) => font,
            None if face_index != FALLBACK_FACE_INDEX => {
                log::warn!(
                    "Face {} of {} did not parse, retrying face {}",
                    face_index,
                    path.display(),
                    FALLBACK_FACE_INDEX
                );
                Font::try_from_vec_and_index(data, FALLBACK_FACE_INDEX)
                    .ok_or_else(|| unparseable(path, FALLBACK_FACE_INDEX))?
            }
            None => return Err(unparseable(path, face_index)),
        };

        let scale = em_scale(&font, size_px);
        Ok(Self {
            font,
            path: path.to_path_buf(),
            size_px,
            scale,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn size_px(&self) -> f32 {
        self.size_px
    }

    fn ink_box(&self, text: &str, origin: Point<f32>) -> Option<Rect<i32>> {
        self.font
            .layout(text, self.scale, origin)
            .filter_map(|glyph| glyph.pixel_bounding_box())
            .reduce(|a, b| Rect {
                min: point(a.min.x.min(b.min.x), a.min.y.min(b.min.y)),
                max: point(a.max.x.max(b.max.x), a.max.y.max(b.max.y)),
            })
    }
}

impl TextRenderer for FontFace {
    fn measure(&self, text: &str) -> TextExtent {
        match self.ink_box(text, point(0.0, 0.0)) {
            Some(bb) => TextExtent {
                width: (bb.max.x - bb.min.x) as u32,
                height: (bb.max.y - bb.min.y) as u32,
                ink_left: bb.min.x,
            },
            None => TextExtent::default(),
        }
    }

    fn draw(&self, canvas: &mut RgbaImage, text: &str, x: i32, mid_y: f32, color: Rgba<u8>) {
        let v_metrics = self.font.v_metrics(self.scale);
        // descent is negative, so this is the baseline that puts the middle
        // of the ascender/descender span on mid_y
        let baseline = mid_y + (v_metrics.ascent + v_metrics.descent) / 2.0;
        let pen_x = (x - self.measure(text).ink_left) as f32;

        let (width, height) = canvas.dimensions();
        for glyph in self.font.layout(text, self.scale, point(pen_x, baseline)) {
            let Some(bb) = glyph.pixel_bounding_box() else {
                continue;
            };
            glyph.draw(|gx, gy, coverage| {
                let px = gx as i32 + bb.min.x;
                let py = gy as i32 + bb.min.y;
                if px < 0 || py < 0 || px as u32 >= width || py as u32 >= height {
                    return;
                }
                let alpha = (color.0[3] as f32 * coverage.clamp(0.0, 1.0)).round() as u8;
                if alpha == 0 {
                    return;
                }
                let ink = Rgba([color.0[0], color.0[1], color.0[2], alpha]);
                canvas.get_pixel_mut(px as u32, py as u32).blend(&ink);
            });
        }
    }
}

/// Scale whose em square is `size_px` tall, matching point-size semantics
/// at 72 dpi. `Scale::uniform` on its own sizes the ascender/descender span.
fn em_scale(font: &Font<'_>, size_px: f32) -> Scale {
    let v_metrics = font.v_metrics_unscaled();
    let span = v_metrics.ascent - v_metrics.descent;
    let units_per_em = font.units_per_em() as f32;
    if span <= 0.0 || units_per_em <= 0.0 {
        return Scale::uniform(size_px);
    }
    Scale::uniform(size_px * span / units_per_em)
}

fn unparseable(path: &Path, face_index: u32) -> ComposeError {
    ComposeError::FontLoad {
        path: path.to_path_buf(),
        reason: format!("face {} is not a readable TrueType/OpenType font", face_index),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Common install locations; tests that rasterize real glyphs are skipped
    /// when none is present.
    pub(crate) fn system_font() -> Option<PathBuf> {
        [
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/TTF/DejaVuSans.ttf",
            "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
            "/System/Library/Fonts/Helvetica.ttc",
            "/Library/Fonts/Arial Unicode.ttf",
            "C:\\Windows\\Fonts\\arial.ttf",
        ]
        .iter()
        .map(PathBuf::from)
        .find(|p| p.exists())
    }

    #[test]
    fn test_select_font_takes_first_existing() {
        let dir = tempfile::tempdir().unwrap();
        let second = dir.path().join("second.ttf");
        let third = dir.path().join("third.ttf");
        fs::write(&second, b"x").unwrap();
        fs::write(&third, b"x").unwrap();

        let candidates = vec![dir.path().join("first.ttf"), second.clone(), third];
        assert_eq!(select_font(&candidates).unwrap(), second);
    }

    #[test]
    fn test_select_font_none_exist() {
        let dir = tempfile::tempdir().unwrap();
        let candidates = vec![dir.path().join("a.ttf"), dir.path().join("b.ttc")];

        match select_font(&candidates) {
            Err(ComposeError::NoFont { candidates: tried }) => assert_eq!(tried, candidates),
            other => panic!("expected NoFont, got {:?}", other.map(|p| p.display().to_string())),
        }
    }

    #[test]
    fn test_garbage_bytes_fail_after_fallback() {
        let path = Path::new("broken.ttc");
        let result = FontFace::from_bytes(vec![0u8; 64], path, 64.0, 3);
        assert!(matches!(result, Err(ComposeError::FontLoad { .. })));
    }

    #[test]
    fn test_unreadable_file_is_font_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = FontFace::load(&dir.path().join("missing.ttf"), 64.0, 0);
        assert!(matches!(result, Err(ComposeError::FontLoad { .. })));
    }

    #[test]
    fn test_measure_real_font() {
        let Some(path) = system_font() else {
            eprintln!("no system font available, skipping");
            return;
        };
        let face = FontFace::load(&path, 64.0, 0).unwrap();

        let check = face.measure("Check");
        let ibe = face.measure("ibe");
        assert!(check.width > ibe.width);
        assert!(check.height > 0 && check.height <= 128);
        assert_eq!(face.measure(""), TextExtent::default());
        assert_eq!(face.measure("   ").width, 0);
    }

    #[test]
    fn test_draw_stays_inside_ink_columns() {
        let Some(path) = system_font() else {
            eprintln!("no system font available, skipping");
            return;
        };
        let face = FontFace::load(&path, 48.0, 0).unwrap();
        let extent = face.measure("ibe");
        let mut canvas = RgbaImage::new(extent.width + 40, 96);

        face.draw(&mut canvas, "ibe", 20, 48.0, Rgba([255, 255, 255, 255]));

        let mut inked = 0;
        for (x, _, pixel) in canvas.enumerate_pixels() {
            if pixel.0[3] > 0 {
                inked += 1;
                assert!(x >= 20 && x < 20 + extent.width, "ink at column {}", x);
            }
        }
        assert!(inked > 0);
    }
}
