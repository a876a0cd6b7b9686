use image::imageops;
use image::{ImageFormat, Rgba, RgbaImage};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{ComposerConfig, Rotation};
use crate::error::ComposeError;
use crate::font::{select_font, FontFace, TextExtent, TextRenderer};
use crate::layout::{arrange, gap_for, Extent, Layout};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoVariant {
    /// "Check" · icon · "ibe"
    Wordmark,
    /// turned icon as "C" · "heck" · icon as "V" · "ibe"
    IconLetters,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece {
    Icon(IconPose),
    Text(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconPose {
    Upright,
    Letter,
}

impl LogoVariant {
    pub fn pieces(self) -> &'static [Piece] {
        match self {
            LogoVariant::Wordmark => &[
                Piece::Text("Check"),
                Piece::Icon(IconPose::Upright),
                Piece::Text("ibe"),
            ],
            LogoVariant::IconLetters => &[
                Piece::Icon(IconPose::Letter),
                Piece::Text("heck"),
                Piece::Icon(IconPose::Upright),
                Piece::Text("ibe"),
            ],
        }
    }

    fn saved_message(self) -> &'static str {
        match self {
            LogoVariant::Wordmark => "Saved to",
            LogoVariant::IconLetters => "Saved revised logo to",
        }
    }
}

pub struct Composite {
    pub image: RgbaImage,
    pub layout: Layout,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComposeReport {
    pub output_path: PathBuf,
    pub font_path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub gap: u32,
}

pub fn load_icon(path: &Path) -> Result<RgbaImage, ComposeError> {
    if !path.exists() {
        return Err(ComposeError::IconNotFound(path.to_path_buf()));
    }

    let icon = image::open(path).map_err(|source| ComposeError::IconDecode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(icon.to_rgba8())
}

pub fn rotate(icon: &RgbaImage, rotation: Rotation) -> RgbaImage {
    match rotation {
        Rotation::None => icon.clone(),
        Rotation::Clockwise90 => imageops::rotate90(icon),
        Rotation::CounterClockwise90 => imageops::rotate270(icon),
        Rotation::Half => imageops::rotate180(icon),
    }
}

enum Element<'a> {
    Icon(&'a RgbaImage),
    Text(&'static str, TextExtent),
}

impl Element<'_> {
    fn extent(&self) -> Extent {
        match self {
            Element::Icon(img) => Extent::new(img.width(), img.height()),
            Element::Text(_, text) => Extent::new(text.width, text.height),
        }
    }
}

/// Lays out and draws one variant onto a fresh transparent canvas.
pub fn render<R: TextRenderer + ?Sized>(
    icon: &RgbaImage,
    variant: LogoVariant,
    renderer: &R,
    config: &ComposerConfig,
) -> Result<Composite, ComposeError> {
    let pieces = variant.pieces();
    let letter_icon = pieces
        .contains(&Piece::Icon(IconPose::Letter))
        .then(|| rotate(icon, config.letter_rotation));

    let elements: Vec<Element<'_>> = pieces
        .iter()
        .map(|piece| match piece {
            Piece::Icon(IconPose::Upright) => Element::Icon(icon),
            Piece::Icon(IconPose::Letter) => Element::Icon(letter_icon.as_ref().unwrap_or(icon)),
            Piece::Text(text) => Element::Text(*text, renderer.measure(text)),
        })
        .collect();

    let extents: Vec<Extent> = elements.iter().map(Element::extent).collect();
    let layout = arrange(&extents, gap_for(icon.width(), config.gap_ratio));
    if layout.width == 0 || layout.height == 0 {
        return Err(ComposeError::EmptyLayout);
    }

    let mut canvas = RgbaImage::new(layout.width, layout.height);
    let mid_y = layout.height as f32 / 2.0;
    let color = Rgba(config.text_color);

    for (element, placement) in elements.iter().zip(&layout.placements) {
        match element {
            Element::Icon(img) => {
                log::debug!("Icon at ({}, {})", placement.x, placement.y);
                imageops::overlay(&mut canvas, *img, placement.x as i64, placement.y as i64);
            }
            Element::Text(text, _) => {
                log::debug!("Text {:?} at x={}", text, placement.x);
                renderer.draw(&mut canvas, text, placement.x as i32, mid_y, color);
            }
        }
    }

    Ok(Composite {
        image: canvas,
        layout,
    })
}

pub fn save_png(canvas: &RgbaImage, path: &Path) -> Result<(), ComposeError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    canvas
        .save_with_format(path, ImageFormat::Png)
        .map_err(ComposeError::Encode)
}

/// Full pipeline: icon, font, layout, render, write.
pub fn run(variant: LogoVariant, config: &ComposerConfig) -> Result<ComposeReport, ComposeError> {
    let icon = load_icon(&config.icon_path)?;
    println!("🖼 Icon size: {}x{}", icon.width(), icon.height());

    let font_path = select_font(&config.font_candidates)?;
    println!("🔤 Using font: {}", font_path.display());

    // Point size tracks the icon height so cap height roughly matches it
    let face = FontFace::load(&font_path, icon.height() as f32, config.font_index)?;
    log::debug!("Loaded {} at {}px", face.path().display(), face.size_px());

    let composite = render(&icon, variant, &face, config)?;
    save_png(&composite.image, &config.output_path)?;
    println!("✅ {} {}", variant.saved_message(), config.output_path.display());

    Ok(ComposeReport {
        output_path: config.output_path.clone(),
        font_path,
        width: composite.layout.width,
        height: composite.layout.height,
        gap: composite.layout.gap,
    })
}
