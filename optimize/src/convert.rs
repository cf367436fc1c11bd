//! Scanning and WebP conversion.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::codecs::webp::WebPEncoder;
use image::imageops::FilterType;
use image::DynamicImage;

pub const DEFAULT_MAX_WIDTH: u32 = 1920;

const SOURCE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Files with this marker in their name are scratch copies and never converted.
const TEMP_MARKER: &str = "_temp";

#[derive(Debug)]
pub enum Outcome {
    /// `<stem>.webp` already existed and was left untouched.
    Skipped { original: u64, webp: u64 },
    Converted {
        original: u64,
        webp: u64,
        resized: bool,
    },
    Failed(anyhow::Error),
}

/// Running totals over a batch. Skipped files count toward the sizes so the
/// final percentage reflects the whole directory.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub total_original: u64,
    pub total_webp: u64,
    pub converted: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl Summary {
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Skipped { original, webp } => {
                self.skipped += 1;
                self.total_original += original;
                self.total_webp += webp;
            }
            Outcome::Converted { original, webp, .. } => {
                self.converted += 1;
                self.total_original += original;
                self.total_webp += webp;
            }
            Outcome::Failed(_) => self.failed += 1,
        }
    }

    pub fn saved_percent(&self) -> Option<f64> {
        saved_percent(self.total_original, self.total_webp)
    }
}

/// Share of `original` saved by `webp`, or `None` when there is nothing to
/// compare against.
pub fn saved_percent(original: u64, webp: u64) -> Option<f64> {
    (original > 0).then(|| (1.0 - webp as f64 / original as f64) * 100.0)
}

pub fn is_candidate(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    if name.contains(TEMP_MARKER) {
        return false;
    }
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            SOURCE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}

pub fn webp_path(source: &Path) -> PathBuf {
    source.with_extension("webp")
}

pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Source images directly inside `dir`, sorted by name.
pub fn scan(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("reading image directory {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("listing {}", dir.display()))?
            .path();
        if path.is_file() && is_candidate(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Output size for an image of `width`×`height` capped at `max_width`,
/// keeping the aspect ratio. Never enlarges.
pub fn target_dimensions(width: u32, height: u32, max_width: u32) -> (u32, u32) {
    if width <= max_width || max_width == 0 {
        return (width, height);
    }
    let scaled = (u64::from(height) * u64::from(max_width) + u64::from(width) / 2) / u64::from(width);
    (max_width, scaled.clamp(1, u64::from(u32::MAX)) as u32)
}

/// Convert one source image, unless its WebP sibling already exists.
pub fn process_file(source: &Path, max_width: u32) -> Outcome {
    let target = webp_path(source);
    let original = match file_size(source) {
        Ok(size) => size,
        Err(err) => return Outcome::Failed(err),
    };

    if target.exists() {
        return match file_size(&target) {
            Ok(webp) => Outcome::Skipped { original, webp },
            Err(err) => Outcome::Failed(err),
        };
    }

    match convert(source, &target, max_width) {
        Ok((webp, resized)) => Outcome::Converted {
            original,
            webp,
            resized,
        },
        Err(err) => Outcome::Failed(err),
    }
}

fn file_size(path: &Path) -> Result<u64> {
    Ok(fs::metadata(path)
        .with_context(|| format!("reading metadata of {}", path.display()))?
        .len())
}

/// Returns the written size and whether the image was downscaled. The file is
/// only created once encoding succeeded, so a failed run never leaves a
/// truncated `.webp` that the next run would skip.
fn convert(source: &Path, target: &Path, max_width: u32) -> Result<(u64, bool)> {
    let img = image::open(source).with_context(|| format!("decoding {}", source.display()))?;

    let (width, height) = target_dimensions(img.width(), img.height(), max_width);
    let resized = width != img.width();
    let img = if resized {
        img.resize_exact(width, height, FilterType::Lanczos3)
    } else {
        img
    };

    // The lossless WebP encoder only accepts 8-bit RGB(A).
    let img = if img.color().has_alpha() {
        DynamicImage::ImageRgba8(img.to_rgba8())
    } else {
        DynamicImage::ImageRgb8(img.to_rgb8())
    };

    let mut encoded = Cursor::new(Vec::new());
    img.write_with_encoder(WebPEncoder::new_lossless(&mut encoded))
        .with_context(|| format!("encoding {}", target.display()))?;
    let bytes = encoded.into_inner();

    fs::write(target, &bytes).with_context(|| format!("writing {}", target.display()))?;
    Ok((bytes.len() as u64, resized))
}
