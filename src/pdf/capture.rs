//! Captures the card markup as a raster image.
//!
//! The card is typeset onto one deliberately tall page, rendered to PDF
//! bytes, and rasterised with the pdfium library at the requested scale.
//! Trailing background rows left by the oversized page are trimmed off.

use std::env;
use std::path::PathBuf;

use pdfium_render::prelude::*;

use crate::export::{
    CaptureOptions, ExportBackend, ExportError, PageGeometry, PagePlan, RasterImage,
};
use crate::markup::Node;
use crate::theme::Rgb;

use super::{assembly, typeset, MM_PER_INCH};

/// Environment variable naming the directory that holds the pdfium library.
pub const PDFIUM_DIR_ENV: &str = "RESUME_PAGE_PDFIUM_DIR";

/// Logical resolution of the on-screen page. Capture renders at this times
/// the configured scale.
const CSS_DPI: f64 = 96.0;

/// Height of the tall single page the card is typeset onto. Oversized on
/// purpose; unused rows are trimmed after rasterising.
const CANVAS_HEIGHT_MM: f64 = 1200.0;

/// The production backend: genpdf typesetting, pdfium rasterising.
#[derive(Clone, Copy, Debug, Default)]
pub struct PdfiumBackend;

impl PdfiumBackend {
    pub fn new() -> Self {
        Self
    }

    /// Whether a pdfium library can be located and bound. Rendering tests
    /// skip when this returns `false`.
    pub fn available() -> bool {
        bind_pdfium().is_ok()
    }
}

fn platform_library_name() -> &'static str {
    if cfg!(target_os = "windows") {
        "pdfium.dll"
    } else if cfg!(target_os = "macos") {
        "libpdfium.dylib"
    } else {
        "libpdfium.so"
    }
}

/// Search order: [`PDFIUM_DIR_ENV`], `lib/` in the working directory, `lib/`
/// next to the executable.
fn library_candidates() -> Vec<PathBuf> {
    let name = platform_library_name();
    let mut candidates = Vec::new();
    if let Some(dir) = env::var_os(PDFIUM_DIR_ENV) {
        if !dir.is_empty() {
            candidates.push(PathBuf::from(dir).join(name));
        }
    }
    if let Ok(cwd) = env::current_dir() {
        candidates.push(cwd.join("lib").join(name));
    }
    if let Ok(exe) = env::current_exe() {
        if let Some(bin_dir) = exe.parent() {
            candidates.push(bin_dir.join("lib").join(name));
        }
    }
    candidates
}

fn bind_pdfium() -> Result<Pdfium, ExportError> {
    for path in library_candidates() {
        if path.exists() {
            if let Ok(bindings) = Pdfium::bind_to_library(&path) {
                log::debug!("bound pdfium at {}", path.display());
                return Ok(Pdfium::new(bindings));
            }
        }
    }
    Pdfium::bind_to_system_library()
        .map(Pdfium::new)
        .map_err(|err| ExportError::capture(format!("pdfium library not found: {:?}", err)))
}

fn px(mm: f64, dpi: f64) -> Pixels {
    ((mm / MM_PER_INCH) * dpi).round() as Pixels
}

/// Returns the row count that keeps all content plus `keep_rows` of padding,
/// dropping trailing rows that are pure background.
fn trimmed_height(rgba: &[u8], width: u32, height: u32, background: Rgb, keep_rows: u32) -> u32 {
    let stride = width as usize * 4;
    let (r, g, b) = background;
    for row in (0..height as usize).rev() {
        let line = &rgba[row * stride..(row + 1) * stride];
        let has_content = line
            .chunks_exact(4)
            .any(|pixel| pixel[0] != r || pixel[1] != g || pixel[2] != b);
        if has_content {
            return (row as u32 + 1 + keep_rows).min(height);
        }
    }
    height
}

fn rasterize(
    pdf_bytes: &[u8],
    options: &CaptureOptions,
    page_width_mm: f64,
) -> Result<RasterImage, ExportError> {
    let pdfium = bind_pdfium()?;
    let document = pdfium.load_pdf_from_byte_slice(pdf_bytes, None).map_err(|err| {
        ExportError::capture(format!("pdfium rejected the capture document: {:?}", err))
    })?;
    let page = document
        .pages()
        .first()
        .map_err(|err| ExportError::capture(format!("capture document has no pages: {:?}", err)))?;

    let dpi = CSS_DPI * options.scale;
    let (r, g, b) = options.background;
    let config = PdfRenderConfig::new()
        .set_target_width(px(page_width_mm, dpi))
        .set_maximum_height(px(CANVAS_HEIGHT_MM, dpi) + 1)
        .clear_before_rendering(true)
        .set_clear_color(PdfColor::new(r, g, b, 255));
    let bitmap = page
        .render_with_config(&config)
        .map_err(|err| ExportError::capture(format!("pdfium rendering failed: {:?}", err)))?;

    let width = bitmap.width() as u32;
    let height = bitmap.height() as u32;
    let rgba = bitmap.as_rgba_bytes();
    let padding = ((typeset::CARD_MARGIN_MM / MM_PER_INCH) * dpi).round() as u32;
    let trimmed = trimmed_height(&rgba, width, height, options.background, padding);
    log::debug!("captured {}x{} raster, trimmed to {} rows", width, height, trimmed);
    let rgba = rgba[..trimmed as usize * width as usize * 4].to_vec();
    RasterImage::from_rgba(width, trimmed, rgba)
}

impl ExportBackend for PdfiumBackend {
    fn capture(&self, region: &Node, options: &CaptureOptions) -> Result<RasterImage, ExportError> {
        let geometry = PageGeometry::a4_portrait();
        let document = typeset::typeset_card(region, geometry.width_mm, CANVAS_HEIGHT_MM)
            .map_err(ExportError::capture)?;
        let mut bytes = Vec::new();
        document.render(&mut bytes).map_err(ExportError::capture)?;
        rasterize(&bytes, options, geometry.width_mm)
    }

    fn assemble(&self, raster: &RasterImage, plan: &PagePlan) -> Result<Vec<u8>, ExportError> {
        assembly::assemble_pages(raster, plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BG: Rgb = (10, 10, 10);

    fn rows(pattern: &[bool], width: u32) -> Vec<u8> {
        let mut rgba = Vec::new();
        for &content in pattern {
            for _ in 0..width {
                if content {
                    rgba.extend_from_slice(&[200, 200, 200, 255]);
                } else {
                    rgba.extend_from_slice(&[BG.0, BG.1, BG.2, 255]);
                }
            }
        }
        rgba
    }

    #[test]
    fn trims_trailing_background_rows() {
        let rgba = rows(&[true, true, false, false, false, false], 3);
        assert_eq!(trimmed_height(&rgba, 3, 6, BG, 0), 2);
    }

    #[test]
    fn keeps_requested_padding_rows() {
        let rgba = rows(&[true, false, false, false, false, false], 3);
        assert_eq!(trimmed_height(&rgba, 3, 6, BG, 2), 3);
    }

    #[test]
    fn padding_is_clamped_to_the_raster() {
        let rgba = rows(&[true, true, true], 3);
        assert_eq!(trimmed_height(&rgba, 3, 3, BG, 10), 3);
    }

    #[test]
    fn blank_raster_is_left_untrimmed() {
        let rgba = rows(&[false, false, false], 3);
        assert_eq!(trimmed_height(&rgba, 3, 3, BG, 0), 3);
    }

    #[test]
    fn library_search_covers_the_env_override() {
        env::set_var(PDFIUM_DIR_ENV, "/opt/pdfium");
        let candidates = library_candidates();
        env::remove_var(PDFIUM_DIR_ENV);
        let expected = PathBuf::from("/opt/pdfium").join(platform_library_name());
        assert!(candidates.contains(&expected));
    }
}
