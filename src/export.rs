//! Building blocks of the PDF export.
//!
//! The export pipeline is capture, paginate, assemble, write.  This module
//! owns everything except the component orchestration in [`crate::view`]:
//! the Idle/Exporting guard and its RAII ticket, the capture options, the
//! output page geometry, the pagination arithmetic, the raster exchanged
//! between the collaborators, and the [`ExportBackend`] seam the production
//! implementation and the test doubles both plug into.

use std::cell::Cell;
use std::error::Error as StdError;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::markup::Node;
use crate::theme::{self, Rgb};

/// User notice queued when an export fails for any reason.
pub const EXPORT_FAILURE_NOTICE: &str = "Error generating PDF. Please try again.";

/// Slack applied when deciding whether a remainder still needs a page, so
/// floating point dust cannot produce a trailing blank page.
const PAGE_FIT_TOLERANCE_MM: f64 = 1e-6;

/// The two states of the export guard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportState {
    #[default]
    Idle,
    Exporting,
}

/// Exclusive permission to run one export.
///
/// Acquiring the ticket flips the guard to [`ExportState::Exporting`];
/// dropping it restores [`ExportState::Idle`].  Because the reset lives in
/// `Drop`, early returns and panics cannot leave the guard stuck.
pub struct ExportTicket<'a> {
    state: &'a Cell<ExportState>,
}

impl<'a> ExportTicket<'a> {
    /// Claims the guard, or returns `None` if an export is already running.
    pub fn acquire(state: &'a Cell<ExportState>) -> Option<Self> {
        if state.get() == ExportState::Exporting {
            return None;
        }
        state.set(ExportState::Exporting);
        Some(Self { state })
    }
}

impl Drop for ExportTicket<'_> {
    fn drop(&mut self) {
        self.state.set(ExportState::Idle);
    }
}

/// Options handed to the capture collaborator.
#[derive(Clone, Debug, PartialEq)]
pub struct CaptureOptions {
    /// Raster upscale factor relative to the on-screen size.
    pub scale: f64,
    /// Opaque fill painted behind the captured region.
    pub background: Rgb,
    /// Whether remotely hosted images may be included in the capture.
    pub allow_cross_origin: bool,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            scale: 2.0,
            background: theme::PAGE_BACKGROUND,
            allow_cross_origin: true,
        }
    }
}

/// Output page geometry, in millimetres.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageGeometry {
    pub width_mm: f64,
    pub height_mm: f64,
}

impl PageGeometry {
    /// A4 portrait, the geometry the export always uses.
    pub fn a4_portrait() -> Self {
        Self {
            width_mm: 210.0,
            height_mm: 297.0,
        }
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::a4_portrait()
    }
}

/// Raw RGBA pixels produced by the capture collaborator.
#[derive(Clone, Debug, PartialEq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl RasterImage {
    /// Wraps raw RGBA bytes, validating them against the dimensions.
    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self, ExportError> {
        if width == 0 || height == 0 {
            return Err(ExportError::InvalidRaster(format!(
                "raster has no pixels ({}x{})",
                width, height
            )));
        }
        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected {
            return Err(ExportError::InvalidRaster(format!(
                "raster length {} does not match {}x{} RGBA",
                rgba.len(),
                width,
                height
            )));
        }
        Ok(Self {
            width,
            height,
            rgba,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The RGBA bytes, row-major from the top-left corner.
    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }
}

/// The pagination of one captured raster across output pages.
///
/// The raster is scaled to the full page width; `offsets_mm` holds the
/// vertical position of the image origin relative to each page top, so the
/// first entry is always zero and each following entry is one page height
/// further up.
#[derive(Clone, Debug, PartialEq)]
pub struct PagePlan {
    geometry: PageGeometry,
    image_width_mm: f64,
    image_height_mm: f64,
    offsets_mm: Vec<f64>,
}

impl PagePlan {
    /// The page geometry the plan was computed for.
    pub fn geometry(&self) -> PageGeometry {
        self.geometry
    }

    /// Scaled image width in millimetres (equal to the page width).
    pub fn image_width_mm(&self) -> f64 {
        self.image_width_mm
    }

    /// Scaled image height in millimetres.
    pub fn image_height_mm(&self) -> f64 {
        self.image_height_mm
    }

    /// Per-page vertical offsets of the image origin, in millimetres.
    pub fn offsets_mm(&self) -> &[f64] {
        &self.offsets_mm
    }

    /// Number of pages the plan emits.
    pub fn page_count(&self) -> usize {
        self.offsets_mm.len()
    }
}

/// Computes the page plan for a captured raster.
///
/// The raster is scaled to the page width; if the scaled height exceeds one
/// page, the vertical offset advances by one page height per page until the
/// remaining height is non-positive.  A height that is an exact multiple of
/// the page height therefore produces no trailing blank page.
pub fn paginate(raster: &RasterImage, geometry: PageGeometry) -> PagePlan {
    let image_width_mm = geometry.width_mm;
    let image_height_mm = raster.height() as f64 * image_width_mm / raster.width() as f64;

    let mut offsets_mm = vec![0.0];
    let mut offset = 0.0;
    let mut remaining = image_height_mm - geometry.height_mm;
    while remaining > PAGE_FIT_TOLERANCE_MM {
        offset -= geometry.height_mm;
        offsets_mm.push(offset);
        remaining -= geometry.height_mm;
    }

    PagePlan {
        geometry,
        image_width_mm,
        image_height_mm,
        offsets_mm,
    }
}

/// File name of the exported document, derived from the owner's name.
pub fn artifact_file_name(person_name: &str) -> String {
    format!("{}_Resume.pdf", person_name.trim().replace(' ', "_"))
}

/// Failures the export routine can encounter.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The capture collaborator failed to produce a raster.
    #[error("failed to capture the page region")]
    Capture(#[source] Box<dyn StdError + Send + Sync>),
    /// The assembly collaborator failed to produce a document.
    #[error("failed to assemble the PDF document")]
    Assembly(#[source] Box<dyn StdError + Send + Sync>),
    /// Raster data did not match its declared dimensions.
    #[error("invalid raster data: {0}")]
    InvalidRaster(String),
    /// Writing the finished document failed.
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ExportError {
    /// Wraps a capture collaborator failure.
    pub fn capture(source: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        ExportError::Capture(source.into())
    }

    /// Wraps an assembly collaborator failure.
    pub fn assembly(source: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        ExportError::Assembly(source.into())
    }
}

/// The capture and assembly collaborators behind one narrow seam.
///
/// `capture` renders the given markup subtree into an upscaled raster;
/// `assemble` lays the raster out across the planned pages and returns the
/// finished document bytes.  Implementations must not write to disk; the
/// caller owns the artifact.
pub trait ExportBackend {
    /// Renders the page region into a raster image.
    fn capture(&self, region: &Node, options: &CaptureOptions) -> Result<RasterImage, ExportError>;

    /// Composes the raster into a paginated document.
    fn assemble(&self, raster: &RasterImage, plan: &PagePlan) -> Result<Vec<u8>, ExportError>;
}
