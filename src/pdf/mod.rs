//! Production capture and assembly collaborators built on the PDF stack.
//!
//! Capture typesets the card markup onto a single tall page and rasterises
//! it with the pdfium library; assembly slices the raster across A4 pages.
//! Both sides exchange plain RGBA buffers with [`crate::export`], keeping
//! the backend seam free of rendering types.

pub mod assembly;
pub mod fonts;
pub mod typeset;

#[cfg(feature = "pdfium")]
pub mod capture;

#[cfg(feature = "pdfium")]
pub use capture::PdfiumBackend;

use genpdf::Mm;

pub(crate) const MM_PER_INCH: f64 = 25.4;

pub(crate) fn mm_from_f64(value: f64) -> Mm {
    Mm::from(printpdf::Mm(value))
}
