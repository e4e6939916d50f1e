//! Slices the captured raster across A4 pages and renders the document.

use genpdf::elements::{Image, PageBreak};
use genpdf::{Document, Scale, Size};
use image::{DynamicImage, RgbImage, RgbaImage};

use crate::export::{ExportError, PagePlan, RasterImage};

use super::{fonts, mm_from_f64, MM_PER_INCH};

/// Resolution genpdf assumes when sizing an embedded image.
const GENPDF_IMAGE_DPI: f64 = 300.0;

/// Converts the plan's page offsets into pixel row ranges, one `(start, end)`
/// pair per page. Ranges are contiguous and cover the raster exactly; a
/// degenerate trailing range is dropped rather than emitted empty.
pub(crate) fn page_slices(raster: &RasterImage, plan: &PagePlan) -> Vec<(u32, u32)> {
    let px_per_mm = f64::from(raster.width()) / plan.image_width_mm();
    let height = raster.height();
    let offsets = plan.offsets_mm();
    let mut slices = Vec::with_capacity(offsets.len());
    for (index, offset) in offsets.iter().enumerate() {
        let start = ((-offset) * px_per_mm).round() as u32;
        let start = start.min(height);
        let end = match offsets.get(index + 1) {
            Some(next) => (((-next) * px_per_mm).round() as u32).min(height),
            None => height,
        };
        if end > start {
            slices.push((start, end));
        }
    }
    slices
}

fn raster_to_rgb(raster: &RasterImage) -> Result<RgbImage, ExportError> {
    let pixels = RgbaImage::from_raw(raster.width(), raster.height(), raster.rgba().to_vec())
        .ok_or_else(|| {
            ExportError::InvalidRaster("buffer does not form an RGBA image".to_owned())
        })?;
    Ok(DynamicImage::ImageRgba8(pixels).to_rgb8())
}

/// Builds the paginated A4 document from the raster and plan, returning the
/// rendered PDF bytes.
///
/// Pages are full bleed; each carries one slice of the raster scaled so the
/// image spans the page width.
pub fn assemble_pages(raster: &RasterImage, plan: &PagePlan) -> Result<Vec<u8>, ExportError> {
    let family = fonts::default_font_family().map_err(ExportError::assembly)?;
    let mut document = Document::new(family);
    let geometry = plan.geometry();
    document
        .set_paper_size(Size::new(mm_from_f64(geometry.width_mm), mm_from_f64(geometry.height_mm)));

    let pixels = raster_to_rgb(raster)?;
    let natural_width_mm = MM_PER_INCH * f64::from(raster.width()) / GENPDF_IMAGE_DPI;
    let scale = plan.image_width_mm() / natural_width_mm;

    let slices = page_slices(raster, plan);
    let last = slices.len().saturating_sub(1);
    for (index, (start, end)) in slices.iter().copied().enumerate() {
        let slice = image::imageops::crop_imm(&pixels, 0, start, raster.width(), end - start)
            .to_image();
        let mut page_image = Image::from_dynamic_image(DynamicImage::ImageRgb8(slice))
            .map_err(ExportError::assembly)?;
        page_image.set_scale(Scale::new(scale, scale));
        document.push(page_image);
        if index < last {
            document.push(PageBreak::new());
        }
    }

    let mut bytes = Vec::new();
    document.render(&mut bytes).map_err(ExportError::assembly)?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::{paginate, PageGeometry};

    fn raster(width: u32, height: u32) -> RasterImage {
        let rgba = vec![0u8; (width * height * 4) as usize];
        RasterImage::from_rgba(width, height, rgba).unwrap()
    }

    #[test]
    fn single_page_raster_yields_one_full_slice() {
        let raster = raster(100, 120);
        let plan = paginate(&raster, PageGeometry::a4_portrait());
        assert_eq!(page_slices(&raster, &plan), vec![(0, 120)]);
    }

    #[test]
    fn slices_are_contiguous_and_cover_the_raster() {
        let raster = raster(100, 250);
        let plan = paginate(&raster, PageGeometry::a4_portrait());
        let slices = page_slices(&raster, &plan);
        assert_eq!(slices.len(), plan.page_count());
        assert_eq!(slices.first().unwrap().0, 0);
        assert_eq!(slices.last().unwrap().1, 250);
        for pair in slices.windows(2) {
            assert_eq!(pair[0].1, pair[1].0);
        }
    }

    #[test]
    fn exact_multiple_has_no_degenerate_trailing_slice() {
        // 105 px wide means 0.5 px/mm; 297 rows are exactly two 297 mm pages.
        let raster = raster(105, 297);
        let plan = paginate(&raster, PageGeometry::a4_portrait());
        assert_eq!(plan.page_count(), 2);
        let slices = page_slices(&raster, &plan);
        assert_eq!(slices.len(), 2);
        assert!(slices.iter().all(|(start, end)| end > start));
    }
}
