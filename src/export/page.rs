//! A4 pagination of a captured raster.
//!
//! The capture is scaled to the page width; when the scaled height exceeds
//! one page, the same image is placed on successive pages with an upward
//! offset so each page shows the next slice.

use serde::{Deserialize, Serialize};

/// Page orientation for the assembled document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    /// A4 page size in millimeters, (width, height).
    pub fn page_size_mm(self) -> (f64, f64) {
        match self {
            Orientation::Portrait => (210.0, 297.0),
            Orientation::Landscape => (297.0, 210.0),
        }
    }
}

/// Placement of the capture on one output page.
///
/// The image dimensions are the same on every page; only the vertical
/// offset changes (zero or negative, in millimeters from the page top).
#[derive(Debug, Clone, PartialEq)]
pub struct PagePlacement {
    pub page_index: usize,
    pub offset_mm: f64,
    pub width_mm: f64,
    pub height_mm: f64,
}

/// Compute page placements for a capture with the given pixel aspect ratio.
///
/// The image is scaled to fill the page width. A capture that fits one page
/// is placed at the top; a taller one is repeated across pages, shifted up
/// by one page height each time, until its full height has been shown.
pub fn paginate(width_px: u32, height_px: u32, orientation: Orientation) -> Vec<PagePlacement> {
    let (page_width, page_height) = orientation.page_size_mm();
    let aspect_ratio = f64::from(height_px) / f64::from(width_px);
    let scaled_height = page_width * aspect_ratio;

    let place = |page_index: usize, offset_mm: f64| PagePlacement {
        page_index,
        offset_mm,
        width_mm: page_width,
        height_mm: scaled_height,
    };

    if scaled_height <= page_height {
        return vec![place(0, 0.0)];
    }

    let mut pages = vec![place(0, 0.0)];
    let mut height_left = scaled_height - page_height;
    while height_left > 0.0 {
        let offset = height_left - scaled_height;
        pages.push(place(pages.len(), offset));
        height_left -= page_height;
    }
    pages
}
