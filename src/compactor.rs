// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Raster compaction: physically remove a marked seam.
//!
//! Each row (for a vertical seam) or column (for a horizontal one) is
//! compacted on its own: pixels after the marked one slide back by one
//! to close the gap.  The mask is checked before anything is copied,
//! so a mask that does not mark exactly one pixel per line is refused
//! rather than quietly eating extra pixels.

use crate::errors::CarveError;
use crate::seamfinder::Orientation;
use crate::tracer::SeamMask;
use image::{GenericImageView, ImageBuffer, Pixel, Primitive};

fn check_mask(mask: &SeamMask, width: u32, height: u32) -> Result<(), CarveError> {
    let (mask_width, mask_height) = mask.dimensions();
    if (mask_width, mask_height) != (width, height) {
        return Err(CarveError::DimensionMismatch {
            mask_width,
            mask_height,
            width,
            height,
        });
    }

    let orientation = mask.orientation();
    if orientation.breadth(width, height) < 2 {
        return Err(CarveError::DimensionExhausted {
            orientation,
            requested: 1,
            available: 0,
        });
    }

    let length = orientation.seam_length(width, height);
    let breadth = orientation.breadth(width, height);
    for along in 0..length {
        let marked = (0..breadth)
            .filter(|&across| {
                let (x, y) = orientation.to_xy(along, across);
                mask.is_marked(x, y)
            })
            .count() as u32;
        if marked != 1 {
            return Err(CarveError::MalformedSeam {
                line: along,
                marked,
            });
        }
    }
    Ok(())
}

/// Produce a copy of `image` with the masked seam removed: one column
/// narrower for a vertical seam, one row shorter for a horizontal one.
/// Unmarked pixels keep their relative order.
pub fn compact<I, P, S>(image: &I, mask: &SeamMask) -> Result<ImageBuffer<P, Vec<S>>, CarveError>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    check_mask(mask, width, height)?;

    let orientation = mask.orientation();
    let (new_width, new_height) = match orientation {
        Orientation::Vertical => (width - 1, height),
        Orientation::Horizontal => (width, height - 1),
    };
    let mut imgbuf = ImageBuffer::new(new_width, new_height);

    let length = orientation.seam_length(width, height);
    let breadth = orientation.breadth(width, height);
    for along in 0..length {
        let mut shift = 0;
        for across in 0..breadth {
            let (x, y) = orientation.to_xy(along, across);
            if mask.is_marked(x, y) {
                shift += 1;
            } else {
                let (nx, ny) = orientation.to_xy(along, across - shift);
                imgbuf.put_pixel(nx, ny, image.get_pixel(x, y));
            }
        }
    }
    Ok(imgbuf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    fn numbered(width: u32, height: u32) -> GrayImage {
        ImageBuffer::from_fn(width, height, |x, y| Luma([(y * width + x) as u8]))
    }

    fn raw(image: &GrayImage) -> Vec<u8> {
        image.pixels().map(|p| p[0]).collect()
    }

    #[test]
    fn vertical_seam_narrows_each_row() {
        let image = numbered(4, 3);
        let mut mask = SeamMask::new(4, 3, Orientation::Vertical);
        mask.mark_pixel(1, 0);
        mask.mark_pixel(2, 1);
        mask.mark_pixel(3, 2);
        let carved = compact(&image, &mask).unwrap();
        assert_eq!(carved.dimensions(), (3, 3));
        assert_eq!(raw(&carved), vec![0, 2, 3, 4, 5, 7, 8, 9, 10]);
    }

    #[test]
    fn horizontal_seam_shortens_each_column() {
        let image = numbered(3, 3);
        let mut mask = SeamMask::new(3, 3, Orientation::Horizontal);
        mask.mark_pixel(0, 0);
        mask.mark_pixel(1, 1);
        mask.mark_pixel(2, 1);
        let carved = compact(&image, &mask).unwrap();
        assert_eq!(carved.dimensions(), (3, 2));
        assert_eq!(raw(&carved), vec![3, 1, 2, 6, 7, 8]);
    }

    #[test]
    fn surviving_pixel_count_is_preserved() {
        let image = numbered(6, 5);
        let mut mask = SeamMask::new(6, 5, Orientation::Vertical);
        for y in 0..5 {
            mask.mark_pixel(y % 2, y);
        }
        let carved = compact(&image, &mask).unwrap();
        assert_eq!(carved.dimensions(), (5, 5));
        assert_eq!(carved.pixels().count(), 6 * 5 - 5);
    }

    #[test]
    fn refuses_a_line_with_two_marks() {
        let image = numbered(3, 2);
        let mut mask = SeamMask::new(3, 2, Orientation::Vertical);
        mask.mark_pixel(0, 0);
        mask.mark_pixel(1, 1);
        mask.mark_pixel(2, 1);
        assert_eq!(
            compact(&image, &mask).unwrap_err(),
            CarveError::MalformedSeam { line: 1, marked: 2 }
        );
    }

    #[test]
    fn refuses_a_line_with_no_marks() {
        let image = numbered(3, 2);
        let mut mask = SeamMask::new(3, 2, Orientation::Horizontal);
        mask.mark_pixel(0, 0);
        mask.mark_pixel(2, 1);
        assert_eq!(
            compact(&image, &mask).unwrap_err(),
            CarveError::MalformedSeam { line: 1, marked: 0 }
        );
    }

    #[test]
    fn refuses_to_remove_the_last_column() {
        let image = numbered(1, 3);
        let mut mask = SeamMask::new(1, 3, Orientation::Vertical);
        for y in 0..3 {
            mask.mark_pixel(0, y);
        }
        match compact(&image, &mask) {
            Err(CarveError::DimensionExhausted { .. }) => (),
            other => panic!("unexpected result: {:?}", other.map(|i| i.dimensions())),
        }
    }

    #[test]
    fn refuses_a_mask_of_the_wrong_size() {
        let image = numbered(3, 3);
        let mask = SeamMask::new(4, 3, Orientation::Vertical);
        match compact(&image, &mask) {
            Err(CarveError::DimensionMismatch { .. }) => (),
            other => panic!("unexpected result: {:?}", other.map(|i| i.dimensions())),
        }
    }
}
