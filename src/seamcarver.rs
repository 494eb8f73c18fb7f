// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - The main driver
//!
//! Removing a seam is always the same four steps: build the energy
//! field, solve it, trace the cheapest seam, compact the raster.  Every
//! removal starts over from scratch, since shrinking the image changes
//! which pixels are neighbors.  All requested vertical seams are taken
//! first, then all horizontal seams.

use crate::compactor::compact;
use crate::energy::{energy_field, EnergySource};
use crate::errors::CarveError;
use crate::seamfinder::{solve, Orientation};
use crate::tracer::{paint_seam, trace_seam, Seam, SeamMask};
use image::{GenericImageView, ImageBuffer, Pixel, Primitive};
use log::{debug, info};

/// Make sure an image of the given size can give up the requested
/// seams and still have at least one pixel left.
pub fn check_removal(
    width: u32,
    height: u32,
    vertical: u32,
    horizontal: u32,
) -> Result<(), CarveError> {
    if width == 0 || height == 0 {
        return Err(CarveError::EmptyImage { width, height });
    }
    if vertical >= width {
        return Err(CarveError::DimensionExhausted {
            orientation: Orientation::Vertical,
            requested: vertical,
            available: width - 1,
        });
    }
    if horizontal >= height {
        return Err(CarveError::DimensionExhausted {
            orientation: Orientation::Horizontal,
            requested: horizontal,
            available: height - 1,
        });
    }
    Ok(())
}

/// Energy, solve, trace: the cheapest seam of the given orientation.
pub fn find_seam<I, P, S>(image: &I, orientation: Orientation) -> Seam
where
    I: EnergySource<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    trace_seam(&solve(&energy_field(image), orientation))
}

/// Remove one seam of the given orientation.
pub fn carve_once<I, P, S>(
    image: &I,
    orientation: Orientation,
) -> Result<ImageBuffer<P, Vec<S>>, CarveError>
where
    I: EnergySource<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    let seam = find_seam(image, orientation);
    let carved = compact(image, &SeamMask::from_seam(&seam, width, height))?;
    debug!(
        "removed {} seam (cost {:.3}): {}x{} -> {}x{}",
        orientation,
        seam.cost(),
        width,
        height,
        carved.width(),
        carved.height()
    );
    Ok(carved)
}

/// A struct for holding the image to be carved.  The image is only
/// ever borrowed; every result is a freshly allocated buffer.
pub struct SeamCarver<'a, I: GenericImageView> {
    image: &'a I,
}

impl<'a, I, P, S> SeamCarver<'a, I>
where
    I: EnergySource<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
    ImageBuffer<P, Vec<S>>: EnergySource<Pixel = P>,
{
    pub fn new(image: &'a I) -> Self {
        Self { image }
    }

    fn scratch(&self) -> ImageBuffer<P, Vec<S>> {
        let image = self.image;
        ImageBuffer::from_fn(image.width(), image.height(), |x, y| image.get_pixel(x, y))
    }

    /// Remove `vertical` seams, then `horizontal` seams.  The request is
    /// checked against the image's dimensions before any work is done.
    pub fn carve(
        &self,
        vertical: u32,
        horizontal: u32,
    ) -> Result<ImageBuffer<P, Vec<S>>, CarveError> {
        let (width, height) = self.image.dimensions();
        check_removal(width, height, vertical, horizontal)?;
        info!(
            "carving {}x{} image: {} vertical, {} horizontal seams",
            width, height, vertical, horizontal
        );

        let mut scratch = self.scratch();
        for _ in 0..vertical {
            scratch = carve_once(&scratch, Orientation::Vertical)?;
        }
        for _ in 0..horizontal {
            scratch = carve_once(&scratch, Orientation::Horizontal)?;
        }

        info!("carved to {}x{}", scratch.width(), scratch.height());
        Ok(scratch)
    }

    /// A copy of the image with its next seam painted in `marker`.
    pub fn mark_seam(
        &self,
        orientation: Orientation,
        marker: P,
    ) -> Result<ImageBuffer<P, Vec<S>>, CarveError> {
        let (width, height) = self.image.dimensions();
        check_removal(width, height, 0, 0)?;
        let seam = find_seam(self.image, orientation);
        debug!("marking {} seam (cost {:.3})", orientation, seam.cost());
        let mut annotated = self.scratch();
        paint_seam(&mut annotated, &seam, marker);
        Ok(annotated)
    }
}

/// Given an image and the number of seams to take out of each axis,
/// return the carved image.
pub fn seamcarve<I, P, S>(
    image: &I,
    vertical: u32,
    horizontal: u32,
) -> Result<ImageBuffer<P, Vec<S>>, CarveError>
where
    I: EnergySource<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
    ImageBuffer<P, Vec<S>>: EnergySource<Pixel = P>,
{
    SeamCarver::new(image).carve(vertical, horizontal)
}
