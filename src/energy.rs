// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! The energy of a pixel is the magnitude of the color gradient across
//! it: the RGB distance between its left and right neighbors, plus the
//! RGB distance between its upper and lower neighbors, square-rooted.
//! The result is neither normalized nor clamped.
//!
//! Pixels on the border have no neighbor on one side.  Rather than
//! reflecting or repeating, the sampling window is pushed back inside
//! the image: the first index samples (0, 2) and the last samples
//! (n-3, n-1).  On axes shorter than three pixels the window collapses
//! onto duplicate indices, which simply lowers the gradient toward
//! zero.

use crate::grid::Grid;
use crate::pixelpairs::squared_color_distance;
use image::{GenericImageView, Pixel, Primitive};
use itertools::iproduct;
use std::cmp;

/// The pair of indices sampled for position `i` along an axis of
/// length `n`.  `n` must be at least 1.
pub fn neighbor_pair(i: u32, n: u32) -> (u32, u32) {
    let last = n - 1;
    let (lo, hi) = if i == 0 {
        (0, 2)
    } else if i == last {
        (i.saturating_sub(2), i)
    } else {
        (i - 1, i + 1)
    };
    (cmp::min(lo, last), cmp::min(hi, last))
}

// (Image, x, y) -> Energy
#[inline]
fn pixel_energy<I, P, S>(image: &I, x: u32, y: u32) -> f64
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    let (left, right) = neighbor_pair(x, width);
    let (up, down) = neighbor_pair(y, height);
    let x_grad = squared_color_distance(&image.get_pixel(left, y), &image.get_pixel(right, y));
    let y_grad = squared_color_distance(&image.get_pixel(x, up), &image.get_pixel(x, down));
    (x_grad + y_grad).sqrt()
}

// Image -> Energy Map

/// Compute the energy of every pixel in an image.  This is a pure
/// function of the image: the same pixels always produce the same
/// field.
pub fn calculate_energy<I, P, S>(image: &I) -> Grid<f64>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    let cells = iproduct!(0..height, 0..width)
        .map(|(y, x)| pixel_energy(image, x, y))
        .collect();
    Grid::from_vec(width, height, cells).expect("iproduct yields one cell per pixel")
}

/// The same field as `calculate_energy`, computed in horizontal bands,
/// one per CPU.  Every pixel's energy depends only on the source image,
/// so the bands never need to talk to each other.
#[cfg(feature = "threaded")]
pub fn calculate_energy_threaded<I, P, S>(image: &I) -> Grid<f64>
where
    I: GenericImageView<Pixel = P> + Sync,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    let mut cells = vec![0.0; width as usize * height as usize];
    if !cells.is_empty() {
        let bands = cmp::max(num_cpus::get(), 1);
        let rows_per_band = (height as usize + bands - 1) / bands;
        let band_len = rows_per_band * width as usize;

        crossbeam::scope(|scope| {
            for (band, chunk) in cells.chunks_mut(band_len).enumerate() {
                let first_row = band * rows_per_band;
                scope.spawn(move |_| {
                    for (offset, cell) in chunk.iter_mut().enumerate() {
                        let x = (offset % width as usize) as u32;
                        let y = (first_row + offset / width as usize) as u32;
                        *cell = pixel_energy(image, x, y);
                    }
                });
            }
        })
        .unwrap_or_else(|panic| std::panic::resume_unwind(panic));
    }
    Grid::from_vec(width, height, cells).expect("bands cover one cell per pixel")
}

/// An image the carver can compute energy over.  With the `threaded`
/// feature the image is shared between worker threads, so it must also
/// be `Sync`.
#[cfg(feature = "threaded")]
pub trait EnergySource: GenericImageView + Sync {}
#[cfg(feature = "threaded")]
impl<I: GenericImageView + Sync> EnergySource for I {}

#[cfg(not(feature = "threaded"))]
pub trait EnergySource: GenericImageView {}
#[cfg(not(feature = "threaded"))]
impl<I: GenericImageView> EnergySource for I {}

/// The energy field the carver uses: banded across CPUs when built
/// with `threaded`, sequential otherwise.
pub fn energy_field<I, P, S>(image: &I) -> Grid<f64>
where
    I: EnergySource<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    #[cfg(feature = "threaded")]
    {
        calculate_energy_threaded(image)
    }
    #[cfg(not(feature = "threaded"))]
    {
        calculate_energy(image)
    }
}
