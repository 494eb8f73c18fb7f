// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the gradient across a pixel pair
//!
//! Given two pixels, the gradient between them is the squared
//! Euclidean distance between their colors in RGB space:
//!
//! ```text
//! |Δ|² = (Δr)² + (Δg)² + (Δb)²
//! ```
//!
//! Pixels of any layout are viewed through their RGB conversion, so a
//! greyscale pixel contributes the same difference on all three
//! channels.

use image::{Pixel, Primitive};
use itertools::zip;
use num_traits::{cast, pow};

/// (Pixel, Pixel) -> squared RGB distance
#[inline]
pub fn squared_color_distance<P, S>(p1: &P, p2: &P) -> f64
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (c1, c2) = (p1.to_rgb(), p2.to_rgb());
    zip(c1.channels(), c2.channels())
        .map(|(a, b)| {
            // Every `Primitive` subpixel (u8, u16, u32, f32, ...) is
            // representable as an f64, so these casts never fail.
            let a: f64 = cast(*a).unwrap_or(0.0);
            let b: f64 = cast(*b).unwrap_or(0.0);
            pow(a - b, 2)
        })
        .sum()
}
