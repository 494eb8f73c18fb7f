// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Everything that can go wrong while carving.
//!
//! All of these are precondition failures: they are detected before
//! any buffer is touched, so a failed carve never leaves a partially
//! shrunk image behind.

use crate::seamfinder::Orientation;
use failure::Fail;

#[derive(Debug, Fail, PartialEq)]
pub enum CarveError {
    /// More seams were requested than the image can give up along one
    /// axis.  At least one pixel must survive.
    #[fail(
        display = "cannot remove {} {} seams: at most {} can be removed",
        requested, orientation, available
    )]
    DimensionExhausted {
        orientation: Orientation,
        requested: u32,
        available: u32,
    },

    #[fail(display = "image has no pixels ({}x{})", width, height)]
    EmptyImage { width: u32, height: u32 },

    /// A seam mask that does not mark exactly one pixel in some row
    /// (vertical) or column (horizontal).
    #[fail(display = "seam mask marks {} pixels in line {}", marked, line)]
    MalformedSeam { line: u32, marked: u32 },

    #[fail(
        display = "seam mask is {}x{} but the image is {}x{}",
        mask_width, mask_height, width, height
    )]
    DimensionMismatch {
        mask_width: u32,
        mask_height: u32,
        width: u32,
        height: u32,
    },

    #[fail(display = "missing required argument --{}", _0)]
    MissingArgument(String),

    #[fail(display = "invalid value '{}' for --{}", value, name)]
    InvalidArgument { name: String, value: String },
}
