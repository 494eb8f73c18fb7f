// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Content-aware image resizing.
//!
//! Seam carving shrinks an image one pixel at a time by repeatedly
//! finding and removing the connected path of pixels whose loss is
//! least visible.  Each removal runs four stages, in order:
//!
//! 1. [`energy`]: per-pixel gradient magnitude.
//! 2. [`seamfinder`]: the shortest-path dynamic program.
//! 3. [`tracer`]: backtracking the cheapest seam and marking it.
//! 4. [`compactor`]: closing the gap the seam leaves behind.
//!
//! [`seamcarver`] drives the loop.

pub mod grid;
pub mod pixelpairs;

pub mod energy;
pub use energy::{calculate_energy, energy_field, EnergySource};
#[cfg(feature = "threaded")]
pub use energy::calculate_energy_threaded;

pub mod seamfinder;
pub use seamfinder::{solve, Orientation, PathNode, SeamGraph};

pub mod tracer;
pub use tracer::{paint_seam, trace_seam, Seam, SeamMask};

pub mod compactor;
pub use compactor::compact;

pub mod seamcarver;
pub use seamcarver::{carve_once, find_seam, seamcarve, SeamCarver};

pub mod config;
pub use config::CarveConfig;

pub mod errors;
pub use errors::CarveError;
