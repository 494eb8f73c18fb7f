// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The shortest-seam solver
//!
//! A dynamic program over the energy field.  For every pixel it records
//! the cheapest cumulative energy of any monotone path reaching it from
//! the start edge, and which neighbor on the previous line that path
//! came through.
//!
//! Vertical seams run top to bottom, so the start edge is the top row
//! and each row looks back at the row above.  Horizontal seams run left
//! to right, looking back at the column to the left.  Rather than
//! writing the sweep twice, positions are expressed as (along, across):
//! `along` is the axis the seam travels, `across` is the axis it
//! wanders in.

use crate::grid::Grid;
use std::cmp;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Orientation {
    /// Top to bottom; removing one narrows the image by a column.
    Vertical,
    /// Left to right; removing one shortens the image by a row.
    Horizontal,
}

impl Orientation {
    /// The number of pixels in a seam of this orientation.
    pub fn seam_length(self, width: u32, height: u32) -> u32 {
        match self {
            Orientation::Vertical => height,
            Orientation::Horizontal => width,
        }
    }

    /// The extent of the axis a seam of this orientation shrinks.
    pub fn breadth(self, width: u32, height: u32) -> u32 {
        match self {
            Orientation::Vertical => width,
            Orientation::Horizontal => height,
        }
    }

    pub fn to_xy(self, along: u32, across: u32) -> (u32, u32) {
        match self {
            Orientation::Vertical => (across, along),
            Orientation::Horizontal => (along, across),
        }
    }

    pub fn from_xy(self, (x, y): (u32, u32)) -> (u32, u32) {
        match self {
            Orientation::Vertical => (y, x),
            Orientation::Horizontal => (x, y),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Orientation::Vertical => write!(f, "vertical"),
            Orientation::Horizontal => write!(f, "horizontal"),
        }
    }
}

/// One pixel's worth of solver state.  `predecessor` is the arena
/// offset of the node on the previous line this node's cheapest path
/// came through; it is `None` only on the start edge.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PathNode {
    pub energy: f64,
    pub distance: f64,
    pub predecessor: Option<usize>,
}

impl Default for PathNode {
    fn default() -> Self {
        PathNode {
            energy: 0.0,
            distance: f64::INFINITY,
            predecessor: None,
        }
    }
}

/// The solved path digraph for one orientation.  Valid only for the
/// image its energy field came from; it must be rebuilt after every
/// removal.
#[derive(Debug)]
pub struct SeamGraph {
    orientation: Orientation,
    nodes: Grid<PathNode>,
}

impl SeamGraph {
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn nodes(&self) -> &Grid<PathNode> {
        &self.nodes
    }

    pub fn distance(&self, x: u32, y: u32) -> f64 {
        self.nodes[(x, y)].distance
    }
}

/// Run the dynamic program over an energy field.
///
/// Every node on the start edge takes its own energy as its distance.
/// Every other node takes its energy plus the smallest distance among
/// the (up to) three adjacent nodes on the previous line, scanned in
/// increasing order of the across coordinate.  A candidate only
/// replaces the current best if it is strictly smaller, so ties go to
/// the first one seen.
///
/// One sweep is O(width * height) in time and space.
pub fn solve(energy: &Grid<f64>, orientation: Orientation) -> SeamGraph {
    let (width, height) = energy.dimensions();
    let length = orientation.seam_length(width, height);
    let breadth = orientation.breadth(width, height);
    let mut nodes: Grid<PathNode> = Grid::new(width, height);

    if length == 0 || breadth == 0 {
        return SeamGraph { orientation, nodes };
    }

    // Populate the start edge with native energies.
    for across in 0..breadth {
        let pt = orientation.to_xy(0, across);
        nodes[pt] = PathNode {
            energy: energy[pt],
            distance: energy[pt],
            predecessor: None,
        };
    }

    let last = breadth - 1;
    for along in 1..length {
        for across in 0..breadth {
            let lo = across.saturating_sub(1);
            let hi = cmp::min(across + 1, last);
            let first = orientation.to_xy(along - 1, lo);
            let parent = ((lo + 1)..=hi)
                .map(|candidate| orientation.to_xy(along - 1, candidate))
                .fold(first, |best, pt| {
                    if nodes[pt].distance < nodes[best].distance {
                        pt
                    } else {
                        best
                    }
                });

            let pt = orientation.to_xy(along, across);
            nodes[pt] = PathNode {
                energy: energy[pt],
                distance: energy[pt] + nodes[parent].distance,
                predecessor: Some(nodes.index_of(parent.0, parent.1)),
            };
        }
    }

    SeamGraph { orientation, nodes }
}
