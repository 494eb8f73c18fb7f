// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A flat, row-major arena addressed by pixel coordinate.
//!
//! Every intermediate product of the carver (the energy field, the
//! solver's path nodes, the seam mask) is one of these.  Nodes refer to
//! each other by offset into the arena, never by reference.

use std::ops::{Index, IndexMut};

#[derive(Debug, Clone, PartialEq)]
pub struct Grid<P: Default + Copy> {
    width: u32,
    height: u32,
    cells: Vec<P>,
}

impl<P: Default + Copy> Grid<P> {
    /// A grid of the given dimensions, every cell at its default.
    pub fn new(width: u32, height: u32) -> Self {
        Grid {
            width,
            height,
            cells: vec![P::default(); width as usize * height as usize],
        }
    }

    /// Wrap an existing row-major vector.  Returns `None` if the
    /// vector's length does not match the dimensions.
    pub fn from_vec(width: u32, height: u32, cells: Vec<P>) -> Option<Self> {
        if cells.len() == width as usize * height as usize {
            Some(Grid {
                width,
                height,
                cells,
            })
        } else {
            None
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    // All of the index math lives here and in `coords_of`.  Nothing
    // else in the crate is allowed to compute an offset by hand.
    pub fn index_of(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    pub fn coords_of(&self, index: usize) -> (u32, u32) {
        let width = self.width as usize;
        ((index % width) as u32, (index / width) as u32)
    }

    /// Look up a cell by its arena offset.
    pub fn at(&self, index: usize) -> &P {
        &self.cells[index]
    }

    pub fn as_slice(&self) -> &[P] {
        &self.cells
    }
}

impl<P: Default + Copy> Index<(u32, u32)> for Grid<P> {
    type Output = P;

    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.index_of(x, y);
        &self.cells[index]
    }
}

impl<P: Default + Copy> IndexMut<(u32, u32)> for Grid<P> {
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.index_of(x, y);
        &mut self.cells[index]
    }
}
