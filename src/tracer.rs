// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seam tracing and marking
//!
//! After the solver has run, the cheapest seam ends at the node on the
//! far edge with the smallest distance.  Following predecessor links
//! back to the start edge recovers the whole seam.
//!
//! Marking is kept out of the image: a `SeamMask` is a boolean grid
//! parallel to the pixels, so no pixel color can ever be mistaken for
//! a seam.  `paint_seam` exists only to draw a seam for people to look
//! at.

use crate::grid::Grid;
use crate::seamfinder::{Orientation, SeamGraph};
use image::GenericImage;

/// An ordered path of pixel coordinates from the start edge to the far
/// edge, exactly one per row (vertical) or per column (horizontal).
#[derive(Debug, Clone, PartialEq)]
pub struct Seam {
    orientation: Orientation,
    path: Vec<(u32, u32)>,
    cost: f64,
}

impl Seam {
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The (x, y) coordinates of the seam, start edge first.
    pub fn path(&self) -> &[(u32, u32)] {
        &self.path
    }

    /// Just the across coordinate of each pixel: the x of each row for
    /// a vertical seam, the y of each column for a horizontal one.
    pub fn offsets(&self) -> Vec<u32> {
        self.path
            .iter()
            .map(|pt| self.orientation.from_xy(*pt).1)
            .collect()
    }

    /// The summed energy of every pixel on the seam.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}

/// Find the cheapest seam in a solved graph.
pub fn trace_seam(graph: &SeamGraph) -> Seam {
    let orientation = graph.orientation();
    let nodes = graph.nodes();
    let (width, height) = nodes.dimensions();
    let length = orientation.seam_length(width, height);
    let breadth = orientation.breadth(width, height);

    if length == 0 || breadth == 0 {
        return Seam {
            orientation,
            path: Vec::new(),
            cost: 0.0,
        };
    }

    // Find the cheapest terminal on the far edge; the first one wins a
    // tie.
    let far = length - 1;
    let terminal = (1..breadth)
        .map(|across| orientation.to_xy(far, across))
        .fold(orientation.to_xy(far, 0), |best, pt| {
            if nodes[pt].distance < nodes[best].distance {
                pt
            } else {
                best
            }
        });

    // Working backwards, collect the seam from the far edge, then
    // reverse it.
    let mut path = Vec::with_capacity(length as usize);
    let mut cursor = Some(nodes.index_of(terminal.0, terminal.1));
    while let Some(index) = cursor {
        path.push(nodes.coords_of(index));
        cursor = nodes.at(index).predecessor;
    }
    path.reverse();

    Seam {
        orientation,
        path,
        cost: nodes[terminal].distance,
    }
}

/// An out-of-band record of which pixels belong to a seam.
#[derive(Debug, Clone)]
pub struct SeamMask {
    orientation: Orientation,
    marked: Grid<bool>,
}

impl SeamMask {
    pub fn new(width: u32, height: u32, orientation: Orientation) -> Self {
        SeamMask {
            orientation,
            marked: Grid::new(width, height),
        }
    }

    /// A mask for an image of the given size with one seam marked.
    pub fn from_seam(seam: &Seam, width: u32, height: u32) -> Self {
        let mut mask = SeamMask::new(width, height, seam.orientation());
        mask.mark(seam);
        mask
    }

    /// Mark every pixel of the seam.  The mask adopts the seam's
    /// orientation.
    pub fn mark(&mut self, seam: &Seam) {
        self.orientation = seam.orientation();
        for &pt in seam.path() {
            self.marked[pt] = true;
        }
    }

    /// Mark a single pixel.
    pub fn mark_pixel(&mut self, x: u32, y: u32) {
        self.marked[(x, y)] = true;
    }

    pub fn is_marked(&self, x: u32, y: u32) -> bool {
        self.marked[(x, y)]
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.marked.dimensions()
    }
}

/// Overwrite every pixel of the seam with `marker`.  No other pixel is
/// touched.
pub fn paint_seam<I>(image: &mut I, seam: &Seam, marker: I::Pixel)
where
    I: GenericImage,
{
    for &(x, y) in seam.path() {
        image.put_pixel(x, y, marker);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seamfinder::solve;
    use image::{ImageBuffer, Rgb, RgbImage};

    const ENERGY_DATA: [f64; 20] = [
        9.0, 9.0, 0.0, 9.0, 9.0, //
        9.0, 1.0, 9.0, 8.0, 9.0, //
        9.0, 9.0, 9.0, 9.0, 0.0, //
        9.0, 9.0, 9.0, 0.0, 9.0,
    ];

    fn trace(width: u32, height: u32, data: &[f64], orientation: Orientation) -> Seam {
        let energy = Grid::from_vec(width, height, data.to_vec()).unwrap();
        trace_seam(&solve(&energy, orientation))
    }

    fn assert_valid(seam: &Seam, width: u32, height: u32) {
        let orientation = seam.orientation();
        let length = orientation.seam_length(width, height);
        assert_eq!(seam.len(), length as usize);
        for (along, pt) in seam.path().iter().enumerate() {
            let (a, across) = orientation.from_xy(*pt);
            assert_eq!(a, along as u32);
            assert!(across < orientation.breadth(width, height));
        }
        let offsets = seam.offsets();
        for pair in offsets.windows(2) {
            assert!((pair[0] as i64 - pair[1] as i64).abs() <= 1);
        }
    }

    #[test]
    fn energy_grid_to_vertical_seam() {
        let seam = trace(5, 4, &ENERGY_DATA, Orientation::Vertical);
        assert_eq!(seam.offsets(), vec![2, 3, 4, 3]);
        assert_eq!(seam.path(), &[(2, 0), (3, 1), (4, 2), (3, 3)][..]);
        assert_eq!(seam.cost(), 8.0);
    }

    #[test]
    fn energy_grid_to_horizontal_seam() {
        let seam = trace(5, 4, &ENERGY_DATA, Orientation::Horizontal);
        assert_eq!(seam.offsets(), vec![0, 1, 0, 1, 2]);
        assert_eq!(seam.cost(), 18.0);
    }

    #[test]
    fn far_edge_ties_go_to_the_first_pixel() {
        let seam = trace(3, 3, &[0.0; 9], Orientation::Vertical);
        assert_eq!(seam.offsets(), vec![0, 0, 0]);
        let seam = trace(3, 3, &[0.0; 9], Orientation::Horizontal);
        assert_eq!(seam.offsets(), vec![0, 0, 0]);
    }

    #[test]
    fn seams_are_connected_and_span_the_image() {
        for width in 1..7 {
            for height in 1..7 {
                let data: Vec<f64> = (0..width * height)
                    .map(|i| ((i * 7919 + 13) % 23) as f64)
                    .collect();
                for &orientation in &[Orientation::Vertical, Orientation::Horizontal] {
                    let seam = trace(width, height, &data, orientation);
                    assert_valid(&seam, width, height);
                }
            }
        }
    }

    #[test]
    fn mask_marks_exactly_the_seam() {
        let seam = trace(5, 4, &ENERGY_DATA, Orientation::Vertical);
        let mask = SeamMask::from_seam(&seam, 5, 4);
        assert_eq!(mask.orientation(), Orientation::Vertical);
        let marked: Vec<(u32, u32)> = (0..4)
            .flat_map(|y| (0..5).map(move |x| (x, y)))
            .filter(|&(x, y)| mask.is_marked(x, y))
            .collect();
        assert_eq!(marked, seam.path().to_vec());
    }

    #[test]
    fn painting_touches_only_seam_pixels() {
        let gray = Rgb([128u8, 128, 128]);
        let red = Rgb([255u8, 0, 0]);
        let mut image: RgbImage = ImageBuffer::from_pixel(5, 4, gray);
        let seam = trace(5, 4, &ENERGY_DATA, Orientation::Horizontal);
        paint_seam(&mut image, &seam, red);
        for (x, y, p) in image.enumerate_pixels() {
            let on_seam = seam.path().contains(&(x, y));
            assert_eq!(*p, if on_seam { red } else { gray });
        }
    }
}
