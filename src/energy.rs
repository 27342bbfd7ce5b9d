// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! The dual-gradient energy function: the energy of a pixel is the
//! gradient to its horizontal neighbors plus the gradient to its
//! vertical neighbors.  Pixels on the picture border are pinned to
//! the maximum possible energy so that seams only cross the border
//! when there is no interior alternative.

use crate::grid::Grid;
use crate::pixelpairs::gradient_of_pair;
use image::RgbImage;
use itertools::iproduct;

/// The energy of every border pixel: the maximum possible squared
/// channel difference, summed over the three channels (255² × 3).
pub const BORDER_ENERGY: f64 = 195_075.0;

/// The dual-gradient energy of one pixel.  The caller guarantees the
/// coordinates are in bounds; the public bounds-checked query lives
/// on `SeamCarver`.
pub(crate) fn pixel_energy(picture: &RgbImage, x: u32, y: u32) -> f64 {
    let (width, height) = picture.dimensions();
    if x == 0 || x == width - 1 || y == 0 || y == height - 1 {
        return BORDER_ENERGY;
    }
    gradient_of_pair(picture.get_pixel(x - 1, y), picture.get_pixel(x + 1, y))
        + gradient_of_pair(picture.get_pixel(x, y - 1), picture.get_pixel(x, y + 1))
}

// Picture -> energy field

/// Compute the energy of every pixel in a picture.  This is what the
/// seam searches read from, and it is built with the same per-pixel
/// routine that answers the public energy query.
pub(crate) fn energy_field(picture: &RgbImage) -> Grid<f64> {
    let (width, height) = picture.dimensions();
    let mut field = Grid::new(width, height);
    for (y, x) in iproduct!(0..height, 0..width) {
        field[(x, y)] = pixel_energy(picture, x, y);
    }
    field
}
