// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! SeamCarver: the stateful carving component
//!
//! Owns the picture being carved and the energy field derived from
//! it.  Callers alternate between asking for a seam and asking for it
//! to be removed; the carver keeps the two in lockstep by recomputing
//! the energy field inside every successful removal, never on demand.
//! No search ever reads energies computed against a geometry that no
//! longer exists.

use crate::cq;
use crate::energy::{energy_field, pixel_energy};
use crate::error::{CarveError, Result};
use crate::grid::Grid;
use crate::seamfinder::{find_seam, Axis, SeamFinder};
use image::RgbImage;
use log::{debug, trace};

/// A struct holding the picture to be carved, plus the energy field
/// the seam searches read from.
pub struct SeamCarver {
    picture: RgbImage,
    energy: Grid<f64>,
}

impl SeamCarver {
    /// Creates a new SeamCarver, taking ownership of the picture to
    /// be carved.
    ///
    /// # Panics
    ///
    /// Panics if either dimension of the picture is zero.
    pub fn new(picture: RgbImage) -> Self {
        let (width, height) = picture.dimensions();
        assert!(
            width >= 1 && height >= 1,
            "picture must be at least 1x1, got {}x{}",
            width,
            height
        );
        let energy = energy_field(&picture);
        SeamCarver { picture, energy }
    }

    /// The current picture width.
    pub fn width(&self) -> u32 {
        self.picture.width()
    }

    /// The current picture height.
    pub fn height(&self) -> u32 {
        self.picture.height()
    }

    /// A read accessor for the current picture.
    pub fn picture(&self) -> &RgbImage {
        &self.picture
    }

    /// Consumes the carver and hands the picture back.
    pub fn into_picture(self) -> RgbImage {
        self.picture
    }

    /// The dual-gradient energy of the pixel at (x, y): the squared
    /// channel differences of its horizontal neighbor pair plus those
    /// of its vertical pair, or [`BORDER_ENERGY`] on the border.
    ///
    /// [`BORDER_ENERGY`]: crate::energy::BORDER_ENERGY
    pub fn energy(&self, x: u32, y: u32) -> Result<f64> {
        if x >= self.width() || y >= self.height() {
            return Err(CarveError::OutOfBounds { x, y });
        }
        Ok(pixel_energy(&self.picture, x, y))
    }

    /// Remove a previously found vertical seam, shrinking the picture
    /// by one column.  The seam is validated in full before anything
    /// is touched: a rejected removal leaves the carver exactly as it
    /// was.
    pub fn remove_vertical_seam(&mut self, seam: &[u32]) -> Result<()> {
        self.validate_seam(seam, Axis::Vertical)?;
        let (width, height) = self.picture.dimensions();
        let mut reduced = RgbImage::new(width - 1, height);
        for y in 0..height {
            let gap = seam[y as usize];
            for x in 0..width {
                if x != gap {
                    reduced.put_pixel(cq!(x < gap, x, x - 1), y, *self.picture.get_pixel(x, y));
                }
            }
        }
        self.replace(reduced);
        Ok(())
    }

    /// Remove a previously found horizontal seam, shrinking the
    /// picture by one row.  Validation mirrors the vertical case.
    pub fn remove_horizontal_seam(&mut self, seam: &[u32]) -> Result<()> {
        self.validate_seam(seam, Axis::Horizontal)?;
        let (width, height) = self.picture.dimensions();
        let mut reduced = RgbImage::new(width, height - 1);
        for y in 0..height {
            for x in 0..width {
                let gap = seam[x as usize];
                if y != gap {
                    reduced.put_pixel(x, cq!(y < gap, y, y - 1), *self.picture.get_pixel(x, y));
                }
            }
        }
        self.replace(reduced);
        Ok(())
    }

    /// Repeatedly carve seams out of the picture until it reaches the
    /// requested dimensions, alternating directions while both axes
    /// are oversize.  The target must be at least 1×1 and no larger
    /// than the current picture: seam carving cannot upscale.
    pub fn carve(&mut self, new_width: u32, new_height: u32) -> Result<()> {
        let (width, height) = self.picture.dimensions();
        if new_width == 0 || new_height == 0 || new_width > width || new_height > height {
            return Err(CarveError::BadTarget {
                width,
                height,
                target_width: new_width,
                target_height: new_height,
            });
        }

        let mut direction = Axis::Vertical;
        while self.width() > new_width && self.height() > new_height {
            self.carve_once(direction)?;
            direction = direction.flip();
        }
        while self.width() > new_width {
            self.carve_once(Axis::Vertical)?;
        }
        while self.height() > new_height {
            self.carve_once(Axis::Horizontal)?;
        }
        Ok(())
    }

    // One find-and-remove round trip.
    fn carve_once(&mut self, direction: Axis) -> Result<()> {
        if direction == Axis::Vertical {
            let seam = self.find_vertical_seam();
            trace!("vertical seam: {:?}", seam);
            self.remove_vertical_seam(&seam)?;
        } else {
            let seam = self.find_horizontal_seam();
            trace!("horizontal seam: {:?}", seam);
            self.remove_horizontal_seam(&seam)?;
        }
        debug!("carved to {}x{}", self.width(), self.height());
        Ok(())
    }

    // Every way a seam can disagree with the current geometry, checked
    // before any pixel moves.
    fn validate_seam(&self, seam: &[u32], axis: Axis) -> Result<()> {
        let (width, height) = self.picture.dimensions();
        let (lanes, steps) = cq!(axis == Axis::Vertical, (width, height), (height, width));
        let lane_name = cq!(axis == Axis::Vertical, "column", "row");

        if lanes <= 1 {
            return Err(CarveError::InvalidSeam(format!(
                "cannot remove the last {} of the picture",
                lane_name
            )));
        }
        if seam.len() != steps as usize {
            return Err(CarveError::InvalidSeam(format!(
                "expected {} entries, got {}",
                steps,
                seam.len()
            )));
        }
        for (step, &lane) in seam.iter().enumerate() {
            if lane >= lanes {
                return Err(CarveError::InvalidSeam(format!(
                    "entry {} at position {} is outside [0, {})",
                    lane, step, lanes
                )));
            }
        }
        for (step, pair) in seam.windows(2).enumerate() {
            let jump = cq!(pair[0] > pair[1], pair[0] - pair[1], pair[1] - pair[0]);
            if jump > 1 {
                return Err(CarveError::InvalidSeam(format!(
                    "entries at positions {} and {} differ by more than one",
                    step,
                    step + 1
                )));
            }
        }
        Ok(())
    }

    // Swap in the reduced picture.  The field is recomputed here, in
    // the same call that replaces the picture: the old picture and any
    // energy derived from it are unreachable from this point on.
    fn replace(&mut self, picture: RgbImage) {
        self.energy = energy_field(&picture);
        self.picture = picture;
    }
}

impl SeamFinder for SeamCarver {
    fn find_horizontal_seam(&self) -> Vec<u32> {
        find_seam(&self.energy, Axis::Horizontal)
    }

    fn find_vertical_seam(&self) -> Vec<u32> {
        find_seam(&self.energy, Axis::Vertical)
    }
}
