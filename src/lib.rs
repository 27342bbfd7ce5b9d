// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Content-aware image resizing by seam carving.
//!
//! A [`SeamCarver`] owns a picture and repeatedly finds and removes
//! the connected path of pixels (a seam) whose total dual-gradient
//! energy is minimum, shrinking the picture one column or row at a
//! time while the visually important content survives.
//!
//! ```
//! use seamcarve::{SeamCarver, SeamFinder};
//!
//! let picture = image::RgbImage::new(20, 20);
//! let mut carver = SeamCarver::new(picture);
//! let seam = carver.find_vertical_seam();
//! carver.remove_vertical_seam(&seam).unwrap();
//! assert_eq!(carver.picture().dimensions(), (19, 20));
//! ```

pub mod ternary;

pub mod grid;
pub use crate::grid::Grid;

pub mod pixelpairs;

pub mod energy;
pub use crate::energy::BORDER_ENERGY;

pub mod seamfinder;
pub use crate::seamfinder::{find_seam, Axis, SeamFinder};

pub mod carver;
pub use crate::carver::SeamCarver;

pub mod error;
pub use crate::error::{CarveError, Result};
