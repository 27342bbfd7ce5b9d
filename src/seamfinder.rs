// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Minimum-energy seam search
//!
//! The pixel grid is a DAG already in topological order: every edge
//! goes from one row (or column) to the next, so a single relaxation
//! sweep in step order computes the cheapest path to every pixel.
//! One routine serves both orientations.  Rather than materializing a
//! transposed copy of the energy field for horizontal seams, the
//! search is parameterized by a traversal axis that maps its (lane,
//! step) coordinates onto the untransposed field.

use crate::cq;
use crate::energy::BORDER_ENERGY;
use crate::grid::Grid;

/// This trait defines how we will return seams from an image.  It's a
/// primitive interface, just enough to make room for multiple seam
/// sources as well as caching.
pub trait SeamFinder {
    /// Once a SeamFinder has an image (or whatever it needs to make a
    /// rational decision), request a horizontal seam.
    fn find_horizontal_seam(&self) -> Vec<u32>;

    /// Request a vertical seam.
    fn find_vertical_seam(&self) -> Vec<u32>;
}

/// The traversal axis of one search: a vertical seam runs top to
/// bottom (one column index per row), a horizontal seam left to right
/// (one row index per column).
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Axis {
    Vertical,
    Horizontal,
}

impl Axis {
    /// The other axis.  The carve driver alternates directions with
    /// this.
    pub fn flip(self) -> Self {
        cq!(self == Axis::Vertical, Axis::Horizontal, Axis::Vertical)
    }

    // Map search coordinates onto the untransposed energy field.  A
    // "step" walks along the seam's direction of travel, a "lane" is
    // the coordinate recorded in the seam.
    fn to_xy(self, lane: u32, step: u32) -> (u32, u32) {
        cq!(self == Axis::Vertical, (lane, step), (step, lane))
    }

    fn lanes_and_steps(self, (width, height): (u32, u32)) -> (u32, u32) {
        cq!(self == Axis::Vertical, (width, height), (height, width))
    }
}

/// Given an energy field, return the minimum-cumulative-energy seam
/// along `axis`: one lane index per step, adjacent entries never more
/// than one lane apart.
///
/// Relaxation runs in step order over transient distance and
/// predecessor fields.  The distance field starts at the border
/// constant on step 0 (the first pixel of any path is a border pixel,
/// whose energy is already known) and at positive infinity elsewhere.
/// Each pixel then relaxes its three forward edges, updating a target
/// only on strict improvement and recording the source lane.  Ties
/// therefore resolve toward the smaller lane at every level, and the
/// final-step scan keeps the first minimum it meets: the seam for a
/// given picture is fully deterministic.
pub fn find_seam(energy: &Grid<f64>, axis: Axis) -> Vec<u32> {
    let (lanes, steps) = axis.lanes_and_steps(energy.dimensions());
    assert!(lanes >= 1 && steps >= 1, "energy field must be non-empty");

    let mut dist = Grid::filled(lanes, steps, std::f64::INFINITY);
    let mut edge: Grid<u32> = Grid::new(lanes, steps);
    for lane in 0..lanes {
        dist[(lane, 0)] = BORDER_ENERGY;
    }

    let last_lane = lanes - 1;
    for step in 0..steps - 1 {
        for lane in 0..lanes {
            let from = dist[(lane, step)];
            let lo = cq!(lane == 0, 0, lane - 1);
            let hi = cq!(lane == last_lane, last_lane, lane + 1);
            for next in lo..=hi {
                let candidate = from + energy[axis.to_xy(next, step + 1)];
                if candidate < dist[(next, step + 1)] {
                    dist[(next, step + 1)] = candidate;
                    edge[(next, step + 1)] = lane;
                }
            }
        }
    }

    // Find the lane where the cheapest seam ends: the first strict
    // minimum in a left-to-right scan of the last step.
    let last_step = steps - 1;
    let mut best_lane = 0;
    let mut best_dist = dist[(0, last_step)];
    for lane in 1..lanes {
        if dist[(lane, last_step)] < best_dist {
            best_dist = dist[(lane, last_step)];
            best_lane = lane;
        }
    }

    // Working backwards through the predecessor field, generate the
    // lane indices of the seam, reverse and return.
    let mut lane = best_lane;
    (0..steps)
        .rev()
        .fold(
            Vec::<u32>::with_capacity(steps as usize),
            |mut acc, step| {
                acc.push(lane);
                lane = edge[(lane, step)];
                acc
            },
        )
        .into_iter()
        .rev()
        .collect()
}
