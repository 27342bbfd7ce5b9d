// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the gradient of a pixel pair
//!
//! Given two pixels, the gradient between them is the distance
//! between the colors that make them up: the classic
//! d(R²) + d(G²) + d(B²).

use image::{Pixel, Primitive};
use itertools::zip;
use num_traits::NumCast;

/// (Pixel, Pixel) -> gradient
///
/// Takes the channels (R, G, B) from two pixels, maps the difference
/// between each channel, squares it, and sums them all up:
///
/// ```text
/// |Δ|² = (Δr)² + (Δg)² + (Δb)²
/// ```
///
/// The intermediate cast is to i32: channel differences are signed
/// even though the channels themselves are not.
#[inline]
pub fn gradient_of_pair<P, S>(p1: &P, p2: &P) -> f64
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let c1 = p1.to_rgb();
    let c2 = p2.to_rgb();
    zip(c1.channels(), c2.channels())
        .map(|(a, b)| {
            let a: i32 = NumCast::from(*a).unwrap();
            let b: i32 = NumCast::from(*b).unwrap();
            let d = a - b;
            (d * d) as f64
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Luma, Pixel, Rgb};

    fn rgb(r: u8, g: u8, b: u8) -> Rgb<u8> {
        *Rgb::from_slice(&[r, g, b])
    }

    #[test]
    fn identical_pixels_have_zero_gradient() {
        let p = rgb(12, 200, 99);
        assert_eq!(gradient_of_pair(&p, &p), 0.0);
    }

    #[test]
    fn gradient_sums_squared_channel_differences() {
        let p1 = rgb(10, 20, 30);
        let p2 = rgb(13, 16, 30);
        // 3² + 4² + 0² = 25
        assert_eq!(gradient_of_pair(&p1, &p2), 25.0);
        // Symmetric in its arguments.
        assert_eq!(gradient_of_pair(&p2, &p1), 25.0);
    }

    #[test]
    fn gradient_is_invariant_under_color_inversion() {
        let p1 = rgb(10, 250, 77);
        let p2 = rgb(200, 3, 77);
        let i1 = rgb(245, 5, 178);
        let i2 = rgb(55, 252, 178);
        assert_eq!(gradient_of_pair(&p1, &p2), gradient_of_pair(&i1, &i2));
    }

    #[test]
    fn grayscale_pixels_spread_across_rgb() {
        let p1: Luma<u8> = *Luma::from_slice(&[10u8]);
        let p2: Luma<u8> = *Luma::from_slice(&[14u8]);
        // The luma channel is replicated into R, G, and B: 3 × 4².
        assert_eq!(gradient_of_pair(&p1, &p2), 48.0);
    }
}
