// Copyright (c) 2024 Ken Barker

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! The series module contains the truncated series of Vincenty's formulae:
//! the A and B polynomials used to convert between angular distance on the
//! auxiliary sphere and distance on the ellipsoid, and the corrections to
//! the angular distance (Δσ) and the longitude (Δλ).
//!
//! T. Vincenty, [Direct and Inverse Solutions of Geodesics on the Ellipsoid
//! with application of nested equations][vincenty], Survey Review, XXIII, 176,
//! April 1975.
//!
//! [vincenty]: https://www.ngs.noaa.gov/PUBS_LIB/inverse.pdf

#![allow(clippy::suboptimal_flops)]

/// Evaluate Vincenty's A and B polynomials, Vincenty equations 3 & 4.
/// * `sq_cos_alpha` - the square of the cosine of the azimuth at the Equator.
/// * `ep_2` - the square of the second Eccentricity of the ellipsoid.
///
/// returns A and B.
#[must_use]
pub fn evaluate_a_b(sq_cos_alpha: f64, ep_2: f64) -> (f64, f64) {
    let u2 = sq_cos_alpha * ep_2;
    let a = u2 / 16384.0 * (4096.0 + u2 * (-768.0 + u2 * (320.0 - 175.0 * u2))) + 1.0;
    let b = u2 / 1024.0 * (256.0 + u2 * (-128.0 + u2 * (74.0 - 47.0 * u2)));
    (a, b)
}

/// Calculate Δσ, the difference between the angular distance on the
/// auxiliary sphere and the scaled distance on the ellipsoid,
/// Vincenty equation 6.
/// * `b` - Vincenty's B polynomial.
/// * `sin_sigma`, `cos_sigma` - the sine and cosine of the angular distance.
/// * `cos_2sigma_m` - the cosine of twice the angular distance from the
///   Equator to the midpoint of the line.
#[must_use]
pub fn calculate_delta_sigma(
    b: f64,
    sin_sigma: f64,
    cos_sigma: f64,
    cos_2sigma_m: f64,
) -> f64 {
    let cos_4sigma_m = 2.0 * cos_2sigma_m * cos_2sigma_m - 1.0;
    let t = (sin_sigma * sin_sigma * 4.0 - 3.0) * (cos_4sigma_m * 2.0 - 1.0);
    let correction = cos_4sigma_m * cos_sigma - b / 6.0 * cos_2sigma_m * t;
    b * sin_sigma * (cos_2sigma_m + b / 4.0 * correction)
}

/// Calculate the difference between the longitude on the auxiliary sphere
/// and the longitude on the ellipsoid, Vincenty equations 10 & 11.
/// * `f` - the flattening of the ellipsoid.
/// * `sq_cos_alpha` - the square of the cosine of the azimuth at the Equator.
/// * `sin_alpha` - the sine of the azimuth at the Equator.
/// * `sigma` - the angular distance on the auxiliary sphere in radians.
/// * `sin_sigma`, `cos_sigma` - the sine and cosine of `sigma`.
/// * `cos_2sigma_m` - the cosine of twice the angular distance from the
///   Equator to the midpoint of the line.
#[must_use]
pub fn calculate_delta_lambda(
    f: f64,
    sq_cos_alpha: f64,
    sin_alpha: f64,
    sigma: f64,
    sin_sigma: f64,
    cos_sigma: f64,
    cos_2sigma_m: f64,
) -> f64 {
    let c = f / 16.0 * sq_cos_alpha * (4.0 + f * (4.0 - 3.0 * sq_cos_alpha));
    (1.0 - c)
        * f
        * sin_alpha
        * (sigma
            + c * sin_sigma
                * (cos_2sigma_m + c * cos_sigma * (cos_2sigma_m * cos_2sigma_m * 2.0 - 1.0)))
}
