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

//! The ellipsoid module contains functions for deriving the parameters of an
//! ellipsoid from its Semimajor axis and flattening ratio, and for checking
//! that a pair of points share the same ellipsoid.

#![allow(clippy::suboptimal_flops)]

pub mod catalogue;

use crate::error::VincentyError;
use crate::{Ellipsoid, Metres};
use angle_sc::Angle;

/// Calculate the Semiminor axis of an ellipsoid.
/// * `a` - the Semimajor axis of an ellipsoid.
/// * `f` - the flattening ratio.
/// # Examples
/// ```
/// use vincenty_ellipsoid::Metres;
/// use vincenty_ellipsoid::ellipsoid::{calculate_minor_axis, catalogue};
///
/// // The WGS 84 Semiminor axis measured in metres.
/// let b : Metres = Metres(6_356_752.314_245_179);
/// assert_eq!(b, calculate_minor_axis(catalogue::WGS84_A, catalogue::WGS84_F));
/// ```
#[must_use]
pub fn calculate_minor_axis(a: Metres, f: f64) -> Metres {
    Metres(a.0 * (1.0 - f))
}

/// Calculate the square of the Eccentricity of an ellipsoid.
/// * `f` - the flattening ratio.
#[must_use]
pub fn calculate_sq_eccentricity(f: f64) -> f64 {
    f * (2.0 - f)
}

/// Calculate the square of the second Eccentricity of an ellipsoid,
/// e'² = (a/b)² - 1.
/// * `f` - the flattening ratio.
#[must_use]
pub fn calculate_sq_2nd_eccentricity(f: f64) -> f64 {
    let one_minus_f = 1.0 - f;
    calculate_sq_eccentricity(f) / (one_minus_f * one_minus_f)
}

/// Function to convert a geodetic Latitude to a reduced (`parametric`)
/// Latitude on the auxiliary sphere: U = atan((1 - f) * tan(lat)).
/// * `lat` - the geodetic Latitude
/// * `one_minus_f` - one minus the flattening ratio.
#[must_use]
pub fn calculate_reduced_latitude(lat: Angle, one_minus_f: f64) -> Angle {
    Angle::from_y_x(one_minus_f * lat.sin().0, lat.cos().0)
}

/// Return the `Ellipsoid` shared by a pair of points.
/// * `a`, `b` - the `Ellipsoid`s of the points.
///
/// # Errors
///
/// `MismatchedEllipsoid` if `a` and `b` are not the same `Ellipsoid`
/// instance, even if they have the same parameters.
pub fn shared_ellipsoid<'a>(
    a: &'a Ellipsoid,
    b: &Ellipsoid,
) -> Result<&'a Ellipsoid, VincentyError> {
    if core::ptr::eq(a, b) {
        Ok(a)
    } else {
        Err(VincentyError::MismatchedEllipsoid {
            this: a.name(),
            other: b.name(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use angle_sc::{is_within_tolerance, Degrees};

    #[test]
    fn test_calculate_sq_2nd_eccentricity() {
        // e'² = (a/b)² - 1
        let a = catalogue::WGS84_A;
        let b = calculate_minor_axis(a, catalogue::WGS84_F);
        let ratio = a.0 / b.0;
        assert!(is_within_tolerance(
            ratio * ratio - 1.0,
            calculate_sq_2nd_eccentricity(catalogue::WGS84_F),
            1.0e-15
        ));

        // A sphere
        assert_eq!(0.0, calculate_sq_2nd_eccentricity(0.0));
    }

    #[test]
    fn test_calculate_reduced_latitude() {
        let one_minus_f = 1.0 - catalogue::WGS84_F;

        for i in -89..90 {
            let latitude = f64::from(i);
            let lat = Angle::from(Degrees(latitude));
            let result = calculate_reduced_latitude(lat, one_minus_f);

            let expected = libm::atan(one_minus_f * libm::tan(latitude.to_radians()));
            assert!(is_within_tolerance(
                libm::sin(expected),
                result.sin().0,
                4.0 * f64::EPSILON
            ));
            assert!(is_within_tolerance(
                libm::cos(expected),
                result.cos().0,
                4.0 * f64::EPSILON
            ));
        }

        // The poles are unchanged
        let result = calculate_reduced_latitude(Angle::from(Degrees(90.0)), one_minus_f);
        assert_eq!(1.0, result.sin().0);
        let result = calculate_reduced_latitude(Angle::from(Degrees(-90.0)), one_minus_f);
        assert_eq!(-1.0, result.sin().0);
    }

    #[test]
    fn test_shared_ellipsoid() {
        let wgs84 = catalogue::wgs84();
        let airy = catalogue::find("Airy1830").unwrap();

        assert!(core::ptr::eq(wgs84, shared_ellipsoid(wgs84, wgs84).unwrap()));
        assert_eq!(
            Err(VincentyError::MismatchedEllipsoid {
                this: "WGS84",
                other: "Airy1830",
            }),
            shared_ellipsoid(wgs84, airy)
        );

        // An equal but different instance does not match
        let copy = wgs84.clone();
        assert!(shared_ellipsoid(wgs84, &copy).is_err());
    }
}
