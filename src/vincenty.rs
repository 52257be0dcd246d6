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

//! The vincenty module contains Vincenty's iterative solutions of the direct
//! and inverse geodesic problems on an ellipsoid of revolution.
//!
//! The direct problem: given a start point, an initial bearing and a
//! distance, find the destination point and the final bearing.
//!
//! The inverse problem: given a pair of points, find the distance between
//! them and the initial and final bearings of the geodesic joining them.
//!
//! Both solutions iterate on the auxiliary sphere until the change is less
//! than the `ConvergenceConfig` epsilon. Neither solution is guaranteed to
//! converge for nearly antipodal points, in which case a `NoConvergence`
//! error is returned and the caller may retry with a larger epsilon or
//! iteration limit.
//!
//! All bearings are in compass degrees from North in the range [0, 360).

#![allow(clippy::similar_names)]
#![allow(clippy::suboptimal_flops)]

pub mod series;

use crate::convergence::ConvergenceConfig;
use crate::error::{Endpoints, Position, VincentyError};
use crate::{Ellipsoid, Geodetic, Metres};
use angle_sc::{Angle, Degrees, Radians};
use series::{calculate_delta_lambda, calculate_delta_sigma, evaluate_a_b};
use unit_sphere::LatLong;

/// Values smaller than this are treated as zero:
/// the sine of the distance between coincident points and the square of the
/// cosine of the azimuth at the Equator of equatorial or polar lines.
pub const MIN_VALUE: f64 = f64::EPSILON;

/// Convert an angle in degrees in the range [-180, 180] to a compass
/// bearing in the range [0, 360).
#[must_use]
pub fn normalise_bearing(degrees: Degrees) -> Degrees {
    let mut value = degrees.0;
    if value < 0.0 {
        value += 360.0;
    }
    // -0.0 and values rounded up to 360 by the addition
    if value <= 0.0 || 360.0 <= value {
        value = 0.0;
    }
    Degrees(value)
}

/// The compass bearing of the direction with North component `x` and
/// East component `y`.
fn calculate_bearing(y: f64, x: f64) -> Degrees {
    normalise_bearing(Degrees::from(Angle::from_y_x(y, x)))
}

/// The solution of the direct geodesic problem.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectSolution {
    /// The destination position.
    pub position: LatLong,
    /// The bearing at the destination.
    pub final_bearing: Degrees,
}

/// The solution of the inverse geodesic problem.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InverseSolution {
    /// The distance along the geodesic.
    pub distance: Metres,
    /// The bearing at the start point.
    pub initial_bearing: Degrees,
    /// The bearing at the finish point.
    pub final_bearing: Degrees,
}

/// A converged direct solution on the auxiliary sphere.
#[derive(Clone, Copy, Debug)]
struct DirectArc {
    sin_u1: f64,
    cos_u1: f64,
    sin_azi1: f64,
    cos_azi1: f64,
    sin_alpha: f64,
    sq_cos_alpha: f64,
    sigma: f64,
    sin_sigma: f64,
    cos_sigma: f64,
    cos_2sigma_m: f64,
}

impl DirectArc {
    /// The term shared by the destination latitude and the final bearing.
    fn t(&self) -> f64 {
        self.sin_u1 * self.sin_sigma - self.cos_u1 * self.cos_sigma * self.cos_azi1
    }

    fn final_bearing(&self) -> Degrees {
        calculate_bearing(self.sin_alpha, -self.t())
    }

    fn destination(&self, start: &LatLong, ellipsoid: &Ellipsoid) -> LatLong {
        let lat = Angle::from_y_x(
            self.sin_u1 * self.cos_sigma + self.cos_u1 * self.sin_sigma * self.cos_azi1,
            ellipsoid.one_minus_f() * libm::hypot(self.sin_alpha, self.t()),
        );

        // The longitude difference on the auxiliary sphere
        let lambda = libm::atan2(
            self.sin_sigma * self.sin_azi1,
            self.cos_u1 * self.cos_sigma - self.sin_u1 * self.sin_sigma * self.cos_azi1,
        );
        let delta_lon = lambda
            - calculate_delta_lambda(
                ellipsoid.f(),
                self.sq_cos_alpha,
                self.sin_alpha,
                self.sigma,
                self.sin_sigma,
                self.cos_sigma,
                self.cos_2sigma_m,
            );

        // Degrees addition normalises the longitude to (-180, 180]
        LatLong::new(
            Degrees::from(lat),
            start.lon() + Degrees::from(Radians(delta_lon)),
        )
    }
}

/// Iterate the direct solution until the angular distance converges.
fn solve_direct(
    start: &LatLong,
    distance: Metres,
    bearing: Degrees,
    ellipsoid: &Ellipsoid,
    config: &ConvergenceConfig,
) -> Result<DirectArc, VincentyError> {
    let beta1 = ellipsoid.calculate_reduced_latitude(Angle::from(start.lat()));
    let sin_u1 = beta1.sin().0;
    let cos_u1 = beta1.cos().0;

    let azi1 = Angle::from(bearing);
    let sin_azi1 = azi1.sin().0;
    let cos_azi1 = azi1.cos().0;

    // Twice the angular distance from the Equator to the start point
    let sigma1_x2 = 2.0 * libm::atan2(sin_u1, cos_u1 * cos_azi1);

    // The azimuth of the geodesic at the Equator
    let sin_alpha = cos_u1 * sin_azi1;
    let mut sq_cos_alpha = 1.0 - sin_alpha * sin_alpha;
    let (a, b) = if sq_cos_alpha < MIN_VALUE {
        sq_cos_alpha = 0.0;
        (1.0, 0.0)
    } else {
        evaluate_a_b(sq_cos_alpha, ellipsoid.ep_2())
    };

    let sigma0 = distance.0 / (ellipsoid.b().0 * a);
    let mut sigma = sigma0;
    for i in 0..config.iteration_limit() {
        let sin_sigma = libm::sin(sigma);
        let cos_sigma = libm::cos(sigma);
        let cos_2sigma_m = libm::cos(sigma1_x2 + sigma);

        let previous = sigma;
        sigma = sigma0 + calculate_delta_sigma(b, sin_sigma, cos_sigma, cos_2sigma_m);
        if libm::fabs(sigma - previous) < config.epsilon() {
            log::trace!("direct solution converged in {} iterations", i + 1);
            return Ok(DirectArc {
                sin_u1,
                cos_u1,
                sin_azi1,
                cos_azi1,
                sin_alpha,
                sq_cos_alpha,
                sigma,
                sin_sigma,
                cos_sigma,
                cos_2sigma_m,
            });
        }
    }

    let points = Endpoints::Start(Position::from(start));
    log::debug!("direct solution did not converge for {points}");
    Err(VincentyError::NoConvergence {
        points,
        iterations: config.iteration_limit(),
    })
}

/// A converged inverse solution on the auxiliary sphere.
#[derive(Clone, Copy, Debug)]
struct InverseArc {
    sin_u1: f64,
    cos_u1: f64,
    sin_u2: f64,
    cos_u2: f64,
    sin_lambda: f64,
    cos_lambda: f64,
    /// Whether the line is along the Equator, i.e. cos²α is zero.
    equatorial: bool,
    sq_cos_alpha: f64,
    sigma: f64,
    sin_sigma: f64,
    cos_sigma: f64,
    cos_2sigma_m: f64,
}

impl InverseArc {
    fn distance(&self, ellipsoid: &Ellipsoid) -> Metres {
        let sigma = if self.equatorial {
            self.sigma
        } else {
            let (a, b) = evaluate_a_b(self.sq_cos_alpha, ellipsoid.ep_2());
            a * (self.sigma
                - calculate_delta_sigma(b, self.sin_sigma, self.cos_sigma, self.cos_2sigma_m))
        };
        Metres(ellipsoid.b().0 * sigma)
    }

    fn initial_bearing(&self) -> Degrees {
        calculate_bearing(
            self.cos_u2 * self.sin_lambda,
            self.cos_u1 * self.sin_u2 - self.sin_u1 * self.cos_u2 * self.cos_lambda,
        )
    }

    fn final_bearing(&self) -> Degrees {
        calculate_bearing(
            self.cos_u1 * self.sin_lambda,
            -self.sin_u1 * self.cos_u2 + self.cos_u1 * self.sin_u2 * self.cos_lambda,
        )
    }
}

/// Iterate the inverse solution until the longitude difference on the
/// auxiliary sphere converges.
fn solve_inverse(
    a: &LatLong,
    b: &LatLong,
    ellipsoid: &Ellipsoid,
    config: &ConvergenceConfig,
) -> Result<InverseArc, VincentyError> {
    let beta1 = ellipsoid.calculate_reduced_latitude(Angle::from(a.lat()));
    let beta2 = ellipsoid.calculate_reduced_latitude(Angle::from(b.lat()));
    let sin_u1 = beta1.sin().0;
    let cos_u1 = beta1.cos().0;
    let sin_u2 = beta2.sin().0;
    let cos_u2 = beta2.cos().0;

    let sin_u1_sin_u2 = sin_u1 * sin_u2;
    let cos_u1_cos_u2 = cos_u1 * cos_u2;
    let cos_u1_sin_u2 = cos_u1 * sin_u2;
    let sin_u1_cos_u2 = sin_u1 * cos_u2;

    // The longitude difference on the ellipsoid, in radians
    let delta_lon = (b.lon() - a.lon()).0.to_radians();

    let mut lambda = delta_lon;
    for i in 0..config.iteration_limit() {
        let sin_lambda = libm::sin(lambda);
        let cos_lambda = libm::cos(lambda);

        let sin_sigma = libm::hypot(
            cos_u2 * sin_lambda,
            cos_u1_sin_u2 - sin_u1_cos_u2 * cos_lambda,
        );
        if sin_sigma < MIN_VALUE {
            let first = Position::from(a);
            let second = Position::from(b);
            log::debug!("inverse solution: {first} coincident with {second}");
            return Err(VincentyError::CoincidentPoints { first, second });
        }
        let cos_sigma = sin_u1_sin_u2 + cos_u1_cos_u2 * cos_lambda;
        let sigma = libm::atan2(sin_sigma, cos_sigma);

        // The azimuth of the geodesic at the Equator
        let sin_alpha = cos_u1_cos_u2 * sin_lambda / sin_sigma;
        let mut sq_cos_alpha = 1.0 - sin_alpha * sin_alpha;

        let previous = lambda;
        let equatorial = libm::fabs(sq_cos_alpha) < MIN_VALUE;
        let cos_2sigma_m = if equatorial {
            sq_cos_alpha = 0.0;
            lambda = delta_lon + ellipsoid.f() * sin_alpha * sigma;
            0.0
        } else {
            let cos_2sigma_m = cos_sigma - 2.0 * sin_u1_sin_u2 / sq_cos_alpha;
            lambda = delta_lon
                + calculate_delta_lambda(
                    ellipsoid.f(),
                    sq_cos_alpha,
                    sin_alpha,
                    sigma,
                    sin_sigma,
                    cos_sigma,
                    cos_2sigma_m,
                );
            cos_2sigma_m
        };

        if libm::fabs(lambda - previous) < config.epsilon() {
            log::trace!("inverse solution converged in {} iterations", i + 1);
            return Ok(InverseArc {
                sin_u1,
                cos_u1,
                sin_u2,
                cos_u2,
                sin_lambda,
                cos_lambda,
                equatorial,
                sq_cos_alpha,
                sigma,
                sin_sigma,
                cos_sigma,
                cos_2sigma_m,
            });
        }
    }

    let points = Endpoints::Pair(Position::from(a), Position::from(b));
    log::debug!("inverse solution did not converge for {points}");
    Err(VincentyError::NoConvergence {
        points,
        iterations: config.iteration_limit(),
    })
}

/// Calculate the destination position and final bearing of a geodesic,
/// Vincenty's direct method.
/// * `start` - the start point.
/// * `distance` - the distance along the geodesic, in the units of the
///   ellipsoid's axes, ignoring the start point's height.
/// * `bearing` - the initial bearing in degrees from North.
/// * `config` - the convergence configuration.
///
/// # Errors
///
/// `NoConvergence` if the solution did not converge within the iteration limit.
///
/// # Examples
/// ```
/// use vincenty_ellipsoid::{vincenty, ConvergenceConfig, Degrees, GeodeticPoint, Metres};
///
/// let start = GeodeticPoint::wgs84(Degrees(-37.95103), Degrees(144.42487));
/// let result = vincenty::destination(
///     &start,
///     Metres(54_972.271),
///     Degrees(306.86816),
///     &ConvergenceConfig::default(),
/// )
/// .unwrap();
/// assert!((result.position.lat().0 - -37.652_818).abs() < 1.0e-6);
/// assert!((result.position.lon().0 - 143.926_498).abs() < 1.0e-6);
/// assert!((result.final_bearing.0 - 307.1736).abs() < 1.0e-4);
/// ```
pub fn destination<P: Geodetic>(
    start: &P,
    distance: Metres,
    bearing: Degrees,
    config: &ConvergenceConfig,
) -> Result<DirectSolution, VincentyError> {
    let position = start.position();
    let ellipsoid = start.ellipsoid();
    let arc = solve_direct(&position, distance, bearing, ellipsoid, config)?;
    Ok(DirectSolution {
        position: arc.destination(&position, ellipsoid),
        final_bearing: arc.final_bearing(),
    })
}

/// Calculate the final bearing of a geodesic, Vincenty's direct method
/// without calculating the destination position.
/// * `start` - the start point.
/// * `distance` - the distance along the geodesic.
/// * `bearing` - the initial bearing in degrees from North.
/// * `config` - the convergence configuration.
///
/// # Errors
///
/// `NoConvergence` if the solution did not converge within the iteration limit.
pub fn final_bearing<P: Geodetic>(
    start: &P,
    distance: Metres,
    bearing: Degrees,
    config: &ConvergenceConfig,
) -> Result<Degrees, VincentyError> {
    let arc = solve_direct(
        &start.position(),
        distance,
        bearing,
        start.ellipsoid(),
        config,
    )?;
    Ok(arc.final_bearing())
}

/// Calculate the distance between a pair of points along the geodesic
/// joining them, Vincenty's inverse method without the bearings.
/// * `a`, `b` - the start and finish points.
/// * `config` - the convergence configuration.
///
/// # Errors
///
/// `MismatchedEllipsoid` if the points are on different ellipsoids,
/// `CoincidentPoints` if the points are too close together,
/// `NoConvergence` if the solution did not converge within the iteration limit.
pub fn distance<P: Geodetic, Q: Geodetic>(
    a: &P,
    b: &Q,
    config: &ConvergenceConfig,
) -> Result<Metres, VincentyError> {
    let ellipsoid = a.ellipsoids(b)?;
    let arc = solve_inverse(&a.position(), &b.position(), ellipsoid, config)?;
    Ok(arc.distance(ellipsoid))
}

/// Calculate the distance and the initial and final bearings of the geodesic
/// between a pair of points, Vincenty's inverse method.
/// * `a`, `b` - the start and finish points.
/// * `config` - the convergence configuration.
///
/// # Errors
///
/// `MismatchedEllipsoid` if the points are on different ellipsoids,
/// `CoincidentPoints` if the points are too close together,
/// `NoConvergence` if the solution did not converge within the iteration limit.
///
/// # Examples
/// ```
/// use vincenty_ellipsoid::{vincenty, ConvergenceConfig, Degrees, GeodeticPoint};
///
/// let land_s_end = GeodeticPoint::wgs84(Degrees(50.06632), Degrees(-5.71475));
/// let john_o_groats = GeodeticPoint::wgs84(Degrees(58.64402), Degrees(-3.07009));
/// let result =
///     vincenty::distance_and_bearings(&land_s_end, &john_o_groats, &ConvergenceConfig::default())
///         .unwrap();
/// assert!((result.distance.0 - 969_954.166).abs() < 1.0e-3);
/// assert!((result.initial_bearing.0 - 9.141_877).abs() < 1.0e-6);
/// assert!((result.final_bearing.0 - 11.297_22).abs() < 1.0e-5);
/// ```
pub fn distance_and_bearings<P: Geodetic, Q: Geodetic>(
    a: &P,
    b: &Q,
    config: &ConvergenceConfig,
) -> Result<InverseSolution, VincentyError> {
    let ellipsoid = a.ellipsoids(b)?;
    let arc = solve_inverse(&a.position(), &b.position(), ellipsoid, config)?;
    Ok(InverseSolution {
        distance: arc.distance(ellipsoid),
        initial_bearing: arc.initial_bearing(),
        final_bearing: arc.final_bearing(),
    })
}
