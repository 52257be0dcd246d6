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

//! vincenty-ellipsoid
//!
//! A library for calculating geodesic distances, bearings and destination
//! points on the surface of an ellipsoid of revolution using
//! [Vincenty's formulae](https://en.wikipedia.org/wiki/Vincenty%27s_formulae).
//!
//! The shortest path between two points on the surface of an ellipsoid is a
//! [geodesic segment](https://en.wikipedia.org/wiki/Geodesics_on_an_ellipsoid).
//! Vincenty's formulae model a geodesic as a great circle arc on an
//! auxiliary sphere and iterate a correction series until it converges,
//! giving distances accurate to within 0.5 mm on the Earth.
//!
//! The library solves:
//!
//! - the *direct* problem: the destination point and final bearing after
//!   travelling a distance from a point along an initial bearing;
//! - the *inverse* problem: the distance and the initial and final bearings
//!   between a pair of points.
//!
//! ## Design
//!
//! A `GeodeticPoint` holds a latitude, longitude and height together with a
//! reference to its `Ellipsoid` and its own `ConvergenceConfig`.
//! The `vincenty` solvers operate on any type implementing the `Geodetic`
//! trait, so other point types may use them too.
//!
//! The reference ellipsoids are held in the static
//! [`ellipsoid::catalogue`], the default being WGS 84.
//! Points are only compatible if they reference the same `Ellipsoid`
//! instance: calculations between points on different ellipsoids fail with
//! `VincentyError::MismatchedEllipsoid`.
//!
//! Vincenty's inverse method may fail to converge for nearly antipodal
//! points. In that case a `VincentyError::NoConvergence` is returned and a
//! result may be obtained by increasing the epsilon and/or the iteration
//! limit of the `ConvergenceConfig`.
//!
//! The library depends upon the following crates:
//!
//! - [angle-sc](https://crates.io/crates/angle-sc) - to define `Angle`,
//!   `Degrees` and `Radians` and perform trigonometric calculations;
//! - [unit-sphere](https://crates.io/crates/unit-sphere) - to define `LatLong`;
//! - [icao_units](https://crates.io/crates/icao-units) - to define `Metres`;
//! - [thiserror](https://crates.io/crates/thiserror) and
//!   [log](https://crates.io/crates/log) for errors and logging.
//!
//! The library is declared [no_std](https://docs.rust-embedded.org/book/intro/no-std.html)
//! so it can be used in embedded applications.
//!
//! ## Example
//! ```
//! use vincenty_ellipsoid::*;
//!
//! let newport_ri = GeodeticPoint::wgs84(Degrees(41.49008), Degrees(-71.312796));
//! let cleveland_oh = GeodeticPoint::wgs84(Degrees(41.499498), Degrees(-81.695391));
//!
//! let distance = newport_ri.distance_to(&cleveland_oh).unwrap();
//! assert!((distance.0 - 866_455.432_92).abs() < 1.0e-5);
//!
//! let distance_nm = NauticalMiles::from(distance);
//! println!("Newport-Cleveland distance: {:?}", distance_nm);
//! ```

#![cfg_attr(not(test), no_std)]

extern crate angle_sc;
extern crate icao_units;
extern crate unit_sphere;

pub mod convergence;
pub mod ellipsoid;
pub mod error;
pub mod vincenty;

pub use angle_sc::{Angle, Degrees, Radians, Validate};
pub use convergence::ConvergenceConfig;
pub use error::VincentyError;
pub use icao_units::non_si::NauticalMiles;
pub use icao_units::si::Metres;
pub use unit_sphere::LatLong;

use core::fmt;
use error::Position;

/// The parameters of an `Ellipsoid`.
#[derive(Clone, Debug, PartialEq)]
pub struct Ellipsoid {
    /// The name of the ellipsoid.
    name: &'static str,
    /// The Semimajor axis of the ellipsoid.
    a: Metres,
    /// The flattening of the ellipsoid, a ratio.
    f: f64,

    /// The Semiminor axis of the ellipsoid.
    b: Metres,
    /// One minus the flattening ratio.
    one_minus_f: f64,
    /// The square of the second Eccentricity of the ellipsoid.
    ep_2: f64,
}

impl Ellipsoid {
    /// Constructor.
    /// * `name` - the name of the `Ellipsoid`.
    /// * `a` - the Semimajor axis of the `Ellipsoid`.
    /// * `f` - the flattening of the `Ellipsoid`, a ratio: 0 <= f < 1.
    #[must_use]
    pub fn new(name: &'static str, a: Metres, f: f64) -> Self {
        Self {
            name,
            a,
            f,
            b: ellipsoid::calculate_minor_axis(a, f),
            one_minus_f: 1.0 - f,
            ep_2: ellipsoid::calculate_sq_2nd_eccentricity(f),
        }
    }

    /// The name of the ellipsoid.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The Semimajor axis of the ellipsoid.
    #[must_use]
    pub const fn a(&self) -> Metres {
        self.a
    }

    /// The flattening of the ellipsoid, a ratio.
    #[must_use]
    pub const fn f(&self) -> f64 {
        self.f
    }

    /// The Semiminor axis of the ellipsoid.
    #[must_use]
    pub const fn b(&self) -> Metres {
        self.b
    }

    /// One minus the flattening ratio.
    #[must_use]
    pub const fn one_minus_f(&self) -> f64 {
        self.one_minus_f
    }

    /// The square of the second Eccentricity of the ellipsoid.
    #[must_use]
    pub const fn ep_2(&self) -> f64 {
        self.ep_2
    }

    /// Convert a geodetic Latitude to a reduced Latitude on the
    /// auxiliary sphere.
    /// * `lat` - the geodetic Latitude
    #[must_use]
    pub fn calculate_reduced_latitude(&self, lat: Angle) -> Angle {
        ellipsoid::calculate_reduced_latitude(lat, self.one_minus_f)
    }
}

/// The capabilities of a point on an ellipsoid required by the
/// `vincenty` solvers.
pub trait Geodetic {
    /// The latitude and longitude of the point.
    fn position(&self) -> LatLong;

    /// The height of the point above the ellipsoid.
    /// It is ignored by the `vincenty` solvers.
    fn height(&self) -> Metres;

    /// The `Ellipsoid` of the point.
    fn ellipsoid(&self) -> &Ellipsoid;

    /// The latitude of the point.
    fn lat(&self) -> Degrees {
        self.position().lat()
    }

    /// The longitude of the point.
    fn lon(&self) -> Degrees {
        self.position().lon()
    }

    /// The `Ellipsoid` shared by this point and the `other` point.
    ///
    /// # Errors
    ///
    /// `MismatchedEllipsoid` if the points reference different `Ellipsoid`s.
    fn ellipsoids<Q: Geodetic>(&self, other: &Q) -> Result<&Ellipsoid, VincentyError> {
        ellipsoid::shared_ellipsoid(self.ellipsoid(), other.ellipsoid())
    }
}

/// A point on the surface of an ellipsoid.
///
/// A `GeodeticPoint` is a value: it is `Copy`, so copying a point also copies
/// its `ConvergenceConfig` and changing the configuration of the copy does
/// not affect the original.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeodeticPoint<'a> {
    /// The latitude and longitude.
    position: LatLong,
    /// The height above the ellipsoid.
    height: Metres,
    /// A reference to the `Ellipsoid`.
    ellipsoid: &'a Ellipsoid,
    /// The numeric policy of the Vincenty solvers.
    convergence: ConvergenceConfig,
}

impl Validate for GeodeticPoint<'_> {
    /// Test whether a `GeodeticPoint` is valid.
    /// Whether -90° <= `latitude` <= 90° and -180° < `longitude` <= 180°.
    fn is_valid(&self) -> bool {
        let lon = self.position.lon().0;
        unit_sphere::is_valid_latitude(self.position.lat().0) && -180.0 < lon && lon <= 180.0
    }
}

impl Geodetic for GeodeticPoint<'_> {
    fn position(&self) -> LatLong {
        self.position
    }

    fn height(&self) -> Metres {
        self.height
    }

    fn ellipsoid(&self) -> &Ellipsoid {
        self.ellipsoid
    }
}

impl fmt::Display for GeodeticPoint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LatLon({})", Position::from(&self.position))
    }
}

impl GeodeticPoint<'static> {
    /// Construct a `GeodeticPoint` on the WGS 84 `Ellipsoid`.
    /// * `lat` - the latitude in degrees.
    /// * `lon` - the longitude in degrees.
    #[must_use]
    pub fn wgs84(lat: Degrees, lon: Degrees) -> Self {
        Self::new(lat, lon, ellipsoid::catalogue::wgs84())
    }
}

impl<'a> GeodeticPoint<'a> {
    /// Constructor, with zero height and the default `ConvergenceConfig`.
    /// * `lat` - the latitude in degrees.
    /// * `lon` - the longitude in degrees, normalised to (-180, 180],
    ///   so -180° becomes 180°.
    /// * `ellipsoid` - a reference to the `Ellipsoid`.
    #[must_use]
    pub fn new(lat: Degrees, lon: Degrees, ellipsoid: &'a Ellipsoid) -> Self {
        Self {
            position: LatLong::new(lat, lon.normalise()),
            height: Metres(0.0),
            ellipsoid,
            convergence: ConvergenceConfig::default(),
        }
    }

    /// Return this point at a height above the ellipsoid.
    #[must_use]
    pub const fn with_height(self, height: Metres) -> Self {
        Self { height, ..self }
    }

    /// Return this point with a `ConvergenceConfig`.
    #[must_use]
    pub const fn with_convergence(self, convergence: ConvergenceConfig) -> Self {
        Self {
            convergence,
            ..self
        }
    }

    /// Accessor for the `ConvergenceConfig`.
    #[must_use]
    pub const fn convergence(&self) -> &ConvergenceConfig {
        &self.convergence
    }

    /// The convergence epsilon, in radians.
    #[must_use]
    pub const fn epsilon(&self) -> f64 {
        self.convergence.epsilon()
    }

    /// Set the convergence epsilon.
    ///
    /// An `epsilon` outside of the open range (0, 1) is ignored and the
    /// previous value kept. Use `ConvergenceConfig::with_epsilon` to
    /// detect invalid values.
    /// * `epsilon` - the new epsilon, in radians.
    pub fn set_epsilon(&mut self, epsilon: f64) {
        match self.convergence.with_epsilon(epsilon) {
            Ok(convergence) => self.convergence = convergence,
            Err(error) => log::warn!("{error}, ignored"),
        }
    }

    /// The maximum number of iterations.
    #[must_use]
    pub const fn iteration_limit(&self) -> u32 {
        self.convergence.iteration_limit()
    }

    /// Set the maximum number of iterations.
    ///
    /// A `limit` outside of the open range (2, 200) is ignored and the
    /// previous value kept.
    /// * `limit` - the new iteration limit.
    pub fn set_iteration_limit(&mut self, limit: u32) {
        match self.convergence.with_iteration_limit(limit) {
            Ok(convergence) => self.convergence = convergence,
            Err(error) => log::warn!("{error}, ignored"),
        }
    }

    /// Calculate the destination point after travelling a distance from
    /// this point along a geodesic with an initial bearing.
    ///
    /// The destination point has this point's height, `Ellipsoid` and
    /// `ConvergenceConfig`.
    /// * `distance` - the distance along the geodesic, ignoring height.
    /// * `bearing` - the initial bearing in degrees from North.
    ///
    /// # Errors
    ///
    /// `NoConvergence` if the solution did not converge.
    ///
    /// # Examples
    /// ```
    /// use vincenty_ellipsoid::*;
    ///
    /// let p = GeodeticPoint::wgs84(Degrees(-37.95103), Degrees(144.42487));
    /// let d = p.destination(Metres(54_972.271), Degrees(306.86816)).unwrap();
    /// assert!((d.lat().0 - -37.652_818).abs() < 1.0e-6);
    /// assert!((d.lon().0 - 143.926_498).abs() < 1.0e-6);
    /// ```
    pub fn destination(&self, distance: Metres, bearing: Degrees) -> Result<Self, VincentyError> {
        self.destination_with_final_bearing(distance, bearing)
            .map(|(point, _)| point)
    }

    /// Calculate the destination point and the final bearing after travelling
    /// a distance from this point along a geodesic with an initial bearing.
    /// * `distance` - the distance along the geodesic, ignoring height.
    /// * `bearing` - the initial bearing in degrees from North.
    ///
    /// returns the destination point and the final bearing in degrees from North.
    ///
    /// # Errors
    ///
    /// `NoConvergence` if the solution did not converge.
    pub fn destination_with_final_bearing(
        &self,
        distance: Metres,
        bearing: Degrees,
    ) -> Result<(Self, Degrees), VincentyError> {
        let solution = vincenty::destination(self, distance, bearing, &self.convergence)?;
        let point = Self {
            position: solution.position,
            ..*self
        };
        Ok((point, solution.final_bearing))
    }

    /// Calculate the final bearing after travelling a distance from this
    /// point along a geodesic with an initial bearing.
    /// * `distance` - the distance along the geodesic.
    /// * `bearing` - the initial bearing in degrees from North.
    ///
    /// # Errors
    ///
    /// `NoConvergence` if the solution did not converge.
    pub fn final_bearing_on(
        &self,
        distance: Metres,
        bearing: Degrees,
    ) -> Result<Degrees, VincentyError> {
        vincenty::final_bearing(self, distance, bearing, &self.convergence)
    }

    /// Calculate the distance along the geodesic from this point to the
    /// `other` point.
    ///
    /// # Errors
    ///
    /// `MismatchedEllipsoid`, `CoincidentPoints` or `NoConvergence`.
    pub fn distance_to<Q: Geodetic>(&self, other: &Q) -> Result<Metres, VincentyError> {
        vincenty::distance(self, other, &self.convergence)
    }

    /// Calculate the distance and the initial and final bearings of the
    /// geodesic from this point to the `other` point.
    ///
    /// returns the distance, initial bearing and final bearing.
    ///
    /// # Errors
    ///
    /// `MismatchedEllipsoid`, `CoincidentPoints` or `NoConvergence`.
    pub fn distance_bearings_to<Q: Geodetic>(
        &self,
        other: &Q,
    ) -> Result<(Metres, Degrees, Degrees), VincentyError> {
        vincenty::distance_and_bearings(self, other, &self.convergence)
            .map(|s| (s.distance, s.initial_bearing, s.final_bearing))
    }

    /// Calculate the initial bearing of the geodesic from this point to the
    /// `other` point.
    ///
    /// # Errors
    ///
    /// `MismatchedEllipsoid`, `CoincidentPoints` or `NoConvergence`.
    pub fn initial_bearing_to<Q: Geodetic>(&self, other: &Q) -> Result<Degrees, VincentyError> {
        self.distance_bearings_to(other).map(|(_, initial, _)| initial)
    }

    /// Calculate the final bearing of the geodesic from this point to the
    /// `other` point.
    ///
    /// # Errors
    ///
    /// `MismatchedEllipsoid`, `CoincidentPoints` or `NoConvergence`.
    pub fn final_bearing_to<Q: Geodetic>(&self, other: &Q) -> Result<Degrees, VincentyError> {
        self.distance_bearings_to(other).map(|(_, _, last)| last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use angle_sc::is_within_tolerance;
    use ellipsoid::catalogue;

    #[test]
    fn test_ellipsoid_traits() {
        let wgs84 = catalogue::wgs84();

        let wgs84_clone = wgs84.clone();
        assert_eq!(wgs84, &wgs84_clone);

        println!("Ellipsoid: {:?}", wgs84);
    }

    #[test]
    fn test_geodetic_point_traits() {
        let a = GeodeticPoint::wgs84(Degrees(41.49008), Degrees(-71.312796));
        assert!(a.is_valid());

        let b = a;
        assert_eq!(a, b);
        assert_eq!("LatLon(41.49008°N, 71.312796°W)", a.to_string());

        let a = a.with_height(Metres(100.0));
        assert_eq!(Metres(100.0), a.height());
        assert_eq!(Degrees(41.49008), a.lat());
        assert_eq!(Degrees(-71.312796), a.lon());
        assert_eq!("WGS84", a.ellipsoid().name());
    }

    #[test]
    fn test_geodetic_point_longitude_range() {
        // -180° is the same meridian as 180°
        let a = GeodeticPoint::wgs84(Degrees(10.0), Degrees(-180.0));
        assert_eq!(Degrees(180.0), a.lon());
        assert!(a.is_valid());

        let b = GeodeticPoint::wgs84(Degrees(10.0), Degrees(180.0));
        assert_eq!(a, b);

        let c = GeodeticPoint::wgs84(Degrees(10.0), Degrees(-179.999));
        assert_eq!(Degrees(-179.999), c.lon());
        assert!(c.is_valid());

        // Latitudes are not normalised
        let d = GeodeticPoint::wgs84(Degrees(90.5), Degrees(0.0));
        assert!(!d.is_valid());

        // Longitudes beyond one turn of the range are not normalised
        let e = GeodeticPoint::wgs84(Degrees(0.0), Degrees(600.0));
        assert!(!e.is_valid());
    }

    #[test]
    fn test_geodetic_point_convergence() {
        let mut a = GeodeticPoint::wgs84(Degrees(50.06632), Degrees(-5.71475));
        assert_eq!(1.0e-12, a.epsilon());
        assert_eq!(50, a.iteration_limit());

        a.set_epsilon(1.0e-10);
        assert_eq!(1.0e-10, a.epsilon());
        a.set_iteration_limit(100);
        assert_eq!(100, a.iteration_limit());

        // Out of range values are ignored
        a.set_epsilon(0.0);
        a.set_epsilon(1.0);
        assert_eq!(1.0e-10, a.epsilon());
        a.set_iteration_limit(2);
        a.set_iteration_limit(200);
        assert_eq!(100, a.iteration_limit());

        // A copy has its own configuration
        let mut b = a;
        b.set_epsilon(1.0e-6);
        b.set_iteration_limit(10);
        assert_eq!(1.0e-10, a.epsilon());
        assert_eq!(100, a.iteration_limit());
        assert_eq!(1.0e-6, b.epsilon());
        assert_eq!(10, b.iteration_limit());

        let config = ConvergenceConfig::new(1.0e-8, 20).unwrap();
        let c = GeodeticPoint::wgs84(Degrees(0.0), Degrees(0.0)).with_convergence(config);
        assert_eq!(&config, c.convergence());
    }

    #[test]
    fn test_distance_to() {
        let newport_ri = GeodeticPoint::wgs84(Degrees(41.49008), Degrees(-71.312796));
        let cleveland_oh = GeodeticPoint::wgs84(Degrees(41.499498), Degrees(-81.695391));
        let result = newport_ri.distance_to(&cleveland_oh).unwrap();
        assert!(is_within_tolerance(866_455.432_92, result.0, 1.0e-5));

        let p = GeodeticPoint::wgs84(Degrees(50.06632), Degrees(-5.71475));
        let q = GeodeticPoint::wgs84(Degrees(58.64402), Degrees(-3.07009));
        let result = p.distance_to(&q).unwrap();
        assert!(is_within_tolerance(969_954.166_314, result.0, 1.0e-5));
    }

    #[test]
    fn test_distance_bearings_to() {
        let p = GeodeticPoint::wgs84(Degrees(50.06632), Degrees(-5.71475));
        let q = GeodeticPoint::wgs84(Degrees(58.64402), Degrees(-3.07009));

        let (distance, initial, last) = p.distance_bearings_to(&q).unwrap();
        assert!(is_within_tolerance(969_954.166_314, distance.0, 1.0e-5));
        assert!(is_within_tolerance(9.141_877, initial.0, 1.0e-6));
        assert!(is_within_tolerance(11.297_22, last.0, 1.0e-5));

        assert_eq!(initial, p.initial_bearing_to(&q).unwrap());
        assert_eq!(last, p.final_bearing_to(&q).unwrap());

        // The reverse geodesic
        let (distance, initial, last) = q.distance_bearings_to(&p).unwrap();
        assert!(is_within_tolerance(969_954.166_314, distance.0, 1.0e-5));
        assert!(is_within_tolerance(191.297_22, initial.0, 1.0e-5));
        assert!(is_within_tolerance(189.141_877, last.0, 1.0e-6));
    }

    #[test]
    fn test_distance_bearings_to_westward() {
        let p = GeodeticPoint::wgs84(Degrees(37.95103), Degrees(144.42487));
        let q = GeodeticPoint::wgs84(Degrees(37.65280), Degrees(143.9265));

        let (distance, initial, last) = p.distance_bearings_to(&q).unwrap();
        assert!(is_within_tolerance(54_973.295_27, distance.0, 1.0e-5));
        assert!(is_within_tolerance(233.130_08, initial.0, 1.0e-5));
        assert!(is_within_tolerance(232.824_61, last.0, 1.0e-5));
    }

    #[test]
    fn test_destination() {
        let p = GeodeticPoint::wgs84(Degrees(-37.95103), Degrees(144.42487))
            .with_height(Metres(25.0));
        let (d, last) = p
            .destination_with_final_bearing(Metres(54_972.271), Degrees(306.86816))
            .unwrap();
        assert!(is_within_tolerance(-37.652_818, d.lat().0, 1.0e-6));
        assert!(is_within_tolerance(143.926_498, d.lon().0, 1.0e-6));
        assert!(is_within_tolerance(307.1736, last.0, 1.0e-4));

        // The destination inherits height, ellipsoid and configuration
        assert_eq!(Metres(25.0), d.height());
        assert!(core::ptr::eq(p.ellipsoid(), d.ellipsoid()));
        assert_eq!(p.convergence(), d.convergence());

        assert_eq!(
            d,
            p.destination(Metres(54_972.271), Degrees(306.86816))
                .unwrap()
        );
        assert_eq!(
            last,
            p.final_bearing_on(Metres(54_972.271), Degrees(306.86816))
                .unwrap()
        );
    }

    #[test]
    fn test_destination_across_antimeridian() {
        let p = GeodeticPoint::wgs84(Degrees(0.0), Degrees(179.5));
        let d = p.destination(Metres(111_319.490_793), Degrees(90.0)).unwrap();
        assert!(is_within_tolerance(-179.5, d.lon().0, 1.0e-6));

        let p = GeodeticPoint::wgs84(Degrees(0.0), Degrees(-179.5));
        let d = p.destination(Metres(111_319.490_793), Degrees(270.0)).unwrap();
        assert!(is_within_tolerance(179.5, d.lon().0, 1.0e-6));
    }

    #[test]
    fn test_round_trip() {
        let start = GeodeticPoint::wgs84(Degrees(51.4778), Degrees(-0.0016));
        for i in 0..24 {
            let bearing = Degrees(f64::from(i) * 15.0 + 1.0);
            for distance in [1_000.0, 100_000.0, 5_000_000.0] {
                let distance = Metres(distance);
                let (finish, last) = start
                    .destination_with_final_bearing(distance, bearing)
                    .unwrap();
                assert!(finish.is_valid());
                assert!((0.0..360.0).contains(&last.0));

                let (result, initial, final_bearing) =
                    start.distance_bearings_to(&finish).unwrap();
                assert!(is_within_tolerance(distance.0, result.0, 1.0e-4));
                assert!(is_within_tolerance(bearing.0, initial.0, 1.0e-6));
                assert!(is_within_tolerance(last.0, final_bearing.0, 1.0e-6));
            }
        }
    }

    #[test]
    fn test_round_trip_short() {
        let start = GeodeticPoint::wgs84(Degrees(-33.8568), Degrees(151.2153));
        for i in 0..8 {
            let bearing = Degrees(f64::from(i) * 45.0 + 10.0);
            let finish = start.destination(Metres(1.0), bearing).unwrap();
            let result = start.distance_to(&finish).unwrap();
            assert!(is_within_tolerance(1.0, result.0, 1.0e-5));
        }
    }

    #[test]
    fn test_symmetry() {
        let points = [
            GeodeticPoint::wgs84(Degrees(41.49008), Degrees(-71.312796)),
            GeodeticPoint::wgs84(Degrees(-37.95103), Degrees(144.42487)),
            GeodeticPoint::wgs84(Degrees(0.0), Degrees(0.0)),
            GeodeticPoint::wgs84(Degrees(89.0), Degrees(-179.0)),
            GeodeticPoint::wgs84(Degrees(-60.0), Degrees(30.0)),
        ];
        for a in &points {
            for b in &points {
                if a == b {
                    assert!(matches!(
                        a.distance_to(b),
                        Err(VincentyError::CoincidentPoints { .. })
                    ));
                } else {
                    let ab = a.distance_to(b).unwrap();
                    let ba = b.distance_to(a).unwrap();
                    assert!(is_within_tolerance(ab.0, ba.0, 1.0e-4));
                    assert!(0.0 < ab.0);

                    let (_, initial, last) = a.distance_bearings_to(b).unwrap();
                    assert!((0.0..360.0).contains(&initial.0));
                    assert!((0.0..360.0).contains(&last.0));
                }
            }
        }
    }

    #[test]
    fn test_mismatched_ellipsoids() {
        let airy = catalogue::find("Airy1830").unwrap();
        let a = GeodeticPoint::wgs84(Degrees(41.49008), Degrees(-71.312796));
        let b = GeodeticPoint::new(Degrees(41.499498), Degrees(-81.695391), airy);

        let error = VincentyError::MismatchedEllipsoid {
            this: "WGS84",
            other: "Airy1830",
        };
        assert_eq!(Err(error), a.distance_to(&b));
        assert_eq!(Err(error), a.initial_bearing_to(&b));
        assert_eq!(
            "other Ellipsoid mismatch: Airy1830 vs WGS84",
            a.distance_to(&b).unwrap_err().to_string()
        );

        // Points on an equal but different Ellipsoid instance are incompatible
        let wgs84_copy = catalogue::wgs84().clone();
        let c = GeodeticPoint::new(Degrees(41.499498), Degrees(-81.695391), &wgs84_copy);
        assert!(a.distance_to(&c).is_err());

        // Points on the same non-default Ellipsoid are compatible
        let d = GeodeticPoint::new(Degrees(41.49008), Degrees(-71.312796), airy);
        assert!(d.distance_to(&b).is_ok());
    }

    #[test]
    fn test_coincident_points() {
        let newport_ri = GeodeticPoint::wgs84(Degrees(41.49008), Degrees(-71.312796));
        let result = newport_ri.distance_to(&newport_ri);
        assert_eq!(
            "LatLon(41.49008°N, 71.312796°W) coincident with LatLon(41.49008°N, 71.312796°W)",
            result.unwrap_err().to_string()
        );
    }
}
