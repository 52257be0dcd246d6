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

//! The error module contains the errors returned by the Vincenty solvers.

use angle_sc::Degrees;
use core::fmt;
use thiserror::Error;
use unit_sphere::LatLong;

/// A geodetic position, as reported in errors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Position {
    /// The latitude in degrees.
    pub lat: Degrees,
    /// The longitude in degrees.
    pub lon: Degrees,
}

impl Position {
    /// Constructor.
    /// * `lat` - the latitude in degrees.
    /// * `lon` - the longitude in degrees.
    #[must_use]
    pub const fn new(lat: Degrees, lon: Degrees) -> Self {
        Self { lat, lon }
    }
}

impl From<&LatLong> for Position {
    fn from(a: &LatLong) -> Self {
        Self::new(a.lat(), a.lon())
    }
}

impl fmt::Display for Position {
    /// Formats the position as hemisphere qualified degrees,
    /// e.g. `41.49008°N, 71.312796°W`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ns = if self.lat.0 < 0.0 { 'S' } else { 'N' };
        let ew = if self.lon.0 < 0.0 { 'W' } else { 'E' };
        write!(
            f,
            "{}°{}, {}°{}",
            libm::fabs(self.lat.0),
            ns,
            libm::fabs(self.lon.0),
            ew
        )
    }
}

/// The position(s) that a solver failed to converge for.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Endpoints {
    /// The start position of a direct solution.
    Start(Position),
    /// The start and finish positions of an inverse solution.
    Pair(Position, Position),
}

impl fmt::Display for Endpoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start(a) => write!(f, "LatLon({a})"),
            Self::Pair(a, b) => write!(f, "LatLon({a}) to LatLon({b})"),
        }
    }
}

/// The errors that may be returned by the Vincenty direct and inverse solvers
/// and by the `ConvergenceConfig` constructors.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum VincentyError {
    /// The points are on different ellipsoids, one of them must be converted
    /// to the other's datum first.
    #[error("other Ellipsoid mismatch: {other} vs {this}")]
    MismatchedEllipsoid {
        this: &'static str,
        other: &'static str,
    },

    /// The points are too close together to determine a geodesic between them.
    #[error("LatLon({first}) coincident with LatLon({second})")]
    CoincidentPoints { first: Position, second: Position },

    /// The solution did not converge within the iteration limit.
    #[error("no convergence for {points} in {iterations} iterations")]
    NoConvergence { points: Endpoints, iterations: u32 },

    /// The convergence epsilon is not in the open range (0, 1).
    #[error("invalid epsilon: {0}, must be between 0 and 1")]
    InvalidEpsilon(f64),

    /// The iteration limit is not in the open range (2, 200).
    #[error("invalid iteration limit: {0}, must be between 2 and 200")]
    InvalidIterationLimit(u32),
}
