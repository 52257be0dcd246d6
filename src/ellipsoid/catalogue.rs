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

//! The catalogue module contains the primary parameters of commonly used
//! reference ellipsoids and a static catalogue of the `Ellipsoid`s.
//!
//! Points are only compatible if they reference the same `Ellipsoid`
//! instance, so points on a catalogued ellipsoid should always be
//! constructed with a reference from this catalogue.

use crate::{Ellipsoid, Metres};
use lazy_static::lazy_static;

/// The WGS 84 Semimajor axis measured in metres.  
/// This is the radius at the equator.
pub const WGS84_A: Metres = Metres(6_378_137.0);

/// The WGS 84 flattening, a ratio.  
/// This is the flattening of the ellipsoid at the poles.
pub const WGS84_F: f64 = 1.0 / 298.257_223_563;

/// The primary parameters of the catalogued ellipsoids:
/// name, Semimajor axis and inverse flattening.
const PARAMETERS: [(&str, Metres, f64); 9] = [
    ("WGS84", WGS84_A, 298.257_223_563),
    ("GRS80", Metres(6_378_137.0), 298.257_222_101),
    ("WGS72", Metres(6_378_135.0), 298.26),
    ("Airy1830", Metres(6_377_563.396), 299.324_964_6),
    ("AiryModified", Metres(6_377_340.189), 299.324_964_6),
    ("Bessel1841", Metres(6_377_397.155), 299.152_812_8),
    ("Clarke1866", Metres(6_378_206.4), 294.978_698_214),
    ("Clarke1880IGN", Metres(6_378_249.2), 293.466_021_294),
    ("Intl1924", Metres(6_378_388.0), 297.0),
];

lazy_static! {
    /// The catalogue of named `Ellipsoid`s, WGS 84 first.
    pub static ref ELLIPSOIDS: [Ellipsoid; 9] =
        PARAMETERS.map(|(name, a, inv_f)| Ellipsoid::new(name, a, 1.0 / inv_f));
}

/// The WGS 84 `Ellipsoid`, the default ellipsoid.
#[must_use]
pub fn wgs84() -> &'static Ellipsoid {
    &ELLIPSOIDS[0]
}

/// Find an `Ellipsoid` in the catalogue by name.
/// * `name` - the name of the ellipsoid, e.g. "Airy1830".
///
/// returns the `Ellipsoid` or None if it is not in the catalogue.
///
/// # Examples
/// ```
/// use vincenty_ellipsoid::ellipsoid::catalogue;
///
/// let airy = catalogue::find("Airy1830").unwrap();
/// assert_eq!(6_377_563.396, airy.a().0);
/// assert!(catalogue::find("Unknown").is_none());
/// ```
#[must_use]
pub fn find(name: &str) -> Option<&'static Ellipsoid> {
    ELLIPSOIDS.iter().find(|e| e.name() == name)
}
