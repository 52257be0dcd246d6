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

//! The convergence module contains the numeric policy shared by the
//! Vincenty direct and inverse solvers.
//!
//! A `ConvergenceConfig` is a small `Copy` value, so each point owns its own
//! configuration and copying a point copies its configuration.

use crate::error::VincentyError;

/// The default convergence epsilon in radians, about 0.006 mm on the Earth.
pub const DEFAULT_EPSILON: f64 = 1.0e-12;

/// The default maximum number of iterations.
pub const DEFAULT_ITERATION_LIMIT: u32 = 50;

/// Test whether `epsilon` is in the open range (0, 1).
#[must_use]
pub const fn is_valid_epsilon(epsilon: f64) -> bool {
    0.0 < epsilon && epsilon < 1.0
}

/// Test whether `limit` is in the open range (2, 200).
#[must_use]
pub const fn is_valid_iteration_limit(limit: u32) -> bool {
    2 < limit && limit < 200
}

/// The convergence epsilon and iteration limit of the Vincenty solvers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConvergenceConfig {
    /// The change below which an iteration has converged, in radians.
    epsilon: f64,
    /// The maximum number of iterations.
    iteration_limit: u32,
}

impl Default for ConvergenceConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            iteration_limit: DEFAULT_ITERATION_LIMIT,
        }
    }
}

impl ConvergenceConfig {
    /// Constructor.
    /// * `epsilon` - the convergence epsilon in radians, 0 < `epsilon` < 1.
    /// * `iteration_limit` - the maximum number of iterations,
    ///   2 < `iteration_limit` < 200.
    ///
    /// # Errors
    ///
    /// `InvalidEpsilon` or `InvalidIterationLimit` if a value is out of range.
    ///
    /// # Examples
    /// ```
    /// use vincenty_ellipsoid::ConvergenceConfig;
    ///
    /// let config = ConvergenceConfig::new(1.0e-10, 100).unwrap();
    /// assert_eq!(1.0e-10, config.epsilon());
    /// assert_eq!(100, config.iteration_limit());
    ///
    /// assert!(ConvergenceConfig::new(1.0, 100).is_err());
    /// ```
    pub fn new(epsilon: f64, iteration_limit: u32) -> Result<Self, VincentyError> {
        Self::default()
            .with_epsilon(epsilon)?
            .with_iteration_limit(iteration_limit)
    }

    /// Accessor for the convergence epsilon in radians.
    #[must_use]
    pub const fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Accessor for the maximum number of iterations.
    #[must_use]
    pub const fn iteration_limit(&self) -> u32 {
        self.iteration_limit
    }

    /// Return a copy of this configuration with a new epsilon.
    ///
    /// # Errors
    ///
    /// `InvalidEpsilon` if `epsilon` is not in the open range (0, 1).
    pub const fn with_epsilon(self, epsilon: f64) -> Result<Self, VincentyError> {
        if is_valid_epsilon(epsilon) {
            Ok(Self { epsilon, ..self })
        } else {
            Err(VincentyError::InvalidEpsilon(epsilon))
        }
    }

    /// Return a copy of this configuration with a new iteration limit.
    ///
    /// # Errors
    ///
    /// `InvalidIterationLimit` if `limit` is not in the open range (2, 200).
    pub const fn with_iteration_limit(self, limit: u32) -> Result<Self, VincentyError> {
        if is_valid_iteration_limit(limit) {
            Ok(Self {
                iteration_limit: limit,
                ..self
            })
        } else {
            Err(VincentyError::InvalidIterationLimit(limit))
        }
    }
}
