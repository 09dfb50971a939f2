use std::sync::OnceLock;

use crate::error::ToleranceError;

use super::{Point3, Vector3};

/// Default absolute tolerance.
pub const DEFAULT_ATOL: f64 = 1e-8;

/// Default relative tolerance.
pub const DEFAULT_RTOL: f64 = 1e-5;

static CONFIGURED: OnceLock<Tolerance> = OnceLock::new();

/// Absolute and relative tolerance used by every closeness decision.
///
/// Two scalars `a` and `b` are close when `|a - b| <= atol + rtol * |b|`.
/// The relative term is taken against the *second* argument, so the test is
/// not symmetric when `rtol` dominates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    atol: f64,
    rtol: f64,
}

impl Tolerance {
    /// Creates a tolerance.
    ///
    /// # Errors
    ///
    /// Returns [`ToleranceError::Invalid`] if either value is negative or not finite.
    pub fn new(atol: f64, rtol: f64) -> Result<Self, ToleranceError> {
        let valid = |x: f64| x.is_finite() && x >= 0.0;
        if !valid(atol) || !valid(rtol) {
            return Err(ToleranceError::Invalid { atol, rtol });
        }
        Ok(Self { atol, rtol })
    }

    /// Sets the process-wide tolerance.
    ///
    /// Must happen once, before the first call to [`Tolerance::configured`].
    ///
    /// # Errors
    ///
    /// Returns [`ToleranceError::AlreadyConfigured`] if the process-wide
    /// tolerance was already set or already read.
    pub fn configure(tolerance: Tolerance) -> Result<(), ToleranceError> {
        CONFIGURED
            .set(tolerance)
            .map_err(|_| ToleranceError::AlreadyConfigured)?;
        tracing::debug!(
            atol = tolerance.atol,
            rtol = tolerance.rtol,
            "configured process-wide tolerance"
        );
        Ok(())
    }

    /// Returns the process-wide tolerance, falling back to the defaults.
    ///
    /// The first read freezes the value.
    #[must_use]
    pub fn configured() -> Tolerance {
        *CONFIGURED.get_or_init(Tolerance::default)
    }

    /// Absolute tolerance.
    #[must_use]
    pub fn atol(&self) -> f64 {
        self.atol
    }

    /// Relative tolerance.
    #[must_use]
    pub fn rtol(&self) -> f64 {
        self.rtol
    }

    /// Returns `true` if `|a - b| <= atol + rtol * |b|`.
    #[must_use]
    pub fn scalar_close(&self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.atol + self.rtol * b.abs()
    }

    /// Returns `true` if `a` is close to zero, i.e. `|a| <= atol`.
    #[must_use]
    pub fn is_zero(&self, a: f64) -> bool {
        self.scalar_close(a, 0.0)
    }

    /// Element-wise [`scalar_close`](Self::scalar_close); all three components must pass.
    #[must_use]
    pub fn vector_close(&self, a: &Vector3, b: &Vector3) -> bool {
        a.iter().zip(b.iter()).all(|(&x, &y)| self.scalar_close(x, y))
    }

    /// Element-wise closeness of two points.
    #[must_use]
    pub fn point_close(&self, a: &Point3, b: &Point3) -> bool {
        self.vector_close(&a.coords, &b.coords)
    }

    /// Returns `true` if every component of `a` is close to zero.
    #[must_use]
    pub fn is_zero_vector(&self, a: &Vector3) -> bool {
        a.iter().all(|&x| self.is_zero(x))
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            atol: DEFAULT_ATOL,
            rtol: DEFAULT_RTOL,
        }
    }
}
