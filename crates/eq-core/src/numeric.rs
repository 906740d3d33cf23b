use crate::EqError;

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-15,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, EqError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(EqError::NonFinite { what, value: v })
    }
}

/// Finite and `>= 0`.
pub fn ensure_non_negative(v: Real, what: &'static str) -> Result<Real, EqError> {
    let v = ensure_finite(v, what)?;
    if v < 0.0 {
        return Err(EqError::Negative { what, value: v });
    }
    Ok(v)
}

/// Finite and `> 0`.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, EqError> {
    let v = ensure_finite(v, what)?;
    if v <= 0.0 {
        return Err(EqError::NonPositive { what, value: v });
    }
    Ok(v)
}

/// Integer power for small stoichiometric exponents.
#[inline]
pub fn ipow(base: Real, exp: u32) -> Real {
    base.powi(exp as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn default_tolerance_resolves_micromolar_differences() {
        let tol = Tolerances::default();
        assert!(!nearly_equal(1.33e-5, 1.34e-5, tol));
        assert!(nearly_equal(1.33e-5, 1.33e-5 * (1.0 + 1e-12), tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn sign_checks() {
        assert!(ensure_non_negative(0.0, "mass").is_ok());
        assert!(matches!(
            ensure_non_negative(-1.0, "mass"),
            Err(EqError::Negative { .. })
        ));
        assert!(matches!(
            ensure_positive(0.0, "volume"),
            Err(EqError::NonPositive { .. })
        ));
        assert!(matches!(
            ensure_positive(Real::INFINITY, "volume"),
            Err(EqError::NonFinite { .. })
        ));
    }

    #[test]
    fn ipow_matches_powf() {
        assert_eq!(ipow(2.0, 2), 4.0);
        assert_eq!(ipow(3.0, 0), 1.0);
        assert!((ipow(1.5, 3) - 1.5_f64.powf(3.0)).abs() < 1e-15);
    }
}
