//! Piecewise-linear desirability transfer functions.

use super::error::Error;

/// Transfer function shape with its breakpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transfer {
    /// Fully desirable up to `lower`, undesirable above `upper`.
    Monotone { lower: f64, upper: f64 },
    /// Desirable on the plateau `(up1, up2]`, ramping to zero at `low1` and `low2`.
    Hump {
        low1: f64,
        up1: f64,
        up2: f64,
        low2: f64,
    },
}

impl Transfer {
    pub fn apply(&self, value: f64) -> Result<f64, Error> {
        match *self {
            Transfer::Monotone { lower, upper } => monotone(value, lower, upper),
            Transfer::Hump {
                low1,
                up1,
                up2,
                low2,
            } => hump(value, low1, up1, up2, low2),
        }
    }
}

/// Monotone decreasing score.
///
/// Returns `1` for `value <= lower`, `0` for `value > upper` and a linear
/// interpolation in between. Fails when `lower == upper`.
pub fn monotone(value: f64, lower: f64, upper: f64) -> Result<f64, Error> {
    if upper == lower {
        return Err(Error::degenerate(lower, upper));
    }

    let score = if value <= lower {
        1.0
    } else if value > upper {
        0.0
    } else {
        1.0 - (value - lower) / (upper - lower)
    };
    Ok(score)
}

/// Hump (plateau) score.
///
/// Branches are tested in a fixed order so that breakpoints fall on the same
/// side as the plateau's half-open interval `(up1, up2]`. Fails when either
/// ramp has zero width.
pub fn hump(value: f64, low1: f64, up1: f64, up2: f64, low2: f64) -> Result<f64, Error> {
    if up1 == low1 {
        return Err(Error::degenerate(low1, up1));
    }
    if low2 == up2 {
        return Err(Error::degenerate(up2, low2));
    }

    let score = if value <= low1 {
        0.0
    } else if up1 < value && value <= up2 {
        1.0
    } else if value > low2 {
        0.0
    } else if low1 < value && value <= up1 {
        (value - low1) / (up1 - low1)
    } else if up2 < value && value <= low2 {
        1.0 - (value - up2) / (low2 - up2)
    } else {
        0.0
    };
    Ok(score)
}
