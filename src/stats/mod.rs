//! The normal distribution, as seen by the rest of the crate.
//!
//! The cumulative distribution relies on the complementary error function of
//! [statrs](https://github.com/statrs-dev/statrs), which keeps its precision
//! far out in the tails. This module pins down which parameterizations are
//! acceptable and offers a couple of shorthands.

use statrs::function::erf;

use crate::error::InvalidInput;

/// Natural log of `sqrt(2π)`.
const LN_SQRT_2PI: f64 = 0.918_938_533_204_672_7;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normal {
    mean: f64,
    std_dev: f64,
}

impl Default for Normal {
    fn default() -> Self {
        Self {
            mean: 0.0,
            std_dev: 1.0,
        }
    }
}

impl Normal {
    /// Fails unless `mean` is finite and `std_dev` is finite and strictly positive.
    pub fn new(mean: f64, std_dev: f64) -> Result<Self, InvalidInput> {
        if !mean.is_finite() || !std_dev.is_finite() {
            return Err(InvalidInput::NonNumericParameters);
        }
        if std_dev <= 0.0 {
            return Err(InvalidInput::NonPositiveStdDev);
        }
        Ok(Self { mean, std_dev })
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// Probability density at `x`.
    ///
    /// `log p(x) = -0.5 * ((x-mu)/sigma)^2 - ln(sigma) - ln(sqrt(2π))`
    pub fn pdf(&self, x: f64) -> f64 {
        let z = (x - self.mean) / self.std_dev;
        (-0.5 * z * z - self.std_dev.ln() - LN_SQRT_2PI).exp()
    }

    /// `P(X <= x)`
    pub fn cdf(&self, x: f64) -> f64 {
        cdf_unchecked(x, self.mean, self.std_dev)
    }

    /// `P(X > x)`, computed as the complement of the cdf so that the two
    /// always add up to one.
    pub fn survival(&self, x: f64) -> f64 {
        1.0 - self.cdf(x)
    }

    /// `P(a <= X <= b)`; endpoints carry no mass.
    pub fn interval(&self, a: f64, b: f64) -> f64 {
        self.cdf(b) - self.cdf(a)
    }

    /// The interval `mean ± k·std_dev`.
    pub fn extent(&self, k: f64) -> (f64, f64) {
        (self.mean - k * self.std_dev, self.mean + k * self.std_dev)
    }
}

pub fn cdf_unchecked(x: f64, mean: f64, std_dev: f64) -> f64 {
    0.5 * erf::erfc((mean - x) / (std_dev * std::f64::consts::SQRT_2))
}
