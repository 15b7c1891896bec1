//! Mining configuration

use crate::error::{FpError, Result};

/// Minimum support threshold, either absolute or relative to the input size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MinSupport {
    /// Number of transactions an itemset has to occur in.
    Count(usize),
    /// Share of all transactions, resolved as `ceil(fraction * n)`.
    Fraction(f64),
}

impl MinSupport {
    /// Checks the threshold without knowing the input size.
    pub fn validate(self) -> Result<()> {
        match self {
            MinSupport::Count(0) => Err(FpError::InvalidMinSupport(0)),
            MinSupport::Count(_) => Ok(()),
            // Negated so that NaN is rejected as well.
            MinSupport::Fraction(f) if !(f > 0.0 && f <= 1.0) => {
                Err(FpError::InvalidMinSupportFraction(f))
            }
            MinSupport::Fraction(_) => Ok(()),
        }
    }

    /// Resolves the threshold into the absolute count used by every tree of a run.
    pub fn resolve(self, num_transactions: usize) -> Result<usize> {
        self.validate()?;
        Ok(match self {
            MinSupport::Count(count) => count,
            MinSupport::Fraction(f) => ((f * num_transactions as f64).ceil() as usize).max(1),
        })
    }
}

impl From<usize> for MinSupport {
    fn from(count: usize) -> Self {
        MinSupport::Count(count)
    }
}

impl From<f64> for MinSupport {
    fn from(fraction: f64) -> Self {
        MinSupport::Fraction(fraction)
    }
}

/// Settings for one mining run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MiningConfig {
    pub min_support: MinSupport,
}

impl MiningConfig {
    pub fn new(min_support: impl Into<MinSupport>) -> Self {
        Self {
            min_support: min_support.into(),
        }
    }

    pub fn resolve(&self, num_transactions: usize) -> Result<usize> {
        self.min_support.resolve(num_transactions)
    }
}
