//! Integrated multipole strengths of an element.

use smallvec::SmallVec;

use crate::error::{ConfigError, MultipoleKind};

/// Inline capacity for coefficient storage; covers up to a 14-pole.
type Coeffs = SmallVec<[f64; 8]>;

/// Integrated normal and skew multipole strengths, orders `0..=order`.
///
/// `knl` and `ksl` always have exactly `order + 1` entries: the shorter of
/// the two input sequences is padded with zeros. The reciprocal factorial
/// table `inv_factorial[n] = 1 / n!` is precomputed alongside so the kick
/// primitive never evaluates factorials per particle.
#[derive(Clone, Debug, PartialEq)]
pub struct Multipoles {
    knl: Coeffs,
    ksl: Coeffs,
    inv_factorial: Coeffs,
}

impl Multipoles {
    /// Build from normal and skew sequences.
    ///
    /// Both sequences empty yields order 0 with zero coefficients.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NonFiniteMultipole`] for the first NaN or
    /// infinite coefficient.
    pub fn new(knl: &[f64], ksl: &[f64]) -> Result<Self, ConfigError> {
        check_finite(knl, MultipoleKind::Normal)?;
        check_finite(ksl, MultipoleKind::Skew)?;

        let len = knl.len().max(ksl.len()).max(1);
        let pad = |src: &[f64]| -> Coeffs {
            let mut v: Coeffs = src.iter().copied().collect();
            v.resize(len, 0.0);
            v
        };

        let mut inv_factorial = Coeffs::with_capacity(len);
        let mut acc = 1.0;
        for n in 0..len {
            if n > 0 {
                acc /= n as f64;
            }
            inv_factorial.push(acc);
        }

        Ok(Self {
            knl: pad(knl),
            ksl: pad(ksl),
            inv_factorial,
        })
    }

    /// No multipole content (order 0, zero strengths).
    pub fn zero() -> Self {
        Self {
            knl: smallvec::smallvec![0.0],
            ksl: smallvec::smallvec![0.0],
            inv_factorial: smallvec::smallvec![1.0],
        }
    }

    /// Highest configured order.
    pub fn order(&self) -> usize {
        self.knl.len() - 1
    }

    /// Integrated normal strengths, indices `0..=order`.
    pub fn knl(&self) -> &[f64] {
        &self.knl
    }

    /// Integrated skew strengths, indices `0..=order`.
    pub fn ksl(&self) -> &[f64] {
        &self.ksl
    }

    /// Reciprocal factorials `1/n!`, indices `0..=order`.
    pub fn inv_factorial(&self) -> &[f64] {
        &self.inv_factorial
    }

    /// Whether every coefficient up to the configured order is zero.
    pub fn is_zero(&self) -> bool {
        self.knl.iter().chain(self.ksl.iter()).all(|&c| c == 0.0)
    }
}

impl Default for Multipoles {
    fn default() -> Self {
        Self::zero()
    }
}

fn check_finite(coeffs: &[f64], kind: MultipoleKind) -> Result<(), ConfigError> {
    match coeffs.iter().position(|c| !c.is_finite()) {
        Some(index) => Err(ConfigError::NonFiniteMultipole {
            kind,
            index,
            value: coeffs[index],
        }),
        None => Ok(()),
    }
}
