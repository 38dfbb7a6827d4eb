//! Numeric fixtures for tracking tests.
//!
//! - [`gaussian_bunch`]: deterministic particle bunch from a seed.
//! - [`sector_bend_matrix`]: analytic horizontal map of a sector bend.
//! - [`jacobian`] / [`symplectic_defect`]: finite-difference checks of
//!   the phase-space structure of a map.

use bendkit_core::Particle;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Transverse state `[x, px, y, py]`.
pub type State4 = [f64; 4];

/// A 4×4 matrix acting on [`State4`].
pub type Matrix4 = [[f64; 4]; 4];

/// Generate `n` on-momentum particles with independent Gaussian transverse
/// coordinates of the given RMS sizes `[σx, σpx, σy, σpy]`.
pub fn gaussian_bunch(n: usize, sigma: State4, seed: u64) -> Vec<Particle> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let mut s = [0.0; 4];
            for (v, sig) in s.iter_mut().zip(sigma) {
                *v = sig * box_muller(&mut rng);
            }
            Particle::new(s[0], s[1], s[2], s[3])
        })
        .collect()
}

/// Gaussian sample via the Box-Muller transform.
fn box_muller(rng: &mut ChaCha8Rng) -> f64 {
    let u1: f64 = rng.random::<f64>().max(1e-300);
    let u2: f64 = rng.random();
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
}

/// Horizontal transfer matrix of a sector bend with `k0 == h`.
///
/// The linear horizontal motion is a rotation with frequency `h`:
/// `[[cos hL, sin hL / h], [-h sin hL, cos hL]]`.
pub fn sector_bend_matrix(h: f64, length: f64) -> [[f64; 2]; 2] {
    let (s, c) = (h * length).sin_cos();
    [[c, s / h], [-h * s, c]]
}

/// Apply a 2×2 matrix to `(x, px)`.
pub fn apply2(m: [[f64; 2]; 2], x: f64, px: f64) -> (f64, f64) {
    (m[0][0] * x + m[0][1] * px, m[1][0] * x + m[1][1] * px)
}

/// Central-difference Jacobian of `map` at `point`.
///
/// Column `j` is the derivative with respect to coordinate `j`.
pub fn jacobian<F>(map: F, point: State4, eps: f64) -> Matrix4
where
    F: Fn(State4) -> State4,
{
    let mut jac = [[0.0; 4]; 4];
    for j in 0..4 {
        let mut plus = point;
        let mut minus = point;
        plus[j] += eps;
        minus[j] -= eps;
        let fp = map(plus);
        let fm = map(minus);
        for i in 0..4 {
            jac[i][j] = (fp[i] - fm[i]) / (2.0 * eps);
        }
    }
    jac
}

/// Largest entry of `Jᵀ·Ω·J − Ω` for the canonical symplectic form Ω on
/// `[x, px, y, py]`. Zero for an exactly symplectic linearisation.
pub fn symplectic_defect(jac: &Matrix4) -> f64 {
    let omega = |i: usize, j: usize| -> f64 {
        match (i, j) {
            (0, 1) | (2, 3) => 1.0,
            (1, 0) | (3, 2) => -1.0,
            _ => 0.0,
        }
    };
    let mut worst: f64 = 0.0;
    for a in 0..4 {
        for b in 0..4 {
            let mut acc = 0.0;
            for i in 0..4 {
                for j in 0..4 {
                    acc += jac[i][a] * omega(i, j) * jac[j][b];
                }
            }
            worst = worst.max((acc - omega(a, b)).abs());
        }
    }
    worst
}

/// Largest relative deviation between two states, with `floor` guarding
/// coordinates that are (near) zero.
pub fn max_relative_deviation(a: State4, b: State4, floor: f64) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).abs() / y.abs().max(floor))
        .fold(0.0, f64::max)
}
