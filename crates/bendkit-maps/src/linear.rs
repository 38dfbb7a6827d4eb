//! Exact flow of a one-dimensional quadratic Hamiltonian.
//!
//! Every reference drift reduces, plane by plane, to
//!
//! ```text
//! H = p² / (2m) + a·x + ½·b·x²
//! ```
//!
//! whose flow over a length `s` is linear in `(x, p)` and is written here in
//! terms of the principal trajectories `C`, `S` and the inhomogeneous
//! response `D = ∫₀ˢ S`.

/// Below this value of `|K·s²|` the principal trajectories are evaluated
/// from their power series instead of trigonometric/hyperbolic functions.
const SERIES_THRESHOLD: f64 = 1e-2;

/// Number of series terms after the leading one; with the threshold above
/// the truncation error is far below one ulp.
const SERIES_TERMS: usize = 8;

/// One transverse plane of a quadratic Hamiltonian.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearPlane {
    /// Effective mass `m = 1 + delta`.
    mass: f64,
    /// Constant force term `a`.
    force: f64,
    /// Gradient term `b`.
    gradient: f64,
}

impl LinearPlane {
    /// Plane with mass `m`, constant force `a` and gradient `b`.
    pub fn new(mass: f64, force: f64, gradient: f64) -> Self {
        Self {
            mass,
            force,
            gradient,
        }
    }

    /// A field-free plane.
    pub fn free(mass: f64) -> Self {
        Self::new(mass, 0.0, 0.0)
    }

    /// Focusing strength `K = b / m` of `x'' = -K·x - a/m`.
    pub fn focusing(&self) -> f64 {
        self.gradient / self.mass
    }

    /// Advance `(x, p)` over `s`.
    ///
    /// `s` may be negative; `advance(advance(x, p, s), -s)` returns to the
    /// starting point.
    pub fn advance(&self, x: f64, p: f64, s: f64) -> (f64, f64) {
        let k = self.focusing();
        let (c, sn, d) = principal(k, s);
        let xp = p / self.mass;
        let f = self.force / self.mass;

        let x_new = x * c + xp * sn - f * d;
        let xp_new = -k * x * sn + xp * c - f * sn;
        (x_new, xp_new * self.mass)
    }
}

/// Principal trajectories `(C, S, D)` of `x'' = -K·x` over `s`.
///
/// `C(0) = 1, C'(0) = 0`; `S(0) = 0, S'(0) = 1`; `D = (1 - C) / K`, which
/// tends to `s²/2` as `K → 0`.
pub fn principal(k: f64, s: f64) -> (f64, f64, f64) {
    let u = k * s * s;
    if u.abs() < SERIES_THRESHOLD {
        return principal_series(u, s);
    }
    if k > 0.0 {
        let w = k.sqrt();
        let (sin, cos) = (w * s).sin_cos();
        (cos, sin / w, (1.0 - cos) / k)
    } else {
        let w = (-k).sqrt();
        let cosh = (w * s).cosh();
        (cosh, (w * s).sinh() / w, (1.0 - cosh) / k)
    }
}

fn principal_series(u: f64, s: f64) -> (f64, f64, f64) {
    let mut tc = 1.0;
    let mut ts = s;
    let mut td = 0.5 * s * s;
    let (mut c, mut sn, mut d) = (tc, ts, td);
    for n in 1..=SERIES_TERMS {
        let n = n as f64;
        tc *= -u / ((2.0 * n - 1.0) * (2.0 * n));
        ts *= -u / ((2.0 * n) * (2.0 * n + 1.0));
        td *= -u / ((2.0 * n + 1.0) * (2.0 * n + 2.0));
        c += tc;
        sn += ts;
        d += td;
    }
    (c, sn, d)
}
