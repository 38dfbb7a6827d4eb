//! Generic thin multipole kick.

use bendkit_core::{Multipoles, PhaseSpace};
use num_complex::Complex64;

/// Apply the kick of an arbitrary-order thin multipole.
///
/// Evaluates, with Horner's scheme,
///
/// ```text
/// F(z) = Σₙ (knl[n] + i·ksl[n]) · zⁿ / n!,   z = x + i·y
/// ```
///
/// and applies `Δpx = -weight·Re F`, `Δpy = +weight·Im F`. A negative
/// weight applies the inverse kick.
pub fn taylor_multipole_kick(particle: &mut dyn PhaseSpace, multipoles: &Multipoles, weight: f64) {
    let z = Complex64::new(particle.x(), particle.y());
    let knl = multipoles.knl();
    let ksl = multipoles.ksl();
    let inv_factorial = multipoles.inv_factorial();

    let mut field = Complex64::new(0.0, 0.0);
    for n in (0..=multipoles.order()).rev() {
        field = field * z + Complex64::new(knl[n], ksl[n]) * inv_factorial[n];
    }

    particle.add_to_px(-weight * field.re);
    particle.add_to_py(weight * field.im);
}
