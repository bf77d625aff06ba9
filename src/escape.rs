// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time evaluator.

use crate::planes::ComplexPoint;
use num::Complex;

/// Once the orbit leaves this radius it is guaranteed to diverge.
pub const ESCAPE_RADIUS: f64 = 2.0;

/// The outcome of iterating a single point.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Escape {
    /// How many times `z² + c` was applied, in `1..=max_iteration`.
    pub iterations: usize,
    /// True when the orbit never left the escape radius.
    pub member: bool,
}

/// This is our classic iterator function.  Starting from zero, apply
/// `z² + c` until the modulus of `z` exceeds two or the iteration
/// bound is reached.  A point that survives the whole bound is
/// classified as a member; membership is never proven, only that no
/// escape happened within the bound.
pub fn evaluate(c: ComplexPoint, max_iteration: usize) -> Escape {
    debug_assert!(
        c.re.is_finite() && c.im.is_finite(),
        "cannot evaluate non-finite point {}",
        c
    );
    debug_assert!(max_iteration >= 1, "the iteration bound must be positive");

    let mut z = Complex::new(0.0_f64, 0.0_f64);
    let mut iterations = 0;
    let mut modulus;
    loop {
        z = z * z + c;
        modulus = z.norm_sqr().sqrt();
        iterations += 1;
        if modulus > ESCAPE_RADIUS || iterations >= max_iteration {
            break;
        }
    }

    Escape {
        iterations,
        member: modulus <= ESCAPE_RADIUS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_never_escapes() {
        for &max in &[1, 2, 80, 1000] {
            assert_eq!(
                evaluate(Complex::new(0.0, 0.0), max),
                Escape {
                    iterations: max,
                    member: true
                }
            );
        }
    }

    #[test]
    fn far_points_escape_on_the_first_step() {
        let far = [
            Complex::new(-2.0, -1.0),
            Complex::new(2.5, 0.0),
            Complex::new(0.0, -2.01),
            Complex::new(100.0, 100.0),
        ];
        for &c in &far {
            let escape = evaluate(c, 80);
            assert_eq!(escape.iterations, 1, "{} should escape at once", c);
            assert!(!escape.member);
        }
    }

    #[test]
    fn iteration_count_stays_within_bounds() {
        for step in 0..60_u32 {
            let c = Complex::new(-2.2 + 0.05 * f64::from(step), 0.3 - 0.01 * f64::from(step));
            for &max in &[1, 5, 80] {
                let escape = evaluate(c, max);
                assert!(escape.iterations >= 1 && escape.iterations <= max);
                if escape.iterations < max {
                    assert!(!escape.member);
                }
            }
        }
    }

    #[test]
    fn known_members_and_non_members() {
        // -1 cycles between -1 and 0.
        assert!(evaluate(Complex::new(-1.0, 0.0), 80).member);
        // The main cardioid's cusp.
        assert!(evaluate(Complex::new(0.25, 0.0), 80).member);
        let outside = evaluate(Complex::new(0.5, 0.5), 80);
        assert!(!outside.member);
        assert!(outside.iterations > 1 && outside.iterations < 80);
    }

    #[test]
    fn boundary_of_the_radius_counts_as_inside() {
        // z after one step is c itself, with a modulus of exactly two.
        let escape = evaluate(Complex::new(-2.0, 0.0), 80);
        assert!(escape.member);
        assert_eq!(escape.iterations, 80);
    }
}
