// -*- mode: rust; -*-
//
// This file is part of curve448-dalek.
// Copyright (c) 2016-2021 isis lovecruft
// Copyright (c) 2016-2020 Henry de Valence
// See LICENSE for licensing information.
//
// Authors:
// - isis agora lovecruft <isis@patternsinthevoid.net>
// - Henry de Valence <hdevalence@hdevalence.ca>

//! Group operations for the twisted Edwards form of Curve448
//! ("Ed448-Goldilocks"), in extended homogeneous coordinates.
//!
//! This module is crate-internal: the only public group type is
//! [`crate::decaf::DecafPoint`], the prime-order quotient.  Two things
//! force that split.  First, the only stable wire format is the decaf
//! encoding, so there is nothing useful a caller could do with a raw
//! curve point.  Second, the unified addition formulas used here (from
//! the decaf reference implementation, with the \\(2 - 2d\\) constant)
//! are complete *on the quotient*: they may return a representative that
//! differs from the true Edwards sum by a 2-torsion component.  Inside
//! the quotient group that difference is invisible — equality,
//! encoding, and every scalar ladder in this crate identify torsion
//! components — but it makes the raw point unsuitable as a public
//! curve-arithmetic API.
//!
//! Consequently, `ConstantTimeEq` on `EdwardsPoint` is already the
//! quotient equality \\(X_1 Y_2 = X_2 Y_1 \lor X_1 X_2 + Y_1 Y_2 = 0\\)
//! (the disjunct absorbs the 2-torsion identification).

#![allow(non_snake_case)]

use core::borrow::Borrow;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::backend;
use crate::backend::serial::curve_models::{NielsPoint, ProjectiveNielsPoint};
use crate::constants;
use crate::field::FieldElement;
use crate::scalar::Scalar;
use crate::traits::Identity;
use crate::traits::ValidityCheck;

/// An `EdwardsPoint` represents a point on the Ed448-Goldilocks curve
/// in extended homogeneous coordinates.
#[derive(Copy, Clone)]
pub(crate) struct EdwardsPoint {
    pub(crate) X: FieldElement,
    pub(crate) Y: FieldElement,
    pub(crate) Z: FieldElement,
    pub(crate) T: FieldElement,
}

// ------------------------------------------------------------------------
// Constructors
// ------------------------------------------------------------------------

impl Identity for EdwardsPoint {
    fn identity() -> EdwardsPoint {
        EdwardsPoint {
            X: FieldElement::ZERO,
            Y: FieldElement::ONE,
            Z: FieldElement::ONE,
            T: FieldElement::ZERO,
        }
    }
}

impl Default for EdwardsPoint {
    fn default() -> EdwardsPoint {
        EdwardsPoint::identity()
    }
}

impl core::fmt::Debug for EdwardsPoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "EdwardsPoint{{\n\tX: {:?},\n\tY: {:?},\n\tZ: {:?},\n\tT: {:?}\n}}",
            &self.X, &self.Y, &self.Z, &self.T
        )
    }
}

// ------------------------------------------------------------------------
// Zeroize implementations for wiping points from memory
// ------------------------------------------------------------------------

#[cfg(feature = "zeroize")]
impl Zeroize for EdwardsPoint {
    /// Reset this `EdwardsPoint` to the identity element.
    fn zeroize(&mut self) {
        self.X.zeroize();
        self.T.zeroize();
        self.Y = FieldElement::ONE;
        self.Z = FieldElement::ONE;
    }
}

// ------------------------------------------------------------------------
// Validity checks (for debugging, not CT)
// ------------------------------------------------------------------------

impl ValidityCheck for EdwardsPoint {
    fn is_valid(&self) -> bool {
        // The extended invariant XY = ZT, and the (torsion-folded) curve
        // equation Y^2 - X^2 = Z^2 - (1 - d) T^2, with Z != 0.
        let xy = &self.X * &self.Y;
        let zt = &self.Z * &self.T;
        let segre: bool = xy.ct_eq(&zt).into();

        let yy_minus_xx = &self.Y.square() - &self.X.square();
        let rhs = &self.Z.square() - &self.T.square().mul_word(constants::ONE_MINUS_D);
        let on_curve: bool = yy_minus_xx.ct_eq(&rhs).into();

        let z_nonzero: bool = (!self.Z.is_zero()).into();

        segre && on_curve && z_nonzero
    }
}

// ------------------------------------------------------------------------
// Constant-time assignment and equality
// ------------------------------------------------------------------------

impl ConditionallySelectable for EdwardsPoint {
    fn conditional_select(a: &EdwardsPoint, b: &EdwardsPoint, choice: Choice) -> EdwardsPoint {
        EdwardsPoint {
            X: FieldElement::conditional_select(&a.X, &b.X, choice),
            Y: FieldElement::conditional_select(&a.Y, &b.Y, choice),
            Z: FieldElement::conditional_select(&a.Z, &b.Z, choice),
            T: FieldElement::conditional_select(&a.T, &b.T, choice),
        }
    }
}

impl ConstantTimeEq for EdwardsPoint {
    /// Equality in the prime-order quotient: representatives that differ
    /// by a 2-torsion component compare equal.
    fn ct_eq(&self, other: &EdwardsPoint) -> Choice {
        let X1Y2 = &self.X * &other.Y;
        let Y1X2 = &self.Y * &other.X;
        let X1X2 = &self.X * &other.X;
        let Y1Y2 = &self.Y * &other.Y;

        X1Y2.ct_eq(&Y1X2) | (&X1X2 + &Y1Y2).is_zero()
    }
}

impl PartialEq for EdwardsPoint {
    fn eq(&self, other: &EdwardsPoint) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for EdwardsPoint {}

// ------------------------------------------------------------------------
// Point conversions
// ------------------------------------------------------------------------

impl EdwardsPoint {
    /// Convert to a ProjectiveNielsPoint.
    pub(crate) fn as_projective_niels(&self) -> ProjectiveNielsPoint {
        ProjectiveNielsPoint::from(self)
    }
}

// ------------------------------------------------------------------------
// Doubling
// ------------------------------------------------------------------------

impl EdwardsPoint {
    /// Add this point to itself: 4 squarings, 4 multiplications.
    pub(crate) fn double(&self) -> EdwardsPoint {
        let XX = self.X.square();
        let YY = self.Y.square();
        let D = &XX + &YY;

        let B = (&self.Y + &self.X).square();
        let E = &B - &D; // 2XY
        let H = &YY - &XX;

        let ZZ = self.Z.square();
        let G = &(&ZZ + &ZZ) - &H; // 2Z^2 - (Y^2 - X^2)

        EdwardsPoint {
            X: &G * &E,
            Y: &H * &D,
            Z: &H * &G,
            T: &E * &D,
        }
    }
}

// ------------------------------------------------------------------------
// Addition and Subtraction
// ------------------------------------------------------------------------

// The unified formulas, in the shape used by the mixed (Niels) additions:
// with A = (Y1-X1)(Y2-X2), B = (Y1+X1)(Y2+X2), C = (2-2d) T1 T2,
// D = 2 Z1 Z2, E = B - A, H = B + A, F = D - C, G = D + C, the sum is
// (X3:Y3:Z3:T3) = (G*E : F*H : F*G : H*E).  Complete on the quotient.

impl<'a> Add<&'a ProjectiveNielsPoint> for &EdwardsPoint {
    type Output = EdwardsPoint;

    fn add(self, other: &'a ProjectiveNielsPoint) -> EdwardsPoint {
        let Y_plus_X = &self.Y + &self.X;
        let Y_minus_X = &self.Y - &self.X;
        let A = &other.Y_minus_X * &Y_minus_X;
        let B = &other.Y_plus_X * &Y_plus_X;
        let C = &other.Td * &self.T;
        let D = &other.Z2 * &self.Z;
        let E = &B - &A;
        let H = &B + &A;
        let F = &D - &C;
        let G = &D + &C;

        EdwardsPoint {
            X: &G * &E,
            Y: &F * &H,
            Z: &F * &G,
            T: &H * &E,
        }
    }
}

impl<'a> Sub<&'a ProjectiveNielsPoint> for &EdwardsPoint {
    type Output = EdwardsPoint;

    fn sub(self, other: &'a ProjectiveNielsPoint) -> EdwardsPoint {
        // Adding the negation: the sum/difference entries trade places
        // and the T entry flips sign, which swaps the roles of F and G.
        let Y_plus_X = &self.Y + &self.X;
        let Y_minus_X = &self.Y - &self.X;
        let A = &other.Y_plus_X * &Y_minus_X;
        let B = &other.Y_minus_X * &Y_plus_X;
        let C = &other.Td * &self.T;
        let D = &other.Z2 * &self.Z;
        let E = &B - &A;
        let H = &B + &A;
        let F = &D + &C;
        let G = &D - &C;

        EdwardsPoint {
            X: &G * &E,
            Y: &F * &H,
            Z: &F * &G,
            T: &H * &E,
        }
    }
}

impl<'a> Add<&'a NielsPoint> for &EdwardsPoint {
    type Output = EdwardsPoint;

    fn add(self, other: &'a NielsPoint) -> EdwardsPoint {
        let Y_plus_X = &self.Y + &self.X;
        let Y_minus_X = &self.Y - &self.X;
        let A = &other.y_minus_x * &Y_minus_X;
        let B = &other.y_plus_x * &Y_plus_X;
        let C = &other.td * &self.T;
        let E = &B - &A;
        let H = &B + &A;
        let F = &self.Z - &C;
        let G = &self.Z + &C;

        EdwardsPoint {
            X: &G * &E,
            Y: &F * &H,
            Z: &F * &G,
            T: &H * &E,
        }
    }
}

impl<'a> Sub<&'a NielsPoint> for &EdwardsPoint {
    type Output = EdwardsPoint;

    fn sub(self, other: &'a NielsPoint) -> EdwardsPoint {
        let Y_plus_X = &self.Y + &self.X;
        let Y_minus_X = &self.Y - &self.X;
        let A = &other.y_plus_x * &Y_minus_X;
        let B = &other.y_minus_x * &Y_plus_X;
        let C = &other.td * &self.T;
        let E = &B - &A;
        let H = &B + &A;
        let F = &self.Z + &C;
        let G = &self.Z - &C;

        EdwardsPoint {
            X: &G * &E,
            Y: &F * &H,
            Z: &F * &G,
            T: &H * &E,
        }
    }
}

impl<'a> Add<&'a EdwardsPoint> for &EdwardsPoint {
    type Output = EdwardsPoint;

    fn add(self, other: &'a EdwardsPoint) -> EdwardsPoint {
        self + &other.as_projective_niels()
    }
}

impl<'a> AddAssign<&'a EdwardsPoint> for EdwardsPoint {
    fn add_assign(&mut self, _rhs: &'a EdwardsPoint) {
        *self = (self as &EdwardsPoint) + _rhs;
    }
}

impl<'a> Sub<&'a EdwardsPoint> for &EdwardsPoint {
    type Output = EdwardsPoint;

    fn sub(self, other: &'a EdwardsPoint) -> EdwardsPoint {
        self - &other.as_projective_niels()
    }
}

impl<'a> SubAssign<&'a EdwardsPoint> for EdwardsPoint {
    fn sub_assign(&mut self, _rhs: &'a EdwardsPoint) {
        *self = (self as &EdwardsPoint) - _rhs;
    }
}

impl<T> Sum<T> for EdwardsPoint
where
    T: Borrow<EdwardsPoint>,
{
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        iter.fold(EdwardsPoint::identity(), |acc, item| &acc + item.borrow())
    }
}

// ------------------------------------------------------------------------
// Negation
// ------------------------------------------------------------------------

impl Neg for &EdwardsPoint {
    type Output = EdwardsPoint;

    fn neg(self) -> EdwardsPoint {
        EdwardsPoint {
            X: -(&self.X),
            Y: self.Y,
            Z: self.Z,
            T: -(&self.T),
        }
    }
}

impl Neg for EdwardsPoint {
    type Output = EdwardsPoint;

    fn neg(self) -> EdwardsPoint {
        -&self
    }
}

// ------------------------------------------------------------------------
// Scalar multiplication
// ------------------------------------------------------------------------

impl<'a> MulAssign<&'a Scalar> for EdwardsPoint {
    fn mul_assign(&mut self, scalar: &'a Scalar) {
        let result = (self as &EdwardsPoint) * scalar;
        *self = result;
    }
}

impl<'a> Mul<&'a Scalar> for &EdwardsPoint {
    type Output = EdwardsPoint;

    /// Scalar multiplication: compute `scalar * self`, in constant time.
    fn mul(self, scalar: &'a Scalar) -> EdwardsPoint {
        backend::variable_base_mul(self, scalar)
    }
}

impl<'a> Mul<&'a EdwardsPoint> for &Scalar {
    type Output = EdwardsPoint;

    fn mul(self, point: &'a EdwardsPoint) -> EdwardsPoint {
        point * self
    }
}

impl EdwardsPoint {
    /// Fixed-base scalar multiplication by the basepoint.
    pub(crate) fn mul_base(scalar: &Scalar) -> Self {
        #[cfg(feature = "precomputed-tables")]
        {
            crate::backend::serial::scalar_mul::precomputed::basepoint_comb_mul(scalar)
        }
        #[cfg(not(feature = "precomputed-tables"))]
        {
            scalar * &constants::ED448_BASEPOINT_POINT
        }
    }

    /// Compute \\(aA + bB\\) in variable time, where \\(B\\) is the
    /// basepoint.
    pub(crate) fn vartime_double_scalar_mul_basepoint(
        a: &Scalar,
        A: &EdwardsPoint,
        b: &Scalar,
    ) -> EdwardsPoint {
        backend::vartime_double_base_mul(a, A, b)
    }
}

// ------------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::scalar::test::deterministic_scalars;

    pub(crate) fn deterministic_points() -> impl Iterator<Item = EdwardsPoint> {
        // Random group elements via random scalars against the basepoint;
        // slower than hashing to the curve but dependency-free.
        deterministic_scalars().map(|s| &s * &constants::ED448_BASEPOINT_POINT)
    }

    /// A reference ladder: plain double-and-add over the scalar bits.
    pub(crate) fn slow_scalar_mul(p: &EdwardsPoint, s: &Scalar) -> EdwardsPoint {
        let mut acc = EdwardsPoint::identity();
        for i in (0..446).rev() {
            acc = acc.double();
            if s.0.bit(i) == 1 {
                acc = &acc + p;
            }
        }
        acc
    }

    #[test]
    fn basepoint_is_valid() {
        assert!(constants::ED448_BASEPOINT_POINT.is_valid());
        assert!(EdwardsPoint::identity().is_valid());
    }

    #[test]
    fn group_laws() {
        let pts: Vec<EdwardsPoint> = deterministic_points().take(9).collect();
        for w in pts.chunks(3) {
            let (p, q, r) = (w[0], w[1], w[2]);
            assert!(p.is_valid() && q.is_valid() && r.is_valid());

            // commutativity and associativity
            assert_eq!(&p + &q, &q + &p);
            assert_eq!(&(&p + &q) + &r, &p + &(&q + &r));

            // identity and inverses
            assert_eq!(&p + &EdwardsPoint::identity(), p);
            assert_eq!(&p + &(-&p), EdwardsPoint::identity());

            // subtraction is addition of the negation
            assert_eq!(&p - &q, &p + &(-&q));

            // doubling agrees with addition
            assert_eq!(p.double(), &p + &p);
        }
    }

    #[test]
    fn torsion_components_compare_equal() {
        for p in deterministic_points().take(4) {
            let torqued = EdwardsPoint {
                X: -&p.X,
                Y: -&p.Y,
                Z: p.Z,
                T: p.T,
            };
            assert!(torqued.is_valid());
            assert_eq!(p, torqued);
        }
    }

    #[test]
    fn niels_forms_agree_with_extended() {
        let pts: Vec<EdwardsPoint> = deterministic_points().take(4).collect();
        let (p, q) = (pts[0], pts[1]);

        let q_niels = q.as_projective_niels();
        assert_eq!(&p + &q_niels, &p + &q);
        assert_eq!(&p - &q_niels, &p - &q);
        assert_eq!(q_niels.as_extended(), q);
    }

    #[test]
    fn scalar_mul_matches_slow_reference() {
        let p = deterministic_points().next().unwrap();
        for s in deterministic_scalars().take(4) {
            assert_eq!(&p * &s, slow_scalar_mul(&p, &s));
        }
    }

    #[test]
    fn scalar_mul_distributes_over_scalar_add() {
        let p = deterministic_points().next().unwrap();
        let scalars: Vec<Scalar> = deterministic_scalars().take(4).collect();
        for w in scalars.chunks(2) {
            let (s1, s2) = (w[0], w[1]);
            let lhs = &p * &(s1 + s2);
            let rhs = &(&p * &s1) + &(&p * &s2);
            assert_eq!(lhs, rhs);
        }
    }

    #[test]
    fn small_scalar_cases() {
        let b = constants::ED448_BASEPOINT_POINT;
        assert_eq!(&b * &Scalar::ZERO, EdwardsPoint::identity());
        assert_eq!(&b * &Scalar::ONE, b);
        assert_eq!(&b * &Scalar::from(2u8), b.double());
    }

    #[test]
    fn vartime_double_base_matches_sequential() {
        let b = constants::ED448_BASEPOINT_POINT;
        let p = deterministic_points().nth(3).unwrap();
        for w in deterministic_scalars().take(8).collect::<Vec<_>>().chunks(2) {
            let (s1, s2) = (w[0], w[1]);
            let fast = EdwardsPoint::vartime_double_scalar_mul_basepoint(&s1, &p, &s2);
            let slow = &(&b * &s1) + &(&p * &s2);
            assert_eq!(fast, slow);
        }

        // degenerate cases
        let id = EdwardsPoint::identity();
        assert_eq!(
            EdwardsPoint::vartime_double_scalar_mul_basepoint(&Scalar::ZERO, &p, &Scalar::ZERO),
            id
        );
        assert_eq!(
            EdwardsPoint::vartime_double_scalar_mul_basepoint(&Scalar::ONE, &p, &Scalar::ZERO),
            b
        );
        assert_eq!(
            EdwardsPoint::vartime_double_scalar_mul_basepoint(&Scalar::ZERO, &p, &Scalar::ONE),
            p
        );
    }

    #[test]
    fn mul_base_matches_variable_base() {
        for s in deterministic_scalars().take(6) {
            let fixed = EdwardsPoint::mul_base(&s);
            let variable = &s * &constants::ED448_BASEPOINT_POINT;
            assert_eq!(fixed, variable);
        }
    }
}
