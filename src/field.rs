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

//! Field arithmetic modulo \\(p = 2\^{448} - 2\^{224} - 1\\).
//!
//! The `curve448_dalek::field` module provides a type alias
//! `curve448_dalek::field::FieldElement` to the backend-specific limb
//! representation, together with the inversion and inverse-square-root
//! routines that are independent of the limb schedule.

#![allow(unused_qualifications)]

use subtle::Choice;
use subtle::ConstantTimeEq;

/// A `FieldElement` represents an element of the field \\( \mathbb Z /
/// (2\^{448} - 2\^{224} - 1)\\).
///
/// The `FieldElement` type is an alias for the backend implementation.
pub(crate) type FieldElement = crate::backend::serial::u64::field::FieldElement56;

impl FieldElement {
    /// Determine if this `FieldElement` is negative, in the sense
    /// used by the decaf448 encoding: an element is negative exactly when
    /// the low bit of \\(2x \bmod p\\) is set (equivalently, when its
    /// canonical representative exceeds \\((p-1)/2\\)).
    pub(crate) fn is_negative(&self) -> Choice {
        let two_x = self + self;
        Choice::from(two_x.as_bytes()[0] & 1)
    }

    /// Determine if this `FieldElement` is zero.
    pub(crate) fn is_zero(&self) -> Choice {
        self.ct_eq(&FieldElement::ZERO)
    }

    /// Raise this field element to the power \\((p-3)/4 = 2\^{446} -
    /// 2\^{222} - 1\\).
    ///
    /// The chain is the classic Goldilocks ladder: build repunits
    /// \\(2\^k - 1\\) for \\(k = 3, 6, 9, 18, 19, 37, 74, 111, 222,
    /// 223\\), then shift the \\(2\^{223}-1\\) repunit up by 223 and glue
    /// the \\(2\^{222}-1\\) repunit underneath.  The 223-squaring tail
    /// dominates the cost.
    fn pow_p_minus_3_over_4(&self) -> FieldElement {
        let mut c = self.square();
        let b = self * &c;
        c = b.pow2k(1);
        let b = self * &c;
        c = b.pow2k(3);
        let a = &b * &c; // 2^6 - 1
        c = a.pow2k(3);
        let a = &b * &c; // 2^9 - 1
        c = a.pow2k(9);
        let b = &a * &c; // 2^18 - 1
        c = b.pow2k(1);
        let a = self * &c; // 2^19 - 1
        c = a.pow2k(18);
        let a = &b * &c; // 2^37 - 1
        c = a.pow2k(37);
        let b = &a * &c; // 2^74 - 1
        c = b.pow2k(37);
        let b = &a * &c; // 2^111 - 1
        c = b.pow2k(111);
        let a = &b * &c; // 2^222 - 1
        c = a.pow2k(1);
        let b = self * &c; // 2^223 - 1
        c = b.pow2k(223);
        &a * &c
    }

    /// Compute the inverse square root of this field element.
    ///
    /// Returns a pair `(was_square, r)` with \\(r = x^{(p-3)/4}\\), so
    /// that
    ///
    /// - if \\(x\\) is a nonzero square, `was_square` is set and
    ///   \\(r = 1/\sqrt x\\) (for one of the two square roots);
    /// - if \\(x\\) is nonsquare, `was_square` is unset and
    ///   \\(r\^2 x = -1\\);
    /// - if \\(x = 0\\), `was_square` is unset and \\(r = 0\\).
    ///
    /// The return value is deterministic; callers inspect \\(r\^2 x\\)
    /// (or the flag) to learn the Legendre symbol.
    pub(crate) fn invsqrt(&self) -> (Choice, FieldElement) {
        let r = self.pow_p_minus_3_over_4();
        let check = &r.square() * self;
        (check.ct_eq(&FieldElement::ONE), r)
    }

    /// Compute the multiplicative inverse of this field element, or zero
    /// for zero input.
    ///
    /// Since \\(p \equiv 3 \pmod 4\\), \\(x^{-1} = (x^{(p-3)/4})\^4 \cdot
    /// x\\); this reuses the inverse-square-root chain.
    pub(crate) fn invert(&self) -> FieldElement {
        let t = self.pow_p_minus_3_over_4();
        let t = t.square();
        let t = t.square();
        &t * self
    }

    /// Invert a batch of field elements into `out`, with a single field
    /// inversion and \\(3(n-1)\\) multiplications (Montgomery's trick).
    ///
    /// Zero inputs are not permitted; the table builder only feeds this
    /// the (always nonzero) \\(Z\\) coordinates of valid points.
    pub(crate) fn batch_invert(inputs: &[FieldElement], out: &mut [FieldElement]) {
        let n = inputs.len();
        debug_assert!(n > 1);
        debug_assert_eq!(out.len(), n);

        // out[i] accumulates the product of inputs[..i]; out[0] doubles as
        // the running-inverse workspace on the way back down.
        out[1] = inputs[0];
        for i in 1..n - 1 {
            out[i + 1] = &out[i] * &inputs[i];
        }
        out[0] = &out[n - 1] * &inputs[n - 1];

        out[0] = out[0].invert();

        for i in (1..n).rev() {
            let t = &out[i] * &out[0];
            out[0] = &out[0] * &inputs[i];
            out[i] = t;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    // 5 is a quadratic residue mod p (p = 4 mod 5, and (4/5) = 1).
    const FIVE: FieldElement = FieldElement::from_u64(5);

    fn test_elements() -> impl Iterator<Item = FieldElement> {
        let mut state = 0x853c_49e6_748f_ea9bu64;
        core::iter::repeat_with(move || {
            let mut bytes = [0u8; 56];
            for b in bytes.iter_mut() {
                state ^= state << 13;
                state ^= state >> 7;
                state ^= state << 17;
                *b = state as u8;
            }
            bytes[55] &= 0x3f;
            FieldElement::from_bytes(&bytes).0
        })
        .take(32)
    }

    #[test]
    fn invsqrt_legendre() {
        for x in test_elements() {
            let xx = x.square();
            let (was_square, r) = xx.invsqrt();
            assert!(bool::from(was_square) || bool::from(xx.is_zero()));
            // r^2 * x^2 == 1
            let check = &r.square() * &xx;
            assert_eq!(check.as_bytes(), FieldElement::ONE.as_bytes());

            // -x^2 is a nonsquare (p = 3 mod 4), so invsqrt reports it.
            let minus_xx = -&xx;
            let (was_square, r) = minus_xx.invsqrt();
            if !bool::from(xx.is_zero()) {
                assert!(!bool::from(was_square));
                let check = &r.square() * &minus_xx;
                assert_eq!(check.as_bytes(), (-&FieldElement::ONE).as_bytes());
            }
        }
    }

    #[test]
    fn invsqrt_zero_is_zero() {
        let (was_square, r) = FieldElement::ZERO.invsqrt();
        assert!(!bool::from(was_square));
        assert_eq!(r.as_bytes(), FieldElement::ZERO.as_bytes());
        assert_eq!(
            FieldElement::ZERO.invert().as_bytes(),
            FieldElement::ZERO.as_bytes()
        );
    }

    #[test]
    fn invert_round_trips() {
        for x in test_elements() {
            if bool::from(x.is_zero()) {
                continue;
            }
            let xinv = x.invert();
            let one = &x * &xinv;
            assert_eq!(one.as_bytes(), FieldElement::ONE.as_bytes());
        }
    }

    #[test]
    fn batch_invert_matches_invert() {
        let inputs: Vec<FieldElement> = test_elements()
            .filter(|x| !bool::from(x.is_zero()))
            .collect();
        let mut batch = vec![FieldElement::ZERO; inputs.len()];
        FieldElement::batch_invert(&inputs, &mut batch);
        for (x, xi) in inputs.iter().zip(batch.iter()) {
            assert_eq!(xi.as_bytes(), x.invert().as_bytes());
        }
    }

    #[test]
    fn five_is_square() {
        let (was_square, _) = FIVE.invsqrt();
        assert!(bool::from(was_square));
    }

    #[test]
    fn sign_convention() {
        // 1 is non-negative, -1 is negative.
        assert!(!bool::from(FieldElement::ONE.is_negative()));
        assert!(bool::from((-&FieldElement::ONE).is_negative()));
    }
}
