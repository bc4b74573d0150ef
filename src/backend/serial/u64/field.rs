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

//! Field arithmetic modulo \\(p = 2\^{448} - 2\^{224} - 1\\), using \\(64\\)-bit
//! limbs with \\(128\\)-bit products.

use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// A `FieldElement56` represents an element of the field
/// \\( \mathbb Z / (2\^{448} - 2\^{224} - 1)\\).
///
/// In the 64-bit implementation, a `FieldElement` is represented in
/// radix \\(2\^{56}\\) as eight `u64`s; the coefficients are allowed to
/// grow up to \\(2\^{56} + \varepsilon \\) between reductions.
///
/// The backend-specific type `FieldElement56` should not be used
/// externally, but all operations are implemented on it and re-exposed by
/// the `field::FieldElement` alias.
#[derive(Copy, Clone)]
pub struct FieldElement56(pub(crate) [u64; 8]);

pub(crate) const LOW_56_BITS: u64 = (1u64 << 56) - 1;

/// The limbs of \\(p\\): every limb is `2^56 - 1` except limb 4, which is
/// `2^56 - 2` (since \\(p = 2\^{448} - 2\^{224} - 1\\)).
const P_LIMBS: [u64; 8] = [
    LOW_56_BITS,
    LOW_56_BITS,
    LOW_56_BITS,
    LOW_56_BITS,
    LOW_56_BITS - 1,
    LOW_56_BITS,
    LOW_56_BITS,
    LOW_56_BITS,
];

impl core::fmt::Debug for FieldElement56 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "FieldElement56({:?})", &self.0[..])
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for FieldElement56 {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl ConstantTimeEq for FieldElement56 {
    fn ct_eq(&self, other: &FieldElement56) -> Choice {
        self.as_bytes().ct_eq(&other.as_bytes())
    }
}

impl ConditionallySelectable for FieldElement56 {
    fn conditional_select(
        a: &FieldElement56,
        b: &FieldElement56,
        choice: Choice,
    ) -> FieldElement56 {
        let mut limbs = [0u64; 8];
        for (l, (x, y)) in limbs.iter_mut().zip(a.0.iter().zip(b.0.iter())) {
            *l = u64::conditional_select(x, y, choice);
        }
        FieldElement56(limbs)
    }

    fn conditional_assign(&mut self, other: &FieldElement56, choice: Choice) {
        for (l, x) in self.0.iter_mut().zip(other.0.iter()) {
            l.conditional_assign(x, choice);
        }
    }
}

#[inline(always)]
fn m(x: u64, y: u64) -> i128 {
    (x as u128 * y as u128) as i128
}

impl<'a> AddAssign<&'a FieldElement56> for FieldElement56 {
    fn add_assign(&mut self, rhs: &'a FieldElement56) {
        for (l, r) in self.0.iter_mut().zip(rhs.0.iter()) {
            *l += r;
        }
        self.weak_reduce();
    }
}

define_add_assign_variants!(LHS = FieldElement56, RHS = FieldElement56);

impl<'a> Add<&'a FieldElement56> for &FieldElement56 {
    type Output = FieldElement56;
    fn add(self, rhs: &'a FieldElement56) -> FieldElement56 {
        let mut output = *self;
        output += rhs;
        output
    }
}

define_add_variants!(
    LHS = FieldElement56,
    RHS = FieldElement56,
    Output = FieldElement56
);

impl<'a> SubAssign<&'a FieldElement56> for FieldElement56 {
    fn sub_assign(&mut self, rhs: &'a FieldElement56) {
        // Add 2p before the limbwise subtraction so nothing underflows,
        // then shrink the limbs back under 2^56.
        for (i, (l, r)) in self.0.iter_mut().zip(rhs.0.iter()).enumerate() {
            *l = l.wrapping_add(2 * P_LIMBS[i]).wrapping_sub(*r);
        }
        self.weak_reduce();
    }
}

define_sub_assign_variants!(LHS = FieldElement56, RHS = FieldElement56);

impl<'a> Sub<&'a FieldElement56> for &FieldElement56 {
    type Output = FieldElement56;
    fn sub(self, rhs: &'a FieldElement56) -> FieldElement56 {
        let mut output = *self;
        output -= rhs;
        output
    }
}

define_sub_variants!(
    LHS = FieldElement56,
    RHS = FieldElement56,
    Output = FieldElement56
);

impl Neg for &FieldElement56 {
    type Output = FieldElement56;
    fn neg(self) -> FieldElement56 {
        &FieldElement56::ZERO - self
    }
}

impl Neg for FieldElement56 {
    type Output = FieldElement56;
    fn neg(self) -> FieldElement56 {
        -&self
    }
}

impl<'a> MulAssign<&'a FieldElement56> for FieldElement56 {
    fn mul_assign(&mut self, rhs: &'a FieldElement56) {
        let result = (self as &FieldElement56) * rhs;
        self.0 = result.0;
    }
}

define_mul_assign_variants!(LHS = FieldElement56, RHS = FieldElement56);

impl<'a> Mul<&'a FieldElement56> for &FieldElement56 {
    type Output = FieldElement56;

    /// 8x8 schoolbook multiplication with a three-way split on the
    /// \\(2\^{224}\\) boundary, folding the high half back into the low
    /// half using \\(2\^{448} \equiv 2\^{224} + 1 \pmod p\\).
    ///
    /// The accumulators are signed so the Karatsuba middle terms may go
    /// transiently negative; at every extraction point the running value
    /// is a sum of dominating `aa*bb` products and is non-negative.
    fn mul(self, rhs: &'a FieldElement56) -> FieldElement56 {
        let a: &[u64; 8] = &self.0;
        let b: &[u64; 8] = &rhs.0;
        let mut c = [0u64; 8];
        let mask = LOW_56_BITS;

        let mut aa = [0u64; 4];
        let mut bb = [0u64; 4];
        for i in 0..4 {
            aa[i] = a[i] + a[i + 4];
            bb[i] = b[i] + b[i + 4];
        }

        let mut accum2 = m(a[0], b[3]);
        let mut accum1 = m(aa[0], bb[3]);
        let mut accum0 = m(a[4], b[7]);

        accum2 += m(a[1], b[2]);
        accum1 += m(aa[1], bb[2]);
        accum0 += m(a[5], b[6]);

        accum2 += m(a[2], b[1]);
        accum1 += m(aa[2], bb[1]);
        accum0 += m(a[6], b[5]);

        accum2 += m(a[3], b[0]);
        accum1 += m(aa[3], bb[0]);
        accum0 += m(a[7], b[4]);

        accum1 -= accum2;
        accum0 += accum2;

        c[3] = (accum0 as u64) & mask;
        c[7] = (accum1 as u64) & mask;

        accum0 >>= 56;
        accum1 >>= 56;

        accum2 = accum1;
        accum1 += accum0;
        accum0 = accum2;

        accum2 = m(a[0], b[0]);
        accum1 -= accum2;
        accum0 += accum2;

        accum2 = m(aa[1], bb[3]);
        accum0 -= m(a[1], b[3]);
        accum1 += m(a[5], b[7]);

        accum0 -= m(a[2], b[2]);
        accum2 += m(aa[2], bb[2]);
        accum1 += m(a[6], b[6]);

        accum0 -= m(a[3], b[1]);
        accum1 += m(a[7], b[5]);
        accum2 += m(aa[3], bb[1]);

        accum0 += accum2;
        accum1 += accum2;
        accum0 += m(a[4], b[4]);
        accum1 += m(aa[0], bb[0]);

        c[0] = (accum0 as u64) & mask;
        c[4] = (accum1 as u64) & mask;

        accum0 >>= 56;
        accum1 >>= 56;

        accum2 = m(aa[2], bb[3]);
        accum0 -= m(a[2], b[3]);
        accum1 += m(a[6], b[7]);

        accum2 += m(aa[3], bb[2]);
        accum0 -= m(a[3], b[2]);
        accum1 += m(a[7], b[6]);

        accum1 += accum2;
        accum0 += accum2;

        accum2 = m(a[0], b[1]);
        accum1 += m(aa[0], bb[1]);
        accum0 += m(a[4], b[5]);

        accum2 += m(a[1], b[0]);
        accum1 += m(aa[1], bb[0]);
        accum0 += m(a[5], b[4]);

        accum1 -= accum2;
        accum0 += accum2;

        c[1] = (accum0 as u64) & mask;
        c[5] = (accum1 as u64) & mask;

        accum0 >>= 56;
        accum1 >>= 56;

        accum2 = m(aa[3], bb[3]);
        accum0 -= m(a[3], b[3]);
        accum1 += m(a[7], b[7]);

        accum1 += accum2;
        accum0 += accum2;

        accum2 = m(a[0], b[2]);
        accum1 += m(aa[0], bb[2]);
        accum0 += m(a[4], b[6]);

        accum2 += m(a[1], b[1]);
        accum1 += m(aa[1], bb[1]);
        accum0 += m(a[5], b[5]);

        accum2 += m(a[2], b[0]);
        accum1 += m(aa[2], bb[0]);
        accum0 += m(a[6], b[4]);

        accum1 -= accum2;
        accum0 += accum2;

        c[2] = (accum0 as u64) & mask;
        c[6] = (accum1 as u64) & mask;

        accum0 >>= 56;
        accum1 >>= 56;

        accum0 += c[3] as i128;
        accum1 += c[7] as i128;
        c[3] = (accum0 as u64) & mask;
        c[7] = (accum1 as u64) & mask;

        // The leftover carries land on limbs 4 and 0 per the golden-ratio
        // reduction; they are at most a couple of bits.
        accum0 >>= 56;
        accum1 >>= 56;
        c[4] += (accum0 as u64) + (accum1 as u64);
        c[0] += accum1 as u64;

        FieldElement56(c)
    }
}

define_mul_variants!(
    LHS = FieldElement56,
    RHS = FieldElement56,
    Output = FieldElement56
);

impl FieldElement56 {
    /// The zero element.
    pub const ZERO: FieldElement56 = FieldElement56([0; 8]);
    /// The one element.
    pub const ONE: FieldElement56 = FieldElement56([1, 0, 0, 0, 0, 0, 0, 0]);

    /// Construct the field element representing a small integer.
    pub(crate) const fn from_u64(w: u64) -> FieldElement56 {
        FieldElement56([w, 0, 0, 0, 0, 0, 0, 0])
    }

    /// Propagate the top bits of every limb into the next, folding the
    /// overflow of limb 7 onto limbs 4 and 0.  Afterwards every limb is
    /// below \\(2\^{56} + 2\^{8}\\), small enough for any multiplication
    /// input.
    pub(crate) fn weak_reduce(&mut self) {
        let a = &mut self.0;
        let tmp = a[7] >> 56;
        a[4] += tmp;
        for i in (1..8).rev() {
            a[i] = (a[i] & LOW_56_BITS) + (a[i - 1] >> 56);
        }
        a[0] = (a[0] & LOW_56_BITS) + tmp;
    }

    /// Fully canonicalize: after this, the limbs encode the unique
    /// representative in \\([0, p)\\).
    pub(crate) fn strong_reduce(&mut self) {
        let a = &mut self.0;

        // Clear the high part first; the total is then below 2p.
        a[4] += a[7] >> 56;
        a[0] += a[7] >> 56;
        a[7] &= LOW_56_BITS;

        // Compute a - p with a signed borrow chain.
        let mut scarry: i128 = 0;
        for i in 0..8 {
            scarry = scarry + a[i] as i128 - P_LIMBS[i] as i128;
            a[i] = (scarry as u64) & LOW_56_BITS;
            scarry >>= 56;
        }

        // scarry is 0 if a was >= p and -1 otherwise; add p back in the
        // latter case.  The final carry cancels against the borrow.
        let scarry_mask = (scarry as u64) & LOW_56_BITS;
        let mut carry: u128 = 0;
        for i in 0..8 {
            let p = if i == 4 { scarry_mask & !1 } else { scarry_mask };
            carry = carry + a[i] as u128 + p as u128;
            a[i] = (carry as u64) & LOW_56_BITS;
            carry >>= 56;
        }
    }

    /// Squaring, with the same split and reduction as `Mul`.
    pub(crate) fn square(&self) -> FieldElement56 {
        let a: &[u64; 8] = &self.0;
        let mut c = [0u64; 8];
        let mask = LOW_56_BITS;

        let mut aa = [0u64; 4];
        for i in 0..4 {
            aa[i] = a[i] + a[i + 4];
        }

        let mut accum2 = m(a[0], a[3]);
        let mut accum1 = m(aa[0], aa[3]);
        let mut accum0 = m(a[4], a[7]);

        accum2 += m(a[1], a[2]);
        accum1 += m(aa[1], aa[2]);
        accum0 += m(a[5], a[6]);

        accum1 -= accum2;
        accum0 += accum2;

        c[3] = ((accum0 as u64) << 1) & mask;
        c[7] = ((accum1 as u64) << 1) & mask;

        accum0 >>= 55;
        accum1 >>= 55;

        accum2 = accum1;
        accum1 += accum0;
        accum0 = accum2;

        accum2 = m(a[0], a[0]);
        accum1 -= accum2;
        accum0 += accum2;

        accum2 = 2 * m(aa[1], aa[3]);
        accum0 -= 2 * m(a[1], a[3]);
        accum1 += 2 * m(a[5], a[7]);

        accum0 -= m(a[2], a[2]);
        accum2 += m(aa[2], aa[2]);
        accum1 += m(a[6], a[6]);

        accum0 += accum2;
        accum1 += accum2;
        accum0 += m(a[4], a[4]);
        accum1 += m(aa[0], aa[0]);

        c[0] = (accum0 as u64) & mask;
        c[4] = (accum1 as u64) & mask;

        accum0 >>= 56;
        accum1 >>= 56;

        accum2 = 2 * m(aa[2], aa[3]);
        accum0 -= 2 * m(a[2], a[3]);
        accum1 += 2 * m(a[6], a[7]);

        accum1 += accum2;
        accum0 += accum2;

        accum2 = 2 * m(a[0], a[1]);
        accum1 += 2 * m(aa[0], aa[1]);
        accum0 += 2 * m(a[4], a[5]);

        accum1 -= accum2;
        accum0 += accum2;

        c[1] = (accum0 as u64) & mask;
        c[5] = (accum1 as u64) & mask;

        accum0 >>= 56;
        accum1 >>= 56;

        accum2 = m(aa[3], aa[3]);
        accum0 -= m(a[3], a[3]);
        accum1 += m(a[7], a[7]);

        accum1 += accum2;
        accum0 += accum2;

        accum2 = 2 * m(a[0], a[2]);
        accum1 += 2 * m(aa[0], aa[2]);
        accum0 += 2 * m(a[4], a[6]);

        accum2 += m(a[1], a[1]);
        accum1 += m(aa[1], aa[1]);
        accum0 += m(a[5], a[5]);

        accum1 -= accum2;
        accum0 += accum2;

        c[2] = (accum0 as u64) & mask;
        c[6] = (accum1 as u64) & mask;

        accum0 >>= 56;
        accum1 >>= 56;

        accum0 += c[3] as i128;
        accum1 += c[7] as i128;
        c[3] = (accum0 as u64) & mask;
        c[7] = (accum1 as u64) & mask;

        accum0 >>= 56;
        accum1 >>= 56;
        c[4] += (accum0 as u64) + (accum1 as u64);
        c[0] += accum1 as u64;

        FieldElement56(c)
    }

    /// Compute `self^(2^k)` by successive squarings.
    pub(crate) fn pow2k(&self, k: u32) -> FieldElement56 {
        debug_assert!(k > 0);
        let mut z = self.square();
        for _ in 1..k {
            z = z.square();
        }
        z
    }

    /// Multiply by a word: sequential limb MACs with the double fold of the
    /// final carries.
    pub(crate) fn mul_word(&self, b: u32) -> FieldElement56 {
        let a: &[u64; 8] = &self.0;
        let b = b as u64;
        let mut c = [0u64; 8];

        let mut accum0: u128 = 0;
        let mut accum4: u128 = 0;

        for i in 0..4 {
            accum0 += b as u128 * a[i] as u128;
            accum4 += b as u128 * a[i + 4] as u128;
            c[i] = (accum0 as u64) & LOW_56_BITS;
            c[i + 4] = (accum4 as u64) & LOW_56_BITS;
            accum0 >>= 56;
            accum4 >>= 56;
        }

        c[4] += (accum0 as u64) + (accum4 as u64);
        c[0] += accum4 as u64;

        FieldElement56(c)
    }

    /// Load a field element from its 56-byte little-endian encoding.
    ///
    /// The limbs are always populated with the raw (unreduced) bit pattern;
    /// the returned `Choice` is set iff the encoding was canonical, i.e.
    /// the value was below \\(p\\).  Callers for whom the input is secret
    /// can consume the flag in constant time.
    pub(crate) fn from_bytes(bytes: &[u8; 56]) -> (FieldElement56, Choice) {
        let mut limbs = [0u64; 8];
        for (i, limb) in limbs.iter_mut().enumerate() {
            let mut word = 0u64;
            for j in (0..7).rev() {
                word = (word << 8) | bytes[7 * i + j] as u64;
            }
            *limb = word;
        }

        // Constant-time borrow chain against p: the final borrow is -1
        // exactly when the value was canonical.
        let mut accum: i128 = 0;
        for i in 0..8 {
            accum = (accum + limbs[i] as i128 - P_LIMBS[i] as i128) >> 64;
        }
        let was_canonical = Choice::from((accum as u64 & 1) as u8);

        (FieldElement56(limbs), was_canonical)
    }

    /// Serialize to 56 bytes, little-endian, canonical.
    pub(crate) fn as_bytes(&self) -> [u8; 56] {
        let mut reduced = *self;
        reduced.strong_reduce();

        let mut bytes = [0u8; 56];
        for (i, limb) in reduced.0.iter().enumerate() {
            let mut word = *limb;
            for j in 0..7 {
                bytes[7 * i + j] = word as u8;
                word >>= 8;
            }
        }
        bytes
    }
}

#[cfg(test)]
mod test {
    use super::*;

    /// Random-ish test elements from a little xorshift, to keep the tests
    /// deterministic and std-free.
    fn test_elements() -> impl Iterator<Item = FieldElement56> {
        let mut state = 0x193a_6754_a8a7_d469u64;
        core::iter::repeat_with(move || {
            let mut limbs = [0u64; 8];
            for l in limbs.iter_mut() {
                state ^= state << 13;
                state ^= state >> 7;
                state ^= state << 17;
                *l = state & LOW_56_BITS;
            }
            FieldElement56(limbs)
        })
        .take(64)
    }

    #[test]
    fn add_sub_mul_axioms() {
        let elems: Vec<_> = test_elements().collect();
        for w in elems.chunks_exact(3) {
            let (x, y, z) = (w[0], w[1], w[2]);
            assert_eq!((&x + &y).as_bytes(), (&y + &x).as_bytes());
            assert_eq!((&(&x + &y) + &z).as_bytes(), (&x + &(&y + &z)).as_bytes());
            assert_eq!((&x * &y).as_bytes(), (&y * &x).as_bytes());
            assert_eq!(
                (&x * &(&y + &z)).as_bytes(),
                (&(&x * &y) + &(&x * &z)).as_bytes()
            );
            assert_eq!((&x * &FieldElement56::ONE).as_bytes(), x.as_bytes());
            assert_eq!(
                (&x * &FieldElement56::ZERO).as_bytes(),
                FieldElement56::ZERO.as_bytes()
            );
            assert_eq!((&x - &x).as_bytes(), FieldElement56::ZERO.as_bytes());
        }
    }

    #[test]
    fn square_matches_mul() {
        for x in test_elements() {
            assert_eq!(x.square().as_bytes(), (&x * &x).as_bytes());
        }
    }

    #[test]
    fn mul_word_matches_mul() {
        for x in test_elements() {
            let w = FieldElement56::from_u64(39082);
            assert_eq!(x.mul_word(39082).as_bytes(), (&x * &w).as_bytes());
        }
    }

    #[test]
    fn bytes_round_trip() {
        for x in test_elements() {
            let bytes = x.as_bytes();
            let (y, ok) = FieldElement56::from_bytes(&bytes);
            assert!(bool::from(ok));
            assert_eq!(y.as_bytes(), bytes);
        }
    }

    #[test]
    fn deserialize_rejects_p_accepts_p_minus_one() {
        // p itself, little-endian.
        let mut p_bytes = [0xffu8; 56];
        p_bytes[28] = 0xfe;
        let (_, ok) = FieldElement56::from_bytes(&p_bytes);
        assert!(!bool::from(ok));

        let mut p_minus_one = p_bytes;
        p_minus_one[0] = 0xfe;
        let (x, ok) = FieldElement56::from_bytes(&p_minus_one);
        assert!(bool::from(ok));
        assert_eq!(x.as_bytes(), p_minus_one);

        // p + 1 is non-canonical and re-encodes as 1.
        let mut p_plus_one = [0u8; 56];
        for b in p_plus_one.iter_mut().skip(28) {
            *b = 0xff;
        }
        let (x, ok) = FieldElement56::from_bytes(&p_plus_one);
        assert!(!bool::from(ok));
        assert_eq!(x.as_bytes(), FieldElement56::ONE.as_bytes());
    }

    #[test]
    fn strong_reduce_is_canonical() {
        // 2p - 1 reduces to p - 1.
        let mut x = FieldElement56(P_LIMBS);
        let y = FieldElement56(P_LIMBS);
        x += &y;
        let mut expected = [0xffu8; 56];
        expected[0] = 0xfe;
        expected[28] = 0xfe;
        let z = &x - &FieldElement56::ONE;
        assert_eq!(z.as_bytes(), expected);
    }
}
