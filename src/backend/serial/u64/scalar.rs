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

//! Arithmetic mod \\(q\\), the prime order of the decaf448 group, with
//! seven \\(64\\)-bit unsigned limbs.
//!
//! Unlike the field, the scalar representation is non-redundant: outside
//! of the Montgomery multiplication every `Scalar64` holds its canonical
//! value in \\([0, q)\\).

use core::fmt::Debug;

use subtle::{Choice, ConstantTimeEq};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::backend::serial::u64::constants;

/// The `Scalar64` struct represents an element in \\(\mathbb Z / q\mathbb
/// Z\\) as 7 64-bit limbs.
#[derive(Copy, Clone)]
pub struct Scalar64(pub(crate) [u64; 7]);

impl Debug for Scalar64 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Scalar64: {:?}", &self.0[..])
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for Scalar64 {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl ConstantTimeEq for Scalar64 {
    fn ct_eq(&self, other: &Scalar64) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl Scalar64 {
    /// The scalar \\(0\\).
    pub const ZERO: Scalar64 = Scalar64([0, 0, 0, 0, 0, 0, 0]);

    /// The scalar \\(1\\).
    pub const ONE: Scalar64 = Scalar64([1, 0, 0, 0, 0, 0, 0]);

    /// Unpack a 56-byte little-endian string into limbs, without reducing.
    ///
    /// The result may be up to \\(2\^{448} - 1\\), i.e. non-canonical;
    /// callers either check canonicity or reduce.
    pub fn from_bytes(bytes: &[u8; 56]) -> Scalar64 {
        let mut words = [0u64; 7];
        for (i, word) in words.iter_mut().enumerate() {
            for j in (0..8).rev() {
                *word = (*word << 8) | bytes[8 * i + j] as u64;
            }
        }
        Scalar64(words)
    }

    /// Unpack at most 56 little-endian bytes into limbs, zero-extending.
    pub fn from_partial_bytes(bytes: &[u8]) -> Scalar64 {
        debug_assert!(bytes.len() <= 56);
        let mut padded = [0u8; 56];
        padded[..bytes.len()].copy_from_slice(bytes);
        Scalar64::from_bytes(&padded)
    }

    /// Pack the limbs into their 56-byte little-endian encoding.
    pub fn as_bytes(&self) -> [u8; 56] {
        let mut bytes = [0u8; 56];
        for (i, word) in self.0.iter().enumerate() {
            let mut w = *word;
            for j in 0..8 {
                bytes[8 * i + j] = w as u8;
                w >>= 8;
            }
        }
        bytes
    }

    /// Constant-time check that the limbs encode a value below \\(q\\).
    pub fn underflows_order(&self) -> Choice {
        let mut accum: i128 = 0;
        for i in 0..7 {
            accum = (accum + self.0[i] as i128 - constants::L.0[i] as i128) >> 64;
        }
        // The borrow is -1 exactly when the value was canonical.
        Choice::from((accum as u64 & 1) as u8)
    }

    /// Compute `{extra, accum} - sub mod q`, where `extra` is a carry bit
    /// on top of `accum`: one borrow-propagation pass, then a masked
    /// add-back of \\(q\\).
    fn sub_extra(accum: &[u64; 7], sub: &Scalar64, extra: u64) -> Scalar64 {
        let mut out = [0u64; 7];

        let mut chain: i128 = 0;
        for i in 0..7 {
            chain += accum[i] as i128 - sub.0[i] as i128;
            out[i] = chain as u64;
            chain >>= 64;
        }

        // chain + extra is 0 or -1; turn it into an all-ones/all-zero mask.
        let borrow_mask = (chain + extra as i128) as u64;

        let mut chain: u128 = 0;
        for i in 0..7 {
            chain += out[i] as u128 + (constants::L.0[i] & borrow_mask) as u128;
            out[i] = chain as u64;
            chain >>= 64;
        }

        Scalar64(out)
    }

    /// Compute `a + b mod q`.
    pub fn add(a: &Scalar64, b: &Scalar64) -> Scalar64 {
        let mut sum = [0u64; 7];
        let mut chain: u128 = 0;
        for i in 0..7 {
            chain += a.0[i] as u128 + b.0[i] as u128;
            sum[i] = chain as u64;
            chain >>= 64;
        }
        Scalar64::sub_extra(&sum, &constants::L, chain as u64)
    }

    /// Compute `a - b mod q`.
    pub fn sub(a: &Scalar64, b: &Scalar64) -> Scalar64 {
        Scalar64::sub_extra(&a.0, b, 0)
    }

    /// Compute `a * b * R^(-1) mod q` where \\(R = 2\^{448}\\): 7-limb
    /// schoolbook multiplication with a per-iteration Montgomery
    /// reduction.
    ///
    /// Accepts non-canonical (up to \\(2\^{448}-1\\)) inputs; the output
    /// is canonical.
    pub fn montgomery_mul(a: &Scalar64, b: &Scalar64) -> Scalar64 {
        let mut accum = [0u64; 8];
        let mut hi_carry = 0u64;

        for i in 0..7 {
            let mand = a.0[i];

            let mut chain: u128 = 0;
            for j in 0..7 {
                chain += mand as u128 * b.0[j] as u128 + accum[j] as u128;
                accum[j] = chain as u64;
                chain >>= 64;
            }
            accum[7] = chain as u64;

            let mand = accum[0].wrapping_mul(constants::MONTGOMERY_FACTOR);
            chain = 0;
            for j in 0..7 {
                chain += mand as u128 * constants::L.0[j] as u128 + accum[j] as u128;
                if j > 0 {
                    accum[j - 1] = chain as u64;
                }
                chain >>= 64;
            }
            chain += accum[7] as u128;
            chain += hi_carry as u128;
            accum[6] = chain as u64;
            hi_carry = (chain >> 64) as u64;
        }

        let mut front = [0u64; 7];
        front.copy_from_slice(&accum[..7]);
        Scalar64::sub_extra(&front, &constants::L, hi_carry)
    }

    /// Compute `a * b mod q`: one Montgomery pass, then fold by
    /// \\(R\^2\\) to undo the Montgomery factor.
    pub fn mul(a: &Scalar64, b: &Scalar64) -> Scalar64 {
        let ab = Scalar64::montgomery_mul(a, b);
        Scalar64::montgomery_mul(&ab, &constants::R2)
    }

    /// Reduce a (possibly non-canonical) unpacked value mod \\(q\\).
    pub fn reduce(&self) -> Scalar64 {
        Scalar64::mul(self, &Scalar64::ONE)
    }

    /// Reduce an arbitrary-length little-endian byte string mod \\(q\\),
    /// 56-byte chunk by chunk from the most significant end.
    pub fn from_slice_mod_order(bytes: &[u8]) -> Scalar64 {
        if bytes.is_empty() {
            return Scalar64::ZERO;
        }

        let mut i = bytes.len() - (bytes.len() % 56);
        if i == bytes.len() {
            i -= 56;
        }
        let mut t1 = Scalar64::from_partial_bytes(&bytes[i..]);

        if bytes.len() == 56 {
            return t1.reduce();
        }

        while i > 0 {
            i -= 56;
            // t1 *= 2^448 mod q, then absorb the next chunk.
            t1 = Scalar64::montgomery_mul(&t1, &constants::R2);
            let t2 = Scalar64::from_partial_bytes(&bytes[i..i + 56]).reduce();
            t1 = Scalar64::add(&t1, &t2);
        }

        t1
    }

    /// Halve mod q: add \\(q\\) if odd, then shift right by one.
    pub fn halve(&self) -> Scalar64 {
        let mask = 0u64.wrapping_sub(self.0[0] & 1);
        let mut out = [0u64; 7];

        let mut chain: u128 = 0;
        for i in 0..7 {
            chain += self.0[i] as u128 + (constants::L.0[i] & mask) as u128;
            out[i] = chain as u64;
            chain >>= 64;
        }
        for i in 0..6 {
            out[i] = (out[i] >> 1) | (out[i + 1] << 63);
        }
        out[6] = (out[6] >> 1) | ((chain as u64) << 63);

        Scalar64(out)
    }

    /// Compute `self^(q-2) mod q`, i.e. the multiplicative inverse by
    /// Fermat's little theorem.
    ///
    /// The ladder is gated on the (public, fixed) bits of \\(q - 2\\), so
    /// it runs in time independent of the input.  Returns zero for zero
    /// input; the returned `Choice` is unset in that case.
    pub fn invert(&self) -> (Choice, Scalar64) {
        // b = R = 1 in Montgomery form; ma = self in Montgomery form.
        let mut b = Scalar64::montgomery_mul(&Scalar64::ONE, &constants::R2);
        let ma = Scalar64::montgomery_mul(self, &constants::R2);

        for i in (0..446).rev() {
            b = Scalar64::montgomery_mul(&b, &b);

            let mut w = constants::L.0[i / 64];
            if i < 64 {
                w -= 2;
            }
            if (w >> (i % 64)) & 1 == 1 {
                b = Scalar64::montgomery_mul(&b, &ma);
            }
        }

        let out = Scalar64::montgomery_mul(&b, &Scalar64::ONE);
        (!out.ct_eq(&Scalar64::ZERO), out)
    }

    /// Extract the 4-bit window at (4-aligned) bit position `i` of the
    /// recoded scalar.  Window positions never straddle a limb.
    pub(crate) fn window4(&self, i: usize) -> u64 {
        debug_assert!(i % 4 == 0);
        (self.0[i / 64] >> (i % 64)) & 0xf
    }

    /// Extract the bit at position `i`.
    pub(crate) fn bit(&self, i: usize) -> u64 {
        (self.0[i / 64] >> (i % 64)) & 1
    }
}

#[cfg(test)]
mod test {
    use super::*;

    /// q - 1, the largest canonical scalar.
    const Q_MINUS_ONE: Scalar64 = Scalar64([
        0x2378c292ab5844f2,
        0x216cc2728dc58f55,
        0xc44edb49aed63690,
        0xffffffff7cca23e9,
        0xffffffffffffffff,
        0xffffffffffffffff,
        0x3fffffffffffffff,
    ]);

    fn test_scalars() -> impl Iterator<Item = Scalar64> {
        let mut state = 0xda3e_39cb_94b9_5bdbu64;
        core::iter::repeat_with(move || {
            let mut bytes = [0u8; 56];
            for b in bytes.iter_mut() {
                state ^= state << 13;
                state ^= state >> 7;
                state ^= state << 17;
                *b = state as u8;
            }
            Scalar64::from_bytes(&bytes).reduce()
        })
        .take(48)
    }

    #[test]
    fn ring_axioms() {
        let elems: Vec<_> = test_scalars().collect();
        for w in elems.chunks(3) {
            let (x, y, z) = (w[0], w[1], w[2]);
            let xy = Scalar64::mul(&x, &y);
            let yx = Scalar64::mul(&y, &x);
            assert_eq!(xy.as_bytes(), yx.as_bytes());
            let lhs = Scalar64::mul(&x, &Scalar64::add(&y, &z));
            let rhs = Scalar64::add(&Scalar64::mul(&x, &y), &Scalar64::mul(&x, &z));
            assert_eq!(lhs.as_bytes(), rhs.as_bytes());
            let assoc_l = Scalar64::mul(&Scalar64::mul(&x, &y), &z);
            let assoc_r = Scalar64::mul(&x, &Scalar64::mul(&y, &z));
            assert_eq!(assoc_l.as_bytes(), assoc_r.as_bytes());
            assert_eq!(Scalar64::mul(&x, &Scalar64::ONE).as_bytes(), x.as_bytes());
            assert_eq!(
                Scalar64::sub(&Scalar64::add(&x, &y), &y).as_bytes(),
                x.as_bytes()
            );
        }
    }

    #[test]
    fn add_wraps_at_q() {
        // (q - 1) + 1 == 0
        let sum = Scalar64::add(&Q_MINUS_ONE, &Scalar64::ONE);
        assert_eq!(sum.as_bytes(), Scalar64::ZERO.as_bytes());
        // 0 - 1 == q - 1
        let diff = Scalar64::sub(&Scalar64::ZERO, &Scalar64::ONE);
        assert_eq!(diff.as_bytes(), Q_MINUS_ONE.as_bytes());
    }

    #[test]
    fn q_reduces_to_zero() {
        let q = Scalar64::add(&Q_MINUS_ONE, &Scalar64::ONE);
        assert_eq!(q.as_bytes(), Scalar64::ZERO.as_bytes());
        let q_raw = constants::L.reduce();
        assert_eq!(q_raw.as_bytes(), Scalar64::ZERO.as_bytes());
    }

    #[test]
    fn canonicity_check() {
        assert!(bool::from(Q_MINUS_ONE.underflows_order()));
        assert!(!bool::from(constants::L.underflows_order()));
        assert!(bool::from(Scalar64::ZERO.underflows_order()));
    }

    #[test]
    fn halve_round_trips() {
        for x in test_scalars() {
            let half = x.halve();
            let back = Scalar64::add(&half, &half);
            assert_eq!(back.as_bytes(), x.as_bytes());
        }
    }

    #[test]
    fn invert_is_inverse() {
        for x in test_scalars() {
            let (ok, xinv) = x.invert();
            assert!(bool::from(ok));
            let one = Scalar64::mul(&x, &xinv);
            assert_eq!(one.as_bytes(), Scalar64::ONE.as_bytes());
        }
        let (ok, zinv) = Scalar64::ZERO.invert();
        assert!(!bool::from(ok));
        assert_eq!(zinv.as_bytes(), Scalar64::ZERO.as_bytes());
    }

    #[test]
    fn decode_long_matches_decode() {
        for x in test_scalars() {
            let bytes = x.as_bytes();
            let long = Scalar64::from_slice_mod_order(&bytes);
            assert_eq!(long.as_bytes(), x.as_bytes());
        }

        // A 112-byte string c1 || c0 reduces to c1 + 2^448 c0 mod q.
        let mut wide = [0u8; 112];
        wide[0] = 7;
        wide[56] = 1; // value = 7 + 2^448
        let got = Scalar64::from_slice_mod_order(&wide);
        // 2^448 mod q computed by doubling up from 1.
        let mut r = Scalar64::ONE;
        for _ in 0..448 {
            r = Scalar64::add(&r, &r);
        }
        let expect = Scalar64::add(&r, &Scalar64([7, 0, 0, 0, 0, 0, 0]));
        assert_eq!(got.as_bytes(), expect.as_bytes());

        // Short and empty strings.
        assert_eq!(
            Scalar64::from_slice_mod_order(&[3u8]).as_bytes(),
            Scalar64([3, 0, 0, 0, 0, 0, 0]).as_bytes()
        );
        assert_eq!(
            Scalar64::from_slice_mod_order(&[]).as_bytes(),
            Scalar64::ZERO.as_bytes()
        );
    }

    #[test]
    fn montgomery_constants_consistent() {
        // R * R^(-1) == 1: montgomery_mul(R2, ONE) == R... folded twice.
        let r = Scalar64::montgomery_mul(&Scalar64::ONE, &constants::R2);
        let one = Scalar64::montgomery_mul(&r, &Scalar64::ONE);
        assert_eq!(one.as_bytes(), Scalar64::ONE.as_bytes());
    }
}
