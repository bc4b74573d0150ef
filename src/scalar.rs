// -*- mode: rust; -*-
//
// This file is part of curve448-dalek.
// Copyright (c) 2016-2021 isis lovecruft
// Copyright (c) 2016-2020 Henry de Valence
// Portions Copyright 2017 Brian Smith
// See LICENSE for licensing information.
//
// Authors:
// - isis agora lovecruft <isis@patternsinthevoid.net>
// - Henry de Valence <hdevalence@hdevalence.ca>
// - Brian Smith <brian@briansmith.org>

//! Arithmetic on scalars (integers mod the group order).
//!
//! Both the decaf448 group and its underlying Edwards form Ed448-Goldilocks
//! have prime order \\( q = 2\^{446} - 13818066809895115352007386748515426880336692474882178609894547503885 \\).
//!
//! This code is intended to be useful with both the decaf448 group and the
//! prime-order subgroup of Ed448-Goldilocks, so its constant-time operations
//! are implemented modulo \\( q \\).
//!
//! The `Scalar` type holds its value canonically reduced: every `Scalar`
//! constructed through this API represents the unique integer in
//! \\( [0, q) \\) of its residue class.  Decoding routines that accept
//! unreduced input (`from_bytes_mod_order`, `from_bytes_mod_order_wide`,
//! `from_slice_mod_order`) reduce eagerly, and `from_canonical_bytes`
//! instead reports whether reduction would have been necessary.

use core::borrow::Borrow;
use core::fmt::Debug;
use core::iter::{Product, Sum};
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

#[cfg(feature = "rand_core")]
use rand_core::CryptoRng;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::backend::serial::u64::scalar::Scalar64;

/// The `Scalar` struct holds an element of \\(\mathbb Z / q\mathbb Z \\).
#[derive(Copy, Clone)]
pub struct Scalar(pub(crate) Scalar64);

impl Scalar {
    /// The scalar \\( 0 \\).
    pub const ZERO: Self = Scalar(Scalar64::ZERO);

    /// The scalar \\( 1 \\).
    pub const ONE: Self = Scalar(Scalar64::ONE);

    /// Construct a `Scalar` by reducing a 448-bit little-endian integer
    /// modulo the group order \\( q \\).
    pub fn from_bytes_mod_order(bytes: [u8; 56]) -> Scalar {
        Scalar(Scalar64::from_bytes(&bytes).reduce())
    }

    /// Construct a `Scalar` by reducing a 896-bit little-endian integer
    /// modulo the group order \\( q \\).
    pub fn from_bytes_mod_order_wide(input: &[u8; 112]) -> Scalar {
        Scalar(Scalar64::from_slice_mod_order(&input[..]))
    }

    /// Construct a `Scalar` by reducing an arbitrary-length little-endian
    /// byte string modulo the group order \\( q \\).
    ///
    /// This accepts any length, including the empty string (which yields
    /// zero); fixed-width callers should prefer `from_bytes_mod_order` or
    /// `from_bytes_mod_order_wide`.
    pub fn from_slice_mod_order(input: &[u8]) -> Scalar {
        Scalar(Scalar64::from_slice_mod_order(input))
    }

    /// Attempt to construct a `Scalar` from a canonical byte
    /// representation.
    ///
    /// # Return
    ///
    /// - `Some(s)`, where `s` is the `Scalar` corresponding to `bytes`,
    ///   if `bytes` is a canonical byte representation (i.e. the integer
    ///   is below \\( q \\));
    /// - `None` if `bytes` is not a canonical byte representation.
    pub fn from_canonical_bytes(bytes: [u8; 56]) -> CtOption<Scalar> {
        let raw = Scalar64::from_bytes(&bytes);
        let was_canonical = raw.underflows_order();
        CtOption::new(Scalar(raw.reduce()), was_canonical)
    }

    /// Convert this `Scalar` to its underlying sequence of bytes.
    pub fn to_bytes(&self) -> [u8; 56] {
        self.0.as_bytes()
    }

    /// Compute the multiplicative inverse of this scalar, by Fermat: \\(
    /// x^{-1} = x^{q-2} \bmod q \\).
    ///
    /// The result is `None` (with value zero inside) exactly when the
    /// scalar is zero; the flag may be consumed in constant time.
    pub fn invert(&self) -> CtOption<Scalar> {
        let (was_nonzero, inverse) = self.0.invert();
        CtOption::new(Scalar(inverse), was_nonzero)
    }

    /// Halve this scalar mod \\( q \\): add \\( q \\) if the value is
    /// odd, then shift right by one.
    ///
    /// This is the exact inverse of doubling, used by the signed-digit
    /// recodings in scalar multiplication.
    pub fn halve(&self) -> Scalar {
        Scalar(self.0.halve())
    }

    /// Return a `Scalar` chosen uniformly at random using a
    /// user-provided RNG.
    ///
    /// # Inputs
    ///
    /// * `rng`: any RNG which implements `CryptoRng` interface.
    #[cfg(feature = "rand_core")]
    pub fn random<R: CryptoRng + ?Sized>(rng: &mut R) -> Self {
        let mut scalar_bytes = [0u8; 112];
        rng.fill_bytes(&mut scalar_bytes);
        Scalar::from_bytes_mod_order_wide(&scalar_bytes)
    }
}

impl Debug for Scalar {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Scalar{{\n\tbytes: {:?},\n}}", &self.to_bytes())
    }
}

impl Eq for Scalar {}
impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl ConstantTimeEq for Scalar {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl ConditionallySelectable for Scalar {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut limbs = [0u64; 7];
        for (l, (x, y)) in limbs.iter_mut().zip(a.0 .0.iter().zip(b.0 .0.iter())) {
            *l = u64::conditional_select(x, y, choice);
        }
        Scalar(Scalar64(limbs))
    }
}

impl Default for Scalar {
    fn default() -> Scalar {
        Scalar::ZERO
    }
}

impl From<u8> for Scalar {
    fn from(x: u8) -> Scalar {
        Scalar(Scalar64([x as u64, 0, 0, 0, 0, 0, 0]))
    }
}

impl From<u16> for Scalar {
    fn from(x: u16) -> Scalar {
        Scalar(Scalar64([x as u64, 0, 0, 0, 0, 0, 0]))
    }
}

impl From<u32> for Scalar {
    fn from(x: u32) -> Scalar {
        Scalar(Scalar64([x as u64, 0, 0, 0, 0, 0, 0]))
    }
}

impl From<u64> for Scalar {
    fn from(x: u64) -> Scalar {
        Scalar(Scalar64([x, 0, 0, 0, 0, 0, 0]))
    }
}

impl From<u128> for Scalar {
    fn from(x: u128) -> Scalar {
        Scalar(Scalar64([x as u64, (x >> 64) as u64, 0, 0, 0, 0, 0]))
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for Scalar {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl<'a> MulAssign<&'a Scalar> for Scalar {
    fn mul_assign(&mut self, _rhs: &'a Scalar) {
        self.0 = Scalar64::mul(&self.0, &_rhs.0);
    }
}

define_mul_assign_variants!(LHS = Scalar, RHS = Scalar);

impl<'a> Mul<&'a Scalar> for &Scalar {
    type Output = Scalar;
    fn mul(self, _rhs: &'a Scalar) -> Scalar {
        Scalar(Scalar64::mul(&self.0, &_rhs.0))
    }
}

define_mul_variants!(LHS = Scalar, RHS = Scalar, Output = Scalar);

impl<'a> AddAssign<&'a Scalar> for Scalar {
    fn add_assign(&mut self, _rhs: &'a Scalar) {
        self.0 = Scalar64::add(&self.0, &_rhs.0);
    }
}

define_add_assign_variants!(LHS = Scalar, RHS = Scalar);

impl<'a> Add<&'a Scalar> for &Scalar {
    type Output = Scalar;
    fn add(self, _rhs: &'a Scalar) -> Scalar {
        Scalar(Scalar64::add(&self.0, &_rhs.0))
    }
}

define_add_variants!(LHS = Scalar, RHS = Scalar, Output = Scalar);

impl<'a> SubAssign<&'a Scalar> for Scalar {
    fn sub_assign(&mut self, _rhs: &'a Scalar) {
        self.0 = Scalar64::sub(&self.0, &_rhs.0);
    }
}

define_sub_assign_variants!(LHS = Scalar, RHS = Scalar);

impl<'a> Sub<&'a Scalar> for &Scalar {
    type Output = Scalar;
    fn sub(self, _rhs: &'a Scalar) -> Scalar {
        Scalar(Scalar64::sub(&self.0, &_rhs.0))
    }
}

define_sub_variants!(LHS = Scalar, RHS = Scalar, Output = Scalar);

impl Neg for &Scalar {
    type Output = Scalar;
    fn neg(self) -> Scalar {
        &Scalar::ZERO - self
    }
}

impl Neg for Scalar {
    type Output = Scalar;
    fn neg(self) -> Scalar {
        -&self
    }
}

impl<T> Product<T> for Scalar
where
    T: Borrow<Scalar>,
{
    fn product<I>(iter: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        iter.fold(Scalar::ONE, |acc, item| acc * item.borrow())
    }
}

impl<T> Sum<T> for Scalar
where
    T: Borrow<Scalar>,
{
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        iter.fold(Scalar::ZERO, |acc, item| acc + item.borrow())
    }
}

// ------------------------------------------------------------------------
// Serde support
// ------------------------------------------------------------------------

#[cfg(feature = "serde")]
use serde::de::Visitor;
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[cfg(feature = "serde")]
impl Serialize for Scalar {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeTuple;
        let mut tup = serializer.serialize_tuple(56)?;
        for byte in self.to_bytes().iter() {
            tup.serialize_element(byte)?;
        }
        tup.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ScalarVisitor;

        impl<'de> Visitor<'de> for ScalarVisitor {
            type Value = Scalar;

            fn expecting(&self, formatter: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                formatter.write_str(
                    "a sequence of 56 bytes whose little-endian interpretation is below the \
                     group order q",
                )
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Scalar, A::Error>
            where
                A: serde::de::SeqAccess<'de>,
            {
                let mut bytes = [0u8; 56];
                #[allow(clippy::needless_range_loop)]
                for i in 0..56 {
                    bytes[i] = seq
                        .next_element()?
                        .ok_or_else(|| serde::de::Error::invalid_length(i, &"expected 56 bytes"))?;
                }
                Option::from(Scalar::from_canonical_bytes(bytes))
                    .ok_or_else(|| serde::de::Error::custom("scalar was not canonically encoded"))
            }
        }

        deserializer.deserialize_tuple(56, ScalarVisitor)
    }
}

#[cfg(test)]
pub(crate) mod test {
    use super::*;

    /// q, the group order, little-endian.
    pub(crate) const Q_BYTES: [u8; 56] = [
        0xf3, 0x44, 0x58, 0xab, 0x92, 0xc2, 0x78, 0x23, 0x55, 0x8f, 0xc5, 0x8d, 0x72, 0xc2, 0x6c,
        0x21, 0x90, 0x36, 0xd6, 0xae, 0x49, 0xdb, 0x4e, 0xc4, 0xe9, 0x23, 0xca, 0x7c, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x3f,
    ];

    pub(crate) fn deterministic_scalars() -> impl Iterator<Item = Scalar> {
        let mut state = 0x9e37_79b9_7f4a_7c15u64;
        core::iter::repeat_with(move || {
            let mut bytes = [0u8; 112];
            for b in bytes.iter_mut() {
                state ^= state << 13;
                state ^= state >> 7;
                state ^= state << 17;
                *b = state as u8;
            }
            Scalar::from_bytes_mod_order_wide(&bytes)
        })
    }

    #[test]
    fn q_is_not_canonical() {
        assert!(bool::from(Scalar::from_canonical_bytes(Q_BYTES).is_none()));
        // ...but reduces to zero mod q.
        assert_eq!(Scalar::from_bytes_mod_order(Q_BYTES), Scalar::ZERO);

        let mut q_minus_one = Q_BYTES;
        q_minus_one[0] -= 1;
        let s = Scalar::from_canonical_bytes(q_minus_one).unwrap();
        assert_eq!(s + Scalar::ONE, Scalar::ZERO);
    }

    #[test]
    fn encode_decode_round_trip() {
        for s in deterministic_scalars().take(16) {
            let bytes = s.to_bytes();
            let decoded = Scalar::from_canonical_bytes(bytes).unwrap();
            assert_eq!(decoded, s);
        }
    }

    #[test]
    fn wide_reduction_matches_slice_reduction() {
        for s in deterministic_scalars().take(16) {
            let mut wide = [0u8; 112];
            wide[..56].copy_from_slice(&s.to_bytes());
            assert_eq!(Scalar::from_bytes_mod_order_wide(&wide), s);
            assert_eq!(Scalar::from_slice_mod_order(&wide), s);
            assert_eq!(Scalar::from_slice_mod_order(&s.to_bytes()), s);
        }
    }

    #[test]
    fn invert_and_operators() {
        let scalars: Vec<Scalar> = deterministic_scalars().take(12).collect();
        for s in &scalars {
            let sinv = s.invert().unwrap();
            assert_eq!(sinv * s, Scalar::ONE);
            assert_eq!(s + (-s), Scalar::ZERO);
            assert_eq!(s.halve() + s.halve(), *s);
        }
        assert!(bool::from(Scalar::ZERO.invert().is_none()));

        let total: Scalar = scalars.iter().sum();
        let mut expected = Scalar::ZERO;
        for s in &scalars {
            expected += s;
        }
        assert_eq!(total, expected);
    }

    #[test]
    fn from_uint_conversions() {
        assert_eq!(Scalar::from(2u8) + Scalar::from(3u64), Scalar::from(5u32));
        let x = Scalar::from(u64::MAX as u128 + 1);
        let y = Scalar::from(u64::MAX) + Scalar::ONE;
        assert_eq!(x, y);
    }

    #[cfg(feature = "rand_core")]
    #[test]
    fn random_scalars_are_canonical() {
        let mut rng = rand::rng();
        for _ in 0..8 {
            let s = Scalar::random(&mut rng);
            assert!(bool::from(
                Scalar::from_canonical_bytes(s.to_bytes()).is_some()
            ));
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_bincode_round_trip() {
        for s in deterministic_scalars().take(4) {
            let encoded = bincode::serialize(&s).unwrap();
            assert_eq!(encoded.len(), 56);
            let decoded: Scalar = bincode::deserialize(&encoded).unwrap();
            assert_eq!(decoded, s);
        }
        // q must be rejected.
        assert!(bincode::deserialize::<Scalar>(&Q_BYTES).is_err());
    }
}
