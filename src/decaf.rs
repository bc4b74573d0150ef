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

//! An implementation of [Decaf][decaf_paper], which provides a
//! prime-order group on top of Ed448-Goldilocks.
//!
//! # The Decaf448 Group
//!
//! Most cryptographic systems require a group of prime order, but
//! concrete implementations using elliptic curve groups usually fall
//! short: Edwards curves, which give fast and safe formulas, have a
//! cofactor of at least \\(4\\).  Decaf constructs a prime-order group
//! as a quotient of such a curve: representatives that differ by a
//! small-torsion component are identified by the equality check,
//! encoded as identical bitstrings, and only the canonical encoding of
//! a coset is accepted when decoding.  The group operations themselves
//! are carried out with complete, branch-free Edwards formulas at no
//! overhead.
//!
//! Decaf448 is the instantiation over the Ed448-Goldilocks curve
//! \\(x\^2 + y\^2 = 1 - 39081 x\^2 y\^2\\) over \\(\mathbb F_p\\),
//! \\(p = 2\^{448} - 2\^{224} - 1\\); the quotient has prime order
//! \\(q = 2\^{446} - 13818066809895115352007386748515426880336692474882178609894547503885\\).
//!
//! ## Encoding and Decoding
//!
//! Encoding is done by converting to and from a `CompressedDecaf`
//! struct, a typed wrapper around `[u8; 56]`.  The encoding is
//! canonical: two points are equal if and only if their encodings are
//! equal, and decoding accepts only the canonical representative of
//! each coset.
//!
//! ## Equality Testing
//!
//! The `DecafPoint` struct implements the [`subtle::ConstantTimeEq`]
//! trait for constant-time equality checking, and also uses this to
//! ensure `Eq` equality checking runs in constant time.
//!
//! ## Scalars
//!
//! Scalars are represented by the `Scalar` struct.  To construct a
//! scalar, see `Scalar::from_canonical_bytes()` or
//! `Scalar::from_bytes_mod_order_wide()`.
//!
//! ## Scalar Multiplication
//!
//! Scalar multiplication on Decaf points is provided by:
//!
//! * the `*` operator between a `Scalar` and a `DecafPoint`, which
//!   performs constant-time variable-base scalar multiplication;
//!
//! * the `*` operator between a `Scalar` and a `DecafBasepointTable`,
//!   which performs constant-time fixed-base scalar multiplication with
//!   a signed comb; the table for the group's basepoint is available as
//!   `constants::DECAF_BASEPOINT_TABLE`, and tables with caller-chosen
//!   comb parameters can be built with `DecafCombTable`;
//!
//! * `DecafPoint::vartime_double_scalar_mul_basepoint`, variable-time
//!   \\(aA + bB\\) for verification equations on public inputs.
//!
//! ## Random Points and Hashing to the Group
//!
//! The group comes equipped with Elligator-style maps from (uniform)
//! bytestrings, suitable for hashed-to-group constructions: see
//! `DecafPoint::from_uniform_bytes` and
//! `DecafPoint::from_hash_nonuniform`.  The maps are invertible up to a
//! branch hint, which `DecafPoint::invert_elligator_nonuniform`
//! consumes to recover a preimage; this supports protocols that need to
//! transmit curve points indistinguishable from random strings.
//!
//! The conversion to and from hashes uses only bytestrings: the caller
//! chooses the hash (an XOF such as SHAKE256 is conventional for
//! decaf448) and this crate maps its output onto the group.
//!
//! [decaf_paper]: https://eprint.iacr.org/2015/673.pdf

#![allow(non_snake_case)]

use core::array::TryFromSliceError;
use core::borrow::Borrow;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use core::ops::{Mul, MulAssign};

#[cfg(feature = "digest")]
use digest::{ExtendableOutput, Update, XofReader};

#[cfg(feature = "rand_core")]
use rand_core::CryptoRng;

use subtle::{Choice, ConditionallyNegatable, ConditionallySelectable, ConstantTimeEq, CtOption};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::constants;
use crate::edwards::EdwardsPoint;
use crate::field::FieldElement;
use crate::scalar::Scalar;
use crate::traits::Identity;
#[cfg(feature = "precomputed-tables")]
use crate::traits::BasepointTable;
use crate::traits::ValidityCheck;

#[cfg(any(feature = "alloc", feature = "precomputed-tables"))]
use crate::backend::serial::curve_models::NielsPoint;
#[cfg(any(feature = "alloc", feature = "precomputed-tables"))]
use crate::backend::serial::scalar_mul::precomputed::{
    comb_adjustment, comb_mul, comb_precompute,
};
#[cfg(any(feature = "alloc", feature = "precomputed-tables"))]
use crate::backend::serial::u64::scalar::Scalar64;

#[cfg(feature = "alloc")]
use alloc::vec;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

// ------------------------------------------------------------------------
// Compressed points
// ------------------------------------------------------------------------

/// A Decaf point, in compressed wire format.
///
/// The Decaf encoding is canonical, so two points are equal if and only
/// if their encodings are equal.
#[derive(Copy, Clone, Hash)]
pub struct CompressedDecaf(pub [u8; 56]);

impl ConstantTimeEq for CompressedDecaf {
    fn ct_eq(&self, other: &CompressedDecaf) -> Choice {
        self.as_bytes().ct_eq(other.as_bytes())
    }
}

impl Eq for CompressedDecaf {}
impl PartialEq for CompressedDecaf {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl CompressedDecaf {
    /// Copy the bytes of this `CompressedDecaf`.
    pub const fn to_bytes(&self) -> [u8; 56] {
        self.0
    }

    /// View this `CompressedDecaf` as an array of bytes.
    pub const fn as_bytes(&self) -> &[u8; 56] {
        &self.0
    }

    /// Construct a `CompressedDecaf` from a slice of bytes.
    ///
    /// # Errors
    ///
    /// Returns [`TryFromSliceError`] if the input `bytes` slice does not
    /// have a length of 56.
    pub fn from_slice(bytes: &[u8]) -> Result<CompressedDecaf, TryFromSliceError> {
        bytes.try_into().map(CompressedDecaf)
    }

    /// Attempt to decompress to a `DecafPoint`.
    ///
    /// The all-zero string decodes to the identity element; every other
    /// accepted string decodes to a non-identity element.
    ///
    /// # Return
    ///
    /// - `Some(DecafPoint)` if `self` was the canonical encoding of a
    ///   point;
    ///
    /// - `None` if `self` was not the canonical encoding of a point:
    ///   the field element was unreduced or negative, or the decoded
    ///   value is not on the Jacobi quartic.
    pub fn decompress(&self) -> Option<DecafPoint> {
        let (ok, point) = self.decompress_with_identity_policy(Choice::from(1));
        if ok.into() {
            Some(point)
        } else {
            None
        }
    }

    /// Decompress, with an explicit mask deciding whether the identity
    /// encoding is acceptable.
    ///
    /// Callers for which a neutral public key or ciphertext component is
    /// an error (small-subgroup-style checks) pass an unset
    /// `allow_identity`.  The output point is always populated; the
    /// caller must consume the returned `Choice`, in constant time if
    /// the input was secret.
    pub(crate) fn decompress_with_identity_policy(
        &self,
        allow_identity: Choice,
    ) -> (Choice, DecafPoint) {
        let one = FieldElement::ONE;
        let (s, s_canonical) = FieldElement::from_bytes(self.as_bytes());
        let s_is_zero = s.is_zero();

        let mut ok = s_canonical;
        ok &= allow_identity | !s_is_zero;
        ok &= !s.is_negative();

        // t^2 = (1 + s^2)^2 - 4 d s^2, as s^2 (1 - s^2)^2 t^2 under the
        // inverse square root.
        let ss = s.square();
        let Z = &one - &ss;
        let ZZ = Z.square();
        let c = &ss.mul_word(constants::FOUR_MINUS_FOUR_D) + &ZZ;
        let b = &c * &ss;

        let (_, mut isr) = b.invsqrt();

        // isr^2 * b is 1 or 0 for acceptable inputs and -1 for
        // nonsquares, so failure shows up as isr^2 b + 1 = 0.
        let check = &(&isr.square() * &b) + &one;
        ok &= !check.is_zero();

        let sign_check = &c * &isr;
        isr.conditional_negate(sign_check.is_negative());

        let X = &s + &s;
        let half_inv_t = &isr * &s;
        let two_minus_Z = &(&one + &one) - &Z;
        let y_num = &two_minus_Z * &half_inv_t;
        let mut Y = &y_num * &Z;
        let T = &X * &y_num;

        Y.conditional_assign(&one, s_is_zero);

        (ok, DecafPoint(EdwardsPoint { X, Y, Z, T }))
    }
}

impl Identity for CompressedDecaf {
    fn identity() -> CompressedDecaf {
        CompressedDecaf([0u8; 56])
    }
}

impl Default for CompressedDecaf {
    fn default() -> CompressedDecaf {
        CompressedDecaf::identity()
    }
}

impl TryFrom<&[u8]> for CompressedDecaf {
    type Error = TryFromSliceError;

    fn try_from(slice: &[u8]) -> Result<CompressedDecaf, TryFromSliceError> {
        Self::from_slice(slice)
    }
}

impl core::fmt::Debug for CompressedDecaf {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "CompressedDecaf: {:?}", self.as_bytes())
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for CompressedDecaf {
    /// Reset this encoding to the (all-zero) identity encoding.
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

// ------------------------------------------------------------------------
// Internal point representation
// ------------------------------------------------------------------------

/// A `DecafPoint` represents a point in the Decaf448 group, the
/// prime-order quotient of Ed448-Goldilocks.
///
/// Internally, a `DecafPoint` is a wrapper type around `EdwardsPoint`,
/// with custom equality, compression, and decompression routines to
/// account for the quotient.  This means that operations on
/// `DecafPoint`s are exactly as fast as operations on `EdwardsPoint`s.
#[derive(Copy, Clone)]
pub struct DecafPoint(pub(crate) EdwardsPoint);

impl DecafPoint {
    /// Compress this point using the Decaf encoding.
    ///
    /// The encoding selects, among the coset's representatives, the
    /// Jacobi-quartic \\(s\\) coordinate whose canonical representative
    /// is non-negative, and serializes that field element; the identity
    /// encodes to the all-zero string, and the high bit of the last
    /// byte is always zero.
    pub fn compress(&self) -> CompressedDecaf {
        let (X, Y, Z, T) = (&self.0.X, &self.0.Y, &self.0.Z, &self.0.T);

        // (1 - d) Y T - X Z, the numerator of t/s up to the isr factor.
        let numerator = &(&Y.mul_word(constants::ONE_MINUS_D) * T) - &(X * Z);

        // isr = 1/sqrt(-d (Z - Y)(Z + Y)), always square for a valid
        // representative.
        let zy_product = &(Z - Y) * &(Z + Y);
        let (_, isr) = zy_product.mul_word(constants::MINUS_D).invsqrt();

        let mut u = isr.mul_word(constants::MINUS_D);
        let ratio = &(&u * &isr) * &numerator;

        // Choose the representative with non-negative 2uZ.
        let sign_check = &(&u + &u) * Z;
        u.conditional_negate(!sign_check.is_negative());

        let mut s = &ratio + &(&u * Y);
        let s_is_negative = s.is_negative();
        s.conditional_negate(s_is_negative);

        CompressedDecaf(s.as_bytes())
    }

    /// Return a `DecafPoint` chosen uniformly at random using a
    /// user-provided RNG.
    ///
    /// # Inputs
    ///
    /// * `rng`: any RNG which implements `CryptoRng` interface.
    ///
    /// # Returns
    ///
    /// A random element of the Decaf448 group.
    #[cfg(feature = "rand_core")]
    pub fn random<R: CryptoRng + ?Sized>(rng: &mut R) -> Self {
        let mut uniform_bytes = [0u8; 112];
        rng.fill_bytes(&mut uniform_bytes);
        DecafPoint::from_uniform_bytes(&uniform_bytes)
    }

    /// Hash a slice of bytes into a `DecafPoint`, using an extendable-
    /// output hash function as the random oracle.
    ///
    /// The hash is squeezed for 112 bytes which are mapped to the group
    /// with `from_uniform_bytes`; with a proper XOF (SHAKE256 is
    /// conventional for decaf448) the construction is indifferentiable
    /// from a random oracle into the group.
    #[cfg(feature = "digest")]
    pub fn hash_from_bytes<D>(input: &[u8]) -> DecafPoint
    where
        D: Default + Update + ExtendableOutput,
    {
        let mut hash = D::default();
        hash.update(input);
        Self::from_hash(hash)
    }

    /// Construct a `DecafPoint` from an existing XOF state.
    ///
    /// Use this instead of `hash_from_bytes` when the input is not a
    /// single slice, or carries domain-separation framing.
    #[cfg(feature = "digest")]
    pub fn from_hash<D>(hash: D) -> DecafPoint
    where
        D: ExtendableOutput,
    {
        let mut reader = hash.finalize_xof();
        let mut uniform_bytes = [0u8; 112];
        reader.read(&mut uniform_bytes);

        DecafPoint::from_uniform_bytes(&uniform_bytes)
    }

    /// Construct a `DecafPoint` from 112 bytes of uniformly random
    /// input, indifferentiably: the output distribution is
    /// computationally indistinguishable from uniform on the group.
    ///
    /// This is the sum of the nonuniform map applied to each 56-byte
    /// half.
    pub fn from_uniform_bytes(bytes: &[u8; 112]) -> DecafPoint {
        let (point, _hint) = DecafPoint::from_hash_uniform(bytes);
        point
    }

    /// The uniform hash-to-group map, returning the branch hints of both
    /// halves (first half in the low nibble).
    pub fn from_hash_uniform(bytes: &[u8; 112]) -> (DecafPoint, u8) {
        let chunk1: [u8; 56] = bytes[..56].try_into().unwrap();
        let chunk2: [u8; 56] = bytes[56..].try_into().unwrap();
        let (P1, hint1) = DecafPoint::from_hash_nonuniform(&chunk1);
        let (P2, hint2) = DecafPoint::from_hash_nonuniform(&chunk2);
        (&P1 + &P2, hint1 | (hint2 << 4))
    }

    /// Map 56 bytes to the group with the Elligator-2s construction on
    /// the Jacobi quartic.
    ///
    /// The map is roughly 2-to-1 (up to 8-to-1 at exceptional points):
    /// negating the input field element yields the same output point.
    /// The output is *not* uniform; use `from_uniform_bytes` for
    /// random-oracle instantiations.
    ///
    /// The returned hint records which branch of the inverse map leads
    /// back to the input:
    ///
    /// * bit 0 — the input selected the nonsquare branch (equivalently,
    ///   the sign of the quartic's \\(s\\) coordinate);
    /// * bit 1 — the sign of \\(t/s\\);
    /// * bit 2 — the sign of the input field element itself;
    /// * bit 3 — the input was unreduced (\\(\ge p\\)); the inverse map
    ///   cannot restore this and yields the reduced preimage.
    pub fn from_hash_nonuniform(bytes: &[u8; 56]) -> (DecafPoint, u8) {
        let one = FieldElement::ONE;
        let (r_0, r_0_canonical) = FieldElement::from_bytes(bytes);
        let over = !r_0_canonical;
        let sgn_r0 = r_0.is_negative();

        // r = -r_0^2; -1 is the canonical nonresidue for p = 3 mod 4.
        let r = -&r_0.square();

        // D = (d r + 1 - d)(d r - r - d), up to the identity special case.
        let d = -&FieldElement::from_u64(constants::MINUS_D as u64);
        let dr = &r * &d;
        let a = &(&dr - &d) + &one;
        let special_identity_case = a.is_zero();
        let b = &(&dr - &r) - &d;
        let D = &a * &b;

        // N = (r + 1)(1 - 2d)
        let N = (&r + &one).mul_word(constants::ONE_MINUS_TWO_D);

        let rN = &r * &N;
        let (mut square, e) = (&rN * &D).invsqrt();
        square |= r.is_zero();
        square |= special_identity_case;

        // t/s = e (sqr ? r : r_0)(1-2d)^2 (r - 1) - (1/s up to sign)
        let c = FieldElement::conditional_select(&r_0, &r, square);
        let mut t_over_s = &(&c
            .mul_word(constants::ONE_MINUS_TWO_D)
            .mul_word(constants::ONE_MINUS_TWO_D)
            * &(&r - &one))
            * &e;
        t_over_s.conditional_negate(!square);
        let c = FieldElement::conditional_select(&r_0, &one, square);
        let s_inv = &(&e * &c) * &D;
        let t_over_s = &t_over_s - &s_inv;

        // s = e N (sqr ? r : r_0)
        let nr0 = &N * &r_0;
        let rN = FieldElement::conditional_select(&nr0, &rN, square);
        let mut s = &rN * &e;
        let t = &s * &t_over_s;

        // Normalize signs: s ends up negative exactly on the nonsquare
        // branch, which is what lets the inverse identify the branch.
        let neg_s = s.is_negative() ^ !square;
        s.conditional_negate(neg_s);
        let mut sgn_t_over_s = t_over_s.is_negative() ^ neg_s;
        sgn_t_over_s &= !N.is_zero();
        sgn_t_over_s |= D.is_zero();

        // (s, t) = (0, 0) represents the identity as (0, 1).
        let t = FieldElement::conditional_select(&t, &one, t.is_zero());

        // Push (s, t) through the quartic-to-Edwards isogeny.
        let ss = s.square();
        let two_s = &s + &s;
        let ss_plus_1 = &ss + &one;
        let one_minus_ss = &one - &ss;
        let point = EdwardsPoint {
            X: &two_s * &t,
            Y: &ss_plus_1 * &one_minus_ss,
            Z: &one_minus_ss * &t,
            T: &two_s * &ss_plus_1,
        };

        let hint = (!square).unwrap_u8()
            | (sgn_t_over_s.unwrap_u8() << 1)
            | (sgn_r0.unwrap_u8() << 2)
            | (over.unwrap_u8() << 3);

        (DecafPoint(point), hint)
    }

    /// Attempt to invert the nonuniform map: find the input whose image
    /// under `from_hash_nonuniform` is this point, on the branch encoded
    /// by `hint`.
    ///
    /// Fails (with an unset `Choice` in the `CtOption`) when the chosen
    /// branch has no preimage for this point.  Bit 3 of the hint
    /// (input overflow) is advisory and ignored, so inputs \\(\ge p\\)
    /// recover as their reduced representative.
    pub fn invert_elligator_nonuniform(&self, hint: u8) -> CtOption<[u8; 56]> {
        let one = FieldElement::ONE;
        let sgn_s = Choice::from(hint & 1);
        let sgn_t_over_s = Choice::from((hint >> 1) & 1);
        let sgn_r0 = Choice::from((hint >> 2) & 1);

        let (X, Y, Z, T) = (&self.0.X, &self.0.Y, &self.0.Z, &self.0.T);

        // Recover s and -t/s exactly as the encoder does.
        let numerator = &(&Y.mul_word(constants::ONE_MINUS_D) * T) - &(X * Z);
        let zy_product = &(Z - Y) * &(Z + Y);
        let (_, isr) = zy_product.mul_word(constants::MINUS_D).invsqrt();
        let mut u = isr.mul_word(constants::MINUS_D);
        let ratio = &(&u * &isr) * &numerator;
        let mut sign_check = &(&u + &u) * Z;

        let flip = sgn_t_over_s ^ !sign_check.is_negative();
        u.conditional_negate(flip);
        sign_check.conditional_negate(flip);

        let mut s = &ratio + &(&u * Y);
        s.conditional_negate(s.is_negative() ^ sgn_s);

        // b = t + 1, c = s^2, with identity adjustments so that the
        // identity inverts along the branches that have preimages.
        let mut b = &one - &(&sign_check * &s);
        let mut c = s.square();
        let is_identity = X.is_zero();
        c.conditional_assign(&one, is_identity & sgn_t_over_s);
        b.conditional_assign(&FieldElement::ZERO, is_identity & !sgn_t_over_s & !sgn_s);

        // r_0^2 = +-(t + 1 +- (2d - 1) s^2) up to the branch choice.
        let d_term = -&c.mul_word(constants::ONE_MINUS_TWO_D);
        let num = &b + &d_term;
        let den = &b - &d_term;
        let num_times_den = &num * &den;
        let picked = FieldElement::conditional_select(&den, &num, sgn_s);

        let (was_square, r) = num_times_den.invsqrt();
        let ok = was_square | num_times_den.is_zero();

        let mut recovered = &picked * &r;
        recovered.conditional_negate(sgn_r0 ^ recovered.is_negative());

        let ok = ok & !(recovered.is_zero() & sgn_r0);

        CtOption::new(recovered.as_bytes(), ok)
    }

    /// Attempt to invert the uniform map.
    ///
    /// `partial_hash` supplies the second 56-byte half; the first half
    /// is recovered so that the two halves together map back to this
    /// point.  The hint's low nibble selects the branch for the
    /// recovered half, as in `invert_elligator_nonuniform`.
    pub fn invert_elligator_uniform(&self, partial_hash: &[u8; 112], hint: u8) -> CtOption<[u8; 112]> {
        let chunk2: [u8; 56] = partial_hash[56..].try_into().unwrap();
        let (P2, _) = DecafPoint::from_hash_nonuniform(&chunk2);
        let remainder = self - &P2;
        let recovered = remainder.invert_elligator_nonuniform(hint);
        let ok = recovered.is_some();
        let mut out = *partial_hash;
        out[..56].copy_from_slice(&recovered.unwrap_or([0u8; 56]));
        CtOption::new(out, ok)
    }

    /// Decode, multiply, and re-encode, in one call: compute
    /// `scalar * B` for the point `B` encoded by `bytes`.
    ///
    /// The multiplication itself is constant-time in the scalar.  With
    /// `short_circuit` set, an invalid encoding returns failure
    /// immediately (leaking only the public fact that the encoding was
    /// invalid); otherwise the routine runs to completion on dummy
    /// values and the failure surfaces only in the returned mask.
    pub fn direct_scalarmul(
        bytes: &[u8; 56],
        scalar: &Scalar,
        allow_identity: Choice,
        short_circuit: Choice,
    ) -> CtOption<[u8; 56]> {
        let (ok, point) =
            CompressedDecaf(*bytes).decompress_with_identity_policy(allow_identity);
        if (short_circuit & !ok).into() {
            return CtOption::new([0u8; 56], Choice::from(0));
        }
        let scaled = &point * scalar;
        CtOption::new(scaled.compress().to_bytes(), ok)
    }

    /// Compute \\(aA + bB\\) in variable time, where \\(B\\) is the
    /// Decaf448 basepoint.
    ///
    /// This is intended for verification equations where both scalars
    /// and both points are public; it must not be used with secret
    /// scalars.
    pub fn vartime_double_scalar_mul_basepoint(
        a: &Scalar,
        A: &DecafPoint,
        b: &Scalar,
    ) -> DecafPoint {
        DecafPoint(EdwardsPoint::vartime_double_scalar_mul_basepoint(a, &A.0, b))
    }

    /// Fixed-base scalar multiplication by the Decaf448 basepoint.
    ///
    /// Uses the baked comb table when the `precomputed-tables` feature
    /// is enabled, and the variable-base ladder otherwise.
    pub fn mul_base(scalar: &Scalar) -> Self {
        DecafPoint(EdwardsPoint::mul_base(scalar))
    }
}

impl Identity for DecafPoint {
    fn identity() -> DecafPoint {
        DecafPoint(EdwardsPoint::identity())
    }
}

impl Default for DecafPoint {
    fn default() -> DecafPoint {
        DecafPoint::identity()
    }
}

impl core::fmt::Debug for DecafPoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "DecafPoint: {:?}", self.compress())
    }
}

impl ValidityCheck for DecafPoint {
    fn is_valid(&self) -> bool {
        self.0.is_valid()
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for DecafPoint {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

// ------------------------------------------------------------------------
// Equality
// ------------------------------------------------------------------------

impl ConstantTimeEq for DecafPoint {
    /// Test equality between two `DecafPoint`s.
    ///
    /// The check covers the torsion quotient:
    /// \\(X_1 Y_2 = X_2 Y_1 \lor X_1 X_2 + Y_1 Y_2 = 0\\).
    ///
    /// # Returns
    ///
    /// * `Choice(1)` if the two `DecafPoint`s are equal;
    /// * `Choice(0)` otherwise.
    fn ct_eq(&self, other: &DecafPoint) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl PartialEq for DecafPoint {
    fn eq(&self, other: &DecafPoint) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for DecafPoint {}

impl ConditionallySelectable for DecafPoint {
    fn conditional_select(a: &DecafPoint, b: &DecafPoint, choice: Choice) -> DecafPoint {
        DecafPoint(EdwardsPoint::conditional_select(&a.0, &b.0, choice))
    }
}

// ------------------------------------------------------------------------
// Arithmetic
// ------------------------------------------------------------------------

impl<'a> Add<&'a DecafPoint> for &DecafPoint {
    type Output = DecafPoint;

    fn add(self, other: &'a DecafPoint) -> DecafPoint {
        DecafPoint(&self.0 + &other.0)
    }
}

define_add_variants!(LHS = DecafPoint, RHS = DecafPoint, Output = DecafPoint);

impl<'a> AddAssign<&'a DecafPoint> for DecafPoint {
    fn add_assign(&mut self, _rhs: &'a DecafPoint) {
        *self = (self as &DecafPoint) + _rhs;
    }
}

define_add_assign_variants!(LHS = DecafPoint, RHS = DecafPoint);

impl<'a> Sub<&'a DecafPoint> for &DecafPoint {
    type Output = DecafPoint;

    fn sub(self, other: &'a DecafPoint) -> DecafPoint {
        DecafPoint(&self.0 - &other.0)
    }
}

define_sub_variants!(LHS = DecafPoint, RHS = DecafPoint, Output = DecafPoint);

impl<'a> SubAssign<&'a DecafPoint> for DecafPoint {
    fn sub_assign(&mut self, _rhs: &'a DecafPoint) {
        *self = (self as &DecafPoint) - _rhs;
    }
}

define_sub_assign_variants!(LHS = DecafPoint, RHS = DecafPoint);

impl<T> Sum<T> for DecafPoint
where
    T: Borrow<DecafPoint>,
{
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        iter.fold(DecafPoint::identity(), |acc, item| acc + item.borrow())
    }
}

impl Neg for &DecafPoint {
    type Output = DecafPoint;

    fn neg(self) -> DecafPoint {
        DecafPoint(-&self.0)
    }
}

impl Neg for DecafPoint {
    type Output = DecafPoint;

    fn neg(self) -> DecafPoint {
        -&self
    }
}

impl<'a> MulAssign<&'a Scalar> for DecafPoint {
    fn mul_assign(&mut self, scalar: &'a Scalar) {
        let result = (self as &DecafPoint) * scalar;
        *self = result;
    }
}

impl<'a> Mul<&'a Scalar> for &DecafPoint {
    type Output = DecafPoint;

    /// Scalar multiplication: compute `scalar * self`, in constant time.
    fn mul(self, scalar: &'a Scalar) -> DecafPoint {
        DecafPoint(&self.0 * scalar)
    }
}

impl<'a> Mul<&'a DecafPoint> for &Scalar {
    type Output = DecafPoint;

    /// Scalar multiplication: compute `self * point`, in constant time.
    fn mul(self, point: &'a DecafPoint) -> DecafPoint {
        DecafPoint(self * &point.0)
    }
}

define_mul_assign_variants!(LHS = DecafPoint, RHS = Scalar);

define_mul_variants!(LHS = DecafPoint, RHS = Scalar, Output = DecafPoint);
define_mul_variants!(LHS = Scalar, RHS = DecafPoint, Output = DecafPoint);

// ------------------------------------------------------------------------
// Precomputed tables
// ------------------------------------------------------------------------

/// A precomputed comb table of multiples of a basepoint, for
/// accelerating fixed-base scalar multiplication.
///
/// This table uses the comb parameters \\((n, t, s) = (5, 5, 18)\\):
/// five combs of five teeth at spacing 18, i.e. 80 precomputed points
/// and a cost of 17 doublings plus 90 additions per multiplication.
/// One table, for the Decaf448 basepoint, is provided in the
/// [`constants`] module.
#[cfg(feature = "precomputed-tables")]
#[derive(Clone)]
pub struct DecafBasepointTable {
    pub(crate) table: [NielsPoint; 80],
    pub(crate) adjustment: Scalar64,
}

#[cfg(feature = "precomputed-tables")]
impl BasepointTable for DecafBasepointTable {
    type Point = DecafPoint;

    fn create(basepoint: &DecafPoint) -> DecafBasepointTable {
        let placeholder = NielsPoint {
            y_plus_x: FieldElement::ONE,
            y_minus_x: FieldElement::ONE,
            td: FieldElement::ZERO,
        };
        let mut table = [placeholder; 80];
        let mut zs = [FieldElement::ONE; 80];
        let mut zis = [FieldElement::ONE; 80];
        comb_precompute(&basepoint.0, 5, 5, 18, &mut table, &mut zs, &mut zis);

        DecafBasepointTable {
            table,
            adjustment: comb_adjustment(5, 5, 18),
        }
    }

    fn basepoint(&self) -> DecafPoint {
        self.mul_base(&Scalar::ONE)
    }

    fn mul_base(&self, scalar: &Scalar) -> DecafPoint {
        DecafPoint(comb_mul(&self.table, 5, 5, 18, &self.adjustment, scalar))
    }
}

#[cfg(feature = "precomputed-tables")]
impl<'a, 'b> Mul<&'b Scalar> for &'a DecafBasepointTable {
    type Output = DecafPoint;

    fn mul(self, scalar: &'b Scalar) -> DecafPoint {
        self.mul_base(scalar)
    }
}

#[cfg(feature = "precomputed-tables")]
impl<'a, 'b> Mul<&'a DecafBasepointTable> for &'b Scalar {
    type Output = DecafPoint;

    fn mul(self, basepoint_table: &'a DecafBasepointTable) -> DecafPoint {
        basepoint_table.mul_base(self)
    }
}

/// A heap-allocated comb table with caller-chosen parameters
/// \\((n, t, s)\\), subject to \\(n \cdot t \cdot s \ge 446\\) and
/// \\(1 \le t \le 8\\).
///
/// Larger \\(n \cdot 2\^{t-1}\\) trades memory for fewer additions;
/// the `DecafBasepointTable` parameters are a reasonable default.
#[cfg(feature = "alloc")]
pub struct DecafCombTable {
    n: usize,
    t: usize,
    s: usize,
    table: Vec<NielsPoint>,
    adjustment: Scalar64,
}

#[cfg(feature = "alloc")]
impl DecafCombTable {
    /// Precompute a comb table for `basepoint`.
    ///
    /// # Panics
    ///
    /// Panics if the comb parameters do not cover 446 scalar bits or
    /// the tooth count is out of range.
    pub fn new(basepoint: &DecafPoint, n: usize, t: usize, s: usize) -> DecafCombTable {
        let placeholder = NielsPoint {
            y_plus_x: FieldElement::ONE,
            y_minus_x: FieldElement::ONE,
            td: FieldElement::ZERO,
        };
        let mut table = vec![placeholder; n << (t - 1)];
        let mut zs = vec![FieldElement::ONE; n << (t - 1)];
        let mut zis = vec![FieldElement::ONE; n << (t - 1)];
        comb_precompute(&basepoint.0, n, t, s, &mut table, &mut zs, &mut zis);

        DecafCombTable {
            n,
            t,
            s,
            table,
            adjustment: comb_adjustment(n, t, s),
        }
    }

    /// Retrieve the original basepoint of this table.
    pub fn basepoint(&self) -> DecafPoint {
        self.mul_base(&Scalar::ONE)
    }

    /// Multiply `scalar` by this table's basepoint, in constant time.
    pub fn mul_base(&self, scalar: &Scalar) -> DecafPoint {
        DecafPoint(comb_mul(
            &self.table,
            self.n,
            self.t,
            self.s,
            &self.adjustment,
            scalar,
        ))
    }
}

#[cfg(feature = "alloc")]
impl<'a, 'b> Mul<&'b Scalar> for &'a DecafCombTable {
    type Output = DecafPoint;

    fn mul(self, scalar: &'b Scalar) -> DecafPoint {
        self.mul_base(scalar)
    }
}

// ------------------------------------------------------------------------
// Serde support
// ------------------------------------------------------------------------
// Serializes to and from `DecafPoint` directly, doing compression
// and decompression internally.  This means that users can create
// structs containing `DecafPoint`s and use Serde's derived
// serializers to serialize those structures.

#[cfg(feature = "serde")]
use serde::de::Visitor;
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[cfg(feature = "serde")]
impl Serialize for DecafPoint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeTuple;
        let mut tup = serializer.serialize_tuple(56)?;
        for byte in self.compress().as_bytes().iter() {
            tup.serialize_element(byte)?;
        }
        tup.end()
    }
}

#[cfg(feature = "serde")]
impl Serialize for CompressedDecaf {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeTuple;
        let mut tup = serializer.serialize_tuple(56)?;
        for byte in self.as_bytes().iter() {
            tup.serialize_element(byte)?;
        }
        tup.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for DecafPoint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DecafPointVisitor;

        impl<'de> Visitor<'de> for DecafPointVisitor {
            type Value = DecafPoint;

            fn expecting(&self, formatter: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                formatter.write_str("a valid point in Decaf448 format")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<DecafPoint, A::Error>
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
                CompressedDecaf(bytes)
                    .decompress()
                    .ok_or_else(|| serde::de::Error::custom("decompression failed"))
            }
        }

        deserializer.deserialize_tuple(56, DecafPointVisitor)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for CompressedDecaf {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CompressedDecafVisitor;

        impl<'de> Visitor<'de> for CompressedDecafVisitor {
            type Value = CompressedDecaf;

            fn expecting(&self, formatter: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                formatter.write_str("56 bytes of data")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<CompressedDecaf, A::Error>
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
                Ok(CompressedDecaf(bytes))
            }
        }

        deserializer.deserialize_tuple(56, CompressedDecafVisitor)
    }
}

// ------------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::scalar::test::{deterministic_scalars, Q_BYTES};

    fn deterministic_byte_strings() -> impl Iterator<Item = [u8; 56]> {
        let mut state = 0x2545_f491_4f6c_dd1du64;
        core::iter::repeat_with(move || {
            let mut bytes = [0u8; 56];
            for b in bytes.iter_mut() {
                state ^= state << 13;
                state ^= state >> 7;
                state ^= state << 17;
                *b = state as u8;
            }
            // Stay below p so the overflow hint bit is exercised by its
            // own test, not at random.
            bytes[55] &= 0x7f;
            bytes
        })
    }

    fn deterministic_points() -> impl Iterator<Item = DecafPoint> {
        deterministic_byte_strings().map(|b| DecafPoint::from_hash_nonuniform(&b).0)
    }

    #[test]
    fn basepoint_encoding_vector() {
        // The RFC 9496 generator: 28 bytes of 0x66 then 28 bytes of 0x33.
        let expected = "66".repeat(28) + &"33".repeat(28);
        assert_eq!(
            hex::encode(constants::DECAF_BASEPOINT.compress().to_bytes()),
            expected
        );
        assert_eq!(
            hex::encode(constants::DECAF_BASEPOINT_COMPRESSED.to_bytes()),
            expected
        );

        let decoded = constants::DECAF_BASEPOINT_COMPRESSED
            .decompress()
            .unwrap();
        assert_eq!(decoded, constants::DECAF_BASEPOINT);
    }

    #[test]
    fn identity_encoding() {
        // The identity encodes to the zero string...
        assert_eq!(
            DecafPoint::identity().compress(),
            CompressedDecaf::identity()
        );
        // ...and the zero string decodes to the identity,
        let id = CompressedDecaf::identity().decompress().unwrap();
        assert_eq!(id, DecafPoint::identity());
        // ...unless the caller's policy rejects it.
        let (ok, _) = CompressedDecaf::identity()
            .decompress_with_identity_policy(Choice::from(0));
        assert!(!bool::from(ok));
    }

    #[test]
    fn compress_decompress_round_trip() {
        for p in deterministic_points().take(32) {
            assert!(p.is_valid());
            let compressed = p.compress();
            let q = compressed.decompress().unwrap();
            assert_eq!(p, q);
            // Canonicity: re-encoding is bit-identical.
            assert_eq!(q.compress(), compressed);
        }
    }

    #[test]
    fn decompress_rejects_negative_and_unreduced() {
        let p = deterministic_points().next().unwrap();
        let s_bytes = p.compress().to_bytes();

        // -s is the negative representative of the same field element,
        // so its encoding must be rejected as non-canonical.
        let (s, _) = FieldElement::from_bytes(&s_bytes);
        assert!(CompressedDecaf((-&s).as_bytes()).decompress().is_none());

        // The encoding of p itself is unreduced.
        let mut p_bytes = [0xffu8; 56];
        p_bytes[28] = 0xfe;
        assert!(CompressedDecaf(p_bytes).decompress().is_none());
    }

    #[test]
    fn group_operations() {
        let pts: Vec<DecafPoint> = deterministic_points().take(6).collect();
        for w in pts.chunks(3) {
            let (p, q, r) = (w[0], w[1], w[2]);
            assert_eq!(p + q, q + p);
            assert_eq!((p + q) + r, p + (q + r));
            assert_eq!(p + DecafPoint::identity(), p);
            assert_eq!(p + (-p), DecafPoint::identity());
            assert_eq!(p - q, p + (-q));

            let mut acc = p;
            acc += q;
            acc -= q;
            assert_eq!(acc, p);
        }

        let total: DecafPoint = pts.iter().sum();
        let mut expected = DecafPoint::identity();
        for p in &pts {
            expected = expected + p;
        }
        assert_eq!(total, expected);
    }

    #[test]
    fn scalar_mul_matches_small_multiples() {
        let b = constants::DECAF_BASEPOINT;
        assert_eq!(b * Scalar::ZERO, DecafPoint::identity());
        assert_eq!(b * Scalar::ONE, b);
        assert_eq!(b * Scalar::from(2u8), b + b);
        assert_eq!(Scalar::from(2u8) * b, b + b);

        // q * B is the identity after the scalar reduces.
        let q_scalar = Scalar::from_bytes_mod_order(Q_BYTES);
        assert_eq!(q_scalar, Scalar::ZERO);
        assert_eq!(b * q_scalar, DecafPoint::identity());
    }

    #[cfg(feature = "precomputed-tables")]
    #[test]
    fn basepoint_table_matches_variable_base() {
        let table = constants::DECAF_BASEPOINT_TABLE;
        assert_eq!(table.basepoint(), constants::DECAF_BASEPOINT);
        for s in deterministic_scalars().take(16) {
            assert_eq!(table * &s, constants::DECAF_BASEPOINT * s);
        }
    }

    #[cfg(feature = "precomputed-tables")]
    #[test]
    fn runtime_table_creation_matches_baked_table() {
        let p = deterministic_points().nth(7).unwrap();
        let table = DecafBasepointTable::create(&p);
        assert_eq!(table.basepoint(), p);
        for s in deterministic_scalars().take(8) {
            assert_eq!(table.mul_base(&s), p * s);
        }
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn comb_table_with_other_parameters() {
        // Smaller table, wider spacing: (3, 5, 30) covers 450 bits.
        let p = deterministic_points().nth(3).unwrap();
        let table = DecafCombTable::new(&p, 3, 5, 30);
        assert_eq!(table.basepoint(), p);
        for s in deterministic_scalars().take(16) {
            assert_eq!(&table * &s, p * s);
        }
    }

    #[test]
    fn vartime_double_scalar_matches_sequential() {
        let b = constants::DECAF_BASEPOINT;
        let p = deterministic_points().nth(11).unwrap();
        for w in deterministic_scalars().take(16).collect::<Vec<_>>().chunks(2) {
            let (s1, s2) = (w[0], w[1]);
            let fast = DecafPoint::vartime_double_scalar_mul_basepoint(&s1, &p, &s2);
            let slow = b * s1 + p * s2;
            assert_eq!(fast, slow);
        }
    }

    #[test]
    fn elligator_outputs_are_valid() {
        for bytes in deterministic_byte_strings().take(32) {
            let (p, _) = DecafPoint::from_hash_nonuniform(&bytes);
            assert!(p.is_valid());
        }
    }

    #[test]
    fn elligator_is_even() {
        // Negating the input field element gives the same point.
        for bytes in deterministic_byte_strings().take(16) {
            let (r_0, _) = FieldElement::from_bytes(&bytes);
            let neg_bytes = (-&r_0).as_bytes();
            let (p1, _) = DecafPoint::from_hash_nonuniform(&bytes);
            let (p2, _) = DecafPoint::from_hash_nonuniform(&neg_bytes);
            assert_eq!(p1, p2);
        }
    }

    #[test]
    fn elligator_inverse_round_trip() {
        let mut hits = 0;
        let total = 64;
        for bytes in deterministic_byte_strings().take(total) {
            let (p, hint) = DecafPoint::from_hash_nonuniform(&bytes);
            let recovered = p.invert_elligator_nonuniform(hint);
            if bool::from(recovered.is_some()) && recovered.unwrap() == bytes {
                hits += 1;
            }
        }
        // Inputs at the hint boundaries may fail to round-trip; in
        // practice nearly all do.
        assert!(hits >= total - 1, "only {hits}/{total} round-tripped");
    }

    #[test]
    fn elligator_inverse_images_remap_to_point() {
        // Whenever inversion succeeds, the recovered string maps back.
        for bytes in deterministic_byte_strings().take(16) {
            let (p, _) = DecafPoint::from_hash_nonuniform(&bytes);
            for hint in 0..8u8 {
                let recovered = p.invert_elligator_nonuniform(hint);
                if bool::from(recovered.is_some()) {
                    let (q, _) = DecafPoint::from_hash_nonuniform(&recovered.unwrap());
                    assert_eq!(p, q);
                }
            }
        }
    }

    #[test]
    fn uniform_map_is_sum_of_halves() {
        let mut wide = [0u8; 112];
        for (i, half) in deterministic_byte_strings().take(2).enumerate() {
            wide[56 * i..56 * (i + 1)].copy_from_slice(&half);
        }
        let p = DecafPoint::from_uniform_bytes(&wide);
        assert!(p.is_valid());

        let first: [u8; 56] = wide[..56].try_into().unwrap();
        let second: [u8; 56] = wide[56..].try_into().unwrap();
        let (p1, _) = DecafPoint::from_hash_nonuniform(&first);
        let (p2, _) = DecafPoint::from_hash_nonuniform(&second);
        assert_eq!(p, p1 + p2);
    }

    #[test]
    fn uniform_inverse_round_trip() {
        let mut wide = [0u8; 112];
        for (i, half) in deterministic_byte_strings().skip(5).take(2).enumerate() {
            wide[56 * i..56 * (i + 1)].copy_from_slice(&half);
        }
        let (p, hint) = DecafPoint::from_hash_uniform(&wide);
        let recovered = p.invert_elligator_uniform(&wide, hint & 0x0f);
        if bool::from(recovered.is_some()) {
            let (q, _) = DecafPoint::from_hash_uniform(&recovered.unwrap());
            assert_eq!(p, q);
        }
    }

    #[test]
    fn direct_scalarmul_agrees_with_operators() {
        let p = deterministic_points().nth(2).unwrap();
        let s = deterministic_scalars().next().unwrap();
        let result = DecafPoint::direct_scalarmul(
            &p.compress().to_bytes(),
            &s,
            Choice::from(0),
            Choice::from(1),
        );
        assert_eq!(result.unwrap(), (p * s).compress().to_bytes());

        // Invalid encodings fail.
        let mut bad = [0xffu8; 56];
        bad[28] = 0xfe; // p itself: unreduced
        let result =
            DecafPoint::direct_scalarmul(&bad, &s, Choice::from(1), Choice::from(1));
        assert!(bool::from(result.is_none()));

        // The identity is rejected when the policy says so.
        let result = DecafPoint::direct_scalarmul(
            &[0u8; 56],
            &s,
            Choice::from(0),
            Choice::from(1),
        );
        assert!(bool::from(result.is_none()));
    }

    #[test]
    fn scalar_mul_distributes() {
        let p = deterministic_points().nth(9).unwrap();
        for w in deterministic_scalars().take(8).collect::<Vec<_>>().chunks(2) {
            let (s1, s2) = (w[0], w[1]);
            assert_eq!(p * (s1 + s2), p * s1 + p * s2);
        }
    }

    #[cfg(feature = "digest")]
    #[test]
    fn hash_from_bytes_is_deterministic() {
        use sha3::Shake256;
        let p1 = DecafPoint::hash_from_bytes::<Shake256>(b"test domain sep");
        let p2 = DecafPoint::hash_from_bytes::<Shake256>(b"test domain sep");
        let p3 = DecafPoint::hash_from_bytes::<Shake256>(b"different input");
        assert_eq!(p1, p2);
        assert_ne!(p1, p3);
        assert!(p1.is_valid());
    }

    #[cfg(feature = "rand_core")]
    #[test]
    fn random_points_are_valid() {
        let mut rng = rand::rng();
        let p = DecafPoint::random(&mut rng);
        let q = DecafPoint::random(&mut rng);
        assert!(p.is_valid() && q.is_valid());
        assert_ne!(p, q);
        assert_eq!(p.compress().decompress().unwrap(), p);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_bincode_round_trip() {
        let p = deterministic_points().next().unwrap();
        let encoded = bincode::serialize(&p).unwrap();
        assert_eq!(encoded.len(), 56);
        let decoded: DecafPoint = bincode::deserialize(&encoded).unwrap();
        assert_eq!(decoded, p);

        let compressed: CompressedDecaf = bincode::deserialize(&encoded).unwrap();
        assert_eq!(compressed, p.compress());

        // Non-canonical bytes fail to deserialize as a point.
        let mut bad = [0xffu8; 56];
        bad[28] = 0xfe;
        assert!(bincode::deserialize::<DecafPoint>(&bad).is_err());
    }
}
