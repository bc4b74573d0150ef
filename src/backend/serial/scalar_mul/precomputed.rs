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

//! Fixed-base scalar multiplication with signed combs.
//!
//! A comb table with parameters \\((n, t, s)\\), \\(n \cdot t \cdot s
//! \ge 446\\), holds \\(n \cdot 2\^{t-1}\\) affine Niels points: comb
//! \\(j\\) covers the \\(t \cdot s\\) bit positions \\([jts, (j+1)ts)\\)
//! of the recoded scalar, with its \\(t\\) teeth spaced \\(s\\) bits
//! apart, so a multiplication costs \\(s - 1\\) doublings and \\(n \cdot
//! s\\) mixed additions.
//!
//! The recoding is the same adjust-and-halve trick as the variable-base
//! ladder: add \\(2\^{nts} - 1 \bmod q\\), halve mod \\(q\\), and then
//! read every bit of the result as a signed \\(\pm 1\\) digit (top tooth
//! folded sign-magnitude).

use subtle::{Choice, ConditionallyNegatable, ConditionallySelectable, ConstantTimeEq};

use crate::backend::serial::curve_models::NielsPoint;
use crate::backend::serial::u64::scalar::Scalar64;
use crate::edwards::EdwardsPoint;
use crate::field::FieldElement;
use crate::scalar::Scalar;
use crate::traits::Identity;

#[cfg(feature = "precomputed-tables")]
use crate::backend::serial::u64::constants;

/// Constant-time lookup in one comb's slice of the table.
fn select(table: &[NielsPoint], index: u64) -> NielsPoint {
    let mut t = table[0];
    for (i, entry) in table.iter().enumerate().skip(1) {
        t.conditional_assign(entry, (i as u64).ct_eq(&index));
    }
    t
}

/// The scalar recoding adjustment for an \\((n, t, s)\\) comb:
/// \\(2\^{nts} - 1 \bmod q\\).
pub(crate) fn comb_adjustment(n: usize, t: usize, s: usize) -> Scalar64 {
    let mut power = Scalar64::ONE;
    for _ in 0..n * t * s {
        power = Scalar64::add(&power, &power);
    }
    Scalar64::sub(&power, &Scalar64::ONE)
}

/// Multiply `scalar` by the base point held in `table`, in constant time.
pub(crate) fn comb_mul(
    table: &[NielsPoint],
    n: usize,
    t: usize,
    s: usize,
    adjustment: &Scalar64,
    scalar: &Scalar,
) -> EdwardsPoint {
    debug_assert_eq!(table.len(), n << (t - 1));

    let recoded = Scalar64::add(&scalar.0, adjustment).halve();

    let mut acc = EdwardsPoint::identity();
    for i in (0..s).rev() {
        if i != s - 1 {
            acc = acc.double();
        }

        for j in 0..n {
            // Gather this comb's t teeth, one bit every s positions.
            let mut tab: u64 = 0;
            for k in 0..t {
                let bit = i + s * (k + j * t);
                if bit < 446 {
                    tab |= recoded.bit(bit) << k;
                }
            }

            // Sign-magnitude fold on the top tooth.
            let invert = (tab >> (t - 1)).wrapping_sub(1);
            tab ^= invert;
            tab &= (1 << (t - 1)) - 1;

            let mut ni = select(&table[j << (t - 1)..(j + 1) << (t - 1)], tab);
            ni.conditional_negate(Choice::from((invert & 1) as u8));

            if i != s - 1 || j != 0 {
                acc = &acc + &ni;
            } else {
                acc = ni.as_extended();
            }
        }
    }

    acc
}

/// Multiply `scalar` by the decaf448 basepoint using the baked
/// \\((5, 5, 18)\\) comb table.
#[cfg(feature = "precomputed-tables")]
pub(crate) fn basepoint_comb_mul(scalar: &Scalar) -> EdwardsPoint {
    comb_mul(
        &constants::BASEPOINT_COMB_TABLE,
        5,
        5,
        18,
        &constants::BASEPOINT_COMB_ADJUSTMENT,
        scalar,
    )
}

/// Build the comb table for `base` into `table`, using `zs`/`zis` (all
/// of length \\(n \cdot 2\^{t-1}\\)) as scratch for the batched
/// normalization.
///
/// For each comb: a doubling phase walks `base` up by \\(2\^s\\) steps to
/// seed the teeth, then a Gray-code phase emits all \\(2\^{t-1}\\)
/// odd-signed tooth combinations at one addition or subtraction each.
/// A single field inversion then normalizes every entry's \\(Z\\).
pub(crate) fn comb_precompute(
    base: &EdwardsPoint,
    n: usize,
    t: usize,
    s: usize,
    table: &mut [NielsPoint],
    zs: &mut [FieldElement],
    zis: &mut [FieldElement],
) {
    assert!(n * t * s >= 446, "comb parameters must cover 446 bits");
    assert!((1..=8).contains(&t), "comb teeth out of range");
    assert!(n >= 1 && s >= 1);
    assert_eq!(table.len(), n << (t - 1));
    assert_eq!(zs.len(), n << (t - 1));
    assert_eq!(zis.len(), n << (t - 1));

    let mut working = *base;
    let mut start = EdwardsPoint::identity();
    let mut doubles = [EdwardsPoint::identity(); 7];

    for i in 0..n {
        // Doubling phase.
        for j in 0..t {
            start = if j != 0 { &start + &working } else { working };

            if j == t - 1 && i == n - 1 {
                break;
            }

            working = working.double();
            if j < t - 1 {
                doubles[j] = working;
            }
            for _ in 0..s - 1 {
                working = working.double();
            }
        }

        // Gray-code phase.
        let mut j: usize = 0;
        loop {
            let gray = j ^ (j >> 1);
            let idx = (((i + 1) << (t - 1)) - 1) ^ gray;

            let pn = start.as_projective_niels();
            table[idx] = NielsPoint {
                y_plus_x: pn.Y_plus_X,
                y_minus_x: pn.Y_minus_X,
                td: pn.Td,
            };
            zs[idx] = pn.Z2;

            if j >= (1 << (t - 1)) - 1 {
                break;
            }

            let mut delta = (j + 1) ^ ((j + 1) >> 1) ^ gray;
            let mut k = 0;
            while delta > 1 {
                delta >>= 1;
                k += 1;
            }

            if gray & (1 << k) != 0 {
                start = &start + &doubles[k];
            } else {
                start = &start - &doubles[k];
            }
            j += 1;
        }
    }

    // One inversion normalizes all n * 2^(t-1) entries.
    FieldElement::batch_invert(zs, zis);
    for (entry, zi) in table.iter_mut().zip(zis.iter()) {
        entry.y_plus_x = &entry.y_plus_x * zi;
        entry.y_minus_x = &entry.y_minus_x * zi;
        entry.td = &entry.td * zi;
    }
}
