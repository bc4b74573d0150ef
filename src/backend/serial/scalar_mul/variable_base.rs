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

//! Constant-time variable-base scalar multiplication.

use subtle::{Choice, ConditionallyNegatable};

use crate::backend::serial::u64::constants;
use crate::backend::serial::u64::scalar::Scalar64;
use crate::edwards::EdwardsPoint;
use crate::scalar::Scalar;
use crate::traits::Identity;
use crate::window::LookupTable;

/// Compute `scalar * point` in constant time, with a width-4 signed
/// fixed window.
///
/// The scalar is recoded into 112 signed odd digits in
/// \\(\\{\pm 1, \pm 3, \ldots, \pm 15\\}\\) by pre-adding
/// \\(2\^{448} - 1 \bmod q\\) and halving mod \\(q\\): after that shift,
/// every 4-bit window of the adjusted scalar, interpreted
/// sign-magnitude against its top bit, contributes an odd digit, and
/// the pre-addition cancels the \\(\sum_i 2\^{4i}\\) surplus.  Digits
/// select from the table of odd multiples by a masked linear scan and a
/// conditional negation; the sequence of doublings and additions is
/// fixed by the scalar length alone.
pub(crate) fn mul(point: &EdwardsPoint, scalar: &Scalar) -> EdwardsPoint {
    const WINDOW: usize = 4;

    let adjusted = Scalar64::add(&scalar.0, &constants::VARIABLE_BASE_ADJUSTMENT).halve();

    // [P, 3P, 5P, ..., 15P]
    let table = LookupTable::from(point);

    let mut acc = EdwardsPoint::identity();
    let mut first = true;
    let mut i = 446 - ((446 - 1) % WINDOW) - 1;

    loop {
        // Fetch the next 4-bit window and fold it sign-magnitude.
        let mut bits = adjusted.window4(i);
        let invert = (bits >> (WINDOW - 1)).wrapping_sub(1);
        bits ^= invert;

        let mut ni = table.select(bits & 0x7);
        ni.conditional_negate(Choice::from((invert & 1) as u8));

        if first {
            acc = ni.as_extended();
            first = false;
        } else {
            for _ in 0..WINDOW {
                acc = acc.double();
            }
            acc = &acc + &ni;
        }

        if i == 0 {
            break;
        }
        i -= WINDOW;
    }

    acc
}
