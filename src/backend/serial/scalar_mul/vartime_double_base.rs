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

//! Variable-time double-base scalar multiplication, for signature-style
//! verification equations where both scalars are public.

#![allow(non_snake_case)]

use crate::backend::serial::u64::constants;
use crate::edwards::EdwardsPoint;
use crate::scalar::Scalar;
use crate::traits::Identity;
use crate::window::NafLookupTable8;

/// Width of the wNAF recoding used against the precomputed basepoint
/// table (32 entries, odd multiples through 63B).
const FIXED_TABLE_BITS: u32 = 5;

/// Width of the wNAF recoding used against the on-the-fly table for the
/// variable point (8 entries, odd multiples through 15A).
const VAR_TABLE_BITS: u32 = 3;

/// One recoded term: add `addend * B` (odd, signed) at bit `power`.
/// The digit stream is terminated by `power == -1`.
#[derive(Copy, Clone, Default)]
struct NafTerm {
    power: i32,
    addend: i32,
}

/// Recode a scalar into wNAF terms, most significant first.
///
/// Produced addends are odd with \\(|addend| \le 2\^{w+1} - 1\\), and
/// successive terms are at least \\(w + 1\\) bit positions apart, so at
/// most \\(\lfloor 446 / (w+1) \rfloor + 2\\) terms are emitted (plus
/// the terminator).  Variable time: the recoding inspects the scalar's
/// bit pattern directly.
fn recode_wnaf(control: &mut [NafTerm], scalar: &Scalar, table_bits: u32) -> usize {
    let mut current: i64 = 0;
    let mut position = 0;

    for i in (0..446).rev() {
        current = 2 * current + scalar.0.bit(i) as i64;

        // Once |current| overflows the window, peel off an odd digit at
        // the lowest set bit and reset to the running remainder.
        if current >= (2 << table_bits) || current <= -1 - (2 << table_bits) {
            let mut delta = (current + 1) >> 1;
            current = -(current & 1);

            let mut j = i as i32;
            while delta & 1 == 0 {
                delta >>= 1;
                j += 1;
            }
            control[position] = NafTerm {
                power: j + 1,
                addend: delta as i32,
            };
            position += 1;
        }
    }

    if current != 0 {
        let mut j = 0;
        while current & 1 == 0 {
            current >>= 1;
            j += 1;
        }
        control[position] = NafTerm {
            power: j,
            addend: current as i32,
        };
        position += 1;
    }

    control[position] = NafTerm {
        power: -1,
        addend: 0,
    };
    position
}

/// Compute \\(aA + bB\\) in variable time, \\(B\\) the decaf448
/// basepoint.
pub(crate) fn mul(a: &Scalar, A: &EdwardsPoint, b: &Scalar) -> EdwardsPoint {
    // floor(446 / (w+1)) + 3 terms suffice for each width.
    let mut control_pre = [NafTerm::default(); 77];
    let mut control_var = [NafTerm::default(); 115];

    recode_wnaf(&mut control_pre, a, FIXED_TABLE_BITS);
    recode_wnaf(&mut control_var, b, VAR_TABLE_BITS);

    let table_var = NafLookupTable8::from(A);
    let table_pre = &constants::AFFINE_ODD_MULTIPLES_OF_BASEPOINT;

    let mut contp = 0;
    let mut contv = 0;

    // Seed the accumulator from whichever stream starts higher.
    let mut i = control_var[0].power;
    let mut combo;

    if i < 0 {
        i = control_pre[0].power;
        if i < 0 {
            return EdwardsPoint::identity();
        }
        combo = table_pre[(control_pre[0].addend >> 1) as usize].as_extended();
        contp += 1;
    } else if i > control_pre[0].power {
        combo = table_var.select(control_var[0].addend as usize).as_extended();
        contv += 1;
    } else if i == control_pre[0].power {
        combo = table_var.select(control_var[0].addend as usize).as_extended();
        combo = &combo + &table_pre[(control_pre[0].addend >> 1) as usize];
        contv += 1;
        contp += 1;
    } else {
        i = control_pre[0].power;
        combo = table_pre[(control_pre[0].addend >> 1) as usize].as_extended();
        contp += 1;
    }

    i -= 1;
    while i >= 0 {
        combo = combo.double();

        if i == control_var[contv].power {
            let addend = control_var[contv].addend;
            if addend > 0 {
                combo = &combo + &table_var.select(addend as usize);
            } else {
                combo = &combo - &table_var.select((-addend) as usize);
            }
            contv += 1;
        }

        if i == control_pre[contp].power {
            let addend = control_pre[contp].addend;
            if addend > 0 {
                combo = &combo + &table_pre[(addend >> 1) as usize];
            } else {
                combo = &combo - &table_pre[((-addend) >> 1) as usize];
            }
            contp += 1;
        }

        i -= 1;
    }

    combo
}
