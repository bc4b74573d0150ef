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

//! Various constants, such as the Decaf448 basepoint and the curve
//! parameter words the formulas multiply by.
//!
//! The limb-level constants (basepoint coordinates, the comb and wNAF
//! tables, the scalar-recoding adjustments and Montgomery factors) live
//! in the backend and are generated offline by `tools/gen_constants.py`;
//! this module re-exposes the public ones.

#![allow(non_snake_case)]

use crate::decaf::{CompressedDecaf, DecafPoint};

#[cfg(feature = "precomputed-tables")]
use crate::decaf::DecafBasepointTable;

pub(crate) use crate::backend::serial::u64::constants::ED448_BASEPOINT_POINT;

/// The curve's Edwards parameter is \\(d = -39081\\); the formulas only
/// ever multiply by these derived (positive) words.
pub(crate) const ONE_MINUS_D: u32 = 39082;
pub(crate) const MINUS_D: u32 = 39081;
pub(crate) const TWO_MINUS_TWO_D: u32 = 78164;
pub(crate) const FOUR_MINUS_FOUR_D: u32 = 156328;
pub(crate) const ONE_MINUS_TWO_D: u32 = 78163;

/// The Decaf448 basepoint, i.e. the generator of the prime-order group.
///
/// Its encoding is 28 bytes of `0x66` followed by 28 bytes of `0x33`.
pub const DECAF_BASEPOINT: DecafPoint = DecafPoint(ED448_BASEPOINT_POINT);

/// The Decaf448 basepoint, in compressed wire format.
pub const DECAF_BASEPOINT_COMPRESSED: CompressedDecaf = CompressedDecaf([
    0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
    0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x33, 0x33,
    0x33, 0x33, 0x33, 0x33, 0x33, 0x33, 0x33, 0x33, 0x33, 0x33, 0x33, 0x33, 0x33, 0x33, 0x33,
    0x33, 0x33, 0x33, 0x33, 0x33, 0x33, 0x33, 0x33, 0x33, 0x33, 0x33,
]);

/// The comb table of multiples of the Decaf448 basepoint, for
/// constant-time fixed-base scalar multiplication.
#[cfg(feature = "precomputed-tables")]
pub static DECAF_BASEPOINT_TABLE: &DecafBasepointTable = &DecafBasepointTable {
    table: crate::backend::serial::u64::constants::BASEPOINT_COMB_TABLE,
    adjustment: crate::backend::serial::u64::constants::BASEPOINT_COMB_ADJUSTMENT,
};

#[cfg(test)]
mod test {
    use super::*;
    use crate::traits::ValidityCheck;

    #[test]
    fn basepoint_is_on_the_curve() {
        assert!(ED448_BASEPOINT_POINT.is_valid());
    }

    #[test]
    fn derived_words_match_d() {
        let d: i64 = -39081;
        assert_eq!(ONE_MINUS_D as i64, 1 - d);
        assert_eq!(MINUS_D as i64, -d);
        assert_eq!(TWO_MINUS_TWO_D as i64, 2 - 2 * d);
        assert_eq!(FOUR_MINUS_FOUR_D as i64, 4 - 4 * d);
        assert_eq!(ONE_MINUS_TWO_D as i64, 1 - 2 * d);
    }
}
