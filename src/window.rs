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

//! Code for fixed- and sliding-window functionality

#![allow(non_snake_case)]

use subtle::{ConditionallySelectable, ConstantTimeEq};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::backend::serial::curve_models::ProjectiveNielsPoint;
use crate::edwards::EdwardsPoint;

/// A lookup table of precomputed odd multiples of a point \\(P\\):
/// \\([P, 3P, 5P, 7P, 9P, 11P, 13P, 15P]\\), for the constant-time
/// width-4 signed window ladder.
#[derive(Copy, Clone)]
pub(crate) struct LookupTable(pub(crate) [ProjectiveNielsPoint; 8]);

impl LookupTable {
    /// Given a secret index \\(i \in [0, 8)\\), return the entry
    /// \\((2i+1)P\\) with a linear scan: every entry is read, and the
    /// wanted one is kept with a mask derived from comparing indices.
    /// No secret-dependent memory address is ever issued.
    pub fn select(&self, index: u64) -> ProjectiveNielsPoint {
        let mut t = self.0[0];
        for i in 1..8 {
            let choice = (i as u64).ct_eq(&index);
            t.conditional_assign(&self.0[i], choice);
        }
        t
    }
}

impl From<&EdwardsPoint> for LookupTable {
    fn from(p: &EdwardsPoint) -> LookupTable {
        // One doubling, then repeated additions of 2P.
        let two_p = p.double().as_projective_niels();
        let mut table = [p.as_projective_niels(); 8];
        let mut tmp = *p;
        for i in 1..8 {
            tmp = &tmp + &two_p;
            table[i] = tmp.as_projective_niels();
        }
        LookupTable(table)
    }
}

impl core::fmt::Debug for LookupTable {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "LookupTable({:?})", &self.0[..])
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for LookupTable {
    fn zeroize(&mut self) {
        for entry in self.0.iter_mut() {
            entry.zeroize();
        }
    }
}

/// A table of odd multiples \\([P, 3P, \ldots, 15P]\\) for the
/// variable-time wNAF ladder (width 3 plus sign).  Lookups index the
/// table directly; this table must never be keyed by a secret.
#[derive(Copy, Clone)]
pub(crate) struct NafLookupTable8(pub(crate) [ProjectiveNielsPoint; 8]);

impl NafLookupTable8 {
    /// Given public odd \\(x\\) with \\(0 < x < 2\^4\\), return \\(xP\\).
    pub fn select(&self, x: usize) -> ProjectiveNielsPoint {
        debug_assert_eq!(x & 1, 1);
        debug_assert!(x < 16);
        self.0[x / 2]
    }
}

impl From<&EdwardsPoint> for NafLookupTable8 {
    fn from(p: &EdwardsPoint) -> NafLookupTable8 {
        let mut table = [p.as_projective_niels(); 8];
        let mut tmp = p.double();
        let two_p = tmp.as_projective_niels();
        tmp = &tmp + &table[0];
        table[1] = tmp.as_projective_niels();
        for i in 2..8 {
            tmp = &tmp + &two_p;
            table[i] = tmp.as_projective_niels();
        }
        NafLookupTable8(table)
    }
}

impl core::fmt::Debug for NafLookupTable8 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "NafLookupTable8({:?})", &self.0[..])
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::constants;
    use crate::scalar::Scalar;

    #[test]
    fn lookup_table_holds_odd_multiples() {
        let b = constants::ED448_BASEPOINT_POINT;
        let table = LookupTable::from(&b);
        for i in 0..8u64 {
            let expected = &b * &Scalar::from(2 * i + 1);
            assert_eq!(table.select(i).as_extended(), expected);
        }
    }

    #[test]
    fn naf_table_holds_odd_multiples() {
        let b = constants::ED448_BASEPOINT_POINT;
        let table = NafLookupTable8::from(&b);
        for i in 0..8u64 {
            let expected = &b * &Scalar::from(2 * i + 1);
            assert_eq!(table.select(2 * i as usize + 1).as_extended(), expected);
        }
    }
}
