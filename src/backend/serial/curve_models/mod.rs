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

//! Internal curve representations used for scalar-multiplication tables.
//!
//! ## Background
//!
//! Internally `DecafPoint`s are represented on the twisted Edwards curve
//! Ed448-Goldilocks in extended homogeneous coordinates \\((X:Y:Z:T)\\)
//! with \\(x = X/Z\\), \\(y = Y/Z\\), \\(XY = ZT\\).  Additions into an
//! extended-coordinate accumulator go fastest when the other summand is
//! cached in "Niels" form, which stores the combinations the unified
//! addition formulas actually consume:
//!
//! * `ProjectiveNielsPoint`: \\((Y+X,\ Y-X,\ (2-2d)T,\ 2Z)\\) — four field
//!   elements, for points computed on the fly;
//!
//! * `NielsPoint`: the same data normalized by \\(1/(2Z)\\), i.e.
//!   \\(((y+x)/2,\ (y-x)/2,\ (1-d)xy)\\) — three field elements, for
//!   precomputed tables.
//!
//! The addition formulas themselves live with `EdwardsPoint` in
//! `crate::edwards`; negation of a Niels form is the swap of the sum and
//! difference entries together with negation of the \\(T\\) entry, which
//! is what the constant-time table lookups use.

#![allow(non_snake_case)]

use core::ops::Neg;

use subtle::{Choice, ConditionallySelectable};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::constants;
use crate::edwards::EdwardsPoint;
use crate::field::FieldElement;

/// A pre-computed point on the curve, for mixed addition into an
/// extended-coordinates accumulator.
#[derive(Copy, Clone, Debug)]
pub(crate) struct ProjectiveNielsPoint {
    pub Y_plus_X: FieldElement,
    pub Y_minus_X: FieldElement,
    pub Td: FieldElement,
    pub Z2: FieldElement,
}

/// A pre-computed point in affine (\\(Z = 1\\)) Niels form, normalized by
/// \\(1/(2Z)\\) so that reconstructing the point needs no division.
#[derive(Copy, Clone, Debug)]
pub(crate) struct NielsPoint {
    pub y_plus_x: FieldElement,
    pub y_minus_x: FieldElement,
    pub td: FieldElement,
}

impl From<&EdwardsPoint> for ProjectiveNielsPoint {
    fn from(p: &EdwardsPoint) -> ProjectiveNielsPoint {
        ProjectiveNielsPoint {
            Y_plus_X: &p.Y + &p.X,
            Y_minus_X: &p.Y - &p.X,
            Td: p.T.mul_word(constants::TWO_MINUS_TWO_D),
            Z2: &p.Z + &p.Z,
        }
    }
}

impl ProjectiveNielsPoint {
    /// Recover extended coordinates; used once at the bottom of each
    /// ladder to seed the accumulator.
    pub fn as_extended(&self) -> EdwardsPoint {
        let two_y = &self.Y_plus_X + &self.Y_minus_X;
        let two_x = &self.Y_plus_X - &self.Y_minus_X;
        EdwardsPoint {
            X: &self.Z2 * &two_x,
            Y: &self.Z2 * &two_y,
            Z: self.Z2.square(),
            T: &two_x * &two_y,
        }
    }
}

impl NielsPoint {
    /// Recover extended coordinates.  The \\(1/(2Z)\\) normalization makes
    /// the sum and difference entries recombine directly into the affine
    /// coordinates.
    pub fn as_extended(&self) -> EdwardsPoint {
        let y = &self.y_plus_x + &self.y_minus_x;
        let x = &self.y_plus_x - &self.y_minus_x;
        EdwardsPoint {
            X: x,
            Y: y,
            Z: FieldElement::ONE,
            T: &x * &y,
        }
    }
}

// ------------------------------------------------------------------------
// Constant-time negation and selection
// ------------------------------------------------------------------------

impl ConditionallySelectable for ProjectiveNielsPoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        ProjectiveNielsPoint {
            Y_plus_X: FieldElement::conditional_select(&a.Y_plus_X, &b.Y_plus_X, choice),
            Y_minus_X: FieldElement::conditional_select(&a.Y_minus_X, &b.Y_minus_X, choice),
            Td: FieldElement::conditional_select(&a.Td, &b.Td, choice),
            Z2: FieldElement::conditional_select(&a.Z2, &b.Z2, choice),
        }
    }
}

impl ConditionallySelectable for NielsPoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        NielsPoint {
            y_plus_x: FieldElement::conditional_select(&a.y_plus_x, &b.y_plus_x, choice),
            y_minus_x: FieldElement::conditional_select(&a.y_minus_x, &b.y_minus_x, choice),
            td: FieldElement::conditional_select(&a.td, &b.td, choice),
        }
    }
}

impl Neg for &ProjectiveNielsPoint {
    type Output = ProjectiveNielsPoint;

    fn neg(self) -> ProjectiveNielsPoint {
        ProjectiveNielsPoint {
            Y_plus_X: self.Y_minus_X,
            Y_minus_X: self.Y_plus_X,
            Td: -&self.Td,
            Z2: self.Z2,
        }
    }
}

impl Neg for &NielsPoint {
    type Output = NielsPoint;

    fn neg(self) -> NielsPoint {
        NielsPoint {
            y_plus_x: self.y_minus_x,
            y_minus_x: self.y_plus_x,
            td: -&self.td,
        }
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for ProjectiveNielsPoint {
    fn zeroize(&mut self) {
        self.Y_plus_X.zeroize();
        self.Y_minus_X.zeroize();
        self.Td.zeroize();
        self.Z2.zeroize();
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for NielsPoint {
    fn zeroize(&mut self) {
        self.y_plus_x.zeroize();
        self.y_minus_x.zeroize();
        self.td.zeroize();
    }
}
