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

//! Pluggable implementations for different architectures.
//!
//! The backend code is split into two parts: a serial backend, and
//! (eventually) vectorized backends; only the serial u64 backend is
//! implemented for curve448 at present, so the dispatch here is trivial.

use crate::edwards::EdwardsPoint;
use crate::scalar::Scalar;

pub mod serial;

cfg_if::cfg_if! {
    if #[cfg(target_pointer_width = "16")] {
        compile_error!(
            "curve448-dalek's serial backend requires 128-bit integer arithmetic; \
             16-bit targets are not supported"
        );
    }
}

/// Perform constant-time, variable-base scalar multiplication.
pub(crate) fn variable_base_mul(point: &EdwardsPoint, scalar: &Scalar) -> EdwardsPoint {
    serial::scalar_mul::variable_base::mul(point, scalar)
}

/// Compute, in variable time, `aA + bB`, for the decaf448 basepoint `B`.
#[allow(non_snake_case)]
pub(crate) fn vartime_double_base_mul(a: &Scalar, A: &EdwardsPoint, b: &Scalar) -> EdwardsPoint {
    serial::scalar_mul::vartime_double_base::mul(a, A, b)
}
