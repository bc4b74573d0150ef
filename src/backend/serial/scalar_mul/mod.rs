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

//! Implementations of the scalar multiplication strategies: the
//! constant-time variable-base ladder, the fixed-base signed combs, and
//! the variable-time double-base multiply used for verification.

pub mod precomputed;

pub mod variable_base;

pub mod vartime_double_base;
