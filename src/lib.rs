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

#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_docs)]
#![doc(
    html_logo_url = "https://cdn.jsdelivr.net/gh/dalek-cryptography/curve25519-dalek/docs/assets/dalek-logo-clear.png"
)]

//! A pure-Rust implementation of group operations on the Decaf448
//! prime-order group and its underlying curve, Ed448-Goldilocks.
//!
//! # Overview
//!
//! Most protocols want a group of prime order \\(q\\); what an Edwards
//! curve provides is a group of order \\(hq\\) for a small cofactor
//! \\(h\\).  The [Decaf][decaf_paper] construction removes the cofactor
//! by quotienting, giving a prime-order group with a unique, canonical
//! 56-byte encoding, complete and branch-free internal formulas, and no
//! ad-hoc cofactor handling pushed onto the protocol.
//!
//! This crate provides:
//!
//! * [`decaf::DecafPoint`], an element of the Decaf448 group, with
//!   canonical encoding and decoding via [`decaf::CompressedDecaf`];
//!
//! * [`scalar::Scalar`], an integer modulo the prime group order;
//!
//! * constant-time variable-base, constant-time fixed-base (signed
//!   combs, precomputed or built at runtime), and variable-time
//!   double-base scalar multiplication;
//!
//! * Elligator-style hashing of byte strings to group elements, and the
//!   inverse map for transmitting group elements as near-uniform byte
//!   strings.
//!
//! All operations on secret data are constant time: no secret-dependent
//! branches, loop bounds, or table addresses.  The one deliberate
//! exception, [`decaf::DecafPoint::vartime_double_scalar_mul_basepoint`],
//! is named accordingly and intended for verification equations over
//! public inputs.
//!
//! # Compile-time features
//!
//! * `alloc` (default): heap-allocated types, e.g. runtime-parameterized
//!   comb tables;
//! * `precomputed-tables` (default): a compiled-in basepoint comb table;
//! * `zeroize` (default): wiping of secret values via the [`zeroize`]
//!   traits;
//! * `rand_core`: random scalars and group elements from a
//!   user-supplied RNG;
//! * `digest`: hashing to the group through any extendable-output hash;
//! * `serde`: serialization of points and scalars through their
//!   canonical encodings.
//!
//! Hashing itself (SHAKE256 for decaf448, conventionally) and
//! randomness are deliberately left to the caller: this crate only maps
//! bytes to and from the group.
//!
//! [decaf_paper]: https://eprint.iacr.org/2015/673.pdf

#[cfg(feature = "alloc")]
extern crate alloc;

// Internal macros. Must come first!
#[macro_use]
pub(crate) mod macros;

//------------------------------------------------------------------------
// curve448-dalek public modules
//------------------------------------------------------------------------

// Scalar arithmetic mod q, the group order
pub mod scalar;

// The Decaf448 prime-order group
pub mod decaf;

// Useful constants, like the basepoint and its comb table
pub mod constants;

// External (and internal) traits
pub mod traits;

//------------------------------------------------------------------------
// curve448-dalek internal modules
//------------------------------------------------------------------------

// Finite field arithmetic mod p = 2^448 - 2^224 - 1
pub(crate) mod field;

// The Ed448-Goldilocks curve in extended coordinates
pub(crate) mod edwards;

// Arithmetic backends and the limb-level constant tables
pub(crate) mod backend;

// Constant-time and vartime lookup tables
pub(crate) mod window;
