/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2025" . The Causal Explainer Authors and Contributors. All Rights Reserved.
 */

//! Actual and sufficient causation in the modified Halpern-Pearl framework.
//!
//! Four layers, leaves first: a Boolean [`types::event`] algebra over atomic
//! assertions `V = v`; a [`types::network`] representation of a structural
//! causal model with forward evaluation and intervention; a
//! [`types::setting`] that pairs a network with a context and declared
//! domains; and [`causation`], the AC1-AC3 / SC1-SC4 decision procedures and
//! the candidate-enumeration search driver built on top of them.
//!
//! No I/O, no concurrency, no persistence: this crate is the reasoning
//! engine alone. It consumes structural equations as opaque callables
//! supplied by the caller.

pub mod causation;
pub mod errors;
pub mod types;

pub mod prelude;
