/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2025" . The Causal Explainer Authors and Contributors. All Rights Reserved.
 */

use causal_explainer_macros::Constructor;
use std::error::Error;
use std::fmt;

/// Raised by the direct (non-enumeration) API when a decision predicate is
/// called with an empty candidate.
///
/// The decision predicates themselves treat an empty candidate as `false`
/// rather than erroring, so enumeration stays total; this error exists for
/// callers that invoke `is_actual_cause`/`is_sufficient_cause` directly and
/// want the empty-candidate case surfaced rather than silently folded into
/// `false`. See `causation::actual::require_non_empty`.
#[derive(Constructor, Debug, Clone, Eq, PartialEq)]
pub struct CandidateError(pub String);

impl Error for CandidateError {}

impl fmt::Display for CandidateError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "EmptyCandidate: {}", self.0)
    }
}
