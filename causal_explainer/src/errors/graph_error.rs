/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2025" . The Causal Explainer Authors and Contributors. All Rights Reserved.
 */

use crate::types::variable::Variable;
use causal_explainer_macros::Constructor;
use std::error::Error;
use std::fmt;

/// Failure of a `CausalNetwork::add_dependency` call.
///
/// Raised when adding a dependency for `variable` would close a cycle
/// through its declared parents.
#[derive(Constructor, Debug, Clone, Eq, PartialEq)]
pub struct GraphError {
    pub variable: Variable,
}

impl Error for GraphError {}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "GraphError: adding a dependency for {} would create a cycle",
            self.variable
        )
    }
}
