/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2025" . The Causal Explainer Authors and Contributors. All Rights Reserved.
 */

//! Convenience re-export of the crate's public surface.

pub use crate::causation::{
    enumerate_causes, is_actual_cause, is_sufficient_cause, is_weak_actual_cause,
    is_weak_sufficient_cause, require_non_empty, satisfies_ac1, satisfies_ac2, satisfies_ac3,
    satisfies_sc1, satisfies_sc2, satisfies_sc3, satisfies_sc4, CauseKind,
};
pub use crate::errors::{CandidateError, GraphError, SettingError};
pub use crate::types::{
    assignments_to_conjunction, CausalFormula, CausalNetwork, CausalSetting, Event,
    StructuralEquation, Variable,
};
