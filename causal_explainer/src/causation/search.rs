/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2025" . The Causal Explainer Authors and Contributors. All Rights Reserved.
 */

use crate::causation::actual::{is_actual_cause, is_weak_actual_cause};
use crate::causation::sufficient::{is_sufficient_cause, is_weak_sufficient_cause};
use crate::errors::SettingError;
use crate::types::event::Event;
use crate::types::setting::CausalSetting;
use crate::types::variable::Variable;
use itertools::Itertools;
use std::collections::{BTreeMap, BTreeSet};

/// Every subset of `variables`, ascending by size then lexicographic on the
/// sorted input. Includes the empty subset.
pub fn powerset(variables: &BTreeSet<Variable>) -> Vec<Vec<Variable>> {
    let items: Vec<Variable> = variables.iter().cloned().collect();
    let mut subsets = Vec::new();
    for size in 0..=items.len() {
        for combo in items.iter().cloned().combinations(size) {
            subsets.push(combo);
        }
    }
    subsets
}

/// Every sub-assignment of `assignment` obtained by restricting it to a
/// subset of its own keys (used by AC3/SC4 minimality checks, not by the
/// top-level candidate search). Includes `assignment` itself and the empty
/// assignment.
pub fn sub_assignments<V>(assignment: &BTreeMap<Variable, V>) -> Vec<BTreeMap<Variable, V>>
where
    V: Clone + Ord,
{
    let keys: BTreeSet<Variable> = assignment.keys().cloned().collect();
    powerset(&keys)
        .into_iter()
        .map(|subset| {
            subset
                .into_iter()
                .map(|variable| {
                    let value = assignment[&variable].clone();
                    (variable, value)
                })
                .collect()
        })
        .collect()
}

/// The Cartesian product of `domains[v]` for `v` in `variables`, in the
/// order `variables` is given, values ascending within each domain. A
/// single empty assignment if `variables` is empty.
pub fn assignments_over<V>(
    variables: &[Variable],
    domains: &BTreeMap<Variable, BTreeSet<V>>,
) -> Vec<BTreeMap<Variable, V>>
where
    V: Clone + Ord,
{
    if variables.is_empty() {
        return vec![BTreeMap::new()];
    }

    let domain_lists: Vec<Vec<V>> = variables
        .iter()
        .map(|variable| domains[variable].iter().cloned().collect())
        .collect();

    domain_lists
        .into_iter()
        .multi_cartesian_product()
        .map(|values| variables.iter().cloned().zip(values).collect())
        .collect()
}

/// Every non-empty partial endogenous assignment: the power set of
/// `endogenous` (skipping the empty set) crossed with the domain product
/// per chosen subset.
pub fn enumerate_candidates<V>(
    endogenous: &BTreeSet<Variable>,
    domains: &BTreeMap<Variable, BTreeSet<V>>,
) -> Vec<BTreeMap<Variable, V>>
where
    V: Clone + Ord,
{
    let mut candidates = Vec::new();
    for subset in powerset(endogenous) {
        if subset.is_empty() {
            continue;
        }
        candidates.extend(assignments_over(&subset, domains));
    }
    candidates
}

/// Which decision predicate `enumerate_causes` filters candidates by.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum CauseKind {
    ActualCause,
    WeakActualCause,
    SufficientCause,
    WeakSufficientCause,
}

/// `enumerate_causes(e, S, kind)`: every non-empty partial endogenous
/// assignment satisfying the predicate named by `kind`, in deterministic
/// order. Fails fast on the first propagated `SettingError`.
pub fn enumerate_causes<V>(
    event: &Event<V>,
    setting: &CausalSetting<V>,
    kind: CauseKind,
) -> Result<Vec<BTreeMap<Variable, V>>, SettingError>
where
    V: Clone + Eq + Ord,
{
    let endogenous: BTreeSet<Variable> = setting.endogenous_domains().keys().cloned().collect();
    let mut causes = Vec::new();

    for candidate in enumerate_candidates(&endogenous, setting.endogenous_domains()) {
        let holds = match kind {
            CauseKind::ActualCause => is_actual_cause(&candidate, event, setting)?,
            CauseKind::WeakActualCause => is_weak_actual_cause(&candidate, event, setting)?,
            CauseKind::SufficientCause => is_sufficient_cause(&candidate, event, setting)?,
            CauseKind::WeakSufficientCause => is_weak_sufficient_cause(&candidate, event, setting)?,
        };
        if holds {
            causes.push(candidate);
        }
    }

    Ok(causes)
}
