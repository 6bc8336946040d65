/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2025" . The Causal Explainer Authors and Contributors. All Rights Reserved.
 */

use crate::causation::search::{powerset, sub_assignments};
use crate::errors::{CandidateError, SettingError};
use crate::types::event::{assignments_to_conjunction, Event};
use crate::types::formula::CausalFormula;
use crate::types::setting::CausalSetting;
use crate::types::variable::Variable;
use itertools::Itertools;
use std::collections::BTreeMap;

/// AC1, factuality: `candidate` is non-empty, its conjunction holds in
/// `setting`, and `event` holds in `setting`.
pub fn satisfies_ac1<V>(
    candidate: &BTreeMap<Variable, V>,
    event: &Event<V>,
    setting: &CausalSetting<V>,
) -> bool
where
    V: Clone + Eq + Ord,
{
    if candidate.is_empty() {
        return false;
    }
    if !assignments_to_conjunction(candidate).entailed_by(setting) {
        return false;
    }
    event.entailed_by(setting)
}

/// Every `(x', w)` witness for AC2: `x'` ranges over the Cartesian product
/// of `Dy[V] \ {candidate[V]}` for `V` in `candidate`; `w` is always the
/// *factual* restriction of `setting.values` to a subset `W` of the
/// non-candidate endogenous variables. A witness is any `(x', w)` under
/// which `[x' ∪ w] ¬event` holds.
pub fn find_witnesses_ac2<V>(
    candidate: &BTreeMap<Variable, V>,
    event: &Event<V>,
    setting: &CausalSetting<V>,
) -> Result<Vec<BTreeMap<Variable, V>>, SettingError>
where
    V: Clone + Eq + Ord,
{
    let x_variables: Vec<Variable> = candidate.keys().cloned().collect();
    let remaining: Vec<Variable> = setting
        .endogenous_domains()
        .keys()
        .filter(|variable| !candidate.contains_key(*variable))
        .cloned()
        .collect();

    let x_prime_domain_lists: Vec<Vec<V>> = x_variables
        .iter()
        .map(|variable| {
            setting.endogenous_domains()[variable]
                .iter()
                .filter(|value| Some(*value) != candidate.get(variable))
                .cloned()
                .collect()
        })
        .collect();

    let x_prime_products: Vec<Vec<V>> = if x_variables.is_empty() {
        Vec::new()
    } else {
        x_prime_domain_lists
            .into_iter()
            .multi_cartesian_product()
            .collect()
    };

    let remaining_set = remaining.iter().cloned().collect();
    let w_subsets = powerset(&remaining_set);

    let mut witnesses = Vec::new();
    for x_prime_values in x_prime_products {
        let x_prime: BTreeMap<Variable, V> =
            x_variables.iter().cloned().zip(x_prime_values).collect();

        for w_subset in &w_subsets {
            let mut witness = x_prime.clone();
            for variable in w_subset {
                witness.insert(variable.clone(), setting.values()[variable].clone());
            }

            let negated_event = CausalFormula::new(witness.clone(), Event::not(event.clone()));
            if negated_event.entailed_by(setting)? {
                witnesses.push(witness);
            }
        }
    }

    Ok(witnesses)
}

/// AC2, counterfactual dependence: at least one witness exists.
pub fn satisfies_ac2<V>(
    candidate: &BTreeMap<Variable, V>,
    event: &Event<V>,
    setting: &CausalSetting<V>,
) -> Result<bool, SettingError>
where
    V: Clone + Eq + Ord,
{
    if candidate.is_empty() {
        return Ok(false);
    }
    Ok(!find_witnesses_ac2(candidate, event, setting)?.is_empty())
}

/// AC1 ∧ AC2, the *weak actual cause* (non-minimal).
pub fn is_weak_actual_cause<V>(
    candidate: &BTreeMap<Variable, V>,
    event: &Event<V>,
    setting: &CausalSetting<V>,
) -> Result<bool, SettingError>
where
    V: Clone + Eq + Ord,
{
    if !satisfies_ac1(candidate, event, setting) {
        log::debug!("AC1 failed");
        return Ok(false);
    }
    log::debug!("AC1 passed");

    if !satisfies_ac2(candidate, event, setting)? {
        log::debug!("AC2 failed");
        return Ok(false);
    }
    log::debug!("AC2 passed");
    Ok(true)
}

/// AC3, minimality: no strict non-empty subset of `candidate` is itself a
/// weak actual cause.
pub fn satisfies_ac3<V>(
    candidate: &BTreeMap<Variable, V>,
    event: &Event<V>,
    setting: &CausalSetting<V>,
) -> Result<bool, SettingError>
where
    V: Clone + Eq + Ord,
{
    for subset in sub_assignments(candidate) {
        if subset != *candidate && is_weak_actual_cause(&subset, event, setting)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// `candidate` is an actual cause of `event` in `setting` iff AC1, AC2, AC3
/// all hold (Halpern 2015 rather than Halpern & Pearl 2005).
pub fn is_actual_cause<V>(
    candidate: &BTreeMap<Variable, V>,
    event: &Event<V>,
    setting: &CausalSetting<V>,
) -> Result<bool, SettingError>
where
    V: Clone + Eq + Ord,
{
    if !is_weak_actual_cause(candidate, event, setting)? {
        return Ok(false);
    }
    if !satisfies_ac3(candidate, event, setting)? {
        log::debug!("AC3 failed");
        return Ok(false);
    }
    log::debug!("AC3 passed");
    Ok(true)
}

/// Rejects an empty candidate as `CandidateError` rather than folding it
/// silently into `false`. The decision predicates above never call this -
/// they treat an empty candidate as `false` so enumeration stays total - it
/// is for callers invoking `is_actual_cause` / `is_sufficient_cause` directly
/// who want the empty case surfaced.
pub fn require_non_empty<V>(candidate: &BTreeMap<Variable, V>) -> Result<(), CandidateError> {
    if candidate.is_empty() {
        Err(CandidateError::new(
            "candidate must be a non-empty partial endogenous assignment".to_string(),
        ))
    } else {
        Ok(())
    }
}
