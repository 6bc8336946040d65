/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2025" . The Causal Explainer Authors and Contributors. All Rights Reserved.
 */

use crate::causation::search::{enumerate_causes, sub_assignments, CauseKind};
use crate::errors::SettingError;
use crate::types::event::{assignments_to_conjunction, Event};
use crate::types::formula::CausalFormula;
use crate::types::setting::CausalSetting;
use crate::types::variable::Variable;
use std::collections::BTreeMap;

/// SC1, factuality - identical test to AC1.
pub fn satisfies_sc1<V>(
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

/// SC2, overlap with an actual cause: some actual cause of `event` in
/// `setting` shares at least one `V = v` pair with `candidate`.
pub fn satisfies_sc2<V>(
    candidate: &BTreeMap<Variable, V>,
    event: &Event<V>,
    setting: &CausalSetting<V>,
) -> Result<bool, SettingError>
where
    V: Clone + Eq + Ord,
{
    let actual_causes = enumerate_causes(event, setting, CauseKind::ActualCause)?;
    for actual_cause in &actual_causes {
        for (variable, value) in candidate.iter() {
            if actual_cause.get(variable) == Some(value) {
                return Ok(true);
            }
        }
    }
    Ok(false)
}

/// SC3, sufficiency across contexts: forcing `candidate` makes `event` hold
/// in *every* total exogenous context, not just the actual one.
pub fn satisfies_sc3<V>(
    candidate: &BTreeMap<Variable, V>,
    event: &Event<V>,
    setting: &CausalSetting<V>,
) -> Result<bool, SettingError>
where
    V: Clone + Eq + Ord,
{
    use crate::causation::search::assignments_over;

    let exogenous_variables: Vec<Variable> = setting.exogenous_domains().keys().cloned().collect();
    let formula = CausalFormula::new(candidate.clone(), event.clone());

    for context_prime in assignments_over(&exogenous_variables, setting.exogenous_domains()) {
        let setting_prime = CausalSetting::new(
            setting.network().clone(),
            context_prime,
            setting.exogenous_domains().clone(),
            setting.endogenous_domains().clone(),
        )?;
        if !formula.entailed_by(&setting_prime)? {
            return Ok(false);
        }
    }

    Ok(true)
}

/// SC1 ∧ SC2 ∧ SC3, the *weak sufficient cause* (non-minimal).
pub fn is_weak_sufficient_cause<V>(
    candidate: &BTreeMap<Variable, V>,
    event: &Event<V>,
    setting: &CausalSetting<V>,
) -> Result<bool, SettingError>
where
    V: Clone + Eq + Ord,
{
    if !satisfies_sc1(candidate, event, setting) {
        return Ok(false);
    }
    if !satisfies_sc2(candidate, event, setting)? {
        return Ok(false);
    }
    if !satisfies_sc3(candidate, event, setting)? {
        return Ok(false);
    }
    Ok(true)
}

/// SC4, minimality: no strict non-empty subset of `candidate` is itself a
/// weak sufficient cause.
pub fn satisfies_sc4<V>(
    candidate: &BTreeMap<Variable, V>,
    event: &Event<V>,
    setting: &CausalSetting<V>,
) -> Result<bool, SettingError>
where
    V: Clone + Eq + Ord,
{
    for subset in sub_assignments(candidate) {
        if !subset.is_empty()
            && subset != *candidate
            && is_weak_sufficient_cause(&subset, event, setting)?
        {
            return Ok(false);
        }
    }
    Ok(true)
}

/// `candidate` is a sufficient cause of `event` in `setting` iff
/// SC1 ∧ SC2 ∧ SC3 ∧ SC4 all hold (Halpern 2016 rather than Halpern &
/// Pearl 2005).
pub fn is_sufficient_cause<V>(
    candidate: &BTreeMap<Variable, V>,
    event: &Event<V>,
    setting: &CausalSetting<V>,
) -> Result<bool, SettingError>
where
    V: Clone + Eq + Ord,
{
    if !is_weak_sufficient_cause(candidate, event, setting)? {
        return Ok(false);
    }
    satisfies_sc4(candidate, event, setting)
}
