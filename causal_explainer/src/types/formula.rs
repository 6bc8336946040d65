/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2025" . The Causal Explainer Authors and Contributors. All Rights Reserved.
 */

use crate::errors::SettingError;
use crate::types::event::Event;
use crate::types::setting::CausalSetting;
use crate::types::variable::Variable;
use std::collections::BTreeMap;
use std::fmt;

/// `([σ] e)`: intervene, rebuild the setting under the original context,
/// evaluate `e`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CausalFormula<V> {
    intervention: BTreeMap<Variable, V>,
    event: Event<V>,
}

impl<V> CausalFormula<V> {
    pub fn new(intervention: BTreeMap<Variable, V>, event: Event<V>) -> Self {
        Self { intervention, event }
    }

    pub fn intervention(&self) -> &BTreeMap<Variable, V> {
        &self.intervention
    }

    pub fn event(&self) -> &Event<V> {
        &self.event
    }
}

impl<V> CausalFormula<V>
where
    V: Clone + Eq + Ord,
{
    /// Intervenes `setting`'s network with `self.intervention`, rebuilds a
    /// setting under the original context and domains, and evaluates
    /// `self.event` against it. The rebuild can only fail with
    /// `DomainViolation`: the signature cannot change under an intervention
    /// restricted to existing endogenous variables.
    pub fn entailed_by(&self, setting: &CausalSetting<V>) -> Result<bool, SettingError> {
        let intervened = setting.with_intervention(self.intervention.clone())?;
        Ok(self.event.entailed_by(&intervened))
    }
}

impl<V: fmt::Display> fmt::Display for CausalFormula<V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for (index, (variable, value)) in self.intervention.iter().enumerate() {
            if index > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{variable}<-{value}")?;
        }
        write!(f, "]({})", self.event)
    }
}
