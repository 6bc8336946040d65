/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2025" . The Causal Explainer Authors and Contributors. All Rights Reserved.
 */

use crate::errors::SettingError;
use crate::types::network::CausalNetwork;
use crate::types::variable::Variable;
use std::collections::{BTreeMap, BTreeSet};

/// `(N, c, Dx, Dy)`, immutable once constructed.
pub struct CausalSetting<V> {
    network: CausalNetwork<V>,
    context: BTreeMap<Variable, V>,
    exogenous_domains: BTreeMap<Variable, BTreeSet<V>>,
    endogenous_domains: BTreeMap<Variable, BTreeSet<V>>,
    values: BTreeMap<Variable, V>,
}

impl<V> CausalSetting<V>
where
    V: Clone + Eq + Ord,
{
    /// Validates in this fixed order:
    /// 1. the network's signature matches `keys(context)`, `keys(exogenous_domains)`, `keys(endogenous_domains)`;
    /// 2. every exogenous value lies in its declared domain;
    /// 3. `evaluate(context)` is run to derive the endogenous values;
    /// 4. every endogenous value lies in its declared domain.
    pub fn new(
        network: CausalNetwork<V>,
        context: BTreeMap<Variable, V>,
        exogenous_domains: BTreeMap<Variable, BTreeSet<V>>,
        endogenous_domains: BTreeMap<Variable, BTreeSet<V>>,
    ) -> Result<Self, SettingError> {
        let (exogenous_variables, endogenous_variables) = network.signature();

        for variable in exogenous_variables.iter() {
            if !context.contains_key(variable) || !exogenous_domains.contains_key(variable) {
                return Err(SettingError::SignatureMismatch {
                    variable: variable.clone(),
                });
            }
        }
        for variable in context.keys().chain(exogenous_domains.keys()) {
            if !exogenous_variables.contains(variable) {
                return Err(SettingError::SignatureMismatch {
                    variable: variable.clone(),
                });
            }
        }
        for variable in endogenous_variables.iter() {
            if !endogenous_domains.contains_key(variable) {
                return Err(SettingError::SignatureMismatch {
                    variable: variable.clone(),
                });
            }
        }
        for variable in endogenous_domains.keys() {
            if !endogenous_variables.contains(variable) {
                return Err(SettingError::SignatureMismatch {
                    variable: variable.clone(),
                });
            }
        }

        for (variable, value) in context.iter() {
            let domain = &exogenous_domains[variable];
            if !domain.contains(value) {
                return Err(SettingError::ExogenousOutOfDomain {
                    variable: variable.clone(),
                });
            }
        }

        let derived = network.evaluate(&context);

        let mut values = context.clone();
        values.extend(derived);

        for (variable, domain) in endogenous_domains.iter() {
            let value = values
                .get(variable)
                .expect("endogenous variable missing from evaluated values");
            if !domain.contains(value) {
                return Err(SettingError::DomainViolation {
                    variable: variable.clone(),
                });
            }
        }

        Ok(Self {
            network,
            context,
            exogenous_domains,
            endogenous_domains,
            values,
        })
    }

    /// Builds a new setting by intervening `self.network` with `overrides`
    /// and re-validating against `self`'s original context and domains (used
    /// by `CausalFormula::entailed_by`, and by SC3's context sweep with a
    /// different `context`).
    pub fn with_intervention(
        &self,
        overrides: BTreeMap<Variable, V>,
    ) -> Result<Self, SettingError> {
        let network = self.network.intervene(overrides);
        Self::new(
            network,
            self.context.clone(),
            self.exogenous_domains.clone(),
            self.endogenous_domains.clone(),
        )
    }

    pub fn values(&self) -> &BTreeMap<Variable, V> {
        &self.values
    }

    pub fn context(&self) -> &BTreeMap<Variable, V> {
        &self.context
    }

    pub fn exogenous_domains(&self) -> &BTreeMap<Variable, BTreeSet<V>> {
        &self.exogenous_domains
    }

    pub fn endogenous_domains(&self) -> &BTreeMap<Variable, BTreeSet<V>> {
        &self.endogenous_domains
    }

    pub fn network(&self) -> &CausalNetwork<V> {
        &self.network
    }
}
