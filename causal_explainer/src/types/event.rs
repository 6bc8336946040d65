/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2025" . The Causal Explainer Authors and Contributors. All Rights Reserved.
 */

use crate::types::setting::CausalSetting;
use crate::types::variable::Variable;
use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::fmt;

/// A Boolean formula over atomic assertions `V = v`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Event<V> {
    Primitive(Variable, V),
    Not(Box<Event<V>>),
    And(Box<Event<V>>, Box<Event<V>>),
    Or(Box<Event<V>>, Box<Event<V>>),
}

impl<V> Event<V> {
    pub fn primitive(variable: Variable, value: V) -> Self {
        Event::Primitive(variable, value)
    }

    pub fn not(child: Event<V>) -> Self {
        Event::Not(Box::new(child))
    }

    pub fn and(left: Event<V>, right: Event<V>) -> Self {
        Event::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: Event<V>, right: Event<V>) -> Self {
        Event::Or(Box::new(left), Box::new(right))
    }

    /// The set of variables mentioned anywhere in the formula.
    pub fn variables(&self) -> BTreeSet<Variable> {
        match self {
            Event::Primitive(variable, _) => BTreeSet::from([variable.clone()]),
            Event::Not(child) => child.variables(),
            Event::And(left, right) | Event::Or(left, right) => {
                let mut vars = left.variables();
                vars.extend(right.variables());
                vars
            }
        }
    }
}

impl<V: PartialEq> Event<V> {
    /// Compositional evaluation against a setting's full valuation.
    ///
    /// Conjunction short-circuits on `false`, disjunction on `true` -
    /// observable only via evaluation cost, never via the result.
    pub fn entailed_by(&self, setting: &CausalSetting<V>) -> bool {
        match self {
            Event::Primitive(variable, value) => {
                setting.values().get(variable) == Some(value)
            }
            Event::Not(child) => !child.entailed_by(setting),
            Event::And(left, right) => left.entailed_by(setting) && right.entailed_by(setting),
            Event::Or(left, right) => left.entailed_by(setting) || right.entailed_by(setting),
        }
    }
}

impl<V: fmt::Display> fmt::Display for Event<V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Event::Primitive(variable, value) => write!(f, "{variable}={value}"),
            Event::Not(child) => write!(f, "!({child})"),
            Event::And(left, right) => write!(f, "({left} & {right})"),
            Event::Or(left, right) => write!(f, "({left} | {right})"),
        }
    }
}

/// Converts a non-empty partial assignment into a right-associated
/// conjunction of primitives, iterating in ascending variable-symbol order.
/// Panics if `assignment` is empty - callers are expected to have already
/// rejected empty candidates.
pub fn assignments_to_conjunction<V: Clone>(assignment: &BTreeMap<Variable, V>) -> Event<V> {
    assert!(
        !assignment.is_empty(),
        "assignments_to_conjunction requires a non-empty assignment"
    );

    let mut formula: Option<Event<V>> = None;
    for (variable, value) in assignment.iter().rev() {
        let primitive = Event::Primitive(variable.clone(), value.clone());
        formula = Some(match formula {
            None => primitive,
            Some(rest) => Event::and(primitive, rest),
        });
    }
    formula.unwrap()
}
