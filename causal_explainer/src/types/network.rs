/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2025" . The Causal Explainer Authors and Contributors. All Rights Reserved.
 */

use crate::errors::GraphError;
use crate::types::variable::Variable;
use petgraph::algo::{has_path_connecting, toposort};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::rc::Rc;

/// A pure, deterministic function from a parent valuation to a value,
/// supplied by the caller.
pub type StructuralEquation<V> = dyn Fn(&BTreeMap<Variable, V>) -> V + Send + Sync;

/// `(G, F)` plus an override map `B` representing an active intervention.
///
/// `graph`, `index` and `equations` are reference-counted so that
/// `intervene` never deep-copies the structural model - only `overrides`
/// differs between a network and its interventions. The side `index` map
/// exists because petgraph has no way to look a node up by its weight.
pub struct CausalNetwork<V> {
    graph: Rc<DiGraph<Variable, ()>>,
    index: Rc<HashMap<Variable, NodeIndex>>,
    equations: Rc<HashMap<Variable, Rc<StructuralEquation<V>>>>,
    overrides: BTreeMap<Variable, V>,
}

impl<V> Clone for CausalNetwork<V>
where
    V: Clone,
{
    fn clone(&self) -> Self {
        Self {
            graph: Rc::clone(&self.graph),
            index: Rc::clone(&self.index),
            equations: Rc::clone(&self.equations),
            overrides: self.overrides.clone(),
        }
    }
}

impl<V> Default for CausalNetwork<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> CausalNetwork<V> {
    pub fn new() -> Self {
        Self {
            graph: Rc::new(DiGraph::new()),
            index: Rc::new(HashMap::new()),
            equations: Rc::new(HashMap::new()),
            overrides: BTreeMap::new(),
        }
    }

    /// Registers edges `parent -> variable` for each parent and records the
    /// structural equation for `variable`. Fails with `GraphError` if any
    /// parent is already reachable from `variable` (i.e. the edge would
    /// close a cycle) without mutating the graph.
    pub fn add_dependency<F>(
        &mut self,
        variable: Variable,
        parents: &[Variable],
        equation: F,
    ) -> Result<(), GraphError>
    where
        F: Fn(&BTreeMap<Variable, V>) -> V + Send + Sync + 'static,
    {
        let graph = Rc::make_mut(&mut self.graph);
        let index = Rc::make_mut(&mut self.index);

        let child_index = *index
            .entry(variable.clone())
            .or_insert_with(|| graph.add_node(variable.clone()));

        let parent_indices: Vec<NodeIndex> = parents
            .iter()
            .map(|parent| {
                *index
                    .entry(parent.clone())
                    .or_insert_with(|| graph.add_node(parent.clone()))
            })
            .collect();

        for &parent_index in &parent_indices {
            if parent_index == child_index
                || has_path_connecting(&*graph, child_index, parent_index, None)
            {
                return Err(GraphError::new(variable));
            }
        }

        for parent_index in parent_indices {
            graph.add_edge(parent_index, child_index, ());
        }

        Rc::make_mut(&mut self.equations).insert(variable, Rc::new(equation));
        Ok(())
    }

    /// `(exogenous, endogenous)`: exogenous variables are sources of `G`,
    /// endogenous variables are everything else.
    pub fn signature(&self) -> (BTreeSet<Variable>, BTreeSet<Variable>) {
        let mut exogenous = BTreeSet::new();
        let mut endogenous = BTreeSet::new();

        for node in self.graph.node_indices() {
            let variable = self.graph[node].clone();
            let has_parent = self
                .graph
                .edges_directed(node, Direction::Incoming)
                .next()
                .is_some();
            if has_parent {
                endogenous.insert(variable);
            } else {
                exogenous.insert(variable);
            }
        }

        (exogenous, endogenous)
    }

    /// Returns a new network sharing `G` and `F` with `B` replaced by
    /// `overrides`. O(1) beyond cloning the override map.
    pub fn intervene(&self, overrides: BTreeMap<Variable, V>) -> Self
    where
        V: Clone,
    {
        Self {
            graph: Rc::clone(&self.graph),
            index: Rc::clone(&self.index),
            equations: Rc::clone(&self.equations),
            overrides,
        }
    }

    /// The active override map `B`.
    pub fn overrides(&self) -> &BTreeMap<Variable, V> {
        &self.overrides
    }

    /// Forward evaluation: topologically sort `G`; for each variable, carry
    /// forward its context value if exogenous, otherwise emit the pinned
    /// override or invoke its structural equation on the parent-restricted
    /// valuation. Returns only the endogenous variables.
    pub fn evaluate(&self, context: &BTreeMap<Variable, V>) -> BTreeMap<Variable, V>
    where
        V: Clone,
    {
        let order = toposort(self.graph.as_ref(), None)
            .expect("CausalNetwork is acyclic by construction");

        let mut values: BTreeMap<Variable, V> = context.clone();
        for node in order {
            let variable = self.graph[node].clone();
            if values.contains_key(&variable) {
                continue;
            }

            let value = if let Some(pinned) = self.overrides.get(&variable) {
                pinned.clone()
            } else {
                let equation = self.equations.get(&variable).unwrap_or_else(|| {
                    panic!("endogenous variable {variable} has no structural equation")
                });
                let parent_values: BTreeMap<Variable, V> = self
                    .graph
                    .neighbors_directed(node, Direction::Incoming)
                    .map(|parent_node| {
                        let parent_variable = self.graph[parent_node].clone();
                        let parent_value = values
                            .get(&parent_variable)
                            .unwrap_or_else(|| {
                                panic!("parent {parent_variable} evaluated after child {variable}")
                            })
                            .clone();
                        (parent_variable, parent_value)
                    })
                    .collect();
                equation(&parent_values)
            };
            values.insert(variable, value);
        }

        values
            .into_iter()
            .filter(|(variable, _)| !context.contains_key(variable))
            .collect()
    }
}
