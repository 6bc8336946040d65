// SPDX-License-Identifier: MIT
// Copyright (c) "2025" . The DeepCausality Authors and Contributors. All Rights Reserved.

use causal_explainer::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

fn var(s: &str) -> Variable {
    Variable::new(s)
}

fn bool_domain() -> BTreeSet<bool> {
    BTreeSet::from([true, false])
}

fn rock_throwing() -> CausalSetting<bool> {
    let mut network: CausalNetwork<bool> = CausalNetwork::new();
    network
        .add_dependency(var("ST"), &[var("US")], |p| *p.get(&var("US")).unwrap())
        .unwrap();
    network
        .add_dependency(var("BT"), &[var("UB")], |p| *p.get(&var("UB")).unwrap())
        .unwrap();
    network
        .add_dependency(var("SH"), &[var("ST")], |p| *p.get(&var("ST")).unwrap())
        .unwrap();
    network
        .add_dependency(var("BH"), &[var("BT"), var("SH")], |p| {
            *p.get(&var("BT")).unwrap() && !*p.get(&var("SH")).unwrap()
        })
        .unwrap();
    network
        .add_dependency(var("BS"), &[var("SH"), var("BH")], |p| {
            *p.get(&var("SH")).unwrap() || *p.get(&var("BH")).unwrap()
        })
        .unwrap();

    let exogenous_domains =
        BTreeMap::from([(var("US"), bool_domain()), (var("UB"), bool_domain())]);
    let endogenous_domains = BTreeMap::from([
        (var("ST"), bool_domain()),
        (var("BT"), bool_domain()),
        (var("SH"), bool_domain()),
        (var("BH"), bool_domain()),
        (var("BS"), bool_domain()),
    ]);
    let context = BTreeMap::from([(var("US"), true), (var("UB"), true)]);
    CausalSetting::new(network, context, exogenous_domains, endogenous_domains).unwrap()
}

// `L` and `MD` are endogenous (driven by exogenous `UL`/`UMD` through an
// identity equation) so they can themselves serve as cause candidates.
fn fire(disjunctive: bool, ul: bool, umd: bool) -> CausalSetting<bool> {
    let mut network: CausalNetwork<bool> = CausalNetwork::new();
    network
        .add_dependency(var("L"), &[var("UL")], |p| *p.get(&var("UL")).unwrap())
        .unwrap();
    network
        .add_dependency(var("MD"), &[var("UMD")], |p| *p.get(&var("UMD")).unwrap())
        .unwrap();
    if disjunctive {
        network
            .add_dependency(var("FF"), &[var("L"), var("MD")], |p| {
                *p.get(&var("L")).unwrap() || *p.get(&var("MD")).unwrap()
            })
            .unwrap();
    } else {
        network
            .add_dependency(var("FF"), &[var("L"), var("MD")], |p| {
                *p.get(&var("L")).unwrap() && *p.get(&var("MD")).unwrap()
            })
            .unwrap();
    }
    let exogenous_domains =
        BTreeMap::from([(var("UL"), bool_domain()), (var("UMD"), bool_domain())]);
    let endogenous_domains = BTreeMap::from([
        (var("L"), bool_domain()),
        (var("MD"), bool_domain()),
        (var("FF"), bool_domain()),
    ]);
    let context = BTreeMap::from([(var("UL"), ul), (var("UMD"), umd)]);
    CausalSetting::new(network, context, exogenous_domains, endogenous_domains).unwrap()
}

// (a) Rock-throwing: Suzy's throw is an actual cause, Billy's is preempted,
// and the joint assignment fails AC3 minimality.
#[test]
fn scenario_a_rock_throwing() {
    let setting = rock_throwing();
    let event = Event::primitive(var("BS"), true);

    assert!(is_actual_cause(&BTreeMap::from([(var("ST"), true)]), &event, &setting).unwrap());
    assert!(!is_actual_cause(&BTreeMap::from([(var("BT"), true)]), &event, &setting).unwrap());
    assert!(!is_actual_cause(
        &BTreeMap::from([(var("ST"), true), (var("BT"), true)]),
        &event,
        &setting
    )
    .unwrap());
}

// (b) Conjunctive forest fire: both singletons are minimal actual causes,
// the pair is not. `FF` itself is also endogenous, and forcing it directly
// to its own factual value is trivially an actual cause of itself - the
// enumerator ranges over the power set of all endogenous variables with no
// special-casing of the event's own variable.
#[test]
fn scenario_b_conjunctive_fire() {
    let setting = fire(false, true, true);
    let event = Event::primitive(var("FF"), true);

    let causes = enumerate_causes(&event, &setting, CauseKind::ActualCause).unwrap();
    assert_eq!(
        causes,
        vec![
            BTreeMap::from([(var("FF"), true)]),
            BTreeMap::from([(var("L"), true)]),
            BTreeMap::from([(var("MD"), true)]),
        ]
    );
}

// (c) Disjunctive forest fire: no singleton actual cause among `L`/`MD`, but
// the pair is minimal (every strict subset fails AC2). `FF` forcing itself
// is again trivially included, see the note on scenario (b).
#[test]
fn scenario_c_disjunctive_fire() {
    let setting = fire(true, true, true);
    let event = Event::primitive(var("FF"), true);

    let causes = enumerate_causes(&event, &setting, CauseKind::ActualCause).unwrap();
    assert_eq!(
        causes,
        vec![
            BTreeMap::from([(var("FF"), true)]),
            BTreeMap::from([(var("L"), true), (var("MD"), true)]),
        ]
    );
}

// (d) Sufficient cause, disjunctive fire: {L=1} is sufficient even though
// it is not itself an actual cause.
#[test]
fn scenario_d_sufficient_cause_disjunctive_fire() {
    let setting = fire(true, true, true);
    let event = Event::primitive(var("FF"), true);
    let candidate = BTreeMap::from([(var("L"), true)]);

    assert!(is_sufficient_cause(&candidate, &event, &setting).unwrap());
}

// (e) Domain-violation detection: a structural equation returning a value
// outside its declared domain must surface as a `SettingError`.
#[test]
fn scenario_e_domain_violation_is_detected() {
    let mut network: CausalNetwork<u8> = CausalNetwork::new();
    network.add_dependency(var("Y"), &[var("X")], |_| 2u8).unwrap();

    let context = BTreeMap::from([(var("X"), 0u8)]);
    let exogenous_domains = BTreeMap::from([(var("X"), BTreeSet::from([0u8, 1u8]))]);
    let endogenous_domains = BTreeMap::from([(var("Y"), BTreeSet::from([0u8, 1u8]))]);

    let err = CausalSetting::new(network, context, exogenous_domains, endogenous_domains)
        .expect_err("value 2 is outside the declared domain {0, 1}");
    assert!(matches!(err, SettingError::DomainViolation { .. }));
}

// (f) Empty candidate: never an actual or sufficient cause, for any event.
#[test]
fn scenario_f_empty_candidate_is_never_a_cause() {
    let setting = rock_throwing();
    let event = Event::primitive(var("BS"), true);

    assert!(!is_actual_cause(&BTreeMap::new(), &event, &setting).unwrap());
    assert!(!is_sufficient_cause(&BTreeMap::new(), &event, &setting).unwrap());
    assert!(require_non_empty::<bool>(&BTreeMap::new()).is_err());
}

// Law 4: AC1 subsumption - every actual cause is a weak actual cause.
#[test]
fn law_actual_cause_implies_weak_actual_cause() {
    let setting = rock_throwing();
    let event = Event::primitive(var("BS"), true);
    let suzy = BTreeMap::from([(var("ST"), true)]);

    assert!(is_actual_cause(&suzy, &event, &setting).unwrap());
    assert!(is_weak_actual_cause(&suzy, &event, &setting).unwrap());
}

// Law 2: intervention composition - a later override on the same variable
// wins, earlier overrides on other variables are preserved.
#[test]
fn law_intervention_composition() {
    let mut network: CausalNetwork<bool> = CausalNetwork::new();
    network
        .add_dependency(var("Y"), &[var("X")], |p| *p.get(&var("X")).unwrap())
        .unwrap();
    network
        .add_dependency(var("Z"), &[var("Y")], |p| *p.get(&var("Y")).unwrap())
        .unwrap();

    let once = network.intervene(BTreeMap::from([(var("Y"), true), (var("Z"), false)]));
    let twice = once.intervene(BTreeMap::from([(var("Z"), true)]));

    let context = BTreeMap::from([(var("X"), false)]);
    let derived = twice.evaluate(&context);

    assert_eq!(derived.get(&var("Z")), Some(&true));
    assert_eq!(once.evaluate(&context).get(&var("Y")), Some(&true));
}

// Law 3: identity intervention - entailment under `[∅] e` matches plain
// entailment of `e`.
#[test]
fn law_identity_intervention_matches_plain_entailment() {
    let setting = rock_throwing();
    let event = Event::primitive(var("BS"), true);
    let identity = CausalFormula::new(BTreeMap::new(), event.clone());

    assert_eq!(identity.entailed_by(&setting).unwrap(), event.entailed_by(&setting));
}

// Law 8: enumeration determinism - repeated calls produce the same ordered
// sequence.
#[test]
fn law_enumeration_is_deterministic_across_calls() {
    let setting = fire(false, true, true);
    let event = Event::primitive(var("FF"), true);

    let first = enumerate_causes(&event, &setting, CauseKind::ActualCause).unwrap();
    let second = enumerate_causes(&event, &setting, CauseKind::ActualCause).unwrap();
    assert_eq!(first, second);
}
