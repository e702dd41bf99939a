use super::*;
use crate::decomposition::{take_step, Decomposer, StrategyType};
use crate::description::{AbstractCurve, Description, Zone};
use crate::testing::arb_description;
use proptest::prelude::*;

fn desc(text: &str) -> Description {
    Description::from_informal(text)
}

fn zone(labels: &str) -> Zone {
    Zone::from_curves(labels.chars())
}

fn plan(text: &str, kind: StrategyType) -> Vec<RecompositionStep> {
    let steps = Decomposer::new(kind)
        .unwrap()
        .decompose(&desc(text))
        .unwrap();
    recompose(&steps).unwrap()
}

#[test]
fn two_curve_example_round_trips() {
    let d = desc("a b ab");
    let steps = Decomposer::new(StrategyType::Innermost)
        .unwrap()
        .decompose(&d)
        .unwrap();
    assert_eq!(steps.len(), 2);
    let recomposed = recompose(&steps).unwrap();
    assert_eq!(recomposed.len(), 2);

    let first = &recomposed[0];
    assert_eq!(first.added_curve(), &AbstractCurve::from('b'));
    assert_eq!(first.from(), &Description::empty());
    assert_eq!(first.data().split_zones, vec![Zone::OUTSIDE]);
    assert_eq!(first.data().added_zones, vec![zone("b")]);
    assert!(first.data().is_nested());

    let second = &recomposed[1];
    assert_eq!(second.added_curve(), &AbstractCurve::from('a'));
    assert_eq!(second.from(), first.to());
    assert_eq!(second.data().split_zones, vec![Zone::OUTSIDE, zone("b")]);
    assert_eq!(second.data().added_zones, vec![zone("a"), zone("ab")]);
    assert!(second.data().is_single_piercing());
    assert!(second.data().covered_zones.is_empty());

    let last = second.to();
    let zones: Vec<Zone> = last.zones().iter().cloned().collect();
    assert_eq!(zones, vec![Zone::OUTSIDE, zone("a"), zone("b"), zone("ab")]);
    assert_eq!(last.curves(), d.curves());
}

#[test]
fn first_step_seeds_matched_zones() {
    let step = take_step(&desc("a"), &AbstractCurve::from('a'));
    let (first, matched) = recompose_first_step(&step).unwrap();
    assert_eq!(first.to(), &desc("a"));
    assert_eq!(first.data().split_zones, vec![Zone::OUTSIDE]);
    assert_eq!(first.data().added_zones, vec![zone("a")]);
    assert_eq!(matched.len(), 2);
    assert_eq!(matched.get(&Zone::OUTSIDE), Some(&Zone::OUTSIDE));
    assert_eq!(matched.get(&zone("a")), Some(&zone("a")));
}

#[test]
fn unmatched_zone_aborts() {
    // Removing `b` from "b ab" moves {b}->{} and {a,b}->{a}; {a} is never matched.
    let step = take_step(&desc("b ab"), &AbstractCurve::from('b'));
    let previous = step.to().clone();
    let err = recompose_step(&step, &previous, MatchedZones::seed()).unwrap_err();
    assert_eq!(
        err,
        RecomposeError::UnmatchedZone {
            zone: zone("a"),
            curve: AbstractCurve::from('b')
        }
    );
}

#[test]
fn empty_decomposition_recomposes_to_nothing() {
    assert!(recompose(&[]).unwrap().is_empty());
}

#[test]
fn nested_curve_covers_its_host() {
    // {b} exists only inside `a`: reinserting `a` covers it.
    let recomposed = plan("ab", StrategyType::Innermost);
    let last = recomposed.last().unwrap();
    assert_eq!(last.to(), &desc("ab"));
    let covered: Vec<Zone> = recomposed
        .iter()
        .flat_map(|s| s.data().covered_zones.iter().cloned())
        .collect();
    assert_eq!(covered.len(), 1);
}

#[test]
fn venn3_recomposition_splits_powers_of_two() {
    let recomposed = plan("a b c ab ac bc abc", StrategyType::PiercedFirst);
    let sizes: Vec<usize> = recomposed
        .iter()
        .map(|s| s.data().split_zones.len())
        .collect();
    assert_eq!(sizes, vec![1, 2, 4]);
    assert!(recomposed[2].data().is_maybe_double_piercing());
    assert_eq!(recomposed[2].to(), &desc("a b c ab ac bc abc"));
}

#[test]
fn step_validation_rejects_bad_curves() {
    let data = RecompositionData {
        added_curve: AbstractCurve::from('a'),
        split_zones: vec![Zone::OUTSIDE],
        added_zones: vec![zone("a")],
        covered_zones: Vec::new(),
    };
    let err = RecompositionStep::new(desc("a"), desc("a"), data.clone()).unwrap_err();
    assert!(matches!(err, RecomposeError::CurveAlreadyPresent { .. }));
    let err = RecompositionStep::new(Description::empty(), desc("b"), data.clone()).unwrap_err();
    assert!(matches!(err, RecomposeError::CurveMissing { .. }));
    assert!(RecompositionStep::new(Description::empty(), desc("a"), data).is_ok());
}

#[test]
fn data_classification() {
    let mk = |n: usize| RecompositionData {
        added_curve: AbstractCurve::from('z'),
        split_zones: vec![Zone::OUTSIDE; n],
        added_zones: vec![zone("z"); n],
        covered_zones: Vec::new(),
    };
    assert!(mk(1).is_nested());
    assert!(mk(2).is_single_piercing());
    assert!(mk(4).is_maybe_double_piercing());
    assert!(mk(5).is_not_piercing());
    assert!(!mk(3).is_not_piercing() && !mk(3).is_maybe_double_piercing());
    assert_eq!(mk(2).split_zone(1), Some(&Zone::OUTSIDE));
    assert_eq!(mk(2).split_zone(2), None);
}

#[test]
fn cluster_pair_requires_adjacency() {
    assert!(Cluster::pair(zone("a"), zone("ab")).is_ok());
    let err = Cluster::pair(zone("a"), zone("b")).unwrap_err();
    assert_eq!(
        err,
        ClusterError::NonAdjacent {
            first: zone("a"),
            second: zone("b")
        }
    );
}

#[test]
fn cluster_quad_requires_consistent_straddles() {
    // {} -a- {a}, {} -b- {b}, {a} -b- {ab}, {b} -a- {ab}
    let ok = Cluster::quad(Zone::OUTSIDE, zone("a"), zone("b"), zone("ab")).unwrap();
    assert_eq!(ok.len(), 4);
    // z2|z4 straddles `c` but z1|z3 straddles `b`.
    let err = Cluster::quad(Zone::OUTSIDE, zone("a"), zone("b"), zone("ac")).unwrap_err();
    assert!(matches!(err, ClusterError::NonAdjacent { .. }));
    // z1|z3 not adjacent at all.
    assert!(Cluster::quad(Zone::OUTSIDE, zone("a"), zone("bc"), zone("abc")).is_err());
}

#[test]
fn cluster_new_dispatches_on_size() {
    assert_eq!(Cluster::new(vec![zone("a")]).unwrap().len(), 1);
    assert!(Cluster::new(vec![zone("a"), zone("ab")]).is_ok());
    assert_eq!(
        Cluster::new(vec![zone("a"), zone("ab"), zone("b")]).unwrap_err(),
        ClusterError::UnsupportedSize { len: 3 }
    );
    assert!(Cluster::new(Vec::new()).is_err());
}

#[test]
fn cluster_equality_ignores_order() {
    let c1 = Cluster::pair(zone("a"), zone("ab")).unwrap();
    let c2 = Cluster::pair(zone("ab"), zone("a")).unwrap();
    assert_eq!(c1, c2);
    assert_eq!(c1.to_string(), "[{a}, {a,b}]");
    assert_ne!(c1, Cluster::single(zone("a")));
}

proptest! {
    #[test]
    fn recomposition_round_trips(d in arb_description()) {
        for kind in [StrategyType::Innermost, StrategyType::PiercedFirst] {
            let steps = Decomposer::new(kind).unwrap().decompose(&d).unwrap();
            let recomposed = recompose(&steps).unwrap();
            prop_assert_eq!(recomposed.len(), steps.len());
            let last = recomposed.last().map(|s| s.to().clone()).unwrap_or_else(Description::empty);
            prop_assert_eq!(last.curves(), d.curves());
            prop_assert_eq!(last.zones(), d.zones());
        }
    }

    #[test]
    fn split_and_added_zones_align(d in arb_description()) {
        let steps = Decomposer::new(StrategyType::Innermost).unwrap().decompose(&d).unwrap();
        for step in recompose(&steps).unwrap() {
            let data = step.data();
            prop_assert_eq!(data.split_zones.len(), data.added_zones.len());
            for (split, added) in data.split_zones.iter().zip(&data.added_zones) {
                prop_assert!(step.from().includes_zone(split));
                prop_assert!(step.to().includes_zone(added));
                prop_assert_eq!(&split.move_inside(&data.added_curve), added);
            }
            for covered in &data.covered_zones {
                prop_assert!(!step.to().includes_zone(covered));
            }
        }
    }
}

#[test]
fn zoneless_curve_enters_without_splitting() {
    use std::collections::BTreeSet;

    let a = AbstractCurve::from('a');
    let lone: BTreeSet<AbstractCurve> = [a.clone()].into_iter().collect();
    let d = Description::new(lone, BTreeSet::new());
    let steps = Decomposer::new(StrategyType::Innermost)
        .unwrap()
        .decompose(&d)
        .unwrap();
    let (first, matched) = recompose_first_step(&steps[0]).unwrap();
    assert_eq!(first.added_curve(), &a);
    assert!(first.data().split_zones.is_empty());
    assert!(first.data().added_zones.is_empty());
    assert_eq!(first.to(), &d);
    assert_eq!(matched, MatchedZones::seed());

    // Same rule mid-walk: `b` has no zone and is removed first, so inserted last.
    let curves: BTreeSet<AbstractCurve> = "ab".chars().map(AbstractCurve::from).collect();
    let zones: BTreeSet<Zone> = [zone("a")].into_iter().collect();
    let d = Description::new(curves, zones);
    let recomposed = plan_steps(&d);
    assert_eq!(recomposed.len(), 2);
    assert!(recomposed[0].data().is_nested());
    assert!(recomposed[1].data().split_zones.is_empty());
    assert_eq!(recomposed[1].to(), &d);
}

fn plan_steps(d: &Description) -> Vec<RecompositionStep> {
    let steps = Decomposer::new(StrategyType::Innermost)
        .unwrap()
        .decompose(d)
        .unwrap();
    recompose(&steps).unwrap()
}

fn split_only(zones: &[&str]) -> RecompositionData {
    RecompositionData {
        added_curve: AbstractCurve::from('z'),
        split_zones: zones.iter().map(|z| zone(z)).collect(),
        added_zones: zones.iter().map(|z| zone(z).move_inside(&AbstractCurve::from('z'))).collect(),
        covered_zones: Vec::new(),
    }
}

#[test]
fn clusters_follow_recomposition_of_venn3() {
    let recomposed = plan("a b c ab ac bc abc", StrategyType::PiercedFirst);
    let sizes: Vec<Vec<usize>> = recomposed
        .iter()
        .map(|s| clusters(s.data()).iter().map(Cluster::len).collect())
        .collect();
    assert_eq!(sizes, vec![vec![1], vec![2], vec![4]]);
    let quad = &clusters(recomposed[2].data())[0];
    assert_eq!(
        quad,
        &Cluster::quad(Zone::OUTSIDE, zone("b"), zone("c"), zone("bc")).unwrap()
    );
}

#[test]
fn clusters_fall_back_to_pairs_and_singles() {
    // {a}|{ab} adjacent, {c} touches neither.
    let groups = clusters(&split_only(&["a", "c", "ab"]));
    assert_eq!(
        groups,
        vec![
            Cluster::pair(zone("a"), zone("ab")).unwrap(),
            Cluster::single(zone("c"))
        ]
    );
    assert_eq!(clusters(&split_only(&["a", "b"])).len(), 2);
    assert!(clusters(&split_only(&[])).is_empty());
}
