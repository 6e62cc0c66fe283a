use proptest::prelude::*;

use attrib_connectivity::algs::adjacency_graph::{
    AdjacencyMode, AdjacencyOpts, build_point_adjacency_graph,
};
use attrib_connectivity::algs::eligibility::eligible_points;
use attrib_connectivity::algs::labeler::{LabelOpts, SingletonPolicy};
use attrib_connectivity::algs::predicate::{AttributePredicate, MergeRule};
use attrib_connectivity::debug_invariants::DebugInvariants;
use attrib_connectivity::diagnostics::Diagnostics;
use attrib_connectivity::engine::{ConnectivityInput, run};
use attrib_connectivity::topology::group::PointGroup;
use attrib_connectivity::topology::islands::IslandMap;
use attrib_connectivity::topology::mesh::Mesh;

#[derive(Clone, Debug)]
struct Case {
    mesh: Mesh,
    values: Vec<f64>,
    group: PointGroup,
    whole_islands: bool,
    predicate: AttributePredicate,
    singletons: SingletonPolicy,
    adjacency: AdjacencyMode,
}

impl Case {
    fn input(&self) -> ConnectivityInput<'_> {
        ConnectivityInput {
            predicate: self.predicate,
            include_whole_island: self.whole_islands,
            adjacency: AdjacencyOpts {
                mode: self.adjacency,
            },
            labels: LabelOpts {
                singletons: self.singletons,
            },
            ..ConnectivityInput::new(&self.mesh, "density", &self.values, &self.group)
        }
    }
}

fn case() -> impl Strategy<Value = Case> {
    (1usize..40)
        .prop_flat_map(|n| {
            (
                Just(n),
                prop::collection::vec(prop::collection::vec(0..n, 0..5), 0..30),
                prop::collection::vec(0u8..4, n),
                prop::collection::vec(any::<bool>(), n),
                any::<bool>(),
                prop::sample::select(vec![0.0, 0.5, 1.0, 2.0]),
                prop_oneof![Just(MergeRule::Tolerance), Just(MergeRule::Floor)],
                prop_oneof![Just(SingletonPolicy::Label), Just(SingletonPolicy::Zero)],
                prop_oneof![Just(AdjacencyMode::FaceEdges), Just(AdjacencyMode::SharedFace)],
            )
        })
        .prop_map(
            |(n, faces, values, picks, whole_islands, threshold, rule, singletons, adjacency)| {
                let ids = picks
                    .iter()
                    .enumerate()
                    .filter_map(|(p, &on)| on.then_some(p));
                Case {
                    mesh: Mesh::new(n, faces).expect("faces index existing points"),
                    values: values.into_iter().map(f64::from).collect(),
                    group: PointGroup::from_ids(ids, n, &mut Diagnostics::new()),
                    whole_islands,
                    predicate: AttributePredicate::new(rule, threshold),
                    singletons,
                    adjacency,
                }
            },
        )
}

proptest! {
    #[test]
    fn ineligible_points_get_zero(c in case()) {
        let out = run(&c.input()).unwrap();
        let graph = build_point_adjacency_graph(
            &c.mesh,
            c.input().adjacency,
            &mut Diagnostics::new(),
        );
        let eligible = eligible_points(&graph, &c.group, c.whole_islands);
        for p in 0..c.mesh.point_count() {
            if !eligible.contains(p) || !c.predicate.admits(c.values[p]) {
                prop_assert_eq!(out.labels.label_of(p), 0);
            }
        }
    }

    #[test]
    fn labels_are_contiguous_and_in_discovery_order(c in case()) {
        let out = run(&c.input()).unwrap();
        prop_assert!(out.labels.validate_invariants().is_ok());
        let k = out.labels.component_count();
        let max = out.labels.labels().iter().copied().max().unwrap_or(0);
        prop_assert_eq!(max, k);

        // The seed of each component is its smallest member.
        let firsts: Vec<usize> = (1..=k)
            .map(|l| out.labels.component(l)[0])
            .collect();
        prop_assert!(firsts.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn runs_are_identical(c in case()) {
        let a = run(&c.input()).unwrap();
        let b = run(&c.input()).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn island_expansion_is_a_union_of_islands(c in case()) {
        let graph = build_point_adjacency_graph(
            &c.mesh,
            c.input().adjacency,
            &mut Diagnostics::new(),
        );
        let islands = IslandMap::from_graph(&graph);
        let eligible = eligible_points(&graph, &c.group, true);
        for &p in c.group.points() {
            prop_assert!(eligible.contains(p));
        }
        for p in 0..c.mesh.point_count() {
            for q in islands.members(islands.island_of(p)) {
                prop_assert_eq!(eligible.contains(p), eligible.contains(q));
            }
        }
    }

    #[test]
    fn merging_edges_share_a_label(c in case()) {
        let out = run(&c.input()).unwrap();
        let graph = build_point_adjacency_graph(
            &c.mesh,
            c.input().adjacency,
            &mut Diagnostics::new(),
        );
        let eligible = eligible_points(&graph, &c.group, c.whole_islands);
        for a in eligible.iter() {
            for &b in graph.neighbors(a) {
                if eligible.contains(b) && c.predicate.merges(c.values[a], c.values[b]) {
                    prop_assert_eq!(out.labels.label_of(a), out.labels.label_of(b));
                    prop_assert!(out.labels.label_of(a) > 0);
                }
            }
        }
    }

    #[test]
    fn label_policy_labels_every_admitted_point(c in case()) {
        let c = Case { singletons: SingletonPolicy::Label, ..c };
        let out = run(&c.input()).unwrap();
        let graph = build_point_adjacency_graph(
            &c.mesh,
            c.input().adjacency,
            &mut Diagnostics::new(),
        );
        let eligible = eligible_points(&graph, &c.group, c.whole_islands);
        let admitted = eligible
            .iter()
            .filter(|&p| c.predicate.admits(c.values[p]))
            .count();
        prop_assert_eq!(out.labels.positive_points().len(), admitted);
    }

    #[test]
    fn zero_policy_only_drops_singletons(c in case()) {
        let labeled = run(&Case { singletons: SingletonPolicy::Label, ..c.clone() }.input()).unwrap();
        let zeroed = run(&Case { singletons: SingletonPolicy::Zero, ..c.clone() }.input()).unwrap();
        for p in 0..c.mesh.point_count() {
            let l = labeled.labels.label_of(p);
            let size = if l == 0 { 0 } else { labeled.labels.component(l).len() };
            prop_assert_eq!(zeroed.labels.label_of(p) > 0, size > 1);
        }
    }
}
