use super::*;

use crate::parsers::NodeClassifier;
use crate::syntax::types::{Edge, Weight};

fn build(links: &[(&str, &str)]) -> GraphModel {
    let classifier = NodeClassifier::default();
    let mut g = GraphModel::new();
    for (from, to) in links {
        g.add_edge(&Edge::new(*from, *to, Weight::new(1.0, 0.0)), &classifier)
            .unwrap();
    }
    g
}

fn depths(links: &[(&str, &str)]) -> DepthMap {
    DepthAnalyzer::default().analyze(&build(links))
}

#[test]
fn test_single_link_counts_nodes_not_edges() {
    let m = depths(&[("B(1)", "O(0, x)")]);
    assert_eq!(m.depth("B(1)"), Some(0));
    assert_eq!(m.depth("O(0, x)"), Some(2));
}

#[test]
fn test_chain() {
    let m = depths(&[("B(1)", "H(1, sin)"), ("H(1, sin)", "H(2, cos)"), ("H(2, cos)", "O(0, x)")]);
    assert_eq!(m.depth("H(1, sin)"), Some(2));
    assert_eq!(m.depth("H(2, cos)"), Some(3));
    assert_eq!(m.depth("O(0, x)"), Some(4));
}

#[test]
fn test_longest_path_wins_over_shortcut() {
    let m = depths(&[
        ("B(1)", "O(0, x)"),
        ("B(1)", "H(1, sin)"),
        ("H(1, sin)", "H(2, cos)"),
        ("H(2, cos)", "O(0, x)"),
    ]);
    assert_eq!(m.depth("O(0, x)"), Some(4));
}

#[test]
fn test_maximum_over_all_inputs() {
    let m = depths(&[
        ("I(2)", "H(1, sin)"),
        ("H(1, sin)", "H(2, cos)"),
        ("B(1)", "H(2, cos)"),
    ]);
    assert_eq!(m.depth("H(2, cos)"), Some(3));
}

#[test]
fn test_unreachable_cycle_is_depth_zero() {
    let m = depths(&[("H(1, sin)", "H(2, cos)"), ("H(2, cos)", "H(1, sin)")]);
    assert_eq!(m.depth("H(1, sin)"), Some(0));
    assert_eq!(m.depth("H(2, cos)"), Some(0));
    assert_eq!(m.layer_count(), 1);
}

#[test]
fn test_reachable_cycle_uses_simple_paths_only() {
    let m = depths(&[
        ("B(1)", "H(1, sin)"),
        ("H(1, sin)", "H(2, cos)"),
        ("H(2, cos)", "H(1, sin)"),
        ("H(2, cos)", "O(0, x)"),
    ]);
    assert_eq!(m.depth("H(1, sin)"), Some(2));
    assert_eq!(m.depth("H(2, cos)"), Some(3));
    assert_eq!(m.depth("O(0, x)"), Some(4));
}

#[test]
fn test_self_loop_does_not_change_depth() {
    let m = depths(&[("B(1)", "H(1, sin)"), ("H(1, sin)", "H(1, sin)")]);
    assert_eq!(m.depth("H(1, sin)"), Some(2));
}

#[test]
fn test_inputs_are_always_depth_zero() {
    let m = depths(&[("B(1)", "H(1, sin)"), ("H(1, sin)", "I(2)"), ("I(2)", "O(0, x)")]);
    assert_eq!(m.depth("B(1)"), Some(0));
    assert_eq!(m.depth("I(2)"), Some(0));
    // B(1) -> H(1, sin) -> I(2) -> O(0, x)
    assert_eq!(m.depth("O(0, x)"), Some(4));
}

#[test]
fn test_disconnected_component_is_depth_zero() {
    let m = depths(&[("B(1)", "O(0, x)"), ("H(5, exp)", "O(1, y)")]);
    assert_eq!(m.depth("H(5, exp)"), Some(0));
    assert_eq!(m.depth("O(1, y)"), Some(0));
    assert_eq!(m.depth("O(0, x)"), Some(2));
}

#[test]
fn test_every_node_gets_a_depth() {
    let g = build(&[("B(1)", "H(1, sin)"), ("H(3, cos)", "H(1, sin)")]);
    let m = DepthAnalyzer::default().analyze(&g);
    assert_eq!(m.len(), g.node_count());
}

#[test]
fn test_analysis_is_idempotent() {
    let g = build(&[
        ("B(1)", "H(1, sin)"),
        ("I(3)", "H(2, cos)"),
        ("H(1, sin)", "H(2, cos)"),
        ("H(2, cos)", "H(1, sin)"),
        ("H(2, cos)", "O(0, x)"),
    ]);
    let analyzer = DepthAnalyzer::default();
    assert_eq!(analyzer.analyze(&g), analyzer.analyze(&g));
}

#[test]
fn test_single_node_query_matches_analysis() {
    let g = build(&[("B(1)", "H(1, sin)"), ("H(1, sin)", "O(0, x)"), ("I(2)", "O(0, x)")]);
    let analyzer = DepthAnalyzer::default();
    let m = analyzer.analyze(&g);
    for node in g.nodes() {
        assert_eq!(Some(analyzer.depth(&g, node.id.as_str())), m.depth(node.id.as_str()));
    }
    assert_eq!(analyzer.depth(&g, "absent"), 0);
}

#[test]
fn test_path_bound_limits_depth() {
    let g = build(&[
        ("B(1)", "O(0, x)"),
        ("B(1)", "H(1, sin)"),
        ("H(1, sin)", "H(2, cos)"),
        ("H(2, cos)", "O(0, x)"),
    ]);
    let config = LayoutConfig {
        max_path_nodes: Some(3),
        ..LayoutConfig::default()
    };
    let m = DepthAnalyzer::new(&config).analyze(&g);
    // The four-node path to O(0, x) is cut; the direct link remains.
    assert_eq!(m.depth("O(0, x)"), Some(2));
    assert_eq!(m.depth("H(1, sin)"), Some(2));
    assert_eq!(m.depth("H(2, cos)"), Some(3));
}

#[test]
fn test_path_bound_never_drops_reachable_node_to_input_layer() {
    let g = build(&[("B(1)", "H(1, sin)"), ("H(1, sin)", "O(0, x)")]);
    let config = LayoutConfig {
        max_path_nodes: Some(2),
        ..LayoutConfig::default()
    };
    let m = DepthAnalyzer::new(&config).analyze(&g);
    assert_eq!(m.depth("H(1, sin)"), Some(2));
    // Only path has three nodes: placed one past the bound.
    assert_eq!(m.depth("O(0, x)"), Some(3));
}

#[test]
fn test_path_bound_keeps_unreachable_nodes_at_zero() {
    let g = build(&[("B(1)", "O(0, x)"), ("H(5, exp)", "H(6, abs)"), ("H(6, abs)", "O(1, y)")]);
    let config = LayoutConfig {
        max_path_nodes: Some(2),
        ..LayoutConfig::default()
    };
    let m = DepthAnalyzer::new(&config).analyze(&g);
    assert_eq!(m.depth("H(6, abs)"), Some(0));
    assert_eq!(m.depth("O(1, y)"), Some(0));
}

#[test]
fn test_path_bound_below_two_acts_as_two() {
    let g = build(&[("B(1)", "H(1, sin)"), ("H(1, sin)", "O(0, x)")]);
    let two = DepthAnalyzer::new(&LayoutConfig {
        max_path_nodes: Some(2),
        ..LayoutConfig::default()
    })
    .analyze(&g);
    for bound in [0, 1] {
        let config = LayoutConfig {
            max_path_nodes: Some(bound),
            ..LayoutConfig::default()
        };
        let m = DepthAnalyzer::new(&config).analyze(&g);
        assert_eq!(m, two, "bound {bound}");
        assert!(m.depth("O(0, x)").unwrap() >= 1);
    }
}
