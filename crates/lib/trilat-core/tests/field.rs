use trilat_core::node::NeighborEntry;
use trilat_testutils::field::{field_from_points, link_exact, make_params};

#[test]
fn test_anchors_occupy_the_tail() {
    let params = make_params(4, 100, 200, 0, 75);
    let field = field_from_points(
        params,
        &[(50.0, 50.0), (0.0, 0.0), (100.0, 0.0), (0.0, 100.0)],
    );
    assert_eq!(field.anchor_count(), 3);
    assert!(!field.node(0).is_anchor);
    assert!(field.nodes()[1..].iter().all(|node| node.is_anchor));
    assert_eq!(field.initial_non_anchors(), 1);
}

#[test]
fn test_snapshot_is_independent() {
    let params = make_params(4, 100, 200, 0, 75);
    let mut field = field_from_points(
        params,
        &[(50.0, 50.0), (0.0, 0.0), (100.0, 0.0), (0.0, 100.0)],
    );
    link_exact(&mut field, 0, 1);
    let mut snapshot = field.snapshot();
    snapshot
        .node_mut(0)
        .neighbors
        .insert(NeighborEntry::new(2, 1.0));
    snapshot.node_mut(0).is_anchor = true;

    assert_eq!(field.node(0).neighbors.len(), 1);
    assert!(!field.node(0).is_anchor);
    assert_eq!(snapshot.node(0).neighbors.len(), 2);
    assert_eq!(snapshot.node(0).neighbors.as_slice()[0].node, 2);
}
