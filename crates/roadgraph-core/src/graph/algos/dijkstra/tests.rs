use super::*;
use crate::error::GraphError;
use crate::graph::fixtures::{chain, reference_towns, undirected};
use crate::graph::Graph;

fn path_weight(graph: &Graph, path: &[String]) -> f64 {
    path.windows(2)
        .map(|pair| {
            graph
                .neighbors(&pair[0])
                .iter()
                .find(|n| n.node == pair[1])
                .map(|n| n.weight.value())
                .expect("consecutive path nodes must be adjacent")
        })
        .sum()
}

/// Test HeapEntry comparison ordering
#[test]
fn test_heap_entry_ordering() {
    let entry1 = HeapEntry {
        node_id: "A".to_string(),
        distance: Distance::from(1),
    };
    let entry2 = HeapEntry {
        node_id: "B".to_string(),
        distance: Distance::from(2),
    };
    let entry3 = HeapEntry {
        node_id: "C".to_string(),
        distance: Distance::from(1),
    };

    assert_eq!(entry1.cmp(&entry2), std::cmp::Ordering::Less);
    assert_eq!(entry2.cmp(&entry1), std::cmp::Ordering::Greater);

    // Equal distances fall back to the node id
    assert_eq!(entry1.cmp(&entry3), std::cmp::Ordering::Less);
    assert_ne!(entry1, entry3);
    assert_eq!(entry1.cmp(&entry1.clone()), std::cmp::Ordering::Equal);

    assert_eq!(entry1, entry1);
    assert_ne!(entry1, entry2);
}

/// Min-heap pops the smallest distance first
#[test]
fn test_reverse_heap_pops_minimum() {
    let mut heap = BinaryHeap::new();
    for (id, d) in [("far", 30), ("near", 5), ("mid", 12)] {
        heap.push(Reverse(HeapEntry {
            node_id: id.to_string(),
            distance: Distance::from(d),
        }));
    }
    let Reverse(first) = heap.pop().unwrap();
    assert_eq!(first.node_id, "near");
}

#[test]
fn test_reference_madrid_to_getafe() {
    let g = reference_towns();
    let result = shortest_path(&g, "Madrid", "Getafe").unwrap();

    assert!(result.found);
    assert_eq!(
        result.path,
        vec!["Madrid", "Alcorcón", "Móstoles", "Fuenlabrada", "Getafe"]
    );
    assert_eq!(result.distance, Distance::from(36));
    assert_eq!(result.hop_count(), 4);
}

#[test]
fn test_reference_getafe_to_madrid_uses_direct_listing() {
    let g = reference_towns();
    let result = shortest_path(&g, "Getafe", "Madrid").unwrap();

    assert_eq!(result.path, vec!["Getafe", "Madrid"]);
    assert_eq!(result.distance, Distance::from(16));
}

#[test]
fn test_same_node_is_zero_length() {
    let g = reference_towns();
    let result = shortest_path(&g, "Móstoles", "Móstoles").unwrap();

    assert!(result.found);
    assert_eq!(result.path, vec!["Móstoles"]);
    assert_eq!(result.distance, Distance::ZERO);
}

#[test]
fn test_prefers_lighter_longer_path() {
    let g = undirected(&[("A", "B", 10.0), ("A", "C", 1.0), ("C", "D", 1.0), ("D", "B", 1.0)]);
    let result = shortest_path(&g, "A", "B").unwrap();

    assert_eq!(result.path, vec!["A", "C", "D", "B"]);
    assert_eq!(result.distance, Distance::from(3));
}

#[test]
fn test_reported_distance_matches_path_weight() {
    let g = reference_towns();
    let nodes: Vec<String> = g.nodes().map(String::from).collect();

    for from in &nodes {
        for to in &nodes {
            let result = shortest_path(&g, from, to).unwrap();
            assert!(result.found, "{} -> {} should be reachable", from, to);
            assert_eq!(result.path.first(), Some(from));
            assert_eq!(result.path.last(), Some(to));
            assert_eq!(result.distance.value(), path_weight(&g, &result.path));
        }
    }
}

#[test]
fn test_symmetric_distances_on_undirected_graph() {
    let g = undirected(&[
        ("Madrid", "Alcorcón", 13.0),
        ("Alcorcón", "Móstoles", 5.0),
        ("Móstoles", "Fuenlabrada", 8.0),
        ("Fuenlabrada", "Getafe", 10.0),
        ("Getafe", "Madrid", 16.0),
        ("Madrid", "Boadilla del Monte", 15.0),
    ]);
    let nodes: Vec<String> = g.nodes().map(String::from).collect();

    for a in &nodes {
        for b in &nodes {
            let ab = shortest_path(&g, a, b).unwrap();
            let ba = shortest_path(&g, b, a).unwrap();
            assert_eq!(ab.distance, ba.distance, "{} <-> {}", a, b);
        }
    }
}

#[test]
fn test_unreachable_destination() {
    let mut g = undirected(&[("A", "B", 1.0)]);
    g.connect("C", "D", 1.0).unwrap();

    let result = shortest_path(&g, "A", "D").unwrap();
    assert!(!result.found);
    assert!(result.path.is_empty());
    assert!(!result.distance.is_finite());
}

#[test]
fn test_isolated_destination_unreachable() {
    let mut g = undirected(&[("A", "B", 1.0)]);
    g.add_node("Z");

    let result = shortest_path(&g, "A", "Z").unwrap();
    assert!(!result.found);
}

#[test]
fn test_missing_origin() {
    let g = reference_towns();
    let err = shortest_path(&g, "Toledo", "Madrid").unwrap_err();
    assert!(matches!(err, GraphError::NodeNotFound { id } if id == "Toledo"));
}

#[test]
fn test_missing_destination() {
    let g = reference_towns();
    let err = shortest_path(&g, "Madrid", "Toledo").unwrap_err();
    assert!(matches!(err, GraphError::NodeNotFound { id } if id == "Toledo"));
}

#[test]
fn test_self_loop_ignored() {
    let mut g = undirected(&[("A", "B", 2.0)]);
    g.add_edge("A", "A", 0.0).unwrap();

    let result = shortest_path(&g, "A", "B").unwrap();
    assert_eq!(result.path, vec!["A", "B"]);
    assert_eq!(result.distance, Distance::from(2));
}

#[test]
fn test_zero_weight_edges() {
    let g = undirected(&[("A", "B", 0.0), ("B", "C", 0.0), ("A", "C", 1.0)]);
    let result = shortest_path(&g, "A", "C").unwrap();

    assert_eq!(result.distance, Distance::ZERO);
    assert_eq!(result.path, vec!["A", "B", "C"]);
}

#[test]
fn test_fractional_weights() {
    let g = undirected(&[("A", "B", 0.5), ("B", "C", 1.25)]);
    let result = shortest_path(&g, "A", "C").unwrap();
    assert_eq!(result.distance.value(), 1.75);
}

#[test]
fn test_long_chain() {
    let g = chain(2_000);
    let result = shortest_path(&g, "n0", "n1999").unwrap();

    assert_eq!(result.path.len(), 2_000);
    assert_eq!(result.distance, Distance::from(1_999));
}

#[test]
fn test_equal_length_paths_yield_valid_route() {
    let g = undirected(&[("A", "B", 1.0), ("B", "D", 1.0), ("A", "C", 1.0), ("C", "D", 1.0)]);
    let result = shortest_path(&g, "A", "D").unwrap();

    assert_eq!(result.distance, Distance::from(2));
    assert_eq!(result.path.len(), 3);
    assert!(result.path[1] == "B" || result.path[1] == "C");
}

/// Equal distances settle in node id order
#[test]
fn test_reverse_heap_breaks_ties_by_node_id() {
    let mut heap = BinaryHeap::new();
    for id in ["Getafe", "Alcorcón", "Móstoles"] {
        heap.push(Reverse(HeapEntry {
            node_id: id.to_string(),
            distance: Distance::from(7),
        }));
    }
    let order: Vec<String> = std::iter::from_fn(|| heap.pop().map(|Reverse(e)| e.node_id)).collect();
    assert_eq!(order, vec!["Alcorcón", "Getafe", "Móstoles"]);
}
