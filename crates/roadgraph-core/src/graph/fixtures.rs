//! Shared graphs for unit tests

use crate::graph::Graph;

/// The ten-town reference table, with adjacency lists exactly as surveyed
/// (several roads are only listed from one side).
pub fn reference_towns() -> Graph {
    Graph::from_adjacency(vec![
        (
            "Madrid",
            vec![
                ("Alcorcón", 13.0),
                ("Villaviciosa de Odón", 22.0),
                ("Alcalá de Henares", 35.0),
            ],
        ),
        (
            "Villanueva de la Cañada",
            vec![("Villaviciosa de Odón", 11.0), ("Boadilla del Monte", 7.0)],
        ),
        ("Alcorcón", vec![("Madrid", 13.0), ("Móstoles", 5.0)]),
        ("Móstoles", vec![("Alcorcón", 5.0), ("Fuenlabrada", 8.0)]),
        ("Fuenlabrada", vec![("Móstoles", 8.0), ("Getafe", 10.0)]),
        ("Getafe", vec![("Fuenlabrada", 10.0), ("Madrid", 16.0)]),
        (
            "Villaviciosa de Odón",
            vec![("Madrid", 22.0), ("Villanueva de la Cañada", 11.0)],
        ),
        (
            "Boadilla del Monte",
            vec![("Villanueva de la Cañada", 7.0), ("Madrid", 15.0)],
        ),
        (
            "Alcalá de Henares",
            vec![("Madrid", 35.0), ("Torrejón de Ardoz", 15.0)],
        ),
        (
            "Torrejón de Ardoz",
            vec![("Alcalá de Henares", 15.0), ("Madrid", 20.0)],
        ),
    ])
    .unwrap()
}

/// Symmetric graph built from undirected roads
pub fn undirected(roads: &[(&str, &str, f64)]) -> Graph {
    let mut g = Graph::new();
    for &(a, b, w) in roads {
        g.connect(a, b, w).unwrap();
    }
    g
}

/// A - B - C - D - ... chain with unit weights
pub fn chain(n: usize) -> Graph {
    let mut g = Graph::new();
    g.add_node("n0");
    for i in 0..n.saturating_sub(1) {
        g.connect(&format!("n{}", i), &format!("n{}", i + 1), 1.0)
            .unwrap();
    }
    g
}

/// Complete graph on `n` nodes with unit weights
pub fn complete(n: usize) -> Graph {
    let mut g = Graph::new();
    for i in 0..n {
        g.add_node(format!("k{}", i));
    }
    for i in 0..n {
        for j in (i + 1)..n {
            g.connect(&format!("k{}", i), &format!("k{}", j), 1.0)
                .unwrap();
        }
    }
    g
}
