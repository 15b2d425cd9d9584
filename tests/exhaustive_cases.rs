use hamstar::strategies::Exhaustive;
use hamstar::{AdjacencyMatrix, SolveError, Solver, Strategy};

/// N = 12 (n = 4). The only 4-vertex path from 0 to 7 is 0-3-5-7; the
/// shortcuts 0-7 and 3-7 give shorter paths that must not count, and the
/// triangle 8-9-10 is a distraction elsewhere.
fn unique_path_graph() -> AdjacencyMatrix {
    AdjacencyMatrix::from_edges(
        12,
        &[(0, 3), (3, 5), (5, 7), (0, 7), (3, 7), (8, 9), (9, 10), (8, 10)],
    )
}

#[test]
fn finds_the_single_qualifying_path() {
    assert_eq!(Exhaustive.decide(&unique_path_graph(), 0, 7), Ok(true));
    assert_eq!(Exhaustive.decide(&unique_path_graph(), 7, 0), Ok(true));
}

#[test]
fn removing_the_critical_edge_flips_the_answer() {
    let mut g = unique_path_graph();
    g.remove_edge(3, 5);
    assert_eq!(Exhaustive.decide(&g, 0, 7), Ok(false));
}

#[test]
fn longer_paths_do_not_count() {
    // 0-1-2-3-4-5 is a path of six vertices, but N = 12 asks for exactly four
    let g = AdjacencyMatrix::from_edges(12, &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5)]);
    assert_eq!(Exhaustive.decide(&g, 0, 5), Ok(false));
    assert_eq!(Exhaustive.decide(&g, 0, 3), Ok(true));
    assert_eq!(Exhaustive.decide(&g, 1, 4), Ok(true));
}

#[test]
fn differs_from_the_component_question() {
    // Whole-component path 0-3-5-7 exists in the 4-vertex component {0,3,5,7},
    // so all three strategies agree here ...
    let solver = Solver::new();
    let g = unique_path_graph();
    for name in ["exhaustive", "component-pruned", "dp"] {
        assert_eq!(solver.execute(&g, 0, 7, name), Ok(true), "{name}");
    }
    // ... but on the 6-vertex path the component strategies must cover all six.
    let path6 = AdjacencyMatrix::from_edges(12, &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5)]);
    assert_eq!(solver.execute(&path6, 0, 3, "exhaustive"), Ok(true));
    assert_eq!(solver.execute(&path6, 0, 3, "component-pruned"), Ok(false));
    assert_eq!(solver.execute(&path6, 0, 3, "dp"), Ok(false));
    assert_eq!(solver.execute(&path6, 0, 5, "dp"), Ok(true));
}

#[test]
fn vertex_count_must_be_a_multiple_of_three() {
    let g = AdjacencyMatrix::from_edges(10, &[(0, 1)]);
    assert_eq!(
        Exhaustive.decide(&g, 0, 1),
        Err(SolveError::VertexCountNotDivisibleByThree(10))
    );
    assert_eq!(Exhaustive::path_length(12), Ok(4));
}
