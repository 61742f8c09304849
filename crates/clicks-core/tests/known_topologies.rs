//! Known-topology regression tests for click distances.
//!
//! Each test uses a hand-crafted graph whose distances can be read off by
//! hand. Expected values are hardcoded, so any change in traversal order,
//! depth bookkeeping or aggregation shows up here.

use clicks_core::{
    CategoryDistance, ClickError, Dataset, Distance, Frontier, PageGraph, degree_centrality,
    min_clicks, most_central, rank_categories, reachable_pages,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn build_graph(edges: &[(&str, &str)]) -> PageGraph {
    PageGraph::from_edges(Vec::<&str>::new(), edges.iter().copied())
}

fn sorted(pages: impl IntoIterator<Item = impl AsRef<str>>) -> Vec<String> {
    let mut v: Vec<String> = pages.into_iter().map(|p| p.as_ref().to_string()).collect();
    v.sort();
    v
}

// ===========================================================================
// Topology 1: Path 1 – 2 – 3 – 4 – 5
// ===========================================================================

fn path5() -> PageGraph {
    build_graph(&[("1", "2"), ("2", "3"), ("3", "4"), ("4", "5")])
}

#[test]
fn path_single_far_target() {
    assert_eq!(min_clicks(&path5(), "1", ["5"]), Ok(Distance::Clicks(4)));
}

#[test]
fn path_needs_depth_of_farthest_target() {
    assert_eq!(min_clicks(&path5(), "1", ["3", "5"]), Ok(Distance::Clicks(4)));
    assert_eq!(min_clicks(&path5(), "3", ["1", "5"]), Ok(Distance::Clicks(2)));
}

#[test]
fn path_missing_node_is_disconnected() {
    assert_eq!(min_clicks(&path5(), "1", ["6"]), Ok(Distance::Disconnected));
}

#[test]
fn path_reach_grows_one_page_per_click() {
    let g = path5();
    for depth in 1..=4 {
        let reached = reachable_pages(&g, "1", depth).expect("reach");
        assert_eq!(reached.len(), depth + 1, "depth {depth}");
    }
    assert_eq!(reachable_pages(&g, "1", 9).expect("reach").len(), 5);
}

// ===========================================================================
// Topology 2: Star with center c and leaves a, b, d
// ===========================================================================

fn star() -> PageGraph {
    build_graph(&[("c", "a"), ("c", "b"), ("c", "d")])
}

#[test]
fn star_centrality() {
    let scores = degree_centrality(&star()).expect("centrality");
    for s in &scores {
        let expected = if s.page == "c" { 1.0 } else { 0.3333 };
        assert!(
            (s.score - expected).abs() < 1e-12,
            "{} scored {}",
            s.page,
            s.score
        );
    }
    assert_eq!(most_central(&star()).expect("center").page, "c");
}

#[test]
fn star_leaf_to_leaf_is_two_clicks() {
    assert_eq!(min_clicks(&star(), "a", ["b"]), Ok(Distance::Clicks(2)));
    assert_eq!(min_clicks(&star(), "a", ["b", "d"]), Ok(Distance::Clicks(2)));
    assert_eq!(min_clicks(&star(), "c", ["a", "b", "d"]), Ok(Distance::Clicks(1)));
}

#[test]
fn star_depth_one_from_leaf_stops_at_center() {
    let g = star();
    let edges: Vec<_> = Frontier::new(&g, "a", 1).expect("frontier").collect();
    assert_eq!(edges, [("a", "c")]);
}

// ===========================================================================
// Topology 3: Cycle of six pages
//
//   p0 – p1 – p2
//   |          |
//   p5 – p4 – p3
// ===========================================================================

fn cycle6() -> PageGraph {
    build_graph(&[
        ("p0", "p1"),
        ("p1", "p2"),
        ("p2", "p3"),
        ("p3", "p4"),
        ("p4", "p5"),
        ("p5", "p0"),
    ])
}

#[test]
fn cycle_opposite_page_is_three_clicks() {
    assert_eq!(min_clicks(&cycle6(), "p0", ["p3"]), Ok(Distance::Clicks(3)));
    assert_eq!(min_clicks(&cycle6(), "p0", ["p2", "p4"]), Ok(Distance::Clicks(2)));
}

#[test]
fn cycle_full_enumeration_discovers_each_page_once() {
    let g = cycle6();
    let edges: Vec<_> = Frontier::new(&g, "p0", 10).expect("frontier").collect();
    assert_eq!(edges.len(), 5);
    assert_eq!(
        sorted(edges.iter().map(|(_, to)| *to)),
        sorted(["p1", "p2", "p3", "p4", "p5"])
    );
}

// ===========================================================================
// Topology 4: Two islands
// ===========================================================================

#[test]
fn islands_are_disconnected_both_ways() {
    let g = build_graph(&[("a", "b"), ("x", "y")]);
    assert_eq!(min_clicks(&g, "a", ["y"]), Ok(Distance::Disconnected));
    assert_eq!(min_clicks(&g, "y", ["a"]), Ok(Distance::Disconnected));
    assert_eq!(min_clicks(&g, "a", ["b"]), Ok(Distance::Clicks(1)));
}

// ===========================================================================
// Topology 5: Categories joined by a bridge
//
//   A: a        M: m1, m2       B: b        F: f
//
//   a – m1 – m2 – b – g1 – f
//
//   g1 has no category.
//   A→M pairs: (a,m1)=1 (a,m2)=2          median 1.5
//   A→B pairs: (a,b)=3                    median 3
//   A→F pairs: (a,f)=5                    median 5
// ===========================================================================

fn bridge() -> (PageGraph, Dataset) {
    let g = build_graph(&[("a", "m1"), ("m1", "m2"), ("m2", "b"), ("b", "g1"), ("g1", "f")]);
    let ds = Dataset::from_pairs([
        ("f", "F"),
        ("b", "B"),
        ("a", "A"),
        ("m1", "M"),
        ("m2", "M"),
        ("lost", "L"),
    ]);
    (g, ds)
}

#[test]
fn bridge_ranking_orders_by_median() {
    let (g, ds) = bridge();
    let ranked = rank_categories(&ds, &g, "A").expect("rank");
    let keys: Vec<_> = ranked.iter().map(CategoryDistance::key).collect();
    assert_eq!(keys, ["A---M", "A---B", "A---F"]);

    let medians: Vec<_> = ranked.iter().map(|c| c.median).collect();
    assert_eq!(medians, [1.5, 3.0, 5.0]);
    assert_eq!(ranked[1].pairs, 1);
}

#[test]
fn bridge_ranking_from_other_side() {
    let (g, ds) = bridge();
    let ranked = rank_categories(&ds, &g, "F").expect("rank");
    let keys: Vec<_> = ranked.iter().map(CategoryDistance::key).collect();
    // F→B = 2, F→M = median(3, 4) = 3.5, F→A = 5
    assert_eq!(keys, ["F---B", "F---M", "F---A"]);
}

#[test]
fn ranking_rejects_unknown_reference() {
    let (g, ds) = bridge();
    assert_eq!(
        rank_categories(&ds, &g, "nope"),
        Err(ClickError::UnknownCategory("nope".to_string()))
    );
}
