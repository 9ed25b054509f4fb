// tests/hierarchy.rs
use anyhow::Result;
use ironseq::*;
use std::rc::Rc;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn init_test_logger() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("debug"))
        .expect("valid default filter");

    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .with(env_filter)
        .try_init();
}

#[derive(Clone, Debug, PartialEq)]
struct Row {
    id: u32,
    parent: Option<u32>,
}

fn row(id: u32, parent: Option<u32>) -> Row {
    Row { id, parent }
}

fn rows() -> Vec<Row> {
    vec![
        row(1, None),
        row(2, Some(1)),
        row(3, Some(1)),
        row(4, Some(2)),
        row(5, None),
        row(6, Some(5)),
    ]
}

fn build(rows: Vec<Row>) -> Vec<Rc<Node<Row>>> {
    build_hierarchy(rows, |r| Some(r.id), |r| r.parent, None).collect()
}

fn ids<'a>(nodes: impl IntoIterator<Item = &'a Rc<Node<Row>>>) -> Vec<u32> {
    nodes.into_iter().map(|n| n.item().id).collect()
}

#[test]
fn rebuilds_forest_with_levels() {
    let roots = build(rows());
    assert_eq!(ids(&roots), vec![1, 5]);

    let one = &roots[0];
    assert!(one.is_root());
    assert_eq!(one.level(), 0);
    assert_eq!(ids(one.children()), vec![2, 3]);
    assert!(one.children().iter().all(|c| c.level() == 1));

    let two = &one.children()[0];
    assert_eq!(ids(two.children()), vec![4]);
    assert_eq!(two.children()[0].level(), 2);
    assert!(two.children()[0].is_leaf());

    assert_eq!(ids(roots[1].children()), vec![6]);
}

#[test]
fn parent_links_point_at_the_same_instances() {
    let roots = build(rows());
    assert!(roots[0].parent().is_none());

    for root in &roots {
        for child in root.children() {
            let parent = child.parent().expect("child has a parent");
            assert!(Rc::ptr_eq(&parent, root));
            for grandchild in child.children() {
                assert!(Rc::ptr_eq(&grandchild.parent().expect("parent"), child));
            }
        }
    }
}

#[test]
fn building_is_deferred_until_pulled() {
    let mut parent_calls = 0;
    let roots = build_hierarchy(
        rows(),
        |r| Some(r.id),
        |r| {
            parent_calls += 1;
            r.parent
        },
        None,
    );
    drop(roots);
    assert_eq!(parent_calls, 0);
}

#[test]
fn flatten_built_hierarchy() {
    let roots = build(rows());

    let dfs: Vec<u32> = flatten_hierarchy(roots.clone(), TreeTraversalOrder::DepthFirst)
        .map(|n| n.item().id)
        .collect();
    assert_eq!(dfs, vec![1, 2, 4, 3, 5, 6]);

    let bfs: Vec<(u32, usize)> = flatten_hierarchy(roots, TreeTraversalOrder::BreadthFirst)
        .map(|n| (n.item().id, n.level()))
        .collect();
    assert_eq!(bfs, vec![(1, 0), (5, 0), (2, 1), (3, 1), (6, 1), (4, 2)]);
}

#[test]
fn descendants_exclude_the_node_itself() {
    let roots = build(rows());
    let below_one: Vec<u32> = roots[0]
        .descendants(TreeTraversalOrder::BreadthFirst)
        .map(|n| n.item().id)
        .collect();
    assert_eq!(below_one, vec![2, 3, 4]);
    assert_eq!(roots[1].children()[0].descendants(TreeTraversalOrder::DepthFirst).count(), 0);
}

#[test]
fn two_equal_inputs_flatten_identically() {
    let project = |roots: Vec<Rc<Node<Row>>>| -> Vec<(u32, usize)> {
        flatten_hierarchy(roots, TreeTraversalOrder::DepthFirst)
            .map(|n| (n.item().id, n.level()))
            .collect()
    };
    assert_eq!(project(build(rows())), project(build(rows())));
}

#[test]
fn duplicate_ids_first_reached_claims_children() {
    init_test_logger();
    // Two nodes with id 7: the root one is reached first.
    let roots = build(vec![
        row(1, None),
        row(7, Some(1)),
        row(7, None),
        row(8, Some(7)),
    ]);
    assert_eq!(ids(&roots), vec![1, 7]);
    assert!(roots[1].children().len() == 1);
    assert!(roots[0].children()[0].is_leaf());
}

#[test]
fn orphans_and_cycles_are_left_out() {
    init_test_logger();
    let roots = build(vec![
        row(1, None),
        row(2, Some(99)),
        row(3, Some(4)),
        row(4, Some(3)),
    ]);
    let everything: Vec<u32> = flatten_hierarchy(roots, TreeTraversalOrder::DepthFirst)
        .map(|n| n.item().id)
        .collect();
    assert_eq!(everything, vec![1]);
}

#[test]
fn no_roots_means_empty_forest() {
    let roots = build(vec![row(2, Some(1))]);
    assert!(roots.is_empty());
    assert!(build(Vec::new()).is_empty());
}

#[test]
fn deep_chain_builds_and_drops() {
    const DEPTH: u32 = 100_000;
    let chain = (1..=DEPTH).map(|id| (id, id - 1));
    let roots: Vec<_> = build_hierarchy(chain, |r| r.0, |r| r.1, 0).collect();
    assert_eq!(roots.len(), 1);

    let deepest = flatten_hierarchy(roots.clone(), TreeTraversalOrder::DepthFirst)
        .map(|n| n.level())
        .max();
    assert_eq!(deepest, Some(DEPTH as usize - 1));
    drop(roots);
}

#[test]
fn builder_reports_missing_collaborators() {
    type Select = fn(&Row) -> Option<u32>;

    let no_id = HierarchyBuilder::<Option<u32>, Select, Select>::new()
        .parent_id_selector(|r| r.parent)
        .root_parent_id(None)
        .build(rows());
    assert_eq!(no_id.unwrap_err(), Error::MissingArgument { param: "id_selector" });

    let no_parent = HierarchyBuilder::<Option<u32>, Select, Select>::new()
        .id_selector(|r| Some(r.id))
        .root_parent_id(None)
        .build(rows());
    assert_eq!(no_parent.unwrap_err().param(), Some("parent_id_selector"));

    let no_root = HierarchyBuilder::<Option<u32>, Select, Select>::new()
        .id_selector(|r| Some(r.id))
        .parent_id_selector(|r| r.parent)
        .build(rows());
    assert_eq!(no_root.unwrap_err().param(), Some("root_parent_id"));
}

#[test]
fn builder_matches_free_function() -> Result<()> {
    let built: Vec<_> = HierarchyBuilder::new()
        .id_selector(|r: &Row| Some(r.id))
        .parent_id_selector(|r: &Row| r.parent)
        .root_parent_id(None)
        .build(rows())?
        .collect();
    assert_eq!(ids(&built), ids(&build(rows())));
    assert_eq!(ids(built[0].children()), vec![2, 3]);
    Ok(())
}

#[test]
fn flattening_shares_nodes_instead_of_copying() {
    let roots = build(rows());
    let one = Rc::clone(&roots[0]);
    let before = Rc::strong_count(&one.children()[0]);

    let mut walk = flatten_hierarchy(roots, TreeTraversalOrder::DepthFirst);
    let first = walk.next().expect("root");
    assert!(Rc::ptr_eq(&first, &one));
    let second = walk.next().expect("first child");
    assert!(Rc::ptr_eq(&second, &one.children()[0]));
    drop(walk);
    drop(second);
    assert_eq!(Rc::strong_count(&one.children()[0]), before);
}
