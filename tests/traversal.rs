// tests/traversal.rs
use anyhow::Result;
use ironseq::*;
use std::collections::HashMap;

/// Forest: 1 -> [2, 3 -> [4, 5]], 6 -> [7]
fn forest() -> HashMap<u32, Vec<u32>> {
    HashMap::from([(1, vec![2, 3]), (3, vec![4, 5]), (6, vec![7])])
}

fn walk(order: TreeTraversalOrder) -> Vec<(u32, usize)> {
    let edges = forest();
    traverse(
        [1, 6],
        |n: &u32| edges.get(n).cloned().unwrap_or_default(),
        order,
        |n, level| (n, level),
    )
    .collect()
}

#[test]
fn depth_first_is_pre_order() {
    let ids: Vec<u32> = walk(TreeTraversalOrder::DepthFirst).into_iter().map(|(n, _)| n).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn breadth_first_visits_level_by_level() {
    let ids: Vec<u32> = walk(TreeTraversalOrder::BreadthFirst).into_iter().map(|(n, _)| n).collect();
    assert_eq!(ids, vec![1, 6, 2, 3, 7, 4, 5]);
}

#[test]
fn depth_first_levels() {
    assert_eq!(
        walk(TreeTraversalOrder::DepthFirst),
        vec![(1, 0), (2, 1), (3, 1), (4, 2), (5, 2), (6, 0), (7, 1)]
    );
}

#[test]
fn breadth_first_levels() {
    assert_eq!(
        walk(TreeTraversalOrder::BreadthFirst),
        vec![(1, 0), (6, 0), (2, 1), (3, 1), (7, 1), (4, 2), (5, 2)]
    );
}

#[test]
fn traverse_tree_extension_matches_free_function() {
    let edges = forest();
    let via_ext: Vec<u32> = [1u32, 6]
        .into_iter()
        .traverse_tree(
            |n| edges.get(n).cloned().unwrap_or_default(),
            TreeTraversalOrder::DepthFirst,
            |n, _| n,
        )
        .collect();
    let via_fn: Vec<u32> = walk(TreeTraversalOrder::DepthFirst).into_iter().map(|(n, _)| n).collect();
    assert_eq!(via_ext, via_fn);
}

#[test]
fn deep_chain_does_not_overflow() {
    const DEPTH: u32 = 100_000;
    let child = |n: &u32| if *n < DEPTH { Some(n + 1) } else { None };

    for order in [TreeTraversalOrder::DepthFirst, TreeTraversalOrder::BreadthFirst] {
        let mut count = 0usize;
        let mut deepest = 0;
        for level in traverse([1u32], child, order, |_, level| level) {
            count += 1;
            deepest = deepest.max(level);
        }
        assert_eq!(count, DEPTH as usize, "{order}");
        assert_eq!(deepest, DEPTH as usize - 1, "{order}");
    }
}

#[test]
fn children_selector_called_once_per_node() {
    let edges = forest();
    for order in [TreeTraversalOrder::DepthFirst, TreeTraversalOrder::BreadthFirst] {
        let mut calls: HashMap<u32, usize> = HashMap::new();
        let visited = traverse(
            [1, 6],
            |n: &u32| {
                *calls.entry(*n).or_default() += 1;
                edges.get(n).cloned().unwrap_or_default()
            },
            order,
            |n, _| n,
        )
        .count();
        assert_eq!(visited, 7);
        assert_eq!(calls.len(), 7);
        assert!(calls.values().all(|&c| c == 1), "{order}: {calls:?}");
    }
}

#[test]
fn nothing_is_expanded_before_first_pull() {
    let mut calls = 0;
    let walk = traverse(
        [1u32],
        |_: &u32| {
            calls += 1;
            Vec::new()
        },
        TreeTraversalOrder::BreadthFirst,
        |n, _| n,
    );
    assert_eq!(walk.order(), TreeTraversalOrder::BreadthFirst);
    drop(walk);
    assert_eq!(calls, 0);
}

#[test]
fn equal_forests_flatten_identically() {
    let first = walk(TreeTraversalOrder::BreadthFirst);
    let second = walk(TreeTraversalOrder::BreadthFirst);
    assert_eq!(first, second);
}

#[test]
fn empty_roots_yield_nothing() {
    let none: Vec<u32> = traverse(
        Vec::<u32>::new(),
        |_: &u32| Vec::new(),
        TreeTraversalOrder::DepthFirst,
        |n, _| n,
    )
    .collect();
    assert!(none.is_empty());
}

#[test]
fn order_from_raw_values() -> Result<()> {
    assert_eq!(TreeTraversalOrder::try_from(0u8)?, TreeTraversalOrder::DepthFirst);
    assert_eq!("breadth_first".parse::<TreeTraversalOrder>()?, TreeTraversalOrder::BreadthFirst);

    let err = TreeTraversalOrder::try_from(7u8).unwrap_err();
    assert_eq!(
        err,
        Error::InvalidEnum {
            param: "order",
            value: "7".to_string()
        }
    );
    assert_eq!(TreeTraversalOrder::default(), TreeTraversalOrder::DepthFirst);
    Ok(())
}

fn pre_order(node: u32, level: usize, fanout: &dyn Fn(u32) -> Vec<u32>, out: &mut Vec<(u32, usize)>) {
    out.push((node, level));
    for kid in fanout(node) {
        pre_order(kid, level + 1, fanout, out);
    }
}

#[test]
fn depth_first_matches_recursive_walk_on_ragged_tree() {
    // Child counts vary from node to node: 0, 1, 2 or 3 children.
    let fanout = |n: u32| -> Vec<u32> {
        if n >= 200 {
            Vec::new()
        } else {
            (1..=n % 4).map(|k| n * 4 + k).collect()
        }
    };

    let mut expected = Vec::new();
    for root in [1, 2, 3] {
        pre_order(root, 0, &fanout, &mut expected);
    }

    let walked: Vec<(u32, usize)> =
        traverse([1, 2, 3], |n: &u32| fanout(*n), TreeTraversalOrder::DepthFirst, |n, l| (n, l))
            .collect();
    assert!(walked.len() > 20);
    assert_eq!(walked, expected);
}
