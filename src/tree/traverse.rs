//! Flattening a hierarchy into a sequence.
//!
//! [`traverse`] walks a forest given its roots and a children selector, and
//! yields one projected value per node. The walk keeps an explicit
//! [`VecDeque`] frontier instead of recursing, so the depth of the hierarchy
//! is bounded only by memory.
//!
//! - **Depth-first** (pre-order): the frontier is used as a stack. A visited
//!   node's children are pushed to its front in reverse, so they are visited
//!   next, first child first, before any of the node's later siblings.
//! - **Breadth-first**: the roots are visited first, in order, then the
//!   frontier is drained as a queue.
//!
//! The children selector runs exactly once per node, when that node is
//! visited; unvisited nodes are never expanded.

use crate::error::{Error, Result};
use std::collections::VecDeque;
use std::fmt;
use std::iter::{Fuse, FusedIterator};
use std::marker::PhantomData;
use std::str::FromStr;

/// The order in which [`traverse`] visits nodes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TreeTraversalOrder {
    /// Pre-order: a node, then each child's whole subtree, left to right.
    #[default]
    DepthFirst,
    /// Level by level: all roots, then all their children, and so on.
    BreadthFirst,
}

impl TryFrom<u8> for TreeTraversalOrder {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Self::DepthFirst),
            1 => Ok(Self::BreadthFirst),
            other => Err(Error::InvalidEnum {
                param: "order",
                value: other.to_string(),
            }),
        }
    }
}

impl FromStr for TreeTraversalOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().replace(['-', '_', ' '], "").as_str() {
            "depthfirst" | "dfs" => Ok(Self::DepthFirst),
            "breadthfirst" | "bfs" => Ok(Self::BreadthFirst),
            _ => Err(Error::InvalidEnum {
                param: "order",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for TreeTraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::DepthFirst => "depth-first",
            Self::BreadthFirst => "breadth-first",
        })
    }
}

/// Walk the forest rooted at `roots`, yielding `project(node, level)` for
/// every node, where roots have level 0.
///
/// Nothing is pulled from `roots`, and `children` is not called, until the
/// returned iterator is pulled.
///
/// # Example
/// ```
/// use ironseq::{TreeTraversalOrder, traverse};
///
/// // 1 -> [2, 3], 3 -> [4]
/// let children = |n: &u32| match n {
///     1 => vec![2, 3],
///     3 => vec![4],
///     _ => vec![],
/// };
///
/// let dfs: Vec<_> = traverse([1], children, TreeTraversalOrder::DepthFirst, |n, _| n).collect();
/// assert_eq!(dfs, vec![1, 2, 3, 4]);
///
/// let levels: Vec<_> =
///     traverse([1], children, TreeTraversalOrder::BreadthFirst, |n, level| (n, level)).collect();
/// assert_eq!(levels, vec![(1, 0), (2, 1), (3, 1), (4, 2)]);
/// ```
pub fn traverse<R, C, CI, P, O>(
    roots: R,
    children: C,
    order: TreeTraversalOrder,
    project: P,
) -> Traverse<R::IntoIter, C, CI, P>
where
    R: IntoIterator,
    C: FnMut(&R::Item) -> CI,
    CI: IntoIterator<Item = R::Item>,
    P: FnMut(R::Item, usize) -> O,
{
    Traverse {
        roots: roots.into_iter().fuse(),
        children,
        project,
        order,
        frontier: VecDeque::new(),
        scratch: Vec::new(),
        _children: PhantomData,
    }
}

/// Iterator returned by [`traverse`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Traverse<I: Iterator, C, CI, P> {
    roots: Fuse<I>,
    children: C,
    project: P,
    order: TreeTraversalOrder,
    frontier: VecDeque<(I::Item, usize)>,
    // Reused buffer for reversing a node's children in depth-first order.
    scratch: Vec<I::Item>,
    _children: PhantomData<fn() -> CI>,
}

impl<I: Iterator, C, CI, P> Traverse<I, C, CI, P> {
    /// The order this traversal visits nodes in.
    pub const fn order(&self) -> TreeTraversalOrder {
        self.order
    }
}

impl<I, C, CI, P, O> Iterator for Traverse<I, C, CI, P>
where
    I: Iterator,
    C: FnMut(&I::Item) -> CI,
    CI: IntoIterator<Item = I::Item>,
    P: FnMut(I::Item, usize) -> O,
{
    type Item = O;

    fn next(&mut self) -> Option<O> {
        let (node, level) = match self.order {
            TreeTraversalOrder::DepthFirst => {
                let (node, level) = match self.frontier.pop_front() {
                    Some(entry) => entry,
                    None => (self.roots.next()?, 0),
                };
                self.scratch.extend((self.children)(&node));
                while let Some(kid) = self.scratch.pop() {
                    self.frontier.push_front((kid, level + 1));
                }
                (node, level)
            }
            TreeTraversalOrder::BreadthFirst => {
                let (node, level) = match self.roots.next() {
                    Some(root) => (root, 0),
                    None => self.frontier.pop_front()?,
                };
                self.frontier.extend(
                    (self.children)(&node)
                        .into_iter()
                        .map(|kid| (kid, level + 1)),
                );
                (node, level)
            }
        };
        Some((self.project)(node, level))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lo, _) = self.roots.size_hint();
        (lo.saturating_add(self.frontier.len()), None)
    }
}

impl<I, C, CI, P, O> FusedIterator for Traverse<I, C, CI, P>
where
    I: Iterator,
    C: FnMut(&I::Item) -> CI,
    CI: IntoIterator<Item = I::Item>,
    P: FnMut(I::Item, usize) -> O,
{
}

impl<I, C, CI, P> fmt::Debug for Traverse<I, C, CI, P>
where
    I: Iterator,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Traverse")
            .field("order", &self.order)
            .field("frontier", &self.frontier.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_conversions() {
        assert_eq!(TreeTraversalOrder::try_from(1u8), Ok(TreeTraversalOrder::BreadthFirst));
        assert_eq!("depth-first".parse(), Ok(TreeTraversalOrder::DepthFirst));
        assert_eq!("BFS".parse(), Ok(TreeTraversalOrder::BreadthFirst));
        assert_eq!(
            "sideways".parse::<TreeTraversalOrder>().unwrap_err().param(),
            Some("order")
        );
    }

    #[test]
    fn display_round_trips_through_parse() {
        for order in [TreeTraversalOrder::DepthFirst, TreeTraversalOrder::BreadthFirst] {
            assert_eq!(order.to_string().parse(), Ok(order));
        }
    }

    #[test]
    fn children_selector_runs_once_per_visited_node() {
        let mut expanded = Vec::new();
        let mut walk = traverse(
            [0u32],
            |n: &u32| {
                expanded.push(*n);
                if *n < 3 { vec![n + 1] } else { vec![] }
            },
            TreeTraversalOrder::DepthFirst,
            |n, _| n,
        );
        assert_eq!(walk.next(), Some(0));
        assert_eq!(walk.next(), Some(1));
        drop(walk);
        assert_eq!(expanded, vec![0, 1]);
    }
}
