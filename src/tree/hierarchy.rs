//! Rebuilding a forest from parent-id tagged items.
//!
//! [`build_hierarchy`] takes a flat sequence whose items each carry their own
//! id and the id of their parent, plus the parent id that marks a root. It
//! yields the root [`Node`]s of the reconstructed forest.
//!
//! Ownership runs downwards: a node owns its children through [`Rc`], and a
//! child reaches its parent through a [`Weak`] reference. Keep the roots
//! alive to keep the tree alive.
//!
//! Building happens on the first pull of the returned iterator, in one pass
//! over the input followed by a breadth-first linking pass:
//!
//! 1. every item is filed under its parent id, roots are set aside;
//! 2. from the roots, breadth-first, each node claims the items filed under
//!    its own id as its children, in input order.
//!
//! If several items share an id, the first of them reached breadth-first
//! claims the children filed under that id, and the others get none. Items
//! not reachable from a root (their parent is missing, or they form a cycle)
//! are dropped; their count is logged at `debug` level.

use crate::error::Result;
use crate::tree::traverse::{Traverse, TreeTraversalOrder, traverse};
use crate::validation::ensure_present;
use std::cell::OnceCell;
use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::hash::Hash;
use std::iter::FusedIterator;
use std::rc::{Rc, Weak};
use std::vec;

/// A node of a built hierarchy.
pub struct Node<T> {
    item: T,
    level: usize,
    parent: Weak<Node<T>>,
    children: OnceCell<Vec<Rc<Node<T>>>>,
}

impl<T> Node<T> {
    fn new(item: T, level: usize, parent: Weak<Self>) -> Self {
        Self {
            item,
            level,
            parent,
            children: OnceCell::new(),
        }
    }

    /// The wrapped item.
    pub const fn item(&self) -> &T {
        &self.item
    }

    /// Distance from the root; roots have level 0.
    pub const fn level(&self) -> usize {
        self.level
    }

    /// The parent node, or `None` for a root (or once the parent is dropped).
    pub fn parent(&self) -> Option<Rc<Self>> {
        self.parent.upgrade()
    }

    /// Child nodes, in input order.
    pub fn children(&self) -> &[Rc<Self>] {
        self.children.get().map_or(&[], Vec::as_slice)
    }

    /// Whether this node sits at level 0.
    pub const fn is_root(&self) -> bool {
        self.level == 0
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children().is_empty()
    }

    /// All nodes below this one, in `order`. The node itself is not included.
    pub fn descendants(&self, order: TreeTraversalOrder) -> Descendants<T> {
        flatten_hierarchy(self.children().to_vec(), order)
    }
}

impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        // Unlink subtrees onto a heap stack so a deep chain does not recurse.
        let Some(mut stack) = self.children.take() else {
            return;
        };
        while let Some(child) = stack.pop() {
            if let Some(mut node) = Rc::into_inner(child)
                && let Some(grandchildren) = node.children.take()
            {
                stack.extend(grandchildren);
            }
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("item", &self.item)
            .field("level", &self.level)
            .field("children", &self.children().len())
            .finish()
    }
}

type ChildrenOf<T> = fn(&Rc<Node<T>>) -> NodeChildren<T>;
type KeepNode<T> = fn(Rc<Node<T>>, usize) -> Rc<Node<T>>;

/// Iterator returned by [`flatten_hierarchy`].
pub type Flatten<I, T> = Traverse<I, ChildrenOf<T>, NodeChildren<T>, KeepNode<T>>;

/// Shared handles to the children of one node, in input order.
///
/// Holds the parent alive and hands out its children one at a time, so
/// walking a built hierarchy never copies a children list.
pub struct NodeChildren<T> {
    parent: Rc<Node<T>>,
    position: usize,
}

impl<T> Iterator for NodeChildren<T> {
    type Item = Rc<Node<T>>;

    fn next(&mut self) -> Option<Rc<Node<T>>> {
        let child = self.parent.children().get(self.position)?;
        self.position += 1;
        Some(Rc::clone(child))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.parent.children().len() - self.position;
        (left, Some(left))
    }
}

impl<T> ExactSizeIterator for NodeChildren<T> {}

impl<T> FusedIterator for NodeChildren<T> {}

impl<T> fmt::Debug for NodeChildren<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeChildren")
            .field("position", &self.position)
            .field("len", &self.parent.children().len())
            .finish()
    }
}

/// Iterator returned by [`Node::descendants`].
pub type Descendants<T> = Flatten<vec::IntoIter<Rc<Node<T>>>, T>;

/// Every node of the forest under `roots`, roots included, in `order`.
pub fn flatten_hierarchy<R, T>(roots: R, order: TreeTraversalOrder) -> Flatten<R::IntoIter, T>
where
    R: IntoIterator<Item = Rc<Node<T>>>,
{
    let children: ChildrenOf<T> = |node| NodeChildren {
        parent: Rc::clone(node),
        position: 0,
    };
    let keep: KeepNode<T> = |node, _| node;
    traverse(roots, children, order, keep)
}

/// Rebuild the forest described by `items`.
///
/// `id_of` and `parent_of` extract an item's own id and its parent's id; an
/// item whose parent id equals `root_parent` is a root. Nothing is read from
/// `items` until the result is pulled.
///
/// # Example
/// ```
/// use ironseq::build_hierarchy;
///
/// // (id, parent id); 0 marks a root
/// let rows = [(1, 0), (2, 1), (3, 1), (4, 2)];
/// let roots: Vec<_> = build_hierarchy(rows, |r| r.0, |r| r.1, 0).collect();
///
/// assert_eq!(roots.len(), 1);
/// let ids: Vec<u32> = roots[0].children().iter().map(|c| c.item().0).collect();
/// assert_eq!(ids, vec![2, 3]);
/// assert_eq!(roots[0].children()[0].children()[0].level(), 2);
/// ```
pub fn build_hierarchy<I, K, FI, FP>(
    items: I,
    id_of: FI,
    parent_of: FP,
    root_parent: K,
) -> HierarchyRoots<I::IntoIter, K, FI, FP>
where
    I: IntoIterator,
    K: Eq + Hash,
    FI: FnMut(&I::Item) -> K,
    FP: FnMut(&I::Item) -> K,
{
    HierarchyRoots {
        pending: Some(Pending {
            items: items.into_iter(),
            id_of,
            parent_of,
            root_parent,
        }),
        roots: Vec::new().into_iter(),
    }
}

struct Pending<I, K, FI, FP> {
    items: I,
    id_of: FI,
    parent_of: FP,
    root_parent: K,
}

impl<I, K, FI, FP> Pending<I, K, FI, FP>
where
    I: Iterator,
    K: Eq + Hash,
    FI: FnMut(&I::Item) -> K,
    FP: FnMut(&I::Item) -> K,
{
    fn build(mut self) -> Vec<Rc<Node<I::Item>>> {
        let mut roots = Vec::new();
        let mut by_parent: HashMap<K, Vec<I::Item>> = HashMap::new();
        let mut total = 0usize;
        for item in self.items {
            total += 1;
            let parent = (self.parent_of)(&item);
            if parent == self.root_parent {
                roots.push(Rc::new(Node::new(item, 0, Weak::new())));
            } else {
                by_parent.entry(parent).or_default().push(item);
            }
        }

        let mut linked = roots.len();
        let mut queue: VecDeque<Rc<Node<I::Item>>> = roots.iter().cloned().collect();
        while let Some(node) = queue.pop_front() {
            let Some(items) = by_parent.remove(&(self.id_of)(&node.item)) else {
                continue;
            };
            let children: Vec<_> = items
                .into_iter()
                .map(|item| Rc::new(Node::new(item, node.level + 1, Rc::downgrade(&node))))
                .collect();
            linked += children.len();
            queue.extend(children.iter().cloned());
            // Each node leaves the queue once, so its cell is still empty.
            let _ = node.children.set(children);
        }

        tracing::debug!(
            roots = roots.len(),
            nodes = linked,
            orphans = total - linked,
            "hierarchy built"
        );
        roots
    }
}

/// Iterator over the roots of a hierarchy, returned by [`build_hierarchy`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct HierarchyRoots<I: Iterator, K, FI, FP> {
    pending: Option<Pending<I, K, FI, FP>>,
    roots: vec::IntoIter<Rc<Node<I::Item>>>,
}

impl<I, K, FI, FP> Iterator for HierarchyRoots<I, K, FI, FP>
where
    I: Iterator,
    K: Eq + Hash,
    FI: FnMut(&I::Item) -> K,
    FP: FnMut(&I::Item) -> K,
{
    type Item = Rc<Node<I::Item>>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(pending) = self.pending.take() {
            self.roots = pending.build().into_iter();
        }
        self.roots.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.pending {
            Some(pending) => (0, pending.items.size_hint().1),
            None => self.roots.size_hint(),
        }
    }
}

impl<I, K, FI, FP> FusedIterator for HierarchyRoots<I, K, FI, FP>
where
    I: Iterator,
    K: Eq + Hash,
    FI: FnMut(&I::Item) -> K,
    FP: FnMut(&I::Item) -> K,
{
}

impl<I: Iterator, K, FI, FP> fmt::Debug for HierarchyRoots<I, K, FI, FP> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HierarchyRoots")
            .field("built", &self.pending.is_none())
            .field("remaining", &self.roots.len())
            .finish()
    }
}

/// Step-by-step form of [`build_hierarchy`] for callers that assemble its
/// collaborators separately.
///
/// [`build`](HierarchyBuilder::build) reports the first collaborator that
/// was never supplied.
///
/// # Example
/// ```
/// use ironseq::{Error, HierarchyBuilder};
///
/// # fn main() -> ironseq::Result<()> {
/// let rows = vec![(1, None), (2, Some(1))];
/// let roots: Vec<_> = HierarchyBuilder::new()
///     .id_selector(|r: &(u32, Option<u32>)| Some(r.0))
///     .parent_id_selector(|r: &(u32, Option<u32>)| r.1)
///     .root_parent_id(None)
///     .build(rows)?
///     .collect();
/// assert_eq!(roots[0].children().len(), 1);
///
/// let missing = HierarchyBuilder::<u32, fn(&u32) -> u32, fn(&u32) -> u32>::new()
///     .id_selector(|n| *n)
///     .build(vec![1u32]);
/// assert_eq!(missing.unwrap_err(), Error::MissingArgument { param: "parent_id_selector" });
/// # Ok(())
/// # }
/// ```
#[must_use]
pub struct HierarchyBuilder<K, FI, FP> {
    id_selector: Option<FI>,
    parent_id_selector: Option<FP>,
    root_parent_id: Option<K>,
}

impl<K, FI, FP> Default for HierarchyBuilder<K, FI, FP> {
    fn default() -> Self {
        Self {
            id_selector: None,
            parent_id_selector: None,
            root_parent_id: None,
        }
    }
}

impl<K, FI, FP> HierarchyBuilder<K, FI, FP> {
    /// A builder with no collaborators set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Function extracting an item's own id.
    pub fn id_selector(mut self, f: FI) -> Self {
        self.id_selector = Some(f);
        self
    }

    /// Function extracting the id of an item's parent.
    pub fn parent_id_selector(mut self, f: FP) -> Self {
        self.parent_id_selector = Some(f);
        self
    }

    /// The parent id that marks a root.
    pub fn root_parent_id(mut self, id: K) -> Self {
        self.root_parent_id = Some(id);
        self
    }

    /// Validate the collaborators and return the lazy root sequence.
    ///
    /// # Errors
    /// [`Error::MissingArgument`](crate::Error::MissingArgument) naming
    /// `id_selector`, `parent_id_selector` or `root_parent_id`, checked in
    /// that order.
    pub fn build<I>(self, items: I) -> Result<HierarchyRoots<I::IntoIter, K, FI, FP>>
    where
        I: IntoIterator,
        K: Eq + Hash,
        FI: FnMut(&I::Item) -> K,
        FP: FnMut(&I::Item) -> K,
    {
        let id_of = ensure_present("id_selector", self.id_selector)?;
        let parent_of = ensure_present("parent_id_selector", self.parent_id_selector)?;
        let root_parent = ensure_present("root_parent_id", self.root_parent_id)?;
        Ok(build_hierarchy(items, id_of, parent_of, root_parent))
    }
}

impl<K: fmt::Debug, FI, FP> fmt::Debug for HierarchyBuilder<K, FI, FP> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HierarchyBuilder")
            .field("id_selector", &self.id_selector.is_some())
            .field("parent_id_selector", &self.parent_id_selector.is_some())
            .field("root_parent_id", &self.root_parent_id)
            .finish()
    }
}
