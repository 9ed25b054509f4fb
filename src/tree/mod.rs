//! Hierarchies: flattening a forest into a sequence, and rebuilding a forest
//! from a flat sequence.

mod hierarchy;
mod traverse;

pub use hierarchy::{
    Descendants, Flatten, HierarchyBuilder, HierarchyRoots, Node, NodeChildren, build_hierarchy,
    flatten_hierarchy,
};
pub use traverse::{Traverse, TreeTraversalOrder, traverse};
