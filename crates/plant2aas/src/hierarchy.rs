//! Rebuilds a tree hierarchy from a flattened, indentation-tagged listing.
//!
//! The input is an ordered sequence of lines, each carrying a leading
//! whitespace width and a name. The reconstruction is a pure stack
//! discipline: a stack entry stays open only while its indentation is
//! strictly smaller than the incoming line's, so the parent of each line is
//! whatever survives on top of the stack. The algorithm is total — any
//! indentation sequence yields a structurally valid forest.
//!
//! Nodes live in an arena and refer to their children by index, which keeps
//! the forest free of shared ownership and cycles.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use log::debug;

/// One line of a hierarchy listing: leading whitespace width plus the
/// trimmed name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HierarchyLine {
    /// Raw leading whitespace width. Levels are compared numerically and are
    /// not normalized to a unit.
    pub indent: usize,
    pub name: String,
}

/// Splits a multi-line listing into [`HierarchyLine`]s. Blank lines carry no
/// name and are skipped, so an empty listing yields no lines at all.
pub fn lines_from_listing(listing: &str) -> Vec<HierarchyLine> {
    listing
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| HierarchyLine {
            indent: line.len() - line.trim_start().len(),
            name: line.trim().to_string(),
        })
        .collect()
}

/// Index of a node within its owning [`HierarchyForest`].
pub type NodeId = usize;

/// A named node; children are arena indices in encounter order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HierarchyNode {
    pub name: String,
    pub children: Vec<NodeId>,
}

/// A forest of named nodes, with roots kept in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HierarchyForest {
    nodes: Vec<HierarchyNode>,
    roots: Vec<NodeId>,
}

impl HierarchyForest {
    /// Reconstructs a forest from a textual listing.
    pub fn from_listing(listing: &str) -> Self {
        Self::build(&lines_from_listing(listing))
    }

    /// Reconstructs a forest from pre-split lines.
    ///
    /// A line whose indentation opens no new ancestor becomes a root. A root
    /// whose name was already used as a root name replaces the earlier root
    /// in place, keeping the first-seen position.
    pub fn build(lines: &[HierarchyLine]) -> Self {
        let mut forest = HierarchyForest::default();
        // Stack of (indent, node) pairs; entries survive only while their
        // indent is strictly smaller than the incoming line's.
        let mut stack: Vec<(usize, NodeId)> = Vec::new();

        for line in lines {
            let id = forest.nodes.len();
            forest.nodes.push(HierarchyNode {
                name: line.name.clone(),
                children: Vec::new(),
            });

            while stack
                .last()
                .is_some_and(|&(indent, _)| indent >= line.indent)
            {
                stack.pop();
            }

            match stack.last() {
                Some(&(_, parent)) => forest.nodes[parent].children.push(id),
                None => forest.insert_root(&line.name, id),
            }

            stack.push((line.indent, id));
        }

        debug!(
            "reconstructed hierarchy: {} nodes, {} roots",
            forest.nodes.len(),
            forest.roots.len()
        );
        forest
    }

    fn insert_root(&mut self, name: &str, id: NodeId) {
        let existing = self
            .roots
            .iter()
            .position(|&root| self.nodes[root].name == name);
        match existing {
            Some(pos) => self.roots[pos] = id,
            None => self.roots.push(id),
        }
    }

    /// Root node indices, in first-seen order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn node(&self, id: NodeId) -> &HierarchyNode {
        &self.nodes[id]
    }

    /// True when the listing contained no lines.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Re-flattens the forest pre-order, yielding `(depth, name)` pairs with
    /// the tree depth counted from 0 at the roots.
    pub fn flatten(&self) -> Vec<(usize, String)> {
        let mut out = Vec::new();
        for &root in &self.roots {
            self.flatten_into(root, 0, &mut out);
        }
        out
    }

    fn flatten_into(&self, id: NodeId, depth: usize, out: &mut Vec<(usize, String)>) {
        let node = &self.nodes[id];
        out.push((depth, node.name.clone()));
        for &child in &node.children {
            self.flatten_into(child, depth + 1, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn names(forest: &HierarchyForest, ids: &[NodeId]) -> Vec<String> {
        ids.iter().map(|&id| forest.node(id).name.clone()).collect()
    }

    #[test]
    fn test_empty_listing_yields_empty_forest() {
        let forest = HierarchyForest::from_listing("");
        assert!(forest.is_empty());
        assert!(forest.flatten().is_empty());

        let forest = HierarchyForest::from_listing("\n   \n");
        assert!(forest.is_empty());
    }

    #[test]
    fn test_two_roots_with_nested_chain() {
        let forest = HierarchyForest::from_listing("A\nB\n  C\n    D");

        assert_eq!(names(&forest, forest.roots()), vec!["A", "B"]);

        let a = forest.node(forest.roots()[0]);
        assert!(a.children.is_empty());

        let b = forest.node(forest.roots()[1]);
        assert_eq!(names(&forest, &b.children), vec!["C"]);
        let c = forest.node(b.children[0]);
        assert_eq!(names(&forest, &c.children), vec!["D"]);
        let d = forest.node(c.children[0]);
        assert!(d.children.is_empty());
    }

    #[test]
    fn test_sibling_after_deeper_child() {
        // C at level 2 closes D's ancestor B (level 2) and attaches to A.
        let forest = HierarchyForest::from_listing("A\n  B\n    D\n  C");
        let a = forest.node(forest.roots()[0]);
        assert_eq!(names(&forest, &a.children), vec!["B", "C"]);
    }

    #[test]
    fn test_depth_round_trip() {
        let listing = "Plant\n  Cell\n    Robot\n    Conveyor\n  Control\nSpare";
        let forest = HierarchyForest::from_listing(listing);

        let expected: Vec<(usize, String)> = lines_from_listing(listing)
            .into_iter()
            .map(|line| (line.indent / 2, line.name))
            .collect();
        assert_eq!(forest.flatten(), expected);
    }

    #[test]
    fn test_inconsistent_indentation_is_compared_numerically() {
        // B is deeper than A (4 > 0); C at 2 closes B (4 >= 2) and still
        // finds A (0 < 2) as its parent. No validation of the widths happens.
        let forest = HierarchyForest::from_listing("A\n    B\n  C");
        assert_eq!(names(&forest, forest.roots()), vec!["A"]);
        let a = forest.node(forest.roots()[0]);
        assert_eq!(names(&forest, &a.children), vec!["B", "C"]);
    }

    #[test]
    fn test_repeated_root_name_overwrites_in_place() {
        let forest = HierarchyForest::from_listing("Root\n  A\nOther\nRoot\n  B");

        // The second "Root" takes over the first slot; "Other" keeps its
        // position after it.
        assert_eq!(names(&forest, forest.roots()), vec!["Root", "Other"]);
        let root = forest.node(forest.roots()[0]);
        assert_eq!(names(&forest, &root.children), vec!["B"]);
    }

    #[test]
    fn test_tabs_count_toward_indent_width() {
        let forest = HierarchyForest::from_listing("A\n\tB");
        let a = forest.node(forest.roots()[0]);
        assert_eq!(names(&forest, &a.children), vec!["B"]);
    }
}
