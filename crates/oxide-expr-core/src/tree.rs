//! Generic N-ary tree.
//!
//! Every node exclusively owns its children, so a tree is acyclic by
//! construction and dropping the root drops everything below it.
//!
//! Walks that may follow a long chain (`depth`, `Display`, `Drop`) use an
//! explicit stack on the heap rather than recursion.

use core::fmt;

/// A node holding `data` and an ordered list of owned children.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreeNode<T> {
    data: T,
    children: Vec<TreeNode<T>>,
}

impl<T> TreeNode<T> {
    /// Creates a leaf node.
    #[must_use]
    pub const fn new(data: T) -> Self {
        Self {
            data,
            children: Vec::new(),
        }
    }

    /// Creates a node with the given children, in order.
    #[must_use]
    pub fn with_children(data: T, children: impl IntoIterator<Item = Self>) -> Self {
        Self {
            data,
            children: children.into_iter().collect(),
        }
    }

    /// Appends a child after the existing ones.
    pub fn add(&mut self, child: Self) {
        self.children.push(child);
    }

    /// Returns the node's data.
    #[must_use]
    pub const fn data(&self) -> &T {
        &self.data
    }

    /// Returns the direct children in insertion order.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Returns the number of direct children.
    #[must_use]
    pub fn size(&self) -> usize {
        self.children.len()
    }

    /// Returns true if the node has any children.
    #[must_use]
    pub fn has_any(&self) -> bool {
        !self.children.is_empty()
    }

    /// Returns the number of nodes on the longest root-to-leaf path.
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 1)];
        while let Some((node, level)) = pending.pop() {
            deepest = deepest.max(level);
            pending.extend(node.children.iter().map(|child| (child, level + 1)));
        }
        deepest
    }

    /// Detaches and returns the children, leaving the node a leaf.
    pub fn take_children(&mut self) -> Vec<Self> {
        std::mem::take(&mut self.children)
    }
}

impl<T> Drop for TreeNode<T> {
    fn drop(&mut self) {
        // Flatten the subtree so every node is dropped as a leaf.
        let mut pending = self.take_children();
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

/// Renders the tree as a branch diagram, one node per line, depth first.
///
/// ```text
/// └── *
///     ├── +
///     │   ├── 1
///     │   └── 2
///     └── 3
/// ```
impl<T: fmt::Display> fmt::Display for TreeNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pending = vec![(self, String::new(), true)];
        while let Some((node, indent, is_last)) = pending.pop() {
            let connector = if is_last { "└── " } else { "├── " };
            writeln!(f, "{indent}{connector}{}", node.data)?;

            let indent = format!("{indent}{}", if is_last { "    " } else { "│   " });
            let last = node.children.len().saturating_sub(1);
            // Reversed so the first child is popped first.
            for (i, child) in node.children.iter().enumerate().rev() {
                pending.push((child, indent.clone(), i == last));
            }
        }
        Ok(())
    }
}
