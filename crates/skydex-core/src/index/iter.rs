use super::node::AirportNode;
use std::collections::VecDeque;

/// Ascending-code traversal: left subtree, node, right subtree.
pub struct InOrderIter<'a> {
    stack: Vec<&'a AirportNode>,
}

impl<'a> InOrderIter<'a> {
    pub(super) fn new(root: Option<&'a AirportNode>) -> Self {
        let mut iter = InOrderIter { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a AirportNode>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a> Iterator for InOrderIter<'a> {
    type Item = &'a AirportNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(node)
    }
}

/// Pre-order structural traversal: the right child is pushed before the left
/// so the left subtree is processed first. Used as a linear scan, not a keyed
/// descent.
pub struct DepthFirstIter<'a> {
    stack: Vec<&'a AirportNode>,
}

impl<'a> DepthFirstIter<'a> {
    pub(super) fn new(root: Option<&'a AirportNode>) -> Self {
        DepthFirstIter {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a> Iterator for DepthFirstIter<'a> {
    type Item = &'a AirportNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Some(right) = node.right.as_deref() {
            self.stack.push(right);
        }
        if let Some(left) = node.left.as_deref() {
            self.stack.push(left);
        }
        Some(node)
    }
}

/// Level-order structural traversal: children enqueued left then right.
pub struct BreadthFirstIter<'a> {
    queue: VecDeque<&'a AirportNode>,
}

impl<'a> BreadthFirstIter<'a> {
    pub(super) fn new(root: Option<&'a AirportNode>) -> Self {
        BreadthFirstIter {
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a> Iterator for BreadthFirstIter<'a> {
    type Item = &'a AirportNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        if let Some(left) = node.left.as_deref() {
            self.queue.push_back(left);
        }
        if let Some(right) = node.right.as_deref() {
            self.queue.push_back(right);
        }
        Some(node)
    }
}
