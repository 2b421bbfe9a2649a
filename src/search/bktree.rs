//! BK-tree over catalog names, keyed by edit distance.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use crate::catalog::Catalog;

use super::distance::edit_distance;

/// One catalog item plus its children, keyed by their distance to it.
#[derive(Debug)]
struct Node {
    item: usize,
    children: BTreeMap<usize, Node>,
}

impl Node {
    fn leaf(item: usize) -> Self {
        Self { item, children: BTreeMap::new() }
    }
}

/// Metric tree holding catalog indices. Names are looked up in the catalog
/// passed to each call, which must be the one the indices came from.
#[derive(Debug, Default)]
pub struct ApproxIndex {
    root: Option<Node>,
    len: usize,
}

impl ApproxIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index every item of `catalog` in catalog order.
    pub fn build(catalog: &Catalog) -> Self {
        let mut index = Self::new();
        for item in 0..catalog.len() {
            index.insert(item, catalog);
        }
        index
    }

    pub fn insert(&mut self, item: usize, catalog: &Catalog) {
        self.len += 1;
        let name = catalog.name(item);
        if self.root.is_none() {
            self.root = Some(Node::leaf(item));
            return;
        }
        let Some(mut node) = self.root.as_mut() else {
            return;
        };
        loop {
            let d = edit_distance(name, catalog.name(node.item));
            match node.children.entry(d) {
                Entry::Vacant(slot) => {
                    slot.insert(Node::leaf(item));
                    return;
                }
                Entry::Occupied(child) => node = child.into_mut(),
            }
        }
    }

    /// All items within `max_dist` of `target`. Order is traversal order and
    /// carries no meaning.
    pub fn query(&self, target: &str, max_dist: usize, catalog: &Catalog) -> Vec<usize> {
        let mut found = Vec::new();
        let mut stack: Vec<&Node> = self.root.iter().collect();
        while let Some(node) = stack.pop() {
            let d = edit_distance(target, catalog.name(node.item));
            if d <= max_dist {
                found.push(node.item);
            }
            let band = d.saturating_sub(max_dist)..=d + max_dist;
            stack.extend(node.children.range(band).map(|(_, child)| child));
        }
        found
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }
}
