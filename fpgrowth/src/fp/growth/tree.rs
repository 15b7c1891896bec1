use std::collections::HashMap;
use std::hash::Hash;

/// Index of a node inside its tree's arena.
pub type NodeId = usize;

/// The root always sits at the start of the arena.
pub const ROOT: NodeId = 0;

#[derive(Debug, Clone)]
pub struct FpNode<T> {
    /// `None` only for the root.
    pub item: Option<T>,
    pub count: usize,
    pub parent: Option<NodeId>,
    /// Children in insertion order; no two share an item.
    pub children: Vec<NodeId>,
    /// Next node carrying the same item, in creation order.
    pub next: Option<NodeId>,
}

/// Head of the same-item list for one item.
#[derive(Debug, Clone)]
pub struct HeaderEntry<T> {
    pub item: T,
    pub head: NodeId,
}

/// Prefix tree over rank-ordered transactions.
///
/// Nodes live in one arena and refer to each other by index: `parent` and
/// `children` form the trie, `next` threads every node of an item into a
/// list that starts at the item's header entry. A tree is only filled in by
/// [`TreeBuilder`](super::builder::TreeBuilder) and read afterwards.
#[derive(Debug, Clone)]
pub struct FpTree<T> {
    pub(crate) nodes: Vec<FpNode<T>>,
    pub(crate) header_table: Vec<HeaderEntry<T>>,
    pub(crate) header_index: HashMap<T, usize>,
    min_sup: usize,
}

impl<T> FpNode<T> {
    pub fn new_root() -> Self {
        Self {
            item: None,
            count: 0,
            parent: None,
            children: Vec::new(),
            next: None,
        }
    }

    pub fn new_item(item: T, parent: NodeId) -> Self {
        Self {
            item: Some(item),
            count: 1,
            parent: Some(parent),
            children: Vec::new(),
            next: None,
        }
    }
}

impl<T: Clone + Eq + Hash> FpTree<T> {
    pub fn new(min_sup: usize) -> Self {
        Self {
            nodes: vec![FpNode::new_root()],
            header_table: Vec::new(),
            header_index: HashMap::new(),
            min_sup,
        }
    }

    pub fn min_sup(&self) -> usize {
        self.min_sup
    }

    pub fn root(&self) -> &FpNode<T> {
        &self.nodes[ROOT]
    }

    pub fn node(&self, id: NodeId) -> &FpNode<T> {
        &self.nodes[id]
    }

    /// Number of item nodes, root excluded.
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.root().children.is_empty()
    }

    /// Header entries in the order their first node was created.
    pub fn header(&self) -> &[HeaderEntry<T>] {
        &self.header_table
    }

    pub fn head(&self, item: &T) -> Option<NodeId> {
        self.header_index
            .get(item)
            .map(|&pos| self.header_table[pos].head)
    }

    /// Walks the same-item list of `item`.
    pub fn node_links(&self, item: &T) -> NodeLinks<'_, T> {
        NodeLinks {
            tree: self,
            current: self.head(item),
        }
    }

    /// Items from `id` up to, but excluding, the root.
    pub fn path_to_root(&self, id: NodeId) -> PathToRoot<'_, T> {
        PathToRoot {
            tree: self,
            current: Some(id),
        }
    }

    /// The chain of `(item, count)` pairs hanging off the root, followed for
    /// as long as every node on it has exactly one child.
    pub fn single_path(&self) -> Vec<(T, usize)> {
        let mut path = Vec::new();
        let mut current = self.root();

        while let [child] = current.children.as_slice() {
            current = &self.nodes[*child];
            if let Some(item) = &current.item {
                path.push((item.clone(), current.count));
            }
        }
        path
    }

    pub(crate) fn child_with_item(&self, parent: NodeId, item: &T) -> Option<NodeId> {
        self.nodes[parent]
            .children
            .iter()
            .copied()
            .find(|&child| self.nodes[child].item.as_ref() == Some(item))
    }

    pub(crate) fn push_child(&mut self, parent: NodeId, item: T) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(FpNode::new_item(item, parent));
        self.nodes[parent].children.push(id);
        id
    }

    pub(crate) fn push_header(&mut self, item: T, head: NodeId) {
        self.header_index.insert(item.clone(), self.header_table.len());
        self.header_table.push(HeaderEntry { item, head });
    }
}

pub struct NodeLinks<'a, T> {
    tree: &'a FpTree<T>,
    current: Option<NodeId>,
}

impl<T> Iterator for NodeLinks<'_, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.current?;
        self.current = self.tree.nodes[id].next;
        Some(id)
    }
}

pub struct PathToRoot<'a, T> {
    tree: &'a FpTree<T>,
    current: Option<NodeId>,
}

impl<'a, T> Iterator for PathToRoot<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = &self.tree.nodes[self.current?];
        // Only the root has no item.
        let item = node.item.as_ref()?;
        self.current = node.parent;
        Some(item)
    }
}
