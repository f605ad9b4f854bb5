//! Ternary search tree over normalized stop names.
//!
//! Each node holds one character and three links: `less` and `greater` lead
//! to alternative characters at the same position, `equal` leads to the next
//! position. Nodes live in a single arena and refer to each other by
//! [`NodeId`], so the tree has no ownership cycles and all traversals are
//! iterative.
//!
//! The tree is grow-only: nodes are created lazily on insert and never
//! removed. No rebalancing is done, so the shape depends on insertion order.

use std::cmp::Ordering;

/// Handle to a node in a [`NameIndex`].
///
/// Handles are only meaningful for the index that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct Node {
    ch: char,
    less: Option<NodeId>,
    equal: Option<NodeId>,
    greater: Option<NodeId>,
    /// Some indexed name ends exactly at this node.
    terminal: bool,
}

impl Node {
    fn new(ch: char) -> Self {
        Self {
            ch,
            less: None,
            equal: None,
            greater: None,
            terminal: false,
        }
    }

    fn link_mut(&mut self, branch: Branch) -> &mut Option<NodeId> {
        match branch {
            Branch::Less => &mut self.less,
            Branch::Equal => &mut self.equal,
            Branch::Greater => &mut self.greater,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Branch {
    Less,
    Equal,
    Greater,
}

/// Character-level ternary search tree.
///
/// # Examples
///
/// ```
/// use stop_server::index::NameIndex;
///
/// let mut index = NameIndex::new();
/// index.insert("MAIN ST NB");
/// index.insert("MAIN ST SB");
///
/// assert!(index.contains("MAIN ST NB"));
/// assert!(!index.contains("MAIN ST"));
///
/// // Only root-anchored prefixes match
/// assert!(index.match_path("MAIN").is_some());
/// assert!(index.match_path("ST").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct NameIndex {
    nodes: Vec<Node>,
    root: Option<NodeId>,
    len: usize,
}

impl NameIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a name into the tree.
    ///
    /// Returns `true` if the name was not already present. The empty name
    /// is never stored and always returns `false`.
    pub fn insert(&mut self, name: &str) -> bool {
        let mut chars = name.chars();
        let Some(mut ch) = chars.next() else {
            return false;
        };

        let mut current = match self.root {
            Some(root) => root,
            None => {
                let root = self.alloc(ch);
                self.root = Some(root);
                root
            }
        };

        loop {
            match ch.cmp(&self.nodes[current.0].ch) {
                Ordering::Less => current = self.child_or_insert(current, Branch::Less, ch),
                Ordering::Greater => current = self.child_or_insert(current, Branch::Greater, ch),
                Ordering::Equal => match chars.next() {
                    Some(next) => {
                        ch = next;
                        current = self.child_or_insert(current, Branch::Equal, ch);
                    }
                    None => {
                        let node = &mut self.nodes[current.0];
                        let added = !node.terminal;
                        node.terminal = true;
                        if added {
                            self.len += 1;
                        }
                        return added;
                    }
                },
            }
        }
    }

    /// Follow `query` from the root, one character per equal link.
    ///
    /// Returns the node holding the last character of `query` if every
    /// character matched. This finds names that begin with `query`; it does
    /// not find `query` at any other offset. An empty query never matches.
    pub fn match_path(&self, query: &str) -> Option<NodeId> {
        let mut chars = query.chars();
        let mut ch = chars.next()?;
        let mut current = self.root?;

        loop {
            let node = &self.nodes[current.0];
            match ch.cmp(&node.ch) {
                Ordering::Less => current = node.less?,
                Ordering::Greater => current = node.greater?,
                Ordering::Equal => match chars.next() {
                    Some(next) => {
                        ch = next;
                        current = node.equal?;
                    }
                    None => return Some(current),
                },
            }
        }
    }

    /// Collect every string reachable by continuing from `node`.
    ///
    /// A terminal node contributes its own character. Results from the
    /// `less` and `greater` subtrees are included unchanged, since they are
    /// alternatives at the same position as `node`. Results from the `equal`
    /// subtree get `node`'s character prepended.
    ///
    /// Called on the root this yields every stored name. Results come out
    /// in pre-order (node, less, greater, equal); callers should not rely on
    /// the order.
    pub fn enumerate_from(&self, node: NodeId) -> Vec<String> {
        let mut found = Vec::new();
        // (node, characters contributed by equal-link ancestors below `node`)
        let mut stack = vec![(node, String::new())];

        while let Some((id, head)) = stack.pop() {
            let node = &self.nodes[id.0];

            if node.terminal {
                let mut s = head.clone();
                s.push(node.ch);
                found.push(s);
            }

            if let Some(equal) = node.equal {
                let mut deeper = head.clone();
                deeper.push(node.ch);
                stack.push((equal, deeper));
            }
            if let Some(greater) = node.greater {
                stack.push((greater, head.clone()));
            }
            if let Some(less) = node.less {
                stack.push((less, head));
            }
        }

        found
    }

    /// Returns true if `name` was inserted.
    pub fn contains(&self, name: &str) -> bool {
        self.match_path(name)
            .is_some_and(|id| self.nodes[id.0].terminal)
    }

    /// The root node, if anything has been inserted.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// The character stored at `node`.
    pub fn char_at(&self, node: NodeId) -> char {
        self.nodes[node.0].ch
    }

    /// Returns true if a stored name ends at `node`.
    pub fn is_terminal(&self, node: NodeId) -> bool {
        self.nodes[node.0].terminal
    }

    /// Number of distinct names stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no names are stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes in the arena.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn alloc(&mut self, ch: char) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(ch));
        id
    }

    fn child_or_insert(&mut self, parent: NodeId, branch: Branch, ch: char) -> NodeId {
        if let Some(child) = *self.nodes[parent.0].link_mut(branch) {
            return child;
        }
        let child = self.alloc(ch);
        *self.nodes[parent.0].link_mut(branch) = Some(child);
        child
    }
}
