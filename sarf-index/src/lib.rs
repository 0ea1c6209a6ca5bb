use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

mod key;

pub use key::{RootKey, RootKeyError};

/// One derived word recorded against a root, with its observation count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedWord {
    pub word: String,
    pub frequency: u32,
}

/// A node of the root index: one root form plus the multiset of words
/// derived from it.
///
/// Fields stay private so rebalancing is the only code that relinks
/// children or rewrites heights.
#[derive(Debug)]
pub struct RootNode {
    key: RootKey,
    height: u32,
    left: Option<Box<RootNode>>,
    right: Option<Box<RootNode>>,
    derived: Vec<DerivedWord>,
}

impl RootNode {
    fn new(key: RootKey) -> Self {
        Self {
            key,
            height: 1,
            left: None,
            right: None,
            derived: Vec::new(),
        }
    }

    pub fn key(&self) -> &RootKey {
        &self.key
    }

    /// Height of the subtree rooted at this node. A leaf has height 1.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Derived words in first-observation order.
    pub fn derived_words(&self) -> &[DerivedWord] {
        &self.derived
    }

    /// Record one observation of `word` under this root.
    ///
    /// Bumps the frequency when the word is already present, otherwise
    /// appends it with frequency 1. Node-local: the surrounding tree is
    /// never consulted or reshaped.
    pub fn add_derived_word(&mut self, word: &str) {
        if let Some(entry) = self.derived.iter_mut().find(|d| d.word == word) {
            entry.frequency += 1;
        } else {
            self.derived.push(DerivedWord {
                word: word.to_string(),
                frequency: 1,
            });
        }
    }

    fn update_height(&mut self) {
        self.height = 1 + height_of(&self.left).max(height_of(&self.right));
    }

    /// Left height minus right height. In a balanced tree this stays
    /// within -1..=1.
    fn balance(&self) -> i32 {
        height_of(&self.left) as i32 - height_of(&self.right) as i32
    }
}

fn height_of(node: &Option<Box<RootNode>>) -> u32 {
    node.as_ref().map_or(0, |n| n.height)
}

/// Clockwise rotation: the left child becomes the subtree root. Relinks
/// exactly three edges and refreshes the two touched heights, child first.
/// Derived words ride along with their nodes untouched.
fn rotate_right(mut y: Box<RootNode>) -> Box<RootNode> {
    match y.left.take() {
        Some(mut x) => {
            y.left = x.right.take();
            y.update_height();
            x.right = Some(y);
            x.update_height();
            x
        }
        None => y,
    }
}

/// Counter-clockwise rotation, mirror of [`rotate_right`].
fn rotate_left(mut x: Box<RootNode>) -> Box<RootNode> {
    match x.right.take() {
        Some(mut y) => {
            x.right = y.left.take();
            x.update_height();
            y.left = Some(x);
            y.update_height();
            y
        }
        None => x,
    }
}

fn insert_node(slot: Option<Box<RootNode>>, key: &RootKey, added: &mut bool) -> Box<RootNode> {
    let mut node = match slot {
        None => {
            *added = true;
            return Box::new(RootNode::new(key.clone()));
        }
        Some(node) => node,
    };

    match key.cmp(&node.key) {
        Ordering::Less => node.left = Some(insert_node(node.left.take(), key, added)),
        Ordering::Greater => node.right = Some(insert_node(node.right.take(), key, added)),
        // Duplicate insert: keep the existing node exactly as it is.
        Ordering::Equal => return node,
    }

    node.update_height();
    rebalance(node, key)
}

/// Restore the balance invariant at `node` after an insert below it.
///
/// The case is picked by the sign of the balance factor plus which side of
/// the child the new key went to: left-left and right-right take a single
/// rotation, left-right and right-left rotate the child first. Only the
/// nearest unbalanced ancestor of the insertion point ever gets here with a
/// factor outside -1..=1.
fn rebalance(mut node: Box<RootNode>, key: &RootKey) -> Box<RootNode> {
    let balance = node.balance();

    if balance > 1 {
        if node.left.as_deref().map_or(false, |l| *key < l.key) {
            return rotate_right(node);
        }
        node.left = node.left.take().map(rotate_left);
        return rotate_right(node);
    }

    if balance < -1 {
        if node.right.as_deref().map_or(false, |r| *key > r.key) {
            return rotate_left(node);
        }
        node.right = node.right.take().map(rotate_right);
        return rotate_left(node);
    }

    node
}

/// Height-balanced index of root forms.
///
/// Keys live in ascending scalar order and every node carries its own
/// derived-word multiset, which rebalancing never disturbs. Duplicate
/// inserts are no-ops and there is no removal of individual roots, only
/// [`RootIndex::clear`].
#[derive(Debug, Default)]
pub struct RootIndex {
    root: Option<Box<RootNode>>,
}

impl RootIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `key` if absent.
    ///
    /// Returns true when the key was newly added, false when it was already
    /// present. A duplicate insert leaves the existing node, its derived
    /// words and the tree shape exactly as they were.
    pub fn insert(&mut self, key: RootKey) -> bool {
        let mut added = false;
        self.root = Some(insert_node(self.root.take(), &key, &mut added));
        added
    }

    /// Look up a root form. Lookups never mutate the tree.
    pub fn get(&self, key: &RootKey) -> Option<&RootNode> {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            cur = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(node),
            };
        }
        None
    }

    /// Mutable lookup, for recording derived words on a located node.
    pub fn get_mut(&mut self, key: &RootKey) -> Option<&mut RootNode> {
        fn descend<'a>(slot: Option<&'a mut RootNode>, key: &RootKey) -> Option<&'a mut RootNode> {
            let node = slot?;
            match key.cmp(&node.key) {
                Ordering::Less => descend(node.left.as_deref_mut(), key),
                Ordering::Greater => descend(node.right.as_deref_mut(), key),
                Ordering::Equal => Some(node),
            }
        }
        descend(self.root.as_deref_mut(), key)
    }

    /// Number of distinct roots, counted by a full traversal. The count is
    /// not cached anywhere in the tree.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the whole tree, read off the topmost node in O(1).
    /// An empty tree has height 0.
    pub fn height(&self) -> u32 {
        height_of(&self.root)
    }

    /// Drop every node and reset to empty.
    pub fn clear(&mut self) {
        self.root = None;
    }

    /// Ascending in-order traversal. Each call starts a fresh pass over the
    /// current tree.
    pub fn iter(&self) -> InOrderIter<'_> {
        InOrderIter::new(self.root.as_deref())
    }
}

/// Read-only in-order traversal, yielding nodes in ascending key order.
///
/// Keeps an explicit stack of the unvisited left spine, so depth is bounded
/// by the tree height rather than by recursion.
pub struct InOrderIter<'a> {
    stack: Vec<&'a RootNode>,
}

impl<'a> InOrderIter<'a> {
    fn new(root: Option<&'a RootNode>) -> Self {
        let mut iter = InOrderIter { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a RootNode>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a> Iterator for InOrderIter<'a> {
    type Item = &'a RootNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(node)
    }
}
