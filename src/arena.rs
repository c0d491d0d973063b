use slab::Slab;

/// Stable reference to one node incarnation. Slab keys are recycled after a
/// removal, the stamp is not.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Handle {
    key: usize,
    stamp: u64,
}

pub(crate) struct Node<T> {
    pub element: T,
    pub prev: Option<Handle>,
    pub next: Option<Handle>,
    /// Value of `Arena::moves` when this node was last moved to the tail, 0 if never
    pub moved_at: u64,
    stamp: u64,
}

/// Node storage for the recency list
pub(crate) struct Arena<T> {
    nodes: Slab<Node<T>>,
    next_stamp: u64,
    moves: u64,
}

impl<T> Arena<T> {
    pub fn new() -> Self {
        Self {
            nodes: Slab::new(),
            next_stamp: 0,
            moves: 0,
        }
    }

    /// Store a new unlinked node and return its handle
    pub fn insert(&mut self, element: T) -> Handle {
        let stamp = self.next_stamp;
        self.next_stamp += 1;

        let key = self.nodes.insert(Node {
            element,
            prev: None,
            next: None,
            moved_at: 0,
            stamp,
        });

        Handle { key, stamp }
    }

    /// Returns None if the node behind this handle was already released
    pub fn get(&self, handle: Handle) -> Option<&Node<T>> {
        self.nodes
            .get(handle.key)
            .filter(|node| node.stamp == handle.stamp)
    }

    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut Node<T>> {
        self.nodes
            .get_mut(handle.key)
            .filter(|node| node.stamp == handle.stamp)
    }

    /// Release a node, returning it with whatever links it still had
    pub fn release(&mut self, handle: Handle) -> Option<Node<T>> {
        self.get(handle)?;
        self.nodes.try_remove(handle.key)
    }

    /// Number of moves to the tail performed so far
    pub fn moves(&self) -> u64 {
        self.moves
    }

    /// Move a linked node to just after `tail`, returning its old next
    pub fn move_after(&mut self, tail: Option<Handle>, handle: Handle) -> Option<Handle> {
        let (_, next) = self.unlink(handle);
        self.link_after(tail, handle);

        self.moves += 1;
        let moves = self.moves;
        if let Some(node) = self.get_mut(handle) {
            node.moved_at = moves;
        }
        next
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Detach a node from its neighbours and return its old (prev, next).
    /// The node itself keeps no links afterwards.
    pub fn unlink(&mut self, handle: Handle) -> (Option<Handle>, Option<Handle>) {
        let Some(node) = self.get_mut(handle) else {
            return (None, None);
        };
        let (prev, next) = (node.prev.take(), node.next.take());

        if let Some(node) = prev.and_then(|prev| self.get_mut(prev)) {
            node.next = next;
        }
        if let Some(node) = next.and_then(|next| self.get_mut(next)) {
            node.prev = prev;
        }

        (prev, next)
    }

    /// Link a detached node after `tail`
    pub fn link_after(&mut self, tail: Option<Handle>, handle: Handle) {
        if let Some(node) = self.get_mut(handle) {
            node.prev = tail;
            node.next = None;
        }
        if let Some(node) = tail.and_then(|tail| self.get_mut(tail)) {
            node.next = Some(handle);
        }
    }
}
