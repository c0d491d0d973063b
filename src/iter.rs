use std::{cell::RefCell, iter::FusedIterator, rc::Rc};

use crate::arena::{Arena, Handle};

/// Walks a [`BoundedSet`](crate::BoundedSet) from least to most recently used.
///
/// The iterator shares the node storage with the set, so it can be drained
/// after the set itself is gone. It is a live view: changes made to the set
/// while a pass is running may be observed, and if the node it is about to
/// visit has been removed, or was promoted after the pass started, the pass
/// ends early. Promoting elements while iterating can therefore never keep a
/// pass running forever.
pub struct Iter<T> {
    arena: Rc<RefCell<Arena<T>>>,
    current: Option<Handle>,
    started_at: u64,
}

impl<T> Iter<T> {
    pub(crate) fn new(arena: Rc<RefCell<Arena<T>>>, head: Option<Handle>) -> Self {
        let started_at = arena.borrow().moves();
        Self {
            arena,
            current: head,
            started_at,
        }
    }
}

impl<T: Clone> Iterator for Iter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let handle = self.current.take()?;
        let arena = self.arena.borrow();
        let node = arena.get(handle).filter(|node| node.moved_at <= self.started_at)?;

        self.current = node.next;
        Some(node.element.clone())
    }
}

impl<T: Clone> FusedIterator for Iter<T> {}
