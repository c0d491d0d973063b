use std::{cell::RefCell, collections::HashMap, fmt, hash::Hash, rc::Rc};

use log::{debug, trace};
use thiserror::Error;

use crate::{
    arena::{Arena, Handle},
    iter::Iter,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoundedSetError {
    #[error("Element not found in set")]
    NotFound,

    #[error("Capacity must be a non-negative integer, got {0}")]
    NegativeCapacity(i64),

    #[error("Capacity {0} does not fit in usize on this target")]
    CapacityOverflow(i64),
}

/// A set holding at most `max_size` elements, evicting the least recently used one on overflow.
/// Both `add` and a successful `contains` count as a use.
///
/// Each element is stored twice, as the index key and inside its list node, hence the `Clone` bound.
pub struct BoundedSet<T> {
    max_size: usize,
    index: HashMap<T, Handle>,
    arena: Rc<RefCell<Arena<T>>>,
    /// Least recently used
    head: Option<Handle>,
    /// Most recently used
    tail: Option<Handle>,
}

impl<T: Hash + Eq + Clone> BoundedSet<T> {
    pub fn new(max_size: usize) -> Self {
        Self {
            max_size,
            index: HashMap::new(),
            arena: Rc::new(RefCell::new(Arena::new())),
            head: None,
            tail: None,
        }
    }

    /// Create a set from a signed capacity, rejecting negative values
    pub fn with_signed_capacity(max_size: i64) -> Result<Self, BoundedSetError> {
        if max_size < 0 {
            return Err(BoundedSetError::NegativeCapacity(max_size));
        }
        usize::try_from(max_size)
            .map(Self::new)
            .map_err(|_| BoundedSetError::CapacityOverflow(max_size))
    }

    /// Add an element as the most recently used one.
    /// Adding an element that is already present only promotes it and never evicts.
    pub fn add(&mut self, element: T) {
        if let Some(&handle) = self.index.get(&element) {
            self.touch(handle);
            return;
        }

        {
            let mut arena = self.arena.borrow_mut();
            let handle = arena.insert(element.clone());
            arena.link_after(self.tail, handle);

            if self.head.is_none() {
                self.head = Some(handle);
            }
            self.tail = Some(handle);
            self.index.insert(element, handle);
        }

        if self.index.len() > self.max_size {
            self.evict();
        }
    }

    /// Returns true if the element is present, promoting it to most recently used
    pub fn contains(&mut self, element: &T) -> bool {
        match self.index.get(element) {
            Some(&handle) => {
                self.touch(handle);
                true
            }
            None => false,
        }
    }

    /// Membership test that leaves the recency order alone
    pub fn peek(&self, element: &T) -> bool {
        self.index.contains_key(element)
    }

    /// Remove an element, returning the copy the set was holding
    pub fn remove(&mut self, element: &T) -> Result<T, BoundedSetError> {
        let handle = self
            .index
            .remove(element)
            .ok_or(BoundedSetError::NotFound)?;
        self.detach(handle);

        let node = self.arena.borrow_mut().release(handle);
        debug_assert!(node.is_some(), "Index pointed at a released node");
        node.map(|node| node.element).ok_or(BoundedSetError::NotFound)
    }

    /// Next element to be evicted
    pub fn lru(&self) -> Option<T> {
        self.element_at(self.head)
    }

    pub fn mru(&self) -> Option<T> {
        self.element_at(self.tail)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Drop every element. Iterators still in flight end at their next step.
    pub fn clear(&mut self) {
        let dropped = self.index.len();
        self.index.clear();
        self.arena.borrow_mut().clear();
        self.head = None;
        self.tail = None;
        debug!("Cleared {} elements from bounded set", dropped);
    }

    /// Iterate from least to most recently used without promoting anything
    pub fn iter(&self) -> Iter<T> {
        Iter::new(Rc::clone(&self.arena), self.head)
    }

    /// Move a linked node to the tail
    fn touch(&mut self, handle: Handle) {
        if self.tail == Some(handle) {
            return;
        }

        let next = self.arena.borrow_mut().move_after(self.tail, handle);
        if self.head == Some(handle) {
            self.head = next;
        }
        self.tail = Some(handle);
    }

    /// Unlink a node from the list, fixing up the ends
    fn detach(&mut self, handle: Handle) {
        let (prev, next) = self.arena.borrow_mut().unlink(handle);
        if self.head == Some(handle) {
            self.head = next;
        }
        if self.tail == Some(handle) {
            self.tail = prev;
        }
    }

    fn evict(&mut self) {
        let Some(handle) = self.head else {
            return;
        };
        self.detach(handle);

        if let Some(node) = self.arena.borrow_mut().release(handle) {
            self.index.remove(&node.element);
        }
        debug_assert_eq!(self.index.len(), self.arena.borrow().len());

        trace!(
            "Evicted least recently used element ({}/{} in use)",
            self.index.len(),
            self.max_size
        );
    }

    fn element_at(&self, handle: Option<Handle>) -> Option<T> {
        let arena = self.arena.borrow();
        arena.get(handle?).map(|node| node.element.clone())
    }
}

impl<T: Hash + Eq + Clone> Extend<T> for BoundedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, elements: I) {
        for element in elements {
            self.add(element);
        }
    }
}

impl<T: Hash + Eq + Clone> IntoIterator for &BoundedSet<T> {
    type Item = T;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Iter<T> {
        self.iter()
    }
}

impl<T: Hash + Eq + Clone + fmt::Debug> fmt::Debug for BoundedSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedSet")
            .field("max_size", &self.max_size)
            .field("elements", &self.iter().collect::<Vec<T>>())
            .finish()
    }
}
