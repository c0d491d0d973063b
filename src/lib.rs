//! A bounded set that evicts its least recently used element once full.
//!
//! Membership checks count as use: a successful [`BoundedSet::contains`] moves the
//! element to the most recently used end, exactly like re-adding it does.
//!
//! ```
//! use lru_set::BoundedSet;
//!
//! let mut seen = BoundedSet::new(2);
//! seen.add("a");
//! seen.add("b");
//! assert!(seen.contains(&"a")); // "b" is now the least recently used
//! seen.add("c");
//! assert!(!seen.peek(&"b"));
//! assert_eq!(seen.iter().collect::<Vec<_>>(), vec!["a", "c"]);
//! ```

mod arena;
pub mod bounded_set;
pub mod iter;
mod tests;

pub use bounded_set::{BoundedSet, BoundedSetError};
pub use iter::Iter;
