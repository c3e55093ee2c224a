//! # radixvec
//!
//! A growable radix-tree vector with O(1) clone, freeze, and snapshot
//! iteration through structural sharing.
//!
//! ## Overview
//!
//! [`RadixVector`] is a mutable ordered sequence in the style of Clojure's
//! persistent vector: the bulk of the elements live in an immutable 32-way
//! branching trie, and the rightmost few sit in a small mutable tail
//! buffer. Every tree mutation path-copies one node per level, so:
//!
//! - `clone` copies only the tail buffer and shares the whole tree
//! - [`RadixVector::freeze`] produces an immutable [`FrozenVector`] at the
//!   same cost
//! - [`RadixVector::values`] iterates a snapshot that later pushes and
//!   pops cannot disturb
//!
//! Indexed reads and writes are O(log32 N), which stays within a handful
//! of node hops for any realistic length.
//!
//! ## Feature Flags
//!
//! - `arc`: share tree nodes with `Arc` instead of `Rc`, making the types
//!   `Send`/`Sync` for thread-safe element types
//! - `serde`: `Serialize`/`Deserialize` for both vector forms
//! - `validate`: run the full structural audit after every mutating
//!   operation (the audit is also always available on demand through
//!   [`RadixVector::validate`])
//! - `full`: enable all of the above
//!
//! ## Example
//!
//! ```rust
//! use radixvec::RadixVector;
//!
//! let mut vector: RadixVector<i32> = (0..1000).collect();
//!
//! // Cheap snapshot: later mutation is invisible to it
//! let snapshot = vector.values();
//! vector.push(1000);
//! assert_eq!(snapshot.count(), 1000);
//!
//! // Cheap freeze: the tree is shared, not copied
//! let frozen = vector.freeze();
//! vector.set(0, 999);
//! assert_eq!(frozen.try_get(0), Some(&0));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type for shared tree nodes.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod frozen;
mod node;
mod slot;
mod tail;
mod vector;

pub use frozen::FrozenVector;
pub use frozen::FrozenVectorItems;
pub use frozen::FrozenVectorIterator;
pub use node::InvariantViolation;
pub use vector::RadixVector;
pub use vector::RadixVectorIntoIterator;
pub use vector::RadixVectorItems;
pub use vector::RadixVectorIterator;
pub use vector::RadixVectorValues;

// =============================================================================
// Tests
// =============================================================================
