//! Read interface to tenant site records.
//!
//! The renderer core treats persistence as an external collaborator: this
//! crate defines the [`SiteStore`] trait it reads through and nothing else.
//! No operation here performs a write.
//!
//! "Not found" is data, not an error: lookup methods return `Ok(None)` when
//! a record is absent. [`StoreError`] is reserved for operational faults
//! (network, storage backend), so callers can keep "content missing" and
//! "backend down" strictly apart.

mod store;

#[cfg(any(test, feature = "mock"))]
mod mock;

#[cfg(any(test, feature = "mock"))]
pub use mock::MockStore;
pub use store::{SiteStore, StoreError, StoreErrorKind};
