//! Record store capability.
//!
//! Provides the [`RecordStore`] trait for the hosted moment collection and
//! two concrete stores: [`local::LocalStore`] (SQLite key-value, used while
//! anonymous) and [`remote::RemoteStore`] (HTTP document collection, used
//! while signed in). The coordinator selects between them once per identity
//! transition.

pub mod local;
pub mod remote;

use anyhow::Result;

use crate::moment::types::Moment;

/// Capability of a hosted moment collection keyed by user id.
///
/// Update/delete exist as store capabilities on [`remote::RemoteStore`] but
/// are not part of this seam — nothing orchestrates them yet.
#[allow(async_fn_in_trait)]
pub trait RecordStore {
    /// List all moments owned by `uid`, ordered by timestamp descending.
    async fn list_moments(&self, uid: &str) -> Result<Vec<Moment>>;

    /// Create a moment. The store assigns the id and write timestamp; the
    /// stored record is returned.
    async fn create_moment(&self, moment: &Moment) -> Result<Moment>;
}
