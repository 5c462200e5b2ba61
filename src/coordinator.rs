//! Persistence coordinator — identity-driven store selection and the write path.
//!
//! The coordinator is a state machine over identity transitions. Entering
//! `Authenticated(uid)` loads the remote collection filtered to `uid` and
//! replaces the in-memory list wholesale; entering `Anonymous` reads the
//! local `cappic-moments` key. Writes go to whichever store matches the
//! current state, with the in-memory list as a silent fallback when a remote
//! write fails. Every failure degrades — a failed load leaves the list
//! empty, a failed write keeps the moment client-side — and nothing is
//! retried.
//!
//! Each load carries a [`LoadTicket`] stamped with the generation of the
//! transition that started it. A result whose generation no longer matches
//! the current one is discarded, so a late-resolving load from a superseded
//! identity cannot clobber the list after rapid sign-in/out flapping.

use anyhow::Result;
use tracing::{debug, warn};

use crate::auth::Identity;
use crate::moment::types::Moment;
use crate::store::local::LocalStore;
use crate::store::RecordStore;

/// Ties an in-flight load to the identity transition that started it.
#[derive(Debug, Clone, Copy)]
pub struct LoadTicket {
    generation: u64,
}

/// Coordinates the in-memory moment list across the local and remote stores.
pub struct Coordinator<R: RecordStore> {
    remote: R,
    local: LocalStore,
    identity: Option<Identity>,
    generation: u64,
    moments: Vec<Moment>,
}

impl<R: RecordStore> Coordinator<R> {
    pub fn new(remote: R, local: LocalStore) -> Self {
        Self {
            remote,
            local,
            identity: None,
            generation: 0,
            moments: Vec::new(),
        }
    }

    /// The in-memory moment list, newest first.
    pub fn moments(&self) -> &[Moment] {
        &self.moments
    }

    /// The identity currently driving store selection, if any.
    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    /// The local store, for settings and backup operations that always live
    /// client-side.
    pub fn local(&self) -> &LocalStore {
        &self.local
    }

    /// The remote store, for capabilities outside the coordinated write path
    /// (blob uploads).
    pub fn remote(&self) -> &R {
        &self.remote
    }

    /// React to an identity emission: transition state, then load from the
    /// store that matches it. Never returns an error — a failed load is
    /// logged and leaves the list empty.
    pub async fn on_identity_changed(&mut self, identity: Option<Identity>) {
        let ticket = self.begin_transition(identity);
        let result = match &self.identity {
            Some(id) => self.remote.list_moments(&id.uid).await,
            None => self.local.load_moments(),
        };
        self.finish_load(ticket, result);
    }

    /// First half of a transition: record the new identity and stamp a
    /// ticket for the load it triggers. Exposed separately from
    /// [`Self::finish_load`] so overlapping loads can be driven explicitly.
    pub fn begin_transition(&mut self, identity: Option<Identity>) -> LoadTicket {
        self.generation += 1;
        self.identity = identity;
        LoadTicket {
            generation: self.generation,
        }
    }

    /// Second half of a transition: apply a load result, unless a newer
    /// transition has superseded the ticket.
    pub fn finish_load(&mut self, ticket: LoadTicket, result: Result<Vec<Moment>>) {
        if ticket.generation != self.generation {
            debug!(
                stale = ticket.generation,
                current = self.generation,
                "discarding load from superseded identity"
            );
            return;
        }
        match result {
            Ok(moments) => self.moments = moments,
            Err(error) => {
                warn!(%error, "moment load failed, starting with an empty list");
                self.moments.clear();
            }
        }
    }

    /// Write a new moment to the store matching the current identity state.
    ///
    /// Signed in: attempt a remote create with the owner set to the current
    /// uid; on success the returned record (store-assigned id) is prepended;
    /// on failure the submitted record is prepended unchanged, keeping its
    /// client-supplied id — best-effort, not retried, not reconciled later.
    ///
    /// Anonymous: prepend, then mirror the whole list to the local store.
    pub async fn add_moment(&mut self, mut moment: Moment) -> Result<()> {
        match self.identity.clone() {
            Some(id) => {
                moment.user_id = id.uid;
                match self.remote.create_moment(&moment).await {
                    Ok(stored) => self.moments.insert(0, stored),
                    Err(error) => {
                        warn!(%error, id = %moment.id, "remote create failed, keeping moment locally");
                        self.moments.insert(0, moment);
                    }
                }
                Ok(())
            }
            None => {
                self.moments.insert(0, moment);
                self.local.save_moments(&self.moments)
            }
        }
    }
}
