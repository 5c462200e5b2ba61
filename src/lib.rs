//! Capture yours now. Remember your year.
//!
//! cappic is a photo/note journaling client: each **moment** is an image plus
//! an optional note, mood emoji, and tags, browsed on a timeline grouped into
//! temporal buckets (Today / Yesterday / This Week / Month-Year).
//!
//! Moments persist to one of two record stores, selected by sign-in state:
//!
//! | State | Store | Behavior |
//! |-------|-------|----------|
//! | **Anonymous** | Local SQLite key-value store | whole list mirrored on every write |
//! | **Signed in** | Hosted document collection | server-assigned ids, server-ordered by timestamp |
//!
//! A remote failure never aborts: reads degrade to an empty list and writes
//! fall back to keeping the moment in the local list, both logged and
//! otherwise silent.
//!
//! # Modules
//!
//! - [`backup`] — JSON backup export/import of the local moment list
//! - [`config`] — Configuration loading from TOML files and environment variables
//! - [`db`] — SQLite initialization and schema for the local record store
//! - [`moment`] — Moment/Settings types and the timeline filter/group pipeline
//! - [`store`] — Record store capability: local key-value and remote HTTP
//! - [`auth`] — Email/password identity provider and identity change stream
//! - [`coordinator`] — Identity-driven store selection and the write path

pub mod auth;
pub mod backup;
pub mod config;
pub mod coordinator;
pub mod db;
pub mod moment;
pub mod store;
