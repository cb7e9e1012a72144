//! Session & authorization core of the RankUp client.
//!
//! Everything with an invariant lives here, framework-free: who is logged in,
//! which section is active, what the caller's role in it is, and what a route
//! guard should do about it. The UI layer injects a [`persist::KeyValueStore`]
//! and feeds backend responses in; it never owns state of its own.

pub mod guard;
pub mod persist;
pub mod section;
pub mod session;

pub use guard::{evaluate, AccessLevel, GuardOutcome};
pub use persist::{KeyValueStore, MemoryStore, SECTION_KEY, TOKEN_KEY};
pub use section::{RoleError, RoleQuery, SectionRole, SectionStore};
pub use session::{Identity, SessionStore};
