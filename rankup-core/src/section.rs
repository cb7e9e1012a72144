use log::warn;
use thiserror::Error;

use crate::persist::{KeyValueStore, SECTION_KEY};
use crate::session::Identity;

/* -------------------------------------------------------------------------- */
/*                                    role                                    */
/* -------------------------------------------------------------------------- */

/// Section-scoped role, derived from the backend rank. Never persisted;
/// re-derived once per session for the active `(user, section)` pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionRole {
    User,
    Admin,
    Superadmin,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RoleError {
    #[error("empty rank name")]
    EmptyRank,
}

impl SectionRole {
    /// Maps a backend rank string. Only "Superadmin" and "Kralj" are special;
    /// every other rank ("Pijun", "Lovac", …) is a plain member.
    pub fn try_from_rank(rank: &str) -> Result<Self, RoleError> {
        match rank.trim() {
            "" => Err(RoleError::EmptyRank),
            "Superadmin" => Ok(Self::Superadmin),
            "Kralj" => Ok(Self::Admin),
            _ => Ok(Self::User),
        }
    }
}

/* -------------------------------------------------------------------------- */
/*                                section store                               */
/* -------------------------------------------------------------------------- */

/// Tag carried by a role lookup from dispatch to completion. A completion is
/// only honored if its tag still matches both the in-flight lookup and the
/// currently selected section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoleQuery {
    pub user_id: i64,
    pub section_id: i64,
}

/// Tracks the active section and the caller's role in it.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionStore<S: KeyValueStore> {
    storage: S,
    section_id: Option<i64>,
    role: Option<SectionRole>,
    in_flight: Option<RoleQuery>,
    attempted: bool,
}

impl<S: KeyValueStore> SectionStore<S> {
    /// Restores the persisted section id; the role always starts unknown.
    pub fn new(storage: S) -> Self {
        let section_id = storage.get(SECTION_KEY).and_then(|id| id.parse().ok());
        Self { storage, section_id, role: None, in_flight: None, attempted: false }
    }

    pub fn section_id(&self) -> Option<i64> {
        self.section_id
    }

    pub fn role(&self) -> Option<SectionRole> {
        self.role
    }

    /// True while a lookup is running, or while one is still owed for a known
    /// section. False when no section is selected (nothing to resolve) or
    /// once the first attempt has completed.
    pub fn role_loading(&self) -> bool {
        self.in_flight.is_some()
            || (!self.attempted && self.section_id.is_some() && self.role.is_none())
    }

    /// Makes `section_id` current, optionally installing a role that is
    /// already known (e.g. right after joining with a known rank). Any
    /// previously resolved role and any in-flight lookup are invalidated.
    pub fn select(&mut self, section_id: i64, role: Option<SectionRole>) {
        self.storage.set(SECTION_KEY, &section_id.to_string());
        self.section_id = Some(section_id);
        self.role = role;
        self.in_flight = None;
        self.attempted = role.is_some();
    }

    /// Clears the resolved role so the next render re-fetches it. Called when
    /// the identity changes; a role is only meaningful for the `(user,
    /// section)` pair it was resolved for.
    pub fn invalidate_role(&mut self) {
        self.role = None;
        self.in_flight = None;
        self.attempted = false;
    }

    /// The lookup that should be fired now, if any: identity and section
    /// known, role unknown, nothing already in flight and no completed
    /// attempt for this pair. Guards may ask on every render; a failed
    /// attempt is not retried until the section or identity changes.
    pub fn pending_query(&self, user: Option<&Identity>) -> Option<RoleQuery> {
        if self.role.is_some() || self.in_flight.is_some() || self.attempted {
            return None;
        }
        let user_id = user?.id;
        let section_id = self.section_id?;
        Some(RoleQuery { user_id, section_id })
    }

    pub fn begin_resolution(&mut self, query: RoleQuery) {
        self.in_flight = Some(query);
    }

    /// Completion of a lookup. `rank` is `None` on failure or timeout, which
    /// leaves the role unknown. Responses whose tag no longer matches the
    /// in-flight lookup and the current section are stale and dropped.
    pub fn finish_resolution(&mut self, query: RoleQuery, rank: Option<&str>) {
        if self.in_flight != Some(query) || self.section_id != Some(query.section_id) {
            warn!(
                "dropping stale role lookup for user {} in section {}",
                query.user_id, query.section_id
            );
            return;
        }
        self.in_flight = None;
        self.attempted = true;
        match rank.map(SectionRole::try_from_rank) {
            Some(Ok(role)) => self.role = Some(role),
            Some(Err(err)) => warn!("unusable rank in role lookup: {err}"),
            None => warn!(
                "role lookup failed for user {} in section {}; role stays unknown",
                query.user_id, query.section_id
            ),
        }
    }
}

/* -------------------------------------------------------------------------- */
/*                                    tests                                   */
/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persist::MemoryStore;

    fn ana() -> Identity {
        Identity {
            id: 7,
            first_name: "Ana".into(),
            last_name: "K".into(),
            email: String::new(),
            jmbag: String::new(),
            super_admin: false,
        }
    }

    #[test]
    fn rank_mapping() {
        assert_eq!(SectionRole::try_from_rank("Superadmin"), Ok(SectionRole::Superadmin));
        assert_eq!(SectionRole::try_from_rank("Kralj"), Ok(SectionRole::Admin));
        assert_eq!(SectionRole::try_from_rank("Pijun"), Ok(SectionRole::User));
        assert_eq!(SectionRole::try_from_rank("Kraljica"), Ok(SectionRole::User));
        assert_eq!(SectionRole::try_from_rank("  "), Err(RoleError::EmptyRank));
    }

    #[test]
    fn restores_persisted_section_id() {
        let storage = MemoryStore::new();
        storage.set(SECTION_KEY, "42");
        let section = SectionStore::new(storage);

        assert_eq!(section.section_id(), Some(42));
        assert_eq!(section.role(), None);
    }

    #[test]
    fn select_persists_and_invalidates_previous_role() {
        let mut section = SectionStore::new(MemoryStore::new());
        section.select(42, Some(SectionRole::Admin));
        assert_eq!(section.role(), Some(SectionRole::Admin));
        assert!(!section.role_loading());

        section.select(43, None);
        assert_eq!(section.section_id(), Some(43));
        assert_eq!(section.role(), None);
        assert!(section.role_loading());
    }

    #[test]
    fn successful_resolution_stores_mapped_role() {
        let mut section = SectionStore::new(MemoryStore::new());
        section.select(42, None);

        let query = section.pending_query(Some(&ana())).unwrap();
        assert_eq!(query, RoleQuery { user_id: 7, section_id: 42 });

        section.begin_resolution(query);
        section.finish_resolution(query, Some("Kralj"));

        assert_eq!(section.role(), Some(SectionRole::Admin));
        assert!(!section.role_loading());
    }

    #[test]
    fn no_query_without_identity_or_section() {
        let section = SectionStore::new(MemoryStore::new());
        assert_eq!(section.pending_query(Some(&ana())), None);

        let mut section = SectionStore::new(MemoryStore::new());
        section.select(42, None);
        assert_eq!(section.pending_query(None), None);
    }

    #[test]
    fn in_flight_lookup_is_not_handed_out_twice() {
        let mut section = SectionStore::new(MemoryStore::new());
        section.select(42, None);

        let query = section.pending_query(Some(&ana())).unwrap();
        section.begin_resolution(query);
        assert_eq!(section.pending_query(Some(&ana())), None);
    }

    #[test]
    fn stale_response_for_superseded_section_is_dropped() {
        let mut section = SectionStore::new(MemoryStore::new());
        section.select(42, None);

        let stale = section.pending_query(Some(&ana())).unwrap();
        section.begin_resolution(stale);

        // user switches sections while the lookup is in the air
        section.select(43, None);
        section.finish_resolution(stale, Some("Superadmin"));

        assert_eq!(section.role(), None);

        // the replacement lookup for the new section still works
        let fresh = section.pending_query(Some(&ana())).unwrap();
        assert_eq!(fresh.section_id, 43);
        section.begin_resolution(fresh);
        section.finish_resolution(fresh, Some("Pijun"));
        assert_eq!(section.role(), Some(SectionRole::User));
    }

    #[test]
    fn duplicate_completion_is_dropped() {
        let mut section = SectionStore::new(MemoryStore::new());
        section.select(42, None);

        let query = section.pending_query(Some(&ana())).unwrap();
        section.begin_resolution(query);
        section.finish_resolution(query, Some("Pijun"));
        section.finish_resolution(query, Some("Superadmin"));

        assert_eq!(section.role(), Some(SectionRole::User));
    }

    #[test]
    fn failed_resolution_leaves_role_unknown_but_settles_loading() {
        let mut section = SectionStore::new(MemoryStore::new());
        section.select(42, None);

        let query = section.pending_query(Some(&ana())).unwrap();
        section.begin_resolution(query);
        section.finish_resolution(query, None);

        assert_eq!(section.role(), None);
        assert!(!section.role_loading());
    }

    #[test]
    fn failed_resolution_is_not_retried_until_invalidated() {
        let mut section = SectionStore::new(MemoryStore::new());
        section.select(42, None);

        let query = section.pending_query(Some(&ana())).unwrap();
        section.begin_resolution(query);
        section.finish_resolution(query, None);

        assert_eq!(section.pending_query(Some(&ana())), None);

        section.invalidate_role();
        assert!(section.pending_query(Some(&ana())).is_some());
    }

    #[test]
    fn identity_change_invalidates_resolved_role() {
        let mut section = SectionStore::new(MemoryStore::new());
        section.select(42, None);

        let query = section.pending_query(Some(&ana())).unwrap();
        section.begin_resolution(query);
        section.finish_resolution(query, Some("Kralj"));
        assert_eq!(section.role(), Some(SectionRole::Admin));

        section.invalidate_role();
        assert_eq!(section.role(), None);

        let other = Identity { id: 8, ..ana() };
        let requery = section.pending_query(Some(&other)).unwrap();
        assert_eq!(requery, RoleQuery { user_id: 8, section_id: 42 });
    }

    #[test]
    fn no_section_means_nothing_to_load() {
        let section = SectionStore::new(MemoryStore::new());
        assert!(!section.role_loading());
    }
}
