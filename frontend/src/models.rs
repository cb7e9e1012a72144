//! Wire types exchanged with the RankUp backend. All JSON is camelCase.

use rankup_core::Identity;
use serde::{Deserialize, Serialize};

/* ------------------------------ auth ------------------------------------- */

#[derive(Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `id` and `superAdmin` arrive next to the `user` payload and are merged
/// into the identity by the caller.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub user: Identity,
    pub id: i64,
    #[serde(default)]
    pub super_admin: bool,
}

#[derive(Deserialize)]
pub struct MeResponse {
    pub user: Identity,
    pub id: i64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub jmbag: String,
    pub email: String,
    pub password: String,
    pub repeat_password: String,
}

/* ---------------------------- sections ----------------------------------- */

#[derive(Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description_url: Option<String>,
}

/// Row of `members/{userId}/sections`: a membership with its backend rank.
#[derive(Clone, PartialEq, Deserialize)]
pub struct EnrolledSection {
    pub id: i64,
    pub name: String,
    pub rank: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinRequest {
    pub jmbag: String,
    pub rank_name: String,
}

#[derive(Serialize)]
pub struct SectionForm {
    pub name: String,
    pub description: String,
}

/// Response of `sections/{sectionId}/members/{userId}`, used for role
/// resolution.
#[derive(Deserialize)]
pub struct MemberRank {
    pub rank: String,
}

/* ----------------------------- members ----------------------------------- */

#[derive(Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionMember {
    pub member_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub jmbag: String,
    #[serde(default)]
    pub active: bool,
}

#[derive(Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberProfile {
    pub first_name: String,
    pub last_name: String,
    pub jmbag: String,
    pub rank_name: String,
    #[serde(default)]
    pub points_semester: i32,
    #[serde(default)]
    pub points_total: i32,
    #[serde(default)]
    pub additional_points_needed: i32,
}

/* ------------------------------ events ----------------------------------- */

#[derive(Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub date: String,
    #[serde(default)]
    pub points: Option<i32>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    pub name: String,
    pub date: String,
    pub id_event_type: i32,
    pub description: String,
}

/// Attendee row of `sections/{id}/participations/event/{eventId}`.
#[derive(Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub jmbag: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipationRequest {
    pub member_id: i64,
    pub event_id: i64,
}

/* ---------------------------- scoreboard ---------------------------------- */

#[derive(Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreboardEntry {
    pub first_name: String,
    pub last_name: String,
    pub points: i32,
}

/* ----------------------------- activity ----------------------------------- */

#[derive(Clone, PartialEq, Deserialize)]
pub struct ActivityEvent {
    pub name: String,
    pub date: String,
    #[serde(default)]
    pub points: i32,
}

#[derive(Deserialize)]
pub struct ActivityResponse {
    #[serde(default)]
    pub events: Vec<ActivityEvent>,
}

/* ----------------------------- semesters ---------------------------------- */

#[derive(Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Semester {
    pub id: i64,
    pub name: String,
    pub date_from: String,
    pub date_to: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SemesterForm {
    pub name: String,
    pub date_from: String,
    pub date_to: String,
}
