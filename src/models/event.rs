use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored event. Immutable once the store hands it out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    /// IANA zone used for display only; the instants above are absolute.
    pub timezone: String,
}

/// Raw submission as it arrives on `POST /events`.
///
/// Missing fields deserialize as empty strings so the validation layer can
/// report them alongside every other violation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateEventRequest {
    pub name: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub timezone: String,
}
