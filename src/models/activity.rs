use serde::{Deserialize, Serialize};

/// One extracurricular offering, keyed in the registry by its display name.
///
/// `max_participants` is advisory: signups are accepted past capacity (the
/// front-end shows it as "spots left", nothing enforces it server-side).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// Enrolled student emails, insertion order, no duplicates. Always present
    /// in the JSON output, empty when nobody signed up yet.
    pub participants: Vec<String>,
}
