use std::sync::Arc;

use indexmap::IndexMap;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::models::Activity;

/// The two rejection kinds the enrollment operations can produce. The display
/// strings are the exact `detail` values the HTTP layer surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Activity not found")]
    NotFound,
    #[error("Student is already signed up")]
    AlreadySignedUp,
    #[error("Student is not signed up for this activity")]
    NotSignedUp,
}

/// Shared handle to the in-memory activity registry.
///
/// Cloning is cheap; every clone sees the same underlying map. Activities are
/// fixed at construction — only the participant lists mutate afterwards. The
/// write lock is held across the whole lookup-check-mutate sequence of
/// [`signup`](Self::signup) / [`remove`](Self::remove) so concurrent requests
/// cannot interleave on the same participant list.
#[derive(Clone)]
pub struct ActivityRegistry {
    inner: Arc<RwLock<IndexMap<String, Activity>>>,
}

impl ActivityRegistry {
    pub fn new(activities: IndexMap<String, Activity>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(activities)),
        }
    }

    /// Registry pre-populated with the school's activity table. This is the
    /// only data the service ever has; state lives and dies with the process.
    pub fn seeded() -> Self {
        let mut activities = IndexMap::new();
        activities.insert(
            "Chess Club".to_string(),
            Activity {
                description: "Learn strategies and compete in chess tournaments".to_string(),
                schedule: "Fridays, 3:30 PM - 5:00 PM".to_string(),
                max_participants: 12,
                participants: vec![
                    "michael@mergington.edu".to_string(),
                    "daniel@mergington.edu".to_string(),
                ],
            },
        );
        activities.insert(
            "Programming Class".to_string(),
            Activity {
                description: "Learn programming fundamentals and build software projects"
                    .to_string(),
                schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM".to_string(),
                max_participants: 20,
                participants: vec![
                    "emma@mergington.edu".to_string(),
                    "sophia@mergington.edu".to_string(),
                ],
            },
        );
        activities.insert(
            "Gym Class".to_string(),
            Activity {
                description: "Physical education and sports activities".to_string(),
                schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM".to_string(),
                max_participants: 30,
                participants: vec![
                    "john@mergington.edu".to_string(),
                    "olivia@mergington.edu".to_string(),
                ],
            },
        );
        Self::new(activities)
    }

    /// Full snapshot of every activity, in seed order.
    pub async fn list(&self) -> IndexMap<String, Activity> {
        self.inner.read().await.clone()
    }

    /// Enroll `email` in the named activity. Lookup is exact and
    /// case-sensitive. The email is taken as-is; syntactic validation is
    /// deliberately absent. Capacity is not checked.
    pub async fn signup(&self, activity_name: &str, email: &str) -> Result<(), RegistryError> {
        let mut activities = self.inner.write().await;
        let activity = activities
            .get_mut(activity_name)
            .ok_or(RegistryError::NotFound)?;
        if activity.participants.iter().any(|p| p == email) {
            return Err(RegistryError::AlreadySignedUp);
        }
        activity.participants.push(email.to_string());
        Ok(())
    }

    /// Unenroll `email` from the named activity, removing exactly one
    /// occurrence.
    pub async fn remove(&self, activity_name: &str, email: &str) -> Result<(), RegistryError> {
        let mut activities = self.inner.write().await;
        let activity = activities
            .get_mut(activity_name)
            .ok_or(RegistryError::NotFound)?;
        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(RegistryError::NotSignedUp)?;
        activity.participants.remove(position);
        Ok(())
    }
}
