use std::sync::{Arc, RwLock};

use indexmap::IndexMap;
use thiserror::Error;

use crate::models::Activity;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("activity not found")]
    ActivityNotFound,
    #[error("already signed up for this activity")]
    AlreadySignedUp,
    #[error("not signed up for this activity")]
    NotSignedUp,
}

/// Shared handle to the in-memory activity mapping. Cloning is cheap; all
/// clones see the same data. Activities are fixed at seed time, only the
/// participant lists mutate.
#[derive(Clone)]
pub struct ActivityStore {
    inner: Arc<RwLock<IndexMap<String, Activity>>>,
}

impl ActivityStore {
    pub fn new(activities: IndexMap<String, Activity>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(activities)),
        }
    }

    /// Store pre-loaded with the school's fixed activity roster.
    pub fn seeded() -> Self {
        let mut activities = IndexMap::new();
        for (name, description, schedule, max_participants, participants) in SEED_ACTIVITIES {
            activities.insert(
                (*name).to_string(),
                Activity {
                    description: (*description).to_string(),
                    schedule: (*schedule).to_string(),
                    max_participants: *max_participants,
                    participants: participants.iter().map(|p| (*p).to_string()).collect(),
                },
            );
        }
        Self::new(activities)
    }

    /// Snapshot of the full mapping, in seed order.
    pub fn all(&self) -> IndexMap<String, Activity> {
        self.inner.read().expect("activity store lock poisoned").clone()
    }

    pub fn get(&self, name: &str) -> Option<Activity> {
        self.inner
            .read()
            .expect("activity store lock poisoned")
            .get(name)
            .cloned()
    }

    /// Append `email` to the activity's participant list. The duplicate check
    /// and the append happen under one write lock so they cannot race.
    pub fn add_participant(&self, name: &str, email: &str) -> Result<(), StoreError> {
        let mut activities = self.inner.write().expect("activity store lock poisoned");
        let activity = activities.get_mut(name).ok_or(StoreError::ActivityNotFound)?;
        if activity.participants.iter().any(|p| p == email) {
            return Err(StoreError::AlreadySignedUp);
        }
        activity.participants.push(email.to_string());
        Ok(())
    }

    /// Remove `email` from the activity's participant list, keeping the order
    /// of the remaining participants.
    pub fn remove_participant(&self, name: &str, email: &str) -> Result<(), StoreError> {
        let mut activities = self.inner.write().expect("activity store lock poisoned");
        let activity = activities.get_mut(name).ok_or(StoreError::ActivityNotFound)?;
        let pos = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(StoreError::NotSignedUp)?;
        activity.participants.remove(pos);
        Ok(())
    }
}

type SeedActivity = (&'static str, &'static str, &'static str, u32, &'static [&'static str]);

const SEED_ACTIVITIES: &[SeedActivity] = &[
    (
        "Chess Club",
        "Learn strategies and compete in chess tournaments",
        "Fridays, 3:30 PM - 5:00 PM",
        12,
        &["michael@mergington.edu", "daniel@mergington.edu"],
    ),
    (
        "Programming Class",
        "Learn programming fundamentals and build software projects",
        "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        20,
        &["emma@mergington.edu", "sophia@mergington.edu"],
    ),
    (
        "Gym Class",
        "Physical education and sports activities",
        "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        30,
        &["john@mergington.edu", "olivia@mergington.edu"],
    ),
    (
        "Soccer Team",
        "Join the school soccer team and compete in matches",
        "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
        22,
        &["liam@mergington.edu", "noah@mergington.edu"],
    ),
    (
        "Basketball Team",
        "Practice and play basketball with the school team",
        "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
        15,
        &["ava@mergington.edu", "mia@mergington.edu"],
    ),
    (
        "Art Club",
        "Explore your creativity through painting and drawing",
        "Thursdays, 3:30 PM - 5:00 PM",
        15,
        &["amelia@mergington.edu", "harper@mergington.edu"],
    ),
    (
        "Drama Club",
        "Act, direct, and produce plays and performances",
        "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
        20,
        &["ella@mergington.edu", "scarlett@mergington.edu"],
    ),
    (
        "Math Club",
        "Solve challenging problems and participate in math competitions",
        "Tuesdays, 3:30 PM - 4:30 PM",
        10,
        &["james@mergington.edu", "benjamin@mergington.edu"],
    ),
    (
        "Debate Team",
        "Develop public speaking and argumentation skills",
        "Fridays, 4:00 PM - 5:30 PM",
        12,
        &["charlotte@mergington.edu", "henry@mergington.edu"],
    ),
];
