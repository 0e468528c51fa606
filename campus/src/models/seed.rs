use std::{
    fs::File,
    io::BufReader,
    num::NonZeroU32,
    path::Path,
};

use serde::{Deserialize, Serialize};
use tracing::info;

use super::{
    event::{EventBuilder, EventDetail},
    EventManager, User,
};
use crate::error::Result;

/// Users and events to load into a fresh [`EventManager`].
///
/// Seed files are written in [RON](https://github.com/ron-rs/ron):
///
/// ```ron
/// (
///     users: [(username: "sit", password: "pune1234", admin: true)],
///     events: [(name: "Prota", date: "2024-08-20", capacity: 500, detail: Sports(sport_type: "All"))],
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub users: Vec<UserSeed>,
    #[serde(default)]
    pub events: Vec<EventSeed>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSeed {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub admin: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSeed {
    pub name: String,
    pub date: String,
    /// Must be at least 1; `0` is rejected when the seed is parsed.
    pub capacity: NonZeroU32,
    pub detail: EventDetail,
}

impl Seed {
    pub fn from_ron(input: &str) -> Result<Self> {
        Ok(ron::from_str(input)?)
    }
    pub fn from_path<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let buf = BufReader::new(File::open(path)?);
        Ok(ron::de::from_reader(buf)?)
    }
    /// Adds the users, then the events in file order, so event ids follow
    /// that order.
    pub fn apply(self, manager: &mut EventManager) {
        info!(users = self.users.len(), events = self.events.len(), "seeding");
        for u in self.users {
            manager.add_user(User::new(&u.username, &u.password, u.admin));
        }
        for e in self.events {
            manager.add_event(EventBuilder::new(&e.name, &e.date, e.capacity, e.detail));
        }
    }
}

impl Default for Seed {
    /// The campus' starting accounts and events.
    fn default() -> Self {
        let user = |username: &str, password: &str, admin| UserSeed {
            username: String::from(username),
            password: String::from(password),
            admin,
        };
        let event = |name: &str, date: &str, capacity: u32, detail| EventSeed {
            name: String::from(name),
            date: String::from(date),
            capacity: NonZeroU32::new(capacity).unwrap_or(NonZeroU32::MIN),
            detail,
        };
        Self {
            users: vec![
                user("sit", "pune1234", true),
                user("lavale", "hillbase", false),
                user("209", "pass123", false),
            ],
            events: vec![
                event(
                    "Career in CyberSecurity and Digital Forensics",
                    "2024-11-15",
                    100,
                    EventDetail::Seminar {
                        speaker: String::from("Mr. Nikhil Mahadeshwar"),
                    },
                ),
                event(
                    "Web Development",
                    "2024-11-01",
                    50,
                    EventDetail::Workshop {
                        topic: String::from("Full-stack JavaScript"),
                        online: true,
                    },
                ),
                event(
                    "Prota",
                    "2024-08-20",
                    500,
                    EventDetail::Sports {
                        sport_type: String::from("All"),
                    },
                ),
            ],
        }
    }
}
