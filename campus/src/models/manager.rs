use std::{
    fmt::{self, Display},
    sync::atomic::{AtomicU64, Ordering},
};

use tracing::{debug, info, warn};

use super::{
    event::{Event, EventBuilder, Rating, Registration},
    id::IdAllocator,
    EventId, User,
};
use crate::error::{CampusError, Result};

static NEXT_MANAGER: AtomicU64 = AtomicU64::new(1);

/// Refers to a user owned by an [`EventManager`].
///
/// Only [`EventManager::authenticate_user`] hands these out. Users are never
/// removed, so a handle stays valid for the lifetime of its manager. Any other
/// manager rejects it with [`CampusError::UnknownUser`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserHandle {
    manager: u64,
    index: usize,
}

/// Owns every event and user. All mutation goes through here.
#[derive(Debug)]
pub struct EventManager {
    instance: u64,
    events: Vec<Event>,
    users: Vec<User>,
    ids: IdAllocator,
}
impl EventManager {
    pub fn new() -> Self {
        Self {
            instance: NEXT_MANAGER.fetch_add(1, Ordering::Relaxed),
            events: Vec::new(),
            users: Vec::new(),
            ids: IdAllocator::new(),
        }
    }

    /// Assigns the next id to `event` and appends it.
    pub fn add_event(&mut self, event: EventBuilder) -> EventId {
        let event = event.build(self.ids.next_id());
        let id = event.id;
        info!(event = %id, name = %event.name, category = %event.category(), "event added");
        self.events.push(event);
        id
    }
    /// Appends `user`. Usernames are not checked for uniqueness.
    pub fn add_user(&mut self, user: User) {
        self.users.push(user);
    }

    /// Finds the first user whose username and password both match.
    ///
    /// A wrong password and an unknown username give the same error.
    pub fn authenticate_user(&self, username: &str, password: &str) -> Result<UserHandle> {
        self.users
            .iter()
            .position(|u| u.username == username && u.authenticate(password))
            .map(|index| UserHandle {
                manager: self.instance,
                index,
            })
            .ok_or_else(|| {
                warn!(username, "failed login");
                CampusError::InvalidCredentials
            })
    }
    pub fn user(&self, handle: UserHandle) -> Result<&User> {
        self.owned(handle)
            .and_then(|index| self.users.get(index))
            .ok_or(CampusError::UnknownUser)
    }
    fn user_mut(&mut self, handle: UserHandle) -> Result<&mut User> {
        self.owned(handle)
            .and_then(|index| self.users.get_mut(index))
            .ok_or(CampusError::UnknownUser)
    }
    fn owned(&self, handle: UserHandle) -> Option<usize> {
        (handle.manager == self.instance).then_some(handle.index)
    }

    pub fn event(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }
    fn event_mut(&mut self, id: EventId) -> Result<&mut Event> {
        self.events.iter_mut().find(|e| e.id == id).ok_or_else(|| {
            warn!(event = %id, "no such event");
            CampusError::InvalidEventId(id)
        })
    }

    /// Registers `username` for the event with `id`.
    ///
    /// This only touches the event. See [`EventManager::enroll`] for the
    /// variant that also updates the user's own record.
    pub fn register_participant(&mut self, id: EventId, username: &str) -> Result<Registration> {
        Ok(self.event_mut(id)?.register(username))
    }
    /// Registers a logged-in user, recording the event on the user's side
    /// only when the registration was accepted.
    pub fn enroll(&mut self, handle: UserHandle, id: EventId) -> Result<Registration> {
        let username = self.user(handle)?.username.clone();
        let outcome = self.register_participant(id, &username)?;
        if outcome == Registration::Accepted {
            self.user_mut(handle)?.register_for_event(id);
        }
        Ok(outcome)
    }

    /// Adds `rating` to the event's aggregate and to the user's own map.
    /// Neither changes if the event does not exist.
    pub fn rate_event(&mut self, id: EventId, rating: Rating, handle: UserHandle) -> Result<()> {
        // resolve both before mutating either
        self.user(handle)?;
        self.event_mut(id)?.add_rating(rating);
        self.user_mut(handle)?.rate_event(id, rating);
        debug!(event = %id, %rating, "rating recorded");
        Ok(())
    }

    /// Events whose name, date or category label contain `query`, in
    /// insertion order.
    pub fn search_events(&self, query: &str) -> Vec<&Event> {
        let found: Vec<_> = self.events.iter().filter(|e| e.matches(query)).collect();
        debug!(query, hits = found.len(), "search");
        found
    }
    pub fn list_all_events(&self) -> &[Event] {
        &self.events
    }

    /// Resolves the ids in the user's record to event names. Ids with no
    /// matching event are skipped.
    pub fn display_user_profile(&self, user: &User) -> UserProfile {
        let registered = user
            .registered_events()
            .iter()
            .filter_map(|&id| {
                self.event(id).map(|e| RegisteredEntry {
                    id,
                    name: e.name.clone(),
                })
            })
            .collect();
        let ratings = user
            .ratings()
            .iter()
            .filter_map(|(&id, &rating)| {
                self.event(id).map(|e| RatingEntry {
                    name: e.name.clone(),
                    rating,
                })
            })
            .collect();
        UserProfile {
            username: user.username.clone(),
            registered,
            ratings,
        }
    }
}

impl Default for EventManager {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredEntry {
    pub id: EventId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingEntry {
    pub name: String,
    pub rating: Rating,
}

/// What a user has registered for and rated, with event names resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub username: String,
    pub registered: Vec<RegisteredEntry>,
    /// Ordered by event id.
    pub ratings: Vec<RatingEntry>,
}
impl Display for UserProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "User Profile for {}", self.username)?;
        writeln!(f, "Registered Events:")?;
        for e in &self.registered {
            writeln!(f, "- {} (ID: {})", e.name, e.id)?;
        }
        write!(f, "Event Ratings:")?;
        for r in &self.ratings {
            write!(f, "\n- {}: {}/5", r.name, r.rating)?;
        }
        Ok(())
    }
}
