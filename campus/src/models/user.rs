use std::{collections::BTreeMap, fmt};

use super::{event::Rating, EventId};

/// An account together with the user's own record of registrations and
/// ratings.
#[derive(Clone)]
pub struct User {
    pub username: String,
    password: String,
    pub admin: bool,
    registered_events: Vec<EventId>,
    ratings: BTreeMap<EventId, Rating>,
}
impl User {
    pub fn new(username: &str, password: &str, admin: bool) -> Self {
        Self {
            username: String::from(username),
            password: String::from(password),
            admin,
            registered_events: Vec::new(),
            ratings: BTreeMap::new(),
        }
    }
    // Plain equality, the stored password is not hashed.
    pub fn authenticate(&self, candidate: &str) -> bool {
        self.password == candidate
    }
    /// Records a registration. Registering twice records the id twice.
    pub fn register_for_event(&mut self, id: EventId) {
        self.registered_events.push(id);
    }
    /// Records this user's rating for `id`, replacing any earlier one.
    pub fn rate_event(&mut self, id: EventId, rating: Rating) {
        self.ratings.insert(id, rating);
    }
    pub fn registered_events(&self) -> &[EventId] {
        &self.registered_events
    }
    pub fn ratings(&self) -> &BTreeMap<EventId, Rating> {
        &self.ratings
    }
}
impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("username", &self.username)
            .field("admin", &self.admin)
            .field("registered_events", &self.registered_events)
            .field("ratings", &self.ratings)
            .finish_non_exhaustive()
    }
}

/// Strips leading and trailing spaces. Tabs and newlines are left alone.
pub fn trim(input: &str) -> &str {
    input.trim_matches(' ')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_only_spaces() {
        assert_eq!(trim("  bob  "), "bob");
        assert_eq!(trim("   "), "");
        assert_eq!(trim(""), "");
        assert_eq!(trim(" a b "), "a b");
        assert_eq!(trim("\tbob\n"), "\tbob\n");
    }

    #[test]
    fn authenticate_is_exact() {
        let user = User::new("sit", "pune1234", true);
        assert!(user.authenticate("pune1234"));
        assert!(!user.authenticate("pune1234 "));
        assert!(!user.authenticate("PUNE1234"));
    }

    #[test]
    fn rerating_overwrites() {
        let mut user = User::new("bob", "pw", false);
        user.rate_event(EventId(2), Rating::new(3).unwrap());
        user.rate_event(EventId(1), Rating::new(5).unwrap());
        user.rate_event(EventId(2), Rating::new(1).unwrap());
        let ratings: Vec<_> = user.ratings().iter().map(|(id, r)| (id.0, r.value())).collect();
        assert_eq!(ratings, [(1, 5), (2, 1)]);
    }

    #[test]
    fn registrations_keep_duplicates() {
        let mut user = User::new("bob", "pw", false);
        user.register_for_event(EventId(1));
        user.register_for_event(EventId(1));
        assert_eq!(user.registered_events(), [EventId(1), EventId(1)]);
    }

    #[test]
    fn debug_hides_password() {
        let user = User::new("bob", "hunter2", false);
        assert!(!format!("{user:?}").contains("hunter2"));
    }
}
