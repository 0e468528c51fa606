use std::{
    fmt::{self, Display},
    num::NonZeroU32,
};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::EventId;
use crate::error::{CampusError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Academic,
    /// Reserved. No kind of event is created in this category yet.
    Cultural,
    Technical,
    Sports,
    #[serde(other)]
    Unknown,
}
impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Academic => "Academic",
            Category::Cultural => "Cultural",
            Category::Technical => "Technical",
            Category::Sports => "Sports",
            Category::Unknown => "Unknown",
        }
    }
    /// Parses the category names an admin can create events in.
    ///
    /// The match is exact and case-sensitive. `Cultural` is rejected because
    /// there is no [`EventDetail`] for it.
    pub fn parse_creatable(input: &str) -> Result<Self> {
        match input {
            "Academic" => Ok(Category::Academic),
            "Technical" => Ok(Category::Technical),
            "Sports" => Ok(Category::Sports),
            other => Err(CampusError::InvalidCategory(String::from(other))),
        }
    }
}
impl Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The part of an event that depends on what kind of event it is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventDetail {
    Seminar { speaker: String },
    Workshop { topic: String, online: bool },
    Sports { sport_type: String },
}
impl EventDetail {
    pub fn category(&self) -> Category {
        match self {
            EventDetail::Seminar { .. } => Category::Academic,
            EventDetail::Workshop { .. } => Category::Technical,
            EventDetail::Sports { .. } => Category::Sports,
        }
    }
}

/// Outcome of a registration that found its event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    Accepted,
    Waitlisted,
}

/// A rating between 1 and 5 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rating(u8);
impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: i64) -> Result<Self> {
        match u8::try_from(value) {
            Ok(v) if (Self::MIN..=Self::MAX).contains(&v) => Ok(Self(v)),
            _ => Err(CampusError::InvalidRating(value)),
        }
    }
    pub fn value(self) -> u8 {
        self.0
    }
}
impl Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registrable event.
///
/// The participant list never grows past `capacity`; anyone registering after
/// that lands on the waitlist, in call order. Nobody is ever promoted off the
/// waitlist.
#[derive(Debug, Clone)]
pub struct Event {
    pub id: EventId,
    pub name: String,
    /// Free-form, never parsed.
    pub date: String,
    pub capacity: NonZeroU32,
    pub detail: EventDetail,
    registered: Vec<String>,
    waitlist: Vec<String>,
    ratings: Vec<Rating>,
}
impl Event {
    /// Registers `username`, with no check for repeat registrations.
    pub fn register(&mut self, username: &str) -> Registration {
        if self.registered.len() < self.capacity.get() as usize {
            self.registered.push(String::from(username));
            debug!(event = %self.id, username, "participant registered");
            Registration::Accepted
        } else {
            self.waitlist.push(String::from(username));
            debug!(event = %self.id, username, "event full, participant waitlisted");
            Registration::Waitlisted
        }
    }
    pub fn add_rating(&mut self, rating: Rating) {
        self.ratings.push(rating);
    }
    /// Mean of all ratings, `None` until the first one arrives.
    pub fn average_rating(&self) -> Option<f64> {
        if self.ratings.is_empty() {
            return None;
        }
        let sum: f64 = self.ratings.iter().map(|r| f64::from(r.value())).sum();
        Some(sum / self.ratings.len() as f64)
    }
    pub fn category(&self) -> Category {
        self.detail.category()
    }
    pub fn registered_users(&self) -> &[String] {
        &self.registered
    }
    pub fn waitlist(&self) -> &[String] {
        &self.waitlist
    }
    pub fn ratings(&self) -> &[Rating] {
        &self.ratings
    }
    /// Whether `query` occurs literally in the name, date or category label.
    pub fn matches(&self, query: &str) -> bool {
        self.name.contains(query)
            || self.date.contains(query)
            || self.category().label().contains(query)
    }
}
impl Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Event ID: {}", self.id)?;
        writeln!(f, "Event: {}", self.name)?;
        writeln!(f, "Date: {}", self.date)?;
        writeln!(f, "Capacity: {}", self.capacity)?;
        write!(f, "Category: {}", self.category())?;
        if let Some(avg) = self.average_rating() {
            write!(f, "\nAverage Rating: {avg:.1}")?;
        }
        match &self.detail {
            EventDetail::Seminar { speaker } => write!(f, "\nSpeaker: {speaker}"),
            EventDetail::Workshop { topic, online } => {
                let format = if *online { "Online" } else { "Offline" };
                write!(f, "\nTopic: {topic}\nFormat: {format}")
            }
            EventDetail::Sports { sport_type } => write!(f, "\nSport Type: {sport_type}"),
        }
    }
}

/// Everything needed to create an [`Event`] except its id, which the
/// [`EventManager`](super::EventManager) assigns when the event is added.
#[derive(Debug, Clone)]
pub struct EventBuilder {
    name: String,
    date: String,
    capacity: NonZeroU32,
    detail: EventDetail,
}
impl EventBuilder {
    pub fn new(name: &str, date: &str, capacity: NonZeroU32, detail: EventDetail) -> Self {
        Self {
            name: String::from(name),
            date: String::from(date),
            capacity,
            detail,
        }
    }
    pub fn seminar(name: &str, date: &str, capacity: NonZeroU32, speaker: &str) -> Self {
        let speaker = String::from(speaker);
        Self::new(name, date, capacity, EventDetail::Seminar { speaker })
    }
    pub fn workshop(name: &str, date: &str, capacity: NonZeroU32, topic: &str, online: bool) -> Self {
        let topic = String::from(topic);
        Self::new(name, date, capacity, EventDetail::Workshop { topic, online })
    }
    pub fn sports(name: &str, date: &str, capacity: NonZeroU32, sport_type: &str) -> Self {
        let sport_type = String::from(sport_type);
        Self::new(name, date, capacity, EventDetail::Sports { sport_type })
    }
    pub(crate) fn build(self, id: EventId) -> Event {
        Event {
            id,
            name: self.name,
            date: self.date,
            capacity: self.capacity,
            detail: self.detail,
            registered: Vec::new(),
            waitlist: Vec::new(),
            ratings: Vec::new(),
        }
    }
}
