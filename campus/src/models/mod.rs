pub mod event;
mod id;
mod manager;
mod seed;
mod user;

pub use self::event::{Category, Event, EventBuilder, EventDetail, Rating, Registration};
pub use self::id::EventId;
pub use self::manager::{EventManager, RatingEntry, RegisteredEntry, UserHandle, UserProfile};
pub use self::seed::{EventSeed, Seed, UserSeed};
pub use self::user::{trim, User};
