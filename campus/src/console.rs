//! The interactive menu: log in, then pick numbered actions until logging
//! out. Runs until its input is exhausted.

use std::{
    io::{self, BufRead, Write},
    num::NonZeroU32,
};

use tracing::info;

use crate::{
    error::{CampusError, Result},
    models::{trim, Category, EventBuilder, EventDetail, EventId, EventManager, Rating, Registration, UserHandle},
};

const SEPARATOR: &str = "------------------------";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    ListEvents,
    Register,
    Search,
    Rate,
    Profile,
    AddEvent,
    Logout,
}
impl MenuChoice {
    /// `6` only exists for admins.
    fn parse(input: &str, admin: bool) -> Result<Self> {
        let invalid = || CampusError::InvalidMenuChoice(String::from(input));
        match input.parse::<i64>().map_err(|_| invalid())? {
            1 => Ok(MenuChoice::ListEvents),
            2 => Ok(MenuChoice::Register),
            3 => Ok(MenuChoice::Search),
            4 => Ok(MenuChoice::Rate),
            5 => Ok(MenuChoice::Profile),
            6 if admin => Ok(MenuChoice::AddEvent),
            0 => Ok(MenuChoice::Logout),
            _ => Err(invalid()),
        }
    }
}

pub struct Console<'m, R, W> {
    manager: &'m mut EventManager,
    input: R,
    output: W,
}
impl<'m, R, W> Console<'m, R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(manager: &'m mut EventManager, input: R, output: W) -> Self {
        Self {
            manager,
            input,
            output,
        }
    }

    /// Runs login/menu cycles until the input ends. Only I/O failures are
    /// returned, every domain error is reported on the output instead.
    pub fn run(mut self) -> Result<()> {
        match self.drive() {
            Err(CampusError::Io(e)) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(()),
            other => other,
        }
    }

    fn drive(&mut self) -> Result<()> {
        loop {
            let user = self.login()?;
            self.session(user)?;
        }
    }

    fn login(&mut self) -> Result<UserHandle> {
        loop {
            let username = self.read_trimmed("Enter username: ")?;
            let password = self.read_trimmed("Enter password: ")?;
            match self.manager.authenticate_user(&username, &password) {
                Ok(user) => {
                    info!(%username, "logged in");
                    return Ok(user);
                }
                Err(e) => writeln!(self.output, "{e}. Please try again.")?,
            }
        }
    }

    fn session(&mut self, user: UserHandle) -> Result<()> {
        loop {
            let admin = self.manager.user(user)?.admin;
            self.print_menu(admin)?;
            let choice = self.read_trimmed("Enter your choice: ")?;
            let outcome = match MenuChoice::parse(&choice, admin) {
                Ok(MenuChoice::ListEvents) => self.list_events(),
                Ok(MenuChoice::Register) => self.register(user),
                Ok(MenuChoice::Search) => self.search(),
                Ok(MenuChoice::Rate) => self.rate(user),
                Ok(MenuChoice::Profile) => self.profile(user),
                Ok(MenuChoice::AddEvent) => self.add_event(),
                Ok(MenuChoice::Logout) => {
                    let username = &self.manager.user(user)?.username;
                    info!(%username, "logged out");
                    writeln!(self.output, "Logged out successfully.")?;
                    return Ok(());
                }
                Err(e) => Err(e),
            };
            match outcome {
                Ok(()) => {}
                Err(e @ CampusError::Io(_)) => return Err(e),
                Err(e @ CampusError::InvalidMenuChoice(_)) => {
                    writeln!(self.output, "{e}. Please try again.")?
                }
                Err(e) => writeln!(self.output, "{e}.")?,
            }
        }
    }

    fn print_menu(&mut self, admin: bool) -> Result<()> {
        writeln!(self.output, "\nCampus Event Management System")?;
        writeln!(self.output, "1. Display All Events")?;
        writeln!(self.output, "2. Register for an Event")?;
        writeln!(self.output, "3. Search Events")?;
        writeln!(self.output, "4. Rate an Event")?;
        writeln!(self.output, "5. View User Profile")?;
        if admin {
            writeln!(self.output, "6. Add New Event")?;
        }
        writeln!(self.output, "0. Logout")?;
        Ok(())
    }

    fn list_events(&mut self) -> Result<()> {
        for event in self.manager.list_all_events() {
            writeln!(self.output, "{event}\n{SEPARATOR}")?;
        }
        Ok(())
    }

    fn register(&mut self, user: UserHandle) -> Result<()> {
        let id = parse_event_id(&self.read_trimmed("Enter the event ID: ")?)?;
        let message = match self.manager.enroll(user, id)? {
            Registration::Accepted => "Participant registered successfully.",
            Registration::Waitlisted => "Event is full. You've been added to the waitlist.",
        };
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    fn search(&mut self) -> Result<()> {
        let query = self.read_raw("Enter search query: ")?;
        writeln!(self.output, "Search results for '{query}':")?;
        let found = self.manager.search_events(&query);
        if found.is_empty() {
            writeln!(self.output, "No events found matching the query.")?;
        }
        for event in found {
            writeln!(self.output, "{event}\n{SEPARATOR}")?;
        }
        Ok(())
    }

    fn rate(&mut self, user: UserHandle) -> Result<()> {
        let id = self.read_trimmed("Enter the event ID: ")?;
        let rating = self.read_trimmed("Enter your rating (1-5): ")?;
        let id = parse_event_id(&id)?;
        let rating = Rating::new(parse_number(&rating)?)?;
        self.manager.rate_event(id, rating, user)?;
        writeln!(self.output, "Thank you for rating the event!")?;
        Ok(())
    }

    fn profile(&mut self, user: UserHandle) -> Result<()> {
        let profile = self.manager.display_user_profile(self.manager.user(user)?);
        writeln!(self.output, "{profile}")?;
        Ok(())
    }

    fn add_event(&mut self) -> Result<()> {
        match self.read_new_event() {
            Ok(event) => {
                self.manager.add_event(event);
                writeln!(self.output, "Event added successfully.")?;
            }
            Err(e @ CampusError::Io(_)) => return Err(e),
            Err(e) => writeln!(self.output, "{e}. Event not added.")?,
        }
        Ok(())
    }

    fn read_new_event(&mut self) -> Result<EventBuilder> {
        let name = self.read_raw("Enter event name: ")?;
        let date = self.read_raw("Enter event date (YYYY-MM-DD): ")?;
        let capacity = parse_capacity(&self.read_trimmed("Enter event capacity: ")?)?;
        let category = self.read_trimmed("Enter event category (Academic, Technical, Sports): ")?;
        let detail = match Category::parse_creatable(&category)? {
            Category::Academic => EventDetail::Seminar {
                speaker: self.read_raw("Enter speaker's name: ")?,
            },
            Category::Technical => {
                let topic = self.read_raw("Enter workshop topic: ")?;
                let online = parse_online(&self.read_trimmed("Is it online? (1 for Yes, 0 for No): ")?)?;
                EventDetail::Workshop { topic, online }
            }
            Category::Sports => EventDetail::Sports {
                sport_type: self.read_raw("Enter sport type: ")?,
            },
            Category::Cultural | Category::Unknown => return Err(CampusError::InvalidCategory(category)),
        };
        Ok(EventBuilder::new(&name, &date, capacity, detail))
    }

    /// Prompts and reads one line without its line ending.
    fn read_raw(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed").into());
        }
        let len = line.trim_end_matches(|c: char| c == '\n' || c == '\r').len();
        line.truncate(len);
        Ok(line)
    }
    fn read_trimmed(&mut self, prompt: &str) -> Result<String> {
        let line = self.read_raw(prompt)?;
        Ok(String::from(trim(&line)))
    }
}

fn parse_number(input: &str) -> Result<i64> {
    input
        .parse()
        .map_err(|_| CampusError::InvalidNumber(String::from(input)))
}
fn parse_event_id(input: &str) -> Result<EventId> {
    input
        .parse()
        .map(EventId)
        .map_err(|_| CampusError::InvalidNumber(String::from(input)))
}
fn parse_capacity(input: &str) -> Result<NonZeroU32> {
    let n = parse_number(input)?;
    u32::try_from(n)
        .ok()
        .and_then(NonZeroU32::new)
        .ok_or(CampusError::InvalidCapacity(n))
}
fn parse_online(input: &str) -> Result<bool> {
    match parse_number(input)? {
        1 => Ok(true),
        0 => Ok(false),
        _ => Err(CampusError::InvalidNumber(String::from(input))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_choices() {
        assert_eq!(MenuChoice::parse("1", false).unwrap(), MenuChoice::ListEvents);
        assert_eq!(MenuChoice::parse("0", false).unwrap(), MenuChoice::Logout);
        assert_eq!(MenuChoice::parse("6", true).unwrap(), MenuChoice::AddEvent);
        assert!(matches!(
            MenuChoice::parse("6", false),
            Err(CampusError::InvalidMenuChoice(c)) if c == "6"
        ));
        assert!(MenuChoice::parse("7", true).is_err());
        assert!(MenuChoice::parse("one", true).is_err());
    }

    #[test]
    fn number_parsing() {
        assert_eq!(parse_event_id("12").unwrap(), EventId(12));
        assert!(matches!(parse_event_id("-1"), Err(CampusError::InvalidNumber(_))));
        assert_eq!(parse_capacity("30").unwrap().get(), 30);
        assert!(matches!(parse_capacity("0"), Err(CampusError::InvalidCapacity(0))));
        assert!(matches!(parse_capacity("x"), Err(CampusError::InvalidNumber(_))));
        assert!(parse_online("1").unwrap());
        assert!(!parse_online("0").unwrap());
        assert!(parse_online("2").is_err());
    }
}
