use std::io::Cursor;

use campus::{
    console::Console,
    models::{EventId, EventManager, Seed},
};

fn seeded() -> EventManager {
    let mut manager = EventManager::new();
    Seed::default().apply(&mut manager);
    manager
}

fn run(manager: &mut EventManager, script: &str) -> String {
    let mut out = Vec::new();
    Console::new(manager, Cursor::new(script.as_bytes()), &mut out)
        .run()
        .unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn bad_login_reprompts() {
    let mut manager = seeded();
    let out = run(&mut manager, "sit\nwrong\nnobody\nx\n  sit  \npune1234\n0\n");
    assert_eq!(out.matches("Invalid credentials. Please try again.").count(), 2);
    assert!(out.contains("Campus Event Management System"));
    assert!(out.contains("6. Add New Event"));
    assert!(out.contains("Logged out successfully."));
    assert!(out.ends_with("Enter username: "));
}

#[test]
fn regular_user_has_no_admin_entry() {
    let mut manager = seeded();
    let out = run(&mut manager, "lavale\nhillbase\n6\n9\nabc\n");
    assert!(!out.contains("6. Add New Event"));
    assert_eq!(out.matches("Invalid choice '6'. Please try again.").count(), 1);
    assert!(out.contains("Invalid choice '9'. Please try again."));
    assert!(out.contains("Invalid choice 'abc'. Please try again."));
    assert_eq!(manager.list_all_events().len(), 3);
}

#[test]
fn list_register_rate_and_profile() {
    let mut manager = seeded();
    let script = "209\npass123\n\
                  1\n\
                  2\n2\n\
                  2\n99\n\
                  4\n2\n9\n\
                  4\n2\n4\n\
                  4\n42\n3\n\
                  5\n";
    let out = run(&mut manager, script);

    assert_eq!(out.matches("------------------------").count(), 3);
    assert!(out.contains("Event: Prota"));
    assert!(out.contains("Participant registered successfully."));
    assert!(out.contains("Invalid event ID: 99."));
    assert!(out.contains("Invalid rating 9. Please enter a number between 1 and 5."));
    assert_eq!(out.matches("Thank you for rating the event!").count(), 1);
    assert!(out.contains("Invalid event ID: 42."));
    assert!(out.contains("User Profile for 209"));
    assert!(out.contains("- Web Development (ID: 2)"));
    assert!(out.contains("- Web Development: 4/5"));

    let workshop = manager.event(EventId(2)).unwrap();
    assert_eq!(workshop.registered_users(), ["209"]);
    assert_eq!(workshop.average_rating(), Some(4.0));
}

#[test]
fn search_reports_matches_or_nothing() {
    let mut manager = seeded();
    let out = run(&mut manager, "lavale\nhillbase\n3\nWeb\n3\nzzz\n");
    assert!(out.contains("Search results for 'Web':"));
    assert!(out.contains("Topic: Full-stack JavaScript\nFormat: Online"));
    assert!(out.contains("Search results for 'zzz':\nNo events found matching the query."));
}

#[test]
fn admin_adds_events() {
    let mut manager = seeded();
    let script = "sit\npune1234\n\
                  6\nRust Meetup\n2024-12-01\n2\nTechnical\nOwnership\n0\n\
                  6\nChess Open\n2024-12-05\n16\nSports\nChess\n\
                  6\nPoetry Night\n2024-12-09\n30\nCultural\n\
                  6\nNobody\n2024-12-10\n0\n";
    let out = run(&mut manager, script);

    assert_eq!(out.matches("Event added successfully.").count(), 2);
    assert!(out.contains("Invalid category 'Cultural'. Event not added."));
    assert!(out.contains("Invalid capacity 0. Capacity must be at least 1. Event not added."));

    let names: Vec<_> = manager.list_all_events().iter().map(|e| (e.id.0, e.name.as_str())).collect();
    assert_eq!(names[3..], [(4, "Rust Meetup"), (5, "Chess Open")]);
    let meetup = manager.event(EventId(4)).unwrap();
    assert!(meetup.to_string().ends_with("Topic: Ownership\nFormat: Offline"));
}

#[test]
fn waitlist_after_logout_and_relogin() {
    let mut manager = EventManager::new();
    Seed::from_ron(
        r#"(
            users: [(username: "a", password: "1"), (username: "b", password: "2")],
            events: [(name: "Tiny", date: "soon", capacity: 1, detail: Seminar(speaker: "S"))],
        )"#,
    )
    .unwrap()
    .apply(&mut manager);

    let out = run(&mut manager, "a\n1\n2\n1\n0\nb\n2\n2\n1\n5\n");
    assert!(out.contains("Participant registered successfully."));
    assert!(out.contains("Event is full. You've been added to the waitlist."));
    assert!(out.contains("User Profile for b\nRegistered Events:\nEvent Ratings:"));

    let ev = manager.event(EventId(1)).unwrap();
    assert_eq!(ev.registered_users(), ["a"]);
    assert_eq!(ev.waitlist(), ["b"]);
}
