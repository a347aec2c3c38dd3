//! Caller-provided seed data.
//!
//! A fresh store starts empty; hosts that want initial events pass a
//! [`SeedSource`] to `EventService::load_seed`.

use crate::model::event::EventDraft;

/// Supplies drafts to pre-populate a store.
pub trait SeedSource {
    fn drafts(&self) -> Vec<EventDraft>;
}

impl SeedSource for Vec<EventDraft> {
    fn drafts(&self) -> Vec<EventDraft> {
        self.clone()
    }
}

impl SeedSource for [EventDraft] {
    fn drafts(&self) -> Vec<EventDraft> {
        self.to_vec()
    }
}

/// Eight sample events in August 2025, used by demos and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleSeed;

impl SeedSource for SampleSeed {
    fn drafts(&self) -> Vec<EventDraft> {
        vec![
            sample("Team Standup", "2025-08-05", "09:00", 30, "meeting")
                .with_location("Conference Room A")
                .with_description("Daily team sync and progress updates"),
            sample("Lunch with Steven", "2025-08-05", "12:30", 60, "personal")
                .with_location("Downtown Bistro")
                .with_description("Business lunch discussion"),
            sample("Project Review", "2025-08-07", "14:00", 90, "review")
                .with_location("Online - Zoom")
                .with_description("Q3 project milestone review"),
            sample("Client Presentation", "2025-08-08", "10:00", 120, "presentation")
                .with_location("Client Office")
                .with_description("Product demo for stakeholders"),
            sample("Code Review Session", "2025-08-08", "15:30", 60, "review")
                .with_location("Development Lab")
                .with_description("Weekly code quality review"),
            sample("Sprint Planning", "2025-08-12", "09:30", 120, "planning")
                .with_location("Conference Room B")
                .with_description("Plan next sprint objectives"),
            sample("Design Workshop", "2025-08-15", "11:00", 180, "workshop")
                .with_location("Creative Lab")
                .with_description("UX/UI design brainstorming session"),
            sample("All Hands Meeting", "2025-08-20", "16:00", 60, "meeting")
                .with_location("Main Auditorium")
                .with_description("Company-wide quarterly update"),
        ]
    }
}

fn sample(title: &str, date: &str, time: &str, minutes: i64, kind: &str) -> EventDraft {
    EventDraft::new(title, date, time)
        .with_duration(minutes)
        .with_type(kind)
}
