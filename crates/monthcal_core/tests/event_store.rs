use chrono::NaiveDate;
use monthcal_core::{
    CalendarError, EventDraft, EventRepository, EventService, EventType, EventValidationError,
    InMemoryEventRepository, SampleSeed,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn service() -> EventService<InMemoryEventRepository> {
    EventService::new(InMemoryEventRepository::new())
}

#[test]
fn add_event_stores_validated_event() {
    let mut service = service();
    let draft = EventDraft::new("Team Standup", "2025-08-05", "09:00")
        .with_duration(30)
        .with_type("meeting")
        .with_location("Conference Room A");

    let event = service.add_event(&draft).unwrap();

    assert_eq!(event.title(), "Team Standup");
    assert_eq!(event.duration_minutes(), 30);
    assert_eq!(event.location(), Some("Conference Room A"));
    assert_eq!(service.event_count().unwrap(), 1);
    assert_eq!(service.get_event(event.id()).unwrap(), Some(event));
}

#[test]
fn empty_title_is_rejected_and_store_is_unchanged() {
    let mut service = service();
    service
        .add_event(&EventDraft::new("Existing", "2025-08-05", "08:00"))
        .unwrap();

    let err = service
        .add_event(&EventDraft::new("", "2025-08-05", "09:00"))
        .unwrap_err();

    assert!(matches!(
        err,
        CalendarError::Validation(EventValidationError::MissingTitle)
    ));
    assert_eq!(service.event_count().unwrap(), 1);
}

#[test]
fn malformed_date_and_time_are_rejected() {
    let mut service = service();

    let err = service
        .add_event(&EventDraft::new("x", "2025-02-30", "09:00"))
        .unwrap_err();
    assert!(matches!(
        err,
        CalendarError::Validation(EventValidationError::InvalidDate(_))
    ));

    let err = service
        .add_event(&EventDraft::new("x", "2025-08-05", "25:00"))
        .unwrap_err();
    assert!(matches!(
        err,
        CalendarError::Validation(EventValidationError::InvalidTime(_))
    ));

    let err = service
        .add_event(&EventDraft::new("x", "2025-08-05", "09:00").with_duration(-15))
        .unwrap_err();
    assert!(matches!(
        err,
        CalendarError::Validation(EventValidationError::InvalidDuration(-15))
    ));

    assert_eq!(service.event_count().unwrap(), 0);
}

#[test]
fn events_on_date_are_sorted_by_time_with_ties_in_insertion_order() {
    let mut service = service();
    let late = service
        .add_event(&EventDraft::new("Late", "2025-08-05", "15:00"))
        .unwrap();
    let tie_a = service
        .add_event(&EventDraft::new("Tie A", "2025-08-05", "09:00"))
        .unwrap();
    service
        .add_event(&EventDraft::new("Other day", "2025-08-06", "08:00"))
        .unwrap();
    let tie_b = service
        .add_event(&EventDraft::new("Tie B", "2025-08-05", "09:00"))
        .unwrap();

    let ids = service
        .events_on_date(date(2025, 8, 5))
        .unwrap()
        .iter()
        .map(|event| event.id())
        .collect::<Vec<_>>();

    assert_eq!(ids, vec![tie_a.id(), tie_b.id(), late.id()]);
}

#[test]
fn date_without_events_returns_empty_list() {
    let service = service();
    assert!(service.events_on_date(date(2025, 8, 5)).unwrap().is_empty());
}

#[test]
fn sample_seed_loads_eight_august_events() {
    let mut service = service();
    let events = service.load_seed(&SampleSeed).unwrap();

    assert_eq!(events.len(), 8);
    assert_eq!(service.event_count().unwrap(), 8);

    let fifth = service.events_on_date(date(2025, 8, 5)).unwrap();
    let titles = fifth.iter().map(|event| event.title()).collect::<Vec<_>>();
    assert_eq!(titles, vec!["Team Standup", "Lunch with Steven"]);
    assert_eq!(fifth[1].kind(), &EventType::Personal);
}

#[test]
fn seed_with_invalid_draft_inserts_nothing() {
    let mut service = service();
    let drafts = vec![
        EventDraft::new("ok", "2025-08-05", "09:00"),
        EventDraft::new("bad", "2025-08-05", "nine"),
    ];

    assert!(service.load_seed(&drafts).is_err());
    assert_eq!(service.event_count().unwrap(), 0);
}

#[test]
fn list_events_keeps_insertion_order() {
    let mut service = service();
    service
        .add_event(&EventDraft::new("second day", "2025-08-06", "09:00"))
        .unwrap();
    service
        .add_event(&EventDraft::new("first day", "2025-08-05", "09:00"))
        .unwrap();

    let titles = service
        .repo()
        .list_events()
        .unwrap()
        .into_iter()
        .map(|event| event.title().to_string())
        .collect::<Vec<_>>();
    assert_eq!(titles, vec!["second day", "first day"]);
}

#[test]
fn event_serializes_with_draft_field_names() {
    let mut service = service();
    let event = service
        .add_event(
            &EventDraft::new("Demo", "2025-08-08", "10:00")
                .with_duration(120)
                .with_type("demo"),
        )
        .unwrap();

    let value = serde_json::to_value(&event).unwrap();
    assert_eq!(value["title"], "Demo");
    assert_eq!(value["date"], "2025-08-08");
    assert_eq!(value["time"], "10:00");
    assert_eq!(value["duration"], 120);
    assert_eq!(value["type"], "demo");
    assert!(value["location"].is_null());
}

#[test]
fn draft_deserializes_from_form_payload() {
    let draft: EventDraft = serde_json::from_str(
        r#"{"title":"Review","date":"2025-08-07","time":"14:00","type":"review"}"#,
    )
    .unwrap();

    assert_eq!(draft.duration, None);
    let mut service = service();
    let event = service.add_event(&draft).unwrap();
    assert_eq!(event.kind(), &EventType::Review);
    assert_eq!(event.duration_minutes(), 60);
}

#[test]
fn duration_upper_edge_is_accepted_and_day_views_stay_usable() {
    let mut service = service();
    service
        .add_event(&EventDraft::new("Morning", "2025-08-05", "09:00"))
        .unwrap();
    let huge = service
        .add_event(
            &EventDraft::new("Marathon", "2025-08-05", "23:59").with_duration(i64::from(u32::MAX)),
        )
        .unwrap();
    assert_eq!(huge.duration_minutes(), u32::MAX);

    let summary = service.day_summary(date(2025, 8, 5)).unwrap();
    assert_eq!(summary.events.len(), 2);
    assert!(!summary.has_conflicts());
    assert_eq!(service.month_view(2025, 7).unwrap().days.len(), 42);

    let err = service
        .add_event(
            &EventDraft::new("Too long", "2025-08-05", "10:00")
                .with_duration(i64::from(u32::MAX) + 1),
        )
        .unwrap_err();
    assert!(matches!(
        err,
        CalendarError::Validation(EventValidationError::InvalidDuration(_))
    ));
    assert_eq!(service.event_count().unwrap(), 2);
}
