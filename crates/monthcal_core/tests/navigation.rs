use chrono::NaiveDate;
use monthcal_core::{CalendarNavigator, FixedClock, NavigationError};

fn on(year: i32, month: u32, day: u32) -> CalendarNavigator<FixedClock> {
    CalendarNavigator::new(FixedClock(
        NaiveDate::from_ymd_opt(year, month, day).unwrap(),
    ))
}

#[test]
fn starts_on_clock_month_without_selection() {
    let nav = on(2025, 8, 14);

    assert_eq!(nav.month().year(), 2025);
    assert_eq!(nav.month().month0(), 7);
    assert_eq!(nav.selected_day(), None);
}

#[test]
fn next_from_december_rolls_into_january_and_clears_selection() {
    let mut nav = on(2025, 12, 10);
    nav.select_day(10).unwrap();

    let month = nav.navigate(1).unwrap();

    assert_eq!((month.year(), month.month0()), (2026, 0));
    assert_eq!(nav.month(), month);
    assert_eq!(nav.selected_day(), None);
}

#[test]
fn previous_from_january_rolls_into_december() {
    let mut nav = on(2025, 1, 3);

    let month = nav.navigate(-1).unwrap();

    assert_eq!((month.year(), month.month0()), (2024, 11));
}

#[test]
fn navigate_accepts_multi_month_deltas() {
    let mut nav = on(2025, 8, 1);

    assert_eq!(nav.navigate(17).unwrap().month0(), 0);
    assert_eq!(nav.month().year(), 2027);
    assert_eq!(nav.navigate(-30).unwrap().year(), 2024);
    assert_eq!(nav.month().month0(), 6);
}

#[test]
fn go_to_today_shows_and_selects_today() {
    let mut nav = on(2025, 8, 14);
    nav.navigate(-5).unwrap();

    let today = nav.go_to_today();

    assert_eq!(today, NaiveDate::from_ymd_opt(2025, 8, 14).unwrap());
    assert_eq!(nav.month().month0(), 7);
    assert_eq!(nav.selected_day(), Some(14));
    assert_eq!(nav.selected_date(), Some(today));
}

#[test]
fn select_day_validates_against_displayed_month() {
    let mut nav = on(2024, 2, 1);

    assert!(nav.select_day(29).is_ok());
    assert!(matches!(
        nav.select_day(30),
        Err(NavigationError::InvalidSelection { day: 30, .. })
    ));
    assert!(matches!(
        nav.select_day(0),
        Err(NavigationError::InvalidSelection { day: 0, .. })
    ));
    assert_eq!(nav.selected_day(), Some(29));

    nav.clear_selection();
    assert_eq!(nav.selected_day(), None);
}

#[test]
fn select_cell_rejects_padding_cells() {
    let mut nav = on(2025, 8, 1);
    let grid = nav.grid().unwrap();
    let padding = grid.cells()[0];
    let first = grid.cells()[4];

    assert!(nav.select_cell(&padding).is_err());
    assert_eq!(nav.selected_day(), None);

    nav.select_cell(&first).unwrap();
    assert_eq!(nav.selected_day(), Some(1));
    assert!(nav.is_selected(&first));
    assert!(!nav.is_selected(&padding));
}

#[test]
fn is_today_marks_only_the_clock_date() {
    let nav = on(2025, 8, 14);
    let grid = nav.grid().unwrap();

    let today_cells = grid
        .cells()
        .iter()
        .filter(|cell| nav.is_today(cell))
        .collect::<Vec<_>>();

    assert_eq!(today_cells.len(), 1);
    assert_eq!(today_cells[0].day(), 14);
}
