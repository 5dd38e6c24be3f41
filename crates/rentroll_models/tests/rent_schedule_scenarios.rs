//! End-to-end schedule generation scenarios.
//!
//! Each test pins the complete record sequence (vacancy flags, exact
//! amounts, due dates) for one lease configuration, covering the vacancy
//! phase, the prorated first occupied month, directional rate changes, and
//! the empty-window case.

use rentroll_core::types::Date;
use rentroll_models::schedules::{
    LeaseTerms, MonthlyRentRecord, RentSchedule, RentScheduleGenerator,
};

fn ymd(year: i32, month: u32, day: u32) -> Date {
    Date::from_ymd(year, month, day).unwrap()
}

fn record(vacancy: bool, amount: f64, year: i32, month: u32, day: u32) -> MonthlyRentRecord {
    MonthlyRentRecord::new(vacancy, amount, ymd(year, month, day))
}

fn run(
    base: f64,
    lease_start: Date,
    window_start: Date,
    window_end: Date,
    due_day: u32,
    frequency: u32,
    rate: f64,
) -> RentSchedule {
    let terms = LeaseTerms::builder()
        .base_monthly_rent(base)
        .lease_start(lease_start)
        .rent_due_day(due_day)
        .rate_change_frequency(frequency)
        .rate_change(rate)
        .build()
        .unwrap();
    RentScheduleGenerator::new(terms).generate(window_start, window_end)
}

#[test]
fn monthly_increase_from_lease_start_on_due_day() {
    let result = run(
        100.0,
        ymd(2023, 1, 1),
        ymd(2023, 1, 1),
        ymd(2023, 3, 31),
        1,
        1,
        0.10,
    );

    let expected = RentSchedule::new(vec![
        record(false, 100.0, 2023, 1, 1),
        record(false, 110.0, 2023, 2, 1),
        record(false, 121.0, 2023, 3, 1),
    ]);

    assert_eq!(result, expected);
}

#[test]
fn rate_change_every_two_months() {
    let result = run(
        50.0,
        ymd(2023, 1, 1),
        ymd(2023, 1, 1),
        ymd(2023, 5, 18),
        15,
        2,
        0.10,
    );

    let expected = RentSchedule::new(vec![
        record(false, 23.33, 2023, 1, 1),
        record(false, 50.0, 2023, 1, 15),
        record(false, 50.0, 2023, 2, 15),
        record(false, 55.0, 2023, 3, 15),
        record(false, 55.0, 2023, 4, 15),
        record(false, 60.5, 2023, 5, 15),
    ]);

    assert_eq!(result, expected);
}

#[test]
fn rate_change_every_three_months() {
    let result = run(
        50.0,
        ymd(2023, 1, 1),
        ymd(2023, 1, 1),
        ymd(2023, 5, 18),
        15,
        3,
        0.10,
    );

    let expected = RentSchedule::new(vec![
        record(false, 23.33, 2023, 1, 1),
        record(false, 50.0, 2023, 1, 15),
        record(false, 50.0, 2023, 2, 15),
        record(false, 50.0, 2023, 3, 15),
        record(false, 55.0, 2023, 4, 15),
        record(false, 55.0, 2023, 5, 15),
    ]);

    assert_eq!(result, expected);
}

#[test]
fn rate_change_every_four_months() {
    let result = run(
        50.0,
        ymd(2023, 1, 1),
        ymd(2023, 1, 1),
        ymd(2023, 5, 18),
        15,
        4,
        0.10,
    );

    let expected = RentSchedule::new(vec![
        record(false, 23.33, 2023, 1, 1),
        record(false, 50.0, 2023, 1, 15),
        record(false, 50.0, 2023, 2, 15),
        record(false, 50.0, 2023, 3, 15),
        record(false, 50.0, 2023, 4, 15),
        record(false, 55.0, 2023, 5, 15),
    ]);

    assert_eq!(result, expected);
}

#[test]
fn rate_decreases_while_vacant() {
    let result = run(
        100.0,
        ymd(2023, 4, 11),
        ymd(2023, 1, 1),
        ymd(2023, 4, 10),
        3,
        1,
        -0.10,
    );

    let expected = RentSchedule::new(vec![
        record(true, 100.0, 2023, 1, 1),
        record(true, 90.0, 2023, 2, 1),
        record(true, 81.0, 2023, 3, 1),
        record(true, 72.9, 2023, 4, 1),
    ]);

    assert_eq!(result, expected);
}

#[test]
fn vacant_to_occupied_with_decreasing_rate() {
    let result = run(
        100.0,
        ymd(2023, 4, 10),
        ymd(2023, 1, 1),
        ymd(2023, 7, 5),
        3,
        1,
        -0.10,
    );

    // The rate decays through the vacancy, then freezes at occupancy: a
    // decrease is never applied to an occupied unit.
    let expected = RentSchedule::new(vec![
        record(true, 100.0, 2023, 1, 1),
        record(true, 90.0, 2023, 2, 1),
        record(true, 81.0, 2023, 3, 1),
        record(true, 72.9, 2023, 4, 1),
        record(false, 55.89, 2023, 4, 10),
        record(false, 72.9, 2023, 5, 3),
        record(false, 72.9, 2023, 6, 3),
        record(false, 72.9, 2023, 7, 3),
    ]);

    assert_eq!(result, expected);
}

#[test]
fn vacant_to_occupied_with_increasing_rate() {
    let result = run(
        100.0,
        ymd(2023, 4, 10),
        ymd(2023, 1, 1),
        ymd(2023, 7, 5),
        3,
        1,
        0.10,
    );

    // The rate holds flat through the vacancy (an increase is never applied
    // to a vacant unit), then compounds monthly once occupied.
    let expected = RentSchedule::new(vec![
        record(true, 100.0, 2023, 1, 1),
        record(true, 100.0, 2023, 2, 1),
        record(true, 100.0, 2023, 3, 1),
        record(true, 100.0, 2023, 4, 1),
        record(false, 76.67, 2023, 4, 10),
        record(false, 110.0, 2023, 5, 3),
        record(false, 121.0, 2023, 6, 3),
        record(false, 133.1, 2023, 7, 3),
    ]);

    assert_eq!(result, expected);
}

#[test]
fn inverted_window_yields_empty_schedule() {
    let result = run(
        50.0,
        ymd(2023, 1, 1),
        ymd(2023, 1, 1),
        ymd(2021, 5, 18),
        15,
        2,
        0.10,
    );

    assert_eq!(result, RentSchedule::new(vec![]));
}

#[test]
fn first_month_prorated_when_lease_starts_before_due_day() {
    let result = run(
        100.0,
        ymd(2023, 1, 1),
        ymd(2023, 1, 1),
        ymd(2023, 3, 31),
        15,
        1,
        0.10,
    );

    // 14 of 30 days between lease start and the first billing day.
    let expected = RentSchedule::new(vec![
        record(false, 46.67, 2023, 1, 1),
        record(false, 100.0, 2023, 1, 15),
        record(false, 110.0, 2023, 2, 15),
        record(false, 121.0, 2023, 3, 15),
    ]);

    assert_eq!(result, expected);
}

#[test]
fn window_ending_exactly_at_lease_start_bills_vacancy_only() {
    let result = run(
        100.0,
        ymd(2023, 4, 1),
        ymd(2023, 1, 1),
        ymd(2023, 4, 1),
        1,
        1,
        -0.10,
    );

    let expected = RentSchedule::new(vec![
        record(true, 100.0, 2023, 1, 1),
        record(true, 90.0, 2023, 2, 1),
        record(true, 81.0, 2023, 3, 1),
    ]);

    assert_eq!(result, expected);
}
