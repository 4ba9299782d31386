mod helpers;

use std::sync::Arc;

use ansdesk::domain::errors::ProjectionError;
use helpers::*;

// Reference week: 2024-05-06 is a Monday, 2024-05-10 the Friday after.

#[tokio::test]
async fn test_ten_hours_from_monday_opening() {
    let service = sla_service(mon_fri_8_to_17(), Arc::new(FixedHolidays::none()));

    // 9h consumed Monday, 1h consumed Tuesday from 08:00.
    let completion = service
        .project_completion(dt("2024-05-06T08:00:00"), 10.0)
        .await
        .unwrap();

    assert_eq!(completion, dt("2024-05-07T09:00:00"));
}

#[tokio::test]
async fn test_exact_day_budget_ends_at_closing() {
    let service = sla_service(mon_fri_8_to_17(), Arc::new(FixedHolidays::none()));

    let completion = service
        .project_completion(dt("2024-05-06T08:00:00"), 9.0)
        .await
        .unwrap();

    // No rollover: the budget runs out exactly at closing time.
    assert_eq!(completion, dt("2024-05-06T17:00:00"));
}

#[tokio::test]
async fn test_friday_afternoon_rolls_over_the_weekend() {
    let service = sla_service(mon_fri_8_to_17(), Arc::new(FixedHolidays::none()));

    // Friday has 1h left (16:00-17:00); the second hour lands on Monday.
    let completion = service
        .project_completion(dt("2024-05-10T16:00:00"), 2.0)
        .await
        .unwrap();

    assert_eq!(completion, dt("2024-05-13T09:00:00"));
}

#[tokio::test]
async fn test_start_before_opening_clamps_to_opening() {
    let service = sla_service(mon_fri_8_to_17(), Arc::new(FixedHolidays::none()));

    let completion = service
        .project_completion(dt("2024-05-06T06:30:00"), 1.0)
        .await
        .unwrap();

    assert_eq!(completion, dt("2024-05-06T09:00:00"));
}

#[tokio::test]
async fn test_start_at_closing_moves_to_next_opening() {
    let service = sla_service(mon_fri_8_to_17(), Arc::new(FixedHolidays::none()));

    let completion = service
        .project_completion(dt("2024-05-06T17:00:00"), 1.0)
        .await
        .unwrap();

    assert_eq!(completion, dt("2024-05-07T09:00:00"));
}

#[tokio::test]
async fn test_start_after_closing_moves_to_next_opening() {
    let service = sla_service(mon_fri_8_to_17(), Arc::new(FixedHolidays::none()));

    let completion = service
        .project_completion(dt("2024-05-06T21:15:00"), 1.0)
        .await
        .unwrap();

    assert_eq!(completion, dt("2024-05-07T09:00:00"));
}

#[tokio::test]
async fn test_start_on_weekend_begins_monday() {
    let service = sla_service(mon_fri_8_to_17(), Arc::new(FixedHolidays::none()));

    let completion = service
        .project_completion(dt("2024-05-11T10:00:00"), 1.0)
        .await
        .unwrap();

    assert_eq!(completion, dt("2024-05-13T09:00:00"));
}

#[tokio::test]
async fn test_holiday_working_day_is_skipped() {
    // Tuesday 2024-05-07 is a configured weekday and a holiday.
    let service = sla_service(
        mon_fri_8_to_17(),
        Arc::new(FixedHolidays::with_dates(vec![d("2024-05-07")])),
    );

    // 1h left Monday, Tuesday excluded, 1h Wednesday from 08:00.
    let completion = service
        .project_completion(dt("2024-05-06T16:00:00"), 2.0)
        .await
        .unwrap();

    assert_eq!(completion, dt("2024-05-08T09:00:00"));
}

#[tokio::test]
async fn test_fractional_hours() {
    let service = sla_service(mon_fri_8_to_17(), Arc::new(FixedHolidays::none()));

    let completion = service
        .project_completion(dt("2024-05-06T08:00:00"), 0.5)
        .await
        .unwrap();

    assert_eq!(completion, dt("2024-05-06T08:30:00"));
}

#[tokio::test]
async fn test_multi_day_span_consumes_whole_windows() {
    let service = sla_service(mon_fri_8_to_17(), Arc::new(FixedHolidays::none()));

    // Three full nine-hour days: Monday, Tuesday, Wednesday.
    let completion = service
        .project_completion(dt("2024-05-06T08:00:00"), 27.0)
        .await
        .unwrap();

    assert_eq!(completion, dt("2024-05-08T17:00:00"));
}

#[tokio::test]
async fn test_non_positive_hours_rejected_before_calendar_access() {
    let holidays = Arc::new(FixedHolidays::none());
    let service = sla_service(mon_fri_8_to_17(), holidays.clone());

    for hours in [0.0, -3.5] {
        let result = service
            .project_completion(dt("2024-05-06T08:00:00"), hours)
            .await;
        assert!(matches!(result, Err(ProjectionError::InvalidRequest(_))));
    }

    assert_eq!(holidays.fetch_count(), 0);
}

#[tokio::test]
async fn test_year_boundary_fetches_each_year_once() {
    // 2024-12-31 is a Tuesday; New Year's Day 2025 is a holiday Wednesday.
    let holidays = Arc::new(FixedHolidays::with_dates(vec![d("2025-01-01")]));
    let service = sla_service(mon_fri_8_to_17(), holidays.clone());

    let completion = service
        .project_completion(dt("2024-12-31T16:00:00"), 2.0)
        .await
        .unwrap();

    assert_eq!(completion, dt("2025-01-02T09:00:00"));
    assert_eq!(holidays.fetch_count(), 2);
}

#[tokio::test]
async fn test_holiday_source_failure_aborts() {
    let service = sla_service(mon_fri_8_to_17(), Arc::new(UnreachableHolidays));

    let result = service
        .project_completion(dt("2024-05-06T08:00:00"), 1.0)
        .await;

    assert!(matches!(result, Err(ProjectionError::HolidaySource(_))));
}

#[tokio::test]
async fn test_empty_schedule_fails_instead_of_looping() {
    let service = sla_service(vec![], Arc::new(FixedHolidays::none()));

    let result = service
        .project_completion(dt("2024-05-06T08:00:00"), 1.0)
        .await;

    assert!(matches!(
        result,
        Err(ProjectionError::NoWorkingDaysConfigured)
    ));
}

#[tokio::test]
async fn test_projection_is_idempotent() {
    let service = sla_service(mon_fri_8_to_17(), Arc::new(FixedHolidays::none()));

    let first = service
        .project_completion(dt("2024-05-06T11:20:00"), 17.25)
        .await
        .unwrap();
    let second = service
        .project_completion(dt("2024-05-06T11:20:00"), 17.25)
        .await
        .unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_consumed_hours_round_trip() {
    let service = sla_service(mon_fri_8_to_17(), Arc::new(FixedHolidays::none()));

    let start = dt("2024-05-06T08:00:00");
    let completion = service.project_completion(start, 10.0).await.unwrap();

    // The working hours between start and completion equal the budget.
    let consumed = service
        .business_hours_between(start, completion)
        .await
        .unwrap();
    assert_eq!(consumed, 10.0);
}
