mod common;

use chrono::NaiveDate;

use common::{clock_at, seed_employee, test_pool};
use hrms_backend::error::ApiError;
use hrms_backend::model::attendance::AttendanceStatus;
use hrms_backend::service::attendance::{self, ClockInRequest, ClockOutRequest};
use hrms_backend::service::notification;

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

#[actix_web::test]
async fn clock_in_creates_present_record_with_time_of_day() {
    let pool = test_pool().await;
    let emp = seed_employee(&pool, "Alice", "alice@company.com").await;
    let clock = clock_at("2024-03-01 09:00:00");

    let record = attendance::clock_in(
        &pool,
        &clock,
        ClockInRequest {
            employee_id: emp,
            date: date("2024-03-01"),
            status: None,
        },
    )
    .await
    .unwrap();

    assert_eq!(record.employee_id, emp);
    assert_eq!(record.date, date("2024-03-01"));
    assert_eq!(record.status, AttendanceStatus::Present);
    assert_eq!(record.clock_in, Some("09:00:00".parse().unwrap()));
    assert_eq!(record.clock_out, None);
    assert_eq!(record.hours_worked(), None);
}

#[actix_web::test]
async fn clock_in_accepts_status_override() {
    let pool = test_pool().await;
    let emp = seed_employee(&pool, "Alice", "alice@company.com").await;
    let clock = clock_at("2024-03-01 09:00:00");

    let record = attendance::clock_in(
        &pool,
        &clock,
        ClockInRequest {
            employee_id: emp,
            date: date("2024-03-01"),
            status: Some(AttendanceStatus::OnLeave),
        },
    )
    .await
    .unwrap();

    assert_eq!(record.status, AttendanceStatus::OnLeave);
}

#[actix_web::test]
async fn second_clock_in_same_day_is_a_conflict() {
    let pool = test_pool().await;
    let emp = seed_employee(&pool, "Alice", "alice@company.com").await;
    let clock = clock_at("2024-03-01 09:00:00");

    attendance::clock_in(
        &pool,
        &clock,
        ClockInRequest {
            employee_id: emp,
            date: date("2024-03-01"),
            status: None,
        },
    )
    .await
    .unwrap();

    let err = attendance::clock_in(
        &pool,
        &clock_at("2024-03-01 09:05:00"),
        ClockInRequest {
            employee_id: emp,
            date: date("2024-03-01"),
            status: None,
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ApiError::Conflict(ref msg) if msg == "Already clocked in today"));
}

#[actix_web::test]
async fn clock_in_for_unknown_employee_is_not_found() {
    let pool = test_pool().await;
    let clock = clock_at("2024-03-01 09:00:00");

    let err = attendance::clock_in(
        &pool,
        &clock,
        ClockInRequest {
            employee_id: 999,
            date: date("2024-03-01"),
            status: None,
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ApiError::NotFound(_)));
}

#[actix_web::test]
async fn clock_out_without_clock_in_is_not_found() {
    let pool = test_pool().await;
    let emp = seed_employee(&pool, "Alice", "alice@company.com").await;

    let err = attendance::clock_out(
        &pool,
        &clock_at("2024-03-01 17:30:00"),
        ClockOutRequest {
            employee_id: emp,
            date: date("2024-03-01"),
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ApiError::NotFound(_)));
}

#[actix_web::test]
async fn clock_in_then_clock_out_yields_truncated_hours() {
    let pool = test_pool().await;
    let emp = seed_employee(&pool, "Alice", "alice@company.com").await;

    attendance::clock_in(
        &pool,
        &clock_at("2024-03-01 09:00:00"),
        ClockInRequest {
            employee_id: emp,
            date: date("2024-03-01"),
            status: None,
        },
    )
    .await
    .unwrap();

    let record = attendance::clock_out(
        &pool,
        &clock_at("2024-03-01 17:30:00"),
        ClockOutRequest {
            employee_id: emp,
            date: date("2024-03-01"),
        },
    )
    .await
    .unwrap();

    assert_eq!(record.clock_in, Some("09:00:00".parse().unwrap()));
    assert_eq!(record.clock_out, Some("17:30:00".parse().unwrap()));
    // 8.5 hours on the clock, fraction dropped
    assert_eq!(record.hours_worked(), Some(8));
    assert_eq!(record.status, AttendanceStatus::Present);
}

#[actix_web::test]
async fn second_clock_out_is_a_conflict() {
    let pool = test_pool().await;
    let emp = seed_employee(&pool, "Alice", "alice@company.com").await;

    attendance::clock_in(
        &pool,
        &clock_at("2024-03-01 09:00:00"),
        ClockInRequest {
            employee_id: emp,
            date: date("2024-03-01"),
            status: None,
        },
    )
    .await
    .unwrap();

    attendance::clock_out(
        &pool,
        &clock_at("2024-03-01 17:00:00"),
        ClockOutRequest {
            employee_id: emp,
            date: date("2024-03-01"),
        },
    )
    .await
    .unwrap();

    let err = attendance::clock_out(
        &pool,
        &clock_at("2024-03-01 18:00:00"),
        ClockOutRequest {
            employee_id: emp,
            date: date("2024-03-01"),
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ApiError::Conflict(_)));
}

#[actix_web::test]
async fn clock_in_emits_broadcast_notification_for_admins() {
    let pool = test_pool().await;
    let emp = seed_employee(&pool, "Alice", "alice@company.com").await;

    attendance::clock_in(
        &pool,
        &clock_at("2024-03-01 09:00:00"),
        ClockInRequest {
            employee_id: emp,
            date: date("2024-03-01"),
            status: None,
        },
    )
    .await
    .unwrap();

    let feed = notification::list_for(&pool, emp).await.unwrap();
    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0].employee_id, None);
    assert_eq!(feed[0].action.as_deref(), Some("clock-in"));
    assert!(feed[0].message.contains("Alice"));
    assert!(feed[0].message.contains("09:00"));
}

#[actix_web::test]
async fn listing_orders_by_date_descending() {
    let pool = test_pool().await;
    let emp = seed_employee(&pool, "Alice", "alice@company.com").await;

    for day in ["2024-03-01", "2024-03-03", "2024-03-02"] {
        attendance::clock_in(
            &pool,
            &clock_at(&format!("{day} 09:00:00")),
            ClockInRequest {
                employee_id: emp,
                date: date(day),
                status: None,
            },
        )
        .await
        .unwrap();
    }

    let records = attendance::list_for_employee(&pool, emp).await.unwrap();
    let dates: Vec<String> = records.iter().map(|r| r.date.to_string()).collect();
    assert_eq!(dates, vec!["2024-03-03", "2024-03-02", "2024-03-01"]);

    let (all, total) = attendance::list_all(&pool, 1, 10).await.unwrap();
    assert_eq!(total, 3);
    assert_eq!(all[0].date, date("2024-03-03"));
    assert_eq!(all[0].employee_name, "Alice");
}

#[actix_web::test]
async fn listing_handles_huge_page_numbers() {
    let pool = test_pool().await;
    let emp = seed_employee(&pool, "Alice", "alice@company.com").await;

    attendance::clock_in(
        &pool,
        &clock_at("2024-03-01 09:00:00"),
        ClockInRequest {
            employee_id: emp,
            date: date("2024-03-01"),
            status: None,
        },
    )
    .await
    .unwrap();

    // A page number at the u32 ceiling must yield an empty page, not an
    // overflowing offset.
    let (records, total) = attendance::list_all(&pool, u32::MAX, 100).await.unwrap();
    assert_eq!(total, 1);
    assert!(records.is_empty());
}
