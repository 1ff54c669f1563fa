mod common;

use chrono::NaiveDate;

use common::{clock_at, seed_employee, test_pool};
use hrms_backend::error::ApiError;
use hrms_backend::model::leave_request::LeaveStatus;
use hrms_backend::service::leave::{self, LeaveFilter, SubmitLeaveRequest};
use hrms_backend::service::notification;

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn sick_leave(employee_id: i64) -> SubmitLeaveRequest {
    SubmitLeaveRequest {
        employee_id,
        leave_type: "sick".to_string(),
        start_date: date("2024-01-10"),
        end_date: date("2024-01-12"),
        reason: "flu".to_string(),
    }
}

#[actix_web::test]
async fn submitted_leave_is_always_pending() {
    let pool = test_pool().await;
    let emp = seed_employee(&pool, "Bob", "bob@company.com").await;

    let leave = leave::submit(&pool, &clock_at("2024-01-09 10:00:00"), sick_leave(emp))
        .await
        .unwrap();

    assert_eq!(leave.status, LeaveStatus::Pending);
    assert_eq!(leave.span_days(), 3);
    assert_eq!(leave.applied_date, date("2024-01-09"));

    // Submission emits nothing; notifications appear only on status change.
    let feed = notification::list_for(&pool, emp).await.unwrap();
    assert!(feed.is_empty());
}

#[actix_web::test]
async fn end_date_before_start_date_is_rejected() {
    let pool = test_pool().await;
    let emp = seed_employee(&pool, "Bob", "bob@company.com").await;

    let err = leave::submit(
        &pool,
        &clock_at("2024-01-09 10:00:00"),
        SubmitLeaveRequest {
            end_date: date("2024-01-08"),
            ..sick_leave(emp)
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ApiError::InvalidArgument(_)));
}

#[actix_web::test]
async fn blank_fields_are_rejected() {
    let pool = test_pool().await;
    let emp = seed_employee(&pool, "Bob", "bob@company.com").await;
    let clock = clock_at("2024-01-09 10:00:00");

    let err = leave::submit(
        &pool,
        &clock,
        SubmitLeaveRequest {
            leave_type: "  ".to_string(),
            ..sick_leave(emp)
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ApiError::InvalidArgument(_)));

    let err = leave::submit(
        &pool,
        &clock,
        SubmitLeaveRequest {
            reason: String::new(),
            ..sick_leave(emp)
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ApiError::InvalidArgument(_)));
}

#[actix_web::test]
async fn submit_for_unknown_employee_is_not_found() {
    let pool = test_pool().await;

    let err = leave::submit(&pool, &clock_at("2024-01-09 10:00:00"), sick_leave(999))
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::NotFound(_)));
}

#[actix_web::test]
async fn approval_notifies_the_owner_exactly_once() {
    let pool = test_pool().await;
    let emp = seed_employee(&pool, "Bob", "bob@company.com").await;
    let clock = clock_at("2024-01-09 10:00:00");

    let leave = leave::submit(&pool, &clock, sick_leave(emp)).await.unwrap();

    let approved = leave::update_status(&pool, &clock, leave.id, LeaveStatus::Approved)
        .await
        .unwrap();
    assert_eq!(approved.status, LeaveStatus::Approved);

    let (listed, _) = leave::list(
        &pool,
        &LeaveFilter {
            employee_id: Some(emp),
            status: None,
            page: None,
            per_page: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].status, LeaveStatus::Approved);

    let feed = notification::list_for(&pool, emp).await.unwrap();
    let owned: Vec<_> = feed
        .iter()
        .filter(|n| n.employee_id == Some(emp))
        .collect();
    assert_eq!(owned.len(), 1);
    assert!(owned[0].message.contains("approved"));
    assert!(owned[0].message.contains("2024-01-10"));
    assert!(owned[0].message.contains("2024-01-12"));
}

#[actix_web::test]
async fn terminal_state_cannot_be_retransitioned() {
    let pool = test_pool().await;
    let emp = seed_employee(&pool, "Bob", "bob@company.com").await;
    let clock = clock_at("2024-01-09 10:00:00");

    let leave = leave::submit(&pool, &clock, sick_leave(emp)).await.unwrap();
    leave::update_status(&pool, &clock, leave.id, LeaveStatus::Rejected)
        .await
        .unwrap();

    let err = leave::update_status(&pool, &clock, leave.id, LeaveStatus::Approved)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Conflict(_)));

    // Status stayed rejected, and only the first transition notified.
    let current = leave::get(&pool, leave.id).await.unwrap();
    assert_eq!(current.status, LeaveStatus::Rejected);
    let feed = notification::list_for(&pool, emp).await.unwrap();
    assert_eq!(feed.len(), 1);
    assert!(feed[0].message.contains("rejected"));
}

#[actix_web::test]
async fn pending_is_not_a_valid_transition_target() {
    let pool = test_pool().await;
    let emp = seed_employee(&pool, "Bob", "bob@company.com").await;
    let clock = clock_at("2024-01-09 10:00:00");

    let leave = leave::submit(&pool, &clock, sick_leave(emp)).await.unwrap();

    let err = leave::update_status(&pool, &clock, leave.id, LeaveStatus::Pending)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::InvalidArgument(_)));
}

#[actix_web::test]
async fn updating_unknown_leave_is_not_found() {
    let pool = test_pool().await;

    let err = leave::update_status(
        &pool,
        &clock_at("2024-01-09 10:00:00"),
        42,
        LeaveStatus::Approved,
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ApiError::NotFound(_)));
}

#[actix_web::test]
async fn listing_filters_by_employee_and_status() {
    let pool = test_pool().await;
    let bob = seed_employee(&pool, "Bob", "bob@company.com").await;
    let eve = seed_employee(&pool, "Eve", "eve@company.com").await;
    let clock = clock_at("2024-01-09 10:00:00");

    let first = leave::submit(&pool, &clock, sick_leave(bob)).await.unwrap();
    leave::submit(&pool, &clock, sick_leave(eve)).await.unwrap();
    leave::update_status(&pool, &clock, first.id, LeaveStatus::Approved)
        .await
        .unwrap();

    let (all, total) = leave::list(
        &pool,
        &LeaveFilter {
            employee_id: None,
            status: None,
            page: None,
            per_page: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(total, 2);
    assert_eq!(all.len(), 2);

    let (pending, total) = leave::list(
        &pool,
        &LeaveFilter {
            employee_id: None,
            status: Some(LeaveStatus::Pending),
            page: None,
            per_page: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(total, 1);
    assert_eq!(pending[0].employee_id, eve);
}

#[actix_web::test]
async fn listing_handles_huge_page_numbers() {
    let pool = test_pool().await;
    let bob = seed_employee(&pool, "Bob", "bob@company.com").await;
    let clock = clock_at("2024-01-09 10:00:00");

    leave::submit(&pool, &clock, sick_leave(bob)).await.unwrap();

    // A page number at the u32 ceiling must yield an empty page, not an
    // overflowing offset.
    let (leaves, total) = leave::list(
        &pool,
        &LeaveFilter {
            employee_id: None,
            status: None,
            page: Some(u32::MAX),
            per_page: Some(100),
        },
    )
    .await
    .unwrap();
    assert_eq!(total, 1);
    assert!(leaves.is_empty());
}
