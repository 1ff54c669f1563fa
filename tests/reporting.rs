mod common;

use chrono::NaiveDate;

use common::{clock_at, seed_employee, test_pool};
use hrms_backend::model::announcement::Announcement;
use hrms_backend::model::attendance::AttendanceStatus;
use hrms_backend::service::announcement::{self, CreateAnnouncement};
use hrms_backend::service::attendance::{self, ClockInRequest};
use hrms_backend::service::leave::{self, SubmitLeaveRequest};
use hrms_backend::service::report;

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

#[actix_web::test]
async fn dashboard_stats_counts_presence_at_call_time() {
    let pool = test_pool().await;
    let alice = seed_employee(&pool, "Alice", "alice@company.com").await;
    let bob = seed_employee(&pool, "Bob", "bob@company.com").await;
    seed_employee(&pool, "Eve", "eve@company.com").await;

    let clock = clock_at("2024-03-01 09:00:00");

    attendance::clock_in(
        &pool,
        &clock,
        ClockInRequest {
            employee_id: alice,
            date: date("2024-03-01"),
            status: None,
        },
    )
    .await
    .unwrap();

    attendance::clock_in(
        &pool,
        &clock,
        ClockInRequest {
            employee_id: bob,
            date: date("2024-03-01"),
            status: Some(AttendanceStatus::OnLeave),
        },
    )
    .await
    .unwrap();

    leave::submit(
        &pool,
        &clock,
        SubmitLeaveRequest {
            employee_id: bob,
            leave_type: "annual".to_string(),
            start_date: date("2024-03-01"),
            end_date: date("2024-03-01"),
            reason: "errand".to_string(),
        },
    )
    .await
    .unwrap();

    let stats = report::dashboard_stats(&pool, &clock).await.unwrap();
    assert_eq!(stats.total_employees, 3);
    assert_eq!(stats.total_attendance_records, 2);
    assert_eq!(stats.total_leave_requests, 1);
    assert_eq!(stats.total_announcements, 0);
    assert_eq!(stats.present_today, 1);
    // Eve never clocked in today
    assert_eq!(stats.absent_today, 1);
}

#[actix_web::test]
async fn employee_dashboard_bundles_profile_attendance_and_feeds() {
    let pool = test_pool().await;
    let alice = seed_employee(&pool, "Alice", "alice@company.com").await;
    let clock = clock_at("2024-03-01 09:00:00");

    attendance::clock_in(
        &pool,
        &clock,
        ClockInRequest {
            employee_id: alice,
            date: date("2024-03-01"),
            status: None,
        },
    )
    .await
    .unwrap();

    announcement::create(
        &pool,
        &clock,
        CreateAnnouncement {
            title: "Town hall".to_string(),
            start_date: date("2024-03-05"),
            end_date: date("2024-03-05"),
            description: "All hands at 4pm".to_string(),
        },
    )
    .await
    .unwrap();

    let dashboard = report::employee_dashboard(&pool, &clock, alice).await.unwrap();
    assert_eq!(dashboard.employee.name, "Alice");
    assert_eq!(
        dashboard.attendance_today.as_ref().map(|a| a.date),
        Some(date("2024-03-01"))
    );
    assert_eq!(dashboard.announcements.len(), 1);
    // clock-in broadcast + announcement broadcast
    assert_eq!(dashboard.notifications.len(), 2);
}

#[actix_web::test]
async fn announcements_list_newest_window_first_and_delete_cleans_up() {
    let pool = test_pool().await;
    let clock = clock_at("2024-03-01 09:00:00");

    for (title, start) in [("old", "2024-02-01"), ("new", "2024-03-10")] {
        announcement::create(
            &pool,
            &clock,
            CreateAnnouncement {
                title: title.to_string(),
                start_date: date(start),
                end_date: date(start),
                description: "details".to_string(),
            },
        )
        .await
        .unwrap();
    }

    let listed: Vec<Announcement> = announcement::list(&pool).await.unwrap();
    assert_eq!(listed[0].title, "new");
    assert_eq!(listed[1].title, "old");

    announcement::delete(&pool, listed[0].id).await.unwrap();
    assert_eq!(announcement::list(&pool).await.unwrap().len(), 1);
}
