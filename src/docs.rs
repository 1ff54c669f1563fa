use crate::api::attendance::{AttendanceListResponse, AttendanceQuery, AttendanceResponse};
use crate::api::leave::{LeaveListResponse, LeaveResponse};
use crate::model::announcement::Announcement;
use crate::model::attendance::{Attendance, AttendanceStatus, AttendanceWithEmployee};
use crate::model::employee::Employee;
use crate::model::leave_request::{LeaveRequest, LeaveStatus};
use crate::model::notification::Notification;
use crate::service::announcement::CreateAnnouncement;
use crate::service::attendance::{ClockInRequest, ClockOutRequest};
use crate::service::employee::{CreateEmployee, UpdateEmployee};
use crate::service::leave::{LeaveFilter, SubmitLeaveRequest};
use crate::service::report::{DashboardStats, EmployeeDashboard};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HRMS Backend API",
        version = "1.0.0",
        description = r#"
## Human Resource Management System Backend

REST backend for core HR operations.

### Key Features
- **Attendance** — daily clock-in / clock-out with derived hours worked
- **Leave** — submission plus single-transition approval/rejection workflow
- **Notifications** — per-employee and broadcast event feed
- **Announcements** — company-wide broadcasts with a validity window
- **Dashboards** — admin counters and employee self-service view

### Response Format
JSON throughout. Errors carry a machine-readable `error` reason
(`invalid_argument`, `not_found`, `conflict`, `unavailable`) alongside a
human-readable `message`.

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::attendance::clock_in,
        crate::api::attendance::clock_out,
        crate::api::attendance::list_attendance,

        crate::api::leave::create_leave,
        crate::api::leave::approve_leave,
        crate::api::leave::reject_leave,
        crate::api::leave::get_leave,
        crate::api::leave::leave_list,

        crate::api::notification::list_notifications,
        crate::api::notification::mark_read,

        crate::api::announcement::create_announcement,
        crate::api::announcement::list_announcements,
        crate::api::announcement::delete_announcement,

        crate::api::employee::create_employee,
        crate::api::employee::list_employees,
        crate::api::employee::get_employee,
        crate::api::employee::update_employee,
        crate::api::employee::delete_employee,

        crate::api::dashboard::dashboard_stats,
        crate::api::dashboard::employee_dashboard,
    ),
    components(
        schemas(
            Attendance,
            AttendanceStatus,
            AttendanceWithEmployee,
            AttendanceQuery,
            AttendanceResponse,
            AttendanceListResponse,
            ClockInRequest,
            ClockOutRequest,
            LeaveRequest,
            LeaveStatus,
            LeaveFilter,
            SubmitLeaveRequest,
            LeaveResponse,
            LeaveListResponse,
            Notification,
            Announcement,
            CreateAnnouncement,
            Employee,
            CreateEmployee,
            UpdateEmployee,
            DashboardStats,
            EmployeeDashboard
        )
    ),
    tags(
        (name = "Attendance", description = "Attendance lifecycle APIs"),
        (name = "Leave", description = "Leave workflow APIs"),
        (name = "Notifications", description = "Notification feed APIs"),
        (name = "Announcements", description = "Company announcement APIs"),
        (name = "Employee", description = "Employee directory APIs"),
        (name = "Dashboard", description = "Reporting and dashboard APIs"),
    )
)]
pub struct ApiDoc;
