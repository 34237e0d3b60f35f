use crate::api::attendance::{AttendanceList, AttendanceQuery, AttendanceSummary, MarkAttendance};
use crate::api::dashboard::DashboardSummary;
use crate::api::employee::{CreateEmployee, EmployeeList};
use crate::model::attendance::{Attendance, AttendanceStatus};
use crate::model::employee::Employee;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HRMS Lite API",
        version = "1.0.0",
        description = r#"
## HRMS Lite

A lightweight HR management backend.

### Key Features
- **Employee Management**
  - Create, list, view, and delete employee records
- **Attendance Tracking**
  - Mark daily attendance (Present/Absent), one record per employee per day
  - Per-employee history with optional date-range filtering
  - Per-employee summary with attendance percentage
- **Dashboard**
  - Organization-wide statistics with a department breakdown

### Response Format
JSON-based RESTful responses; errors carry a `detail` message.
"#,
    ),
    paths(
        crate::api::employee::create_employee,
        crate::api::employee::list_employees,
        crate::api::employee::get_employee,
        crate::api::employee::delete_employee,

        crate::api::attendance::mark_attendance,
        crate::api::attendance::list_employee_attendance,
        crate::api::attendance::attendance_summary,
        crate::api::attendance::list_all_attendance,

        crate::api::dashboard::dashboard_summary
    ),
    components(
        schemas(
            Employee,
            CreateEmployee,
            EmployeeList,
            Attendance,
            AttendanceStatus,
            MarkAttendance,
            AttendanceQuery,
            AttendanceList,
            AttendanceSummary,
            DashboardSummary
        )
    ),
    tags(
        (name = "Employee", description = "Employee management APIs"),
        (name = "Attendance", description = "Attendance tracking APIs"),
        (name = "Dashboard", description = "Organization-wide statistics"),
    )
)]
pub struct ApiDoc;
