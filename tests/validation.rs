use hrms_lite::api::attendance::MarkAttendance;
use hrms_lite::api::employee::CreateEmployee;
use hrms_lite::model::attendance::AttendanceStatus;
use serde_json::json;
use validator::Validate;

fn employee(employee_id: &str, full_name: &str, email: &str, department: &str) -> CreateEmployee {
    CreateEmployee {
        employee_id: employee_id.to_string(),
        full_name: full_name.to_string(),
        email: email.to_string(),
        department: department.to_string(),
    }
}

#[test]
fn accepts_a_valid_employee() {
    let payload = employee("EMP001", "John Doe", "john@example.com", "Engineering");
    assert!(payload.validate().is_ok());
}

#[test]
fn employee_id_must_be_between_1_and_20_chars() {
    let too_long = employee(&"A".repeat(21), "John Doe", "john@example.com", "Engineering");
    let err = too_long.validate().unwrap_err();
    assert!(err.field_errors().contains_key("employee_id"));

    let empty = employee("", "John Doe", "john@example.com", "Engineering");
    assert!(empty.validate().is_err());

    let at_limit = employee(&"A".repeat(20), "John Doe", "john@example.com", "Engineering");
    assert!(at_limit.validate().is_ok());
}

#[test]
fn full_name_must_be_at_most_100_chars() {
    let payload = employee("EMP001", &"A".repeat(101), "john@example.com", "Engineering");
    let err = payload.validate().unwrap_err();
    assert!(err.field_errors().contains_key("full_name"));
}

#[test]
fn department_must_be_at_most_50_chars() {
    let payload = employee("EMP001", "John Doe", "john@example.com", &"A".repeat(51));
    let err = payload.validate().unwrap_err();
    assert!(err.field_errors().contains_key("department"));
}

#[test]
fn email_must_be_syntactically_valid() {
    let payload = employee("EMP001", "John Doe", "not-an-email", "Engineering");
    let err = payload.validate().unwrap_err();
    assert!(err.field_errors().contains_key("email"));
}

#[test]
fn status_tokens_are_exact_and_case_sensitive() {
    assert_eq!(
        serde_json::from_value::<AttendanceStatus>(json!("Present")).unwrap(),
        AttendanceStatus::Present
    );
    assert_eq!(
        serde_json::from_value::<AttendanceStatus>(json!("Absent")).unwrap(),
        AttendanceStatus::Absent
    );

    for token in ["Maybe", "present", "absent", "PRESENT", ""] {
        assert!(
            serde_json::from_value::<AttendanceStatus>(json!(token)).is_err(),
            "token {token:?} should be rejected"
        );
    }
}

#[test]
fn mark_attendance_parses_a_valid_payload() {
    let payload: MarkAttendance = serde_json::from_value(json!({
        "employee_id": "EMP001",
        "date": "2026-02-06",
        "status": "Present"
    }))
    .unwrap();

    assert_eq!(payload.employee_id, "EMP001");
    assert_eq!(payload.status, AttendanceStatus::Present);
    assert!(payload.validate().is_ok());
}

#[test]
fn mark_attendance_rejects_malformed_dates() {
    let result = serde_json::from_value::<MarkAttendance>(json!({
        "employee_id": "EMP001",
        "date": "06/02/2026",
        "status": "Present"
    }));
    assert!(result.is_err());
}

#[test]
fn mark_attendance_requires_an_employee_id() {
    let payload: MarkAttendance = serde_json::from_value(json!({
        "employee_id": "",
        "date": "2026-02-06",
        "status": "Present"
    }))
    .unwrap();

    let err = payload.validate().unwrap_err();
    assert!(err.field_errors().contains_key("employee_id"));
}
