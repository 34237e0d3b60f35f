use actix_web::web;

use crate::{
    api::{attendance, dashboard, employee},
    config::Config,
    error::ApiError,
};

/// Malformed JSON bodies (including unknown status tokens) get the same 400
/// shape as field-level validation failures.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| ApiError::Validation(err.to_string()).into())
}

/// Same treatment for unparseable query parameters (e.g. a bad date bound).
fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| ApiError::Validation(err.to_string()).into())
}

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    cfg.service(
        web::scope(&config.api_prefix)
            .app_data(json_config())
            .app_data(query_config())
            .service(
                web::scope("/employees")
                    // /employees
                    .service(
                        web::resource("")
                            .route(web::post().to(employee::create_employee))
                            .route(web::get().to(employee::list_employees)),
                    )
                    // /employees/{employee_id}
                    .service(
                        web::resource("/{employee_id}")
                            .route(web::get().to(employee::get_employee))
                            .route(web::delete().to(employee::delete_employee)),
                    ),
            )
            .service(
                web::scope("/attendance")
                    // /attendance
                    .service(
                        web::resource("")
                            .route(web::post().to(attendance::mark_attendance))
                            .route(web::get().to(attendance::list_all_attendance)),
                    )
                    // /attendance/employee/{employee_id}
                    .service(
                        web::resource("/employee/{employee_id}")
                            .route(web::get().to(attendance::list_employee_attendance)),
                    )
                    // /attendance/employee/{employee_id}/summary
                    .service(
                        web::resource("/employee/{employee_id}/summary")
                            .route(web::get().to(attendance::attendance_summary)),
                    ),
            )
            .service(
                web::scope("/dashboard").service(
                    web::resource("/summary").route(web::get().to(dashboard::dashboard_summary)),
                ),
            ),
    );
}
