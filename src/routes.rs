use crate::{
    api::{attendance, employee, leave_request, report},
    config::Config,
};
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    cfg.service(
        web::scope(&config.api_prefix)
            .service(
                web::scope("/employees")
                    // /employees
                    .service(
                        web::resource("")
                            .route(web::post().to(employee::create_employee))
                            .route(web::get().to(employee::list_employees)),
                    )
                    // /employees/{id}
                    .service(web::resource("/{id}").route(web::get().to(employee::get_employee))),
            )
            .service(
                web::scope("/attendance")
                    .service(
                        web::resource("/clock-in").route(web::post().to(attendance::clock_in)),
                    )
                    .service(
                        web::resource("/clock-out").route(web::post().to(attendance::clock_out)),
                    )
                    .service(
                        web::resource("/{employee_id}/records")
                            .route(web::get().to(attendance::employee_records)),
                    )
                    .service(
                        web::resource("/{employee_id}/record")
                            .route(web::get().to(attendance::record_by_date)),
                    ),
            )
            .service(
                web::scope("/leave")
                    // /leave
                    .service(web::resource("").route(web::post().to(leave_request::create_leave)))
                    // /leave/employee/{employee_id}, registered before /{id}
                    .service(
                        web::resource("/employee/{employee_id}")
                            .route(web::get().to(leave_request::employee_leaves)),
                    )
                    // /leave/{id}
                    .service(
                        web::resource("/{id}").route(web::get().to(leave_request::get_leave)),
                    )
                    // /leave/{id}/approve
                    .service(
                        web::resource("/{id}/approve")
                            .route(web::put().to(leave_request::approve_leave)),
                    )
                    // /leave/{id}/reject
                    .service(
                        web::resource("/{id}/reject")
                            .route(web::put().to(leave_request::reject_leave)),
                    ),
            )
            .service(
                web::scope("/reports")
                    .service(
                        web::resource("/{employee_id}/monthly")
                            .route(web::get().to(report::monthly_hours)),
                    )
                    .service(
                        web::resource("/{employee_id}/range")
                            .route(web::get().to(report::range_report)),
                    ),
            ),
    );
}
