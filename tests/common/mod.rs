#![allow(dead_code)]

use actix_web::dev::ServerHandle;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use chrono::{TimeZone, Utc};
use serde_json::Value;
use std::collections::HashSet;
use std::env;
use std::sync::Mutex;

use timesheet::models::{Employee, EmployeePatch, Shift, ShiftPatch};

pub const HOUR: i64 = 60 * 60 * 1000;

pub fn setup_test_env() {
    unsafe {
        env::set_var("RUST_LOG", "debug");
    }
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Epoch millis for a UTC wall-clock time in January 2023.
pub fn jan(day: u32, hour: u32) -> i64 {
    Utc.with_ymd_and_hms(2023, 1, day, hour, 0, 0)
        .unwrap()
        .timestamp_millis()
}

pub fn employee(id: &str, name: &str, hourly_rate: f64, hourly_rate_overtime: f64) -> Employee {
    Employee {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        hourly_rate,
        hourly_rate_overtime,
    }
}

pub fn shift(id: &str, employee_id: &str, clock_in: i64, clock_out: i64) -> Shift {
    Shift {
        id: id.to_string(),
        employee_id: employee_id.to_string(),
        clock_in,
        clock_out,
        total_clock_in_time: 0.0,
    }
}

/// Two employees: Ana works one 10h day, Ben one overnight shift.
pub fn sample_data() -> (Vec<Employee>, Vec<Shift>) {
    (
        vec![
            employee("1", "Ana", 10.0, 15.0),
            employee("2", "Ben", 20.0, 30.0),
        ],
        vec![
            shift("s1", "1", jan(20, 8), jan(20, 18)),
            shift("s2", "2", jan(20, 22), jan(21, 2)),
        ],
    )
}

#[derive(Default)]
pub struct BackendState {
    pub employees: Mutex<Vec<Employee>>,
    pub shifts: Mutex<Vec<Shift>>,
    pub failing: HashSet<String>,
    /// `(path, body)` of every PATCH received, in arrival order.
    pub patches: Mutex<Vec<(String, Value)>>,
    pub shift_queries: Mutex<Vec<String>>,
}

impl BackendState {
    pub fn patch_paths(&self) -> Vec<String> {
        let mut paths: Vec<String> = self
            .patches
            .lock()
            .unwrap()
            .iter()
            .map(|(path, _)| path.clone())
            .collect();
        paths.sort();
        paths
    }

    pub fn patch_body(&self, path: &str) -> Option<Value> {
        self.patches
            .lock()
            .unwrap()
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, body)| body.clone())
    }
}

async fn get_employees(state: web::Data<BackendState>) -> HttpResponse {
    HttpResponse::Ok().json(&*state.employees.lock().unwrap())
}

async fn get_shifts(state: web::Data<BackendState>, req: HttpRequest) -> HttpResponse {
    state
        .shift_queries
        .lock()
        .unwrap()
        .push(req.query_string().to_string());
    HttpResponse::Ok().json(&*state.shifts.lock().unwrap())
}

async fn patch_employee(
    state: web::Data<BackendState>,
    path: web::Path<String>,
    body: web::Json<Value>,
) -> HttpResponse {
    let id = path.into_inner();
    let body = body.into_inner();
    state
        .patches
        .lock()
        .unwrap()
        .push((format!("employees/{}", id), body.clone()));

    if state.failing.contains(&id) {
        return HttpResponse::InternalServerError().finish();
    }
    let Ok(patch) = serde_json::from_value::<EmployeePatch>(body) else {
        return HttpResponse::BadRequest().finish();
    };
    let mut employees = state.employees.lock().unwrap();
    match employees.iter_mut().find(|e| e.id == id) {
        Some(employee) => {
            employee.apply(&patch);
            HttpResponse::Ok().json(&*employee)
        }
        None => HttpResponse::NotFound().finish(),
    }
}

async fn patch_shift(
    state: web::Data<BackendState>,
    path: web::Path<String>,
    body: web::Json<Value>,
) -> HttpResponse {
    let id = path.into_inner();
    let body = body.into_inner();
    state
        .patches
        .lock()
        .unwrap()
        .push((format!("shifts/{}", id), body.clone()));

    if state.failing.contains(&id) {
        return HttpResponse::InternalServerError().finish();
    }
    let Ok(patch) = serde_json::from_value::<ShiftPatch>(body) else {
        return HttpResponse::BadRequest().finish();
    };
    let mut shifts = state.shifts.lock().unwrap();
    match shifts.iter_mut().find(|s| s.id == id) {
        Some(shift) => {
            shift.apply(&patch);
            HttpResponse::Ok().json(&*shift)
        }
        None => HttpResponse::NotFound().finish(),
    }
}

/// json-server lookalike bound to an ephemeral port.
pub struct FakeBackend {
    pub base_url: String,
    pub state: web::Data<BackendState>,
    handle: ServerHandle,
}

impl FakeBackend {
    pub async fn start(employees: Vec<Employee>, shifts: Vec<Shift>, failing: &[&str]) -> Self {
        let state = web::Data::new(BackendState {
            employees: Mutex::new(employees),
            shifts: Mutex::new(shifts),
            failing: failing.iter().map(|id| id.to_string()).collect(),
            ..Default::default()
        });

        let app_state = state.clone();
        let server = HttpServer::new(move || {
            App::new()
                .app_data(app_state.clone())
                .route("/employees", web::get().to(get_employees))
                .route("/employees/{id}", web::patch().to(patch_employee))
                .route("/shifts", web::get().to(get_shifts))
                .route("/shifts/{id}", web::patch().to(patch_shift))
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("Failed to bind fake backend");

        let addr = server.addrs()[0];
        let server = server.run();
        let handle = server.handle();
        actix_rt::spawn(server);

        FakeBackend {
            base_url: format!("http://{}", addr),
            state,
            handle,
        }
    }

    pub async fn stop(self) {
        self.handle.stop(true).await;
    }
}
