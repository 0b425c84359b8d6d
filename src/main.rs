use anyhow::{Context, Result};
use std::{env, fs};

use timesheet::models::{BulkUpdateRequest, ModalPayload};
use timesheet::{ApiClient, Config, Dashboard};

fn print_dashboard<Tz: chrono::TimeZone>(dashboard: &Dashboard<Tz>) {
    println!(
        "{:<12} {:<24} {:>10} {:>12} {:>12}",
        "ID", "Name", "Hours", "Regular Pay", "Overtime Pay"
    );
    for employee in dashboard.employees() {
        println!(
            "{:<12} {:<24} {:>10.2} {:>12.2} {:>12.2}",
            employee.id(),
            employee.employee.name,
            employee.total_clocked_in_time,
            employee.regular_hours_paid,
            employee.overtime_hours_paid
        );
    }

    let overall = dashboard.overall();
    println!(
        "Total: {:.2} hours over {} shifts, {:.2} regular pay, {:.2} overtime pay",
        overall.total_hours,
        dashboard.total_shifts(),
        overall.regular_hours_paid,
        overall.overtime_hours_paid
    );
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init();

    let config = Config::from_env()?;
    log::info!(
        "Starting timesheet dashboard against {} (environment: {})",
        config.api_base_url,
        config.environment
    );

    let api = ApiClient::from_config(&config);
    let mut dashboard = Dashboard::load(&api, config.utc_offset()?).await?;
    print_dashboard(&dashboard);

    // An optional JSON file with a bulk update request is submitted as-is.
    if let Some(path) = env::args().nth(1) {
        let raw = fs::read_to_string(&path).with_context(|| format!("reading {}", path))?;
        let request: BulkUpdateRequest =
            serde_json::from_str(&raw).with_context(|| format!("parsing {}", path))?;

        if let Some(message) = dashboard
            .submit(&api, ModalPayload::Action(request))
            .await?
        {
            println!("\n{}\n", message);
        }
        print_dashboard(&dashboard);
    }

    Ok(())
}
