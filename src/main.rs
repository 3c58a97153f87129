use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_appender::rolling;

use hrm_client::api::{ApiClient, AttendanceApi, EmployeeApi};
use hrm_client::config::Config;
use hrm_client::form::{EmployeeForm, FormField, SubmitOutcome};
use hrm_client::model::{AttendanceRecord, AttendanceStatus, EmployeeId};
use hrm_client::seed::{self, SeedPlan};
use hrm_client::utils::notify::ConsoleNotifier;

/// Manage employee records and daily attendance.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Backend base URL, overrides API_URL
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Employee records
    #[command(subcommand)]
    Employees(EmployeeCommand),

    /// Daily attendance
    #[command(subcommand)]
    Attendance(AttendanceCommand),

    /// Check that the backend can reach its store
    Health,

    /// Create employees and attendance from a JSON file
    Seed { file: PathBuf },
}

#[derive(Subcommand, Debug)]
enum EmployeeCommand {
    List,

    /// Add an employee through the validated form
    Add {
        /// Employee code, e.g. EMP-001
        #[arg(long, default_value = "")]
        code: String,
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        department: String,
    },

    Delete { id: String },

    /// Remove every employee and attendance record
    Clear,
}

#[derive(Subcommand, Debug)]
enum AttendanceCommand {
    Mark {
        employee_id: String,
        /// present or absent
        #[arg(long)]
        status: AttendanceStatus,
        /// YYYY-MM-DD, defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    List { employee_id: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    // Rolling daily log
    let file_appender = rolling::daily(&config.log_dir, "hrm-client.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(config.log_level)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    let base_url = cli.api_url.as_deref().unwrap_or(config.base_url());
    info!(%base_url, "hrm-client starting");

    let api = ApiClient::new(base_url).context("building HTTP client")?;

    match cli.command {
        Command::Employees(cmd) => employees(&api, cmd).await,
        Command::Attendance(cmd) => attendance(&api, cmd).await,
        Command::Health => health(&api).await,
        Command::Seed { file } => {
            let plan = SeedPlan::from_file(&file)?;
            let report = seed::run(&api, &plan).await;
            println!(
                "Seeded {} employees, {} attendance records ({} failures)",
                report.employees_created, report.attendance_marked, report.failures
            );
            Ok(())
        }
    }
}

async fn employees(api: &ApiClient, cmd: EmployeeCommand) -> Result<()> {
    match cmd {
        EmployeeCommand::List => {
            let employees = api.get_employees().await?;
            if employees.is_empty() {
                println!("No employees");
            }
            for e in employees {
                println!(
                    "{}\t{}\t{}\t{}\t{}",
                    e.employee_id.map(|id| id.to_string()).unwrap_or_default(),
                    e.employee_code.unwrap_or_default(),
                    e.full_name,
                    e.email,
                    e.department
                );
            }
        }
        EmployeeCommand::Add {
            code,
            name,
            email,
            department,
        } => {
            let mut form = EmployeeForm::new(ConsoleNotifier, || info!("Employee list is stale"));
            form.update(FormField::EmployeeId, code);
            form.update(FormField::FullName, name);
            form.update(FormField::Email, email);
            form.update(FormField::Department, department);

            match form.submit(api).await {
                SubmitOutcome::Added(employee) => {
                    if let Some(id) = employee.and_then(|row| row.employee_id) {
                        println!("{id}");
                    }
                }
                SubmitOutcome::Blocked => {
                    for (field, error) in form.errors().iter() {
                        eprintln!("  {}: {}", field.label(), error);
                    }
                    bail!("employee not added: invalid input");
                }
                SubmitOutcome::Busy | SubmitOutcome::Failed(_) => {
                    bail!("employee not added");
                }
            }
        }
        EmployeeCommand::Delete { id } => {
            let confirmation = api.delete_employee(&EmployeeId::from(id)).await?;
            println!("deleted: {}", confirmation.deleted);
        }
        EmployeeCommand::Clear => {
            let confirmation = api.clear_employees().await?;
            println!("cleared: {}", confirmation.cleared);
        }
    }
    Ok(())
}

async fn attendance(api: &ApiClient, cmd: AttendanceCommand) -> Result<()> {
    match cmd {
        AttendanceCommand::Mark {
            employee_id,
            status,
            date,
        } => {
            let record = AttendanceRecord {
                employee_id: EmployeeId::from(employee_id),
                date: date.unwrap_or_else(|| Local::now().date_naive()),
                status,
            };
            let created = api.mark_attendance(&record).await?;
            println!("{}\t{}\t{}", created.employee_id, created.date, created.status);
        }
        AttendanceCommand::List { employee_id } => {
            let records = api.get_attendance(&EmployeeId::from(employee_id)).await?;
            if records.is_empty() {
                println!("No attendance records");
            }
            for r in records {
                println!("{}\t{}", r.date, r.status);
            }
        }
    }
    Ok(())
}

async fn health(api: &ApiClient) -> Result<()> {
    let status = api.health().await?;
    println!("ok: {} (status {})", status.ok, status.status_code);
    if !status.ok {
        bail!("backend store unreachable: {}", status.body);
    }
    Ok(())
}
