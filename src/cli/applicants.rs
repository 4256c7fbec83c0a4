// ABOUTME: CLI applicants and review commands - owners inspect and triage applications

use anyhow::{Context as _, Result};
use serde::Serialize;
use tracing::info;

use super::util::{format_optional_date, output_json, truncate, Context};
use super::{ApplicantsArgs, OutputFormat, ReviewArgs, StatusFilter};
use crate::api::{Application, ApplicationStatus};
use crate::wizard::catalog::DEFAULT_LOCATION;

const UPDATE_FAILED: &str = "Cập nhật thất bại";

/// One applicant as shown to the owner
#[derive(Debug, Clone, Serialize)]
pub struct ApplicantRow {
    pub application_id: i64,
    pub name: String,
    pub phone: String,
    pub hometown: String,
    pub message: String,
    pub applied: String,
    pub status: ApplicationStatus,
}

impl ApplicantRow {
    #[must_use]
    pub fn from_application(app: &Application) -> Self {
        let worker = app.worker.as_ref();
        Self {
            application_id: app.id,
            name: worker.map(|w| w.name.clone()).unwrap_or_default(),
            phone: worker.map(|w| w.phone.clone()).unwrap_or_default(),
            hometown: worker
                .and_then(|w| w.address.clone())
                .filter(|a| !a.is_empty())
                .unwrap_or_else(|| DEFAULT_LOCATION.to_string()),
            message: app.message.clone(),
            applied: format_optional_date(app.created_at.as_deref()),
            status: app.status,
        }
    }
}

/// Applicants of a job narrowed by status
#[must_use]
pub fn filter_applicants(apps: &[Application], filter: StatusFilter) -> Vec<ApplicantRow> {
    apps.iter()
        .filter(|app| filter.matches(app.status))
        .map(ApplicantRow::from_application)
        .collect()
}

/// Execute the applicants command
pub async fn execute(ctx: &Context, args: ApplicantsArgs) -> Result<()> {
    let client = ctx.authenticated_client("xem ứng viên")?;
    let apps = client
        .job_applicants(args.job_id)
        .await
        .with_context(|| format!("Failed to fetch applicants for job {}", args.job_id))?
        .into_data("Không tải được danh sách ứng viên")?;

    let rows = filter_applicants(&apps, args.status);
    match ctx.format {
        OutputFormat::Json => output_json(&rows)?,
        OutputFormat::Text => print_rows(&rows),
    }
    Ok(())
}

/// Execute the review command
pub async fn review(ctx: &Context, args: ReviewArgs) -> Result<()> {
    let client = ctx.authenticated_client("cập nhật hồ sơ")?;
    client
        .update_application_status(args.application_id, args.status)
        .await
        .context("Failed to update application status")?
        .into_ack(UPDATE_FAILED)?;

    info!("Application {} set to {}", args.application_id, args.status);
    println!("Đã cập nhật hồ sơ #{} thành '{}'", args.application_id, args.status);
    Ok(())
}

fn print_rows(rows: &[ApplicantRow]) {
    if rows.is_empty() {
        println!("Chưa có ứng viên nào.");
        return;
    }

    println!(
        "{:<6} {:<24} {:<12} {:<20} {:<11} TRẠNG THÁI",
        "ID", "HỌ TÊN", "SĐT", "QUÊ QUÁN", "NGÀY NỘP"
    );
    println!("{}", "-".repeat(90));
    for row in rows {
        println!(
            "{:<6} {:<24} {:<12} {:<20} {:<11} {}",
            row.application_id,
            truncate(&row.name, 24),
            row.phone,
            truncate(&row.hometown, 20),
            row.applied,
            row.status
        );
        for line in row.message.lines() {
            println!("       {line}");
        }
    }
}
