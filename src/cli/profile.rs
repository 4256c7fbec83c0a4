// ABOUTME: CLI profile command - the logged-in user plus their jobs or applications

use anyhow::{anyhow, Context as _, Result};
use serde::Serialize;
use tracing::warn;

use super::jobs::posted_label;
use super::util::{format_optional_date, output_json, Context};
use super::OutputFormat;
use crate::api::{ApiClient, Application, Job, Role, User};

const LOGIN_REQUIRED: &str =
    "Bạn chưa đăng nhập. Chạy 'viecnong login' hoặc 'viecnong register' trước.";

#[derive(Debug, Clone, Serialize)]
pub struct ProfileView {
    pub user: User,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub jobs: Vec<Job>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub applications: Vec<Application>,
}

async fn load_profile(client: &ApiClient) -> Result<ProfileView> {
    let user = client
        .me()
        .await
        .context("Failed to fetch profile")?
        .into_data(LOGIN_REQUIRED)
        .map_err(|e| {
            warn!("Profile unavailable: {}", e);
            anyhow!(LOGIN_REQUIRED)
        })?;

    let mut view = ProfileView {
        user,
        jobs: Vec::new(),
        applications: Vec::new(),
    };

    match view.user.role {
        Some(Role::Owner) => {
            view.jobs = client
                .list_jobs(Some(view.user.id))
                .await
                .context("Failed to fetch posted jobs")?
                .into_data("Không tải được tin đã đăng")?;
        }
        Some(Role::Worker) => {
            view.applications = client
                .my_applications()
                .await
                .context("Failed to fetch applications")?
                .into_data("Không tải được hồ sơ ứng tuyển")?;
        }
        None => {}
    }
    Ok(view)
}

/// Execute the profile command
pub async fn execute(ctx: &Context) -> Result<()> {
    let client = ctx
        .authenticated_client("xem hồ sơ")
        .map_err(|_| anyhow!(LOGIN_REQUIRED))?;
    let view = load_profile(&client).await?;

    match ctx.format {
        OutputFormat::Json => output_json(&view)?,
        OutputFormat::Text => print_profile(&view),
    }
    Ok(())
}

fn print_profile(view: &ProfileView) {
    let user = &view.user;
    println!("{}", user.name);
    println!("SĐT:      {}", user.phone);
    if let Some(role) = user.role {
        println!("Vai trò:  {}", role.label());
    }
    if let Some(address) = &user.address {
        println!("Địa chỉ:  {address}");
    }

    match user.role {
        Some(Role::Owner) => {
            println!();
            println!("Tin đã đăng ({}):", view.jobs.len());
            for job in &view.jobs {
                println!("  {}", posted_label(job));
            }
        }
        Some(Role::Worker) => {
            println!();
            println!("Việc đã ứng tuyển ({}):", view.applications.len());
            for app in &view.applications {
                let title = app.job.as_ref().map_or("-", |j| j.title.as_str());
                println!(
                    "  #{} {} [{}] {}",
                    app.id,
                    title,
                    app.status,
                    format_optional_date(app.created_at.as_deref())
                );
            }
        }
        None => {}
    }
}
