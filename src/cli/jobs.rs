// ABOUTME: CLI jobs commands - list open postings and show one posting in detail
//
// Prices are rendered as "min - max VNĐ", benefits as comma-split tags,
// dates in d/m/yyyy and the remaining time as whole days (rounded up).

use anyhow::{Context as _, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use super::util::{
    days_left, format_date, format_optional_date, format_price_range, output_json, split_list,
    truncate, Context,
};
use super::{JobShowArgs, JobsListArgs, OutputFormat};
use crate::api::{ApiClient, Job};

/// One row of the job list
#[derive(Debug, Clone, Serialize)]
pub struct JobSummary {
    pub id: i64,
    pub title: String,
    pub location: String,
    pub price: String,
    pub tags: Vec<String>,
    pub posted: String,
    pub days_left: Option<i64>,
}

impl JobSummary {
    #[must_use]
    pub fn from_job(job: &Job, now: DateTime<Utc>) -> Self {
        Self {
            id: job.id,
            title: job.title.clone(),
            location: job.location.clone(),
            price: format_price_range(job.price_min, job.price_max),
            tags: split_list(job.benefits.as_deref(), ','),
            posted: format_optional_date(job.created_at.as_deref()),
            days_left: job.deadline.as_deref().and_then(|d| days_left(d, now)),
        }
    }

    fn days_left_label(&self) -> String {
        match self.days_left {
            Some(days) if days > 0 => format!("còn {days} ngày"),
            Some(_) => "hết hạn".to_string(),
            None => "-".to_string(),
        }
    }
}

/// Full job view
#[derive(Debug, Clone, Serialize)]
pub struct JobDetail {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub location: String,
    pub price: String,
    pub requirements: Vec<String>,
    pub benefits: Vec<String>,
    pub owner: Option<String>,
    pub deadline: String,
    pub images: Vec<String>,
}

impl JobDetail {
    #[must_use]
    pub fn from_job(job: &Job) -> Self {
        Self {
            id: job.id,
            title: job.title.clone(),
            description: job.description.clone(),
            location: job.location.clone(),
            price: format_price_range(job.price_min, job.price_max),
            requirements: split_list(job.requirements.as_deref(), '\n'),
            benefits: split_list(job.benefits.as_deref(), '\n'),
            owner: job.owner.as_ref().map(|o| o.name.clone()),
            deadline: format_optional_date(job.deadline.as_deref()),
            images: job.images.clone(),
        }
    }
}

/// Fetch postings, optionally only those of one owner
async fn fetch_summaries(
    client: &ApiClient,
    owner_id: Option<i64>,
    now: DateTime<Utc>,
) -> Result<Vec<JobSummary>> {
    let jobs = client
        .list_jobs(owner_id)
        .await
        .context("Failed to fetch jobs")?
        .into_data("Không tải được danh sách việc làm")?;
    info!("Fetched {} jobs", jobs.len());

    Ok(jobs.iter().map(|job| JobSummary::from_job(job, now)).collect())
}

async fn fetch_detail(client: &ApiClient, id: i64) -> Result<JobDetail> {
    let job = client
        .get_job(id)
        .await
        .with_context(|| format!("Failed to fetch job {id}"))?
        .into_data("Không tìm thấy công việc")?;
    Ok(JobDetail::from_job(&job))
}

/// Execute `jobs list`
pub async fn list(ctx: &Context, args: JobsListArgs) -> Result<()> {
    let client = ctx.client()?;
    let summaries = fetch_summaries(&client, args.owner_id, Utc::now()).await?;

    match ctx.format {
        OutputFormat::Json => output_json(&summaries)?,
        OutputFormat::Text => print_summaries(&summaries),
    }
    Ok(())
}

/// Execute `jobs show`
pub async fn show(ctx: &Context, args: JobShowArgs) -> Result<()> {
    let client = ctx.client()?;
    let detail = fetch_detail(&client, args.id).await?;

    match ctx.format {
        OutputFormat::Json => output_json(&detail)?,
        OutputFormat::Text => print_detail(&detail),
    }
    Ok(())
}

fn print_summaries(jobs: &[JobSummary]) {
    if jobs.is_empty() {
        println!("Chưa có tin tuyển dụng nào.");
        return;
    }

    println!(
        "{:<6} {:<32} {:<20} {:<28} {:<11} CÒN LẠI",
        "ID", "TIÊU ĐỀ", "ĐỊA ĐIỂM", "MỨC LƯƠNG", "NGÀY ĐĂNG"
    );
    println!("{}", "-".repeat(110));
    for job in jobs {
        println!(
            "{:<6} {:<32} {:<20} {:<28} {:<11} {}",
            job.id,
            truncate(&job.title, 32),
            truncate(&job.location, 20),
            job.price,
            job.posted,
            job.days_left_label()
        );
        if !job.tags.is_empty() {
            let tags: Vec<String> = job.tags.iter().map(|t| format!("[{t}]")).collect();
            println!("       {}", tags.join(" "));
        }
    }
}

fn print_detail(job: &JobDetail) {
    println!("#{} {}", job.id, job.title);
    println!("Địa điểm:   {}", job.location);
    println!("Mức lương:  {}", job.price);
    println!("Hạn chót:   {}", job.deadline);
    if let Some(owner) = &job.owner {
        println!("Chủ vườn:   {owner}");
    }
    println!();
    println!("{}", job.description);

    if !job.requirements.is_empty() {
        println!();
        println!("Yêu cầu:");
        for line in &job.requirements {
            println!("  - {line}");
        }
    }
    if !job.benefits.is_empty() {
        println!();
        println!("Quyền lợi:");
        for line in &job.benefits {
            println!("  - {line}");
        }
    }
    if !job.images.is_empty() {
        println!();
        println!("Hình ảnh: {}", job.images.join(", "));
    }
    println!();
    println!("Ứng tuyển: viecnong apply {}", job.id);
}

/// Used by the profile command for an owner's own postings
pub(crate) fn posted_label(job: &Job) -> String {
    format!(
        "#{} {} ({}, đăng {})",
        job.id,
        job.title,
        format_price_range(job.price_min, job.price_max),
        job.created_at.as_deref().map(format_date).unwrap_or_else(|| "-".to_string())
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::User;
    use crate::config::ApiConfig;
    use chrono::TimeZone;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn job() -> Job {
        Job {
            id: 7,
            title: "Tuyển thợ cà phê".to_string(),
            description: "Hái cà phê chín".to_string(),
            location: "Đắk Lắk".to_string(),
            price_min: 300_000,
            price_max: 350_000,
            requirements: Some("Có SĐT\nCó thể đi làm ngay".to_string()),
            benefits: Some("Bao ăn ở, Có xe đưa đón".to_string()),
            deadline: Some("2025-12-31".to_string()),
            created_at: Some("2025-12-01T07:00:00Z".to_string()),
            owner_id: Some(2),
            owner: Some(User {
                id: 2,
                name: "Anh Tư".to_string(),
                phone: "0909000000".to_string(),
                role: None,
                address: None,
            }),
            images: vec![],
        }
    }

    #[test]
    fn test_summary_formats_fields() {
        let now = Utc.with_ymd_and_hms(2025, 12, 29, 12, 0, 0).unwrap();
        let summary = JobSummary::from_job(&job(), now);

        assert_eq!(summary.price, "300.000 - 350.000 VNĐ");
        assert_eq!(summary.tags, vec!["Bao ăn ở", "Có xe đưa đón"]);
        assert_eq!(summary.posted, "1/12/2025");
        assert_eq!(summary.days_left, Some(2));
        assert_eq!(summary.days_left_label(), "còn 2 ngày");
    }

    #[test]
    fn test_summary_without_deadline() {
        let mut job = job();
        job.deadline = None;
        job.benefits = None;
        let summary = JobSummary::from_job(&job, Utc::now());
        assert_eq!(summary.days_left, None);
        assert!(summary.tags.is_empty());
        assert_eq!(summary.days_left_label(), "-");
    }

    #[test]
    fn test_detail_splits_lines() {
        let detail = JobDetail::from_job(&job());
        assert_eq!(detail.requirements, vec!["Có SĐT", "Có thể đi làm ngay"]);
        assert_eq!(detail.benefits, vec!["Bao ăn ở, Có xe đưa đón"]);
        assert_eq!(detail.owner.as_deref(), Some("Anh Tư"));
        assert_eq!(detail.deadline, "31/12/2025");
    }

    #[test]
    fn test_posted_label() {
        assert_eq!(
            posted_label(&job()),
            "#7 Tuyển thợ cà phê (300.000 - 350.000 VNĐ, đăng 1/12/2025)"
        );
    }

    fn client_for(server: &MockServer) -> ApiClient {
        let config = ApiConfig {
            base_url: format!("{}/api/v1", server.uri()),
            ..ApiConfig::default()
        };
        ApiClient::new(&config, None).unwrap()
    }

    #[tokio::test]
    async fn test_list_filters_by_owner() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/jobs"))
            .and(query_param("owner_id", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": [{
                    "id": 7, "title": "Tuyển thợ cà phê", "description": "Hái cà phê chín",
                    "location": "Đắk Lắk", "price_min": 300000, "price_max": 350000,
                    "benefits": "Bao ăn ở", "deadline": "2025-12-31"
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let now = Utc.with_ymd_and_hms(2025, 12, 29, 12, 0, 0).unwrap();
        let summaries = fetch_summaries(&client_for(&server), Some(2), now).await.unwrap();

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].title, "Tuyển thợ cà phê");
        assert_eq!(summaries[0].price, "300.000 - 350.000 VNĐ");
        assert_eq!(summaries[0].tags, vec!["Bao ăn ở"]);
        assert_eq!(summaries[0].days_left, Some(2));
    }

    #[tokio::test]
    async fn test_list_surfaces_server_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/jobs"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({
                "success": false,
                "message": "Máy chủ đang bảo trì"
            })))
            .mount(&server)
            .await;

        let err = fetch_summaries(&client_for(&server), None, Utc::now())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Máy chủ đang bảo trì");
    }

    #[tokio::test]
    async fn test_show_fetches_one_job() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/jobs/7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": {
                    "id": 7, "title": "Tuyển thợ cà phê", "description": "Hái cà phê chín",
                    "location": "Đắk Lắk", "price_min": 300000, "price_max": 350000,
                    "requirements": "Có SĐT\nCó thể đi làm ngay",
                    "owner": {"id": 2, "name": "Anh Tư", "phone": "0909000000"}
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let detail = fetch_detail(&client_for(&server), 7).await.unwrap();
        assert_eq!(detail.requirements, vec!["Có SĐT", "Có thể đi làm ngay"]);
        assert_eq!(detail.owner.as_deref(), Some("Anh Tư"));
        assert_eq!(detail.deadline, "-");
    }

    #[tokio::test]
    async fn test_show_missing_job_uses_fallback_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/jobs/99"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({"success": false})))
            .mount(&server)
            .await;

        let err = fetch_detail(&client_for(&server), 99).await.unwrap_err();
        assert_eq!(err.to_string(), "Không tìm thấy công việc");
    }
}
