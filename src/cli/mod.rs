// ABOUTME: CLI argument parsing and command routing for viecnong
//
// Provides command-line interface for:
// - Posting a job through the wizard (post, default)
// - Browsing jobs (jobs list, jobs show)
// - Applying to a job (apply)
// - Reviewing applicants (applicants, review)
// - Session and profile (login, register, logout, profile)

pub mod applicants;
pub mod apply;
pub mod auth;
pub mod jobs;
pub mod profile;
pub mod util;

use clap::{Parser, Subcommand, ValueEnum};

use crate::api::{ApplicationStatus, Role};

/// Farm labor marketplace - find day work or hire workers for your orchard
#[derive(Parser)]
#[command(name = "viecnong")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Override the API base URL for this run
    #[arg(long, global = true)]
    pub api_url: Option<String>,
}

/// Output format for commands
#[derive(Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Post a new job with the step-by-step wizard (default if no command given)
    Post,

    /// Browse job postings
    #[command(subcommand)]
    Jobs(JobsCommand),

    /// Apply to a job
    Apply(ApplyArgs),

    /// List applicants for one of your jobs
    Applicants(ApplicantsArgs),

    /// Change the status of an application
    Review(ReviewArgs),

    /// Log in with phone and password
    Login(LoginArgs),

    /// Create an account
    Register(RegisterArgs),

    /// Forget the stored session
    Logout,

    /// Show your profile with posted jobs or applications
    Profile,
}

#[derive(Subcommand)]
pub enum JobsCommand {
    /// List open jobs
    List(JobsListArgs),

    /// Show one job in detail
    Show(JobShowArgs),
}

#[derive(clap::Args)]
pub struct JobsListArgs {
    /// Only jobs posted by this owner
    #[arg(long)]
    pub owner_id: Option<i64>,
}

#[derive(clap::Args)]
pub struct JobShowArgs {
    /// Job ID
    pub id: i64,
}

/// Arguments for the apply command
#[derive(clap::Args)]
pub struct ApplyArgs {
    /// Job ID
    pub job_id: i64,

    /// Contact phone (defaults to the phone on your profile)
    #[arg(long)]
    pub phone: Option<String>,

    /// Zalo phone or link
    #[arg(long)]
    pub zalo: Option<String>,

    /// Note to the owner
    #[arg(long, short)]
    pub message: Option<String>,
}

/// Applicant filter
#[derive(Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Called,
    Accepted,
    Rejected,
}

impl StatusFilter {
    pub fn matches(&self, status: ApplicationStatus) -> bool {
        match self {
            Self::All => true,
            Self::Pending => status == ApplicationStatus::Pending,
            Self::Called => status == ApplicationStatus::Called,
            Self::Accepted => status == ApplicationStatus::Accepted,
            Self::Rejected => status == ApplicationStatus::Rejected,
        }
    }
}

#[derive(clap::Args)]
pub struct ApplicantsArgs {
    /// Job ID
    pub job_id: i64,

    /// Show only applications with this status
    #[arg(long, default_value = "all")]
    pub status: StatusFilter,
}

#[derive(clap::Args)]
pub struct ReviewArgs {
    /// Application ID
    pub application_id: i64,

    /// New status (pending, called, accepted, rejected)
    pub status: ApplicationStatus,
}

#[derive(clap::Args)]
pub struct LoginArgs {
    /// Phone number (prompted if omitted)
    #[arg(long)]
    pub phone: Option<String>,
}

#[derive(clap::Args)]
pub struct RegisterArgs {
    /// Account role
    #[arg(long, default_value = "worker")]
    pub role: Role,

    /// Full name (prompted if omitted)
    #[arg(long)]
    pub name: Option<String>,

    /// Phone number (prompted if omitted)
    #[arg(long)]
    pub phone: Option<String>,

    /// Address (prompted if omitted)
    #[arg(long)]
    pub address: Option<String>,
}
