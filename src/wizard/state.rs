// ABOUTME: State management for the job-posting wizard
// Tracks current step, the accumulated draft, selected requirements and submission status

use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, warn};

use super::catalog::{
    suggested_title, Package, PriceType, RequirementId, DEFAULT_BENEFITS, DEFAULT_DEADLINE,
    DEFAULT_LOCATION, JOB_TYPES, MANDATORY_REQUIREMENT, MSG_POSTED, MSG_POST_FAILED,
    MSG_UNEXPECTED,
};
use crate::api::{ApiEnvelope, ApiError, CreateJobRequest};
use crate::session::SessionProvider;

/// Steps in the job-posting wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    JobType,
    Title,
    Details,
    Location,
    Requirements,
    Images,
    Package,
    Review,
}

impl WizardStep {
    /// Get all steps in order
    pub fn all() -> &'static [WizardStep] {
        &[
            Self::JobType,
            Self::Title,
            Self::Details,
            Self::Location,
            Self::Requirements,
            Self::Images,
            Self::Package,
            Self::Review,
        ]
    }

    /// Get the step number (1-indexed for display)
    pub fn number(&self) -> usize {
        match self {
            Self::JobType => 1,
            Self::Title => 2,
            Self::Details => 3,
            Self::Location => 4,
            Self::Requirements => 5,
            Self::Images => 6,
            Self::Package => 7,
            Self::Review => 8,
        }
    }

    /// Get the total number of steps
    pub fn total() -> usize {
        8
    }

    pub fn from_number(number: usize) -> Option<Self> {
        Self::all().get(number.checked_sub(1)?).copied()
    }

    /// Get display title for this step
    pub fn title(&self) -> &'static str {
        match self {
            Self::JobType => "Chọn loại công việc",
            Self::Title => "Tiêu đề tin",
            Self::Details => "Thông tin chi tiết",
            Self::Location => "Địa điểm",
            Self::Requirements => "Yêu cầu hồ sơ thợ",
            Self::Images => "Hình ảnh",
            Self::Package => "Chọn gói tin",
            Self::Review => "Xác nhận",
        }
    }

    /// Get the next step, if any
    pub fn next(&self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    /// Get the previous step, if any
    pub fn previous(&self) -> Option<Self> {
        Self::from_number(self.number() - 1)
    }

    /// Text fields (and the price-type switch) that take focus on this step
    pub fn fields(&self) -> &'static [FieldFocus] {
        match self {
            Self::Title => &[FieldFocus::Title],
            Self::Details => &[
                FieldFocus::Quantity,
                FieldFocus::PriceType,
                FieldFocus::Price,
                FieldFocus::Description,
            ],
            Self::Location => &[FieldFocus::Location],
            _ => &[],
        }
    }

    /// Number of selectable options on list steps
    pub fn option_count(&self) -> usize {
        match self {
            Self::JobType => JOB_TYPES.len(),
            Self::Requirements => RequirementId::all().len(),
            Self::Package => Package::all().len(),
            _ => 0,
        }
    }
}

/// Editable inputs across the form steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFocus {
    Title,
    Quantity,
    PriceType,
    Price,
    Description,
    Location,
}

impl FieldFocus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Title => "Tiêu đề (Tự động gợi ý)",
            Self::Quantity => "Số lượng người cần",
            Self::PriceType => "Hình thức trả lương",
            Self::Price => "Mức lương",
            Self::Description => "Mô tả thêm",
            Self::Location => "Địa chỉ vườn",
        }
    }
}

/// Everything the owner has entered so far
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobDraft {
    pub job_type: String,
    pub title: String,
    /// Raw input as typed
    pub quantity: String,
    pub price_type: PriceType,
    /// Raw input, e.g. "350.000"; normalized on submit
    pub price: String,
    pub start_date: String,
    pub end_date: String,
    pub amenities: Vec<String>,
    pub description: String,
    pub location: String,
    pub images: Vec<String>,
    pub package: Package,
}

impl Default for JobDraft {
    fn default() -> Self {
        Self {
            job_type: String::new(),
            title: String::new(),
            quantity: "10".to_string(),
            price_type: PriceType::Day,
            price: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            amenities: Vec::new(),
            description: String::new(),
            location: String::new(),
            images: Vec::new(),
            package: Package::Free,
        }
    }
}

/// One field write; merged into the draft without validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftField {
    JobType(String),
    Title(String),
    Quantity(String),
    PriceType(PriceType),
    Price(String),
    StartDate(String),
    EndDate(String),
    Amenities(Vec<String>),
    Description(String),
    Location(String),
    Images(Vec<String>),
    Package(Package),
}

impl JobDraft {
    fn apply(&mut self, field: DraftField) {
        match field {
            DraftField::JobType(v) => self.job_type = v,
            DraftField::Title(v) => self.title = v,
            DraftField::Quantity(v) => self.quantity = v,
            DraftField::PriceType(v) => self.price_type = v,
            DraftField::Price(v) => self.price = v,
            DraftField::StartDate(v) => self.start_date = v,
            DraftField::EndDate(v) => self.end_date = v,
            DraftField::Amenities(v) => self.amenities = v,
            DraftField::Description(v) => self.description = v,
            DraftField::Location(v) => self.location = v,
            DraftField::Images(v) => self.images = v,
            DraftField::Package(v) => self.package = v,
        }
    }

    /// Text buffer behind a focusable field (None for the price-type switch)
    fn text_mut(&mut self, focus: FieldFocus) -> Option<&mut String> {
        match focus {
            FieldFocus::Title => Some(&mut self.title),
            FieldFocus::Quantity => Some(&mut self.quantity),
            FieldFocus::Price => Some(&mut self.price),
            FieldFocus::Description => Some(&mut self.description),
            FieldFocus::Location => Some(&mut self.location),
            FieldFocus::PriceType => None,
        }
    }
}

/// Strip every non-digit and parse. No digits is 0, too many digits saturate.
pub fn normalize_price(raw: &str) -> u64 {
    raw.chars()
        .filter_map(|c| c.to_digit(10))
        .fold(0u64, |acc, d| acc.saturating_mul(10).saturating_add(u64::from(d)))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

/// Transient user-visible message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: MessageKind,
    pub text: String,
}

impl StatusMessage {
    fn success(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Success,
            text: text.into(),
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Error,
            text: text.into(),
        }
    }
}

/// What the terminal step offers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalView {
    /// No session: log in or register first, no submit control
    AuthPrompt,
    /// Submit control; disabled while `busy`
    ReadyToSubmit { busy: bool },
}

/// Why a submission was not started
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitBlocked {
    #[error("submission is only available on the last step")]
    NotTerminalStep,
    #[error("not logged in")]
    Unauthenticated,
    #[error("a submission is already in progress")]
    InFlight,
    #[error("the job has already been posted")]
    AlreadyPosted,
}

/// Result of a finished submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Posted,
    Failed { message: String },
}

/// Full wizard state
pub struct PostJobState {
    /// Current step in the wizard
    pub current_step: WizardStep,
    pub draft: JobDraft,
    /// Selected requirements, in selection order
    selected_requirements: Vec<RequirementId>,
    /// A submission is in flight
    pub busy: bool,
    /// The job was posted; the wizard is done
    pub posted: bool,
    pub status_message: Option<StatusMessage>,
    /// Focused field index within `current_step.fields()`
    pub focus_index: usize,
    /// Highlighted option on list steps
    pub cursor: usize,
    session: Arc<dyn SessionProvider + Send + Sync>,
}

impl fmt::Debug for PostJobState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostJobState")
            .field("current_step", &self.current_step)
            .field("draft", &self.draft)
            .field("selected_requirements", &self.selected_requirements)
            .field("busy", &self.busy)
            .field("posted", &self.posted)
            .field("status_message", &self.status_message)
            .finish_non_exhaustive()
    }
}

impl PostJobState {
    pub fn new(session: Arc<dyn SessionProvider + Send + Sync>) -> Self {
        Self {
            current_step: WizardStep::JobType,
            draft: JobDraft::default(),
            selected_requirements: vec![MANDATORY_REQUIREMENT],
            busy: false,
            posted: false,
            status_message: None,
            focus_index: 0,
            cursor: 0,
            session,
        }
    }

    pub fn selected_requirements(&self) -> &[RequirementId] {
        &self.selected_requirements
    }

    pub fn is_requirement_selected(&self, id: RequirementId) -> bool {
        self.selected_requirements.contains(&id)
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    fn enter_step(&mut self, step: WizardStep) {
        self.current_step = step;
        self.focus_index = 0;
        self.cursor = match step {
            WizardStep::JobType => JOB_TYPES
                .iter()
                .position(|t| *t == self.draft.job_type)
                .unwrap_or(0),
            WizardStep::Package => Package::all()
                .iter()
                .position(|p| *p == self.draft.package)
                .unwrap_or(0),
            _ => 0,
        };
    }

    /// Move to next step; no-op on the last step
    pub fn advance(&mut self) -> bool {
        match self.current_step.next() {
            Some(next) => {
                self.enter_step(next);
                true
            }
            None => false,
        }
    }

    /// Move to previous step; no-op on the first step. Nothing is cleared.
    pub fn retreat(&mut self) -> bool {
        match self.current_step.previous() {
            Some(prev) => {
                self.enter_step(prev);
                true
            }
            None => false,
        }
    }

    pub fn update_field(&mut self, field: DraftField) {
        self.draft.apply(field);
    }

    /// Flip a requirement. The mandatory one can't be removed.
    pub fn toggle_requirement(&mut self, id: RequirementId) -> bool {
        if id.is_mandatory() {
            return false;
        }
        if let Some(pos) = self.selected_requirements.iter().position(|r| *r == id) {
            self.selected_requirements.remove(pos);
        } else {
            self.selected_requirements.push(id);
        }
        true
    }

    /// Commit a job type: sets the type, suggests a title and moves on.
    pub fn select_job_type(&mut self, index: usize) -> bool {
        let Some(job_type) = JOB_TYPES.get(index) else {
            return false;
        };
        self.update_field(DraftField::JobType((*job_type).to_string()));
        self.update_field(DraftField::Title(suggested_title(job_type)));
        self.cursor = index;
        self.advance()
    }

    /// What the terminal step shows; None on any other step
    pub fn terminal_view(&self) -> Option<TerminalView> {
        if self.current_step != WizardStep::Review {
            return None;
        }
        if self.session.is_authenticated() {
            Some(TerminalView::ReadyToSubmit { busy: self.busy })
        } else {
            Some(TerminalView::AuthPrompt)
        }
    }

    /// Compose the creation request from everything collected
    pub fn build_payload(&self) -> CreateJobRequest {
        let price = normalize_price(&self.draft.price);
        let location = if self.draft.location.is_empty() {
            DEFAULT_LOCATION.to_string()
        } else {
            self.draft.location.clone()
        };

        CreateJobRequest {
            title: self.draft.title.clone(),
            description: format!(
                "{}\n\nSố lượng: {} người\nHình thức: {}",
                self.draft.description,
                self.draft.quantity,
                self.draft.price_type.label()
            ),
            location,
            price_min: price,
            price_max: price,
            requirements: self
                .selected_requirements
                .iter()
                .map(RequirementId::label)
                .collect::<Vec<_>>()
                .join("\n"),
            benefits: DEFAULT_BENEFITS.to_string(),
            deadline: DEFAULT_DEADLINE.to_string(),
            images: self.draft.images.clone(),
        }
    }

    /// Start a submission: marks the wizard busy and hands out the payload.
    ///
    /// At most one submission is in flight; later calls are refused until
    /// `finish_submit` runs.
    pub fn begin_submit(&mut self) -> Result<CreateJobRequest, SubmitBlocked> {
        match self.terminal_view() {
            None => return Err(SubmitBlocked::NotTerminalStep),
            Some(TerminalView::AuthPrompt) => return Err(SubmitBlocked::Unauthenticated),
            Some(TerminalView::ReadyToSubmit { busy: true }) => return Err(SubmitBlocked::InFlight),
            Some(TerminalView::ReadyToSubmit { busy: false }) => {}
        }
        if self.posted {
            return Err(SubmitBlocked::AlreadyPosted);
        }

        self.busy = true;
        self.status_message = None;
        info!("Submitting job posting '{}'", self.draft.title);
        Ok(self.build_payload())
    }

    /// Record the result of the create request. Failures keep every field and
    /// the current step so the owner can retry.
    pub fn finish_submit<T>(&mut self, result: Result<ApiEnvelope<T>, ApiError>) -> SubmitOutcome {
        self.busy = false;

        let outcome = match result {
            Ok(envelope) if envelope.success => {
                info!("Job posted");
                self.posted = true;
                self.status_message = Some(StatusMessage::success(MSG_POSTED));
                return SubmitOutcome::Posted;
            }
            Ok(envelope) => {
                let message = envelope.message_or(MSG_POST_FAILED).to_string();
                warn!("Server rejected job posting: {}", message);
                SubmitOutcome::Failed { message }
            }
            Err(e) => {
                error!("Job posting request failed: {}", e);
                SubmitOutcome::Failed {
                    message: MSG_UNEXPECTED.to_string(),
                }
            }
        };

        if let SubmitOutcome::Failed { message } = &outcome {
            self.status_message = Some(StatusMessage::error(message.clone()));
        }
        outcome
    }

    /// Currently focused field, if the step has any
    pub fn focused_field(&self) -> Option<FieldFocus> {
        self.current_step.fields().get(self.focus_index).copied()
    }

    pub fn focus_next(&mut self) {
        let count = self.current_step.fields().len();
        if count > 0 {
            self.focus_index = (self.focus_index + 1) % count;
        }
    }

    pub fn focus_previous(&mut self) {
        let count = self.current_step.fields().len();
        if count > 0 {
            self.focus_index = (self.focus_index + count - 1) % count;
        }
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        let count = self.current_step.option_count();
        if self.cursor + 1 < count {
            self.cursor += 1;
        }
    }

    /// Type a character into the focused text field
    pub fn input_char(&mut self, c: char) {
        if let Some(focus) = self.focused_field() {
            if let Some(buffer) = self.draft.text_mut(focus) {
                buffer.push(c);
            }
        }
    }

    /// Delete the last character of the focused text field
    pub fn backspace(&mut self) {
        if let Some(focus) = self.focused_field() {
            if let Some(buffer) = self.draft.text_mut(focus) {
                buffer.pop();
            }
        }
    }

    /// Space on the current step: toggle the highlighted requirement, pick the
    /// highlighted package or flip the price type
    pub fn toggle_current(&mut self) {
        match self.current_step {
            WizardStep::Requirements => {
                if let Some(id) = RequirementId::all().get(self.cursor) {
                    self.toggle_requirement(*id);
                }
            }
            WizardStep::Package => {
                if let Some(package) = Package::all().get(self.cursor) {
                    self.update_field(DraftField::Package(*package));
                }
            }
            WizardStep::Details if self.focused_field() == Some(FieldFocus::PriceType) => {
                let toggled = self.draft.price_type.toggled();
                self.update_field(DraftField::PriceType(toggled));
            }
            _ => {}
        }
    }

    /// Check if we're on the final step
    pub fn is_final_step(&self) -> bool {
        self.current_step == WizardStep::Review
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        self.current_step.previous().is_some()
    }
}
