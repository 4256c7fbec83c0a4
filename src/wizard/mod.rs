// ABOUTME: Job-posting wizard module
// Walks an owner through eight fixed steps and submits one job posting at the end

pub mod catalog;
pub mod component;
pub mod input;
pub mod state;

pub use catalog::{Package, PriceType, RequirementId, JOB_TYPES, MANDATORY_REQUIREMENT};
pub use component::PostJobComponent;
pub use input::{apply_action, map_key, WizardAction, WizardEffect};
pub use state::{
    normalize_price, DraftField, FieldFocus, JobDraft, MessageKind, PostJobState, StatusMessage,
    SubmitBlocked, SubmitOutcome, TerminalView, WizardStep,
};
