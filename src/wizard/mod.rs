// ABOUTME: Tenant alerting wizard: step state machine, validation, review and submission
// The controller owns one session's form state; views and transports are injected

pub mod controller;
pub mod fields;
pub mod review;
pub mod sessions;
pub mod step;
pub mod submission;
pub mod validator;

pub use controller::{WizardController, WizardError};
pub use fields::{FieldValue, FlagSetting, FormState, LegacyAlerts};
pub use review::{review_items, ReviewItem};
pub use sessions::WizardSessions;
pub use step::WizardStep;
pub use submission::{shape_payload, SubmissionAdapter, SubmissionResult};
pub use validator::{validate_step, ValidationError};
