//! Playground core: pure workflow state machine, result projections and routing.
mod effect;
mod entities;
mod format;
mod input;
mod msg;
mod result;
mod route;
mod session;
mod skill;
mod state;
mod update;
mod view_model;
mod workflow;

pub use effect::{AuthRequest, Effect, Notification, NotificationLevel, SubmitRequest};
pub use entities::{parse_key_entities, EntityCategory};
pub use format::{format_megabytes, format_time, format_with_commas};
pub use input::{FileHandle, InputMode, PendingInput};
pub use msg::{Msg, WorkflowMsg};
pub use result::{
    AnalysisResult, ConversationResult, DocumentMetadata, ImageProperties, ImageResult,
    SpeakerTrack, SpeechSegment, SummaryResult,
};
pub use route::Route;
pub use session::Session;
pub use skill::{AcceptedType, Skill};
pub use state::{AppState, AuthStatus};
pub use update::update;
pub use view_model::{
    render, AppViewModel, AuthView, ConversationView, DashboardView, ImageView, ResultBody,
    ResultView, ScreenView, SegmentView, SkillCard, SpeakerView, SummaryContent, SummaryView,
    TabView, WorkflowView,
};
pub use workflow::{
    ImagePane, IntakeRejection, RequestId, RequestStatus, ResultPane, SubmitRejection,
    SummaryPane, Workflow,
};
