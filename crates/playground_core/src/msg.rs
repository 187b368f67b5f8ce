use crate::{AnalysisResult, FileHandle, InputMode, RequestId, Session, Skill};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Persisted session loaded at startup (or nothing found).
    SessionRestored(Option<Session>),
    /// User navigated to a path.
    Navigate(String),
    /// User submitted the login form.
    LoginSubmitted { username: String, password: String },
    /// User submitted the registration form.
    RegisterSubmitted {
        username: String,
        email: String,
        password: String,
    },
    /// Auth request completed.
    AuthFinished {
        request_id: RequestId,
        outcome: Result<Session, String>,
    },
    /// User clicked Logout.
    LogoutClicked,
    /// Event for one skill screen.
    Workflow { skill: Skill, msg: WorkflowMsg },
}

#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowMsg {
    /// User dropped or picked a file.
    FileSelected(FileHandle),
    /// User edited the URL box.
    UrlEdited(String),
    /// User toggled file/url input.
    ModeSwitched(InputMode),
    /// User clicked Analyze.
    AnalyzeClicked,
    /// User clicked Clear / New.
    ResetClicked,
    /// User picked a result tab.
    PaneSelected(usize),
    /// Analyze request completed.
    AnalysisFinished {
        request_id: RequestId,
        outcome: Result<AnalysisResult, String>,
    },
}
