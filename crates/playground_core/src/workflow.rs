use playground_logging::{pg_debug, pg_info, pg_warn};

use crate::{
    AnalysisResult, FileHandle, InputMode, Notification, PendingInput, Skill, SubmitRequest,
};

pub type RequestId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImagePane {
    Summary,
    Detailed,
    TextExtraction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryPane {
    Brief,
    Detailed,
    KeyEntities,
}

/// Which part of a result is on screen. Conversation results have a single view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultPane {
    Transcript,
    Image(ImagePane),
    Summary(SummaryPane),
}

impl ResultPane {
    pub fn default_for(skill: Skill) -> Self {
        match skill {
            Skill::Conversation => ResultPane::Transcript,
            Skill::Image => ResultPane::Image(ImagePane::Summary),
            Skill::Summarization => ResultPane::Summary(SummaryPane::Brief),
        }
    }

    /// Maps a tab index to the pane for `skill`; out-of-range indices are `None`.
    pub fn select(skill: Skill, index: usize) -> Option<Self> {
        match (skill, index) {
            (Skill::Conversation, 0) => Some(ResultPane::Transcript),
            (Skill::Image, 0) => Some(ResultPane::Image(ImagePane::Summary)),
            (Skill::Image, 1) => Some(ResultPane::Image(ImagePane::Detailed)),
            (Skill::Image, 2) => Some(ResultPane::Image(ImagePane::TextExtraction)),
            (Skill::Summarization, 0) => Some(ResultPane::Summary(SummaryPane::Brief)),
            (Skill::Summarization, 1) => Some(ResultPane::Summary(SummaryPane::Detailed)),
            (Skill::Summarization, 2) => Some(ResultPane::Summary(SummaryPane::KeyEntities)),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        match self {
            ResultPane::Transcript
            | ResultPane::Image(ImagePane::Summary)
            | ResultPane::Summary(SummaryPane::Brief) => 0,
            ResultPane::Image(ImagePane::Detailed) | ResultPane::Summary(SummaryPane::Detailed) => 1,
            ResultPane::Image(ImagePane::TextExtraction)
            | ResultPane::Summary(SummaryPane::KeyEntities) => 2,
        }
    }

    pub fn labels(skill: Skill) -> &'static [&'static str] {
        match skill {
            Skill::Conversation => &[],
            Skill::Image => &["Summary", "Detailed Analysis", "Text Extraction"],
            Skill::Summarization => &["Brief Summary", "Detailed Summary", "Key Entities"],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeRejection {
    /// Extension not in the skill's allow-list.
    UnsupportedType,
    /// The workflow is in URL mode.
    WrongMode,
    /// A request is in flight.
    Busy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejection {
    /// Single-flight: a request is already outstanding or a result is shown.
    NotReady,
    /// Neither a file nor a URL is present.
    EmptyInput(String),
    /// No session to take the credential from.
    NotSignedIn(String),
}

/// Upload, analyze and display state for one skill screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Workflow {
    skill: Skill,
    mode: InputMode,
    input: Option<PendingInput>,
    url_text: String,
    status: RequestStatus,
    result: Option<AnalysisResult>,
    error: Option<String>,
    pane: ResultPane,
    in_flight: Option<RequestId>,
}

impl Workflow {
    pub fn new(skill: Skill) -> Self {
        Self {
            skill,
            mode: InputMode::File,
            input: None,
            url_text: String::new(),
            status: RequestStatus::Idle,
            result: None,
            error: None,
            pane: ResultPane::default_for(skill),
            in_flight: None,
        }
    }

    pub fn skill(&self) -> Skill {
        self.skill
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn input(&self) -> Option<&PendingInput> {
        self.input.as_ref()
    }

    pub fn url_text(&self) -> &str {
        &self.url_text
    }

    pub fn status(&self) -> &RequestStatus {
        &self.status
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn pane(&self) -> ResultPane {
        self.pane
    }

    pub fn in_flight(&self) -> Option<RequestId> {
        self.in_flight
    }

    pub fn is_initial(&self) -> bool {
        *self == Workflow::new(self.skill)
    }

    /// Whether a submit would be accepted right now (input present, no request
    /// outstanding, no result displayed).
    pub fn can_submit(&self) -> bool {
        self.input.is_some() && self.accepts_submit()
    }

    fn accepts_submit(&self) -> bool {
        matches!(self.status, RequestStatus::Idle | RequestStatus::Failed(_))
    }

    /// Accepts `file` as the pending input if its extension is allowed.
    /// A rejected candidate leaves the workflow untouched.
    pub fn select_file(&mut self, file: FileHandle) -> Result<(), IntakeRejection> {
        if self.status == RequestStatus::Loading {
            return Err(IntakeRejection::Busy);
        }
        if self.mode != InputMode::File {
            return Err(IntakeRejection::WrongMode);
        }
        if !self.skill.accepts(&file.name) {
            pg_debug!(
                "{:?}: rejected {} ({}), not in allow-list",
                self.skill,
                file.name,
                file.mime
            );
            return Err(IntakeRejection::UnsupportedType);
        }
        pg_info!("{:?}: selected {} ({} bytes)", self.skill, file.name, file.size);
        self.input = Some(PendingInput::File(file));
        self.clear_outcome();
        Ok(())
    }

    /// Updates the URL text box. Ignored outside URL mode.
    pub fn edit_url(&mut self, text: String) -> bool {
        if self.mode != InputMode::Url || self.status == RequestStatus::Loading {
            return false;
        }
        let trimmed = text.trim();
        self.input = if trimmed.is_empty() {
            None
        } else {
            Some(PendingInput::Url(trimmed.to_string()))
        };
        self.url_text = text;
        true
    }

    /// Toggles between file and URL input, discarding the previous mode's input
    /// together with any result or error.
    pub fn switch_mode(&mut self, mode: InputMode) -> bool {
        if !self.skill.supports_url() && mode == InputMode::Url {
            return false;
        }
        if self.status == RequestStatus::Loading || mode == self.mode {
            return false;
        }
        pg_info!("{:?}: input mode {:?} -> {:?}", self.skill, self.mode, mode);
        self.mode = mode;
        self.input = None;
        self.url_text.clear();
        self.clear_outcome();
        true
    }

    /// Starts a request if the workflow is ready. On success the workflow is
    /// `Loading` and the returned request must be executed by the caller.
    pub fn begin_submit(
        &mut self,
        access_token: Option<&str>,
        request_id: RequestId,
    ) -> Result<SubmitRequest, SubmitRejection> {
        if !self.accepts_submit() {
            pg_warn!(
                "{:?}: submit rejected while {:?}",
                self.skill,
                self.status
            );
            return Err(SubmitRejection::NotReady);
        }
        let Some(input) = self.input.clone() else {
            let message = self.skill.empty_input_message(self.mode).to_string();
            self.error = Some(message.clone());
            return Err(SubmitRejection::EmptyInput(message));
        };
        let Some(token) = access_token else {
            let message = "Please log in first".to_string();
            self.error = Some(message.clone());
            return Err(SubmitRejection::NotSignedIn(message));
        };

        pg_info!("{:?}: submitting request {}", self.skill, request_id);
        self.status = RequestStatus::Loading;
        self.error = None;
        self.result = None;
        self.in_flight = Some(request_id);
        Ok(SubmitRequest {
            request_id,
            skill: self.skill,
            input,
            access_token: token.to_string(),
        })
    }

    /// Applies a completed request. Responses for a request this workflow no
    /// longer waits for are dropped and yield `None`.
    pub fn finish(
        &mut self,
        request_id: RequestId,
        outcome: Result<AnalysisResult, String>,
    ) -> Option<Notification> {
        if self.in_flight != Some(request_id) {
            pg_warn!(
                "{:?}: dropping stale response for request {} (waiting for {:?})",
                self.skill,
                request_id,
                self.in_flight
            );
            return None;
        }
        self.in_flight = None;
        match outcome {
            Ok(result) => {
                pg_info!("{:?}: request {} succeeded", self.skill, request_id);
                self.status = RequestStatus::Succeeded;
                self.result = Some(result);
                self.error = None;
                self.pane = ResultPane::default_for(self.skill);
                Some(Notification::success(self.skill.success_message()))
            }
            Err(message) => {
                pg_warn!("{:?}: request {} failed: {}", self.skill, request_id, message);
                self.status = RequestStatus::Failed(message.clone());
                self.result = None;
                self.error = Some(message.clone());
                Some(Notification::error(message))
            }
        }
    }

    pub fn select_pane(&mut self, index: usize) -> bool {
        match ResultPane::select(self.skill, index) {
            Some(pane) if pane != self.pane => {
                self.pane = pane;
                true
            }
            _ => false,
        }
    }

    /// Returns to the initial state. Any outstanding response becomes stale.
    pub fn reset(&mut self) {
        if let Some(id) = self.in_flight {
            pg_debug!("{:?}: reset abandons request {}", self.skill, id);
        }
        *self = Workflow::new(self.skill);
    }

    fn clear_outcome(&mut self) {
        self.result = None;
        self.error = None;
        self.status = RequestStatus::Idle;
        self.in_flight = None;
    }
}
