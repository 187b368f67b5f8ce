use crate::{
    format_megabytes, format_time, format_with_commas, parse_key_entities, AnalysisResult,
    AppState, AuthStatus, ConversationResult, EntityCategory, ImagePane, ImageResult, InputMode,
    PendingInput, RequestStatus, ResultPane, Route, Skill, SummaryPane, SummaryResult, Workflow,
};

#[derive(Debug, Clone, PartialEq)]
pub struct AppViewModel {
    pub route: Route,
    pub username: Option<String>,
    pub screen: ScreenView,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScreenView {
    Login(AuthView),
    Register(AuthView),
    Dashboard(DashboardView),
    Skill(WorkflowView),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuthView {
    pub pending: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    pub greeting: String,
    pub cards: Vec<SkillCard>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillCard {
    pub skill: Skill,
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub path: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowView {
    pub skill: Skill,
    pub title: &'static str,
    pub formats_hint: String,
    pub supports_url: bool,
    pub mode: InputMode,
    /// `Selected file: name (1.23 MB)` when a file is pending.
    pub selected_file: Option<String>,
    pub url_text: String,
    pub status: RequestStatus,
    pub error: Option<String>,
    pub can_submit: bool,
    pub result: Option<ResultView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub tabs: Vec<TabView>,
    pub body: ResultBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabView {
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResultBody {
    Conversation(ConversationView),
    Image(ImageView),
    Summary(SummaryView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationView {
    pub memory_context: Vec<String>,
    pub transcription: String,
    /// `Identified N speaker(s) in the conversation`, absent without diarization.
    pub speaker_header: Option<String>,
    pub speakers: Vec<SpeakerView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeakerView {
    pub label: String,
    pub segment_count: String,
    pub segments: Vec<SegmentView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentView {
    pub time_range: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageView {
    pub properties: Vec<String>,
    pub pane: ImagePane,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryView {
    pub chips: Vec<String>,
    pub pane: SummaryPane,
    pub content: SummaryContent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryContent {
    Text(String),
    Entities(Vec<EntityCategory>),
}

const NO_TRANSCRIPTION: &str = "No transcription available";
const NO_SPEECH: &str = "[No speech detected]";
const NO_IMAGE_SUMMARY: &str = "No summary available";
const NO_IMAGE_DETAIL: &str = "No detailed analysis available";
const NO_IMAGE_TEXT: &str = "No text found in the image";
const NO_BRIEF_SUMMARY: &str = "No brief summary available";
const NO_DETAILED_SUMMARY: &str = "No detailed summary available";
const NO_ENTITIES: &str = "No key entities extracted";

pub(crate) fn build(state: &AppState) -> AppViewModel {
    let username = state.session().map(|session| session.username().to_string());
    let auth_view = || AuthView {
        pending: matches!(state.auth_status(), AuthStatus::Pending(_)),
        error: state.auth_error().map(ToOwned::to_owned),
    };
    let screen = match state.route() {
        Route::Login | Route::Root => ScreenView::Login(auth_view()),
        Route::Register => ScreenView::Register(auth_view()),
        Route::Dashboard => ScreenView::Dashboard(dashboard(username.as_deref())),
        Route::Skill(skill) => ScreenView::Skill(workflow_view(state.workflow(skill))),
    };
    AppViewModel {
        route: state.route(),
        username,
        screen,
    }
}

fn dashboard(username: Option<&str>) -> DashboardView {
    DashboardView {
        greeting: format!(
            "Hello, {}! Select a skill below to get started with AI-powered analysis.",
            username.unwrap_or_default()
        ),
        cards: Skill::ALL
            .into_iter()
            .map(|skill| SkillCard {
                skill,
                title: skill.title(),
                description: skill.description(),
                features: skill.features(),
                path: skill.route_path(),
            })
            .collect(),
    }
}

fn workflow_view(workflow: &Workflow) -> WorkflowView {
    let skill = workflow.skill();
    let selected_file = match workflow.input() {
        Some(PendingInput::File(file)) => Some(format!(
            "Selected file: {} ({} MB)",
            file.name,
            format_megabytes(file.size)
        )),
        _ => None,
    };
    WorkflowView {
        skill,
        title: skill.title(),
        formats_hint: skill.formats_hint(),
        supports_url: skill.supports_url(),
        mode: workflow.mode(),
        selected_file,
        url_text: workflow.url_text().to_string(),
        status: workflow.status().clone(),
        error: workflow.error().map(ToOwned::to_owned),
        can_submit: workflow.can_submit(),
        result: workflow
            .result()
            .map(|result| render(result, workflow.pane())),
    }
}

/// Projects a result into its displayable form for the selected pane.
pub fn render(result: &AnalysisResult, pane: ResultPane) -> ResultView {
    let skill = result.skill();
    let pane = if ResultPane::select(skill, pane.index()) == Some(pane) {
        pane
    } else {
        ResultPane::default_for(skill)
    };
    let tabs = ResultPane::labels(skill)
        .iter()
        .copied()
        .enumerate()
        .map(|(index, label)| TabView {
            label,
            selected: index == pane.index(),
        })
        .collect();

    let body = match (result, pane) {
        (AnalysisResult::Conversation(conversation), _) => {
            ResultBody::Conversation(render_conversation(conversation))
        }
        (AnalysisResult::Image(image), ResultPane::Image(image_pane)) => {
            ResultBody::Image(render_image(image, image_pane))
        }
        (AnalysisResult::Summary(summary), ResultPane::Summary(summary_pane)) => {
            ResultBody::Summary(render_summary(summary, summary_pane))
        }
        (AnalysisResult::Image(image), _) => ResultBody::Image(render_image(image, ImagePane::Summary)),
        (AnalysisResult::Summary(summary), _) => {
            ResultBody::Summary(render_summary(summary, SummaryPane::Brief))
        }
    };

    ResultView { tabs, body }
}

fn render_conversation(result: &ConversationResult) -> ConversationView {
    let speakers: Vec<SpeakerView> = result
        .speaker_diarization
        .iter()
        .flatten()
        .enumerate()
        .map(|(index, track)| SpeakerView {
            label: track
                .speaker
                .clone()
                .unwrap_or_else(|| format!("Speaker {}", index + 1)),
            segment_count: format!("{} segment(s)", track.segments.len()),
            segments: track
                .segments
                .iter()
                .map(|segment| SegmentView {
                    time_range: format!(
                        "{} - {}",
                        format_time(segment.start_time),
                        format_time(segment.end_time)
                    ),
                    text: non_empty(segment.text.as_deref()).unwrap_or(NO_SPEECH).to_string(),
                })
                .collect(),
        })
        .collect();

    ConversationView {
        memory_context: result.memory_context.clone().unwrap_or_default(),
        transcription: non_empty(result.transcription.as_deref())
            .unwrap_or(NO_TRANSCRIPTION)
            .to_string(),
        speaker_header: (!speakers.is_empty()).then(|| {
            format!(
                "Identified {} speaker(s) in the conversation",
                speakers.len()
            )
        }),
        speakers,
    }
}

fn render_image(result: &ImageResult, pane: ImagePane) -> ImageView {
    let properties: Vec<String> = result
        .image_properties
        .as_ref()
        .map(|props| {
            [
                ("Size", props.size.as_deref()),
                ("Format", props.format.as_deref()),
                ("Mode", props.mode.as_deref()),
            ]
            .into_iter()
            .filter_map(|(label, value)| value.map(|value| format!("{label}: {value}")))
            .collect()
        })
        .unwrap_or_default();

    let (text, placeholder) = match pane {
        ImagePane::Summary => (result.brief_summary.as_deref(), NO_IMAGE_SUMMARY),
        ImagePane::Detailed => (result.detailed_analysis.as_deref(), NO_IMAGE_DETAIL),
        ImagePane::TextExtraction => (result.extracted_text.as_deref(), NO_IMAGE_TEXT),
    };

    ImageView {
        properties,
        pane,
        text: non_empty(text).unwrap_or(placeholder).to_string(),
    }
}

fn render_summary(result: &SummaryResult, pane: SummaryPane) -> SummaryView {
    let mut chips = Vec::new();
    if let Some(title) = non_empty(result.title.as_deref()) {
        chips.push(format!("Title: {title}"));
    }
    if let Some(url) = non_empty(result.url.as_deref()) {
        chips.push(url.to_string());
    }
    if let Some(metadata) = &result.metadata {
        if let Some(kind) = non_empty(metadata.kind.as_deref()) {
            chips.push(format!("Type: {kind}"));
        }
        if let Some(pages) = metadata.pages.filter(|pages| *pages > 0) {
            chips.push(format!("Pages: {pages}"));
        }
    }
    if let Some(words) = result.word_count.filter(|words| *words > 0) {
        chips.push(format!("Words: {}", format_with_commas(words)));
    }

    let content = match pane {
        SummaryPane::Brief => SummaryContent::Text(
            non_empty(result.brief_summary.as_deref())
                .unwrap_or(NO_BRIEF_SUMMARY)
                .to_string(),
        ),
        SummaryPane::Detailed => SummaryContent::Text(
            non_empty(result.detailed_summary.as_deref())
                .unwrap_or(NO_DETAILED_SUMMARY)
                .to_string(),
        ),
        SummaryPane::KeyEntities => match non_empty(result.key_entities.as_deref()) {
            Some(text) => SummaryContent::Entities(parse_key_entities(text)),
            None => SummaryContent::Text(NO_ENTITIES.to_string()),
        },
    };

    SummaryView {
        chips,
        pane,
        content,
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.is_empty())
}
