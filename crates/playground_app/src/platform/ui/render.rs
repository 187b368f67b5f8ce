use playground_core::{
    AppViewModel, AuthView, ConversationView, DashboardView, ImageView, InputMode, Notification,
    NotificationLevel, RequestStatus, ResultBody, ResultView, ScreenView, SummaryContent,
    SummaryView, WorkflowView,
};

/// Text lines for the current screen.
pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = vec![header(view)];
    match &view.screen {
        ScreenView::Login(auth) => render_auth(
            &mut lines,
            AuthScreen {
                title: "Sign in",
                usage: "login <user> <password>",
                pending: "Signing in...",
            },
            auth,
        ),
        ScreenView::Register(auth) => render_auth(
            &mut lines,
            AuthScreen {
                title: "Create account",
                usage: "register <user> <email> <password>",
                pending: "Creating account...",
            },
            auth,
        ),
        ScreenView::Dashboard(dashboard) => render_dashboard(&mut lines, dashboard),
        ScreenView::Skill(workflow) => render_workflow(&mut lines, workflow),
    }
    lines
}

pub fn format_notification(notification: &Notification) -> String {
    match notification.level {
        NotificationLevel::Success => format!("[ok] {}", notification.text),
        NotificationLevel::Error => format!("[error] {}", notification.text),
    }
}

fn header(view: &AppViewModel) -> String {
    match &view.username {
        Some(username) => format!(
            "== AI Playground {} == signed in as {}",
            view.route.path(),
            username
        ),
        None => format!("== AI Playground {} ==", view.route.path()),
    }
}

struct AuthScreen {
    title: &'static str,
    usage: &'static str,
    pending: &'static str,
}

fn render_auth(lines: &mut Vec<String>, screen: AuthScreen, auth: &AuthView) {
    lines.push(screen.title.to_string());
    if auth.pending {
        lines.push(screen.pending.to_string());
    } else {
        lines.push(format!("  {}", screen.usage));
    }
    if let Some(error) = &auth.error {
        lines.push(format!("! {error}"));
    }
}

fn render_dashboard(lines: &mut Vec<String>, dashboard: &DashboardView) {
    lines.push(dashboard.greeting.clone());
    for card in &dashboard.cards {
        lines.push(String::new());
        lines.push(format!("{}  (go {})", card.title, card.path));
        lines.push(format!("  {}", card.description));
        for feature in card.features {
            lines.push(format!("  - {feature}"));
        }
    }
}

fn render_workflow(lines: &mut Vec<String>, workflow: &WorkflowView) {
    lines.push(workflow.title.to_string());
    if workflow.supports_url {
        let mode = match workflow.mode {
            InputMode::File => "file",
            InputMode::Url => "url",
        };
        lines.push(format!("Input mode: {mode}"));
    }
    match workflow.mode {
        InputMode::File => {
            lines.push(format!("Supported formats: {}", workflow.formats_hint));
            match &workflow.selected_file {
                Some(selected) => lines.push(selected.clone()),
                None => lines.push("No file selected".to_string()),
            }
        }
        InputMode::Url => {
            if workflow.url_text.is_empty() {
                lines.push("URL: (none)".to_string());
            } else {
                lines.push(format!("URL: {}", workflow.url_text));
            }
        }
    }

    match &workflow.status {
        RequestStatus::Loading => lines.push("Processing...".to_string()),
        RequestStatus::Idle if workflow.can_submit => {
            lines.push("Ready, type `analyze`".to_string())
        }
        _ => {}
    }
    if let Some(error) = &workflow.error {
        lines.push(format!("! {error}"));
    }
    if let Some(result) = &workflow.result {
        render_result(lines, result);
    }
}

fn render_result(lines: &mut Vec<String>, result: &ResultView) {
    lines.push(String::new());
    if result.tabs.len() > 1 {
        let tabs: Vec<String> = result
            .tabs
            .iter()
            .enumerate()
            .map(|(index, tab)| {
                if tab.selected {
                    format!("[{}: {}]", index + 1, tab.label)
                } else {
                    format!(" {}: {} ", index + 1, tab.label)
                }
            })
            .collect();
        lines.push(tabs.join(" "));
    }
    match &result.body {
        ResultBody::Conversation(conversation) => render_conversation(lines, conversation),
        ResultBody::Image(image) => render_image(lines, image),
        ResultBody::Summary(summary) => render_summary(lines, summary),
    }
}

fn render_conversation(lines: &mut Vec<String>, conversation: &ConversationView) {
    if !conversation.memory_context.is_empty() {
        lines.push("Previous Context".to_string());
        for entry in &conversation.memory_context {
            lines.push(format!("  {entry}"));
        }
    }
    lines.push("Transcription".to_string());
    lines.push(format!("  {}", conversation.transcription));
    if let Some(header) = &conversation.speaker_header {
        lines.push(header.clone());
        for speaker in &conversation.speakers {
            lines.push(format!("  {} ({})", speaker.label, speaker.segment_count));
            for segment in &speaker.segments {
                lines.push(format!("    {}  {}", segment.time_range, segment.text));
            }
        }
    }
}

fn render_image(lines: &mut Vec<String>, image: &ImageView) {
    if !image.properties.is_empty() {
        lines.push(image.properties.join(" | "));
    }
    lines.extend(image.text.lines().map(str::to_string));
}

fn render_summary(lines: &mut Vec<String>, summary: &SummaryView) {
    if !summary.chips.is_empty() {
        lines.push(summary.chips.join(" | "));
    }
    match &summary.content {
        SummaryContent::Text(text) => lines.extend(text.lines().map(str::to_string)),
        SummaryContent::Entities(categories) => {
            for category in categories {
                lines.push(format!("{}:", category.name));
                for item in &category.items {
                    lines.push(format!("  - {item}"));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use playground_core::{
        update, AnalysisResult, AppState, FileHandle, Msg, Session, Skill, SummaryResult,
        WorkflowMsg,
    };

    use super::*;

    fn signed_in_on(path: &str) -> AppState {
        let state = AppState::new();
        let (state, _) = update(state, Msg::SessionRestored(Session::new("jwt", "alice")));
        let (state, _) = update(state, Msg::Navigate(path.to_string()));
        state
    }

    #[test]
    fn login_screen_shows_usage_and_error() {
        let (state, _) = update(
            AppState::new(),
            Msg::LoginSubmitted {
                username: String::new(),
                password: String::new(),
            },
        );
        let lines = render(&state.view());
        assert_eq!(lines[0], "== AI Playground /login ==");
        assert!(lines.contains(&"! Username and password are required".to_string()));
    }

    #[test]
    fn pending_text_matches_the_form() {
        let (state, effects) = update(
            AppState::new(),
            Msg::LoginSubmitted {
                username: "alice".to_string(),
                password: "pw".to_string(),
            },
        );
        assert_eq!(effects.len(), 1);
        assert!(render(&state.view()).contains(&"Signing in...".to_string()));

        let (state, _) = update(AppState::new(), Msg::Navigate("/register".to_string()));
        let (state, effects) = update(
            state,
            Msg::RegisterSubmitted {
                username: "bob".to_string(),
                email: "bob@example.com".to_string(),
                password: "pw".to_string(),
            },
        );
        assert_eq!(effects.len(), 1);
        let lines = render(&state.view());
        assert_eq!(lines[0], "== AI Playground /register ==");
        assert!(lines.contains(&"Creating account...".to_string()));
        assert!(!lines.contains(&"Signing in...".to_string()));
    }

    #[test]
    fn dashboard_lists_skills_in_order() {
        let lines = render(&signed_in_on("/dashboard").view());
        let titles: Vec<&String> = lines.iter().filter(|line| line.contains("(go /")).collect();
        assert_eq!(titles.len(), 3);
        assert!(titles[0].ends_with("(go /conversation)"));
        assert!(titles[1].ends_with("(go /image)"));
        assert!(titles[2].ends_with("(go /summarize)"));
    }

    #[test]
    fn selected_file_and_ready_hint() {
        let state = signed_in_on("/image");
        let (state, _) = update(
            state,
            Msg::Workflow {
                skill: Skill::Image,
                msg: WorkflowMsg::FileSelected(FileHandle::new(
                    "cat.png",
                    "image/png",
                    vec![0; 1_572_864],
                )),
            },
        );
        let lines = render(&state.view());
        assert!(lines.contains(&"Selected file: cat.png (1.50 MB)".to_string()));
        assert!(lines.contains(&"Ready, type `analyze`".to_string()));
    }

    #[test]
    fn summary_entities_render_as_lists() {
        let state = signed_in_on("/summarize");
        let (state, effects) = update(
            state,
            Msg::Workflow {
                skill: Skill::Summarization,
                msg: WorkflowMsg::ModeSwitched(InputMode::Url),
            },
        );
        assert!(effects.is_empty());
        let (state, _) = update(
            state,
            Msg::Workflow {
                skill: Skill::Summarization,
                msg: WorkflowMsg::UrlEdited("https://example.com".to_string()),
            },
        );
        let (state, _) = update(
            state,
            Msg::Workflow {
                skill: Skill::Summarization,
                msg: WorkflowMsg::AnalyzeClicked,
            },
        );
        let request_id = state.workflow(Skill::Summarization).in_flight().unwrap();
        let result = AnalysisResult::Summary(SummaryResult {
            title: Some("Post".to_string()),
            word_count: Some(1234),
            key_entities: Some("People: Ada\n- Grace".to_string()),
            ..SummaryResult::default()
        });
        let (state, _) = update(
            state,
            Msg::Workflow {
                skill: Skill::Summarization,
                msg: WorkflowMsg::AnalysisFinished {
                    request_id,
                    outcome: Ok(result),
                },
            },
        );
        let (state, _) = update(
            state,
            Msg::Workflow {
                skill: Skill::Summarization,
                msg: WorkflowMsg::PaneSelected(2),
            },
        );

        let lines = render(&state.view());
        assert!(lines.contains(&"Title: Post | Words: 1,234".to_string()));
        let tabs = " 1: Brief Summary   2: Detailed Summary  [3: Key Entities]";
        assert!(lines.contains(&tabs.to_string()));
        assert!(lines.contains(&"People:".to_string()));
        assert!(lines.contains(&"  - Ada".to_string()));
        assert!(lines.contains(&"  - Grace".to_string()));
    }

    #[test]
    fn notifications_are_tagged() {
        assert_eq!(
            format_notification(&Notification::error("Failed to analyze image")),
            "[error] Failed to analyze image"
        );
        assert_eq!(
            format_notification(&Notification::success("Welcome, alice!")),
            "[ok] Welcome, alice!"
        );
    }
}
