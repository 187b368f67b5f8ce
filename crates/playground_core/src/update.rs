use playground_logging::{pg_debug, pg_info, pg_warn};

use crate::{
    AppState, AuthRequest, AuthStatus, Effect, Msg, Notification, Route, Skill, SubmitRejection,
    WorkflowMsg,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::SessionRestored(Some(session)) => {
            pg_info!("Restored session for {}", session.username());
            state.sign_in(session);
            Vec::new()
        }
        Msg::SessionRestored(None) => Vec::new(),
        Msg::Navigate(path) => {
            state.navigate(Route::parse(&path));
            Vec::new()
        }
        Msg::LoginSubmitted { username, password } => {
            if username.trim().is_empty() || password.is_empty() {
                state.fail_auth("Username and password are required".to_string());
                Vec::new()
            } else {
                start_auth(&mut state, AuthRequest::Login { username, password })
            }
        }
        Msg::RegisterSubmitted {
            username,
            email,
            password,
        } => {
            if username.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
                state.fail_auth("Username, email, and password are required".to_string());
                Vec::new()
            } else {
                start_auth(
                    &mut state,
                    AuthRequest::Register {
                        username,
                        email,
                        password,
                    },
                )
            }
        }
        Msg::AuthFinished {
            request_id,
            outcome,
        } => {
            if *state.auth_status() != AuthStatus::Pending(request_id) {
                pg_warn!("Dropping stale auth response {}", request_id);
                return (state, Vec::new());
            }
            match outcome {
                Ok(session) => {
                    let greeting = format!("Welcome, {}!", session.username());
                    state.sign_in(session.clone());
                    vec![
                        Effect::PersistSession(session),
                        Effect::Notify(Notification::success(greeting)),
                    ]
                }
                Err(message) => {
                    pg_warn!("Auth request {} failed: {}", request_id, message);
                    state.fail_auth(message.clone());
                    vec![Effect::Notify(Notification::error(message))]
                }
            }
        }
        Msg::LogoutClicked => {
            if state.session().is_some() {
                pg_info!("Signing out");
                state.sign_out();
                vec![Effect::ClearSession]
            } else {
                Vec::new()
            }
        }
        Msg::Workflow { skill, msg } => update_workflow(&mut state, skill, msg),
    };

    (state, effects)
}

fn start_auth(state: &mut AppState, request: AuthRequest) -> Vec<Effect> {
    if state.session().is_some() {
        return Vec::new();
    }
    if let AuthStatus::Pending(id) = state.auth_status() {
        pg_warn!("Auth request {} still pending, ignoring new submit", id);
        return Vec::new();
    }
    let request_id = state.allocate_request_id();
    pg_info!("Auth request {} for {}", request_id, request.username());
    state.begin_auth(request_id);
    vec![Effect::Authenticate {
        request_id,
        request,
    }]
}

fn update_workflow(state: &mut AppState, skill: Skill, msg: WorkflowMsg) -> Vec<Effect> {
    // Completions arrive regardless of which screen is showing.
    if let WorkflowMsg::AnalysisFinished {
        request_id,
        outcome,
    } = msg
    {
        return match state.workflow_mut(skill).finish(request_id, outcome) {
            Some(notification) => {
                state.mark_dirty();
                vec![Effect::Notify(notification)]
            }
            None => Vec::new(),
        };
    }

    if state.route() != Route::Skill(skill) {
        pg_debug!(
            "Ignoring {:?} event while on {}",
            skill,
            state.route().path()
        );
        return Vec::new();
    }

    let mut effects = Vec::new();
    let changed = match msg {
        WorkflowMsg::FileSelected(file) => state.workflow_mut(skill).select_file(file).is_ok(),
        WorkflowMsg::UrlEdited(text) => state.workflow_mut(skill).edit_url(text),
        WorkflowMsg::ModeSwitched(mode) => state.workflow_mut(skill).switch_mode(mode),
        WorkflowMsg::PaneSelected(index) => state.workflow_mut(skill).select_pane(index),
        WorkflowMsg::ResetClicked => {
            let workflow = state.workflow_mut(skill);
            if workflow.is_initial() {
                false
            } else {
                workflow.reset();
                true
            }
        }
        WorkflowMsg::AnalyzeClicked => {
            let token = state.session().map(|session| session.access_token().to_string());
            let request_id = state.allocate_request_id();
            match state
                .workflow_mut(skill)
                .begin_submit(token.as_deref(), request_id)
            {
                Ok(request) => {
                    effects.push(Effect::SubmitAnalysis(request));
                    true
                }
                Err(SubmitRejection::NotReady) => false,
                Err(SubmitRejection::EmptyInput(_)) => true,
                Err(SubmitRejection::NotSignedIn(message)) => {
                    effects.push(Effect::Notify(Notification::error(message)));
                    true
                }
            }
        }
        WorkflowMsg::AnalysisFinished { .. } => false,
    };

    if changed {
        state.mark_dirty();
    }
    effects
}
