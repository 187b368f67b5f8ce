use playground_core::{
    update, AppState, AuthRequest, AuthStatus, Effect, FileHandle, Msg, Route, ScreenView,
    Session, Skill, WorkflowMsg,
};

fn session() -> Session {
    Session::new("tok", "alice").expect("valid session")
}

fn login(state: AppState, username: &str, password: &str) -> (AppState, Vec<Effect>) {
    update(
        state,
        Msg::LoginSubmitted {
            username: username.to_string(),
            password: password.to_string(),
        },
    )
}

#[test]
fn starts_on_login_screen() {
    playground_logging::initialize_for_tests();
    let state = AppState::new();
    assert_eq!(state.route(), Route::Login);
    assert!(matches!(state.view().screen, ScreenView::Login(_)));
}

#[test]
fn unauthenticated_navigation_to_protected_routes_redirects_to_login() {
    playground_logging::initialize_for_tests();
    let (state, _) = update(AppState::new(), Msg::Navigate("/register".to_string()));
    assert_eq!(state.route(), Route::Register);

    for path in ["/dashboard", "/conversation", "/image", "/summarize", "/"] {
        let (state, _) = update(state.clone(), Msg::Navigate(path.to_string()));
        assert_eq!(state.route(), Route::Login, "path {path}");
    }
}

#[test]
fn restored_session_lands_on_dashboard() {
    playground_logging::initialize_for_tests();
    let (state, effects) = update(AppState::new(), Msg::SessionRestored(Some(session())));
    assert!(effects.is_empty());
    assert_eq!(state.route(), Route::Dashboard);

    let view = state.view();
    assert_eq!(view.username.as_deref(), Some("alice"));
    match view.screen {
        ScreenView::Dashboard(dashboard) => {
            assert!(dashboard.greeting.starts_with("Hello, alice!"));
            let skills: Vec<_> = dashboard.cards.iter().map(|card| card.skill).collect();
            assert_eq!(skills, Skill::ALL.to_vec());
        }
        other => panic!("unexpected screen {other:?}"),
    }

    let (state, _) = update(state, Msg::Navigate("/login".to_string()));
    assert_eq!(state.route(), Route::Dashboard);
}

#[test]
fn missing_session_keeps_login_screen() {
    playground_logging::initialize_for_tests();
    let (state, effects) = update(AppState::new(), Msg::SessionRestored(None));
    assert!(effects.is_empty());
    assert_eq!(state.route(), Route::Login);
}

#[test]
fn login_requires_both_fields() {
    playground_logging::initialize_for_tests();
    let (state, effects) = login(AppState::new(), "alice", "");
    assert!(effects.is_empty());
    assert_eq!(state.auth_error(), Some("Username and password are required"));

    let (state, effects) = update(
        state,
        Msg::RegisterSubmitted {
            username: "alice".to_string(),
            email: " ".to_string(),
            password: "pw".to_string(),
        },
    );
    assert!(effects.is_empty());
    assert_eq!(
        state.auth_error(),
        Some("Username, email, and password are required")
    );
}

#[test]
fn successful_login_persists_session_and_opens_dashboard() {
    playground_logging::initialize_for_tests();
    let (state, effects) = login(AppState::new(), "alice", "pw");
    let request_id = match effects.as_slice() {
        [Effect::Authenticate {
            request_id,
            request: AuthRequest::Login { username, password },
        }] => {
            assert_eq!(username, "alice");
            assert_eq!(password, "pw");
            *request_id
        }
        other => panic!("unexpected effects {other:?}"),
    };
    assert_eq!(*state.auth_status(), AuthStatus::Pending(request_id));

    // Single-flight while pending.
    let (state, effects) = login(state, "alice", "pw");
    assert!(effects.is_empty());

    let (state, effects) = update(
        state,
        Msg::AuthFinished {
            request_id,
            outcome: Ok(session()),
        },
    );
    assert_eq!(state.route(), Route::Dashboard);
    assert_eq!(state.session(), Some(&session()));
    assert!(matches!(effects.first(), Some(Effect::PersistSession(s)) if *s == session()));
    assert!(matches!(effects.get(1), Some(Effect::Notify(_))));
}

#[test]
fn failed_login_shows_error_and_allows_retry() {
    playground_logging::initialize_for_tests();
    let (state, effects) = login(AppState::new(), "alice", "bad");
    let Some(Effect::Authenticate { request_id, .. }) = effects.first() else {
        panic!("expected auth effect");
    };
    let (state, effects) = update(
        state,
        Msg::AuthFinished {
            request_id: *request_id,
            outcome: Err("Invalid credentials".to_string()),
        },
    );
    assert_eq!(state.auth_error(), Some("Invalid credentials"));
    assert_eq!(*state.auth_status(), AuthStatus::Idle);
    assert_eq!(effects.len(), 1);

    let (_state, effects) = login(state, "alice", "good");
    assert_eq!(effects.len(), 1);
}

#[test]
fn stale_auth_response_is_ignored() {
    playground_logging::initialize_for_tests();
    let (state, effects) = update(
        AppState::new(),
        Msg::AuthFinished {
            request_id: 99,
            outcome: Ok(session()),
        },
    );
    assert!(effects.is_empty());
    assert!(state.session().is_none());
}

#[test]
fn logout_clears_session_workflows_and_returns_to_login() {
    playground_logging::initialize_for_tests();
    let (state, _) = update(AppState::new(), Msg::SessionRestored(Some(session())));
    let (state, _) = update(state, Msg::Navigate("/image".to_string()));
    let (state, _) = update(
        state,
        Msg::Workflow {
            skill: Skill::Image,
            msg: WorkflowMsg::FileSelected(FileHandle::new("p.png", "image/png", vec![0])),
        },
    );
    assert!(state.workflow(Skill::Image).input().is_some());

    let (state, effects) = update(state, Msg::LogoutClicked);
    assert_eq!(effects, vec![Effect::ClearSession]);
    assert!(state.session().is_none());
    assert_eq!(state.route(), Route::Login);
    assert!(state.workflow(Skill::Image).is_initial());

    let (_state, effects) = update(state, Msg::LogoutClicked);
    assert!(effects.is_empty());
}

#[test]
fn leaving_a_skill_screen_discards_its_state() {
    playground_logging::initialize_for_tests();
    let (state, _) = update(AppState::new(), Msg::SessionRestored(Some(session())));
    let (state, _) = update(state, Msg::Navigate("/conversation".to_string()));
    let (state, _) = update(
        state,
        Msg::Workflow {
            skill: Skill::Conversation,
            msg: WorkflowMsg::FileSelected(FileHandle::new("a.wav", "audio/wav", vec![0])),
        },
    );
    let (state, _) = update(state, Msg::Navigate("/dashboard".to_string()));
    assert!(state.workflow(Skill::Conversation).is_initial());
}
