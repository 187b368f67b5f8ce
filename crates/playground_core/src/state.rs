use std::collections::BTreeMap;

use crate::view_model::{self, AppViewModel};
use crate::{RequestId, Route, Session, Skill, Workflow};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthStatus {
    #[default]
    Idle,
    Pending(RequestId),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    session: Option<Session>,
    route: Route,
    workflows: BTreeMap<Skill, Workflow>,
    auth_status: AuthStatus,
    auth_error: Option<String>,
    next_request_id: RequestId,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            session: None,
            route: Route::Root.resolve(false),
            workflows: Skill::ALL
                .into_iter()
                .map(|skill| (skill, Workflow::new(skill)))
                .collect(),
            auth_status: AuthStatus::Idle,
            auth_error: None,
            next_request_id: 1,
            dirty: false,
        }
    }

    pub fn view(&self) -> AppViewModel {
        view_model::build(self)
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn workflow(&self, skill: Skill) -> &Workflow {
        // Every skill is inserted in `new`, and entries are never removed.
        &self.workflows[&skill]
    }

    pub fn auth_status(&self) -> &AuthStatus {
        &self.auth_status
    }

    pub fn auth_error(&self) -> Option<&str> {
        self.auth_error.as_deref()
    }

    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn workflow_mut(&mut self, skill: Skill) -> &mut Workflow {
        self.workflows
            .entry(skill)
            .or_insert_with(|| Workflow::new(skill))
    }

    pub(crate) fn allocate_request_id(&mut self) -> RequestId {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Moves to `route` after applying the auth redirects. Leaving a skill
    /// screen discards its workflow state.
    pub(crate) fn navigate(&mut self, route: Route) {
        let resolved = route.resolve(self.session.is_some());
        if resolved == self.route {
            return;
        }
        if let Route::Skill(previous) = self.route {
            self.workflow_mut(previous).reset();
        }
        if !matches!(resolved, Route::Login | Route::Register) {
            self.auth_error = None;
        }
        self.route = resolved;
        self.mark_dirty();
    }

    pub(crate) fn sign_in(&mut self, session: Session) {
        self.session = Some(session);
        self.auth_status = AuthStatus::Idle;
        self.auth_error = None;
        self.navigate(self.route);
        self.mark_dirty();
    }

    pub(crate) fn sign_out(&mut self) {
        self.session = None;
        self.auth_status = AuthStatus::Idle;
        self.auth_error = None;
        for workflow in self.workflows.values_mut() {
            workflow.reset();
        }
        self.navigate(Route::Login);
        self.mark_dirty();
    }

    pub(crate) fn begin_auth(&mut self, request_id: RequestId) {
        self.auth_status = AuthStatus::Pending(request_id);
        self.auth_error = None;
        self.mark_dirty();
    }

    pub(crate) fn fail_auth(&mut self, message: String) {
        self.auth_status = AuthStatus::Idle;
        self.auth_error = Some(message);
        self.mark_dirty();
    }
}
