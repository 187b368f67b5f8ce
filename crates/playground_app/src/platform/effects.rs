use std::path::PathBuf;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use playground_core::{Effect, Msg, Notification, WorkflowMsg};
use playground_engine::{ClientSettings, EngineEvent, EngineHandle, RequestError};
use playground_logging::{pg_debug, pg_info, pg_warn};

use super::persistence;

const EVENT_POLL: Duration = Duration::from_millis(50);

/// Executes `Effect`s: backend calls go to the engine, session changes go to
/// disk, and notifications are handed back for display.
pub struct EffectRunner {
    engine: EngineHandle,
    session_dir: PathBuf,
}

impl EffectRunner {
    pub fn new(
        settings: ClientSettings,
        session_dir: PathBuf,
        msg_tx: mpsc::Sender<Msg>,
    ) -> Result<Self, RequestError> {
        let engine = EngineHandle::new(settings)?;
        Ok(Self::with_engine(engine, session_dir, msg_tx))
    }

    pub fn with_engine(
        engine: EngineHandle,
        session_dir: PathBuf,
        msg_tx: mpsc::Sender<Msg>,
    ) -> Self {
        let runner = Self {
            engine,
            session_dir,
        };
        runner.spawn_event_loop(msg_tx);
        runner
    }

    /// Runs `effects` in order and returns the notifications among them.
    pub fn run(&self, effects: Vec<Effect>) -> Vec<Notification> {
        let mut notifications = Vec::new();
        for effect in effects {
            match effect {
                Effect::SubmitAnalysis(request) => {
                    pg_info!(
                        "SubmitAnalysis request_id={} skill={:?}",
                        request.request_id,
                        request.skill
                    );
                    self.engine.submit(request);
                }
                Effect::Authenticate {
                    request_id,
                    request,
                } => {
                    pg_info!(
                        "Authenticate request_id={} user={}",
                        request_id,
                        request.username()
                    );
                    self.engine.authenticate(request_id, request);
                }
                Effect::PersistSession(session) => {
                    persistence::save_session(&self.session_dir, &session);
                }
                Effect::ClearSession => persistence::clear_session(&self.session_dir),
                Effect::Notify(notification) => notifications.push(notification),
            }
        }
        notifications
    }

    fn spawn_event_loop(&self, msg_tx: mpsc::Sender<Msg>) {
        let events = self.engine.events();
        thread::spawn(move || loop {
            match events.recv_timeout(EVENT_POLL) {
                Ok(event) => {
                    if msg_tx.send(event_to_msg(event)).is_err() {
                        break;
                    }
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => {
                    pg_debug!("Engine event channel closed");
                    break;
                }
            }
        });
    }
}

fn event_to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::AnalysisCompleted {
            request_id,
            skill,
            result,
        } => Msg::Workflow {
            skill,
            msg: WorkflowMsg::AnalysisFinished {
                request_id,
                outcome: result.map_err(|err| {
                    pg_warn!("Request {} failed ({}): {}", request_id, err.kind, err);
                    err.message
                }),
            },
        },
        EngineEvent::AuthCompleted { request_id, result } => Msg::AuthFinished {
            request_id,
            outcome: result.map_err(|err| {
                pg_warn!("Auth request {} failed ({}): {}", request_id, err.kind, err);
                err.message
            }),
        },
    }
}
