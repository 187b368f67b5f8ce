use std::sync::mpsc::{self, RecvTimeoutError, TryRecvError};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use playground_core::{AuthRequest, RequestId, SubmitRequest};
use playground_logging::{pg_debug, pg_error};

use crate::{
    Analyzer, Authenticator, ClientSettings, EngineEvent, ReqwestAnalyzer, ReqwestAuthenticator,
    RequestError, RequestErrorKind,
};

enum EngineCommand {
    Analyze(SubmitRequest),
    Authenticate {
        request_id: RequestId,
        request: AuthRequest,
    },
}

impl EngineCommand {
    /// The completion reported when the command cannot run to the end.
    fn failure_event(&self) -> EngineEvent {
        match self {
            EngineCommand::Analyze(request) => EngineEvent::AnalysisCompleted {
                request_id: request.request_id,
                skill: request.skill,
                result: Err(RequestError::new(
                    RequestErrorKind::Internal,
                    request.skill.failure_fallback(),
                )),
            },
            EngineCommand::Authenticate {
                request_id,
                request,
            } => EngineEvent::AuthCompleted {
                request_id: *request_id,
                result: Err(RequestError::new(
                    RequestErrorKind::Internal,
                    request.failure_fallback(),
                )),
            },
        }
    }

    fn request_id(&self) -> RequestId {
        match self {
            EngineCommand::Analyze(request) => request.request_id,
            EngineCommand::Authenticate { request_id, .. } => *request_id,
        }
    }
}

/// Runs backend calls on a background tokio runtime and hands completions
/// back as `EngineEvent`s. Requests are never cancelled; each one reports
/// exactly once, with an `Internal` error if its task dies.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_tx: mpsc::Sender<EngineEvent>,
    events: EngineEvents,
}

/// Receiving side of the engine. Disconnects once every `EngineHandle` is
/// gone and the engine thread has shut down.
#[derive(Clone)]
pub struct EngineEvents {
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(settings: ClientSettings) -> Result<Self, RequestError> {
        let analyzer = Arc::new(ReqwestAnalyzer::new(settings.clone())?);
        let authenticator = Arc::new(ReqwestAuthenticator::new(settings)?);
        Self::with_clients(analyzer, authenticator)
    }

    pub fn with_clients(
        analyzer: Arc<dyn Analyzer>,
        authenticator: Arc<dyn Authenticator>,
    ) -> Result<Self, RequestError> {
        let runtime = tokio::runtime::Runtime::new().map_err(|err| {
            pg_error!("Failed to start engine runtime: {}", err);
            RequestError::new(
                RequestErrorKind::Internal,
                format!("failed to start engine runtime: {err}"),
            )
        })?;
        let (cmd_tx, cmd_rx) = mpsc::channel::<EngineCommand>();
        let (event_tx, event_rx) = mpsc::channel();

        let worker_tx = event_tx.clone();
        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let analyzer = analyzer.clone();
                let authenticator = authenticator.clone();
                let event_tx = worker_tx.clone();
                runtime.spawn(async move {
                    let request_id = command.request_id();
                    let failure = command.failure_event();
                    let task = tokio::spawn(async move {
                        handle_command(analyzer.as_ref(), authenticator.as_ref(), command).await
                    });
                    let event = match task.await {
                        Ok(event) => event,
                        Err(err) => {
                            pg_error!("Engine task for request {} died: {}", request_id, err);
                            failure
                        }
                    };
                    let _ = event_tx.send(event);
                });
            }
            pg_debug!("Engine command channel closed");
        });

        Ok(Self {
            cmd_tx,
            event_tx,
            events: EngineEvents {
                event_rx: Arc::new(Mutex::new(event_rx)),
            },
        })
    }

    pub fn submit(&self, request: SubmitRequest) {
        self.send(EngineCommand::Analyze(request));
    }

    pub fn authenticate(&self, request_id: RequestId, request: AuthRequest) {
        self.send(EngineCommand::Authenticate {
            request_id,
            request,
        });
    }

    fn send(&self, command: EngineCommand) {
        if let Err(mpsc::SendError(command)) = self.cmd_tx.send(command) {
            pg_error!(
                "Engine is not running, failing request {}",
                command.request_id()
            );
            let _ = self.event_tx.send(command.failure_event());
        }
    }

    /// A receiver that does not keep the engine alive.
    pub fn events(&self) -> EngineEvents {
        self.events.clone()
    }

    pub fn try_recv(&self) -> Result<EngineEvent, TryRecvError> {
        self.events.try_recv()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Result<EngineEvent, RecvTimeoutError> {
        self.events.recv_timeout(timeout)
    }
}

impl EngineEvents {
    pub fn try_recv(&self) -> Result<EngineEvent, TryRecvError> {
        let event_rx = self
            .event_rx
            .lock()
            .map_err(|_| TryRecvError::Disconnected)?;
        event_rx.try_recv()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Result<EngineEvent, RecvTimeoutError> {
        let event_rx = self
            .event_rx
            .lock()
            .map_err(|_| RecvTimeoutError::Disconnected)?;
        event_rx.recv_timeout(timeout)
    }
}

async fn handle_command(
    analyzer: &dyn Analyzer,
    authenticator: &dyn Authenticator,
    command: EngineCommand,
) -> EngineEvent {
    match command {
        EngineCommand::Analyze(request) => {
            let result = analyzer
                .analyze(request.skill, &request.input, &request.access_token)
                .await;
            EngineEvent::AnalysisCompleted {
                request_id: request.request_id,
                skill: request.skill,
                result,
            }
        }
        EngineCommand::Authenticate {
            request_id,
            request,
        } => EngineEvent::AuthCompleted {
            request_id,
            result: authenticator.authenticate(&request).await,
        },
    }
}
