//! Playground engine: HTTP clients, file intake, persistence and effect execution.
mod analyze;
mod auth;
mod engine;
mod http;
mod intake;
mod persist;
mod types;

pub use analyze::{Analyzer, ReqwestAnalyzer};
pub use auth::{Authenticator, ReqwestAuthenticator};
pub use engine::{EngineEvents, EngineHandle};
pub use http::ClientSettings;
pub use intake::{load_file, IntakeError};
pub use persist::{ensure_dir, AtomicFileWriter, PersistError};
pub use types::{EngineEvent, RequestError, RequestErrorKind};
