use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use playground_core::Session;
use playground_engine::AtomicFileWriter;
use playground_logging::{pg_error, pg_info, pg_warn};
use serde::{Deserialize, Serialize};

const SESSION_FILENAME: &str = "session.ron";

#[derive(Serialize, Deserialize)]
struct PersistedSession {
    access_token: String,
    username: String,
    saved_utc: String,
}

/// Loads the stored session, if any. Unreadable or incomplete files count as
/// signed out.
pub(crate) fn load_session(session_dir: &Path) -> Option<Session> {
    let path = session_dir.join(SESSION_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return None,
        Err(err) => {
            pg_warn!("Failed to read session from {:?}: {}", path, err);
            return None;
        }
    };

    let persisted: PersistedSession = match ron::from_str(&content) {
        Ok(persisted) => persisted,
        Err(err) => {
            pg_warn!("Failed to parse session from {:?}: {}", path, err);
            return None;
        }
    };

    let session = Session::new(persisted.access_token, persisted.username);
    match &session {
        Some(session) => pg_info!(
            "Loaded session for {} (saved {})",
            session.username(),
            persisted.saved_utc
        ),
        None => pg_warn!("Ignoring incomplete session in {:?}", path),
    }
    session
}

pub(crate) fn save_session(session_dir: &Path, session: &Session) {
    let persisted = PersistedSession {
        access_token: session.access_token().to_string(),
        username: session.username().to_string(),
        saved_utc: Utc::now().to_rfc3339(),
    };

    let pretty = ron::ser::PrettyConfig::new();
    let content = match ron::ser::to_string_pretty(&persisted, pretty) {
        Ok(text) => text,
        Err(err) => {
            pg_error!("Failed to serialize session: {}", err);
            return;
        }
    };

    let writer = AtomicFileWriter::new(PathBuf::from(session_dir));
    match writer.write(SESSION_FILENAME, &content) {
        Ok(path) => pg_info!("Saved session for {} to {:?}", session.username(), path),
        Err(err) => pg_error!("Failed to write session to {:?}: {}", session_dir, err),
    }
}

pub(crate) fn clear_session(session_dir: &Path) {
    let writer = AtomicFileWriter::new(PathBuf::from(session_dir));
    match writer.remove(SESSION_FILENAME) {
        Ok(true) => pg_info!("Cleared stored session"),
        Ok(false) => {}
        Err(err) => pg_error!("Failed to clear session in {:?}: {}", session_dir, err),
    }
}
