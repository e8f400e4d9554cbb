//! JSON-Persistenz für Track-Modelle und die letzte Sitzung.

pub mod json;
pub mod session;

pub use json::{track_from_json, track_to_json};
pub use session::{load_session, save_session, SessionFile, SESSION_FILE_NAME};
