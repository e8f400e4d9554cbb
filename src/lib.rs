//! Heat Track Editor Library.
//! Rennstrecken-Generierung aus einer SVG-Mittellinie, als Library exportiert
//! für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod storage;
pub mod svg;

pub use app::{AppCommand, AppController, AppIntent, AppState, EditMode, EditorState};
pub use core::{BorderSide, KerbSide, Segment, TrackBounds, TrackError, TrackModel, TrackPosition};
pub use render::{build_draw_list, DrawCommand};
pub use shared::{RenderOptions, TrackOptions};
pub use storage::{track_from_json, track_to_json, SessionFile};
pub use svg::{load_centerline_from_svg, PathGeometry, SvgPath};
