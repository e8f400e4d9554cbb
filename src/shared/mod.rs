//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app`, `render` und der Binary geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;

pub use options::{RenderOptions, TrackOptions};
pub use options::{DEFAULT_SPEED_LIMIT, SAMPLE_COUNT};
