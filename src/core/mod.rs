//! Core-Domänentypen: Mittellinie, Ränder, Segmente, Track-Modell.

pub mod arc_length;
pub mod attributes;
pub mod error;
pub mod geometry;
pub mod grouping;
pub mod offset;
/// Segment-Datensatz mit Position und Attributen
pub mod segment;
pub mod segmenter;
pub mod track_model;

pub use arc_length::{ArcLengthCursor, ArcLengthTable};
pub use error::TrackError;
pub use geometry::TrackBounds;
pub use grouping::SegmentGroup;
pub use offset::offset_polyline;
pub use segment::{BorderSide, KerbSide, Segment, TrackPosition};
pub use segmenter::divide_into_segments;
pub use track_model::TrackModel;
