//! SVG als Quelle der Mittellinie.
//!
//! Dieses Modul liest den ersten `<path>` eines SVG-Dokuments, parst seine
//! Pfaddaten und tastet die Geometrie in gleichen Bogenlängen-Schritten ab.

pub mod parser;
pub mod path_data;
pub mod sampler;

pub use parser::extract_first_path_data;
pub use path_data::{parse_path_data, PathSegment};
pub use sampler::{load_centerline_from_svg, sample_centerline, PathGeometry, SvgPath};
