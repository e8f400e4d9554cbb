//! Extrahiert die Pfaddaten des ersten `<path>`-Elements aus einem SVG-Dokument.

use crate::core::TrackError;
use anyhow::{Context, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Liefert das `d`-Attribut des ersten `<path>`-Elements.
///
/// Selbstschließende und offene Elemente werden gleich behandelt, ein
/// Namespace-Präfix (`svg:path`) wird ignoriert. Kein Pfad oder ein leeres
/// `d` ergibt [`TrackError::EmptyPath`].
pub fn extract_first_path_data(svg_content: &str) -> Result<String> {
    let mut reader = Reader::from_str(svg_content);
    reader.config_mut().trim_text(true);

    let mut buffer = Vec::new();

    loop {
        match reader.read_event_into(&mut buffer) {
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => {
                if e.local_name().as_ref() == b"path" {
                    let d = path_data_attribute(&reader, e)?;
                    return match d {
                        Some(d) if !d.trim().is_empty() => Ok(d),
                        _ => Err(TrackError::EmptyPath.into()),
                    };
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(e).with_context(|| {
                    format!(
                        "SVG-Parse-Fehler an Position {}",
                        reader.buffer_position()
                    )
                })
            }
            _ => {}
        }
        buffer.clear();
    }

    Err(TrackError::EmptyPath.into())
}

fn path_data_attribute(reader: &Reader<&[u8]>, element: &BytesStart) -> Result<Option<String>> {
    for attr in element.attributes().with_checks(false) {
        let attr = attr.context("Ungültiges Attribut im <path>-Element")?;
        let local = attr.key.local_name();
        let key = reader.decoder().decode(local.as_ref())?;
        if key == "d" {
            let value = attr.unescape_value()?.into_owned();
            return Ok(Some(value));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn erster_pfad_wird_gelesen() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg">
            <g><path id="a" d="M 0 0 L 10 0"/></g>
            <path d="M 5 5 L 6 6"></path>
        </svg>"#;
        assert_eq!(extract_first_path_data(svg).unwrap(), "M 0 0 L 10 0");
    }

    #[test]
    fn offenes_element_mit_namespace() {
        let svg = concat!(
            r#"<svg:svg xmlns:svg="http://www.w3.org/2000/svg">"#,
            r#"<svg:path d="M 1 2 L 3 4"></svg:path></svg:svg>"#
        );
        assert_eq!(extract_first_path_data(svg).unwrap(), "M 1 2 L 3 4");
    }

    #[test]
    fn attribut_mit_praefix_wird_gelesen() {
        let svg = concat!(
            r#"<svg xmlns:svg="http://www.w3.org/2000/svg">"#,
            r#"<path id="p" svg:d="M 2 2 L 4 4"/></svg>"#
        );
        assert_eq!(extract_first_path_data(svg).unwrap(), "M 2 2 L 4 4");
    }

    #[test]
    fn fehlender_pfad_ist_empty_path() {
        let err = extract_first_path_data("<svg><rect width=\"3\"/></svg>").unwrap_err();
        assert_eq!(
            err.downcast_ref::<TrackError>(),
            Some(&TrackError::EmptyPath)
        );
    }

    #[test]
    fn leeres_d_ist_empty_path() {
        let err = extract_first_path_data("<svg><path d=\"  \"/></svg>").unwrap_err();
        assert_eq!(
            err.downcast_ref::<TrackError>(),
            Some(&TrackError::EmptyPath)
        );
    }
}
