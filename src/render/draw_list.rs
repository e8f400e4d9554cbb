//! Baut die Zeichenliste eines Track-Modells.
//!
//! Reihenfolge (unten nach oben): Fahrbahn, Mittellinie, Trennlinien,
//! weiße Linien, Kerbs, Outline, Ränder, Kurven-Marker, Nummern.

use super::types::DrawCommand;
use crate::core::offset::{offset_polyline, perpendicular};
use crate::core::segmenter::bracket_direction;
use crate::core::{BorderSide, KerbSide, SegmentGroup, TrackModel};
use crate::shared::RenderOptions;

/// Erzeugt alle Zeichenbefehle für das Modell.
pub fn build_draw_list(track: &TrackModel, options: &RenderOptions) -> Vec<DrawCommand> {
    let mut commands = Vec::new();

    push_surface(&mut commands, track, options);
    push_centerline(&mut commands, track, options);
    push_dividers(&mut commands, track, options);
    push_white_lines(&mut commands, track, options);
    push_kerbs(&mut commands, track, options);
    push_outlines(&mut commands, track, options);
    push_borders(&mut commands, track, options);
    push_curve_markers(&mut commands, track, options);
    push_segment_numbers(&mut commands, track, options);

    commands
}

fn push_surface(commands: &mut Vec<DrawCommand>, track: &TrackModel, options: &RenderOptions) {
    let mut points = track.left_border().to_vec();
    points.extend(track.right_border().iter().rev());
    if points.len() >= 3 {
        commands.push(DrawCommand::Polygon {
            points,
            fill: options.surface_color,
        });
    }
}

fn push_centerline(commands: &mut Vec<DrawCommand>, track: &TrackModel, options: &RenderOptions) {
    commands.push(DrawCommand::Polyline {
        points: track.centerline().to_vec(),
        color: options.centerline_color,
        thickness: options.line_thickness,
        dash: Some(options.dash_pattern),
    });
}

fn push_dividers(commands: &mut Vec<DrawCommand>, track: &TrackModel, options: &RenderOptions) {
    for segment in track.segments() {
        if let Some((from, to)) = track.segment_divider(segment.segment_number) {
            commands.push(DrawCommand::Line {
                from,
                to,
                color: options.line_color,
                thickness: options.line_thickness,
            });
        }
    }
}

/// Längenanteile (0..1) eines Laufs von `first` bis `last`.
fn run_ratios(track: &TrackModel, first: u32, last: u32) -> Option<(f32, f32)> {
    let total = track.total_length();
    if total <= 0.0 {
        return None;
    }
    let (start, end) = track.run_span(first, last)?;
    Some((start / total, end / total))
}

fn push_white_lines(commands: &mut Vec<DrawCommand>, track: &TrackModel, options: &RenderOptions) {
    let distance = (track.border_offset() - options.white_line_inset).max(0.0);
    for group in track.white_line_groups() {
        let Some((start, end)) = run_ratios(track, group.first(), group.last()) else {
            continue;
        };
        // Alle Segmente einer Gruppe haben dieselbe Seite
        let Some(&side) = group.sides.first() else {
            continue;
        };
        let points = offset_polyline(track.centerline_slice(start, end), distance, side);
        commands.push(DrawCommand::Polyline {
            points,
            color: options.line_color,
            thickness: options.line_thickness * 2.0,
            dash: None,
        });
    }
}

/// Teilläufe einer Kerb-Gruppe, die eine bestimmte Randseite abdecken.
fn kerb_side_runs(group: &SegmentGroup<KerbSide>, side: BorderSide) -> Vec<(u32, u32)> {
    let mut runs: Vec<(u32, u32)> = Vec::new();
    for (&number, kerb) in group.segment_numbers.iter().zip(&group.sides) {
        if !kerb.covers(side) {
            continue;
        }
        match runs.last_mut() {
            Some((_, last)) if *last + 1 == number => *last = number,
            _ => runs.push((number, number)),
        }
    }
    runs
}

fn push_kerbs(commands: &mut Vec<DrawCommand>, track: &TrackModel, options: &RenderOptions) {
    for group in track.kerb_groups() {
        for side in BorderSide::ALL {
            for (first, last) in kerb_side_runs(&group, side) {
                let Some((start, end)) = run_ratios(track, first, last) else {
                    continue;
                };
                let points = track.border_slice(side, start, end).to_vec();
                push_striped(commands, points, options.kerb_width, options);
            }
        }
    }
}

fn push_outlines(commands: &mut Vec<DrawCommand>, track: &TrackModel, options: &RenderOptions) {
    for group in track.outline_groups() {
        let Some((start, end)) = run_ratios(track, group.first(), group.last()) else {
            continue;
        };
        for side in BorderSide::ALL {
            let points = track.border_slice(side, start, end).to_vec();
            push_striped(commands, points, options.line_thickness * 3.0, options);
        }
    }
}

/// Rot/weißer Streifen: rote Grundlinie mit weißer Strichelung darüber.
fn push_striped(
    commands: &mut Vec<DrawCommand>,
    points: Vec<glam::Vec2>,
    thickness: f32,
    options: &RenderOptions,
) {
    if points.len() < 2 {
        return;
    }
    commands.push(DrawCommand::Polyline {
        points: points.clone(),
        color: options.accent_color,
        thickness,
        dash: None,
    });
    commands.push(DrawCommand::Polyline {
        points,
        color: options.line_color,
        thickness,
        dash: Some(options.dash_pattern),
    });
}

fn push_borders(commands: &mut Vec<DrawCommand>, track: &TrackModel, options: &RenderOptions) {
    for side in BorderSide::ALL {
        commands.push(DrawCommand::Polyline {
            points: track.border(side).to_vec(),
            color: options.line_color,
            thickness: options.line_thickness,
            dash: None,
        });
    }
}

fn push_curve_markers(
    commands: &mut Vec<DrawCommand>,
    track: &TrackModel,
    options: &RenderOptions,
) {
    for segment in track.segments().iter().filter(|s| s.is_curve) {
        let Some(center) = track.segment_center(segment.segment_number) else {
            continue;
        };
        commands.push(DrawCommand::Circle {
            center,
            radius: options.curve_marker_radius,
            color: options.accent_color,
        });
        commands.push(DrawCommand::Label {
            position: center,
            text: segment.speed_limit.to_string(),
            size: options.label_size,
            color: options.line_color,
        });
    }
}

fn push_segment_numbers(
    commands: &mut Vec<DrawCommand>,
    track: &TrackModel,
    options: &RenderOptions,
) {
    let distance = track.border_offset() + options.number_label_offset;
    for segment in track.segments() {
        let Some(center) = track.segment_center(segment.segment_number) else {
            continue;
        };
        let direction = bracket_direction(track.centerline(), segment.centerline_index);
        commands.push(DrawCommand::Label {
            position: center + perpendicular(direction, segment.number_side) * distance,
            text: segment.segment_number.to_string(),
            size: options.label_size,
            color: options.number_color,
        });
    }
}
