//! Parser für SVG-Pfaddaten (`d`-Attribut).
//!
//! Unterstützt absolute und relative `M L H V C S Q T Z`. Elliptische Bögen
//! (`A`) werden als Gerade zum Endpunkt genähert. Nur der erste Teilpfad wird
//! verwendet: ein weiteres `M` nach gezeichneten Stücken beendet das Parsen.

use crate::core::TrackError;
use glam::Vec2;
use regex::Regex;
use std::sync::LazyLock;

/// Geometrisches Stück eines Pfads in absoluten Koordinaten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    /// Gerade
    Line { from: Vec2, to: Vec2 },
    /// Quadratische Bézierkurve
    Quad { from: Vec2, ctrl: Vec2, to: Vec2 },
    /// Kubische Bézierkurve
    Cubic {
        from: Vec2,
        ctrl1: Vec2,
        ctrl2: Vec2,
        to: Vec2,
    },
}

impl PathSegment {
    /// Startpunkt des Stücks
    pub fn start(&self) -> Vec2 {
        match *self {
            PathSegment::Line { from, .. }
            | PathSegment::Quad { from, .. }
            | PathSegment::Cubic { from, .. } => from,
        }
    }

    /// Endpunkt des Stücks
    pub fn end(&self) -> Vec2 {
        match *self {
            PathSegment::Line { to, .. }
            | PathSegment::Quad { to, .. }
            | PathSegment::Cubic { to, .. } => to,
        }
    }

    /// Punkt beim Kurvenparameter `t` ∈ [0, 1].
    pub fn point_at(&self, t: f32) -> Vec2 {
        match *self {
            PathSegment::Line { from, to } => from.lerp(to, t),
            PathSegment::Quad { from, ctrl, to } => {
                let u = 1.0 - t;
                from * (u * u) + ctrl * (2.0 * u * t) + to * (t * t)
            }
            PathSegment::Cubic {
                from,
                ctrl1,
                ctrl2,
                to,
            } => {
                let u = 1.0 - t;
                from * (u * u * u)
                    + ctrl1 * (3.0 * u * u * t)
                    + ctrl2 * (3.0 * u * t * t)
                    + to * (t * t * t)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Command(char),
    Number(f32),
}

/// Buchstabe oder Zahl (auch kompakt wie `1.5.5` oder `10-5`).
///
/// Alle Buchstaben werden als Befehl gelesen, unbekannte lehnt der Parser ab.
const TOKEN_PATTERN: &str = r"[-+]?(?:\d+\.?\d*|\.\d+)(?:[eE][-+]?\d+)?|[A-Za-z]";

static TOKEN_RE: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(TOKEN_PATTERN));

fn tokenize(d: &str) -> Result<Vec<Token>, TrackError> {
    let token_re = TOKEN_RE
        .as_ref()
        .map_err(|e| TrackError::invalid(format!("Pfad-Tokenizer: {e}")))?;
    let mut tokens = Vec::new();
    for m in token_re.find_iter(d) {
        let text = m.as_str();
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => tokens.push(Token::Command(c)),
            _ => {
                let value: f32 = text
                    .parse()
                    .map_err(|_| TrackError::invalid(format!("Zahl '{text}' im Pfad ungültig")))?;
                tokens.push(Token::Number(value));
            }
        }
    }
    Ok(tokens)
}

/// Liest Zahlen-Tokens hinter einem Befehl.
struct TokenStream {
    tokens: Vec<Token>,
    pos: usize,
}

impl TokenStream {
    fn next_command(&mut self) -> Option<char> {
        match self.tokens.get(self.pos) {
            Some(Token::Command(c)) => {
                self.pos += 1;
                Some(*c)
            }
            _ => None,
        }
    }

    fn has_number(&self) -> bool {
        matches!(self.tokens.get(self.pos), Some(Token::Number(_)))
    }

    fn number(&mut self, command: char) -> Result<f32, TrackError> {
        match self.tokens.get(self.pos) {
            Some(Token::Number(v)) => {
                self.pos += 1;
                Ok(*v)
            }
            _ => Err(TrackError::invalid(format!(
                "Befehl '{command}' erwartet weitere Zahlen"
            ))),
        }
    }

    fn point(&mut self, command: char) -> Result<Vec2, TrackError> {
        Ok(Vec2::new(self.number(command)?, self.number(command)?))
    }

    fn is_done(&self) -> bool {
        self.pos >= self.tokens.len()
    }
}

/// Parst das `d`-Attribut in geometrische Stücke (nur erster Teilpfad).
///
/// Ein leerer Pfad liefert eine leere Liste; syntaktische Fehler (Zahlen
/// ohne Befehl, fehlende Koordinaten, unbekannter Befehl) `InvalidInput`.
pub fn parse_path_data(d: &str) -> Result<Vec<PathSegment>, TrackError> {
    let mut stream = TokenStream {
        tokens: tokenize(d)?,
        pos: 0,
    };
    let mut segments = Vec::new();

    let mut current = Vec2::ZERO;
    let mut subpath_start = Vec2::ZERO;
    // Letzter Kontrollpunkt für die Spiegelung bei S/T
    let mut last_cubic_ctrl: Option<Vec2> = None;
    let mut last_quad_ctrl: Option<Vec2> = None;
    let mut started = false;

    while !stream.is_done() {
        let Some(command) = stream.next_command() else {
            return Err(TrackError::invalid("Pfaddaten beginnen nicht mit einem Befehl"));
        };
        let relative = command.is_ascii_lowercase();
        let base = |current: Vec2| if relative { current } else { Vec2::ZERO };

        match command.to_ascii_uppercase() {
            'M' => {
                if started && !segments.is_empty() {
                    log::debug!("Weiterer Teilpfad ignoriert");
                    break;
                }
                current = base(current) + stream.point(command)?;
                subpath_start = current;
                started = true;
                // Weitere Koordinatenpaare nach M sind implizite Linien
                while stream.has_number() {
                    let to = base(current) + stream.point(command)?;
                    segments.push(PathSegment::Line { from: current, to });
                    current = to;
                }
                last_cubic_ctrl = None;
                last_quad_ctrl = None;
            }
            'Z' => {
                if current != subpath_start {
                    segments.push(PathSegment::Line {
                        from: current,
                        to: subpath_start,
                    });
                }
                current = subpath_start;
                last_cubic_ctrl = None;
                last_quad_ctrl = None;
            }
            other => {
                if !started {
                    return Err(TrackError::invalid(format!(
                        "Befehl '{command}' vor dem ersten M"
                    )));
                }
                // Befehle wiederholen sich, solange Zahlen folgen
                loop {
                    let from = current;
                    let segment = match other {
                        'L' => PathSegment::Line {
                            from,
                            to: base(from) + stream.point(command)?,
                        },
                        'H' => {
                            let x = stream.number(command)?;
                            let x = if relative { from.x + x } else { x };
                            PathSegment::Line {
                                from,
                                to: Vec2::new(x, from.y),
                            }
                        }
                        'V' => {
                            let y = stream.number(command)?;
                            let y = if relative { from.y + y } else { y };
                            PathSegment::Line {
                                from,
                                to: Vec2::new(from.x, y),
                            }
                        }
                        'C' => PathSegment::Cubic {
                            from,
                            ctrl1: base(from) + stream.point(command)?,
                            ctrl2: base(from) + stream.point(command)?,
                            to: base(from) + stream.point(command)?,
                        },
                        'S' => {
                            let ctrl1 = last_cubic_ctrl.map_or(from, |c| from * 2.0 - c);
                            PathSegment::Cubic {
                                from,
                                ctrl1,
                                ctrl2: base(from) + stream.point(command)?,
                                to: base(from) + stream.point(command)?,
                            }
                        }
                        'Q' => PathSegment::Quad {
                            from,
                            ctrl: base(from) + stream.point(command)?,
                            to: base(from) + stream.point(command)?,
                        },
                        'T' => {
                            let ctrl = last_quad_ctrl.map_or(from, |c| from * 2.0 - c);
                            PathSegment::Quad {
                                from,
                                ctrl,
                                to: base(from) + stream.point(command)?,
                            }
                        }
                        'A' => {
                            // rx ry rotation large-arc sweep x y
                            for _ in 0..5 {
                                stream.number(command)?;
                            }
                            let to = base(from) + stream.point(command)?;
                            log::warn!("Bogen-Befehl '{command}' wird als Gerade genähert");
                            PathSegment::Line { from, to }
                        }
                        _ => {
                            return Err(TrackError::invalid(format!(
                                "Unbekannter Pfad-Befehl '{command}'"
                            )))
                        }
                    };

                    (last_cubic_ctrl, last_quad_ctrl) = match segment {
                        PathSegment::Cubic { ctrl2, .. } => (Some(ctrl2), None),
                        PathSegment::Quad { ctrl, .. } => (None, Some(ctrl)),
                        PathSegment::Line { .. } => (None, None),
                    };
                    current = segment.end();
                    segments.push(segment);

                    if !stream.has_number() {
                        break;
                    }
                }
            }
        }
    }

    Ok(segments)
}
