//! Curve commands: the derived, serializable form of a path.
//!
//! A path's `d` attribute is a space separated list of [`CurveCommand`]s in
//! absolute coordinates, e.g. `M0,0 Q10,20 30,40 L50,50 Z`.

use std::fmt;

use lyon::math::point;
use lyon::path::Path;
use serde::{Deserialize, Serialize};

use crate::model::Point;

/// One absolute path command.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CurveCommand {
    MoveTo(Point),
    LineTo(Point),
    QuadTo { ctrl: Point, to: Point },
    CubicTo { ctrl1: Point, ctrl2: Point, to: Point },
    Close,
}

struct Coord(Point);

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.0.x, self.0.y)
    }
}

impl fmt::Display for CurveCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            CurveCommand::MoveTo(p) => write!(f, "M{}", Coord(p)),
            CurveCommand::LineTo(p) => write!(f, "L{}", Coord(p)),
            CurveCommand::QuadTo { ctrl, to } => write!(f, "Q{} {}", Coord(ctrl), Coord(to)),
            CurveCommand::CubicTo { ctrl1, ctrl2, to } => {
                write!(f, "C{} {} {}", Coord(ctrl1), Coord(ctrl2), Coord(to))
            }
            CurveCommand::Close => write!(f, "Z"),
        }
    }
}

/// Joins commands into `d` attribute text.
pub fn format_path_data(commands: &[CurveCommand]) -> String {
    commands
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parses `d` attribute text into absolute commands.
///
/// Supports `M L H V Q C Z` in both absolute and relative form. Parsing stops
/// at the first unsupported command or malformed number; everything read up
/// to that point is returned.
pub fn parse_path_data(data: &str) -> Vec<CurveCommand> {
    let tokens = tokenize(data);
    let mut commands = Vec::new();
    let mut current = Point::new(0.0, 0.0);
    let mut subpath_start = current;
    let mut i = 0usize;

    fn is_cmd(s: &str) -> bool {
        s.len() == 1 && s.chars().all(|c| c.is_ascii_alphabetic())
    }

    // Reads `n` numbers starting at `*i`, or None when fewer are available.
    fn numbers<const N: usize>(tokens: &[String], i: &mut usize) -> Option<[f64; N]> {
        let mut out = [0.0; N];
        for slot in out.iter_mut() {
            let token = tokens.get(*i)?;
            if is_cmd(token) {
                return None;
            }
            *slot = token.parse::<f64>().ok()?;
            *i += 1;
        }
        Some(out)
    }

    while i < tokens.len() {
        let token = &tokens[i];
        let Some(cmd) = token.chars().next().filter(|_| is_cmd(token)) else {
            tracing::debug!("Stray token '{}' in path data", token);
            break;
        };
        i += 1;
        let relative = cmd.is_ascii_lowercase();
        let resolve = |base: Point, x: f64, y: f64| {
            if relative {
                Point::new(base.x + x, base.y + y)
            } else {
                Point::new(x, y)
            }
        };

        match cmd.to_ascii_uppercase() {
            'M' => {
                let mut first = true;
                while let Some([x, y]) = numbers::<2>(&tokens, &mut i) {
                    current = resolve(current, x, y);
                    if first {
                        subpath_start = current;
                        commands.push(CurveCommand::MoveTo(current));
                        first = false;
                    } else {
                        commands.push(CurveCommand::LineTo(current));
                    }
                }
                if first {
                    break;
                }
            }
            'L' => {
                while let Some([x, y]) = numbers::<2>(&tokens, &mut i) {
                    current = resolve(current, x, y);
                    commands.push(CurveCommand::LineTo(current));
                }
            }
            'H' => {
                while let Some([x]) = numbers::<1>(&tokens, &mut i) {
                    current.x = if relative { current.x + x } else { x };
                    commands.push(CurveCommand::LineTo(current));
                }
            }
            'V' => {
                while let Some([y]) = numbers::<1>(&tokens, &mut i) {
                    current.y = if relative { current.y + y } else { y };
                    commands.push(CurveCommand::LineTo(current));
                }
            }
            'Q' => {
                while let Some([cx, cy, x, y]) = numbers::<4>(&tokens, &mut i) {
                    let ctrl = resolve(current, cx, cy);
                    current = resolve(current, x, y);
                    commands.push(CurveCommand::QuadTo { ctrl, to: current });
                }
            }
            'C' => {
                while let Some([c1x, c1y, c2x, c2y, x, y]) = numbers::<6>(&tokens, &mut i) {
                    let ctrl1 = resolve(current, c1x, c1y);
                    let ctrl2 = resolve(current, c2x, c2y);
                    current = resolve(current, x, y);
                    commands.push(CurveCommand::CubicTo { ctrl1, ctrl2, to: current });
                }
            }
            'Z' => {
                commands.push(CurveCommand::Close);
                current = subpath_start;
            }
            other => {
                tracing::debug!("Unsupported path command '{}', truncating path data", other);
                break;
            }
        }
    }

    commands
}

fn tokenize(path_data: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current_token = String::new();

    for ch in path_data.chars() {
        match ch {
            c if c.is_ascii_alphabetic() && c != 'e' && c != 'E' => {
                if !current_token.is_empty() {
                    tokens.push(std::mem::take(&mut current_token));
                }
                tokens.push(ch.to_string());
            }
            ' ' | ',' | '\n' | '\r' | '\t' => {
                if !current_token.is_empty() {
                    tokens.push(std::mem::take(&mut current_token));
                }
            }
            '-' | '+' => {
                // Keep the sign of an exponent, otherwise a sign starts a new number.
                if current_token.is_empty() || current_token.ends_with(['e', 'E']) {
                    current_token.push(ch);
                } else {
                    tokens.push(std::mem::take(&mut current_token));
                    current_token.push(ch);
                }
            }
            _ => current_token.push(ch),
        }
    }

    if !current_token.is_empty() {
        tokens.push(current_token);
    }

    tokens
}

/// Builds a lyon path for bounds and hit-testing.
pub fn build_lyon_path(commands: &[CurveCommand]) -> Path {
    let mut builder = Path::builder();
    let mut open = false;
    let mut subpath_start = Point::new(0.0, 0.0);

    let to_lyon = |p: Point| point(p.x as f32, p.y as f32);

    for command in commands {
        // Drawing after a close continues from the closed subpath's start.
        if !open && !matches!(command, CurveCommand::MoveTo(_) | CurveCommand::Close) {
            builder.begin(to_lyon(subpath_start));
            open = true;
        }
        match *command {
            CurveCommand::MoveTo(p) => {
                if open {
                    builder.end(false);
                }
                builder.begin(to_lyon(p));
                subpath_start = p;
                open = true;
            }
            CurveCommand::LineTo(p) => {
                builder.line_to(to_lyon(p));
            }
            CurveCommand::QuadTo { ctrl, to } => {
                builder.quadratic_bezier_to(to_lyon(ctrl), to_lyon(to));
            }
            CurveCommand::CubicTo { ctrl1, ctrl2, to } => {
                builder.cubic_bezier_to(to_lyon(ctrl1), to_lyon(ctrl2), to_lyon(to));
            }
            CurveCommand::Close => {
                if open {
                    builder.end(true);
                    open = false;
                }
            }
        }
    }

    if open {
        builder.end(false);
    }
    builder.build()
}
