use egui::Pos2;

/// One drawing instruction produced by [`smooth`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Pos2),
    QuadTo { ctrl: Pos2, to: Pos2 },
    /// Filled circle, used when there are too few samples for a curve
    Dot { center: Pos2, radius: f32 },
}

/// Turns raw stroke samples into a smooth path.
///
/// Every interior sample becomes the control point of a quadratic curve ending
/// halfway to the next sample, so corners between samples are rounded off. The
/// last curve ends on the final sample itself, so the path never lags behind
/// the pointer. With fewer than three samples there is nothing to smooth and a
/// dot of `line_width` diameter is emitted at the first sample instead.
pub fn smooth(points: &[Pos2], line_width: f32) -> Vec<PathCommand> {
    let n = points.len();
    match n {
        0 => Vec::new(),
        1 | 2 => vec![PathCommand::Dot {
            center: points[0],
            radius: line_width / 2.0,
        }],
        _ => {
            let mut commands = Vec::with_capacity(n);
            commands.push(PathCommand::MoveTo(points[0]));

            for i in 1..n - 2 {
                commands.push(PathCommand::QuadTo {
                    ctrl: points[i],
                    to: midpoint(points[i], points[i + 1]),
                });
            }

            commands.push(PathCommand::QuadTo {
                ctrl: points[n - 2],
                to: points[n - 1],
            });
            commands
        }
    }
}

fn midpoint(a: Pos2, b: Pos2) -> Pos2 {
    Pos2::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

/// Flattens a path into polylines, one per `MoveTo`.
///
/// Quadratic curves are subdivided so no straight piece is longer than
/// `tolerance` pixels. Dots are skipped; the renderer handles them separately.
pub(crate) fn flatten(commands: &[PathCommand], tolerance: f32) -> Vec<Vec<Pos2>> {
    let tolerance = tolerance.max(0.25);
    let mut polylines: Vec<Vec<Pos2>> = Vec::new();
    let mut current: Vec<Pos2> = Vec::new();

    for command in commands {
        match *command {
            PathCommand::MoveTo(p) => {
                if current.len() > 1 {
                    polylines.push(std::mem::take(&mut current));
                }
                current.clear();
                current.push(p);
            }
            PathCommand::QuadTo { ctrl, to } => {
                let Some(&from) = current.last() else {
                    current.push(to);
                    continue;
                };
                // |B'(t)| never exceeds twice the longer control leg
                let max_speed = 2.0 * (ctrl - from).length().max((to - ctrl).length());
                let steps = ((max_speed / tolerance).ceil() as usize).clamp(1, 512);
                for step in 1..=steps {
                    let t = step as f32 / steps as f32;
                    let inv = 1.0 - t;
                    current.push(Pos2::new(
                        inv * inv * from.x + 2.0 * inv * t * ctrl.x + t * t * to.x,
                        inv * inv * from.y + 2.0 * inv * t * ctrl.y + t * t * to.y,
                    ));
                }
            }
            PathCommand::Dot { .. } => {}
        }
    }

    if !current.is_empty() {
        polylines.push(current);
    }
    polylines
}
