use std::fmt::Write;

use crate::env::Observation;

/// Customize track rendering for CLI visualization.
#[derive(Clone, Copy, Debug)]
pub struct TrackOptions {
    /// Number of character cells the track spans.
    pub width: usize,
    /// Track extent in metres mapped onto the cells.
    pub extent: f64,
    /// Append a numeric readout of the observation after the track.
    pub show_readout: bool,
}

impl Default for TrackOptions {
    fn default() -> Self {
        Self {
            width: 41,
            extent: 2.4,
            show_readout: true,
        }
    }
}

/// Render the cart and pole as a single line of track.
///
/// The cart marker leans with the pole: `|` while the pole is close to
/// upright, `/` or `\` once it tilts past roughly 0.1 rad.
pub fn render_track(observation: &Observation, options: TrackOptions) -> String {
    let width = options.width.max(3);
    let half = options.extent.max(f64::EPSILON);
    let normalized = ((observation.position + half) / (2.0 * half)).clamp(0.0, 1.0);
    let cell = (normalized * (width - 1) as f64).round() as usize;

    let marker = if observation.angle.abs() < 0.1 {
        '|'
    } else if observation.angle > 0.0 {
        '/'
    } else {
        '\\'
    };

    let mut track: Vec<char> = vec!['-'; width];
    track[cell] = marker;

    let mut out = String::with_capacity(width + 48);
    let _ = write!(out, "[{}]", track.iter().collect::<String>());
    if options.show_readout {
        let _ = write!(out, " {observation}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upright_cart_renders_centered_bar() {
        let observation = Observation::new(0.0, 0.0, 0.0, 0.0);
        let text = render_track(&observation, TrackOptions::default());
        assert!(text.starts_with('['));
        let track = &text[1..42];
        assert_eq!(track.chars().nth(20), Some('|'));
    }

    #[test]
    fn tilted_pole_changes_marker() {
        let leaning_right = Observation::new(0.0, 0.0, 0.2, 0.0);
        let text = render_track(
            &leaning_right,
            TrackOptions {
                show_readout: false,
                ..TrackOptions::default()
            },
        );
        assert!(text.contains('/'));
        let leaning_left = Observation::new(0.0, 0.0, -0.2, 0.0);
        let text = render_track(
            &leaning_left,
            TrackOptions {
                show_readout: false,
                ..TrackOptions::default()
            },
        );
        assert!(text.contains('\\'));
    }

    #[test]
    fn cart_position_clamps_to_track_bounds() {
        let far_right = Observation::new(10.0, 0.0, 0.0, 0.0);
        let text = render_track(
            &far_right,
            TrackOptions {
                show_readout: false,
                ..TrackOptions::default()
            },
        );
        assert_eq!(text.chars().nth(41), Some('|'));
    }
}
