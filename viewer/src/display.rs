//! The one piece of mutable display state: the rendered object's color.

use rand::Rng;
use winit::keyboard::Key;

/// Initial object color (light gray).
pub const INITIAL_COLOR: [f32; 3] = [0.7, 0.7, 0.7];

/// Window background color (dark gray).
pub const BACKGROUND_COLOR: [f64; 3] = [0.1, 0.1, 0.1];

/// Mutable display attributes of the rendered object.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayState {
    /// RGB color, each channel in [0, 1].
    pub color: [f32; 3],
}

impl Default for DisplayState {
    fn default() -> Self {
        Self { color: INITIAL_COLOR }
    }
}

impl DisplayState {
    /// Reacts to a key press.
    ///
    /// Pressing `c` (case-insensitive) assigns a new color with three
    /// independent uniform channels in [0, 1) and returns `true` so the
    /// caller can request a redraw. Every other key leaves the state
    /// untouched and returns `false`.
    pub fn handle_key<R: Rng>(&mut self, key: &Key, rng: &mut R) -> bool {
        match key {
            Key::Character(c) if c.eq_ignore_ascii_case("c") => {
                self.color = [rng.gen::<f32>(), rng.gen::<f32>(), rng.gen::<f32>()];
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use winit::keyboard::{NamedKey, SmolStr};

    fn ch(s: &str) -> Key {
        Key::Character(SmolStr::new(s))
    }

    #[test]
    fn ignores_other_keys() {
        let mut state = DisplayState::default();
        let mut rng = StdRng::seed_from_u64(1);

        for key in [ch("x"), ch("b"), ch("1"), Key::Named(NamedKey::Space)] {
            assert!(!state.handle_key(&key, &mut rng));
            assert_eq!(state.color, INITIAL_COLOR);
        }
    }

    #[test]
    fn c_assigns_channels_in_unit_interval() {
        let mut state = DisplayState::default();
        let mut rng = StdRng::seed_from_u64(2);

        assert!(state.handle_key(&ch("c"), &mut rng));
        for channel in state.color {
            assert!((0.0..1.0).contains(&channel));
        }
    }

    #[test]
    fn uppercase_c_also_triggers() {
        let mut state = DisplayState::default();
        let mut rng = StdRng::seed_from_u64(3);

        assert!(state.handle_key(&ch("C"), &mut rng));
        assert_ne!(state.color, INITIAL_COLOR);
    }

    #[test]
    fn successive_presses_produce_distinct_colors() {
        let mut state = DisplayState::default();
        let mut rng = StdRng::seed_from_u64(4);

        state.handle_key(&ch("c"), &mut rng);
        let first = state.color;
        state.handle_key(&ch("c"), &mut rng);
        let second = state.color;

        assert_ne!(first, INITIAL_COLOR);
        assert_ne!(second, INITIAL_COLOR);
        assert_ne!(first, second);
    }

    #[test]
    fn end_to_end_key_sequence() {
        let mut state = DisplayState::default();
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(state.color, [0.7, 0.7, 0.7]);

        assert!(!state.handle_key(&ch("x"), &mut rng));
        assert_eq!(state.color, [0.7, 0.7, 0.7]);

        assert!(state.handle_key(&ch("c"), &mut rng));
        assert!(state.color.iter().all(|c| (0.0..1.0).contains(c)));
        assert!(state.color.iter().any(|c| (c - 0.7).abs() > f32::EPSILON));
    }
}
