//! Placeholder emoji shown when the queue is empty.

use rand::seq::SliceRandom;

/// Emoji names drawn from when rendering an empty queue.
pub const PLACEHOLDER_EMOJI: &[&str] = &[
    "unicorn_face",
    "robot_face",
    "stuck_out_tongue_closed_eyes",
    "whale",
    "octopus",
    "open_book",
    "earth_americas",
    "frog",
    "thinking_face",
    "blowfish",
    "bento",
    "balloon",
    "dancers",
    "guitar",
    "sunflower",
    "lion_face",
    "fire",
    "elephant",
    "hatched_chick",
    "dog",
    "spider_web",
    "eyes",
];

/// Chooses the placeholder emoji for an empty queue rendering.
pub trait PlaceholderPicker {
    /// Returns one entry of `palette`.
    fn pick<'a>(&self, palette: &[&'a str]) -> &'a str;
}

impl<F> PlaceholderPicker for F
where
    F: Fn(&[&str]) -> usize,
{
    fn pick<'a>(&self, palette: &[&'a str]) -> &'a str {
        palette
            .get(self(palette))
            .or_else(|| palette.first())
            .copied()
            .unwrap_or_default()
    }
}

/// Picks uniformly at random using the thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPlaceholder;

impl PlaceholderPicker for RandomPlaceholder {
    fn pick<'a>(&self, palette: &[&'a str]) -> &'a str {
        palette
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or_default()
    }
}
