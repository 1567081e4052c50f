//! Reply selection.
//!
//! Production picks uniformly at random; tests inject a fixed index.

use rand::Rng;

pub const REPLIES: [&str; 6] = [
    "Sounds fun! Keep the memes rolling.",
    "That is peak family energy right there.",
    "LOL. I am saving that one to my virtual scrapbook.",
    "Certified classic. 10/10 would meme again.",
    "Plot twist: the dog is actually the mastermind.",
    "We need snacks for this conversation. Always snacks.",
];

/// Source of reply indices.
pub trait ReplyPicker: Send {
    /// Index in `0..count`. `count` is never zero.
    fn pick(&mut self, count: usize) -> usize;
}

#[derive(Debug, Default)]
pub struct RandomPicker;

impl ReplyPicker for RandomPicker {
    fn pick(&mut self, count: usize) -> usize {
        rand::thread_rng().gen_range(0..count)
    }
}

/// Always returns the same index (wrapped into range).
#[derive(Debug, Clone, Copy)]
pub struct FixedPicker(pub usize);

impl ReplyPicker for FixedPicker {
    fn pick(&mut self, count: usize) -> usize {
        self.0 % count
    }
}

pub fn pick_reply(picker: &mut dyn ReplyPicker) -> &'static str {
    REPLIES[picker.pick(REPLIES.len()) % REPLIES.len()]
}
