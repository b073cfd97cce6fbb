//! Where the mirrored mood ends up on the client.

use mood_types::Category;
use tracing::info;

/// Header line of the examine output.
pub const EXAMINE_HEADER: &str = "How I feel:";

/// Capability to present mood state to the local player.
pub trait DisplaySink {
    /// Show the current category and its event lines.
    fn show_mood(&mut self, category: Category, lines: &[String]);

    /// Print one line to the player's chat.
    fn chat_line(&mut self, line: &str);
}

impl<S: DisplaySink + ?Sized> DisplaySink for &mut S {
    fn show_mood(&mut self, category: Category, lines: &[String]) {
        (**self).show_mood(category, lines);
    }

    fn chat_line(&mut self, line: &str) {
        (**self).chat_line(line);
    }
}

/// HUD mood indicator.
///
/// Caches the most recent category and lines so the player can examine
/// them at any time, and keeps the chat lines it was asked to print.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoodIndicator {
    category: Option<Category>,
    lines: Vec<String>,
    chat: Vec<String>,
}

impl MoodIndicator {
    /// An indicator that has not been updated yet.
    pub const fn new() -> Self {
        Self {
            category: None,
            lines: Vec::new(),
            chat: Vec::new(),
        }
    }

    /// Category currently shown.
    pub const fn category(&self) -> Option<Category> {
        self.category
    }

    /// Sprite to show, indexed worst to best.
    pub fn sprite_index(&self) -> Option<usize> {
        self.category.map(Category::rank)
    }

    /// Cached event lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Chat lines printed so far, oldest first.
    pub fn chat(&self) -> &[String] {
        &self.chat
    }

    /// The examine text: a header followed by one line per active event.
    pub fn examine(&self) -> String {
        let mut text = String::from(EXAMINE_HEADER);
        for line in &self.lines {
            text.push('\n');
            text.push_str(line);
        }
        text
    }
}

impl DisplaySink for MoodIndicator {
    fn show_mood(&mut self, category: Category, lines: &[String]) {
        self.category = Some(category);
        self.lines = lines.to_vec();
    }

    fn chat_line(&mut self, line: &str) {
        info!(line, "Mood chat");
        self.chat.push(line.to_owned());
    }
}
