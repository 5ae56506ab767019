use unicode_segmentation::UnicodeSegmentation;

use crate::util::unicode::display_width;

/// Single-line editable text with a grapheme-aware cursor.
///
/// `cursor` is a byte offset into `text` and always sits on a grapheme
/// boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    text: String,
    cursor: usize,
}

impl TextField {
    pub fn new() -> Self {
        TextField::default()
    }

    /// A field holding `text` with the cursor at the end
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.len();
        TextField { text, cursor }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Terminal column of the cursor, counted from the start of the text
    pub fn cursor_col(&self) -> usize {
        display_width(&self.text[..self.cursor])
    }

    /// Replace the contents and put the cursor at the end
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Take the contents, leaving the field empty
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Insert text at the cursor. Newlines become spaces.
    pub fn insert_str(&mut self, s: &str) {
        let clean = s.replace(['\n', '\r'], " ");
        self.text.insert_str(self.cursor, &clean);
        self.cursor += clean.len();
    }

    /// Delete the grapheme before the cursor
    pub fn backspace(&mut self) -> bool {
        match self.prev_boundary() {
            Some(start) => {
                self.text.replace_range(start..self.cursor, "");
                self.cursor = start;
                true
            }
            None => false,
        }
    }

    /// Delete the grapheme under the cursor
    pub fn delete(&mut self) -> bool {
        match self.next_boundary() {
            Some(end) => {
                self.text.replace_range(self.cursor..end, "");
                true
            }
            None => false,
        }
    }

    /// Delete from the start of the previous word up to the cursor
    pub fn delete_word_left(&mut self) {
        let start = self.word_left_offset();
        self.text.replace_range(start..self.cursor, "");
        self.cursor = start;
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.cursor = next;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn move_word_left(&mut self) {
        self.cursor = self.word_left_offset();
    }

    pub fn move_word_right(&mut self) {
        self.cursor = self.word_right_offset();
    }

    fn prev_boundary(&self) -> Option<usize> {
        if self.cursor == 0 {
            return None;
        }
        self.text[..self.cursor]
            .grapheme_indices(true)
            .next_back()
            .map(|(i, _)| i)
    }

    fn next_boundary(&self) -> Option<usize> {
        if self.cursor >= self.text.len() {
            return None;
        }
        self.text[self.cursor..]
            .graphemes(true)
            .next()
            .map(|g| self.cursor + g.len())
    }

    fn word_left_offset(&self) -> usize {
        let graphemes: Vec<(usize, &str)> =
            self.text[..self.cursor].grapheme_indices(true).collect();
        let mut idx = graphemes.len();
        // Skip whitespace, then the word itself
        while idx > 0 && is_blank(graphemes[idx - 1].1) {
            idx -= 1;
        }
        while idx > 0 && !is_blank(graphemes[idx - 1].1) {
            idx -= 1;
        }
        graphemes.get(idx).map_or(0, |(i, _)| *i)
    }

    fn word_right_offset(&self) -> usize {
        let mut offset = self.cursor;
        let mut seen_word = false;
        for g in self.text[self.cursor..].graphemes(true) {
            if is_blank(g) {
                if seen_word {
                    break;
                }
            } else {
                seen_word = true;
            }
            offset += g.len();
        }
        offset
    }
}

fn is_blank(grapheme: &str) -> bool {
    grapheme.chars().all(char::is_whitespace)
}
