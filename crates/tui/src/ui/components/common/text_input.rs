//! UTF-8 safe text input state with cursor management.
//!
//! Backs the content panel's free-text field. The input is uncontrolled: it
//! keeps its own buffer and never reports changes to the shell.

use unicode_width::UnicodeWidthStr;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextInputState {
    /// The underlying text buffer
    input: String,
    /// Cursor byte index into `input` (always on a UTF-8 boundary)
    cursor: usize,
}

impl TextInputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }
    #[cfg(test)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[cfg(test)]
    pub fn set_input<S: Into<String>>(&mut self, s: S) {
        self.input = s.into();
        self.cursor = self.input.len();
    }

    /// Clamps to the buffer and snaps back to the previous char boundary.
    #[cfg(test)]
    pub fn set_cursor(&mut self, cursor: usize) {
        let mut cursor = cursor.min(self.input.len());
        while !self.input.is_char_boundary(cursor) {
            cursor -= 1;
        }
        self.cursor = cursor;
    }

    /// Display columns between the start of the buffer and the cursor.
    pub fn cursor_columns(&self) -> u16 {
        self.input[..self.cursor].width() as u16
    }

    /// Move cursor one Unicode scalar to the left.
    pub fn move_left(&mut self) {
        if let Some(prev) = self.input[..self.cursor].chars().next_back() {
            self.cursor -= prev.len_utf8();
        }
    }

    /// Move cursor one Unicode scalar to the right.
    pub fn move_right(&mut self) {
        if let Some(next) = self.input[self.cursor..].chars().next() {
            self.cursor += next.len_utf8();
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.input.len();
    }

    /// Insert a char at the cursor.
    pub fn insert_char(&mut self, c: char) {
        self.input.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Backspace the char immediately before the cursor.
    pub fn backspace(&mut self) {
        if let Some(prev) = self.input[..self.cursor].chars().next_back() {
            let start = self.cursor - prev.len_utf8();
            self.input.drain(start..self.cursor);
            self.cursor = start;
        }
    }

    /// Delete the char under the cursor.
    pub fn delete(&mut self) {
        if let Some(next) = self.input[self.cursor..].chars().next() {
            let end = self.cursor + next.len_utf8();
            self.input.drain(self.cursor..end);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_move_insert_backspace() {
        let mut st = TextInputState::new();
        st.set_input("h🙂llo"); // emoji is 4 bytes
        st.set_cursor(1); // between h and 🙂
        st.insert_char('e');
        assert_eq!(st.input(), "he🙂llo");
        st.move_right(); // step over 🙂
        st.backspace(); // delete 🙂
        assert_eq!(st.input(), "hello");
        st.move_left();
        st.backspace();
        assert_eq!(st.input(), "ello");
    }

    #[test]
    fn delete_home_end() {
        let mut st = TextInputState::new();
        st.set_input("abc");
        st.move_home();
        st.delete();
        assert_eq!(st.input(), "bc");
        assert_eq!(st.cursor(), 0);
        st.move_end();
        st.delete();
        assert_eq!(st.input(), "bc");
        assert_eq!(st.cursor(), 2);
    }

    #[test]
    fn set_cursor_snaps_to_char_boundary() {
        let mut st = TextInputState::new();
        st.set_input("é!");
        st.set_cursor(1); // inside the two-byte é
        assert_eq!(st.cursor(), 0);
        st.set_cursor(99);
        assert_eq!(st.cursor(), 3);
    }

    #[test]
    fn cursor_columns_count_wide_glyphs() {
        let mut st = TextInputState::new();
        st.set_input("日本");
        assert_eq!(st.cursor_columns(), 4);
        st.move_left();
        assert_eq!(st.cursor_columns(), 2);
    }
}
