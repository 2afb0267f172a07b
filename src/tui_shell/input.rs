/// A single-line edit buffer with a byte-offset cursor and command history.
///
/// Used for the command prompt, the search box on list views, and every text
/// field in the post editor, so cursor movement behaves the same everywhere.
#[derive(Debug, Default)]
pub(super) struct Input {
    pub(super) buf: String,
    pub(super) cursor: usize,
    pub(super) history: Vec<String>,
    pub(super) history_pos: Option<usize>,
}

impl Input {
    pub(super) fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub(super) fn clear(&mut self) {
        self.buf.clear();
        self.cursor = 0;
        self.history_pos = None;
    }

    pub(super) fn set(&mut self, s: String) {
        self.cursor = s.len();
        self.buf = s;
        self.history_pos = None;
    }

    pub(super) fn insert_char(&mut self, c: char) {
        self.buf.insert(self.cursor, c);
        self.cursor += c.len_utf8();
        self.history_pos = None;
    }

    pub(super) fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let prev = prev_boundary(&self.buf, self.cursor);
        self.buf.replace_range(prev..self.cursor, "");
        self.cursor = prev;
        self.history_pos = None;
    }

    pub(super) fn delete(&mut self) {
        if self.cursor >= self.buf.len() {
            return;
        }
        let next = next_boundary(&self.buf, self.cursor);
        self.buf.replace_range(self.cursor..next, "");
        self.history_pos = None;
    }

    pub(super) fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = prev_boundary(&self.buf, self.cursor);
        }
    }

    pub(super) fn move_right(&mut self) {
        if self.cursor < self.buf.len() {
            self.cursor = next_boundary(&self.buf, self.cursor);
        }
    }

    /// Records a submitted line, skipping consecutive duplicates.
    pub(super) fn push_history(&mut self, line: &str) {
        if line.is_empty() {
            return;
        }
        if self.history.last().map(String::as_str) != Some(line) {
            self.history.push(line.to_string());
        }
        self.history_pos = None;
    }

    pub(super) fn history_prev(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let pos = match self.history_pos {
            None => self.history.len() - 1,
            Some(0) => 0,
            Some(p) => p - 1,
        };
        self.history_pos = Some(pos);
        self.buf = self.history[pos].clone();
        self.cursor = self.buf.len();
    }

    pub(super) fn history_next(&mut self) {
        let Some(pos) = self.history_pos else {
            return;
        };
        if pos + 1 < self.history.len() {
            let pos = pos + 1;
            self.history_pos = Some(pos);
            self.buf = self.history[pos].clone();
        } else {
            self.history_pos = None;
            self.buf.clear();
        }
        self.cursor = self.buf.len();
    }
}

fn prev_boundary(s: &str, from: usize) -> usize {
    let mut i = from - 1;
    while i > 0 && !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

fn next_boundary(s: &str, from: usize) -> usize {
    let mut i = from + 1;
    while i < s.len() && !s.is_char_boundary(i) {
        i += 1;
    }
    i
}
