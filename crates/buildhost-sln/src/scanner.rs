//! Line-oriented scanner over solution-file text.

/// Walks a solution file line by line, tracking the 1-based position of the
/// most recently consumed line for error reporting.
#[derive(Debug)]
pub struct Scanner<'a> {
    lines: Vec<&'a str>,
    position: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(text: &'a str) -> Self {
        Scanner {
            lines: text.lines().collect(),
            position: 0,
        }
    }

    /// The next line without consuming it.
    pub fn peek_line(&self) -> Option<&'a str> {
        self.lines.get(self.position).copied()
    }

    /// Consumes and returns the next line, or `None` at end of input.
    pub fn next_line(&mut self) -> Option<&'a str> {
        let line = self.lines.get(self.position).copied();
        if line.is_some() {
            self.position += 1;
        }
        line
    }

    /// 1-based number of the most recently consumed line; 0 before the
    /// first call to [`next_line`](Self::next_line).
    pub fn line_number(&self) -> usize {
        self.position
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.lines.len()
    }
}
