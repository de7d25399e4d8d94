/// Markers that open a structured legacy changelog line
pub const MARKERS: [char; 4] = ['+', '-', '*', '!'];

/// A commit message as an ordered list of lines.
///
/// Every line keeps its own terminator, so rendering is plain concatenation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Message {
    lines: Vec<String>,
}

impl Message {
    /// Split raw message text into lines, keeping each `\n`
    pub fn parse(text: &str) -> Self {
        Message {
            lines: text.split_inclusive('\n').map(str::to_string).collect(),
        }
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Message {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True when there are no lines or the first one is blank
    pub fn is_blank(&self) -> bool {
        self.first_line().map_or(true, |line| line.trim().is_empty())
    }

    pub fn first_line(&self) -> Option<&str> {
        self.lines.first().map(String::as_str)
    }

    /// True when the first line opens with `+`, `-`, `*` or `!`
    pub fn starts_with_marker(&self) -> bool {
        self.first_line()
            .is_some_and(|line| line.starts_with(MARKERS))
    }

    /// Remove and return the last line, where git-svn puts its footer
    pub fn pop_footer(&mut self) -> Option<String> {
        self.lines.pop()
    }

    /// Drop the last line if it is blank.
    ///
    /// Returns whether a line was removed.
    pub fn pop_trailing_blank(&mut self) -> bool {
        match self.lines.last() {
            Some(line) if line.trim().is_empty() => {
                self.lines.pop();
                true
            }
            _ => false,
        }
    }

    pub fn remove(&mut self, index: usize) -> String {
        self.lines.remove(index)
    }

    /// Swap the whole content for `lines`
    pub fn replace_with<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines = lines.into_iter().map(Into::into).collect();
    }

    pub fn set_first_line(&mut self, line: impl Into<String>) {
        match self.lines.first_mut() {
            Some(first) => *first = line.into(),
            None => self.lines.push(line.into()),
        }
    }

    pub fn prepend(&mut self, line: impl Into<String>) {
        self.lines.insert(0, line.into());
    }

    /// Concatenate the lines back into message text
    pub fn render(&self) -> String {
        self.lines.concat()
    }
}
