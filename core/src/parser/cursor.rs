/// Read position over a borrowed hierarchy text.
///
/// Slices handed out borrow the source, not the cursor, so a group body can be
/// given to a fresh cursor while this one keeps its place.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    /// Everything from the current position to the end.
    pub(crate) fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.rest().trim().is_empty()
    }

    pub(crate) fn skip_whitespace(&mut self) {
        let rest: &str = self.rest();
        self.pos += rest.len() - rest.trim_start().len();
    }

    /// Text up to, not including, the next newline.
    pub(crate) fn current_line(&self) -> &'a str {
        let rest: &'a str = self.rest();
        match rest.find('\n') {
            Some(eol) => &rest[..eol],
            None => rest,
        }
    }

    /// Moves past the current line and its newline.
    pub(crate) fn advance_line(&mut self) {
        let len: usize = self.current_line().len();
        self.advance(len + 1);
    }

    /// Moves forward `n` bytes, stopping at the end of the source.
    pub(crate) fn advance(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.src.len());
    }
}
