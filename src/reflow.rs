//! # Text Reflow
//!
//! Word-wraps text to a column width before it is encoded. Output line
//! breaks are the printer's `\r\n`; explicit breaks in the input survive.

/// Line break emitted between reflowed lines.
pub const LINE_BREAK: &str = "\r\n";

/// A text-reflow backend.
pub trait Reflow {
    /// Wrap `text` to at most `width` columns per line.
    fn reflow(&self, text: &str, width: usize) -> String;
}

/// Stock [`Reflow`] backed by `textwrap`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextwrapReflow;

impl TextwrapReflow {
    pub fn new() -> Self {
        Self
    }
}

impl Reflow for TextwrapReflow {
    fn reflow(&self, text: &str, width: usize) -> String {
        if width == 0 {
            return text.to_string();
        }
        let text = text.replace(LINE_BREAK, "\n");
        textwrap::wrap(&text, width).join(LINE_BREAK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_on_word_boundaries() {
        let out = TextwrapReflow.reflow("the quick brown fox", 10);
        assert_eq!(out, "the quick\r\nbrown fox");
    }

    #[test]
    fn test_short_text_untouched() {
        assert_eq!(TextwrapReflow.reflow("short", 32), "short");
    }

    #[test]
    fn test_explicit_breaks_are_kept() {
        let out = TextwrapReflow.reflow("one\ntwo\r\nthree", 32);
        assert_eq!(out, "one\r\ntwo\r\nthree");
    }

    #[test]
    fn test_long_words_are_split() {
        let out = TextwrapReflow.reflow("abcdefghij", 4);
        assert_eq!(out, "abcd\r\nefgh\r\nij");
    }

    #[test]
    fn test_zero_width_disables_reflow() {
        assert_eq!(TextwrapReflow.reflow("a b c", 0), "a b c");
    }
}
