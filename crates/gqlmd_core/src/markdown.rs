//! Markdown/MDX fragments.

/// Line break.
pub const MARKDOWN_EOL: &str = "\n";
/// Paragraph break.
pub const MARKDOWN_EOP: &str = "\n\n";
/// One indentation unit inside code blocks.
pub const MARKDOWN_CODE_INDENTATION: &str = "  ";

const MAX_HEADING_LEVEL: u8 = 6;

/// A Markdown heading level (`#` to `######`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    /// Section level used when none is configured (`###`).
    pub const SECTION: Self = Self(3);

    /// Creates a heading level, clamped to `1..=6`.
    #[must_use]
    pub const fn new(level: u8) -> Self {
        if level == 0 {
            Self(1)
        } else if level > MAX_HEADING_LEVEL {
            Self(MAX_HEADING_LEVEL)
        } else {
            Self(level)
        }
    }

    /// Returns the numeric level.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns the level one step deeper, saturating at `######`.
    #[must_use]
    pub const fn deeper(self) -> Self {
        Self::new(self.0 + 1)
    }

    /// Returns the heading marker, e.g. `###`.
    #[must_use]
    pub fn marker(self) -> String {
        "#".repeat(usize::from(self.0))
    }
}

impl Default for HeadingLevel {
    fn default() -> Self {
        Self::SECTION
    }
}

/// Renders an inline code span.
#[must_use]
pub fn code_span(text: &str) -> String {
    format!("`{text}`")
}

/// Renders a link.
#[must_use]
pub fn link(label: &str, url: &str) -> String {
    format!("[{label}]({url})")
}

/// Renders a fenced code block.
#[must_use]
pub fn code_block(language: &str, code: &str) -> String {
    format!("```{language}{MARKDOWN_EOL}{code}{MARKDOWN_EOL}```{MARKDOWN_EOL}")
}
