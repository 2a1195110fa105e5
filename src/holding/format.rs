use super::basic::Suit;

/// Rendered in place of the card list when a suit is void.
pub const VOID_MARKER: &str = "--";

/// Directive selecting HTML output; matched case-insensitively.
pub const HTML_DIRECTIVE: char = 'h';

const PLAIN_SEPARATOR: &str = "  ";
const HTML_SEPARATOR: &str = "&nbsp;&nbsp;";

/// Output flavour for holdings and hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatMode {
    #[default]
    Plain,
    Html,
}

impl FormatMode {
    /// Unrecognised directives fall back to plain output rather than failing.
    pub fn from_directive(directive: Option<char>) -> Self {
        match directive {
            Some(c) if c.eq_ignore_ascii_case(&HTML_DIRECTIVE) => FormatMode::Html,
            _ => FormatMode::Plain,
        }
    }

    pub fn pip(self, suit: Suit) -> &'static str {
        match self {
            FormatMode::Plain => suit.pip(),
            FormatMode::Html => suit.pip_html(),
        }
    }

    /// Joins the four suits of a hand.
    pub fn separator(self) -> &'static str {
        match self {
            FormatMode::Plain => PLAIN_SEPARATOR,
            FormatMode::Html => HTML_SEPARATOR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some('h'), FormatMode::Html)]
    #[case(Some('H'), FormatMode::Html)]
    #[case(None, FormatMode::Plain)]
    #[case(Some('p'), FormatMode::Plain)]
    #[case(Some('x'), FormatMode::Plain)]
    #[case(Some(' '), FormatMode::Plain)]
    fn test_from_directive(#[case] directive: Option<char>, #[case] expected: FormatMode) {
        assert_eq!(FormatMode::from_directive(directive), expected);
    }

    #[test]
    fn test_separator() {
        assert_eq!(FormatMode::Plain.separator(), "  ");
        assert_eq!(FormatMode::Html.separator(), "&nbsp;&nbsp;");
    }

    #[test]
    fn test_pip_html_colours_red_suits_only() {
        assert_eq!(FormatMode::Html.pip(Suit::Spades), "&#9824;");
        assert_eq!(FormatMode::Html.pip(Suit::Clubs), "&#9827;");
        assert!(FormatMode::Html.pip(Suit::Hearts).starts_with("<span style="));
        assert!(FormatMode::Html.pip(Suit::Diamonds).contains("&#9830;"));
        assert_eq!(FormatMode::Plain.pip(Suit::Hearts), "\u{2661}");
    }
}
