//! Card document parser.
//!
//! A document is a sequence of paragraphs separated by blank lines. Within a
//! paragraph, lines starting with `#` (comments) or `<` (markup) are dropped
//! along with empty lines. What remains must be exactly a `Q: ` line followed
//! by an `A: ` line; any other non-empty remainder is reported as a malformed
//! block rather than failing the parse.

use sf_model::Card;
use tracing::debug;

const FRONT_PREFIX: &str = "Q: ";
const BACK_PREFIX: &str = "A: ";

/// Paragraph padding: Unicode whitespace except NEL (U+0085), plus the
/// byte-order mark.
fn is_padding(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}

/// Cards and malformed blocks, both in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOutput {
    pub cards: Vec<Card>,
    pub errors: Vec<String>,
}

impl ParseOutput {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

pub fn parse(text: &str) -> ParseOutput {
    let text = text.replace("\r\n", "\n");
    let mut output = ParseOutput::default();

    for paragraph in text.split("\n\n").map(|p| p.trim_matches(is_padding)) {
        let lines: Vec<&str> = paragraph
            .split('\n')
            .filter(|line| !line.starts_with('#'))
            .filter(|line| !line.starts_with('<'))
            .filter(|line| !line.is_empty())
            .collect();

        match lines.as_slice() {
            [] => {}
            [front, back] => match (
                front.strip_prefix(FRONT_PREFIX),
                back.strip_prefix(BACK_PREFIX),
            ) {
                (Some(front), Some(back)) => output.cards.push(Card::new(front, back)),
                _ => output.errors.push(lines.join("\n")),
            },
            _ => output.errors.push(lines.join("\n")),
        }
    }

    debug!(
        cards = output.cards.len(),
        errors = output.errors.len(),
        "parsed card document"
    );
    output
}
