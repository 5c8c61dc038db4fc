//! Excerpt extraction from post bodies

use pulldown_cmark::{Event, Parser as MdParser, Tag, TagEnd};

/// Extract the plain text of the first paragraph of a markdown body.
///
/// Headings, code blocks and lists before the first paragraph are
/// skipped. Inline code is kept, wrapped in backticks. Returns None when
/// the body contains no paragraph.
pub fn first_paragraph(markdown: &str) -> Option<String> {
    let parser = MdParser::new(markdown);
    let mut in_paragraph = false;
    let mut text = String::new();

    for event in parser {
        match event {
            Event::Start(Tag::Paragraph) => {
                in_paragraph = true;
                text.clear();
            }

            Event::End(TagEnd::Paragraph) => {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    return Some(trimmed.to_string());
                }
                in_paragraph = false;
            }

            Event::Text(chunk) => {
                if in_paragraph {
                    text.push_str(&chunk);
                }
            }

            Event::Code(code) => {
                if in_paragraph {
                    text.push('`');
                    text.push_str(&code);
                    text.push('`');
                }
            }

            Event::SoftBreak | Event::HardBreak => {
                if in_paragraph {
                    text.push(' ');
                }
            }

            _ => {}
        }
    }

    None
}
