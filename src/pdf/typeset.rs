//! Typesets the markup tree onto genpdf elements.
//!
//! Screen-only nodes (decor, controls) are skipped; everything else maps to
//! styled paragraphs. Each [`TextRole`] carries typeset defaults that
//! individual spans may override.

use genpdf::elements::{Break, Paragraph};
use genpdf::error::Error;
use genpdf::style::{Color, Style, StyledString};
use genpdf::{Alignment, Document, SimplePageDecorator, Size};

use crate::markup::{Block, BlockRole, Chip, Node, Span, Text, TextRole, Weight};
use crate::theme::Tone;

use super::{fonts, mm_from_f64};

/// Margin applied on every side of the captured card.
pub(crate) const CARD_MARGIN_MM: f64 = 12.0;

const CHIP_FONT_SIZE: u8 = 9;
const CONTACT_SEPARATOR: &str = "  •  ";
const CHIP_SEPARATOR: &str = "   ";

/// Typeset defaults of a text role, applied before span overrides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoleStyle {
    pub size: u8,
    pub tone: Tone,
    pub weight: Weight,
    pub centered: bool,
}

/// Returns the typeset defaults of `role`.
pub fn role_style(role: TextRole) -> RoleStyle {
    use TextRole::*;
    match role {
        Title => RoleStyle { size: 28, tone: Tone::Cyan, weight: Weight::Bold, centered: true },
        Headline => {
            RoleStyle { size: 14, tone: Tone::CyanSoft, weight: Weight::Regular, centered: true }
        }
        SectionHeading => {
            RoleStyle { size: 16, tone: Tone::Cyan, weight: Weight::Bold, centered: false }
        }
        EntryTitle => {
            RoleStyle { size: 13, tone: Tone::CyanSoft, weight: Weight::Bold, centered: false }
        }
        Organization => {
            RoleStyle { size: 11, tone: Tone::Emerald, weight: Weight::Regular, centered: false }
        }
        DateRange => {
            RoleStyle { size: 9, tone: Tone::Emerald, weight: Weight::Regular, centered: false }
        }
        Meta => RoleStyle { size: 9, tone: Tone::Muted, weight: Weight::Regular, centered: false },
        Body => RoleStyle { size: 10, tone: Tone::Body, weight: Weight::Regular, centered: false },
        Label => {
            RoleStyle { size: 9, tone: Tone::Emerald, weight: Weight::Semibold, centered: false }
        }
        Caption => RoleStyle { size: 9, tone: Tone::Muted, weight: Weight::Regular, centered: true },
        Footer => RoleStyle { size: 8, tone: Tone::Faint, weight: Weight::Regular, centered: true },
    }
}

fn tone_color(tone: Tone) -> Color {
    let (r, g, b) = tone.rgb();
    Color::Rgb(r, g, b)
}

/// Resolves the final style of a span against its role defaults. A span
/// weight of `Regular` means "inherit".
pub(crate) fn span_style(span: &Span, defaults: RoleStyle) -> Style {
    let mut style = Style::new();
    style.set_font_size(defaults.size);
    style.set_color(tone_color(span.tone().unwrap_or(defaults.tone)));
    let weight = match span.weight() {
        Weight::Regular => defaults.weight,
        explicit => explicit,
    };
    if weight != Weight::Regular {
        style.set_bold();
    }
    style
}

fn paragraph(text: &Text) -> Paragraph {
    let defaults = role_style(text.role());
    let mut paragraph = Paragraph::default();
    for span in text.spans() {
        paragraph.push(StyledString::new(span.text().to_owned(), span_style(span, defaults)));
    }
    if defaults.centered {
        paragraph.set_alignment(Alignment::Center);
    }
    paragraph
}

fn contact_line(children: &[Node]) -> Paragraph {
    let defaults = role_style(TextRole::Meta);
    let mut separator_style = Style::new();
    separator_style.set_font_size(defaults.size);
    separator_style.set_color(tone_color(defaults.tone));

    let mut paragraph = Paragraph::default();
    let mut first = true;
    for child in children {
        if let Node::Text(text) = child {
            if !first {
                paragraph.push(StyledString::new(CONTACT_SEPARATOR.to_owned(), separator_style));
            }
            for span in text.spans() {
                paragraph
                    .push(StyledString::new(span.text().to_owned(), span_style(span, defaults)));
            }
            first = false;
        }
    }
    paragraph.set_alignment(Alignment::Center);
    paragraph
}

fn chip_string(chip: &Chip) -> StyledString {
    let mut style = Style::new();
    style.set_font_size(CHIP_FONT_SIZE);
    style.set_color(tone_color(chip.palette().label_tone()));
    StyledString::new(format!("[{}]", chip.label()), style)
}

fn chip_line(children: &[Node]) -> Paragraph {
    let mut separator_style = Style::new();
    separator_style.set_font_size(CHIP_FONT_SIZE);

    let mut paragraph = Paragraph::default();
    let mut first = true;
    for child in children {
        if let Node::Chip(chip) = child {
            if !first {
                paragraph.push(StyledString::new(CHIP_SEPARATOR.to_owned(), separator_style));
            }
            paragraph.push(chip_string(chip));
            first = false;
        }
    }
    paragraph
}

fn push_children(document: &mut Document, block: &Block) {
    for child in block.children() {
        push_node(document, child);
    }
}

fn push_block(document: &mut Document, block: &Block) {
    match block.role() {
        BlockRole::ContactRow => document.push(contact_line(block.children())),
        BlockRole::TagRow => {
            document.push(Break::new(0.5));
            document.push(chip_line(block.children()));
        }
        BlockRole::Section(_) => {
            document.push(Break::new(1.0));
            push_children(document, block);
        }
        BlockRole::Entry(_) => {
            push_children(document, block);
            document.push(Break::new(1.0));
        }
        _ => push_children(document, block),
    }
}

fn push_node(document: &mut Document, node: &Node) {
    match node {
        Node::Block(block) => push_block(document, block),
        Node::Text(text) => document.push(paragraph(text)),
        Node::Chip(chip) => {
            let mut paragraph = Paragraph::default();
            paragraph.push(chip_string(chip));
            document.push(paragraph);
        }
        Node::Control(_) | Node::Decor(_) => {}
    }
}

/// Typesets `card` onto a single page of the given size.
///
/// The page is deliberately taller than the content; the capture stage trims
/// the unused remainder after rasterising.
pub fn typeset_card(card: &Node, width_mm: f64, height_mm: f64) -> Result<Document, Error> {
    let family = fonts::default_font_family()?;
    let mut document = Document::new(family);
    document.set_paper_size(Size::new(mm_from_f64(width_mm), mm_from_f64(height_mm)));
    let mut decorator = SimplePageDecorator::new();
    decorator.set_margins(mm_from_f64(CARD_MARGIN_MM));
    document.set_page_decorator(decorator);
    push_node(&mut document, card);
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_is_large_centered_and_bold() {
        let style = role_style(TextRole::Title);
        assert_eq!(style.size, 28);
        assert_eq!(style.tone, Tone::Cyan);
        assert_eq!(style.weight, Weight::Bold);
        assert!(style.centered);
    }

    #[test]
    fn body_is_left_aligned_regular() {
        let style = role_style(TextRole::Body);
        assert_eq!(style.size, 10);
        assert_eq!(style.weight, Weight::Regular);
        assert!(!style.centered);
    }

    #[test]
    fn span_tone_overrides_role_tone() {
        let span = Span::new("automation").toned(Tone::Emerald);
        let style = span_style(&span, role_style(TextRole::Body));
        let (r, g, b) = Tone::Emerald.rgb();
        assert_eq!(style.color(), Some(Color::Rgb(r, g, b)));
    }

    #[test]
    fn semibold_span_renders_bold() {
        let span = Span::new("Results-oriented").semibold();
        let style = span_style(&span, role_style(TextRole::Body));
        assert!(style.is_bold());
    }

    #[test]
    fn plain_span_inherits_role_weight() {
        let span = Span::new("Work Experience");
        let style = span_style(&span, role_style(TextRole::SectionHeading));
        assert!(style.is_bold());
    }
}
