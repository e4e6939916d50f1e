//! Typed markup tree consumed by the rendering host.
//!
//! The page is expressed as a tree of [`Node`] values: semantic block
//! containers, styled text runs, pill-shaped chips, interactive controls and
//! purely decorative elements.  The tree carries semantic roles and colour
//! tones rather than concrete box-model styling, leaving layout decisions to
//! the host.  The PDF typesetter consumes the same tree, so everything that
//! should appear in the exported document must be representable here.

use crate::theme::Tone;

/// The accent colour assigned to decorated blocks and chips.
///
/// Entries and chip rows alternate between the two accents; decor elements
/// pick one explicitly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    Cyan,
    Emerald,
}

impl Accent {
    /// Primary tone of this accent.
    pub fn tone(self) -> Tone {
        match self {
            Accent::Cyan => Tone::Cyan,
            Accent::Emerald => Tone::Emerald,
        }
    }

    /// Lighter companion tone used for chip labels.
    pub fn soft_tone(self) -> Tone {
        match self {
            Accent::Cyan => Tone::CyanSoft,
            Accent::Emerald => Tone::EmeraldSoft,
        }
    }
}

/// Font weight of a text span.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Weight {
    #[default]
    Regular,
    Semibold,
    Bold,
}

/// A run of text with optional tone and weight overrides.
///
/// A span without an explicit tone or weight inherits the defaults of the
/// [`TextRole`] it is rendered under.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Span {
    text: String,
    tone: Option<Tone>,
    weight: Weight,
}

impl Span {
    /// Creates a span with the provided text and no overrides.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Returns the raw text of the span.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the tone override, if any.
    pub fn tone(&self) -> Option<Tone> {
        self.tone
    }

    /// Returns the configured weight.
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// Sets the tone override and returns the updated span.
    pub fn with_tone(mut self, tone: Option<Tone>) -> Self {
        self.tone = tone;
        self
    }

    /// Sets the weight and returns the updated span.
    pub fn with_weight(mut self, weight: Weight) -> Self {
        self.weight = weight;
        self
    }

    /// Convenience shorthand that assigns a tone to the span.
    pub fn toned(self, tone: Tone) -> Self {
        self.with_tone(Some(tone))
    }

    /// Convenience shorthand that marks the span as semibold.
    pub fn semibold(self) -> Self {
        self.with_weight(Weight::Semibold)
    }

    /// Convenience shorthand that marks the span as bold.
    pub fn bold(self) -> Self {
        self.with_weight(Weight::Bold)
    }
}

/// Semantic role of a text node, controlling its size and default styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextRole {
    /// The page-level name heading.
    Title,
    /// The professional headline under the title.
    Headline,
    /// A section heading such as `Work Experience`.
    SectionHeading,
    /// The title line of an entry (job, degree or project).
    EntryTitle,
    /// An organisation or institution line.
    Organization,
    /// A date-range badge.
    DateRange,
    /// Small metadata such as tenure or certification notes.
    Meta,
    /// Regular prose.
    Body,
    /// A small emphasised label such as `Previous Role:`.
    Label,
    /// Small auxiliary text, e.g. the terminal bar title.
    Caption,
    /// The footer credit line.
    Footer,
}

/// A text node: one or more spans rendered under a common role.
#[derive(Clone, Debug, PartialEq)]
pub struct Text {
    role: TextRole,
    spans: Vec<Span>,
    href: Option<String>,
}

impl Text {
    /// Creates a text node from the given spans.
    pub fn new(role: TextRole, spans: impl Into<Vec<Span>>) -> Self {
        Self {
            role,
            spans: spans.into(),
            href: None,
        }
    }

    /// Returns the semantic role.
    pub fn role(&self) -> TextRole {
        self.role
    }

    /// Returns the spans that make up the text.
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Returns the link target, if the text is a hyperlink.
    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    /// Sets the link target and returns the updated text.
    pub fn with_href(mut self, href: impl Into<Option<String>>) -> Self {
        self.href = href.into();
        self
    }

    /// Concatenates the raw text of all spans.
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(Span::text).collect()
    }
}

/// Colour treatment of a chip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChipPalette {
    Cyan,
    Emerald,
    /// Cyan-to-emerald gradient fill used by the skills cloud.
    Gradient,
}

impl ChipPalette {
    /// Tone used for the chip label.
    pub fn label_tone(self) -> Tone {
        match self {
            ChipPalette::Cyan | ChipPalette::Gradient => Tone::CyanSoft,
            ChipPalette::Emerald => Tone::EmeraldSoft,
        }
    }
}

/// A small pill-shaped label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chip {
    label: String,
    palette: ChipPalette,
}

impl Chip {
    /// Creates a chip with the given label and palette.
    pub fn new(label: impl Into<String>, palette: ChipPalette) -> Self {
        Self {
            label: label.into(),
            palette,
        }
    }

    /// Returns the chip label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the chip palette.
    pub fn palette(&self) -> ChipPalette {
        self.palette
    }
}

/// The content sections of the résumé card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionKind {
    Summary,
    Experience,
    Education,
    Projects,
    Skills,
}

impl SectionKind {
    /// The heading text shown above the section.
    pub fn heading(self) -> &'static str {
        match self {
            SectionKind::Summary => "Professional Summary",
            SectionKind::Experience => "Work Experience",
            SectionKind::Education => "Education",
            SectionKind::Projects => "Projects",
            SectionKind::Skills => "Skills",
        }
    }
}

/// Semantic role of a block container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockRole {
    /// Root of the rendered page body.
    PageBody,
    /// Terminal-style title bar above the card.
    TerminalBar,
    /// The captured résumé card.
    Card,
    /// Name, headline and contact header inside the card.
    CardHeader,
    /// Row of contact links inside the card header.
    ContactRow,
    /// A titled content section.
    Section(SectionKind),
    /// A single dated entry with the given border accent.
    Entry(Accent),
    /// Nested earlier-role details inside an entry.
    PreviousRole,
    /// A wrapping row of chips.
    TagRow,
}

/// A block container with a semantic role and child nodes.
#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    role: BlockRole,
    children: Vec<Node>,
}

impl Block {
    /// Creates a block with the given role and children.
    pub fn new(role: BlockRole, children: Vec<Node>) -> Self {
        Self { role, children }
    }

    /// Returns the semantic role.
    pub fn role(&self) -> BlockRole {
        self.role
    }

    /// Returns the child nodes.
    pub fn children(&self) -> &[Node] {
        &self.children
    }
}

/// An interactive control rendered by the host.
#[derive(Clone, Debug, PartialEq)]
pub enum Control {
    /// The export trigger button.
    Download { label: String, enabled: bool },
    /// The floating scroll-to-top button.
    ScrollTop,
}

/// A decorative element with no content meaning.
#[derive(Clone, Debug, PartialEq)]
pub enum Decor {
    /// Faint full-page background grid.
    Grid,
    /// Blurred glowing orb fixed to a page corner.
    Orb(Accent),
    /// Bordered corner ornament of the card.
    Corner(Accent),
    /// The three window buttons of the terminal bar.
    WindowDots,
    /// Soft glow that follows the pointer.
    CursorGlow { x: f64, y: f64 },
}

/// A single node of the rendered page tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Block(Block),
    Text(Text),
    Chip(Chip),
    Control(Control),
    Decor(Decor),
}

impl Node {
    /// Creates a block node.
    pub fn block(role: BlockRole, children: Vec<Node>) -> Self {
        Node::Block(Block::new(role, children))
    }

    /// Creates a text node.
    pub fn text(role: TextRole, spans: impl Into<Vec<Span>>) -> Self {
        Node::Text(Text::new(role, spans))
    }

    /// Creates a text node that links to `href`.
    pub fn link(role: TextRole, spans: impl Into<Vec<Span>>, href: impl Into<String>) -> Self {
        Node::Text(Text::new(role, spans).with_href(Some(href.into())))
    }

    /// Creates a chip node.
    pub fn chip(label: impl Into<String>, palette: ChipPalette) -> Self {
        Node::Chip(Chip::new(label, palette))
    }

    /// Visits this node and all descendants in document order.
    pub fn walk(&self, visit: &mut dyn FnMut(&Node)) {
        visit(self);
        if let Node::Block(block) = self {
            for child in block.children() {
                child.walk(visit);
            }
        }
    }

    /// Collects the user-visible text of the subtree, one line per leaf.
    ///
    /// Decorative nodes contribute nothing; control labels are included
    /// because they are part of the visible page.
    pub fn flatten_text(&self) -> String {
        let mut out = String::new();
        self.walk(&mut |node| match node {
            Node::Text(text) => {
                out.push_str(&text.plain_text());
                out.push('\n');
            }
            Node::Chip(chip) => {
                out.push_str(chip.label());
                out.push('\n');
            }
            Node::Control(Control::Download { label, .. }) => {
                out.push_str(label);
                out.push('\n');
            }
            _ => {}
        });
        out
    }
}
