//! Colour tokens for the dark page scheme.
//!
//! The palette is intentionally small: a near-black backdrop, a light gray
//! text ramp, and the cyan/emerald accent pair used by headings, borders and
//! tags.  The values are plain RGB triples so both the rendering host and the
//! PDF typesetter can consume them without further conversion.

/// An RGB colour triple.
pub type Rgb = (u8, u8, u8);

/// Near-black backdrop shared by the page shell and the capture fill.
pub const PAGE_BACKGROUND: Rgb = (0x0a, 0x0a, 0x0a);

/// Default foreground for light text on the dark backdrop.
pub const PAGE_FOREGROUND: Rgb = (0xf3, 0xf4, 0xf6);

/// Hairline colour of the decorative background grid.
pub const GRID_LINE: Rgb = (0x1a, 0x1a, 0x1a);

/// Window-button colours of the terminal-style title bar, left to right.
pub const WINDOW_DOTS: [Rgb; 3] = [
    (0xff, 0x5f, 0x57),
    (0xff, 0xbd, 0x2e),
    (0x28, 0xca, 0x42),
];

/// Named colour tones used by text spans and chips.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tone {
    /// Brightest gray, reserved for high-emphasis text.
    Bright,
    /// Regular body text gray.
    #[default]
    Body,
    /// De-emphasised gray for metadata lines.
    Muted,
    /// Faintest gray, used by the footer credit.
    Faint,
    /// Primary cyan accent.
    Cyan,
    /// Lighter cyan used by large titles and chips.
    CyanSoft,
    /// Primary emerald accent.
    Emerald,
    /// Lighter emerald used by inline emphasis and chips.
    EmeraldSoft,
}

impl Tone {
    /// Returns the RGB value of this tone.
    pub fn rgb(self) -> Rgb {
        match self {
            Tone::Bright => (0xf3, 0xf4, 0xf6),
            Tone::Body => (0xd1, 0xd5, 0xdb),
            Tone::Muted => (0x9c, 0xa3, 0xaf),
            Tone::Faint => (0x6b, 0x72, 0x80),
            Tone::Cyan => (0x22, 0xd3, 0xee),
            Tone::CyanSoft => (0x67, 0xe8, 0xf9),
            Tone::Emerald => (0x34, 0xd3, 0x99),
            Tone::EmeraldSoft => (0x6e, 0xe7, 0xb7),
        }
    }
}
