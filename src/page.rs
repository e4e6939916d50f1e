//! The page shell: document-level metadata wrapped around the rendered body.
//!
//! The shell declares language, title, description, the icon reference and
//! the dark colour scheme.  It has no logic and no failure modes; composing
//! it with a body yields the complete page the host displays.

use crate::markup::Node;
use crate::theme::{self, Rgb};

/// Document-level page metadata.
#[derive(Clone, Debug, PartialEq)]
pub struct PageShell {
    lang: String,
    title: String,
    description: String,
    icon_href: String,
    background: Rgb,
    foreground: Rgb,
}

impl PageShell {
    /// Returns the document language tag.
    pub fn lang(&self) -> &str {
        &self.lang
    }

    /// Returns the document title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the document description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the icon reference.
    pub fn icon_href(&self) -> &str {
        &self.icon_href
    }

    /// Returns the page background colour.
    pub fn background(&self) -> Rgb {
        self.background
    }

    /// Returns the default text colour.
    pub fn foreground(&self) -> Rgb {
        self.foreground
    }
}

impl Default for PageShell {
    fn default() -> Self {
        Self {
            lang: "en".into(),
            title: "Dhanashri Patil — Software Test Engineer | Resume".into(),
            description: "Professional resume of Dhanashri Patil - Software Test Engineer \
                          with expertise in automation and manual testing, skilled in \
                          Cypress, Selenium, and Appium."
                .into(),
            icon_href: "/favicon.ico".into(),
            background: theme::PAGE_BACKGROUND,
            foreground: theme::PAGE_FOREGROUND,
        }
    }
}

/// A complete page: shell metadata plus the rendered body tree.
#[derive(Clone, Debug, PartialEq)]
pub struct Page {
    shell: PageShell,
    body: Node,
}

impl Page {
    /// Wraps the body in the given shell.
    pub fn compose(shell: PageShell, body: Node) -> Self {
        Self { shell, body }
    }

    /// Returns the shell metadata.
    pub fn shell(&self) -> &PageShell {
        &self.shell
    }

    /// Returns the body tree.
    pub fn body(&self) -> &Node {
        &self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_declares_the_documented_metadata() {
        let shell = PageShell::default();
        assert_eq!(shell.lang(), "en");
        assert_eq!(
            shell.title(),
            "Dhanashri Patil — Software Test Engineer | Resume"
        );
        assert!(shell.description().contains("Cypress, Selenium, and Appium"));
        assert_eq!(shell.icon_href(), "/favicon.ico");
        assert_eq!(shell.background(), (0x0a, 0x0a, 0x0a));
    }
}
