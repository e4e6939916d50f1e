//! Discovery and loading of the bundled font family.

use std::env;
use std::io;
use std::path::{Path, PathBuf};

use genpdf::error::Error;
use genpdf::fonts::{self, FontData, FontFamily};

/// Environment variable overriding the bundled font directory.
pub const FONTS_DIR_ENV: &str = "RESUME_PAGE_FONTS_DIR";

/// Family name of the bundled fonts.
pub const FONT_FAMILY_NAME: &str = "Roboto";

const FONT_FILES: &[&str] = &[
    "Roboto-Regular.ttf",
    "Roboto-Bold.ttf",
    "Roboto-Italic.ttf",
    "Roboto-BoldItalic.ttf",
];

fn push_unique(candidates: &mut Vec<PathBuf>, candidate: PathBuf) {
    if !candidates.iter().any(|existing| existing == &candidate) {
        candidates.push(candidate);
    }
}

fn candidate_directories() -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Ok(dir) = env::var(FONTS_DIR_ENV) {
        if !dir.trim().is_empty() {
            candidates.push(PathBuf::from(dir));
        }
    }
    if let Ok(exe) = env::current_exe() {
        if let Some(bin_dir) = exe.parent() {
            push_unique(&mut candidates, bin_dir.join("assets").join("fonts"));
        }
    }
    push_unique(
        &mut candidates,
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets").join("fonts"),
    );
    candidates
}

fn missing_files(directory: &Path) -> Vec<&'static str> {
    FONT_FILES
        .iter()
        .copied()
        .filter(|name| !directory.join(name).is_file())
        .collect()
}

fn resolve_font_directory() -> Result<PathBuf, Error> {
    let mut attempts = Vec::new();
    for candidate in candidate_directories() {
        if !candidate.is_dir() {
            attempts.push(format!("{} (missing)", candidate.display()));
            continue;
        }
        let missing = missing_files(&candidate);
        if missing.is_empty() {
            return Ok(candidate);
        }
        attempts.push(format!("{} (lacks {})", candidate.display(), missing.join(", ")));
    }
    Err(Error::new(
        format!(
            "Bundled fonts not found. Checked: {}. See assets/fonts/README.md or set {}.",
            attempts.join("; "),
            FONTS_DIR_ENV
        ),
        io::Error::new(io::ErrorKind::NotFound, "no usable font directory"),
    ))
}

/// Loads the bundled font family used by the capture and assembly documents.
///
/// The directory is resolved from [`FONTS_DIR_ENV`], then `assets/fonts`
/// next to the executable, then `assets/fonts` in the crate root.
pub fn default_font_family() -> Result<FontFamily<FontData>, Error> {
    let directory = resolve_font_directory()?;
    log::debug!("loading {} fonts from {}", FONT_FAMILY_NAME, directory.display());
    fonts::from_files(&directory, FONT_FAMILY_NAME, None).map_err(|err| {
        Error::new(
            format!(
                "Failed to load font family '{}' from {}: {}",
                FONT_FAMILY_NAME,
                directory.display(),
                err
            ),
            io::Error::new(io::ErrorKind::InvalidData, err.to_string()),
        )
    })
}

/// Whether the bundled fonts can be resolved. Rendering tests skip when
/// this returns `false`.
pub fn default_fonts_available() -> bool {
    resolve_font_directory().is_ok()
}
