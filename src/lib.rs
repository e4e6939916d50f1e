//! Core entry point for the resume_page crate.

pub mod content;
pub mod export;
pub mod markup;
pub mod page;
pub mod pdf;
pub mod theme;
pub mod view;
pub mod viewport;
