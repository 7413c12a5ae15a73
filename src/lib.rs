//! booktools - build-pipeline helpers for an mdBook book
//!
//! This library provides a stderr-filtering process wrapper used to silence
//! `mdbook-katex`'s version-mismatch warning without hiding its exit status,
//! plus glossary conversion and a conservative prose checker for the book's
//! markdown sources.

pub mod cli;
pub mod filter;
pub mod glossary;
pub mod prose;
pub mod wrapper;
