// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Prompt template expansion for batch runs.
//!
//! Batch prompt templates carry a single `{file}` placeholder that is
//! replaced with each matched path. A template without the placeholder is
//! used verbatim for every file; that is not an error.

/// Placeholder replaced with the matched file path.
pub const FILE_PLACEHOLDER: &str = "{file}";

/// Substitute `path` into `template` at the `{file}` placeholder.
pub fn expand(template: &str, path: &str) -> String {
    template.replace(FILE_PLACEHOLDER, path)
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
