//! Statement rendering
//!
//! The statement structures in [`crate::core::statement`] carry values and
//! classifications only; implementations of the [`RenderStatement`] trait
//! turn them into a concrete document. Pagination, fonts, colors, and
//! wording are entirely the renderer's concern.

use crate::core::statement::Statement;
use std::io::Write;

pub mod text;

pub use text::{format_currency, TextRenderer};

/// Renderer interface for consolidated statements
///
/// Each implementation writes the complete document for one statement to
/// the provided output.
pub trait RenderStatement {
    /// Render the statement to the output
    ///
    /// # Arguments
    ///
    /// * `statement` - The assembled statement data
    /// * `output` - Mutable reference to a writer for the document
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the document was written completely
    /// * `Err(String)` if a write error occurred
    fn render(&self, statement: &Statement, output: &mut dyn Write) -> Result<(), String>;
}
