//! Output boundary of the table.
//!
//! The core never builds markup. A host implements [`Renderer`] and
//! [`render_table`] decides which parts of it a pass touches.

use crate::view_model::{Placeholder, TableBody, TableViewModel};
use crate::{PageControl, Record, SortSpec, Summary};

pub trait Renderer {
    fn render_rows(&mut self, rows: &[Record]);
    fn render_placeholder(&mut self, placeholder: &Placeholder);
    /// `None` clears the summary line.
    fn render_summary(&mut self, summary: Option<&Summary>);
    /// An empty slice removes the paginator.
    fn render_paginator(&mut self, controls: &[PageControl]);
    fn render_sort_indicator(&mut self, _sort: &SortSpec) {}
}

/// Pushes one render pass through `renderer`.
///
/// While loading, and after a failed fetch, only the table body is touched;
/// summary and paginator keep whatever they showed before.
pub fn render_table<R: Renderer + ?Sized>(view: &TableViewModel, renderer: &mut R) {
    match &view.body {
        TableBody::Placeholder(placeholder @ (Placeholder::Loading | Placeholder::Error(_))) => {
            renderer.render_placeholder(placeholder);
            return;
        }
        TableBody::Placeholder(placeholder) => renderer.render_placeholder(placeholder),
        TableBody::Rows(rows) => renderer.render_rows(rows),
    }
    renderer.render_summary(view.summary.as_ref());
    renderer.render_paginator(&view.paginator);
    renderer.render_sort_indicator(&view.sort);
}
