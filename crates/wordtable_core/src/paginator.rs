/// Page count up to which every page number is listed.
pub const MAX_UNCOLLAPSED_PAGES: usize = 7;

/// One control in the paginator strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControl {
    Previous { target: usize, enabled: bool },
    Page { number: usize, active: bool },
    Ellipsis,
    Next { target: usize, enabled: bool },
}

impl PageControl {
    /// Page this control navigates to, or `None` when activating it is a no-op.
    pub fn target(&self) -> Option<usize> {
        match *self {
            PageControl::Previous { target, enabled } | PageControl::Next { target, enabled } => {
                enabled.then_some(target)
            }
            PageControl::Page { number, .. } => Some(number),
            PageControl::Ellipsis => None,
        }
    }
}

/// Builds the paginator for `current_page` of `page_count`.
///
/// Returns an empty strip when everything fits on a single page.
pub fn build_paginator(current_page: usize, page_count: usize) -> Vec<PageControl> {
    if page_count <= 1 {
        return Vec::new();
    }

    let mut controls = Vec::with_capacity(MAX_UNCOLLAPSED_PAGES + 4);
    controls.push(PageControl::Previous {
        target: current_page.saturating_sub(1),
        enabled: current_page != 1,
    });

    let page = |number: usize| PageControl::Page {
        number,
        active: number == current_page,
    };

    if page_count <= MAX_UNCOLLAPSED_PAGES {
        controls.extend((1..=page_count).map(page));
    } else {
        controls.push(page(1));
        if current_page > 3 {
            controls.push(PageControl::Ellipsis);
        }
        let window_start = current_page.saturating_sub(1).max(2);
        let window_end = current_page.saturating_add(1).min(page_count - 1);
        controls.extend((window_start..=window_end).map(page));
        if current_page < page_count - 2 {
            controls.push(PageControl::Ellipsis);
        }
        controls.push(page(page_count));
    }

    controls.push(PageControl::Next {
        target: current_page.saturating_add(1),
        enabled: current_page != page_count,
    });
    controls
}
