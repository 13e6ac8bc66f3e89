use pretty_assertions::assert_eq;
use wordtable_core::{build_paginator, PageControl};

/// Compact rendering: `<`/`>` for prev/next (`x` when disabled), `[n]` for
/// the active page, `…` for gaps.
fn strip(controls: &[PageControl]) -> Vec<String> {
    controls
        .iter()
        .map(|control| match *control {
            PageControl::Previous { enabled, .. } => (if enabled { "<" } else { "x<" }).to_string(),
            PageControl::Next { enabled, .. } => (if enabled { ">" } else { ">x" }).to_string(),
            PageControl::Page { number, active: true } => format!("[{number}]"),
            PageControl::Page { number, .. } => number.to_string(),
            PageControl::Ellipsis => "…".to_string(),
        })
        .collect()
}

#[test]
fn single_page_has_no_paginator() {
    assert!(build_paginator(1, 0).is_empty());
    assert!(build_paginator(1, 1).is_empty());
}

#[test]
fn ten_pages_centered_on_five() {
    assert_eq!(
        build_paginator(5, 10),
        vec![
            PageControl::Previous {
                target: 4,
                enabled: true
            },
            PageControl::Page {
                number: 1,
                active: false
            },
            PageControl::Ellipsis,
            PageControl::Page {
                number: 4,
                active: false
            },
            PageControl::Page {
                number: 5,
                active: true
            },
            PageControl::Page {
                number: 6,
                active: false
            },
            PageControl::Ellipsis,
            PageControl::Page {
                number: 10,
                active: false
            },
            PageControl::Next {
                target: 6,
                enabled: true
            },
        ]
    );
}

#[test]
fn seven_pages_list_everything() {
    assert_eq!(
        strip(&build_paginator(4, 7)),
        vec!["<", "1", "2", "3", "[4]", "5", "6", "7", ">"]
    );
}

#[test]
fn window_near_the_start() {
    assert_eq!(
        strip(&build_paginator(1, 10)),
        vec!["x<", "[1]", "2", "…", "10", ">"]
    );
    assert_eq!(
        strip(&build_paginator(3, 10)),
        vec!["<", "1", "2", "[3]", "4", "…", "10", ">"]
    );
    assert_eq!(
        strip(&build_paginator(4, 10)),
        vec!["<", "1", "…", "3", "[4]", "5", "…", "10", ">"]
    );
}

#[test]
fn window_near_the_end() {
    assert_eq!(
        strip(&build_paginator(8, 10)),
        vec!["<", "1", "…", "7", "[8]", "9", "10", ">"]
    );
    assert_eq!(
        strip(&build_paginator(10, 10)),
        vec!["<", "1", "…", "9", "[10]", ">x"]
    );
}

#[test]
fn boundary_controls_target_neighbours() {
    let controls = build_paginator(1, 3);
    assert_eq!(controls.first().and_then(PageControl::target), None);
    assert_eq!(controls.last().and_then(PageControl::target), Some(2));

    let controls = build_paginator(3, 3);
    assert_eq!(controls.first().and_then(PageControl::target), Some(2));
    assert_eq!(controls.last().and_then(PageControl::target), None);
}

#[test]
fn exactly_one_active_page_when_in_range() {
    for count in 2..=30 {
        for current in 1..=count {
            let active = build_paginator(current, count)
                .into_iter()
                .filter(|c| matches!(c, PageControl::Page { active: true, .. }))
                .count();
            assert_eq!(active, 1, "page {current} of {count}");
        }
    }
}
