/// A named, vertically stacked content region of the page, addressable by a
/// unique anchor id. Declaration order is both the nav order and the
/// priority order of the scroll scan.
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
}

pub const SECTIONS: &[Section] = &[
    Section { id: "shift", label: "The Shift" },
    Section { id: "identity", label: "Brand Identity" },
    Section { id: "impact", label: "Impact Chain" },
    Section { id: "positioning", label: "Positioning" },
    Section { id: "gtm", label: "Go-To-Market" },
    Section { id: "status", label: "Where We Are" },
];

/// Fixed reading line, measured from the viewport top. Whichever section
/// spans this line is the one the viewer is currently reading.
pub const FOCUS_LINE_PX: f64 = 120.0;

pub fn straddles_focus_line(top: f64, bottom: f64) -> bool {
    top <= FOCUS_LINE_PX && bottom > FOCUS_LINE_PX
}

/// Scans `SECTIONS` in declared order and returns the id of the first one
/// whose current bounds straddle the focus line. `bounds_of` resolves an
/// anchor id to its on-screen `(top, bottom)`; returning `None` (anchor not
/// rendered) skips that section. Yields `None` when no section spans the
/// line, e.g. above the first section or past the last one — the caller
/// keeps its previous answer in that case.
pub fn section_at_focus_line<F>(mut bounds_of: F) -> Option<&'static str>
where
    F: FnMut(&str) -> Option<(f64, f64)>,
{
    SECTIONS.iter().find_map(|section| {
        let (top, bottom) = bounds_of(section.id)?;
        straddles_focus_line(top, bottom).then_some(section.id)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECTION_HEIGHT: f64 = 900.0;

    // Stacked, non-overlapping section geometry: section i occupies
    // [i * SECTION_HEIGHT, (i + 1) * SECTION_HEIGHT) in page coordinates,
    // shifted up by the scroll offset.
    fn stacked_bounds(scroll_y: f64) -> impl FnMut(&str) -> Option<(f64, f64)> {
        move |id: &str| {
            let index = SECTIONS.iter().position(|s| s.id == id)? as f64;
            let top = index * SECTION_HEIGHT - scroll_y;
            Some((top, top + SECTION_HEIGHT))
        }
    }

    fn scroll_section_to_focus_line(index: usize) -> f64 {
        index as f64 * SECTION_HEIGHT - FOCUS_LINE_PX
    }

    #[test]
    fn each_section_activates_when_it_spans_the_focus_line() {
        for (index, section) in SECTIONS.iter().enumerate() {
            let scroll_y = scroll_section_to_focus_line(index) + 10.0;
            assert_eq!(
                section_at_focus_line(stacked_bounds(scroll_y)),
                Some(section.id),
                "section {} should be active",
                section.id
            );
        }
    }

    #[test]
    fn sections_are_mutually_exclusive_at_any_scroll_position() {
        // Sweep the whole page; at most one section can straddle the line.
        let page_height = SECTIONS.len() as f64 * SECTION_HEIGHT;
        let mut scroll_y = -500.0;
        while scroll_y < page_height + 500.0 {
            let mut bounds = stacked_bounds(scroll_y);
            let straddling = SECTIONS
                .iter()
                .filter(|s| {
                    bounds(s.id)
                        .map(|(t, b)| straddles_focus_line(t, b))
                        .unwrap_or(false)
                })
                .count();
            assert!(straddling <= 1, "scroll_y = {}", scroll_y);
            scroll_y += 37.0;
        }
    }

    #[test]
    fn scrolling_to_impact_reports_impact() {
        let scroll_y = scroll_section_to_focus_line(2) + 200.0;
        assert_eq!(section_at_focus_line(stacked_bounds(scroll_y)), Some("impact"));
    }

    #[test]
    fn past_the_last_section_nothing_straddles() {
        // Bottom of the page: every section is above the focus line, so the
        // scan yields None and the caller retains the last id (`status`).
        let scroll_y = SECTIONS.len() as f64 * SECTION_HEIGHT + 2_000.0;
        assert_eq!(section_at_focus_line(stacked_bounds(scroll_y)), None);
    }

    #[test]
    fn above_the_first_section_nothing_straddles() {
        assert_eq!(section_at_focus_line(stacked_bounds(-3_000.0)), None);
    }

    #[test]
    fn missing_anchors_are_skipped() {
        // Only `positioning` is rendered; every other lookup fails. The scan
        // must skip the missing ones without error.
        let bounds = |id: &str| {
            (id == "positioning").then_some((100.0, 800.0))
        };
        assert_eq!(section_at_focus_line(bounds), Some("positioning"));

        let none_rendered = |_: &str| None::<(f64, f64)>;
        assert_eq!(section_at_focus_line(none_rendered), None);
    }

    #[test]
    fn declared_order_wins() {
        // Degenerate geometry where two sections both straddle the line:
        // the earlier-declared one is reported.
        let bounds = |id: &str| match id {
            "identity" => Some((0.0, 500.0)),
            "gtm" => Some((0.0, 500.0)),
            _ => None,
        };
        assert_eq!(section_at_focus_line(bounds), Some("identity"));
    }

    #[test]
    fn focus_line_boundaries() {
        // top exactly on the line counts, bottom exactly on the line does not
        assert!(straddles_focus_line(FOCUS_LINE_PX, FOCUS_LINE_PX + 1.0));
        assert!(!straddles_focus_line(FOCUS_LINE_PX + 0.5, 1_000.0));
        assert!(!straddles_focus_line(0.0, FOCUS_LINE_PX));
        assert!(straddles_focus_line(0.0, FOCUS_LINE_PX + 0.001));
    }
}
