//! Scroll-driven active-section tracking.
//!
//! The page has four in-page sections. While the user scrolls, the section
//! whose bounding box straddles a fixed reference line near the top of the
//! viewport is considered active and gets the nav highlight. The geometry
//! selection lives here, detached from the DOM, so it can be tested natively.

/// Distance in pixels from the top of the viewport to the reference line used
/// to decide which section is active.
pub const NAV_PROBE_PX: f64 = 100.0;

/// The four in-page anchor targets, doubling as nav items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Skills,
    Experience,
    Contact,
}

impl Section {
    /// Priority order checked by the scroll tracker. The first section whose
    /// box straddles the reference line wins.
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::Skills,
        Section::Experience,
        Section::Contact,
    ];

    /// The `id` attribute of the section element, also used as the anchor
    /// fragment.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Skills => "skills",
            Section::Experience => "experience",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Skills => "Skills",
            Section::Experience => "Experience",
            Section::Contact => "Contact",
        }
    }
}

/// Viewport-relative vertical extent of a section element, as reported by
/// `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBox {
    pub top: f64,
    pub bottom: f64,
}

impl SectionBox {
    /// Whether the reference line falls inside this box. Both edges are
    /// inclusive. A section shorter than the probe band can miss the line
    /// entirely; that is the documented behavior, not a bug to fix here.
    pub fn straddles_probe(self) -> bool {
        self.top <= NAV_PROBE_PX && self.bottom >= NAV_PROBE_PX
    }
}

/// Selects the first section, in [`Section::ALL`] priority order, whose box
/// straddles the reference line. Sections missing from the DOM carry `None`
/// and are skipped. Returns `None` when nothing straddles the line, in which
/// case the caller must keep the previously active section.
pub fn section_under_probe<I>(boxes: I) -> Option<Section>
where
    I: IntoIterator<Item = (Section, Option<SectionBox>)>,
{
    boxes.into_iter().find_map(|(section, b)| match b {
        Some(b) if b.straddles_probe() => Some(section),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // Helper to lay the four sections out as a vertical stack starting at
    // `first_top`, each `height` pixels tall
    fn stacked(first_top: f64, height: f64) -> Vec<(Section, Option<SectionBox>)> {
        Section::ALL
            .into_iter()
            .enumerate()
            .map(|(i, s)| {
                let top = first_top + i as f64 * height;
                (s, Some(SectionBox {
                    top,
                    bottom: top + height,
                }))
            })
            .collect()
    }

    #[test]
    fn test_section_at_top_of_page_is_home() {
        let boxes = stacked(0.0, 800.0);
        assert_eq!(section_under_probe(boxes), Some(Section::Home));
    }

    #[test]
    fn test_scrolled_to_third_section_is_experience() {
        // Two sections scrolled past, experience spans the reference line
        let boxes = stacked(-1550.0, 800.0);
        assert_eq!(section_under_probe(boxes), Some(Section::Experience));
    }

    #[test]
    fn test_first_match_wins_in_priority_order() {
        // Overlapping boxes that both straddle the line - home is checked first
        let boxes = vec![
            (Section::Home, Some(SectionBox { top: 0.0, bottom: 500.0 })),
            (Section::Skills, Some(SectionBox { top: 50.0, bottom: 900.0 })),
            (Section::Experience, None),
            (Section::Contact, None),
        ];
        assert_eq!(section_under_probe(boxes), Some(Section::Home));
    }

    #[test]
    fn test_no_match_returns_none() {
        // Everything below the reference line, e.g. overscrolled bounce
        let boxes = stacked(300.0, 800.0);
        assert_eq!(section_under_probe(boxes), None);
    }

    #[test]
    fn test_probe_edges_are_inclusive() {
        let at_top = SectionBox { top: NAV_PROBE_PX, bottom: 900.0 };
        assert!(at_top.straddles_probe());
        let at_bottom = SectionBox { top: -700.0, bottom: NAV_PROBE_PX };
        assert!(at_bottom.straddles_probe());
        let above = SectionBox { top: -700.0, bottom: NAV_PROBE_PX - 0.5 };
        assert!(!above.straddles_probe());
        let below = SectionBox { top: NAV_PROBE_PX + 0.5, bottom: 900.0 };
        assert!(!below.straddles_probe());
    }

    #[test]
    fn test_short_section_inside_probe_band_is_skipped() {
        // A section shorter than the probe offset sitting fully above the
        // line never matches - the next straddling section is picked instead
        let boxes = vec![
            (Section::Home, Some(SectionBox { top: -900.0, bottom: 10.0 })),
            (Section::Skills, Some(SectionBox { top: 10.0, bottom: 60.0 })),
            (Section::Experience, Some(SectionBox { top: 60.0, bottom: 950.0 })),
            (Section::Contact, Some(SectionBox { top: 950.0, bottom: 1700.0 })),
        ];
        assert_eq!(section_under_probe(boxes), Some(Section::Experience));
    }

    #[test]
    fn test_missing_elements_are_skipped() {
        let boxes = vec![
            (Section::Home, None),
            (Section::Skills, Some(SectionBox { top: 20.0, bottom: 700.0 })),
            (Section::Experience, None),
            (Section::Contact, None),
        ];
        assert_eq!(section_under_probe(boxes), Some(Section::Skills));
    }

    #[test]
    fn test_ids_match_anchor_targets() {
        let ids = Section::ALL.map(Section::id);
        assert_eq!(ids, ["home", "skills", "experience", "contact"]);
    }
}
