use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;
use yew_hooks::prelude::*;

/// In-page sections that the header highlights, in priority order.
pub const TRACKED_SECTIONS: [&str; 3] = ["what-we-do", "showcase", "about"];

/// Distance below the viewport top at which a section counts as reached.
/// Below this scroll offset the page is considered "at the top".
pub const PROBE_OFFSET: f64 = 100.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub offset_top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, offset_top: f64, height: f64) -> Self {
        Self { id: id.into(), offset_top, height }
    }

    fn contains(&self, y: f64) -> bool {
        y >= self.offset_top && y < self.offset_top + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionProbe<'a> {
    /// Scrolled less than [`PROBE_OFFSET`]; nothing is active.
    Top,
    Within(&'a str),
    /// Probe point falls in a gap between tracked sections.
    Between,
}

impl SectionProbe<'_> {
    /// Next active id. A gap keeps whatever was active before.
    pub fn resolve(self, current: Option<String>) -> Option<String> {
        match self {
            SectionProbe::Top => None,
            SectionProbe::Within(id) => Some(id.to_string()),
            SectionProbe::Between => current,
        }
    }
}

/// First section containing `scroll_y + PROBE_OFFSET` wins; the top-of-page
/// state overrides containment.
pub fn probe_sections(scroll_y: f64, sections: &[SectionBounds]) -> SectionProbe<'_> {
    if scroll_y < PROBE_OFFSET {
        return SectionProbe::Top;
    }
    let probe = scroll_y + PROBE_OFFSET;
    sections
        .iter()
        .find(|section| section.contains(probe))
        .map(|section| SectionProbe::Within(section.id.as_str()))
        .unwrap_or(SectionProbe::Between)
}

/// Reads the geometry of the tracked sections that exist in the document.
fn measure_sections(ids: &[&str]) -> Vec<SectionBounds> {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(document) => document,
        None => return Vec::new(),
    };
    ids.iter()
        .filter_map(|id| {
            let element = document.get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()?;
            Some(SectionBounds::new(
                *id,
                element.offset_top() as f64,
                element.offset_height() as f64,
            ))
        })
        .collect()
}

/// Id of the section under the probe line, recomputed on every scroll.
#[hook]
pub fn use_active_section(ids: &'static [&'static str]) -> Option<String> {
    let active = use_state(|| None::<String>);
    let (_, scroll_y) = use_window_scroll();

    {
        let active = active.clone();
        use_effect_with_deps(
            move |scroll_y| {
                let sections = measure_sections(ids);
                let next = probe_sections(*scroll_y, &sections).resolve((*active).clone());
                if next != *active {
                    active.set(next);
                }
                || ()
            },
            scroll_y,
        );
    }

    (*active).clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<SectionBounds> {
        vec![
            SectionBounds::new("what-we-do", 900.0, 800.0),
            SectionBounds::new("showcase", 1700.0, 1000.0),
            SectionBounds::new("about", 3000.0, 900.0),
        ]
    }

    #[test]
    fn top_of_page_has_no_active_section() {
        let sections = vec![SectionBounds::new("what-we-do", 0.0, 500.0)];
        assert_eq!(probe_sections(0.0, &sections), SectionProbe::Top);
        assert_eq!(probe_sections(99.9, &sections), SectionProbe::Top);
    }

    #[test]
    fn boundary_at_probe_offset_is_not_top() {
        let sections = vec![SectionBounds::new("what-we-do", 0.0, 500.0)];
        assert_eq!(probe_sections(100.0, &sections), SectionProbe::Within("what-we-do"));
    }

    #[test]
    fn extent_is_half_open() {
        let sections = page();
        // probe = 1700, the first pixel of showcase
        assert_eq!(probe_sections(1600.0, &sections), SectionProbe::Within("showcase"));
        // probe = 1699.5, still inside what-we-do
        assert_eq!(probe_sections(1599.5, &sections), SectionProbe::Within("what-we-do"));
    }

    #[test]
    fn gap_between_sections_keeps_previous() {
        let sections = page();
        let probe = probe_sections(2700.0, &sections);
        assert_eq!(probe, SectionProbe::Between);
        assert_eq!(probe.resolve(Some("showcase".into())), Some("showcase".into()));
        assert_eq!(SectionProbe::Top.resolve(Some("showcase".into())), None);
    }

    #[test]
    fn overlapping_sections_resolve_in_declaration_order() {
        let sections = vec![
            SectionBounds::new("what-we-do", 0.0, 1000.0),
            SectionBounds::new("showcase", 500.0, 1000.0),
        ];
        assert_eq!(probe_sections(600.0, &sections), SectionProbe::Within("what-we-do"));
    }

    #[test]
    fn probing_is_idempotent() {
        let sections = page();
        for y in [0.0, 99.0, 100.0, 850.0, 1650.0, 2750.0, 3100.0, 9000.0] {
            assert_eq!(probe_sections(y, &sections), probe_sections(y, &sections));
        }
    }
}
