/// Which case study is expanded on the cases page. At most one at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseExpansion {
    expanded: Option<String>,
}

/// Delay before scrolling to a deep-linked case, so entrance animations can settle.
pub const DEEP_LINK_SCROLL_DELAY_MS: u32 = 500;

impl CaseExpansion {
    /// Expansion requested by a URL fragment (`#adidas` or `adidas`). Fragments
    /// that name no known case expand nothing.
    pub fn from_fragment<'a>(fragment: &str, known_slugs: impl IntoIterator<Item = &'a str>) -> Self {
        let slug = fragment.trim_start_matches('#');
        if slug.is_empty() {
            return Self::default();
        }
        let expanded = known_slugs
            .into_iter()
            .find(|known| *known == slug)
            .map(str::to_string);
        Self { expanded }
    }

    pub fn expanded(&self) -> Option<&str> {
        self.expanded.as_deref()
    }

    pub fn is_expanded(&self, slug: &str) -> bool {
        self.expanded.as_deref() == Some(slug)
    }

    /// Collapses `slug` if it is open, otherwise opens it (closing any other).
    pub fn toggle(&self, slug: &str) -> Self {
        if self.is_expanded(slug) {
            Self { expanded: None }
        } else {
            Self { expanded: Some(slug.to_string()) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SLUGS: [&str; 3] = ["adidas", "loccitane", "arezzo"];

    #[test]
    fn toggling_twice_collapses() {
        let start = CaseExpansion::default();
        let once = start.toggle("arezzo");
        assert!(once.is_expanded("arezzo"));
        assert_eq!(once.toggle("arezzo"), start);
    }

    #[test]
    fn only_one_case_is_open() {
        let state = CaseExpansion::default().toggle("adidas").toggle("loccitane");
        assert!(state.is_expanded("loccitane"));
        assert!(!state.is_expanded("adidas"));
    }

    #[test]
    fn deep_link_expands_exactly_that_case() {
        let state = CaseExpansion::from_fragment("#adidas", SLUGS);
        assert_eq!(state.expanded(), Some("adidas"));
        let open: Vec<_> = SLUGS.iter().filter(|slug| state.is_expanded(slug)).collect();
        assert_eq!(open, vec![&"adidas"]);
    }

    #[test]
    fn unknown_or_empty_fragment_expands_nothing() {
        assert_eq!(CaseExpansion::from_fragment("#nike", SLUGS).expanded(), None);
        assert_eq!(CaseExpansion::from_fragment("", SLUGS).expanded(), None);
        assert_eq!(CaseExpansion::from_fragment("#", SLUGS).expanded(), None);
    }
}
