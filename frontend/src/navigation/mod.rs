pub mod active_section;

use gloo_timers::callback::Timeout;
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

/// Height of the fixed header; anchored sections stop just below it.
pub const HEADER_OFFSET: f64 = 80.0;

/// Delay before jumping to the section named in the URL on page load, so the
/// sections above it have rendered.
pub const FRAGMENT_SCROLL_DELAY_MS: u32 = 300;

/// A header link. `href` is either an in-page anchor (`/#section`) or a route path.
#[derive(Debug, Clone, PartialEq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

impl NavItem {
    pub fn section_id(&self) -> Option<&'static str> {
        self.href.strip_prefix("/#")
    }

    /// Anchors are active when their section is; routes when the path matches.
    pub fn is_active(&self, active_section: Option<&str>, current_path: &str, localized_href: &str) -> bool {
        match self.section_id() {
            Some(id) => active_section == Some(id),
            None => current_path == localized_href,
        }
    }
}

/// Window scroll position that puts an element at `offset_top` just below the header.
pub fn scroll_top_for(offset_top: f64) -> f64 {
    (offset_top - HEADER_OFFSET).max(0.0)
}

/// Element id named by a location hash (`#about` or `about`).
pub fn fragment_id(hash: &str) -> Option<&str> {
    let id = hash.trim_start_matches('#');
    (!id.is_empty()).then_some(id)
}

/// Smoothly scrolls so section `id` sits under the header. Returns false when
/// the section is not on this page.
pub fn scroll_to_section(id: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let element = window
        .document()
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|e| wasm_bindgen::JsCast::dyn_into::<web_sys::HtmlElement>(e).ok());
    match element {
        Some(element) => {
            let options = ScrollToOptions::new();
            options.set_top(scroll_top_for(element.offset_top() as f64));
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
            true
        }
        None => false,
    }
}

/// Click handler for an in-page link. Falls back to normal navigation when
/// the section lives on another page.
pub fn anchor_click(id: &'static str, after: Option<Callback<()>>) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        if scroll_to_section(id) {
            e.prevent_default();
        }
        if let Some(after) = &after {
            after.emit(());
        }
    })
}

/// Scrolls to the section in the URL hash once after mount. Links such as
/// `/pt#showcase` followed from another page land here with a full load.
#[hook]
pub fn use_fragment_scroll() {
    use_effect_with_deps(
        |_| {
            let target = web_sys::window()
                .and_then(|w| w.location().hash().ok())
                .and_then(|hash| fragment_id(&hash).map(str::to_string));
            let timer = target.map(|id| {
                Timeout::new(FRAGMENT_SCROLL_DELAY_MS, move || {
                    scroll_to_section(&id);
                })
            });
            move || drop(timer)
        },
        (),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragments_name_an_element() {
        assert_eq!(fragment_id("#showcase"), Some("showcase"));
        assert_eq!(fragment_id("contact-form"), Some("contact-form"));
        assert_eq!(fragment_id("#"), None);
        assert_eq!(fragment_id(""), None);
    }

    #[test]
    fn scroll_target_clears_the_header() {
        assert_eq!(scroll_top_for(1000.0), 920.0);
        assert_eq!(scroll_top_for(40.0), 0.0);
    }

    #[test]
    fn anchors_follow_the_tracker() {
        let item = NavItem { label: "Showcase", href: "/#showcase" };
        assert!(item.is_active(Some("showcase"), "/", "/#showcase"));
        assert!(!item.is_active(Some("about"), "/", "/#showcase"));
        assert!(!item.is_active(None, "/", "/#showcase"));
    }

    #[test]
    fn routes_follow_the_path() {
        let item = NavItem { label: "Home", href: "/" };
        assert!(item.is_active(Some("showcase"), "/pt", "/pt"));
        assert!(!item.is_active(None, "/pt/cases", "/pt"));
    }
}
