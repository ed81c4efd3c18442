use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::use_location;

use crate::animation::{use_mount_reveal, Ease, Pose, RevealPhase, RevealTimeline, RevealTrack};
use crate::components::dynamic_gradient::DynamicGradient;
use crate::components::language_switcher::LanguageSwitcher;
use crate::components::logo::Logo;
use crate::i18n::strings::HeaderText;
use crate::i18n::{localized_href, strings, use_locale};
use crate::navigation::active_section::{use_active_section, TRACKED_SECTIONS};
use crate::navigation::{anchor_click, NavItem};

/// Background turns solid once the page has scrolled past this.
const SCROLLED_AFTER: f64 = 50.0;

fn slide_in() -> RevealTimeline {
    RevealTimeline::new().track(RevealTrack::new(Pose::hidden().y(-20.0), 0.8))
}

fn menu_items(count: usize) -> RevealTimeline {
    RevealTimeline::new()
        .ease(Ease::POWER2_OUT)
        .track(RevealTrack::new(Pose::hidden().x(-20.0), 0.4).at(0.1).stagger(0.05, count))
}

fn nav_items(text: &HeaderText) -> [NavItem; 4] {
    [
        NavItem { label: text.home, href: "/" },
        NavItem { label: text.what_we_do, href: "/#what-we-do" },
        NavItem { label: text.showcase, href: "/#showcase" },
        NavItem { label: text.about, href: "/#about" },
    ]
}

#[function_component(Header)]
pub fn header() -> Html {
    let locale = use_locale();
    let text = &strings(locale).header;
    let location = use_location();
    let current_path = location.map(|l| l.path().to_string()).unwrap_or_default();

    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > SCROLLED_AFTER;
    let active_section = use_active_section(&TRACKED_SECTIONS);
    let menu_open = use_state_eq(|| false);
    let header_ref = use_node_ref();

    let entrance = slide_in();
    let entrance_phase = use_mount_reveal(300, entrance.total_millis());

    {
        let menu_open = menu_open.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                menu_open.set(false);
            }
        });
    }
    {
        let menu_open = menu_open.clone();
        use_click_away(header_ref.clone(), move |_: Event| menu_open.set(false));
    }

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| menu_open.set(false))
    };
    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    let overlay_click = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let items = nav_items(text);

    let render_link = |item: &NavItem, mobile: bool| -> Html {
        let href = localized_href(locale, item.href);
        let active = item.is_active(active_section.as_deref(), &current_path, &href);
        let class = if mobile {
            classes!("mobile-link", active.then(|| "active"))
        } else {
            classes!("nav-link", active.then(|| "active"))
        };
        let after_click = mobile.then(|| close_menu.clone());
        let onclick = match item.section_id() {
            Some(id) => anchor_click(id, after_click),
            None => Callback::from(move |_: MouseEvent| {
                if let Some(after) = &after_click {
                    after.emit(());
                }
            }),
        };
        html! {
            <a href={href} class={class} onclick={onclick}>
                <span>{ item.label }</span>
                if mobile && active {
                    <span class="active-dot" />
                } else if !mobile {
                    <span class="underline" />
                }
            </a>
        }
    };

    let cta_href = localized_href(locale, "/#contact-form");
    let menu_timeline = menu_items(items.len() + 1);
    let menu_phase = if *menu_open { RevealPhase::Revealing } else { RevealPhase::Hidden };

    html! {
        <>
            <header
                ref={header_ref}
                class={classes!("site-header", is_scrolled.then(|| "scrolled"))}
                style={entrance.style(entrance_phase, 0, 0)}
            >
                <nav class="header-nav">
                    <div class="header-bar">
                        <Logo size={36} />

                        <ul class="desktop-links">
                            { for items.iter().map(|item| html! { <li>{ render_link(item, false) }</li> }) }
                        </ul>

                        <div class="desktop-actions">
                            <LanguageSwitcher />
                            <a href={cta_href.clone()} class="header-cta" onclick={anchor_click("contact-form", None)}>
                                { text.get_started }
                            </a>
                        </div>

                        <button
                            class="menu-toggle"
                            onclick={toggle_menu}
                            aria-label={if *menu_open { text.close_menu } else { text.open_menu }}
                        >
                            { if *menu_open { "✕" } else { "☰" } }
                        </button>
                    </div>

                    <div class={classes!("mobile-menu", menu_open.then(|| "open"))}>
                        <ul>
                            { for items.iter().enumerate().map(|(i, item)| html! {
                                <li class="mobile-menu-item" style={menu_timeline.style(menu_phase, 0, i)}>
                                    { render_link(item, true) }
                                </li>
                            }) }
                        </ul>
                        <div class="mobile-menu-item mobile-actions" style={menu_timeline.style(menu_phase, 0, items.len())}>
                            <LanguageSwitcher />
                            <a
                                href={cta_href}
                                class="header-cta"
                                onclick={anchor_click("contact-form", Some(close_menu.clone()))}
                            >
                                { text.get_started }
                            </a>
                        </div>
                    </div>
                </nav>
            </header>

            if *menu_open {
                <div class="menu-overlay" onclick={overlay_click} />
            }

            <DynamicGradient />

            <style>
                {r#"
                .site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    background: transparent;
                    transition: background 0.3s ease, border-color 0.3s ease;
                    border-bottom: 1px solid transparent;
                }
                .site-header.scrolled {
                    background: rgba(0, 0, 0, 0.8);
                    backdrop-filter: blur(24px);
                    border-bottom-color: rgba(255, 255, 255, 0.1);
                }
                .header-nav {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 24px;
                }
                .header-bar {
                    display: flex;
                    height: 80px;
                    align-items: center;
                    justify-content: space-between;
                }
                .desktop-links {
                    display: flex;
                    gap: 32px;
                    list-style: none;
                    margin: 0;
                    padding: 0;
                }
                .nav-link {
                    position: relative;
                    color: rgba(255, 255, 255, 0.8);
                    text-decoration: none;
                    font-weight: 300;
                    transition: color 0.2s;
                }
                .nav-link:hover,
                .nav-link.active {
                    color: #fff;
                }
                .nav-link .underline {
                    position: absolute;
                    left: 0;
                    bottom: -4px;
                    height: 2px;
                    width: 0;
                    background: linear-gradient(to right, rgba(255, 255, 255, 0.6), #fff);
                    transition: width 0.3s;
                }
                .nav-link:hover .underline,
                .nav-link.active .underline {
                    width: 100%;
                }
                .desktop-actions {
                    display: flex;
                    align-items: center;
                    gap: 12px;
                }
                .header-cta {
                    border-radius: 12px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.1);
                    padding: 12px 24px;
                    color: #fff;
                    text-decoration: none;
                    font-weight: 300;
                    transition: background 0.2s;
                }
                .header-cta:hover {
                    background: rgba(255, 255, 255, 0.2);
                }
                .menu-toggle {
                    display: none;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.5rem;
                    cursor: pointer;
                }
                .mobile-menu {
                    display: none;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    padding: 16px 0;
                }
                .mobile-menu ul {
                    list-style: none;
                    margin: 0;
                    padding: 0;
                }
                .mobile-link {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 12px 16px;
                    border-radius: 8px;
                    color: rgba(255, 255, 255, 0.8);
                    text-decoration: none;
                }
                .mobile-link.active {
                    color: #fff;
                    background: rgba(255, 255, 255, 0.05);
                }
                .active-dot {
                    width: 6px;
                    height: 6px;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.6);
                }
                .mobile-actions {
                    display: flex;
                    flex-direction: column;
                    gap: 16px;
                    margin-top: 24px;
                    padding-top: 16px;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                }
                .menu-overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 40;
                    background: rgba(0, 0, 0, 0.6);
                    backdrop-filter: blur(4px);
                }
                @media (max-width: 768px) {
                    .desktop-links,
                    .desktop-actions {
                        display: none;
                    }
                    .menu-toggle {
                        display: block;
                    }
                    .mobile-menu.open {
                        display: block;
                    }
                }
                @media (min-width: 769px) {
                    .menu-overlay {
                        display: none;
                    }
                }
                "#}
            </style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;

    #[test]
    fn every_tracked_section_has_a_link() {
        let items = nav_items(&strings(Locale::Pt).header);
        let anchors: Vec<_> = items.iter().filter_map(NavItem::section_id).collect();
        assert_eq!(anchors, TRACKED_SECTIONS.to_vec());
    }

    #[test]
    fn home_link_follows_the_router_path() {
        let items = nav_items(&strings(Locale::En).header);
        let home = &items[0];
        assert!(home.is_active(None, "/", &localized_href(Locale::En, home.href)));
        assert!(!home.is_active(None, "/cases", &localized_href(Locale::En, home.href)));
    }
}
