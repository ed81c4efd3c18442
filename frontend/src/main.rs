use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod analytics;
mod config;
mod http;
mod api;
mod animation;
mod cases;
mod contact;
mod i18n;
mod navigation;
mod components {
    pub mod about;
    pub mod case_card;
    pub mod charts;
    pub mod contact_form;
    pub mod dynamic_gradient;
    pub mod footer;
    pub mod global_presence;
    pub mod header;
    pub mod hero;
    pub mod hover_card;
    pub mod language_switcher;
    pub mod logo;
    pub mod revenue_impact;
    pub mod showcase;
    pub mod what_we_do;
    pub mod world_map;
}
mod pages {
    pub mod cases;
    pub mod home;
    pub mod not_found;
}
mod admin {
    pub mod dashboard;
}

use admin::dashboard::AdminDashboard;
use i18n::Locale;
use pages::{cases::Cases, home::Home, not_found::NotFound};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/cases")]
    Cases,
    #[at("/admin")]
    Admin,
    #[at("/:locale")]
    LocalizedHome { locale: String },
    #[at("/:locale/cases")]
    LocalizedCases { locale: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub fn home(locale: Locale) -> Route {
        if locale.is_default() {
            Route::Home
        } else {
            Route::LocalizedHome { locale: locale.code().to_string() }
        }
    }

    pub fn cases(locale: Locale) -> Route {
        if locale.is_default() {
            Route::Cases
        } else {
            Route::LocalizedCases { locale: locale.code().to_string() }
        }
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Cases => {
            info!("Rendering Cases page");
            html! { <Cases /> }
        }
        Route::Admin => {
            info!("Rendering Admin page");
            html! { <AdminDashboard /> }
        }
        Route::LocalizedHome { locale } => match Locale::from_code(&locale) {
            Some(_) => {
                info!("Rendering Home page ({})", locale);
                html! { <Home /> }
            }
            None => {
                info!("Unknown locale {}, rendering NotFound page", locale);
                html! { <NotFound /> }
            }
        },
        Route::LocalizedCases { locale } => match Locale::from_code(&locale) {
            Some(_) => {
                info!("Rendering Cases page ({})", locale);
                html! { <Cases /> }
            }
            None => {
                info!("Unknown locale {}, rendering NotFound page", locale);
                html! { <NotFound /> }
            }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

/// Reports a page view to the ad pixels whenever the route changes.
#[function_component]
fn PageViews() -> Html {
    let path = use_location().map(|location| location.path().to_string());

    use_effect_with_deps(
        |_| {
            analytics::track_page_view();
            || ()
        },
        path,
    );

    html! {}
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <PageViews />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if let Err(err) = console_log::init_with_level(Level::Info) {
        gloo_console::error!(format!("error initializing log: {}", err));
    }

    info!("Starting application");
    analytics::install_tags();
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_locale_routes_are_unprefixed() {
        assert_eq!(Route::home(Locale::En).to_path(), "/");
        assert_eq!(Route::cases(Locale::En).to_path(), "/cases");
        assert_eq!(Route::home(Locale::Pt).to_path(), "/pt");
        assert_eq!(Route::cases(Locale::Pt).to_path(), "/pt/cases");
    }

    #[test]
    fn switched_paths_are_recognized() {
        let next = i18n::switch_locale_path("/cases", "pt");
        assert_eq!(Route::recognize(&next), Some(Route::cases(Locale::Pt)));
        let back = i18n::switch_locale_path(&next, "en");
        assert_eq!(Route::recognize(&back), Some(Route::Cases));
    }

    #[test]
    fn static_routes_win_over_locale_segment() {
        assert_eq!(Route::recognize("/admin"), Some(Route::Admin));
        assert_eq!(
            Route::recognize("/xx"),
            Some(Route::LocalizedHome { locale: "xx".to_string() })
        );
    }
}
