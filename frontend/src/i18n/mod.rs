pub mod locale;
pub mod strings;

use yew::prelude::*;
use yew_router::prelude::*;

pub use locale::{localized_href, switch_locale_path, Locale};
pub use strings::strings;

/// Locale of the current route, read from the path prefix.
#[hook]
pub fn use_locale() -> Locale {
    let location = use_location();
    location
        .map(|location| Locale::from_path(location.path()))
        .unwrap_or_default()
}
