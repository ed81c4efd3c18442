/// Supported site languages. The active one lives in the URL prefix only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    En,
    Pt,
}

pub const DEFAULT_LOCALE: Locale = Locale::En;

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Pt];

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Pt => "pt",
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Locale::En => "🇺🇸",
            Locale::Pt => "🇧🇷",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Locale::En => "EN",
            Locale::Pt => "PT",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|locale| locale.code() == code)
    }

    pub fn is_default(self) -> bool {
        self == DEFAULT_LOCALE
    }

    /// Locale named by the first path segment, or the default one.
    pub fn from_path(path: &str) -> Self {
        split_locale_prefix(path)
            .map(|(locale, _)| locale)
            .unwrap_or(DEFAULT_LOCALE)
    }
}

impl Default for Locale {
    fn default() -> Self {
        DEFAULT_LOCALE
    }
}

/// Splits `/pt/cases` into `(Pt, "/cases")`. Only whole segments count, so
/// `/press` is not a Portuguese path.
fn split_locale_prefix(path: &str) -> Option<(Locale, &str)> {
    let rest = path.strip_prefix('/')?;
    Locale::ALL.into_iter().find_map(|locale| {
        let tail = rest.strip_prefix(locale.code())?;
        if tail.is_empty() || tail.starts_with('/') {
            Some((locale, tail))
        } else {
            None
        }
    })
}

/// Path for the same page under `target`. The default locale maps to
/// unprefixed paths; codes outside the locale set are used as-is.
pub fn switch_locale_path(path: &str, target: &str) -> String {
    let without_locale = match split_locale_prefix(path) {
        Some((_, rest)) => rest,
        None => path,
    };
    let rest = match without_locale {
        "" | "/" => "",
        other => other,
    };

    if Locale::from_code(target).map_or(false, Locale::is_default) {
        if rest.is_empty() {
            "/".to_string()
        } else {
            rest.to_string()
        }
    } else {
        format!("/{}{}", target, rest)
    }
}

/// Builds a link for `locale`. Hrefs of the form `/#section` or `/cases#slug`
/// keep their fragment.
pub fn localized_href(locale: Locale, href: &str) -> String {
    if !href.starts_with('/') {
        return href.to_string();
    }
    let (path, fragment) = match href.find('#') {
        Some(idx) => href.split_at(idx),
        None => (href, ""),
    };
    let path = switch_locale_path(path, locale.code());
    if fragment.is_empty() {
        path
    } else if path == "/" {
        format!("/{}", fragment)
    } else {
        format!("{}{}", path, fragment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_locale_strips_prefix() {
        assert_eq!(switch_locale_path("/pt/cases", "en"), "/cases");
        assert_eq!(switch_locale_path("/pt", "en"), "/");
        assert_eq!(switch_locale_path("", "en"), "/");
        assert_eq!(switch_locale_path("/", "en"), "/");
    }

    #[test]
    fn other_locale_adds_prefix() {
        assert_eq!(switch_locale_path("/cases", "pt"), "/pt/cases");
        assert_eq!(switch_locale_path("/", "pt"), "/pt");
        assert_eq!(switch_locale_path("/en/cases", "pt"), "/pt/cases");
        assert_eq!(switch_locale_path("/pt/cases", "pt"), "/pt/cases");
    }

    #[test]
    fn unknown_target_passes_through() {
        assert_eq!(switch_locale_path("/pt/cases", "de"), "/de/cases");
    }

    #[test]
    fn prefix_must_be_a_whole_segment() {
        assert_eq!(switch_locale_path("/press", "pt"), "/pt/press");
        assert_eq!(Locale::from_path("/english"), Locale::En);
        assert_eq!(Locale::from_path("/pt/cases"), Locale::Pt);
    }

    #[test]
    fn switching_back_restores_the_path() {
        let paths = ["/", "/cases", "/pt", "/pt/cases", "/en/cases", "/admin"];
        for path in paths {
            let original = Locale::from_path(path);
            for target in Locale::ALL.into_iter().filter(|l| *l != original) {
                let there = switch_locale_path(path, target.code());
                let back = switch_locale_path(&there, original.code());
                assert_eq!(back, switch_locale_path(path, original.code()), "path {path}");
            }
        }
    }

    #[test]
    fn localized_links_keep_fragments() {
        assert_eq!(localized_href(Locale::Pt, "/#showcase"), "/pt#showcase");
        assert_eq!(localized_href(Locale::En, "/#showcase"), "/#showcase");
        assert_eq!(localized_href(Locale::Pt, "/cases#adidas"), "/pt/cases#adidas");
        assert_eq!(localized_href(Locale::Pt, "#contact-form"), "#contact-form");
    }
}
