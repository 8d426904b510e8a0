use leptos::prelude::*;

/// Color-scheme preference cycled from the shell header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemePref {
    System,
    Light,
    Dark,
}

impl ThemePref {
    pub fn next(self) -> Self {
        match self {
            ThemePref::System => ThemePref::Light,
            ThemePref::Light => ThemePref::Dark,
            ThemePref::Dark => ThemePref::System,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemePref::System => "Theme: Auto",
            ThemePref::Light => "Theme: Light",
            ThemePref::Dark => "Theme: Dark",
        }
    }

    fn attr(self) -> Option<&'static str> {
        match self {
            ThemePref::System => None,
            ThemePref::Light => Some("light"),
            ThemePref::Dark => Some("dark"),
        }
    }
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub pref: RwSignal<ThemePref>,
}

/// Apply the preference by setting or removing the `data-theme`
/// attribute on `<html>`; with no attribute the CSS @media rules decide.
pub fn apply_theme(pref: ThemePref) {
    if let Some(window) = web_sys::window() {
        if let Some(doc) = window.document() {
            if let Some(html) = doc.document_element() {
                match pref.attr() {
                    Some(value) => {
                        let _ = html.set_attribute("data-theme", value);
                    }
                    None => {
                        let _ = html.remove_attribute("data-theme");
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pref_cycle_covers_all_variants() {
        let start = ThemePref::System;
        assert_eq!(start.next(), ThemePref::Light);
        assert_eq!(start.next().next(), ThemePref::Dark);
        assert_eq!(start.next().next().next(), start);
    }

    #[test]
    fn test_labels_are_distinct() {
        assert_ne!(ThemePref::System.label(), ThemePref::Light.label());
        assert_ne!(ThemePref::Light.label(), ThemePref::Dark.label());
    }
}
