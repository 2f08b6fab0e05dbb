//! Application-wide state shared through a `ContextProvider`.
//!
//! Only the theme lives here. Scroll and menu flags stay local to the
//! components that own them.

use std::rc::Rc;

use web_sys::window;
use yew::prelude::*;

const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_class(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// A saved choice wins over the system preference.
    pub fn initial(saved: Option<&str>, prefers_dark: bool) -> Theme {
        saved.and_then(Theme::parse).unwrap_or(if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        })
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "Mudar para modo escuro",
            Theme::Dark => "Mudar para modo claro",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppStore {
    pub theme: Theme,
}

pub enum StoreAction {
    ToggleTheme,
}

impl Reducible for AppStore {
    type Action = StoreAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            StoreAction::ToggleTheme => Rc::new(AppStore {
                theme: self.theme.toggled(),
            }),
        }
    }
}

pub type StoreContext = UseReducerHandle<AppStore>;

impl AppStore {
    pub fn load() -> Self {
        AppStore {
            theme: Theme::initial(saved_theme().as_deref(), prefers_dark()),
        }
    }
}

fn saved_theme() -> Option<String> {
    window()?.local_storage().ok()??.get_item(THEME_KEY).ok()?
}

fn prefers_dark() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// Puts the theme class on `<html>` and remembers the choice.
pub fn apply_theme(theme: Theme) {
    let Some(window) = window() else {
        return;
    };
    if let Some(root) = window.document().and_then(|d| d.document_element()) {
        let classes = root.class_list();
        let _ = classes.remove_2(Theme::Light.as_class(), Theme::Dark.as_class());
        let _ = classes.add_1(theme.as_class());
    }
    if let Ok(Some(storage)) = window.local_storage() {
        if storage.set_item(THEME_KEY, theme.as_class()).is_err() {
            log::warn!("Could not persist theme");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_is_identity() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_ne!(theme.toggled(), theme);
            assert_eq!(theme.toggled().toggled(), theme);
        }
    }

    #[test]
    fn parse_accepts_only_known_names() {
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse(Theme::Light.as_class()), Some(Theme::Light));
        assert_eq!(Theme::parse("Dark"), None);
        assert_eq!(Theme::parse(""), None);
    }

    #[test]
    fn saved_theme_beats_system_preference() {
        assert_eq!(Theme::initial(Some("light"), true), Theme::Light);
        assert_eq!(Theme::initial(Some("dark"), false), Theme::Dark);
        assert_eq!(Theme::initial(Some("sepia"), true), Theme::Dark);
        assert_eq!(Theme::initial(None, false), Theme::Light);
    }

    #[test]
    fn reducer_flips_theme() {
        let store = Rc::new(AppStore { theme: Theme::Light });
        let store = store.reduce(StoreAction::ToggleTheme);
        assert_eq!(store.theme, Theme::Dark);
        let store = store.reduce(StoreAction::ToggleTheme);
        assert_eq!(store.theme, Theme::Light);
    }
}
