use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::{window, MouseEvent, ScrollBehavior, ScrollIntoViewOptions};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::components::icons;
use crate::content::NAV_LINKS;
use crate::store::{StoreAction, StoreContext, Theme};
use crate::Route;

const SCROLL_THRESHOLD: f64 = 50.0;

#[derive(Clone, Copy, PartialEq)]
pub struct HeaderConfig {
    pub theme: Theme,
    pub show_logo: bool,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        HeaderConfig { theme: Theme::Dark, show_logo: true }
    }
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    #[prop_or_default]
    pub config: HeaderConfig,
}

/// Smooth-scrolls to `id` if it is on the current page. Returns false otherwise.
pub fn scroll_to_section(id: &str) -> bool {
    let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return false;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let HeaderConfig { theme, show_logo } = props.config;
    let store = use_context::<StoreContext>();
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = window();
            let scroll_callback = {
                let window = window.clone();
                Closure::wrap(Box::new(move || {
                    let y = window.as_ref().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
                    is_scrolled.set(y > SCROLL_THRESHOLD);
                }) as Box<dyn FnMut()>)
            };

            if let Some(window) = &window {
                let _ = window.add_event_listener_with_callback(
                    "scroll",
                    scroll_callback.as_ref().unchecked_ref(),
                );
            }

            move || {
                if let Some(window) = &window {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let toggle_theme = {
        let store = store.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            e.stop_propagation();
            if let Some(store) = &store {
                store.dispatch(StoreAction::ToggleTheme);
            }
        })
    };

    let current_theme = store.as_ref().map(|s| s.theme).unwrap_or(theme);

    let links = NAV_LINKS.iter().map(|link| {
        let menu_open = menu_open.clone();
        let id = link.section_id;
        let onclick = Callback::from(move |e: MouseEvent| {
            if scroll_to_section(id) {
                e.prevent_default();
            }
            menu_open.set(false);
        });
        html! {
            <a href={format!("/#{}", id)} class="nav-link" {onclick}>{link.label}</a>
        }
    });

    html! {
        <header class={classes!(
            "site-header",
            format!("header-{}", theme.as_class()),
            (*is_scrolled).then(|| "scrolled"),
        )}>
            <div class="nav-content">
                {
                    if show_logo {
                        html! {
                            <Link<Route> to={Route::Home} classes="nav-logo">
                                <img src="/images/logo.png" alt="Nzinga Logo" />
                            </Link<Route>>
                        }
                    } else {
                        html! {}
                    }
                }
                <nav class={classes!("nav-links", (*menu_open).then(|| "mobile-menu-open"))}>
                    { for links }
                </nav>
                <div class="nav-actions">
                    <button type="button" class="theme-toggle"
                        aria-label={current_theme.toggle_label()} onclick={toggle_theme}>
                        { if current_theme == Theme::Light { icons::moon() } else { icons::sun() } }
                    </button>
                    <button class="burger-menu" aria-label="Menu" onclick={toggle_menu}>
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </div>
            <style>
                {r#"
                .site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    padding: 1.25rem 0;
                    transition: background-color 0.3s ease, padding 0.3s ease, box-shadow 0.3s ease;
                }
                .site-header.scrolled {
                    padding: 0.75rem 0;
                    box-shadow: 0 2px 12px rgba(0, 0, 0, 0.15);
                }
                .header-dark.scrolled { background: rgba(0, 0, 0, 0.92); }
                .header-light.scrolled { background: rgba(255, 255, 255, 0.95); }
                .header-dark .nav-link { color: #ffffff; }
                .header-light .nav-link { color: #111111; }
                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo img { height: 40px; width: auto; }
                .nav-links { display: flex; gap: 2rem; }
                .nav-link {
                    text-decoration: none;
                    font-weight: 500;
                    transition: color 0.2s ease;
                }
                .nav-link:hover { color: #FFC400; }
                .nav-actions { display: flex; align-items: center; gap: 0.75rem; }
                .theme-toggle {
                    width: 40px;
                    height: 40px;
                    border-radius: 9999px;
                    border: none;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(255, 255, 255, 0.3);
                    cursor: pointer;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #FFC400;
                }
                @media (max-width: 768px) {
                    .burger-menu { display: flex; }
                    .nav-links {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        padding: 1.5rem;
                        background: rgba(0, 0, 0, 0.95);
                    }
                    .nav-links.mobile-menu-open { display: flex; }
                    .nav-links .nav-link { color: #ffffff; }
                }
                "#}
            </style>
        </header>
    }
}
