use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod carousel;
mod catalog;
mod config;
mod contact_form;
mod content;
mod resolver;
mod reveal;
mod store;
mod components {
    pub mod brand_strip;
    pub mod contact_section;
    pub mod footer;
    pub mod header;
    pub mod icons;
}
mod pages {
    pub mod home;
    pub mod not_found;
    pub mod service_detail;
}

use pages::{
    home::Home,
    not_found::NotFound,
    service_detail::ServiceDetail,
};
use store::{apply_theme, AppStore, StoreContext, Theme};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/service/:slug")]
    ServiceDetail { slug: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::ServiceDetail { slug } => {
            info!("Rendering Service page for {}", slug);
            // Keyed so a new slug mounts a fresh page instead of reusing state.
            let key = slug.clone();
            html! { <ServiceDetail key={key} {slug} /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    let store = use_reducer(AppStore::load);

    {
        use_effect_with_deps(move |theme: &Theme| {
            apply_theme(*theme);
            || ()
        }, store.theme);
    }

    html! {
        <ContextProvider<StoreContext> context={store}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<StoreContext>>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
