use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::header::{Header, HeaderConfig};
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page">
            <Header config={HeaderConfig { show_logo: true, ..Default::default() }} />
            <div class="not-found-content">
                <h1>{"404"}</h1>
                <p>{"A página que você está procurando não existe."}</p>
                <Link<Route> to={Route::Home} classes="not-found-link">
                    {"Voltar para a página inicial"}
                </Link<Route>>
            </div>
            <style>
                {r#"
                .not-found-content {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1.5rem;
                    background: #000000;
                    color: #ffffff;
                }
                .not-found-content h1 { font-size: 4rem; font-weight: 800; color: #FFC400; }
                .not-found-link {
                    background: #FFC400;
                    color: #000000;
                    padding: 0.9rem 1.75rem;
                    border-radius: 0.375rem;
                    text-decoration: none;
                    font-weight: 600;
                }
                "#}
            </style>
        </div>
    }
}
