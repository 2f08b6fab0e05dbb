use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::catalog;
use crate::content::NAV_LINKS;
use crate::Route;

pub fn copyright_line(year: i32) -> String {
    format!("© {} Nzinga - Comunicação, Imagem e Estratégia. Todos os direitos reservados.", year)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <img src="/images/logo.png" alt="Nzinga Logo" class="footer-logo" />
                    <p>{"Elevamos marcas através de estratégias inovadoras de comunicação, criatividade e soluções digitais impactantes para o mercado global."}</p>
                    <div class="social-links">
                        <a href="https://facebook.com" target="_blank" rel="noopener noreferrer">{"Facebook"}</a>
                        <a href="https://instagram.com" target="_blank" rel="noopener noreferrer">{"Instagram"}</a>
                        <a href="https://linkedin.com" target="_blank" rel="noopener noreferrer">{"LinkedIn"}</a>
                    </div>
                </div>
                <div>
                    <h4>{"Links Rápidos"}</h4>
                    <ul>
                        { for NAV_LINKS.iter().map(|link| html! {
                            <li><a href={format!("/#{}", link.section_id)}>{link.label}</a></li>
                        }) }
                    </ul>
                </div>
                <div>
                    <h4>{"Serviços"}</h4>
                    <ul>
                        { for catalog::all().iter().map(|service| html! {
                            <li>
                                <Link<Route> to={Route::ServiceDetail { slug: service.slug.to_string() }}>
                                    {service.title}
                                </Link<Route>>
                            </li>
                        }) }
                    </ul>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{copyright_line(year)}</p>
            </div>
            <style>
                {r#"
                .site-footer {
                    background: #000000;
                    color: #9CA3AF;
                    padding: 4rem 1.5rem 2rem;
                }
                .footer-grid {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 2fr 1fr 1fr;
                    gap: 3rem;
                }
                .footer-logo { height: 48px; width: auto; }
                .site-footer h4 { color: #ffffff; margin-bottom: 1rem; }
                .site-footer ul { list-style: none; padding: 0; }
                .site-footer li { margin-bottom: 0.5rem; }
                .site-footer a { color: #9CA3AF; text-decoration: none; }
                .site-footer a:hover { color: #FFC400; }
                .social-links { display: flex; gap: 1rem; margin-top: 1rem; }
                .footer-bottom {
                    max-width: 1200px;
                    margin: 3rem auto 0;
                    padding-top: 2rem;
                    border-top: 1px solid #1F2937;
                    font-size: 0.875rem;
                }
                @media (max-width: 768px) {
                    .footer-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_carries_the_year() {
        assert!(copyright_line(2026).starts_with("© 2026 Nzinga"));
    }
}
