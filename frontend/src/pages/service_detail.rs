use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::{window, MouseEvent};
use log::info;

use crate::catalog::{ServiceRecord, CONTACT_PHONE};
use crate::components::{
    footer::Footer,
    header::{scroll_to_section, Header, HeaderConfig},
    icons,
};
use crate::config::PHONE_HREF;
use crate::resolver::{DetailState, Resolution, ServiceResolver};
use crate::reveal::{reveal_classes, use_reveal, Section};
use crate::store::StoreContext;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ServiceDetailProps {
    pub slug: String,
}

/// Resolves the slug and picks Loading, Found or NotFound. Mounted with
/// `key = slug` so each service gets fresh reveal state.
#[function_component(ServiceDetail)]
pub fn service_detail(props: &ServiceDetailProps) -> Html {
    let resolver = use_mut_ref(ServiceResolver::from_catalog);
    let state = use_state(|| DetailState::Loading);
    let theme = use_context::<StoreContext>()
        .map(|s| s.theme)
        .unwrap_or_else(|| HeaderConfig::default().theme);

    {
        let resolver: Rc<RefCell<ServiceResolver<'static>>> = resolver.clone();
        let state = state.clone();
        use_effect_with_deps(move |slug: &String| {
            if let Some(window) = window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            let mut resolver = resolver.borrow_mut();
            let ticket = resolver.begin(slug);
            state.set(DetailState::Loading);
            if resolver.complete(&ticket) {
                if let DetailState::Resolved(Resolution::NotFound) = resolver.state() {
                    info!("No service for slug {:?}", ticket.slug());
                }
                state.set(resolver.state());
            }
            || ()
        }, props.slug.clone());
    }

    let body = match *state {
        DetailState::Loading => html! {
            <div class="detail-loading">
                <div class="spinner"></div>
            </div>
        },
        DetailState::Resolved(Resolution::NotFound) => html! {
            <div class="detail-missing">
                <h1>{"Serviço não encontrado"}</h1>
                <p>{"O serviço que você está procurando não foi encontrado."}</p>
                <Link<Route> to={Route::Home} classes="primary-button">
                    {"Voltar para a página inicial"}
                </Link<Route>>
            </div>
        },
        DetailState::Resolved(Resolution::Found(record)) => html! {
            <ServiceView {record} />
        },
    };

    html! {
        <div class="service-detail-page">
            <Header config={HeaderConfig { theme, show_logo: true }} />
            { body }
            <Footer />
            <style>
                {r#"
                .detail-loading, .detail-missing {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                    text-align: center;
                }
                .spinner {
                    width: 4rem;
                    height: 4rem;
                    border: 4px solid #FFC400;
                    border-top-color: transparent;
                    border-radius: 9999px;
                    animation: spin 1s linear infinite;
                }
                @keyframes spin { to { transform: rotate(360deg); } }
                .detail-missing h1 { font-size: 2.25rem; font-weight: 700; margin-bottom: 1rem; }
                .detail-missing p { color: #4B5563; margin-bottom: 2rem; }
                .primary-button {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    background: #FFC400;
                    color: #000000;
                    font-weight: 600;
                    padding: 0.9rem 1.75rem;
                    border: none;
                    border-radius: 0.375rem;
                    text-decoration: none;
                    cursor: pointer;
                }
                .outline-button {
                    display: inline-flex;
                    align-items: center;
                    padding: 0.9rem 1.75rem;
                    border: 1px solid rgba(255, 255, 255, 0.3);
                    border-radius: 0.375rem;
                    color: #ffffff;
                    text-decoration: none;
                }
                .detail-hero {
                    position: relative;
                    padding: 8rem 1.5rem 5rem;
                    background: #000000;
                    color: #ffffff;
                    overflow: hidden;
                }
                .detail-hero-cover {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    opacity: 0.4;
                }
                .eyebrow { display: flex; align-items: center; margin-bottom: 1.5rem; }
                .eyebrow-bar { width: 3rem; height: 4px; background: #FFC400; }
                .eyebrow span { margin-left: 1rem; color: #9CA3AF; font-size: 0.875rem; text-transform: uppercase; letter-spacing: 0.1em; }
                .detail-hero-content { position: relative; max-width: 48rem; margin: 0 auto 0 8%; }
                .detail-hero h1 { font-size: 3.25rem; font-weight: 700; margin-bottom: 1.5rem; }
                .detail-hero p { color: #D1D5DB; font-size: 1.25rem; margin-bottom: 2.5rem; }
                .detail-body {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 5rem 1.5rem;
                    display: grid;
                    grid-template-columns: 2fr 1fr;
                    gap: 4rem;
                }
                .detail-body h2 { font-size: 2.25rem; font-weight: 700; margin-bottom: 2rem; }
                .detail-body p { color: #374151; font-size: 1.125rem; line-height: 1.75; margin-bottom: 1.5rem; }
                .benefits-card {
                    padding: 2rem;
                    border-radius: 0.75rem;
                    border: 1px solid #F3F4F6;
                    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.08);
                }
                .benefits-card .service-icon { color: #FFC400; }
                .benefits-card ul { list-style: none; padding: 0; }
                .benefits-card li { display: flex; gap: 0.75rem; margin-bottom: 1rem; }
                .check-icon { width: 20px; height: 20px; flex-shrink: 0; color: #FFC400; }
                .detail-process, .detail-projects { padding: 5rem 1.5rem; }
                .detail-process { background: #F9FAFB; }
                .detail-heading { text-align: center; max-width: 42rem; margin: 0 auto 4rem; }
                .detail-heading h2 { font-size: 2.25rem; font-weight: 700; }
                .accent-bar { width: 6rem; height: 4px; background: #FFC400; margin: 1rem auto 0; }
                .process-grid, .projects-grid {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: grid;
                    gap: 2rem;
                }
                .process-grid { grid-template-columns: repeat(3, 1fr); }
                .projects-grid { grid-template-columns: repeat(2, 1fr); }
                .process-step {
                    position: relative;
                    overflow: hidden;
                    padding: 2rem;
                    border-radius: 0.75rem;
                    background: #ffffff;
                    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.06);
                }
                .step-number {
                    position: absolute;
                    right: -1rem;
                    top: -2rem;
                    font-size: 7.5rem;
                    font-weight: 700;
                    color: #F3F4F6;
                }
                .process-step h3, .process-step p { position: relative; }
                .project-card { position: relative; overflow: hidden; border-radius: 0.75rem; }
                .project-card img { width: 100%; height: 100%; object-fit: cover; transition: transform 0.7s ease; }
                .project-card:hover img { transform: scale(1.1); }
                .project-caption {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    flex-direction: column;
                    justify-content: flex-end;
                    padding: 1.5rem;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.8), transparent);
                    color: #ffffff;
                }
                .project-category {
                    align-self: flex-start;
                    background: rgba(255, 196, 0, 0.8);
                    color: #000000;
                    font-size: 0.75rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    padding: 0.25rem 0.5rem;
                    border-radius: 0.25rem;
                    margin-bottom: 0.5rem;
                }
                .projects-more { text-align: center; margin-top: 4rem; }
                .detail-cta { padding: 5rem 1.5rem; background: #000000; color: #ffffff; text-align: center; }
                .detail-cta h2 { font-size: 2.25rem; font-weight: 700; margin-bottom: 1.5rem; }
                .detail-cta p { color: #D1D5DB; font-size: 1.125rem; margin-bottom: 2.5rem; }
                .cta-actions { display: flex; gap: 1rem; justify-content: center; flex-wrap: wrap; }
                .reveal-up { opacity: 0; transform: translateY(2.5rem); transition: all 1s ease; }
                .reveal-rise { opacity: 0; transform: translateY(5rem); transition: all 1s ease; }
                .reveal-left { opacity: 0; transform: translateX(5rem); transition: all 1s ease; }
                .reveal-in { opacity: 1; transform: translate(0, 0); transition: all 1s ease; }
                @media (max-width: 768px) {
                    .detail-body, .process-grid, .projects-grid { grid-template-columns: 1fr; }
                    .detail-hero h1 { font-size: 2.25rem; }
                }
                "#}
            </style>
        </div>
    }
}

#[derive(Properties)]
struct ServiceViewProps {
    record: &'static ServiceRecord,
}

impl PartialEq for ServiceViewProps {
    fn eq(&self, other: &Self) -> bool {
        self.record.slug == other.record.slug
    }
}

#[function_component(ServiceView)]
fn service_view(props: &ServiceViewProps) -> Html {
    let record = props.record;
    let hero_ref = use_node_ref();
    let description_ref = use_node_ref();
    let benefits_ref = use_node_ref();
    let process_ref = use_node_ref();
    let projects_ref = use_node_ref();

    let reveal = use_reveal(vec![
        (Section::Hero, hero_ref.clone()),
        (Section::Description, description_ref.clone()),
        (Section::Benefits, benefits_ref.clone()),
        (Section::Process, process_ref.clone()),
        (Section::RelatedProjects, projects_ref.clone()),
    ]);
    let shown = |section: Section, hidden: &'static str| reveal_classes(reveal.is_revealed(section), hidden);

    let to_contact = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_section("contacto");
    });

    html! {
        <>
            <section class="detail-hero" ref={hero_ref}>
                <img class="detail-hero-cover" src={record.cover_image_url} alt={record.title} />
                <div class="detail-hero-content">
                    <div class="eyebrow">
                        <div class="eyebrow-bar"></div>
                        <span>{"Nossos serviços"}</span>
                    </div>
                    <h1 class={shown(Section::Hero, "reveal-up")}>{record.title}</h1>
                    <p class={shown(Section::Hero, "reveal-up")}>{record.short_description}</p>
                    <div class={shown(Section::Hero, "reveal-up")}>
                        <button class="primary-button" onclick={to_contact.clone()}>
                            {"Solicitar este serviço"}
                            { icons::arrow_right() }
                        </button>
                    </div>
                </div>
            </section>

            <section class="detail-body">
                <div ref={description_ref}>
                    <div class={shown(Section::Description, "reveal-up")}>
                        <h2>{"Sobre este serviço"}</h2>
                        { for record.long_description.iter().map(|paragraph| html! { <p>{*paragraph}</p> }) }
                    </div>
                    <button class="primary-button" onclick={to_contact}>
                        {"Fale conosco sobre este serviço"}
                        { icons::arrow_right() }
                    </button>
                </div>
                <aside ref={benefits_ref} class={classes!("benefits-card", shown(Section::Benefits, "reveal-left"))}>
                    { icons::service_icon(record.icon, 32) }
                    <h3>{"Por que escolher este serviço?"}</h3>
                    <ul>
                        { for record.benefits.iter().map(|benefit| html! {
                            <li>{ icons::check_circle() }<span>{*benefit}</span></li>
                        }) }
                    </ul>
                </aside>
            </section>

            <section class="detail-process" ref={process_ref}>
                <div class={classes!("detail-heading", shown(Section::Process, "reveal-up"))}>
                    <h2>{"Nosso Processo"}</h2>
                    <div class="accent-bar"></div>
                    <p>{"Conheça nossa metodologia estruturada para entrega de resultados excepcionais"}</p>
                </div>
                <div class="process-grid">
                    { for record.process_steps.iter().map(|step| html! {
                        <div class={classes!("process-step", shown(Section::Process, "reveal-rise"))}>
                            <span class="step-number">{step.step_number.to_string()}</span>
                            <h3>{step.title}</h3>
                            <p>{step.description}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="detail-projects" ref={projects_ref}>
                <div class={classes!("detail-heading", shown(Section::RelatedProjects, "reveal-up"))}>
                    <h2>{"Projetos Relacionados"}</h2>
                    <div class="accent-bar"></div>
                    <p>{"Conheça alguns dos nossos trabalhos recentes nesta área"}</p>
                </div>
                <div class="projects-grid">
                    { for record.related_projects.iter().map(|project| html! {
                        <div key={project.id} class={classes!("project-card", shown(Section::RelatedProjects, "reveal-rise"))}>
                            <img src={project.image_url} alt={project.title} />
                            <div class="project-caption">
                                <span class="project-category">{project.category}</span>
                                <h3>{project.title}</h3>
                                <p>{format!("Cliente: {}", project.client)}</p>
                            </div>
                        </div>
                    }) }
                </div>
                <div class="projects-more">
                    <a href="/#portfolio" class="primary-button">{"Ver todos os projetos"}</a>
                </div>
            </section>

            <section id="contacto" class="detail-cta">
                <h2>{"Pronto para transformar sua marca?"}</h2>
                <p>{format!("Entre em contato conosco para discutir como podemos ajudar a elevar sua marca através de {}", record.title)}</p>
                <div class="cta-actions">
                    <a class="primary-button" href={record.mailto_href()}>{"Enviar e-mail"}</a>
                    <a class="outline-button" href={PHONE_HREF}>{CONTACT_PHONE}</a>
                </div>
            </section>
        </>
    }
}
