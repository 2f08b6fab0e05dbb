use yew::prelude::*;
use yew_router::prelude::*;
use gloo_timers::callback::Interval;
use web_sys::MouseEvent;

use crate::catalog;
use crate::components::{
    brand_strip::{BrandStrip, BrandStripConfig},
    contact_section::ContactSection,
    footer::Footer,
    header::{scroll_to_section, Header, HeaderConfig},
    icons,
};
use crate::content::{FAQS, PORTFOLIO, STATS, TESTIMONIALS};
use crate::reveal::{observe_entry, reveal_classes};
use crate::store::StoreContext;
use crate::Route;

const TESTIMONIAL_ROTATION_MS: u32 = 5_000;

pub fn next_testimonial(current: usize, count: usize) -> usize {
    if count == 0 {
        0
    } else {
        (current + 1) % count
    }
}

/// One FAQ item open at a time; clicking the open one closes it.
pub fn toggle_faq(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[function_component(HeroSection)]
fn hero_section() -> Html {
    let read_more = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_section("servicos");
    });

    html! {
        <section id="hero" class="hero">
            <div class="hero-content">
                <h1>{"Transformamos a sua marca em uma experiência memorável"}</h1>
                <p class="hero-subtitle">
                    {"Combinamos criatividade, estratégia e tecnologia para criar soluções inovadoras que elevam a comunicação da sua marca."}
                </p>
                <button class="hero-cta" onclick={read_more}>
                    {"Ler Mais"}
                    { icons::arrow_right() }
                </button>
            </div>
        </section>
    }
}

#[function_component(ServicesSection)]
fn services_section() -> Html {
    html! {
        <section id="servicos" class="services">
            <div class="section-heading">
                <h2>{"Nossos Serviços"}</h2>
                <div class="accent-bar"></div>
                <p class="muted">{"Oferecemos soluções integradas e personalizadas para impulsionar sua marca no mercado."}</p>
            </div>
            <div class="card-grid">
                { for catalog::all().iter().map(|service| html! {
                    <Link<Route> to={Route::ServiceDetail { slug: service.slug.to_string() }} classes="service-card">
                        <div class="service-card-icon">{ icons::service_icon(service.icon, 32) }</div>
                        <h3>{service.title}</h3>
                        <p class="muted">{service.short_description}</p>
                    </Link<Route>>
                }) }
            </div>
        </section>
    }
}

#[function_component(PortfolioSection)]
fn portfolio_section() -> Html {
    html! {
        <section id="portfolio" class="portfolio">
            <div class="section-heading">
                <h2>{"Nosso Portfólio"}</h2>
                <div class="accent-bar"></div>
                <p class="muted">{"Conheça alguns dos nossos projetos mais recentes e como transformamos desafios em soluções criativas."}</p>
            </div>
            <div class="card-grid">
                { for PORTFOLIO.iter().map(|item| html! {
                    <div class="portfolio-item">
                        <img src={item.image} alt={item.title} />
                        <div class="portfolio-overlay">
                            <h3>{item.title}</h3>
                            <p>{item.category}</p>
                        </div>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(AboutSection)]
fn about_section() -> Html {
    html! {
        <section id="sobre" class="about">
            <img class="about-image"
                src="https://images.unsplash.com/photo-1600880292203-757bb62b4baf?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&h=750"
                alt="Equipe de trabalho diversificada em escritório moderno" />
            <div>
                <div class="eyebrow">
                    <div class="eyebrow-bar"></div>
                    <span>{"SOBRE NÓS"}</span>
                </div>
                <h2>{"Uma agência com DNA africano e visão global"}</h2>
                <p class="muted">
                    {"A Nzinga nasceu da paixão por contar histórias autênticas e construir marcas que deixam legado. Nossa missão é transformar a comunicação das empresas angolanas e africanas, combinando nossas raízes culturais com as melhores práticas internacionais."}
                </p>
                <p class="muted">
                    {"Com uma equipe multidisciplinar de criativos, estrategistas e executores, trabalhamos para elevar as marcas a outro patamar de comunicação e imagem."}
                </p>
                <div class="stats">
                    { for STATS.iter().map(|(value, label)| html! {
                        <div>
                            <h3 class="stat-value">{*value}</h3>
                            <p class="muted">{*label}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(TestimonialSection)]
fn testimonial_section() -> Html {
    let section_ref = use_node_ref();
    let in_view = use_state(|| false);
    let active = use_state(|| 0usize);

    {
        let in_view = in_view.clone();
        use_effect_with_deps(move |node: &NodeRef| {
            let observation = observe_entry(node, move || in_view.set(true));
            move || drop(observation)
        }, section_ref.clone());
    }

    // Rotation only starts once the section has been seen. Re-armed on every
    // index change so a manual pick gets the full interval.
    {
        let deps = (*in_view, *active);
        let active = active.clone();
        use_effect_with_deps(move |&(in_view, current): &(bool, usize)| {
            let interval = in_view.then(|| {
                Interval::new(TESTIMONIAL_ROTATION_MS, move || {
                    active.set(next_testimonial(current, TESTIMONIALS.len()));
                })
            });
            move || drop(interval)
        }, deps);
    }

    let select = |index: usize| {
        let active = active.clone();
        Callback::from(move |_: MouseEvent| active.set(index))
    };

    html! {
        <section id="depoimentos" class="testimonials" ref={section_ref}>
            <div class={classes!("section-heading", reveal_classes(*in_view, "reveal-up"))}>
                <span class="eyebrow-text">{"Histórias de sucesso"}</span>
                <h2>{"O Que Dizem Nossos Clientes"}</h2>
            </div>
            <div class="testimonial-stage">
                { for TESTIMONIALS.iter().enumerate().map(|(index, t)| html! {
                    <div class={classes!("testimonial-card", (index == *active).then(|| "active"))}>
                        <p class="testimonial-quote">{format!("\u{201C}{}\u{201D}", t.content)}</p>
                        <div class="testimonial-author">
                            <img src={t.image} alt={t.name} title={t.initials()} />
                            <div>
                                <h4>{t.name}</h4>
                                <p class="muted">{t.role}</p>
                                <p class="company">{t.company}</p>
                            </div>
                        </div>
                    </div>
                }) }
            </div>
            <div class="testimonial-dots">
                { for (0..TESTIMONIALS.len()).map(|index| html! {
                    <button
                        class={classes!("dot", (index == *active).then(|| "active"))}
                        aria-label={format!("Ver depoimento {}", index + 1)}
                        onclick={select(index)}
                    />
                }) }
            </div>
        </section>
    }
}

#[function_component(FaqSection)]
fn faq_section() -> Html {
    let open = use_state(|| Some(0usize));

    html! {
        <section id="faq" class="faq">
            <div class="section-heading">
                <h2>{"Perguntas Frequentes"}</h2>
                <div class="accent-bar"></div>
                <p class="muted">{"Respostas para as dúvidas mais comuns sobre nossos serviços e processo de trabalho."}</p>
            </div>
            <div class="faq-list">
                { for FAQS.iter().enumerate().map(|(index, (question, answer))| {
                    let is_open = *open == Some(index);
                    let toggle = {
                        let open = open.clone();
                        Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            open.set(toggle_faq(*open, index));
                        })
                    };
                    html! {
                        <div class={classes!("faq-item", is_open.then(|| "open"))}>
                            <button class="faq-question" onclick={toggle}
                                aria-expanded={is_open.to_string()}
                                aria-controls={format!("faq-answer-{}", index)}>
                                <span>{*question}</span>
                                <span class="toggle-icon">{ if is_open { "−" } else { "+" } }</span>
                            </button>
                            <div id={format!("faq-answer-{}", index)} class="faq-answer">
                                <p>{*answer}</p>
                            </div>
                        </div>
                    }
                }) }
            </div>
            <div class="faq-footer">
                <p class="muted">{"Não encontrou a resposta que procurava? Entre em contato conosco."}</p>
                <a href="#contacto" class="hero-cta">{"Fale Conosco"}</a>
            </div>
        </section>
    }
}

#[function_component]
pub fn Home() -> Html {
    let theme = use_context::<StoreContext>().map(|s| s.theme).unwrap_or_else(|| HeaderConfig::default().theme);
    let strip_config = BrandStripConfig { theme, ..Default::default() };

    html! {
        <div class="home-page">
            <Header config={HeaderConfig { theme, show_logo: true }} />
            <HeroSection />
            <ServicesSection />
            <PortfolioSection />
            <BrandStrip config={strip_config} />
            <AboutSection />
            <TestimonialSection />
            <FaqSection />
            <ContactSection />
            <Footer />
            <style>
                {r#"
                .home-page { background: #ffffff; color: #111111; }
                .dark .home-page { background: #0B0B0B; color: #F3F4F6; }
                .muted { color: #AAAAAA; }
                .accent-bar { width: 6rem; height: 4px; background: #FFC400; margin: 1.5rem auto 0; }
                .eyebrow { display: flex; align-items: center; margin-bottom: 1.5rem; }
                .eyebrow-bar { width: 3rem; height: 4px; background: #FFC400; }
                .eyebrow span { margin-left: 1rem; color: #AAAAAA; font-weight: 500; }
                .eyebrow-text { color: #FFC400; font-weight: 600; text-transform: uppercase; letter-spacing: 0.1em; font-size: 0.875rem; }
                .section-heading { text-align: center; max-width: 42rem; margin: 0 auto 4rem; }
                .section-heading h2 { font-size: 2.25rem; font-weight: 700; }
                .hero {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    background: linear-gradient(135deg, #000000 0%, #1a1a1a 100%);
                    color: #ffffff;
                    padding: 8rem 1.5rem 6rem;
                }
                .hero-content { max-width: 48rem; margin: 0 auto 0 10%; }
                .hero h1 { font-size: 3.5rem; font-weight: 800; line-height: 1.1; }
                .hero-subtitle { color: #AAAAAA; font-size: 1.25rem; margin-top: 2rem; }
                .hero-cta {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    margin-top: 2.5rem;
                    background: #FFC400;
                    color: #000000;
                    font-weight: 600;
                    padding: 1rem 1.5rem;
                    border: none;
                    border-radius: 0.375rem;
                    text-decoration: none;
                    cursor: pointer;
                }
                .services, .portfolio, .faq, .testimonials { padding: 5rem 1.5rem; }
                .card-grid {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                }
                .service-card {
                    display: block;
                    padding: 2rem;
                    border: 1px solid #EEEEEE;
                    border-radius: 0.5rem;
                    color: inherit;
                    text-decoration: none;
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }
                .service-card:hover { transform: translateY(-4px); box-shadow: 0 10px 30px rgba(0, 0, 0, 0.08); }
                .service-card-icon { color: #FFC400; margin-bottom: 1rem; }
                .portfolio-item { position: relative; overflow: hidden; border-radius: 0.5rem; }
                .portfolio-item img { width: 100%; height: 100%; object-fit: cover; transition: transform 0.5s ease; }
                .portfolio-item:hover img { transform: scale(1.05); }
                .portfolio-overlay {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    flex-direction: column;
                    justify-content: flex-end;
                    padding: 1.5rem;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.8), transparent);
                    color: #ffffff;
                }
                .about {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 5rem 1.5rem;
                }
                .about-image { width: 100%; border-radius: 0.5rem; box-shadow: 0 20px 40px rgba(0, 0, 0, 0.15); }
                .stats { display: flex; flex-wrap: wrap; gap: 2rem; margin-top: 2rem; }
                .stat-value { font-size: 2.25rem; font-weight: 700; color: #FFC400; }
                .testimonial-stage { position: relative; max-width: 48rem; margin: 0 auto; min-height: 320px; }
                .testimonial-card {
                    position: absolute;
                    inset: 0;
                    padding: 2.5rem;
                    border-radius: 1rem;
                    background: #ffffff;
                    box-shadow: 0 10px 40px rgba(0, 0, 0, 0.08);
                    opacity: 0;
                    transform: scale(0.95);
                    transition: opacity 0.7s ease, transform 0.7s ease;
                    pointer-events: none;
                }
                .testimonial-card.active { opacity: 1; transform: scale(1); pointer-events: auto; }
                .testimonial-quote { font-style: italic; font-size: 1.125rem; color: #374151; }
                .testimonial-author { display: flex; align-items: center; gap: 1rem; margin-top: 2rem; }
                .testimonial-author img { width: 56px; height: 56px; border-radius: 9999px; object-fit: cover; }
                .testimonial-author .company { color: #FFC400; font-size: 0.75rem; font-weight: 500; }
                .testimonial-dots { display: flex; justify-content: center; gap: 0.5rem; margin-top: 2rem; }
                .dot { width: 10px; height: 10px; border-radius: 9999px; border: none; background: #D1D5DB; cursor: pointer; }
                .dot.active { background: #FFC400; width: 28px; }
                .faq-list { max-width: 48rem; margin: 0 auto; }
                .faq-item { border-bottom: 1px solid #E5E7EB; }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    padding: 1.25rem 0;
                    background: none;
                    border: none;
                    font-size: 1.125rem;
                    font-weight: 600;
                    text-align: left;
                    cursor: pointer;
                    color: inherit;
                }
                .faq-answer { max-height: 0; overflow: hidden; transition: max-height 0.3s ease; }
                .faq-item.open .faq-answer { max-height: 500px; }
                .faq-footer { text-align: center; margin-top: 4rem; }
                .reveal-up { opacity: 0; transform: translateY(2.5rem); transition: all 1s ease; }
                .reveal-in { opacity: 1; transform: translateY(0); transition: all 1s ease; }
                @media (max-width: 768px) {
                    .card-grid, .about { grid-template-columns: 1fr; }
                    .hero h1 { font-size: 2.25rem; }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn testimonials_rotate_and_wrap() {
        let n = TESTIMONIALS.len();
        let mut index = 0;
        let mut seen = Vec::new();
        for _ in 0..n {
            index = next_testimonial(index, n);
            seen.push(index);
        }
        assert_eq!(index, 0);
        assert_eq!(seen.len(), n);
        assert_eq!(next_testimonial(0, 0), 0);
    }

    #[test]
    fn faq_keeps_a_single_item_open() {
        assert_eq!(toggle_faq(Some(0), 3), Some(3));
        assert_eq!(toggle_faq(None, 2), Some(2));
    }

    #[test]
    fn clicking_the_open_faq_closes_it() {
        assert_eq!(toggle_faq(Some(4), 4), None);
    }
}
