use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use log::info;

use crate::contact_form::{self, ContactForm, Field, SubmitState, SENT_NOTICE};
use crate::content::CONTACT_INFO;

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let form = use_state(ContactForm::default);
    let submit_state = use_state(|| SubmitState::Idle);

    let on_input = |field: Field| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            next.set(field, value);
            form.set(next);
        })
    };

    let input_handler = |field: Field| {
        let update = on_input(field);
        Callback::from(move |e: InputEvent| {
            update.emit(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let message_handler = {
        let update = on_input(Field::Message);
        Callback::from(move |e: InputEvent| {
            update.emit(e.target_unchecked_into::<HtmlTextAreaElement>().value());
        })
    };

    let onsubmit = {
        let form = form.clone();
        let submit_state = submit_state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !submit_state.can_submit() {
                return;
            }
            if let Err(err) = form.validate() {
                submit_state.set(SubmitState::Failed(err.to_string()));
                return;
            }

            submit_state.set(SubmitState::Submitting);
            let form = form.clone();
            let submit_state = submit_state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = contact_form::submit(&form).await;
                if outcome == SubmitState::Sent {
                    info!("Contact form sent");
                    form.set(ContactForm::default());
                }
                submit_state.set(outcome);
            });
        })
    };

    let busy = !submit_state.can_submit();

    html! {
        <section id="contacto" class="contact-section">
            <div class="contact-grid">
                <div>
                    <div class="eyebrow">
                        <div class="eyebrow-bar"></div>
                        <span>{"CONTACTE-NOS"}</span>
                    </div>
                    <h2>{"Vamos transformar a sua marca juntos"}</h2>
                    <p class="muted">
                        {"Estamos prontos para entender os seus desafios e criar soluções que elevem a sua marca a outro nível. Preencha o formulário e entraremos em contacto em até 24 horas."}
                    </p>
                    <div class="contact-info-grid">
                        { for CONTACT_INFO.iter().map(|info| html! {
                            <div class="contact-info-item">
                                <span class="contact-info-title">{info.title}</span>
                                <div class="muted">
                                    { for info.details.iter().map(|d| html! { <p>{*d}</p> }) }
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
                <form class="contact-form" {onsubmit}>
                    <label for="name">{"Nome"}</label>
                    <input id="name" type="text" value={form.name.clone()} oninput={input_handler(Field::Name)} />
                    <label for="email">{"E-mail"}</label>
                    <input id="email" type="email" value={form.email.clone()} oninput={input_handler(Field::Email)} />
                    <label for="subject">{"Assunto"}</label>
                    <input id="subject" type="text" value={form.subject.clone()} oninput={input_handler(Field::Subject)} />
                    <label for="message">{"Mensagem"}</label>
                    <textarea id="message" rows="5" value={form.message.clone()} oninput={message_handler} />
                    <button type="submit" class="submit-button" disabled={busy}>
                        { if busy { "Enviando..." } else { "Enviar Mensagem" } }
                    </button>
                    {
                        match &*submit_state {
                            SubmitState::Sent => html! {
                                <p class="form-notice success">{"Mensagem enviada! "}{SENT_NOTICE}</p>
                            },
                            SubmitState::Failed(message) => html! {
                                <p class="form-notice error">{message}</p>
                            },
                            _ => html! {},
                        }
                    }
                </form>
            </div>
            <style>
                {r#"
                .contact-section {
                    background: #000000;
                    color: #ffffff;
                    padding: 5rem 1.5rem;
                }
                .contact-grid {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                }
                .contact-section h2 { font-size: 2.25rem; font-weight: 700; margin-bottom: 1.5rem; }
                .contact-info-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2rem;
                    margin-top: 3rem;
                }
                .contact-info-title { font-weight: 500; }
                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    background: #111111;
                    padding: 2rem;
                    border-radius: 0.5rem;
                }
                .contact-form input, .contact-form textarea {
                    background: #1F1F1F;
                    border: 1px solid #333333;
                    color: #ffffff;
                    padding: 0.75rem;
                    border-radius: 0.375rem;
                    margin-bottom: 0.75rem;
                }
                .submit-button {
                    background: #FFC400;
                    color: #000000;
                    font-weight: 600;
                    padding: 0.9rem;
                    border: none;
                    border-radius: 0.375rem;
                    cursor: pointer;
                }
                .submit-button:disabled { opacity: 0.6; cursor: not-allowed; }
                .form-notice.success { color: #4ADE80; }
                .form-notice.error { color: #F87171; }
                @media (max-width: 768px) {
                    .contact-grid, .contact-info-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </section>
    }
}
