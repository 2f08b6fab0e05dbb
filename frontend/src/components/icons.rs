use yew::prelude::*;

use crate::catalog::ServiceIcon;

fn stroke_svg(size: u32, class: &'static str, body: Html) -> Html {
    html! {
        <svg xmlns="http://www.w3.org/2000/svg" width={size.to_string()} height={size.to_string()}
            viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"
            stroke-linecap="round" stroke-linejoin="round" class={class}>
            { body }
        </svg>
    }
}

pub fn service_icon(icon: ServiceIcon, size: u32) -> Html {
    let body = match icon {
        ServiceIcon::Megaphone => html! {
            <>
                <path d="m3 11 18-5v12L3 14v-3z"></path>
                <path d="M11.6 16.8a3 3 0 1 1-5.8-1.6"></path>
            </>
        },
        ServiceIcon::Globe => html! {
            <>
                <circle cx="12" cy="12" r="10"></circle>
                <path d="M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20"></path>
                <path d="M2 12h20"></path>
            </>
        },
        ServiceIcon::Palette => html! {
            <>
                <circle cx="13.5" cy="6.5" r="2.5"></circle>
                <circle cx="17.5" cy="10.5" r="2.5"></circle>
                <circle cx="8.5" cy="7.5" r="2.5"></circle>
                <circle cx="6.5" cy="12.5" r="2.5"></circle>
                <path d="M12 22v-6"></path>
                <path d="M14.5 18h-5"></path>
                <path d="M13.75 6.5 17 10"></path>
                <path d="M8.75 7.5 7 11"></path>
                <path d="M11.5 6.5l-3 1"></path>
                <path d="M16.5 10.5l-1 2"></path>
            </>
        },
        ServiceIcon::Layout => html! {
            <>
                <rect width="18" height="18" x="3" y="3" rx="2"></rect>
                <path d="M7 7h.01"></path>
                <path d="M11 7h.01"></path>
                <path d="M15 7h.01"></path>
                <path d="M7 11h.01"></path>
                <path d="M11 11h.01"></path>
                <path d="M15 11h.01"></path>
                <path d="M7 15h.01"></path>
                <path d="M11 15h.01"></path>
                <path d="M15 15h.01"></path>
            </>
        },
        ServiceIcon::Clipboard => html! {
            <>
                <path d="M8 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V4a2 2 0 0 0-2-2h-2"></path>
                <path d="M9 2h6v4H9z"></path>
                <path d="M7 8h10"></path>
                <path d="M7 12h10"></path>
                <path d="M7 16h10"></path>
            </>
        },
        ServiceIcon::Info => html! {
            <>
                <path d="M12 16v-4"></path>
                <path d="M12 8h.01"></path>
                <circle cx="12" cy="12" r="10"></circle>
            </>
        },
    };
    stroke_svg(size, "service-icon", body)
}

pub fn arrow_right() -> Html {
    stroke_svg(20, "arrow-icon", html! {
        <>
            <path d="M5 12h14" />
            <path d="m12 5 7 7-7 7" />
        </>
    })
}

pub fn check_circle() -> Html {
    html! {
        <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 20 20" fill="currentColor" class="check-icon">
            <path fill-rule="evenodd" d="M10 18a8 8 0 100-16 8 8 0 000 16zm3.707-9.293a1 1 0 00-1.414-1.414L9 10.586 7.707 9.293a1 1 0 00-1.414 1.414l2 2a1 1 0 001.414 0l4-4z" clip-rule="evenodd" />
        </svg>
    }
}

pub fn moon() -> Html {
    stroke_svg(18, "theme-icon", html! { <path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"></path> })
}

pub fn sun() -> Html {
    stroke_svg(18, "theme-icon", html! {
        <>
            <circle cx="12" cy="12" r="4"></circle>
            <path d="M12 2v2"></path>
            <path d="M12 20v2"></path>
            <path d="m4.93 4.93 1.41 1.41"></path>
            <path d="m17.66 17.66 1.41 1.41"></path>
            <path d="M2 12h2"></path>
            <path d="M20 12h2"></path>
            <path d="m6.34 17.66-1.41 1.41"></path>
            <path d="m19.07 4.93-1.41 1.41"></path>
        </>
    })
}
