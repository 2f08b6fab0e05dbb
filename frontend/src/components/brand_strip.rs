use yew::prelude::*;

use crate::carousel::{
    self, repeat_items, BrowserScheduler, CarouselEngine, Marquee, DEFAULT_COPIES,
    DEFAULT_STEP_WIDTH,
};
use crate::content::{Brand, BRANDS};
use crate::store::Theme;

#[derive(Clone, Copy, PartialEq)]
pub struct BrandStripConfig {
    pub theme: Theme,
    pub copies: usize,
    pub step_width: u32,
}

impl Default for BrandStripConfig {
    fn default() -> Self {
        BrandStripConfig {
            theme: Theme::Light,
            copies: DEFAULT_COPIES,
            step_width: DEFAULT_STEP_WIDTH,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct BrandStripProps {
    #[prop_or_default]
    pub config: BrandStripConfig,
    #[prop_or(AttrValue::Static("Empresas que confiam na Nzinga"))]
    pub title: AttrValue,
}

/// Text colour for a brand block. Light backgrounds get black text,
/// everything else white.
pub fn contrast_color(background: &str) -> &'static str {
    const LIGHT_BACKGROUNDS: [&str; 2] = ["#FBBC05", "#00BFFF"];
    if LIGHT_BACKGROUNDS.iter().any(|c| c.eq_ignore_ascii_case(background)) {
        "#000000"
    } else {
        "#FFFFFF"
    }
}

fn brand_tile(brand: &Brand, step_width: u32) -> Html {
    let block = format!(
        "background-color: {}; color: {}",
        brand.color,
        contrast_color(brand.color)
    );
    html! {
        <div class="brand-slot" style={format!("width: {}px", step_width)}>
            <div class="brand-block" style={block}>
                {brand.name}
            </div>
        </div>
    }
}

#[function_component(BrandStrip)]
pub fn brand_strip(props: &BrandStripProps) -> Html {
    let BrandStripConfig { theme, copies, step_width } = props.config;
    let offset = use_state(|| 0);

    {
        let offset = offset.clone();
        use_effect_with_deps(
            move |&(item_count, step_width): &(usize, u32)| {
                offset.set(0);
                let mut marquee: Marquee<BrowserScheduler> =
                    Marquee::new(CarouselEngine::new(item_count, step_width));
                marquee.start(&BrowserScheduler, move |value| offset.set(value));

                move || marquee.stop()
            },
            (BRANDS.len(), step_width),
        );
    }

    let brands: Vec<&Brand> = BRANDS.iter().collect();
    let strip = repeat_items(&brands, copies);

    html! {
        <section class={classes!("brand-strip", format!("brand-strip-{}", theme.as_class()))}>
            <div class="brand-strip-heading">
                <h3>{props.title.clone()}</h3>
                <div class="accent-bar"></div>
                <p>{"Orgulhamo-nos de trabalhar com estas marcas de referência, ajudando-as a elevar a sua comunicação e estratégia."}</p>
            </div>
            <div class="brand-strip-viewport">
                <div class="brand-fade brand-fade-left"></div>
                <div class="brand-track" style={carousel::translate_style(*offset)}>
                    { for strip.iter().map(|brand| brand_tile(brand, step_width)) }
                </div>
                <div class="brand-fade brand-fade-right"></div>
            </div>
            <style>
                {r#"
                .brand-strip {
                    padding: 4rem 0;
                    overflow: hidden;
                }
                .brand-strip-light { background: #F9FAFB; color: #111827; }
                .brand-strip-dark { background: #111827; color: #ffffff; }
                .brand-strip-heading {
                    text-align: center;
                    max-width: 42rem;
                    margin: 0 auto 2.5rem;
                    padding: 0 1rem;
                }
                .brand-strip-heading h3 { font-size: 1.875rem; font-weight: 700; }
                .accent-bar {
                    width: 5rem;
                    height: 4px;
                    background: #FFC400;
                    margin: 1rem auto;
                }
                .brand-strip-viewport {
                    position: relative;
                    width: 100%;
                    overflow: hidden;
                }
                .brand-track {
                    display: flex;
                    align-items: center;
                    padding: 2rem 0;
                    will-change: transform;
                }
                .brand-slot {
                    flex: 0 0 auto;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .brand-block {
                    padding: 1rem 1.5rem;
                    border-radius: 0.5rem;
                    font-weight: 700;
                }
                .brand-fade {
                    position: absolute;
                    top: 0;
                    bottom: 0;
                    width: 5rem;
                    z-index: 10;
                }
                .brand-strip-light .brand-fade-left { left: 0; background: linear-gradient(to right, #F9FAFB, transparent); }
                .brand-strip-light .brand-fade-right { right: 0; background: linear-gradient(to left, #F9FAFB, transparent); }
                .brand-strip-dark .brand-fade-left { left: 0; background: linear-gradient(to right, #111827, transparent); }
                .brand-strip-dark .brand-fade-right { right: 0; background: linear-gradient(to left, #111827, transparent); }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_backgrounds_get_black_text() {
        assert_eq!(contrast_color("#00BFFF"), "#000000");
        assert_eq!(contrast_color("#fbbc05"), "#000000");
    }

    #[test]
    fn other_backgrounds_get_white_text() {
        for brand in BRANDS.iter().filter(|b| b.color != "#00BFFF") {
            assert_eq!(contrast_color(brand.color), "#FFFFFF", "{}", brand.name);
        }
        assert_eq!(contrast_color("not-a-colour"), "#FFFFFF");
    }
}
