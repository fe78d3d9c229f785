use std::rc::Rc;

use yew::prelude::*;

use crate::config::SiteConfig;
use crate::tracking::observer::scroll_to_section;

const PILLS: [&str; 4] = ["Story-led Design", "Premium UI", "Considerate", "Responsive"];

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub config: Rc<SiteConfig>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let nav_height = props.config.tracker.nav_height;
    let go_to = move |id: &'static str| Callback::from(move |_: MouseEvent| scroll_to_section(id, nav_height));

    html! {
        <section id="home" class="hero">
            <div class="hero-grid-bg" aria-hidden="true"></div>
            <div class="hero-inner">
                <div class="hero-copy">
                    <div class="badge">{"🪄 Dubai-based personalized web presence"}</div>
                    <h1>{"Your story, distilled into a premium online identity."}</h1>
                    <p class="hero-subtitle">
                        {"Minimal. Elegant. Built to convert curiosity into clients."}
                    </p>
                    <div class="hero-cta-group">
                        <button type="button" class="cta cta-primary" onclick={go_to("contact")}>
                            {"Start Your Brand →"}
                        </button>
                        <button type="button" class="cta cta-ghost" onclick={go_to("work")}>
                            {"View Work"}
                        </button>
                    </div>
                    <div class="hero-pills">
                        { for PILLS.iter().map(|pill| html! { <span key={*pill} class="pill">{*pill}</span> }) }
                    </div>
                </div>
                <div class="hero-visual" aria-hidden="true">
                    <div class="shape-3d-container shape-3d-container-md">
                        <div class="shape-3d-cube">
                            <div class="shape-3d-face shape-3d-front"></div>
                            <div class="shape-3d-face shape-3d-back"></div>
                            <div class="shape-3d-face shape-3d-right"></div>
                            <div class="shape-3d-face shape-3d-left"></div>
                            <div class="shape-3d-face shape-3d-top"></div>
                            <div class="shape-3d-face shape-3d-bottom"></div>
                        </div>
                    </div>
                    <div class="hero-brand-card glass">
                        <img src={props.config.dark_logo_path.clone()} alt={props.config.brand_name.clone()} />
                        <span>{&props.config.brand_tagline}</span>
                    </div>
                </div>
            </div>
        </section>
    }
}
