use std::rc::Rc;

use chrono::Datelike;
use yew::prelude::*;

use crate::components::theme::ThemeMode;
use crate::config::SiteConfig;
use crate::tracking::observer::scroll_to_section;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub config: Rc<SiteConfig>,
    pub theme: ThemeMode,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let config = &props.config;
    let year = chrono::Local::now().year();
    let nav_height = config.tracker.nav_height;

    html! {
        <footer class="site-footer">
            <div class="section-inner">
                <div class="glass footer-grid">
                    <div>
                        <div class="footer-brand">
                            <img src={props.theme.logo(config).to_string()} alt={config.brand_name.clone()} />
                            <div>
                                <div class="footer-name">{&config.brand_name}</div>
                                <div class="footer-tagline">{&config.brand_tagline}</div>
                            </div>
                        </div>
                        <p class="footer-desc">
                            {format!(
                                "{} is a premium branding studio crafting digital identities that convert. \
                                 Based in Dubai, we specialize in story-led design, strategic positioning, \
                                 and high-performance websites for ambitious brands.",
                                config.brand_name
                            )}
                        </p>
                    </div>
                    <div>
                        <div class="footer-title">{"Quick links"}</div>
                        <div class="footer-links">
                            {
                                for config.nav_links.iter().map(|link| {
                                    let id = link.id.clone();
                                    let onclick = Callback::from(move |_: MouseEvent| scroll_to_section(&id, nav_height));
                                    html! {
                                        <button key={link.id.clone()} type="button" class="footer-link" onclick={onclick}>
                                            {&link.label}
                                        </button>
                                    }
                                })
                            }
                        </div>
                    </div>
                    <div>
                        <div class="footer-title">{"Social"}</div>
                        <div class="footer-social">
                            {
                                for config.social_links.iter().map(|social| html! {
                                    <a key={social.id.clone()} href={social.url.clone()} target="_blank" rel="noreferrer">
                                        {&social.label}
                                    </a>
                                })
                            }
                        </div>
                        <div class="footer-copy">
                            {format!("© {} {}. All rights reserved.", year, config.brand_name)}
                        </div>
                    </div>
                </div>
            </div>
        </footer>
    }
}
