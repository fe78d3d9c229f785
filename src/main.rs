use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;
use log::{error, info, Level};
use web_sys::MouseEvent;

mod config;
mod tracking {
    pub mod active_section;
    pub mod observer;
}
mod contact {
    pub mod draft;
    pub mod link;
}
mod components {
    pub mod section_header;
    pub mod theme;
    pub mod toast;
}
mod pages {
    pub mod contact;
    pub mod expertise;
    pub mod footer;
    pub mod hero;
    pub mod home;
    pub mod not_found;
    pub mod story;
    pub mod team;
    pub mod testimonials;
    pub mod work;
}

use components::theme::{use_theme, use_theme_ramp, ThemeMode};
use config::SiteConfig;
use pages::{home::Home, not_found::NotFound};
use tracking::observer::{scroll_to_section, use_scrolled};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route, config: Rc<SiteConfig>, theme: ThemeMode, on_toggle_theme: Callback<()>) -> Html {
    match route {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home config={config} theme={theme} on_toggle_theme={on_toggle_theme} /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub config: Rc<SiteConfig>,
    pub active_id: String,
    pub theme: ThemeMode,
    pub on_toggle_theme: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { config, active_id, theme, on_toggle_theme } = props;
    let menu_open = use_state(|| false);
    let is_scrolled = use_scrolled(config.tracker.scrolled_threshold);
    let nav_height = config.tracker.nav_height;

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let go_to = |id: String| {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_section(&id, nav_height);
            menu_open.set(false);
        })
    };

    let toggle_theme = {
        let on_toggle_theme = on_toggle_theme.clone();
        Callback::from(move |_: MouseEvent| on_toggle_theme.emit(()))
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#home" class="nav-logo" onclick={go_to("home".to_string())}>
                    <img src={theme.logo(config).to_string()} alt={config.brand_name.clone()} />
                </a>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    {
                        for config.nav_links.iter().map(|link| html! {
                            <a
                                key={link.id.clone()}
                                href={format!("#{}", link.id)}
                                class={classes!("nav-link", (link.id == *active_id).then(|| "active"))}
                                onclick={go_to(link.id.clone())}
                            >
                                {&link.label}
                            </a>
                        })
                    }
                    <button class="theme-toggle" onclick={toggle_theme} aria-label="Toggle theme">
                        { if theme.is_dark() { "☀" } else { "☾" } }
                    </button>
                </div>
            </div>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: Rc<SiteConfig>,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    let (theme, toggle_theme) = use_theme();
    use_theme_ramp(props.config.theme_ramp.clone());

    let render = {
        let config = props.config.clone();
        Callback::from(move |route: Route| switch(route, config.clone(), theme, toggle_theme.clone()))
    };

    html! {
        <BrowserRouter>
            <Switch<Route> render={render} />
        </BrowserRouter>
    }
}

#[derive(Properties, PartialEq)]
pub struct ConfigFailureProps {
    pub message: String,
}

#[function_component]
fn ConfigFailure(props: &ConfigFailureProps) -> Html {
    html! {
        <div class="config-failure">
            <h1>{"Site configuration error"}</h1>
            <pre>{&props.message}</pre>
        </div>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    match SiteConfig::embedded() {
        Ok(config) => {
            yew::Renderer::<App>::with_props(AppProps { config: Rc::new(config) }).render();
        }
        Err(err) => {
            error!("invalid site config: {}", err);
            yew::Renderer::<ConfigFailure>::with_props(ConfigFailureProps { message: err.to_string() }).render();
        }
    }
}
