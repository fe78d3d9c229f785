use std::rc::Rc;

use yew::prelude::*;

use crate::components::theme::ThemeMode;
use crate::components::toast::{Toast, ToastKind, ToastMessage};
use crate::config::SiteConfig;
use crate::pages::{
    contact::Contact, expertise::Expertise, footer::Footer, hero::Hero, story::Story, team::Team,
    testimonials::Testimonials, work::Work,
};
use crate::tracking::observer::{use_active_section, use_scroll_progress, IntersectionObserverSource};
use crate::Nav;

#[function_component(TopProgress)]
fn top_progress() -> Html {
    let progress = use_scroll_progress();
    html! {
        <div
            class="top-progress"
            style={format!("transform: scaleX({:.4});", progress)}
            aria-hidden="true"
        ></div>
    }
}

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub config: Rc<SiteConfig>,
    pub theme: ThemeMode,
    pub on_toggle_theme: Callback<()>,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let config = props.config.clone();
    let active = use_active_section(
        IntersectionObserverSource::from_settings(&config.tracker),
        config.section_ids(),
        config.tracker.policy,
        config.tracker.min_ratio,
    );

    let toast = use_state(|| None::<ToastMessage>);
    let toast_seq = use_mut_ref(|| 0u32);

    let on_notify = {
        let toast = toast.clone();
        Callback::from(move |(kind, text): (ToastKind, String)| {
            let seq = {
                let mut counter = toast_seq.borrow_mut();
                *counter = counter.wrapping_add(1);
                *counter
            };
            toast.set(Some(ToastMessage { kind, text, seq }));
        })
    };
    let on_dismiss = {
        let toast = toast.clone();
        Callback::from(move |_| toast.set(None))
    };

    html! {
        <div class="landing-page">
            <TopProgress />
            <Nav
                config={config.clone()}
                active_id={active}
                theme={props.theme}
                on_toggle_theme={props.on_toggle_theme.clone()}
            />
            <main class="sections">
                <Hero config={config.clone()} />
                <Story />
                <Expertise />
                <Work />
                <Team config={config.clone()} />
                <Testimonials />
                <Contact config={config.clone()} on_notify={on_notify} />
            </main>
            <Footer config={config} theme={props.theme} />
            <Toast toast={(*toast).clone()} on_dismiss={on_dismiss} />
        </div>
    }
}
