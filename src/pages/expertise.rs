use yew::prelude::*;

use crate::components::section_header::{GlassCard, SectionHeader};

const ITEMS: [(&str, &str, &str); 3] = [
    ("✨", "AI Development", "Smart features, quietly integrated."),
    ("🪄", "Web Development", "Fast, responsive, premium feel."),
    ("📱", "Mobile App Development", "Polished experiences on the go."),
];

#[function_component(Expertise)]
pub fn expertise() -> Html {
    html! {
        <section id="expertise" class="expertise-section">
            <div class="process-grid-bg" aria-hidden="true"></div>
            <div class="section-inner">
                <SectionHeader
                    eyebrow="Expertise"
                    title="Three ways we build modern brands"
                    desc="Only what matters. No filler services."
                />
                <div class="card-grid">
                    {
                        for ITEMS.iter().map(|(icon, title, desc)| html! {
                            <GlassCard key={*title} class={classes!("expertise-card")}>
                                <div class="card-icon">{*icon}</div>
                                <h3>{*title}</h3>
                                <p>{*desc}</p>
                            </GlassCard>
                        })
                    }
                </div>
            </div>
        </section>
    }
}
