use yew::prelude::*;

use crate::components::section_header::SectionHeader;

struct Step {
    title: &'static str,
    line: &'static str,
}

const STEPS: [Step; 3] = [
    Step {
        title: "Idea",
        line: "We extract what makes you unmistakably you.",
    },
    Step {
        title: "Identity",
        line: "A visual language: type, tone, and rhythm.",
    },
    Step {
        title: "Digital Presence",
        line: "A story-style landing page that feels expensive.",
    },
];

#[function_component(Story)]
pub fn story() -> Html {
    html! {
        <section id="story" class="story-section">
            <div class="process-grid-bg" aria-hidden="true"></div>
            <div class="section-inner">
                <SectionHeader
                    eyebrow="Process"
                    title="From Idea → Identity → Digital Presence"
                    desc="A simple three-step journey. Nothing noisy. Everything intentional."
                />
                <div class="process-flow">
                    <span class="process-connector" aria-hidden="true"></span>
                    {
                        for STEPS.iter().enumerate().map(|(i, step)| html! {
                            <div key={step.title} class="glass process-card">
                                <div class="process-step">{format!("{:02}", i + 1)}</div>
                                <h3>{step.title}</h3>
                                <p>{step.line}</p>
                            </div>
                        })
                    }
                </div>
            </div>
        </section>
    }
}
