use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    #[prop_or_default]
    pub eyebrow: Option<AttrValue>,
    pub title: AttrValue,
    #[prop_or_default]
    pub desc: Option<AttrValue>,
    #[prop_or_default]
    pub centered: bool,
}

#[function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> Html {
    html! {
        <div class={classes!("section-header", props.centered.then(|| "centered"))}>
            {
                if let Some(eyebrow) = &props.eyebrow {
                    html! { <div class="eyebrow">{"✦ "}{eyebrow}</div> }
                } else {
                    html! {}
                }
            }
            <h2>{&props.title}</h2>
            {
                if let Some(desc) = &props.desc {
                    html! { <p class="section-desc">{desc}</p> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct GlassCardProps {
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

#[function_component(GlassCard)]
pub fn glass_card(props: &GlassCardProps) -> Html {
    html! {
        <div class={classes!("glass", "glass-card", props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}
