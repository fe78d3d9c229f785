use std::rc::Rc;

use yew::prelude::*;

use crate::components::section_header::SectionHeader;
use crate::config::SiteConfig;
use crate::tracking::observer::scroll_to_section;

/// The list is repeated this many times so the marquee loops without a gap.
const TRACK_COPIES: usize = 3;

pub struct TeamMember {
    pub id: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub image: Option<&'static str>,
    pub image_position: Option<&'static str>,
}

pub static PEOPLE: [TeamMember; 6] = [
    TeamMember {
        id: "t1",
        name: "Hamza Nayab",
        role: "CEO",
        image: Some("/assets/hamzanayab.jpg"),
        image_position: None,
    },
    TeamMember {
        id: "t2",
        name: "Zainab Iqbal",
        role: "CTO",
        image: Some("/assets/zainab.jpg"),
        image_position: Some("center 20%"),
    },
    TeamMember {
        id: "t3",
        name: "Rana Talha",
        role: "COO",
        image: Some("/assets/Talha.jpg"),
        image_position: None,
    },
    TeamMember {
        id: "t4",
        name: "Daniyal Rao",
        role: "BDM",
        image: Some("/assets/dani.jpg"),
        image_position: None,
    },
    TeamMember {
        id: "t5",
        name: "Farheen Ather",
        role: "BDM",
        image: Some("/assets/farheen.jpg"),
        image_position: None,
    },
    TeamMember {
        id: "t6",
        name: "Hamza Mumtaz",
        role: "BDM",
        image: Some("/assets/hamza.png"),
        image_position: None,
    },
];

/// Members repeated `copies` times, each paired with a key unique across the track.
pub fn carousel_track(people: &[TeamMember], copies: usize) -> Vec<(String, &TeamMember)> {
    (0..copies)
        .flat_map(|_| people.iter())
        .enumerate()
        .map(|(idx, person)| (format!("{}-{}", person.id, idx), person))
        .collect()
}

fn portrait(person: &TeamMember) -> Html {
    match person.image {
        Some(src) => {
            let style = person
                .image_position
                .map(|pos| format!("object-position: {};", pos));
            html! { <img src={src} alt={person.name} loading="lazy" style={style} /> }
        }
        None => html! { <div class="team-placeholder">{"Profile image"}</div> },
    }
}

#[derive(Properties, PartialEq)]
pub struct TeamProps {
    pub config: Rc<SiteConfig>,
}

#[function_component(Team)]
pub fn team(props: &TeamProps) -> Html {
    let to_contact = {
        let nav_height = props.config.tracker.nav_height;
        Callback::from(move |_: MouseEvent| scroll_to_section("contact", nav_height))
    };

    html! {
        <section id="team" class="team-section">
            <style>
                {r#"
                    .team-carousel {
                        overflow: hidden;
                        mask-image: linear-gradient(to right, transparent, #000 8%, #000 92%, transparent);
                    }
                    .team-track {
                        display: flex;
                        gap: 20px;
                        width: max-content;
                        animation: teamMarquee 40s linear infinite;
                    }
                    .team-carousel:hover .team-track {
                        animation-play-state: paused;
                    }
                    @keyframes teamMarquee {
                        from { transform: translateX(0); }
                        to { transform: translateX(-33.3333%); }
                    }
                    @media (prefers-reduced-motion: reduce) {
                        .team-track { animation: none; }
                    }
                "#}
            </style>
            <div class="section-inner team-head">
                <SectionHeader
                    eyebrow="Team"
                    title="Meet Our Team"
                    desc="Small team. High taste. Focused execution."
                />
                <button type="button" class="cta cta-outline" onclick={to_contact}>
                    {"Meet the Team"}
                </button>
            </div>
            <div class="team-carousel">
                <div class="team-track">
                    {
                        for carousel_track(&PEOPLE, TRACK_COPIES).into_iter().map(|(key, person)| html! {
                            <div key={key} class="glass team-card">
                                <div class="team-portrait">{portrait(person)}</div>
                                <div class="team-name">{person.name}</div>
                                <div class="team-role">{person.role}</div>
                            </div>
                        })
                    }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn track_repeats_members_with_unique_keys() {
        let track = carousel_track(&PEOPLE, TRACK_COPIES);
        assert_eq!(track.len(), PEOPLE.len() * TRACK_COPIES);

        let keys: HashSet<_> = track.iter().map(|(key, _)| key.as_str()).collect();
        assert_eq!(keys.len(), track.len());

        assert_eq!(track[0].1.id, "t1");
        assert_eq!(track[PEOPLE.len()].1.id, "t1");
        assert_eq!(track[PEOPLE.len()].0, "t1-6");
    }

    #[test]
    fn empty_team_gives_empty_track() {
        assert!(carousel_track(&[], 3).is_empty());
    }
}
