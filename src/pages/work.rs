use yew::prelude::*;

use crate::components::section_header::SectionHeader;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorkCategory {
    Branding,
    Websites,
    Apps,
}

impl WorkCategory {
    pub fn label(self) -> &'static str {
        match self {
            WorkCategory::Branding => "Branding",
            WorkCategory::Websites => "Websites",
            WorkCategory::Apps => "Apps",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorkTab {
    All,
    Branding,
    Websites,
    Apps,
}

impl WorkTab {
    pub const ALL: [WorkTab; 4] = [WorkTab::All, WorkTab::Branding, WorkTab::Websites, WorkTab::Apps];

    pub fn label(self) -> &'static str {
        match self {
            WorkTab::All => "All",
            WorkTab::Branding => "Branding",
            WorkTab::Websites => "Websites",
            WorkTab::Apps => "Apps",
        }
    }

    pub fn admits(self, category: WorkCategory) -> bool {
        match self {
            WorkTab::All => true,
            WorkTab::Branding => category == WorkCategory::Branding,
            WorkTab::Websites => category == WorkCategory::Websites,
            WorkTab::Apps => category == WorkCategory::Apps,
        }
    }
}

pub enum Preview {
    Image { src: &'static str, background: &'static str },
    Terminal { headline: &'static str, caption: &'static str },
}

pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub category: WorkCategory,
    pub line: &'static str,
    pub url: &'static str,
    pub preview: Preview,
}

pub static PROJECTS: [Project; 6] = [
    Project {
        id: "p1",
        title: "Wesbridge Associates",
        category: WorkCategory::Websites,
        line: "A website for a lawfirm in UK.",
        url: "https://www.wesbridgeassociates.co.uk/",
        preview: Preview::Image {
            src: "https://www.wesbridgeassociates.co.uk/assets/wesbridge-logo-new-B4voiEXE.svg",
            background: "#fff",
        },
    },
    Project {
        id: "p2",
        title: "NorthQuest Marketing",
        category: WorkCategory::Websites,
        line: "A portfolio website for marketing company.",
        url: "https://northquestmarketing.co.uk/",
        preview: Preview::Image {
            src: "https://northquestmarketing.co.uk/assets/logo-northquest-BFE-nnqh.svg",
            background: "#000",
        },
    },
    Project {
        id: "p3",
        title: "Dubai Medical Research Forum",
        category: WorkCategory::Websites,
        line: "Registration platform for DHA-backed medical research forum.",
        url: "https://dmrf.ae/",
        preview: Preview::Image {
            src: "/assets/dmrf.jpg",
            background: "#000",
        },
    },
    Project {
        id: "p4",
        title: "Operative Zainab",
        category: WorkCategory::Websites,
        line: "Portfolio with a custom terminal theme + integrated game.",
        url: "https://www.zainab.codes/",
        preview: Preview::Terminal {
            headline: "OPERATIVE ZAINAB",
            caption: "SYSTEM ID: 2x4-PORTFOLIO-DEV",
        },
    },
    Project {
        id: "p5",
        title: "Sport Pro Tech",
        category: WorkCategory::Websites,
        line: "Dynamic sports platform with seamless UX.",
        url: "https://sportprotech.com/#",
        preview: Preview::Image {
            src: "https://sportprotech.com/assets/logo-sportprotech-TbApeHD3.png",
            background: "#000",
        },
    },
    Project {
        id: "p6",
        title: "UniCadia",
        category: WorkCategory::Websites,
        line: "An Academy Website",
        url: "https://unicadia.netlify.app/",
        preview: Preview::Image {
            src: "/assets/Unicadia.png",
            background: "#000",
        },
    },
];

pub fn filter_projects(projects: &[Project], tab: WorkTab) -> Vec<&Project> {
    projects.iter().filter(|p| tab.admits(p.category)).collect()
}

fn preview(project: &Project) -> Html {
    match project.preview {
        Preview::Image { src, background } => html! {
            <img
                src={src}
                alt={project.title}
                loading="lazy"
                class="work-image"
                style={format!("background: {};", background)}
            />
        },
        Preview::Terminal { headline, caption } => html! {
            <div class="terminal-preview">
                <div class="terminal-headline">{headline}</div>
                <div class="terminal-caption">{caption}</div>
                <div class="terminal-bar"></div>
            </div>
        },
    }
}

#[function_component(Work)]
pub fn work() -> Html {
    let tab = use_state(|| WorkTab::All);
    let visible = filter_projects(&PROJECTS, *tab);

    html! {
        <section id="work" class="work-section">
            <div class="section-inner">
                <SectionHeader
                    eyebrow="Work"
                    title="A few projects in the right direction"
                    desc="Premium digital identities. Curated like a gallery."
                />
                <div class="work-tabs">
                    <span class="work-tabs-label">{"Filter"}</span>
                    {
                        for WorkTab::ALL.iter().map(|t| {
                            let onclick = {
                                let tab = tab.clone();
                                let t = *t;
                                Callback::from(move |_: MouseEvent| tab.set(t))
                            };
                            html! {
                                <button
                                    key={t.label()}
                                    type="button"
                                    class={classes!("work-tab", (*tab == *t).then(|| "active"))}
                                    onclick={onclick}
                                >
                                    {t.label()}
                                </button>
                            }
                        })
                    }
                </div>
                {
                    if visible.is_empty() {
                        html! { <p class="work-empty">{"Nothing here yet. New work is on the way."}</p> }
                    } else {
                        html! {
                            <div class="work-grid">
                                {
                                    for visible.iter().map(|p| html! {
                                        <a key={p.id} href={p.url} target="_blank" rel="noopener noreferrer" class="glass work-card">
                                            <div class="work-preview">{preview(p)}</div>
                                            <div class="work-meta">
                                                <span class="work-category">{p.category.label()}</span>
                                                <h3>{p.title}</h3>
                                                <p>{p.line}</p>
                                            </div>
                                        </a>
                                    })
                                }
                            </div>
                        }
                    }
                }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_tab_shows_every_project_in_order() {
        let ids: Vec<_> = filter_projects(&PROJECTS, WorkTab::All).iter().map(|p| p.id).collect();
        assert_eq!(ids, ["p1", "p2", "p3", "p4", "p5", "p6"]);
    }

    #[test]
    fn category_tabs_filter_by_category() {
        assert_eq!(filter_projects(&PROJECTS, WorkTab::Websites).len(), 6);
        assert!(filter_projects(&PROJECTS, WorkTab::Branding).is_empty());
        assert!(filter_projects(&PROJECTS, WorkTab::Apps).is_empty());
    }

    #[test]
    fn tab_admits_only_its_category() {
        assert!(WorkTab::Apps.admits(WorkCategory::Apps));
        assert!(!WorkTab::Apps.admits(WorkCategory::Branding));
        assert!(WorkTab::All.admits(WorkCategory::Branding));
        assert_eq!(WorkTab::ALL.map(WorkTab::label), ["All", "Branding", "Websites", "Apps"]);
    }
}
