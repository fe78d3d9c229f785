use yew::prelude::*;

use crate::components::section_header::{GlassCard, SectionHeader};

pub struct Testimonial {
    pub id: &'static str,
    pub name: &'static str,
    pub line: &'static str,
    pub rating: f64,
}

pub static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        id: "r1",
        name: "Sarah Ahmed",
        line: "Exceeded our expectations. The attention to detail transformed our brand completely.",
        rating: 5.0,
    },
    Testimonial {
        id: "r2",
        name: "محمد علي",
        line: "Professional, creative, and delivered on time. Highly recommended for any project.",
        rating: 4.5,
    },
    Testimonial {
        id: "r3",
        name: "James Mitchell",
        line: "Premium quality work. They understood our vision perfectly.",
        rating: 5.0,
    },
];

/// Fill fraction of each of the five stars for a possibly fractional rating.
pub fn star_fills(rating: f64) -> [f64; 5] {
    let rating = rating.clamp(0.0, 5.0);
    let whole = rating.floor();
    let mut fills = [0.0; 5];
    for (i, fill) in fills.iter_mut().enumerate() {
        let i = i as f64;
        *fill = if i < whole {
            1.0
        } else if i < rating {
            rating - whole
        } else {
            0.0
        };
    }
    fills
}

fn stars(rating: f64) -> Html {
    html! {
        <div class="stars" aria-label={format!("{} out of 5", rating)}>
            {
                for star_fills(rating).iter().map(|fill| html! {
                    <span class="star">
                        <span class="star-empty">{"★"}</span>
                        <span class="star-fill" style={format!("width: {}%;", fill * 100.0)}>{"★"}</span>
                    </span>
                })
            }
        </div>
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    html! {
        <section id="testimonials" class="testimonials-section">
            <div class="section-inner">
                <SectionHeader
                    eyebrow="Testimonials"
                    title="Short words. Real signal."
                    desc="Words from those who trusted us with their vision."
                />
                <div class="card-grid">
                    {
                        for TESTIMONIALS.iter().map(|t| html! {
                            <GlassCard key={t.id} class={classes!("testimonial-card")}>
                                {stars(t.rating)}
                                <p class="testimonial-line">{format!("“{}”", t.line)}</p>
                                <div class="testimonial-name">{t.name}</div>
                            </GlassCard>
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

    #[test]
    fn whole_ratings_fill_whole_stars() {
        assert_eq!(star_fills(5.0), [1.0; 5]);
        assert_eq!(star_fills(3.0), [1.0, 1.0, 1.0, 0.0, 0.0]);
        assert_eq!(star_fills(0.0), [0.0; 5]);
    }

    #[test]
    fn half_star_is_partially_filled() {
        assert_eq!(star_fills(4.5), [1.0, 1.0, 1.0, 1.0, 0.5]);
        assert_eq!(star_fills(2.25), [1.0, 1.0, 0.25, 0.0, 0.0]);
    }

    #[test]
    fn out_of_range_ratings_are_clamped() {
        assert_eq!(star_fills(7.0), [1.0; 5]);
        assert_eq!(star_fills(-1.0), [0.0; 5]);
    }
}
