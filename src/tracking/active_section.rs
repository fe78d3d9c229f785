use std::cmp::Ordering;
use std::rc::Rc;

use serde::Deserialize;
use yew::functional::Reducible;

/// Used when no section ids are configured at all.
pub const FALLBACK_SECTION: &str = "home";

/// One observer measurement for a single page region, in viewport pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct VisibilitySample {
    pub section_id: String,
    pub intersection_ratio: f64,
    pub is_intersecting: bool,
    pub top: f64,
    pub bottom: f64,
}

impl VisibilitySample {
    fn center(&self) -> f64 {
        (self.top + self.bottom) / 2.0
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct VisibilityBatch {
    pub viewport_height: f64,
    pub samples: Vec<VisibilitySample>,
}

/// How competing visible sections are ranked against each other.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TieBreakPolicy {
    /// Sections whose top sits within `anchor_offset` of the viewport top win,
    /// the higher one first. Otherwise the larger intersection ratio wins.
    TopProximity { anchor_offset: f64 },
    /// The section whose vertical centre is nearest the viewport centre wins.
    CenterProximity,
    /// Largest ratio wins, among sections reaching into the viewport minus a
    /// `band` fraction at the top and at the bottom.
    MaxRatio { band: f64 },
}

impl Default for TieBreakPolicy {
    fn default() -> Self {
        TieBreakPolicy::TopProximity { anchor_offset: 120.0 }
    }
}

impl TieBreakPolicy {
    fn admits(&self, sample: &VisibilitySample, viewport_height: f64) -> bool {
        match *self {
            TieBreakPolicy::MaxRatio { band } => {
                let upper = viewport_height * band;
                let lower = viewport_height * (1.0 - band);
                sample.bottom > upper && sample.top < lower
            }
            _ => true,
        }
    }

    /// `Less` means `a` ranks ahead of `b`.
    fn compare(&self, a: &VisibilitySample, b: &VisibilitySample, viewport_height: f64) -> Ordering {
        let by_ratio = b.intersection_ratio.total_cmp(&a.intersection_ratio);
        match *self {
            TieBreakPolicy::TopProximity { anchor_offset } => {
                let top_a = a.top.max(0.0);
                let top_b = b.top.max(0.0);
                match (top_a < anchor_offset, top_b < anchor_offset) {
                    (true, true) => top_a.total_cmp(&top_b),
                    (true, false) => Ordering::Less,
                    (false, true) => Ordering::Greater,
                    (false, false) => by_ratio,
                }
            }
            TieBreakPolicy::CenterProximity => {
                let middle = viewport_height / 2.0;
                let dist_a = (a.center() - middle).abs();
                let dist_b = (b.center() - middle).abs();
                dist_a.total_cmp(&dist_b).then(by_ratio)
            }
            TieBreakPolicy::MaxRatio { .. } => by_ratio,
        }
    }
}

/// Picks the section that should be highlighted for one batch of samples.
///
/// Samples for ids outside `section_ids`, samples that are not intersecting
/// and samples at or below `min_ratio` are ignored. Returns `None` when
/// nothing qualifies. Equal-ranked sections fall back to configured order.
pub fn pick_active<'a>(
    section_ids: &[String],
    batch: &'a VisibilityBatch,
    policy: TieBreakPolicy,
    min_ratio: f64,
) -> Option<&'a str> {
    let order = |id: &str| section_ids.iter().position(|s| s == id);

    batch
        .samples
        .iter()
        .filter(|s| s.is_intersecting && s.intersection_ratio > min_ratio)
        .filter(|s| policy.admits(s, batch.viewport_height))
        .filter_map(|s| order(&s.section_id).map(|idx| (idx, s)))
        .min_by(|(idx_a, a), (idx_b, b)| {
            policy
                .compare(a, b, batch.viewport_height)
                .then(idx_a.cmp(idx_b))
        })
        .map(|(_, s)| s.section_id.as_str())
}

/// The currently highlighted section, reduced from visibility batches.
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveSection {
    section_ids: Vec<String>,
    policy: TieBreakPolicy,
    min_ratio: f64,
    active: String,
}

impl ActiveSection {
    pub fn new(section_ids: Vec<String>, policy: TieBreakPolicy, min_ratio: f64) -> Self {
        let active = section_ids
            .first()
            .cloned()
            .unwrap_or_else(|| FALLBACK_SECTION.to_string());
        Self {
            section_ids,
            policy,
            min_ratio,
            active,
        }
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    /// Returns whether the active id changed. An empty batch keeps the current id.
    pub fn apply(&mut self, batch: &VisibilityBatch) -> bool {
        match pick_active(&self.section_ids, batch, self.policy, self.min_ratio) {
            Some(id) if id != self.active => {
                log::debug!("active section {} -> {}", self.active, id);
                self.active = id.to_string();
                true
            }
            _ => false,
        }
    }
}

impl Reducible for ActiveSection {
    type Action = VisibilityBatch;

    fn reduce(self: Rc<Self>, batch: VisibilityBatch) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(&batch) {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn sample(id: &str, ratio: f64, top: f64, bottom: f64) -> VisibilitySample {
        VisibilitySample {
            section_id: id.to_string(),
            intersection_ratio: ratio,
            is_intersecting: ratio > 0.0,
            top,
            bottom,
        }
    }

    fn batch(samples: Vec<VisibilitySample>) -> VisibilityBatch {
        VisibilityBatch {
            viewport_height: 800.0,
            samples,
        }
    }

    const TOP: TieBreakPolicy = TieBreakPolicy::TopProximity { anchor_offset: 120.0 };

    #[test]
    fn starts_on_first_configured_id() {
        for order in [
            ["home", "story", "work"],
            ["work", "home", "story"],
            ["story", "work", "home"],
        ] {
            let tracker = ActiveSection::new(ids(&order), TOP, 0.0);
            assert_eq!(tracker.active(), order[0]);
        }
        assert_eq!(ActiveSection::new(vec![], TOP, 0.0).active(), FALLBACK_SECTION);
    }

    #[test]
    fn single_intersecting_region_wins_under_every_policy() {
        for policy in [
            TOP,
            TieBreakPolicy::CenterProximity,
            TieBreakPolicy::MaxRatio { band: 0.2 },
        ] {
            let mut tracker = ActiveSection::new(ids(&["home", "story", "work"]), policy, 0.0);
            let changed = tracker.apply(&batch(vec![
                sample("home", 0.0, -900.0, -100.0),
                sample("work", 0.4, 300.0, 1400.0),
            ]));
            assert!(changed);
            assert_eq!(tracker.active(), "work");
        }
    }

    #[test]
    fn no_intersecting_region_keeps_previous_id() {
        let mut tracker = ActiveSection::new(ids(&["home", "story", "work"]), TOP, 0.0);
        tracker.apply(&batch(vec![sample("story", 0.5, 10.0, 900.0)]));
        assert_eq!(tracker.active(), "story");

        assert!(!tracker.apply(&batch(vec![])));
        assert!(!tracker.apply(&batch(vec![sample("work", 0.0, 900.0, 1500.0)])));
        assert_eq!(tracker.active(), "story");
    }

    #[test]
    fn unknown_ids_and_low_ratios_are_ignored() {
        let mut tracker = ActiveSection::new(ids(&["home", "story"]), TOP, 0.1);
        tracker.apply(&batch(vec![
            sample("footer", 1.0, 0.0, 300.0),
            sample("story", 0.05, 700.0, 1600.0),
        ]));
        assert_eq!(tracker.active(), "home");
    }

    // story 0.6 / work 0.3, both intersecting. Top-proximity is the default policy.
    #[test]
    fn top_proximity_prefers_section_under_the_header() {
        let section_ids = ids(&["home", "story", "work"]);
        let near_anchor = batch(vec![
            sample("story", 0.6, 40.0, 700.0),
            sample("work", 0.3, 700.0, 1500.0),
        ]);
        assert_eq!(pick_active(&section_ids, &near_anchor, TOP, 0.0), Some("story"));

        // a top scrolled above the viewport clamps to 0 and still counts as under the header
        let story_above = batch(vec![
            sample("story", 0.6, -500.0, 100.0),
            sample("work", 0.3, 100.0, 1500.0),
        ]);
        assert_eq!(pick_active(&section_ids, &story_above, TOP, 0.0), Some("story"));

        let neither_near = batch(vec![
            sample("story", 0.6, 200.0, 1000.0),
            sample("work", 0.3, 600.0, 1500.0),
        ]);
        assert_eq!(pick_active(&section_ids, &neither_near, TOP, 0.0), Some("story"));
    }

    #[test]
    fn top_proximity_picks_the_higher_of_two_near_tops() {
        let section_ids = ids(&["home", "story", "work"]);
        let both_near = batch(vec![
            sample("work", 0.3, 110.0, 900.0),
            sample("story", 0.6, 60.0, 100.0),
        ]);
        assert_eq!(pick_active(&section_ids, &both_near, TOP, 0.0), Some("story"));

        let only_work_near = batch(vec![
            sample("story", 0.6, 150.0, 900.0),
            sample("work", 0.3, 100.0, 1500.0),
        ]);
        assert_eq!(pick_active(&section_ids, &only_work_near, TOP, 0.0), Some("work"));
    }

    #[test]
    fn center_proximity_prefers_section_over_viewport_middle() {
        let section_ids = ids(&["home", "story", "work"]);
        let b = batch(vec![
            sample("story", 0.6, -200.0, 300.0),
            sample("work", 0.3, 300.0, 600.0),
        ]);
        assert_eq!(
            pick_active(&section_ids, &b, TieBreakPolicy::CenterProximity, 0.0),
            Some("work")
        );
    }

    #[test]
    fn max_ratio_ignores_sections_peeking_into_the_margins() {
        let section_ids = ids(&["home", "story", "work"]);
        let policy = TieBreakPolicy::MaxRatio { band: 0.2 };

        let b = batch(vec![
            sample("story", 0.6, 100.0, 700.0),
            sample("work", 0.3, 700.0, 1500.0),
        ]);
        assert_eq!(pick_active(&section_ids, &b, policy, 0.0), Some("story"));

        // story only shows in the top 20% band
        let peeking = batch(vec![
            sample("story", 0.9, -600.0, 100.0),
            sample("work", 0.3, 100.0, 1500.0),
        ]);
        assert_eq!(pick_active(&section_ids, &peeking, policy, 0.0), Some("work"));
    }

    #[test]
    fn equal_rank_falls_back_to_configured_order() {
        let section_ids = ids(&["home", "story", "work"]);
        let b = batch(vec![
            sample("work", 0.5, 300.0, 900.0),
            sample("story", 0.5, 300.0, 900.0),
        ]);
        for policy in [
            TOP,
            TieBreakPolicy::CenterProximity,
            TieBreakPolicy::MaxRatio { band: 0.1 },
        ] {
            assert_eq!(pick_active(&section_ids, &b, policy, 0.0), Some("story"));
        }
    }

    #[test]
    fn reducer_keeps_same_state_when_nothing_changes() {
        let state = Rc::new(ActiveSection::new(ids(&["home", "story"]), TOP, 0.0));
        let same = state.clone().reduce(batch(vec![sample("home", 1.0, 0.0, 800.0)]));
        assert!(Rc::ptr_eq(&state, &same));

        let moved = state.reduce(batch(vec![sample("story", 0.4, 20.0, 800.0)]));
        assert_eq!(moved.active(), "story");
    }

    #[test]
    fn policy_deserializes_from_tagged_json() {
        let policy: TieBreakPolicy =
            serde_json::from_str(r#"{ "kind": "max_ratio", "band": 0.25 }"#).unwrap();
        assert_eq!(policy, TieBreakPolicy::MaxRatio { band: 0.25 });
        let policy: TieBreakPolicy =
            serde_json::from_str(r#"{ "kind": "center_proximity" }"#).unwrap();
        assert_eq!(policy, TieBreakPolicy::CenterProximity);
    }
}
