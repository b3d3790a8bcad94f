use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::media::PRODUCT_THUMBNAIL;
use crate::config::timing::{REVEAL_BASE_DELAY_MS, REVEAL_INTERVAL_MS};

#[derive(Debug, Clone, PartialEq)]
pub struct BonusItem {
    pub id: u32,
    pub text: &'static str,
    pub original_value: &'static str,
    pub current_value: &'static str,
    pub emoji: &'static str,
    /// Shown instead of the emoji when present.
    pub image: Option<&'static str>,
}

pub const BONUS_ITEMS: &[BonusItem] = &[
    BonusItem {
        id: 1,
        text: "3 Premium Perfumes (50ml each)",
        original_value: "$149.99",
        current_value: "FREE",
        emoji: "🎁",
        image: None,
    },
    BonusItem {
        id: 2,
        text: "temu box",
        original_value: "$89.99",
        current_value: "FREE",
        emoji: "🏀",
        image: Some(PRODUCT_THUMBNAIL),
    },
    BonusItem {
        id: 3,
        text: "Express Shipping",
        original_value: "$19.99",
        current_value: "FREE",
        emoji: "🚚",
        image: None,
    },
    BonusItem {
        id: 4,
        text: "Satisfaction Guarantee",
        original_value: "$29.99",
        current_value: "FREE",
        emoji: "✅",
        image: None,
    },
];

/// When each bonus row appears after the offer screen mounts.
///
/// The section itself shows up after `base_delay_ms`; row `k` (0-based)
/// follows at `base_delay_ms + (k + 1) * interval_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealSchedule {
    pub base_delay_ms: u32,
    pub interval_ms: u32,
    pub count: usize,
}

impl RevealSchedule {
    pub fn new(count: usize) -> Self {
        Self {
            base_delay_ms: REVEAL_BASE_DELAY_MS,
            interval_ms: REVEAL_INTERVAL_MS,
            count,
        }
    }

    pub fn section_at(&self) -> u32 {
        self.base_delay_ms
    }

    pub fn reveal_at(&self, index: usize) -> u32 {
        self.base_delay_ms + (index as u32 + 1) * self.interval_ms
    }

    /// Offsets of every row, in reveal order.
    pub fn offsets(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        (0..self.count).map(move |index| (index, self.reveal_at(index)))
    }

    /// Number of rows visible `elapsed_ms` after mount.
    pub fn visible_at(&self, elapsed_ms: u32) -> usize {
        if elapsed_ms < self.base_delay_ms {
            return 0;
        }
        if self.interval_ms == 0 {
            return self.count;
        }
        let steps = ((elapsed_ms - self.base_delay_ms) / self.interval_ms) as usize;
        steps.min(self.count)
    }
}

#[function_component(BonusReveal)]
pub fn bonus_reveal() -> Html {
    let show_section = use_state(|| false);
    let visible = use_state(|| 0usize);

    {
        let show_section = show_section.clone();
        let visible = visible.clone();
        use_effect_with_deps(move |_| {
            let schedule = RevealSchedule::new(BONUS_ITEMS.len());
            let mut timers = Vec::new();

            timers.push(Timeout::new(schedule.section_at(), move || {
                show_section.set(true);
            }));
            for (_, at) in schedule.offsets() {
                let visible = visible.clone();
                let count = schedule.visible_at(at);
                timers.push(Timeout::new(at, move || {
                    visible.set(count);
                }));
            }

            // Dropping the handles cancels whatever has not fired yet.
            move || drop(timers)
        }, ());
    }

    if !*show_section {
        return html! {};
    }

    html! {
        <div style="padding-top: 1.5rem; display: flex; flex-direction: column; gap: 1rem;">
            { for BONUS_ITEMS.iter().enumerate().map(|(index, item)| {
                let shown = index < *visible;
                let row_style = if shown {
                    "display: flex; align-items: center; justify-content: space-between; padding: 1rem; border-radius: 8px; transition: all 0.5s; opacity: 1; transform: translateX(0); background: white; border: 1px solid #bfdbfe; box-shadow: 0 1px 2px rgba(0,0,0,0.05);"
                } else {
                    "display: flex; align-items: center; justify-content: space-between; padding: 1rem; border-radius: 8px; transition: all 0.5s; opacity: 0; transform: translateX(1rem);"
                };
                html! {
                    <div key={item.id} style={row_style}>
                        <div style="display: flex; align-items: center; gap: 0.75rem;">
                            { if shown {
                                html! { <span class="check-pulse" style="color: #22c55e;">{"✔"}</span> }
                            } else {
                                html! {}
                            } }
                            { match item.image {
                                Some(src) => html! {
                                    <img {src} alt={item.text} width="32" height="32"
                                        style="border-radius: 4px; object-fit: cover;" />
                                },
                                None => html! { <span style="font-size: 1.125rem;">{item.emoji}</span> },
                            } }
                            <span style="font-weight: 500; color: #1f2937;">{item.text}</span>
                        </div>
                        <div style="text-align: right;">
                            <span style="font-weight: bold; color: #9ca3af; text-decoration: line-through; font-size: 0.875rem;">
                                {item.original_value}
                            </span>
                            <br />
                            <span style="font-weight: bold; color: #16a34a; font-size: 1.125rem; margin-left: 0.5rem;">
                                {item.current_value}
                            </span>
                        </div>
                    </div>
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_follow_base_delay_plus_interval() {
        let schedule = RevealSchedule::new(BONUS_ITEMS.len());
        let offsets: Vec<u32> = schedule.offsets().map(|(_, at)| at).collect();
        assert_eq!(offsets, vec![1_500, 2_500, 3_500, 4_500]);
        assert_eq!(schedule.section_at(), 500);
    }

    #[test]
    fn row_k_visible_exactly_at_its_time() {
        let schedule = RevealSchedule::new(4);
        for k in 1..=4u32 {
            let at = schedule.base_delay_ms + k * schedule.interval_ms;
            assert_eq!(schedule.visible_at(at - 1), k as usize - 1);
            assert_eq!(schedule.visible_at(at), k as usize);
        }
    }

    #[test]
    fn visible_count_never_shrinks() {
        let schedule = RevealSchedule::new(4);
        let mut previous = 0;
        for t in (0..8_000).step_by(50) {
            let visible = schedule.visible_at(t);
            assert!(visible >= previous);
            assert!(visible <= 4);
            previous = visible;
        }
        assert_eq!(previous, 4);
    }

    #[test]
    fn nothing_before_section() {
        let schedule = RevealSchedule::new(4);
        assert_eq!(schedule.visible_at(0), 0);
        assert_eq!(schedule.visible_at(500), 0);
    }

    #[test]
    fn zero_interval_reveals_everything_with_section() {
        let schedule = RevealSchedule { base_delay_ms: 500, interval_ms: 0, count: 3 };
        assert_eq!(schedule.visible_at(499), 0);
        assert_eq!(schedule.visible_at(500), 3);
    }
}
