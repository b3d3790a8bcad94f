use std::rc::Rc;

use yew::prelude::*;
use yew_hooks::use_interval;

use crate::config::carousel::{IMAGE_GAP_PX, IMAGE_WIDTH_PX, REPEATS, STEP_PX};
use crate::config::timing::CAROUSEL_TICK_MS;

const PERFUMES: &[(&str, &str)] = &[
    ("/1.png", "J'adore by Dior"),
    ("/2.png", "Chanel No. 5"),
    ("/3.png", "Miss Dior"),
    ("/4.png", "YSL Libre"),
    ("/5.png", "Lancôme La vie est belle"),
    ("/6.png", "Jean Paul Gaultier Le Male"),
    ("/7.png", "Gentleman Givenchy"),
    ("/8.png", "Bleu de Chanel"),
    ("/9.png", "1 Million by Paco Rabanne"),
    ("/10.png", "Invictus by Rabanne"),
];

/// Horizontal position of the looping strip.
///
/// The offset is derived from a tick counter rather than accumulated, so
/// one full cycle always lands back on exactly the same value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselTrack {
    ticks: u64,
    cycle_ticks: u64,
    step_px: f64,
}

pub enum CarouselAction {
    Tick,
}

impl CarouselTrack {
    pub fn new(item_count: usize, item_span_px: u32, step_px: f64) -> Self {
        let width = item_count as f64 * item_span_px as f64;
        let cycle_ticks = if step_px > 0.0 { (width / step_px).ceil() as u64 } else { 0 };
        Self { ticks: 0, cycle_ticks: cycle_ticks.max(1), step_px }
    }

    /// Width of one copy of the strip.
    pub fn span(&self) -> f64 {
        self.cycle_ticks() as f64 * self.step_px
    }

    pub fn cycle_ticks(&self) -> u64 {
        self.cycle_ticks
    }

    /// Pixels to translate by, always in `(-span, 0]`.
    pub fn offset(&self) -> f64 {
        -(self.ticks as f64 * self.step_px)
    }

    pub fn tick(&mut self) {
        self.ticks = (self.ticks + 1) % self.cycle_ticks;
    }
}

impl Default for CarouselTrack {
    fn default() -> Self {
        Self::new(PERFUMES.len(), IMAGE_WIDTH_PX + IMAGE_GAP_PX, STEP_PX)
    }
}

impl Reducible for CarouselTrack {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            CarouselAction::Tick => {
                let mut next = *self;
                next.tick();
                Rc::new(next)
            }
        }
    }
}

#[function_component(PerfumeCarousel)]
pub fn perfume_carousel() -> Html {
    let track = use_reducer(CarouselTrack::default);

    {
        let track = track.clone();
        use_interval(move || track.dispatch(CarouselAction::Tick), CAROUSEL_TICK_MS);
    }

    let strip_width = track.span() * REPEATS as f64;
    let style = format!(
        "display: flex; transform: translateX({}px); width: {}px;",
        track.offset(),
        strip_width
    );
    let suffixes = ["", " duplicate", " triple"];

    html! {
        <div style="width: 100%; overflow: hidden; background: #f3f4f6; padding: 2rem 0; margin-bottom: 1.5rem;">
            <div style="position: relative;">
                <div {style}>
                    { for (0..REPEATS).flat_map(|copy| {
                        let suffix = suffixes.get(copy).copied().unwrap_or("");
                        PERFUMES.iter().enumerate().map(move |(i, (src, name))| html! {
                            <div key={format!("{}-{}", copy, i)}
                                style={format!("flex-shrink: 0; margin-right: {}px;", IMAGE_GAP_PX)}>
                                <img
                                    src={*src}
                                    alt={format!("{}{}", name, suffix)}
                                    width={IMAGE_WIDTH_PX.to_string()}
                                    height={IMAGE_WIDTH_PX.to_string()}
                                    style="object-fit: cover; border-radius: 8px;"
                                />
                            </div>
                        })
                    }) }
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cycle_matches_strip_width() {
        let track = CarouselTrack::default();
        assert_eq!(track.span(), 2_120.0);
        assert_eq!(track.cycle_ticks(), 4_240);
    }

    #[test]
    fn moves_left_by_step() {
        let mut track = CarouselTrack::default();
        assert_eq!(track.offset(), 0.0);
        track.tick();
        track.tick();
        assert_eq!(track.offset(), -1.0);
    }

    #[test]
    fn wraps_to_zero_at_span() {
        let mut track = CarouselTrack::default();
        for _ in 0..track.cycle_ticks() - 1 {
            track.tick();
        }
        assert_eq!(track.offset(), -2_119.5);
        track.tick();
        assert_eq!(track.offset(), 0.0);
    }

    #[test]
    fn offset_repeats_after_one_cycle() {
        let mut track = CarouselTrack::new(7, 130, 0.3);
        for _ in 0..123 {
            track.tick();
        }
        let sampled = track.offset();
        for _ in 0..track.cycle_ticks() {
            track.tick();
            assert!(track.offset() <= 0.0);
            assert!(track.offset() > -track.span());
        }
        assert_eq!(track.offset(), sampled);
    }

    #[test]
    fn reducer_ticks() {
        let track = Rc::new(CarouselTrack::default());
        let next = track.reduce(CarouselAction::Tick);
        assert_eq!(next.offset(), -STEP_PX);
    }
}
