use gloo_timers::callback::Timeout;
use log::{info, warn};
use yew::prelude::*;

use crate::components::notification::SuccessNotification;
use crate::config::pricing::{DISCOUNT_UNIT_CENTS, FLOOR_PRICE_CENTS};
use crate::config::storefront::BUY_NOW_URL;
use crate::config::timing::AUTO_ADVANCE_MS;
use crate::error;
use crate::media::audio::use_notification_sound;
use crate::media::video;
use crate::pages::intro::Intro;
use crate::pages::offer::Offer;
use crate::pages::question::QuestionCard;
use crate::quiz::questions::QUESTIONS;
use crate::quiz::session::{Advance, QuizSession, Screen};
use crate::tracking::pixel::{track, PixelEvent};

/// Owns the session for the lifetime of the page and turns user actions
/// into session transitions plus their side effects.
#[function_component(Quiz)]
pub fn quiz() -> Html {
    // Kept outside yew state so the in-flight guard is checked and set in the
    // same handler call, even for clicks that land before the next render.
    let session = use_mut_ref(|| QuizSession::new(QUESTIONS));
    let redraw = use_force_update();
    let sound = use_notification_sound();
    let video_ref = use_node_ref();
    let show_notification = use_state(|| false);
    let advance_timer = use_mut_ref(|| None::<Timeout>);

    {
        let advance_timer = advance_timer.clone();
        use_effect_with_deps(move |_| {
            move || {
                advance_timer.borrow_mut().take();
            }
        }, ());
    }

    let on_start = {
        let session = session.clone();
        let redraw = redraw.clone();
        let video_ref = video_ref.clone();
        Callback::from(move |_: ()| {
            if !session.borrow_mut().start() {
                return;
            }
            match video::pause(&video_ref) {
                Ok(()) => info!("Video paused"),
                Err(e) => warn!("Could not pause video: {}", e),
            }
            track(PixelEvent::QuizStarted);
            redraw.force_update();
        })
    };

    let on_select = {
        let session = session.clone();
        let redraw = redraw.clone();
        Callback::from(move |option: usize| {
            if session.borrow_mut().select(option) {
                redraw.force_update();
            }
        })
    };

    let on_submit = {
        let session = session.clone();
        let redraw = redraw.clone();
        let show_notification = show_notification.clone();
        let advance_timer = advance_timer.clone();
        Callback::from(move |_: ()| {
            let answered = session.borrow_mut().submit();
            let Some(answered) = answered else {
                return;
            };

            info!(
                "Question {} answered, discount now {} cents",
                answered.question_number, answered.discount
            );
            track(PixelEvent::QuestionAnswered {
                number: answered.question_number,
                total: answered.total_questions,
            });
            show_notification.set(true);
            sound.play();
            redraw.force_update();

            let session = session.clone();
            let redraw = redraw.clone();
            *advance_timer.borrow_mut() = Some(Timeout::new(AUTO_ADVANCE_MS, move || {
                let step = session.borrow_mut().advance();
                match step {
                    Some(Advance::Next { index }) => info!("Moving to question {}", index + 1),
                    Some(Advance::Completed { discount }) => {
                        let final_price = session.borrow().final_price();
                        info!("Quiz completed with {} cents off", discount);
                        track(PixelEvent::QuizCompleted { discount });
                        track(PixelEvent::FinalPage { discount, final_price });
                    }
                    None => {}
                }
                redraw.force_update();
            }));
        })
    };

    let on_notification_close = {
        let show_notification = show_notification.clone();
        Callback::from(move |_: ()| show_notification.set(false))
    };

    let on_buy = {
        let session = session.clone();
        Callback::from(move |_: ()| {
            let (discount, final_price) = {
                let session = session.borrow();
                (session.discount(), session.final_price())
            };
            track(PixelEvent::CheckoutStarted { final_price });
            track(PixelEvent::GoToStore { discount });
            match error::window().map(|w| w.open_with_url_and_target(BUY_NOW_URL, "_blank")) {
                Ok(Ok(_)) => {}
                Ok(Err(e)) => warn!("Could not open store: {}", error::describe(&e)),
                Err(e) => warn!("Could not open store: {}", e),
            }
        })
    };

    // Starting over is a full reload, not a soft reset.
    let on_restart = Callback::from(|_: ()| {
        if let Ok(window) = error::window() {
            let _ = window.location().reload();
        }
    });

    let state = session.borrow();
    let view = match state.screen() {
        Screen::Intro => html! {
            <Intro
                video_ref={video_ref}
                max_discount={state.max_discount()}
                floor_price={FLOOR_PRICE_CENTS}
                {on_start}
            />
        },
        Screen::InProgress => match state.current_question() {
            Some(question) => html! {
                <div class="funnel-background">
                    <SuccessNotification
                        key={state.answered()}
                        show={*show_notification}
                        amount={DISCOUNT_UNIT_CENTS}
                        on_close={on_notification_close}
                    />
                    <QuestionCard
                        {question}
                        index={state.current_index()}
                        total={state.question_count()}
                        answered={state.answered()}
                        discount={state.discount()}
                        max_discount={state.max_discount()}
                        selected={state.selected()}
                        processing={state.is_processing()}
                        {on_select}
                        {on_submit}
                    />
                </div>
            },
            None => html! {},
        },
        Screen::Completed => html! {
            <div class="funnel-background">
                <Offer
                    discount={state.discount()}
                    final_price={state.final_price()}
                    {on_buy}
                    {on_restart}
                />
            </div>
        },
    };
    drop(state);
    view
}
