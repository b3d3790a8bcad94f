use yew::prelude::*;
use gloo_timers::callback::Timeout;

use crate::config::timing::{NOTIFICATION_EXIT_MS, NOTIFICATION_VISIBLE_MS};
use crate::quiz::pricing::format_whole;

#[derive(Clone, Copy, PartialEq)]
enum Stage {
    Shown,
    Leaving,
}

/// When a shown toast starts leaving and when it reports itself closed,
/// both measured from the moment it is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastSchedule {
    pub visible_ms: u32,
    pub exit_ms: u32,
}

impl Default for ToastSchedule {
    fn default() -> Self {
        Self {
            visible_ms: NOTIFICATION_VISIBLE_MS,
            exit_ms: NOTIFICATION_EXIT_MS,
        }
    }
}

impl ToastSchedule {
    pub fn leave_at(&self) -> u32 {
        self.visible_ms
    }

    /// Closing waits for the exit transition to finish.
    pub fn close_at(&self) -> u32 {
        self.visible_ms + self.exit_ms
    }
}

#[derive(Properties, PartialEq)]
pub struct SuccessNotificationProps {
    pub show: bool,
    /// Amount just earned, in cents.
    pub amount: u32,
    pub on_close: Callback<()>,
}

/// Toast confirming the discount just earned. Slides in, holds, slides out,
/// then tells the parent it is gone.
#[function_component(SuccessNotification)]
pub fn success_notification(props: &SuccessNotificationProps) -> Html {
    let stage = use_state(|| Stage::Shown);

    {
        let stage = stage.clone();
        let on_close = props.on_close.clone();
        use_effect_with_deps(move |show| {
            let mut timers = Vec::new();
            if *show {
                let schedule = ToastSchedule::default();
                stage.set(Stage::Shown);
                timers.push(Timeout::new(schedule.leave_at(), move || {
                    stage.set(Stage::Leaving);
                }));
                timers.push(Timeout::new(schedule.close_at(), move || {
                    on_close.emit(());
                }));
            }
            move || drop(timers)
        }, props.show);
    }

    if !props.show {
        return html! {};
    }

    let motion = match *stage {
        Stage::Shown => "transform: translateX(0) scale(1); opacity: 1;",
        Stage::Leaving => "transform: translateX(100%) scale(0.95); opacity: 0;",
    };

    html! {
        <div style={format!("position: fixed; top: 1rem; right: 1rem; z-index: 50; transition: all 0.5s; {}", motion)}>
            <div style="background: linear-gradient(to right, #22c55e, #16a34a); color: white; padding: 1rem 1.5rem; border-radius: 8px; box-shadow: 0 25px 50px -12px rgba(0,0,0,0.25); display: flex; align-items: center; gap: 0.75rem; border: 1px solid #4ade80;">
                <div class="pulse" style="width: 2.5rem; height: 2.5rem; background: white; border-radius: 9999px; display: flex; align-items: center; justify-content: center; color: #22c55e; font-weight: bold; font-size: 1.25rem;">
                    {"$"}
                </div>
                <div>
                    <p style="font-weight: bold; font-size: 1.125rem; margin: 0;">{"Congratulations! 🎉"}</p>
                    <p style="font-size: 0.875rem; opacity: 0.9; margin: 0;">
                        {format!("You earned {} discount!", format_whole(props.amount))}
                    </p>
                </div>
                <div class="ping" style="width: 0.5rem; height: 0.5rem; background: #86efac; border-radius: 9999px;"></div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaves_after_three_seconds_and_closes_half_a_second_later() {
        let schedule = ToastSchedule::default();
        assert_eq!(schedule.leave_at(), 3_000);
        assert_eq!(schedule.close_at(), 3_500);
    }

    #[test]
    fn close_never_precedes_leave() {
        let schedule = ToastSchedule { visible_ms: 1_000, exit_ms: 0 };
        assert_eq!(schedule.close_at(), schedule.leave_at());
    }
}
