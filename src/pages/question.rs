use yew::prelude::*;

use crate::config::media::PRODUCT_THUMBNAIL;
use crate::quiz::pricing::{format_whole, percent};
use crate::quiz::questions::Question;

#[derive(Properties, PartialEq)]
pub struct QuestionCardProps {
    pub question: &'static Question,
    pub index: usize,
    pub total: usize,
    pub answered: usize,
    pub discount: u32,
    pub max_discount: u32,
    pub selected: Option<usize>,
    pub processing: bool,
    pub on_select: Callback<usize>,
    pub on_submit: Callback<()>,
}

fn progress_bar(value: f64) -> Html {
    html! {
        <div style="width: 100%; height: 0.5rem; background: #e5e7eb; border-radius: 9999px; overflow: hidden;">
            <div style={format!("width: {}%; height: 100%; background: #f97316; transition: width 0.3s;", value)}></div>
        </div>
    }
}

/// One question at a time. Knows nothing about earlier answers beyond the
/// numbers it is handed.
#[function_component(QuestionCard)]
pub fn question_card(props: &QuestionCardProps) -> Html {
    let disabled = props.selected.is_none() || props.processing;
    let on_submit = props.on_submit.reform(|_: MouseEvent| ());

    html! {
        <div class="card" style="max-width: 42rem;">
            <div style="display: flex; align-items: center; justify-content: space-between; margin-bottom: 1rem;">
                <div style="display: flex; align-items: center; gap: 0.5rem;">
                    <img src={PRODUCT_THUMBNAIL} alt="box_temu" width="32" height="32" style="border-radius: 4px; object-fit: cover;" />
                    <div>
                        <h2 style="font-size: 1.25rem; margin: 0;">{"Temu Liquidation Survey"}</h2>
                        <p style="color: #6b7280; margin: 0;">
                            {format!("Question {} of {}", props.index + 1, props.total)}
                        </p>
                    </div>
                </div>
                <div style="text-align: right;">
                    <p style="font-size: 0.875rem; color: #4b5563; margin: 0;">{"Current discount"}</p>
                    <p style="font-size: 1.5rem; font-weight: bold; color: #16a34a; margin: 0;">{format_whole(props.discount)}</p>
                </div>
            </div>
            { progress_bar(percent(props.index, props.total)) }

            <div style="background: #fff7ed; padding: 1.5rem; border-radius: 8px; margin: 1.5rem 0;">
                <h3 style="font-size: 1.25rem; font-weight: 600; margin: 0 0 1rem; color: #7c2d12;">{props.question.prompt}</h3>
                { for props.question.options.iter().enumerate().map(|(i, option)| {
                    let id = format!("option-{}", i);
                    let onchange = props.on_select.reform(move |_: Event| i);
                    html! {
                        <div key={i} class="option-row">
                            <input
                                type="radio"
                                name={format!("question-{}", props.question.id)}
                                id={id.clone()}
                                value={i.to_string()}
                                checked={props.selected == Some(i)}
                                disabled={props.processing}
                                {onchange}
                            />
                            <label for={id} style="flex: 1; cursor: pointer; font-weight: 500;">{*option}</label>
                        </div>
                    }
                }) }
            </div>

            <button
                class={classes!("primary-button", props.processing.then(|| "processing"))}
                {disabled}
                onclick={on_submit}
            >
                { if props.processing {
                    html! {
                        <span style="display: inline-flex; align-items: center; gap: 0.5rem;">
                            <span class="spinner small"></span>
                            {"Loading..."}
                        </span>
                    }
                } else {
                    html! { {"Confirm Answer"} }
                } }
            </button>

            <div style="background: #f9fafb; padding: 1rem; border-radius: 8px; margin-top: 1.5rem;">
                <div style="display: flex; justify-content: space-between; align-items: center; margin-bottom: 0.5rem;">
                    <span style="font-size: 0.875rem; color: #4b5563;">{"Discount progress:"}</span>
                    <span style="font-weight: 600;">
                        {format!("{} / {}", format_whole(props.discount), format_whole(props.max_discount))}
                    </span>
                </div>
                { progress_bar(percent(props.answered, props.total)) }
            </div>
        </div>
    }
}
