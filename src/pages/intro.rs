use yew::prelude::*;

use crate::media::video::SalesVideo;
use crate::quiz::pricing::{format_price, format_whole};

#[derive(Properties, PartialEq)]
pub struct IntroProps {
    pub video_ref: NodeRef,
    pub max_discount: u32,
    pub floor_price: u32,
    pub on_start: Callback<()>,
}

#[function_component(Intro)]
pub fn intro(props: &IntroProps) -> Html {
    let max_discount = format_whole(props.max_discount);
    let floor_price = format_price(props.floor_price);
    let onclick = props.on_start.reform(|_: MouseEvent| ());

    html! {
        <div class="funnel-background" style="padding: 0;">
            <div class="card" style="max-width: 48rem;">
                <h1 style="text-align: center; font-size: 2.25rem; font-weight: bold; color: #7c2d12; margin-bottom: 1.5rem;">
                    {"Special Opportunity Alert"}
                </h1>

                <div style="display: flex; justify-content: center; margin-bottom: 1.5rem;">
                    <SalesVideo video_ref={props.video_ref.clone()} />
                </div>

                <div style="background: #fff7ed; padding: 1.5rem; border-radius: 8px; border: 2px solid #fed7aa;">
                    <blockquote style="color: #1f2937; font-style: italic; text-align: center; line-height: 1.6; margin: 0;">
                        {"\"💣 Temu is leaving the USA."}
                        <br /><br />
                        {"The Chinese giant is going bankrupt on American soil - their pricing model was never sustainable."}
                        <br /><br />
                        {"We're liquidating a box of 3 premium perfumes inspired by luxury brands."}
                        <br /><br />
                        {"💸 "}
                        <strong>{format!("Complete the quiz for up to {} OFF - Final price: {}\"", max_discount, floor_price)}</strong>
                    </blockquote>
                </div>

                <div style="background: #fefce8; padding: 1rem; border-radius: 8px; border: 1px solid #fef08a; margin: 1.5rem 0; text-align: center; color: #854d0e; font-weight: 600;">
                    {format!("★ Maximum discount: {} • Final price: {} ★", max_discount, floor_price)}
                </div>

                <button class="primary-button" style="font-size: 1.25rem; padding: 1.5rem;" {onclick}>
                    {"🏆 Start the Quiz"}
                </button>
            </div>
        </div>
    }
}
