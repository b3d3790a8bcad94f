use yew::prelude::*;

use crate::config::media::PRODUCT_THUMBNAIL;
use crate::config::pricing::ORIGINAL_PRICE_CENTS;
use crate::offer::carousel::PerfumeCarousel;
use crate::offer::reveal::BonusReveal;
use crate::quiz::pricing::format_price;

#[derive(Properties, PartialEq)]
pub struct PriceAnchoringProps {
    pub discount: u32,
    pub final_price: u32,
}

#[function_component(PriceAnchoring)]
pub fn price_anchoring(props: &PriceAnchoringProps) -> Html {
    html! {
        <div style="background: #eff6ff; padding: 1.5rem; border-radius: 8px; border: 2px solid #bfdbfe;">
            <div style="display: flex; align-items: center; justify-content: space-between; margin-bottom: 1rem;">
                <img src={PRODUCT_THUMBNAIL} alt="temu box" width="80" height="80"
                    style="border-radius: 8px; border: 2px solid #bfdbfe; object-fit: cover;" />
                <div style="text-align: right;">
                    <p style="font-size: 0.875rem; color: #4b5563; margin: 0;">{"Original Price"}</p>
                    <p style="font-size: 1.125rem; text-decoration: line-through; color: #6b7280; margin: 0;">
                        {format_price(ORIGINAL_PRICE_CENTS)}
                    </p>
                </div>
            </div>

            <div style="margin-bottom: 1.5rem;">
                <div style="display: flex; justify-content: space-between;">
                    <span>{"Discount earned:"}</span>
                    <span style="font-weight: bold; color: #16a34a;">{format!("-{}", format_price(props.discount))}</span>
                </div>
                <div style="display: flex; justify-content: space-between; font-size: 1.25rem; font-weight: bold;">
                    <span>{"Your final price:"}</span>
                    <span style="color: #2563eb;">{format_price(props.final_price)}</span>
                </div>
            </div>

            <div style="border-top: 2px solid #bfdbfe; padding-top: 1.5rem;">
                <h3 style="font-size: 1.5rem; font-weight: bold; color: #1e3a8a; margin-bottom: 1.5rem; text-align: center;">
                    {"perfumes that are still in stock:"}
                </h3>
                <PerfumeCarousel />
            </div>

            <BonusReveal />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct OfferProps {
    pub discount: u32,
    pub final_price: u32,
    pub on_buy: Callback<()>,
    pub on_restart: Callback<()>,
}

#[function_component(Offer)]
pub fn offer(props: &OfferProps) -> Html {
    let buy = props.on_buy.reform(|_: MouseEvent| ());
    let restart = props.on_restart.reform(|_: MouseEvent| ());

    html! {
        <div class="card" style="max-width: 42rem;">
            <div style="text-align: center;">
                <div style="font-size: 4rem;">{"🏆"}</div>
                <h1 style="font-size: 1.875rem; font-weight: bold; color: #7c2d12;">{"Congratulations! 🎉"}</h1>
                <p style="font-size: 1.125rem; color: #6b7280;">
                    {"Thanks for completing the quiz! Your answers have unlocked an exclusive offer."}
                </p>
            </div>

            <PriceAnchoring discount={props.discount} final_price={props.final_price} />

            <div style="display: flex; flex-direction: column; gap: 1rem; margin-top: 1.5rem;">
                <button class="primary-button" onclick={buy}>{"$ Buy Now"}</button>
                <button class="outline-button" onclick={restart}>{"Start Over"}</button>
            </div>

            <div style="text-align: center; font-size: 0.875rem; color: #4b5563; margin-top: 1.5rem;">
                <p>{"* Limited time liquidation offer"}</p>
                <p>{format!("** Special price: {} (maximum discount applied)", format_price(props.final_price))}</p>
            </div>
        </div>
    }
}
