use shared::carousel::{self, CarouselAction};
use yew::prelude::*;

const DESCRIPTION_ID: &str = "carousel-description";

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    pub images: Vec<AttrValue>,
    /// Index owned by the embedding view.
    pub current_index: usize,
    pub on_change: Callback<usize>,
}

/// Image carousel with wrap-around navigation.
///
/// Holds no state of its own: every move is reported through `on_change`.
/// Arrow keys, Home and End work while the region has focus.
#[function_component(Carousel)]
pub fn carousel(props: &CarouselProps) -> Html {
    let len = props.images.len();
    let current = props.current_index;

    let navigate = {
        let on_change = props.on_change.clone();
        Callback::from(move |action: CarouselAction| {
            if let Some(next) = carousel::apply(action, current, len) {
                on_change.emit(next);
            }
        })
    };

    let on_previous = navigate.reform(|_: MouseEvent| CarouselAction::Previous);
    let on_next = navigate.reform(|_: MouseEvent| CarouselAction::Next);
    let onkeydown = {
        let navigate = navigate.clone();
        Callback::from(move |event: KeyboardEvent| {
            if let Some(action) = CarouselAction::from_key(&event.key()) {
                event.prevent_default();
                navigate.emit(action);
            }
        })
    };

    let Some(index) = carousel::visible_index(current, len) else {
        return html! {
            <div role="region" aria-label="Image Carousel" class="carousel carousel-empty">
                <p class="carousel-empty-message">{"No images available."}</p>
                <button type="button" aria-label="Previous Image" disabled=true>{"Previous"}</button>
                <button type="button" aria-label="Next Image" disabled=true>{"Next"}</button>
            </div>
        };
    };

    let label = carousel::position_label(index, len).unwrap_or_default();
    let src = props.images[index].clone();

    html! {
        <div role="region" aria-label="Image Carousel" tabindex="0" class="carousel" {onkeydown}>
            <img
                {src}
                alt={label.clone()}
                role="img"
                aria-labelledby={DESCRIPTION_ID}
            />
            <button type="button" aria-label="Previous Image" onclick={on_previous}>
                {"Previous"}
            </button>
            <button type="button" aria-label="Next Image" onclick={on_next}>
                {"Next"}
            </button>
            <p class="carousel-position" aria-live="polite">{label}</p>
            <p id={DESCRIPTION_ID}>{"Use arrow keys to navigate between images."}</p>
        </div>
    }
}
