use crate::{components::Carousel, routes::AppRoute, services::Services};
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::Link;

#[derive(Properties, PartialEq)]
pub struct DestinationPageProps {
    pub id: AttrValue,
    pub services: Rc<Services>,
}

/// Destination details with an image carousel.
///
/// This page owns the carousel index and starts over at the first image
/// whenever the destination changes.
#[function_component(DestinationPage)]
pub fn destination_page(props: &DestinationPageProps) -> Html {
    let current_index = use_state_eq(|| 0_usize);
    let destination = use_memo(
        (props.id.clone(), Rc::clone(&props.services)),
        |(id, services)| {
            let found = services.catalog.get_destination(id);
            if found.is_none() {
                log::warn!("Destination not found: {id}");
            }
            found
        },
    );

    {
        let current_index = current_index.clone();
        use_effect_with(props.id.clone(), move |_| {
            current_index.set(0);
            || ()
        });
    }

    let Some(destination) = &*destination else {
        return html! {
            <div class="destination destination-missing">
                <h2>{"Destination not found"}</h2>
                <p>{format!("No destination matches \"{}\".", props.id)}</p>
                <Link<AppRoute> to={AppRoute::Home}>{"Back to Home"}</Link<AppRoute>>
            </div>
        };
    };

    let images: Vec<AttrValue> = destination
        .images
        .iter()
        .map(|image| AttrValue::from(image.clone()))
        .collect();
    let on_change = {
        let current_index = current_index.clone();
        Callback::from(move |index: usize| current_index.set(index))
    };

    html! {
        <div class="destination">
            <h2>{ destination.name.clone() }</h2>
            <Carousel {images} current_index={*current_index} {on_change} />
            <Link<AppRoute> to={AppRoute::Category { kind: destination.kind.clone() }}>
                {format!("Back to {} Destinations", destination.kind)}
            </Link<AppRoute>>
        </div>
    }
}
