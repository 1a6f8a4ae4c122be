use crate::{routes::AppRoute, services::Services};
use std::rc::Rc;
use yew::{AttrValue, Html, Properties, function_component, html, use_memo};
use yew_router::prelude::Link;

#[derive(Properties, PartialEq)]
pub struct CategoryPageProps {
    pub kind: AttrValue,
    pub services: Rc<Services>,
}

/// Lists the destinations of one category.
#[function_component(CategoryPage)]
pub fn category_page(props: &CategoryPageProps) -> Html {
    let destinations = use_memo(
        (props.kind.clone(), Rc::clone(&props.services)),
        |(kind, services)| services.catalog.list_destinations(kind),
    );
    let kind = &props.kind;

    html! {
        <div class="category">
            <h2>{format!("{kind} Destinations")}</h2>
            if destinations.is_empty() {
                <p class="empty-state">{format!("No {kind} destinations yet.")}</p>
            } else {
                <ul>
                    { for destinations.iter().map(|destination| html! {
                        <li key={destination.id.clone()}>
                            <Link<AppRoute> to={AppRoute::Destination { id: destination.id.clone() }}>
                                { destination.name.clone() }
                            </Link<AppRoute>>
                        </li>
                    }) }
                </ul>
            }
            <Link<AppRoute> to={AppRoute::Home}>{"Back to Home"}</Link<AppRoute>>
        </div>
    }
}
