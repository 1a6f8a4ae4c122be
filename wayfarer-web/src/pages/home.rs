use crate::{config::FrontendConfig, routes::AppRoute};
use std::rc::Rc;
use yew::{Html, Properties, function_component, html};
use yew_router::prelude::Link;

#[derive(Properties, PartialEq)]
pub struct HomePageProps {
    pub config: Rc<FrontendConfig>,
}

/// `HomePage` page component
#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    html! {
        <div class="home">
            <h1>{"Choose Your Destination Category"}</h1>
            <ul class="category-links">
                { for props.config.categories.iter().map(|kind| html! {
                    <li key={kind.clone()}>
                        <Link<AppRoute> to={AppRoute::Category { kind: kind.clone() }}>
                            { kind.clone() }
                        </Link<AppRoute>>
                    </li>
                }) }
            </ul>
        </div>
    }
}
