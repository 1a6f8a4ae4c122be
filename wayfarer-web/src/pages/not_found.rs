use crate::routes::AppRoute;
use yew::{Html, function_component, html};
use yew_router::prelude::Link;

/// `NotFoundPage` page component
#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="not-found">
            <h1>{ "Page not found" }</h1>
            <p>{ "The page you are looking for does not exist." }</p>
            <Link<AppRoute> to={AppRoute::Home}>{ "Back to Home" }</Link<AppRoute>>
        </div>
    }
}
