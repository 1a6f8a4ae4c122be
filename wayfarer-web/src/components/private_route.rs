use crate::routes::{AppRoute, RouteAccess};
use yew::{Children, Html, Properties, function_component, html};
use yew_router::prelude::{Redirect, Routable};

#[derive(Properties, PartialEq)]
pub struct PrivateRouteProps {
    pub access: RouteAccess,
    pub children: Children,
}

/// Renders its children when access is granted, otherwise redirects.
#[function_component(PrivateRoute)]
pub fn private_route(props: &PrivateRouteProps) -> Html {
    match &props.access {
        RouteAccess::Granted => html! { <>{ props.children.clone() }</> },
        RouteAccess::Redirect(to) => {
            log::info!("Access denied, redirecting to {}", to.to_path());
            html! { <Redirect<AppRoute> to={to.clone()} /> }
        }
    }
}
