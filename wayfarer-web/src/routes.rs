use crate::{
    components::PrivateRoute,
    config::FrontendConfig,
    models::SessionHandle,
    pages::{AdminPage, CategoryPage, DestinationPage, HomePage, NotFoundPage},
    services::Services,
};
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

/// The app routes. Patterns are tried in declaration order; anything else
/// lands on [`AppRoute::NotFound`].
#[derive(Debug, Clone, PartialEq, Eq, Routable)]
pub enum AppRoute {
    #[at("/")]
    Home,
    #[at("/category/:kind")]
    Category { kind: String },
    #[at("/destination/:id")]
    Destination { id: String },
    #[at("/admin")]
    Admin,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl AppRoute {
    /// Whether the route sits behind the login gate.
    pub const fn requires_auth(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

/// Outcome of checking a route against the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteAccess {
    Granted,
    Redirect(AppRoute),
}

impl RouteAccess {
    /// Gate for protected views: signed-out visitors are sent home.
    pub fn guard(is_authenticated: bool) -> Self {
        if is_authenticated {
            Self::Granted
        } else {
            Self::Redirect(AppRoute::Home)
        }
    }

    pub fn for_route(route: &AppRoute, is_authenticated: bool) -> Self {
        if route.requires_auth() {
            Self::guard(is_authenticated)
        } else {
            Self::Granted
        }
    }
}

/// Switch function for the app routes.
///
/// Every page is rendered through [`PrivateRoute`], which enforces the
/// [`RouteAccess`] decided here.
pub fn switch(
    route: AppRoute,
    session: &SessionHandle,
    services: &Rc<Services>,
    config: &Rc<FrontendConfig>,
) -> Html {
    log::debug!("Switching to route: {route:?}");
    let access = RouteAccess::for_route(&route, session.is_authenticated());
    let page = match route {
        AppRoute::Home => html! { <HomePage config={Rc::clone(config)} /> },
        AppRoute::Category { kind } => html! {
            <CategoryPage kind={AttrValue::from(kind)} services={Rc::clone(services)} />
        },
        AppRoute::Destination { id } => html! {
            <DestinationPage id={AttrValue::from(id)} services={Rc::clone(services)} />
        },
        AppRoute::Admin => html! { <AdminPage services={Rc::clone(services)} /> },
        AppRoute::NotFound => html! { <NotFoundPage /> },
    };
    html! { <PrivateRoute {access}>{page}</PrivateRoute> }
}
