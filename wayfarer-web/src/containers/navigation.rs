use crate::{
    components::{AuthToggle, ThemeSwitcher},
    models::{SessionAction, SessionHandle},
    routes::AppRoute,
};
use yew::prelude::*;
use yew_router::prelude::Link;

#[derive(Properties, PartialEq)]
pub struct NavigationProps {
    pub session: SessionHandle,
}

/// Top bar shown on every page.
#[function_component(Navigation)]
pub fn navigation(props: &NavigationProps) -> Html {
    let theme = props.session.theme();
    let is_authenticated = props.session.is_authenticated();

    let dispatch = |action: SessionAction| {
        let session = props.session.clone();
        Callback::from(move |()| session.dispatch(action))
    };

    html! {
        <nav class={classes!("nav", theme.to_string())}>
            <Link<AppRoute> to={AppRoute::Home}>{"Home"}</Link<AppRoute>>
            <ThemeSwitcher {theme} on_toggle={dispatch(SessionAction::ToggleTheme)} />
            <AuthToggle
                {is_authenticated}
                on_login={dispatch(SessionAction::Login)}
                on_logout={dispatch(SessionAction::Logout)}
            />
            <Link<AppRoute> to={AppRoute::Admin}>{"Admin"}</Link<AppRoute>>
        </nav>
    }
}
