use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AuthToggleProps {
    pub is_authenticated: bool,
    pub on_login: Callback<()>,
    pub on_logout: Callback<()>,
}

/// Mock sign-in button: flips the session flag, checks no credentials.
#[function_component(AuthToggle)]
pub fn auth_toggle(props: &AuthToggleProps) -> Html {
    if props.is_authenticated {
        let on_logout = props.on_logout.clone();
        let onclick = Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            on_logout.emit(());
        });
        html! { <button type="button" {onclick}>{"Logout"}</button> }
    } else {
        let on_login = props.on_login.clone();
        let onclick = Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            on_login.emit(());
        });
        html! { <button type="button" {onclick}>{"Login"}</button> }
    }
}
