use shared::Theme;
use yew::{Callback, Classes, Html, MouseEvent, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct ThemeSwitcherProps {
    pub theme: Theme,
    pub on_toggle: Callback<()>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ThemeSwitcher)]
pub fn theme_switcher(props: &ThemeSwitcherProps) -> Html {
    // Function to toggle the theme
    let toggle_theme = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(()))
    };

    // The caption names the theme the button switches to
    let label = props.theme.toggle_label();

    html! {
        <button
            type="button"
            class={props.class.clone()}
            onclick={toggle_theme}
            aria-pressed={(props.theme == Theme::Dark).to_string()}
        >
            { label }
        </button>
    }
}
