use crate::config::FrontendConfig;
use crate::containers::navigation::Navigation;
use crate::models::SessionHandle;
use shared::Theme;
use std::rc::Rc;
use web_sys::window;
use yew::{Children, Html, Properties, classes, function_component, html, use_effect_with};

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    pub session: SessionHandle,
    pub config: Rc<FrontendConfig>,
}

/// Mirrors the theme onto `<html data-theme>` so page-wide styles follow it.
fn apply_document_theme(theme: Theme) {
    if let Some(window) = window()
        && let Some(document) = window.document()
        && let Some(html_element) = document.document_element()
        && let Err(err) = html_element.set_attribute("data-theme", theme.as_ref())
    {
        log::warn!("Unable to apply theme: {err:?}");
    }
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let theme = props.session.theme();
    use_effect_with(theme, |theme| {
        apply_document_theme(*theme);
        || {}
    });

    html! {
    <>
        <Navigation session={props.session.clone()} />
        <main class={classes!("content", theme.to_string())}>
            {props.children.clone()}
        </main>
        <footer class="footer">
            <p>{format!("© 2025 {} · Powered by Rust and Yew", props.config.app_title)}</p>
        </footer>
    </>
    }
}
