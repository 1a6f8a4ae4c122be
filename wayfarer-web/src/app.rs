use crate::config::FrontendConfig;
use crate::containers::layout::Layout;
use crate::models::Session;
use crate::routes::{AppRoute, switch};
use crate::services::Services;
use crate::storage::BrowserStorage;
use shared::AppState;
use std::rc::Rc;
use yew::{Html, function_component, html, use_memo, use_reducer};
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    // Settings are read from local storage once, on first render
    let session = use_reducer(|| Session::new(AppState::load(Rc::new(BrowserStorage::new()))));
    let services = use_memo((), |_| Services::placeholder());
    let config = use_memo((), |_| FrontendConfig::new());

    let render = {
        let session = session.clone();
        let services = Rc::clone(&services);
        let config = Rc::clone(&config);
        move |route| switch(route, &session, &services, &config)
    };

    html! {
        <BrowserRouter>
            <Layout session={session.clone()} {config}>
                <Switch<AppRoute> {render} />
            </Layout>
        </BrowserRouter>
    }
}
