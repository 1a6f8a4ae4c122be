use shared::{AppState, Theme};
use std::rc::Rc;
use yew::{Reducible, UseReducerHandle};

/// Actions accepted by the session reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    ToggleTheme,
    Login,
    Logout,
}

/// Read-only view over [`AppState`]; changes go through [`SessionAction`]s.
#[derive(Debug, Clone, PartialEq)]
pub struct Session(AppState);

/// Handle created once in `App` and passed down through props.
pub type SessionHandle = UseReducerHandle<Session>;

impl Session {
    pub fn new(state: AppState) -> Self {
        Self(state)
    }

    pub fn theme(&self) -> Theme {
        self.0.theme()
    }

    pub fn is_authenticated(&self) -> bool {
        self.0.is_authenticated()
    }
}

impl Reducible for Session {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = self.0.clone();
        match action {
            SessionAction::ToggleTheme => {
                state.toggle_theme();
            }
            SessionAction::Login => state.login(),
            SessionAction::Logout => state.logout(),
        }
        Rc::new(Self(state))
    }
}
