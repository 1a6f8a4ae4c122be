pub(crate) mod auth_toggle;
pub(crate) mod carousel;
pub(crate) mod private_route;
pub(crate) mod text_input;
pub(crate) mod theme_switcher;

// Re-export components for convenience
pub use auth_toggle::AuthToggle;
pub use carousel::Carousel;
pub use private_route::PrivateRoute;
pub use text_input::TextInput;
pub use theme_switcher::ThemeSwitcher;
