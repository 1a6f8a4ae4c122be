mod admin;
mod category;
mod destination;
mod home;
mod not_found;

pub use admin::AdminPage;
pub use category::CategoryPage;
pub use destination::DestinationPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
