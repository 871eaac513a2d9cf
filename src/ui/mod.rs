pub mod app;
pub mod components;
pub mod events;

pub use app::App;
pub use events::AppEvent;
