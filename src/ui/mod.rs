pub mod app;
mod responder;
mod status_bar;
pub mod theme;
mod widgets;

pub use app::render;
