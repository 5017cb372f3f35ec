mod app;
mod clipboard;
mod commands;
mod fonts;
mod keyboard;
mod message;
mod state;
mod view;

pub use app::run;
