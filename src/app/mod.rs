mod console;
mod options;
pub(crate) mod runtime;
mod status;
mod terminal;

pub use console::EventConsole;
pub use options::UiOptions;
