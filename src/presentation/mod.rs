mod components;
mod view;

pub use view::{PopupRender, ScreenView, UiContext, WizardScreen, draw};
