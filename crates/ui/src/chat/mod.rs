/// Floating chat widget view over the scripted assistant session.
pub mod widget;

pub use widget::ChatWidget;
