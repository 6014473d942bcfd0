#![deny(unsafe_code)]

/// Desktop portfolio page.
///
/// A single-window GPUI application composing the portfolio sections (hero,
/// about, tech stack, projects, blogs, contact) in fixed order, with a
/// floating scripted chat widget and a persisted dark/light theme toggle.
/// All content comes from `folio-content`; all chat behavior comes from
/// `folio-assistant`.
pub mod app;
/// Carousel state machine and its timer driver.
pub mod carousel;
/// Floating chat widget over the scripted assistant.
pub mod chat;
pub mod sections;
/// Theme preference persistence.
pub mod settings;
