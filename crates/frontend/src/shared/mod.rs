pub mod components;
pub mod icons;
pub mod modal;
pub mod page_frame;
pub mod page_standard;
pub mod settings;
