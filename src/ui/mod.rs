pub mod components;
pub mod plot;
pub mod theme;
