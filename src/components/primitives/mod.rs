//! Primitive Components

pub mod button;
pub mod select;
pub mod text_input;
