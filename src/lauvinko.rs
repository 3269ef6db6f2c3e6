//! Main module for lauvinko library functionality

pub mod annotations;
pub mod client;
pub mod config;
pub mod dictionary;
pub mod directory;
pub mod document;
pub mod error;
pub mod gloss;
pub mod html;
pub mod page;
pub mod render;
pub mod validate;
