//! Heartword crossword application built on egui/eframe.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub use self::app::HeartwordApp;

mod action;
mod app;
pub mod app_icon;
mod persistence;
mod state;
mod ui;
pub mod version;
mod view_model_builder;
