//! Team Dashboard - Yew WASM Frontend
//!
//! This crate provides the web UI: headline stats, charts, and the
//! team members table backed by browser local storage.

mod app;
mod components;
mod pages;
mod roster;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() {
    yew::Renderer::<App>::new().render();
}
