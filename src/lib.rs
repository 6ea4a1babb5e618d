//! A click-wheel media player simulation for the terminal.
//!
//! [`player`] holds the navigation and playback state machine, [`ui`] draws
//! it with ratatui, and [`app`] wires both to crossterm input, config and
//! logging.

pub mod app;
pub mod player;
pub mod ui;
