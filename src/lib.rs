//! Deterministic grid snake engine with a terminal front end.
//!
//! The engine ([`engine`]) is a pure, synchronous state machine: every
//! transition is a function from a state value (plus an injected random
//! source) to a new state value, so gameplay is fully reproducible under a
//! fixed random sequence. The remaining modules form the terminal driver,
//! which owns the single current state, advances it on a fixed tick, and
//! renders it with ratatui.

pub mod config;
pub mod engine;
pub mod grid;
pub mod input;
pub mod renderer;
pub mod score;
pub mod terminal_runtime;
pub mod ui;
