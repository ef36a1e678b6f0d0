//! Diagnostics for composing suggestion bars outside a host keyboard.

pub mod preview;
