//! Concrete games built on the rules engine.

pub mod pairs;
