//! Decomposition: remove curves one at a time until only the outside zone remains.
//!
//! Purpose
//! - Pluggable strategies choose the next curve(s) to remove from a
//!   `Description`; the `Decomposer` loops until a strategy returns nothing and
//!   records one `DecompositionStep` per removed curve.
//!
//! Why this design
//! - Strategies are plain values behind a small trait so the CLI can select them
//!   by name (`StrategyType`) while tests can pass closures.
//! - Steps own their `from`/`to` snapshots; the list is earliest-removal first
//!   and is the contract consumed by `recomposition::recompose`.
//!
//! Code cross-refs: `description::{Description, Zone}`, `recomposition::recompose`.

mod decomposer;
mod strategy;

pub use decomposer::{take_step, DecomposeError, Decomposer, DecompositionStep};
pub use strategy::{
    innermost_curve, is_piercing_curve, power_of_two, DecompositionStrategy, Innermost,
    PiercingFirst, StrategyType,
};
