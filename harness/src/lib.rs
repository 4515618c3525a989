//! Combsearch Harness: problem instantiations and console orchestration.
//!
//! The harness turns one line of console input into a world, runs the world
//! through [`combsearch_search::search`], and renders the accepted solutions
//! in discovery order.
//!
//! The harness does NOT implement traversal. Worlds provide candidate, goal
//! and prune rules only; budgets and dedup come from [`config`].

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod contract;
pub mod input;
pub mod render;
pub mod runner;
pub mod worlds;
