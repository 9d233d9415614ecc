#[path = "../common/mod.rs"]
mod common;

mod autopilot;
mod config;
mod invariants;
mod plugin;
mod scenarios;
