//! NewsApp process shell: configuration, tracing, dependency wiring and the
//! command handlers behind the `newsapp` binary.

pub mod bootstrap;
pub mod commands;
