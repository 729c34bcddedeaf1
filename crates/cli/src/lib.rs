// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Concurrent check runner for package.json scripts.
//!
//! Resolves the `checks` declared in the nearest package.json, runs each
//! referenced script as a subprocess through the configured package
//! runner, streams output to a live renderer, and reports an aggregate
//! pass/fail through the exit code.

pub mod check;
pub mod cli;
pub mod color;
pub mod command;
pub mod discovery;
pub mod exec;
pub mod manifest;
pub mod render;
pub mod resolve;
pub mod runner;
