//! CLI infrastructure for the perfect_ttt engine
//!
//! This module provides the command-line interface for playing against the
//! engine, evaluating positions, and dumping the materialized game tree.

pub mod commands;
pub mod output;
