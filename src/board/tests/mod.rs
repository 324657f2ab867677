//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Move generator node counts
//! - `movegen.rs` - Castling, en passant and promotion generation
//! - `check.rs` - Check detection
//! - `draw.rs` - Draw detection (50-move, repetition, insufficient material)
//! - `make_unmake.rs` - Make/undo move correctness
//! - `proptest.rs` - Property-based tests

mod check;
mod draw;
mod movegen;
