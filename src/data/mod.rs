//! # Storing of vectors in memory
//!
//! This module provides the data structures used to represent sparse numeric data in memory.

pub mod linear_algebra;
