//! Domain model structs and DTOs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct matching
//! the database row and, where rows are inserted, a create DTO.

pub mod achievement;
pub mod decision;
pub mod dilemma_cache;
pub mod game;
pub mod prompt_log;
