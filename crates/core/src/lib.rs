//! Domain logic for the Quandary ethical dilemma game.
//!
//! Everything in this crate is pure: static catalogs, parsing, image
//! selection and achievement rule evaluation. Persistence lives in
//! `quandary-db` and provider I/O in `quandary-ai`.

pub mod achievements;
pub mod category;
pub mod dilemma;
pub mod error;
pub mod framework;
pub mod hashing;
pub mod imagery;
pub mod types;
