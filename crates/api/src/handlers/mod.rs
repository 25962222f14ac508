pub mod achievements;
pub mod decision;
pub mod dilemma;
pub mod game;
pub mod page;
