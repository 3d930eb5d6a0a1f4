pub mod answer;
pub mod command;
pub mod fixture;
pub mod generator;
