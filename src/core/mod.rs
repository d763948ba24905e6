pub mod calculator;
pub mod check;
pub mod config;
pub mod filter;
pub mod import;
pub mod log;
pub mod logic;
pub mod lookup;
pub mod mark;
pub mod report;
pub mod repository;
pub mod workspace;
