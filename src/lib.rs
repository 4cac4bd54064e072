pub mod build_info;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod initial_conditions;
pub mod report;
pub mod solver;
pub mod stencil;
pub mod util;
