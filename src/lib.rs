pub mod charts;
pub mod cli;
pub mod config;
pub mod data;
pub mod logging;
pub mod report;
pub mod stats;
pub mod ui;
pub mod view;
