// Agenda Calendar Library
// Exports all modules for the host adapter, tests and reuse

pub mod models;
pub mod services;
pub mod ui;
pub mod utils;
