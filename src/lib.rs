pub mod core;
pub mod gen;
pub mod gui;
pub mod persistence;
