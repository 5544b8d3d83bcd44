//! Command implementations for the restructure-resources CLI

pub mod restructure;
