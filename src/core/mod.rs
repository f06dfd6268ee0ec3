//! Core module for the campus records manager

pub mod backup;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod transfer;
