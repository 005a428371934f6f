// src/lib.rs

//! Academic-calendar webhook bot library

pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod utils;
pub mod webhook;
