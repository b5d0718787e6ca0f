//! Users Entity Module

pub mod user;
