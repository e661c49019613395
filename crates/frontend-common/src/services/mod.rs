//! Frontend services

pub mod auth;
