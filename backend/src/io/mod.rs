//! # IO Module
//!
//! Ways into the backend from the outside world. The REST API is the only
//! interface; it translates HTTP to domain service calls and back.

pub mod rest;
