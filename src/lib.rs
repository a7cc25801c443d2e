//! HRMS Lite: employee and attendance records over a SQLite store, served
//! through Actix Web.

pub mod api;
pub mod config;
pub mod db;
pub mod docs;
pub mod error;
pub mod model;
pub mod routes;
pub mod service;
pub mod utils;
