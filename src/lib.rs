//! Single-page registration demo: form validation with password hashing on
//! POST, and an HTML-escaped echo of a query parameter on GET.

pub mod backend;
pub mod config;
pub mod consts;
pub mod echo;
pub mod registration;
pub mod repository;
pub mod utils;
