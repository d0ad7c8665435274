// Library exports for the admin provisioning CLI

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod prompt;
