pub mod db;
pub mod models;
pub mod preferences;
pub mod service;
