pub mod config;
pub mod controller;
pub mod domain;
pub mod render;
pub mod submit_client;
pub mod telemetry;
pub mod terminal;
pub mod view;
