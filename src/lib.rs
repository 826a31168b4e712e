pub mod config;
pub mod gestor;
pub mod novedades;
pub mod render;
pub mod tracing;
