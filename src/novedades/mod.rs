pub mod api;
pub mod dto;
pub mod model;
pub mod validation;
pub mod view;
