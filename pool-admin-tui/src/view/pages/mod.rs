//! 页面视图

pub mod app_clients;
pub mod landing;
pub mod settings;
pub mod systems;
mod table;
pub mod users;
