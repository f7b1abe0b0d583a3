pub mod appicon;
pub mod draw;
pub mod embed;
pub mod icon;
pub mod models;
