pub mod entity;

pub use entity::MangaCover;
