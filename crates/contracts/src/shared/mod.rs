pub mod grid;
pub mod tabs;
