pub mod components;
pub mod error;
pub mod grid;
pub mod icons;
pub mod storage;
