pub mod lighting;
pub mod picking;
pub mod render;
pub mod starfield;
