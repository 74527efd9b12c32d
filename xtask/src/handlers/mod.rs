pub mod shapes;
pub mod views;
