pub mod contract;
pub mod state;
pub mod views;
