pub mod food_lens;
pub mod foods;
pub mod health;
pub mod server;
