pub mod common;
pub mod completion;
pub mod food_lens;
pub mod reference;
