pub mod dish_analysis;
pub mod domain_record;
pub mod recipe;
pub mod restaurant;
pub mod scan_result;

pub use dish_analysis::*;
pub use domain_record::*;
pub use recipe::*;
pub use restaurant::*;
pub use scan_result::*;
