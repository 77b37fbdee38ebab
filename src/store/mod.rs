pub mod chart;
pub mod output;

pub use chart::update_chart;
pub use output::{OutputWriter, clean};
