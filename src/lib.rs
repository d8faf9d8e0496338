pub mod dataset;
pub mod driver;
pub mod errors;
mod information;
pub mod logdate;
pub mod matrix;
pub mod output;
pub mod report;
pub mod select;
pub mod status;
