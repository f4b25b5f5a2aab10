pub mod page;
pub use page::PredictionsPage;
