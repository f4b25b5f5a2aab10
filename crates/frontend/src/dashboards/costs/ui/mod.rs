pub mod page;
pub use page::CostsPage;
