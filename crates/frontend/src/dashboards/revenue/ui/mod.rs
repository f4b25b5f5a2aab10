pub mod page;
pub use page::RevenuePage;
