pub mod page;
pub use page::WagesPage;
