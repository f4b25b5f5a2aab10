pub mod page;
pub use page::OverviewPage;
