pub mod page;
pub use page::PoliciesPage;
