pub mod costs;
pub mod overview;
pub mod policies;
pub mod predictions;
pub mod revenue;
pub mod wages;
