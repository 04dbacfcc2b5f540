pub mod corpus;
pub mod health;
pub mod matches;
