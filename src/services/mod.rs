pub mod health;
pub mod owghat;
