pub mod games;
pub mod info;
pub mod users;
