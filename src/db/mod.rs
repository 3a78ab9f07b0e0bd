pub mod cities;
pub mod comps;
pub mod connection;
pub mod diagnostics;
pub mod listings;
pub mod sql;
pub mod statistics;

pub use connection::Database;
