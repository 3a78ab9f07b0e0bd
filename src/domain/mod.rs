pub mod city;
pub mod comps;
pub mod listing;
pub mod statistics;

pub use city::CityAggregate;
pub use comps::{BuilderComp, MlsComp};
pub use listing::{Listing, ListingPage, PropertyDetail};
pub use statistics::{Statistics, StatisticsRow};
