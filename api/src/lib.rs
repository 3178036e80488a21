//! Data contract between the host genealogy application and the statistics
//! module. The host owns the database and the queries; this crate only fixes
//! the shape of what the queries return.

pub mod repository;
pub mod types;

#[cfg(feature = "fixtures")]
pub mod fixtures;

pub use repository::{EventRepository, FamilyRepository, IndividualRepository, NameRepository};
pub use types::{ChartDatum, CountryDatum, NameCount};
