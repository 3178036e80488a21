//! Repository traits the host implements against its genealogical database.
//!
//! All methods are synchronous and return full result sets; the host is
//! expected to answer them from its own aggregation layer. Counts are always
//! totals over the currently selected family tree.

use crate::types::{CountryDatum, NameCount};

/// Individual-related statistics.
pub trait IndividualRepository: Send + Sync {
    fn total_individuals(&self) -> u64;

    fn total_sex_male(&self) -> u64;
    fn total_sex_female(&self) -> u64;
    fn total_sex_unknown(&self) -> u64;

    fn total_living(&self) -> u64;
    fn total_deceased(&self) -> u64;
}

/// Family-related statistics.
pub trait FamilyRepository: Send + Sync {
    fn total_married_males(&self) -> u64;
    fn total_married_females(&self) -> u64;

    fn total_not_married_males(&self) -> u64;
    fn total_not_married_females(&self) -> u64;

    fn total_widowed(&self) -> u64;
    fn total_divorced(&self) -> u64;
}

/// Vital-event statistics. Month distributions are January-first.
pub trait EventRepository: Send + Sync {
    fn total_births(&self) -> u64;
    fn total_deaths(&self) -> u64;

    fn births_by_month(&self) -> [u64; 12];
    fn deaths_by_month(&self) -> [u64; 12];

    fn births_by_country(&self) -> Vec<CountryDatum>;
    fn deaths_by_country(&self) -> Vec<CountryDatum>;
}

/// Name statistics. The `top_*` lists arrive ordered by descending count;
/// presentation layers may re-order them.
pub trait NameRepository: Send + Sync {
    fn total_surnames(&self) -> u64;
    fn top_surnames(&self, limit: usize) -> Vec<NameCount>;

    fn total_male_given_names(&self) -> u64;
    fn total_female_given_names(&self) -> u64;

    fn top_male_given_names(&self, limit: usize) -> Vec<NameCount>;
    fn top_female_given_names(&self, limit: usize) -> Vec<NameCount>;
}
