//! Canned repositories over a small fictional tree. Used by the demo shell
//! and by tests; a real deployment wires the host's database-backed
//! implementations instead.

use crate::repository::{EventRepository, FamilyRepository, IndividualRepository, NameRepository};
use crate::types::{CountryDatum, NameCount};

/// In-memory statistics for a tree of 1,523 individuals.
#[derive(Debug, Default, Clone, Copy)]
pub struct SampleTree;

impl IndividualRepository for SampleTree {
    fn total_individuals(&self) -> u64 {
        1523
    }

    fn total_sex_male(&self) -> u64 {
        744
    }

    fn total_sex_female(&self) -> u64 {
        731
    }

    fn total_sex_unknown(&self) -> u64 {
        48
    }

    fn total_living(&self) -> u64 {
        391
    }

    fn total_deceased(&self) -> u64 {
        1132
    }
}

impl FamilyRepository for SampleTree {
    fn total_married_males(&self) -> u64 {
        512
    }

    fn total_married_females(&self) -> u64 {
        509
    }

    fn total_not_married_males(&self) -> u64 {
        232
    }

    fn total_not_married_females(&self) -> u64 {
        222
    }

    fn total_widowed(&self) -> u64 {
        38
    }

    fn total_divorced(&self) -> u64 {
        12
    }
}

impl EventRepository for SampleTree {
    fn total_births(&self) -> u64 {
        1406
    }

    fn total_deaths(&self) -> u64 {
        1110
    }

    fn births_by_month(&self) -> [u64; 12] {
        [131, 102, 119, 108, 115, 97, 122, 126, 120, 118, 112, 136]
    }

    fn deaths_by_month(&self) -> [u64; 12] {
        [118, 101, 99, 82, 84, 78, 86, 92, 95, 88, 90, 97]
    }

    fn births_by_country(&self) -> Vec<CountryDatum> {
        vec![
            CountryDatum::new("DE", "Germany", 842),
            CountryDatum::new("AT", "Austria", 211),
            CountryDatum::new("CH", "Switzerland", 96),
            CountryDatum::new("US", "United States", 148),
            CountryDatum::new("CA", "Canada", 41),
            CountryDatum::new("PL", "Poland", 68),
        ]
    }

    fn deaths_by_country(&self) -> Vec<CountryDatum> {
        vec![
            CountryDatum::new("DE", "Germany", 701),
            CountryDatum::new("AT", "Austria", 162),
            CountryDatum::new("US", "United States", 121),
            CountryDatum::new("CA", "Canada", 27),
            CountryDatum::new("PL", "Poland", 44),
        ]
    }
}

impl NameRepository for SampleTree {
    fn total_surnames(&self) -> u64 {
        287
    }

    fn top_surnames(&self, limit: usize) -> Vec<NameCount> {
        let mut names = vec![
            NameCount::new("Sonnenberg", 102),
            NameCount::new("Winter", 88),
            NameCount::new("Bauer", 74),
            NameCount::new("Keller", 61),
            NameCount::new("Hoffmann", 55),
            NameCount::new("Brandt", 49),
            NameCount::new("Vogel", 37),
            NameCount::new("Sommer", 31),
        ];
        names.truncate(limit);
        names
    }

    fn total_male_given_names(&self) -> u64 {
        196
    }

    fn total_female_given_names(&self) -> u64 {
        204
    }

    fn top_male_given_names(&self, limit: usize) -> Vec<NameCount> {
        let mut names = vec![
            NameCount::new("Johann", 94),
            NameCount::new("Friedrich", 71),
            NameCount::new("Wilhelm", 64),
            NameCount::new("Karl", 52),
            NameCount::new("Heinrich", 47),
        ];
        names.truncate(limit);
        names
    }

    fn top_female_given_names(&self, limit: usize) -> Vec<NameCount> {
        let mut names = vec![
            NameCount::new("Anna", 101),
            NameCount::new("Maria", 93),
            NameCount::new("Elisabeth", 58),
            NameCount::new("Katharina", 44),
            NameCount::new("Margarethe", 39),
        ];
        names.truncate(limit);
        names
    }
}
