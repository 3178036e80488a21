//! A selection of pre-formatted statistical datasets, composed from the
//! repositories the host implements. This is the only place raw counts are
//! reshaped into chart input; the charts themselves stay data-agnostic.

use std::sync::Arc;

use api::{
    ChartDatum, CountryDatum, EventRepository, FamilyRepository, IndividualRepository,
    NameRepository,
};

use crate::t;

/// Facade over the host's statistics repositories.
#[derive(Clone)]
pub struct Statistic {
    individuals: Arc<dyn IndividualRepository>,
    families: Arc<dyn FamilyRepository>,
    events: Arc<dyn EventRepository>,
    names: Arc<dyn NameRepository>,
}

impl Statistic {
    pub fn new(
        individuals: Arc<dyn IndividualRepository>,
        families: Arc<dyn FamilyRepository>,
        events: Arc<dyn EventRepository>,
        names: Arc<dyn NameRepository>,
    ) -> Self {
        Self {
            individuals,
            families,
            events,
            names,
        }
    }

    pub fn total_individuals(&self) -> u64 {
        self.individuals.total_individuals()
    }

    pub fn total_surnames(&self) -> u64 {
        self.names.total_surnames()
    }

    pub fn total_births(&self) -> u64 {
        self.events.total_births()
    }

    pub fn total_deaths(&self) -> u64 {
        self.events.total_deaths()
    }

    /// Male / female / unknown, always in that order.
    pub fn sex_distribution_data(&self) -> Vec<ChartDatum> {
        vec![
            ChartDatum::new(t!("chart-sex-male"), self.individuals.total_sex_male())
                .with_class("male"),
            ChartDatum::new(t!("chart-sex-female"), self.individuals.total_sex_female())
                .with_class("female"),
            ChartDatum::new(t!("chart-sex-unknown"), self.individuals.total_sex_unknown())
                .with_class("unknown"),
        ]
    }

    pub fn living_deceased_data(&self) -> Vec<ChartDatum> {
        vec![
            ChartDatum::new(t!("chart-living"), self.individuals.total_living())
                .with_class("living"),
            ChartDatum::new(t!("chart-deceased"), self.individuals.total_deceased())
                .with_class("deceased"),
        ]
    }

    pub fn family_status_data(&self) -> Vec<ChartDatum> {
        let married =
            self.families.total_married_males() + self.families.total_married_females();
        let single = self
            .individuals
            .total_individuals()
            .saturating_sub(married);

        vec![
            ChartDatum::new(t!("chart-married"), married).with_class("married"),
            ChartDatum::new(t!("chart-single"), single).with_class("alone"),
            ChartDatum::new(t!("chart-widowed"), self.families.total_widowed())
                .with_class("widowed"),
            ChartDatum::new(t!("chart-divorced"), self.families.total_divorced())
                .with_class("divorced"),
        ]
    }

    /// The `limit` most common surnames, presented alphabetically.
    pub fn top_surnames_data(&self, limit: usize) -> Vec<ChartDatum> {
        Self::name_dataset(self.names.top_surnames(limit))
    }

    pub fn top_male_given_names_data(&self, limit: usize) -> Vec<ChartDatum> {
        Self::name_dataset(self.names.top_male_given_names(limit))
    }

    pub fn top_female_given_names_data(&self, limit: usize) -> Vec<ChartDatum> {
        Self::name_dataset(self.names.top_female_given_names(limit))
    }

    fn name_dataset(mut names: Vec<api::NameCount>) -> Vec<ChartDatum> {
        names.sort_by(|a, b| a.name.cmp(&b.name));
        names
            .into_iter()
            .map(|entry| ChartDatum::new(entry.name, entry.count))
            .collect()
    }

    pub fn births_by_month_data(&self) -> Vec<ChartDatum> {
        Self::month_dataset(self.events.births_by_month())
    }

    pub fn deaths_by_month_data(&self) -> Vec<ChartDatum> {
        Self::month_dataset(self.events.deaths_by_month())
    }

    fn month_dataset(counts: [u64; 12]) -> Vec<ChartDatum> {
        counts
            .iter()
            .enumerate()
            .map(|(month, &count)| ChartDatum::new(month_label(month), count))
            .collect()
    }

    pub fn births_by_country(&self) -> Vec<CountryDatum> {
        self.events.births_by_country()
    }

    pub fn deaths_by_country(&self) -> Vec<CountryDatum> {
        self.events.deaths_by_country()
    }
}

fn month_label(month: usize) -> String {
    match month {
        0 => t!("month-january"),
        1 => t!("month-february"),
        2 => t!("month-march"),
        3 => t!("month-april"),
        4 => t!("month-may"),
        5 => t!("month-june"),
        6 => t!("month-july"),
        7 => t!("month-august"),
        8 => t!("month-september"),
        9 => t!("month-october"),
        10 => t!("month-november"),
        11 => t!("month-december"),
        _ => unreachable!("month index out of range"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::fixtures::SampleTree;

    fn statistic() -> Statistic {
        crate::i18n::init();
        let tree = Arc::new(SampleTree);
        Statistic::new(tree.clone(), tree.clone(), tree.clone(), tree)
    }

    #[test]
    fn sex_distribution_keeps_order_and_classes() {
        let data = statistic().sex_distribution_data();

        assert_eq!(data.len(), 3);
        assert_eq!(data[0].css_class.as_deref(), Some("male"));
        assert_eq!(data[1].css_class.as_deref(), Some("female"));
        assert_eq!(data[2].css_class.as_deref(), Some("unknown"));
        assert_eq!(data[0].label, t!("chart-sex-male"));

        let total: u64 = data.iter().map(|d| d.value).sum();
        assert_eq!(total, statistic().total_individuals());
    }

    #[test]
    fn family_status_balances_against_total_individuals() {
        let statistic = statistic();
        let data = statistic.family_status_data();

        assert_eq!(data.len(), 4);
        assert_eq!(
            data[0].value + data[1].value,
            statistic.total_individuals()
        );
    }

    #[test]
    fn top_surnames_are_presented_alphabetically() {
        let data = statistic().top_surnames_data(5);

        assert_eq!(data.len(), 5);
        let labels: Vec<_> = data.iter().map(|d| d.label.as_str()).collect();
        let mut sorted = labels.clone();
        sorted.sort_unstable();
        assert_eq!(labels, sorted);
    }

    #[test]
    fn month_dataset_covers_the_year_in_order() {
        let data = statistic().births_by_month_data();

        assert_eq!(data.len(), 12);
        assert_eq!(data[0].label, t!("month-january"));
        assert_eq!(data[11].label, t!("month-december"));
    }

    #[test]
    fn country_datasets_pass_through_unchanged() {
        let statistic = statistic();
        assert_eq!(
            statistic.births_by_country(),
            SampleTree.births_by_country()
        );
    }
}
