use crate::model::{Distributor, Location};
use crate::report::EvaluationResult;

/// Apply one distributor's rule to every location, in catalog order.
pub fn evaluate(distributor: &Distributor, locations: &[Location]) -> Vec<EvaluationResult> {
    locations
        .iter()
        .map(|loc| EvaluationResult {
            distributor: distributor.name.clone(),
            code: loc.code.clone(),
            city: loc.city_name.clone(),
            province: loc.province_name.clone(),
            country: loc.country_name.clone(),
            permitted: distributor.permits(&loc.code),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::PrefixRule;
    use crate::test_support::{location, sample_catalog};

    #[test]
    fn one_result_per_location_in_catalog_order() {
        let d = Distributor::new("D2", PrefixRule::new(["IN"], ["TAMILNADU-IN"]));
        let catalog = sample_catalog();

        let results = evaluate(&d, &catalog);

        let codes: Vec<&str> = results.iter().map(|r| r.code.as_str()).collect();
        let expected: Vec<&str> = catalog.iter().map(|l| l.code.as_str()).collect();
        assert_eq!(codes, expected);
        assert!(results.iter().all(|r| r.distributor == "D2"));
    }

    #[test]
    fn carries_display_triple() {
        let d = Distributor::new("D", PrefixRule::new(["IN"], Vec::<String>::new()));
        let catalog = vec![location("Hubli", "Karnataka", "India")];

        let results = evaluate(&d, &catalog);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].city, "Hubli");
        assert_eq!(results[0].province, "Karnataka");
        assert_eq!(results[0].country, "India");
        assert!(results[0].permitted);
    }

    #[test]
    fn empty_catalog_yields_no_results() {
        let d = Distributor::new("D", PrefixRule::new(["IN"], Vec::<String>::new()));
        assert!(evaluate(&d, &[]).is_empty());
    }
}
