use crate::model::{Distributor, Location};
use crate::rule::PrefixRule;

pub fn location_with_codes(
    code: &str,
    province_code: &str,
    country_code: &str,
    names: (&str, &str, &str),
) -> Location {
    Location {
        code: code.to_string(),
        province_code: province_code.to_string(),
        country_code: country_code.to_string(),
        city_name: names.0.to_string(),
        province_name: names.1.to_string(),
        country_name: names.2.to_string(),
    }
}

/// Build a location whose codes are derived from the display names:
/// `("Hubli", "Karnataka", "India")` -> `HUBLI-KARNATAKA-IN`.
pub fn location(city: &str, province: &str, country: &str) -> Location {
    let squash = |s: &str| s.replace(' ', "").to_uppercase();
    let country_code: String = squash(country).chars().take(2).collect();
    let province_code = format!("{}-{}", squash(province), country_code);
    let code = format!("{}-{}", squash(city), province_code);
    location_with_codes(
        &code,
        &province_code,
        &country_code,
        (city, province, country),
    )
}

pub fn sample_catalog() -> Vec<Location> {
    vec![
        location("Chennai", "Tamil Nadu", "India"),
        location("Bangalore", "Karnataka", "India"),
        location("Hubli", "Karnataka", "India"),
        location_with_codes(
            "NEWYORK-NY-US",
            "NY-US",
            "US",
            ("New York", "New York", "United States"),
        ),
        location_with_codes(
            "LONDON-ENG-GB",
            "ENG-GB",
            "GB",
            ("London", "England", "United Kingdom"),
        ),
    ]
}

/// The three reference distributors.
pub fn sample_distributors() -> Vec<Distributor> {
    vec![
        Distributor::new(
            "DISTRIBUTOR1",
            PrefixRule::new(["IN", "US"], ["KARNATAKA-IN", "CHENNAI-TAMILNADU-IN"]),
        ),
        Distributor::new("DISTRIBUTOR2", PrefixRule::new(["IN"], ["TAMILNADU-IN"])),
        Distributor::new(
            "DISTRIBUTOR3",
            PrefixRule::new(["HUBLI-KARNATAKA-IN"], Vec::<String>::new()),
        ),
    ]
}
