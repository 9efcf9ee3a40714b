use crate::error::CatalogError;
use cityperm_domain::model::Location;
use csv::StringRecord;

/// Fields per record: city code, province code, country code, city name,
/// province name, country name.
pub const FIELDS_PER_RECORD: usize = 6;

pub fn location_from_record(record: &StringRecord, line: u64) -> Result<Location, CatalogError> {
    if record.len() != FIELDS_PER_RECORD {
        return Err(CatalogError::MalformedRecord {
            line,
            expected: FIELDS_PER_RECORD,
            found: record.len(),
        });
    }

    let field = |i: usize| record[i].to_string();
    Ok(Location {
        code: field(0),
        province_code: field(1),
        country_code: field(2),
        city_name: field(3),
        province_name: field(4),
        country_name: field(5),
    })
}
