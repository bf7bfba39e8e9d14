// src/fetch/urls.rs
use url::Url;

use crate::error::FetchError;

const ACCESS_BASE: &str = "https://dataverse.harvard.edu/api/access/datafile/:persistentId";
const DATASET_DOI: &str = "doi:10.7910/DVN/O5PX0B";

/// Dataverse file ids of the yearly contribution records, one per election cycle.
static YEAR_FILES: &[(u16, &str)] = &[
    (1980, "OQQ2NW"),
    (1982, "CUDWEU"),
    (1984, "WDLQE5"),
    (1986, "JFDKGE"),
    (1988, "MFUNX4"),
    (1990, "02KGNE"),
    (1992, "1AVELD"),
    (1994, "ASO5KB"),
    (1996, "61ZNPR"),
    (1998, "N8YSBZ"),
    (2000, "M3BZUP"),
    (2002, "T4PHDD"),
    (2004, "JV6KYR"),
    (2006, "I01NT6"),
    (2008, "JHLIEZ"),
    (2010, "NXTDHV"),
    (2012, "YQGIZJ"),
    (2014, "HDZZO7"),
];

/// Years with a published file.
pub fn supported_years() -> impl Iterator<Item = u16> {
    YEAR_FILES.iter().map(|(y, _)| *y)
}

/// Dataverse file id for `year`.
pub fn resource_id(year: u16) -> Result<&'static str, FetchError> {
    YEAR_FILES
        .iter()
        .find(|(y, _)| *y == year)
        .map(|(_, id)| *id)
        .ok_or(FetchError::UnsupportedYear { year })
}

/// Download URL for `year`.
pub fn resource_url(year: u16) -> Result<Url, FetchError> {
    let id = resource_id(year)?;
    let persistent_id = format!("{}/{}", DATASET_DOI, id);
    let url = Url::parse_with_params(ACCESS_BASE, &[("persistentId", persistent_id.as_str())])?;
    Ok(url)
}
