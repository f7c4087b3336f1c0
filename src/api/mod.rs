use anyhow::Result;

use crate::models::{FiscalYear, H2A_VISA_CLASS_ID};

pub mod icert_client;
pub use icert_client::IcertClient;

/// Common trait for anything that can answer "how many H-2A applications
/// matched this filter"
#[async_trait::async_trait]
pub trait CountProvider {
    /// Count applications filed in the given fiscal year, optionally
    /// restricted to one state and/or to applications that required
    /// prior work experience.
    async fn fiscal_year_count(
        &self,
        year: FiscalYear,
        state_id: Option<u32>,
        experience_only: bool,
    ) -> Result<u64>;
}

/// Build the query string parameters for one counter request.
///
/// The fixed parameters match the iCERT advanced-search counter endpoint;
/// `location_state_id` and `experience` are appended only when the
/// corresponding filter is active (an omitted `experience` means the count
/// is unfiltered by experience status).
pub fn counter_query(
    year: FiscalYear,
    state_id: Option<u32>,
    experience_only: bool,
) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("event", "ehLCJRExternal.doAdvCertSearchCounter".to_string()),
        ("create_date", "undefined".to_string()),
        ("post_end_date", "undefined".to_string()),
        ("visa_class_id", H2A_VISA_CLASS_ID.to_string()),
        ("start_date_from", year.start_param()),
        ("start_date_to", year.end_param()),
    ];

    if let Some(id) = state_id {
        params.push(("location_state_id", id.to_string()));
    }
    if experience_only {
        params.push(("experience", "1".to_string()));
    }

    params
}
