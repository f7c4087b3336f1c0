use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// iCERT visa class identifier for H-2A temporary agricultural workers
pub const H2A_VISA_CLASS_ID: u32 = 8;

/// Fiscal years covered by every run, in reporting order
pub const FISCAL_YEARS: [i32; 3] = [2013, 2014, 2015];

/// Default iCERT search endpoint
pub const DEFAULT_BASE_URL: &str = "https://icert.doleta.gov/index.cfm";

/// A U.S. federal fiscal year: October 1 of (year - 1) through
/// September 30 of (year).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FiscalYear(pub i32);

impl FiscalYear {
    pub fn start(&self) -> NaiveDate {
        // Oct 1 exists in every year
        NaiveDate::from_ymd_opt(self.0 - 1, 10, 1).unwrap()
    }

    pub fn end(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.0, 9, 30).unwrap()
    }

    /// Wire format of the range start, as iCERT expects it ("10/01/2012")
    pub fn start_param(&self) -> String {
        self.start().format("%m/%d/%Y").to_string()
    }

    /// Wire format of the range end; iCERT takes the month unpadded ("9/30/2013")
    pub fn end_param(&self) -> String {
        self.end().format("%-m/%d/%Y").to_string()
    }
}

/// Aggregated counts for one fiscal year
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AnnualStat {
    pub year: i32,
    pub total: u64,
    pub req_experience: u64,
    /// req_experience / total rounded to 3 decimals; None when total is 0
    pub prop_req_experience: Option<f64>,
    /// Present when the counts were filtered to a single state
    pub state_id: Option<u32>,
}

/// An annual stat joined with its human-readable state name
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StateAnnualStat {
    pub year: i32,
    pub state_name: String,
    pub total: u64,
    pub req_experience: u64,
    pub prop_req_experience: Option<f64>,
    pub state_id: u32,
}

/// One row of the state reference table
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct StateRef {
    pub state_id: u32,
    pub state_name: String,
}

/// Configuration for the application
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub state_ids_path: String,
    pub request_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        Ok(Config {
            base_url: std::env::var("ICERT_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            state_ids_path: std::env::var("STATE_IDS_PATH")
                .unwrap_or_else(|_| "data/oflc-state-ids.csv".to_string()),
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .unwrap_or(30),
        })
    }
}
