//! Common test utilities and helpers

use std::sync::Mutex;

use anyhow::Result;
use lcr_stats::api::CountProvider;
use lcr_stats::models::FiscalYear;

/// One recorded counter request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub year: i32,
    pub state_id: Option<u32>,
    pub experience_only: bool,
}

/// Count provider that answers every request from fixed counts and
/// records the calls it receives
pub struct StubCountProvider {
    total: u64,
    req_experience: u64,
    calls: Mutex<Vec<RecordedCall>>,
}

impl StubCountProvider {
    pub fn new(total: u64, req_experience: u64) -> Self {
        Self {
            total,
            req_experience,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl CountProvider for StubCountProvider {
    async fn fiscal_year_count(
        &self,
        year: FiscalYear,
        state_id: Option<u32>,
        experience_only: bool,
    ) -> Result<u64> {
        self.calls.lock().unwrap().push(RecordedCall {
            year: year.0,
            state_id,
            experience_only,
        });

        if experience_only {
            Ok(self.req_experience)
        } else {
            Ok(self.total)
        }
    }
}

/// Test data utilities
pub mod test_data {
    use lcr_stats::models::StateRef;
    use lcr_stats::states::StateTable;

    /// The two-state reference table from the scenario tests
    pub fn two_state_table() -> StateTable {
        StateTable::from_rows(vec![
            StateRef {
                state_id: 1,
                state_name: "Alabama".to_string(),
            },
            StateRef {
                state_id: 2,
                state_name: "Alaska".to_string(),
            },
        ])
    }
}
