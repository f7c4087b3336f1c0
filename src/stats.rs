use anyhow::Result;
use tracing::{info, warn};

use crate::api::CountProvider;
use crate::models::{AnnualStat, FiscalYear, StateAnnualStat, FISCAL_YEARS};
use crate::states::StateTable;

/// Round a ratio to 3 decimal places
fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Proportion of applications requiring experience; undefined when no
/// applications were filed
fn proportion(req_experience: u64, total: u64) -> Option<f64> {
    if total == 0 {
        None
    } else {
        Some(round3(req_experience as f64 / total as f64))
    }
}

/// Aggregates counter requests into per-year statistics
pub struct StatsCollector<P> {
    provider: P,
}

impl<P: CountProvider> StatsCollector<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// One stat row per fiscal year, optionally restricted to one state.
    ///
    /// Each year costs two counter requests (total, then experience-only),
    /// issued strictly in sequence.
    pub async fn get_annual_stats(&self, state_id: Option<u32>) -> Result<Vec<AnnualStat>> {
        let mut rows = Vec::with_capacity(FISCAL_YEARS.len());

        for year in FISCAL_YEARS {
            let fy = FiscalYear(year);
            let total = self.provider.fiscal_year_count(fy, state_id, false).await?;
            let req_experience = self.provider.fiscal_year_count(fy, state_id, true).await?;

            if req_experience > total {
                warn!(
                    "FY{} state={:?}: experience count {} exceeds total {}",
                    year, state_id, req_experience, total
                );
            }

            rows.push(AnnualStat {
                year,
                total,
                req_experience,
                prop_req_experience: proportion(req_experience, total),
                state_id,
            });
        }

        Ok(rows)
    }

    /// Annual stats for every state in the reference table, with state
    /// names joined on.
    ///
    /// Rows come out grouped by state, each group in fiscal-year order,
    /// states in reference-table order.
    pub async fn get_state_stats(&self, states: &StateTable) -> Result<Vec<StateAnnualStat>> {
        let mut rows = Vec::with_capacity(states.len() * FISCAL_YEARS.len());

        for state in states.iter() {
            info!("Fetching annual stats for {}", state.state_name);
            let annual = self.get_annual_stats(Some(state.state_id)).await?;

            for stat in annual {
                rows.push(StateAnnualStat {
                    year: stat.year,
                    state_name: state.state_name.clone(),
                    total: stat.total,
                    req_experience: stat.req_experience,
                    prop_req_experience: stat.prop_req_experience,
                    state_id: state.state_id,
                });
            }
        }

        info!("Collected {} state/year rows", rows.len());
        Ok(rows)
    }
}
