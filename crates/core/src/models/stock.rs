use serde::{Deserialize, Serialize};

/// Stock level for one product as served by `GET /stock/{id}`.
///
/// Never cached: every mutation that needs a stock check re-fetches,
/// so the gate always runs against the freshest count the API offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockRecord {
    /// Product identifier this record belongs to
    pub id: u64,

    /// Units currently available
    pub amount: u32,
}
