//! Print-price configuration: the per-mode pricing table.

use serde::Serialize;

use crate::config;
use crate::connection::Connection;
use crate::error::Result;
use crate::models::PrintPrice;

// ---------------------------------------------------------------------------
// PriceQuery
// ---------------------------------------------------------------------------

/// Query interface for the per-mode price list.
pub struct PriceQuery<'a> {
    conn: &'a Connection,
}

#[derive(Serialize)]
struct UpdateBody<'a> {
    prices: &'a [PrintPrice],
}

impl<'a> PriceQuery<'a> {
    /// Create a new `PriceQuery` bound to the given connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// All configured price entries, active and inactive.
    pub fn list(&self) -> Result<Vec<PrintPrice>> {
        self.conn.get_list(config::PRINT_PRICES, &[])
    }

    /// Only the entries currently in effect.
    pub fn active(&self) -> Result<Vec<PrintPrice>> {
        let prices = self.list()?;
        Ok(prices.into_iter().filter(|p| p.is_active).collect())
    }

    /// Active entries, degrading every fetch failure to an empty list.
    ///
    /// This is the variant the statistics path uses: an unreachable price
    /// endpoint means every job is costed at 0, never an error.
    pub fn active_or_empty(&self) -> Vec<PrintPrice> {
        let prices: Vec<PrintPrice> = self.conn.get_list_or_empty(config::PRINT_PRICES, &[]);
        prices.into_iter().filter(|p| p.is_active).collect()
    }

    /// Replace the price table and return the rows as the backend stored them.
    pub fn update(&self, prices: &[PrintPrice]) -> Result<Vec<PrintPrice>> {
        self.conn
            .post_json(config::PRINT_PRICES_UPDATE, &UpdateBody { prices })
    }

    /// Remove the price entry for one mode.
    pub fn remove(&self, mode: &str) -> Result<()> {
        self.conn
            .delete(config::PRINT_PRICES, &[("mode", mode.to_string())])
    }
}
