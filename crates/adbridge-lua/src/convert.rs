//! Event and reward conversion into Lua tables.
//!
//! The table shape is the contract scripts program against:
//!
//! ```text
//! {
//!   event    = "closed",          -- always
//!   success  = true,              -- always
//!   error    = "no fill",         -- only when present
//!   ad_type  = "interstitial",    -- show channels only
//!   rewarded = true,              -- rewarded channel only
//!   amount   = 50.0,              -- rewarded channel, when > 0
//!   currency = "coins",           -- rewarded channel, when present
//! }
//! ```

use adbridge_event::{Event, RewardOutcome};
use adbridge_types::Channel;
use mlua::{Lua, Table};

/// Builds the Lua table a callback receives for `event`.
pub fn event_to_table(lua: &Lua, event: &Event) -> mlua::Result<Table> {
    let table = lua.create_table()?;
    table.set("event", event.name.as_str())?;
    table.set("success", event.success)?;
    if let Some(error) = &event.error {
        table.set("error", error.as_str())?;
    }
    if event.channel.is_showable() {
        table.set("ad_type", event.channel.as_str())?;
    }
    if event.channel == Channel::Rewarded {
        table.set("rewarded", event.rewarded)?;
        if let Some(amount) = event.amount {
            table.set("amount", amount)?;
        }
        if let Some(currency) = &event.currency {
            table.set("currency", currency.as_str())?;
        }
    }
    Ok(table)
}

/// Builds the table `ads.poll_rewarded_result` returns.
pub fn reward_to_table(lua: &Lua, outcome: &RewardOutcome) -> mlua::Result<Table> {
    let table = lua.create_table()?;
    table.set("success", outcome.success)?;
    table.set("amount", outcome.amount)?;
    if let Some(currency) = &outcome.currency {
        table.set("currency", currency.as_str())?;
    }
    Ok(table)
}
