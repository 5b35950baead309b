//! The `ads` Lua module.
//!
//! # Script API
//!
//! ```lua
//! ads.init({ app_key = "...", testing = true, log_level = "debug" },
//!     function(ev) print(ev.event) end)
//!
//! ads.show_interstitial(function(ev) ... end)
//! ads.show_rewarded(function(ev) ... end)
//!
//! if ads.is_rewarded_available() then ... end
//!
//! local reward = ads.poll_rewarded_result()  -- table or nil
//!
//! ads.update()     -- once per frame
//! ads.shutdown()
//! ```
//!
//! Every trigger takes the callback for its channel; registering again
//! replaces the previous callback. Events reach callbacks only from
//! inside `ads.update()`, so a callback may itself call back into the
//! module (for example to show the next ad from its `closed` event).

use crate::convert::reward_to_table;
use crate::error::AdsLuaError;
use crate::host::{LuaCallback, LuaHost};
use adbridge_runtime::{Bridge, InitParams, SdkBinding};
use adbridge_types::Channel;
use mlua::{Function, Lua, Table, Value};
use std::rc::Rc;
use tracing::info;

/// Name of the global table the module installs.
pub const ADS_TABLE_NAME: &str = "ads";

/// Builds a bridge over `sdk` and installs the `ads` table into `lua`.
///
/// The returned bridge is the same instance the Lua functions drive;
/// embedders use it to hand a [`ProducerHandle`](adbridge_runtime::ProducerHandle)
/// to the SDK binding and, if they prefer, to call `update` from Rust
/// instead of from the script.
///
/// # Errors
///
/// [`AdsLuaError::Runtime`] if the Lua state rejects the table or any
/// of the functions.
pub fn install<S>(lua: &Lua, sdk: S) -> Result<Rc<Bridge<LuaHost, S>>, AdsLuaError>
where
    S: SdkBinding + 'static,
{
    let bridge = Rc::new(Bridge::new(LuaHost::new(lua), sdk));
    let ads = lua.create_table()?;

    let b = Rc::clone(&bridge);
    ads.set(
        "init",
        lua.create_function(move |lua, (params, func): (Table, Option<Function>)| {
            let func = require_callback(func, "init")?;
            let params = parse_init_params(&params)?;
            let handle = LuaCallback::new(lua, func)?;
            b.init(params, handle).map_err(mlua::Error::external)
        })?,
    )?;

    let b = Rc::clone(&bridge);
    ads.set(
        "show_interstitial",
        lua.create_function(move |lua, func: Option<Function>| {
            let func = require_callback(func, "show_interstitial")?;
            let handle = LuaCallback::new(lua, func)?;
            b.show(Channel::Interstitial, handle)
                .map_err(mlua::Error::external)
        })?,
    )?;

    let b = Rc::clone(&bridge);
    ads.set(
        "show_rewarded",
        lua.create_function(move |lua, func: Option<Function>| {
            let func = require_callback(func, "show_rewarded")?;
            let handle = LuaCallback::new(lua, func)?;
            b.show(Channel::Rewarded, handle)
                .map_err(mlua::Error::external)
        })?,
    )?;

    let b = Rc::clone(&bridge);
    ads.set(
        "is_interstitial_available",
        lua.create_function(move |_, ()| Ok(b.is_available(Channel::Interstitial)))?,
    )?;

    let b = Rc::clone(&bridge);
    ads.set(
        "is_rewarded_available",
        lua.create_function(move |_, ()| Ok(b.is_available(Channel::Rewarded)))?,
    )?;

    let b = Rc::clone(&bridge);
    ads.set(
        "poll_rewarded_result",
        lua.create_function(move |lua, ()| match b.poll_rewarded_result() {
            Some(outcome) => Ok(Value::Table(reward_to_table(lua, &outcome)?)),
            None => Ok(Value::Nil),
        })?,
    )?;

    let b = Rc::clone(&bridge);
    ads.set(
        "update",
        lua.create_function(move |_, ()| {
            b.update();
            Ok(())
        })?,
    )?;

    let b = Rc::clone(&bridge);
    ads.set(
        "shutdown",
        lua.create_function(move |_, ()| {
            b.shutdown();
            Ok(())
        })?,
    )?;

    lua.globals().set(ADS_TABLE_NAME, ads)?;
    info!("ads module installed");
    Ok(bridge)
}

fn require_callback(func: Option<Function>, trigger: &str) -> mlua::Result<Function> {
    func.ok_or_else(|| mlua::Error::external(AdsLuaError::MissingCallback(trigger.to_string())))
}

fn parse_init_params(table: &Table) -> mlua::Result<InitParams> {
    let app_key: String = table
        .get::<Option<String>>("app_key")?
        .ok_or_else(|| mlua::Error::external(AdsLuaError::BadParams("app_key".to_string())))?;
    let mut params = InitParams::new(app_key);
    if let Some(testing) = table.get::<Option<bool>>("testing")? {
        params = params.with_testing(testing);
    }
    if let Some(log_level) = table.get::<Option<String>>("log_level")? {
        params = params.with_log_level(log_level);
    }
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use adbridge_runtime::UnsupportedSdk;

    #[test]
    fn install_exposes_the_full_surface() {
        let lua = Lua::new();
        install(&lua, UnsupportedSdk).unwrap();

        let ads: Table = lua.globals().get(ADS_TABLE_NAME).unwrap();
        for name in [
            "init",
            "show_interstitial",
            "show_rewarded",
            "is_interstitial_available",
            "is_rewarded_available",
            "poll_rewarded_result",
            "update",
            "shutdown",
        ] {
            assert!(ads.get::<Function>(name).is_ok(), "missing ads.{name}");
        }
    }

    #[test]
    fn init_without_callback_raises() {
        let lua = Lua::new();
        install(&lua, UnsupportedSdk).unwrap();

        let err = lua
            .load(r#"ads.init({ app_key = "key" })"#)
            .exec()
            .unwrap_err();
        assert!(err.to_string().contains("missing callback"));
    }

    #[test]
    fn init_without_app_key_raises() {
        let lua = Lua::new();
        install(&lua, UnsupportedSdk).unwrap();

        let err = lua
            .load("ads.init({}, function() end)")
            .exec()
            .unwrap_err();
        assert!(err.to_string().contains("bad params"));
    }

    #[test]
    fn show_on_a_shut_down_bridge_raises() {
        let lua = Lua::new();
        install(&lua, UnsupportedSdk).unwrap();

        lua.load("ads.shutdown()").exec().unwrap();
        let err = lua
            .load("ads.show_rewarded(function() end)")
            .exec()
            .unwrap_err();
        assert!(err.to_string().contains("shut down"));
    }
}
