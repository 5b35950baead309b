//! Lua consumer adapter for the event bridge.
//!
//! Binds the bridge runtime to an embedded Lua state: channel
//! callbacks live in Lua's registry, events arrive as plain tables,
//! and scripts drive the whole surface through a global `ads` module.
//!
//! ```text
//! Lua script                     adbridge-lua            adbridge-runtime
//! ───────────                    ────────────            ────────────────
//! ads.show_rewarded(fn) ───────▶ LuaCallback(RegistryKey) ──▶ register
//! ads.update() ────────────────▶ Bridge::update ──▶ drain + dispatch
//!                                LuaHost::invoke ◀── ConsumerAdapter
//! fn{event="reward", ...} ◀───── event_to_table
//! ```
//!
//! # Quick start
//!
//! ```no_run
//! use adbridge_lua::install;
//! use adbridge_runtime::UnsupportedSdk;
//! use mlua::Lua;
//!
//! let lua = Lua::new();
//! let bridge = install(&lua, UnsupportedSdk)?;
//! // hand bridge.producer() to the SDK binding, then per frame:
//! lua.load("ads.update()").exec()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod convert;
pub mod host;
pub mod module;

mod error;

pub use convert::{event_to_table, reward_to_table};
pub use error::AdsLuaError;
pub use host::{LuaCallback, LuaHost};
pub use module::{install, ADS_TABLE_NAME};
