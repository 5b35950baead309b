//! The Lua-backed consumer adapter.

use crate::convert::event_to_table;
use adbridge_event::Event;
use adbridge_runtime::{ConsumerAdapter, DeliveryOutcome};
use mlua::{Function, Lua, RegistryKey};
use tracing::{debug, warn};

/// A channel callback held in Lua's registry.
///
/// Created when a script passes a function to a trigger call and
/// destroyed exactly once through [`LuaHost::release`].
#[derive(Debug)]
pub struct LuaCallback {
    key: RegistryKey,
}

impl LuaCallback {
    /// Stores `func` in the registry of `lua`.
    ///
    /// # Errors
    ///
    /// Returns the Lua error if the registry rejects the value.
    pub fn new(lua: &Lua, func: Function) -> mlua::Result<Self> {
        let key = lua.create_registry_value(func)?;
        Ok(Self { key })
    }
}

/// [`ConsumerAdapter`] over a Lua state.
///
/// Resolves handles back into functions at delivery time, so a state
/// that has dropped the value (teardown, script reload) surfaces as a
/// [`DeliveryOutcome::SetupFailure`] rather than a stale call. A
/// callback that raises is [`DeliveryOutcome::ExecutionError`]; the
/// event still counts as delivered.
#[derive(Debug, Clone)]
pub struct LuaHost {
    lua: Lua,
}

impl LuaHost {
    /// Creates a host over a cloned handle to `lua`.
    #[must_use]
    pub fn new(lua: &Lua) -> Self {
        Self { lua: lua.clone() }
    }
}

impl ConsumerAdapter for LuaHost {
    type Handle = LuaCallback;

    fn invoke(&self, handle: &LuaCallback, event: &Event) -> DeliveryOutcome {
        let Ok(func) = self.lua.registry_value::<Function>(&handle.key) else {
            debug!("callback for {} not resolvable this frame", event.channel);
            return DeliveryOutcome::SetupFailure;
        };
        let Ok(table) = event_to_table(&self.lua, event) else {
            return DeliveryOutcome::SetupFailure;
        };
        match func.call::<()>(table) {
            Ok(()) => DeliveryOutcome::Delivered,
            Err(err) => DeliveryOutcome::ExecutionError(err.to_string()),
        }
    }

    fn release(&self, handle: LuaCallback) {
        if let Err(err) = self.lua.remove_registry_value(handle.key) {
            warn!("failed to drop callback registry value: {err}");
        }
    }
}
