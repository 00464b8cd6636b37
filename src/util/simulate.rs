//! Timer glue for [`SimulatedAction`] signals.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages hold a `RwSignal<SimulatedAction>` and call [`trigger`] from click
//! handlers. The resolution runs on the browser timer queue; outside the
//! `csr` build nothing is scheduled and the action stays pending.

use leptos::prelude::{RwSignal, Update};

use crate::state::simulation::{SimulatedAction, SimulationTicket};

/// Start the action and schedule its resolution.
///
/// Returns `false` when the action was already pending and nothing new was
/// scheduled.
pub fn trigger(action: RwSignal<SimulatedAction>) -> bool {
    let mut ticket = None;
    action.update(|a| ticket = a.start());
    let Some(ticket) = ticket else {
        return false;
    };
    schedule(action, ticket);
    true
}

/// Resolve `action` with `ticket` once the ticket's delay has elapsed.
pub fn schedule(action: RwSignal<SimulatedAction>, ticket: SimulationTicket) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(ticket.delay()).await;
        // The page may have unmounted while the timer ran.
        let _ = action.try_update(|a| a.resolve(ticket));
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (action, ticket);
    }
}
