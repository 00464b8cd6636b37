//! Fixed-delay stand-ins for network calls (OTP checks, QR scans, invites).
//!
//! DESIGN
//! ======
//! `start()` hands out a ticket for exactly one scheduled resolution. While
//! an action is pending, further `start()` calls are ignored, so a
//! double-clicked "Verify" never schedules a second timer. A ticket from
//! before a `reset()` is stale and resolves nothing.

#[cfg(test)]
#[path = "simulation_test.rs"]
mod simulation_test;

use std::time::Duration;

/// Lifecycle of a simulated action.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SimulationStatus {
    #[default]
    Idle,
    Pending,
    Resolved,
}

/// Handle for the single resolution scheduled by [`SimulatedAction::start`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimulationTicket {
    generation: u64,
    delay: Duration,
}

impl SimulationTicket {
    /// How long the scheduler should wait before resolving.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

/// One simulated asynchronous action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulatedAction {
    label: &'static str,
    status: SimulationStatus,
    delay: Duration,
    generation: u64,
}

impl SimulatedAction {
    pub fn new(label: &'static str, delay: Duration) -> Self {
        Self { label, status: SimulationStatus::Idle, delay, generation: 0 }
    }

    pub fn status(&self) -> SimulationStatus {
        self.status
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn is_pending(&self) -> bool {
        self.status == SimulationStatus::Pending
    }

    pub fn is_resolved(&self) -> bool {
        self.status == SimulationStatus::Resolved
    }

    /// Begin the action. Returns `None` while already pending.
    pub fn start(&mut self) -> Option<SimulationTicket> {
        if self.is_pending() {
            log::debug!("simulated {}: ignored re-trigger while pending", self.label);
            return None;
        }
        self.generation += 1;
        self.status = SimulationStatus::Pending;
        log::debug!("simulated {}: pending for {:?}", self.label, self.delay);
        Some(SimulationTicket { generation: self.generation, delay: self.delay })
    }

    /// Apply the scheduled resolution. Stale tickets are ignored.
    pub fn resolve(&mut self, ticket: SimulationTicket) -> bool {
        if !self.is_pending() || ticket.generation != self.generation {
            return false;
        }
        self.status = SimulationStatus::Resolved;
        log::debug!("simulated {}: resolved", self.label);
        true
    }

    /// Return to idle and invalidate any outstanding ticket.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.status = SimulationStatus::Idle;
    }
}
