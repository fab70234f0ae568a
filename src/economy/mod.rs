//! Economy domain — the wallet, the shop purchase flow, and the passive
//! income scheduler.
//!
//! All cross-domain communication goes through `crate::shared::*` events
//! and resources. No other domain module is imported here.

use bevy::prelude::*;

use crate::shared::*;

pub mod income;
pub mod shop;
pub mod wallet;

use income::{arm_income_timer, rearm_income_timer, tick_passive_income, IncomeTimer};
use shop::{handle_purchase, PurchaseOutcomeEvent, PurchaseRequestEvent};
use wallet::{handle_taps, TapEvent};

// ─────────────────────────────────────────────────────────────────────────────
// Plugin
// ─────────────────────────────────────────────────────────────────────────────

pub struct EconomyPlugin;

impl Plugin for EconomyPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<IncomeTimer>();

        app.add_event::<TapEvent>()
            .add_event::<PurchaseRequestEvent>()
            .add_event::<PurchaseOutcomeEvent>();

        app.add_systems(OnEnter(GameState::Playing), arm_income_timer);

        app.add_systems(
            Update,
            (
                // Tap credits land before purchases so a tap-then-buy in the
                // same frame sees the fresh balance.
                handle_taps,
                handle_purchase,
                // A building bought this frame restarts the income cycle…
                rearm_income_timer,
                // …and the tick itself runs last.
                tick_passive_income,
            )
                .chain()
                .run_if(in_state(GameState::Playing)),
        );

        info!("[Economy] EconomyPlugin registered.");
    }
}
