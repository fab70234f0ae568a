//! Decor domain — the placement boards (home, garden, cat overlay) and
//! the home/garden ownership & upgrade flow.
//!
//! All cross-domain communication goes through `crate::shared::*` events
//! and resources. No other domain module is imported here.

use bevy::prelude::*;

use crate::shared::*;

pub mod grid;
pub mod plans;

use grid::{
    handle_deselect, handle_place, handle_remove, handle_rotate, handle_select,
    DeselectDecorEvent, PlaceDecorEvent, RemoveDecorEvent, RotateDecorEvent, SelectDecorEvent,
};
use plans::{
    handle_buy_plan, handle_upgrade_plan, BuyPlanEvent, PlanOutcomeEvent, UpgradePlanEvent,
};

// ─────────────────────────────────────────────────────────────────────────────
// Plugin
// ─────────────────────────────────────────────────────────────────────────────

pub struct DecorPlugin;

impl Plugin for DecorPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<SelectDecorEvent>()
            .add_event::<DeselectDecorEvent>()
            .add_event::<PlaceDecorEvent>()
            .add_event::<RotateDecorEvent>()
            .add_event::<RemoveDecorEvent>()
            .add_event::<BuyPlanEvent>()
            .add_event::<UpgradePlanEvent>()
            .add_event::<PlanOutcomeEvent>();

        app.add_systems(
            Update,
            (
                // Plan ownership first, so a buy-then-place sequence sent in
                // the same frame lands on a live board.
                handle_buy_plan,
                handle_upgrade_plan,
                handle_select,
                handle_deselect,
                handle_place,
                handle_rotate,
                handle_remove,
            )
                .chain()
                .run_if(in_state(GameState::Playing)),
        );

        info!("[Decor] DecorPlugin registered.");
    }
}
