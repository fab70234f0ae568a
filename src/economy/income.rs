use crate::shared::*;
use bevy::prelude::*;

use super::shop::{PurchaseOutcome, PurchaseOutcomeEvent};
use super::wallet::format_points;

// ─────────────────────────────────────────────────────────────────────────────
// Resources
// ─────────────────────────────────────────────────────────────────────────────

/// The passive-income cadence. One aggregated credit per completed cycle.
#[derive(Resource, Debug)]
pub struct IncomeTimer(pub Timer);

impl Default for IncomeTimer {
    fn default() -> Self {
        Self(Timer::from_seconds(1.0, TimerMode::Repeating))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Systems
// ─────────────────────────────────────────────────────────────────────────────

/// Rebuilds the timer from config once loading finishes.
pub fn arm_income_timer(config: Res<GameConfig>, mut timer: ResMut<IncomeTimer>) {
    timer.0 = Timer::from_seconds(config.income_interval_secs, TimerMode::Repeating);
}

/// Restarts the income cycle whenever the set of owned buildings changes,
/// so a fresh purchase always pays out a full interval later.
pub fn rearm_income_timer(
    mut outcomes: EventReader<PurchaseOutcomeEvent>,
    mut timer: ResMut<IncomeTimer>,
) {
    for ev in outcomes.read() {
        if ev.category == Category::Buildings && ev.outcome == PurchaseOutcome::Bought {
            timer.0.reset();
        }
    }
}

/// Ticks the income timer and credits the aggregated building income once
/// per completed cycle. Idles (doesn't even advance the timer) while no
/// building is owned.
pub fn tick_passive_income(
    time: Res<Time>,
    mut timer: ResMut<IncomeTimer>,
    holdings: Res<Holdings>,
    catalog: Res<Catalog>,
    mut wallet: ResMut<Wallet>,
    mut stats: ResMut<SessionStats>,
) {
    if holdings.buildings.is_empty() {
        return;
    }

    if !timer.0.tick(time.delta()).just_finished() {
        return;
    }

    let income = building_income(&holdings.buildings, &catalog);
    if income == 0 {
        return;
    }

    // A single aggregated credit per tick, not one credit per building.
    // Passive income counts toward lifetime_earned like every other credit.
    wallet.credit(income);
    stats.income_ticks += 1;
    info!(
        "[Economy] Passive income +{}. New balance: {}",
        format_points(income),
        format_points(wallet.balance)
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Sum of `count * income` over every owned building type. Building ids
/// missing from the catalog contribute nothing.
pub fn building_income(buildings: &Stock, catalog: &Catalog) -> u64 {
    buildings
        .iter()
        .map(|(id, count)| {
            catalog
                .buildings
                .get(id)
                .map_or(0, |def| def.income * count as u64)
        })
        .sum()
}
