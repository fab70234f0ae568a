use crate::shared::*;
use bevy::prelude::*;

// ─────────────────────────────────────────────────────────────────────────────
// Events
// ─────────────────────────────────────────────────────────────────────────────

/// First purchase of a home or garden plan. Only valid while no plan of
/// that kind is owned.
#[derive(Event, Debug, Clone)]
pub struct BuyPlanEvent {
    pub kind: PlanKind,
    pub plan_id: ItemId,
}

/// Replaces the owned plan with a strictly more expensive one. All placed
/// items are refunded to inventory and the new board starts empty.
#[derive(Event, Debug, Clone)]
pub struct UpgradePlanEvent {
    pub kind: PlanKind,
    pub plan_id: ItemId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanOutcome {
    Bought,
    Upgraded,
    UnknownPlan,
    AlreadyOwned,
    NoPlanOwned,
    NotAnUpgrade,
    InsufficientFunds,
}

/// Emitted once per processed buy/upgrade request.
#[derive(Event, Debug, Clone)]
pub struct PlanOutcomeEvent {
    pub kind: PlanKind,
    pub plan_id: ItemId,
    pub outcome: PlanOutcome,
}

// ─────────────────────────────────────────────────────────────────────────────
// Systems
// ─────────────────────────────────────────────────────────────────────────────

/// Processes BuyPlanEvents. The grid size is copied out of the catalog at
/// purchase time and frozen on the plan.
pub fn handle_buy_plan(
    mut events: EventReader<BuyPlanEvent>,
    catalog: Res<Catalog>,
    mut wallet: ResMut<Wallet>,
    mut home: ResMut<HomeState>,
    mut garden: ResMut<GardenState>,
    mut outcome_writer: EventWriter<PlanOutcomeEvent>,
    mut toast_writer: EventWriter<ToastEvent>,
) {
    for ev in events.read() {
        let slot = match ev.kind {
            PlanKind::Home => &mut home.plan,
            PlanKind::Garden => &mut garden.plan,
        };

        let Some(def) = catalog.plans(ev.kind).get(&ev.plan_id) else {
            warn!("[Decor] Buy failed — unknown {:?} plan '{}'", ev.kind, ev.plan_id);
            outcome_writer.send(PlanOutcomeEvent {
                kind: ev.kind,
                plan_id: ev.plan_id.clone(),
                outcome: PlanOutcome::UnknownPlan,
            });
            continue;
        };

        // Buying over an owned plan would silently discard its placed
        // items; the only way forward from Owned is an upgrade.
        if slot.is_some() {
            toast_writer.send(ToastEvent {
                message: format!("You already own a {:?} — upgrade it instead.", ev.kind),
                duration_secs: 3.0,
            });
            outcome_writer.send(PlanOutcomeEvent {
                kind: ev.kind,
                plan_id: ev.plan_id.clone(),
                outcome: PlanOutcome::AlreadyOwned,
            });
            continue;
        }

        if !wallet.try_debit(def.cost) {
            toast_writer.send(ToastEvent {
                message: format!("Not enough points for the {}.", def.name),
                duration_secs: 3.0,
            });
            outcome_writer.send(PlanOutcomeEvent {
                kind: ev.kind,
                plan_id: ev.plan_id.clone(),
                outcome: PlanOutcome::InsufficientFunds,
            });
            continue;
        }

        *slot = Some(Plan::new(ev.plan_id.clone(), def.grid_size));
        outcome_writer.send(PlanOutcomeEvent {
            kind: ev.kind,
            plan_id: ev.plan_id.clone(),
            outcome: PlanOutcome::Bought,
        });
        info!(
            "[Decor] Bought {:?} plan '{}' ({}×{} board)",
            ev.kind, ev.plan_id, def.grid_size, def.grid_size
        );
    }
}

/// Processes UpgradePlanEvents.
///
/// The full new cost is charged (no delta pricing), the target must be
/// strictly more expensive than the current plan, and every placed item is
/// refunded one-for-one before the board is swapped — so a smaller target
/// grid can never strand an item.
pub fn handle_upgrade_plan(
    mut events: EventReader<UpgradePlanEvent>,
    catalog: Res<Catalog>,
    mut wallet: ResMut<Wallet>,
    mut home: ResMut<HomeState>,
    mut garden: ResMut<GardenState>,
    mut holdings: ResMut<Holdings>,
    mut outcome_writer: EventWriter<PlanOutcomeEvent>,
    mut toast_writer: EventWriter<ToastEvent>,
) {
    for ev in events.read() {
        let (slot, refund_category) = match ev.kind {
            PlanKind::Home => (&mut home.plan, Category::Furniture),
            PlanKind::Garden => (&mut garden.plan, Category::Gardening),
        };

        let Some(new_def) = catalog.plans(ev.kind).get(&ev.plan_id) else {
            warn!(
                "[Decor] Upgrade failed — unknown {:?} plan '{}'",
                ev.kind, ev.plan_id
            );
            outcome_writer.send(PlanOutcomeEvent {
                kind: ev.kind,
                plan_id: ev.plan_id.clone(),
                outcome: PlanOutcome::UnknownPlan,
            });
            continue;
        };

        let Some(current) = slot.as_mut() else {
            toast_writer.send(ToastEvent {
                message: format!("You haven't purchased a {:?} yet.", ev.kind),
                duration_secs: 3.0,
            });
            outcome_writer.send(PlanOutcomeEvent {
                kind: ev.kind,
                plan_id: ev.plan_id.clone(),
                outcome: PlanOutcome::NoPlanOwned,
            });
            continue;
        };

        // The owned plan's id always resolves: plans only enter the slot
        // through the catalog. Cost 0 as a fallback keeps this total.
        let current_cost = catalog
            .plans(ev.kind)
            .get(&current.plan_id)
            .map_or(0, |def| def.cost);

        if new_def.cost <= current_cost {
            toast_writer.send(ToastEvent {
                message: format!("The {} is not an upgrade.", new_def.name),
                duration_secs: 3.0,
            });
            outcome_writer.send(PlanOutcomeEvent {
                kind: ev.kind,
                plan_id: ev.plan_id.clone(),
                outcome: PlanOutcome::NotAnUpgrade,
            });
            continue;
        }

        if !wallet.try_debit(new_def.cost) {
            toast_writer.send(ToastEvent {
                message: format!("Not enough points for the {}.", new_def.name),
                duration_secs: 3.0,
            });
            outcome_writer.send(PlanOutcomeEvent {
                kind: ev.kind,
                plan_id: ev.plan_id.clone(),
                outcome: PlanOutcome::InsufficientFunds,
            });
            continue;
        }

        // Refund every placed item, then swap in the fresh plan.
        let refunded = current.board.drain_items();
        let stock = holdings.stock_mut(refund_category);
        for item in &refunded {
            stock.add_one(&item.item_id);
        }
        let old_id = current.plan_id.clone();
        *slot = Some(Plan::new(ev.plan_id.clone(), new_def.grid_size));

        outcome_writer.send(PlanOutcomeEvent {
            kind: ev.kind,
            plan_id: ev.plan_id.clone(),
            outcome: PlanOutcome::Upgraded,
        });
        info!(
            "[Decor] Upgraded {:?} '{}' → '{}' ({}×{} board, {} items refunded)",
            ev.kind,
            old_id,
            ev.plan_id,
            new_def.grid_size,
            new_def.grid_size,
            refunded.len()
        );
    }
}
