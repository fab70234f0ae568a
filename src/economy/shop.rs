use crate::shared::*;
use bevy::prelude::*;

use super::wallet::format_points;

// ─────────────────────────────────────────────────────────────────────────────
// Events
// ─────────────────────────────────────────────────────────────────────────────

/// Fired by the front end when the player confirms a shop purchase.
/// One event buys exactly one unit.
#[derive(Event, Debug, Clone)]
pub struct PurchaseRequestEvent {
    pub category: Category,
    pub item_id: ItemId,
}

/// Why a purchase was (or wasn't) committed. Keeping the cause lets the
/// front end show a useful message and lets the income scheduler re-arm
/// only on real building purchases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseOutcome {
    Bought,
    UnknownItem,
    InsufficientFunds,
}

/// Emitted once per processed PurchaseRequestEvent.
#[derive(Event, Debug, Clone)]
pub struct PurchaseOutcomeEvent {
    pub category: Category,
    pub item_id: ItemId,
    pub outcome: PurchaseOutcome,
}

// ─────────────────────────────────────────────────────────────────────────────
// Systems
// ─────────────────────────────────────────────────────────────────────────────

/// Processes PurchaseRequestEvents — the one shared purchase flow for all
/// four categories.
///
/// All-or-nothing: the cost is charged as a single debit, and the stock is
/// only incremented after the debit succeeds. Any failure leaves the wallet
/// and every inventory untouched.
pub fn handle_purchase(
    mut requests: EventReader<PurchaseRequestEvent>,
    catalog: Res<Catalog>,
    mut wallet: ResMut<Wallet>,
    mut holdings: ResMut<Holdings>,
    mut stats: ResMut<SessionStats>,
    mut outcome_writer: EventWriter<PurchaseOutcomeEvent>,
    mut toast_writer: EventWriter<ToastEvent>,
) {
    for ev in requests.read() {
        let price = match catalog.price(ev.category, &ev.item_id) {
            Some(price) => price,
            None => {
                warn!(
                    "[Economy] Purchase failed — unknown {:?} item '{}'",
                    ev.category, ev.item_id
                );
                outcome_writer.send(PurchaseOutcomeEvent {
                    category: ev.category,
                    item_id: ev.item_id.clone(),
                    outcome: PurchaseOutcome::UnknownItem,
                });
                continue;
            }
        };

        if !wallet.try_debit(price) {
            info!(
                "[Economy] Cannot afford '{}' (need {}, have {})",
                ev.item_id,
                format_points(price),
                format_points(wallet.balance)
            );
            toast_writer.send(ToastEvent {
                message: format!(
                    "Not enough points! Need {}, have {}.",
                    format_points(price),
                    format_points(wallet.balance)
                ),
                duration_secs: 3.0,
            });
            outcome_writer.send(PurchaseOutcomeEvent {
                category: ev.category,
                item_id: ev.item_id.clone(),
                outcome: PurchaseOutcome::InsufficientFunds,
            });
            continue;
        }

        holdings.stock_mut(ev.category).add_one(&ev.item_id);
        stats.purchases += 1;

        outcome_writer.send(PurchaseOutcomeEvent {
            category: ev.category,
            item_id: ev.item_id.clone(),
            outcome: PurchaseOutcome::Bought,
        });

        info!(
            "[Economy] Bought '{}' for {}. Remaining balance: {}",
            ev.item_id,
            format_points(price),
            format_points(wallet.balance)
        );
    }
}
