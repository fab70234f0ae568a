//! Cats domain — unlocking cats against the lifetime-earned counter and
//! dressing them from the shared accessory pool.
//!
//! Unlock eligibility is observed, never auto-applied: credits (taps and
//! passive income alike) only grow `lifetime_earned`; a cat appears when
//! the player explicitly asks and the threshold is met.

use bevy::prelude::*;

use crate::shared::*;

// ─────────────────────────────────────────────────────────────────────────────
// Events
// ─────────────────────────────────────────────────────────────────────────────

/// Fired when the player taps the "unlock cat" button.
#[derive(Event, Debug, Clone, Default)]
pub struct UnlockCatEvent;

/// Adds an accessory to a cat's customization list. Requires owning at
/// least one unit of the accessory but does not consume it — only overlay
/// placement moves units out of the pool.
#[derive(Event, Debug, Clone)]
pub struct DressCatEvent {
    pub cat_id: usize,
    pub item_id: ItemId,
}

// ─────────────────────────────────────────────────────────────────────────────
// Systems
// ─────────────────────────────────────────────────────────────────────────────

pub fn handle_unlock_cat(
    mut events: EventReader<UnlockCatEvent>,
    config: Res<GameConfig>,
    wallet: Res<Wallet>,
    mut cats: ResMut<CatCollection>,
    mut toast_writer: EventWriter<ToastEvent>,
) {
    for _ in events.read() {
        if cats.cats.len() >= config.max_cats {
            toast_writer.send(ToastEvent {
                message: "All cats are already unlocked.".to_string(),
                duration_secs: 3.0,
            });
            continue;
        }

        let required = cats.next_unlock_threshold(config.points_per_cat);
        if wallet.lifetime_earned < required {
            toast_writer.send(ToastEvent {
                message: format!(
                    "Not enough points to unlock this cat (need {} lifetime points).",
                    required
                ),
                duration_secs: 3.0,
            });
            continue;
        }

        let id = cats.cats.len();
        cats.cats.push(Cat {
            id,
            accessories: Vec::new(),
        });
        info!(
            "[Cats] Unlocked cat #{} ({} lifetime points earned)",
            id, wallet.lifetime_earned
        );
    }
}

pub fn handle_dress_cat(
    mut events: EventReader<DressCatEvent>,
    holdings: Res<Holdings>,
    mut cats: ResMut<CatCollection>,
    mut toast_writer: EventWriter<ToastEvent>,
) {
    for ev in events.read() {
        if holdings.cat_accessories.count(&ev.item_id) == 0 {
            toast_writer.send(ToastEvent {
                message: format!("You do not own any {}!", ev.item_id),
                duration_secs: 3.0,
            });
            continue;
        }

        let Some(cat) = cats.cats.get_mut(ev.cat_id) else {
            warn!("[Cats] Dress ignored — no cat #{}", ev.cat_id);
            continue;
        };

        cat.accessories.push(ev.item_id.clone());
        info!("[Cats] Cat #{} now wears '{}'", ev.cat_id, ev.item_id);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Plugin
// ─────────────────────────────────────────────────────────────────────────────

pub struct CatsPlugin;

impl Plugin for CatsPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<UnlockCatEvent>().add_event::<DressCatEvent>();

        app.add_systems(
            Update,
            (handle_unlock_cat, handle_dress_cat).run_if(in_state(GameState::Playing)),
        );

        info!("[Cats] CatsPlugin registered.");
    }
}
