use crate::shared::*;
use bevy::prelude::*;

// ─────────────────────────────────────────────────────────────────────────────
// Events
// ─────────────────────────────────────────────────────────────────────────────

/// Fired by the front end for every screen tap on the clicker button.
#[derive(Event, Debug, Clone, Default)]
pub struct TapEvent;

// ─────────────────────────────────────────────────────────────────────────────
// Systems
// ─────────────────────────────────────────────────────────────────────────────

/// Credits the tap reward for every TapEvent. Tap income counts toward
/// `lifetime_earned` and therefore toward cat-unlock eligibility.
pub fn handle_taps(
    mut taps: EventReader<TapEvent>,
    config: Res<GameConfig>,
    mut wallet: ResMut<Wallet>,
    mut stats: ResMut<SessionStats>,
) {
    for _ in taps.read() {
        wallet.credit(config.tap_reward);
        stats.taps += 1;
        info!(
            "[Economy] Tap +{}. New balance: {}",
            config.tap_reward,
            format_points(wallet.balance)
        );
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Format a point amount as a display string (e.g. "1,234").
pub fn format_points(amount: u64) -> String {
    let s = amount.to_string();
    let mut result = String::new();
    let digits: Vec<char> = s.chars().collect();
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*ch);
    }
    result
}
