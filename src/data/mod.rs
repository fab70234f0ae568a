//! Data layer — populates the catalog at session start.
//!
//! This plugin runs in OnEnter(GameState::Loading), fills the [`Catalog`]
//! from the hard-coded game-design tables in `catalog.rs`, seeds the wallet
//! with the configured starting balance, then transitions the session into
//! GameState::Playing.
//!
//! No other domain seeds these resources. All domain plugins can safely
//! read the catalog once GameState has advanced past Loading.

mod catalog;

use crate::shared::*;
use bevy::prelude::*;

pub struct DataPlugin;

impl Plugin for DataPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Loading), load_all_data);
    }
}

/// Single system that populates the catalog, seeds the wallet, and then
/// transitions to Playing.
fn load_all_data(
    mut catalog_res: ResMut<Catalog>,
    config: Res<GameConfig>,
    mut wallet: ResMut<Wallet>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    info!("DataPlugin: populating catalog…");

    catalog::populate_catalog(&mut catalog_res);
    info!(
        "  Catalog loaded: {} buildings, {} furniture, {} gardening, {} accessories, {} homes, {} gardens",
        catalog_res.buildings.len(),
        catalog_res.furniture.len(),
        catalog_res.gardening.len(),
        catalog_res.cat_accessories.len(),
        catalog_res.homes.len(),
        catalog_res.gardens.len(),
    );

    // The starting balance is a grant, not income: it does not count toward
    // lifetime_earned, so cat unlocks still start from zero.
    wallet.balance = config.starting_balance;
    info!("  Wallet seeded with {} points", wallet.balance);

    next_state.set(GameState::Playing);
    info!("DataPlugin: done. Entering Playing state.");
}
