//! Headless smoke driver for the Purrville engine.
//!
//! There is no rendering layer in this crate: the binary boots the engine
//! on MinimalPlugins, plays a short scripted session (taps, a building
//! purchase, a home with furniture), and exits. Useful for eyeballing the
//! engine's log output without wiring up a front end.

mod cats;
mod data;
mod decor;
mod economy;
mod shared;

use std::time::Duration;

use bevy::app::ScheduleRunnerPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use cats::UnlockCatEvent;
use decor::grid::{PlaceDecorEvent, RotateDecorEvent, SelectDecorEvent};
use decor::plans::BuyPlanEvent;
use economy::shop::PurchaseRequestEvent;
use economy::wallet::{format_points, TapEvent};
use shared::*;

fn main() {
    App::new()
        .add_plugins(
            MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_millis(50))),
        )
        .add_plugins(StatesPlugin)
        .add_plugins(LogPlugin::default())
        // Game state
        .init_state::<GameState>()
        // Shared resources
        .init_resource::<GameConfig>()
        .init_resource::<Catalog>()
        .init_resource::<Wallet>()
        .init_resource::<Holdings>()
        .init_resource::<HomeState>()
        .init_resource::<GardenState>()
        .init_resource::<CatBoard>()
        .init_resource::<CatCollection>()
        .init_resource::<SessionStats>()
        // Shared events
        .add_event::<ToastEvent>()
        // Domain plugins
        .add_plugins(data::DataPlugin)
        .add_plugins(economy::EconomyPlugin)
        .add_plugins(decor::DecorPlugin)
        .add_plugins(cats::CatsPlugin)
        // Scripted session
        .add_systems(Update, run_demo_script.run_if(in_state(GameState::Playing)))
        .run();
}

/// One scripted action per frame, then a summary and exit. The passive
/// income from the tanbark bought early in the script keeps trickling in
/// while the rest of the script runs.
fn run_demo_script(
    mut step: Local<u32>,
    mut taps: EventWriter<TapEvent>,
    mut purchases: EventWriter<PurchaseRequestEvent>,
    mut plan_buys: EventWriter<BuyPlanEvent>,
    mut selects: EventWriter<SelectDecorEvent>,
    mut places: EventWriter<PlaceDecorEvent>,
    mut rotates: EventWriter<RotateDecorEvent>,
    mut unlocks: EventWriter<UnlockCatEvent>,
    wallet: Res<Wallet>,
    home: Res<HomeState>,
    cats: Res<CatCollection>,
    mut exit: EventWriter<AppExit>,
) {
    match *step {
        0 => {
            for _ in 0..5 {
                taps.send(TapEvent);
            }
        }
        1 => {
            purchases.send(PurchaseRequestEvent {
                category: Category::Buildings,
                item_id: "tanbark".into(),
            });
        }
        2 => {
            plan_buys.send(BuyPlanEvent {
                kind: PlanKind::Home,
                plan_id: "shack".into(),
            });
            purchases.send(PurchaseRequestEvent {
                category: Category::Furniture,
                item_id: "chair".into(),
            });
        }
        3 => {
            selects.send(SelectDecorEvent {
                grid: GridKind::Home,
                item_id: "chair".into(),
            });
        }
        4 => {
            places.send(PlaceDecorEvent {
                grid: GridKind::Home,
                position: 4,
            });
        }
        5 => {
            rotates.send(RotateDecorEvent {
                grid: GridKind::Home,
                position: 4,
            });
            unlocks.send(UnlockCatEvent);
        }
        // Let the income timer fire a few times before wrapping up.
        6..=59 => {}
        _ => {
            let placed = home.plan.as_ref().map_or(0, |plan| plan.board.items.len());
            info!(
                "Demo session over: balance {}, lifetime {}, {} item(s) placed at home, {} cat(s)",
                format_points(wallet.balance),
                format_points(wallet.lifetime_earned),
                placed,
                cats.cats.len()
            );
            exit.send(AppExit::Success);
        }
    }
    *step += 1;
}
