use crate::shared::*;
use bevy::prelude::*;

// ─────────────────────────────────────────────────────────────────────────────
// Events
// ─────────────────────────────────────────────────────────────────────────────

/// Fired when the player taps an inventory item to arm it for placement.
#[derive(Event, Debug, Clone)]
pub struct SelectDecorEvent {
    pub grid: GridKind,
    pub item_id: ItemId,
}

/// Clears any pending selection on the board.
#[derive(Event, Debug, Clone)]
pub struct DeselectDecorEvent {
    pub grid: GridKind,
}

/// Fired when the player taps a board cell with a selection pending.
#[derive(Event, Debug, Clone)]
pub struct PlaceDecorEvent {
    pub grid: GridKind,
    pub position: usize,
}

/// Rotates the item occupying `position` by 90°.
#[derive(Event, Debug, Clone)]
pub struct RotateDecorEvent {
    pub grid: GridKind,
    pub position: usize,
}

/// Removes the item occupying `position` and refunds it to its stock.
#[derive(Event, Debug, Clone)]
pub struct RemoveDecorEvent {
    pub grid: GridKind,
    pub position: usize,
}

// ─────────────────────────────────────────────────────────────────────────────
// Board dispatch
// ─────────────────────────────────────────────────────────────────────────────

/// Resolves a [`GridKind`] to its live board. `None` means the board is in
/// its Empty state (no plan owned yet) and every operation against it is a
/// no-op — the caller decides whether to log.
fn board_mut<'a>(
    grid: GridKind,
    home: &'a mut HomeState,
    garden: &'a mut GardenState,
    cat_board: &'a mut CatBoard,
) -> Option<&'a mut Board> {
    match grid {
        GridKind::Home => home.plan.as_mut().map(|plan| &mut plan.board),
        GridKind::Garden => garden.plan.as_mut().map(|plan| &mut plan.board),
        GridKind::CatOverlay => Some(&mut cat_board.board),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Systems
// ─────────────────────────────────────────────────────────────────────────────

/// Arms a selection on the target board. Denied when no unit of the item
/// is owned; a pending selection is silently replaced.
pub fn handle_select(
    mut events: EventReader<SelectDecorEvent>,
    mut home: ResMut<HomeState>,
    mut garden: ResMut<GardenState>,
    mut cat_board: ResMut<CatBoard>,
    holdings: Res<Holdings>,
    mut toast_writer: EventWriter<ToastEvent>,
) {
    for ev in events.read() {
        if holdings.stock(ev.grid.category()).count(&ev.item_id) == 0 {
            toast_writer.send(ToastEvent {
                message: format!("You do not own any {}!", ev.item_id),
                duration_secs: 3.0,
            });
            continue;
        }

        let Some(board) = board_mut(ev.grid, &mut home, &mut garden, &mut cat_board) else {
            info!("[Decor] Select ignored — no {:?} plan owned", ev.grid);
            continue;
        };

        board.selection = Some(Selection {
            item_id: ev.item_id.clone(),
            rotation: Rotation::Deg0,
        });
        info!("[Decor] Selected '{}' for the {:?} board", ev.item_id, ev.grid);
    }
}

pub fn handle_deselect(
    mut events: EventReader<DeselectDecorEvent>,
    mut home: ResMut<HomeState>,
    mut garden: ResMut<GardenState>,
    mut cat_board: ResMut<CatBoard>,
) {
    for ev in events.read() {
        if let Some(board) = board_mut(ev.grid, &mut home, &mut garden, &mut cat_board) {
            board.selection = None;
        }
    }
}

/// Commits the pending selection onto a cell. Silent no-op without a
/// selection, on an Empty-state board, or onto an occupied cell, so stray
/// taps are harmless. On success one unit moves from stock to board and
/// the selection clears.
pub fn handle_place(
    mut events: EventReader<PlaceDecorEvent>,
    mut home: ResMut<HomeState>,
    mut garden: ResMut<GardenState>,
    mut cat_board: ResMut<CatBoard>,
    mut holdings: ResMut<Holdings>,
) {
    for ev in events.read() {
        let Some(board) = board_mut(ev.grid, &mut home, &mut garden, &mut cat_board) else {
            continue;
        };
        let Some(selection) = board.selection.clone() else {
            continue;
        };
        if ev.position >= board.cell_count() {
            warn!(
                "[Decor] Place ignored — position {} out of bounds for a {}×{} board",
                ev.position, board.size, board.size
            );
            continue;
        }
        if board.is_occupied(ev.position) {
            continue;
        }
        // Stock can't hit zero between select and place in a serialized
        // event loop, but the abort keeps the conservation law unconditional.
        if !holdings
            .stock_mut(ev.grid.category())
            .take_one(&selection.item_id)
        {
            warn!(
                "[Decor] Place aborted — no '{}' left in stock",
                selection.item_id
            );
            continue;
        }

        let id = board.insert(selection.item_id.clone(), ev.position, selection.rotation);
        board.selection = None;
        info!(
            "[Decor] Placed '{}' (#{}) at cell {} on the {:?} board",
            selection.item_id, id, ev.position, ev.grid
        );
    }
}

/// Rotates in place; empty cells and Empty-state boards are silent no-ops.
pub fn handle_rotate(
    mut events: EventReader<RotateDecorEvent>,
    mut home: ResMut<HomeState>,
    mut garden: ResMut<GardenState>,
    mut cat_board: ResMut<CatBoard>,
) {
    for ev in events.read() {
        let Some(board) = board_mut(ev.grid, &mut home, &mut garden, &mut cat_board) else {
            continue;
        };
        if board.rotate_at(ev.position) {
            let item = board.item_at(ev.position);
            info!(
                "[Decor] Rotated cell {} on the {:?} board to {}°",
                ev.position,
                ev.grid,
                item.map_or(0, |i| i.rotation.degrees())
            );
        }
    }
}

/// Removes the item at the cell and refunds one unit to its category
/// stock; empty cells and Empty-state boards are silent no-ops.
pub fn handle_remove(
    mut events: EventReader<RemoveDecorEvent>,
    mut home: ResMut<HomeState>,
    mut garden: ResMut<GardenState>,
    mut cat_board: ResMut<CatBoard>,
    mut holdings: ResMut<Holdings>,
) {
    for ev in events.read() {
        let Some(board) = board_mut(ev.grid, &mut home, &mut garden, &mut cat_board) else {
            continue;
        };
        let Some(removed) = board.remove_at(ev.position) else {
            continue;
        };
        holdings
            .stock_mut(ev.grid.category())
            .add_one(&removed.item_id);
        info!(
            "[Decor] Removed '{}' from cell {} on the {:?} board (refunded)",
            removed.item_id, ev.position, ev.grid
        );
    }
}
