//! Seating policy: which role does the next joiner get?

use parlor_protocol::Role;

/// Picks the role for a new joiner from the roles currently present.
///
/// First vacant competitive seat wins: no X in the room → `PlayerX`, else
/// no O → `PlayerO`, else `Spectator`. Pure and deterministic; rooms call
/// it against *live* membership on every join, so a seat vacated mid-game
/// is handed to the next joiner rather than held for its old occupant.
pub fn assign_role(current: impl IntoIterator<Item = Role>) -> Role {
    let (mut has_x, mut has_o) = (false, false);
    for role in current {
        match role {
            Role::PlayerX => has_x = true,
            Role::PlayerO => has_o = true,
            Role::Spectator => {}
        }
    }

    if !has_x {
        Role::PlayerX
    } else if !has_o {
        Role::PlayerO
    } else {
        Role::Spectator
    }
}
