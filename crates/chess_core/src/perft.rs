use crate::{board::Board, movegen::moves_into, rules::is_in_check, types::*};

/// Pure perft node count over moves that keep the mover's king safe.
/// Counts all positions from the current one down to `depth`, alternating
/// sides starting with `side`.
pub fn perft(board: &mut Board, side: Color, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    fn inner(board: &mut Board, side: Color, depth: u8, layers: &mut [Vec<Move>]) -> u64 {
        if depth == 0 {
            return 1;
        }

        let Some((buf, rest)) = layers.split_first_mut() else {
            return 0;
        };
        moves_into(board, side, buf);

        let mut nodes = 0u64;
        for mv in buf.iter().copied() {
            let Ok(mut trial) = board.trial(mv) else {
                continue;
            };
            // A side without a king can never be in check.
            if is_in_check(&trial, side).unwrap_or(false) {
                continue;
            }
            nodes += inner(&mut trial, side.other(), depth - 1, rest);
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(64); depth as usize];
    inner(board, side, depth, &mut layers[..])
}
