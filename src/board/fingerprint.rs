//! Canonical board fingerprint, used as the score-cache key.
//!
//! Active pieces are sorted by (owner, kind, row, column) before folding,
//! so two boards with the same active piece set fingerprint identically
//! regardless of arena storage order.

use once_cell::sync::Lazy;
use rand::prelude::*;

use super::{Board, PieceKind, Player, Position};

struct FingerprintKeys {
    // piece_keys[owner][kind][square]
    piece_keys: [[[u64; 64]; 6]; 2],
}

impl FingerprintKeys {
    fn new() -> Self {
        // Fixed seed keeps fingerprints stable across runs, which the
        // on-disk cache format relies on.
        let mut rng = StdRng::seed_from_u64(0x5EED_CAB1E_u64);
        let mut piece_keys = [[[0u64; 64]; 6]; 2];
        for owner in &mut piece_keys {
            for kind in owner.iter_mut() {
                for key in kind.iter_mut() {
                    *key = rng.gen();
                }
            }
        }
        FingerprintKeys { piece_keys }
    }
}

static KEYS: Lazy<FingerprintKeys> = Lazy::new(FingerprintKeys::new);

impl Board {
    /// Canonical hash of the active piece set.
    #[must_use]
    pub fn fingerprint(&self) -> u64 {
        let mut active: Vec<(Player, PieceKind, Position)> = self
            .pieces()
            .map(|(_, piece)| (piece.owner(), piece.kind(), piece.position()))
            .collect();
        active.sort_unstable();

        let mut hash = 0u64;
        for (owner, kind, position) in active {
            let key = KEYS.piece_keys[owner.index()][kind.index()][position.square_index()];
            hash = hash.rotate_left(3) ^ key;
        }
        hash
    }
}
