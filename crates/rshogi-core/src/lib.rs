//! rshogi-core: 将棋のルール部分（合法手生成・王手/詰み判定・駒打ちルール）
//!
//! 盤面表現は `Option<Piece>` を敷き詰めた 9x9 配列で、ビットボードや評価関数は
//! 持たない。「今まさに指せる手は何か」「この手は合法か」「詰みか」に答える
//! ことだけに範囲を絞っている。対局相手側の着手選択は一様ランダムで、
//! 探索や評価は行わない（[`opponent`]）。

pub mod board;
pub mod check;
pub mod drop_rules;
pub mod movegen;
pub mod opponent;
pub mod promotion;
pub mod types;
pub mod validate;

pub use board::{Board, BOARD_SIZE};
pub use check::{is_in_check, is_in_checkmate};
pub use drop_rules::possible_drops_of;
pub use movegen::{motions_from, Movement};
pub use opponent::{choose_move, spawn_opponent_worker, PendingMove};
pub use promotion::{able_to_promote, must_promote_at_rank, AbleToPromote};
pub use types::{BoardPos, FileSet, Hand, Move, Motion, Piece, PieceSort, Player};
pub use validate::{is_valid, moves_basic_for, moves_drop_for, moves_for, Valid};
