//! 対局相手アダプタ: 合法手から一様ランダムに1手選ぶ薄いラッパー
//!
//! ルール部分は完全に同期的だが、対局相手の「一手」は応答を遅らせるために
//! 専用のワーカースレッドで計算する。盤面はワーカーに値渡しでスナップショット
//! されるので、計算中メインスレッドと共有する状態は手を置く1つのスロットだけでよい。

use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use rand::Rng;

use crate::board::Board;
use crate::promotion::AbleToPromote;
use crate::types::{Move, Player};
use crate::validate::moves_for;

/// ワーカーが着手を公開し、メインスレッドが毎フレーム覗きに来る共有スロット。
/// 書き手(ワーカー)1つ・読み手(メインスレッド)1つで、読み手は「まだ無い」を
/// 許容するので、チャネルより単純なミューテックス付きセルの方が適している。
#[derive(Debug, Default)]
pub struct PendingMove(Mutex<Option<Move>>);

impl PendingMove {
    pub fn new() -> Self {
        PendingMove(Mutex::new(None))
    }

    pub fn set(&self, mv: Move) {
        *self.0.lock().unwrap() = Some(mv);
    }

    pub fn get(&self) -> Option<Move> {
        *self.0.lock().unwrap()
    }

    /// 現在値を返し、スロットを空にする
    pub fn take(&self) -> Option<Move> {
        self.0.lock().unwrap().take()
    }
}

/// `player` にとって指せる手の総数から一様乱数で1手選ぶ。
/// `can_promote` な移動は「成り」「不成」の2通りとして数える。
///
/// 総数に対する一様な添字選択が、そのまま成り/不成の公平なコイントスを
/// 兼ねる点に注意: `can_promote` な movement は添字を2つ消費するので、
/// そのどちらに当たったかが既に五分の乱数になっている。
pub fn choose_move(player: Player, board: &Board, rng: &mut impl Rng) -> Option<Move> {
    let valid = moves_for(player, board, true);
    let total = valid.total_move_count();
    if total == 0 {
        return None;
    }
    let mut index = rng.random_range(0..total);

    for (&from, movements) in &valid.basics {
        for m in movements {
            let weight = if m.promotion == AbleToPromote::CanPromote {
                2
            } else {
                1
            };
            if index < weight {
                let promoted = match m.promotion {
                    AbleToPromote::MustPromote => true,
                    AbleToPromote::CannotPromote => false,
                    AbleToPromote::CanPromote => index == 1,
                };
                return Some(Move::basic(from, m.motion, promoted));
            }
            index -= weight;
        }
    }
    for (&piece, positions) in &valid.drops {
        for &pos in positions {
            if index == 0 {
                return Some(Move::drop(pos, piece));
            }
            index -= 1;
        }
    }
    unreachable!("index exhausted total_move_count without a match")
}

/// UXの間が持つよう、[0.5s, 1.5s) の一様乱数だけ待ってから `choose_move` を呼ぶ
/// ワーカースレッドを立てる。選んだ手は `slot` に `set` される。
pub fn spawn_opponent_worker(
    player: Player,
    board: Board,
    slot: Arc<PendingMove>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let mut rng = rand::rng();
        let delay_ms = rng.random_range(500..1500);
        thread::sleep(Duration::from_millis(delay_ms));
        match choose_move(player, &board, &mut rng) {
            Some(mv) => {
                log::debug!("opponent worker chose {mv:?}");
                slot.set(mv);
            }
            None => log::debug!("opponent worker found no legal move for {player:?}"),
        }
    })
}
