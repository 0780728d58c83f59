//! 盤面（Board）: 9x9 の駒配置と両者の持ち駒

use crate::types::{BoardPos, FileSet, Hand, Move, Piece, PieceSort, Player};

/// 盤のサイズ（1辺）
pub const BOARD_SIZE: usize = 9;

/// 盤面と持ち駒。`apply_move_basic` / `apply_move_drop` を通じてのみ更新する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    tiles: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
    hands: [Hand; Player::NUM],
}

impl Board {
    /// 駒のない盤面。テストや詰将棋の組み立てに使う。
    pub fn empty() -> Self {
        Board {
            tiles: [[None; BOARD_SIZE]; BOARD_SIZE],
            hands: [Hand::empty(); Player::NUM],
        }
    }

    /// 平手の初期局面
    pub fn initial() -> Self {
        use PieceSort::*;
        let mut board = Board::empty();

        let back_rank = [
            Lance, Knight, Silver, Gold, King, Gold, Silver, Knight, Lance,
        ];

        for (x, sort) in back_rank.iter().enumerate() {
            board.set(BoardPos::new(x as i8, 0), Some(Piece::new(Player::White, *sort)));
            board.set(BoardPos::new(x as i8, 8), Some(Piece::new(Player::Black, *sort)));
        }
        for x in 0..BOARD_SIZE as i8 {
            board.set(BoardPos::new(x, 2), Some(Piece::new(Player::White, Pawn)));
            board.set(BoardPos::new(x, 6), Some(Piece::new(Player::Black, Pawn)));
        }
        board.set(BoardPos::new(1, 1), Some(Piece::new(Player::White, Rook)));
        board.set(BoardPos::new(7, 1), Some(Piece::new(Player::White, Bishop)));
        board.set(BoardPos::new(1, 7), Some(Piece::new(Player::Black, Bishop)));
        board.set(BoardPos::new(7, 7), Some(Piece::new(Player::Black, Rook)));

        board
    }

    /// `pos` の駒。`pos` が盤外なら panic する（呼び出し側の誤り）。
    #[inline]
    pub fn get(&self, pos: BoardPos) -> Option<Piece> {
        self.tiles[pos.y as usize][pos.x as usize]
    }

    #[inline]
    pub fn set(&mut self, pos: BoardPos, piece: Option<Piece>) {
        self.tiles[pos.y as usize][pos.x as usize] = piece;
    }

    /// 盤上で `piece` が最初に見つかった位置（行優先）
    pub fn find(&self, piece: Piece) -> Option<BoardPos> {
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                if self.tiles[y][x] == Some(piece) {
                    return Some(BoardPos::new(x as i8, y as i8));
                }
            }
        }
        None
    }

    /// `file` に `player` の不成の歩があるかどうか（二歩判定用）
    pub fn file_has_pawn_for(&self, file: usize, player: Player) -> bool {
        (0..BOARD_SIZE).any(|y| {
            self.tiles[y][file]
                == Some(Piece::new(player, PieceSort::Pawn))
        })
    }

    /// `file_has_pawn_for` の全筋版
    pub fn files_have_pawn_for(&self, player: Player) -> FileSet {
        let mut files = FileSet::empty();
        for file in 0..BOARD_SIZE {
            if self.file_has_pawn_for(file, player) {
                files.set(file);
            }
        }
        files
    }

    #[inline]
    pub fn hand_of(&self, player: Player) -> &Hand {
        &self.hands[player.index()]
    }

    #[inline]
    pub fn hand_of_mut(&mut self, player: Player) -> &mut Hand {
        &mut self.hands[player.index()]
    }

    /// `mv` が `Move::Basic` でなければ panic する（呼び出し側の誤り）
    pub fn apply_move_basic(&mut self, mv: Move) -> bool {
        let Move::Basic {
            from,
            motion,
            promoted,
        } = mv
        else {
            panic!("apply_move_basic called with a non-Basic move");
        };

        let Some(piece) = self.get(from) else {
            log::debug!("apply_move_basic: no piece at {from:?}");
            return false;
        };
        let Some(dest) = from.apply_motion(motion) else {
            log::debug!("apply_move_basic: {motion:?} from {from:?} leaves the board");
            return false;
        };

        let captured = self.get(dest);
        self.set(from, None);
        let moved_sort = if promoted { piece.sort.promote() } else { piece.sort };
        self.set(dest, Some(Piece::new(piece.player, moved_sort)));
        if let Some(captured) = captured {
            self.hand_of_mut(piece.player).add(captured.sort.demote());
        }

        #[cfg(feature = "debug")]
        self.debug_check_invariants();

        true
    }

    /// `mv` が `Move::Drop` でなければ panic する（呼び出し側の誤り）
    pub fn apply_move_drop(&mut self, mv: Move) -> bool {
        let Move::Drop { pos, piece } = mv else {
            panic!("apply_move_drop called with a non-Drop move");
        };

        if piece.sort == PieceSort::King || piece.sort != piece.sort.demote() {
            log::debug!("apply_move_drop: {piece:?} is not a droppable sort");
            return false;
        }
        if self.get(pos).is_some() {
            log::debug!("apply_move_drop: {pos:?} is occupied");
            return false;
        }
        if self.hand_of(piece.player).count(piece.sort) == 0 {
            log::debug!("apply_move_drop: no {piece:?} in hand");
            return false;
        }

        self.hand_of_mut(piece.player).remove(piece.sort);
        self.set(pos, Some(piece));

        #[cfg(feature = "debug")]
        self.debug_check_invariants();

        true
    }

    #[cfg(feature = "debug")]
    fn debug_check_invariants(&self) {
        for player in [Player::Black, Player::White] {
            let kings = (0..BOARD_SIZE)
                .flat_map(|y| (0..BOARD_SIZE).map(move |x| (x, y)))
                .filter(|&(x, y)| {
                    self.tiles[y][x] == Some(Piece::new(player, PieceSort::King))
                })
                .count();
            debug_assert_eq!(kings, 1, "{player:?} must have exactly one king");
        }
    }
}
