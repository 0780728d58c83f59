//! 盤上の座標（BoardPos）と移動ベクトル（Motion）

use super::Player;
use crate::board::BOARD_SIZE;

/// 盤上の座標。x, y ∈ [0, 8] であれば盤内。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardPos {
    pub x: i8,
    pub y: i8,
}

impl BoardPos {
    #[inline]
    pub const fn new(x: i8, y: i8) -> Self {
        BoardPos { x, y }
    }

    #[inline]
    pub const fn in_bounds(self) -> bool {
        self.x >= 0 && self.x < BOARD_SIZE as i8 && self.y >= 0 && self.y < BOARD_SIZE as i8
    }

    /// `motion` を適用した先の座標。盤外に出るなら `None`。
    #[inline]
    pub const fn apply_motion(self, motion: Motion) -> Option<BoardPos> {
        let dest = BoardPos::new(self.x + motion.dx, self.y + motion.dy);
        if dest.in_bounds() {
            Some(dest)
        } else {
            None
        }
    }

    /// 成り対象区域（自陣から見た奥3段）にいるかどうか
    #[inline]
    pub const fn in_promotion_zone_for(self, player: Player) -> bool {
        match player {
            Player::Black => self.y <= 2,
            Player::White => self.y >= 6,
        }
    }

    #[inline]
    pub const fn file(self) -> usize {
        self.x as usize
    }

    #[inline]
    pub const fn rank(self) -> i8 {
        self.y
    }
}

/// 移動ベクトル (dx, dy)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Motion {
    pub dx: i8,
    pub dy: i8,
}

impl Motion {
    #[inline]
    pub const fn new(dx: i8, dy: i8) -> Self {
        Motion { dx, dy }
    }

    /// y成分を反転した動き（先手向けの表を後手視点に鏡映するのに使う）
    #[inline]
    pub const fn flip_horiz(self) -> Motion {
        Motion::new(self.dx, -self.dy)
    }

    /// 単位ベクトルとしてのこの向きに `k` を掛けたもの
    #[inline]
    pub const fn scaled(self, k: i8) -> Motion {
        Motion::new(self.dx * k, self.dy * k)
    }
}
