//! 駒種ごとの移動表（先手視点で定義し、後手は呼び出し側で鏡映する）

use crate::types::Motion;

pub const KING: &[Motion] = &[
    Motion::new(-1, -1),
    Motion::new(0, -1),
    Motion::new(1, -1),
    Motion::new(-1, 0),
    Motion::new(1, 0),
    Motion::new(-1, 1),
    Motion::new(0, 1),
    Motion::new(1, 1),
];

/// 金・成銀・成桂・成香・と金 共通の6方向
pub const GOLD_LIKE: &[Motion] = &[
    Motion::new(-1, -1),
    Motion::new(0, -1),
    Motion::new(1, -1),
    Motion::new(-1, 0),
    Motion::new(1, 0),
    Motion::new(0, 1),
];

pub const SILVER: &[Motion] = &[
    Motion::new(-1, -1),
    Motion::new(0, -1),
    Motion::new(1, -1),
    Motion::new(-1, 1),
    Motion::new(1, 1),
];

/// 桂馬は間の升を飛び越えるので直接移動として扱う
pub const KNIGHT: &[Motion] = &[Motion::new(-1, -2), Motion::new(1, -2)];

pub const PAWN: &[Motion] = &[Motion::new(0, -1)];

/// 飛車の4方向（遠隔移動）
pub const ROOK_RAYS: &[Motion] = &[
    Motion::new(0, -1),
    Motion::new(0, 1),
    Motion::new(-1, 0),
    Motion::new(1, 0),
];

/// 角行の4方向（遠隔移動）
pub const BISHOP_RAYS: &[Motion] = &[
    Motion::new(-1, -1),
    Motion::new(1, -1),
    Motion::new(-1, 1),
    Motion::new(1, 1),
];

/// 香車の1方向（遠隔移動）
pub const LANCE_RAYS: &[Motion] = &[Motion::new(0, -1)];

/// 竜王: 飛車の動きに加え、斜め1マス
pub const PROMOTED_ROOK_EXTRA_DIRECT: &[Motion] = BISHOP_RAYS;

/// 竜馬: 角行の動きに加え、縦横1マス
pub const PROMOTED_BISHOP_EXTRA_DIRECT: &[Motion] = ROOK_RAYS;
