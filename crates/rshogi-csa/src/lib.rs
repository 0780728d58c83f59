//! CSA棋譜のひと手ずつの読み込みと、`rshogi_core` への適用（テスト専用）
//!
//! CSAの棋譜ファイルそのものを読むものではない。1行=1手のテキスト形式を
//! 1行ずつ解釈して、既存の [`Board`] に適用する「リプレイ」だけを提供する。

use rshogi_core::{Board, BoardPos, Move, Motion, Piece, PieceSort, Player, BOARD_SIZE};

/// CSA形式の1手を1行分パースした結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsaMove {
    pub side: Player,
    /// `None` は打つ手（CSAの移動元 `00`）を表す
    pub from: Option<BoardPos>,
    pub to: BoardPos,
    pub sort: PieceSort,
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("unexpected end of input")]
    EndOfInput,
    #[error("unexpected character {found:?} at byte {pos}")]
    UnexpectedChar { pos: usize, found: char },
}

#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("piece not in hand: {0:?}")]
    PieceNotInHand(PieceSort),
    #[error("invalid move: {0:?}")]
    InvalidMove(Move),
}

fn parse_digit(bytes: &[u8], pos: usize) -> Result<i8, ParseError> {
    let b = bytes[pos];
    if b.is_ascii_digit() {
        Ok((b - b'0') as i8)
    } else {
        Err(ParseError::UnexpectedChar {
            pos,
            found: b as char,
        })
    }
}

fn parse_sort(s: &str, pos: usize) -> Result<PieceSort, ParseError> {
    match s {
        "OU" => Ok(PieceSort::King),
        "HI" => Ok(PieceSort::Rook),
        "KA" => Ok(PieceSort::Bishop),
        "KI" => Ok(PieceSort::Gold),
        "GI" => Ok(PieceSort::Silver),
        "KE" => Ok(PieceSort::Knight),
        "KY" => Ok(PieceSort::Lance),
        "FU" => Ok(PieceSort::Pawn),
        "RY" => Ok(PieceSort::PromotedRook),
        "UM" => Ok(PieceSort::PromotedBishop),
        "NG" => Ok(PieceSort::PromotedSilver),
        "NK" => Ok(PieceSort::PromotedKnight),
        "NY" => Ok(PieceSort::PromotedLance),
        "TO" => Ok(PieceSort::PromotedPawn),
        _ => Err(ParseError::UnexpectedChar {
            pos,
            found: s.chars().next().unwrap_or('\0'),
        }),
    }
}

/// CSAの座標 (1-9, White側から見た筋) を内部座標に変換する
fn translate_coord(csa_x: i8, csa_y: i8) -> BoardPos {
    BoardPos::new(BOARD_SIZE as i8 - csa_x, csa_y - 1)
}

/// `(csa_x, csa_y)` が盤上の座標 (共に `1..=9`) として妥当かどうか
fn coord_on_board(csa_x: i8, csa_y: i8) -> bool {
    (1..=9).contains(&csa_x) && (1..=9).contains(&csa_y)
}

/// ちょうど7バイトの1手を1行分パースする: `{+|-}{sx}{sy}{dx}{dy}{SORT}`
pub fn parse_move_line(line: &str) -> Result<CsaMove, ParseError> {
    let bytes = line.as_bytes();
    if bytes.len() != 7 {
        return Err(ParseError::EndOfInput);
    }

    let side = match bytes[0] {
        b'+' => Player::Black,
        b'-' => Player::White,
        other => {
            return Err(ParseError::UnexpectedChar {
                pos: 0,
                found: other as char,
            })
        }
    };

    let sx = parse_digit(bytes, 1)?;
    let sy = parse_digit(bytes, 2)?;
    let dx = parse_digit(bytes, 3)?;
    let dy = parse_digit(bytes, 4)?;

    if !coord_on_board(dx, dy) {
        return Err(ParseError::UnexpectedChar {
            pos: 3,
            found: '0',
        });
    }
    let to = translate_coord(dx, dy);
    let from = if sx == 0 && sy == 0 {
        None
    } else if coord_on_board(sx, sy) {
        Some(translate_coord(sx, sy))
    } else {
        return Err(ParseError::UnexpectedChar {
            pos: 1,
            found: '0',
        });
    };

    let sort = parse_sort(&line[5..7], 5)?;

    Ok(CsaMove {
        side,
        from,
        to,
        sort,
    })
}

/// 解釈済みの1手を盤面に適用する。移動手は移動元タイルの駒種と
/// `csa.sort`（着手後の駒種）を比較して成りを推測する。
pub fn replay_line(board: &mut Board, mover: Player, csa: CsaMove) -> Result<(), GameError> {
    debug_assert_eq!(csa.side, mover, "csa move's side must match the mover");

    match csa.from {
        None => {
            if board.hand_of(mover).count(csa.sort) == 0 {
                return Err(GameError::PieceNotInHand(csa.sort));
            }
            let mv = Move::drop(csa.to, Piece::new(mover, csa.sort));
            if !rshogi_core::is_valid(mv, board) {
                return Err(GameError::InvalidMove(mv));
            }
            board.apply_move_drop(mv);
            Ok(())
        }
        Some(from) => {
            let motion = Motion::new(csa.to.x - from.x, csa.to.y - from.y);
            let promoted = match board.get(from) {
                Some(origin) => csa.sort != origin.sort,
                None => {
                    let mv = Move::basic(from, motion, false);
                    return Err(GameError::InvalidMove(mv));
                }
            };
            let mv = Move::basic(from, motion, promoted);
            if !rshogi_core::is_valid(mv, board) {
                return Err(GameError::InvalidMove(mv));
            }
            board.apply_move_basic(mv);
            Ok(())
        }
    }
}

/// CSA形式の棋譜テキストを1行ずつ読み、手のパターンに一致する行だけを
/// 順に適用する。一致しない行（ヘッダ・コメントなど）は読み飛ばす。
pub fn replay_lines(board: &mut Board, text: &str) -> Result<(), GameError> {
    for line in text.lines() {
        if let Ok(csa) = parse_move_line(line) {
            replay_line(board, csa.side, csa)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_black_pawn_push() {
        let csa = parse_move_line("+7776FU").unwrap();
        assert_eq!(csa.side, Player::Black);
        assert_eq!(csa.from, Some(BoardPos::new(2, 6)));
        assert_eq!(csa.to, BoardPos::new(2, 5));
        assert_eq!(csa.sort, PieceSort::Pawn);
    }

    #[test]
    fn rejects_non_digit_coordinate() {
        let err = parse_move_line("+00X5FU").unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnexpectedChar { pos: 3, found: 'X' }
        ));
    }

    #[test]
    fn rejects_partially_zero_source_coordinate() {
        let err = parse_move_line("+0197FU").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedChar { pos: 1, .. }));
    }

    #[test]
    fn rejects_partially_zero_destination_coordinate() {
        let err = parse_move_line("+1105FU").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedChar { pos: 3, .. }));
    }

    #[test]
    fn parses_a_real_drop() {
        let csa = parse_move_line("-0045FU").unwrap();
        assert_eq!(csa.side, Player::White);
        assert_eq!(csa.from, None);
        assert_eq!(csa.to, BoardPos::new(BOARD_SIZE as i8 - 4, 4));
        assert_eq!(csa.sort, PieceSort::Pawn);
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(matches!(
            parse_move_line("+7776F"),
            Err(ParseError::EndOfInput)
        ));
    }

    #[test]
    fn rejects_unknown_sort() {
        assert!(matches!(
            parse_move_line("+7776ZZ"),
            Err(ParseError::UnexpectedChar { pos: 5, .. })
        ));
    }

    #[test]
    fn replay_infers_promotion_from_final_sort() {
        let mut board = Board::empty();
        board.set(
            BoardPos::new(2, 3),
            Some(Piece::new(Player::Black, PieceSort::Pawn)),
        );
        board.set(
            BoardPos::new(4, 8),
            Some(Piece::new(Player::Black, PieceSort::King)),
        );
        board.set(
            BoardPos::new(4, 0),
            Some(Piece::new(Player::White, PieceSort::King)),
        );
        let csa = parse_move_line("+7473TO").unwrap();
        replay_line(&mut board, Player::Black, csa).unwrap();
        assert_eq!(
            board.get(BoardPos::new(2, 2)),
            Some(Piece::new(Player::Black, PieceSort::PromotedPawn))
        );
    }

    #[test]
    fn replay_rejects_drop_of_piece_not_in_hand() {
        let mut board = Board::empty();
        board.set(
            BoardPos::new(4, 8),
            Some(Piece::new(Player::Black, PieceSort::King)),
        );
        board.set(
            BoardPos::new(4, 0),
            Some(Piece::new(Player::White, PieceSort::King)),
        );
        let csa = parse_move_line("-0045FU").unwrap();
        let err = replay_line(&mut board, Player::White, csa).unwrap_err();
        assert!(matches!(err, GameError::PieceNotInHand(PieceSort::Pawn)));
    }
}
