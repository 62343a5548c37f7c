use core::fmt;
use core::str::FromStr;

use crate::engine::types::{Cell, Mark, Outcome};

/// 三目の並び（横3・縦3・斜め2）。全評価で共有する定数表。
pub const WINNING_LINES: [[u8; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// 全9マスのマスク。
const FULL_MASK: u16 = 0x01FF;

/// 空きマスの表示文字。
const EMPTY_SYMBOL: char = '.';

/// 盤面（○×の2枚のビットボード）。
///
/// 手番は石数から導出する（X が先手なので、同数なら X の番）。
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Board {
    /// O のビットボード。
    o: u16,
    /// X のビットボード。
    x: u16,
}

/// 着手の書き込みに失敗した理由。
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum PlaceError {
    /// 指定マスはすでに埋まっている。
    #[error("cell {cell} is already occupied")]
    Occupied {
        /// 対象のマス。
        cell: Cell,
    },
}

/// 盤面文字列の解析に失敗した理由。
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum ParseBoardError {
    /// 9マスぶんの文字がない。
    #[error("expected 9 cells, got {got}")]
    InvalidLength {
        /// 読み取れたマス数。
        got: usize,
    },
    /// 解釈できない文字がある。
    #[error("invalid character '{character}' at cell {position}")]
    InvalidCharacter {
        /// 問題の文字。
        character: char,
        /// 何マス目か。
        position: usize,
    },
    /// X 先手の交互着手では生じない石数。
    #[error("invalid piece counts: X={x}, O={o} (X must equal O or lead by one)")]
    InvalidCounts {
        /// X の数。
        x: u32,
        /// O の数。
        o: u32,
    },
}

impl Board {
    /// 指定マスの記号を消す（探索の仮置きを戻すときに使う）。
    #[inline]
    pub fn clear(&mut self, cell: Cell) {
        let mask = !cell.bit();
        self.x &= mask;
        self.o &= mask;
    }

    /// 記号ごとの石数（X、O）を返す。
    #[inline]
    #[must_use]
    pub const fn counts(self) -> (u32, u32) {
        (self.x.count_ones(), self.o.count_ones())
    }

    /// 空き盤面を返す。
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self { o: 0, x: 0 }
    }

    /// 空きマスのビットボードを返す。
    #[inline]
    #[must_use]
    pub const fn empty_bits(self) -> u16 {
        !self.occupied() & FULL_MASK
    }

    /// 空きマスをインデックス順に返す。
    #[inline]
    pub fn empty_cells(self) -> impl Iterator<Item = Cell> {
        Cell::all().filter(move |cell| self.is_empty(*cell))
    }

    /// 9マスの配列から盤面を生成する。
    ///
    /// # Errors
    ///
    /// X 先手の交互着手で到達できない石数の場合、`ParseBoardError::InvalidCounts` を返す。
    #[inline]
    pub fn from_cells(cells: [Option<Mark>; 9]) -> Result<Self, ParseBoardError> {
        let mut board = Self::empty();
        for (cell, mark) in Cell::all().zip(cells) {
            match mark {
                Some(Mark::X) => board.x |= cell.bit(),
                Some(Mark::O) => board.o |= cell.bit(),
                None => {}
            }
        }
        board.validate_counts()
    }

    /// 生のビットボードから盤面を生成する（crate 内部向け、検証なし）。
    ///
    /// `x & o == 0` は呼び出し側が保証する。
    #[inline]
    pub(crate) const fn from_bits(x: u16, o: u16) -> Self {
        Self {
            o: o & FULL_MASK,
            x: x & FULL_MASK,
        }
    }

    /// 全マスが埋まっているかを返す。
    #[inline]
    #[must_use]
    pub const fn is_full(self) -> bool {
        self.occupied() == FULL_MASK
    }

    /// 指定マスが空いているかを返す。
    #[inline]
    #[must_use]
    pub fn is_empty(self, cell: Cell) -> bool {
        self.occupied() & cell.bit() == u16::MIN
    }

    /// 指定マスの記号を返す。
    #[inline]
    #[must_use]
    pub fn mark_at(self, cell: Cell) -> Option<Mark> {
        let mask = cell.bit();
        if self.x & mask != u16::MIN {
            Some(Mark::X)
        } else if self.o & mask != u16::MIN {
            Some(Mark::O)
        } else {
            None
        }
    }

    /// 指定記号のビットボードを返す。
    #[inline]
    #[must_use]
    pub const fn bits(self, mark: Mark) -> u16 {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
        }
    }

    /// 盤面の占有ビットボードを返す。
    #[inline]
    #[must_use]
    pub const fn occupied(self) -> u16 {
        self.x | self.o
    }

    /// 勝敗を返す。X、O の順に三目を確認し、どちらもなく満杯なら引き分け。
    #[inline]
    #[must_use]
    pub fn outcome(self) -> Outcome {
        if self.winner(Mark::X) {
            return Outcome::Win(Mark::X);
        }
        if self.winner(Mark::O) {
            return Outcome::Win(Mark::O);
        }
        if self.is_full() {
            return Outcome::Draw;
        }
        Outcome::InProgress
    }

    /// 指定マスに記号を書き込む。
    ///
    /// # Errors
    ///
    /// 指定マスが空いていない場合、`PlaceError::Occupied` を返す。
    #[inline]
    pub fn place(&mut self, cell: Cell, mark: Mark) -> Result<(), PlaceError> {
        if !self.is_empty(cell) {
            return Err(PlaceError::Occupied { cell });
        }
        match mark {
            Mark::X => self.x |= cell.bit(),
            Mark::O => self.o |= cell.bit(),
        }
        Ok(())
    }

    /// 石数から導出した手番を返す。
    #[inline]
    #[must_use]
    pub const fn side_to_move(self) -> Mark {
        let (x, o) = self.counts();
        if x == o { Mark::X } else { Mark::O }
    }

    /// 石数が X 先手の交互着手として妥当かを確認する。
    fn validate_counts(self) -> Result<Self, ParseBoardError> {
        let (x, o) = self.counts();
        if x == o || x == o.wrapping_add(1) {
            Ok(self)
        } else {
            Err(ParseBoardError::InvalidCounts { x, o })
        }
    }

    /// 指定記号がいずれかの並びを3つとも占めているかを返す。
    #[inline]
    #[must_use]
    pub fn winner(self, mark: Mark) -> bool {
        let bits = self.bits(mark);
        WINNING_LINES.iter().any(|line| {
            line.iter()
                .all(|&idx| bits & Cell::from_index_unchecked(idx).bit() != u16::MIN)
        })
    }
}

impl fmt::Display for Board {
    /// `XX.OO....` のように行優先の9文字で出力する。
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in Cell::all() {
            let symbol = self.mark_at(cell).map_or(EMPTY_SYMBOL, Mark::symbol);
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// `.`（または `-` `_`）を空き、`X`/`O` を記号として読む。空白と `/` `|` は区切りとして無視する。
    #[inline]
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = text
            .chars()
            .filter(|ch| !ch.is_whitespace() && *ch != '/' && *ch != '|')
            .collect();
        if symbols.len() != usize::from(Cell::COUNT) {
            return Err(ParseBoardError::InvalidLength { got: symbols.len() });
        }

        let mut cells = [None; 9];
        for (position, (slot, &character)) in cells.iter_mut().zip(&symbols).enumerate() {
            *slot = match character {
                '.' | '-' | '_' => None,
                'X' | 'x' => Some(Mark::X),
                'O' | 'o' => Some(Mark::O),
                _ => {
                    return Err(ParseBoardError::InvalidCharacter {
                        character,
                        position,
                    });
                }
            };
        }

        Self::from_cells(cells)
    }
}
