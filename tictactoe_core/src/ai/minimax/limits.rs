/// 探索の最大深さ（ply）。盤面が9マスなので通常はこれに達する前に終局する。
pub(super) const MAX_DEPTH: u8 = 9;

/// 探索統計。
#[derive(Default, Clone, Copy, Debug, Eq, PartialEq)]
pub struct SearchStats {
    /// αβ の枝刈りで兄弟の列挙を打ち切った回数。
    cutoffs: u64,
    /// 到達した最大の深さ（ply）。
    deepest_ply: u8,
    /// 探索したノード数（ルートを含む）。
    nodes: u64,
}

impl SearchStats {
    /// 枝刈りした回数を返す。
    #[inline]
    #[must_use]
    pub const fn cutoffs(&self) -> u64 {
        self.cutoffs
    }

    /// 到達した最大の深さを返す。
    #[inline]
    #[must_use]
    pub const fn deepest_ply(&self) -> u8 {
        self.deepest_ply
    }

    /// 枝刈りの回数を加算する。
    pub(super) const fn inc_cutoffs(&mut self) {
        self.cutoffs = self.cutoffs.wrapping_add(1);
    }

    /// 探索したノード数を返す。
    #[inline]
    #[must_use]
    pub const fn nodes(&self) -> u64 {
        self.nodes
    }

    /// ノード訪問を記録する。
    pub(super) fn visit(&mut self, ply: u8) {
        self.nodes = self.nodes.wrapping_add(1);
        self.deepest_ply = self.deepest_ply.max(ply);
    }
}

/// 探索実行に必要なコンテキスト。
#[derive(Debug)]
pub(super) struct SearchContext {
    /// 再帰の深さ上限。
    max_depth: u8,
    /// 探索統計。
    stats: SearchStats,
}

impl SearchContext {
    /// 深さ上限を返す。
    pub(super) const fn max_depth(&self) -> u8 {
        self.max_depth
    }

    /// 探索コンテキストを生成する。
    pub(super) fn new(max_depth: u8) -> Self {
        Self {
            max_depth,
            stats: SearchStats::default(),
        }
    }

    /// 探索統計を返す。
    pub(super) const fn stats(&self) -> SearchStats {
        self.stats
    }

    /// 探索統計への可変参照を返す。
    pub(super) const fn stats_mut(&mut self) -> &mut SearchStats {
        &mut self.stats
    }
}
