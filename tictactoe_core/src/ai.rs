/// ミニマックス（全探索 / αβ / 対称性削減）AI。
pub mod minimax;
/// 空きマスからランダムに1手選ぶAI。
pub mod random;
pub mod types;

pub type SearchError = types::SearchError;
pub type Strategy = minimax::Strategy;
pub type BestMove = minimax::BestMove;
