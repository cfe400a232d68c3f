//! Search and evaluation configuration.

use super::Board;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// No evaluation terms; every leaf scores 0.
pub const EVAL_NULL: u8 = 0;
/// Material term (incrementally maintained piece values).
pub const EVAL_MATERIAL: u8 = 1;
/// Mobility term (weighted pseudo-legal move counts).
pub const EVAL_MOBILITY: u8 = 2;
/// Reserved: quiescence search.
pub const EVAL_QUIESCENCE: u8 = 4;
/// Reserved: neural evaluation. No network ships with the crate.
pub const EVAL_NEURAL: u8 = 8;

/// Tree search flavor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum SearchMode {
    /// No pruning, no move ordering (the default).
    #[default]
    Random = 0,
    /// Plain minimax.
    Minimax = 1,
    /// Alpha-beta with move ordering.
    AlphaBeta = 2,
}

fn eval_mode_from_name(name: &str) -> Option<u8> {
    match name {
        "null" => Some(EVAL_NULL),
        "mat" => Some(EVAL_MATERIAL),
        "mob" => Some(EVAL_MOBILITY),
        "hce" => Some(EVAL_MATERIAL | EVAL_MOBILITY),
        "qui" => Some(EVAL_MATERIAL | EVAL_MOBILITY | EVAL_QUIESCENCE),
        "nn" => Some(EVAL_MATERIAL | EVAL_MOBILITY | EVAL_NEURAL),
        _ => None,
    }
}

fn search_mode_from_name(name: &str) -> Option<SearchMode> {
    match name {
        "rnd" => Some(SearchMode::Random),
        "mm" => Some(SearchMode::Minimax),
        "ab" => Some(SearchMode::AlphaBeta),
        _ => None,
    }
}

impl Board {
    /// Reset the engine settings, then apply an option string.
    ///
    /// `options` is a space-separated list of `k=v` tokens:
    /// - `d=N` - max search depth; a negative N sets `max_time` to -N instead
    /// - `e=name` - eval mode: `null`, `mat`, `mob`, `hce`, `qui`, `nn`
    /// - `n=N` - max leaf evaluations per search
    /// - `s=name` - search mode: `rnd`, `mm`, `ab`
    /// - `t=N` - max time (stored only; the search does not poll a clock)
    ///
    /// Unknown keys and malformed tokens are ignored. A negative `depth`
    /// argument leaves the previous max depth in place.
    pub fn configure(&mut self, frc: bool, options: &str, depth: i32) {
        self.eval_mode = EVAL_MATERIAL;
        self.frc = frc;
        if depth >= 0 {
            self.max_depth = depth;
        }
        self.max_nodes = 1_000_000_000;
        self.max_time = 0;
        self.search_mode = SearchMode::Random;

        for option in options.split_whitespace() {
            let Some((key, value)) = option.split_once('=') else {
                continue;
            };
            if key.len() != 1 || value.is_empty() {
                continue;
            }
            match key {
                "d" => {
                    let depth: i32 = value.parse().unwrap_or(0);
                    if depth >= 0 {
                        self.max_depth = depth;
                    } else {
                        self.max_time = i64::from(-depth);
                    }
                }
                "e" => {
                    if let Some(mode) = eval_mode_from_name(value) {
                        self.eval_mode = mode;
                    }
                }
                "n" => {
                    self.max_nodes = value.parse::<i64>().unwrap_or(0).max(0) as u64;
                }
                "s" => {
                    if let Some(mode) = search_mode_from_name(value) {
                        self.search_mode = mode;
                    }
                }
                "t" => {
                    self.max_time = value.parse().unwrap_or(0);
                }
                _ => {}
            }
        }
    }

    /// Current settings: max depth, eval mode, max nodes, search mode,
    /// max time.
    #[must_use]
    pub fn params(&self) -> [i64; 5] {
        [
            i64::from(self.max_depth),
            i64::from(self.eval_mode),
            self.max_nodes as i64,
            self.search_mode as i64,
            self.max_time,
        ]
    }
}
