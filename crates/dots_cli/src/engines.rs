//! Engine lookup by name.

use alpha_beta_engine::AlphaBetaEngine;
use anyhow::{Result, bail};
use dots_core::Engine;
use random_engine::RandomEngine;

pub const ENGINE_NAMES: &str = "alphabeta (ab, minimax), random";

pub fn create_engine(name: &str, seed: Option<u64>) -> Result<Box<dyn Engine>> {
    match name.to_ascii_lowercase().as_str() {
        "alphabeta" | "ab" | "minimax" => Ok(Box::new(AlphaBetaEngine::new())),
        "random" | "rand" => Ok(Box::new(match seed {
            Some(seed) => RandomEngine::with_seed(seed),
            None => RandomEngine::new(),
        })),
        other => bail!("unknown engine '{other}', expected one of: {ENGINE_NAMES}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_names() {
        assert_eq!(create_engine("AB", None).unwrap().name(), "AlphaBeta v1.0");
        assert_eq!(create_engine("minimax", None).unwrap().name(), "AlphaBeta v1.0");
        assert_eq!(create_engine("random", Some(3)).unwrap().name(), "Random v1.0");
    }

    #[test]
    fn test_unknown_name() {
        let Err(err) = create_engine("stockfish", None) else {
            panic!("expected an error for an unknown engine");
        };
        assert!(err.to_string().contains("stockfish"));
    }
}
