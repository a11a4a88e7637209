use memorix_core::types::PlayerProfile;

/// Regra do score de suspeita: se o predicado vale, soma o peso
#[derive(Clone, Copy)]
pub struct ScoreRule {
    pub name: &'static str,
    pub weight: f64,
    pub predicate: fn(&PlayerProfile) -> bool,
}

impl std::fmt::Debug for ScoreRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScoreRule")
            .field("name", &self.name)
            .field("weight", &self.weight)
            .finish()
    }
}

pub const HIGH_AVG_GAS_RATIO: f64 = 2.0;
pub const MANY_FRONT_RUNS: usize = 2;
pub const TOP_OF_BLOCK_POSITION: f64 = 5.0;

fn high_avg_gas(p: &PlayerProfile) -> bool {
    p.avg_gas_ratio > HIGH_AVG_GAS_RATIO
}

fn many_front_runs(p: &PlayerProfile) -> bool {
    p.front_run_count > MANY_FRONT_RUNS
}

// posição desconhecida não contribui
fn top_of_block(p: &PlayerProfile) -> bool {
    matches!(p.avg_tx_position, Some(pos) if pos < TOP_OF_BLOCK_POSITION)
}

/// Soma ponderada de regras, avaliadas em ordem e de forma independente
#[derive(Debug, Clone)]
pub struct SuspicionScorer {
    rules: Vec<ScoreRule>,
}

impl SuspicionScorer {
    pub fn new() -> Self {
        Self {
            rules: vec![
                ScoreRule { name: "high_avg_gas_ratio", weight: 0.3, predicate: high_avg_gas },
                ScoreRule { name: "many_front_runs", weight: 0.4, predicate: many_front_runs },
                ScoreRule { name: "top_of_block", weight: 0.3, predicate: top_of_block },
            ],
        }
    }

    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn push(mut self, rule: ScoreRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rules(&self) -> &[ScoreRule] {
        &self.rules
    }

    /// Score em [0, 1]
    pub fn score(&self, profile: &PlayerProfile) -> f64 {
        // parte de +0.0; o score nunca é -0.0
        let total = self
            .rules
            .iter()
            .filter(|r| (r.predicate)(profile))
            .fold(0.0_f64, |acc, r| acc + r.weight);
        total.clamp(0.0, 1.0)
    }

    /// Nomes das regras satisfeitas pelo perfil
    pub fn matched(&self, profile: &PlayerProfile) -> Vec<&'static str> {
        self.rules
            .iter()
            .filter(|r| (r.predicate)(profile))
            .map(|r| r.name)
            .collect()
    }
}

impl Default for SuspicionScorer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(avg_gas: f64, front_runs: usize, position: Option<f64>) -> PlayerProfile {
        PlayerProfile {
            player_address: "0xaaa".into(),
            total_rounds: 3,
            avg_gas_ratio: avg_gas,
            max_gas_ratio: avg_gas,
            avg_tx_position: position,
            front_run_count: front_runs,
            suspicious_score: 0.0,
        }
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn all_rules_sum_to_one() {
        let s = SuspicionScorer::new();
        assert!(approx(s.score(&profile(2.5, 3, Some(2.0))), 1.0));
    }

    #[test]
    fn unknown_position_skips_contribution() {
        let s = SuspicionScorer::new();
        let p = profile(2.5, 3, None);
        assert!(approx(s.score(&p), 0.7));
        assert_eq!(s.matched(&p), vec!["high_avg_gas_ratio", "many_front_runs"]);
    }

    #[test]
    fn adding_a_condition_never_lowers_score() {
        let s = SuspicionScorer::new();
        let base = profile(1.0, 0, Some(9.0));
        let variants = [
            profile(2.5, 0, Some(9.0)),
            profile(1.0, 3, Some(9.0)),
            profile(1.0, 0, Some(1.0)),
        ];
        for v in &variants {
            assert!(s.score(v) >= s.score(&base));
        }
    }

    #[test]
    fn no_matching_rule_scores_positive_zero() {
        let s = SuspicionScorer::new();
        let score = s.score(&profile(1.0, 0, Some(9.0)));
        assert_eq!(score, 0.0);
        assert!(!score.is_sign_negative());
        assert!(!SuspicionScorer::empty().score(&profile(1.0, 0, None)).is_sign_negative());
    }

    #[test]
    fn custom_rule_is_capped() {
        fn always(_: &PlayerProfile) -> bool {
            true
        }
        let s = SuspicionScorer::new().push(ScoreRule { name: "always", weight: 0.5, predicate: always });
        assert!(approx(s.score(&profile(2.5, 3, Some(0.0))), 1.0));
        assert_eq!(s.rules().len(), 4);
    }
}
