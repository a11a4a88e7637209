use crate::scoring::SuspicionScorer;
use memorix_core::types::PlayerProfile;
use memorix_core::utils::{max, mean};
use memorix_dataset::{Column, NormalizedTable, RoundRecord};
use std::cmp::Ordering;

/// Rodadas mínimas para um jogador ganhar perfil
pub const MIN_PLAYER_ROUNDS: usize = 2;
/// Razão de gas acima da qual a rodada conta como front-run
pub const FRONT_RUN_GAS_RATIO: f64 = 1.5;
/// Threshold padrão de suspeita
pub const DEFAULT_THRESHOLD: f64 = 0.8;

/// Agregador de estatísticas de timing por jogador.
pub struct PlayerAggregator {
    scorer: SuspicionScorer,
}

impl PlayerAggregator {
    pub fn new() -> Self {
        Self { scorer: SuspicionScorer::new() }
    }

    pub fn with_scorer(scorer: SuspicionScorer) -> Self {
        Self { scorer }
    }

    /// Perfil de um jogador, ou `None` se tiver menos de duas rodadas
    /// ou nenhuma razão de gas conhecida
    pub fn profile(&self, player: &str, rows: &[&RoundRecord]) -> Option<PlayerProfile> {
        if rows.len() < MIN_PLAYER_ROUNDS {
            return None;
        }

        let gas: Vec<f64> = rows.iter().filter_map(|r| r.gas_price_vs_network_median).collect();
        let positions: Vec<f64> = rows.iter().filter_map(|r| r.tx_position_in_block).collect();

        let mut profile = PlayerProfile {
            player_address: player.to_string(),
            total_rounds: rows.len(),
            avg_gas_ratio: mean(&gas)?,
            max_gas_ratio: max(&gas)?,
            avg_tx_position: mean(&positions),
            front_run_count: gas.iter().filter(|g| **g > FRONT_RUN_GAS_RATIO).count(),
            suspicious_score: 0.0,
        };
        profile.suspicious_score = self.scorer.score(&profile);
        Some(profile)
    }

    /// Todos os perfis, na ordem de agrupamento (endereço crescente)
    pub fn profiles(&self, table: &NormalizedTable) -> Vec<PlayerProfile> {
        if !table.schema().contains(Column::GasPriceVsNetworkMedian) {
            return Vec::new();
        }
        table
            .group_by_player()
            .into_iter()
            .filter_map(|(player, rows)| self.profile(player, &rows))
            .collect()
    }

    /// Jogadores com score >= threshold, do mais ao menos suspeito
    pub fn suspicious_players(&self, table: &NormalizedTable, threshold: f64) -> Vec<PlayerProfile> {
        rank_by_threshold(self.profiles(table), threshold)
    }
}

impl Default for PlayerAggregator {
    fn default() -> Self {
        Self::new()
    }
}

/// Filtra por threshold e ordena por score decrescente.
/// A ordenação é estável: empates mantêm a ordem de entrada.
pub fn rank_by_threshold(profiles: Vec<PlayerProfile>, threshold: f64) -> Vec<PlayerProfile> {
    let mut ranked: Vec<PlayerProfile> = profiles
        .into_iter()
        .filter(|p| p.suspicious_score >= threshold)
        .collect();
    ranked.sort_by(|a, b| {
        b.suspicious_score
            .partial_cmp(&a.suspicious_score)
            .unwrap_or(Ordering::Equal)
    });
    ranked
}
