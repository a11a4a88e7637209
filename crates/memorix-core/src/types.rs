/*!
 * Memorix Types
 *
 * Tipos comuns usados em toda a workspace Memorix
 */

use serde::{Deserialize, Serialize};
use std::fmt;

/// Evidências de uma detecção, campo → valor observado
pub type Evidence = serde_json::Map<String, serde_json::Value>;

/// Tabela bruta entregue pelo produtor de dados, antes de qualquer coerção.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Índice da primeira coluna com o nome informado
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h.trim() == name)
    }

    /// Célula da linha `row` na coluna `column`; linhas curtas retornam `None`
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Tipo de ataque de timing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttackType {
    FrontRunning,
    TimestampManipulation,
    SandwichAttack,
    MevExploitation,
    DayBoundaryExploitation,
    BatchTiming,
}

impl AttackType {
    /// Todos os tipos, na ordem fixa de execução dos detectores
    pub const ALL: [AttackType; 6] = [
        AttackType::FrontRunning,
        AttackType::TimestampManipulation,
        AttackType::SandwichAttack,
        AttackType::MevExploitation,
        AttackType::DayBoundaryExploitation,
        AttackType::BatchTiming,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AttackType::FrontRunning => "FRONT_RUNNING",
            AttackType::TimestampManipulation => "TIMESTAMP_MANIPULATION",
            AttackType::SandwichAttack => "SANDWICH_ATTACK",
            AttackType::MevExploitation => "MEV_EXPLOITATION",
            AttackType::DayBoundaryExploitation => "DAY_BOUNDARY_EXPLOITATION",
            AttackType::BatchTiming => "BATCH_TIMING",
        }
    }
}

impl fmt::Display for AttackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rodada (ou jogador) sinalizada por um detector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// Ausente nas detecções agrupadas por jogador
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub round_id: Option<String>,
    pub player_address: String,
    pub attack_type: AttackType,
    pub confidence: f64,
    pub evidence: Evidence,
}

/// Perfil de suspeita de um jogador com ao menos duas rodadas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub player_address: String,
    pub total_rounds: usize,
    pub avg_gas_ratio: f64,
    pub max_gas_ratio: f64,
    /// `None` quando nenhuma rodada tem posição no bloco
    pub avg_tx_position: Option<f64>,
    pub front_run_count: usize,
    pub suspicious_score: f64,
}
