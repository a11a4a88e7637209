use chrono::{DateTime, Utc};
use memorix_core::error::{Error, Result};
use memorix_core::types::{AttackType, Detection, PlayerProfile};
use memorix_core::utils::short_address;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{self, Write as _};
use std::fs;
use std::path::Path;
use tracing::info;

/// Destino fixo do relatório, relativo ao diretório de execução
pub const DEFAULT_REPORT_PATH: &str = "timing_manipulation_report.json";

/// Contagem de detecções por tipo de ataque, em ordem decrescente.
///
/// Serializa como objeto JSON preservando a ordem do histograma.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttackBreakdown(Vec<(AttackType, usize)>);

impl AttackBreakdown {
    /// Empates ficam na ordem dos detectores
    pub fn from_detections(detections: &[Detection]) -> Self {
        let mut counts: Vec<(AttackType, usize)> = Vec::new();
        for det in detections {
            match counts.iter_mut().find(|(t, _)| *t == det.attack_type) {
                Some((_, n)) => *n += 1,
                None => counts.push((det.attack_type, 1)),
            }
        }
        counts.sort_by(|(ta, a), (tb, b)| b.cmp(a).then(ta.cmp(tb)));
        Self(counts)
    }

    pub fn entries(&self) -> &[(AttackType, usize)] {
        &self.0
    }

    pub fn get(&self, attack_type: AttackType) -> usize {
        self.0
            .iter()
            .find(|(t, _)| *t == attack_type)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }
}

impl Serialize for AttackBreakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (attack_type, count) in &self.0 {
            map.serialize_entry(attack_type, count)?;
        }
        map.end()
    }
}

struct BreakdownVisitor;

impl<'de> Visitor<'de> for BreakdownVisitor {
    type Value = AttackBreakdown;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("um mapa de tipo de ataque para contagem")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<Self::Value, A::Error> {
        let mut entries = Vec::new();
        while let Some((attack_type, count)) = access.next_entry::<AttackType, usize>()? {
            entries.push((attack_type, count));
        }
        Ok(AttackBreakdown(entries))
    }
}

impl<'de> Deserialize<'de> for AttackBreakdown {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(BreakdownVisitor)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total_suspicious: usize,
    pub attack_breakdown: AttackBreakdown,
}

/// Relatório completo de uma execução
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub timestamp: DateTime<Utc>,
    pub total_rounds: usize,
    pub detections: Vec<Detection>,
    pub suspicious_players: Vec<PlayerProfile>,
    pub summary: ReportSummary,
}

impl Report {
    /// Monta o relatório a partir das saídas já ordenadas dos detectores
    /// e do agregador
    pub fn assemble(
        generated_at: DateTime<Utc>,
        total_rounds: usize,
        detections: Vec<Detection>,
        suspicious_players: Vec<PlayerProfile>,
    ) -> Self {
        let summary = ReportSummary {
            total_suspicious: detections.len(),
            attack_breakdown: AttackBreakdown::from_detections(&detections),
        };
        Self {
            timestamp: generated_at,
            total_rounds,
            detections,
            suspicious_players,
            summary,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Grava o relatório inteiro ou falha; nunca deixa arquivo parcial no destino
    pub fn persist(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = self.to_json()?;
        let persist_err = |source| Error::Persist { path: path.display().to_string(), source };

        let mut tmp_name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
        tmp_name.push(".tmp");
        let tmp = path.with_file_name(tmp_name);

        fs::write(&tmp, json).map_err(persist_err)?;
        if let Err(e) = fs::rename(&tmp, path) {
            let _ = fs::remove_file(&tmp);
            return Err(persist_err(e));
        }
        info!("💾 Relatório detalhado salvo em {}", path.display());
        Ok(())
    }

    /// Resumo legível: ranking dos `top_n` jogadores, totais e distribuição
    pub fn render_summary(&self, top_n: usize) -> String {
        let rule = "=".repeat(80);
        let mut out = String::new();

        let _ = writeln!(out, "📊 Análise de padrões de timing por jogador:");
        let _ = writeln!(out, "{}", "-".repeat(80));
        if self.suspicious_players.is_empty() {
            let _ = writeln!(out, "✅ Nenhum padrão de timing suspeito no comportamento dos jogadores");
        }
        for (i, p) in self.suspicious_players.iter().take(top_n).enumerate() {
            let _ = writeln!(
                out,
                "{}. {} | Rodadas: {} | Gas médio: {:.2} | Suspeita: {:.2}",
                i + 1,
                short_address(&p.player_address, 10),
                p.total_rounds,
                p.avg_gas_ratio,
                p.suspicious_score
            );
        }

        let _ = writeln!(out, "\n{}\n📈 RESUMO\n{}", rule, rule);
        let _ = writeln!(out, "Total de rodadas analisadas: {}", self.total_rounds);
        let _ = writeln!(out, "Total de atividades suspeitas: {}", self.summary.total_suspicious);
        let _ = writeln!(out, "Jogadores com timing suspeito: {}", self.suspicious_players.len());
        let _ = writeln!(out, "\nDistribuição por tipo de ataque:");
        for (attack_type, count) in self.summary.attack_breakdown.entries() {
            let _ = writeln!(out, "  - {}: {}", attack_type, count);
        }
        out
    }
}
