//! # Categorias de Problemas e Tipos de Segmento
//!
//! Define as quatro classes independentes de "vícios de escrita" que o motor
//! procura no texto, e o tipo de cada segmento da saída.
//!
//! | Categoria | Significado                        | Exemplos                           |
//! |-----------|------------------------------------|------------------------------------|
//! | em_dash   | Travessão (e variantes)            | `—`, `–`, `―`                      |
//! | cliche    | Frase feita, desgastada            | "at the end of the day"            |
//! | jargon    | Jargão corporativo                 | "leverage", "synergy"              |
//! | ai_tell   | Marcador típico de texto gerado    | "it's important to note that"      |
//! | text      | Fora de qualquer problema          | (qualquer trecho sem marcação)     |
//!
//! ## Prioridade
//!
//! O travessão tem prioridade `0` (a mais alta); as demais categorias têm
//! prioridade `1`. Em empates, vence a primeira categoria na ordem de
//! [`IssueCategory::ALL`].

use serde::{Deserialize, Serialize};

/// Categorias de problema reconhecidas pelo motor.
///
/// A ordem das variantes é a ordem de varredura: ela decide o desempate entre
/// correspondências de mesma prioridade que disputam o mesmo trecho.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCategory {
    /// **Travessão**: `—` e variantes próximas (meia-risca, barra horizontal).
    EmDash,
    /// **Clichê**: expressão fixa usada em excesso. Ex: "think outside the box".
    Cliche,
    /// **Jargão**: palavra da moda corporativa. Ex: "synergy", "best practices".
    Jargon,
    /// **Marcador de IA**: frase estatisticamente associada a texto gerado. Ex: "delve into".
    AiTell,
}

impl IssueCategory {
    /// Todas as categorias, na ordem fixa de varredura.
    pub const ALL: [IssueCategory; 4] = [
        IssueCategory::EmDash,
        IssueCategory::Cliche,
        IssueCategory::Jargon,
        IssueCategory::AiTell,
    ];

    /// Nome da categoria como string (para serialização, logs e UI)
    pub fn name(&self) -> &'static str {
        match self {
            IssueCategory::EmDash => "em_dash",
            IssueCategory::Cliche => "cliche",
            IssueCategory::Jargon => "jargon",
            IssueCategory::AiTell => "ai_tell",
        }
    }

    /// Rótulo legível para a interface
    pub fn label(&self) -> &'static str {
        match self {
            IssueCategory::EmDash => "Em-dash",
            IssueCategory::Cliche => "Cliché",
            IssueCategory::Jargon => "Jargon",
            IssueCategory::AiTell => "AI tell",
        }
    }

    /// Cor CSS para highlight na UI
    pub fn color(&self) -> &'static str {
        match self {
            IssueCategory::EmDash => "#ef4444",  // vermelho
            IssueCategory::Cliche => "#f59e0b",  // âmbar
            IssueCategory::Jargon => "#3b82f6",  // azul
            IssueCategory::AiTell => "#8b5cf6",  // violeta
        }
    }

    /// Prioridade da categoria: menor valor vence.
    pub fn priority(&self) -> u8 {
        match self {
            IssueCategory::EmDash => 0,
            _ => 1,
        }
    }

    /// Categorias cujas sugestões são sorteadas (no máximo 4 por segmento).
    /// As sugestões de travessão são devolvidas inteiras.
    pub fn samples_suggestions(&self) -> bool {
        !matches!(self, IssueCategory::EmDash)
    }

    /// Tenta parsear a partir de string (ex: "jargon" → Some(Jargon))
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "em_dash" => Some(IssueCategory::EmDash),
            "cliche" => Some(IssueCategory::Cliche),
            "jargon" => Some(IssueCategory::Jargon),
            "ai_tell" => Some(IssueCategory::AiTell),
            _ => None,
        }
    }
}

impl std::fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Tipo de um segmento da saída: texto comum ou uma das categorias de problema.
///
/// Serializa como string simples (`"text"`, `"em_dash"`, `"cliche"`, ...),
/// que é o contrato consumido pela camada de serviço.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKind {
    Text,
    EmDash,
    Cliche,
    Jargon,
    AiTell,
}

impl SegmentKind {
    /// Categoria de problema deste segmento (`None` para texto comum)
    pub fn category(&self) -> Option<IssueCategory> {
        match self {
            SegmentKind::Text => None,
            SegmentKind::EmDash => Some(IssueCategory::EmDash),
            SegmentKind::Cliche => Some(IssueCategory::Cliche),
            SegmentKind::Jargon => Some(IssueCategory::Jargon),
            SegmentKind::AiTell => Some(IssueCategory::AiTell),
        }
    }

    pub fn name(&self) -> &'static str {
        self.category().map(|c| c.name()).unwrap_or("text")
    }

    pub fn is_issue(&self) -> bool {
        !matches!(self, SegmentKind::Text)
    }
}

impl From<IssueCategory> for SegmentKind {
    fn from(category: IssueCategory) -> Self {
        match category {
            IssueCategory::EmDash => SegmentKind::EmDash,
            IssueCategory::Cliche => SegmentKind::Cliche,
            IssueCategory::Jargon => SegmentKind::Jargon,
            IssueCategory::AiTell => SegmentKind::AiTell,
        }
    }
}

impl std::fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_names_roundtrip() {
        for category in IssueCategory::ALL {
            assert_eq!(IssueCategory::from_str(category.name()), Some(category));
        }
        assert_eq!(IssueCategory::from_str("text"), None);
    }

    #[test]
    fn test_em_dash_has_highest_priority() {
        assert_eq!(IssueCategory::EmDash.priority(), 0);
        for category in &IssueCategory::ALL[1..] {
            assert_eq!(category.priority(), 1);
        }
    }

    #[test]
    fn test_scan_order_is_fixed() {
        assert_eq!(
            IssueCategory::ALL,
            [
                IssueCategory::EmDash,
                IssueCategory::Cliche,
                IssueCategory::Jargon,
                IssueCategory::AiTell
            ]
        );
    }

    #[test]
    fn test_segment_kind_serializes_as_snake_case() {
        assert_eq!(serde_json::to_string(&SegmentKind::Text).unwrap(), "\"text\"");
        assert_eq!(serde_json::to_string(&SegmentKind::AiTell).unwrap(), "\"ai_tell\"");
        assert_eq!(SegmentKind::from(IssueCategory::EmDash).name(), "em_dash");
        assert!(!SegmentKind::Text.is_issue());
    }
}
