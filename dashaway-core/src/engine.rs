//! # Motor de Análise: Orquestrador com Eventos Observáveis
//!
//! O motor coordena os módulos (padrões, segmentador, normalizador,
//! legibilidade) e expõe as duas operações públicas:
//!
//! - [`AnalysisEngine::process`]: segmentos anotados + nota de legibilidade;
//! - [`AnalysisEngine::readability`]: relatório de legibilidade.
//!
//! Também emite eventos em cada passo via um canal (`mpsc`), permitindo que o
//! servidor WebSocket transmita o progresso em tempo real para o cliente.
//!
//! ## Falhas
//!
//! O chamador **sempre** recebe um resultado bem formado. Se algo der errado
//! durante a análise, o resultado degradado é o texto inteiro como um único
//! segmento `text`, nota `0.0` e a mensagem em `error`.

use std::sync::{mpsc, Arc};

use rand::Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::category::IssueCategory;
use crate::error::{guarded, EngineError, EngineResult};
use crate::lexicon::Lexicons;
use crate::matcher::{Match, MatcherSet};
use crate::normalizer::normalize_for_readability;
use crate::readability::{self, ReadabilityReport};
use crate::segmenter::{segment, Segment};
use crate::stats::IssueCounts;

/// Resultado da operação `process`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub segments: Vec<Segment>,
    pub readability_score: f64,
    /// Presente só no resultado degradado.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalysisResult {
    pub fn new(segments: Vec<Segment>, readability_score: f64) -> Self {
        Self {
            segments,
            readability_score,
            error: None,
        }
    }

    /// Resultado de texto vazio: um segmento `text` vazio e nota zero.
    pub fn empty() -> Self {
        Self::new(vec![Segment::text("")], 0.0)
    }

    /// Resultado degradado: o texto original intacto, sem anotações.
    pub fn fallback(text: &str, error: &EngineError) -> Self {
        Self {
            segments: vec![Segment::text(text)],
            readability_score: 0.0,
            error: Some(error.to_string()),
        }
    }

    pub fn counts(&self) -> IssueCounts {
        IssueCounts::from_segments(&self.segments)
    }

    pub fn is_degraded(&self) -> bool {
        self.error.is_some()
    }
}

/// Eventos emitidos durante a análise em streaming.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum EngineEvent {
    /// **Passo 1**: uma categoria terminou a varredura (emitido para as quatro, em ordem).
    MatchesFound {
        category: IssueCategory,
        count: usize,
    },
    /// **Passo 2**: partição concluída, já com a fusão aplicada.
    SegmentsBuilt { total: usize },
    /// **Passo 3**: nota calculada sobre a variante normalizada.
    ReadabilityScored { score: f64 },
    /// **Conclusão**: resultado final (ou o degradado, depois de um `Error`).
    Done { result: AnalysisResult },
    /// **Falha**: a análise não terminou; um `Done` com o resultado degradado vem em seguida.
    Error { message: String },
}

/// O motor de análise.
///
/// Só lê estado imutável (léxicos e padrões compilados), então uma instância
/// pode ser compartilhada entre threads e chamadas concorrentes.
#[derive(Debug, Clone)]
pub struct AnalysisEngine {
    lexicons: Arc<Lexicons>,
    matchers: MatcherSet,
}

impl AnalysisEngine {
    /// Cria o motor com os léxicos embutidos do processo.
    pub fn new() -> Self {
        Self::with_lexicons(Lexicons::shared())
    }

    /// Cria o motor com léxicos próprios e compila os padrões uma vez.
    pub fn with_lexicons(lexicons: Arc<Lexicons>) -> Self {
        let matchers = MatcherSet::build(&lexicons);
        Self { lexicons, matchers }
    }

    pub fn matchers(&self) -> &MatcherSet {
        &self.matchers
    }

    /// Analisa o texto com uma fonte de aleatoriedade não determinística.
    pub fn process(&self, text: &str) -> AnalysisResult {
        self.process_with_rng(text, &mut rand::thread_rng())
    }

    /// Analisa o texto sorteando as sugestões com o gerador informado.
    ///
    /// Com um gerador semeado o resultado é reprodutível.
    pub fn process_with_rng<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> AnalysisResult {
        if text.is_empty() {
            return AnalysisResult::empty();
        }

        match self.try_process(text, rng) {
            Ok(result) => result,
            Err(err) => {
                warn!(error = %err, text_len = text.len(), "análise falhou, devolvendo resultado degradado");
                AnalysisResult::fallback(text, &err)
            }
        }
    }

    /// Mesma análise de [`process_with_rng`](Self::process_with_rng), mas
    /// devolve a falha em vez do resultado degradado.
    pub fn try_process<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> EngineResult<AnalysisResult> {
        guarded(|| {
            let matches = self.matchers.find_matches(text);
            let segments = segment(text, &matches, &self.lexicons, rng);
            let score = readability::score(&normalize_for_readability(text));
            debug!(
                matches = matches.len(),
                segments = segments.len(),
                issues = segments.iter().filter(|s| s.is_issue()).count(),
                score,
                "texto analisado"
            );
            AnalysisResult::new(segments, score)
        })
    }

    /// Relatório de legibilidade do texto.
    pub fn readability(&self, text: &str) -> ReadabilityReport {
        readability::readability(text)
    }

    /// Analisa vários textos em paralelo; a saída segue a ordem da entrada.
    pub fn process_batch(&self, texts: &[String]) -> Vec<AnalysisResult> {
        texts.par_iter().map(|text| self.process(text)).collect()
    }

    /// Executa a análise enviando eventos de progresso em tempo real.
    ///
    /// # Fluxo de Eventos
    /// 1. `MatchesFound`: uma vez por categoria, na ordem de varredura.
    /// 2. `SegmentsBuilt`: partição concluída.
    /// 3. `ReadabilityScored`: nota calculada.
    /// 4. `Done`: resultado final.
    ///
    /// Em caso de falha: `Error` seguido de `Done` com o resultado degradado.
    pub fn analyze_streaming(&self, text: &str, tx: mpsc::Sender<EngineEvent>) {
        // Texto vazio não passa pelos estágios: só o resultado final.
        if text.is_empty() {
            let _ = tx.send(EngineEvent::Done {
                result: AnalysisResult::empty(),
            });
            return;
        }

        let mut rng = rand::thread_rng();

        let outcome = guarded(|| {
            let matches = self.matchers.find_matches(text);
            for category in IssueCategory::ALL {
                let _ = tx.send(EngineEvent::MatchesFound {
                    category,
                    count: count_in(&matches, category),
                });
            }

            let segments = segment(text, &matches, &self.lexicons, &mut rng);
            let _ = tx.send(EngineEvent::SegmentsBuilt {
                total: segments.len(),
            });

            let score = readability::score(&normalize_for_readability(text));
            let _ = tx.send(EngineEvent::ReadabilityScored { score });

            AnalysisResult::new(segments, score)
        });

        let result = match outcome {
            Ok(result) => result,
            Err(err) => {
                warn!(error = %err, "análise em streaming falhou");
                let _ = tx.send(EngineEvent::Error {
                    message: err.to_string(),
                });
                AnalysisResult::fallback(text, &err)
            }
        };

        let _ = tx.send(EngineEvent::Done { result });
    }
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn count_in(matches: &[Match], category: IssueCategory) -> usize {
    matches.iter().filter(|m| m.category == category).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::SegmentKind;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded(text: &str) -> AnalysisResult {
        AnalysisEngine::new().process_with_rng(text, &mut StdRng::seed_from_u64(2024))
    }

    fn kinds(result: &AnalysisResult) -> Vec<SegmentKind> {
        result.segments.iter().map(|s| s.kind).collect()
    }

    #[test]
    fn test_process_empty() {
        let result = AnalysisEngine::new().process("");
        assert_eq!(result.segments, vec![Segment::text("")]);
        assert_eq!(result.readability_score, 0.0);
        assert!(result.error.is_none());
    }

    #[test]
    fn test_process_scenario() {
        let result = seeded("We need to leverage synergy—now.");

        assert_eq!(
            kinds(&result),
            vec![
                SegmentKind::Text,
                SegmentKind::Jargon,
                SegmentKind::Text,
                SegmentKind::Jargon,
                SegmentKind::EmDash,
                SegmentKind::Text,
            ]
        );
        assert_eq!(result.segments[1].content, "leverage");
        assert_eq!(result.segments[3].content, "synergy");
        assert!(!result.segments[1].suggestions.is_empty());
        assert!(!result.segments[3].suggestions.is_empty());
        assert_eq!(result.segments[4].content, "—");
        assert!(result.segments[4].suggestions.contains(&"-".to_string()));
        assert_eq!(result.segments.iter().filter(|s| s.is_issue()).count(), 3);
    }

    #[test]
    fn test_process_without_issues() {
        let result = seeded("The cat sat on the mat.");
        assert_eq!(result.segments, vec![Segment::text("The cat sat on the mat.")]);
        assert_eq!(result.counts().total(), 0);
    }

    #[test]
    fn test_process_is_lossless_and_typed_consistently() {
        let engine = AnalysisEngine::new();
        let text = "Furthermore, at the end of the day we leverage synergy—now. Let's circle back.";

        let a = engine.process(text);
        let b = engine.process(text);

        let joined: String = a.segments.iter().map(|s| s.content.as_str()).collect();
        assert_eq!(joined, text);
        assert_eq!(kinds(&a), kinds(&b));
        let contents = |r: &AnalysisResult| r.segments.iter().map(|s| s.content.clone()).collect::<Vec<_>>();
        assert_eq!(contents(&a), contents(&b));
    }

    #[test]
    fn test_capitalized_match() {
        let result = seeded("Leverage the data.");
        let first = &result.segments[0];

        assert_eq!(first.kind, SegmentKind::Jargon);
        assert!(!first.suggestions.is_empty());
        assert!(first.suggestions.len() <= 4);
        assert!(first
            .suggestions
            .iter()
            .all(|s| s.chars().next().map_or(false, char::is_uppercase)));
    }

    #[test]
    fn test_counts() {
        let result = seeded("Furthermore, we leverage synergy—now.");
        let counts = result.counts();

        assert_eq!(counts.ai_tell, 1);
        assert_eq!(counts.jargon, 2);
        assert_eq!(counts.em_dash, 1);
        assert_eq!(counts.cliche, 0);
    }

    #[test]
    fn test_same_seed_same_result() {
        let text = "At the end of the day, we need to circle back and leverage synergy.";
        assert_eq!(seeded(text), seeded(text));
    }

    #[test]
    fn test_fallback_on_panic() {
        let err = guarded(|| -> u32 { panic!("estado inválido") }).unwrap_err();
        assert!(err.to_string().contains("estado inválido"));

        let result = AnalysisResult::fallback("texto original", &err);
        assert_eq!(result.segments, vec![Segment::text("texto original")]);
        assert_eq!(result.readability_score, 0.0);
        assert!(result.is_degraded());
    }

    /// Fonte de aleatoriedade que entra em pânico ao primeiro uso.
    struct ExhaustedRng;

    impl rand::RngCore for ExhaustedRng {
        fn next_u32(&mut self) -> u32 {
            panic!("fonte de aleatoriedade esgotada")
        }

        fn next_u64(&mut self) -> u64 {
            panic!("fonte de aleatoriedade esgotada")
        }

        fn fill_bytes(&mut self, _dest: &mut [u8]) {
            panic!("fonte de aleatoriedade esgotada")
        }

        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
            panic!("fonte de aleatoriedade esgotada")
        }
    }

    #[test]
    fn test_process_degrades_when_stage_panics() {
        let engine = AnalysisEngine::new();
        let text = "We leverage synergy.";
        let result = engine.process_with_rng(text, &mut ExhaustedRng);

        assert!(result.is_degraded());
        assert!(result
            .error
            .as_deref()
            .is_some_and(|e| e.contains("fonte de aleatoriedade esgotada")));
        assert_eq!(result.segments, vec![Segment::text(text)]);
        assert_eq!(result.readability_score, 0.0);
    }

    #[test]
    fn test_error_field_omitted_when_absent() {
        let json = serde_json::to_value(seeded("Plain words here.")).unwrap();
        assert!(json.get("error").is_none());
        assert_eq!(json["segments"][0]["type"], "text");
    }

    #[test]
    fn test_process_batch_keeps_order() {
        let engine = AnalysisEngine::new();
        let texts = vec![
            "Plain text.".to_string(),
            "".to_string(),
            "We leverage synergy.".to_string(),
        ];
        let results = engine.process_batch(&texts);

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].segments[0].content, "Plain text.");
        assert_eq!(results[1], AnalysisResult::empty());
        assert_eq!(results[2].counts().jargon, 2);
    }

    #[test]
    fn test_engine_events_streaming() {
        let engine = AnalysisEngine::new();
        let (tx, rx) = mpsc::channel();
        engine.analyze_streaming("We need to leverage synergy—now.", tx);

        let events: Vec<EngineEvent> = rx.try_iter().collect();
        assert_eq!(events.len(), 7);

        let categories: Vec<IssueCategory> = events
            .iter()
            .filter_map(|e| match e {
                EngineEvent::MatchesFound { category, .. } => Some(*category),
                _ => None,
            })
            .collect();
        assert_eq!(categories, IssueCategory::ALL.to_vec());

        assert!(matches!(events[4], EngineEvent::SegmentsBuilt { total: 6 }));
        assert!(matches!(events[5], EngineEvent::ReadabilityScored { .. }));
        match events.last().unwrap() {
            EngineEvent::Done { result } => assert_eq!(result.counts().jargon, 2),
            other => panic!("último evento deveria ser Done, veio {:?}", other),
        }
    }

    #[test]
    fn test_streaming_empty_text_only_done() {
        let engine = AnalysisEngine::new();
        let (tx, rx) = mpsc::channel();
        engine.analyze_streaming("", tx);

        let events: Vec<EngineEvent> = rx.try_iter().collect();
        assert_eq!(events.len(), 1);
        match &events[0] {
            EngineEvent::Done { result } => assert_eq!(*result, AnalysisResult::empty()),
            other => panic!("esperava apenas Done, veio {:?}", other),
        }
    }

    #[test]
    fn test_event_serialization_shape() {
        let event = EngineEvent::MatchesFound {
            category: IssueCategory::AiTell,
            count: 3,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "MatchesFound");
        assert_eq!(json["data"]["category"], "ai_tell");
        assert_eq!(json["data"]["count"], 3);
    }

    #[test]
    fn test_readability_delegates() {
        let report = AnalysisEngine::new().readability("");
        assert_eq!(report.readability_score, 0.0);
    }
}
