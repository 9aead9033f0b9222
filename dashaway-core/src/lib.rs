//! # dashaway-core: Anotador de Vícios de Escrita
//!
//! Este crate analisa um texto em inglês e marca quatro tipos de "vício de
//! escrita": travessões, clichês, jargão corporativo e marcadores típicos de
//! texto gerado por IA. Cada trecho marcado recebe sugestões de troca, e o
//! texto inteiro recebe uma nota de legibilidade (Flesch-Kincaid).
//!
//! ## Arquitetura do Sistema
//!
//! O dado flui em linha reta, sempre sobre o texto original:
//!
//! 1.  **Entrada**: Texto bruto (String).
//! 2.  **Léxicos** ([`lexicon`]): Quatro tabelas `frase -> sugestões`, carregadas uma vez por processo.
//! 3.  **Padrões** ([`matcher`]): Uma expressão regular por categoria; todas as ocorrências, mesmo sobrepostas.
//! 4.  **Segmentação** ([`segmenter`]): Partição sem sobreposição, resolução de conflitos, sugestões e fusão.
//! 5.  **Legibilidade** ([`normalizer`], [`readability`]): Nota calculada sobre uma cópia limpa do texto.
//! 6.  **Saída**: [`AnalysisResult`] com a lista de [`Segment`] e a nota.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use dashaway_core::{AnalysisEngine, SegmentKind};
//!
//! // 1. Instancia o motor (léxicos compartilhados, padrões compilados)
//! let engine = AnalysisEngine::new();
//!
//! // 2. Analisa o texto
//! let result = engine.process("We need to leverage synergy—now.");
//!
//! // 3. O texto original é reconstruído juntando os segmentos
//! let joined: String = result.segments.iter().map(|s| s.content.as_str()).collect();
//! assert_eq!(joined, "We need to leverage synergy—now.");
//!
//! // 4. Exibe os trechos marcados
//! for segment in result.segments.iter().filter(|s| s.kind != SegmentKind::Text) {
//!     println!("{} ({}) -> {:?}", segment.content, segment.kind, segment.suggestions);
//! }
//! ```
//!
//! ## Módulos Principais
//!
//! - [`engine`]: Orquestrador que conecta todos os estágios (síncrono, em lote e em streaming).
//! - [`segmenter`]: O algoritmo de partição e resolução de sobreposições.
//! - [`readability`]: Nota Flesch-Kincaid, sentenças longas e palavras complexas.
//! - [`demo`]: Textos de exemplo para a interface.

pub mod category;
pub mod demo;
pub mod engine;
pub mod error;
pub mod lexicon;
pub mod matcher;
pub mod normalizer;
pub mod readability;
pub mod segmenter;
pub mod stats;
pub mod tokenizer;

pub use category::{IssueCategory, SegmentKind};
pub use engine::{AnalysisEngine, AnalysisResult, EngineEvent};
pub use error::{EngineError, EngineResult};
pub use lexicon::{Lexicon, Lexicons};
pub use readability::ReadabilityReport;
pub use segmenter::Segment;
pub use stats::IssueCounts;
