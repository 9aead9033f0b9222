//! # Segmentador: Partição do Texto em Trechos Rotulados
//!
//! Recebe o texto original e **todas** as ocorrências brutas (de todas as
//! categorias, possivelmente sobrepostas) e produz uma sequência ordenada de
//! segmentos sem sobreposição que cobre o texto inteiro.
//!
//! ## Algoritmo
//!
//! 1. **Pontos de corte**: `{0, len}` mais o início e o fim de cada ocorrência, ordenados.
//! 2. **Segmentos candidatos**: cada par consecutivo de cortes `(a, b)` com `a < b`.
//! 3. **Dono do trecho**: calcula o ponto médio `a + (b - a) / 2`. Entre as
//!    ocorrências que contêm esse ponto, vence a de menor prioridade; em empate,
//!    a primeira na ordem da varredura. Sem ocorrência, o segmento é `text`.
//! 4. **Sugestões**: só quando o candidato coincide exatamente com a ocorrência
//!    vencedora (um fragmento de ocorrência maior fica sem sugestões). Se o
//!    trecho começa com maiúscula, a primeira letra de cada sugestão também vira maiúscula.
//! 5. **Amostragem**: clichê, jargão e marcador de IA mostram no máximo 4
//!    sugestões, sorteadas sem reposição.
//! 6. **Fusão**: segmentos vizinhos do mesmo tipo e ambos sem sugestões viram um só.
//!
//! Como os cortes vêm das bordas de todas as ocorrências, o interior de um
//! candidato está inteiro dentro ou inteiro fora de cada ocorrência: o ponto
//! médio é só um representante sem ambiguidade nas bordas.
//!
//! ## Exemplo
//!
//! ```text
//! "We need to leverage synergy—now."
//!
//! text    "We need to "
//! jargon  "leverage"
//! text    " "
//! jargon  "synergy"
//! em_dash "—"
//! text    "now."
//! ```

use std::collections::BTreeSet;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::category::{IssueCategory, SegmentKind};
use crate::lexicon::Lexicons;
use crate::matcher::Match;

/// Máximo de sugestões exibidas por segmento nas categorias sorteadas.
pub const MAX_SUGGESTIONS: usize = 4;

/// Um trecho contíguo e rotulado do texto original.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    #[serde(rename = "type")]
    pub kind: SegmentKind,
    pub content: String,
    pub suggestions: Vec<String>,
}

impl Segment {
    /// Segmento de texto comum, sem sugestões.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            kind: SegmentKind::Text,
            content: content.into(),
            suggestions: Vec::new(),
        }
    }

    pub fn is_issue(&self) -> bool {
        self.kind.is_issue()
    }

    /// Pode absorver o próximo segmento na fase de fusão?
    fn merges_with(&self, next: &Segment) -> bool {
        self.kind == next.kind && self.suggestions.is_empty() && next.suggestions.is_empty()
    }
}

/// Executa os seis passos e devolve a partição final.
///
/// Texto vazio resulta em um único segmento `text` vazio.
pub fn segment<R: Rng + ?Sized>(
    text: &str,
    matches: &[Match],
    lexicons: &Lexicons,
    rng: &mut R,
) -> Vec<Segment> {
    if text.is_empty() {
        return vec![Segment::text("")];
    }
    merge_segments(build_segments(text, matches, lexicons, rng))
}

/// Passo 1: pontos de corte ordenados e sem repetição.
pub fn cut_points(text_len: usize, matches: &[Match]) -> Vec<usize> {
    let mut points = BTreeSet::new();
    points.insert(0);
    points.insert(text_len);
    for m in matches {
        points.insert(m.start.min(text_len));
        points.insert(m.end.min(text_len));
    }
    points.into_iter().collect()
}

/// Passo 3: a ocorrência dona do offset, se houver.
///
/// Só uma prioridade *estritamente* menor substitui a atual, então em empate
/// fica a primeira ocorrência da lista.
pub fn resolve_owner(matches: &[Match], offset: usize) -> Option<&Match> {
    let mut best: Option<&Match> = None;
    for m in matches.iter().filter(|m| m.contains(offset)) {
        match best {
            Some(current) if m.priority >= current.priority => {}
            _ => best = Some(m),
        }
    }
    best
}

/// Passos 2 a 5: segmentos candidatos, já com tipo e sugestões, antes da fusão.
pub fn build_segments<R: Rng + ?Sized>(
    text: &str,
    matches: &[Match],
    lexicons: &Lexicons,
    rng: &mut R,
) -> Vec<Segment> {
    let points = cut_points(text.len(), matches);
    let mut segments = Vec::with_capacity(points.len());

    for window in points.windows(2) {
        let (start, end) = (window[0], window[1]);
        if start >= end {
            continue;
        }

        let content = &text[start..end];
        let midpoint = start + (end - start) / 2;
        let owner = resolve_owner(matches, midpoint);

        let kind = owner
            .map(|m| SegmentKind::from(m.category))
            .unwrap_or(SegmentKind::Text);

        let mut suggestions = match owner {
            Some(m) if m.start == start && m.end == end => {
                suggestions_for(m.category, content, lexicons, rng)
            }
            _ => Vec::new(),
        };

        if starts_uppercase(content) {
            suggestions = suggestions.iter().map(|s| capitalize_first(s)).collect();
        }

        segments.push(Segment {
            kind,
            content: content.to_string(),
            suggestions,
        });
    }

    segments
}

/// Passo 6: funde vizinhos do mesmo tipo quando nenhum dos dois tem sugestões.
pub fn merge_segments(segments: Vec<Segment>) -> Vec<Segment> {
    let mut merged: Vec<Segment> = Vec::with_capacity(segments.len());
    for segment in segments {
        match merged.last_mut() {
            Some(current) if current.merges_with(&segment) => {
                current.content.push_str(&segment.content);
            }
            _ => merged.push(segment),
        }
    }
    merged
}

/// Sugestões de uma ocorrência completa.
///
/// Travessões consultam o caractere literal e devolvem a lista inteira; as
/// demais categorias consultam o trecho em minúsculas e sorteiam até
/// [`MAX_SUGGESTIONS`] sugestões.
pub fn suggestions_for<R: Rng + ?Sized>(
    category: IssueCategory,
    content: &str,
    lexicons: &Lexicons,
    rng: &mut R,
) -> Vec<String> {
    let lexicon = lexicons.get(category);
    if !category.samples_suggestions() {
        return lexicon.suggestions(content).to_vec();
    }
    sample_suggestions(lexicon.suggestions(&content.to_lowercase()), rng)
}

/// Sorteia até [`MAX_SUGGESTIONS`] itens distintos da lista.
pub fn sample_suggestions<R: Rng + ?Sized>(pool: &[String], rng: &mut R) -> Vec<String> {
    let amount = pool.len().min(MAX_SUGGESTIONS);
    rand::seq::index::sample(rng, pool.len(), amount)
        .iter()
        .map(|i| pool[i].clone())
        .collect()
}

fn starts_uppercase(content: &str) -> bool {
    content.chars().next().is_some_and(char::is_uppercase)
}

/// Primeira letra em maiúscula; o restante fica como está.
///
/// O restante NÃO é passado para minúsculas, ao contrário de um
/// "capitalize" clássico: siglas dentro da sugestão ("AI-assisted",
/// "use AI tools") chegam intactas.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
