//! # Legibilidade: Flesch-Kincaid Grade Level
//!
//! Fórmula: `0.39 * (palavras/sentenças) + 11.8 * (sílabas/palavras) - 15.59`
//!
//! O resultado estima a série escolar (EUA) necessária para compreender o
//! texto: quanto menor, mais fácil de ler.
//!
//! - A **nota** é calculada sobre a variante normalizada
//!   ([`crate::normalizer::normalize_for_readability`]).
//! - As listas de **sentenças longas** e **palavras complexas** são extraídas
//!   do texto original, para que o usuário veja o próprio texto nas dicas.
//!
//! ## Contagens
//!
//! - Palavras: itens separados por espaço que contêm ao menos um caractere alfanumérico.
//! - Sentenças: fronteiras Unicode; fragmentos com até 2 palavras não contam (mínimo 1).
//! - Sílabas: grupos de vogais, com ajuste para `e` mudo e finais `-ed`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::normalizer::normalize_for_readability;
use crate::tokenizer::{split_sentences, tokenize};

/// Sentenças com mais palavras do que isso entram em `long_sentences`.
pub const LONG_SENTENCE_WORDS: usize = 20;

/// Palavras com pelo menos esse número de sílabas entram em `complex_words`.
pub const COMPLEX_WORD_SYLLABLES: usize = 3;

/// Fragmentos com até esse número de palavras não contam como sentença.
const MIN_SENTENCE_WORDS: usize = 2;

/// Resposta da operação de legibilidade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityReport {
    /// Nota Flesch-Kincaid (duas casas decimais).
    pub readability_score: f64,
    /// Sentenças do texto original com mais de 20 palavras.
    pub long_sentences: Vec<String>,
    /// Palavras alfabéticas com 3 ou mais sílabas, na ordem em que aparecem.
    pub complex_words: Vec<String>,
}

/// Contagens usadas na fórmula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStats {
    pub sentences: usize,
    pub words: usize,
    pub syllables: usize,
}

impl TextStats {
    pub fn of(text: &str) -> Self {
        Self {
            sentences: sentence_count(text),
            words: lexicon_count(text),
            syllables: syllable_total(text),
        }
    }

    /// Aplica a fórmula; `0.0` quando não há palavras.
    pub fn grade(&self) -> f64 {
        if self.words == 0 || self.sentences == 0 {
            return 0.0;
        }
        let words_per_sentence = self.words as f64 / self.sentences as f64;
        let syllables_per_word = self.syllables as f64 / self.words as f64;
        let grade = 0.39f64.mul_add(words_per_sentence, 11.8 * syllables_per_word) - 15.59;
        round2(grade)
    }
}

/// Nota de legibilidade de um texto **já normalizado**.
///
/// Texto vazio (ou só espaços) vale `0.0`, sem divisão por zero.
pub fn score(normalized_text: &str) -> f64 {
    if normalized_text.trim().is_empty() {
        return 0.0;
    }
    let stats = TextStats::of(normalized_text);
    let grade = stats.grade();
    debug!(
        sentences = stats.sentences,
        words = stats.words,
        syllables = stats.syllables,
        grade,
        "nota de legibilidade calculada"
    );
    grade
}

/// Relatório completo: nota sobre a variante normalizada, listas sobre o original.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn readability(text: &str) -> ReadabilityReport {
    if text.trim().is_empty() {
        return ReadabilityReport {
            readability_score: 0.0,
            long_sentences: Vec::new(),
            complex_words: Vec::new(),
        };
    }

    ReadabilityReport {
        readability_score: score(&normalize_for_readability(text)),
        long_sentences: long_sentences(text),
        complex_words: complex_words(text),
    }
}

/// Sentenças do texto original com mais de [`LONG_SENTENCE_WORDS`] palavras.
pub fn long_sentences(text: &str) -> Vec<String> {
    split_sentences(text)
        .into_iter()
        .filter(|sentence| {
            tokenize(sentence).iter().filter(|t| t.is_word()).count() > LONG_SENTENCE_WORDS
        })
        .map(str::to_string)
        .collect()
}

/// Palavras alfabéticas do texto original com [`COMPLEX_WORD_SYLLABLES`]+ sílabas.
pub fn complex_words(text: &str) -> Vec<String> {
    tokenize(text)
        .into_iter()
        .filter(|t| t.is_alphabetic() && count_syllables(&t.text) >= COMPLEX_WORD_SYLLABLES)
        .map(|t| t.text)
        .collect()
}

/// Número de palavras (itens separados por espaço com algum alfanumérico).
pub fn lexicon_count(text: &str) -> usize {
    text.split_whitespace()
        .filter(|w| w.chars().any(char::is_alphanumeric))
        .count()
}

/// Número de sentenças, ignorando fragmentos curtos (mínimo 1).
pub fn sentence_count(text: &str) -> usize {
    let sentences = split_sentences(text);
    let counted = sentences
        .iter()
        .filter(|s| lexicon_count(s) > MIN_SENTENCE_WORDS)
        .count();
    counted.max(1)
}

/// Soma das sílabas de todas as palavras do texto.
pub fn syllable_total(text: &str) -> usize {
    text.split_whitespace()
        .map(|w| {
            let cleaned = w.trim_matches(|c: char| !c.is_alphabetic());
            if cleaned.is_empty() {
                0
            } else {
                count_syllables(cleaned)
            }
        })
        .sum()
}

/// Estima as sílabas de uma palavra em inglês por grupos de vogais.
///
/// Heurística (sem dicionário):
/// - cada sequência de vogais (`a e i o u y`) conta uma sílaba;
/// - `e` final mudo não conta (`"make"`), exceto em `-le` após consoante (`"table"`);
/// - `-ed` final não conta, exceto após `t` ou `d` (`"wanted"`);
/// - toda palavra com letras tem ao menos uma sílaba.
pub fn count_syllables(word: &str) -> usize {
    let letters: Vec<char> = word
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect();
    if letters.is_empty() {
        return 0;
    }
    if letters.len() <= 3 {
        return 1;
    }

    let mut count = 0;
    let mut prev_vowel = false;
    for &c in &letters {
        let vowel = is_vowel(c);
        if vowel && !prev_vowel {
            count += 1;
        }
        prev_vowel = vowel;
    }

    let n = letters.len();
    let last = letters[n - 1];
    let before_last = letters[n - 2];

    if last == 'e' && count > 1 {
        let consonant_le = before_last == 'l' && n >= 3 && !is_vowel(letters[n - 3]);
        if !consonant_le && !is_vowel(before_last) {
            count -= 1;
        }
    } else if last == 'd' && before_last == 'e' && count > 1 {
        let stem_end = if n >= 3 { letters[n - 3] } else { 'x' };
        if stem_end != 't' && stem_end != 'd' && !is_vowel(stem_end) {
            count -= 1;
        }
    }

    count.max(1)
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
