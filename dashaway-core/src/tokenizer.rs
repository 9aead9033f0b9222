//! # Tokenizador e Divisor de Sentenças
//!
//! Divide o texto em palavras e pontuações preservando a posição original
//! (offsets em bytes), e em sentenças para a contagem de frases longas.
//!
//! A segmentação segue as regras de fronteira do Unicode (UAX #29) via
//! `unicode-segmentation`:
//!
//! - `"it's"` é uma palavra só (o apóstrofo fica dentro da palavra);
//! - `"end-to-end"` vira `"end"`, `"-"`, `"to"`, `"-"`, `"end"`;
//! - espaços em branco não geram tokens.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use dashaway_core::tokenizer::{split_sentences, tokenize};
//!
//! let tokens = tokenize("We need to leverage synergy.");
//! assert_eq!(tokens.len(), 6);
//! assert!(tokens[5].is_punctuation());
//!
//! let sentences = split_sentences("Short one. Another one!");
//! assert_eq!(sentences, vec!["Short one.", "Another one!"]);
//! ```

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// Um token extraído do texto original.
///
/// Mantém a referência exata da posição (`start`, `end`) para que trechos
/// possam ser recortados do texto sem alterar a formatação.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Token {
    /// O texto do token (ex: "leverage", ",", "it's").
    pub text: String,
    /// Índice de byte inicial no texto original (inclusive).
    pub start: usize,
    /// Índice de byte final no texto original (exclusivo).
    pub end: usize,
    /// Índice sequencial do token na lista (0, 1, 2...).
    pub index: usize,
}

impl Token {
    /// Token com pelo menos um caractere alfanumérico.
    pub fn is_word(&self) -> bool {
        self.text.chars().any(char::is_alphanumeric)
    }

    /// Token composto só de letras (apóstrofos internos não contam).
    pub fn is_alphabetic(&self) -> bool {
        !self.text.is_empty() && self.text.chars().all(char::is_alphabetic)
    }

    pub fn is_punctuation(&self) -> bool {
        !self.is_word()
    }
}

/// Tokeniza o texto em palavras e pontuação.
pub fn tokenize(text: &str) -> Vec<Token> {
    text.split_word_bound_indices()
        .filter(|(_, piece)| !piece.trim().is_empty())
        .enumerate()
        .map(|(index, (start, piece))| Token {
            text: piece.to_string(),
            start,
            end: start + piece.len(),
            index,
        })
        .collect()
}

/// Apenas os tokens de palavra, em ordem.
pub fn words(text: &str) -> Vec<Token> {
    let mut words: Vec<Token> = tokenize(text).into_iter().filter(Token::is_word).collect();
    for (i, token) in words.iter_mut().enumerate() {
        token.index = i;
    }
    words
}

/// Divide o texto em sentenças, recortadas do original e sem espaços nas bordas.
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split_sentence_bounds()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_keeps_offsets() {
        let text = "Leverage this, now.";
        let tokens = tokenize(text);
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();

        assert_eq!(texts, vec!["Leverage", "this", ",", "now", "."]);
        for token in &tokens {
            assert_eq!(&text[token.start..token.end], token.text);
        }
        assert_eq!(tokens[4].index, 4);
    }

    #[test]
    fn test_apostrophe_stays_inside_word() {
        let tokens = tokenize("it's fine");
        assert_eq!(tokens[0].text, "it's");
        assert!(!tokens[0].is_alphabetic());
        assert!(tokens[1].is_alphabetic());
    }

    #[test]
    fn test_words_skip_punctuation() {
        let words = words("One—two, three!");
        let texts: Vec<&str> = words.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["One", "two", "three"]);
        assert_eq!(words[2].index, 2);
    }

    #[test]
    fn test_split_sentences() {
        let sentences = split_sentences("The cat sat.  It was happy! Was it?");
        assert_eq!(sentences, vec!["The cat sat.", "It was happy!", "Was it?"]);
    }

    #[test]
    fn test_split_sentences_empty() {
        assert!(split_sentences("   ").is_empty());
    }
}
