//! # Léxicos: Frases Problemáticas e Sugestões
//!
//! Cada categoria tem uma tabela estática `frase → [sugestões]`. As tabelas
//! servem a dois propósitos:
//!
//! 1. As **chaves** alimentam o compilador de padrões ([`crate::matcher`]).
//! 2. Os **valores** são consultados depois da segmentação, para anexar
//!    sugestões a cada trecho marcado.
//!
//! O conjunto é carregado uma única vez por processo ([`Lexicons::shared`]) e
//! nunca é alterado depois disso: o motor recebe um `Arc` e pode ser usado de
//! várias threads sem lock algum.
//!
//! ## Consulta
//!
//! A consulta é exata sobre a chave em minúsculas; quem chama deve passar o
//! trecho já convertido. Chave ausente não é erro: devolve uma lista vazia.

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::category::IssueCategory;

pub mod ai_tells;
pub mod cliches;
pub mod em_dash;
pub mod jargon;

static SHARED: Lazy<Arc<Lexicons>> = Lazy::new(|| Arc::new(Lexicons::load()));

/// Uma tabela `frase → sugestões` de uma única categoria.
///
/// Preserva a ordem de declaração das frases, e indexa as chaves para
/// consulta em O(1).
#[derive(Debug, Clone)]
pub struct Lexicon {
    category: IssueCategory,
    entries: Vec<(String, Vec<String>)>,
    index: HashMap<String, usize>,
}

impl Lexicon {
    pub fn new(category: IssueCategory) -> Self {
        Self {
            category,
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Constrói a partir de uma tabela estática.
    pub fn from_table(category: IssueCategory, table: &[(&str, &[&str])]) -> Self {
        let mut lexicon = Self::new(category);
        for (phrase, suggestions) in table {
            lexicon.insert(phrase, suggestions.iter().copied());
        }
        lexicon
    }

    /// Adiciona uma entrada. A chave é normalizada para minúsculas; se ela já
    /// existir, a primeira declaração é mantida.
    pub fn insert<'a>(&mut self, phrase: &str, suggestions: impl IntoIterator<Item = &'a str>) {
        let key = phrase.to_lowercase();
        if key.is_empty() || self.index.contains_key(&key) {
            return;
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries
            .push((key, suggestions.into_iter().map(str::to_string).collect()));
    }

    pub fn category(&self) -> IssueCategory {
        self.category
    }

    /// Frases da tabela, na ordem de declaração.
    pub fn phrases(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(phrase, _)| phrase.as_str())
    }

    /// Sugestões para uma chave já em minúsculas (vazio se não houver).
    pub fn suggestions(&self, key: &str) -> &[String] {
        self.index
            .get(key)
            .map(|&i| self.entries[i].1.as_slice())
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// As quatro tabelas, uma por categoria.
#[derive(Debug, Clone)]
pub struct Lexicons {
    pub em_dash: Lexicon,
    pub cliche: Lexicon,
    pub jargon: Lexicon,
    pub ai_tell: Lexicon,
}

impl Lexicons {
    /// Carrega as tabelas embutidas no binário.
    pub fn load() -> Self {
        Self {
            em_dash: Lexicon::from_table(IssueCategory::EmDash, em_dash::EM_DASH),
            cliche: Lexicon::from_table(IssueCategory::Cliche, cliches::CLICHES),
            jargon: Lexicon::from_table(IssueCategory::Jargon, jargon::JARGON),
            ai_tell: Lexicon::from_table(IssueCategory::AiTell, ai_tells::AI_TELLS),
        }
    }

    /// Conjunto compartilhado do processo, carregado no primeiro acesso.
    pub fn shared() -> Arc<Lexicons> {
        Arc::clone(&SHARED)
    }

    /// Conjunto sem nenhuma frase (útil para montar léxicos de teste).
    pub fn empty() -> Self {
        Self {
            em_dash: Lexicon::new(IssueCategory::EmDash),
            cliche: Lexicon::new(IssueCategory::Cliche),
            jargon: Lexicon::new(IssueCategory::Jargon),
            ai_tell: Lexicon::new(IssueCategory::AiTell),
        }
    }

    pub fn get(&self, category: IssueCategory) -> &Lexicon {
        match category {
            IssueCategory::EmDash => &self.em_dash,
            IssueCategory::Cliche => &self.cliche,
            IssueCategory::Jargon => &self.jargon,
            IssueCategory::AiTell => &self.ai_tell,
        }
    }

    pub fn get_mut(&mut self, category: IssueCategory) -> &mut Lexicon {
        match category {
            IssueCategory::EmDash => &mut self.em_dash,
            IssueCategory::Cliche => &mut self.cliche,
            IssueCategory::Jargon => &mut self.jargon,
            IssueCategory::AiTell => &mut self.ai_tell,
        }
    }
}

impl Default for Lexicons {
    fn default() -> Self {
        Self::load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_fills_every_category() {
        let lexicons = Lexicons::load();
        for category in IssueCategory::ALL {
            let lexicon = lexicons.get(category);
            assert_eq!(lexicon.category(), category);
            assert!(!lexicon.is_empty(), "léxico vazio: {}", category);
        }
    }

    #[test]
    fn test_keys_are_lowercase() {
        let lexicons = Lexicons::load();
        for category in IssueCategory::ALL {
            for phrase in lexicons.get(category).phrases() {
                assert_eq!(phrase, phrase.to_lowercase());
            }
        }
    }

    #[test]
    fn test_missing_key_yields_empty_list() {
        let lexicons = Lexicons::load();
        assert!(lexicons.jargon.suggestions("not a buzzword").is_empty());
        assert!(!lexicons.jargon.suggestions("leverage").is_empty());
    }

    #[test]
    fn test_em_dash_suggests_plain_hyphen() {
        let lexicons = Lexicons::load();
        assert!(lexicons
            .em_dash
            .suggestions("\u{2014}")
            .iter()
            .any(|s| s == "-"));
    }

    #[test]
    fn test_first_declaration_wins_on_duplicate() {
        let mut lexicon = Lexicon::new(IssueCategory::Cliche);
        lexicon.insert("Win-Win", ["first"]);
        lexicon.insert("win-win", ["second"]);
        assert_eq!(lexicon.len(), 1);
        assert_eq!(lexicon.suggestions("win-win"), &["first".to_string()]);
    }

    #[test]
    fn test_shared_is_loaded_once() {
        let a = Lexicons::shared();
        let b = Lexicons::shared();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
