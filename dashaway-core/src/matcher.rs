//! # Compilador de Padrões: Uma Alternação por Categoria
//!
//! Para cada categoria de frases (clichê, jargão, marcador de IA) monta-se
//! uma única expressão regular com todas as frases escapadas, unidas por `|`
//! e com âncoras de fronteira de palavra dos dois lados. A busca ignora
//! maiúsculas/minúsculas.
//!
//! O travessão é um caso à parte: casa diretamente um conjunto fixo de
//! caracteres, sem âncoras (traços nunca são caracteres de palavra).
//!
//! ## Âncoras sintéticas
//!
//! O `\b` puro só funciona quando a frase começa e termina com caractere de
//! palavra. Para uma frase como `"sla (service level agreement)"`, que termina
//! em `)`, um `\b` no fim exigiria uma letra logo depois, o contrário do
//! desejado. Por isso a âncora é escolhida por lado:
//!
//! | Borda da frase       | Âncora | Efeito                                      |
//! |----------------------|--------|---------------------------------------------|
//! | caractere de palavra | `\b`   | o vizinho não é caractere de palavra        |
//! | outro caractere      | `\B`   | o vizinho também não é caractere de palavra |
//!
//! Nos dois casos o vizinho (se existir) nunca é caractere de palavra.
//!
//! ## Ordem das alternativas
//!
//! As frases de uma categoria entram na alternação da mais longa para a mais
//! curta, e não na ordem em que foram declaradas na tabela. Quando duas frases
//! começam na mesma posição, vence a mais longa ("benchmarked against" e não
//! "benchmarked"), seja qual for a posição delas na tabela.
//!
//! ## Isolamento por categoria
//!
//! Uma categoria cujo padrão não compila, ou cuja varredura falha, fica de
//! fora com um aviso no log. As demais seguem normalmente.
//!
//! ## Sem deduplicação
//!
//! As ocorrências de todas as categorias seguem juntas, mesmo sobrepostas.
//! Quem decide o dono de cada trecho é o [`crate::segmenter`].

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::category::IssueCategory;
use crate::error::{guarded, EngineError, EngineResult};
use crate::lexicon::em_dash::EM_DASH_CHARS;
use crate::lexicon::{Lexicon, Lexicons};

/// Limite de tamanho do autômato compilado (a tabela de jargão é grande).
pub const REGEX_SIZE_LIMIT: usize = 32 * (1 << 20);

/// Uma ocorrência bruta de frase problemática no texto original.
///
/// Offsets em bytes UTF-8, `start < end <= text.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub start: usize,
    pub end: usize,
    pub category: IssueCategory,
    /// Prioridade da categoria (0 vence 1)
    pub priority: u8,
    /// Trecho exato como aparece no texto
    pub text: String,
}

impl Match {
    /// Verifica se o offset está dentro do intervalo `[start, end)`.
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    pub fn span(&self) -> (usize, usize) {
        (self.start, self.end)
    }
}

/// Padrão compilado de uma categoria.
#[derive(Debug, Clone)]
pub struct CategoryMatcher {
    category: IssueCategory,
    pattern: Regex,
}

impl CategoryMatcher {
    /// Compila o padrão de uma categoria de frases.
    ///
    /// Devolve `Ok(None)` quando o léxico não tem frases: uma alternação vazia
    /// não é um padrão válido, e a categoria simplesmente não contribui.
    pub fn for_lexicon(lexicon: &Lexicon) -> EngineResult<Option<Self>> {
        Self::with_size_limit(lexicon, REGEX_SIZE_LIMIT)
    }

    /// Como [`for_lexicon`](Self::for_lexicon), com limite de tamanho explícito.
    pub fn with_size_limit(lexicon: &Lexicon, size_limit: usize) -> EngineResult<Option<Self>> {
        let category = lexicon.category();
        if category == IssueCategory::EmDash {
            return Self::em_dash().map(Some);
        }

        // Frases mais longas primeiro: numa mesma posição vence a maior
        // ("benchmarked against" antes de "benchmarked").
        let mut phrases: Vec<&str> = lexicon
            .phrases()
            .filter(|p| !p.trim().is_empty())
            .collect();
        if phrases.is_empty() {
            return Ok(None);
        }
        phrases.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));

        let alternation = phrases
            .iter()
            .map(|p| anchored(p))
            .collect::<Vec<_>>()
            .join("|");

        let pattern = RegexBuilder::new(&alternation)
            .case_insensitive(true)
            .size_limit(size_limit)
            .build()
            .map_err(|source| EngineError::MatcherBuild { category, source })?;

        Ok(Some(Self { category, pattern }))
    }

    /// Padrão fixo dos travessões, sem âncoras.
    pub fn em_dash() -> EngineResult<Self> {
        let class: String = EM_DASH_CHARS
            .iter()
            .map(|c| regex::escape(&c.to_string()))
            .collect();
        let pattern = Regex::new(&format!("[{}]", class)).map_err(|source| {
            EngineError::MatcherBuild {
                category: IssueCategory::EmDash,
                source,
            }
        })?;
        Ok(Self {
            category: IssueCategory::EmDash,
            pattern,
        })
    }

    pub fn category(&self) -> IssueCategory {
        self.category
    }

    /// Todas as ocorrências não sobrepostas desta categoria, em ordem de texto.
    pub fn find_iter(&self, text: &str) -> Vec<Match> {
        let priority = self.category.priority();
        self.pattern
            .find_iter(text)
            .filter(|m| m.start() < m.end())
            .map(|m| Match {
                start: m.start(),
                end: m.end(),
                category: self.category,
                priority,
                text: m.as_str().to_string(),
            })
            .collect()
    }
}

/// Os padrões das quatro categorias, na ordem fixa de varredura.
///
/// Uma categoria cujo padrão falhou ao compilar fica de fora (com aviso no
/// log) e as demais seguem normalmente.
#[derive(Debug, Clone)]
pub struct MatcherSet {
    matchers: Vec<CategoryMatcher>,
    failed: Vec<IssueCategory>,
}

impl MatcherSet {
    pub fn build(lexicons: &Lexicons) -> Self {
        Self::build_with_size_limit(lexicons, REGEX_SIZE_LIMIT)
    }

    pub fn build_with_size_limit(lexicons: &Lexicons, size_limit: usize) -> Self {
        let mut matchers = Vec::new();
        let mut failed = Vec::new();

        for category in IssueCategory::ALL {
            match CategoryMatcher::with_size_limit(lexicons.get(category), size_limit) {
                Ok(Some(matcher)) => matchers.push(matcher),
                Ok(None) => debug!(%category, "léxico vazio, categoria ignorada"),
                Err(err) => {
                    warn!(%category, error = %err, "categoria desativada");
                    failed.push(category);
                }
            }
        }

        Self { matchers, failed }
    }

    /// Categorias cujo padrão não compilou.
    pub fn failed(&self) -> &[IssueCategory] {
        &self.failed
    }

    pub fn categories(&self) -> impl Iterator<Item = IssueCategory> + '_ {
        self.matchers.iter().map(|m| m.category())
    }

    /// Varre o texto com todas as categorias.
    ///
    /// A ordem do resultado é estável: categorias na ordem de
    /// [`IssueCategory::ALL`], e dentro de cada uma, ocorrências na ordem do
    /// texto. O desempate do segmentador depende dessa ordem.
    ///
    /// Se a varredura de uma categoria falhar, ela não contribui e as
    /// demais seguem.
    pub fn find_matches(&self, text: &str) -> Vec<Match> {
        let mut all = Vec::new();
        for matcher in &self.matchers {
            match guarded(|| matcher.find_iter(text)) {
                Ok(found) => {
                    debug!(category = %matcher.category(), count = found.len(), "ocorrências encontradas");
                    all.extend(found);
                }
                Err(err) => {
                    warn!(category = %matcher.category(), error = %err, "varredura da categoria falhou");
                }
            }
        }
        all
    }
}

/// Atalho: compila os padrões e varre o texto uma única vez.
pub fn find_matches(text: &str, lexicons: &Lexicons) -> Vec<Match> {
    MatcherSet::build(lexicons).find_matches(text)
}

/// Escapa a frase e acrescenta a âncora adequada a cada borda.
fn anchored(phrase: &str) -> String {
    let lead = phrase.chars().next().map(boundary_anchor).unwrap_or("");
    let tail = phrase.chars().last().map(boundary_anchor).unwrap_or("");
    format!("{}{}{}", lead, regex::escape(phrase), tail)
}

fn boundary_anchor(edge: char) -> &'static str {
    if is_word_char(edge) {
        r"\b"
    } else {
        r"\B"
    }
}

/// Caractere de palavra no sentido de `\w`: letra, dígito ou sublinhado.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
