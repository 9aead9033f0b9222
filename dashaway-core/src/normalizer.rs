//! # Normalizador: Variante de Legibilidade
//!
//! Produz uma cópia "limpa" do texto, usada **somente** no cálculo da nota
//! de legibilidade. A detecção de problemas e as sugestões sempre operam
//! sobre o texto original.
//!
//! ## Etapas (a ordem importa)
//!
//! 1. Remove URLs (`esquema://...` até o próximo espaço).
//! 2. Remove rótulos de cabeçalho (`H1:` a `H6:`) e tags HTML.
//! 3. Remove marcadores de ênfase markdown (`**negrito**`, `*itálico*`), mantendo o conteúdo.
//! 4. Troca `": Maiúscula"` por `". Maiúscula"`: um rótulo seguido de frase conta como duas sentenças.
//! 5. Remove emojis (pictogramas, símbolos, transporte, bandeiras, dingbats).
//! 6. Converte travessões e meias-riscas em hífen simples.
//! 7. Colapsa espaços em branco e apara as bordas.
//!
//! A fórmula de legibilidade é sensível ao número de sentenças, por isso a
//! etapa 4 vem antes da remoção de emojis e da compactação de espaços.

use once_cell::sync::Lazy;
use regex::Regex;

static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Za-z][A-Za-z0-9+.\-]*://\S+").expect("padrão de URL"));

static HEADING_LABEL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bH[1-6]:\s*").expect("padrão de cabeçalho"));

static HTML_TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").expect("padrão de tag"));

static BOLD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*([^*]+)\*\*").expect("padrão de negrito"));

static ITALIC_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*([^*]+)\*").expect("padrão de itálico"));

static COLON_CAPITAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r":\s+(\p{Lu})").expect("padrão de dois-pontos"));

static EMOJI_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        "[\u{1F600}-\u{1F64F}\u{1F300}-\u{1F5FF}\u{1F680}-\u{1F6FF}\
         \u{1F1E0}-\u{1F1FF}\u{2702}-\u{27B0}\u{1F900}-\u{1F9FF}\
         \u{1FA70}-\u{1FAFF}\u{2600}-\u{26FF}\u{FE0F}\u{200D}]+",
    )
    .expect("padrão de emoji")
});

static DASH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("[\u{2014}\u{2013}\u{2015}]").expect("padrão de travessão"));

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("padrão de espaço"));

/// Gera a variante de legibilidade do texto. Pura e determinística.
pub fn normalize_for_readability(text: &str) -> String {
    let text = URL_RE.replace_all(text, "");
    let text = HEADING_LABEL_RE.replace_all(&text, "");
    let text = HTML_TAG_RE.replace_all(&text, "");
    let text = BOLD_RE.replace_all(&text, "${1}");
    let text = ITALIC_RE.replace_all(&text, "${1}");
    let text = COLON_CAPITAL_RE.replace_all(&text, ". ${1}");
    let text = EMOJI_RE.replace_all(&text, "");
    let text = DASH_RE.replace_all(&text, "-");
    let text = WHITESPACE_RE.replace_all(&text, " ");
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        assert_eq!(normalize_for_readability(""), "");
        assert_eq!(normalize_for_readability("  \n\t "), "");
    }

    #[test]
    fn test_url_markdown_and_colon_break() {
        let cleaned = normalize_for_readability("Check **this** out: https://x.com Next.");

        assert!(!cleaned.contains("**"));
        assert!(!cleaned.contains("http"));
        assert_eq!(cleaned, "Check this out. Next.");
    }

    #[test]
    fn test_remove_urls() {
        let cleaned = normalize_for_readability("Check out https://example.com for more info.");
        assert_eq!(cleaned, "Check out for more info.");
    }

    #[test]
    fn test_remove_markdown() {
        let cleaned = normalize_for_readability("This is **bold** and *italic* text.");
        assert_eq!(cleaned, "This is bold and italic text.");
    }

    #[test]
    fn test_remove_html_and_heading_labels() {
        assert_eq!(
            normalize_for_readability("This has <strong>HTML</strong> tags."),
            "This has HTML tags."
        );
        assert_eq!(
            normalize_for_readability("H2: the plan is simple."),
            "the plan is simple."
        );
    }

    #[test]
    fn test_colon_before_capital_becomes_period() {
        assert_eq!(
            normalize_for_readability("Header: This is a new sentence."),
            "Header. This is a new sentence."
        );
        // Minúscula depois do dois-pontos não quebra a sentença
        assert_eq!(
            normalize_for_readability("Note: see below."),
            "Note: see below."
        );
    }

    #[test]
    fn test_emoji_removed() {
        assert_eq!(normalize_for_readability("Launch day 🚀🎉 is here ✨."), "Launch day is here .");
    }

    #[test]
    fn test_dashes_become_hyphens() {
        let cleaned = normalize_for_readability("one—two–three―four");
        assert_eq!(cleaned, "one-two-three-four");
    }

    #[test]
    fn test_whitespace_collapsed() {
        assert_eq!(
            normalize_for_readability("Text   with \n\n extra     spaces."),
            "Text with extra spaces."
        );
    }
}
