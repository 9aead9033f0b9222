//! Travessões e suas substituições.
//!
//! Diferente das outras tabelas, a chave é o próprio caractere encontrado, e
//! as sugestões são devolvidas inteiras, sem sorteio.

/// Caracteres tratados como travessão: em dash, en dash e barra horizontal.
pub const EM_DASH_CHARS: &[char] = &['\u{2014}', '\u{2013}', '\u{2015}'];

pub const EM_DASH: &[(&str, &[&str])] = &[
    ("\u{2014}", &["-", ",", ";", ":", "."]),
    ("\u{2013}", &["-", ",", "to"]),
    ("\u{2015}", &["-", ","]),
];
