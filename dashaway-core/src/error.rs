//! Erros do motor de análise.
//!
//! Nenhum deles chega ao chamador como falha: erros de compilação de padrão
//! isolam a categoria afetada, e falhas internas viram o resultado degradado
//! descrito em [`crate::engine`].

use std::panic::{self, AssertUnwindSafe};

use thiserror::Error;

use crate::category::IssueCategory;

#[derive(Debug, Error)]
pub enum EngineError {
    /// O padrão de uma categoria não compilou; ela não contribui com ocorrências.
    #[error("falha ao compilar o padrão da categoria {category}: {source}")]
    MatcherBuild {
        category: IssueCategory,
        #[source]
        source: regex::Error,
    },

    /// Falha inesperada durante a busca, segmentação ou pontuação.
    #[error("falha interna na análise: {message}")]
    Internal { message: String },
}

pub type EngineResult<T> = Result<T, EngineError>;

/// Executa `f` convertendo um pânico em [`EngineError::Internal`].
pub(crate) fn guarded<T>(f: impl FnOnce() -> T) -> EngineResult<T> {
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "pânico sem mensagem".to_string()
        };
        EngineError::Internal { message }
    })
}
