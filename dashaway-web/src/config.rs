//! Configuração do servidor, lida de variáveis de ambiente (e de um `.env`, se houver).
//!
//! | Variável            | Padrão    | Uso                                        |
//! |---------------------|-----------|--------------------------------------------|
//! | `HOST`              | `0.0.0.0` | Endereço de escuta                         |
//! | `PORT`              | `3000`    | Porta de escuta                            |
//! | `CORS_ORIGINS`      | `*`       | Origens permitidas, separadas por vírgula  |
//! | `MAX_TEXT_CHARS`    | `100000`  | Tamanho máximo do texto (acima: 413)       |
//! | `WS_EVENT_DELAY_MS` | `35`      | Pausa entre eventos enviados no WebSocket  |

use std::str::FromStr;
use std::time::Duration;

use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::warn;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MAX_TEXT_CHARS: usize = 100_000;
pub const DEFAULT_WS_EVENT_DELAY_MS: u64 = 35;

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Vazio significa qualquer origem.
    pub cors_origins: Vec<String>,
    pub max_text_chars: usize,
    pub ws_event_delay: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            cors_origins: Vec::new(),
            max_text_chars: DEFAULT_MAX_TEXT_CHARS,
            ws_event_delay: Duration::from_millis(DEFAULT_WS_EVENT_DELAY_MS),
        }
    }
}

impl ServerConfig {
    /// Lê a configuração do ambiente do processo.
    ///
    /// O `.env` deve ter sido carregado antes (`dotenvy::dotenv()` no `main`).
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Monta a configuração a partir de uma função de consulta qualquer.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let host = lookup("HOST")
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .unwrap_or(defaults.host);

        let cors_origins = lookup("CORS_ORIGINS")
            .map(|raw| parse_origins(&raw))
            .unwrap_or_default();

        Self {
            host,
            port: parse_or("PORT", lookup("PORT"), defaults.port),
            cors_origins,
            max_text_chars: parse_or("MAX_TEXT_CHARS", lookup("MAX_TEXT_CHARS"), defaults.max_text_chars),
            ws_event_delay: Duration::from_millis(parse_or(
                "WS_EVENT_DELAY_MS",
                lookup("WS_EVENT_DELAY_MS"),
                DEFAULT_WS_EVENT_DELAY_MS,
            )),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Camada CORS: qualquer origem quando a lista está vazia.
    pub fn cors_layer(&self) -> CorsLayer {
        let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
        if self.cors_origins.is_empty() {
            return layer.allow_origin(Any);
        }

        let origins: Vec<HeaderValue> = self
            .cors_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!(%origin, "origem CORS inválida ignorada");
                    None
                }
            })
            .collect();
        layer.allow_origin(AllowOrigin::list(origins))
    }
}

/// Lista de origens; `*` em qualquer posição libera todas.
fn parse_origins(raw: &str) -> Vec<String> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect();
    if origins.iter().any(|o| o == "*") {
        Vec::new()
    } else {
        origins
    }
}

fn parse_or<T: FromStr + Copy>(key: &str, raw: Option<String>, default: T) -> T {
    match raw {
        None => default,
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            warn!(key, %value, "valor inválido, usando o padrão");
            default
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
        assert_eq!(config.ws_event_delay, Duration::from_millis(35));
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("MAX_TEXT_CHARS", "500"),
            ("WS_EVENT_DELAY_MS", "0"),
            ("CORS_ORIGINS", "http://localhost:5173, https://dashaway.app"),
        ]);
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.max_text_chars, 500);
        assert_eq!(config.ws_event_delay, Duration::ZERO);
        assert_eq!(
            config.cors_origins,
            vec!["http://localhost:5173".to_string(), "https://dashaway.app".to_string()]
        );
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = config_from(&[("PORT", "not-a-port"), ("MAX_TEXT_CHARS", "-1")]);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.max_text_chars, DEFAULT_MAX_TEXT_CHARS);
    }

    #[test]
    fn test_wildcard_origin_allows_any() {
        let config = config_from(&[("CORS_ORIGINS", "https://a.com,*")]);
        assert!(config.cors_origins.is_empty());
    }
}
