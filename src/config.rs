use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Content
    pub content_dir: String,

    // TMDB (movie listing)
    pub tmdb_api_key: String,
    pub tmdb_api_url: String,

    // Groq (inquiry inference)
    pub groq_api_key: String,
    pub groq_api_url: String,
    pub groq_model: String,

    // Festival submission backend
    pub festival_api_url: String,

    // Server
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Content bundles shipped with the application
            content_dir: std::env::var("CONTENT_DIR").unwrap_or_else(|_| "content".to_string()),

            // TMDB
            tmdb_api_key: std::env::var("TMDB_API_KEY").context("TMDB_API_KEY not set")?,
            tmdb_api_url: std::env::var("TMDB_API_URL")
                .unwrap_or_else(|_| "https://api.themoviedb.org/3".to_string()),

            // Groq
            groq_api_key: std::env::var("GROQ_API_KEY").context("GROQ_API_KEY not set")?,
            groq_api_url: std::env::var("GROQ_API_URL").unwrap_or_else(|_| {
                "https://api.groq.com/openai/v1/chat/completions".to_string()
            }),
            groq_model: std::env::var("GROQ_MODEL")
                .unwrap_or_else(|_| "llama-3.3-70b-versatile".to_string()),

            // Festival submission backend
            festival_api_url: std::env::var("FESTIVAL_API_URL")
                .context("FESTIVAL_API_URL not set")?,

            // Server
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for var in [
            "CONTENT_DIR",
            "TMDB_API_KEY",
            "TMDB_API_URL",
            "GROQ_API_KEY",
            "GROQ_API_URL",
            "GROQ_MODEL",
            "FESTIVAL_API_URL",
            "PORT",
        ] {
            std::env::remove_var(var);
        }
    }

    fn set_required_env() {
        std::env::set_var("TMDB_API_KEY", "test-tmdb-key");
        std::env::set_var("GROQ_API_KEY", "test-groq-key");
        std::env::set_var("FESTIVAL_API_URL", "https://festival-api.example.com");
    }

    #[test]
    #[serial]
    fn test_from_env_with_defaults() {
        clear_env();
        set_required_env();

        let config = Config::from_env().expect("Should load");
        assert_eq!(config.content_dir, "content");
        assert_eq!(config.tmdb_api_url, "https://api.themoviedb.org/3");
        assert_eq!(
            config.groq_api_url,
            "https://api.groq.com/openai/v1/chat/completions"
        );
        assert_eq!(config.groq_model, "llama-3.3-70b-versatile");
        assert_eq!(config.port, 8080);
    }

    #[test]
    #[serial]
    fn test_from_env_missing_required_var() {
        clear_env();
        std::env::set_var("GROQ_API_KEY", "test-groq-key");
        std::env::set_var("FESTIVAL_API_URL", "https://festival-api.example.com");

        let result = Config::from_env();
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("TMDB_API_KEY not set"));
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        set_required_env();
        std::env::set_var("CONTENT_DIR", "/srv/content");
        std::env::set_var("PORT", "9090");
        std::env::set_var("GROQ_MODEL", "mixtral-8x7b-32768");

        let config = Config::from_env().expect("Should load");
        assert_eq!(config.content_dir, "/srv/content");
        assert_eq!(config.port, 9090);
        assert_eq!(config.groq_model, "mixtral-8x7b-32768");
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_port_uses_default() {
        clear_env();
        set_required_env();
        std::env::set_var("PORT", "not-a-number");

        let config = Config::from_env().expect("Should load");
        assert_eq!(config.port, 8080);
    }
}
