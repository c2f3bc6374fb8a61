#[cfg(test)]
mod tests {
    use crate::config::{Config, LLMConfig, LLMProvider, SearchConfig};
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();

        assert_eq!(config.output_root, PathBuf::from("blogs"));
        assert!(!config.verbose);
    }

    #[test]
    fn test_llm_provider_default() {
        let provider = LLMProvider::default();
        assert_eq!(provider, LLMProvider::OpenAI);
    }

    #[test]
    fn test_llm_provider_from_str() {
        assert_eq!(
            "openai".parse::<LLMProvider>().unwrap(),
            LLMProvider::OpenAI
        );
        assert_eq!(
            "DeepSeek".parse::<LLMProvider>().unwrap(),
            LLMProvider::DeepSeek
        );
        assert_eq!(
            "openrouter".parse::<LLMProvider>().unwrap(),
            LLMProvider::OpenRouter
        );
        assert_eq!(
            "anthropic".parse::<LLMProvider>().unwrap(),
            LLMProvider::Anthropic
        );
        assert_eq!(
            "ollama".parse::<LLMProvider>().unwrap(),
            LLMProvider::Ollama
        );

        assert!("invalid".parse::<LLMProvider>().is_err());
    }

    #[test]
    fn test_llm_provider_display() {
        assert_eq!(LLMProvider::OpenAI.to_string(), "openai");
        assert_eq!(LLMProvider::DeepSeek.to_string(), "deepseek");
        assert_eq!(LLMProvider::OpenRouter.to_string(), "openrouter");
        assert_eq!(LLMProvider::Anthropic.to_string(), "anthropic");
        assert_eq!(LLMProvider::Ollama.to_string(), "ollama");
    }

    #[test]
    fn test_llm_config_default() {
        let config = LLMConfig::default();

        assert_eq!(config.provider, LLMProvider::OpenAI);
        // api_key may be empty if env var is not set
        assert!(!config.api_base_url.is_empty());
        assert!(!config.model.is_empty());
        assert_eq!(config.temperature, 0.3);
        assert_eq!(config.retry_attempts, 1);
        assert_eq!(config.max_parallels, 0);
    }

    #[test]
    fn test_search_config_default() {
        let config = SearchConfig::default();

        assert_eq!(config.max_results_per_query, 5);
        assert_eq!(config.max_queries, 10);
        assert!(config.api_base_url.starts_with("https://"));
    }

    #[test]
    fn test_from_file_partial_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("blog-writer.toml");

        let content = r#"output_root = "out/posts"
verbose = true

[llm]
provider = "deepseek"
model = "deepseek-chat"
max_parallels = 4

[search]
max_results_per_query = 3
"#;
        std::fs::write(&config_path, content).unwrap();

        let config = Config::from_file(&config_path).unwrap();
        assert_eq!(config.output_root, PathBuf::from("out/posts"));
        assert!(config.verbose);
        assert_eq!(config.llm.provider, LLMProvider::DeepSeek);
        assert_eq!(config.llm.model, "deepseek-chat");
        assert_eq!(config.llm.max_parallels, 4);
        // 未填写的字段回落到默认值
        assert_eq!(config.llm.temperature, 0.3);
        assert_eq!(config.search.max_results_per_query, 3);
        assert_eq!(config.search.max_queries, 10);
    }

    #[test]
    fn test_from_file_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("roundtrip.toml");

        let mut config = Config::default();
        config.output_root = temp_dir.path().join("blogs");
        config.llm.provider = LLMProvider::Anthropic;
        config.llm.retry_attempts = 3;
        std::fs::write(&config_path, toml::to_string(&config).unwrap()).unwrap();

        let loaded = Config::from_file(&config_path).unwrap();
        assert_eq!(loaded.output_root, config.output_root);
        assert_eq!(loaded.llm.provider, LLMProvider::Anthropic);
        assert_eq!(loaded.llm.retry_attempts, 3);
    }

    #[test]
    fn test_from_file_errors() {
        let temp_dir = TempDir::new().unwrap();
        assert!(Config::from_file(&temp_dir.path().join("missing.toml")).is_err());

        let broken = temp_dir.path().join("broken.toml");
        std::fs::write(&broken, "[llm\nprovider = ").unwrap();
        assert!(Config::from_file(&broken).is_err());
    }

    #[test]
    fn test_load_with_explicit_path() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("custom.toml");
        std::fs::write(&config_path, "output_root = \"elsewhere\"\n").unwrap();

        let config = Config::load(Some(&config_path)).unwrap();
        assert_eq!(config.output_root, PathBuf::from("elsewhere"));
    }
}
