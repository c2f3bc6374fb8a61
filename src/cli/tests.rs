#[cfg(test)]
mod tests {
    use crate::cli::commands::{execute, list_image_files};
    use crate::cli::{Args, Command};
    use crate::config::{Config, LLMProvider};
    use crate::generator::outlet::RunStoreError;
    use chrono::NaiveDate;
    use clap::Parser;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_generate_defaults() {
        let args = Args::try_parse_from(["blog-writer", "generate", "Rust async runtimes"]).unwrap();

        assert_eq!(
            args.command,
            Command::Generate {
                topic: "Rust async runtimes".to_string(),
                as_of: None,
                html: false,
            }
        );
        assert!(args.config.is_none());
        assert!(args.output_root.is_none());
        assert!(!args.verbose);
    }

    #[test]
    fn test_generate_with_as_of_and_html() {
        let args = Args::try_parse_from([
            "blog-writer",
            "generate",
            "State of WebAssembly",
            "--as-of",
            "2026-01-31",
            "--html",
        ])
        .unwrap();

        assert_eq!(
            args.command,
            Command::Generate {
                topic: "State of WebAssembly".to_string(),
                as_of: NaiveDate::from_ymd_opt(2026, 1, 31),
                html: true,
            }
        );
    }

    #[test]
    fn test_invalid_as_of_is_rejected() {
        let result = Args::try_parse_from(["blog-writer", "generate", "topic", "--as-of", "31/01/2026"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_subcommands() {
        let args = Args::try_parse_from(["blog-writer", "list"]).unwrap();
        assert_eq!(args.command, Command::List);

        let args = Args::try_parse_from(["blog-writer", "show", "my_post", "--html"]).unwrap();
        assert_eq!(
            args.command,
            Command::Show {
                slug: "my_post".to_string(),
                html: true
            }
        );

        let args = Args::try_parse_from(["blog-writer", "bundle", "my_post", "-o", "/tmp/out.tar.gz"]).unwrap();
        assert_eq!(
            args.command,
            Command::Bundle {
                slug: "my_post".to_string(),
                output: Some(PathBuf::from("/tmp/out.tar.gz")),
            }
        );

        let args = Args::try_parse_from(["blog-writer", "images", "my_post"]).unwrap();
        assert_eq!(
            args.command,
            Command::Images {
                slug: "my_post".to_string()
            }
        );
    }

    #[test]
    fn test_missing_subcommand_is_rejected() {
        assert!(Args::try_parse_from(["blog-writer"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Args::try_parse_from([
            "blog-writer",
            "list",
            "--output-root",
            "/data/blogs",
            "-v",
        ])
        .unwrap();

        assert_eq!(args.output_root, Some(PathBuf::from("/data/blogs")));
        assert!(args.verbose);
    }

    #[test]
    fn test_build_config_overrides() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("blog-writer.toml");
        std::fs::write(
            &config_path,
            "output_root = \"from_file\"\n[llm]\nmodel = \"file-model\"\nmax_tokens = 1000\n",
        )
        .unwrap();

        let args = Args::try_parse_from([
            "blog-writer",
            "-c",
            config_path.to_str().unwrap(),
            "--output-root",
            "/tmp/blogs",
            "--llm-provider",
            "anthropic",
            "--llm-api-key",
            "llm-key",
            "--llm-api-base-url",
            "https://llm.example.com",
            "--model",
            "cli-model",
            "--temperature",
            "0.7",
            "--max-parallels",
            "4",
            "--search-api-key",
            "search-key",
            "generate",
            "topic",
        ])
        .unwrap();
        let config = args.build_config().unwrap();

        assert_eq!(config.output_root, PathBuf::from("/tmp/blogs"));
        assert_eq!(config.llm.provider, LLMProvider::Anthropic);
        assert_eq!(config.llm.api_key, "llm-key");
        assert_eq!(config.llm.api_base_url, "https://llm.example.com");
        assert_eq!(config.llm.model, "cli-model");
        assert_eq!(config.llm.max_tokens, 1000);
        assert_eq!(config.llm.temperature, 0.7);
        assert_eq!(config.llm.max_parallels, 4);
        assert_eq!(config.search.api_key, "search-key");
    }

    #[test]
    fn test_build_config_keeps_provider_on_unknown_value() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("blog-writer.toml");
        std::fs::write(&config_path, "[llm]\nprovider = \"deepseek\"\n").unwrap();

        let args = Args::try_parse_from([
            "blog-writer",
            "--config",
            config_path.to_str().unwrap(),
            "--llm-provider",
            "mistral",
            "list",
        ])
        .unwrap();
        let config = args.build_config().unwrap();

        assert_eq!(config.llm.provider, LLMProvider::DeepSeek);
    }

    #[test]
    fn test_build_config_with_missing_file_fails() {
        let args = Args::try_parse_from(["blog-writer", "-c", "/nonexistent/blog-writer.toml", "list"]).unwrap();
        assert!(args.build_config().is_err());
    }

    #[test]
    fn test_list_image_files() {
        let temp_dir = TempDir::new().unwrap();
        let images_dir = temp_dir.path().join("images");
        assert!(list_image_files(&images_dir).unwrap().is_empty());

        std::fs::create_dir_all(&images_dir).unwrap();
        std::fs::write(images_dir.join("b.png"), b"b").unwrap();
        std::fs::write(images_dir.join("a.png"), b"a").unwrap();

        let files = list_image_files(&images_dir).unwrap();
        assert_eq!(files, vec![images_dir.join("a.png"), images_dir.join("b.png")]);
    }

    #[tokio::test]
    async fn test_slug_commands_stay_inside_output_root() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config {
            output_root: temp_dir.path().join("blogs"),
            ..Config::default()
        };
        std::fs::create_dir_all(config.output_root.join("post")).unwrap();
        std::fs::write(temp_dir.path().join("secret.txt"), b"outside").unwrap();
        let output = temp_dir.path().join("escape.tar.gz");

        let commands = [
            Command::Bundle {
                slug: "..".to_string(),
                output: Some(output.clone()),
            },
            Command::Images {
                slug: "../..".to_string(),
            },
            Command::Show {
                slug: "post/../..".to_string(),
                html: false,
            },
        ];
        for command in commands {
            let err = execute(command.clone(), &config).await.unwrap_err();
            assert!(
                matches!(err.downcast_ref::<RunStoreError>(), Some(RunStoreError::InvalidSlug(_))),
                "{:?} was not rejected",
                command
            );
        }
        assert!(!output.exists());
    }
}
