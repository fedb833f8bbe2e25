#[cfg(test)]
mod tests {
    use super::super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.config_file, PathBuf::from("config.json"));
        assert_eq!(
            config.services_file,
            PathBuf::from("app/google-services.json")
        );
        assert_eq!(config.output_env, "GITHUB_OUTPUT");
    }

    #[test]
    fn test_load_partial_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "services_file = \"android/google-services.json\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(
            config.services_file,
            PathBuf::from("android/google-services.json")
        );
        assert_eq!(config.config_file, PathBuf::from("config.json"));
        assert_eq!(config.output_env, "GITHUB_OUTPUT");
    }

    #[test]
    fn test_load_malformed_config_names_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "services_file = [not toml").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse"));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_load_missing_config_names_file() {
        let dir = tempdir().unwrap();
        let err = Config::load_from(&dir.path().join("absent.toml")).unwrap_err();
        assert!(err.to_string().contains("absent.toml"));
    }

    #[test]
    fn test_output_path_from_env() {
        let config = Config {
            output_env: "BUILDVALS_TEST_OUTPUT_UNSET".to_string(),
            ..Config::default()
        };
        assert!(config.output_path_from_env().is_none());
    }
}
