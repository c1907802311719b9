#[cfg(test)]
mod integration_tests {
    use crate::config::{load_and_validate_config, Mode, RuntimeBuilder};
    use crate::errors::HostState;
    use crate::term::Term;

    /// The point-mode double config loads and validates
    #[test]
    fn test_double_yaml_loading() {
        let config = load_and_validate_config("configs/double.yaml").unwrap();

        assert_eq!(config.processor, "double");
        assert_eq!(config.mode, Mode::Point);
        let options = config.options_term().unwrap();
        assert_eq!(options.get_named("field"), Some(&Term::binary("val")));
        assert_eq!(options.get_named("as"), Some(&Term::binary("doubled")));
    }

    /// TOML configs go through the same validation
    #[test]
    fn test_double_batch_toml_loading() {
        let config = load_and_validate_config("configs/double-batch.toml").unwrap();

        assert_eq!(config.mode, Mode::Batch);
        assert_eq!(config.batch_size, 3);
        assert!(config.init.is_none());
    }

    #[test]
    fn test_mirror_yaml_loading() {
        let config = load_and_validate_config("configs/mirror.yaml").unwrap();

        assert_eq!(config.processor, "mirror");
        assert_eq!(config.batch_size, 2);
        let init = config.init_term().unwrap().unwrap();
        assert_eq!(
            init.as_map().unwrap().get_named("hello"),
            Some(&Term::binary("world"))
        );
    }

    /// Every shipped config builds a host awaiting init
    #[test]
    fn test_build_runtime_from_each_config() {
        for (path, expected) in [
            ("configs/double.yaml", "double"),
            ("configs/double-batch.toml", "double"),
            ("configs/mirror.yaml", "mirror"),
        ] {
            let config = load_and_validate_config(path).unwrap();
            let (host, _emissions) = RuntimeBuilder::from_config(&config).unwrap();

            assert_eq!(host.processor_name(), expected, "config {}", path);
            assert_eq!(host.state(), HostState::Constructed);
        }
    }
}
