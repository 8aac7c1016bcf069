// Kept in its own test binary: it changes a process-wide environment variable.
#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use todomaster::libs::config::{Config, DB_PATH_ENV};
    use todomaster::libs::data_storage::DataStorage;

    #[test]
    fn test_env_overrides_config_but_not_flag() {
        let temp_dir = tempfile::tempdir().unwrap();
        let storage = DataStorage::at(temp_dir.path());
        let env_path = temp_dir.path().join("from-env.db");
        std::env::set_var(DB_PATH_ENV, &env_path);

        let config = Config {
            db_path: Some(PathBuf::from("/data/configured.db")),
            ..Default::default()
        };
        assert_eq!(config.db_path(None, &storage).unwrap(), env_path);

        let flag = PathBuf::from("/tmp/flag.db");
        assert_eq!(config.db_path(Some(flag.clone()), &storage).unwrap(), flag);

        std::env::remove_var(DB_PATH_ENV);
        assert_eq!(config.db_path(None, &storage).unwrap(), PathBuf::from("/data/configured.db"));
    }
}
