use super::Settings;
use std::net::SocketAddr;

#[test]
fn load_fails_without_token_secret() {
    figment::Jail::expect_with(|_jail| {
        // No config file, no environment: the secret is missing and the
        // process must refuse to start rather than default it.
        assert!(Settings::load().is_err());
        Ok(())
    });
}

#[test]
fn load_applies_defaults_around_the_secret() {
    figment::Jail::expect_with(|jail| {
        jail.set_env("RESHELF_TOKEN_SECRET", "unit-test-secret");
        let settings = Settings::load().expect("settings should load");
        assert_eq!(settings.token_secret, "unit-test-secret");
        assert_eq!(settings.bind_addr, SocketAddr::from(([127, 0, 0, 1], 3000)));
        assert_eq!(settings.log_level, "info");
        assert_eq!(settings.token_ttl_secs, 60 * 60 * 24);
        Ok(())
    });
}

#[test]
fn file_values_are_overridden_by_environment() {
    figment::Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
                bind_addr = "0.0.0.0:8080"
                token_secret = "file-secret"
                log_level = "debug"
            "#,
        )?;
        jail.set_env("RESHELF_TOKEN_SECRET", "env-secret");

        let settings = Settings::load().expect("settings should load");
        assert_eq!(settings.bind_addr, SocketAddr::from(([0, 0, 0, 0], 8080)));
        assert_eq!(settings.log_level, "debug");
        assert_eq!(settings.token_secret, "env-secret");
        Ok(())
    });
}
