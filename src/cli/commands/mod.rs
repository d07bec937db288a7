pub mod logging;

use clap::{
    Arg, ColorChoice, Command,
    builder::styling::{AnsiColor, Effects, Styles},
};

pub const ARG_PORT: &str = "port";

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("glmock")
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new(ARG_PORT)
                .short('p')
                .long("port")
                .help("Port to listen on, also used in generated project URLs")
                .default_value("8080")
                .env("APP_PORT")
                .value_parser(clap::value_parser!(u16)),
        );

    logging::with_args(command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::telemetry::LogFormat;

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "glmock");
        assert_eq!(
            command.get_about().map(ToString::to_string),
            Some(env!("CARGO_PKG_DESCRIPTION").to_string())
        );
        assert_eq!(
            command.get_version().map(ToString::to_string),
            Some(env!("CARGO_PKG_VERSION").to_string())
        );
    }

    #[test]
    fn test_default_port() {
        temp_env::with_vars([("APP_PORT", None::<String>)], || {
            let matches = new().get_matches_from(vec!["glmock"]);
            assert_eq!(matches.get_one::<u16>(ARG_PORT).copied(), Some(8080));
        });
    }

    #[test]
    fn test_check_port() {
        let matches = new().get_matches_from(vec!["glmock", "--port", "9090"]);
        assert_eq!(matches.get_one::<u16>(ARG_PORT).copied(), Some(9090));
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let result = new().try_get_matches_from(vec!["glmock", "--port", "not-a-port"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_check_env() {
        temp_env::with_vars(
            [
                ("APP_PORT", Some("3000")),
                ("GLMOCK_LOG_LEVEL", Some("info")),
                ("GLMOCK_LOG_FORMAT", Some("json")),
            ],
            || {
                let matches = new().get_matches_from(vec!["glmock"]);
                assert_eq!(matches.get_one::<u16>(ARG_PORT).copied(), Some(3000));
                assert_eq!(
                    matches
                        .get_one::<u8>(logging::ARG_VERBOSITY)
                        .copied(),
                    Some(2)
                );
                assert_eq!(
                    matches
                        .get_one::<LogFormat>(logging::ARG_LOG_FORMAT)
                        .copied(),
                    Some(LogFormat::Json)
                );
            },
        );
    }

    #[test]
    fn test_check_log_level_env() {
        // loop cover all possible value_parse
        let levels = vec!["error", "warn", "info", "debug", "trace"];
        for (index, &level) in levels.iter().enumerate() {
            temp_env::with_vars([("GLMOCK_LOG_LEVEL", Some(level))], || {
                let matches = new().get_matches_from(vec!["glmock"]);
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(index as u8)
                );
            });
        }
    }

    #[test]
    fn test_check_log_level_verbosity() {
        let levels = vec!["error", "warn", "info", "debug", "trace"];
        for (index, _) in levels.iter().enumerate() {
            temp_env::with_vars([("GLMOCK_LOG_LEVEL", None::<String>)], || {
                let mut args = vec!["glmock".to_string()];

                // Add the appropriate number of "-v" flags based on the index
                if index > 0 {
                    args.push(format!("-{}", "v".repeat(index)));
                }

                let matches = new().get_matches_from(args);

                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(index as u8)
                );
            });
        }
    }

    #[test]
    fn test_default_log_format() {
        temp_env::with_vars([("GLMOCK_LOG_FORMAT", None::<String>)], || {
            let matches = new().get_matches_from(vec!["glmock"]);
            assert_eq!(
                matches
                    .get_one::<LogFormat>(logging::ARG_LOG_FORMAT)
                    .copied(),
                Some(LogFormat::Pretty)
            );
        });
    }
}
