use rescs_logger::{LevelFilter, Logger};
use tracing::Level;

#[test]
fn filter_directives_take_precedence_over_the_level() {
    let _logger = Logger::builder()
        .name("filter")
        .level(LevelFilter::ERROR)
        .filter("warn,rescs_views=debug")
        .init()
        .unwrap();

    assert!(tracing::enabled!(target: "rescs_views", Level::DEBUG));
    assert!(!tracing::enabled!(target: "rescs_views", Level::TRACE));
    assert!(tracing::enabled!(target: "rescs_shapes", Level::WARN));
    assert!(!tracing::enabled!(target: "rescs_shapes", Level::INFO));
}
