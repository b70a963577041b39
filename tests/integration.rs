use tray_integration::appearance::{AppearanceProber, SettingsQuery};
use tray_integration::display::DisplayScaleSource;
use tray_integration::icons::{BlackClassifier, IconCache, IconKind, IconStore};
use tray_integration::platform::Platform;
use tray_integration::{IntegrationConfig, PlatformError, PlatformIntegration, ThemeState};

struct FailingQuery;

impl SettingsQuery for FailingQuery {
    fn dark_preference(&self) -> Result<String, PlatformError> {
        Err(PlatformError::process("defaults crashed"))
    }
}

struct DarkQuery;

impl SettingsQuery for DarkQuery {
    fn dark_preference(&self) -> Result<String, PlatformError> {
        Ok("Dark".to_string())
    }
}

struct Scale(Result<f64, PlatformError>);

impl DisplayScaleSource for Scale {
    fn scale_factor(&self) -> Result<f64, PlatformError> {
        self.0.clone()
    }
}

#[test]
fn failing_theme_query_reports_light() {
    // Arrange
    let integration = PlatformIntegration::new(
        Platform::MacOs,
        AppearanceProber::new(Box::new(FailingQuery)),
        Box::new(Scale(Ok(2.0))),
    );

    // Act
    let theme = integration.current_theme();

    // Assert
    assert_eq!(theme, ThemeState::Light);
}

#[test]
fn scale_factor_is_never_below_one() {
    let outcomes = [
        Ok(2.0),
        Ok(0.25),
        Ok(f64::NAN),
        Err(PlatformError::unavailable("NSScreen")),
        Err(PlatformError::type_mismatch("nil")),
    ];

    for outcome in outcomes {
        // Arrange
        let label = format!("{:?}", outcome);
        let integration = PlatformIntegration::new(
            Platform::MacOs,
            AppearanceProber::unsupported(),
            Box::new(Scale(outcome)),
        );

        // Act
        let scale = integration.current_scale_factor();

        // Assert
        assert!(scale >= 1, "outcome {} gave {}", label, scale);
    }
}

#[test]
fn dark_macos_facade_adapts_scaled_icons() {
    // Arrange
    let integration = PlatformIntegration::new(
        Platform::MacOs,
        AppearanceProber::new(Box::new(DarkQuery)),
        Box::new(Scale(Ok(2.0))),
    );
    let config = IntegrationConfig::default();
    let mut icons = IconCache::from_config(&config.icons, integration.current_scale_factor());

    // Act
    let inverted = integration.adapt_icons(&mut icons);

    // Assert
    assert_eq!(inverted, 3);
    assert_eq!(icons.image(IconKind::TrayDefault).unwrap().width(), config.icons.size * 2);
    assert!(!icons.is_black(IconKind::TrayDefault));
    assert!(icons.is_black(IconKind::Logo));
}

#[test]
fn linux_facade_never_adapts_icons() {
    // Arrange
    let integration = PlatformIntegration::new(
        Platform::Linux,
        AppearanceProber::new(Box::new(DarkQuery)),
        Box::new(Scale(Ok(1.0))),
    );
    let mut icons = IconCache::render(16, BlackClassifier::default());

    // Act
    let inverted = integration.adapt_icons(&mut icons);

    // Assert
    assert_eq!(integration.current_theme(), ThemeState::Dark);
    assert_eq!(inverted, 0);
}

#[test]
fn edge_valid_classifier_config_never_inverts_twice() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[icons]\nblack_threshold = 127\nblack_ratio = 0.51\n").unwrap();
    let config = IntegrationConfig::load_from(&path).unwrap();
    let integration = PlatformIntegration::new(
        Platform::MacOs,
        AppearanceProber::new(Box::new(DarkQuery)),
        Box::new(Scale(Ok(1.0))),
    );
    let mut icons = IconCache::from_config(&config.icons, integration.current_scale_factor());

    // Act
    let first = integration.adapt_icons(&mut icons);
    let second = integration.adapt_icons(&mut icons);

    // Assert
    assert_eq!(first, 3);
    assert_eq!(second, 0);
}

#[test]
fn oversized_icon_config_is_rejected() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[icons]\nsize = 4000000000\n").unwrap();

    // Act
    let result = IntegrationConfig::load_from(&path);

    // Assert
    assert!(result.is_err());
}
