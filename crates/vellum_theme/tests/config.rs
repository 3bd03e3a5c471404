use std::rc::Rc;

use vellum_paint::{Color, FontWeight};
use vellum_theme::config::PaletteDefinition;
use vellum_theme::{
    ColorToken, CorporateTheme, StaticFonts, Theme, ThemeConfig, ThemeDefinition, ThemeError,
    ThemeRegistry,
};

const OCEAN: &str = r##"
name = "Ocean"
version = "2.1"

[palette]
primary = "#0A66C2"
secondary = "#00838F"
accent = "#FFB300"
background = "#F5F9FC"
surface = "#FFFFFF"
success = "#2E7D32"
warning = "#F9A825"
error = "#C62828"
text_on_light = "#102A43"
text_on_dark = "#FFFFFF"
text_muted = "#627D98"
border = "#BCCCDC"

[typography.header]
family = "Fira Sans"
size = 26.0
weight = 700

[typography.sub_header]
family = "Fira Sans"
size = 19.0
weight = 600

[typography.body]
family = "Fira Sans"
size = 14.0
weight = 400

[typography.button]
family = "Fira Sans"
size = 14.0
weight = 500

[typography.small]
family = "Fira Sans"
size = 12.0
weight = 400

[metrics]
corner_radius = 10.0
border_width = 1.5
spacing_small = 4.0
spacing_medium = 10.0
spacing_large = 20.0
"##;

/// Ocean as a `[[theme]]` table of a configuration document
fn as_config_entry(definition: &str) -> String {
    definition
        .replacen("name = ", "[[theme]]\nname = ", 1)
        .replace("[palette]", "[theme.palette]")
        .replace("[typography.", "[theme.typography.")
        .replace("[metrics]", "[theme.metrics]")
}

#[test]
fn definition_builds_a_complete_theme() {
    let definition = ThemeDefinition::from_toml(OCEAN).unwrap();
    let theme = definition
        .build(&StaticFonts::new(["Fira Sans"]))
        .unwrap();

    assert_eq!(theme.name(), "Ocean");
    assert_eq!(theme.version(), "2.1");
    assert_eq!(theme.color(ColorToken::Primary), Color::from_hex(0x0A66C2));
    assert_eq!(theme.typography().header.family, "Fira Sans");
    assert_eq!(theme.typography().sub_header.weight, FontWeight::SEMIBOLD);
    assert_eq!(theme.metrics().corner_radius, 10.0);
}

#[test]
fn missing_typeface_is_substituted() {
    let definition = ThemeDefinition::from_toml(OCEAN).unwrap();
    let theme = definition
        .build(&StaticFonts::generic().with_fallback("serif"))
        .unwrap();
    assert_eq!(theme.typography().body.family, "serif");
    assert_eq!(theme.typography().body.size, 14.0);
}

#[test]
fn partial_definition_is_rejected() {
    let partial = OCEAN.replace("spacing_large = 20.0", "");
    assert!(matches!(
        ThemeDefinition::from_toml(&partial),
        Err(ThemeError::Parse(_))
    ));

    let bad_color = OCEAN.replace("\"#0A66C2\"", "\"ocean blue\"");
    assert!(ThemeDefinition::from_toml(&bad_color).is_err());

    let unknown_field = OCEAN.replace("[metrics]", "[metrics]\nshadow = 2.0");
    assert!(ThemeDefinition::from_toml(&unknown_field).is_err());
}

#[test]
fn negative_metric_fails_validation() {
    let negative = OCEAN.replace("border_width = 1.5", "border_width = -1.0");
    let definition = ThemeDefinition::from_toml(&negative).unwrap();
    assert!(matches!(
        definition.build(&StaticFonts::generic()),
        Err(ThemeError::InvalidMetric {
            field: "border_width",
            ..
        })
    ));
}

#[test]
fn load_config_skips_broken_definitions() {
    let broken = OCEAN
        .replace("name = \"Ocean\"", "name = \"Broken\"")
        .replace("corner_radius = 10.0", "");
    let document = format!(
        "default = \"Ocean\"\n{}\n{}",
        as_config_entry(&broken),
        as_config_entry(OCEAN)
    );

    let config = ThemeConfig::from_toml(&document).unwrap();
    assert_eq!(config.themes.len(), 2);

    let registry = ThemeRegistry::with_fonts(&StaticFonts::generic());
    let loaded = registry.load_config(&config, &StaticFonts::generic());

    assert_eq!(loaded, 1);
    assert!(!registry.contains("Broken"));
    assert_eq!(registry.current().name(), "Ocean");
}

#[test]
fn unknown_default_leaves_active_theme() {
    let document = format!("default = \"Nowhere\"\n{}", as_config_entry(OCEAN));
    let config = ThemeConfig::from_toml(&document).unwrap();
    let registry = ThemeRegistry::with_fonts(&StaticFonts::generic());

    assert_eq!(registry.load_config(&config, &StaticFonts::generic()), 1);
    assert_eq!(registry.current().name(), CorporateTheme::NAME);
}

#[test]
fn exported_theme_loads_back() {
    let corporate = CorporateTheme::new(&StaticFonts::generic()).unwrap();
    let mut config = ThemeConfig {
        default: Some(CorporateTheme::NAME.to_string()),
        ..ThemeConfig::default()
    };
    config.push(&ThemeDefinition::from_theme(&corporate)).unwrap();

    let text = config.to_toml().unwrap();
    let parsed = ThemeConfig::from_toml(&text).unwrap();
    let definitions: Vec<_> = parsed.definitions().collect::<Result<_, _>>().unwrap();

    assert_eq!(parsed.default.as_deref(), Some(CorporateTheme::NAME));
    assert_eq!(definitions.len(), 1);
    let rebuilt = definitions[0].build(&StaticFonts::generic()).unwrap();
    assert_eq!(rebuilt.palette(), corporate.palette());
    assert_eq!(rebuilt.typography(), corporate.typography());
}

#[test]
fn palette_serializes_as_hex_strings() {
    let corporate = CorporateTheme::new(&StaticFonts::generic()).unwrap();
    let json = serde_json::to_value(PaletteDefinition::from(corporate.palette())).unwrap();
    assert_eq!(json["primary"], "#1F5AA6");
    assert_eq!(json["surface"], "#FFFFFF");

    let back: PaletteDefinition = serde_json::from_value(json).unwrap();
    assert_eq!(vellum_theme::Palette::from(&back), *corporate.palette());
}

#[test]
fn registered_config_theme_is_shared() {
    let registry = ThemeRegistry::with_fonts(&StaticFonts::generic());
    let theme = ThemeDefinition::from_toml(OCEAN)
        .unwrap()
        .build(&StaticFonts::generic())
        .unwrap();
    assert!(registry.activate_theme(Rc::new(theme)));
    assert_eq!(registry.current().name(), "Ocean");
    assert_eq!(
        registry.get("Ocean").unwrap().color(ColorToken::Accent),
        Color::from_hex(0xFFB300)
    );
}
