use std::path::Path;

use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["hardal-cli"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_check_delivery_command() {
    let cli = Cli::try_parse_from([
        "hardal-cli",
        "check-delivery",
        "--address",
        "Möllner Landstraße 3",
        "--city",
        "Hamburg",
        "--postal-code",
        "22111",
    ])
    .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::CheckDelivery {
            ref address,
            ref city,
            ref postal_code,
        }) if address == "Möllner Landstraße 3" && city == "Hamburg" && postal_code == "22111"
    ));
}

#[test]
fn check_delivery_city_defaults_to_hamburg() {
    let cli = Cli::try_parse_from([
        "hardal-cli",
        "check-delivery",
        "--address",
        "Rathausmarkt 1",
        "--postal-code",
        "20095",
    ])
    .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::CheckDelivery { ref city, .. }) if city == "Hamburg"
    ));
}

#[test]
fn check_delivery_requires_postal_code() {
    let result = Cli::try_parse_from([
        "hardal-cli",
        "check-delivery",
        "--address",
        "Rathausmarkt 1",
    ]);
    assert!(result.is_err());
}

#[test]
fn parses_zone_with_explicit_path() {
    let cli = Cli::try_parse_from(["hardal-cli", "zone", "--zone-path", "config/zone.yaml"])
        .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Zone { zone_path: Some(ref p) }) if p == Path::new("config/zone.yaml")
    ));
}

#[test]
fn run_zone_without_override_succeeds() {
    check::run_zone(None).expect("built-in area should print");
}

#[test]
fn run_zone_with_missing_file_fails() {
    assert!(check::run_zone(Some(Path::new("/nonexistent/zone.yaml"))).is_err());
}
