use super::*;

#[test]
fn parses_locate_with_single_brand() {
    let cli = Cli::try_parse_from(["cafescout", "locate", "--brand", "tim-hortons"])
        .expect("expected valid cli args");

    match cli.command {
        Commands::Locate {
            brands,
            near,
            radius_km,
            format,
            dry_run,
        } => {
            assert_eq!(brands, ["tim-hortons"]);
            assert!(near.is_none());
            assert!(radius_km.is_none());
            assert_eq!(format, OutputFormat::Table);
            assert!(!dry_run);
        }
        Commands::Brands => panic!("expected locate command"),
    }
}

#[test]
fn repeated_brand_flags_keep_selection_order() {
    let cli = Cli::try_parse_from([
        "cafescout",
        "locate",
        "--brand",
        "starbucks",
        "--brand",
        "tim-hortons",
    ])
    .expect("expected valid cli args");

    match cli.command {
        Commands::Locate { brands, .. } => assert_eq!(brands, ["starbucks", "tim-hortons"]),
        Commands::Brands => panic!("expected locate command"),
    }
}

#[test]
fn locate_without_brand_is_rejected_before_any_work() {
    let result = Cli::try_parse_from(["cafescout", "locate"]);
    assert!(result.is_err(), "at least one --brand is required");
}

#[test]
fn parses_near_coordinate_pair() {
    let cli = Cli::try_parse_from([
        "cafescout",
        "locate",
        "--brand",
        "tim-hortons",
        "--near",
        "43.6532,-79.3832",
    ])
    .expect("expected valid cli args");

    match cli.command {
        Commands::Locate { near, .. } => {
            let point = near.expect("near should be set");
            assert!((point.lat - 43.6532).abs() < 1e-9);
            assert!((point.lon - -79.3832).abs() < 1e-9);
        }
        Commands::Brands => panic!("expected locate command"),
    }
}

#[test]
fn rejects_malformed_near() {
    let result = Cli::try_parse_from([
        "cafescout",
        "locate",
        "--brand",
        "tim-hortons",
        "--near",
        "downtown",
    ]);
    assert!(result.is_err());
}

#[test]
fn rejects_out_of_range_near_latitude() {
    let result = Cli::try_parse_from([
        "cafescout",
        "locate",
        "--brand",
        "tim-hortons",
        "--near",
        "95.0,-79.38",
    ]);
    assert!(result.is_err());
}

#[test]
fn parses_radius_and_geojson_format() {
    let cli = Cli::try_parse_from([
        "cafescout",
        "locate",
        "--brand",
        "tim-hortons",
        "--near",
        "43.65,-79.38",
        "--radius-km",
        "5",
        "--format",
        "geojson",
    ])
    .expect("expected valid cli args");

    match cli.command {
        Commands::Locate {
            radius_km, format, ..
        } => {
            assert!((radius_km.unwrap() - 5.0).abs() < f64::EPSILON);
            assert_eq!(format, OutputFormat::Geojson);
        }
        Commands::Brands => panic!("expected locate command"),
    }
}

#[test]
fn parses_dry_run_flag() {
    let cli = Cli::try_parse_from(["cafescout", "locate", "--brand", "tim-hortons", "--dry-run"])
        .expect("expected valid cli args");

    match cli.command {
        Commands::Locate { dry_run, .. } => assert!(dry_run),
        Commands::Brands => panic!("expected locate command"),
    }
}

#[test]
fn parses_brands_command() {
    let cli = Cli::try_parse_from(["cafescout", "brands"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::Brands));
}

#[test]
fn missing_subcommand_is_an_error() {
    assert!(Cli::try_parse_from(["cafescout"]).is_err());
}
