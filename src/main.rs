//! tariff-impact-engine CLI
//!
//! Run tariff shock scenarios from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Simulate one scenario
//! tariff-impact-engine simulate --sectors sectors.json --markets markets.json \
//!     --sector STEEL --pass-through 0.6 --discount 0.5
//!
//! # Rank alternative markets for a sector
//! tariff-impact-engine rank --sectors sectors.json --markets markets.json --sector STEEL
//!
//! # Run a batch of scenarios and export the portfolio as CSV
//! tariff-impact-engine batch --sectors sectors.json --markets markets.json \
//!     --input scenarios.json
//!
//! # Generate a random catalog for testing
//! tariff-impact-engine generate --sector-count 20 --market-count 10
//! ```

use rust_decimal::Decimal;
use std::fs;
use std::process;
use tariff_impact_engine::analysis::scenario::{ScenarioInput, ScenarioResult};
use tariff_impact_engine::analysis::simulator::ScenarioSimulator;
use tariff_impact_engine::core::catalog::ScenarioCatalog;
use tariff_impact_engine::core::market::AlternativeMarket;
use tariff_impact_engine::core::sector::{SectorId, SectorRecord};
use tariff_impact_engine::portfolio::builder::PortfolioBuilder;
use tariff_impact_engine::portfolio::export::{portfolio_to_csv, PortfolioRow};
use tariff_impact_engine::simulation::catalog_gen::{generate_random_catalog, CatalogConfig};

fn print_usage() {
    eprintln!(
        r#"tariff-impact-engine — tariff shock impact simulation and market ranking

USAGE:
    tariff-impact-engine <COMMAND> [OPTIONS]

COMMANDS:
    simulate    Run one scenario for a sector
    rank        Rank alternative markets for a sector
    batch       Run a batch of scenarios and export the portfolio
    generate    Generate a random reference catalog (for testing)
    help        Show this message

OPTIONS (simulate, rank, batch):
    --sectors <FILE>       Path to JSON sector table
    --markets <FILE>       Path to JSON market table
    --format <FORMAT>      Output format: text (default), json; batch also: csv (default)

OPTIONS (simulate, rank):
    --sector <ID>          Sector identifier

OPTIONS (simulate):
    --pass-through <RATE>  Pass-through rate, fraction in [0, 1]
    --value <AMOUNT>       Exported-value override
    --discount <RATE>      Mitigation discount rate; enables the mitigation scenario

OPTIONS (batch):
    --input <FILE>         Path to JSON scenario list
    --output <FILE>        Write to file instead of stdout

OPTIONS (generate):
    --sector-count <N>     Number of sectors (default: 10)
    --market-count <N>     Number of markets (default: 8)
    --sectors-out <FILE>   Sector table output path (default: sectors.json)
    --markets-out <FILE>   Market table output path (default: markets.json)

EXAMPLES:
    tariff-impact-engine simulate --sectors sectors.json --markets markets.json \
        --sector STEEL --pass-through 0.6 --discount 0.5
    tariff-impact-engine batch --sectors sectors.json --markets markets.json \
        --input scenarios.json --output portfolio.csv"#
    );
}

// --- JSON input schemas ---

#[derive(serde::Deserialize)]
struct SectorRow {
    id: String,
    name: String,
    baseline_rate: String,
    shocked_rate: String,
    /// Semicolon-delimited safeguard measure labels.
    #[serde(default)]
    safeguard_measures: String,
    exported_value: String,
}

#[derive(serde::Deserialize)]
struct SectorsFile {
    sectors: Vec<SectorRow>,
}

#[derive(serde::Deserialize)]
struct MarketRow {
    name: String,
    average_tariff: String,
    absorption_capacity: String,
    #[serde(default)]
    notes: Option<String>,
}

#[derive(serde::Deserialize)]
struct MarketsFile {
    markets: Vec<MarketRow>,
}

#[derive(serde::Deserialize)]
struct ScenarioRow {
    sector: String,
    pass_through: String,
    #[serde(default)]
    value: Option<String>,
    #[serde(default)]
    discount: Option<String>,
}

#[derive(serde::Deserialize)]
struct ScenariosFile {
    scenarios: Vec<ScenarioRow>,
}

// --- JSON output schemas ---

#[derive(serde::Serialize)]
struct SimulateOutput {
    sector: String,
    exported_value: String,
    pass_through: String,
    baseline_impact: String,
    mitigated_impact: String,
    effective_rate: String,
    reduction_ratio: String,
    pressure_index: String,
    risk_level: String,
    recommendation: String,
    markets: Vec<RankedMarketOutput>,
}

#[derive(serde::Serialize)]
struct RankedMarketOutput {
    market: String,
    score: String,
    average_tariff: String,
    absorption_capacity: String,
}

fn simulate_output(result: &ScenarioResult) -> SimulateOutput {
    SimulateOutput {
        sector: result.sector_id().to_string(),
        exported_value: result.exported_value().to_string(),
        pass_through: result.pass_through().to_string(),
        baseline_impact: result.baseline_impact().to_string(),
        mitigated_impact: result.mitigated_impact().to_string(),
        effective_rate: result.effective_rate().to_string(),
        reduction_ratio: result.reduction_ratio().to_string(),
        pressure_index: result.exposure().pressure_index.to_string(),
        risk_level: result.exposure().risk_level.to_string(),
        recommendation: result.recommendation().to_string(),
        markets: result
            .ranked_markets()
            .iter()
            .map(|ranked| RankedMarketOutput {
                market: ranked.market.name().to_string(),
                score: ranked.score.to_string(),
                average_tariff: ranked.market.average_tariff().to_string(),
                absorption_capacity: ranked.market.absorption_capacity().to_string(),
            })
            .collect(),
    }
}

fn parse_decimal(field: &str, raw: &str) -> Decimal {
    raw.parse().unwrap_or_else(|e| {
        eprintln!("Invalid {} '{}': {}", field, raw, e);
        process::exit(1);
    })
}

fn load_catalog(sectors_path: &str, markets_path: &str) -> ScenarioCatalog {
    let sectors_content = fs::read_to_string(sectors_path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{}': {}", sectors_path, e);
        process::exit(1);
    });
    let sectors_file: SectorsFile = serde_json::from_str(&sectors_content).unwrap_or_else(|e| {
        eprintln!("Error parsing JSON in '{}': {}", sectors_path, e);
        eprintln!("Expected format:");
        eprintln!(
            r#"{{
  "sectors": [
    {{ "id": "STEEL", "name": "Flat-rolled steel", "baseline_rate": "0.05",
      "shocked_rate": "0.25", "safeguard_measures": "Section 232; Exclusion filed",
      "exported_value": "1000000" }}
  ]
}}"#
        );
        process::exit(1);
    });

    let markets_content = fs::read_to_string(markets_path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{}': {}", markets_path, e);
        process::exit(1);
    });
    let markets_file: MarketsFile = serde_json::from_str(&markets_content).unwrap_or_else(|e| {
        eprintln!("Error parsing JSON in '{}': {}", markets_path, e);
        eprintln!("Expected format:");
        eprintln!(
            r#"{{
  "markets": [
    {{ "name": "Canada", "average_tariff": "0.02", "absorption_capacity": "500000" }}
  ]
}}"#
        );
        process::exit(1);
    });

    let sectors = sectors_file
        .sectors
        .into_iter()
        .map(|row| {
            let safeguards: Vec<String> = row
                .safeguard_measures
                .split(';')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
            SectorRecord::new(
                SectorId::new(&row.id),
                &row.name,
                parse_decimal("baseline_rate", &row.baseline_rate),
                parse_decimal("shocked_rate", &row.shocked_rate),
                parse_decimal("exported_value", &row.exported_value),
            )
            .with_safeguards(safeguards)
        })
        .collect();

    let markets = markets_file
        .markets
        .into_iter()
        .map(|row| {
            let market = AlternativeMarket::new(
                &row.name,
                parse_decimal("average_tariff", &row.average_tariff),
                parse_decimal("absorption_capacity", &row.absorption_capacity),
            );
            match row.notes {
                Some(notes) => market.with_notes(notes),
                None => market,
            }
        })
        .collect();

    let catalog = ScenarioCatalog::from_records(sectors, markets).unwrap_or_else(|e| {
        eprintln!("Invalid reference data: {}", e);
        process::exit(1);
    });

    log::info!(
        "loaded catalog: {} sectors, {} markets",
        catalog.sector_count(),
        catalog.market_count()
    );
    catalog
}

struct CommonArgs {
    sectors_path: Option<String>,
    markets_path: Option<String>,
    sector: Option<String>,
    pass_through: Option<String>,
    value: Option<String>,
    discount: Option<String>,
    input: Option<String>,
    output: Option<String>,
    format: String,
}

fn parse_args(args: &[String], default_format: &str) -> CommonArgs {
    let mut parsed = CommonArgs {
        sectors_path: None,
        markets_path: None,
        sector: None,
        pass_through: None,
        value: None,
        discount: None,
        input: None,
        output: None,
        format: default_format.to_string(),
    };

    let mut take = |i: &mut usize, flag: &str| -> String {
        *i += 1;
        args.get(*i).cloned().unwrap_or_else(|| {
            eprintln!("{} requires a value", flag);
            process::exit(1);
        })
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--sectors" => parsed.sectors_path = Some(take(&mut i, "--sectors")),
            "--markets" => parsed.markets_path = Some(take(&mut i, "--markets")),
            "--sector" => parsed.sector = Some(take(&mut i, "--sector")),
            "--pass-through" => parsed.pass_through = Some(take(&mut i, "--pass-through")),
            "--value" => parsed.value = Some(take(&mut i, "--value")),
            "--discount" => parsed.discount = Some(take(&mut i, "--discount")),
            "--input" => parsed.input = Some(take(&mut i, "--input")),
            "--output" => parsed.output = Some(take(&mut i, "--output")),
            "--format" => parsed.format = take(&mut i, "--format"),
            other => {
                eprintln!("Unknown option: {}", other);
                process::exit(1);
            }
        }
        i += 1;
    }
    parsed
}

fn require(value: Option<String>, flag: &str) -> String {
    value.unwrap_or_else(|| {
        eprintln!("Error: {} is required", flag);
        process::exit(1);
    })
}

fn build_input(
    sector: &str,
    pass_through: &str,
    value: Option<&str>,
    discount: Option<&str>,
) -> ScenarioInput {
    let mut input = ScenarioInput::new(
        SectorId::new(sector),
        parse_decimal("pass-through", pass_through),
    );
    if let Some(value) = value {
        input = input.with_exported_value(parse_decimal("exported value", value));
    }
    if let Some(discount) = discount {
        input = input.with_mitigation(parse_decimal("mitigation discount", discount));
    }
    input
}

fn cmd_simulate(args: &[String]) {
    let parsed = parse_args(args, "text");
    let catalog = load_catalog(
        &require(parsed.sectors_path, "--sectors <FILE>"),
        &require(parsed.markets_path, "--markets <FILE>"),
    );
    let input = build_input(
        &require(parsed.sector, "--sector <ID>"),
        &require(parsed.pass_through, "--pass-through <RATE>"),
        parsed.value.as_deref(),
        parsed.discount.as_deref(),
    );

    let result = ScenarioSimulator::run(&catalog, &input).unwrap_or_else(|e| {
        eprintln!("Simulation failed: {}", e);
        process::exit(1);
    });

    if parsed.format == "json" {
        println!(
            "{}",
            serde_json::to_string_pretty(&simulate_output(&result)).unwrap()
        );
    } else {
        print!("{}", result);
    }
}

fn cmd_rank(args: &[String]) {
    let parsed = parse_args(args, "text");
    let catalog = load_catalog(
        &require(parsed.sectors_path, "--sectors <FILE>"),
        &require(parsed.markets_path, "--markets <FILE>"),
    );
    let sector_id = SectorId::new(require(parsed.sector, "--sector <ID>"));
    let sector = catalog.sector(&sector_id).unwrap_or_else(|e| {
        eprintln!("{}", e);
        process::exit(1);
    });

    let ranked =
        tariff_impact_engine::analysis::ranking::MarketRanker::rank(catalog.markets(), sector);

    if parsed.format == "json" {
        let rows: Vec<RankedMarketOutput> = ranked
            .iter()
            .map(|r| RankedMarketOutput {
                market: r.market.name().to_string(),
                score: r.score.to_string(),
                average_tariff: r.market.average_tariff().to_string(),
                absorption_capacity: r.market.absorption_capacity().to_string(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows).unwrap());
    } else {
        println!("Markets ranked for sector {} (shocked rate {}):", sector_id, sector.shocked_rate());
        for (i, r) in ranked.iter().enumerate() {
            println!(
                "  {}. {}  score {}  tariff {}  capacity {}",
                i + 1,
                r.market.name(),
                r.score,
                r.market.average_tariff(),
                r.market.absorption_capacity()
            );
        }
        if ranked.is_empty() {
            println!("  (no markets in catalog)");
        }
    }
}

fn cmd_batch(args: &[String]) {
    let parsed = parse_args(args, "csv");
    let catalog = load_catalog(
        &require(parsed.sectors_path, "--sectors <FILE>"),
        &require(parsed.markets_path, "--markets <FILE>"),
    );
    let input_path = require(parsed.input, "--input <FILE>");

    let content = fs::read_to_string(&input_path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{}': {}", input_path, e);
        process::exit(1);
    });
    let file: ScenariosFile = serde_json::from_str(&content).unwrap_or_else(|e| {
        eprintln!("Error parsing JSON in '{}': {}", input_path, e);
        eprintln!("Expected format:");
        eprintln!(
            r#"{{
  "scenarios": [
    {{ "sector": "STEEL", "pass_through": "0.6", "discount": "0.5" }}
  ]
}}"#
        );
        process::exit(1);
    });

    let mut portfolio = PortfolioBuilder::new();
    for row in &file.scenarios {
        let input = build_input(
            &row.sector,
            &row.pass_through,
            row.value.as_deref(),
            row.discount.as_deref(),
        );
        match ScenarioSimulator::run(&catalog, &input) {
            Ok(result) => portfolio.add(result),
            // A failed scenario aborts that request only; the rest of the
            // batch still runs.
            Err(e) => eprintln!("Skipping scenario for '{}': {}", row.sector, e),
        }
    }

    log::info!("batch complete: {} results", portfolio.len());

    let rendered = if parsed.format == "json" {
        let rows: Vec<PortfolioRow> = portfolio
            .export()
            .iter()
            .map(PortfolioRow::from_result)
            .collect();
        serde_json::to_string_pretty(&rows).unwrap()
    } else {
        portfolio_to_csv(&portfolio)
    };

    if let Some(path) = parsed.output {
        fs::write(&path, &rendered).unwrap_or_else(|e| {
            eprintln!("Error writing to '{}': {}", path, e);
            process::exit(1);
        });
        eprintln!("Wrote {} rows → {}", portfolio.len(), path);
    } else {
        print!("{}", rendered);
    }
}

fn cmd_generate(args: &[String]) {
    let mut sector_count = 10usize;
    let mut market_count = 8usize;
    let mut sectors_out = "sectors.json".to_string();
    let mut markets_out = "markets.json".to_string();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--sector-count" => {
                i += 1;
                sector_count = args.get(i).and_then(|s| s.parse().ok()).unwrap_or_else(|| {
                    eprintln!("--sector-count requires a number");
                    process::exit(1);
                });
            }
            "--market-count" => {
                i += 1;
                market_count = args.get(i).and_then(|s| s.parse().ok()).unwrap_or_else(|| {
                    eprintln!("--market-count requires a number");
                    process::exit(1);
                });
            }
            "--sectors-out" => {
                i += 1;
                sectors_out = args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--sectors-out requires a file path");
                    process::exit(1);
                });
            }
            "--markets-out" => {
                i += 1;
                markets_out = args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--markets-out requires a file path");
                    process::exit(1);
                });
            }
            other => {
                eprintln!("Unknown option: {}", other);
                process::exit(1);
            }
        }
        i += 1;
    }

    let config = CatalogConfig {
        sector_count,
        market_count,
        ..Default::default()
    };
    let catalog = generate_random_catalog(&config).unwrap_or_else(|e| {
        eprintln!("Generation failed: {}", e);
        process::exit(1);
    });

    #[derive(serde::Serialize)]
    struct SectorOut {
        id: String,
        name: String,
        baseline_rate: String,
        shocked_rate: String,
        safeguard_measures: String,
        exported_value: String,
    }

    #[derive(serde::Serialize)]
    struct SectorsOut {
        sectors: Vec<SectorOut>,
    }

    #[derive(serde::Serialize)]
    struct MarketOut {
        name: String,
        average_tariff: String,
        absorption_capacity: String,
    }

    #[derive(serde::Serialize)]
    struct MarketsOut {
        markets: Vec<MarketOut>,
    }

    let sectors = SectorsOut {
        sectors: catalog
            .sectors()
            .map(|s| SectorOut {
                id: s.id().to_string(),
                name: s.name().to_string(),
                baseline_rate: s.baseline_rate().to_string(),
                shocked_rate: s.shocked_rate().to_string(),
                safeguard_measures: s.safeguard_measures().join("; "),
                exported_value: s.exported_value().to_string(),
            })
            .collect(),
    };
    let markets = MarketsOut {
        markets: catalog
            .markets()
            .iter()
            .map(|m| MarketOut {
                name: m.name().to_string(),
                average_tariff: m.average_tariff().to_string(),
                absorption_capacity: m.absorption_capacity().to_string(),
            })
            .collect(),
    };

    fs::write(
        &sectors_out,
        serde_json::to_string_pretty(&sectors).unwrap(),
    )
    .unwrap_or_else(|e| {
        eprintln!("Error writing to '{}': {}", sectors_out, e);
        process::exit(1);
    });
    fs::write(
        &markets_out,
        serde_json::to_string_pretty(&markets).unwrap(),
    )
    .unwrap_or_else(|e| {
        eprintln!("Error writing to '{}': {}", markets_out, e);
        process::exit(1);
    });

    eprintln!(
        "Generated {} sectors → {}, {} markets → {}",
        sector_count, sectors_out, market_count, markets_out
    );
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let command = args[1].as_str();
    let rest = &args[2..];

    match command {
        "simulate" => cmd_simulate(rest),
        "rank" => cmd_rank(rest),
        "batch" => cmd_batch(rest),
        "generate" => cmd_generate(rest),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            process::exit(1);
        }
    }
}
