//! Coupon generator CLI.
//!
//! Builds a reduced-system coupon over a bundled demo round and prints
//! the hedge assignment, the rows, and the cost/EV summary. Useful for
//! eyeballing system behavior without any upstream services.

mod config;

use clap::Parser;
use engine::{CouponBundle, CouponEngine, CouponRequest};
use serde_json::json;
use types::{Cash, CoverageExtension, MatchId, SystemCatalog};

/// Reduced covering systems for 1X2 pool-betting coupons.
#[derive(Parser, Debug)]
#[command(name = "tipscoupon")]
#[command(about = "Generate reduced-system coupons over a demo round")]
#[command(version)]
struct Args {
    /// System id from the catalog.
    #[arg(long, env = "TIPS_SYSTEM", default_value = "R-3-2-36")]
    system: String,

    /// Pool size: 13 for the standard pools, 8 for the compact pool.
    #[arg(long, env = "TIPS_POOL", default_value_t = 13)]
    pool: usize,

    /// Stake per row in whole currency units.
    #[arg(long, env = "TIPS_STAKE", default_value_t = 1.0)]
    stake: f64,

    /// Optional total-cost ceiling; triggers budget degradation.
    #[arg(long, env = "TIPS_CEILING")]
    ceiling: Option<f64>,

    /// Apply a full coverage extension to this match number (repeatable).
    #[arg(long = "extend")]
    extend: Vec<u32>,

    /// Print the coupon as JSON instead of a table.
    #[arg(long)]
    json: bool,

    /// List the available systems and exit.
    #[arg(long)]
    list_systems: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = Args::parse();
    let catalog = SystemCatalog::builtin();

    if args.list_systems {
        for def in catalog.definitions() {
            println!(
                "{:<12} h={} v={} rows<={} guarantee={}",
                def.id,
                def.shape.three_way,
                def.shape.two_way,
                def.shape.row_budget,
                def.shape.guarantee_level
            );
        }
        return;
    }

    let (labels, forecasts) = config::demo_round(args.pool);

    let mut request = CouponRequest::new(&args.system).with_stake(Cash::from_float(args.stake));
    if let Some(ceiling) = args.ceiling {
        request = request.with_cost_ceiling(Cash::from_float(ceiling));
    }
    for match_number in &args.extend {
        request = request.with_extension(CoverageExtension::full(MatchId(*match_number)));
    }

    let bundle = match CouponEngine::new(catalog).build(&forecasts, &request, None) {
        Ok(bundle) => bundle,
        Err(error) => {
            eprintln!("error: {error}");
            std::process::exit(1);
        }
    };

    if args.json {
        print_json(&bundle);
    } else {
        print_table(&labels, &bundle);
    }
}

fn print_json(bundle: &CouponBundle) {
    let payload = json!({
        "system": bundle.system_id,
        "rows": bundle.rows.iter().map(|r| r.signs()).collect::<Vec<_>>(),
        "row_count": bundle.summary.row_count,
        "total_cost": bundle.summary.total_cost.to_float(),
        "mean_expected_value": bundle.summary.mean_expected_value,
        "within_ceiling": bundle.within_ceiling,
    });
    println!("{payload:#}");
}

fn print_table(labels: &[String], bundle: &CouponBundle) {
    println!("System {}", bundle.system_id);
    println!();

    for (position, label) in labels.iter().enumerate() {
        let match_id = MatchId(position as u32 + 1);
        let pick = if let Some(symbol) = bundle.assignment.single_symbol(match_id) {
            symbol.to_string()
        } else if bundle.assignment.three_way.contains(&match_id) {
            "1X2".to_string()
        } else if let Some(hedge) = bundle
            .assignment
            .two_way
            .iter()
            .find(|h| h.match_id == match_id)
        {
            format!("{}{}", hedge.symbols[0], hedge.symbols[1])
        } else {
            "-".to_string()
        };
        println!("{:>2}. {:<24} {}", position + 1, label, pick);
    }

    println!();
    for (number, row) in bundle.rows.iter().enumerate() {
        println!("{:>4}  {}", number + 1, row.signs());
    }

    println!();
    println!(
        "{} rows, total {}, mean EV {:+.1}%",
        bundle.summary.row_count, bundle.summary.total_cost, bundle.summary.mean_expected_value
    );
    if !bundle.within_ceiling {
        println!("ceiling unreachable; minimum achievable cost shown");
    }
    if bundle.degraded_reduction {
        println!("note: covering reduction was truncated (op ceiling)");
    }
}
