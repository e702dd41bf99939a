//! Print the insertion plan of every catalog example.
//!
//! Usage:
//!   cargo run -p eulerplan --example catalog_plans -- [innermost|piercing]

use eulerplan::catalog::EXAMPLES;
use eulerplan::prelude::*;

fn main() {
    let strategy = std::env::args()
        .nth(1)
        .map(|s| s.parse::<StrategyType>())
        .unwrap_or(Ok(StrategyType::Innermost));
    let strategy = match strategy {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };
    for (name, text) in EXAMPLES {
        let d = Description::from_informal(text);
        match plan(&d, PlanCfg { strategy }) {
            Ok(p) => {
                println!("{name} ({}):", strategy.ui_name());
                for step in &p.recomposition {
                    let data = step.data();
                    println!(
                        "  + {} splits {} zone(s)",
                        data.added_curve,
                        data.split_zones.len()
                    );
                }
            }
            Err(e) => eprintln!("{name}: {e}"),
        }
    }
}
