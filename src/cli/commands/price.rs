//! `bomcost price` - the pricing run

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::bom::read_bom;
use crate::catalog::{CatalogClient, DiskCache};
use crate::classify::classify;
use crate::cli::args::PriceArgs;
use crate::config;
use crate::report::{grand_total, sort_by_total, table, PartRecord};

pub fn run(args: PriceArgs) -> Result<()> {
    let lines = read_bom(&args.bom).into_diagnostic()?;

    let cache = DiskCache::open(config::cache_dir().into_diagnostic()?).into_diagnostic()?;
    let client = CatalogClient::new(
        args.client_id,
        args.client_secret,
        config::base_url(),
        cache,
    )
    .into_diagnostic()?;

    let mut records = Vec::with_capacity(lines.len());
    for line in &lines {
        let class = classify(&line.comment, &line.part_id).into_diagnostic()?;
        let mut record = PartRecord::from_line(line, &class);

        if let Some(mpn) = class.lookup_mpn() {
            let order_quantity = line.quantity() * args.boards;
            let info = client.resolve(mpn, order_quantity).into_diagnostic()?;
            record.apply_product(info, order_quantity);
        }

        records.push(record);
    }

    sort_by_total(&mut records);
    println!("{}", table::render(&records));

    let total = grand_total(&records);
    let per_board = total / args.boards as f64;
    println!(
        "{}: ${:.2} (${:.2}/board * {} boards)",
        style("Total Price").bold(),
        total,
        per_board,
        args.boards
    );

    if let Some(sheet_path) = args.sheet {
        crate::report::sheet::write_sheet(&sheet_path, &records).into_diagnostic()?;
        println!(
            "Wrote {} to {}",
            style("CM spreadsheet").bold(),
            style(sheet_path.display()).cyan()
        );
    }

    Ok(())
}
