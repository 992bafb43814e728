//! Nest command implementation

use crate::cli::NestArgs;
use crate::error::{Result, invalid_argument};
use crate::grouping::nest_column;

/// Run nest command, printing the new order comma separated
pub fn run(args: &NestArgs) -> Result<()> {
    if !args.order.contains(&args.inner) {
        return Err(invalid_argument(format!(
            "column '{}' is not in the order",
            args.inner
        )));
    }

    println!("{}", nest_column(&args.order, &args.outer, &args.inner).join(","));
    Ok(())
}
