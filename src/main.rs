use anyhow::{Context, Result};
use human_panic::setup_panic;

use ext_convert::prelude::*;
use ext_convert::workflow::report::{print_outcomes, print_start};

fn main() -> Result<()> {
    setup_panic!();

    let matches = get_matches();
    init_logger(get_verbosity(&matches), &get_log_file(&matches))
        .context("Failed to initialise logging")?;

    let options = get_conversion_options(&matches)?;

    print_start(&options);
    let outcomes = convert_all(&options)?;
    print_outcomes(&outcomes);

    Ok(())
}
