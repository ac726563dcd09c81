//! `pathviz`: interactive A* visualizer in the terminal.

use pathviz_term::Config;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_args(std::env::args().skip(1))?;
    pathviz_term::run(config)?;
    Ok(())
}
