//! Demo binary that walks through every dialog kind.
mod app;

use anyhow::Result;

fn main() -> Result<()> {
    app::launch()
}
