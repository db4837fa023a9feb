//! Command-line interface for the `tplscore` application.
//!
//! This binary is a thin entry point; argument handling and output live in
//! the `tplscore` library crate.

fn main() -> anyhow::Result<()> {
    tplscore::run()
}
