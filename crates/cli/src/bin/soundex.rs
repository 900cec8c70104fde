use anyhow::Result;

fn main() -> Result<()> {
    soundex_cli::main_entry()
}
