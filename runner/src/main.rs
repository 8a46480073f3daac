use fnref_runner::{build_cli, execute, init_tracing};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let matches = build_cli().get_matches();
    let code = execute(&matches, &mut std::io::stdout().lock())?;

    std::process::exit(code);
}
