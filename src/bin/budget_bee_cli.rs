use budget_bee::{
    cli::{output, run_cli},
    init,
};

fn main() {
    init();

    if let Err(err) = run_cli() {
        output::error(format!("Error: {err}"));
        std::process::exit(1);
    }
}
