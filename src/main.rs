use comparison::{hasher_from_env, run, Command};

fn main() {
    // CLI mínima: `comparison hash <json>` | `comparison equivalent <json> <json>`
    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = Command::parse(&args).and_then(|command| {
                                          let hasher = hasher_from_env()?;
                                          run(&command, &hasher)
                                      });
    match result {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("[comparison] {e}");
            std::process::exit(e.exit_code());
        }
    }
}
