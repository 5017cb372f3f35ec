fn main() {
    if let Err(err) = nota_gui::run() {
        eprintln!("nota failed to start: {}", err);
        std::process::exit(1);
    }
}
