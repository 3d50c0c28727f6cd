fn main() {
    if let Err(err) = graph_legend::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
