mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    cli::run()
}
