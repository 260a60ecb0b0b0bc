use isovistfix::cli::{self, Tool};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    cli::run(Tool::FeatureJoiner)
}
