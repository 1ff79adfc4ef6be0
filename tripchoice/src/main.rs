use clap::Parser;
use tripchoice::app::ConstantsApp;

fn main() {
    env_logger::init();
    let args = ConstantsApp::parse();
    match args.op.run() {
        Ok(output) => println!("{output}"),
        Err(e) => {
            log::error!("tripchoice failed: {e}");
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
