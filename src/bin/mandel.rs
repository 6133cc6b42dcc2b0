use env_logger::Env;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = mandel_viewer::ViewerConfig::default();
    let presenter_factory = mandel_viewer::PixelsPresenterFactory::new();
    let command = mandel_viewer::RunGuiCommand::new(presenter_factory, config);

    if let Err(e) = command.execute() {
        println!("{}", e);
        log::error!("viewer exited at start-up: {}", e);
        std::process::exit(-1);
    }
}
